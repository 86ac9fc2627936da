mod report;

use std::io::{self, IsTerminal};

use cantina::{
    AdvancedQuery, CatalogStore, QuickQuery, SearchScope, global_stats, load_catalog, summarize, vegan_only_producers,
};

const DEFAULT_LIMIT: usize = 10;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let outcome = match load_catalog(&config.catalog_path) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let palette = report::Palette::new(config.color);
    if outcome.skipped > 0 {
        eprintln!("note: skipped {} malformed record(s)", outcome.skipped);
    }

    let mut store = CatalogStore::new(outcome.catalog);

    if config.list_countries {
        report::print_countries(&store.countries(), &palette);
        return;
    }

    match &config.mode {
        QueryMode::Quick(query) => store.apply_quick(query),
        QueryMode::Advanced(query) => store.apply_advanced(query),
    }

    if config.show_stats {
        report::print_stats(&global_stats(store.catalog()), &palette);
    }
    if config.show_producers {
        report::print_producers(&vegan_only_producers(store.catalog()), &palette);
    }
    if !config.show_stats && !config.show_producers {
        let summary = summarize(store.view());
        report::print_view(store.view(), &summary, config.limit, &palette);
    }
}

enum QueryMode {
    Quick(QuickQuery),
    Advanced(AdvancedQuery),
}

struct CliConfig {
    catalog_path: String,
    mode: QueryMode,
    show_stats: bool,
    show_producers: bool,
    list_countries: bool,
    limit: usize,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut catalog_path: Option<String> = None;
    let mut search: Option<String> = None;
    let mut scope = SearchScope::All;
    let mut country = String::new();
    let mut vegan_only = false;
    let mut adv_name = String::new();
    let mut adv_producer = String::new();
    let mut show_stats = false;
    let mut show_producers = false;
    let mut list_countries = false;
    let mut limit = DEFAULT_LIMIT;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("cantina {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--vegan-only" => vegan_only = true,
            "--stats" => show_stats = true,
            "--producers" => show_producers = true,
            "--countries" => list_countries = true,
            "-c" | "--catalog" => {
                let value = args.next().ok_or_else(|| "error: --catalog expects a value".to_string())?;
                catalog_path = Some(value);
            }
            "-s" | "--scope" => {
                let value = args.next().ok_or_else(|| "error: --scope expects a value".to_string())?;
                scope = value.parse().map_err(|err| format!("error: {err}"))?;
            }
            "--country" => {
                country = args.next().ok_or_else(|| "error: --country expects a value".to_string())?;
            }
            "--name" => {
                adv_name = args.next().ok_or_else(|| "error: --name expects a value".to_string())?;
            }
            "--producer" => {
                adv_producer = args.next().ok_or_else(|| "error: --producer expects a value".to_string())?;
            }
            "--limit" => {
                let value = args.next().ok_or_else(|| "error: --limit expects a value".to_string())?;
                limit = value.parse().map_err(|_| format!("error: invalid --limit '{value}'"))?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if search.is_some() {
                        return Err("error: search text provided multiple times".to_string());
                    }
                    search = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--catalog=") => {
                catalog_path = Some(arg.trim_start_matches("--catalog=").to_string());
            }
            _ if arg.starts_with("--scope=") => {
                scope = arg.trim_start_matches("--scope=").parse().map_err(|err| format!("error: {err}"))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if search.is_some() {
                    return Err("error: search text provided multiple times".to_string());
                }
                search = Some(rest);
                break;
            }
        }
    }

    let catalog_path = catalog_path.ok_or_else(|| format!("error: --catalog is required\n\n{}", help_text()))?;

    let advanced = !adv_name.is_empty() || !adv_producer.is_empty();
    if advanced && search.is_some() {
        return Err("error: free-text search cannot be combined with --name/--producer".to_string());
    }

    let mode = if advanced {
        QueryMode::Advanced(AdvancedQuery { name: adv_name, producer: adv_producer, country, vegan: vegan_only })
    } else {
        QueryMode::Quick(QuickQuery { search: search.unwrap_or_default(), scope, country, vegan_only })
    };

    Ok(CliConfig { catalog_path, mode, show_stats, show_producers, list_countries, limit, color })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "cantina {version}

Wine catalog query and aggregation CLI.

Usage:
  cantina --catalog <file> [OPTIONS] [--] [search text...]
  cantina --catalog <file> --name <text> --producer <text>

Options:
  -c, --catalog <file>       Catalog file (JSON array of records). Required.
  -s, --scope <scope>        Quick-search scope: all, name or producer.
                             Default: all (name OR producer).
      --country <name>       Keep records with this exact origin.
      --vegan-only           Keep only vegan-classified records.
      --name <text>          Advanced search: substring on the wine name.
      --producer <text>      Advanced search: substring on the producer.
                             --name and --producer are ANDed together.
      --stats                Print per-country vegan statistics and exit.
      --producers            Print all-vegan producers and exit.
      --countries            Print the catalog's country list and exit.
      --limit <n>            Rows to show (0 = all). Default: {default_limit}.
      --color                Force ANSI color output.
      --no-color             Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error (unreadable or malformed catalog file).
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        default_limit = DEFAULT_LIMIT
    )
}
