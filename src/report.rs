use cantina::{CountryStat, FilteredView, ProducerEntry, ViewSummary, is_vegan};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub use ansi::Palette;

pub fn print_view(view: &FilteredView, summary: &ViewSummary, limit: usize, palette: &Palette) {
    println!("\n{}", palette.paint("━━━ Records ━━━", ansi::GRAY));

    if view.is_empty() {
        // An empty view is a valid result, not a fault.
        println!("{}", palette.dim("  No results"));
    }

    for record in view.page(0, limit) {
        let marker = if is_vegan(&record.label) {
            palette.paint("✓ vegan", ansi::GREEN)
        } else {
            palette.dim("  —")
        };
        println!(
            "  {} {} {} {}",
            palette.bold(&record.name),
            palette.dim("│"),
            palette.paint(&record.producer, ansi::CYAN),
            palette.paint(format!("({})", record.origin), ansi::YELLOW),
        );
        println!("      {} {}", marker, palette.dim(&record.label));
    }

    if limit != 0 && view.len() > limit {
        println!("  {}", palette.dim(format!("... +{} more (raise --limit to see them)", view.len() - limit)));
    }

    println!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    let percentage = if summary.total == 0 { 0.0 } else { summary.vegan as f64 / summary.total as f64 * 100.0 };
    println!(
        "  Total: {}  │  Vegan: {} {}{}",
        palette.paint(summary.total.to_string(), ansi::BLUE),
        palette.paint(summary.vegan.to_string(), ansi::GREEN),
        palette.dim(format!("({percentage:.1}%)")),
        match &summary.country {
            Some(country) => format!("  │  Country: {}", palette.paint(country, ansi::YELLOW)),
            None => String::new(),
        }
    );
}

pub fn print_stats(stats: &[CountryStat], palette: &Palette) {
    println!("\n{}", palette.paint("━━━ Vegan statistics by country ━━━", ansi::GRAY));
    if stats.is_empty() {
        println!("{}", palette.dim("  Empty catalog"));
        return;
    }

    for stat in stats {
        println!(
            "  {} {} {} {} {}",
            palette.paint(&stat.country, ansi::CYAN),
            palette.dim(format!("total: {}", stat.total)),
            palette.dim("│"),
            palette.paint(format!("vegan: {}", stat.vegan_count), ansi::GREEN),
            palette.paint(format!("({:.1}%)", stat.vegan_percentage), ansi::YELLOW),
        );
    }
}

pub fn print_producers(producers: &[ProducerEntry], palette: &Palette) {
    println!("\n{}", palette.paint("━━━ All-vegan producers ━━━", ansi::GRAY));
    if producers.is_empty() {
        println!("{}", palette.dim("  No producer has 2+ records, all vegan"));
        return;
    }

    for entry in producers {
        println!(
            "  {} {} {} {}",
            palette.bold(&entry.producer_name),
            palette.dim("│"),
            palette.paint(&entry.country, ansi::YELLOW),
            palette.dim(format!("{} wines", entry.wine_count)),
        );
    }
}

pub fn print_countries(countries: &[String], palette: &Palette) {
    println!("\n{}", palette.paint("━━━ Countries ━━━", ansi::GRAY));
    for country in countries {
        println!("  {}", palette.paint(country, ansi::CYAN));
    }
}
