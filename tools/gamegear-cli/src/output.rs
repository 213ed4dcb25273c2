//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize + ?Sized>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", truncate(col, *width), width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a table rule under a header row.
    pub fn table_rule(&self, widths: &[usize]) {
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        self.info(&"-".repeat(total));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(template);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Stock level colored for the product tables.
pub fn stock_badge(stock: u32, low_stock_threshold: u32) -> String {
    let label = if stock == 0 {
        "Out of stock".to_string()
    } else {
        format!("{} in stock", stock)
    };

    if stock == 0 {
        style(label).red().to_string()
    } else if stock < low_stock_threshold {
        style(label).yellow().to_string()
    } else {
        style(label).green().to_string()
    }
}

/// Cut a cell to `width` characters, marking the cut with an ellipsis.
///
/// Width is measured without color escape codes.
pub fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    console::truncate_str(text, width, "…").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Gaming Chair", 20), "Gaming Chair");
        assert_eq!(truncate("Immersive Gaming Headset", 10), "Immersive…");
        assert_eq!(truncate("abc", 0), "abc");
    }

    #[test]
    fn test_truncate_styled_cell() {
        let cell = console::style("Immersive Gaming Headset")
            .red()
            .force_styling(true)
            .to_string();
        let cut = truncate(&cell, 10);

        assert_eq!(console::measure_text_width(&cut), 10);
        assert!(cut.contains('\u{1b}'));
        assert_eq!(console::strip_ansi_codes(&cut), "Immersive…");
    }

    #[test]
    fn test_stock_badge_text() {
        console::set_colors_enabled(false);
        assert_eq!(stock_badge(0, 5), "Out of stock");
        assert_eq!(stock_badge(4, 5), "4 in stock");
    }
}
