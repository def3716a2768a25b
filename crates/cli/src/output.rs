//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format a rate with K/M suffixes
pub fn format_rate(ops_per_second: f64) -> String {
    if ops_per_second >= 1_000_000.0 {
        format!("{:.2}M ops/s", ops_per_second / 1_000_000.0)
    } else if ops_per_second >= 1000.0 {
        format!("{:.2}K ops/s", ops_per_second / 1000.0)
    } else {
        format!("{:.0} ops/s", ops_per_second)
    }
}

/// Format a latency in ms, switching to seconds past 1000ms
pub fn format_latency(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        format!("{:.1}ms", ms)
    }
}

/// Format a storage size given in GB
pub fn format_storage_gb(gb: f64) -> String {
    const TB: f64 = 1024.0;
    const PB: f64 = 1024.0 * 1024.0;

    if gb >= PB {
        format!("{:.2} PB", gb / PB)
    } else if gb >= TB {
        format!("{:.2} TB", gb / TB)
    } else {
        format!("{:.0} GB", gb)
    }
}

/// Format a monthly dollar amount
pub fn format_currency(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", group_thousands(amount))
    } else {
        format!("${:.2}", amount)
    }
}

fn group_thousands(amount: f64) -> String {
    let digits = format!("{:.0}", amount.abs());
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Color a utilization percentage: green under 80, yellow to 100, red above
pub fn color_utilization(percent: f64) -> String {
    let formatted = format!("{:.1}%", percent);
    if percent > 100.0 {
        formatted.red().to_string()
    } else if percent > 80.0 {
        formatted.yellow().to_string()
    } else {
        formatted.green().to_string()
    }
}
