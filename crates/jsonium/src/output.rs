use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};

pub fn print_json(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut out = io::stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Progress line on stderr, shown with --verbose
pub fn status(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{} {}", "→".cyan(), message);
    }
}

/// Completion line on stderr, shown with --verbose
pub fn success(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{} {}", "✓".green().bold(), message);
    }
}
