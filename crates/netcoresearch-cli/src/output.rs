//! Console output: results on stdout, errors in red on stderr

use colored::Colorize;

/// Force colors off (or leave detection to the terminal and NO_COLOR)
pub fn configure_color(enabled: Option<bool>) {
    if enabled == Some(false) {
        colored::control::set_override(false);
    }
}

pub fn write_output_line(text: &str) {
    println!("{}", text);
}

/// Print an error and its cause chain
pub fn write_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err.to_string().red());
    for cause in err.chain().skip(1) {
        eprintln!("  Caused by: {}", cause);
    }
}
