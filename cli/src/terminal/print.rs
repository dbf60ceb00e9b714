use colored::*;
use unicode_width::UnicodeWidthStr;

const TOTAL_WIDTH: usize = 64;

/// Prints a centered section header. The inventory tree below it stays
/// uncolored; only the chrome is.
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_width: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_width);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

/// Prints a one-line status message with the `>` marker.
pub fn status(msg: &str) {
    println!("{} {}", ">".bright_black(), msg);
}
