//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

/// Render a float the way the dataset stores it: integral values keep a
/// trailing ".0" (`1992.0`), others print as is.
pub fn format_float(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

/// Two aligned columns: label on the left, value on the right.
pub fn format_counts<L: AsRef<str>, V: ToString>(rows: &[(L, V)]) -> String {
    let label_w = rows.iter().map(|(l, _)| l.as_ref().width()).max().unwrap_or(0);
    let values: Vec<String> = rows.iter().map(|(_, v)| v.to_string()).collect();
    let value_w = values.iter().map(|v| v.width()).max().unwrap_or(0);

    rows.iter()
        .zip(values.iter())
        .map(|((l, _), v)| format!("{}    {}", pad_right(l.as_ref(), label_w), pad_left(v, value_w)))
        .collect::<Vec<_>>()
        .join("\n")
}
