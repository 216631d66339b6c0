use contracts::dashboards::d400_country_explorer::table::{Cell, NO_DATA_MARKER};

/// Formats a byte count with dot thousands separators, e.g. `1.234.567`
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Renders a ratio value as a two-decimal percentage string.
///
/// A missing value always renders as the "No Data" marker.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v),
        _ => NO_DATA_MARKER.to_string(),
    }
}

/// Cell for a value, honouring the indicator's display mode
pub fn to_cell(value: Option<f64>, is_percentage: bool) -> Cell {
    if is_percentage {
        return Cell::FormattedText(format_percentage(value));
    }
    match value {
        Some(v) => Cell::Number(v),
        None => Cell::Missing,
    }
}

/// Year label without thousands separators
pub fn format_year(year: i32) -> String {
    year.to_string()
}
