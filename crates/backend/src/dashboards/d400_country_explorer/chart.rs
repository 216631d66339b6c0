use contracts::dashboards::d400_country_explorer::dto::{
    ChartKind, ChartPoint, ChartSpec, TableView, TableViewRow, YearRange,
};
use contracts::dashboards::d400_country_explorer::table::{AlignedTable, AlignmentWindow};

use crate::shared::format::format_year;

pub const YEAR_FIELD: &str = "Year";
pub const COUNTRY_FIELD: &str = "Country";

/// Y axis label, depending on how the indicator is displayed
pub fn value_field(is_percentage: bool) -> &'static str {
    if is_percentage {
        "Value (%)"
    } else {
        "Value"
    }
}

/// Resolve a slider selection against the window; missing ends default to the window edges.
///
/// Returns `None` when `from > to` after defaulting, or when the selection
/// lies entirely outside the window. A partial overlap is clamped.
pub fn visible_range(
    window: AlignmentWindow,
    year_from: Option<i32>,
    year_to: Option<i32>,
) -> Option<YearRange> {
    let from = year_from.unwrap_or(window.min_year);
    let to = year_to.unwrap_or(window.max_year);
    if from > to || to < window.min_year || from > window.max_year {
        return None;
    }
    Some(YearRange {
        from: from.max(window.min_year),
        to: to.min(window.max_year),
    })
}

/// Rows whose year lies in `range`, inclusive
pub fn filter_years(table: &AlignedTable, range: YearRange) -> AlignedTable {
    AlignedTable {
        countries: table.countries.clone(),
        rows: table
            .rows
            .iter()
            .filter(|r| r.year >= range.from && r.year <= range.to)
            .cloned()
            .collect(),
    }
}

/// Long form of the table: one point per (year, country), year-major
pub fn melt(table: &AlignedTable) -> Vec<ChartPoint> {
    table
        .rows
        .iter()
        .flat_map(|row| {
            let year = format_year(row.year);
            table
                .countries
                .iter()
                .zip(row.cells.iter())
                .map(move |(country, cell)| ChartPoint {
                    year: year.clone(),
                    country: country.clone(),
                    value: cell.clone(),
                })
        })
        .collect()
}

pub fn chart_spec(kind: ChartKind, is_percentage: bool) -> ChartSpec {
    ChartSpec {
        kind,
        x_field: YEAR_FIELD.to_string(),
        y_field: value_field(is_percentage).to_string(),
        color_field: COUNTRY_FIELD.to_string(),
        markers: matches!(kind, ChartKind::Line | ChartKind::Area),
        hover_mode: match kind {
            ChartKind::Area => Some("x unified".to_string()),
            _ => None,
        },
    }
}

/// Line, area and bar chart descriptors
pub fn chart_specs(is_percentage: bool) -> Vec<ChartSpec> {
    ChartKind::ALL
        .iter()
        .map(|kind| chart_spec(*kind, is_percentage))
        .collect()
}

/// Table view with the newest year first
pub fn table_view(table: &AlignedTable) -> TableView {
    let mut headers = Vec::with_capacity(table.countries.len() + 1);
    headers.push(YEAR_FIELD.to_string());
    headers.extend(table.countries.iter().cloned());

    let rows = table
        .rows
        .iter()
        .rev()
        .map(|r| TableViewRow {
            year: format_year(r.year),
            cells: r.cells.clone(),
        })
        .collect();

    TableView { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_country_explorer::table::{AlignedRow, Cell};

    fn table() -> AlignedTable {
        AlignedTable {
            countries: vec!["Afghanistan".to_string(), "France".to_string()],
            rows: (2000..=2004)
                .map(|year| AlignedRow {
                    year,
                    cells: vec![
                        if year < 2002 { Cell::Missing } else { Cell::Number(1.0) },
                        Cell::Number(year as f64),
                    ],
                })
                .collect(),
        }
    }

    fn window() -> AlignmentWindow {
        AlignmentWindow {
            min_year: 2000,
            max_year: 2004,
        }
    }

    #[test]
    fn test_visible_range_defaults_and_clamps() {
        assert_eq!(
            visible_range(window(), None, None),
            Some(YearRange { from: 2000, to: 2004 })
        );
        assert_eq!(
            visible_range(window(), Some(1990), Some(2100)),
            Some(YearRange { from: 2000, to: 2004 })
        );
        assert_eq!(
            visible_range(window(), Some(2002), None),
            Some(YearRange { from: 2002, to: 2004 })
        );
        assert_eq!(visible_range(window(), Some(2003), Some(2001)), None);
    }

    #[test]
    fn test_visible_range_outside_window_is_rejected() {
        // one-sided: the defaulted end falls below the requested start
        assert_eq!(visible_range(window(), Some(2010), None), None);
        assert_eq!(visible_range(window(), None, Some(1995)), None);
        // fully disjoint on either side
        assert_eq!(visible_range(window(), Some(2010), Some(2020)), None);
        assert_eq!(visible_range(window(), Some(1980), Some(1990)), None);
        // touching an edge still overlaps
        assert_eq!(
            visible_range(window(), Some(2004), Some(2010)),
            Some(YearRange { from: 2004, to: 2004 })
        );
        assert_eq!(
            visible_range(window(), Some(1990), Some(2001)),
            Some(YearRange { from: 2000, to: 2001 })
        );
    }

    #[test]
    fn test_filter_years_inclusive() {
        let filtered = filter_years(&table(), YearRange { from: 2001, to: 2003 });
        assert_eq!(filtered.years(), vec![2001, 2002, 2003]);
        assert_eq!(filtered.countries, table().countries);
    }

    #[test]
    fn test_melt_is_year_major() {
        let points = melt(&table());
        assert_eq!(points.len(), 10);
        assert_eq!(points[0].year, "2000");
        assert_eq!(points[0].country, "Afghanistan");
        assert_eq!(points[0].value, Cell::Missing);
        assert_eq!(points[1].country, "France");
        assert_eq!(points[1].value, Cell::Number(2000.0));
        assert_eq!(points[9].year, "2004");
    }

    #[test]
    fn test_chart_specs() {
        let specs = chart_specs(true);
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].kind, ChartKind::Line);
        assert!(specs[0].markers);
        assert_eq!(specs[0].y_field, "Value (%)");
        assert_eq!(specs[1].hover_mode.as_deref(), Some("x unified"));
        assert!(!specs[2].markers);
        assert_eq!(chart_spec(ChartKind::Bar, false).y_field, "Value");
    }

    #[test]
    fn test_table_view_newest_first() {
        let view = table_view(&table());
        assert_eq!(view.headers, vec!["Year", "Afghanistan", "France"]);
        assert_eq!(view.rows.first().map(|r| r.year.as_str()), Some("2004"));
        assert_eq!(view.rows.last().map(|r| r.year.as_str()), Some("2000"));
    }
}
