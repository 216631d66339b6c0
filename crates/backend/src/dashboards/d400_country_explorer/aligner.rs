use contracts::dashboards::d400_country_explorer::table::{
    AlignedRow, AlignedTable, AlignmentOutcome, AlignmentWindow, CountrySeries,
};
use std::collections::{BTreeSet, HashMap};

use crate::shared::format::to_cell;

/// Year bounds spanning every country's real data.
///
/// `min_year` is the earliest first-real-year across the selection and
/// `max_year` the latest last-real-year (union, not intersection). Countries
/// without a single reported value contribute nothing, wherever they appear in
/// the selection. `None` when no country has any value.
pub fn alignment_window(series: &[CountrySeries]) -> Option<AlignmentWindow> {
    let min_year = series.iter().filter_map(CountrySeries::first_real_year).min()?;
    let max_year = series.iter().filter_map(CountrySeries::last_real_year).max()?;
    Some(AlignmentWindow { min_year, max_year })
}

/// Year -> value lookup of one country.
///
/// When a year repeats, the first reported value wins over later ones and
/// over missing entries.
fn year_lookup(series: &CountrySeries) -> HashMap<i32, Option<f64>> {
    let mut lookup: HashMap<i32, Option<f64>> = HashMap::with_capacity(series.observations.len());
    for obs in &series.observations {
        let slot = lookup.entry(obs.year).or_insert(None);
        if slot.is_none() {
            *slot = obs.value;
        }
    }
    lookup
}

/// Merge per-country series into one year-indexed table.
///
/// Every year reported by any country becomes a row (outer join); a country
/// lacking that year gets a missing cell. Rows outside the alignment window
/// are dropped and the rest are sorted ascending. Percentage indicators are
/// rendered as "12.34%" text with "No Data" for missing cells.
///
/// Column order follows the order of `series`; country names are expected to
/// be distinct.
pub fn align_series(series: &[CountrySeries], is_percentage: bool) -> AlignmentOutcome {
    let country_count = series.len();

    let Some(window) = alignment_window(series) else {
        return AlignmentOutcome::NoData { country_count };
    };

    let years: BTreeSet<i32> = series
        .iter()
        .flat_map(|s| s.observations.iter().map(|o| o.year))
        .filter(|year| window.contains(*year))
        .collect();

    let lookups: Vec<HashMap<i32, Option<f64>>> = series.iter().map(year_lookup).collect();

    let rows = years
        .into_iter()
        .map(|year| AlignedRow {
            year,
            cells: lookups
                .iter()
                .map(|lookup| to_cell(lookup.get(&year).copied().flatten(), is_percentage))
                .collect(),
        })
        .collect();

    AlignmentOutcome::Aligned {
        table: AlignedTable {
            countries: series.iter().map(|s| s.country.clone()).collect(),
            rows,
        },
        window,
        country_count,
    }
}
