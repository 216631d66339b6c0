use serde::{Deserialize, Serialize};

/// Marker shown in place of a missing percentage value
pub const NO_DATA_MARKER: &str = "No Data";

/// One (year, value) pair for a given country and indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    /// `None` when the upstream record reported no value for this year
    pub value: Option<f64>,
}

impl Observation {
    pub fn new(year: i32, value: Option<f64>) -> Self {
        Self { year, value }
    }
}

/// Raw series of one country, in the order the data source returned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySeries {
    pub country: String,
    pub observations: Vec<Observation>,
}

impl CountrySeries {
    pub fn new(country: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            country: country.into(),
            observations,
        }
    }

    /// Earliest year carrying an actual value
    pub fn first_real_year(&self) -> Option<i32> {
        self.observations
            .iter()
            .filter(|o| o.value.is_some())
            .map(|o| o.year)
            .min()
    }

    /// Latest year carrying an actual value
    pub fn last_real_year(&self) -> Option<i32> {
        self.observations
            .iter()
            .filter(|o| o.value.is_some())
            .map(|o| o.year)
            .max()
    }
}

/// Value in an aligned table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Numeric value (absolute indicators)
    Number(f64),
    /// Pre-rendered text (percentage indicators, including the "No Data" marker)
    FormattedText(String),
    /// No observation for this country and year
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// Inclusive year bounds of an aligned table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentWindow {
    pub min_year: i32,
    pub max_year: i32,
}

impl AlignmentWindow {
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min_year && year <= self.max_year
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    pub year: i32,
    /// One cell per column of the owning table, same order
    pub cells: Vec<Cell>,
}

/// Year-indexed table with one column per selected country
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignedTable {
    pub countries: Vec<String>,
    /// Unique years, ascending
    pub rows: Vec<AlignedRow>,
}

impl AlignedTable {
    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    pub fn column_index(&self, country: &str) -> Option<usize> {
        self.countries.iter().position(|c| c == country)
    }

    pub fn cell(&self, year: i32, country: &str) -> Option<&Cell> {
        let idx = self.column_index(country)?;
        self.rows
            .iter()
            .find(|r| r.year == year)
            .and_then(|r| r.cells.get(idx))
    }
}

/// Result of aligning a selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AlignmentOutcome {
    Aligned {
        table: AlignedTable,
        window: AlignmentWindow,
        country_count: usize,
    },
    /// No selected country has a single reported value
    NoData { country_count: usize },
}

impl AlignmentOutcome {
    pub fn country_count(&self) -> usize {
        match self {
            AlignmentOutcome::Aligned { country_count, .. } => *country_count,
            AlignmentOutcome::NoData { country_count } => *country_count,
        }
    }
}
