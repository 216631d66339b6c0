use serde::{Deserialize, Serialize};

use super::table::{AlignedTable, AlignmentWindow, Cell};

/// Request for the country explorer dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreRequest {
    /// Selected country display names, in selection order
    pub countries: Vec<String>,
    pub indicator_code: String,
    /// Visible range picked on the year slider; defaults to the full window
    #[serde(default)]
    pub year_from: Option<i32>,
    #[serde(default)]
    pub year_to: Option<i32>,
}

/// Visible year range after clamping the slider to the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Area,
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Area, ChartKind::Bar];
}

/// Rendering hints for one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_field: String,
    /// "Value" or "Value (%)"
    pub y_field: String,
    pub color_field: String,
    pub markers: bool,
    /// e.g. "x unified"
    pub hover_mode: Option<String>,
}

/// One point of the long-form (melted) table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Year rendered without thousands separators
    pub year: String,
    pub country: String,
    pub value: Cell,
}

/// Table view, newest year first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    /// "Year" followed by the country columns
    pub headers: Vec<String>,
    pub rows: Vec<TableViewRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableViewRow {
    pub year: String,
    pub cells: Vec<Cell>,
}

/// Response of the explorer dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExploreResponse {
    Data {
        indicator_code: String,
        percentage: bool,
        country_count: usize,
        window: AlignmentWindow,
        visible: YearRange,
        /// Aligned table restricted to the visible range
        table: AlignedTable,
        charts: Vec<ChartSpec>,
        points: Vec<ChartPoint>,
        table_view: TableView,
    },
    NoData {
        country_count: usize,
        message: String,
    },
}
