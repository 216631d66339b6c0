use serde::{Deserialize, Serialize};

/// The four fixed indicator groups shown as category buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Economic,
    Social,
    Environmental,
    Developmental,
}

impl IndicatorCategory {
    pub const ALL: [IndicatorCategory; 4] = [
        IndicatorCategory::Economic,
        IndicatorCategory::Social,
        IndicatorCategory::Environmental,
        IndicatorCategory::Developmental,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorCategory::Economic => "Economic Factors",
            IndicatorCategory::Social => "Social Factors",
            IndicatorCategory::Environmental => "Environmental Factors",
            IndicatorCategory::Developmental => "Developmental Factors",
        }
    }
}

/// A named statistical measure published per country per year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// Opaque upstream code, e.g. "NY.GDP.MKTP.CD"
    pub code: String,
    pub name: String,
    pub category: IndicatorCategory,
    /// Values are ratios rendered as "12.34%"
    pub is_percentage: bool,
}

/// One selectable entry of a category drop-down.
///
/// The blank placeholder has an empty name and code and means "nothing selected yet".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorEntry {
    pub name: String,
    pub code: String,
}

impl IndicatorEntry {
    pub fn is_placeholder(&self) -> bool {
        self.code.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorGroup {
    pub category: IndicatorCategory,
    pub label: String,
    pub entries: Vec<IndicatorEntry>,
}

impl IndicatorGroup {
    /// Look up the code for a display name
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.code.as_str())
    }
}

/// Full catalogue returned by the metadata endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorCatalogResponse {
    pub groups: Vec<IndicatorGroup>,
    /// Codes whose values are displayed as percentages
    pub percentage_codes: Vec<String>,
}
