use contracts::domain::a002_indicator::aggregate::{
    Indicator, IndicatorCatalogResponse, IndicatorCategory, IndicatorEntry, IndicatorGroup,
};
use once_cell::sync::Lazy;

/// Well-known World Bank indicator codes (constants to avoid typos).
pub mod ids {
    // Economic
    pub const GDP: &str = "NY.GDP.MKTP.CD";
    pub const GDP_PER_CAPITA: &str = "NY.GDP.PCAP.CD";
    pub const MILITARY_EXPENDITURE: &str = "MS.MIL.XPND.GD.ZS";
    pub const INFLATION: &str = "FP.CPI.TOTL.ZG";
    pub const UNEMPLOYMENT: &str = "SL.UEM.TOTL.ZS";

    // Social
    pub const CRUDE_DEATH_RATE: &str = "SP.DYN.CDRT.IN";
    pub const LIFE_EXPECTANCY: &str = "SP.DYN.LE00.IN";
    pub const LITERACY_RATE: &str = "SE.ADT.LITR.ZS";
    pub const FERTILITY_RATE: &str = "SP.DYN.TFRT.IN";

    // Environmental
    pub const ENERGY_USE: &str = "EG.USE.PCAP.KG.OE";
    pub const RENEWABLE_ENERGY: &str = "EG.FEC.RNEW.ZS";
    pub const FOREST_AREA: &str = "AG.LND.FRST.ZS";
    pub const AIR_POLLUTION: &str = "EN.ATM.PM25.MC.ZS";
    pub const AGRICULTURAL_LAND: &str = "AG.LND.AGRI.ZS";

    // Developmental
    pub const ELECTRICITY_ACCESS: &str = "EG.ELC.ACCS.ZS";
    pub const SECURE_SERVERS: &str = "IT.NET.SECR.P6";
    pub const LAND_AREA: &str = "AG.LND.TOTL.K2";
    pub const NET_MIGRATION: &str = "SM.POP.NETM";
    pub const POPULATION_DENSITY: &str = "EN.POP.DNST";
    pub const TOTAL_POPULATION: &str = "SP.POP.TOTL";
    pub const RURAL_POPULATION: &str = "SP.RUR.TOTL.ZS";
    pub const URBAN_POPULATION: &str = "SP.URB.TOTL.IN.ZS";
}

/// Indicators whose values are ratios and render as percentages
pub const PERCENTAGE_CODES: [&str; 10] = [
    ids::MILITARY_EXPENDITURE,
    ids::INFLATION,
    ids::LITERACY_RATE,
    ids::RENEWABLE_ENERGY,
    ids::FOREST_AREA,
    ids::AIR_POLLUTION,
    ids::AGRICULTURAL_LAND,
    ids::ELECTRICITY_ACCESS,
    ids::RURAL_POPULATION,
    ids::URBAN_POPULATION,
];

static GROUPS: Lazy<Vec<IndicatorGroup>> = Lazy::new(|| {
    IndicatorCategory::ALL
        .iter()
        .map(|category| IndicatorGroup {
            category: *category,
            label: category.label().to_string(),
            entries: entries_for(*category)
                .iter()
                .map(|(name, code)| IndicatorEntry {
                    name: name.to_string(),
                    code: code.to_string(),
                })
                .collect(),
        })
        .collect()
});

/// Drop-down entries of a category, placeholder first
fn entries_for(category: IndicatorCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        IndicatorCategory::Economic => &[
            ("", ""),
            ("GDP (in $USD)", ids::GDP),
            ("GDP per Capita (in $USD)", ids::GDP_PER_CAPITA),
            ("Military Expenditure (% of GDP)", ids::MILITARY_EXPENDITURE),
            ("Inflation, Consumer Prices (annual %)", ids::INFLATION),
            (
                "Unemployment, total estimate (% of total labor force)",
                ids::UNEMPLOYMENT,
            ),
        ],
        IndicatorCategory::Social => &[
            ("", ""),
            ("Crude Death Rate (per 1,000 people)", ids::CRUDE_DEATH_RATE),
            ("Life Expectancy at Birth, total years", ids::LIFE_EXPECTANCY),
            (
                "Literacy Rate, adult total (% of people ages 15 and above)",
                ids::LITERACY_RATE,
            ),
            ("Total Fertility Rate (births per woman)", ids::FERTILITY_RATE),
        ],
        IndicatorCategory::Environmental => &[
            ("", ""),
            ("Energy Use (kg of oil equivalent per capita)", ids::ENERGY_USE),
            (
                "Renewable Energy Consumption (% of total final energy consumption)",
                ids::RENEWABLE_ENERGY,
            ),
            ("Forest Area (% of total land area)", ids::FOREST_AREA),
            (
                "Air Pollution, exposure to levels exceeding World Health Organization guideline value (% of total)",
                ids::AIR_POLLUTION,
            ),
            ("Agricultural Land (% of land area)", ids::AGRICULTURAL_LAND),
        ],
        IndicatorCategory::Developmental => &[
            ("", ""),
            ("Access to Electricity (% of population)", ids::ELECTRICITY_ACCESS),
            ("Secure Internet Servers (per 1 million people)", ids::SECURE_SERVERS),
            ("Land Area (square kms)", ids::LAND_AREA),
            ("Net Migration", ids::NET_MIGRATION),
            (
                "Population Density (people per square km of land area)",
                ids::POPULATION_DENSITY,
            ),
            ("Total Population", ids::TOTAL_POPULATION),
            ("Rural Population (% of total population)", ids::RURAL_POPULATION),
            ("Urban Population (% of total population)", ids::URBAN_POPULATION),
        ],
    }
}

/// The four fixed indicator groups in display order
pub fn categories() -> &'static [IndicatorGroup] {
    &GROUPS
}

pub fn group(category: IndicatorCategory) -> &'static IndicatorGroup {
    // GROUPS is built from IndicatorCategory::ALL, which follows declaration order
    &GROUPS[category as usize]
}

/// True iff the code is a ratio indicator; false for the blank code
pub fn is_percentage(code: &str) -> bool {
    PERCENTAGE_CODES.contains(&code)
}

/// Resolve a code to its full indicator description
pub fn find_by_code(code: &str) -> Option<Indicator> {
    if code.is_empty() {
        return None;
    }
    GROUPS.iter().find_map(|g| {
        g.entries.iter().find(|e| e.code == code).map(|e| Indicator {
            code: e.code.clone(),
            name: e.name.clone(),
            category: g.category,
            is_percentage: is_percentage(&e.code),
        })
    })
}

/// Codes of a category in display order, placeholder excluded
pub fn codes_for(category: IndicatorCategory) -> Vec<&'static str> {
    group(category)
        .entries
        .iter()
        .filter(|e| !e.is_placeholder())
        .map(|e| e.code.as_str())
        .collect()
}

/// Build the full catalogue of indicator groups
pub fn build_catalog() -> IndicatorCatalogResponse {
    IndicatorCatalogResponse {
        groups: categories().to_vec(),
        percentage_codes: PERCENTAGE_CODES.iter().map(|c| c.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_groups_in_fixed_order() {
        let groups = categories();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].category, IndicatorCategory::Economic);
        assert_eq!(groups[1].category, IndicatorCategory::Social);
        assert_eq!(groups[2].category, IndicatorCategory::Environmental);
        assert_eq!(groups[3].category, IndicatorCategory::Developmental);
    }

    #[test]
    fn test_every_group_starts_with_placeholder() {
        for g in categories() {
            assert!(g.entries[0].is_placeholder(), "{:?}", g.category);
            assert_eq!(g.entries[0].name, "");
            assert_eq!(g.code_for(""), Some(""));
        }
    }

    #[test]
    fn test_name_to_code_lookup() {
        let economic = group(IndicatorCategory::Economic);
        assert_eq!(economic.code_for("GDP (in $USD)"), Some("NY.GDP.MKTP.CD"));
        let env = group(IndicatorCategory::Environmental);
        assert_eq!(
            env.code_for("Energy Use (kg of oil equivalent per capita)"),
            Some("EG.USE.PCAP.KG.OE")
        );
        assert_eq!(env.code_for("GDP (in $USD)"), None);
    }

    #[test]
    fn test_is_percentage() {
        assert!(is_percentage("MS.MIL.XPND.GD.ZS"));
        assert!(is_percentage("SP.URB.TOTL.IN.ZS"));
        assert!(!is_percentage("NY.GDP.MKTP.CD"));
        assert!(!is_percentage("SL.UEM.TOTL.ZS"));
        assert!(!is_percentage(""));
        assert!(!is_percentage("UNKNOWN.CODE"));
    }

    #[test]
    fn test_codes_are_unique_across_groups() {
        let mut codes: Vec<&str> = categories()
            .iter()
            .flat_map(|g| g.entries.iter())
            .filter(|e| !e.is_placeholder())
            .map(|e| e.code.as_str())
            .collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert_eq!(total, 22);
    }

    #[test]
    fn test_find_by_code() {
        let lit = find_by_code(ids::LITERACY_RATE).unwrap();
        assert_eq!(lit.category, IndicatorCategory::Social);
        assert!(lit.is_percentage);
        assert!(find_by_code("").is_none());
        assert!(find_by_code("NOPE").is_none());
    }

    #[test]
    fn test_codes_for_excludes_placeholder() {
        let env = codes_for(IndicatorCategory::Environmental);
        assert_eq!(env.len(), 5);
        assert_eq!(env[0], ids::ENERGY_USE);
        assert_eq!(env[4], ids::AGRICULTURAL_LAND);
        assert!(!env.contains(&""));
        assert_eq!(codes_for(IndicatorCategory::Developmental).len(), 8);
    }

    #[test]
    fn test_catalog_lists_percentage_codes() {
        let catalog = build_catalog();
        assert_eq!(catalog.groups.len(), 4);
        assert_eq!(catalog.percentage_codes.len(), PERCENTAGE_CODES.len());
    }
}
