use contracts::dashboards::d400_country_explorer::table::Observation;
use contracts::domain::a001_country::aggregate::{Country, CountryCatalog};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::WorldBankError;

/// Country ids that are not listed: territories without coordinates and the "NA" code
pub const EXCLUDED_COUNTRY_IDS: [&str; 7] = ["CHI", "SXM", "PSE", "MAF", "GIB", "CUW", "NA"];

/// Region id carried by aggregate entries (regions, income groups, ...)
pub const AGGREGATE_REGION_ID: &str = "NA";

// ============================================================================
// Raw records of the World Bank v2 JSON API
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub id: String,
    pub name: String,
    pub region: RegionRef,
    /// Sent as a string ("34.5228"), blank for aggregates
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesRecord {
    pub date: Value,
    /// Outer `None`: field absent. `Some(None)`: reported as null.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub value: Option<Option<f64>>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Parsing
// ============================================================================

/// Split a `[metadata, records]` page into its records.
///
/// A `null` record list means the query matched nothing.
fn page_records(body: &str) -> Result<Vec<Value>, WorldBankError> {
    let root: Value = serde_json::from_str(body)?;
    let Value::Array(mut parts) = root else {
        return Err(WorldBankError::UnexpectedShape(
            "top-level value is not an array".to_string(),
        ));
    };

    if let Some(message) = parts.first().and_then(|meta| meta.get("message")) {
        return Err(WorldBankError::Api(describe_message(message)));
    }

    if parts.len() < 2 {
        return Err(WorldBankError::UnexpectedShape(format!(
            "expected [metadata, records], got {} element(s)",
            parts.len()
        )));
    }

    if let Some(pages) = parts[0].get("pages").and_then(Value::as_u64) {
        if pages > 1 {
            tracing::warn!(
                "World Bank response spans {} pages, only the first one is used",
                pages
            );
        }
    }

    match parts.swap_remove(1) {
        Value::Null => Ok(Vec::new()),
        Value::Array(records) => Ok(records),
        other => Err(WorldBankError::UnexpectedShape(format!(
            "records are neither an array nor null: {}",
            other
        ))),
    }
}

fn describe_message(message: &Value) -> String {
    match message {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.get("value")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| item.to_string())
            })
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

fn parse_coordinate(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn parse_year(raw: &Value) -> Option<i32> {
    match raw {
        Value::String(s) => s.trim().parse::<i32>().ok(),
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        _ => None,
    }
}

/// Whether a listing entry is a sovereign country that belongs in the catalog
pub fn is_listed(record: &CountryRecord) -> bool {
    record.region.id != AGGREGATE_REGION_ID && !EXCLUDED_COUNTRY_IDS.contains(&record.id.as_str())
}

/// Parse the country listing endpoint.
///
/// Later entries with an already seen name replace earlier ones.
pub fn parse_countries(body: &str) -> Result<CountryCatalog, WorldBankError> {
    let mut catalog = CountryCatalog::new();
    for raw in page_records(body)? {
        let record: CountryRecord = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Skipping malformed country record: {}", e);
                continue;
            }
        };
        if !is_listed(&record) {
            continue;
        }
        catalog.insert(Country {
            latitude: parse_coordinate(record.latitude.as_ref()),
            longitude: parse_coordinate(record.longitude.as_ref()),
            id: record.id,
            name: record.name,
        });
    }
    Ok(catalog)
}

/// Parse the per-country indicator endpoint into observations, upstream order kept
pub fn parse_series(body: &str) -> Result<Vec<Observation>, WorldBankError> {
    let mut observations = Vec::new();
    for raw in page_records(body)? {
        let record: SeriesRecord = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Skipping malformed series record: {}", e);
                continue;
            }
        };
        let Some(value) = record.value else {
            continue;
        };
        let Some(year) = parse_year(&record.date) else {
            tracing::debug!("Skipping series record with non-year date {}", record.date);
            continue;
        };
        observations.push(Observation::new(year, value));
    }
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTRIES: &str = r#"[
        {"page":1,"pages":1,"per_page":"300","total":6},
        [
            {"id":"ABW","iso2Code":"AW","name":"Aruba","region":{"id":"LCN","iso2code":"ZJ","value":"Latin America & Caribbean "},"capitalCity":"Oranjestad","longitude":"-70.0167","latitude":"12.5167"},
            {"id":"AFE","iso2Code":"ZH","name":"Africa Eastern and Southern","region":{"id":"NA","iso2code":"NA","value":"Aggregates"},"capitalCity":"","longitude":"","latitude":""},
            {"id":"AFG","iso2Code":"AF","name":"Afghanistan","region":{"id":"SAS","iso2code":"8S","value":"South Asia"},"capitalCity":"Kabul","longitude":"69.1761","latitude":"34.5228"},
            {"id":"CHI","iso2Code":"JG","name":"Channel Islands","region":{"id":"ECS","iso2code":"Z7","value":"Europe & Central Asia"},"capitalCity":"","longitude":"","latitude":""},
            {"id":"FRA","iso2Code":"FR","name":"France","region":{"id":"ECS","iso2code":"Z7","value":"Europe & Central Asia"},"capitalCity":"Paris","longitude":"2.35097","latitude":"48.8566"},
            {"iso2Code":"XX","name":"Broken"}
        ]
    ]"#;

    #[test]
    fn test_parse_countries_filters_aggregates_and_denylist() {
        let catalog = parse_countries(COUNTRIES).unwrap();
        assert_eq!(catalog.names(), vec!["Afghanistan", "Aruba", "France"]);

        let afg = catalog.get("Afghanistan").unwrap();
        assert_eq!(afg.id, "AFG");
        assert_eq!(afg.latitude, Some(34.5228));
        assert_eq!(afg.longitude, Some(69.1761));
    }

    #[test]
    fn test_parse_countries_blank_coordinates_are_none() {
        let body = r#"[{"page":1,"pages":1},[
            {"id":"XKX","name":"Kosovo","region":{"id":"ECS"},"longitude":"","latitude":" "}
        ]]"#;
        let catalog = parse_countries(body).unwrap();
        let kosovo = catalog.get("Kosovo").unwrap();
        assert_eq!(kosovo.latitude, None);
        assert_eq!(kosovo.coordinates(), None);
    }

    #[test]
    fn test_parse_series_keeps_null_and_drops_absent_values() {
        let body = r#"[
            {"page":1,"pages":1,"per_page":100,"total":4},
            [
                {"indicator":{"id":"NY.GDP.MKTP.CD"},"country":{"id":"AF"},"date":"2022","value":14500000000.0},
                {"indicator":{"id":"NY.GDP.MKTP.CD"},"country":{"id":"AF"},"date":"2021","value":null},
                {"indicator":{"id":"NY.GDP.MKTP.CD"},"country":{"id":"AF"},"date":"2020"},
                {"indicator":{"id":"NY.GDP.MKTP.CD"},"country":{"id":"AF"},"date":"2019","value":18900000000}
            ]
        ]"#;
        let obs = parse_series(body).unwrap();
        assert_eq!(
            obs,
            vec![
                Observation::new(2022, Some(14500000000.0)),
                Observation::new(2021, None),
                Observation::new(2019, Some(18900000000.0)),
            ]
        );
    }

    #[test]
    fn test_parse_series_drops_non_year_dates() {
        let body = r#"[{"page":1},[
            {"date":"2020Q1","value":1.0},
            {"date":2018,"value":2.0}
        ]]"#;
        let obs = parse_series(body).unwrap();
        assert_eq!(obs, vec![Observation::new(2018, Some(2.0))]);
    }

    #[test]
    fn test_null_records_mean_no_rows() {
        let body = r#"[{"page":0,"pages":0,"per_page":100,"total":0},null]"#;
        assert!(parse_series(body).unwrap().is_empty());
    }

    #[test]
    fn test_api_message_is_an_error() {
        let body = r#"[{"message":[{"id":"120","key":"Invalid value","value":"The provided parameter value is not valid"}]}]"#;
        match parse_series(body) {
            Err(WorldBankError::Api(msg)) => {
                assert_eq!(msg, "The provided parameter value is not valid")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_shapes() {
        assert!(matches!(
            parse_series(r#"{"page":1}"#),
            Err(WorldBankError::UnexpectedShape(_))
        ));
        assert!(matches!(
            parse_series(r#"[{"page":1}]"#),
            Err(WorldBankError::UnexpectedShape(_))
        ));
        assert!(matches!(
            parse_series("not json"),
            Err(WorldBankError::Parse(_))
        ));
    }
}
