pub mod a001_country;
pub mod a002_indicator;
