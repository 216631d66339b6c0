pub mod aligner;
pub mod chart;
pub mod service;
