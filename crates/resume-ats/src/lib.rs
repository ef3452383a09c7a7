//! ATS compatibility analysis for extracted resume documents.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;

pub use analysis::{AnalysisOutcome, ResumeAnalyzer};
