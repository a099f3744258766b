//! JSON configuration types for the command-line tools.
//!
//! Each tool takes a single config file path as its argument; the structures
//! here mirror those files. Analyzer parameters embed
//! [`AnalyzerParams`](crate::AnalyzerParams) directly, so every knob the
//! library exposes is reachable from a config without duplication.

pub mod batch;
pub mod stages;
