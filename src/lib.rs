//! SOLO Bench - lexical constraint benchmark for language models
//!
//! Scores generated sentences against word lists, a part-of-speech or
//! group-order pattern, and a no-repetition rule.

pub mod bench;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod evaluation;
pub mod generation;
pub mod grammar;
pub mod persistence;
pub mod report;

pub use bench::{GroupBench, SoloBench};
pub use config::{Config, GroupBenchSettings, GroupConfig};
pub use error::{BenchError, GenerationError};
