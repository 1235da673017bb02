//! File names of the artifacts saved for each generation run

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::grammar::Sentence;

const UNSAFE_CHARS: [char; 9] = ['/', ':', '\\', '*', '?', '"', '<', '>', '|'];

/// Model name with path-hostile characters replaced by `_`
pub fn safe_filename(model: &str) -> String {
    model
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Paths of every file a run may write, sharing the model/timestamp stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArtifacts {
    /// Unmodified model output, or the error text if the request failed
    pub raw_output: PathBuf,
    /// Extracted sentences as a numbered list
    pub formatted_output: PathBuf,
    /// Scored run record
    pub results: PathBuf,
    /// Error summary of a failed request
    pub error_summary: PathBuf,
}

impl RunArtifacts {
    pub fn new(dir: &Path, model: &str, timestamp: i64) -> Self {
        let stem = format!("{}_{}", safe_filename(model), timestamp);
        Self {
            raw_output: dir.join(format!("SOLO_bench_raw_{}.txt", stem)),
            formatted_output: dir.join(format!("SOLO_bench_{}.txt", stem)),
            results: dir.join(format!("SOLO_bench_{}.json", stem)),
            error_summary: dir.join(format!("SOLO_bench_{}_error.json", stem)),
        }
    }

    /// Stamped with the current Unix time
    pub fn now(dir: &Path, model: &str) -> Self {
        Self::new(dir, model, Utc::now().timestamp())
    }
}

/// "1. first\n2. second\n"
pub fn numbered_list(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}\n", i + 1, s.text))
        .collect()
}
