//! JSON records archived next to each generation run

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::PosSummary;
use crate::evaluation::Verdict;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Detailed results of a scored generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub model: String,
    pub timestamp: String,
    pub total_questions: usize,
    pub perfect_questions: usize,
    pub score_percentage: f64,
    pub word_count_failures: usize,
    pub format_failures: usize,
    pub common_word_failures: usize,
    pub word_reuse_failures: usize,
    pub raw_output_file: String,
    pub formatted_output_file: String,
    pub detailed_results: Vec<Verdict>,
}

impl RunRecord {
    pub fn new(
        model: &str,
        verdicts: &[Verdict],
        raw_output_file: &str,
        formatted_output_file: &str,
    ) -> Self {
        let summary = PosSummary::from_verdicts(verdicts);
        Self {
            model: model.to_string(),
            timestamp: now(),
            total_questions: summary.total,
            perfect_questions: summary.perfect,
            score_percentage: summary.score_percentage(),
            word_count_failures: summary.word_count_failures,
            format_failures: summary.format_failures,
            common_word_failures: summary.common_word_failures,
            word_reuse_failures: summary.word_reuse_failures,
            raw_output_file: raw_output_file.to_string(),
            formatted_output_file: formatted_output_file.to_string(),
            detailed_results: verdicts.to_vec(),
        }
    }
}

/// Summary written when the generation request fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub model: String,
    pub timestamp: String,
    pub status: String,
    pub error_message: String,
    pub raw_output_file: String,
}

impl ErrorRecord {
    pub fn new(model: &str, error_message: &str, raw_output_file: &str) -> Self {
        Self {
            model: model.to_string(),
            timestamp: now(),
            status: "ERROR".to_string(),
            error_message: error_message.to_string(),
            raw_output_file: raw_output_file.to_string(),
        }
    }
}
