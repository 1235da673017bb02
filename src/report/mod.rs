//! Aggregation and reporting of benchmark results

pub mod record;
pub mod text;

use std::collections::HashSet;

use crate::evaluation::Verdict;

pub use record::{ErrorRecord, RunRecord};
pub use text::{render_group_report, render_pos_report, render_repeated_words, render_verdict};

/// Corpus totals of a part-of-speech run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosSummary {
    pub total: usize,
    pub perfect: usize,
    pub word_count_failures: usize,
    pub format_failures: usize,
    pub common_word_failures: usize,
    pub word_reuse_failures: usize,
    /// Uncommon words counted once per occurrence
    pub uncommon_occurrences: usize,
    pub unique_uncommon_words: usize,
}

impl PosSummary {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        let mut unique_uncommon: HashSet<&str> = HashSet::new();
        let mut summary = PosSummary {
            total: verdicts.len(),
            ..Default::default()
        };

        for verdict in verdicts {
            if verdict.passes_all {
                summary.perfect += 1;
            }
            if !verdict.word_count_check {
                summary.word_count_failures += 1;
            }
            if !verdict.format_check {
                summary.format_failures += 1;
            }
            if !verdict.passes_common_check() {
                summary.common_word_failures += 1;
            }
            if !verdict.passes_unique_check() {
                summary.word_reuse_failures += 1;
            }
            summary.uncommon_occurrences += verdict.uncommon_words.len();
            unique_uncommon.extend(verdict.uncommon_words.iter().map(String::as_str));
        }

        summary.unique_uncommon_words = unique_uncommon.len();
        summary
    }

    /// Share of perfect sentences in percent; 0 for an empty run
    pub fn score_percentage(&self) -> f64 {
        percentage(self.perfect, self.total)
    }
}

pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(index: usize, uncommon: &[&str], reused: &[&str], length_ok: bool, format_ok: bool) -> Verdict {
        let uncommon_words: Vec<String> = uncommon.iter().map(|w| w.to_string()).collect();
        let previously_used_words: Vec<String> = reused.iter().map(|w| w.to_string()).collect();
        let passes_all = length_ok && format_ok && uncommon.is_empty() && reused.is_empty();
        Verdict {
            index,
            text: String::new(),
            words: Vec::new(),
            word_count: if length_ok { 4 } else { 3 },
            word_count_check: length_ok,
            format_check: format_ok,
            format_errors: Vec::new(),
            uncommon_words,
            previously_used_words,
            passes_all,
        }
    }

    #[test]
    fn test_summary_counts() {
        let verdicts = vec![
            verdict(1, &[], &[], true, true),
            verdict(2, &["xyz", "abc"], &[], true, false),
            verdict(3, &["xyz"], &["run"], false, false),
        ];
        let summary = PosSummary::from_verdicts(&verdicts);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.perfect, 1);
        assert_eq!(summary.word_count_failures, 1);
        assert_eq!(summary.format_failures, 2);
        assert_eq!(summary.common_word_failures, 2);
        assert_eq!(summary.word_reuse_failures, 1);
        assert_eq!(summary.uncommon_occurrences, 3);
        assert_eq!(summary.unique_uncommon_words, 2);
        assert!((summary.score_percentage() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_run_scores_zero_percent() {
        let summary = PosSummary::from_verdicts(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.score_percentage(), 0.0);
    }
}
