//! Run-wide record of word usage

use std::collections::{HashMap, HashSet};

/// Word usage across a run.
///
/// Written by a single evaluator in sentence order; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLedger {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl WordLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Words of `words` already recorded by an earlier sentence, in order.
    /// A word repeated inside `words` itself is not reported unless it was
    /// recorded before.
    pub fn previously_used(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|w| self.used.contains(w.as_str()))
            .cloned()
            .collect()
    }

    /// Folds a sentence's words into the ledger
    pub fn record(&mut self, words: &[String]) {
        for word in words {
            *self.counts.entry(word.clone()).or_insert(0) += 1;
            self.used.insert(word.clone());
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words recorded
    pub fn distinct_words(&self) -> usize {
        self.used.len()
    }

    /// Words used more than once, alphabetically, with their counts
    pub fn repeated_words(&self) -> Vec<(&str, usize)> {
        let mut repeated: Vec<(&str, usize)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        repeated.sort_unstable_by(|a, b| a.0.cmp(b.0));
        repeated
    }
}
