//! Part-of-speech benchmark rules
//!
//! Every sentence is judged by four independent checks:
//! 1. exactly as many words as the pattern has slots
//! 2. each word belongs to its slot's category (only evaluated at the right length)
//! 3. every word is in the common-word list
//! 4. no word was used by an earlier sentence

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ledger::WordLedger;
use crate::dictionary::Lexicon;
use crate::grammar::{Sentence, SentencePattern};

/// Outcome of evaluating one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// 1-based position of the sentence in the run
    #[serde(rename = "question_num")]
    pub index: usize,
    #[serde(rename = "question")]
    pub text: String,
    pub words: Vec<String>,
    pub word_count: usize,
    pub word_count_check: bool,
    pub format_check: bool,
    pub format_errors: Vec<String>,
    pub uncommon_words: Vec<String>,
    pub previously_used_words: Vec<String>,
    pub passes_all: bool,
}

impl Verdict {
    pub fn passes_common_check(&self) -> bool {
        self.uncommon_words.is_empty()
    }

    pub fn passes_unique_check(&self) -> bool {
        self.previously_used_words.is_empty()
    }
}

/// Verdicts of a whole run plus the word usage they produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosEvaluation {
    pub verdicts: Vec<Verdict>,
    pub ledger: WordLedger,
}

impl PosEvaluation {
    /// Sentences passing every check
    pub fn score(&self) -> usize {
        self.verdicts.iter().filter(|v| v.passes_all).count()
    }
}

/// Sequential evaluator. Owns the run's ledger; sentences must be fed in order.
pub struct PosEvaluator<'a> {
    lexicon: &'a Lexicon,
    pattern: SentencePattern,
    ledger: WordLedger,
    next_index: usize,
}

impl<'a> PosEvaluator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            pattern: SentencePattern::default(),
            ledger: WordLedger::new(),
            next_index: 1,
        }
    }

    pub fn with_pattern(mut self, pattern: SentencePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Evaluates the next sentence of the run and records its words
    pub fn evaluate(&mut self, sentence: &Sentence) -> Verdict {
        let index = self.next_index;
        self.next_index += 1;

        let words = &sentence.words;
        let word_count_check = words.len() == self.pattern.len();

        let (format_check, format_errors) = if word_count_check {
            let errors = self.category_errors(words);
            (errors.is_empty(), errors)
        } else {
            (false, Vec::new())
        };

        let uncommon_words: Vec<String> = words
            .iter()
            .filter(|w| !self.lexicon.is_common(w))
            .cloned()
            .collect();

        let previously_used_words = self.ledger.previously_used(words);
        self.ledger.record(words);

        let passes_all = word_count_check
            && format_check
            && uncommon_words.is_empty()
            && previously_used_words.is_empty();

        debug!(
            index,
            word_count_check, format_check, passes_all, "evaluated sentence"
        );

        Verdict {
            index,
            text: sentence.text.clone(),
            words: words.clone(),
            word_count: words.len(),
            word_count_check,
            format_check,
            format_errors,
            uncommon_words,
            previously_used_words,
            passes_all,
        }
    }

    /// Evaluates all sentences in order and hands back the verdicts with the ledger
    pub fn evaluate_all(mut self, sentences: &[Sentence]) -> PosEvaluation {
        let verdicts = sentences.iter().map(|s| self.evaluate(s)).collect();
        PosEvaluation {
            verdicts,
            ledger: self.ledger,
        }
    }

    fn category_errors(&self, words: &[String]) -> Vec<String> {
        self.pattern
            .slots()
            .iter()
            .zip(words)
            .enumerate()
            .filter(|(_, (category, word))| !self.lexicon.category(**category).contains(word))
            .map(|(position, (category, word))| {
                SentencePattern::violation(position, word, *category)
            })
            .collect()
    }
}
