//! Group-order benchmark rules

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use tracing::debug;

use crate::dictionary::{GroupId, GroupMap};
use crate::grammar::Sentence;

/// Violation categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    WrongWordCount,
    HallucinatedWord,
    WrongGroupOrder,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 3] = [
        ViolationKind::WrongWordCount,
        ViolationKind::HallucinatedWord,
        ViolationKind::WrongGroupOrder,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViolationKind::WrongWordCount => "Wrong Word Count",
            ViolationKind::HallucinatedWord => "Hallucinated Word",
            ViolationKind::WrongGroupOrder => "Wrong Group Order",
        }
    }
}

/// A broken rule in one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupViolation {
    WrongWordCount {
        expected: usize,
        found: usize,
    },
    HallucinatedWord {
        word: String,
    },
    WrongGroupOrder {
        actual: Vec<GroupId>,
        expected: Vec<GroupId>,
    },
}

impl GroupViolation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            GroupViolation::WrongWordCount { .. } => ViolationKind::WrongWordCount,
            GroupViolation::HallucinatedWord { .. } => ViolationKind::HallucinatedWord,
            GroupViolation::WrongGroupOrder { .. } => ViolationKind::WrongGroupOrder,
        }
    }
}

impl fmt::Display for GroupViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupViolation::WrongWordCount { expected, found } => {
                write!(f, "Expected {} words, but found {}.", expected, found)
            }
            GroupViolation::HallucinatedWord { word } => {
                write!(f, "The word '{}' is not in the provided word list.", word)
            }
            GroupViolation::WrongGroupOrder { actual, expected } => write!(
                f,
                "Incorrect group order. Got {:?}, expected {:?}.",
                actual, expected
            ),
        }
    }
}

/// Outcome of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVerdict {
    /// 1-based position of the sentence in the response
    pub index: usize,
    pub words: Vec<String>,
    pub violations: Vec<GroupViolation>,
}

impl GroupVerdict {
    /// Valid before the corpus-wide duplicate check
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn line(&self) -> String {
        self.words.join(" ")
    }

    /// Report line for a violation, e.g. "Sentence 3: Expected 4 words, but found 5. Line: '...'"
    pub fn describe(&self, violation: &GroupViolation) -> String {
        match violation {
            GroupViolation::HallucinatedWord { .. } => {
                format!("Sentence {}: {}", self.index, violation)
            }
            _ => format!("Sentence {}: {} Line: '{}'", self.index, violation, self.line()),
        }
    }
}

/// Result of a whole response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEvaluation {
    pub verdicts: Vec<GroupVerdict>,
    /// Number of sentences the task asked for
    pub expected_sentences: usize,
    /// Words appearing more than once across valid sentences, sorted
    pub duplicate_words: Vec<String>,
}

impl GroupEvaluation {
    pub fn valid_sentences(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_valid()).count()
    }

    /// Valid sentences, or zero as soon as any word is duplicated
    pub fn score(&self) -> usize {
        if self.duplicate_words.is_empty() {
            self.valid_sentences()
        } else {
            0
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.duplicate_words.is_empty() && self.score() >= self.expected_sentences
    }

    /// Report lines of every violation of `kind`, in sentence order
    pub fn messages(&self, kind: ViolationKind) -> Vec<String> {
        self.verdicts
            .iter()
            .flat_map(|v| {
                v.violations
                    .iter()
                    .filter(move |violation| violation.kind() == kind)
                    .map(move |violation| v.describe(violation))
            })
            .collect()
    }

    pub fn has_violations(&self) -> bool {
        self.verdicts.iter().any(|v| !v.is_valid())
    }
}

/// Evaluates responses against a word-to-group map and a required group order
pub struct GroupEvaluator<'a> {
    map: &'a GroupMap,
    group_order: Vec<GroupId>,
    expected_sentences: usize,
}

impl<'a> GroupEvaluator<'a> {
    pub fn new(map: &'a GroupMap, group_order: Vec<GroupId>, expected_sentences: usize) -> Self {
        Self {
            map,
            group_order,
            expected_sentences,
        }
    }

    /// Classifies one sentence. Checks stop at the first failing stage:
    /// word count, then unknown words, then group order.
    pub fn evaluate(&self, index: usize, sentence: &Sentence) -> GroupVerdict {
        let words = &sentence.words;
        let mut violations = Vec::new();

        if words.len() != self.group_order.len() {
            violations.push(GroupViolation::WrongWordCount {
                expected: self.group_order.len(),
                found: words.len(),
            });
        } else {
            let mut actual = Vec::with_capacity(words.len());
            for word in words {
                match self.map.group_of(word) {
                    Some(group) => actual.push(group),
                    None => violations.push(GroupViolation::HallucinatedWord { word: word.clone() }),
                }
            }

            if violations.is_empty() && actual != self.group_order {
                violations.push(GroupViolation::WrongGroupOrder {
                    actual,
                    expected: self.group_order.clone(),
                });
            }
        }

        debug!(index, violations = violations.len(), "classified sentence");

        GroupVerdict {
            index,
            words: words.clone(),
            violations,
        }
    }

    /// Classifies every sentence, then checks word uniqueness once over the
    /// valid ones.
    pub fn evaluate_all(&self, sentences: &[Sentence]) -> GroupEvaluation {
        let verdicts: Vec<GroupVerdict> = sentences
            .iter()
            .enumerate()
            .map(|(i, s)| self.evaluate(i + 1, s))
            .collect();

        let mut seen = HashSet::new();
        let mut duplicates = BTreeSet::new();
        for word in verdicts
            .iter()
            .filter(|v| v.is_valid())
            .flat_map(|v| v.words.iter())
        {
            if !seen.insert(word.as_str()) {
                duplicates.insert(word.clone());
            }
        }

        GroupEvaluation {
            verdicts,
            expected_sentences: self.expected_sentences,
            duplicate_words: duplicates.into_iter().collect(),
        }
    }
}
