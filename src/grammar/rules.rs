//! Part-of-speech categories and the sentence pattern they form

use std::fmt;

/// Word category a position in the sentence must belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCategory {
    Verb,
    Adjective,
    Noun,
}

impl PosCategory {
    pub fn name(&self) -> &'static str {
        match self {
            PosCategory::Verb => "Verb",
            PosCategory::Adjective => "Adjective",
            PosCategory::Noun => "Noun",
        }
    }

    /// "a verb", "an adjective", "a noun"
    pub fn with_article(&self) -> &'static str {
        match self {
            PosCategory::Verb => "a verb",
            PosCategory::Adjective => "an adjective",
            PosCategory::Noun => "a noun",
        }
    }
}

/// Ordered list of categories a sentence must follow, one per word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePattern {
    slots: Vec<PosCategory>,
}

impl SentencePattern {
    pub fn new(slots: Vec<PosCategory>) -> Self {
        Self { slots }
    }

    /// Number of words a sentence must have
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[PosCategory] {
        &self.slots
    }

    /// Message for a word that does not belong to the category of its slot
    pub fn violation(position: usize, word: &str, category: PosCategory) -> String {
        format!(
            "{} word '{}' is not {}",
            ordinal(position),
            word,
            category.with_article()
        )
    }
}

impl Default for SentencePattern {
    /// Verb + Adjective + Noun + Noun
    fn default() -> Self {
        Self::new(vec![
            PosCategory::Verb,
            PosCategory::Adjective,
            PosCategory::Noun,
            PosCategory::Noun,
        ])
    }
}

impl fmt::Display for SentencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.slots.iter().map(|c| c.name()).collect();
        write!(f, "{}", names.join(" + "))
    }
}

/// 0-based position to "First", "Second", ...
fn ordinal(position: usize) -> String {
    const NAMES: [&str; 10] = [
        "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
        "Tenth",
    ];
    match NAMES.get(position) {
        Some(name) => name.to_string(),
        None => format!("{}th", position + 1),
    }
}
