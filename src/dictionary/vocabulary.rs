//! Word sets used by the part-of-speech benchmark

use std::collections::HashSet;

use crate::grammar::PosCategory;

/// Immutable set of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Builds a set from entries that are already trimmed and lowercased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The four word sets of the part-of-speech benchmark
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub common: Vocabulary,
    pub verbs: Vocabulary,
    pub adjectives: Vocabulary,
    pub nouns: Vocabulary,
}

impl Lexicon {
    pub fn new(
        common: Vocabulary,
        verbs: Vocabulary,
        adjectives: Vocabulary,
        nouns: Vocabulary,
    ) -> Self {
        Self {
            common,
            verbs,
            adjectives,
            nouns,
        }
    }

    pub fn category(&self, category: PosCategory) -> &Vocabulary {
        match category {
            PosCategory::Verb => &self.verbs,
            PosCategory::Adjective => &self.adjectives,
            PosCategory::Noun => &self.nouns,
        }
    }

    pub fn is_common(&self, word: &str) -> bool {
        self.common.contains(word)
    }
}
