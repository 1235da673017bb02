//! Vocabularies
//!
//! Word lists for the part-of-speech benchmark and the word-to-group map of the group benchmark.

pub mod groups;
pub mod loader;
pub mod vocabulary;

pub use groups::{GroupId, GroupMap};
pub use loader::DictionaryLoader;
pub use vocabulary::{Lexicon, Vocabulary};
