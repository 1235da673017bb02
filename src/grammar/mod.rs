//! Sentence structure
//!
//! Tokenization of generator output and the part-of-speech pattern sentences must follow.

pub mod rules;
pub mod tokenizer;

pub use rules::{PosCategory, SentencePattern};
pub use tokenizer::{CleaningPolicy, Sentence, Tokenizer};
