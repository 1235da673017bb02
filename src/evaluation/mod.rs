//! Constraint evaluation
//!
//! Two rule sets share the tokenizer but differ in how repetition is judged:
//! - `pos`: Verb + Adjective + Noun + Noun, repetition checked sentence by sentence
//!   against everything seen earlier.
//! - `groups`: group-id order, repetition checked once over all valid sentences,
//!   any duplicate collapses the score to zero.

pub mod groups;
pub mod ledger;
pub mod pos;

pub use groups::{GroupEvaluation, GroupEvaluator, GroupVerdict, GroupViolation, ViolationKind};
pub use ledger::WordLedger;
pub use pos::{PosEvaluation, PosEvaluator, Verdict};
