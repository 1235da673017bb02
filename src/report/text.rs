//! Human-readable reports

use std::fmt;

use super::PosSummary;
use crate::evaluation::{GroupEvaluation, PosEvaluation, Verdict, ViolationKind, WordLedger};
use crate::grammar::SentencePattern;

const RULE: &str = "--------------------------------------------------";

/// Block of lines describing one sentence
pub fn render_verdict(verdict: &Verdict, pattern: &SentencePattern) -> String {
    VerdictBlock { verdict, pattern }.to_string()
}

/// Per-sentence results, corpus summary and overall score
pub fn render_pos_report(
    evaluation: &PosEvaluation,
    pattern: &SentencePattern,
    model: Option<&str>,
) -> String {
    PosReport {
        evaluation,
        pattern,
        model,
    }
    .to_string()
}

/// Words used more than once across the run, alphabetically
pub fn render_repeated_words(ledger: &WordLedger) -> String {
    RepeatedWords { ledger }.to_string()
}

pub fn render_group_report(evaluation: &GroupEvaluation) -> String {
    GroupReport { evaluation }.to_string()
}

struct VerdictBlock<'a> {
    verdict: &'a Verdict,
    pattern: &'a SentencePattern,
}

impl fmt::Display for VerdictBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.verdict;
        writeln!(f, "Question {}: {}", v.index, v.text)?;

        if v.word_count_check {
            writeln!(f, "  Word count: {} ✓", v.word_count)?;
        } else {
            writeln!(
                f,
                "  Word count: {} (should be exactly {})",
                v.word_count,
                self.pattern.len()
            )?;
        }

        if v.format_check {
            writeln!(f, "  Format check: {} ✓", self.pattern)?;
        } else {
            writeln!(f, "  Format check: Failed")?;
            for error in &v.format_errors {
                writeln!(f, "    - {}", error)?;
            }
        }

        if v.uncommon_words.is_empty() {
            writeln!(f, "  All words are common ✓")?;
        } else {
            writeln!(f, "  Uncommon words: {}", v.uncommon_words.join(", "))?;
        }

        if v.previously_used_words.is_empty() {
            writeln!(f, "  No words were used in previous questions ✓")?;
        } else {
            let mut reused: Vec<&str> = Vec::new();
            for word in &v.previously_used_words {
                if !reused.contains(&word.as_str()) {
                    reused.push(word);
                }
            }
            writeln!(f, "  Previously used words: {}", reused.join(", "))?;
        }

        writeln!(
            f,
            "  Overall status: {}",
            if v.passes_all { "PASSED" } else { "FAILED" }
        )
    }
}

struct PosReport<'a> {
    evaluation: &'a PosEvaluation,
    pattern: &'a SentencePattern,
    model: Option<&'a str>,
}

impl fmt::Display for PosReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdicts = &self.evaluation.verdicts;
        let summary = PosSummary::from_verdicts(verdicts);
        let length = self.pattern.len();

        writeln!(f, "Results:")?;
        writeln!(f, "{}", RULE)?;
        for verdict in verdicts {
            write!(f, "{}", VerdictBlock { verdict, pattern: self.pattern })?;
            writeln!(f)?;
        }

        writeln!(f, "Summary:")?;
        writeln!(f, "{}", RULE)?;
        match self.model {
            Some(model) => writeln!(f, "- Checked {} questions from {}", summary.total, model)?,
            None => writeln!(f, "- Checked {} questions", summary.total)?,
        }
        writeln!(
            f,
            "- {} questions did not have exactly {} words",
            summary.word_count_failures, length
        )?;
        writeln!(
            f,
            "- {} questions had exactly {} words",
            summary.total - summary.word_count_failures,
            length
        )?;
        writeln!(
            f,
            "- {} questions did not follow the {} format",
            summary.format_failures, self.pattern
        )?;
        writeln!(
            f,
            "- {} questions followed the correct format",
            summary.total - summary.format_failures
        )?;
        writeln!(
            f,
            "- {} questions contained uncommon words",
            summary.common_word_failures
        )?;
        writeln!(
            f,
            "- {} questions used only common words",
            summary.total - summary.common_word_failures
        )?;
        writeln!(
            f,
            "- Found {} uncommon word occurrences in total",
            summary.uncommon_occurrences
        )?;
        writeln!(
            f,
            "- Found {} unique uncommon words",
            summary.unique_uncommon_words
        )?;
        writeln!(
            f,
            "- {} questions contained previously used words",
            summary.word_reuse_failures
        )?;
        writeln!(
            f,
            "- {} questions used only new words",
            summary.total - summary.word_reuse_failures
        )?;

        writeln!(f)?;
        writeln!(f, "Overall Score:")?;
        writeln!(f, "{}", RULE)?;
        if let Some(model) = self.model {
            writeln!(f, "Model: {}", model)?;
        }
        writeln!(
            f,
            "Score: {} out of {} questions ({:.1}%) passed all criteria:",
            summary.perfect,
            summary.total,
            summary.score_percentage()
        )?;
        writeln!(f, "  1. Used exactly {} words", length)?;
        writeln!(f, "  2. Followed the format: {}", self.pattern)?;
        writeln!(f, "  3. Used only words from the common words list")?;
        writeln!(
            f,
            "  4. Did not use any words that appeared in previous questions"
        )
    }
}

struct RepeatedWords<'a> {
    ledger: &'a WordLedger,
}

impl fmt::Display for RepeatedWords<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repeated = self.ledger.repeated_words();
        if repeated.is_empty() {
            return writeln!(f, "No words were used more than once across all questions.");
        }

        writeln!(f, "Words used more than once across all questions:")?;
        for (word, count) in repeated {
            writeln!(f, "- '{}' appears {} times", word, count)?;
        }
        Ok(())
    }
}

struct GroupReport<'a> {
    evaluation: &'a GroupEvaluation,
}

impl fmt::Display for GroupReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let evaluation = self.evaluation;
        let expected = evaluation.expected_sentences;

        writeln!(f, "--- EVALUATION REPORT ---")?;
        writeln!(
            f,
            "Found {} potential sentences in the response.",
            evaluation.verdicts.len()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Total Valid Sentences: {} / {}",
            evaluation.valid_sentences(),
            expected
        )?;
        writeln!(f)?;

        if evaluation.has_violations() {
            writeln!(f, "--- ERRORS FOUND ---")?;
            for kind in ViolationKind::ALL {
                let messages = evaluation.messages(kind);
                if messages.is_empty() {
                    continue;
                }
                writeln!(f)?;
                writeln!(f, ">> {} ({}):", kind.title(), messages.len())?;
                for msg in messages {
                    writeln!(f, "   - {}", msg)?;
                }
            }
        }

        if !evaluation.duplicate_words.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                ">> Duplicate Words Found ({} unique duplicates):",
                evaluation.duplicate_words.len()
            )?;
            for word in &evaluation.duplicate_words {
                writeln!(f, "   - The word '{}' was used more than once.", word)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- FINAL SCORE ---")?;
        let score = evaluation.score();
        if evaluation.is_perfect() {
            writeln!(
                f,
                "Score: {}/{}. PERFECT! All rules were followed.",
                score, expected
            )?;
        } else {
            writeln!(
                f,
                "Score: {}/{}. The response failed due to errors or duplicate words.",
                score, expected
            )?;
        }
        writeln!(f, "------------------------")
    }
}
