//! Sentence and word tokenizer
//!
//! Turns a generator response (one sentence per line, optionally numbered)
//! into cleaned, lowercase word tokens.

/// Characters removed by the strict punctuation policy
const STRIPPED_PUNCTUATION: [char; 6] = ['.', ',', '?', '!', ':', ';'];

/// How raw words are turned into cleaned tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningPolicy {
    /// Split on whitespace, remove `. , ? ! : ;` from each word, lowercase.
    /// Other symbols and digits survive.
    PunctuationStrip,
    /// Lowercase the line and keep maximal runs of ASCII letters.
    /// Everything else separates words.
    LetterRuns,
}

/// One candidate sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Line text with the enumeration prefix removed
    pub text: String,
    /// Cleaned tokens, in the order they appear in `text`
    pub words: Vec<String>,
}

impl Sentence {
    /// Whitespace-delimited tokens as authored
    pub fn raw_tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Tokenizer for benchmark responses
#[derive(Debug, Clone)]
pub struct Tokenizer {
    policy: CleaningPolicy,
    numbered_only: bool,
}

impl Tokenizer {
    pub fn new(policy: CleaningPolicy) -> Self {
        Self {
            policy,
            numbered_only: false,
        }
    }

    /// Only accept lines that start with an enumeration prefix ("12. ").
    /// Used on raw model output, where the numbered list is surrounded by chatter.
    pub fn numbered_only(mut self) -> Self {
        self.numbered_only = true;
        self
    }

    /// Splits text into sentences. Lines that end up without any token are
    /// skipped, so sentence numbering always counts real content.
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let body = match strip_enumeration(line) {
                Some(rest) => rest,
                None if self.numbered_only => continue,
                None => line,
            };
            if body.is_empty() {
                continue;
            }

            let words = self.clean_line(body);
            if words.is_empty() {
                continue;
            }

            sentences.push(Sentence {
                text: body.to_string(),
                words,
            });
        }

        sentences
    }

    /// Cleans a single line into tokens according to the policy
    pub fn clean_line(&self, line: &str) -> Vec<String> {
        match self.policy {
            CleaningPolicy::PunctuationStrip => line
                .split_whitespace()
                .map(clean_word)
                .filter(|w| !w.is_empty())
                .collect(),
            CleaningPolicy::LetterRuns => letter_runs(&line.to_lowercase()),
        }
    }
}

/// Removes the strict punctuation set from a word and lowercases it
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// If the line starts with `<digits>.`, returns the rest with leading
/// whitespace removed.
pub fn strip_enumeration(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.').map(str::trim)
}

fn letter_runs(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_ascii_lowercase() {
            current.push(ch);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_word_strips_only_listed_punctuation() {
        assert_eq!(clean_word("Dog."), "dog");
        assert_eq!(clean_word("¿Why?!"), "¿why");
        assert_eq!(clean_word("well-known;"), "well-known");
        assert_eq!(clean_word("..."), "");
    }

    #[test]
    fn test_strip_enumeration() {
        assert_eq!(strip_enumeration("12. Run big cat dog"), Some("Run big cat dog"));
        assert_eq!(strip_enumeration("3.Run"), Some("Run"));
        assert_eq!(strip_enumeration("7."), Some(""));
        assert_eq!(strip_enumeration("Run big cat dog"), None);
        assert_eq!(strip_enumeration("12 Run"), None);
        assert_eq!(strip_enumeration("3.5 apples"), Some("5 apples"));
    }

    #[test]
    fn test_split_plain_and_numbered_lines() {
        let tokenizer = Tokenizer::new(CleaningPolicy::PunctuationStrip);
        let sentences = tokenizer.split_sentences("1. Run Big Cat Dog.\n\nEat red apple pie\n2.   \n");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Run Big Cat Dog.");
        assert_eq!(sentences[0].words, vec!["run", "big", "cat", "dog"]);
        assert_eq!(sentences[1].words, vec!["eat", "red", "apple", "pie"]);
    }

    #[test]
    fn test_punctuation_only_line_is_not_a_sentence() {
        let tokenizer = Tokenizer::new(CleaningPolicy::PunctuationStrip);
        let sentences = tokenizer.split_sentences("...\n?!\nJump high\n");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words, vec!["jump", "high"]);
    }

    #[test]
    fn test_punctuation_strip_keeps_digits_and_symbols() {
        let tokenizer = Tokenizer::new(CleaningPolicy::PunctuationStrip);
        assert_eq!(
            tokenizer.clean_line("Buy 3 red-hot \"apples\""),
            vec!["buy", "3", "red-hot", "\"apples\""]
        );
    }

    #[test]
    fn test_letter_runs_drop_digits_and_symbols() {
        let tokenizer = Tokenizer::new(CleaningPolicy::LetterRuns);
        assert_eq!(
            tokenizer.clean_line("Buy 3 red-hot \"Apples\""),
            vec!["buy", "red", "hot", "apples"]
        );
        assert_eq!(tokenizer.clean_line("abc1def"), vec!["abc", "def"]);
        assert!(tokenizer.clean_line("42 !!").is_empty());
    }

    #[test]
    fn test_letter_runs_numbering_removed() {
        let tokenizer = Tokenizer::new(CleaningPolicy::LetterRuns);
        let sentences = tokenizer.split_sentences("10. Qwert Asdfg Zxcvb Yuiop\n");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words, vec!["qwert", "asdfg", "zxcvb", "yuiop"]);
    }

    #[test]
    fn test_numbered_only_skips_chatter() {
        let tokenizer = Tokenizer::new(CleaningPolicy::PunctuationStrip).numbered_only();
        let text = "Here are your sentences:\n1. Run big cat dog\nHope this helps!\n2. Eat red apple pie";
        let sentences = tokenizer.split_sentences(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].text, "Eat red apple pie");
    }

    #[test]
    fn test_cleaned_never_longer_than_raw() {
        let tokenizer = Tokenizer::new(CleaningPolicy::PunctuationStrip);
        for line in ["Run , big . cat dog", "a b c", "!!! ??? word", "x.y,z"] {
            for sentence in tokenizer.split_sentences(line) {
                assert!(sentence.len() <= sentence.raw_tokens().count());
            }
        }
    }
}
