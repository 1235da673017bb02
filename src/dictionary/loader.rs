//! Word-list loading from files

use std::fs;
use std::path::Path;

use tracing::info;

use super::vocabulary::{Lexicon, Vocabulary};
use crate::error::BenchError;

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Reads a text file as UTF-8, falling back to Latin-1 when the bytes
    /// are not valid UTF-8. The fallback cannot fail.
    pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, BenchError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| BenchError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(decode_lossy(bytes))
    }

    /// Loads a word list into a vocabulary set
    ///
    /// Two formats are accepted:
    /// - comma separated: `run, jump, swim` (used as soon as the file contains a comma)
    /// - one word per line
    pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vocabulary, BenchError> {
        let content = Self::read_text(path)?;
        Ok(Self::parse_word_list(&content))
    }

    /// Parses word-list content. Entries are trimmed and lowercased.
    ///
    /// In the comma format empty entries (trailing or doubled commas) are
    /// kept as the empty string. It never matches a cleaned token.
    pub fn parse_word_list(content: &str) -> Vocabulary {
        if content.contains(',') {
            Vocabulary::from_words(content.split(',').map(|w| w.trim().to_lowercase()))
        } else {
            Vocabulary::from_words(
                content
                    .lines()
                    .map(|w| w.trim().to_lowercase())
                    .filter(|w| !w.is_empty()),
            )
        }
    }

    /// Loads the four word sets of the part-of-speech benchmark
    pub fn load_lexicon(
        common: &Path,
        verbs: &Path,
        adjectives: &Path,
        nouns: &Path,
    ) -> Result<Lexicon, BenchError> {
        let common = Self::load_logged(common, "common words")?;
        let verbs = Self::load_logged(verbs, "verbs")?;
        let adjectives = Self::load_logged(adjectives, "adjectives")?;
        let nouns = Self::load_logged(nouns, "nouns")?;

        Ok(Lexicon::new(common, verbs, adjectives, nouns))
    }

    fn load_logged(path: &Path, label: &str) -> Result<Vocabulary, BenchError> {
        let vocab = Self::load_word_list(path)?;
        info!(path = %path.display(), "loaded {} {}", vocab.len(), label);
        Ok(vocab)
    }
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        // Latin-1 maps every byte to the code point of the same value
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_comma_format() {
        let vocab = DictionaryLoader::parse_word_list("cat, dog, cat");
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("cat"));
        assert!(vocab.contains("dog"));
    }

    #[test]
    fn test_newline_format() {
        let vocab = DictionaryLoader::parse_word_list("cat\ndog\ncat");
        assert_eq!(vocab, DictionaryLoader::parse_word_list("cat, dog, cat"));
    }

    #[test]
    fn test_newline_format_trims_lowercases_and_skips_blanks() {
        let vocab = DictionaryLoader::parse_word_list("  Apple \r\n\n\tBANANA\n   \n");
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("apple"));
        assert!(vocab.contains("banana"));
    }

    #[test]
    fn test_comma_format_keeps_empty_entries() {
        let vocab = DictionaryLoader::parse_word_list("run,,jump,\n");
        assert!(vocab.contains(""));
        assert!(vocab.contains("run"));
        assert!(vocab.contains("jump"));
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_comma_anywhere_switches_format() {
        let vocab = DictionaryLoader::parse_word_list("run\njump, swim\n");
        // "run\njump" is a single comma field
        assert!(vocab.contains("run\njump"));
        assert!(vocab.contains("swim"));
    }

    #[test]
    fn test_load_utf8_file() {
        let file = write_temp("café\nniño\n".as_bytes());
        let vocab = DictionaryLoader::load_word_list(file.path()).unwrap();
        assert!(vocab.contains("café"));
        assert!(vocab.contains("niño"));
    }

    #[test]
    fn test_latin1_fallback() {
        // "café" encoded as Latin-1: 0xE9 alone is invalid UTF-8
        let file = write_temp(b"caf\xe9\nSOL\n");
        let vocab = DictionaryLoader::load_word_list(file.path()).unwrap();
        assert!(vocab.contains("café"));
        assert!(vocab.contains("sol"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = DictionaryLoader::load_word_list("does/not/exist.txt").unwrap_err();
        match err {
            BenchError::Load { path, .. } => assert_eq!(path, Path::new("does/not/exist.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
