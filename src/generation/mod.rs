//! Candidate generation
//!
//! - `client`: the remote completion endpoint producing part-of-speech sentences
//! - `artifacts`: names of the files saved for each generation run
//! - `prompt`: the task prompt of the group-order benchmark

pub mod artifacts;
pub mod client;
pub mod prompt;

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{info, warn};

use crate::config::GroupBenchSettings;
use crate::dictionary::GroupMap;
use crate::error::BenchError;
use crate::persistence::write_atomic;

pub use artifacts::{numbered_list, safe_filename, RunArtifacts};
pub use client::{extract_completion, CompletionClient, OpenRouterClient, DEFAULT_MODEL};
pub use prompt::group_bench_prompt;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// API key from the key file, then the environment, then an interactive prompt
pub fn resolve_api_key(key_file: &Path) -> Result<String, BenchError> {
    match fs::read_to_string(key_file) {
        Ok(key) => {
            info!(path = %key_file.display(), "loaded API key");
            return Ok(key.trim().to_string());
        }
        Err(e) => warn!(path = %key_file.display(), "API key file not readable: {}", e),
    }

    if let Ok(key) = env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            return Ok(key.trim().to_string());
        }
    }

    let stdin_error = |source: io::Error| BenchError::Load {
        path: PathBuf::from("<stdin>"),
        source,
    };
    print!("Please enter your OpenRouter API key: ");
    io::stdout().flush().map_err(stdin_error)?;
    let mut key = String::new();
    io::stdin().lock().read_line(&mut key).map_err(stdin_error)?;
    Ok(key.trim().to_string())
}

/// Files produced by the group benchmark generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBenchFiles {
    pub word_data: PathBuf,
    pub prompt: PathBuf,
    pub response: PathBuf,
}

impl GroupBenchFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            word_data: dir.join("sgb_word_data.json"),
            prompt: dir.join("sgb_input.txt"),
            response: dir.join("sgb_response.txt"),
        }
    }
}

/// Draws a new vocabulary, then writes the word-to-group map, the prompt and
/// an empty response file to fill in by hand.
pub fn generate_group_bench<R: Rng>(
    settings: &GroupBenchSettings,
    rng: &mut R,
    files: &GroupBenchFiles,
) -> Result<GroupMap, BenchError> {
    let map = GroupMap::generate(
        rng,
        settings.num_words,
        settings.word_length,
        settings.num_groups,
    );

    map.save(&files.word_data)?;
    info!(path = %files.word_data.display(), words = map.len(), "saved word-to-group map");

    let prompt = group_bench_prompt(settings, &map);
    write_atomic(&files.prompt, prompt.as_bytes())?;
    info!(path = %files.prompt.display(), "saved prompt");

    write_atomic(&files.response, b"")?;
    info!(path = %files.response.display(), "created empty response file");

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_key_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("OpenRouterAPIKey.txt");
        fs::write(&path, "  sk-or-test\n").unwrap();
        assert_eq!(resolve_api_key(&path).unwrap(), "sk-or-test");
    }

    #[test]
    fn test_generate_group_bench_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = GroupBenchFiles::in_dir(dir.path());
        let settings = GroupBenchSettings {
            num_words: 20,
            ..Default::default()
        };

        let map = generate_group_bench(&settings, &mut StdRng::seed_from_u64(1), &files).unwrap();

        assert_eq!(map.len(), 20);
        assert_eq!(GroupMap::load(&files.word_data).unwrap(), map);
        let prompt = fs::read_to_string(&files.prompt).unwrap();
        let word_list = prompt.split("---\n").nth(1).unwrap();
        assert_eq!(word_list.lines().count(), 20);
        assert_eq!(fs::read_to_string(&files.response).unwrap(), "");
    }
}
