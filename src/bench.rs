//! Benchmark drivers tying tokenizer, vocabularies and evaluators together

use tracing::{error, info};

use crate::config::{Config, GroupBenchSettings, GroupConfig};
use crate::dictionary::{DictionaryLoader, GroupMap, Lexicon};
use crate::error::BenchError;
use crate::evaluation::{GroupEvaluation, GroupEvaluator, PosEvaluation, PosEvaluator};
use crate::generation::{numbered_list, CompletionClient, RunArtifacts};
use crate::grammar::{CleaningPolicy, Sentence, SentencePattern, Tokenizer};
use crate::persistence::{write_atomic, write_json};
use crate::report::{ErrorRecord, RunRecord};

/// Outcome of a generate-then-score run
#[derive(Debug, Clone)]
pub struct GenerationRun {
    pub sentences: Vec<Sentence>,
    pub evaluation: PosEvaluation,
    pub record: RunRecord,
}

/// Part-of-speech benchmark
pub struct SoloBench {
    lexicon: Lexicon,
    pattern: SentencePattern,
    tokenizer: Tokenizer,
}

impl SoloBench {
    /// Loads the four word lists named by the configuration
    pub fn new(config: &Config) -> Result<Self, BenchError> {
        let lexicon = DictionaryLoader::load_lexicon(
            &config.common_words_file,
            &config.verbs_file,
            &config.adjectives_file,
            &config.nouns_file,
        )?;
        Ok(Self::with_lexicon(lexicon))
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            pattern: SentencePattern::default(),
            tokenizer: Tokenizer::new(CleaningPolicy::PunctuationStrip),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn pattern(&self) -> &SentencePattern {
        &self.pattern
    }

    /// Sentences of an input file: every non-blank line, numbered or not
    pub fn read_sentences(&self, text: &str) -> Vec<Sentence> {
        self.tokenizer.split_sentences(text)
    }

    /// Sentences of raw model output: only the numbered lines
    pub fn extract_responses(&self, response: &str) -> Vec<Sentence> {
        self.tokenizer.clone().numbered_only().split_sentences(response)
    }

    pub fn evaluate(&self, sentences: &[Sentence]) -> PosEvaluation {
        let evaluation = PosEvaluator::new(&self.lexicon)
            .with_pattern(self.pattern.clone())
            .evaluate_all(sentences);
        info!(
            sentences = sentences.len(),
            passed = evaluation.score(),
            "evaluation finished"
        );
        evaluation
    }

    /// Reads and scores a plain input text
    pub fn evaluate_text(&self, text: &str) -> PosEvaluation {
        self.evaluate(&self.read_sentences(text))
    }

    /// Sends the prompt to the model, saves the artifacts and scores the
    /// numbered sentences of the reply.
    ///
    /// The raw output file is always written. When the request fails it
    /// holds the error text, an error summary is saved next to it and the
    /// run stops before scoring.
    pub fn run_generation(
        &self,
        client: &dyn CompletionClient,
        prompt: &str,
        artifacts: &RunArtifacts,
    ) -> Result<GenerationRun, BenchError> {
        let model = client.model_name();
        let raw_output_file = artifacts.raw_output.display().to_string();

        let response = client.complete(prompt);
        let raw = match &response {
            Ok(text) => text.clone(),
            Err(e) => format!("ERROR: {}", e),
        };
        write_atomic(&artifacts.raw_output, raw.as_bytes())?;
        info!(path = %raw_output_file, "saved raw model output");

        let text = match response {
            Ok(text) => text,
            Err(e) => {
                error!(model, "generation failed: {}", e);
                write_json(
                    &artifacts.error_summary,
                    &ErrorRecord::new(model, &raw, &raw_output_file),
                )?;
                info!(path = %artifacts.error_summary.display(), "saved error summary");
                return Err(e.into());
            }
        };

        let sentences = self.extract_responses(&text);
        info!(model, sentences = sentences.len(), "extracted generated sentences");

        let formatted_output_file = artifacts.formatted_output.display().to_string();
        write_atomic(&artifacts.formatted_output, numbered_list(&sentences).as_bytes())?;

        let evaluation = self.evaluate(&sentences);
        let record = RunRecord::new(
            model,
            &evaluation.verdicts,
            &raw_output_file,
            &formatted_output_file,
        );
        write_json(&artifacts.results, &record)?;
        info!(path = %artifacts.results.display(), "saved detailed evaluation results");

        Ok(GenerationRun {
            sentences,
            evaluation,
            record,
        })
    }
}

/// Group-order benchmark
pub struct GroupBench {
    map: GroupMap,
    settings: GroupBenchSettings,
    tokenizer: Tokenizer,
}

impl GroupBench {
    /// Loads the word-to-group map named by the configuration
    pub fn new(config: &GroupConfig) -> Result<Self, BenchError> {
        let map = GroupMap::load(&config.data_file)?;
        info!(path = %config.data_file.display(), words = map.len(), "loaded word-to-group map");
        Ok(Self::with_map(map, config.settings.clone()))
    }

    pub fn with_map(map: GroupMap, settings: GroupBenchSettings) -> Self {
        Self {
            map,
            settings,
            tokenizer: Tokenizer::new(CleaningPolicy::LetterRuns),
        }
    }

    pub fn evaluate_text(&self, response: &str) -> GroupEvaluation {
        let sentences = self.tokenizer.split_sentences(response);
        GroupEvaluator::new(
            &self.map,
            self.settings.group_order.clone(),
            self.settings.num_sentences,
        )
        .evaluate_all(&sentences)
    }
}
