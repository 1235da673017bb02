//! Configuration and CLI arguments

use std::path::PathBuf;

use crate::dictionary::GroupId;
use crate::generation::DEFAULT_MODEL;

/// Settings of the `solo-bench` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Model to query; `None` scores an existing file instead
    pub model: Option<String>,
    /// Sentences to score, or the prompt when a model is set
    pub input_file: PathBuf,
    pub common_words_file: PathBuf,
    pub verbs_file: PathBuf,
    pub adjectives_file: PathBuf,
    pub nouns_file: PathBuf,
    /// File holding the OpenRouter API key
    pub api_key_file: PathBuf,
    /// Where generation artifacts are written
    pub output_dir: PathBuf,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: None,
            input_file: PathBuf::from("eval.txt"),
            common_words_file: PathBuf::from("words.txt"),
            verbs_file: PathBuf::from("verbs.txt"),
            adjectives_file: PathBuf::from("adjectives.txt"),
            nouns_file: PathBuf::from("nouns.txt"),
            api_key_file: PathBuf::from("OpenRouterAPIKey.txt"),
            output_dir: PathBuf::from("."),
            show_help: false,
        }
    }
}

impl Config {
    /// Default prompt file when generating
    pub const DEFAULT_PROMPT_FILE: &'static str = "SOLO_bench_Input.txt";

    /// Parses `solo-bench [--model=<name>|--generate] [INPUT] [COMMON] [VERBS] [ADJECTIVES] [NOUNS]`
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut positionals: Vec<String> = Vec::new();

        for (i, arg) in args.into_iter().skip(1).enumerate() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "--generate" if i == 0 => {
                    config.model = Some(DEFAULT_MODEL.to_string());
                }
                _ if arg.starts_with("--model=") => {
                    if i != 0 {
                        return Err("--model=<MODEL> must be the first argument".to_string());
                    }
                    let model = &arg["--model=".len()..];
                    if model.is_empty() {
                        return Err("--model requires a value".to_string());
                    }
                    config.model = Some(model.to_string());
                }
                _ if arg.starts_with("--output-dir=") => {
                    config.output_dir = PathBuf::from(&arg["--output-dir=".len()..]);
                }
                _ => {
                    if arg.starts_with('-') {
                        return Err(format!("Unknown option: {}", arg));
                    }
                    positionals.push(arg);
                }
            }
        }

        if config.model.is_some() {
            config.input_file = PathBuf::from(Self::DEFAULT_PROMPT_FILE);
        }

        if positionals.len() > 5 {
            return Err(format!(
                "Too many arguments: expected at most 5 files, got {}",
                positionals.len()
            ));
        }

        let targets = [
            &mut config.input_file,
            &mut config.common_words_file,
            &mut config.verbs_file,
            &mut config.adjectives_file,
            &mut config.nouns_file,
        ];
        for (target, value) in targets.into_iter().zip(positionals) {
            *target = PathBuf::from(value);
        }

        Ok(config)
    }

    pub fn print_help() {
        println!(
            r#"solo-bench - Lexical constraint benchmark (Verb + Adjective + Noun + Noun)

USAGE:
    solo-bench [--model=<MODEL> | --generate] [INPUT] [COMMON] [VERBS] [ADJECTIVES] [NOUNS]

ARGUMENTS:
    [INPUT]       Sentences to score (default: eval.txt)
                  With a model: prompt to send (default: SOLO_bench_Input.txt)
    [COMMON]      Allowed words (default: words.txt)
    [VERBS]       Verb list (default: verbs.txt)
    [ADJECTIVES]  Adjective list (default: adjectives.txt)
    [NOUNS]       Noun list (default: nouns.txt)

OPTIONS:
    -h, --help              Show this help
    --model=<MODEL>         Generate the sentences with MODEL through OpenRouter (must come first)
    --generate              Same as --model={DEFAULT_MODEL}
    --output-dir=<DIR>      Directory for generation artifacts (default: .)

The API key is read from OpenRouterAPIKey.txt, then $OPENROUTER_API_KEY.
Set RUST_LOG=debug for per-sentence diagnostics.

EXAMPLES:
    solo-bench eval.txt words.txt verbs.txt adjectives.txt nouns.txt
    solo-bench --model=openai/gpt-4o-mini SOLO_bench_Input.txt"#,
            DEFAULT_MODEL = DEFAULT_MODEL
        );
    }
}

/// Constants of the group-order benchmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBenchSettings {
    pub num_words: usize,
    pub word_length: usize,
    pub num_groups: GroupId,
    pub group_order: Vec<GroupId>,
    pub num_sentences: usize,
}

impl Default for GroupBenchSettings {
    fn default() -> Self {
        Self {
            num_words: 400,
            word_length: 5,
            num_groups: 4,
            group_order: vec![4, 1, 3, 2],
            num_sentences: 50,
        }
    }
}

impl GroupBenchSettings {
    /// Parses "4,1,3,2" and checks every id is a known group
    pub fn parse_order(&self, value: &str) -> Result<Vec<GroupId>, String> {
        let order = value
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<GroupId>()
                    .map_err(|_| format!("Invalid group id in order: '{}'", part.trim()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(bad) = order
            .iter()
            .find(|&&g| g == 0 || g > self.num_groups)
        {
            return Err(format!(
                "Group {} out of range 1..={}",
                bad, self.num_groups
            ));
        }
        Ok(order)
    }
}

/// Sub-commands of the `sgb` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCommand {
    Generate,
    Eval,
}

/// Settings of the `sgb` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub command: GroupCommand,
    pub response_file: PathBuf,
    pub data_file: PathBuf,
    /// Directory receiving the generated files
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub settings: GroupBenchSettings,
    pub show_help: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            command: GroupCommand::Eval,
            response_file: PathBuf::from("sgb_response.txt"),
            data_file: PathBuf::from("sgb_word_data.json"),
            output_dir: PathBuf::from("."),
            seed: None,
            settings: GroupBenchSettings::default(),
            show_help: false,
        }
    }
}

impl GroupConfig {
    /// Parses `sgb generate [--seed=N] [--order=A,B,C,D] [--output-dir=DIR]`
    /// or `sgb eval [RESPONSE] [DATA] [--order=A,B,C,D]`
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = GroupConfig::default();
        let mut args_iter = args.into_iter().skip(1);

        match args_iter.next().as_deref() {
            Some("generate") => config.command = GroupCommand::Generate,
            Some("eval") => config.command = GroupCommand::Eval,
            Some("-h") | Some("--help") | None => {
                config.show_help = true;
                return Ok(config);
            }
            Some(other) => return Err(format!("Unknown command: {}", other)),
        }

        let mut positionals = Vec::new();
        for arg in args_iter {
            if arg == "-h" || arg == "--help" {
                config.show_help = true;
                return Ok(config);
            } else if let Some(value) = arg.strip_prefix("--order=") {
                config.settings.group_order = config.settings.parse_order(value)?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid seed: {}", value))?,
                );
            } else if let Some(value) = arg.strip_prefix("--output-dir=") {
                config.output_dir = PathBuf::from(value);
            } else if arg.starts_with('-') {
                return Err(format!("Unknown option: {}", arg));
            } else {
                positionals.push(arg);
            }
        }

        match config.command {
            GroupCommand::Generate if !positionals.is_empty() => {
                return Err("generate takes no positional arguments".to_string());
            }
            GroupCommand::Eval if positionals.len() > 2 => {
                return Err("eval takes at most RESPONSE and DATA".to_string());
            }
            _ => {}
        }

        let mut positionals = positionals.into_iter();
        if let Some(response) = positionals.next() {
            config.response_file = PathBuf::from(response);
        }
        if let Some(data) = positionals.next() {
            config.data_file = PathBuf::from(data);
        }

        Ok(config)
    }

    pub fn print_help() {
        println!(
            r#"sgb - Sentence group benchmark

USAGE:
    sgb generate [--seed=<N>] [--order=<A,B,C,D>] [--output-dir=<DIR>]
    sgb eval [RESPONSE] [DATA] [--order=<A,B,C,D>]

COMMANDS:
    generate    Draw a random vocabulary and write sgb_word_data.json,
                sgb_input.txt (the prompt) and an empty sgb_response.txt
    eval        Score a saved model response

ARGUMENTS:
    [RESPONSE]  Model output (default: sgb_response.txt)
    [DATA]      Word-to-group map (default: sgb_word_data.json)

OPTIONS:
    -h, --help              Show this help
    --order=<A,B,C,D>       Required group order (default: 4,1,3,2)
    --seed=<N>              Seed for a reproducible vocabulary
    --output-dir=<DIR>      Directory for generated files (default: .)"#
        );
    }
}
