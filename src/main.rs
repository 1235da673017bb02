use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use solo_bench::dictionary::DictionaryLoader;
use solo_bench::generation::{resolve_api_key, OpenRouterClient, RunArtifacts};
use solo_bench::report::{render_pos_report, render_repeated_words};
use solo_bench::{BenchError, Config, SoloBench};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    // Word lists first: a broken list must not cost a generation request
    let bench = match SoloBench::new(&config) {
        Ok(bench) => bench,
        Err(e) => {
            eprintln!("Error loading word lists: {}", e);
            process::exit(1);
        }
    };

    let result = match config.model {
        Some(ref model) => run_generation(&bench, &config, model),
        None => run_offline(&bench, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Scores an existing file of sentences
fn run_offline(bench: &SoloBench, config: &Config) -> Result<(), BenchError> {
    let text = DictionaryLoader::read_text(&config.input_file)?;
    let sentences = bench.read_sentences(&text);
    info!(path = %config.input_file.display(), "loaded {} questions", sentences.len());

    let evaluation = bench.evaluate(&sentences);

    println!();
    print!("{}", render_pos_report(&evaluation, bench.pattern(), None));
    println!();
    print!("{}", render_repeated_words(&evaluation.ledger));
    Ok(())
}

/// Asks the model for sentences, then scores them
fn run_generation(bench: &SoloBench, config: &Config, model: &str) -> Result<(), BenchError> {
    let prompt = DictionaryLoader::read_text(&config.input_file)?;
    let api_key = resolve_api_key(&config.api_key_file)?;
    let client = OpenRouterClient::new(api_key, model)?;
    let artifacts = RunArtifacts::now(&config.output_dir, model);

    let run = bench.run_generation(&client, prompt.trim(), &artifacts)?;

    println!();
    print!(
        "{}",
        render_pos_report(&run.evaluation, bench.pattern(), Some(model))
    );
    println!();
    println!(
        "Saved detailed evaluation results to {}",
        artifacts.results.display()
    );
    println!();
    print!("{}", render_repeated_words(&run.evaluation.ledger));
    Ok(())
}
