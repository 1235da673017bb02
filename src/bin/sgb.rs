use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use solo_bench::config::GroupCommand;
use solo_bench::dictionary::DictionaryLoader;
use solo_bench::generation::{generate_group_bench, GroupBenchFiles};
use solo_bench::report::render_group_report;
use solo_bench::{BenchError, GroupBench, GroupConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match GroupConfig::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            GroupConfig::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        GroupConfig::print_help();
        return;
    }

    let result = match config.command {
        GroupCommand::Generate => generate(&config),
        GroupCommand::Eval => evaluate(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn generate(config: &GroupConfig) -> Result<(), BenchError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let files = GroupBenchFiles::in_dir(&config.output_dir);

    generate_group_bench(&config.settings, &mut rng, &files)?;

    println!("Task configured with group order: {:?}", config.settings.group_order);
    println!(
        "Paste the model's answer into {} and run `sgb eval`.",
        files.response.display()
    );
    Ok(())
}

fn evaluate(config: &GroupConfig) -> Result<(), BenchError> {
    let bench = GroupBench::new(config)?;
    let response = DictionaryLoader::read_text(&config.response_file)?;
    info!(path = %config.response_file.display(), "loaded response");

    let evaluation = bench.evaluate_text(&response);
    print!("{}", render_group_report(&evaluation));
    Ok(())
}
