//! textgrab: print the text found in an image as a JSON object.

mod cli;
mod output;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use output::Output;

fn main() {
    // Logs go to stderr; stdout carries only the JSON record.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Printed directly so RUST_LOG cannot silence the failure.
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    debug!("Reading {:?} with {}", cli.image_path, cli.engine);

    let recognizer =
        textgrab_engine::build_recognizer(cli.engine, &cli.lang, cli.models_dir.as_deref())?;
    let record = textgrab_engine::extract(recognizer.as_ref(), &cli.image_path)?;

    Output::stdout().print_record(&record)
}
