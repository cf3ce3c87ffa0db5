//! klartext CLI - batch cleanup of material master-data descriptions.

use clap::Parser;
use klartext_batch::{read_rows, write_records, BatchRunner};
use klartext_cli::{Cli, CliError, ConsoleProgress, Formatter, Settings};
use klartext_extractor::{Orchestrator, ServiceExtractor};
use klartext_llm::OllamaGenerator;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> klartext_cli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(&cli);

    let extractor_config = settings.extractor_config();
    extractor_config.validate().map_err(CliError::Config)?;

    let generator = OllamaGenerator::with_timeout(
        &settings.endpoint,
        &settings.model,
        Duration::from_secs(settings.request_timeout_secs),
    );
    let service = ServiceExtractor::new(generator, extractor_config.retry_policy());
    let runner = BatchRunner::new(Orchestrator::new(service));

    let rows = read_rows(&cli.input)?;
    let total = rows.len();
    info!(
        rows = total,
        input = %cli.input.display(),
        model = %settings.model,
        "starting batch"
    );

    let formatter = Formatter::new(settings.color);
    let mut progress = ConsoleProgress::new(formatter, total, cli.quiet);

    let started = Instant::now();
    let report = runner.run(rows, &mut progress).await;

    write_records(&cli.output, &report.records)?;
    info!(output = %cli.output.display(), "results written");

    println!(
        "{}",
        formatter.summary(&report.counters, report.records.len(), started.elapsed())
    );

    Ok(())
}
