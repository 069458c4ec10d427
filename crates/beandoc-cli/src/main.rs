use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use beandoc_cli::run_inspections;
use beandoc_inspect::InspectorRegistry;
use beandoc_model::load_model;
use beandoc_render::{FileSink, PageSink, StdoutSink};
use clap::Parser;
use tracing::info;

/// Generate wiki documentation for bean-style plugin classes.
///
/// Reads a class model emitted by the source-model provider, discovers bean
/// properties on classes realizing each registered base capability, and
/// renders one page per matched class.
#[derive(Debug, Parser)]
#[command(name = "beandoc", version, about)]
struct Cli {
    /// Path to the class model JSON.
    model: PathBuf,

    /// Directory containing page templates.
    #[arg(long, default_value = "templates")]
    templates: PathBuf,

    /// Directory rendered pages are written into.
    #[arg(long, default_value = "wiki")]
    out: PathBuf,

    /// Wiki namespace prefixed to every page name.
    #[arg(long, default_value = "Spec")]
    namespace: String,

    /// Print rendered pages to stdout instead of writing files.
    #[arg(long)]
    stdout: bool,
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = File::open(&cli.model)
        .with_context(|| format!("failed to open class model `{}`", cli.model.display()))?;
    let store = load_model(BufReader::new(file)).context("failed to load class model")?;
    info!(classes = store.len(), "class model loaded");

    let registry = InspectorRegistry::with_defaults();
    let mut sink: Box<dyn PageSink> = if cli.stdout {
        Box::new(StdoutSink)
    } else {
        Box::new(FileSink::new(&cli.out))
    };

    let summary = run_inspections(
        &store,
        &registry,
        &cli.templates,
        &cli.namespace,
        sink.as_mut(),
    )?;
    info!(
        published = summary.published.len(),
        failed = summary.failed,
        "documentation run complete"
    );
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
