use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

use nexttask::Renderer;
use nexttask::cli::Cli;
use nexttask::config::Config;
use nexttask::session::run_session;

fn setup_logging(log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nexttask")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("nexttask.log");

    // stdout belongs to the prompt, so logs go to a file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Config level first so RUST_LOG can override it
    let mut builder = env_logger::Builder::new();
    if let Some(level) = log_level {
        builder.parse_filters(level);
    }
    builder
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if !config.prompt.color {
        colored::control::set_override(false);
    }

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let renderer = Renderer::from_config(&config.prompt);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let task = run_session(stdin.lock(), stdout.lock(), renderer).context("Prompt session failed")?;

    match task {
        Some(task) => info!("Session produced task: {}", task),
        None => info!("Session ended without a task"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Logging is best effort; the prompt works without it
    if let Err(e) = setup_logging(loaded.config.log_level.as_deref()) {
        eprintln!("{} {:#}", "Logging disabled:".yellow(), e);
    }

    loaded.log_summary();

    run_application(&cli, &loaded.config).context("Application failed")?;

    Ok(())
}
