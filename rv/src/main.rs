//! ralphview - Ralph loop event stream viewer
//!
//! CLI entry point: reads JSONL events from stdin and renders them to stdout.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use ralphview::cli::Cli;
use ralphview::config::Config;
use ralphview::output::{ColorMode, PlainWriter, TerminalWriter};
use ralphview::render::Renderer;
use ralphview::stream::StreamProcessor;

fn parse_level(s: &str) -> Option<tracing::Level> {
    match s.to_uppercase().as_str() {
        "TRACE" => Some(tracing::Level::TRACE),
        "DEBUG" => Some(tracing::Level::DEBUG),
        "INFO" => Some(tracing::Level::INFO),
        "WARN" | "WARNING" => Some(tracing::Level::WARN),
        "ERROR" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Logs go to a file; stdout carries the rendered stream
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ralphview")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => parse_level(s).unwrap_or_else(|| {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
            tracing::Level::INFO
        }),
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("ralphview.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn run() -> Result<()> {
    // Usage errors exit 1 like any other failure; --help and --version exit 0
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            std::process::exit(1);
        }
        e.exit()
    });

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Interrupting a live tail is a normal way to stop
    ctrlc::set_handler(|| {
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")?;

    let color = cli.color.unwrap_or(config.color);
    color.apply();
    let debug_mode = cli.debug || config.debug;
    debug!(?color, debug_mode, limits = ?config.limits, "run: starting stream");

    let renderer = Renderer::new(config.limits);
    let processor = StreamProcessor::new(&renderer, debug_mode);
    let input = io::stdin().lock();
    let output = io::stdout().lock();

    let stats = match color {
        ColorMode::Never => processor.run(input, &mut PlainWriter::new(output)),
        ColorMode::Auto | ColorMode::Always => processor.run(input, &mut TerminalWriter::new(output)),
    }?;

    info!(
        lines = stats.lines,
        events = stats.events,
        parse_errors = stats.parse_errors,
        "Stream finished"
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
