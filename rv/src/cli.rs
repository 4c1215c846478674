//! CLI argument parsing for ralphview

use clap::Parser;
use std::path::PathBuf;

use crate::output::ColorMode;

/// ralphview - render a Ralph loop JSONL event stream from stdin
#[derive(Parser, Debug)]
#[command(
    name = "rv",
    about = "Colorized viewer for opencode/Ralph JSONL event streams read from stdin",
    version = env!("GIT_DESCRIBE"),
    args_override_self = true
)]
pub struct Cli {
    /// Show timestamps and session ids before each event
    #[arg(long)]
    pub debug: bool,

    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// When to color the output (overrides the config file)
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Stray positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}
