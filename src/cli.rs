//! Command-line options for the terminal runner.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use blockfall::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_TICK_MS};

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
pub struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    pub width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    pub height: u16,

    /// Seed for a reproducible piece sequence (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between gravity steps
    #[arg(
        long,
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Write logs to this file; logging is off otherwise
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level filter (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
