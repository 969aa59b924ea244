use std::path::PathBuf;

use clap::Parser;

/// Lattice: headless driver for the tiling browser layout core.
#[derive(Parser, Debug)]
#[command(name = "lattice", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Action script to replay, one command per line. Reads stdin when
    /// omitted.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Width of the headless viewport used for geometric navigation.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Height of the headless viewport.
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,
}

pub fn parse() -> Args {
    Args::parse()
}
