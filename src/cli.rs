use clap::Parser;
use std::path::PathBuf;

use crate::palette::ColorMap;

/// A terminal-based intensity LUT inspector
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Window center
    #[arg(short = 'c', long)]
    pub center: f64,

    /// Window width (must be greater than 1)
    #[arg(short = 'w', long)]
    pub width: f64,

    /// Rescale slope
    #[arg(long, default_value_t = 1.0)]
    pub slope: f64,

    /// Rescale intercept
    #[arg(long, default_value_t = 0.0)]
    pub intercept: f64,

    /// Table depth in slots (4096 covers 12-bit samples)
    #[arg(long, default_value_t = 4096)]
    pub depth: usize,

    /// Treat raw samples as signed (zero-centered table)
    #[arg(long)]
    pub signed: bool,

    /// Colormap: plain, invPlain, rainbow, hot or test
    #[arg(long, default_value = "plain")]
    pub colormap: ColorMap,

    /// Number of sample rows to print
    #[arg(short, long, default_value_t = 16)]
    pub rows: usize,

    /// Write a 256-column PNG preview of the windowed ramp
    #[arg(short, long, value_name = "FILE")]
    pub preview: Option<PathBuf>,
}
