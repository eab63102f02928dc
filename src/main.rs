use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use voilut::cli::Args;
use voilut::lut::RescaleLut;
use voilut::pipeline::DisplayPipeline;
use voilut::types::{RescaleParams, WindowLevel};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

/// Build the pipeline for the given arguments and report on it
fn run(args: &Args) -> Result<()> {
    let params = RescaleParams::new(args.slope, args.intercept);
    let rescale = Arc::new(RescaleLut::new(params, args.depth));

    let mut pipeline = DisplayPipeline::new(Arc::clone(&rescale), args.signed, args.colormap);
    pipeline.set_center_and_width(args.center, args.width)?;

    let level = WindowLevel::new(args.center, args.width);
    println!(
        "{params}; {level}; colormap={colormap}; depth={depth}{signed}",
        colormap = args.colormap,
        depth = args.depth,
        signed = if args.signed { " (signed)" } else { "" },
    );

    print_table(&pipeline, &rescale, args);

    if let Some(path) = &args.preview {
        let strip = pipeline.preview_strip(32)?;
        strip
            .save(path)
            .with_context(|| format!("Failed to write preview to {}", path.display()))?;
        println!("Preview written to {}", path.display());
    }

    Ok(())
}

/// Print raw -> rescaled -> display -> RGB rows sampled across the domain
fn print_table(pipeline: &DisplayPipeline, rescale: &RescaleLut, args: &Args) {
    let depth = args.depth;
    let half = (depth / 2) as i32;
    let step = (depth / args.rows.max(1)).max(1);

    println!("{:>8} {:>12} {:>8}  rgb", "raw", "rescaled", "display");
    for index in (0..depth).step_by(step) {
        let raw = if args.signed {
            index as i32 - half
        } else {
            index as i32
        };
        let rescaled = rescale.value(index);
        let display = pipeline.window().value(raw);
        let [r, g, b] = pipeline.rgb(raw);
        println!("{raw:>8} {rescaled:>12.2} {display:>8}  #{r:02x}{g:02x}{b:02x}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voilut::lut::LutError;
    use voilut::palette::ColorMap;

    fn args(center: f64, width: f64) -> Args {
        Args {
            center,
            width,
            slope: 1.0,
            intercept: 0.0,
            depth: 4096,
            signed: false,
            colormap: ColorMap::Plain,
            rows: 4,
            preview: None,
        }
    }

    #[test]
    fn test_run_reports_invalid_width() {
        let result = run(&args(100.0, 1.0));
        let err = result.unwrap_err();
        assert_matches::assert_matches!(
            err.downcast_ref::<LutError>(),
            Some(LutError::InvalidWindowWidth { .. })
        );
    }

    #[test]
    fn test_run_writes_preview_strip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");

        let mut args = args(100.0, 200.0);
        args.colormap = ColorMap::Hot;
        args.preview = Some(path.clone());

        run(&args).expect("pipeline run should succeed");

        let strip = image::open(&path).expect("preview should be a valid image");
        assert_eq!(strip.width(), 256);
        assert_eq!(strip.height(), 32);
    }
}
