//! Command-line converter from a grayscale photograph to a PROGMEM pixel
//! array for a monochrome LCD panel.
//!
//! Reads one input image, quantizes it to the panel grid, writes the array
//! declaration into the output directory, and saves a posterized preview
//! bitmap next to it (best-effort).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use lcdforge_core::{
    decode_grayscale, encode_array, quantize, render_preview, FilterType, QuantizeConfig,
};

#[derive(Debug, Parser)]
#[command(name = "lcdforge")]
#[command(about = "Convert a grayscale photo into a PROGMEM pixel array for a monochrome LCD panel")]
struct Args {
    /// Path to the input image (PNG or JPEG)
    image: PathBuf,

    /// Directory the header and preview bitmap are written to
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// Target panel width in pixels
    #[arg(long, default_value_t = lcdforge_core::PANEL_WIDTH)]
    width: u32,

    /// Target panel height in pixels
    #[arg(long, default_value_t = lcdforge_core::PANEL_HEIGHT)]
    height: u32,

    /// Number of gray levels the panel can display
    #[arg(long, default_value_t = lcdforge_core::PANEL_LEVELS)]
    levels: u32,

    /// Identifier for the generated array (also names the header file)
    #[arg(long, default_value = "img")]
    name: String,

    /// Resampling filter used to scale the input to the panel size
    #[arg(long, value_enum, default_value_t = Filter::Bilinear)]
    filter: Filter,
}

/// Resampling filter choice exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Filter {
    Nearest,
    Bilinear,
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Bilinear => FilterType::Bilinear,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env().init();
    run(&Args::parse())
}

fn run(args: &Args) -> anyhow::Result<()> {
    if !args.out_dir.is_dir() {
        bail!(
            "output directory {} does not exist (create it or pass --out-dir)",
            args.out_dir.display()
        );
    }

    let bytes =
        fs::read(&args.image).with_context(|| format!("failed to read {}", args.image.display()))?;
    let input = decode_grayscale(&bytes)
        .with_context(|| format!("failed to decode {}", args.image.display()))?;

    let cfg = QuantizeConfig {
        width: args.width,
        height: args.height,
        levels: args.levels,
        filter: args.filter.into(),
        ..QuantizeConfig::default()
    };
    let grid = quantize(&input, &cfg)?;
    let array = encode_array(&grid, &cfg, &args.name)?;

    let header_path = args.out_dir.join(format!("{}.h", array.name()));
    fs::write(&header_path, array.render())
        .with_context(|| format!("failed to write {}", header_path.display()))?;
    println!(
        "Done! The output array was saved to {}.",
        header_path.display()
    );

    // The preview is a diagnostic convenience; failing to write it must not
    // fail the run
    let preview_file = preview_path(&args.out_dir, &args.image);
    match render_preview(&grid).save(&preview_file) {
        Ok(()) => println!(
            "A representation of what the converted image looks like was saved to {}",
            preview_file.display()
        ),
        Err(err) => log::warn!(
            "failed to save a preview of the converted image to {}: {}",
            preview_file.display(),
            err
        ),
    }

    Ok(())
}

/// Preview bitmap path: input base name plus the fixed `.new.bmp` suffix,
/// inside the output directory.
fn preview_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "img".to_string());
    out_dir.join(format!("{stem}.new.bmp"))
}
