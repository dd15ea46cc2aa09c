use clap::Parser;
use std::path::PathBuf;

use ppm2txt::pipeline::{self, RenderOptions};

/// Parse and validate the contrast mode (literal 0 or 1)
fn parse_mode(s: &str) -> Result<bool, String> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(format!("contrast mode must be 0 or 1, got '{}'", s)),
    }
}

/// ppm2txt: Convert binary PPM (P6) images to ASCII art
#[derive(Parser)]
#[command(name = "ppm2txt")]
#[command(version, about = "Convert binary PPM (P6) images to ASCII art")]
#[command(after_help = "EXAMPLES:
    # Brighter pixels rendered as denser glyphs
    ppm2txt photo.ppm photo.txt 1

    # Inverted ramp (brighter pixels rendered sparser)
    ppm2txt photo.ppm photo.txt 0")]
struct Cli {
    /// Input binary PPM (P6) file
    input: PathBuf,

    /// Output text file (truncated if it already exists)
    output: PathBuf,

    /// Contrast mode: 1 maps brighter pixels to denser glyphs, 0 inverts the ramp
    #[arg(value_parser = parse_mode, action = clap::ArgAction::Set)]
    mode: bool,
}

fn main() {
    // Usage problems exit with 1, same as pipeline failures.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        let code = match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        std::process::exit(code);
    });

    let options = RenderOptions { contrast: cli.mode };
    if let Err(e) = pipeline::run(&cli.input, &cli.output, options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
