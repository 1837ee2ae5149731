//! Writes the ambient sound tracks served under `/sounds`.
//!
//! Usage:
//!   generate-sounds                       # public/sounds (or SOUNDS_DIR), 5 s each
//!   generate-sounds --out-dir /tmp/s --duration 30
//!   generate-sounds --test-tone           # also writes tone.wav, a 440 Hz sine

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use server_core::sounds::{self, Noise, DEFAULT_DURATION_SECS};
use server_core::Config;

#[derive(Parser)]
#[command(name = "generate-sounds")]
#[command(about = "Synthesize the ambient noise tracks as WAV files")]
struct Cli {
    /// Output directory (defaults to SOUNDS_DIR or public/sounds)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Length of each track in seconds
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS)]
    duration: u32,

    /// Also write tone.wav, a sine tone for checking speaker output
    #[arg(long)]
    test_tone: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let out_dir = match cli.out_dir {
        Some(dir) => dir,
        None => {
            Config::from_env()
                .context("Failed to load configuration")?
                .sounds_dir
        }
    };

    let mut rng = rand::rng();
    let written = sounds::generate_all(&out_dir, cli.duration, &mut rng)?;

    if cli.test_tone {
        let path = out_dir.join("tone.wav");
        let samples = sounds::synthesize(Noise::Sine, 0.5, cli.duration, &mut rng);
        sounds::write_wav(&path, &samples)?;
        println!("{}", path.display());
    }

    for path in &written {
        println!("{}", path.display());
    }

    Ok(())
}
