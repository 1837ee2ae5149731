//! Ambient sound catalog and WAV synthesis.
//!
//! The sounds page loops one of five short noise tracks. The tracks are
//! synthesized rather than recorded: `generate-sounds` writes them once as
//! 16-bit mono WAV files and the server exposes them under `/sounds/`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use tracing::info;

pub const SAMPLE_RATE: u32 = 44_100;

pub const DEFAULT_DURATION_SECS: u32 = 5;

/// Largest per-sample drift of brown noise before clipping.
const BROWN_STEP: f64 = 0.05;

const SINE_HZ: f64 = 440.0;

/// Signal shape used to synthesize a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Noise {
    /// Uniform random samples
    White,
    /// Integrated white noise, clipped to [-1, 1]
    Brown,
    /// 440 Hz tone
    Sine,
}

/// One selectable track on the sounds page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmbientSound {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub noise: Noise,
    pub volume: f64,
}

impl AmbientSound {
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name)
    }

    /// Path the server answers this track on.
    pub fn url(&self) -> String {
        format!("/sounds/{}", self.file_name())
    }
}

// Rain and forest are white noise, wind and ocean brown; forest is the quiet one.
pub static AMBIENT_SOUNDS: [AmbientSound; 5] = [
    AmbientSound {
        name: "brown",
        label: "Brown Noise",
        description: "Brown noise is a deep, rumbling sound that can help mask distracting noises.",
        noise: Noise::Brown,
        volume: 0.5,
    },
    AmbientSound {
        name: "rain",
        label: "Rain",
        description: "The crisp patter of rainfall creates a peaceful, natural atmosphere.",
        noise: Noise::White,
        volume: 0.5,
    },
    AmbientSound {
        name: "forest",
        label: "Forest",
        description: "Forest ambience with gentle rustling and natural woodland sounds.",
        noise: Noise::White,
        volume: 0.1,
    },
    AmbientSound {
        name: "ocean",
        label: "Ocean Waves",
        description: "Waves crashing gently on the shore provide calming ocean sounds.",
        noise: Noise::Brown,
        volume: 0.5,
    },
    AmbientSound {
        name: "wind",
        label: "Wind",
        description: "Soft wind sounds with natural variations for relaxation.",
        noise: Noise::Brown,
        volume: 0.5,
    },
];

/// All tracks, in display order.
pub fn sounds() -> &'static [AmbientSound] {
    &AMBIENT_SOUNDS
}

/// Synthesize `duration_secs` of mono 16-bit samples at [`SAMPLE_RATE`].
///
/// `volume` scales full range; samples are truncated toward zero.
pub fn synthesize<R: Rng>(
    noise: Noise,
    volume: f64,
    duration_secs: u32,
    rng: &mut R,
) -> Vec<i16> {
    let n_samples = SAMPLE_RATE as usize * duration_secs as usize;
    let mut samples = Vec::with_capacity(n_samples);
    let mut last = 0.0_f64;

    for i in 0..n_samples {
        let value = match noise {
            Noise::White => rng.random_range(-1.0..=1.0),
            Noise::Brown => {
                last = (last + rng.random_range(-BROWN_STEP..=BROWN_STEP)).clamp(-1.0, 1.0);
                last
            }
            Noise::Sine => {
                (2.0 * std::f64::consts::PI * SINE_HZ * i as f64 / SAMPLE_RATE as f64).sin()
            }
        };
        samples.push((value * volume * i16::MAX as f64) as i16);
    }

    samples
}

/// Write samples as a mono 16-bit PCM WAV file.
pub fn write_wav(path: &Path, samples: &[i16]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finish {}", path.display()))?;

    Ok(())
}

/// Synthesize every catalog track into `dir`, creating it if needed.
pub fn generate_all<R: Rng>(
    dir: &Path,
    duration_secs: u32,
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::with_capacity(AMBIENT_SOUNDS.len());
    for sound in sounds() {
        let path = dir.join(sound.file_name());
        let samples = synthesize(sound.noise, sound.volume, duration_secs, rng);
        write_wav(&path, &samples)?;

        info!(
            sound = sound.name,
            path = %path.display(),
            samples = samples.len(),
            "Wrote sound"
        );
        written.push(path);
    }

    Ok(written)
}
