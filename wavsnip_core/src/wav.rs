//! WAV decode/encode collaborator built on `hound`.
//!
//! Only single-channel integer PCM is handled. Downmixing and resampling are
//! front-end concerns; anything else is rejected outright rather than being
//! silently flattened into a shape the transforms would corrupt.

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::buffer::SampleBuffer;
use crate::WavSnipError;

/// File suffix that marks a recording.
///
/// Matching is case-sensitive, so files named with an uppercase variant such
/// as `.WAV` are not picked up.
pub const RECORDING_SUFFIX: &str = ".wav";

/// A decoded recording in its native integer precision.
#[derive(Clone, Debug)]
pub struct RawRecording {
    /// Path the recording was decoded from.
    pub path: PathBuf,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit width the container stored its samples with.
    pub bits_per_sample: u16,
    /// Samples widened to i32, one value per frame.
    pub samples: Vec<i32>,
}

impl RawRecording {
    /// Widen the integer samples to floating point without rescaling them.
    pub fn to_buffer(&self) -> SampleBuffer {
        let samples = self.samples.iter().map(|&s| s as f32).collect();
        SampleBuffer::new(self.sample_rate, samples)
    }
}

/// Decode a mono integer-PCM WAV file.
///
/// Multi-channel or float-format input yields
/// [`WavSnipError::UnsupportedFormat`]; a malformed or unreadable container
/// yields [`WavSnipError::Decode`] carrying the offending path.
pub fn decode(path: &Path) -> Result<RawRecording, WavSnipError> {
    let mut reader = WavReader::open(path).map_err(|source| WavSnipError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let spec = reader.spec();

    if spec.channels != 1 {
        return Err(WavSnipError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: "only single-channel recordings are handled",
        });
    }
    if spec.sample_format != SampleFormat::Int {
        return Err(WavSnipError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: "only integer PCM recordings are handled",
        });
    }

    let samples = reader
        .samples::<i32>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| WavSnipError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "decoded '{}': {} samples at {} Hz",
        path.display(),
        samples.len(),
        spec.sample_rate
    );

    Ok(RawRecording {
        path: path.to_path_buf(),
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        samples,
    })
}

/// Encode `samples` as a mono 16-bit PCM WAV file at `path`.
///
/// The written container round-trips through [`decode`].
pub fn encode(path: &Path, sample_rate: u32, samples: &[i16]) -> Result<(), WavSnipError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(())
}
