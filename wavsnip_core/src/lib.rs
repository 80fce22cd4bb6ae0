//! Batch processing of uncompressed wave recordings.
//!
//! The crate discovers `.wav` files beneath a root location, decodes them one
//! at a time, and provides the transforms needed to prepare a recording for
//! storage: peak normalization, segment extraction, and loudness rescaling to
//! a decibel target.
//!
//! ## Quick start
//!
//! ```no_run
//! use wavsnip_core::{read, write, Walker, WriteOptions};
//!
//! let walker = Walker::new("recordings");
//! let options = WriteOptions {
//!     output_dir: Some("normalized".into()),
//!     ..WriteOptions::default()
//! };
//!
//! for path in walker.recordings() {
//!     let buffer = read(path)?;
//!     write(path, &buffer, &options)?;
//! }
//! # Ok::<(), wavsnip_core::WavSnipError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

pub mod buffer;
pub mod loudness;
pub mod segment;
pub mod walker;
pub mod wav;

pub use buffer::SampleBuffer;
pub use segment::Segment;
pub use walker::Walker;
pub use wav::RawRecording;

/// Errors that can occur while reading, transforming, or writing recordings.
#[derive(Debug, Error)]
pub enum WavSnipError {
    /// The buffer's relevant peak is zero, so no gain can be derived from it.
    #[error("signal peak is zero; a silent buffer cannot be rescaled")]
    DegenerateSignal,

    /// A segment is malformed or falls outside the buffer it indexes.
    #[error("segment {start}..{end} is invalid for a buffer of {len} samples")]
    InvalidSegment {
        /// First sample index of the offending segment.
        start: usize,
        /// Past-the-end sample index of the offending segment.
        end: usize,
        /// Length of the buffer the segment was applied to.
        len: usize,
    },

    /// The recording uses a layout or sample format this crate does not handle.
    #[error("unsupported format in '{}': {reason}", .path.display())]
    UnsupportedFormat {
        /// Path of the offending recording.
        path: PathBuf,
        /// What made the recording unsupported.
        reason: &'static str,
    },

    /// A recording could not be decoded; carries the offending path.
    #[error("failed to decode '{}'", .path.display())]
    Decode {
        /// Path of the recording that failed to decode.
        path: PathBuf,
        /// Underlying codec error.
        #[source]
        source: hound::Error,
    },

    /// Error produced when a file name cannot be derived from the output path.
    #[error("failed to derive a file name from the output path")]
    InvalidOutputName,

    /// Wrapper around errors produced by the WAV codec while encoding.
    #[error(transparent)]
    Wav(#[from] hound::Error),

    /// Wrapper around IO errors encountered while reading or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Options controlling the [`write`] pipeline.
///
/// The defaults reproduce a plain re-encode at a 30 dB peak target: no
/// segment extraction and no output directory redirection. [`Default`]
/// hands every call site its own fresh, empty segment list.
#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Decibel target the output's peak is scaled to.
    pub gain_db: f32,
    /// Directory the output is written into; created on demand. When set,
    /// the output lands at `output_dir/<basename of path>`.
    pub output_dir: Option<PathBuf>,
    /// Sample ranges to cut out and concatenate before rescaling. Empty
    /// means the whole buffer is kept as-is.
    pub segments: Vec<Segment>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            gain_db: 30.0,
            output_dir: None,
            segments: Vec::new(),
        }
    }
}

/// Read a recording and normalize it to unit peak amplitude.
///
/// Decodes the file at `path` and divides every sample by the global peak
/// absolute value, yielding a floating-point buffer whose peak magnitude is
/// exactly 1.0. A fully silent recording is rejected with
/// [`WavSnipError::DegenerateSignal`].
pub fn read(path: impl AsRef<Path>) -> Result<SampleBuffer, WavSnipError> {
    let raw = wav::decode(path.as_ref())?;
    buffer::normalize(&raw.to_buffer())
}

/// Run the write pipeline over `buffer` and persist the result as 16-bit PCM.
///
/// Segment extraction and loudness scaling both run before anything touches
/// the filesystem, so an invalid segment list or a degenerate signal aborts
/// with no partial output. When `options.output_dir` is set the directory is
/// created if absent (creating an existing directory is not an error) and
/// the output path is the directory joined with the basename of `path`,
/// discarding any directory components `path` carried. Returns the path
/// actually written.
pub fn write(
    path: impl AsRef<Path>,
    buffer: &SampleBuffer,
    options: &WriteOptions,
) -> Result<PathBuf, WavSnipError> {
    let path = path.as_ref();

    let trimmed = segment::extract(buffer, &options.segments)?;
    let samples = loudness::scale_to_db(&trimmed, options.gain_db)?;

    let target = match &options.output_dir {
        Some(dir) => {
            let name = path.file_name().ok_or(WavSnipError::InvalidOutputName)?;
            fs::create_dir_all(dir)?;
            dir.join(name)
        }
        None => path.to_path_buf(),
    };

    wav::encode(&target, trimmed.sample_rate(), &samples)?;
    debug!("wrote {} samples to '{}'", samples.len(), target.display());
    Ok(target)
}
