//! Segment extraction: cut index ranges out of a buffer and concatenate them.

use crate::buffer::SampleBuffer;
use crate::WavSnipError;

/// A half-open `start..end` range of sample indices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Segment {
    /// First sample index included in the segment.
    pub start: usize,
    /// First sample index past the end of the segment.
    pub end: usize,
}

impl Segment {
    /// Construct a segment covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of samples the segment covers.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the segment covers no samples.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Build a new buffer from the listed ranges of `buffer`, in list order.
///
/// An empty list is the identity: the buffer comes back unchanged, which is
/// the common no-trimming case. Otherwise the output is the dense
/// concatenation of the referenced slices; segments may overlap or repeat
/// source material and are never sorted or deduplicated, so the list order
/// alone defines the output. Each segment must satisfy
/// `start <= end <= buffer.len()`; anything else is rejected with
/// [`WavSnipError::InvalidSegment`] before a single sample is copied. The
/// sample rate is carried through unchanged and no amplitude is modified.
pub fn extract(buffer: &SampleBuffer, segments: &[Segment]) -> Result<SampleBuffer, WavSnipError> {
    if segments.is_empty() {
        return Ok(buffer.clone());
    }

    let len = buffer.len();
    for segment in segments {
        if segment.end < segment.start || segment.end > len {
            return Err(WavSnipError::InvalidSegment {
                start: segment.start,
                end: segment.end,
                len,
            });
        }
    }

    let total: usize = segments.iter().map(Segment::len).sum();
    let mut samples = Vec::with_capacity(total);
    for segment in segments {
        samples.extend_from_slice(&buffer.samples()[segment.start..segment.end]);
    }

    Ok(SampleBuffer::new(buffer.sample_rate(), samples))
}
