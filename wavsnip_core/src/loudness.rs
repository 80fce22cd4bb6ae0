//! Loudness rescaling toward a decibel target.

use crate::buffer::SampleBuffer;
use crate::WavSnipError;

/// Rescale `buffer` so its signed peak lands at `target_db`, quantized to
/// 16-bit integer samples ready for encoding.
///
/// The gain is `10^(target_db / 10) / peak`, a power-ratio decibel applied
/// to the signed maximum sample. The scaling is peak-referenced, not a
/// perceptual loudness measure; callers targeting broadcast loudness levels
/// want an RMS- or LUFS-based tool instead. Quantization truncates toward
/// zero and saturates at the i16 range.
///
/// A buffer whose signed peak is exactly zero cannot be scaled and is
/// rejected with [`WavSnipError::DegenerateSignal`].
pub fn scale_to_db(buffer: &SampleBuffer, target_db: f32) -> Result<Vec<i16>, WavSnipError> {
    let peak = buffer.peak();
    if peak == 0.0 {
        return Err(WavSnipError::DegenerateSignal);
    }

    let gain = 10f32.powf(target_db / 10.0) / peak;
    Ok(buffer.samples().iter().map(|s| (s * gain) as i16).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_to_db_hits_power_ratio_target() {
        // 30 dB as a power ratio is 10^3, so a unit peak scales to 1000.
        let buffer = SampleBuffer::new(8_000, vec![1.0, 0.5, -0.25]);
        let scaled = scale_to_db(&buffer, 30.0).expect("non-silent buffer");

        assert_eq!(scaled, vec![1_000, 500, -250]);
    }

    #[test]
    fn scale_to_db_normalizes_by_signed_peak() {
        let buffer = SampleBuffer::new(8_000, vec![2.0, -8.0]);
        let scaled = scale_to_db(&buffer, 10.0).expect("non-silent buffer");

        // Gain derives from the signed maximum (2.0), not the magnitude 8.0.
        assert_eq!(scaled, vec![10, -40]);
    }

    #[test]
    fn scale_to_db_saturates_at_integer_range() {
        let buffer = SampleBuffer::new(8_000, vec![1.0, -1.0]);
        let scaled = scale_to_db(&buffer, 50.0).expect("non-silent buffer");

        assert_eq!(scaled, vec![i16::MAX, i16::MIN]);
    }

    #[test]
    fn scale_to_db_rejects_silence() {
        let buffer = SampleBuffer::new(8_000, vec![0.0; 8]);
        assert!(matches!(
            scale_to_db(&buffer, 30.0),
            Err(WavSnipError::DegenerateSignal)
        ));
    }
}
