//! Acceleration sample decoding.

use crate::registers::AxisOut;

/// Output counts per standard gravity at the fixed ±1.5 g range.
pub const COUNTS_PER_G: f32 = 21.33;
/// Number of consecutive output registers read per sample (`XOUT`..=`ZOUT`).
pub const SAMPLE_BYTES: usize = 3;

/// One decoded acceleration sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Sign-extended 6-bit counts for X, Y and Z.
    pub raw: [i8; 3],
    /// Acceleration in units of standard gravity for X, Y and Z.
    pub g: [f32; 3],
}

/// Error returned by [`decode`] when any axis carries the alert flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertError;

/// Decodes the three output registers into a [`Sample`].
///
/// Bit 7 of each byte is ignored. If bit 6 (alert) is set on any axis the
/// whole acquisition is rejected, since the device was updating its outputs
/// while they were read.
pub fn decode(bytes: [u8; SAMPLE_BYTES]) -> Result<Sample, AlertError> {
    let axes = bytes.map(AxisOut::from);
    if axes.iter().any(|axis| axis.alert()) {
        return Err(AlertError);
    }

    let raw = axes.map(AxisOut::signed);
    let g = raw.map(counts_to_g);
    Ok(Sample { raw, g })
}

/// Converts signed counts to units of standard gravity.
#[inline]
pub fn counts_to_g(counts: i8) -> f32 {
    counts as f32 / COUNTS_PER_G
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_bit_with_zero_magnitude_is_most_negative() {
        let sample = decode([0b0010_0000, 0, 0]).unwrap();
        assert_eq!(sample.raw, [-32, 0, 0]);
        assert_eq!(sample.g[0], -32.0 / 21.33);
        assert_eq!(sample.g[1], 0.0);
    }

    #[test]
    fn positive_and_negative_axes() {
        let sample = decode([0x15, 0x3F, 0x01]).unwrap();
        assert_eq!(sample.raw, [21, -1, 1]);
        assert_eq!(sample.g[1], -1.0 / 21.33);
    }

    #[test]
    fn top_bit_is_not_data() {
        let with_top = decode([0x95, 0xBF, 0x81]).unwrap();
        let without_top = decode([0x15, 0x3F, 0x01]).unwrap();
        assert_eq!(with_top, without_top);
    }

    #[test]
    fn alert_on_any_axis_rejects_the_sample() {
        assert_eq!(decode([0x40, 0x00, 0x00]), Err(AlertError));
        assert_eq!(decode([0x00, 0x41, 0x00]), Err(AlertError));
        assert_eq!(decode([0x00, 0x00, 0xC0]), Err(AlertError));
    }
}
