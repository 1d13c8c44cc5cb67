//! Strongly typed parameter enumerations for the MMA7660FC driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the register accessors on
//! [`Mma7660fc`](crate::Mma7660fc). Because each type is closed, a value
//! outside the encoded set cannot be constructed, so the setters never need to
//! range-check them.
//!
//! # Examples
//!
//! ```rust
//! use mma7660fc::params::{AutoSleepRate, Mode, TiltDebounceFilter};
//!
//! let mode = Mode::Active;
//! let rate = AutoSleepRate::Sps64;
//! let filter = TiltDebounceFilter::Samples4;
//! assert_eq!(rate.samples_per_second(), 64);
//! assert_eq!(filter.samples(), 4);
//! let _ = mode;
//! ```

use modular_bitfield::prelude::Specifier;

/// Operating modes encoded in `MODE[2:0]`.
///
/// Only three of the eight encodings are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum Mode {
    /// Standby; the lowest-power state and the only one where registers may be written.
    Standby = 0b000,
    /// Active measurement.
    Active = 0b001,
    /// Test mode.
    Test = 0b100,
}

/// Sleep counter prescaler (`MODE.SCPS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum SleepCounterPrescaler {
    /// Divide-by-1.
    Div1 = 0,
    /// Divide-by-16.
    Div16 = 1,
}

impl SleepCounterPrescaler {
    /// Returns the divisor applied to the sleep counter clock.
    pub const fn divisor(self) -> u16 {
        match self {
            Self::Div1 => 1,
            Self::Div16 => 16,
        }
    }
}

/// Interrupt output driver (`MODE.IPP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum InterruptPinType {
    /// Open-drain output.
    OpenDrain = 0,
    /// Push-pull output.
    PushPull = 1,
}

/// Interrupt output polarity (`MODE.IAH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum InterruptActiveLevel {
    /// Active low.
    Low = 0,
    /// Active high.
    High = 1,
}

/// Active/auto-sleep sample rates encoded in `SR[2:0]` (samples per second).
///
/// The same field also sets the tap detection rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum AutoSleepRate {
    /// 120 samples/s.
    Sps120 = 0b000,
    /// 64 samples/s.
    Sps64 = 0b001,
    /// 32 samples/s.
    Sps32 = 0b010,
    /// 16 samples/s.
    Sps16 = 0b011,
    /// 8 samples/s.
    Sps8 = 0b100,
    /// 4 samples/s.
    Sps4 = 0b101,
    /// 2 samples/s.
    Sps2 = 0b110,
    /// 1 sample/s.
    Sps1 = 0b111,
}

impl AutoSleepRate {
    /// Returns the rate in samples per second.
    pub const fn samples_per_second(self) -> u16 {
        match self {
            Self::Sps120 => 120,
            Self::Sps64 => 64,
            Self::Sps32 => 32,
            Self::Sps16 => 16,
            Self::Sps8 => 8,
            Self::Sps4 => 4,
            Self::Sps2 => 2,
            Self::Sps1 => 1,
        }
    }
}

/// Auto-wake sample rates encoded in `SR[4:3]` (samples per second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum AutoWakeRate {
    /// 32 samples/s.
    Sps32 = 0b00,
    /// 16 samples/s.
    Sps16 = 0b01,
    /// 8 samples/s.
    Sps8 = 0b10,
    /// 1 sample/s.
    Sps1 = 0b11,
}

impl AutoWakeRate {
    /// Returns the rate in samples per second.
    pub const fn samples_per_second(self) -> u16 {
        match self {
            Self::Sps32 => 32,
            Self::Sps16 => 16,
            Self::Sps8 => 8,
            Self::Sps1 => 1,
        }
    }
}

/// Tilt debounce filter encoded in `SR[7:5]`.
///
/// Number of consecutive matching samples required before the tilt register
/// is updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum TiltDebounceFilter {
    /// Filter disabled.
    Disabled = 0b000,
    /// 2 samples.
    Samples2 = 0b001,
    /// 3 samples.
    Samples3 = 0b010,
    /// 4 samples.
    Samples4 = 0b011,
    /// 5 samples.
    Samples5 = 0b100,
    /// 6 samples.
    Samples6 = 0b101,
    /// 7 samples.
    Samples7 = 0b110,
    /// 8 samples.
    Samples8 = 0b111,
}

impl TiltDebounceFilter {
    /// Returns the number of matching samples required, `0` when disabled.
    pub const fn samples(self) -> u8 {
        match self {
            Self::Disabled => 0,
            other => other as u8 + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prescaler_divisors() {
        assert_eq!(SleepCounterPrescaler::Div1.divisor(), 1);
        assert_eq!(SleepCounterPrescaler::Div16.divisor(), 16);
    }

    #[test]
    fn rates_and_filter_lengths() {
        assert_eq!(AutoSleepRate::Sps120.samples_per_second(), 120);
        assert_eq!(AutoSleepRate::Sps1.samples_per_second(), 1);
        assert_eq!(AutoWakeRate::Sps8.samples_per_second(), 8);
        assert_eq!(TiltDebounceFilter::Disabled.samples(), 0);
        assert_eq!(TiltDebounceFilter::Samples8.samples(), 8);
    }
}
