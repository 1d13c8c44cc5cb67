//! Register map definitions for the MMA7660FC accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{
    AutoSleepRate, AutoWakeRate, InterruptActiveLevel, InterruptPinType, Mode,
    SleepCounterPrescaler, TiltDebounceFilter,
};

/// 7-bit bus address of the device (`0x98` in 8-bit write form).
pub const I2C_ADDRESS: u8 = 0x4C;

/// Register address of `XOUT`.
pub const REG_XOUT: u8 = 0x00;
/// Register address of `YOUT`.
pub const REG_YOUT: u8 = 0x01;
/// Register address of `ZOUT`.
pub const REG_ZOUT: u8 = 0x02;
/// Register address of `TILT`.
pub const REG_TILT: u8 = 0x03;
/// Register address of `SRST`.
pub const REG_SRST: u8 = 0x04;
/// Register address of `SPCNT`.
pub const REG_SPCNT: u8 = 0x05;
/// Register address of `INTSU`.
pub const REG_INTSU: u8 = 0x06;
/// Register address of `MODE`.
pub const REG_MODE: u8 = 0x07;
/// Register address of `SR`.
pub const REG_SR: u8 = 0x08;
/// Register address of `PDET`.
pub const REG_PDET: u8 = 0x09;
/// Register address of `PD`.
pub const REG_PD: u8 = 0x0A;

/// Mask of the mode field inside `MODE`.
pub const MODE_FIELD_MASK: u8 = 0b0000_0111;
/// Largest value accepted by the tap detection threshold field (`PDET[4:0]`).
pub const TAP_THRESHOLD_MAX: u8 = 0x1F;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register: From<u8> + Into<u8> + Copy {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
}

macro_rules! byte_register {
    ($ty:ident, $address:expr, $access:expr) => {
        impl From<u8> for $ty {
            fn from(value: u8) -> Self {
                Self::from_bytes([value])
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> Self {
                value.into_bytes()[0]
            }
        }

        impl Register for $ty {
            const ADDRESS: u8 = $address;
            const ACCESS: RegisterAccess = $access;
        }
    };
}

/// One axis output register (`XOUT`/`YOUT`/`ZOUT`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisOut {
    // 6-bit two's complement reading (bits 5:0); bit 5 is the sign.
    pub value: B6,
    // Reading was captured during an output update (bit 6).
    pub alert: bool,
    #[skip]
    __: B1,
}

impl AxisOut {
    /// Sign-extends the 6-bit reading into an `i8` (range `-32..=31`).
    pub fn signed(self) -> i8 {
        let value = self.value();
        if value & 0x20 != 0 {
            (value | 0xC0) as i8
        } else {
            value as i8
        }
    }
}

/// Bitfield representation of the `TILT` register (address `0x03`).
///
/// Bits 4:2 carry the portrait/landscape code; see
/// [`decode_events`](crate::interrupt::decode_events) for how it maps to
/// orientation events.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tilt {
    // Lying on its front (bit 0).
    pub front: bool,
    // Lying on its back (bit 1).
    pub back: bool,
    // Portrait/landscape code (bits 4:2).
    pub orientation: B3,
    // Tap detected (bit 5).
    pub tap: bool,
    // Register contents were being updated when read (bit 6).
    pub alert: bool,
    // Shake detected on one or more axes (bit 7).
    pub shake: bool,
}

/// Bitfield representation of the `SRST` register (address `0x04`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepStatus {
    // Device entered auto-sleep (bit 0).
    pub auto_sleep: bool,
    // Device woke up from auto-sleep (bit 1).
    pub auto_wake: bool,
    #[skip]
    __: B6,
}

/// Bitfield representation of the `INTSU` register (address `0x06`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptSetup {
    // Front/back interrupt (bit 0).
    pub front_back: bool,
    // Up/down/left/right interrupt (bit 1).
    pub up_down_right_left: bool,
    // Tap interrupt (bit 2).
    pub tap: bool,
    // Auto-sleep/wake interrupt (bit 3).
    pub auto_sleep: bool,
    // Update interrupt, raised after every measurement (bit 4).
    pub update: bool,
    // Shake on Z (bit 5).
    pub shake_z: bool,
    // Shake on Y (bit 6).
    pub shake_y: bool,
    // Shake on X (bit 7).
    pub shake_x: bool,
}

/// Bitfield representation of the `MODE` register (address `0x07`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeControl {
    // Operating mode (bits 2:0).
    pub mode: Mode,
    // Auto-wake enable (bit 3).
    pub auto_wake: bool,
    // Auto-sleep enable (bit 4).
    pub auto_sleep: bool,
    // Sleep counter prescaler (bit 5).
    pub prescaler: SleepCounterPrescaler,
    // Interrupt output driver (bit 6).
    pub pin_type: InterruptPinType,
    // Interrupt output polarity (bit 7).
    pub active_level: InterruptActiveLevel,
}

/// Bitfield representation of the `SR` register (address `0x08`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRate {
    // Active/auto-sleep and tap detection rate (bits 2:0).
    pub auto_sleep_rate: AutoSleepRate,
    // Auto-wake rate (bits 4:3).
    pub auto_wake_rate: AutoWakeRate,
    // Tilt debounce filter (bits 7:5).
    pub filter: TiltDebounceFilter,
}

/// Bitfield representation of the `PDET` register (address `0x09`).
///
/// The axis bits are disables in hardware; the driver exposes them as enables.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapDetect {
    // Tap detection threshold in counts (bits 4:0).
    pub threshold: B5,
    // X axis excluded from tap detection (bit 5).
    pub x_disabled: bool,
    // Y axis excluded from tap detection (bit 6).
    pub y_disabled: bool,
    // Z axis excluded from tap detection (bit 7).
    pub z_disabled: bool,
}

byte_register!(Tilt, REG_TILT, RegisterAccess::ReadOnly);
byte_register!(SleepStatus, REG_SRST, RegisterAccess::ReadOnly);
byte_register!(InterruptSetup, REG_INTSU, RegisterAccess::ReadWrite);
byte_register!(ModeControl, REG_MODE, RegisterAccess::ReadWrite);
byte_register!(SampleRate, REG_SR, RegisterAccess::ReadWrite);
byte_register!(TapDetect, REG_PDET, RegisterAccess::ReadWrite);

impl From<u8> for AxisOut {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<AxisOut> for u8 {
    fn from(value: AxisOut) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_layout_matches_datasheet() {
        let tilt = Tilt::from(0b1010_1101);
        assert!(tilt.front());
        assert!(!tilt.back());
        assert_eq!(tilt.orientation(), 0b011);
        assert!(tilt.tap());
        assert!(!tilt.alert());
        assert!(tilt.shake());
    }

    #[test]
    fn mode_control_places_fields() {
        let mode = ModeControl::new()
            .with_mode(Mode::Test)
            .with_auto_sleep(true)
            .with_pin_type(InterruptPinType::PushPull)
            .with_active_level(InterruptActiveLevel::High);

        assert_eq!(u8::from(mode), 0b1101_0100);
        assert_eq!(ModeControl::from(0b0010_1001).prescaler(), SleepCounterPrescaler::Div16);
        assert!(ModeControl::from(0b0000_1000).auto_wake());
    }

    #[test]
    fn mode_control_reports_undefined_mode() {
        assert!(ModeControl::from(0b0000_0010).mode_or_err().is_err());
        assert_eq!(ModeControl::from(0b1111_1001).mode_or_err().ok(), Some(Mode::Active));
    }

    #[test]
    fn sample_rate_roundtrip() {
        let sr = SampleRate::new()
            .with_auto_sleep_rate(AutoSleepRate::Sps8)
            .with_auto_wake_rate(AutoWakeRate::Sps16)
            .with_filter(TiltDebounceFilter::Samples2);

        assert_eq!(u8::from(sr), 0b001_01_100);
        let decoded = SampleRate::from(u8::from(sr));
        assert_eq!(decoded.auto_sleep_rate(), AutoSleepRate::Sps8);
        assert_eq!(decoded.auto_wake_rate(), AutoWakeRate::Sps16);
        assert_eq!(decoded.filter(), TiltDebounceFilter::Samples2);
    }

    #[test]
    fn interrupt_setup_shake_bits_run_z_to_x() {
        let intsu = InterruptSetup::new().with_shake_x(true);
        assert_eq!(u8::from(intsu), 0b1000_0000);
        let intsu = InterruptSetup::new().with_shake_z(true).with_update(true);
        assert_eq!(u8::from(intsu), 0b0011_0000);
    }

    #[test]
    fn tap_detect_layout() {
        let pdet = TapDetect::from(0b1010_0111);
        assert_eq!(pdet.threshold(), 7);
        assert!(pdet.x_disabled());
        assert!(!pdet.y_disabled());
        assert!(pdet.z_disabled());
    }

    #[test]
    fn axis_out_sign_extends() {
        assert_eq!(AxisOut::from(0b0010_0000).signed(), -32);
        assert_eq!(AxisOut::from(0b0011_1111).signed(), -1);
        assert_eq!(AxisOut::from(0b0001_1111).signed(), 31);
        assert!(AxisOut::from(0b0100_0000).alert());
    }

    #[test]
    fn status_registers_are_read_only() {
        assert_eq!(Tilt::ACCESS, RegisterAccess::ReadOnly);
        assert_eq!(SleepStatus::ACCESS, RegisterAccess::ReadOnly);
        assert_eq!(ModeControl::ACCESS, RegisterAccess::ReadWrite);
        assert_eq!(TapDetect::ADDRESS, REG_PDET);
    }
}
