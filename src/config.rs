//! Configuration primitives for the MMA7660FC driver.

use crate::params::{
    AutoSleepRate,
    AutoWakeRate,
    InterruptActiveLevel,
    InterruptPinType,
    Mode,
    SleepCounterPrescaler,
    TiltDebounceFilter,
};
use crate::registers::{InterruptSetup, ModeControl, SampleRate, TapDetect, TAP_THRESHOLD_MAX};
use crate::timing::ms_to_register;

/// Interrupt sources routed to the INT pin (`INTSU`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptSources {
    /// Front/back orientation change.
    pub front_back: bool,
    /// Up/down/left/right orientation change.
    pub up_down_right_left: bool,
    /// Tap.
    pub tap: bool,
    /// Auto-sleep and auto-wake transitions.
    pub auto_sleep: bool,
    /// Every new measurement.
    pub update: bool,
    /// Shake on X.
    pub shake_x: bool,
    /// Shake on Y.
    pub shake_y: bool,
    /// Shake on Z.
    pub shake_z: bool,
}

impl InterruptSources {
    /// No interrupt sources enabled.
    pub const NONE: Self = Self {
        front_back: false,
        up_down_right_left: false,
        tap: false,
        auto_sleep: false,
        update: false,
        shake_x: false,
        shake_y: false,
        shake_z: false,
    };

    pub(crate) fn register(self) -> InterruptSetup {
        InterruptSetup::new()
            .with_front_back(self.front_back)
            .with_up_down_right_left(self.up_down_right_left)
            .with_tap(self.tap)
            .with_auto_sleep(self.auto_sleep)
            .with_update(self.update)
            .with_shake_x(self.shake_x)
            .with_shake_y(self.shake_y)
            .with_shake_z(self.shake_z)
    }
}

/// User-facing configuration for the MMA7660FC sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Mode entered once every other field has been written.
    pub mode: Mode,
    /// Interrupt sources.
    pub interrupts: InterruptSources,
    /// Auto-wake enable.
    pub auto_wake: bool,
    /// Auto-sleep enable.
    pub auto_sleep: bool,
    /// Sleep counter prescaler.
    pub prescaler: SleepCounterPrescaler,
    /// Interrupt output driver.
    pub pin_type: InterruptPinType,
    /// Interrupt output polarity.
    pub active_level: InterruptActiveLevel,
    /// Active/auto-sleep and tap detection rate.
    pub tap_detection_rate: AutoSleepRate,
    /// Auto-wake rate.
    pub auto_wake_rate: AutoWakeRate,
    /// Tilt debounce filter.
    pub tilt_debounce_filter: TiltDebounceFilter,
    /// Tap detection threshold in counts (`0..=31`).
    pub tap_threshold: u8,
    /// Axes taking part in tap detection, as `[x, y, z]`.
    pub tap_axes: [bool; 3],
    /// Tap pulse debounce count (see [`crate::timing`]).
    pub tap_pulse_debounce: u8,
    /// Sleep counter value.
    pub sleep_count: u8,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Polled configuration: every interrupt disabled, active mode.
    pub fn basic() -> Self {
        Self::default()
    }

    /// Interrupt-driven configuration for orientation, tap, shake and
    /// auto-sleep reporting.
    pub fn motion() -> Self {
        Self {
            mode: Mode::Active,
            interrupts: InterruptSources {
                front_back: true,
                up_down_right_left: true,
                tap: true,
                auto_sleep: true,
                update: false,
                shake_x: true,
                shake_y: true,
                shake_z: true,
            },
            auto_wake: true,
            auto_sleep: true,
            prescaler: SleepCounterPrescaler::Div1,
            pin_type: InterruptPinType::PushPull,
            active_level: InterruptActiveLevel::Low,
            tap_detection_rate: AutoSleepRate::Sps120,
            auto_wake_rate: AutoWakeRate::Sps32,
            tilt_debounce_filter: TiltDebounceFilter::Samples8,
            tap_threshold: 2,
            tap_axes: [true; 3],
            tap_pulse_debounce: ms_to_register(10.0),
            sleep_count: 127,
        }
    }

    /// Checks whether this configuration is valid according to datasheet rules.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.tap_threshold > TAP_THRESHOLD_MAX {
            return Err(ConfigError::TapThresholdOutOfRange);
        }

        Ok(())
    }

    pub(crate) fn mode_register(&self, mode: Mode) -> ModeControl {
        ModeControl::new()
            .with_mode(mode)
            .with_auto_wake(self.auto_wake)
            .with_auto_sleep(self.auto_sleep)
            .with_prescaler(self.prescaler)
            .with_pin_type(self.pin_type)
            .with_active_level(self.active_level)
    }

    pub(crate) fn sample_rate_register(&self) -> SampleRate {
        SampleRate::new()
            .with_auto_sleep_rate(self.tap_detection_rate)
            .with_auto_wake_rate(self.auto_wake_rate)
            .with_filter(self.tilt_debounce_filter)
    }

    pub(crate) fn tap_detect_register(&self) -> TapDetect {
        let [x, y, z] = self.tap_axes;
        TapDetect::new()
            .with_threshold(self.tap_threshold)
            .with_x_disabled(!x)
            .with_y_disabled(!y)
            .with_z_disabled(!z)
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the mode entered after configuration.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Overrides the interrupt sources.
    pub fn interrupts(mut self, interrupts: InterruptSources) -> Self {
        self.config.interrupts = interrupts;
        self
    }

    /// Enables or disables auto-wake.
    pub fn auto_wake(mut self, enable: bool) -> Self {
        self.config.auto_wake = enable;
        self
    }

    /// Enables or disables auto-sleep.
    pub fn auto_sleep(mut self, enable: bool) -> Self {
        self.config.auto_sleep = enable;
        self
    }

    /// Sets the sleep counter prescaler.
    pub fn prescaler(mut self, prescaler: SleepCounterPrescaler) -> Self {
        self.config.prescaler = prescaler;
        self
    }

    /// Sets the interrupt output driver.
    pub fn pin_type(mut self, pin_type: InterruptPinType) -> Self {
        self.config.pin_type = pin_type;
        self
    }

    /// Sets the interrupt output polarity.
    pub fn active_level(mut self, level: InterruptActiveLevel) -> Self {
        self.config.active_level = level;
        self
    }

    /// Sets the active/auto-sleep and tap detection rate.
    pub fn tap_detection_rate(mut self, rate: AutoSleepRate) -> Self {
        self.config.tap_detection_rate = rate;
        self
    }

    /// Sets the auto-wake rate.
    pub fn auto_wake_rate(mut self, rate: AutoWakeRate) -> Self {
        self.config.auto_wake_rate = rate;
        self
    }

    /// Sets the tilt debounce filter.
    pub fn tilt_debounce_filter(mut self, filter: TiltDebounceFilter) -> Self {
        self.config.tilt_debounce_filter = filter;
        self
    }

    /// Sets the tap detection threshold. Checked by [`Config::validate`].
    pub fn tap_threshold(mut self, threshold: u8) -> Self {
        self.config.tap_threshold = threshold;
        self
    }

    /// Selects the axes taking part in tap detection.
    pub fn tap_axes(mut self, x: bool, y: bool, z: bool) -> Self {
        self.config.tap_axes = [x, y, z];
        self
    }

    /// Sets the tap pulse debounce count.
    pub fn tap_pulse_debounce(mut self, count: u8) -> Self {
        self.config.tap_pulse_debounce = count;
        self
    }

    /// Sets the tap pulse debounce from a duration in milliseconds.
    pub fn tap_pulse_debounce_ms(mut self, ms: f32) -> Self {
        self.config.tap_pulse_debounce = ms_to_register(ms);
        self
    }

    /// Sets the sleep counter value.
    pub fn sleep_count(mut self, count: u8) -> Self {
        self.config.sleep_count = count;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Active,
            interrupts: InterruptSources::NONE,
            auto_wake: false,
            auto_sleep: false,
            prescaler: SleepCounterPrescaler::Div1,
            pin_type: InterruptPinType::PushPull,
            active_level: InterruptActiveLevel::Low,
            tap_detection_rate: AutoSleepRate::Sps8,
            auto_wake_rate: AutoWakeRate::Sps16,
            tilt_debounce_filter: TiltDebounceFilter::Samples2,
            tap_threshold: 0,
            tap_axes: [false; 3],
            tap_pulse_debounce: 0,
            sleep_count: 0,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The tap detection threshold does not fit `PDET[4:0]`.
    TapThresholdOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_and_polled() {
        let config = Config::basic();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.interrupts, InterruptSources::NONE);
        assert_eq!(u8::from(config.interrupts.register()), 0x00);
        assert_eq!(u8::from(config.sample_rate_register()), 0b001_01_100);
        // Every tap axis disabled: all three disable bits set.
        assert_eq!(u8::from(config.tap_detect_register()), 0b1110_0000);
    }

    #[test]
    fn builder_rejects_oversized_threshold() {
        let config = Config::new().tap_threshold(32).build();
        assert_eq!(config.validate(), Err(ConfigError::TapThresholdOutOfRange));
        assert!(Config::new().tap_threshold(31).build().validate().is_ok());
    }

    #[test]
    fn motion_preset_encodes_expected_registers() {
        let config = Config::motion();
        assert!(config.validate().is_ok());
        assert_eq!(u8::from(config.interrupts.register()), 0b1110_1111);
        assert_eq!(u8::from(config.tap_detect_register()), 0b0000_0010);
        assert_eq!(config.tap_pulse_debounce, 37);
        assert_eq!(u8::from(config.mode_register(Mode::Standby)), 0b0101_1000);
        assert_eq!(u8::from(config.mode_register(Mode::Active)), 0b0101_1001);
    }

    #[test]
    fn tap_axes_builder_orders_xyz() {
        let config = Config::new().tap_axes(true, false, true).build();
        assert_eq!(u8::from(config.tap_detect_register()), 0b0100_0000);
    }
}
