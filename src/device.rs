//! High-level MMA7660FC device driver implementation.
//!
//! Every operation is a blocking call performing at most one register read
//! and one register write (the exceptions being [`Mma7660fc::configure`],
//! which programs the whole register file, and [`Mma7660fc::irq_handler`],
//! which reads two status registers). No operation retries; a transport
//! failure is surfaced immediately and retry policy belongs to the caller.
//!
//! The driver holds no locks. Concurrent use of one handle from several
//! execution contexts must be serialized by the caller.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::Config;
use crate::error::{Binding, Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::{DebugSink, Mma7660fcInterface};
use crate::interrupt::{decode_sleep_events, decode_tilt_events, EventHandler};
use crate::params::{
    AutoSleepRate,
    AutoWakeRate,
    InterruptActiveLevel,
    InterruptPinType,
    Mode,
    SleepCounterPrescaler,
    TiltDebounceFilter,
};
use crate::registers::{
    InterruptSetup,
    ModeControl,
    Register,
    RegisterAccess,
    SampleRate,
    SleepStatus,
    TapDetect,
    Tilt,
    I2C_ADDRESS,
    MODE_FIELD_MASK,
    REG_INTSU,
    REG_MODE,
    REG_PD,
    REG_PDET,
    REG_SPCNT,
    REG_SR,
    REG_SRST,
    REG_TILT,
    REG_XOUT,
    REG_YOUT,
    REG_ZOUT,
    TAP_THRESHOLD_MAX,
};
use crate::sample::{self, Sample, SAMPLE_BYTES};
use crate::timing::{ms_to_register, register_to_ms};

/// High-level synchronous driver for the MMA7660FC accelerometer.
///
/// A handle starts out bound but closed. [`init`](Self::init) opens the
/// transport; every other device operation returns
/// [`Error::NotInitialized`] until then and again after
/// [`deinit`](Self::deinit).
pub struct Mma7660fc<IFACE, D, H, S> {
    interface: IFACE,
    delay: D,
    handler: H,
    debug: S,
    initialized: bool,
}

/// Collects the capabilities of a [`Mma7660fc`] one at a time.
///
/// [`build`](Self::build) rejects the first missing binding, checked in the
/// order debug sink, interface, event handler, delay.
pub struct Mma7660fcBuilder<IFACE, D, H, S> {
    interface: Option<IFACE>,
    delay: Option<D>,
    handler: Option<H>,
    debug: Option<S>,
}

impl<IFACE, D, H, S> Default for Mma7660fcBuilder<IFACE, D, H, S> {
    fn default() -> Self {
        Self {
            interface: None,
            delay: None,
            handler: None,
            debug: None,
        }
    }
}

impl<IFACE, D, H, S> Mma7660fcBuilder<IFACE, D, H, S> {
    /// Creates a builder with nothing bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the bus transport.
    pub fn interface(mut self, interface: IFACE) -> Self {
        self.interface = Some(interface);
        self
    }

    /// Binds the delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Binds the event handler invoked by [`Mma7660fc::irq_handler`].
    pub fn event_handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Binds the diagnostic sink.
    pub fn debug_sink(mut self, debug: S) -> Self {
        self.debug = Some(debug);
        self
    }
}

impl<IFACE, D, H, S, CommE> Mma7660fcBuilder<IFACE, D, H, S>
where
    IFACE: Mma7660fcInterface<Error = CommE>,
    D: DelayNs,
    H: EventHandler,
    S: DebugSink,
{
    /// Verifies every capability is bound and returns a closed handle.
    pub fn build(self) -> Result<Mma7660fc<IFACE, D, H, S>, CommE> {
        let Some(mut debug) = self.debug else {
            warn!("mma7660fc: debug sink is not bound");
            return Err(Error::MissingBinding(Binding::DebugSink));
        };
        let Some(interface) = self.interface else {
            debug.debug("mma7660fc: interface is not bound.");
            return Err(Error::MissingBinding(Binding::Interface));
        };
        let Some(handler) = self.handler else {
            debug.debug("mma7660fc: event handler is not bound.");
            return Err(Error::MissingBinding(Binding::EventHandler));
        };
        let Some(delay) = self.delay else {
            debug.debug("mma7660fc: delay is not bound.");
            return Err(Error::MissingBinding(Binding::Delay));
        };

        Ok(Mma7660fc::new(interface, delay, handler, debug))
    }

    /// Builds the handle and opens the transport.
    pub fn init(self) -> Result<Mma7660fc<IFACE, D, H, S>, CommE> {
        let mut device = self.build()?;
        device.init()?;
        Ok(device)
    }
}

impl<IFACE, D, H, S> Mma7660fc<IFACE, D, H, S> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a closed driver instance from fully bound capabilities.
    pub fn new(interface: IFACE, delay: D, handler: H, debug: S) -> Self {
        Self {
            interface,
            delay,
            handler,
            debug,
            initialized: false,
        }
    }

    /// Starts a [`Mma7660fcBuilder`].
    pub fn builder() -> Mma7660fcBuilder<IFACE, D, H, S> {
        Mma7660fcBuilder::new()
    }

    /// Consumes the driver and returns the owned capabilities.
    pub fn release(self) -> (IFACE, D, H, S) {
        (self.interface, self.delay, self.handler, self.debug)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns `true` between a successful [`init`](Self::init) and [`deinit`](Self::deinit).
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<I2C, D, H, S> Mma7660fc<I2cInterface<I2C>, D, H, S>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, delay: D, handler: H, debug: S) -> Self {
        Self::new(I2cInterface::new(i2c), delay, handler, debug)
    }

    /// Releases the driver, returning the I2C bus and the remaining capabilities.
    pub fn release_i2c(self) -> (I2C, D, H, S) {
        let (iface, delay, handler, debug) = self.release();
        (iface.release(), delay, handler, debug)
    }
}

impl<IFACE, D, H, S, CommE> Mma7660fc<IFACE, D, H, S>
where
    IFACE: Mma7660fcInterface<Error = CommE>,
    D: DelayNs,
    H: EventHandler,
    S: DebugSink,
{
    // ==================================================================
    // == Lifecycle =====================================================
    // ==================================================================
    /// Opens the transport and marks the handle initialized.
    ///
    /// Calling it on an already initialized handle does nothing.
    pub fn init(&mut self) -> Result<(), CommE> {
        if self.initialized {
            return Ok(());
        }

        if let Err(err) = self.interface.open() {
            self.report("mma7660fc: iic init failed.");
            return Err(Error::Open(err));
        }

        self.initialized = true;
        debug!("mma7660fc: initialized");
        Ok(())
    }

    /// Forces the device into standby and closes the transport.
    ///
    /// The transport is closed even if the standby write fails; in that case
    /// the standby failure is what gets reported. The handle counts as closed
    /// whenever the transport close succeeds.
    pub fn deinit(&mut self) -> Result<(), CommE> {
        self.ensure_initialized()?;

        let standby = self.modify_reg::<ModeControl, _>(|mode| mode.set_mode(Mode::Standby));
        let closed = self.interface.close();
        if closed.is_ok() {
            self.initialized = false;
            debug!("mma7660fc: closed");
        } else {
            self.report("mma7660fc: iic deinit failed.");
        }

        standby?;
        closed.map_err(Error::Close)
    }

    /// Blocks for `ms` milliseconds using the bound delay provider.
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Programs the whole register file from `config`.
    ///
    /// The device is put in standby first, since it only accepts register
    /// writes there, and [`Config::mode`] is entered last.
    pub fn configure(&mut self, config: &Config) -> Result<(), CommE> {
        if config.validate().is_err() {
            self.report("mma7660fc: config is invalid.");
            return Err(Error::InvalidConfig);
        }

        self.set_mode(Mode::Standby)?;
        self.write_byte(REG_SPCNT, config.sleep_count)?;
        self.write_byte(REG_INTSU, config.interrupts.register().into())?;
        self.write_byte(REG_SR, config.sample_rate_register().into())?;
        self.write_byte(REG_PDET, config.tap_detect_register().into())?;
        self.write_byte(REG_PD, config.tap_pulse_debounce)?;
        self.write_byte(REG_MODE, config.mode_register(Mode::Standby).into())?;
        if config.mode != Mode::Standby {
            self.write_byte(REG_MODE, config.mode_register(config.mode).into())?;
        }

        debug!("mma7660fc: configured");
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads one acceleration sample.
    ///
    /// Returns [`Error::InvalidData`] when any axis was captured during an
    /// output update; discard it and poll again.
    pub fn read(&mut self) -> Result<Sample, CommE> {
        let mut bytes = [0u8; SAMPLE_BYTES];
        self.read_bytes(REG_XOUT, &mut bytes)?;

        match sample::decode(bytes) {
            Ok(sample) => Ok(sample),
            Err(_) => {
                self.report("mma7660fc: data is invalid.");
                Err(Error::InvalidData)
            }
        }
    }

    // ==================================================================
    // == Interrupt Dispatch ============================================
    // ==================================================================
    /// Reads `TILT` and `SRST` and delivers every event they report to the
    /// bound [`EventHandler`], in the fixed order of
    /// [`decode_events`](crate::interrupt::decode_events).
    ///
    /// Intended to be called from the INT pin's service routine. A failed
    /// read is returned without retrying; tilt events already delivered stay
    /// delivered if the `SRST` read fails.
    pub fn irq_handler(&mut self) -> Result<(), CommE> {
        let tilt = self.read_reg::<Tilt>()?;
        trace!("mma7660fc: tilt {=u8:#b}", u8::from(tilt));
        let handler = &mut self.handler;
        decode_tilt_events(tilt, |event| handler.on_event(event));

        let sleep = self.read_reg::<SleepStatus>()?;
        let handler = &mut self.handler;
        decode_sleep_events(sleep, |event| handler.on_event(event));
        Ok(())
    }

    // ==================================================================
    // == Status ========================================================
    // ==================================================================
    /// Reads the `TILT` register.
    pub fn get_tilt_status(&mut self) -> Result<Tilt, CommE> {
        self.read_reg::<Tilt>()
    }

    /// Returns whether the device has entered auto-sleep (`SRST[0]`).
    pub fn get_auto_sleep_status(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<SleepStatus>()?.auto_sleep())
    }

    /// Returns whether the device has woken from auto-sleep (`SRST[1]`).
    pub fn get_auto_wake_up_status(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<SleepStatus>()?.auto_wake())
    }

    // ==================================================================
    // == Sleep Counter =================================================
    // ==================================================================
    /// Sets the sleep counter (`SPCNT`).
    pub fn set_sleep_count(&mut self, count: u8) -> Result<(), CommE> {
        self.write_byte(REG_SPCNT, count)
    }

    /// Reads the sleep counter (`SPCNT`).
    pub fn get_sleep_count(&mut self) -> Result<u8, CommE> {
        self.read_byte(REG_SPCNT)
    }

    // ==================================================================
    // == Interrupt Setup (INTSU) =======================================
    // ==================================================================
    /// Enables or disables the front/back interrupt.
    pub fn set_front_back_interrupt(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<InterruptSetup, _>(|intsu| intsu.set_front_back(enable))
    }

    /// Returns whether the front/back interrupt is enabled.
    pub fn get_front_back_interrupt(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<InterruptSetup>()?.front_back())
    }

    /// Enables or disables the up/down/right/left interrupt.
    pub fn set_up_down_right_left_interrupt(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<InterruptSetup, _>(|intsu| intsu.set_up_down_right_left(enable))
    }

    /// Returns whether the up/down/right/left interrupt is enabled.
    pub fn get_up_down_right_left_interrupt(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<InterruptSetup>()?.up_down_right_left())
    }

    /// Enables or disables the tap interrupt.
    pub fn set_tap_interrupt(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<InterruptSetup, _>(|intsu| intsu.set_tap(enable))
    }

    /// Returns whether the tap interrupt is enabled.
    pub fn get_tap_interrupt(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<InterruptSetup>()?.tap())
    }

    /// Enables or disables the auto-sleep/wake interrupt.
    pub fn set_auto_sleep_interrupt(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<InterruptSetup, _>(|intsu| intsu.set_auto_sleep(enable))
    }

    /// Returns whether the auto-sleep/wake interrupt is enabled.
    pub fn get_auto_sleep_interrupt(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<InterruptSetup>()?.auto_sleep())
    }

    /// Enables or disables the update interrupt.
    pub fn set_update_interrupt(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<InterruptSetup, _>(|intsu| intsu.set_update(enable))
    }

    /// Returns whether the update interrupt is enabled.
    pub fn get_update_interrupt(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<InterruptSetup>()?.update())
    }

    /// Enables or disables the X shake interrupt.
    pub fn set_shake_x_interrupt(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<InterruptSetup, _>(|intsu| intsu.set_shake_x(enable))
    }

    /// Returns whether the X shake interrupt is enabled.
    pub fn get_shake_x_interrupt(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<InterruptSetup>()?.shake_x())
    }

    /// Enables or disables the Y shake interrupt.
    pub fn set_shake_y_interrupt(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<InterruptSetup, _>(|intsu| intsu.set_shake_y(enable))
    }

    /// Returns whether the Y shake interrupt is enabled.
    pub fn get_shake_y_interrupt(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<InterruptSetup>()?.shake_y())
    }

    /// Enables or disables the Z shake interrupt.
    pub fn set_shake_z_interrupt(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<InterruptSetup, _>(|intsu| intsu.set_shake_z(enable))
    }

    /// Returns whether the Z shake interrupt is enabled.
    pub fn get_shake_z_interrupt(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<InterruptSetup>()?.shake_z())
    }

    // ==================================================================
    // == Mode Control (MODE) ===========================================
    // ==================================================================
    /// Sets the operating mode.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), CommE> {
        self.modify_reg::<ModeControl, _>(|ctrl| ctrl.set_mode(mode))
    }

    /// Reads the operating mode.
    ///
    /// Returns [`Error::InvalidBitPattern`] if the field holds one of the
    /// five undefined encodings.
    pub fn get_mode(&mut self) -> Result<Mode, CommE> {
        let ctrl = self.read_reg::<ModeControl>()?;
        ctrl.mode_or_err()
            .map_err(|_| Error::InvalidBitPattern(u8::from(ctrl) & MODE_FIELD_MASK))
    }

    /// Enables or disables auto-wake.
    pub fn set_auto_wake_up(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<ModeControl, _>(|ctrl| ctrl.set_auto_wake(enable))
    }

    /// Returns whether auto-wake is enabled.
    pub fn get_auto_wake_up(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<ModeControl>()?.auto_wake())
    }

    /// Enables or disables auto-sleep.
    pub fn set_auto_sleep(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<ModeControl, _>(|ctrl| ctrl.set_auto_sleep(enable))
    }

    /// Returns whether auto-sleep is enabled.
    pub fn get_auto_sleep(&mut self) -> Result<bool, CommE> {
        Ok(self.read_reg::<ModeControl>()?.auto_sleep())
    }

    /// Sets the sleep counter prescaler.
    pub fn set_sleep_counter_prescaler(&mut self, prescaler: SleepCounterPrescaler) -> Result<(), CommE> {
        self.modify_reg::<ModeControl, _>(|ctrl| ctrl.set_prescaler(prescaler))
    }

    /// Reads the sleep counter prescaler.
    pub fn get_sleep_counter_prescaler(&mut self) -> Result<SleepCounterPrescaler, CommE> {
        Ok(self.read_reg::<ModeControl>()?.prescaler())
    }

    /// Sets the interrupt output driver.
    pub fn set_interrupt_pin_type(&mut self, pin_type: InterruptPinType) -> Result<(), CommE> {
        self.modify_reg::<ModeControl, _>(|ctrl| ctrl.set_pin_type(pin_type))
    }

    /// Reads the interrupt output driver.
    pub fn get_interrupt_pin_type(&mut self) -> Result<InterruptPinType, CommE> {
        Ok(self.read_reg::<ModeControl>()?.pin_type())
    }

    /// Sets the interrupt output polarity.
    pub fn set_interrupt_active_level(&mut self, level: InterruptActiveLevel) -> Result<(), CommE> {
        self.modify_reg::<ModeControl, _>(|ctrl| ctrl.set_active_level(level))
    }

    /// Reads the interrupt output polarity.
    pub fn get_interrupt_active_level(&mut self) -> Result<InterruptActiveLevel, CommE> {
        Ok(self.read_reg::<ModeControl>()?.active_level())
    }

    // ==================================================================
    // == Sample Rates (SR) =============================================
    // ==================================================================
    /// Sets the active/auto-sleep rate, which is also the tap detection rate.
    pub fn set_tap_detection_rate(&mut self, rate: AutoSleepRate) -> Result<(), CommE> {
        self.modify_reg::<SampleRate, _>(|sr| sr.set_auto_sleep_rate(rate))
    }

    /// Reads the active/auto-sleep rate.
    pub fn get_tap_detection_rate(&mut self) -> Result<AutoSleepRate, CommE> {
        Ok(self.read_reg::<SampleRate>()?.auto_sleep_rate())
    }

    /// Sets the auto-wake rate.
    pub fn set_auto_wake_rate(&mut self, rate: AutoWakeRate) -> Result<(), CommE> {
        self.modify_reg::<SampleRate, _>(|sr| sr.set_auto_wake_rate(rate))
    }

    /// Reads the auto-wake rate.
    pub fn get_auto_wake_rate(&mut self) -> Result<AutoWakeRate, CommE> {
        Ok(self.read_reg::<SampleRate>()?.auto_wake_rate())
    }

    /// Sets the tilt debounce filter.
    pub fn set_tilt_debounce_filter(&mut self, filter: TiltDebounceFilter) -> Result<(), CommE> {
        self.modify_reg::<SampleRate, _>(|sr| sr.set_filter(filter))
    }

    /// Reads the tilt debounce filter.
    pub fn get_tilt_debounce_filter(&mut self) -> Result<TiltDebounceFilter, CommE> {
        Ok(self.read_reg::<SampleRate>()?.filter())
    }

    // ==================================================================
    // == Tap Detection (PDET, PD) ======================================
    // ==================================================================
    /// Sets the tap detection threshold in counts.
    ///
    /// Values above 31 return [`Error::OutOfRange`] without touching the bus.
    pub fn set_tap_detection_threshold(&mut self, threshold: u8) -> Result<(), CommE> {
        self.ensure_initialized()?;
        if threshold > TAP_THRESHOLD_MAX {
            self.report("mma7660fc: threshold is over 31.");
            return Err(Error::OutOfRange);
        }

        self.modify_reg::<TapDetect, _>(|pdet| pdet.set_threshold(threshold))
    }

    /// Reads the tap detection threshold in counts.
    pub fn get_tap_detection_threshold(&mut self) -> Result<u8, CommE> {
        Ok(self.read_reg::<TapDetect>()?.threshold())
    }

    /// Includes or excludes the X axis from tap detection.
    pub fn set_tap_x_detection(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<TapDetect, _>(|pdet| pdet.set_x_disabled(!enable))
    }

    /// Returns whether the X axis takes part in tap detection.
    pub fn get_tap_x_detection(&mut self) -> Result<bool, CommE> {
        Ok(!self.read_reg::<TapDetect>()?.x_disabled())
    }

    /// Includes or excludes the Y axis from tap detection.
    pub fn set_tap_y_detection(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<TapDetect, _>(|pdet| pdet.set_y_disabled(!enable))
    }

    /// Returns whether the Y axis takes part in tap detection.
    pub fn get_tap_y_detection(&mut self) -> Result<bool, CommE> {
        Ok(!self.read_reg::<TapDetect>()?.y_disabled())
    }

    /// Includes or excludes the Z axis from tap detection.
    pub fn set_tap_z_detection(&mut self, enable: bool) -> Result<(), CommE> {
        self.modify_reg::<TapDetect, _>(|pdet| pdet.set_z_disabled(!enable))
    }

    /// Returns whether the Z axis takes part in tap detection.
    pub fn get_tap_z_detection(&mut self) -> Result<bool, CommE> {
        Ok(!self.read_reg::<TapDetect>()?.z_disabled())
    }

    /// Sets the tap pulse debounce count (`PD`).
    pub fn set_tap_pulse_debounce_count(&mut self, count: u8) -> Result<(), CommE> {
        self.write_byte(REG_PD, count)
    }

    /// Reads the tap pulse debounce count (`PD`).
    pub fn get_tap_pulse_debounce_count(&mut self) -> Result<u8, CommE> {
        self.read_byte(REG_PD)
    }

    /// Sets the tap pulse debounce from a duration in milliseconds.
    pub fn set_tap_pulse_debounce(&mut self, ms: f32) -> Result<(), CommE> {
        self.set_tap_pulse_debounce_count(ms_to_register(ms))
    }

    /// Reads the tap pulse debounce as a duration in milliseconds.
    pub fn get_tap_pulse_debounce(&mut self) -> Result<f32, CommE> {
        Ok(register_to_ms(self.get_tap_pulse_debounce_count()?))
    }

    // ==================================================================
    // == Raw Register Access ===========================================
    // ==================================================================
    /// Writes `data` to consecutive registers starting at `register`.
    pub fn set_reg(&mut self, register: u8, data: &[u8]) -> Result<(), CommE> {
        self.write_bytes(register, data)
    }

    /// Reads consecutive registers starting at `register` into `buf`.
    pub fn get_reg(&mut self, register: u8, buf: &mut [u8]) -> Result<(), CommE> {
        self.read_bytes(register, buf)
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    fn ensure_initialized(&self) -> Result<(), CommE> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn report(&mut self, message: &str) {
        warn!("{=str}", message);
        self.debug.debug(message);
    }

    fn read_bytes(&mut self, register: u8, buf: &mut [u8]) -> Result<(), CommE> {
        self.ensure_initialized()?;

        match self.interface.read(I2C_ADDRESS, register, buf) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.report(read_failure_message(register));
                Err(Error::Read(err))
            }
        }
    }

    fn write_bytes(&mut self, register: u8, data: &[u8]) -> Result<(), CommE> {
        self.ensure_initialized()?;

        match self.interface.write(I2C_ADDRESS, register, data) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.report(write_failure_message(register));
                Err(Error::Write(err))
            }
        }
    }

    fn read_byte(&mut self, register: u8) -> Result<u8, CommE> {
        let mut value = [0u8; 1];
        self.read_bytes(register, &mut value)?;
        Ok(value[0])
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        self.write_bytes(register, core::slice::from_ref(&value))
    }

    fn read_reg<R>(&mut self) -> Result<R, CommE>
    where
        R: Register,
    {
        Ok(R::from(self.read_byte(R::ADDRESS)?))
    }

    fn modify_reg<R, F>(&mut self, mutate: F) -> Result<(), CommE>
    where
        R: Register,
        F: FnOnce(&mut R),
    {
        debug_assert_eq!(R::ACCESS, RegisterAccess::ReadWrite, "register {:#04x} is read-only", R::ADDRESS);

        let mut value = self.read_reg::<R>()?;
        mutate(&mut value);
        self.write_byte(R::ADDRESS, value.into())
    }
}

fn read_failure_message(register: u8) -> &'static str {
    match register {
        REG_XOUT | REG_YOUT | REG_ZOUT => "mma7660fc: read data failed.",
        REG_TILT => "mma7660fc: read tilt failed.",
        REG_SRST => "mma7660fc: read srst failed.",
        REG_SPCNT => "mma7660fc: read spcnt failed.",
        REG_INTSU => "mma7660fc: read intsu failed.",
        REG_MODE => "mma7660fc: read mode failed.",
        REG_SR => "mma7660fc: read sr failed.",
        REG_PDET => "mma7660fc: read pdet failed.",
        REG_PD => "mma7660fc: read pd failed.",
        _ => "mma7660fc: read register failed.",
    }
}

fn write_failure_message(register: u8) -> &'static str {
    match register {
        REG_SPCNT => "mma7660fc: write spcnt failed.",
        REG_INTSU => "mma7660fc: write intsu failed.",
        REG_MODE => "mma7660fc: write mode failed.",
        REG_SR => "mma7660fc: write sr failed.",
        REG_PDET => "mma7660fc: write pdet failed.",
        REG_PD => "mma7660fc: write pd failed.",
        _ => "mma7660fc: write register failed.",
    }
}
