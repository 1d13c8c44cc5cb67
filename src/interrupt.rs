//! Interrupt status decoding and event delivery.

use crate::registers::{SleepStatus, Tilt};

/// Orientation codes carried in `TILT[4:2]`.
const ORIENTATION_LEFT: u8 = 0b001;
const ORIENTATION_RIGHT: u8 = 0b011;
const ORIENTATION_DOWN: u8 = 0b101;
const ORIENTATION_UP: u8 = 0b110;

/// Discrete motion events reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Lying on its front.
    Front,
    /// Lying on its back.
    Back,
    /// Landscape, turned left.
    Left,
    /// Landscape, turned right.
    Right,
    /// Standing vertically, inverted.
    Down,
    /// Standing vertically, upright.
    Up,
    /// Tap detected.
    Tap,
    /// Output registers were updated during the last read; data is invalid.
    Update,
    /// Shake detected on one or more axes.
    Shake,
    /// Device entered auto-sleep.
    AutoSleep,
    /// Device woke up from auto-sleep.
    AutoWake,
}

/// Receiver for events produced by [`Mma7660fc::irq_handler`](crate::Mma7660fc::irq_handler).
///
/// Called synchronously from the dispatcher's context, which is usually an
/// interrupt service routine, so implementations should not block.
pub trait EventHandler {
    /// Handles one event.
    fn on_event(&mut self, event: Event);
}

impl<F> EventHandler for F
where
    F: FnMut(Event),
{
    fn on_event(&mut self, event: Event) {
        self(event)
    }
}

/// Classifies the `TILT` and `SRST` registers into events.
///
/// `emit` is called once per matching event, in declaration order of
/// [`Event`]. The orientation code in `TILT[4:2]` is matched against the
/// four combinations the device reports; any other code emits nothing.
pub fn decode_events<F>(tilt: Tilt, sleep: SleepStatus, mut emit: F)
where
    F: FnMut(Event),
{
    if tilt.front() {
        emit(Event::Front);
    }
    if tilt.back() {
        emit(Event::Back);
    }
    match tilt.orientation() {
        ORIENTATION_LEFT => emit(Event::Left),
        ORIENTATION_RIGHT => emit(Event::Right),
        ORIENTATION_DOWN => emit(Event::Down),
        ORIENTATION_UP => emit(Event::Up),
        _ => {}
    }
    if tilt.tap() {
        emit(Event::Tap);
    }
    if tilt.alert() {
        emit(Event::Update);
    }
    if tilt.shake() {
        emit(Event::Shake);
    }
    decode_sleep_events(sleep, emit);
}

pub(crate) fn decode_tilt_events<F>(tilt: Tilt, emit: F)
where
    F: FnMut(Event),
{
    decode_events(tilt, SleepStatus::new(), emit);
}

pub(crate) fn decode_sleep_events<F>(sleep: SleepStatus, mut emit: F)
where
    F: FnMut(Event),
{
    if sleep.auto_sleep() {
        emit(Event::AutoSleep);
    }
    if sleep.auto_wake() {
        emit(Event::AutoWake);
    }
}
