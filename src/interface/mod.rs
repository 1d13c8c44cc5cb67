//! Bus interface abstraction for the MMA7660FC driver.
//!
//! The driver never talks to a bus directly. It is handed a transport
//! implementing [`Mma7660fcInterface`], a delay provider, an
//! [`EventHandler`](crate::interrupt::EventHandler) and a [`DebugSink`].
//! None of these are synchronized by the driver: if several execution
//! contexts share a device handle the caller must serialize access, otherwise
//! two read-modify-write sequences on the same register can interleave and
//! lose an update.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
pub trait Mma7660fcInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Brings the transport up. Called once by [`Mma7660fc::init`](crate::Mma7660fc::init).
    fn open(&mut self) -> core::result::Result<(), Self::Error>;

    /// Shuts the transport down. Called once by [`Mma7660fc::deinit`](crate::Mma7660fc::deinit).
    fn close(&mut self) -> core::result::Result<(), Self::Error>;

    /// Reads `buf.len()` consecutive registers starting at `register`.
    fn read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Writes `data.len()` consecutive registers starting at `register`.
    fn write(&mut self, address: u8, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, address: u8, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read(address, register, &mut value)?;
        Ok(value[0])
    }

    /// Writes a single register.
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.write(address, register, core::slice::from_ref(&value))
    }
}

/// Sink for the driver's human-readable diagnostics.
pub trait DebugSink {
    /// Records one diagnostic message.
    fn debug(&mut self, message: &str);
}

impl<F> DebugSink for F
where
    F: FnMut(&str),
{
    fn debug(&mut self, message: &str) {
        self(message)
    }
}

/// [`DebugSink`] that forwards diagnostics to the crate log macros
/// (`defmt` when the `defmt` feature is enabled, otherwise discarded).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogSink;

impl DebugSink for LogSink {
    fn debug(&mut self, message: &str) {
        warn!("{=str}", message);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::String;

    use super::{DebugSink, LogSink};

    #[test]
    fn log_sink_accepts_messages() {
        let mut sink = LogSink;
        sink.debug("mma7660fc: read mode failed.");
        sink.debug(&String::from("mma7660fc: write sr failed."));
    }

    #[test]
    fn closures_are_debug_sinks() {
        let mut last = String::new();
        let mut sink = |message: &str| last = String::from(message);
        sink.debug("mma7660fc: data is invalid.");
        assert_eq!(last, "mma7660fc: data is invalid.");
    }
}
