//! Error handling primitives for the MMA7660FC driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A bus read reported an error.
    Read(E),
    /// A bus write reported an error.
    Write(E),
    /// The transport could not be opened.
    Open(E),
    /// The transport could not be closed.
    Close(E),
    /// The handle has not been initialized, or was deinitialized.
    NotInitialized,
    /// A required capability was never bound to the handle.
    MissingBinding(Binding),
    /// An argument does not fit its register field.
    OutOfRange,
    /// A sample was captured while the device was updating its output registers.
    InvalidData,
    /// A register field holds an encoding with no defined meaning.
    InvalidBitPattern(u8),
    /// The provided configuration parameters are invalid.
    InvalidConfig,
}

/// Capabilities a device handle must have bound before it can be used.
///
/// Variants are listed in the order the builder checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Binding {
    /// Diagnostic sink.
    DebugSink,
    /// Bus transport (open/close/read/write).
    Interface,
    /// Motion event handler.
    EventHandler,
    /// Millisecond delay provider.
    Delay,
}
