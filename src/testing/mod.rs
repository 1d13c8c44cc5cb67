//! Testing infrastructure (mock interfaces, delays, sinks).

pub(crate) mod mock;

pub(crate) use mock::{MessageLog, MockDelay, MockError, MockInterface, Recorder};
