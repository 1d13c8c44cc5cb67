//! `no_std` driver for the NXP MMA7660FC 3-axis orientation/motion sensor.
//!
//! The driver runs on top of `embedded-hal` 1.0 traits. Sample acquisition,
//! register configuration and interrupt event dispatch are exposed through
//! [`Mma7660fc`].

#![no_std]

#[macro_use]
mod log;
mod error;

pub mod config;
pub mod device;
pub mod info;
pub mod interface;
pub mod interrupt;
pub mod params;
pub mod registers;
pub mod sample;
pub mod timing;

#[cfg(test)]
mod testing;

pub use crate::config::{Config, ConfigBuilder, InterruptSources};
pub use crate::device::{Mma7660fc, Mma7660fcBuilder};
pub use crate::error::{Binding, Error, Result};
pub use crate::info::{info, Info};
pub use crate::interface::i2c::I2cInterface;
pub use crate::interface::{DebugSink, LogSink, Mma7660fcInterface};
pub use crate::interrupt::{Event, EventHandler};
pub use crate::registers::I2C_ADDRESS;
pub use crate::sample::Sample;
