extern crate std;

use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::interface::{DebugSink, Mma7660fcInterface};
use crate::interrupt::{Event, EventHandler};
use crate::registers::I2C_ADDRESS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MockError;

#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 16],
    writes: Vec<(u8, Vec<u8>)>,
    reads: Vec<u8>,
    fail_read: Option<u8>,
    fail_write: Option<u8>,
    fail_open: bool,
    fail_close: bool,
    pub(crate) opens: u32,
    pub(crate) closes: u32,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 16],
            writes: Vec::new(),
            reads: Vec::new(),
            fail_read: None,
            fail_write: None,
            fail_open: false,
            fail_close: false,
            opens: 0,
            closes: 0,
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn failing_read(mut self, reg: u8) -> Self {
        self.fail_read = Some(reg);
        self
    }

    pub(crate) fn failing_write(mut self, reg: u8) -> Self {
        self.fail_write = Some(reg);
        self
    }

    pub(crate) fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub(crate) fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    pub(crate) fn writes(&self) -> &[(u8, Vec<u8>)] {
        &self.writes
    }

    pub(crate) fn reads(&self) -> &[u8] {
        &self.reads
    }

    pub(crate) fn clear_log(&mut self) {
        self.writes.clear();
        self.reads.clear();
    }
}

impl Mma7660fcInterface for MockInterface {
    type Error = MockError;

    fn open(&mut self) -> Result<(), MockError> {
        self.opens += 1;
        if self.fail_open { Err(MockError) } else { Ok(()) }
    }

    fn close(&mut self) -> Result<(), MockError> {
        self.closes += 1;
        if self.fail_close { Err(MockError) } else { Ok(()) }
    }

    fn read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), MockError> {
        assert_eq!(address, I2C_ADDRESS);
        self.reads.push(register);
        if self.fail_read == Some(register) {
            return Err(MockError);
        }
        for (offset, slot) in buf.iter_mut().enumerate() {
            *slot = self.regs[register as usize + offset];
        }
        Ok(())
    }

    fn write(&mut self, address: u8, register: u8, data: &[u8]) -> Result<(), MockError> {
        assert_eq!(address, I2C_ADDRESS);
        if self.fail_write == Some(register) {
            return Err(MockError);
        }
        for (offset, value) in data.iter().enumerate() {
            self.regs[register as usize + offset] = *value;
        }
        self.writes.push((register, data.to_vec()));
        Ok(())
    }
}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) last_ns: Option<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.last_ns = Some(ns);
    }
}

/// Event handler that keeps everything it is given.
#[derive(Default, Debug)]
pub(crate) struct Recorder {
    pub(crate) events: Vec<Event>,
}

impl EventHandler for Recorder {
    fn on_event(&mut self, event: Event) {
        self.events.push(event);
    }
}

#[derive(Default, Debug)]
pub(crate) struct MessageLog {
    pub(crate) messages: Vec<String>,
}

impl DebugSink for MessageLog {
    fn debug(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
