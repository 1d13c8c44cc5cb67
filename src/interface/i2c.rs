//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::{I2c, Operation};

use super::Mma7660fcInterface;

/// I2C-based interface implementation for the MMA7660FC driver.
///
/// Bus bring-up is owned by the HAL that produced `I2C`, so
/// [`open`](Mma7660fcInterface::open) and [`close`](Mma7660fcInterface::close)
/// do not touch the bus.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I2C bus.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Mma7660fcInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn open(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn close(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.write_read(address, &[register], buf)
    }

    fn write(&mut self, address: u8, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }

        let pointer = [register];
        let mut operations = [Operation::Write(&pointer), Operation::Write(data)];
        self.i2c.transaction(address, &mut operations)
    }
}
