use byteorder::{BigEndian, ByteOrder};
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::debug;

use crate::{
    crc8, ClockStretching, Command, Error, Measurement, OpCode, Periodicity, RawMeasurement,
    Repeatability, Status,
};

/// Settle time after a soft reset
const RESET_DELAY_MS: u32 = 10;
/// Worst-case single-shot conversion time
const MEASURE_DELAY_MS: u32 = 20;

/// Device address, selected by the ADDR pin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Address {
    /// ADDR pin low (factory default)
    A = 0x44,
    /// ADDR pin high
    B = 0x45,
}

/// SHT3x device handle.
///
/// Holds only addressing and validation configuration; the bus and the delay
/// provider are borrowed for the duration of each call, so the same I2C
/// peripheral can serve other devices between calls. The sensor itself keeps
/// the acquisition state (idle, converting, periodic), the handle is
/// stateless across operations.
///
/// Operations block on fixed settle delays and do not retry or time out on
/// their own; a multi-threaded host must serialize access to the handle and
/// the bus externally.
#[derive(Clone, Copy, Debug)]
pub struct Sht3x {
    address: Address,
    skip_crc: bool,
}

impl Sht3x {
    pub fn new(address: Address) -> Self {
        Sht3x {
            address,
            skip_crc: false,
        }
    }

    /// Disable response checksum validation. Checksum bytes are still read
    /// from the bus but their content is ignored.
    pub fn skip_crc(mut self, skip: bool) -> Self {
        self.skip_crc = skip;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Bring the device to a known state after power-up.
    ///
    /// The bus peripheral is expected to be initialized by the host already;
    /// this only issues a soft reset.
    pub fn init<I: I2c>(
        &self,
        i2c: &mut I,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I::Error>> {
        self.reset(i2c, delay)
    }

    /// Counterpart of [`Sht3x::init`]: resets the device so it is in a known
    /// state for the next user. The bus is left untouched.
    pub fn shutdown<I: I2c>(
        &self,
        i2c: &mut I,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I::Error>> {
        self.reset(i2c, delay)
    }

    /// Soft-reset the device and wait for it to settle.
    ///
    /// Only the command write is verified; the device is not probed
    /// afterwards to confirm it came back up.
    pub fn reset<I: I2c>(
        &self,
        i2c: &mut I,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I::Error>> {
        self.write_command(i2c, Command::SoftReset)?;
        delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    /// Read and decode the status register.
    pub fn status<I: I2c>(&self, i2c: &mut I) -> Result<Status, Error<I::Error>> {
        self.write_command(i2c, Command::GetStatus)?;

        let mut buf = [0u8; 3];
        self.read_response(i2c, &mut buf)?;
        self.ensure_crc8(&buf[0..2], buf[2])?;

        Ok(Status::from(BigEndian::read_u16(&buf[0..2])))
    }

    /// Clear the alert, command and reset flags in the status register.
    pub fn clear_status<I: I2c>(&self, i2c: &mut I) -> Result<(), Error<I::Error>> {
        self.write_command(i2c, Command::ClearStatus)
    }

    /// Switch the internal heater on or off.
    pub fn set_heater<I: I2c>(&self, i2c: &mut I, on: bool) -> Result<(), Error<I::Error>> {
        self.write_command(
            i2c,
            if on {
                Command::HeaterEnable
            } else {
                Command::HeaterDisable
            },
        )
    }

    /// True when the status register reads back valid and the heater bit is
    /// set. A failed read collapses to `false`, indistinguishable from a
    /// switched-off heater; use [`Sht3x::status`] to tell the cases apart.
    pub fn is_heater_on<I: I2c>(&self, i2c: &mut I) -> bool {
        self.status(i2c).map(|s| s.heater_on()).unwrap_or(false)
    }

    /// Run a single-shot measurement and convert the result.
    pub fn measure<I: I2c>(
        &self,
        i2c: &mut I,
        delay: &mut impl DelayNs,
        repeatability: Repeatability,
    ) -> Result<Measurement, Error<I::Error>> {
        self.measure_raw(i2c, delay, repeatability)
            .map(Measurement::from)
    }

    /// Run a single-shot measurement and return the raw fractions.
    ///
    /// Clock stretching is not used: the command write is followed by a
    /// fixed conversion delay, then the 6-byte result is read out.
    pub fn measure_raw<I: I2c>(
        &self,
        i2c: &mut I,
        delay: &mut impl DelayNs,
        repeatability: Repeatability,
    ) -> Result<RawMeasurement, Error<I::Error>> {
        let command = match Command::single_shot(repeatability, ClockStretching::Disabled) {
            Some(command) => command,
            None => {
                debug!("measure_raw: unsupported repeatability {:?}", repeatability);
                return Err(Error::NotSupport);
            }
        };

        self.write_command(i2c, command)?;
        delay.delay_ms(MEASURE_DELAY_MS);
        self.read_measurement(i2c)
    }

    /// Arm autonomous periodic acquisition at the given rate and
    /// repeatability, stopping any previously running acquisition first.
    ///
    /// Returns the interval in milliseconds between consecutive device-side
    /// measurements. The caller must wait at least that long before the
    /// first [`Sht3x::periodic_measurement`] and pace subsequent fetches the
    /// same way; no timer runs on the driver side.
    pub fn start_periodic<I: I2c>(
        &self,
        i2c: &mut I,
        periodicity: Periodicity,
        repeatability: Repeatability,
    ) -> Result<u32, Error<I::Error>> {
        let interval = periodicity.interval_ms();
        if interval == 0 {
            debug!("start_periodic: {:?} is not a periodic rate", periodicity);
            return Err(Error::NotSupport);
        }

        // cannot fail for a rate with a non-zero interval
        let command =
            Command::periodic(repeatability, periodicity).ok_or(Error::NotSupport)?;

        self.write_command(i2c, Command::Break)?;
        self.write_command(i2c, command)?;

        Ok(interval)
    }

    /// Stop a running periodic acquisition. Safe to send when none is
    /// running.
    pub fn stop_periodic<I: I2c>(&self, i2c: &mut I) -> Result<(), Error<I::Error>> {
        self.write_command(i2c, Command::Break)
    }

    /// Fetch and convert the most recent periodic result.
    pub fn periodic_measurement<I: I2c>(
        &self,
        i2c: &mut I,
    ) -> Result<Measurement, Error<I::Error>> {
        self.periodic_measurement_raw(i2c).map(Measurement::from)
    }

    /// Fetch the most recent periodic result as raw fractions.
    pub fn periodic_measurement_raw<I: I2c>(
        &self,
        i2c: &mut I,
    ) -> Result<RawMeasurement, Error<I::Error>> {
        self.write_command(i2c, Command::Fetch)?;
        self.read_measurement(i2c)
    }

    fn write_command<I: I2c>(&self, i2c: &mut I, command: Command) -> Result<(), Error<I::Error>> {
        let mut frame = [0u8; 2];
        BigEndian::write_u16(&mut frame, command.op_code());

        i2c.write(self.address as u8, &frame).map_err(|e| {
            debug!("write_command: bus error sending {:?}", command);
            Error::PortError(e)
        })
    }

    fn read_response<I: I2c>(&self, i2c: &mut I, buf: &mut [u8]) -> Result<(), Error<I::Error>> {
        i2c.read(self.address as u8, buf).map_err(|e| {
            debug!("read_response: bus error reading {} bytes", buf.len());
            Error::PortError(e)
        })
    }

    fn read_measurement<I: I2c>(&self, i2c: &mut I) -> Result<RawMeasurement, Error<I::Error>> {
        let mut buf = [0u8; 6];
        self.read_response(i2c, &mut buf)?;
        self.ensure_crc8(&buf[0..2], buf[2])?;
        self.ensure_crc8(&buf[3..5], buf[5])?;

        Ok(RawMeasurement {
            temperature: BigEndian::read_u16(&buf[0..2]),
            humidity: BigEndian::read_u16(&buf[3..5]),
        })
    }

    fn ensure_crc8<E: Sized + Debug>(&self, data: &[u8], received: u8) -> Result<(), Error<E>> {
        if self.skip_crc {
            return Ok(());
        }

        let computed = crc8(data);
        if computed != received {
            debug!(
                "checksum mismatch: computed {:#04x}, received {:#04x}",
                computed, received
            );
            Err(Error::CrcMismatch(computed, received))
        } else {
            Ok(())
        }
    }
}
