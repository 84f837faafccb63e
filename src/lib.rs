#![no_std]
#![doc = include_str!("../README.md")]

mod command;
mod device;
mod measurement;
mod result;
mod status;

pub use command::{ClockStretching, Command, OpCode, Periodicity, Repeatability};
pub use device::{Address, Sht3x};
pub use measurement::{raw_to_celsius, raw_to_percent, Measurement, RawMeasurement};
pub use result::Error;
pub use status::Status;

/// CRC-8 as produced by the sensor: polynomial 0x31, initial value 0xFF,
/// no reflection, no final XOR. The device appends one checksum byte after
/// every 2-byte word it transmits.
pub fn crc8(data: &[u8]) -> u8 {
    const TABLE: [u8; 16] = [
        0x00, 0x31, 0x62, 0x53, 0xc4, 0xf5, 0xa6, 0x97, 0xb9, 0x88, 0xdb, 0xea, 0x7d, 0x4c, 0x1f,
        0x2e,
    ];

    let mut crc = 0xff_u8;
    for byte in data.iter() {
        // high nibble
        let pos = (byte ^ crc) >> 4;
        crc = (crc << 4) ^ TABLE[pos as usize];
        // low nibble, against the updated crc
        let pos = ((crc >> 4) ^ byte) & 0xf;
        crc = (crc << 4) ^ TABLE[pos as usize];
    }
    crc
}
