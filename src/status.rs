/// Decoded device status register.
///
/// Produced by [`Sht3x::status`](crate::Sht3x::status); a read or checksum
/// failure never yields a `Status`, so an all-zero value really means all
/// flags are clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Status(u16);

impl From<u16> for Status {
    fn from(bits: u16) -> Self {
        Status(bits)
    }
}

impl Status {
    /// Raw register value
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// At least one alert condition is pending
    pub fn alert_pending(&self) -> bool {
        self.0 & (1 << 15) != 0
    }

    /// The internal heater is running
    pub fn heater_on(&self) -> bool {
        self.0 & (1 << 13) != 0
    }

    /// Humidity tracking alert
    pub fn humidity_alert(&self) -> bool {
        self.0 & (1 << 11) != 0
    }

    /// Temperature tracking alert
    pub fn temperature_alert(&self) -> bool {
        self.0 & (1 << 10) != 0
    }

    /// A reset (hard, soft or supply brown-out) occurred since the last clear
    pub fn reset_detected(&self) -> bool {
        self.0 & (1 << 4) != 0
    }

    /// The last command was not processed
    pub fn command_failed(&self) -> bool {
        self.0 & (1 << 1) != 0
    }

    /// The checksum of the last written data was wrong
    pub fn checksum_failed(&self) -> bool {
        self.0 & 1 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::Status;

    #[test]
    fn bit_accessors() {
        let status = Status::from(0xA813);
        assert!(status.alert_pending());
        assert!(status.heater_on());
        assert!(status.humidity_alert());
        assert!(!status.temperature_alert());
        assert!(status.reset_detected());
        assert!(status.command_failed());
        assert!(status.checksum_failed());

        let clear = Status::from(0);
        assert_eq!(clear.bits(), 0);
        assert!(!clear.heater_on());
        assert!(!clear.reset_detected());
    }
}
