/// Convert a raw temperature fraction to degrees Celsius.
///
/// Linear over the full 16-bit range: 0 maps to -45 °C, 65535 to +130 °C.
pub fn raw_to_celsius(fraction: u16) -> f32 {
    -45.0 + 175.0 * fraction as f32 / 65535.0
}

/// Convert a raw humidity fraction to percent relative humidity.
///
/// Linear over the full 16-bit range: 0 maps to 0 %RH, 65535 to 100 %RH.
/// The result is not clamped; the device only reports in-range fractions.
pub fn raw_to_percent(fraction: u16) -> f32 {
    100.0 * fraction as f32 / 65535.0
}

/// Raw 16-bit fractions as transmitted by the device
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawMeasurement {
    pub temperature: u16,
    pub humidity: u16,
}

/// Calibrated measurement in degrees Celsius and percent relative humidity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub temperature: f32,
    pub humidity: f32,
}

impl From<RawMeasurement> for Measurement {
    fn from(raw: RawMeasurement) -> Self {
        Measurement {
            temperature: raw_to_celsius(raw.temperature),
            humidity: raw_to_percent(raw.humidity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn temperature_endpoints() {
        assert_eq!(raw_to_celsius(0), -45.0);
        assert!(approx_eq!(f32, raw_to_celsius(u16::MAX), 130.0, epsilon = 1e-4));
    }

    #[test]
    fn humidity_endpoints() {
        assert_eq!(raw_to_percent(0), 0.0);
        assert!(approx_eq!(f32, raw_to_percent(u16::MAX), 100.0, epsilon = 1e-4));
    }

    #[test]
    fn conversions_are_monotonic() {
        let mut prev_t = raw_to_celsius(0);
        let mut prev_rh = raw_to_percent(0);
        for fraction in (0..=u16::MAX).step_by(257).skip(1) {
            let t = raw_to_celsius(fraction);
            let rh = raw_to_percent(fraction);
            assert!(t > prev_t, "temperature not increasing at {}", fraction);
            assert!(rh > prev_rh, "humidity not increasing at {}", fraction);
            prev_t = t;
            prev_rh = rh;
        }
    }

    #[test]
    fn datasheet_scenario() {
        // t = -45 + 175 * 26214 / 65535, rh = 100 * 16384 / 65535
        let m = Measurement::from(RawMeasurement {
            temperature: 0x6666,
            humidity: 0x4000,
        });
        assert!(approx_eq!(f32, m.temperature, 24.99924, epsilon = 1e-3));
        assert!(approx_eq!(f32, m.humidity, 25.00038, epsilon = 1e-3));
    }
}
