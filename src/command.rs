pub trait OpCode {
    fn op_code(&self) -> u16;
}

/// Command words understood by the sensor.
///
/// Measurement commands come in two matrices: single-shot ones keyed by
/// repeatability and clock-stretching mode, periodic ones keyed by
/// repeatability and measurement rate. Use [`Command::single_shot`],
/// [`Command::periodic`] or [`Command::encode`] to pick from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Command {
    SoftReset = 0x30A2,
    GetStatus = 0xF32D,
    ClearStatus = 0x3041,
    /// Stop a running periodic acquisition
    Break = 0x3093,
    /// Fetch the latest periodic result
    Fetch = 0xE000,
    HeaterEnable = 0x306D,
    HeaterDisable = 0x3066,
    SingleHighStretch = 0x2C06,
    SingleMediumStretch = 0x2C0D,
    SingleLowStretch = 0x2C10,
    SingleHigh = 0x2400,
    SingleMedium = 0x240B,
    SingleLow = 0x2416,
    PeriodicHalfHzHigh = 0x2032,
    PeriodicHalfHzMedium = 0x2024,
    PeriodicHalfHzLow = 0x202F,
    PeriodicOneHzHigh = 0x2130,
    PeriodicOneHzMedium = 0x2126,
    PeriodicOneHzLow = 0x212D,
    PeriodicTwoHzHigh = 0x2236,
    PeriodicTwoHzMedium = 0x2220,
    PeriodicTwoHzLow = 0x222B,
    PeriodicFourHzHigh = 0x2334,
    PeriodicFourHzMedium = 0x2322,
    PeriodicFourHzLow = 0x2329,
    PeriodicTenHzHigh = 0x2737,
    PeriodicTenHzMedium = 0x2721,
    PeriodicTenHzLow = 0x272A,
}

impl OpCode for Command {
    fn op_code(&self) -> u16 {
        *self as _
    }
}

/// Measurement repeatability (precision class)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeatability {
    Low,
    Medium,
    High,
}

/// Whether the device may stall the bus clock while converting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockStretching {
    Enabled,
    Disabled,
}

/// Measurement rate for periodic acquisition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Periodicity {
    /// One-off acquisition, no periodic rate
    Single,
    /// 0.5 measurements per second
    HalfHz,
    /// 1 measurement per second
    OneHz,
    /// 2 measurements per second
    TwoHz,
    /// 4 measurements per second
    FourHz,
    /// 10 measurements per second
    TenHz,
}

impl Periodicity {
    /// Milliseconds between consecutive measurements, 0 for [`Periodicity::Single`].
    /// A zero result means there is no periodic loop to arm.
    pub fn interval_ms(&self) -> u32 {
        match self {
            Periodicity::Single => 0,
            Periodicity::HalfHz => 2000,
            Periodicity::OneHz => 1000,
            Periodicity::TwoHz => 500,
            Periodicity::FourHz => 250,
            Periodicity::TenHz => 100,
        }
    }
}

impl Command {
    /// Single-shot acquisition command, `None` if the combination is unsupported.
    pub fn single_shot(
        repeatability: Repeatability,
        stretching: ClockStretching,
    ) -> Option<Command> {
        use ClockStretching::*;
        use Repeatability::*;

        Some(match (stretching, repeatability) {
            (Enabled, High) => Command::SingleHighStretch,
            (Enabled, Medium) => Command::SingleMediumStretch,
            (Enabled, Low) => Command::SingleLowStretch,
            (Disabled, High) => Command::SingleHigh,
            (Disabled, Medium) => Command::SingleMedium,
            (Disabled, Low) => Command::SingleLow,
        })
    }

    /// Periodic-start command, `None` if the combination is unsupported
    /// (notably any request with [`Periodicity::Single`]).
    pub fn periodic(repeatability: Repeatability, periodicity: Periodicity) -> Option<Command> {
        use Periodicity::*;
        use Repeatability::*;

        Some(match (periodicity, repeatability) {
            (Single, _) => return None,
            (HalfHz, High) => Command::PeriodicHalfHzHigh,
            (HalfHz, Medium) => Command::PeriodicHalfHzMedium,
            (HalfHz, Low) => Command::PeriodicHalfHzLow,
            (OneHz, High) => Command::PeriodicOneHzHigh,
            (OneHz, Medium) => Command::PeriodicOneHzMedium,
            (OneHz, Low) => Command::PeriodicOneHzLow,
            (TwoHz, High) => Command::PeriodicTwoHzHigh,
            (TwoHz, Medium) => Command::PeriodicTwoHzMedium,
            (TwoHz, Low) => Command::PeriodicTwoHzLow,
            (FourHz, High) => Command::PeriodicFourHzHigh,
            (FourHz, Medium) => Command::PeriodicFourHzMedium,
            (FourHz, Low) => Command::PeriodicFourHzLow,
            (TenHz, High) => Command::PeriodicTenHzHigh,
            (TenHz, Medium) => Command::PeriodicTenHzMedium,
            (TenHz, Low) => Command::PeriodicTenHzLow,
        })
    }

    /// Measurement command for any mode. Clock stretching only applies to
    /// single-shot acquisition and is ignored for periodic rates.
    pub fn encode(
        periodicity: Periodicity,
        repeatability: Repeatability,
        stretching: ClockStretching,
    ) -> Option<Command> {
        match periodicity {
            Periodicity::Single => Self::single_shot(repeatability, stretching),
            _ => Self::periodic(repeatability, periodicity),
        }
    }
}
