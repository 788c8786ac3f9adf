//! Errors

use core::fmt;

/// Driver errors
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reference clock is zero
    InvalidReferenceFrequency,
    /// Requested output frequency is zero
    InvalidOutputFrequency,
    /// No (OD, RDW, VDW) combination reaches the requested frequency
    NoSolution,
    /// Clock has no rate control on this SoC
    UnsupportedClock,
    /// Hardware did not report ready in time
    Timeout,
    /// External reset line failed to change state
    Reset,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Error::InvalidReferenceFrequency => "invalid reference frequency",
            Error::InvalidOutputFrequency => "invalid output frequency",
            Error::NoSolution => "no divider combination for requested frequency",
            Error::UnsupportedClock => "clock not supported",
            Error::Timeout => "timed out waiting for hardware",
            Error::Reset => "reset line failure",
        };
        f.write_str(s)
    }
}
