///! Input reference config
///! Board crystal / oscillator feeding the ICS307

use crate::errors::*;


/// Input reference frequency, Hz.
/// Fixed per board, both conversions are relative to it.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct RefIn(u32);

impl RefIn {

    /// Configure reference input frequency
    pub fn new(f: u32) -> Result<Self, Error> {
        if f == 0 {
            Err(Error::InvalidReferenceFrequency)
        } else {
            Ok(RefIn(f))
        }
    }

    /// Reference frequency, Hz
    #[inline]
    pub fn hz(self: &Self) -> u32 {
        self.0
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_reference_is_rejected() {
        assert_eq!(RefIn::new(0), Err(Error::InvalidReferenceFrequency));
        assert_eq!(RefIn::new(66_666_666).map(|r| r.hz()), Ok(66_666_666));
    }
}
