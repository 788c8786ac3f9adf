///! Solver configuration: fixed mode bits and VCO window

use crate::{ constants::*, register::* };


/// VCO lock range of the part.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum VcoRange {
    /// Industrial temperature range, 60 to 360 MHz
    Industrial,
    /// Commercial temperature range, 55 to 400 MHz
    Commercial,
}

impl VcoRange {
    /// Inclusive VCO bounds, kHz
    #[inline]
    pub fn khz(self: &Self) -> (u32, u32) {
        match self {
            VcoRange::Industrial => (VCO_KHZ_MIN_INDUSTRIAL, VCO_KHZ_MAX_INDUSTRIAL),
            VcoRange::Commercial => (VCO_KHZ_MIN_COMMERCIAL, VCO_KHZ_MAX_COMMERCIAL),
        }
    }

    /// True if `od * out_khz` is a frequency the VCO can lock to
    #[inline]
    pub fn contains(self: &Self, od: u32, out_khz: u32) -> bool {
        let (min, max) = self.khz();
        let vco = od as u64 * out_khz as u64;
        (min as u64 ..= max as u64).contains(&vco)
    }
}


/// Settings that are not part of the frequency search but
/// are packed into every control word it produces.
///
/// Defaults match the SYSCLK / CLK1 setup: TTL duty cycle,
/// CLK2 = REF, crystal load 0, industrial part.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Ics307Config {
    pub output_mode: OutputMode,
    pub clk2: Clk2Function,
    pub crystal_load: CrystalLoad,
    pub vco: VcoRange,
}

impl Default for Ics307Config {
    fn default() -> Self {
        Ics307Config {
            output_mode: OutputMode::Ttl,
            clk2: Clk2Function::Ref,
            crystal_load: CrystalLoad(0),
            vco: VcoRange::Industrial,
        }
    }
}

/// Config setting, `Ics307Config::set` accepts any of these
pub trait Setting {
    fn apply(self: Self, cfg: Ics307Config) -> Ics307Config;
}

impl Setting for OutputMode {
    fn apply(self: Self, cfg: Ics307Config) -> Ics307Config { Ics307Config { output_mode: self, ..cfg } }
}

impl Setting for Clk2Function {
    fn apply(self: Self, cfg: Ics307Config) -> Ics307Config { Ics307Config { clk2: self, ..cfg } }
}

impl Setting for CrystalLoad {
    fn apply(self: Self, cfg: Ics307Config) -> Ics307Config { Ics307Config { crystal_load: self, ..cfg } }
}

impl Setting for VcoRange {
    fn apply(self: Self, cfg: Ics307Config) -> Ics307Config { Ics307Config { vco: self, ..cfg } }
}

impl Ics307Config {

    /// Update a setting
    #[inline]
    pub fn set<S: Setting>(self: Self, s: S) -> Self {
        s.apply(self)
    }

    /// Mode bits of the control word, divider fields are left at 0
    pub fn mode_bits(self: &Self) -> ControlWord {
        ControlWord::default()
            .set(self.output_mode)
            .set(self.clk2)
            .set(self.crystal_load)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_bits() {
        // CLK2 << 19 | TTL << 21 | CRYSTAL << 22 with TTL = 1
        assert_eq!(Ics307Config::default().mode_bits().w, 1 << 21);
    }

    #[test]
    fn builder_updates_settings() {
        let cfg = Ics307Config::default()
            .set(OutputMode::Cmos)
            .set(Clk2Function::Clk1Div2)
            .set(CrystalLoad(2))
            .set(VcoRange::Commercial);

        assert_eq!(cfg.mode_bits().w, 3 << 19 | 2 << 22);
        assert_eq!(cfg.vco, VcoRange::Commercial);
    }

    #[test]
    fn vco_window_is_inclusive() {
        let v = VcoRange::Industrial;
        assert!(v.contains(10, 6_000));
        assert!(v.contains(2, 180_000));
        assert!(!v.contains(10, 5_999));
        assert!(!v.contains(2, 180_001));
        assert!(VcoRange::Commercial.contains(2, 200_000));
    }
}
