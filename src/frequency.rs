///! Frequency calculations

use log::debug;

use crate::{config::*, constants::*, errors::*, refin::*, register::*};


/// Effective divider values, offsets included.
///
/// CLK1 = REF IN * 2 * V / (R * OD)
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Dividers {
    /// Reference divider, 3 to 129
    pub r: u32,
    /// VCO divider, 12 to 519
    pub v: u32,
    /// Index into `OUTPUT_DIVIDERS`
    pub od_select: usize,
}

impl Dividers {
    /// Output divider value
    #[inline]
    pub fn od(self: &Self) -> u32 {
        output_divider(self.od_select)
    }

    /// Output frequency, kHz, truncated
    pub fn f_out_khz(self: &Self, ref_in: &RefIn) -> u64 {
        ref_in.hz() as u64 * 2 * self.v as u64
            / (self.r as u64 * self.od() as u64 * 1000)
    }
}

/// Output divider for S2:S0, only the low 3 bits of `s` are used.
#[inline]
pub fn output_divider(s: usize) -> u32 {
    OUTPUT_DIVIDERS[s & 0x7]
}

/// Accept `f_tmp` when it is within 1/1000 of `f_out`, compared after
/// truncating the scaled difference.
#[inline]
fn within_tolerance(f_tmp: u64, f_out: u64) -> bool {
    let diff = f_tmp.max(f_out) - f_tmp.min(f_out);
    diff * 1000 / f_out <= TOLERANCE_PER_MILLE
}

/// Find one divider setting for the requested output frequency.
///
/// OD select is searched in table order, then R from the smallest, and the
/// first setting within tolerance is returned. This is not the closest
/// setting; a later (OD, R) pair may be more accurate.
pub fn find_dividers(ref_in: &RefIn, out_khz: u32, vco: VcoRange) -> Result<Dividers, Error> {
    if out_khz == 0 {
        return Err(Error::InvalidOutputFrequency);
    }

    let input_freq = ref_in.hz() as u64;
    let out_freq = out_khz as u64;

    for od_select in 0 .. NUM_OD_SETTING {
        let od = output_divider(od_select);
        if !vco.contains(od, out_khz) {
            continue;
        }

        for r in MIN_RDW ..= MAX_RDW {
            // V from the same relation the chip uses, rounded down.
            // Overflowing V is clamped and still checked below.
            let v = (out_freq * 1000 * od as u64 * r as u64 / (input_freq * 2))
                .min(MAX_VDW as u64);
            if v < MIN_VDW as u64 {
                continue;
            }

            let candidate = Dividers { r, v: v as u32, od_select };
            if within_tolerance(candidate.f_out_khz(ref_in), out_freq) {
                return Ok(candidate);
            }
        }
    }

    Err(Error::NoSolution)
}


impl ControlWord {

    /// Control word for the given dividers, mode bits from `cfg`.
    pub fn from_dividers(d: &Dividers, cfg: &Ics307Config) -> Self {
        cfg.mode_bits()
            .set(Rdw((d.r - RDW_OFFSET) as u8))
            .set(Vdw((d.v - VDW_OFFSET) as u16))
            .set(OdSelect(d.od_select as u8))
    }

    /// Control word producing `out_khz` from the reference clock.
    pub fn newf(ref_in: &RefIn, out_khz: u32, cfg: &Ics307Config) -> Result<Self, Error> {
        let d = find_dividers(ref_in, out_khz, cfg.vco)?;

        debug!(
            "ICS307-02: RDW: {}, VDW: {}, OD: {}",
            d.r - RDW_OFFSET,
            d.v - VDW_OFFSET,
            d.od()
        );

        Ok(ControlWord::from_dividers(&d, cfg))
    }

    /// Output frequency this word programs, Hz
    pub fn f_out_hz(self: &Self, ref_in: &RefIn) -> u64 {
        self.to_bytes().f_out_hz(ref_in)
    }
}


impl ControlBytes {

    /// Frequency generated by the chip for these control bytes, Hz.
    ///
    /// CLK1 Freq = Input Frequency * 2 * (VDW + 8) / ((RDW + 2) * OD)
    pub fn f_out_hz(self: &Self, ref_in: &RefIn) -> u64 {
        let vdw = self.vdw() as u64;
        let rdw = self.rdw() as u64;
        let od = output_divider(self.od_select()) as u64;

        let freq = ref_in.hz() as u64 * 2 * (vdw + VDW_OFFSET as u64)
            / ((rdw + RDW_OFFSET as u64) * od);

        debug!(
            "ICS307: CW[0-2]: {:02X} {:02X} {:02X} => {} Hz",
            self.cw0, self.cw1, self.cw2, freq
        );
        freq
    }
}
