//! Constants

/// Reference Divider Word offset, RDW field holds R - 2
pub const RDW_OFFSET: u32 = 2;

/// VCO Divider Word offset, VDW field holds V - 8
pub const VDW_OFFSET: u32 = 8;

/// Smallest effective reference divider (RDW = 1)
pub const MIN_RDW: u32 = 1 + RDW_OFFSET;

/// Largest effective reference divider (RDW = 127)
pub const MAX_RDW: u32 = 127 + RDW_OFFSET;

/// Smallest effective VCO divider (VDW = 4)
pub const MIN_VDW: u32 = 4 + VDW_OFFSET;

/// Largest effective VCO divider (VDW = 511)
pub const MAX_VDW: u32 = 511 + VDW_OFFSET;

/// Number of output divider settings, S2:S0
pub const NUM_OD_SETTING: usize = 8;

/// Decode S[0-2] to Output Divider (OD).
/// Table order is the search order of the solver, do not sort it.
pub const OUTPUT_DIVIDERS: [u32; NUM_OD_SETTING] = [10, 2, 8, 4, 5, 7, 3, 6];

/// VCO lower bound, kHz, industrial temperature range part
pub const VCO_KHZ_MIN_INDUSTRIAL: u32 = 60_000;

/// VCO upper bound, kHz, industrial temperature range part
pub const VCO_KHZ_MAX_INDUSTRIAL: u32 = 360_000;

/// VCO lower bound, kHz, commercial temperature range part
pub const VCO_KHZ_MIN_COMMERCIAL: u32 = 55_000;

/// VCO upper bound, kHz, commercial temperature range part
pub const VCO_KHZ_MAX_COMMERCIAL: u32 = 400_000;

/// Solution is accepted when |f_tmp - f_out| * 1000 / f_out,
/// truncated, does not exceed this.
pub const TOLERANCE_PER_MILLE: u64 = 1;
