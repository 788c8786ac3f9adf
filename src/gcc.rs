//! Qualcomm Global Clock Controller building blocks
//!
//! Root clock generators (RCG) with M/N/D dividers, branch gates,
//! PLL votes, block resets and GDSC power switches. SoC drivers hold
//! the register tables and use these to replay them.

use bitflags::bitflags;
use embedded_hal::blocking::delay::DelayUs;
use log::{debug, warn};

use crate::{ errors::*, mmio::* };


/// RCG source select, already shifted into CFG bits 8..=10.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct ClkSrc(pub u32);

impl ClkSrc {
    pub const CXO: ClkSrc = ClkSrc(0 << 8);
    pub const GPLL0: ClkSrc = ClkSrc(1 << 8);
    pub const GPLL0_AUX2: ClkSrc = ClkSrc(2 << 8);
    pub const GPLL9: ClkSrc = ClkSrc(2 << 8);
    pub const GPLL0_ODD: ClkSrc = ClkSrc(3 << 8);
    pub const GPLL7: ClkSrc = ClkSrc(3 << 8);
    pub const GPLL6: ClkSrc = ClkSrc(4 << 8);
    pub const GPLL4: ClkSrc = ClkSrc(5 << 8);
    pub const GPLL0_EVEN: ClkSrc = ClkSrc(6 << 8);
}


/// One supported rate of an RCG.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct FreqTbl {
    /// Output rate, Hz
    pub freq: u32,
    pub src: ClkSrc,
    /// Half-integer pre-divider, encoded as 2 * div - 1
    pub pre_div: u8,
    pub m: u16,
    pub n: u16,
}

/// Frequency table entry, `h` is the pre-divider and may be a half
/// value such as 2.5.
#[macro_export]
macro_rules! freq_tbl {
    ($f:expr, $s:expr, $h:expr, $m:expr, $n:expr) => {
        $crate::gcc::FreqTbl {
            freq: $f,
            src: $s,
            pre_div: (2.0 * ($h as f32) - 1.0) as u8,
            m: $m,
            n: $n,
        }
    };
}

/// First entry at or above `rate`, or the fastest one if `rate` is
/// above the whole table. `None` only for an empty table.
pub fn find_freq(table: &[FreqTbl], rate: u32) -> Option<&FreqTbl> {
    table
        .iter()
        .find(|f| rate <= f.freq)
        .or_else(|| table.last())
}


/// RCG register offsets from CMD_RCGR
const RCG_CFG_REG: usize = 0x4;
const RCG_M_REG: usize = 0x8;
const RCG_N_REG: usize = 0xc;
const RCG_D_REG: usize = 0x10;

/// CMD_RCGR update request, cleared by hardware
const CMD_UPDATE: u32 = 1 << 0;

/// How long an RCG may take to latch a new configuration
pub const RCG_UPDATE_TIMEOUT_US: u32 = 10_000;

bitflags! {
    /// RCG CFG register fields
    pub struct RcgCfg: u32 {
        const SRC_DIV_MASK = 0x1f;
        const SRC_SEL_MASK = 0x7 << 8;
        const MODE_MASK = 0x3 << 12;
        const MODE_DUAL_EDGE = 0x2 << 12;
        const HW_CLK_CTRL_MASK = 1 << 20;
    }
}

/// Ask the RCG to switch to the programmed configuration and wait
/// for it to do so.
pub fn rcg_update<M, D>(bus: &mut M, delay: &mut D, cmd_rcgr: usize) -> Result<(), Error>
where M: Mmio,
      D: DelayUs<u32>,
{
    bus.setbits32(cmd_rcgr, CMD_UPDATE);
    wait_clear32(bus, delay, cmd_rcgr, CMD_UPDATE, RCG_UPDATE_TIMEOUT_US)
        .map(|_| ())
        .map_err(|e| {
            warn!("RCG @ {:#x} [{:#010x}] stuck at off", cmd_rcgr, bus.read32(cmd_rcgr));
            e
        })
}

/// Program source, pre-divider and M/N/D of an RCG.
///
/// `cmd_rcgr` is the absolute CMD_RCGR address, `mnd_width` the width
/// of the M, N and D registers.
pub fn rcg_set_rate_mnd<M, D>(
    bus: &mut M,
    delay: &mut D,
    cmd_rcgr: usize,
    f: &FreqTbl,
    mnd_width: u8,
) -> Result<(), Error>
where M: Mmio,
      D: DelayUs<u32>,
{
    let m = f.m as u32;
    let n = f.n as u32;
    let n_minus_m = n.wrapping_sub(m);

    // N register holds NOT(N - M), D holds NOT(2D) with D clamped to [M, N - M]
    let m_val = m;
    let n_val = if n != 0 { !n_minus_m } else { 0 };
    let d_val = !n.max(m).min(n_minus_m);
    let mask = (1u32 << mnd_width) - 1;

    debug!("m {:#x} n {:#x} d {:#x} div {:#x} mask {:#x}", m_val, n_val, d_val, f.pre_div, mask);

    bus.write32(cmd_rcgr + RCG_M_REG, m_val & mask);
    bus.write32(cmd_rcgr + RCG_N_REG, n_val & mask);
    bus.write32(cmd_rcgr + RCG_D_REG, d_val & mask);

    let raw = bus.read32(cmd_rcgr + RCG_CFG_REG);
    let mut cfg = RcgCfg::from_bits_truncate(raw);
    cfg.remove(RcgCfg::SRC_SEL_MASK | RcgCfg::MODE_MASK | RcgCfg::HW_CLK_CTRL_MASK | RcgCfg::SRC_DIV_MASK);
    cfg.insert(RcgCfg::from_bits_truncate(f.src.0) & RcgCfg::SRC_SEL_MASK);
    if f.pre_div != 0 {
        cfg.insert(RcgCfg::from_bits_truncate(f.pre_div as u32) & RcgCfg::SRC_DIV_MASK);
    }
    if n != 0 && n != m {
        cfg.insert(RcgCfg::MODE_DUAL_EDGE);
    }

    // Bits outside the known fields are kept as they were
    let keep = raw & !RcgCfg::all().bits();
    bus.write32(cmd_rcgr + RCG_CFG_REG, keep | cfg.bits());

    rcg_update(bus, delay, cmd_rcgr)
}


/// How long a voted PLL may take to report lock
pub const PLL_LOCK_TIMEOUT_US: u32 = 10_000;

/// PLL shared with other bus masters, enabled through a vote register.
#[derive(Debug,Copy,Clone)]
pub struct PllVote {
    pub status: usize,
    pub status_bit: u32,
    pub ena_vote: usize,
    pub vote_bit: u32,
}

impl PllVote {
    /// Vote for the PLL and wait for it to lock, nothing to do if it
    /// is already running.
    pub fn enable<M, D>(self: &Self, bus: &mut M, delay: &mut D, base: usize) -> Result<(), Error>
    where M: Mmio,
          D: DelayUs<u32>,
    {
        if bus.read32(base + self.status) & self.status_bit != 0 {
            return Ok(());
        }

        bus.setbits32(base + self.ena_vote, self.vote_bit);
        wait_set32(bus, delay, base + self.status, self.status_bit, PLL_LOCK_TIMEOUT_US)
            .map(|_| ())
    }
}


/// Branch clock gate
#[derive(Debug,Copy,Clone)]
pub struct GateClk {
    pub name: &'static str,
    pub reg: usize,
    pub en_val: u32,
}

impl GateClk {
    /// Open the gate, other bits of the branch register are preserved
    pub fn enable<M: Mmio>(self: &Self, bus: &mut M, base: usize) {
        let val = bus.read32(base + self.reg);
        bus.write32(base + self.reg, val | self.en_val);
    }
}


/// Block control register of a hardware block reset
#[derive(Debug,Copy,Clone)]
pub struct ResetMap {
    pub reg: usize,
    pub bit: u8,
}

impl ResetMap {
    pub const fn new(reg: usize) -> Self {
        ResetMap { reg, bit: 0 }
    }

    /// Put the block into (`assert = true`) or take it out of reset
    pub fn set<M: Mmio>(self: &Self, bus: &mut M, base: usize, assert: bool) {
        let mut value = bus.read32(base + self.reg);
        if assert {
            value |= 1 << self.bit;
        } else {
            value &= !(1 << self.bit);
        }
        bus.write32(base + self.reg, value);
    }
}


/// GDSC status poll limit
pub const GDSC_STATUS_POLL_TIMEOUT_US: u32 = 1500;

/// GDSCR CFG register, next to the GDSCR
const CFG_GDSCR_OFFSET: usize = 0x4;

bitflags! {
    /// GDSC control and CFG status bits
    pub struct Gdsc: u32 {
        const SW_COLLAPSE = 1 << 0;
        const POWER_DOWN_COMPLETE = 1 << 15;
        const POWER_UP_COMPLETE = 1 << 16;
    }
}

/// Globally distributed switch controller (power domain)
#[derive(Debug,Copy,Clone)]
pub struct PowerMap {
    pub reg: usize,
}

impl PowerMap {
    /// Switch the domain on or off and wait for the transition.
    pub fn set<M, D>(self: &Self, bus: &mut M, delay: &mut D, base: usize, on: bool) -> Result<(), Error>
    where M: Mmio,
          D: DelayUs<u32>,
    {
        let gdscr = base + self.reg;
        let mut value = bus.read32(gdscr);
        if on {
            value &= !Gdsc::SW_COLLAPSE.bits();
        } else {
            value |= Gdsc::SW_COLLAPSE.bits();
        }
        bus.write32(gdscr, value);

        let done = if on { Gdsc::POWER_UP_COMPLETE } else { Gdsc::POWER_DOWN_COMPLETE };
        wait_set32(bus, delay, gdscr + CFG_GDSCR_OFFSET, done.bits(), GDSC_STATUS_POLL_TIMEOUT_US)
            .map(|_| ())
            .map_err(|e| {
                warn!("GDSC @ {:#x} is stuck during power {}", gdscr, if on { "on" } else { "off" });
                e
            })
    }
}
