//! QCM2290 global clock controller

use embedded_hal::blocking::delay::DelayUs;
use log::{debug, warn};

use crate::{ errors::*, freq_tbl, gcc::*, mmio::Mmio };


const QUPV3_WRAP0_S4_CMD_RCGR: usize = 0x1f608;
const SDCC2_APPS_CLK_CMD_RCGR: usize = 0x1e00c;

/// SDCC1 apps clock is set up by the firmware and left alone
pub const SDCC1_APPS_CLK_HZ: u32 = 384_000_000;

static FTBL_GCC_QUPV3_WRAP0_S0_CLK_SRC: [FreqTbl; 16] = [
    freq_tbl!(7_372_800, ClkSrc::GPLL0_AUX2, 1, 384, 15625),
    freq_tbl!(14_745_600, ClkSrc::GPLL0_AUX2, 1, 768, 15625),
    freq_tbl!(19_200_000, ClkSrc::CXO, 1, 0, 0),
    freq_tbl!(29_491_200, ClkSrc::GPLL0_AUX2, 1, 1536, 15625),
    freq_tbl!(32_000_000, ClkSrc::GPLL0_AUX2, 1, 8, 75),
    freq_tbl!(48_000_000, ClkSrc::GPLL0_AUX2, 1, 4, 25),
    freq_tbl!(64_000_000, ClkSrc::GPLL0_AUX2, 1, 16, 75),
    freq_tbl!(75_000_000, ClkSrc::GPLL0_AUX2, 4, 0, 0),
    freq_tbl!(80_000_000, ClkSrc::GPLL0_AUX2, 1, 4, 15),
    freq_tbl!(96_000_000, ClkSrc::GPLL0_AUX2, 1, 8, 25),
    freq_tbl!(100_000_000, ClkSrc::GPLL0_AUX2, 3, 0, 0),
    freq_tbl!(102_400_000, ClkSrc::GPLL0_AUX2, 1, 128, 375),
    freq_tbl!(112_000_000, ClkSrc::GPLL0_AUX2, 1, 28, 75),
    freq_tbl!(117_964_800, ClkSrc::GPLL0_AUX2, 1, 6144, 15625),
    freq_tbl!(120_000_000, ClkSrc::GPLL0_AUX2, 2.5, 0, 0),
    freq_tbl!(128_000_000, ClkSrc::GPLL6, 3, 0, 0),
];

static FTBL_GCC_SDCC2_APPS_CLK_SRC: [FreqTbl; 6] = [
    freq_tbl!(400_000, ClkSrc::CXO, 12, 1, 4),
    freq_tbl!(19_200_000, ClkSrc::CXO, 1, 0, 0),
    freq_tbl!(25_000_000, ClkSrc::GPLL0_AUX2, 12, 0, 0),
    freq_tbl!(50_000_000, ClkSrc::GPLL0_AUX2, 6, 0, 0),
    freq_tbl!(100_000_000, ClkSrc::GPLL0_AUX2, 3, 0, 0),
    // 6.5, 1, 4 would be exact
    freq_tbl!(202_000_000, ClkSrc::GPLL7, 4, 0, 0),
];

const GPLL7_CLK: PllVote = PllVote {
    status: 0x7000,
    status_bit: 1 << 31,
    ena_vote: 0x79000,
    vote_bit: 1 << 7,
};


/// Branch clocks, `GATE_CLKS` is indexed by these.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum GccClock {
    Ahb2PhyUsb,
    CfgNocUsb3PrimAxi,
    Qupv3Wrap0Core2x,
    Qupv3Wrap0Core,
    Qupv3Wrap0S0,
    Qupv3Wrap0S1,
    Qupv3Wrap0S2,
    Qupv3Wrap0S3,
    Qupv3Wrap0S4,
    Qupv3Wrap0S5,
    Qupv3Wrap0MAhb,
    Qupv3Wrap0SAhb,
    Sdcc1Ahb,
    Sdcc1Apps,
    Sdcc1IceCore,
    Sdcc2Ahb,
    Sdcc2Apps,
    SysNocCpussAhb,
    SysNocUsb3PrimAxi,
    Usb30PrimMaster,
    Usb30PrimMockUtmi,
    Usb30PrimSleep,
    Usb3PrimClkref,
    Usb3PrimPhyComAux,
    Usb3PrimPhyPipe,
}

macro_rules! gate_clk {
    ($name:expr, $reg:expr, $en:expr) => {
        GateClk { name: $name, reg: $reg, en_val: $en }
    };
}

pub static GATE_CLKS: [GateClk; 25] = [
    gate_clk!("gcc_ahb2phy_usb_clk", 0x1d008, 0x00000001),
    gate_clk!("gcc_cfg_noc_usb3_prim_axi_clk", 0x1a084, 0x00000001),
    gate_clk!("gcc_qupv3_wrap0_core_2x_clk", 0x7900c, 0x00000200),
    gate_clk!("gcc_qupv3_wrap0_core_clk", 0x7900c, 0x00000100),
    gate_clk!("gcc_qupv3_wrap0_s0_clk", 0x7900c, 0x00000400),
    gate_clk!("gcc_qupv3_wrap0_s1_clk", 0x7900c, 0x00000800),
    gate_clk!("gcc_qupv3_wrap0_s2_clk", 0x7900c, 0x00001000),
    gate_clk!("gcc_qupv3_wrap0_s3_clk", 0x7900c, 0x00002000),
    gate_clk!("gcc_qupv3_wrap0_s4_clk", 0x7900c, 0x00004000),
    gate_clk!("gcc_qupv3_wrap0_s5_clk", 0x7900c, 0x00008000),
    gate_clk!("gcc_qupv3_wrap_0_m_ahb_clk", 0x7900c, 0x00000040),
    gate_clk!("gcc_qupv3_wrap_0_s_ahb_clk", 0x7900c, 0x00000080),
    gate_clk!("gcc_sdcc1_ahb_clk", 0x38008, 0x00000001),
    gate_clk!("gcc_sdcc1_apps_clk", 0x38004, 0x00000001),
    gate_clk!("gcc_sdcc1_ice_core_clk", 0x3800c, 0x00000001),
    gate_clk!("gcc_sdcc2_ahb_clk", 0x1e008, 0x00000001),
    gate_clk!("gcc_sdcc2_apps_clk", 0x1e004, 0x00000001),
    gate_clk!("gcc_sys_noc_cpuss_ahb_clk", 0x79004, 0x00000001),
    gate_clk!("gcc_sys_noc_usb3_prim_axi_clk", 0x1a080, 0x00000001),
    gate_clk!("gcc_usb30_prim_master_clk", 0x1a010, 0x00000001),
    gate_clk!("gcc_usb30_prim_mock_utmi_clk", 0x1a018, 0x00000001),
    gate_clk!("gcc_usb30_prim_sleep_clk", 0x1a014, 0x00000001),
    gate_clk!("gcc_usb3_prim_clkref_clk", 0x9f000, 0x00000001),
    gate_clk!("gcc_usb3_prim_phy_com_aux_clk", 0x1a054, 0x00000001),
    gate_clk!("gcc_usb3_prim_phy_pipe_clk", 0x1a058, 0x00000001),
];

impl GccClock {
    #[inline]
    pub fn gate(self: Self) -> &'static GateClk {
        &GATE_CLKS[self as usize]
    }
}


/// Block resets
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum GccReset {
    CamssOpe,
    CamssTfe,
    CamssTop,
    Gpu,
    Mmss,
    Pdm,
    Qupv3Wrapper0,
    Qusb2PhyPrim,
    Sdcc1,
    Sdcc2,
    Usb30Prim,
    Usb3PhyPrimSp0,
    Usb3PhyPhyPrimSp0,
    UsbPhyCfgAhb2Phy,
    Vcodec0,
    Venus,
    VideoInterface,
}

static RESETS: [ResetMap; 17] = [
    ResetMap::new(0x55000),
    ResetMap::new(0x52000),
    ResetMap::new(0x58000),
    ResetMap::new(0x36000),
    ResetMap::new(0x17000),
    ResetMap::new(0x20000),
    ResetMap::new(0x1f000),
    ResetMap::new(0x1c000),
    ResetMap::new(0x38000),
    ResetMap::new(0x1e000),
    ResetMap::new(0x1a000),
    ResetMap::new(0x1b000),
    ResetMap::new(0x1b008),
    ResetMap::new(0x1d000),
    ResetMap::new(0x58094),
    ResetMap::new(0x58078),
    ResetMap::new(0x6e000),
];


/// Power domains
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum GccPower {
    Usb30PrimGdsc,
}

static GDSCS: [PowerMap; 1] = [
    PowerMap { reg: 0x1a004 },
];


/// QCM2290 GCC instance
pub struct Qcm2290Gcc<M> {
    bus: M,
    base: usize,
}

impl<M> Qcm2290Gcc<M>
where M: Mmio,
{
    /// `base` - GCC register block address
    pub fn new(bus: M, base: usize) -> Self {
        Qcm2290Gcc { bus, base }
    }

    /// Release the bus
    pub fn free(self: Self) -> M {
        self.bus
    }

    /// Set the rate of an RCG fed clock.
    /// Returns the rate actually selected from the frequency table.
    pub fn set_rate<D>(self: &mut Self, delay: &mut D, clk: GccClock, rate: u32) -> Result<u32, Error>
    where D: DelayUs<u32>,
    {
        debug!("qcm2290_set_rate: clk {} rate {}", clk.gate().name, rate);

        match clk {
            // UART2
            GccClock::Qupv3Wrap0S4 => {
                let freq = find_freq(&FTBL_GCC_QUPV3_WRAP0_S0_CLK_SRC, rate)
                    .ok_or(Error::UnsupportedClock)?;
                rcg_set_rate_mnd(&mut self.bus, delay, self.base + QUPV3_WRAP0_S4_CMD_RCGR, freq, 16)?;
                Ok(freq.freq)
            }
            GccClock::Sdcc2Apps => {
                // GPLL7 must run before SDCC2_APPS_CLK_SRC can point at it
                GPLL7_CLK.enable(&mut self.bus, delay, self.base)?;
                let freq = find_freq(&FTBL_GCC_SDCC2_APPS_CLK_SRC, rate)
                    .ok_or(Error::UnsupportedClock)?;
                if freq.src != ClkSrc::GPLL7 {
                    warn!("SDCC2_APPS_CLK_SRC not set to GPLL7, requested rate {}", rate);
                }
                rcg_set_rate_mnd(&mut self.bus, delay, self.base + SDCC2_APPS_CLK_CMD_RCGR, freq, 8)?;
                Ok(freq.freq)
            }
            GccClock::Sdcc1Apps => Ok(SDCC1_APPS_CLK_HZ),
            _ => Err(Error::UnsupportedClock),
        }
    }

    /// Ungate a branch clock, together with the clocks it depends on.
    pub fn enable(self: &mut Self, clk: GccClock) {
        debug!("qcm2290_enable: clk {}", clk.gate().name);

        if clk == GccClock::Usb30PrimMaster {
            self.gate_enable(GccClock::Usb3PrimPhyComAux);
            self.gate_enable(GccClock::Usb3PrimClkref);
        }

        self.gate_enable(clk);
    }

    fn gate_enable(self: &mut Self, clk: GccClock) {
        clk.gate().enable(&mut self.bus, self.base);
    }

    pub fn reset_assert(self: &mut Self, rst: GccReset) {
        RESETS[rst as usize].set(&mut self.bus, self.base, true);
    }

    pub fn reset_deassert(self: &mut Self, rst: GccReset) {
        RESETS[rst as usize].set(&mut self.bus, self.base, false);
    }

    pub fn power_on<D>(self: &mut Self, delay: &mut D, pd: GccPower) -> Result<(), Error>
    where D: DelayUs<u32>,
    {
        GDSCS[pd as usize].set(&mut self.bus, delay, self.base, true)
    }

    pub fn power_off<D>(self: &mut Self, delay: &mut D, pd: GccPower) -> Result<(), Error>
    where D: DelayUs<u32>,
    {
        GDSCS[pd as usize].set(&mut self.bus, delay, self.base, false)
    }
}
