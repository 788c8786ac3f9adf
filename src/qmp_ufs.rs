//! Qualcomm QMP UFS PHY
//!
//! The PHY is brought up by replaying vendor register tables into the
//! SerDes (common PLL), per-lane TX/RX and PCS blocks, then starting the
//! SerDes and waiting for the PCS to report ready.

use bitflags::bitflags;
use embedded_hal::blocking::delay::DelayUs;
use log::{debug, error};

use crate::{ errors::*, mmio::* };


/// QPHY_SW_RESET
pub const SW_RESET: u32 = 1 << 0;
/// QPHY_POWER_DOWN_CONTROL, active low
pub const SW_PWRDN: u32 = 1 << 0;
/// QPHY_PCS_READY_STATUS
pub const PCS_READY: u32 = 1 << 0;

bitflags! {
    /// QPHY_START_CONTROL
    pub struct StartCtrl: u32 {
        const SERDES_START = 1 << 0;
        const PCS_START = 1 << 1;
    }
}

/// PCS ready poll limit
pub const PHY_INIT_COMPLETE_TIMEOUT_US: u32 = 200 * 10_000;

/// Reset line hold and release times
const RESET_ASSERT_US: u32 = 10;
const RESET_DEASSERT_US: u32 = 50;


/// One register write of an init sequence.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct InitTbl {
    pub offset: u16,
    pub val: u32,
    /// Lanes this entry applies to, lane 1 is bit 0
    pub lane_mask: u8,
}

impl InitTbl {
    /// Entry for every lane
    pub const fn cfg(offset: u16, val: u32) -> Self {
        InitTbl { offset, val, lane_mask: 0xff }
    }

    /// Entry for the lanes in `lane_mask` only
    pub const fn cfg_lane(offset: u16, val: u32, lane_mask: u8) -> Self {
        InitTbl { offset, val, lane_mask }
    }
}

/// Init sequences for the PHY blocks
#[derive(Debug,Copy,Clone)]
pub struct CfgTbls {
    pub serdes: &'static [InitTbl],
    pub tx: &'static [InitTbl],
    pub rx: &'static [InitTbl],
    pub pcs: &'static [InitTbl],
}

impl CfgTbls {
    pub const EMPTY: CfgTbls = CfgTbls { serdes: &[], tx: &[], rx: &[], pcs: &[] };
}

/// Block offsets from the PHY base
#[derive(Debug,Copy,Clone)]
pub struct Offsets {
    pub serdes: u16,
    pub pcs: u16,
    pub tx: u16,
    pub rx: u16,
    /// for PHYs with 2 lanes
    pub tx2: u16,
    pub rx2: u16,
}

/// Block layout of v3 and v4 PHYs
pub static QMP_UFS_OFFSETS: Offsets = Offsets {
    serdes: 0x0,
    pcs: 0xc00,
    tx: 0x400,
    rx: 0x600,
    tx2: 0x800,
    rx2: 0xa00,
};

/// Block layout of v6 PHYs
pub static QMP_UFS_OFFSETS_V6: Offsets = Offsets {
    serdes: 0x0,
    pcs: 0x400,
    tx: 0x1000,
    rx: 0x1200,
    tx2: 0x1800,
    rx2: 0x1a00,
};

/// PCS registers that move between PHY generations, offsets from the PCS block
#[derive(Debug,Copy,Clone)]
pub struct RegsLayout {
    /// `None` when the PCS has no software reset and external resets
    /// are pulsed instead
    pub sw_reset: Option<u16>,
    pub start_ctrl: u16,
    pub pcs_ready_status: u16,
    pub power_down_control: u16,
}

/// Per-PHY initialization config
#[derive(Debug,Copy,Clone)]
pub struct QmpUfsCfg {
    pub lanes: u8,
    pub offsets: &'static Offsets,
    /// Main init sequence
    pub tbls: CfgTbls,
    /// Additional sequence for HS series B
    pub tbls_hs_b: CfgTbls,
    /// Additional sequence for HS G4
    pub tbls_hs_g4: CfgTbls,
    pub regs: &'static RegsLayout,
}

impl QmpUfsCfg {
    #[inline]
    pub fn no_pcs_sw_reset(self: &Self) -> bool {
        self.regs.sw_reset.is_none()
    }
}


/// Reset line acquired from a reset controller
pub trait ResetLine {
    fn assert(&mut self) -> Result<(), Error>;
    fn deassert(&mut self) -> Result<(), Error>;
}


/// Write every entry of `tbl` that applies to `lane_mask`, relative to `base`.
pub fn configure_lane<M: Mmio>(bus: &mut M, base: usize, tbl: &[InitTbl], lane_mask: u8) {
    for t in tbl.iter().filter(|t| t.lane_mask & lane_mask != 0) {
        bus.write32(base + t.offset as usize, t.val);
    }
}

/// Write every entry of `tbl` relative to `base`.
#[inline]
pub fn configure<M: Mmio>(bus: &mut M, base: usize, tbl: &[InitTbl]) {
    configure_lane(bus, base, tbl, 0xff)
}


/// QMP UFS PHY instance
pub struct QmpUfsPhy<M> {
    bus: M,
    base: usize,
    cfg: &'static QmpUfsCfg,
}

impl<M> QmpUfsPhy<M>
where M: Mmio,
{
    /// `base` - PHY register block address
    pub fn new(bus: M, base: usize, cfg: &'static QmpUfsCfg) -> Self {
        QmpUfsPhy { bus, base, cfg }
    }

    /// Release the bus
    pub fn free(self: Self) -> M {
        self.bus
    }

    #[inline]
    fn block(self: &Self, offset: u16) -> usize {
        self.base + offset as usize
    }

    #[inline]
    fn pcs_reg(self: &Self, reg: u16) -> usize {
        self.block(self.cfg.offsets.pcs) + reg as usize
    }

    fn serdes_init(self: &mut Self, tbls: &CfgTbls) {
        let serdes = self.block(self.cfg.offsets.serdes);
        configure(&mut self.bus, serdes, tbls.serdes);
    }

    fn lanes_init(self: &mut Self, tbls: &CfgTbls) {
        let o = self.cfg.offsets;
        let (tx, rx) = (self.block(o.tx), self.block(o.rx));
        configure_lane(&mut self.bus, tx, tbls.tx, 1);
        configure_lane(&mut self.bus, rx, tbls.rx, 1);

        if self.cfg.lanes >= 2 {
            let (tx2, rx2) = (self.block(o.tx2), self.block(o.rx2));
            configure_lane(&mut self.bus, tx2, tbls.tx, 2);
            configure_lane(&mut self.bus, rx2, tbls.rx, 2);
        }
    }

    fn pcs_init(self: &mut Self, tbls: &CfgTbls) {
        let pcs = self.block(self.cfg.offsets.pcs);
        configure(&mut self.bus, pcs, tbls.pcs);
    }

    /// Replay the init tables for HS series B, HS G3.
    pub fn init_registers(self: &mut Self) {
        let cfg = self.cfg;
        self.serdes_init(&cfg.tbls);
        self.serdes_init(&cfg.tbls_hs_b);
        self.serdes_init(&cfg.tbls_hs_g4);
        self.lanes_init(&cfg.tbls);
        self.pcs_init(&cfg.tbls);
    }

    fn do_reset<D, R>(self: &mut Self, delay: &mut D, resets: &mut [R]) -> Result<(), Error>
    where D: DelayUs<u32>,
          R: ResetLine,
    {
        for r in resets.iter_mut() {
            r.assert()?;
        }
        delay.delay_us(RESET_ASSERT_US);

        for r in resets.iter_mut() {
            r.deassert()?;
        }
        delay.delay_us(RESET_DEASSERT_US);

        Ok(())
    }

    /// Power up and initialize the PHY, blocks until the PCS is ready.
    ///
    /// `resets` are only used by PHYs without a PCS software reset.
    pub fn power_on<D, R>(self: &mut Self, delay: &mut D, resets: &mut [R]) -> Result<(), Error>
    where D: DelayUs<u32>,
          R: ResetLine,
    {
        let regs = self.cfg.regs;

        // Power down PHY
        let pwrdn = self.pcs_reg(regs.power_down_control);
        self.bus.setbits32(pwrdn, SW_PWRDN);

        self.init_registers();

        match regs.sw_reset {
            None => self.do_reset(delay, resets).map_err(|e| {
                error!("qmp reset failed");
                e
            })?,
            // Pull PHY out of reset state
            Some(sw_reset) => {
                let sw_reset = self.pcs_reg(sw_reset);
                self.bus.clrbits32(sw_reset, SW_RESET);
            }
        }

        let start = self.pcs_reg(regs.start_ctrl);
        self.bus.setbits32(start, StartCtrl::SERDES_START.bits());

        let status = self.pcs_reg(regs.pcs_ready_status);
        wait_set32(&mut self.bus, delay, status, PCS_READY, PHY_INIT_COMPLETE_TIMEOUT_US)
            .map_err(|e| {
                error!("phy initialization timed-out");
                e
            })?;

        debug!("qmp ufs phy @ {:#x} ready", self.base);
        Ok(())
    }

    /// Reset, stop and power down the PHY.
    pub fn power_off(self: &mut Self) {
        let regs = self.cfg.regs;

        if let Some(sw_reset) = regs.sw_reset {
            let sw_reset = self.pcs_reg(sw_reset);
            self.bus.setbits32(sw_reset, SW_RESET);
        }

        // stop SerDes and Phy-Coding-Sublayer
        let start = self.pcs_reg(regs.start_ctrl);
        self.bus.clrbits32(start, (StartCtrl::SERDES_START | StartCtrl::PCS_START).bits());

        // Put PHY into POWER DOWN state: active low
        let pwrdn = self.pcs_reg(regs.power_down_control);
        self.bus.clrbits32(pwrdn, SW_PWRDN);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::mmio::fake::*;
    use crate::qmp_ufs_v3::*;
    use crate::qmp_ufs_v4::*;
    use crate::qmp_ufs_v6::*;

    const BASE: usize = 0x1d8_7000;

    #[derive(Default)]
    struct Line {
        asserted: u32,
        deasserted: u32,
        fail: bool,
    }

    impl ResetLine for Line {
        fn assert(&mut self) -> Result<(), Error> {
            if self.fail {
                return Err(Error::Reset);
            }
            self.asserted += 1;
            Ok(())
        }

        fn deassert(&mut self) -> Result<(), Error> {
            self.deasserted += 1;
            Ok(())
        }
    }

    static LANE_TX: [InitTbl; 3] = [
        InitTbl::cfg(0x08c, 0x06),
        InitTbl::cfg_lane(0x044, 0x04, 1),
        InitTbl::cfg_lane(0x048, 0x07, 2),
    ];

    fn pcs(cfg: &QmpUfsCfg) -> usize {
        BASE + cfg.offsets.pcs as usize
    }

    /// PCS goes ready once the SerDes is started
    fn phy_bus(cfg: &'static QmpUfsCfg) -> FakeMmio {
        let start = pcs(cfg) + cfg.regs.start_ctrl as usize;
        let ready = pcs(cfg) + cfg.regs.pcs_ready_status as usize;
        FakeMmio::new().hook(move |addr, val, regs| {
            if addr == start && val & StartCtrl::SERDES_START.bits() != 0 {
                regs.insert(ready, PCS_READY);
            }
        })
    }

    #[test]
    fn lane_masks_select_writes() {
        let mut bus = FakeMmio::new();
        configure_lane(&mut bus, 0x400, &LANE_TX, 1);
        configure_lane(&mut bus, 0x800, &LANE_TX, 2);
        assert_eq!(
            bus.writes32(),
            vec![(0x48c, 0x06), (0x444, 0x04), (0x88c, 0x06), (0x848, 0x07)]
        );
    }

    #[test]
    fn sdm845_init_sequence_order() {
        let mut phy = QmpUfsPhy::new(FakeMmio::new(), BASE, &SDM845_UFSPHY_CFG);
        phy.init_registers();
        let writes = phy.free().writes32();

        let n_serdes = SDM845_UFSPHY_SERDES.len() + SDM845_UFSPHY_HS_B_SERDES.len();
        let n_lane = SDM845_UFSPHY_TX.len() + SDM845_UFSPHY_RX.len();
        assert_eq!(writes.len(), n_serdes + 2 * n_lane + SDM845_UFSPHY_PCS.len());

        // HS-B VCO_TUNE_MAP overrides the main table value
        assert_eq!(writes[n_serdes - 1], (BASE + QSERDES_V3_COM_VCO_TUNE_MAP as usize, 0x44));
        // lane 1 TX, then RX, then lane 2
        assert_eq!(writes[n_serdes], (BASE + 0x400 + QSERDES_V3_TX_LANE_MODE_1 as usize, 0x06));
        assert_eq!(
            writes[n_serdes + SDM845_UFSPHY_TX.len()],
            (BASE + 0x600 + QSERDES_V3_RX_SIGDET_LVL as usize, 0x24)
        );
        assert_eq!(writes[n_serdes + n_lane], (BASE + 0x800 + QSERDES_V3_TX_LANE_MODE_1 as usize, 0x06));
        // PCS last, starting with the signal detect threshold
        let n_pcs = writes.len() - SDM845_UFSPHY_PCS.len();
        assert_eq!(writes[n_pcs], (BASE + 0xc00 + QPHY_V3_PCS_UFS_RX_SIGDET_CTRL2 as usize, 0x6e));
        assert_eq!(
            *writes.last().unwrap(),
            (BASE + 0xc00 + QPHY_V3_PCS_UFS_MULTI_LANE_CTRL1 as usize, 0x02)
        );
    }

    #[test]
    fn sdm845_power_on_pulses_external_resets() {
        let mut phy = QmpUfsPhy::new(phy_bus(&SDM845_UFSPHY_CFG), BASE, &SDM845_UFSPHY_CFG);
        let mut delay = FakeDelay::default();
        let mut resets = [Line::default()];

        phy.power_on(&mut delay, &mut resets).unwrap();

        assert!(SDM845_UFSPHY_CFG.no_pcs_sw_reset());
        assert_eq!((resets[0].asserted, resets[0].deasserted), (1, 1));
        assert_eq!(delay.calls, vec![10, 50]);

        let bus = phy.free();
        let pcs = BASE + 0xc00;
        assert_eq!(bus.writes32()[0], (pcs + 0x004, 1));
        assert_eq!(bus.reg(pcs), 1);
    }

    #[test]
    fn reset_failure_aborts_power_on() {
        let mut phy = QmpUfsPhy::new(phy_bus(&SDM845_UFSPHY_CFG), BASE, &SDM845_UFSPHY_CFG);
        let mut delay = FakeDelay::default();
        let mut resets = [Line { fail: true, ..Line::default() }];

        assert_eq!(phy.power_on(&mut delay, &mut resets), Err(Error::Reset));
        assert_eq!(phy.free().reg(BASE + 0xc00), 0);
    }

    #[test]
    fn sw_reset_phy_ignores_external_resets() {
        let bus = phy_bus(&SM8250_UFSPHY_CFG).preset(BASE + 0xc00 + 0x008, 1);
        let mut phy = QmpUfsPhy::new(bus, BASE, &SM8250_UFSPHY_CFG);
        let mut delay = FakeDelay::default();
        let mut resets = [Line::default()];

        phy.power_on(&mut delay, &mut resets).unwrap();

        assert_eq!(resets[0].asserted, 0);
        let bus = phy.free();
        assert_eq!(bus.reg(BASE + 0xc00 + 0x008), 0);
        assert_eq!(bus.reg(BASE + 0xc00 + 0x180), PCS_READY);
    }

    #[test]
    fn hs_g4_lane_tables_not_replayed() {
        let mut phy = QmpUfsPhy::new(FakeMmio::new(), BASE, &SM8250_UFSPHY_CFG);
        phy.init_registers();
        let writes = phy.free().writes32();

        let tbls = SM8250_UFSPHY_CFG.tbls;
        let n = tbls.serdes.len() + SM8150_UFSPHY_HS_B_SERDES.len()
            + 2 * (tbls.tx.len() + tbls.rx.len()) + tbls.pcs.len();
        assert_eq!(writes.len(), n);

        // HS-G3 lane mode, not the HS-G4 one
        let lane_mode = BASE + 0x400 + QSERDES_V4_TX_LANE_MODE_1 as usize;
        assert!(writes.contains(&(lane_mode, 0x05)));
        assert!(!writes.contains(&(lane_mode, 0xe5)));
        assert!(!writes.contains(&(BASE + 0xc00 + QPHY_V4_PCS_UFS_BIST_FIXED_PAT_CTRL as usize, 0x0a)));
    }

    #[test]
    fn sc7280_power_on() {
        let mut phy = QmpUfsPhy::new(phy_bus(&SC7280_UFSPHY_CFG), BASE, &SC7280_UFSPHY_CFG);
        let mut delay = FakeDelay::default();
        let mut resets: [Line; 0] = [];

        phy.power_on(&mut delay, &mut resets).unwrap();

        let bus = phy.free();
        let rx2 = BASE + 0xa00;
        assert_eq!(bus.reg(rx2 + QSERDES_V4_RX_DCC_CTRL1 as usize), 0x0c);
        assert_eq!(bus.reg(BASE + 0xc00 + QPHY_V4_PCS_UFS_RX_HSGEAR_CAPABILITY as usize), 0x03);
    }

    #[test]
    fn sm8550_power_on_uses_v6_layout() {
        let pcs = BASE + 0x400;
        let bus = phy_bus(&SM8550_UFSPHY_CFG).preset(pcs + 0x008, 1);
        let mut phy = QmpUfsPhy::new(bus, BASE, &SM8550_UFSPHY_CFG);
        let mut delay = FakeDelay::default();
        let mut resets = [Line::default()];

        phy.power_on(&mut delay, &mut resets).unwrap();

        assert_eq!(resets[0].asserted, 0);
        let bus = phy.free();
        let writes = bus.writes32();
        assert_eq!(writes[0], (pcs + 0x004, 1));
        assert_eq!(writes[1], (BASE + QSERDES_V6_COM_SYSCLK_EN_SEL as usize, 0xd9));
        assert_eq!(bus.reg(BASE + 0x1000 + QSERDES_UFS_V6_TX_LANE_MODE_1 as usize), 0x05);
        assert_eq!(bus.reg(BASE + 0x1a00 + QSERDES_UFS_V6_RX_MODE_RATE3_B8 as usize), 0x02);
        assert_eq!(bus.reg(pcs + QPHY_V6_PCS_UFS_PLL_CNTL as usize), 0x33);
        assert_eq!(bus.reg(pcs + 0x008), 0);
        assert_eq!(bus.reg(pcs), StartCtrl::SERDES_START.bits());
        assert_eq!(bus.reg(pcs + 0x1a8), PCS_READY);
    }

    #[test]
    fn power_on_times_out_without_pcs_ready() {
        let mut phy = QmpUfsPhy::new(FakeMmio::new(), BASE, &SM8250_UFSPHY_CFG);
        let mut delay = FakeDelay::default();
        let mut resets: [Line; 0] = [];

        assert_eq!(phy.power_on(&mut delay, &mut resets), Err(Error::Timeout));
        assert_eq!(delay.total_us, PHY_INIT_COMPLETE_TIMEOUT_US as u64);
    }

    #[test]
    fn power_off_sequence() {
        let pcs = BASE + 0xc00;
        let bus = FakeMmio::new()
            .preset(pcs, 0b11)
            .preset(pcs + 0x004, 1);
        let mut phy = QmpUfsPhy::new(bus, BASE, &SM8250_UFSPHY_CFG);
        phy.power_off();

        let bus = phy.free();
        assert_eq!(bus.writes32(), vec![(pcs + 0x008, 1), (pcs, 0), (pcs + 0x004, 0)]);
    }

    #[test]
    fn power_off_clears_only_start_bits() {
        assert_eq!((StartCtrl::SERDES_START | StartCtrl::PCS_START).bits(), 0b11);

        let pcs = BASE + 0xc00;
        let bus = FakeMmio::new()
            .preset(pcs, 0xf0 | 0b11)
            .preset(pcs + 0x004, 0x10 | SW_PWRDN);
        let mut phy = QmpUfsPhy::new(bus, BASE, &SDM845_UFSPHY_CFG);
        phy.power_off();

        let bus = phy.free();
        assert_eq!(bus.reg(pcs), 0xf0);
        assert_eq!(bus.reg(pcs + 0x004), 0x10);
    }

    #[test]
    fn power_off_without_sw_reset() {
        let pcs = BASE + 0xc00;
        let bus = FakeMmio::new().preset(pcs, 0b11);
        let mut phy = QmpUfsPhy::new(bus, BASE, &SDM845_UFSPHY_CFG);
        phy.power_off();

        let bus = phy.free();
        assert_eq!(bus.writes32(), vec![(pcs, 0), (pcs + 0x004, 0)]);
    }
}
