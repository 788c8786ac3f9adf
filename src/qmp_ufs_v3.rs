//! QMP v3 UFS PHY registers and the SDM845 init sequence

use crate::qmp_ufs::*;


// QSERDES V3 COM, offsets from the SerDes block
pub const QSERDES_V3_COM_BG_TIMER: u16 = 0x00c;
pub const QSERDES_V3_COM_BIAS_EN_CLKBUFLR_EN: u16 = 0x034;
pub const QSERDES_V3_COM_SYS_CLK_CTRL: u16 = 0x03c;
pub const QSERDES_V3_COM_PLL_IVCO: u16 = 0x048;
pub const QSERDES_V3_COM_CP_CTRL_MODE0: u16 = 0x060;
pub const QSERDES_V3_COM_CP_CTRL_MODE1: u16 = 0x064;
pub const QSERDES_V3_COM_PLL_RCTRL_MODE0: u16 = 0x068;
pub const QSERDES_V3_COM_PLL_RCTRL_MODE1: u16 = 0x06c;
pub const QSERDES_V3_COM_PLL_CCTRL_MODE0: u16 = 0x070;
pub const QSERDES_V3_COM_PLL_CCTRL_MODE1: u16 = 0x074;
pub const QSERDES_V3_COM_SYSCLK_EN_SEL: u16 = 0x080;
pub const QSERDES_V3_COM_RESETSM_CNTRL: u16 = 0x088;
pub const QSERDES_V3_COM_LOCK_CMP_EN: u16 = 0x090;
pub const QSERDES_V3_COM_LOCK_CMP1_MODE0: u16 = 0x098;
pub const QSERDES_V3_COM_LOCK_CMP2_MODE0: u16 = 0x09c;
pub const QSERDES_V3_COM_LOCK_CMP1_MODE1: u16 = 0x0a4;
pub const QSERDES_V3_COM_LOCK_CMP2_MODE1: u16 = 0x0a8;
pub const QSERDES_V3_COM_DEC_START_MODE0: u16 = 0x0b0;
pub const QSERDES_V3_COM_DEC_START_MODE1: u16 = 0x0b4;
pub const QSERDES_V3_COM_INTEGLOOP_GAIN0_MODE0: u16 = 0x0d8;
pub const QSERDES_V3_COM_INTEGLOOP_GAIN1_MODE0: u16 = 0x0dc;
pub const QSERDES_V3_COM_INTEGLOOP_GAIN0_MODE1: u16 = 0x0e0;
pub const QSERDES_V3_COM_INTEGLOOP_GAIN1_MODE1: u16 = 0x0e4;
pub const QSERDES_V3_COM_VCO_TUNE_CTRL: u16 = 0x0ec;
pub const QSERDES_V3_COM_VCO_TUNE_MAP: u16 = 0x0f0;
pub const QSERDES_V3_COM_VCO_TUNE1_MODE0: u16 = 0x0f4;
pub const QSERDES_V3_COM_VCO_TUNE2_MODE0: u16 = 0x0f8;
pub const QSERDES_V3_COM_VCO_TUNE1_MODE1: u16 = 0x0fc;
pub const QSERDES_V3_COM_VCO_TUNE2_MODE1: u16 = 0x100;
pub const QSERDES_V3_COM_VCO_TUNE_INITVAL1: u16 = 0x104;
pub const QSERDES_V3_COM_VCO_TUNE_INITVAL2: u16 = 0x108;
pub const QSERDES_V3_COM_CLK_SELECT: u16 = 0x138;
pub const QSERDES_V3_COM_HSCLK_SEL: u16 = 0x13c;
pub const QSERDES_V3_COM_CORE_CLK_EN: u16 = 0x154;
pub const QSERDES_V3_COM_CMN_CONFIG: u16 = 0x15c;
pub const QSERDES_V3_COM_SVS_MODE_CLK_SEL: u16 = 0x164;

// QSERDES V3 TX, offsets from each TX block
pub const QSERDES_V3_TX_RES_CODE_LANE_OFFSET_TX: u16 = 0x044;
pub const QSERDES_V3_TX_RES_CODE_LANE_OFFSET_RX: u16 = 0x048;
pub const QSERDES_V3_TX_LANE_MODE_1: u16 = 0x08c;

// QSERDES V3 RX, offsets from each RX block
pub const QSERDES_V3_RX_UCDR_SVS_SO_GAIN_HALF: u16 = 0x024;
pub const QSERDES_V3_RX_UCDR_SVS_SO_GAIN_QUARTER: u16 = 0x028;
pub const QSERDES_V3_RX_UCDR_SVS_SO_GAIN: u16 = 0x02c;
pub const QSERDES_V3_RX_UCDR_FASTLOCK_FO_GAIN: u16 = 0x030;
pub const QSERDES_V3_RX_UCDR_SO_SATURATION_AND_ENABLE: u16 = 0x034;
pub const QSERDES_V3_RX_UCDR_FASTLOCK_COUNT_LOW: u16 = 0x03c;
pub const QSERDES_V3_RX_UCDR_PI_CONTROLS: u16 = 0x044;
pub const QSERDES_V3_RX_RX_TERM_BW: u16 = 0x07c;
pub const QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL2: u16 = 0x0d4;
pub const QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL3: u16 = 0x0d8;
pub const QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL4: u16 = 0x0dc;
pub const QSERDES_V3_RX_SIGDET_CNTRL: u16 = 0x114;
pub const QSERDES_V3_RX_SIGDET_LVL: u16 = 0x118;
pub const QSERDES_V3_RX_SIGDET_DEGLITCH_CNTRL: u16 = 0x11c;
pub const QSERDES_V3_RX_RX_INTERFACE_MODE: u16 = 0x12c;
pub const QSERDES_V3_RX_RX_MODE_00: u16 = 0x164;

// QPHY V3 PCS UFS, offsets from the PCS block
pub const QPHY_V3_PCS_UFS_PHY_START: u16 = 0x000;
pub const QPHY_V3_PCS_UFS_POWER_DOWN_CONTROL: u16 = 0x004;
pub const QPHY_V3_PCS_UFS_TX_LARGE_AMP_DRV_LVL: u16 = 0x02c;
pub const QPHY_V3_PCS_UFS_TX_SMALL_AMP_DRV_LVL: u16 = 0x034;
pub const QPHY_V3_PCS_UFS_RX_SYM_RESYNC_CTRL: u16 = 0x134;
pub const QPHY_V3_PCS_UFS_RX_MIN_HIBERN8_TIME: u16 = 0x138;
pub const QPHY_V3_PCS_UFS_RX_SIGDET_CTRL1: u16 = 0x13c;
pub const QPHY_V3_PCS_UFS_RX_SIGDET_CTRL2: u16 = 0x140;
pub const QPHY_V3_PCS_UFS_READY_STATUS: u16 = 0x160;
pub const QPHY_V3_PCS_UFS_TX_MID_TERM_CTRL1: u16 = 0x1bc;
pub const QPHY_V3_PCS_UFS_MULTI_LANE_CTRL1: u16 = 0x1c4;


/// v3 PCS has no software reset
pub static UFSPHY_V3_REGS_LAYOUT: RegsLayout = RegsLayout {
    sw_reset: None,
    start_ctrl: QPHY_V3_PCS_UFS_PHY_START,
    pcs_ready_status: QPHY_V3_PCS_UFS_READY_STATUS,
    power_down_control: QPHY_V3_PCS_UFS_POWER_DOWN_CONTROL,
};


pub static SDM845_UFSPHY_SERDES: [InitTbl; 36] = [
    InitTbl::cfg(QSERDES_V3_COM_SYS_CLK_CTRL, 0x02),
    InitTbl::cfg(QSERDES_V3_COM_BIAS_EN_CLKBUFLR_EN, 0x04),
    InitTbl::cfg(QSERDES_V3_COM_BG_TIMER, 0x0a),
    InitTbl::cfg(QSERDES_V3_COM_PLL_IVCO, 0x07),
    InitTbl::cfg(QSERDES_V3_COM_CMN_CONFIG, 0x06),
    InitTbl::cfg(QSERDES_V3_COM_SYSCLK_EN_SEL, 0xd5),
    InitTbl::cfg(QSERDES_V3_COM_RESETSM_CNTRL, 0x20),
    InitTbl::cfg(QSERDES_V3_COM_CLK_SELECT, 0x30),
    InitTbl::cfg(QSERDES_V3_COM_HSCLK_SEL, 0x00),
    InitTbl::cfg(QSERDES_V3_COM_LOCK_CMP_EN, 0x01),
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE_CTRL, 0x00),
    InitTbl::cfg(QSERDES_V3_COM_CORE_CLK_EN, 0x00),
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE_MAP, 0x04),
    InitTbl::cfg(QSERDES_V3_COM_SVS_MODE_CLK_SEL, 0x05),
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE_INITVAL1, 0xff),
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE_INITVAL2, 0x00),
    InitTbl::cfg(QSERDES_V3_COM_DEC_START_MODE0, 0x82),
    InitTbl::cfg(QSERDES_V3_COM_CP_CTRL_MODE0, 0x06),
    InitTbl::cfg(QSERDES_V3_COM_PLL_RCTRL_MODE0, 0x16),
    InitTbl::cfg(QSERDES_V3_COM_PLL_CCTRL_MODE0, 0x36),
    InitTbl::cfg(QSERDES_V3_COM_INTEGLOOP_GAIN0_MODE0, 0x3f),
    InitTbl::cfg(QSERDES_V3_COM_INTEGLOOP_GAIN1_MODE0, 0x00),
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE1_MODE0, 0xda),
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE2_MODE0, 0x01),
    InitTbl::cfg(QSERDES_V3_COM_LOCK_CMP1_MODE0, 0xff),
    InitTbl::cfg(QSERDES_V3_COM_LOCK_CMP2_MODE0, 0x0c),
    InitTbl::cfg(QSERDES_V3_COM_DEC_START_MODE1, 0x98),
    InitTbl::cfg(QSERDES_V3_COM_CP_CTRL_MODE1, 0x06),
    InitTbl::cfg(QSERDES_V3_COM_PLL_RCTRL_MODE1, 0x16),
    InitTbl::cfg(QSERDES_V3_COM_PLL_CCTRL_MODE1, 0x36),
    InitTbl::cfg(QSERDES_V3_COM_INTEGLOOP_GAIN0_MODE1, 0x3f),
    InitTbl::cfg(QSERDES_V3_COM_INTEGLOOP_GAIN1_MODE1, 0x00),
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE1_MODE1, 0xc1),
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE2_MODE1, 0x00),
    InitTbl::cfg(QSERDES_V3_COM_LOCK_CMP1_MODE1, 0x32),
    InitTbl::cfg(QSERDES_V3_COM_LOCK_CMP2_MODE1, 0x0f),
];

/// Rate B
pub static SDM845_UFSPHY_HS_B_SERDES: [InitTbl; 1] = [
    InitTbl::cfg(QSERDES_V3_COM_VCO_TUNE_MAP, 0x44),
];

pub static SDM845_UFSPHY_TX: [InitTbl; 3] = [
    InitTbl::cfg(QSERDES_V3_TX_LANE_MODE_1, 0x06),
    InitTbl::cfg(QSERDES_V3_TX_RES_CODE_LANE_OFFSET_TX, 0x04),
    InitTbl::cfg(QSERDES_V3_TX_RES_CODE_LANE_OFFSET_RX, 0x07),
];

pub static SDM845_UFSPHY_RX: [InitTbl; 16] = [
    InitTbl::cfg(QSERDES_V3_RX_SIGDET_LVL, 0x24),
    InitTbl::cfg(QSERDES_V3_RX_SIGDET_CNTRL, 0x0f),
    InitTbl::cfg(QSERDES_V3_RX_SIGDET_DEGLITCH_CNTRL, 0x1e),
    InitTbl::cfg(QSERDES_V3_RX_RX_INTERFACE_MODE, 0x40),
    InitTbl::cfg(QSERDES_V3_RX_UCDR_FASTLOCK_FO_GAIN, 0x0b),
    InitTbl::cfg(QSERDES_V3_RX_RX_TERM_BW, 0x5b),
    InitTbl::cfg(QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL2, 0x06),
    InitTbl::cfg(QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL3, 0x04),
    InitTbl::cfg(QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL4, 0x1b),
    InitTbl::cfg(QSERDES_V3_RX_UCDR_SVS_SO_GAIN_HALF, 0x04),
    InitTbl::cfg(QSERDES_V3_RX_UCDR_SVS_SO_GAIN_QUARTER, 0x04),
    InitTbl::cfg(QSERDES_V3_RX_UCDR_SVS_SO_GAIN, 0x04),
    InitTbl::cfg(QSERDES_V3_RX_UCDR_SO_SATURATION_AND_ENABLE, 0x4b),
    InitTbl::cfg(QSERDES_V3_RX_UCDR_PI_CONTROLS, 0x81),
    InitTbl::cfg(QSERDES_V3_RX_UCDR_FASTLOCK_COUNT_LOW, 0x80),
    InitTbl::cfg(QSERDES_V3_RX_RX_MODE_00, 0x59),
];

pub static SDM845_UFSPHY_PCS: [InitTbl; 8] = [
    InitTbl::cfg(QPHY_V3_PCS_UFS_RX_SIGDET_CTRL2, 0x6e),
    InitTbl::cfg(QPHY_V3_PCS_UFS_TX_LARGE_AMP_DRV_LVL, 0x0a),
    InitTbl::cfg(QPHY_V3_PCS_UFS_TX_SMALL_AMP_DRV_LVL, 0x02),
    InitTbl::cfg(QPHY_V3_PCS_UFS_RX_SYM_RESYNC_CTRL, 0x03),
    InitTbl::cfg(QPHY_V3_PCS_UFS_TX_MID_TERM_CTRL1, 0x43),
    InitTbl::cfg(QPHY_V3_PCS_UFS_RX_SIGDET_CTRL1, 0x0f),
    InitTbl::cfg(QPHY_V3_PCS_UFS_RX_MIN_HIBERN8_TIME, 0x9a),
    InitTbl::cfg(QPHY_V3_PCS_UFS_MULTI_LANE_CTRL1, 0x02),
];


/// Two-lane SDM845 UFS PHY, resets pulsed externally
pub static SDM845_UFSPHY_CFG: QmpUfsCfg = QmpUfsCfg {
    lanes: 2,
    offsets: &QMP_UFS_OFFSETS,
    tbls: CfgTbls {
        serdes: &SDM845_UFSPHY_SERDES,
        tx: &SDM845_UFSPHY_TX,
        rx: &SDM845_UFSPHY_RX,
        pcs: &SDM845_UFSPHY_PCS,
    },
    tbls_hs_b: CfgTbls {
        serdes: &SDM845_UFSPHY_HS_B_SERDES,
        ..CfgTbls::EMPTY
    },
    tbls_hs_g4: CfgTbls::EMPTY,
    regs: &UFSPHY_V3_REGS_LAYOUT,
};


#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(tbl: &[InitTbl]) -> Vec<(u16, u32)> {
        assert!(tbl.iter().all(|t| t.lane_mask == 0xff));
        tbl.iter().map(|t| (t.offset, t.val)).collect()
    }

    #[test]
    fn sdm845_serdes_sequence() {
        assert_eq!(pairs(&SDM845_UFSPHY_SERDES), vec![
            (QSERDES_V3_COM_SYS_CLK_CTRL, 0x02),
            (QSERDES_V3_COM_BIAS_EN_CLKBUFLR_EN, 0x04),
            (QSERDES_V3_COM_BG_TIMER, 0x0a),
            (QSERDES_V3_COM_PLL_IVCO, 0x07),
            (QSERDES_V3_COM_CMN_CONFIG, 0x06),
            (QSERDES_V3_COM_SYSCLK_EN_SEL, 0xd5),
            (QSERDES_V3_COM_RESETSM_CNTRL, 0x20),
            (QSERDES_V3_COM_CLK_SELECT, 0x30),
            (QSERDES_V3_COM_HSCLK_SEL, 0x00),
            (QSERDES_V3_COM_LOCK_CMP_EN, 0x01),
            (QSERDES_V3_COM_VCO_TUNE_CTRL, 0x00),
            (QSERDES_V3_COM_CORE_CLK_EN, 0x00),
            (QSERDES_V3_COM_VCO_TUNE_MAP, 0x04),
            (QSERDES_V3_COM_SVS_MODE_CLK_SEL, 0x05),
            (QSERDES_V3_COM_VCO_TUNE_INITVAL1, 0xff),
            (QSERDES_V3_COM_VCO_TUNE_INITVAL2, 0x00),
            (QSERDES_V3_COM_DEC_START_MODE0, 0x82),
            (QSERDES_V3_COM_CP_CTRL_MODE0, 0x06),
            (QSERDES_V3_COM_PLL_RCTRL_MODE0, 0x16),
            (QSERDES_V3_COM_PLL_CCTRL_MODE0, 0x36),
            (QSERDES_V3_COM_INTEGLOOP_GAIN0_MODE0, 0x3f),
            (QSERDES_V3_COM_INTEGLOOP_GAIN1_MODE0, 0x00),
            (QSERDES_V3_COM_VCO_TUNE1_MODE0, 0xda),
            (QSERDES_V3_COM_VCO_TUNE2_MODE0, 0x01),
            (QSERDES_V3_COM_LOCK_CMP1_MODE0, 0xff),
            (QSERDES_V3_COM_LOCK_CMP2_MODE0, 0x0c),
            (QSERDES_V3_COM_DEC_START_MODE1, 0x98),
            (QSERDES_V3_COM_CP_CTRL_MODE1, 0x06),
            (QSERDES_V3_COM_PLL_RCTRL_MODE1, 0x16),
            (QSERDES_V3_COM_PLL_CCTRL_MODE1, 0x36),
            (QSERDES_V3_COM_INTEGLOOP_GAIN0_MODE1, 0x3f),
            (QSERDES_V3_COM_INTEGLOOP_GAIN1_MODE1, 0x00),
            (QSERDES_V3_COM_VCO_TUNE1_MODE1, 0xc1),
            (QSERDES_V3_COM_VCO_TUNE2_MODE1, 0x00),
            (QSERDES_V3_COM_LOCK_CMP1_MODE1, 0x32),
            (QSERDES_V3_COM_LOCK_CMP2_MODE1, 0x0f),
        ]);
        assert_eq!(pairs(&SDM845_UFSPHY_HS_B_SERDES), vec![(QSERDES_V3_COM_VCO_TUNE_MAP, 0x44)]);
    }

    #[test]
    fn sdm845_lane_sequences() {
        assert_eq!(pairs(&SDM845_UFSPHY_TX), vec![
            (QSERDES_V3_TX_LANE_MODE_1, 0x06),
            (QSERDES_V3_TX_RES_CODE_LANE_OFFSET_TX, 0x04),
            (QSERDES_V3_TX_RES_CODE_LANE_OFFSET_RX, 0x07),
        ]);
        assert_eq!(pairs(&SDM845_UFSPHY_RX), vec![
            (QSERDES_V3_RX_SIGDET_LVL, 0x24),
            (QSERDES_V3_RX_SIGDET_CNTRL, 0x0f),
            (QSERDES_V3_RX_SIGDET_DEGLITCH_CNTRL, 0x1e),
            (QSERDES_V3_RX_RX_INTERFACE_MODE, 0x40),
            (QSERDES_V3_RX_UCDR_FASTLOCK_FO_GAIN, 0x0b),
            (QSERDES_V3_RX_RX_TERM_BW, 0x5b),
            (QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL2, 0x06),
            (QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL3, 0x04),
            (QSERDES_V3_RX_RX_EQU_ADAPTOR_CNTRL4, 0x1b),
            (QSERDES_V3_RX_UCDR_SVS_SO_GAIN_HALF, 0x04),
            (QSERDES_V3_RX_UCDR_SVS_SO_GAIN_QUARTER, 0x04),
            (QSERDES_V3_RX_UCDR_SVS_SO_GAIN, 0x04),
            (QSERDES_V3_RX_UCDR_SO_SATURATION_AND_ENABLE, 0x4b),
            (QSERDES_V3_RX_UCDR_PI_CONTROLS, 0x81),
            (QSERDES_V3_RX_UCDR_FASTLOCK_COUNT_LOW, 0x80),
            (QSERDES_V3_RX_RX_MODE_00, 0x59),
        ]);
    }

    #[test]
    fn sdm845_pcs_sequence() {
        assert_eq!(pairs(&SDM845_UFSPHY_PCS), vec![
            (QPHY_V3_PCS_UFS_RX_SIGDET_CTRL2, 0x6e),
            (QPHY_V3_PCS_UFS_TX_LARGE_AMP_DRV_LVL, 0x0a),
            (QPHY_V3_PCS_UFS_TX_SMALL_AMP_DRV_LVL, 0x02),
            (QPHY_V3_PCS_UFS_RX_SYM_RESYNC_CTRL, 0x03),
            (QPHY_V3_PCS_UFS_TX_MID_TERM_CTRL1, 0x43),
            (QPHY_V3_PCS_UFS_RX_SIGDET_CTRL1, 0x0f),
            (QPHY_V3_PCS_UFS_RX_MIN_HIBERN8_TIME, 0x9a),
            (QPHY_V3_PCS_UFS_MULTI_LANE_CTRL1, 0x02),
        ]);
    }

    #[test]
    fn sdm845_config() {
        let cfg = &SDM845_UFSPHY_CFG;
        assert_eq!(cfg.lanes, 2);
        assert!(cfg.no_pcs_sw_reset());
        assert_eq!(cfg.offsets.pcs, 0xc00);
        assert!(cfg.tbls_hs_b.tx.is_empty() && cfg.tbls_hs_b.pcs.is_empty());
        assert!(cfg.tbls_hs_g4.serdes.is_empty() && cfg.tbls_hs_g4.rx.is_empty());
    }
}
