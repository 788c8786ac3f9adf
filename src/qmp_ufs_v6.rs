//! QMP v6 UFS PHY registers and the SM8550 init sequence

use crate::qmp_ufs::*;


// QSERDES V6 COM
pub const QSERDES_V6_COM_CP_CTRL_MODE1: u16 = 0x10;
pub const QSERDES_V6_COM_PLL_RCTRL_MODE1: u16 = 0x14;
pub const QSERDES_V6_COM_PLL_CCTRL_MODE1: u16 = 0x18;
pub const QSERDES_V6_COM_LOCK_CMP1_MODE1: u16 = 0x20;
pub const QSERDES_V6_COM_LOCK_CMP2_MODE1: u16 = 0x24;
pub const QSERDES_V6_COM_DEC_START_MODE1: u16 = 0x28;
pub const QSERDES_V6_COM_CP_CTRL_MODE0: u16 = 0x70;
pub const QSERDES_V6_COM_PLL_RCTRL_MODE0: u16 = 0x74;
pub const QSERDES_V6_COM_PLL_CCTRL_MODE0: u16 = 0x78;
pub const QSERDES_V6_COM_LOCK_CMP1_MODE0: u16 = 0x80;
pub const QSERDES_V6_COM_LOCK_CMP2_MODE0: u16 = 0x84;
pub const QSERDES_V6_COM_DEC_START_MODE0: u16 = 0x88;
pub const QSERDES_V6_COM_HSCLK_SEL_1: u16 = 0x9c;
pub const QSERDES_V6_COM_HSCLK_HS_SWITCH_SEL_1: u16 = 0xa0;
pub const QSERDES_V6_COM_PLL_IVCO: u16 = 0xf4;
pub const QSERDES_V6_COM_SYSCLK_EN_SEL: u16 = 0x110;
pub const QSERDES_V6_COM_LOCK_CMP_EN: u16 = 0x120;
pub const QSERDES_V6_COM_VCO_TUNE_MAP: u16 = 0x140;
pub const QSERDES_V6_COM_VCO_TUNE_INITVAL2: u16 = 0x148;
pub const QSERDES_V6_COM_CMN_CONFIG_1: u16 = 0x174;

// QSERDES UFS V6 TX
pub const QSERDES_UFS_V6_TX_RES_CODE_LANE_OFFSET_TX: u16 = 0x30;
pub const QSERDES_UFS_V6_TX_LANE_MODE_1: u16 = 0x7c;
pub const QSERDES_UFS_V6_TX_FR_DCC_CTRL: u16 = 0x108;

// QSERDES UFS V6 RX
pub const QSERDES_UFS_V6_RX_UCDR_FO_GAIN_RATE2: u16 = 0x08;
pub const QSERDES_UFS_V6_RX_VGA_CAL_MAN_VAL: u16 = 0x178;
pub const QSERDES_UFS_V6_RX_MODE_RATE_0_1_B0: u16 = 0x208;
pub const QSERDES_UFS_V6_RX_MODE_RATE_0_1_B1: u16 = 0x20c;
pub const QSERDES_UFS_V6_RX_MODE_RATE_0_1_B3: u16 = 0x214;
pub const QSERDES_UFS_V6_RX_MODE_RATE_0_1_B6: u16 = 0x220;
pub const QSERDES_UFS_V6_RX_MODE_RATE2_B3: u16 = 0x238;
pub const QSERDES_UFS_V6_RX_MODE_RATE2_B6: u16 = 0x244;
pub const QSERDES_UFS_V6_RX_MODE_RATE3_B3: u16 = 0x25c;
pub const QSERDES_UFS_V6_RX_MODE_RATE3_B4: u16 = 0x260;
pub const QSERDES_UFS_V6_RX_MODE_RATE3_B5: u16 = 0x264;
pub const QSERDES_UFS_V6_RX_MODE_RATE3_B8: u16 = 0x270;

// QPHY V6 PCS UFS
pub const QPHY_V6_PCS_UFS_PHY_START: u16 = 0x000;
pub const QPHY_V6_PCS_UFS_POWER_DOWN_CONTROL: u16 = 0x004;
pub const QPHY_V6_PCS_UFS_SW_RESET: u16 = 0x008;
pub const QPHY_V6_PCS_UFS_PLL_CNTL: u16 = 0x02c;
pub const QPHY_V6_PCS_UFS_TX_LARGE_AMP_DRV_LVL: u16 = 0x030;
pub const QPHY_V6_PCS_UFS_TX_HSGEAR_CAPABILITY: u16 = 0x074;
pub const QPHY_V6_PCS_UFS_RX_HSGEAR_CAPABILITY: u16 = 0x0bc;
pub const QPHY_V6_PCS_UFS_RX_HS_G5_SYNC_LENGTH_CAPABILITY: u16 = 0x12c;
pub const QPHY_V6_PCS_UFS_RX_SIGDET_CTRL2: u16 = 0x158;
pub const QPHY_V6_PCS_UFS_RX_HSG5_SYNC_WAIT_TIME: u16 = 0x16c;
pub const QPHY_V6_PCS_UFS_READY_STATUS: u16 = 0x1a8;
pub const QPHY_V6_PCS_UFS_TX_MID_TERM_CTRL1: u16 = 0x1e0;
pub const QPHY_V6_PCS_UFS_MULTI_LANE_CTRL1: u16 = 0x1e4;


pub static UFSPHY_V6_REGS_LAYOUT: RegsLayout = RegsLayout {
    sw_reset: Some(QPHY_V6_PCS_UFS_SW_RESET),
    start_ctrl: QPHY_V6_PCS_UFS_PHY_START,
    pcs_ready_status: QPHY_V6_PCS_UFS_READY_STATUS,
    power_down_control: QPHY_V6_PCS_UFS_POWER_DOWN_CONTROL,
};


pub static SM8550_UFSPHY_SERDES: [InitTbl; 20] = [
    InitTbl::cfg(QSERDES_V6_COM_SYSCLK_EN_SEL, 0xd9),
    InitTbl::cfg(QSERDES_V6_COM_CMN_CONFIG_1, 0x16),
    InitTbl::cfg(QSERDES_V6_COM_HSCLK_SEL_1, 0x11),
    InitTbl::cfg(QSERDES_V6_COM_HSCLK_HS_SWITCH_SEL_1, 0x00),
    InitTbl::cfg(QSERDES_V6_COM_LOCK_CMP_EN, 0x01),
    InitTbl::cfg(QSERDES_V6_COM_VCO_TUNE_MAP, 0x04),
    InitTbl::cfg(QSERDES_V6_COM_PLL_IVCO, 0x0f),
    InitTbl::cfg(QSERDES_V6_COM_VCO_TUNE_INITVAL2, 0x00),
    InitTbl::cfg(QSERDES_V6_COM_DEC_START_MODE0, 0x41),
    InitTbl::cfg(QSERDES_V6_COM_CP_CTRL_MODE0, 0x0a),
    InitTbl::cfg(QSERDES_V6_COM_PLL_RCTRL_MODE0, 0x18),
    InitTbl::cfg(QSERDES_V6_COM_PLL_CCTRL_MODE0, 0x14),
    InitTbl::cfg(QSERDES_V6_COM_LOCK_CMP1_MODE0, 0x7f),
    InitTbl::cfg(QSERDES_V6_COM_LOCK_CMP2_MODE0, 0x06),
    InitTbl::cfg(QSERDES_V6_COM_DEC_START_MODE1, 0x4c),
    InitTbl::cfg(QSERDES_V6_COM_CP_CTRL_MODE1, 0x0a),
    InitTbl::cfg(QSERDES_V6_COM_PLL_RCTRL_MODE1, 0x18),
    InitTbl::cfg(QSERDES_V6_COM_PLL_CCTRL_MODE1, 0x14),
    InitTbl::cfg(QSERDES_V6_COM_LOCK_CMP1_MODE1, 0x99),
    InitTbl::cfg(QSERDES_V6_COM_LOCK_CMP2_MODE1, 0x07),
];

pub static SM8550_UFSPHY_HS_B_SERDES: [InitTbl; 1] = [
    InitTbl::cfg(QSERDES_V6_COM_VCO_TUNE_MAP, 0x44),
];

pub static SM8550_UFSPHY_TX: [InitTbl; 3] = [
    InitTbl::cfg(QSERDES_UFS_V6_TX_LANE_MODE_1, 0x05),
    InitTbl::cfg(QSERDES_UFS_V6_TX_RES_CODE_LANE_OFFSET_TX, 0x07),
    InitTbl::cfg(QSERDES_UFS_V6_TX_FR_DCC_CTRL, 0x4c),
];

pub static SM8550_UFSPHY_RX: [InitTbl; 12] = [
    InitTbl::cfg(QSERDES_UFS_V6_RX_UCDR_FO_GAIN_RATE2, 0x0c),
    InitTbl::cfg(QSERDES_UFS_V6_RX_VGA_CAL_MAN_VAL, 0x0e),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE_0_1_B0, 0xc2),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE_0_1_B1, 0xc2),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE_0_1_B3, 0x1a),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE_0_1_B6, 0x60),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE2_B3, 0x9e),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE2_B6, 0x60),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE3_B3, 0x9e),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE3_B4, 0x0e),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE3_B5, 0x36),
    InitTbl::cfg(QSERDES_UFS_V6_RX_MODE_RATE3_B8, 0x02),
];

/// PLL_CNTL is written twice
pub static SM8550_UFSPHY_PCS: [InitTbl; 10] = [
    InitTbl::cfg(QPHY_V6_PCS_UFS_RX_SIGDET_CTRL2, 0x69),
    InitTbl::cfg(QPHY_V6_PCS_UFS_TX_LARGE_AMP_DRV_LVL, 0x0f),
    InitTbl::cfg(QPHY_V6_PCS_UFS_TX_MID_TERM_CTRL1, 0x43),
    InitTbl::cfg(QPHY_V6_PCS_UFS_MULTI_LANE_CTRL1, 0x02),
    InitTbl::cfg(QPHY_V6_PCS_UFS_PLL_CNTL, 0x2b),
    InitTbl::cfg(QPHY_V6_PCS_UFS_TX_HSGEAR_CAPABILITY, 0x04),
    InitTbl::cfg(QPHY_V6_PCS_UFS_RX_HSGEAR_CAPABILITY, 0x04),
    InitTbl::cfg(QPHY_V6_PCS_UFS_PLL_CNTL, 0x33),
    InitTbl::cfg(QPHY_V6_PCS_UFS_RX_HS_G5_SYNC_LENGTH_CAPABILITY, 0x4f),
    InitTbl::cfg(QPHY_V6_PCS_UFS_RX_HSG5_SYNC_WAIT_TIME, 0x9e),
];


pub static SM8550_UFSPHY_CFG: QmpUfsCfg = QmpUfsCfg {
    lanes: 2,
    offsets: &QMP_UFS_OFFSETS_V6,
    tbls: CfgTbls {
        serdes: &SM8550_UFSPHY_SERDES,
        tx: &SM8550_UFSPHY_TX,
        rx: &SM8550_UFSPHY_RX,
        pcs: &SM8550_UFSPHY_PCS,
    },
    tbls_hs_b: CfgTbls {
        serdes: &SM8550_UFSPHY_HS_B_SERDES,
        ..CfgTbls::EMPTY
    },
    tbls_hs_g4: CfgTbls::EMPTY,
    regs: &UFSPHY_V6_REGS_LAYOUT,
};
