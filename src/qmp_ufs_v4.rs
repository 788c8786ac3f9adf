//! QMP v4 UFS PHY registers and the SM8150, SM8250 and SC7280 init sequences
//!
//! All three share the SM8150 SerDes sequence. They differ in lane tuning
//! and in the HS-G4 additions.

use crate::qmp_ufs::*;


// QSERDES V4 COM
pub const QSERDES_V4_COM_PLL_IVCO: u16 = 0x058;
pub const QSERDES_V4_COM_CP_CTRL_MODE0: u16 = 0x074;
pub const QSERDES_V4_COM_CP_CTRL_MODE1: u16 = 0x078;
pub const QSERDES_V4_COM_PLL_RCTRL_MODE0: u16 = 0x07c;
pub const QSERDES_V4_COM_PLL_RCTRL_MODE1: u16 = 0x080;
pub const QSERDES_V4_COM_PLL_CCTRL_MODE0: u16 = 0x084;
pub const QSERDES_V4_COM_PLL_CCTRL_MODE1: u16 = 0x088;
pub const QSERDES_V4_COM_SYSCLK_EN_SEL: u16 = 0x094;
pub const QSERDES_V4_COM_LOCK_CMP_EN: u16 = 0x0a4;
pub const QSERDES_V4_COM_LOCK_CMP1_MODE0: u16 = 0x0ac;
pub const QSERDES_V4_COM_LOCK_CMP2_MODE0: u16 = 0x0b0;
pub const QSERDES_V4_COM_LOCK_CMP1_MODE1: u16 = 0x0b4;
pub const QSERDES_V4_COM_LOCK_CMP2_MODE1: u16 = 0x0b8;
pub const QSERDES_V4_COM_DEC_START_MODE0: u16 = 0x0bc;
pub const QSERDES_V4_COM_DEC_START_MODE1: u16 = 0x0c4;
pub const QSERDES_V4_COM_VCO_TUNE_MAP: u16 = 0x10c;
pub const QSERDES_V4_COM_VCO_TUNE_INITVAL2: u16 = 0x124;
pub const QSERDES_V4_COM_HSCLK_SEL: u16 = 0x158;
pub const QSERDES_V4_COM_HSCLK_HS_SWITCH_SEL: u16 = 0x15c;
pub const QSERDES_V4_COM_BIN_VCOCAL_CMP_CODE1_MODE0: u16 = 0x1ac;
pub const QSERDES_V4_COM_BIN_VCOCAL_CMP_CODE2_MODE0: u16 = 0x1b0;
pub const QSERDES_V4_COM_BIN_VCOCAL_CMP_CODE1_MODE1: u16 = 0x1b4;
pub const QSERDES_V4_COM_BIN_VCOCAL_CMP_CODE2_MODE1: u16 = 0x1b8;
pub const QSERDES_V4_COM_BIN_VCOCAL_HSCLK_SEL: u16 = 0x1bc;

// QSERDES V4 TX
pub const QSERDES_V4_TX_LANE_MODE_1: u16 = 0x084;
pub const QSERDES_V4_TX_TRAN_DRVR_EMP_EN: u16 = 0x0b8;
pub const QSERDES_V4_TX_PWM_GEAR_1_DIVIDER_BAND0_1: u16 = 0x0d8;
pub const QSERDES_V4_TX_PWM_GEAR_2_DIVIDER_BAND0_1: u16 = 0x0dc;
pub const QSERDES_V4_TX_PWM_GEAR_3_DIVIDER_BAND0_1: u16 = 0x0e0;
pub const QSERDES_V4_TX_PWM_GEAR_4_DIVIDER_BAND0_1: u16 = 0x0e4;

// QSERDES V4 RX
pub const QSERDES_V4_RX_UCDR_FO_GAIN: u16 = 0x008;
pub const QSERDES_V4_RX_UCDR_SO_GAIN: u16 = 0x014;
pub const QSERDES_V4_RX_UCDR_FASTLOCK_FO_GAIN: u16 = 0x030;
pub const QSERDES_V4_RX_UCDR_SO_SATURATION_AND_ENABLE: u16 = 0x034;
pub const QSERDES_V4_RX_UCDR_FASTLOCK_COUNT_LOW: u16 = 0x03c;
pub const QSERDES_V4_RX_UCDR_PI_CONTROLS: u16 = 0x044;
pub const QSERDES_V4_RX_UCDR_PI_CTRL2: u16 = 0x048;
pub const QSERDES_V4_RX_RX_TERM_BW: u16 = 0x080;
pub const QSERDES_V4_RX_GM_CAL: u16 = 0x0dc;
pub const QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL1: u16 = 0x0e8;
pub const QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL2: u16 = 0x0ec;
pub const QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL3: u16 = 0x0f0;
pub const QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL4: u16 = 0x0f4;
pub const QSERDES_V4_RX_RX_IDAC_TSETTLE_LOW: u16 = 0x0f8;
pub const QSERDES_V4_RX_RX_IDAC_TSETTLE_HIGH: u16 = 0x0fc;
pub const QSERDES_V4_RX_RX_IDAC_MEASURE_TIME: u16 = 0x100;
pub const QSERDES_V4_RX_RX_EQ_OFFSET_ADAPTOR_CNTRL1: u16 = 0x110;
pub const QSERDES_V4_RX_RX_OFFSET_ADAPTOR_CNTRL2: u16 = 0x114;
pub const QSERDES_V4_RX_SIGDET_CNTRL: u16 = 0x11c;
pub const QSERDES_V4_RX_SIGDET_LVL: u16 = 0x120;
pub const QSERDES_V4_RX_SIGDET_DEGLITCH_CNTRL: u16 = 0x124;
pub const QSERDES_V4_RX_RX_BAND: u16 = 0x128;
pub const QSERDES_V4_RX_RX_MODE_00_LOW: u16 = 0x170;
pub const QSERDES_V4_RX_RX_MODE_00_HIGH: u16 = 0x174;
pub const QSERDES_V4_RX_RX_MODE_00_HIGH2: u16 = 0x178;
pub const QSERDES_V4_RX_RX_MODE_00_HIGH3: u16 = 0x17c;
pub const QSERDES_V4_RX_RX_MODE_00_HIGH4: u16 = 0x180;
pub const QSERDES_V4_RX_RX_MODE_01_LOW: u16 = 0x184;
pub const QSERDES_V4_RX_RX_MODE_01_HIGH: u16 = 0x188;
pub const QSERDES_V4_RX_RX_MODE_01_HIGH2: u16 = 0x18c;
pub const QSERDES_V4_RX_RX_MODE_01_HIGH3: u16 = 0x190;
pub const QSERDES_V4_RX_RX_MODE_01_HIGH4: u16 = 0x194;
pub const QSERDES_V4_RX_RX_MODE_10_LOW: u16 = 0x198;
pub const QSERDES_V4_RX_RX_MODE_10_HIGH: u16 = 0x19c;
pub const QSERDES_V4_RX_RX_MODE_10_HIGH2: u16 = 0x1a0;
pub const QSERDES_V4_RX_RX_MODE_10_HIGH3: u16 = 0x1a4;
pub const QSERDES_V4_RX_RX_MODE_10_HIGH4: u16 = 0x1a8;
pub const QSERDES_V4_RX_DCC_CTRL1: u16 = 0x1bc;

// QPHY V4 PCS UFS
pub const QPHY_V4_PCS_UFS_PHY_START: u16 = 0x000;
pub const QPHY_V4_PCS_UFS_POWER_DOWN_CONTROL: u16 = 0x004;
pub const QPHY_V4_PCS_UFS_SW_RESET: u16 = 0x008;
pub const QPHY_V4_PCS_UFS_TIMER_20US_CORECLK_STEPS_MSB: u16 = 0x00c;
pub const QPHY_V4_PCS_UFS_TIMER_20US_CORECLK_STEPS_LSB: u16 = 0x010;
pub const QPHY_V4_PCS_UFS_PLL_CNTL: u16 = 0x02c;
pub const QPHY_V4_PCS_UFS_TX_LARGE_AMP_DRV_LVL: u16 = 0x030;
pub const QPHY_V4_PCS_UFS_TX_SMALL_AMP_DRV_LVL: u16 = 0x038;
pub const QPHY_V4_PCS_UFS_BIST_FIXED_PAT_CTRL: u16 = 0x060;
pub const QPHY_V4_PCS_UFS_TX_HSGEAR_CAPABILITY: u16 = 0x074;
pub const QPHY_V4_PCS_UFS_RX_HSGEAR_CAPABILITY: u16 = 0x0b4;
pub const QPHY_V4_PCS_UFS_DEBUG_BUS_CLKSEL: u16 = 0x124;
pub const QPHY_V4_PCS_UFS_RX_MIN_HIBERN8_TIME: u16 = 0x150;
pub const QPHY_V4_PCS_UFS_RX_SIGDET_CTRL2: u16 = 0x158;
pub const QPHY_V4_PCS_UFS_TX_PWM_GEAR_BAND: u16 = 0x160;
pub const QPHY_V4_PCS_UFS_TX_HS_GEAR_BAND: u16 = 0x168;
pub const QPHY_V4_PCS_UFS_READY_STATUS: u16 = 0x180;
pub const QPHY_V4_PCS_UFS_TX_MID_TERM_CTRL1: u16 = 0x1d8;
pub const QPHY_V4_PCS_UFS_MULTI_LANE_CTRL1: u16 = 0x1e0;


pub static UFSPHY_V4_REGS_LAYOUT: RegsLayout = RegsLayout {
    sw_reset: Some(QPHY_V4_PCS_UFS_SW_RESET),
    start_ctrl: QPHY_V4_PCS_UFS_PHY_START,
    pcs_ready_status: QPHY_V4_PCS_UFS_READY_STATUS,
    power_down_control: QPHY_V4_PCS_UFS_POWER_DOWN_CONTROL,
};


pub static SM8150_UFSPHY_SERDES: [InitTbl; 24] = [
    InitTbl::cfg(QSERDES_V4_COM_SYSCLK_EN_SEL, 0xd9),
    InitTbl::cfg(QSERDES_V4_COM_HSCLK_SEL, 0x11),
    InitTbl::cfg(QSERDES_V4_COM_HSCLK_HS_SWITCH_SEL, 0x00),
    InitTbl::cfg(QSERDES_V4_COM_LOCK_CMP_EN, 0x01),
    InitTbl::cfg(QSERDES_V4_COM_VCO_TUNE_MAP, 0x02),
    InitTbl::cfg(QSERDES_V4_COM_PLL_IVCO, 0x0f),
    InitTbl::cfg(QSERDES_V4_COM_VCO_TUNE_INITVAL2, 0x00),
    InitTbl::cfg(QSERDES_V4_COM_BIN_VCOCAL_HSCLK_SEL, 0x11),
    InitTbl::cfg(QSERDES_V4_COM_DEC_START_MODE0, 0x82),
    InitTbl::cfg(QSERDES_V4_COM_CP_CTRL_MODE0, 0x06),
    InitTbl::cfg(QSERDES_V4_COM_PLL_RCTRL_MODE0, 0x16),
    InitTbl::cfg(QSERDES_V4_COM_PLL_CCTRL_MODE0, 0x36),
    InitTbl::cfg(QSERDES_V4_COM_LOCK_CMP1_MODE0, 0xff),
    InitTbl::cfg(QSERDES_V4_COM_LOCK_CMP2_MODE0, 0x0c),
    InitTbl::cfg(QSERDES_V4_COM_BIN_VCOCAL_CMP_CODE1_MODE0, 0xac),
    InitTbl::cfg(QSERDES_V4_COM_BIN_VCOCAL_CMP_CODE2_MODE0, 0x1e),
    InitTbl::cfg(QSERDES_V4_COM_DEC_START_MODE1, 0x98),
    InitTbl::cfg(QSERDES_V4_COM_CP_CTRL_MODE1, 0x06),
    InitTbl::cfg(QSERDES_V4_COM_PLL_RCTRL_MODE1, 0x16),
    InitTbl::cfg(QSERDES_V4_COM_PLL_CCTRL_MODE1, 0x36),
    InitTbl::cfg(QSERDES_V4_COM_LOCK_CMP1_MODE1, 0x32),
    InitTbl::cfg(QSERDES_V4_COM_LOCK_CMP2_MODE1, 0x0f),
    InitTbl::cfg(QSERDES_V4_COM_BIN_VCOCAL_CMP_CODE1_MODE1, 0xdd),
    InitTbl::cfg(QSERDES_V4_COM_BIN_VCOCAL_CMP_CODE2_MODE1, 0x23),
];

pub static SM8150_UFSPHY_HS_B_SERDES: [InitTbl; 1] = [
    InitTbl::cfg(QSERDES_V4_COM_VCO_TUNE_MAP, 0x06),
];

pub static SM8150_UFSPHY_TX: [InitTbl; 6] = [
    InitTbl::cfg(QSERDES_V4_TX_PWM_GEAR_1_DIVIDER_BAND0_1, 0x06),
    InitTbl::cfg(QSERDES_V4_TX_PWM_GEAR_2_DIVIDER_BAND0_1, 0x03),
    InitTbl::cfg(QSERDES_V4_TX_PWM_GEAR_3_DIVIDER_BAND0_1, 0x01),
    InitTbl::cfg(QSERDES_V4_TX_PWM_GEAR_4_DIVIDER_BAND0_1, 0x00),
    InitTbl::cfg(QSERDES_V4_TX_LANE_MODE_1, 0x05),
    InitTbl::cfg(QSERDES_V4_TX_TRAN_DRVR_EMP_EN, 0x0c),
];

pub static SM8150_UFSPHY_HS_G4_TX: [InitTbl; 1] = [
    InitTbl::cfg(QSERDES_V4_TX_LANE_MODE_1, 0x75),
];

pub static SM8150_UFSPHY_RX: [InitTbl; 34] = [
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_LVL, 0x24),
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_CNTRL, 0x0f),
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_DEGLITCH_CNTRL, 0x1e),
    InitTbl::cfg(QSERDES_V4_RX_RX_BAND, 0x18),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FASTLOCK_FO_GAIN, 0x0a),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_SO_SATURATION_AND_ENABLE, 0x4b),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_PI_CONTROLS, 0xf1),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FASTLOCK_COUNT_LOW, 0x80),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_PI_CTRL2, 0x80),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FO_GAIN, 0x0c),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_SO_GAIN, 0x04),
    InitTbl::cfg(QSERDES_V4_RX_RX_TERM_BW, 0x1b),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL2, 0x06),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL3, 0x04),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL4, 0x1d),
    InitTbl::cfg(QSERDES_V4_RX_RX_OFFSET_ADAPTOR_CNTRL2, 0x00),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_MEASURE_TIME, 0x10),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_LOW, 0xc0),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_HIGH, 0x00),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_LOW, 0x36),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH, 0x36),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH2, 0xf6),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH3, 0x3b),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH4, 0x3d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_LOW, 0xe0),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH2, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH3, 0x3b),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH4, 0xb1),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_LOW, 0xe0),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH2, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH3, 0x3b),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH4, 0xb1),
];

pub static SM8150_UFSPHY_HS_G4_RX: [InitTbl; 16] = [
    InitTbl::cfg(QSERDES_V4_RX_UCDR_SO_SATURATION_AND_ENABLE, 0x5a),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_PI_CTRL2, 0x81),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FO_GAIN, 0x0e),
    InitTbl::cfg(QSERDES_V4_RX_RX_TERM_BW, 0x6f),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_MEASURE_TIME, 0x20),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_LOW, 0x80),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_HIGH, 0x01),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_LOW, 0x3f),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH, 0xff),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH2, 0xff),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH3, 0x7f),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH4, 0x6c),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_LOW, 0x6d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH, 0x6d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH2, 0xed),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH4, 0x3c),
];

pub static SM8150_UFSPHY_PCS: [InitTbl; 7] = [
    InitTbl::cfg(QPHY_V4_PCS_UFS_RX_SIGDET_CTRL2, 0x6d),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_LARGE_AMP_DRV_LVL, 0x0a),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_SMALL_AMP_DRV_LVL, 0x02),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_MID_TERM_CTRL1, 0x43),
    InitTbl::cfg(QPHY_V4_PCS_UFS_DEBUG_BUS_CLKSEL, 0x1f),
    InitTbl::cfg(QPHY_V4_PCS_UFS_RX_MIN_HIBERN8_TIME, 0xff),
    InitTbl::cfg(QPHY_V4_PCS_UFS_MULTI_LANE_CTRL1, 0x02),
];

pub static SM8150_UFSPHY_HS_G4_PCS: [InitTbl; 2] = [
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_LARGE_AMP_DRV_LVL, 0x10),
    InitTbl::cfg(QPHY_V4_PCS_UFS_BIST_FIXED_PAT_CTRL, 0x0a),
];

pub static SM8250_UFSPHY_HS_G4_TX: [InitTbl; 1] = [
    InitTbl::cfg(QSERDES_V4_TX_LANE_MODE_1, 0xe5),
];

pub static SM8250_UFSPHY_HS_G4_RX: [InitTbl; 21] = [
    InitTbl::cfg(QSERDES_V4_RX_UCDR_SO_SATURATION_AND_ENABLE, 0x5a),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_PI_CTRL2, 0x81),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FO_GAIN, 0x0e),
    InitTbl::cfg(QSERDES_V4_RX_RX_TERM_BW, 0x6f),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL1, 0x04),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL2, 0x00),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL3, 0x09),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL4, 0x07),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQ_OFFSET_ADAPTOR_CNTRL1, 0x17),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_MEASURE_TIME, 0x20),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_LOW, 0x80),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_HIGH, 0x01),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_LOW, 0x3f),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH, 0xff),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH2, 0xff),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH3, 0x7f),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH4, 0x2c),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_LOW, 0x6d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH, 0x6d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH2, 0xed),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH4, 0x3c),
];

pub static SC7280_UFSPHY_TX: [InitTbl; 6] = [
    InitTbl::cfg(QSERDES_V4_TX_PWM_GEAR_1_DIVIDER_BAND0_1, 0x06),
    InitTbl::cfg(QSERDES_V4_TX_PWM_GEAR_2_DIVIDER_BAND0_1, 0x03),
    InitTbl::cfg(QSERDES_V4_TX_PWM_GEAR_3_DIVIDER_BAND0_1, 0x01),
    InitTbl::cfg(QSERDES_V4_TX_PWM_GEAR_4_DIVIDER_BAND0_1, 0x00),
    InitTbl::cfg(QSERDES_V4_TX_LANE_MODE_1, 0x35),
    InitTbl::cfg(QSERDES_V4_TX_TRAN_DRVR_EMP_EN, 0x0c),
];

pub static SC7280_UFSPHY_RX: [InitTbl; 35] = [
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_LVL, 0x24),
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_CNTRL, 0x0f),
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_DEGLITCH_CNTRL, 0x1e),
    InitTbl::cfg(QSERDES_V4_RX_RX_BAND, 0x18),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FASTLOCK_FO_GAIN, 0x0a),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_SO_SATURATION_AND_ENABLE, 0x5a),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_PI_CONTROLS, 0xf1),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FASTLOCK_COUNT_LOW, 0x80),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_PI_CTRL2, 0x80),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FO_GAIN, 0x0e),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_SO_GAIN, 0x04),
    InitTbl::cfg(QSERDES_V4_RX_RX_TERM_BW, 0x1b),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL2, 0x06),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL3, 0x04),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL4, 0x1d),
    InitTbl::cfg(QSERDES_V4_RX_RX_OFFSET_ADAPTOR_CNTRL2, 0x00),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_MEASURE_TIME, 0x10),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_LOW, 0xc0),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_HIGH, 0x00),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_LOW, 0x6d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH, 0x6d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH2, 0xed),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH3, 0x3b),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH4, 0x3c),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_LOW, 0xe0),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH2, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH3, 0x3b),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH4, 0xb1),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_LOW, 0xe0),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH2, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH3, 0x3b),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH4, 0xb1),
    InitTbl::cfg(QSERDES_V4_RX_DCC_CTRL1, 0x0c),
];

pub static SC7280_UFSPHY_PCS: [InitTbl; 14] = [
    InitTbl::cfg(QPHY_V4_PCS_UFS_RX_SIGDET_CTRL2, 0x6d),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_LARGE_AMP_DRV_LVL, 0x0a),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_SMALL_AMP_DRV_LVL, 0x02),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_MID_TERM_CTRL1, 0x43),
    InitTbl::cfg(QPHY_V4_PCS_UFS_DEBUG_BUS_CLKSEL, 0x1f),
    InitTbl::cfg(QPHY_V4_PCS_UFS_RX_MIN_HIBERN8_TIME, 0xff),
    InitTbl::cfg(QPHY_V4_PCS_UFS_MULTI_LANE_CTRL1, 0x02),
    InitTbl::cfg(QPHY_V4_PCS_UFS_PLL_CNTL, 0x03),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TIMER_20US_CORECLK_STEPS_MSB, 0x16),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TIMER_20US_CORECLK_STEPS_LSB, 0xd8),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_PWM_GEAR_BAND, 0xaa),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_HS_GEAR_BAND, 0x06),
    InitTbl::cfg(QPHY_V4_PCS_UFS_TX_HSGEAR_CAPABILITY, 0x03),
    InitTbl::cfg(QPHY_V4_PCS_UFS_RX_HSGEAR_CAPABILITY, 0x03),
];

pub static SC7280_UFSPHY_HS_G4_RX: [InitTbl; 38] = [
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_LVL, 0x24),
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_CNTRL, 0x0f),
    InitTbl::cfg(QSERDES_V4_RX_SIGDET_DEGLITCH_CNTRL, 0x1e),
    InitTbl::cfg(QSERDES_V4_RX_RX_BAND, 0x18),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FASTLOCK_FO_GAIN, 0x0a),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_SO_SATURATION_AND_ENABLE, 0x5a),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_PI_CONTROLS, 0xf1),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FASTLOCK_COUNT_LOW, 0x80),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_PI_CTRL2, 0x81),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_FO_GAIN, 0x0e),
    InitTbl::cfg(QSERDES_V4_RX_UCDR_SO_GAIN, 0x04),
    InitTbl::cfg(QSERDES_V4_RX_RX_TERM_BW, 0x6f),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL1, 0x04),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL2, 0x00),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL3, 0x09),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQU_ADAPTOR_CNTRL4, 0x07),
    InitTbl::cfg(QSERDES_V4_RX_RX_EQ_OFFSET_ADAPTOR_CNTRL1, 0x17),
    InitTbl::cfg(QSERDES_V4_RX_RX_OFFSET_ADAPTOR_CNTRL2, 0x00),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_MEASURE_TIME, 0x20),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_LOW, 0x80),
    InitTbl::cfg(QSERDES_V4_RX_RX_IDAC_TSETTLE_HIGH, 0x01),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_LOW, 0x3f),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH, 0xff),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH2, 0xff),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH3, 0x7f),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_00_HIGH4, 0x2c),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_LOW, 0x6d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH, 0x6d),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH2, 0xed),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH3, 0x3b),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_01_HIGH4, 0x3c),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_LOW, 0xe0),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH2, 0xc8),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH3, 0x3b),
    InitTbl::cfg(QSERDES_V4_RX_RX_MODE_10_HIGH4, 0xb1),
    InitTbl::cfg(QSERDES_V4_RX_DCC_CTRL1, 0x0c),
    InitTbl::cfg(QSERDES_V4_RX_GM_CAL, 0x0f),
];


pub static SM8150_UFSPHY_CFG: QmpUfsCfg = QmpUfsCfg {
    lanes: 2,
    offsets: &QMP_UFS_OFFSETS,
    tbls: CfgTbls {
        serdes: &SM8150_UFSPHY_SERDES,
        tx: &SM8150_UFSPHY_TX,
        rx: &SM8150_UFSPHY_RX,
        pcs: &SM8150_UFSPHY_PCS,
    },
    tbls_hs_b: CfgTbls {
        serdes: &SM8150_UFSPHY_HS_B_SERDES,
        ..CfgTbls::EMPTY
    },
    tbls_hs_g4: CfgTbls {
        serdes: &[],
        tx: &SM8150_UFSPHY_HS_G4_TX,
        rx: &SM8150_UFSPHY_HS_G4_RX,
        pcs: &SM8150_UFSPHY_HS_G4_PCS,
    },
    regs: &UFSPHY_V4_REGS_LAYOUT,
};

pub static SM8250_UFSPHY_CFG: QmpUfsCfg = QmpUfsCfg {
    lanes: 2,
    offsets: &QMP_UFS_OFFSETS,
    tbls: CfgTbls {
        serdes: &SM8150_UFSPHY_SERDES,
        tx: &SM8150_UFSPHY_TX,
        rx: &SM8150_UFSPHY_RX,
        pcs: &SM8150_UFSPHY_PCS,
    },
    tbls_hs_b: CfgTbls {
        serdes: &SM8150_UFSPHY_HS_B_SERDES,
        ..CfgTbls::EMPTY
    },
    tbls_hs_g4: CfgTbls {
        serdes: &[],
        tx: &SM8250_UFSPHY_HS_G4_TX,
        rx: &SM8250_UFSPHY_HS_G4_RX,
        pcs: &SM8150_UFSPHY_HS_G4_PCS,
    },
    regs: &UFSPHY_V4_REGS_LAYOUT,
};

pub static SC7280_UFSPHY_CFG: QmpUfsCfg = QmpUfsCfg {
    lanes: 2,
    offsets: &QMP_UFS_OFFSETS,
    tbls: CfgTbls {
        serdes: &SM8150_UFSPHY_SERDES,
        tx: &SC7280_UFSPHY_TX,
        rx: &SC7280_UFSPHY_RX,
        pcs: &SC7280_UFSPHY_PCS,
    },
    tbls_hs_b: CfgTbls {
        serdes: &SM8150_UFSPHY_HS_B_SERDES,
        ..CfgTbls::EMPTY
    },
    tbls_hs_g4: CfgTbls {
        serdes: &[],
        tx: &SM8250_UFSPHY_HS_G4_TX,
        rx: &SC7280_UFSPHY_HS_G4_RX,
        pcs: &SM8150_UFSPHY_HS_G4_PCS,
    },
    regs: &UFSPHY_V4_REGS_LAYOUT,
};


#[cfg(test)]
mod tests {
    use super::*;

    fn has(tbl: &[InitTbl], offset: u16, val: u32) -> bool {
        tbl.iter().any(|t| t.offset == offset && t.val == val)
    }

    #[test]
    fn configs_share_sm8150_serdes() {
        for cfg in [&SM8150_UFSPHY_CFG, &SM8250_UFSPHY_CFG, &SC7280_UFSPHY_CFG] {
            assert_eq!(cfg.lanes, 2);
            assert!(!cfg.no_pcs_sw_reset());
            assert_eq!(cfg.tbls.serdes.as_ptr(), SM8150_UFSPHY_SERDES.as_ptr());
            assert_eq!(cfg.tbls_hs_b.serdes, &SM8150_UFSPHY_HS_B_SERDES[..]);
            assert!(cfg.tbls_hs_g4.serdes.is_empty());
            assert_eq!(cfg.tbls_hs_g4.pcs, &SM8150_UFSPHY_HS_G4_PCS[..]);
        }
    }

    #[test]
    fn hs_g4_tables_per_soc() {
        assert_eq!(SM8150_UFSPHY_CFG.tbls_hs_g4.tx, &[InitTbl::cfg(QSERDES_V4_TX_LANE_MODE_1, 0x75)][..]);
        assert_eq!(SM8250_UFSPHY_CFG.tbls_hs_g4.tx, &[InitTbl::cfg(QSERDES_V4_TX_LANE_MODE_1, 0xe5)][..]);
        assert_eq!(SC7280_UFSPHY_CFG.tbls_hs_g4.tx, SM8250_UFSPHY_CFG.tbls_hs_g4.tx);

        assert!(has(SM8150_UFSPHY_CFG.tbls_hs_g4.rx, QSERDES_V4_RX_RX_MODE_00_HIGH4, 0x6c));
        assert!(has(SM8250_UFSPHY_CFG.tbls_hs_g4.rx, QSERDES_V4_RX_RX_MODE_00_HIGH4, 0x2c));
        assert_eq!(SC7280_UFSPHY_CFG.tbls_hs_g4.rx.last(), Some(&InitTbl::cfg(QSERDES_V4_RX_GM_CAL, 0x0f)));
    }

    #[test]
    fn sc7280_lane_tuning() {
        assert!(has(&SC7280_UFSPHY_TX, QSERDES_V4_TX_LANE_MODE_1, 0x35));
        assert!(has(&SM8150_UFSPHY_TX, QSERDES_V4_TX_LANE_MODE_1, 0x05));
        assert_eq!(SC7280_UFSPHY_RX.last(), Some(&InitTbl::cfg(QSERDES_V4_RX_DCC_CTRL1, 0x0c)));
        assert!(has(&SC7280_UFSPHY_PCS, QPHY_V4_PCS_UFS_TX_HSGEAR_CAPABILITY, 0x03));
        assert_eq!(SC7280_UFSPHY_PCS[..7], SM8150_UFSPHY_PCS[..]);
    }
}
