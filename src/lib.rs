#![cfg_attr(not(test), no_std)]

//! Boot-time clock bring-up drivers.
//!
//! * ICS307-02 serially programmable clock synthesizer, as found behind
//!   board FPGAs: divider search, control word packing and readback.
//! * Qualcomm QCM2290 global clock controller: RCG rates, gates, resets, GDSCs.
//! * Qualcomm QMP UFS PHY power sequencing, with SDM845, SM8150,
//!   SM8250, SC7280 and SM8550 init tables.

pub mod constants;
pub mod register;
pub mod errors;
pub mod refin;
pub mod config;
pub mod frequency;
pub mod device;
pub mod mmio;
pub mod gcc;
pub mod qcm2290;
pub mod qmp_ufs;
pub mod qmp_ufs_v3;
pub mod qmp_ufs_v4;
pub mod qmp_ufs_v6;
