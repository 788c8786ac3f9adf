///! ICS307 behind the board FPGA

use log::debug;

use crate::{ config::*, errors::*, mmio::Mmio, refin::*, register::* };


/// ICS307-02 clock chip programmed through three FPGA byte registers
/// per output (cw0, cw1, cw2 at consecutive addresses).
pub struct Ics307<M> {
    bus: M,
    ref_in: RefIn,
    cfg: Ics307Config,
    sclk: usize,
    #[cfg(feature = "dynamic-ddr-clk")]
    dclk: Option<usize>,
}


impl<M> Ics307<M>
where M: Mmio,
{
    /// Creates the device.
    ///
    /// `bus` - register access
    /// `ref_in` - board reference clock
    /// `sclk` - address of the system clock control bytes
    pub fn new(
        bus: M,
        ref_in: RefIn,
        sclk: usize,
    ) -> Self {
        Ics307 {
            bus,
            ref_in,
            cfg: Ics307Config::default(),
            sclk,
            #[cfg(feature = "dynamic-ddr-clk")]
            dclk: None,
        }
    }

    /// Address of the DDR clock control bytes
    #[cfg(feature = "dynamic-ddr-clk")]
    pub fn with_ddr_clk(self: Self, dclk: usize) -> Self {
        Ics307 { dclk: Some(dclk), ..self }
    }

    /// Mode bits and VCO range used by `set_sys_clk_khz`
    pub fn with_config(self: Self, cfg: Ics307Config) -> Self {
        Ics307 { cfg, ..self }
    }

    /// Release the bus
    pub fn free(self: Self) -> M {
        self.bus
    }

    fn read_bytes(self: &mut Self, base: usize) -> ControlBytes {
        ControlBytes {
            cw0: self.bus.read8(base),
            cw1: self.bus.read8(base + 1),
            cw2: self.bus.read8(base + 2),
        }
    }

    /// Currently programmed system clock, Hz
    pub fn sys_clk_hz(self: &mut Self) -> u64 {
        let sclk = self.sclk;
        self.read_bytes(sclk).f_out_hz(&self.ref_in)
    }

    /// Currently programmed DDR clock, Hz
    ///
    /// `UnsupportedClock` until the DDR clock address is set with `with_ddr_clk`.
    #[cfg(feature = "dynamic-ddr-clk")]
    pub fn ddr_clk_hz(self: &mut Self) -> Result<u64, Error> {
        let dclk = self.dclk.ok_or(Error::UnsupportedClock)?;
        Ok(self.read_bytes(dclk).f_out_hz(&self.ref_in))
    }

    /// Program the system clock to the first acceptable setting
    /// for `khz` in divider search order. Returns the word that was written.
    pub fn set_sys_clk_khz(self: &mut Self, khz: u32) -> Result<ControlWord, Error> {
        let cw = ControlWord::newf(&self.ref_in, khz, &self.cfg)?;
        let bytes = cw.to_bytes().to_array();

        debug!("ICS307: SYSCLK {} kHz, CW[0-2]: {:02X?}", khz, bytes);

        for (i, b) in bytes.iter().enumerate() {
            self.bus.write8(self.sclk + i, *b);
        }
        Ok(cw)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::mmio::fake::*;

    const SCLK: usize = 0x1000;

    fn dev(bus: FakeMmio) -> Ics307<FakeMmio> {
        Ics307::new(bus, RefIn::new(66_666_666).unwrap(), SCLK)
    }

    #[test]
    fn reads_sys_clk_from_fpga() {
        let bus = FakeMmio::new()
            .preset(SCLK, 0x21)
            .preset(SCLK + 1, 0x02)
            .preset(SCLK + 2, 0x06);
        let mut d = dev(bus);
        assert_eq!(d.sys_clk_hz(), 99_999_999);
    }

    #[test]
    fn programs_sys_clk_bytes_in_order() {
        let mut d = dev(FakeMmio::new());
        let cw = d.set_sys_clk_khz(100_000).unwrap();
        assert_eq!(cw.w, 2_163_206);

        let bus = d.free();
        assert_eq!(bus.writes8(), vec![(SCLK, 0x21), (SCLK + 1, 0x02), (SCLK + 2, 0x06)]);
    }

    #[test]
    fn programmed_clock_reads_back() {
        let mut d = dev(FakeMmio::new());
        d.set_sys_clk_khz(125_000).unwrap();
        assert_eq!(d.sys_clk_hz() / 1000, 124_999);
    }

    #[test]
    fn failed_solve_leaves_hardware_alone() {
        let mut d = dev(FakeMmio::new());
        assert_eq!(d.set_sys_clk_khz(133_333), Err(Error::NoSolution));
        assert_eq!(d.set_sys_clk_khz(0), Err(Error::InvalidOutputFrequency));
        assert!(d.free().writes8().is_empty());
    }

    #[test]
    fn config_mode_bits_reach_cw0() {
        let cfg = Ics307Config::default()
            .set(OutputMode::Cmos)
            .set(Clk2Function::Off)
            .set(CrystalLoad(3));
        let mut d = dev(FakeMmio::new()).with_config(cfg);
        d.set_sys_clk_khz(100_000).unwrap();
        let bus = d.free();
        assert_eq!(bus.reg(SCLK), 0b11_0_10_001);
    }

    #[cfg(feature = "dynamic-ddr-clk")]
    #[test]
    fn reads_ddr_clk() {
        let bus = FakeMmio::new()
            .preset(0x2000, 0x21)
            .preset(0x2001, 0x02)
            .preset(0x2002, 0x06);
        let mut d = dev(bus).with_ddr_clk(0x2000);
        assert_eq!(d.ddr_clk_hz(), Ok(99_999_999));
    }

    #[cfg(feature = "dynamic-ddr-clk")]
    #[test]
    fn ddr_clk_without_address() {
        let mut d = dev(FakeMmio::new());
        assert_eq!(d.ddr_clk_hz(), Err(Error::UnsupportedClock));
        assert!(d.free().log.is_empty());
    }
}
