//! Memory mapped register access

use embedded_hal::blocking::delay::DelayUs;

use crate::errors::*;


/// Register read/write primitives on absolute addresses.
pub trait Mmio {
    fn read8(&mut self, addr: usize) -> u8;
    fn write8(&mut self, addr: usize, val: u8);
    fn read32(&mut self, addr: usize) -> u32;
    fn write32(&mut self, addr: usize, val: u32);

    /// Read-modify-write OR, the register is read back so the write
    /// has landed before returning.
    #[inline]
    fn setbits32(&mut self, addr: usize, bits: u32) {
        let v = self.read32(addr);
        self.write32(addr, v | bits);
        self.read32(addr);
    }

    /// Read-modify-write AND NOT, read back like `setbits32`.
    #[inline]
    fn clrbits32(&mut self, addr: usize, bits: u32) {
        let v = self.read32(addr);
        self.write32(addr, v & !bits);
        self.read32(addr);
    }
}


/// Volatile pointer access to the physical address space.
pub struct Volatile {
    _private: (),
}

impl Volatile {
    /// # Safety
    /// Every address later passed to this accessor must be a valid,
    /// suitably aligned device register.
    pub unsafe fn new() -> Self {
        Volatile { _private: () }
    }
}

impl Mmio for Volatile {
    #[inline(always)]
    fn read8(&mut self, addr: usize) -> u8 {
        unsafe { core::ptr::read_volatile(addr as *const u8) }
    }

    #[inline(always)]
    fn write8(&mut self, addr: usize, val: u8) {
        unsafe { core::ptr::write_volatile(addr as *mut u8, val) }
    }

    #[inline(always)]
    fn read32(&mut self, addr: usize) -> u32 {
        unsafe { core::ptr::read_volatile(addr as *const u32) }
    }

    #[inline(always)]
    fn write32(&mut self, addr: usize, val: u32) {
        unsafe { core::ptr::write_volatile(addr as *mut u32, val) }
    }
}


/// Poll `check` once per microsecond until it stops returning
/// `WouldBlock`, for at most `timeout_us` microseconds.
pub fn poll_timeout<D, T, F>(delay: &mut D, timeout_us: u32, mut check: F) -> Result<T, Error>
where D: DelayUs<u32>,
      F: FnMut() -> nb::Result<T, Error>,
{
    let mut waited = 0;
    loop {
        match check() {
            Ok(v) => return Ok(v),
            Err(nb::Error::Other(e)) => return Err(e),
            Err(nb::Error::WouldBlock) if waited >= timeout_us => return Err(Error::Timeout),
            Err(nb::Error::WouldBlock) => {
                delay.delay_us(1);
                waited += 1;
            }
        }
    }
}

/// Wait until `read32(addr) & mask` is non-zero, returns the register value.
pub fn wait_set32<M, D>(bus: &mut M, delay: &mut D, addr: usize, mask: u32, timeout_us: u32) -> Result<u32, Error>
where M: Mmio,
      D: DelayUs<u32>,
{
    poll_timeout(delay, timeout_us, || {
        let v = bus.read32(addr);
        if v & mask != 0 { Ok(v) } else { Err(nb::Error::WouldBlock) }
    })
}

/// Wait until `read32(addr) & mask` is zero, returns the register value.
pub fn wait_clear32<M, D>(bus: &mut M, delay: &mut D, addr: usize, mask: u32, timeout_us: u32) -> Result<u32, Error>
where M: Mmio,
      D: DelayUs<u32>,
{
    poll_timeout(delay, timeout_us, || {
        let v = bus.read32(addr);
        if v & mask == 0 { Ok(v) } else { Err(nb::Error::WouldBlock) }
    })
}


/// Host side stand-ins for the bus and the delay source
#[cfg(test)]
pub(crate) mod fake {
    use std::boxed::Box;
    use std::collections::BTreeMap;
    use std::vec::Vec;

    use embedded_hal::blocking::delay::DelayUs;

    use super::Mmio;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub enum Access {
        Read8(usize),
        Write8(usize, u8),
        Read32(usize),
        Write32(usize, u32),
    }

    /// Called after every 32-bit write with (addr, value, registers)
    pub type Hook = Box<dyn FnMut(usize, u32, &mut BTreeMap<usize, u32>)>;

    /// Sparse register file, unwritten registers read as 0.
    #[derive(Default)]
    pub struct FakeMmio {
        pub regs: BTreeMap<usize, u32>,
        pub log: Vec<Access>,
        hooks: Vec<Hook>,
    }

    impl FakeMmio {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn preset(mut self, addr: usize, val: u32) -> Self {
            self.regs.insert(addr, val);
            self
        }

        pub fn hook<F>(mut self, f: F) -> Self
        where F: FnMut(usize, u32, &mut BTreeMap<usize, u32>) + 'static
        {
            self.hooks.push(Box::new(f));
            self
        }

        pub fn reg(&self, addr: usize) -> u32 {
            self.regs.get(&addr).copied().unwrap_or(0)
        }

        /// 32-bit writes in order
        pub fn writes32(&self) -> Vec<(usize, u32)> {
            self.log.iter().filter_map(|a| match *a {
                Access::Write32(addr, v) => Some((addr, v)),
                _ => None,
            }).collect()
        }

        pub fn writes8(&self) -> Vec<(usize, u8)> {
            self.log.iter().filter_map(|a| match *a {
                Access::Write8(addr, v) => Some((addr, v)),
                _ => None,
            }).collect()
        }
    }

    impl Mmio for FakeMmio {
        fn read8(&mut self, addr: usize) -> u8 {
            self.log.push(Access::Read8(addr));
            self.reg(addr) as u8
        }

        fn write8(&mut self, addr: usize, val: u8) {
            self.log.push(Access::Write8(addr, val));
            self.regs.insert(addr, val as u32);
        }

        fn read32(&mut self, addr: usize) -> u32 {
            self.log.push(Access::Read32(addr));
            self.reg(addr)
        }

        fn write32(&mut self, addr: usize, val: u32) {
            self.log.push(Access::Write32(addr, val));
            self.regs.insert(addr, val);
            for h in self.hooks.iter_mut() {
                h(addr, val, &mut self.regs);
            }
        }
    }

    /// Counts requested microseconds instead of sleeping.
    #[derive(Debug, Default)]
    pub struct FakeDelay {
        pub total_us: u64,
        pub calls: Vec<u32>,
    }

    impl DelayUs<u32> for FakeDelay {
        fn delay_us(&mut self, us: u32) {
            self.total_us += us as u64;
            self.calls.push(us);
        }
    }
}
