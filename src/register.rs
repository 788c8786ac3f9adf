//! ICS307-02 control word and control bytes

/// Packed control word, software representation.
///
/// ```text
///  bits 0..=6    RDW  R6:R0  reference divider word, R - 2
///  bits 7..=15   VDW  V8:V0  VCO divider word, V - 8
///  bits 16..=18  S2:S0       output divider select
///  bits 19..=20  F1:F0       function of CLK2 output
///  bit  21       TTL         duty cycle / output level
///  bits 22..=23  C1:C0       internal crystal load capacitance
/// ```
#[derive(Debug,Copy,Clone,Default,PartialEq,Eq)]
pub struct ControlWord {
    /// Control word value
    pub w: u32,
}

impl ControlWord {

    /// Get control word bitfield value
    #[inline]
    pub fn get<F>(self: &Self) -> F
    where F: Sized + BitField + From<u32>
    {
        F::from(
            (self.w >> F::offset()) & F::mask()
        )
    }

    /// Update control word bitfield
    #[inline]
    pub fn set<F>(mut self: Self, f: F) -> Self
    where F: Sized + BitField + Into<u32>
    {
        let fbits = (f.into() & F::mask()) << F::offset();
        let rbits = self.w & (! ( F::mask() << F::offset() ));
        self.w = rbits | fbits;
        self
    }

    /// Bytes as they are programmed into the clock chip.
    #[inline]
    pub fn to_bytes(self: &Self) -> ControlBytes {
        ControlBytes::from(*self)
    }
}


/// Control bytes as programmed into the chip.
///
/// ```text
///  cw0:  C1 C0 TTL F1 F0 S2 S1 S0
///  cw1:  V8 V7 V6 V5 V4 V3 V2 V1
///  cw2:  V0 R6 R5 R4 R3 R2 R1 R0
/// ```
#[derive(Debug,Copy,Clone,Default,PartialEq,Eq)]
pub struct ControlBytes {
    pub cw0: u8,
    pub cw1: u8,
    pub cw2: u8,
}

impl ControlBytes {
    /// Reference Divider Word, without the +2 offset
    #[inline]
    pub fn rdw(self: &Self) -> u32 {
        (self.cw2 & 0x7F) as u32
    }

    /// VCO Divider Word, without the +8 offset
    #[inline]
    pub fn vdw(self: &Self) -> u32 {
        (((self.cw1 as u32) << 1) & 0x1FE) | (((self.cw2 as u32) >> 7) & 1)
    }

    /// Output divider select, S2:S0
    #[inline]
    pub fn od_select(self: &Self) -> usize {
        (self.cw0 & 0x7) as usize
    }

    /// Bytes in programming order
    #[inline]
    pub fn to_array(self: &Self) -> [u8; 3] {
        [self.cw0, self.cw1, self.cw2]
    }
}

impl From<ControlWord> for ControlBytes {
    fn from(cw: ControlWord) -> Self {
        let rdw : Rdw = cw.get();
        let vdw : Vdw = cw.get();
        ControlBytes {
            cw0: ((cw.w >> OdSelect::offset()) & 0xFF) as u8,
            cw1: ((vdw.0 >> 1) & 0xFF) as u8,
            cw2: (((vdw.0 & 1) << 7) as u8) | rdw.0,
        }
    }
}

impl From<ControlBytes> for ControlWord {
    fn from(cb: ControlBytes) -> Self {
        ControlWord {
            w: cb.rdw()
                | cb.vdw() << Vdw::offset()
                | (cb.cw0 as u32) << OdSelect::offset(),
        }
    }
}


/// Bit operations on the control word
pub trait BitField {
    /// Number of bits in the bit field
    fn num_bits() -> u8;

    /// Offset from 0
    fn offset() -> u8;

    #[inline]
    fn mask() -> u32 {
        !(0xFFFFFFFFu32 << Self::num_bits())
    }
}

/// Generate BitField implementation
macro_rules! gen_bitfield_impl {
	($n:ident, $nb:tt, $off:tt) => {
        impl BitField for $n {
            #[inline] fn num_bits() -> u8 { $nb }
            #[inline] fn offset() -> u8 { $off }
        }
    }
}

/// Small bitfield-encoded numbers boilerplate
macro_rules! gen_bitfield_struct {
	($(#[$meta:meta])*, $n:ident, $v:ty, $nb:tt, $off:tt) => {
        $(#[$meta])*
        #[derive(Debug,Copy,Clone,PartialEq,Eq)]
        pub struct $n(pub $v);

        gen_bitfield_impl!($n, $nb, $off);

        impl From<u32> for $n { #[inline] fn from(x: u32) -> Self { $n(x as $v) } }
        impl Into<u32> for $n { #[inline] fn into(self) -> u32 { self.0 as u32 } }
	};
}

/// Enum fields, every bit pattern of the field must name a variant
macro_rules! gen_bitfield_enum {
	($(#[$meta:meta])*, $n:ident, $nb:tt, $off:tt, [$($(#[$vmeta:meta])* $v:ident = $x:literal),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug,Copy,Clone,PartialEq,Eq)]
        pub enum $n {
            $($(#[$vmeta])* $v = $x),+
        }

        gen_bitfield_impl!($n, $nb, $off);

        impl From<u32> for $n {
            #[inline]
            fn from(x: u32) -> Self {
                match x & <$n as BitField>::mask() {
                    $($x => $n::$v,)+
                    _ => unreachable!("field value outside of mask"),
                }
            }
        }
        impl Into<u32> for $n { #[inline] fn into(self) -> u32 { self as u32 } }
    }
}


gen_bitfield_struct!(
    /// R6:R0, Reference Divider Word. Holds R - 2, R is 3 to 129.
    , Rdw, u8, 7, 0
);

gen_bitfield_struct!(
    /// V8:V0, VCO Divider Word. Holds V - 8, V is 12 to 519.
    , Vdw, u16, 9, 7
);

gen_bitfield_struct!(
    /// S2:S0, index into the output divider table
    , OdSelect, u8, 3, 16
);

gen_bitfield_enum!(
    /// F1:F0, function of the CLK2 output
    , Clk2Function, 2, 19, [
        /// CLK2 = reference clock
        Ref = 0,
        /// CLK2 = reference clock / 2
        RefDiv2 = 1,
        /// CLK2 driven low
        Off = 2,
        /// CLK2 = CLK1 / 2
        Clk1Div2 = 3,
    ]
);

gen_bitfield_enum!(
    /// TTL, output duty cycle is configured for TTL or CMOS levels
    , OutputMode, 1, 21, [
        Cmos = 0,
        Ttl = 1,
    ]
);

gen_bitfield_struct!(
    /// C1:C0, internal load capacitance for the crystal
    , CrystalLoad, u8, 2, 22
);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_fields() {
        let cw = ControlWord::default()
            .set(Rdw(6))
            .set(Vdw(4))
            .set(OdSelect(1))
            .set(OutputMode::Ttl);

        assert_eq!(cw.w, 6 | 4 << 7 | 1 << 16 | 1 << 21);

        let r : Rdw = cw.get();
        let v : Vdw = cw.get();
        let s : OdSelect = cw.get();
        let m : OutputMode = cw.get();
        let f : Clk2Function = cw.get();
        assert_eq!(r, Rdw(6));
        assert_eq!(v, Vdw(4));
        assert_eq!(s, OdSelect(1));
        assert_eq!(m, OutputMode::Ttl);
        assert_eq!(f, Clk2Function::Ref);
    }

    #[test]
    fn set_masks_out_of_range_values() {
        let cw = ControlWord::default().set(Rdw(0xFF));
        assert_eq!(cw.w, 0x7F);

        let cw = ControlWord { w: 0xFFFF_FFFF }.set(OdSelect(0));
        assert_eq!(cw.w, 0xFFF8_FFFF);
    }

    #[test]
    fn bytes_follow_chip_layout() {
        // VDW = 0x1A5 (V8..V1 = 0xD2, V0 = 1), RDW = 0x33, S = 5, F = 2, TTL, C = 1
        let cw = ControlWord::default()
            .set(Rdw(0x33))
            .set(Vdw(0x1A5))
            .set(OdSelect(5))
            .set(Clk2Function::Off)
            .set(OutputMode::Ttl)
            .set(CrystalLoad(1));

        let cb = cw.to_bytes();
        assert_eq!(cb.cw0, 0b01_1_10_101);
        assert_eq!(cb.cw1, 0xD2);
        assert_eq!(cb.cw2, 0x80 | 0x33);

        assert_eq!(cb.rdw(), 0x33);
        assert_eq!(cb.vdw(), 0x1A5);
        assert_eq!(cb.od_select(), 5);
        assert_eq!(ControlWord::from(cb), cw);
    }
}
