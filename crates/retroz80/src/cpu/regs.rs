use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Bits 3 and 5 are not assigned by any documented instruction; they are
    /// retained as-is when F is loaded as part of AF.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// Carry out of (or borrow into) the top bit.
        const C = 0b0000_0001;
        /// Add/subtract: set by subtraction-family instructions.
        const N = 0b0000_0010;
        /// Parity (logical ops) or signed overflow (arithmetic ops).
        const PV = 0b0000_0100;
        /// Half carry out of bit 3 (bit 11 for 16-bit ops).
        const H = 0b0001_0000;
        /// Result was zero.
        const Z = 0b0100_0000;
        /// Copy of the result's sign bit.
        const S = 0b1000_0000;
    }
}

/// Maskable interrupt mode selected by `IM 0/1/2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterruptMode {
    #[default]
    Mode0,
    Mode1,
    Mode2,
}

/// The shadow AF'/BC'/DE'/HL' set. Only `ex_af` and `exx` touch it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct AltBank {
    pub(crate) af: u16,
    pub(crate) bc: u16,
    pub(crate) de: u16,
    pub(crate) hl: u16,
}

/// Z80 register file.
///
/// The 8-bit registers are the only storage for the main set; the
/// AF/BC/DE/HL pairs are views composed on every read and split on every
/// write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub ix: u16,
    pub iy: u16,
    pub sp: u16,
    pub pc: u16,
    /// Interrupt page address register.
    pub i: u8,
    /// Memory refresh register.
    pub r: u8,
    pub iff1: bool,
    pub iff2: bool,
    pub im: InterruptMode,
    pub(crate) alt: AltBank,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = Flags::from_bits_retain(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    // Read-only views of the alternate bank, for debuggers and tests.

    pub fn af_alt(&self) -> u16 {
        self.alt.af
    }

    pub fn bc_alt(&self) -> u16 {
        self.alt.bc
    }

    pub fn de_alt(&self) -> u16 {
        self.alt.de
    }

    pub fn hl_alt(&self) -> u16 {
        self.alt.hl
    }

    /// `EX AF,AF'`.
    pub fn ex_af(&mut self) {
        let af = self.af();
        self.set_af(self.alt.af);
        self.alt.af = af;
    }

    /// `EXX`: swap BC/DE/HL with their alternates. AF is untouched.
    pub fn exx(&mut self) {
        let (bc, de, hl) = (self.bc(), self.de(), self.hl());
        self.set_bc(self.alt.bc);
        self.set_de(self.alt.de);
        self.set_hl(self.alt.hl);
        self.alt.bc = bc;
        self.alt.de = de;
        self.alt.hl = hl;
    }

    /// `EX DE,HL`.
    pub fn ex_de_hl(&mut self) {
        let de = self.de();
        self.set_de(self.hl());
        self.set_hl(de);
    }
}
