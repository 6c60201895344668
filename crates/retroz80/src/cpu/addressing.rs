//! Operand location resolution.
//!
//! Opcodes encode their operands as 3-bit register codes (`r`), 2-bit pair
//! codes (`rp`/`rp2`) or implicit absolute/immediate forms. The resolver
//! turns those encodings, together with the active index prefix, into an
//! [`Operand`] that the handlers read and write without caring which
//! addressing mode produced it.

use crate::error::Prefix;

use super::{Bus, Cpu};

/// Which 16-bit register stands in for HL in the current instruction.
///
/// This is the decode-time key selected by the `DD`/`FD` prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IndexMode {
    Hl,
    Ix,
    Iy,
}

impl IndexMode {
    pub(crate) fn prefix(self) -> Prefix {
        match self {
            IndexMode::Hl => Prefix::None,
            IndexMode::Ix => Prefix::Dd,
            IndexMode::Iy => Prefix::Fd,
        }
    }
}

/// 8-bit register named by an `r` code (everything but code 6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
}

impl Reg8 {
    /// Decode an `r` field. Code 6 is the memory operand and has no
    /// register.
    pub(crate) fn from_code(code: u8) -> Option<Self> {
        match code & 0x07 {
            0 => Some(Reg8::B),
            1 => Some(Reg8::C),
            2 => Some(Reg8::D),
            3 => Some(Reg8::E),
            4 => Some(Reg8::H),
            5 => Some(Reg8::L),
            7 => Some(Reg8::A),
            _ => None,
        }
    }
}

/// Register pair usable as a memory pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pair {
    Bc,
    De,
    Hl,
}

/// A resolved operand location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operand {
    /// Register-direct.
    Register(Reg8),
    /// Memory at the address held in a register pair.
    Indirect(Pair),
    /// Memory at IX/IY plus a signed displacement. The base is captured
    /// when the operand is resolved.
    Indexed { base: u16, displacement: i8 },
    /// Memory at an absolute address taken from the instruction stream.
    Extended(u16),
    /// A byte taken from the instruction stream.
    Immediate(u8),
}

impl Cpu {
    #[inline]
    pub(super) fn reg8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::A => self.regs.a,
        }
    }

    #[inline]
    pub(super) fn set_reg8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn pair(&self, pair: Pair) -> u16 {
        match pair {
            Pair::Bc => self.regs.bc(),
            Pair::De => self.regs.de(),
            Pair::Hl => self.regs.hl(),
        }
    }

    /// HL, IX or IY depending on the active prefix.
    #[inline]
    pub(super) fn index_reg(&self, mode: IndexMode) -> u16 {
        match mode {
            IndexMode::Hl => self.regs.hl(),
            IndexMode::Ix => self.regs.ix,
            IndexMode::Iy => self.regs.iy,
        }
    }

    #[inline]
    pub(super) fn set_index_reg(&mut self, mode: IndexMode, value: u16) {
        match mode {
            IndexMode::Hl => self.regs.set_hl(value),
            IndexMode::Ix => self.regs.ix = value,
            IndexMode::Iy => self.regs.iy = value,
        }
    }

    /// Read a 16-bit register by its `rp` code: BC, DE, HL/IX/IY, SP.
    pub(super) fn read_rp(&self, code: u8, mode: IndexMode) -> u16 {
        match code & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.index_reg(mode),
            _ => self.regs.sp,
        }
    }

    pub(super) fn write_rp(&mut self, code: u8, mode: IndexMode, value: u16) {
        match code & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.set_index_reg(mode, value),
            _ => self.regs.sp = value,
        }
    }

    /// Read a 16-bit register by its `rp2` code (PUSH/POP): BC, DE,
    /// HL/IX/IY, AF.
    pub(super) fn read_rp2(&self, code: u8, mode: IndexMode) -> u16 {
        match code & 0x03 {
            3 => self.regs.af(),
            other => self.read_rp(other, mode),
        }
    }

    pub(super) fn write_rp2(&mut self, code: u8, mode: IndexMode, value: u16) {
        match code & 0x03 {
            3 => self.regs.set_af(value),
            other => self.write_rp(other, mode, value),
        }
    }

    /// Resolve an `r` field.
    ///
    /// Codes other than 6 are register-direct. Code 6 is `(HL)`, or
    /// `(IX+d)`/`(IY+d)` under an index prefix, in which case the
    /// displacement byte is consumed from the instruction stream here.
    pub(super) fn resolve_r<B: Bus>(&mut self, bus: &mut B, code: u8, mode: IndexMode) -> Operand {
        match Reg8::from_code(code) {
            Some(reg) => Operand::Register(reg),
            None => self.resolve_memory(bus, mode),
        }
    }

    /// Resolve the memory operand `(HL)`, `(IX+d)` or `(IY+d)`.
    pub(super) fn resolve_memory<B: Bus>(&mut self, bus: &mut B, mode: IndexMode) -> Operand {
        match mode {
            IndexMode::Hl => Operand::Indirect(Pair::Hl),
            IndexMode::Ix | IndexMode::Iy => {
                let displacement = self.fetch8(bus) as i8;
                Operand::Indexed {
                    base: self.index_reg(mode),
                    displacement,
                }
            }
        }
    }

    /// Read an absolute address operand (`(nn)`) from the instruction
    /// stream.
    pub(super) fn resolve_extended<B: Bus>(&mut self, bus: &mut B) -> Operand {
        Operand::Extended(self.fetch16(bus))
    }

    pub(super) fn resolve_immediate<B: Bus>(&mut self, bus: &mut B) -> Operand {
        Operand::Immediate(self.fetch8(bus))
    }

    /// Effective memory address of an operand, if it lives in memory.
    pub(super) fn operand_address(&self, operand: Operand) -> Option<u16> {
        match operand {
            Operand::Indirect(pair) => Some(self.pair(pair)),
            Operand::Indexed { base, displacement } => {
                Some(base.wrapping_add(displacement as i16 as u16))
            }
            Operand::Extended(addr) => Some(addr),
            Operand::Register(_) | Operand::Immediate(_) => None,
        }
    }

    pub(super) fn read_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> u8 {
        match operand {
            Operand::Register(reg) => self.reg8(reg),
            Operand::Immediate(value) => value,
            _ => match self.operand_address(operand) {
                Some(addr) => bus.read8(addr),
                None => unreachable!("memory operand without an address: {operand:?}"),
            },
        }
    }

    pub(super) fn write_operand<B: Bus>(&mut self, bus: &mut B, operand: Operand, value: u8) {
        match operand {
            Operand::Register(reg) => self.set_reg8(reg, value),
            Operand::Immediate(_) => {
                debug_assert!(false, "write to an immediate operand");
            }
            _ => {
                if let Some(addr) = self.operand_address(operand) {
                    bus.write8(addr, value);
                }
            }
        }
    }
}
