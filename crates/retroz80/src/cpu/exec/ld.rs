use crate::cpu::addressing::{IndexMode, Operand, Pair};
use crate::cpu::{Bus, Cpu};

use super::{Exec, Flow};

impl Cpu {
    pub(super) fn exec_ld_rr_nn<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch16(bus);
        self.write_rp(opcode >> 4, mode, value);
        Ok(Flow::Next)
    }

    pub(super) fn exec_ld_r_n<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        // For (IX+d) the displacement precedes the immediate byte.
        let dst = self.resolve_r(bus, opcode >> 3, mode);
        let value = self.fetch8(bus);
        self.write_operand(bus, dst, value);
        Ok(Flow::Next)
    }

    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        // At most one side is a memory operand, so at most one
        // displacement byte is consumed.
        let src = self.resolve_r(bus, opcode, mode);
        let dst = self.resolve_r(bus, opcode >> 3, mode);
        let value = self.read_operand(bus, src);
        self.write_operand(bus, dst, value);
        Ok(Flow::Next)
    }

    pub(super) fn exec_ld_pair_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x0A | 0x1A));

        let pair = if opcode & 0x10 == 0 { Pair::Bc } else { Pair::De };
        let operand = Operand::Indirect(pair);
        match opcode {
            0x02 | 0x12 => {
                let a = self.regs.a;
                self.write_operand(bus, operand, a);
            }
            0x0A | 0x1A => self.regs.a = self.read_operand(bus, operand),
            _ => unreachable!(),
        }
        Ok(Flow::Next)
    }

    pub(super) fn exec_ld_nn_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert!(matches!(opcode, 0x32 | 0x3A));

        let operand = self.resolve_extended(bus);
        match opcode {
            0x32 => {
                let a = self.regs.a;
                self.write_operand(bus, operand, a);
            }
            0x3A => self.regs.a = self.read_operand(bus, operand),
            _ => unreachable!(),
        }
        Ok(Flow::Next)
    }

    pub(super) fn exec_ld_nn_hl<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(opcode, 0x22 | 0x2A));

        let addr = self.fetch16(bus);
        match opcode {
            0x22 => {
                let value = self.index_reg(mode);
                self.write16(bus, addr, value);
            }
            0x2A => {
                let value = self.read16(bus, addr);
                self.set_index_reg(mode, value);
            }
            _ => unreachable!(),
        }
        Ok(Flow::Next)
    }
}
