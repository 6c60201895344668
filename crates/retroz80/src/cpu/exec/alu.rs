use crate::cpu::addressing::IndexMode;
use crate::cpu::{Bus, Cpu};

use super::{Exec, Flow};

impl Cpu {
    /// `80..BF`: ADD, ADC, SUB, SBC, AND, XOR, OR, CP against `r`, `(HL)`
    /// or `(IX+d)`.
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let src = self.resolve_r(bus, opcode, mode);
        let value = self.read_operand(bus, src);
        self.alu_op((opcode >> 3) & 0x07, value);
        Ok(Flow::Next)
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));

        let src = self.resolve_immediate(bus);
        let value = self.read_operand(bus, src);
        self.alu_op((opcode >> 3) & 0x07, value);
        Ok(Flow::Next)
    }

    pub(super) fn exec_add16(&mut self, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let base = self.index_reg(mode);
        let value = self.read_rp(opcode >> 4, mode);
        let result = self.alu_add16(base, value);
        self.set_index_reg(mode, result);
        Ok(Flow::Next)
    }

    pub(super) fn exec_accumulator_misc(&mut self, opcode: u8) -> Exec {
        match opcode {
            0x27 => self.alu_daa(),
            0x2F => self.alu_cpl(),
            0x37 => self.alu_scf(),
            0x3F => self.alu_ccf(),
            _ => unreachable!(),
        }
        Ok(Flow::Next)
    }
}
