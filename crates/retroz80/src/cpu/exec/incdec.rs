use crate::cpu::addressing::IndexMode;
use crate::cpu::{Bus, Cpu};

use super::{Exec, Flow};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(
            opcode,
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C
        ));

        let operand = self.resolve_r(bus, opcode >> 3, mode);
        let value = self.read_operand(bus, operand);
        let result = self.alu_inc8(value);
        self.write_operand(bus, operand, result);
        Ok(Flow::Next)
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(
            opcode,
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D
        ));

        let operand = self.resolve_r(bus, opcode >> 3, mode);
        let value = self.read_operand(bus, operand);
        let result = self.alu_dec8(value);
        self.write_operand(bus, operand, result);
        Ok(Flow::Next)
    }

    // 16-bit INC/DEC leave the flags alone.
    pub(super) fn exec_inc16(&mut self, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let rp = opcode >> 4;
        let value = self.read_rp(rp, mode).wrapping_add(1);
        self.write_rp(rp, mode, value);
        Ok(Flow::Next)
    }

    pub(super) fn exec_dec16(&mut self, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let rp = opcode >> 4;
        let value = self.read_rp(rp, mode).wrapping_sub(1);
        self.write_rp(rp, mode, value);
        Ok(Flow::Next)
    }
}
