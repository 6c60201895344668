use crate::cpu::addressing::IndexMode;
use crate::cpu::{Bus, Cpu};

use super::{Exec, Flow};

impl Cpu {
    pub(super) fn exec_push<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = self.read_rp2(opcode >> 4, mode);
        self.push16(bus, value);
        Ok(Flow::Next)
    }

    pub(super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop16(bus);
        self.write_rp2(opcode >> 4, mode, value);
        Ok(Flow::Next)
    }

    /// EX (SP),HL / EX (SP),IX / EX (SP),IY. SP itself is unchanged.
    pub(super) fn exec_ex_sp<B: Bus>(&mut self, bus: &mut B, mode: IndexMode) -> Exec {
        let sp = self.regs.sp;
        let from_stack = self.read16(bus, sp);
        let value = self.index_reg(mode);
        self.write16(bus, sp, value);
        self.set_index_reg(mode, from_stack);
        Ok(Flow::Next)
    }
}
