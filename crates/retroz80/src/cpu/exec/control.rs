use crate::cpu::{Bus, Cpu};

use super::{Exec, Flow};

impl Cpu {
    pub(super) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        // JR only has NZ, Z, NC, C.
        let cc = (opcode >> 3) & 0x03;
        self.jr(bus, self.condition(cc));
        Ok(Flow::Next)
    }

    pub(super) fn exec_djnz<B: Bus>(&mut self, bus: &mut B) -> Exec {
        self.regs.b = self.regs.b.wrapping_sub(1);
        let taken = self.regs.b != 0;
        self.jr(bus, taken);
        Ok(Flow::Next)
    }

    pub(super) fn exec_jp_nn<B: Bus>(&mut self, bus: &mut B) -> Exec {
        self.jp_cond(bus, true);
        Ok(Flow::Next)
    }

    pub(super) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert!(opcode & 0xC7 == 0xC2);
        self.jp_cond(bus, self.condition(opcode >> 3));
        Ok(Flow::Next)
    }

    pub(super) fn exec_call_nn<B: Bus>(&mut self, bus: &mut B) -> Exec {
        self.call_cond(bus, true);
        Ok(Flow::Next)
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert!(opcode & 0xC7 == 0xC4);
        self.call_cond(bus, self.condition(opcode >> 3));
        Ok(Flow::Next)
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) -> Exec {
        self.ret_cond(bus, true);
        Ok(Flow::Next)
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert!(opcode & 0xC7 == 0xC0);
        self.ret_cond(bus, self.condition(opcode >> 3));
        Ok(Flow::Next)
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert!(opcode & 0xC7 == 0xC7);
        let ret = self.regs.pc;
        self.push16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        Ok(Flow::Next)
    }
}
