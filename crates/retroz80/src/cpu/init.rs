use crate::RESET_SP;

use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in its power-on state with PC at 0x0000.
    pub fn new() -> Self {
        Self::with_pc(0x0000)
    }

    /// Create a CPU in its power-on state with PC at `pc`.
    pub fn with_pc(pc: u16) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            halted: false,
        };
        cpu.reset();
        cpu.regs.pc = pc;
        cpu
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Every register (main and alternate bank, IX, IY, I, R) is zero, both
    /// interrupt flip-flops are clear, IM is 0, SP is 0xFFFF and PC is
    /// 0x0000. Callers that start somewhere else set `regs.pc` afterwards,
    /// which is what [`crate::Z80::reset`] does.
    pub fn reset(&mut self) {
        self.regs = Registers {
            sp: RESET_SP,
            ..Registers::default()
        };
        self.halted = false;
        log::debug!("Z80 reset");
    }
}
