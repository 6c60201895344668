use crate::error::CpuError;

use super::exec::Flow;
use super::{Bus, Cpu, Step};

impl Cpu {
    /// Execute a single instruction.
    ///
    /// A repeating block instruction (LDIR, CPDR, OTIR, ...) runs all of its
    /// iterations before this returns. Once HALT has executed the CPU stays
    /// put and every further call returns [`Step::Halted`] until
    /// [`Cpu::reset`].
    ///
    /// An opcode without a handler leaves the CPU exactly as it was and
    /// returns [`CpuError::UnimplementedOpcode`].
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<Step, CpuError> {
        if self.halted {
            return Ok(Step::Halted);
        }

        let pc = self.regs.pc;
        let r = self.regs.r;

        log::trace!(
            "PC={:04X} AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X}",
            pc,
            self.regs.af(),
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl(),
            self.regs.sp
        );

        match self.execute(bus) {
            Ok(Flow::Next) => Ok(Step::Continue),
            Ok(Flow::Halt) => {
                self.halted = true;
                Ok(Step::Halted)
            }
            Err(opcode) => {
                self.regs.pc = pc;
                self.regs.r = r;
                log::error!("Unimplemented opcode {opcode} at PC=0x{pc:04X}");
                Err(CpuError::UnimplementedOpcode { pc, opcode })
            }
        }
    }
}
