use crate::cpu::{Bus, Cpu, Step};
use crate::error::CpuError;
use crate::memory::Memory;


/// A Z80 bound to its bus and a start address.
///
/// This is the host-facing entry point: it owns the CPU and the memory,
/// steps instructions, and hands out both halves for inspection or
/// patching between steps.
#[derive(Clone, Debug)]
pub struct Z80<B: Bus = Memory> {
    cpu: Cpu,
    bus: B,
    start_pc: u16,
}

impl<B: Bus> Z80<B> {
    /// Bind a freshly reset CPU to `bus`, with execution starting at
    /// `start_pc`.
    pub fn new(bus: B, start_pc: u16) -> Self {
        Self {
            cpu: Cpu::with_pc(start_pc),
            bus,
            start_pc,
        }
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<Step, CpuError> {
        self.cpu.step(&mut self.bus)
    }

    /// Reset the CPU and put PC back on the start address. Memory is left
    /// alone; use [`Memory::reset`] to clear it.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cpu.regs.pc = self.start_pc;
    }

    /// Step until HALT, giving up after `max_steps` instructions.
    ///
    /// Returns the number of steps taken, counting the HALT itself. A CPU
    /// that is already halted returns `Ok(0)`.
    pub fn run_until_halt(&mut self, max_steps: u64) -> Result<u64, CpuError> {
        if self.cpu.halted {
            return Ok(0);
        }

        for steps in 1..=max_steps {
            if self.step()? == Step::Halted {
                log::debug!("halted at PC=0x{:04X} after {steps} steps", self.cpu.regs.pc);
                return Ok(steps);
            }
        }

        Err(CpuError::StepLimit { steps: max_steps })
    }

    pub fn start_pc(&self) -> u16 {
        self.start_pc
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn memory(&self) -> &B {
        &self.bus
    }

    pub fn memory_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give the bus back, dropping the CPU.
    pub fn into_memory(self) -> B {
        self.bus
    }
}
