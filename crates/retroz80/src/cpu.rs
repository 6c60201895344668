mod addressing;
mod alu;
mod block;
mod bus;
mod cb;
mod ed;
mod exec;
mod helpers;
mod init;
mod regs;
mod step;


pub use bus::Bus;
pub use regs::{Flags, InterruptMode, Registers};

/// Outcome of a successful [`Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The instruction completed and execution may continue.
    Continue,
    /// The CPU executed (or is sitting on) HALT.
    Halted,
}

/// Zilog Z80 CPU state.
///
/// The CPU does not own its memory; every call that touches the outside
/// world takes the bus as an argument so the host can inspect and patch
/// memory freely between steps.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Set by HALT. While set, `step` is a no-op that keeps reporting
    /// [`Step::Halted`] until `reset` clears it.
    pub halted: bool,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    /// Assign a single flag bit. `true` sets exactly that bit, `false`
    /// clears exactly that bit.
    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }
}
