use crate::cpu::{Bus, Cpu};

use super::{Exec, Flow};

impl Cpu {
    pub(super) fn exec_di(&mut self) -> Exec {
        self.regs.iff1 = false;
        self.regs.iff2 = false;
        Ok(Flow::Next)
    }

    pub(super) fn exec_ei(&mut self) -> Exec {
        // Interrupts are not serviced, so there is no one-instruction
        // delay to model.
        self.regs.iff1 = true;
        self.regs.iff2 = true;
        Ok(Flow::Next)
    }

    /// IN A,(n): A supplies the upper half of the port address. Flags are
    /// untouched.
    pub(super) fn exec_in_a_n<B: Bus>(&mut self, bus: &mut B) -> Exec {
        let n = self.fetch8(bus);
        let port = u16::from_be_bytes([self.regs.a, n]);
        self.regs.a = bus.io_read(port);
        Ok(Flow::Next)
    }

    pub(super) fn exec_out_n_a<B: Bus>(&mut self, bus: &mut B) -> Exec {
        let n = self.fetch8(bus);
        let port = u16::from_be_bytes([self.regs.a, n]);
        bus.io_write(port, self.regs.a);
        Ok(Flow::Next)
    }
}
