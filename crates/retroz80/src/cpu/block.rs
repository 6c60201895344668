//! Block transfer, search and IO instructions (`ED A0..BB`).
//!
//! The opcode bits encode the whole family:
//! - bits 0-1: LD, CP, IN, OUT
//! - bit 3: decrement HL (and DE) instead of incrementing
//! - bit 4: repeat until the counter runs out (or, for CP, a match)
//!
//! A repeating form runs every iteration inside one `step` call. Each extra
//! pass reuses the decoded primitive instead of fetching the opcode again,
//! so a copy that overwrites its own instruction bytes still finishes as
//! the instruction that was decoded. R advances by two per extra pass, the
//! same as a re-fetch of `ED xx`.

use super::exec::{Exec, Flow};
use super::{Bus, Cpu, Flags};

impl Cpu {
    pub(super) fn exec_block<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Exec {
        debug_assert_eq!(opcode & 0xE4, 0xA0);

        let delta: u16 = if opcode & 0x08 != 0 { 0xFFFF } else { 0x0001 };
        let repeat = opcode & 0x10 != 0;

        let primitive: fn(&mut Self, &mut B, u16) -> bool = match opcode & 0x03 {
            0 => Self::block_ld,
            1 => Self::block_cp,
            2 => Self::block_in,
            _ => Self::block_out,
        };

        let mut again = primitive(self, bus, delta);
        while repeat && again {
            self.regs.r = self.regs.r.wrapping_add(2);
            again = primitive(self, bus, delta);
        }
        Ok(Flow::Next)
    }

    /// LDI/LDD. Returns whether a repeating form would continue.
    fn block_ld<B: Bus>(&mut self, bus: &mut B, delta: u16) -> bool {
        let hl = self.regs.hl();
        let de = self.regs.de();
        let value = bus.read8(hl);
        bus.write8(de, value);

        self.regs.set_hl(hl.wrapping_add(delta));
        self.regs.set_de(de.wrapping_add(delta));
        let bc = self.regs.bc().wrapping_sub(1);
        self.regs.set_bc(bc);

        self.set_flag(Flags::H, false);
        self.set_flag(Flags::PV, bc != 0);
        self.set_flag(Flags::N, false);
        bc != 0
    }

    /// CPI/CPD. A repeating form stops on a match or when BC runs out.
    fn block_cp<B: Bus>(&mut self, bus: &mut B, delta: u16) -> bool {
        let hl = self.regs.hl();
        let value = bus.read8(hl);
        let a = self.regs.a;
        let result = a.wrapping_sub(value);

        self.regs.set_hl(hl.wrapping_add(delta));
        let bc = self.regs.bc().wrapping_sub(1);
        self.regs.set_bc(bc);

        self.set_sz(result);
        self.set_flag(Flags::H, (a & 0x0F) < (value & 0x0F));
        self.set_flag(Flags::PV, bc != 0);
        self.set_flag(Flags::N, true);
        bc != 0 && result != 0
    }

    /// INI/IND. The port is read with the counter still undecremented.
    fn block_in<B: Bus>(&mut self, bus: &mut B, delta: u16) -> bool {
        let value = bus.io_read(self.regs.bc());
        let hl = self.regs.hl();
        bus.write8(hl, value);
        self.regs.set_hl(hl.wrapping_add(delta));
        self.count_down_b()
    }

    /// OUTI/OUTD. B is decremented before it goes out on the port address.
    fn block_out<B: Bus>(&mut self, bus: &mut B, delta: u16) -> bool {
        let hl = self.regs.hl();
        let value = bus.read8(hl);
        let again = self.count_down_b();
        bus.io_write(self.regs.bc(), value);
        self.regs.set_hl(hl.wrapping_add(delta));
        again
    }

    fn count_down_b(&mut self) -> bool {
        self.regs.b = self.regs.b.wrapping_sub(1);
        let b = self.regs.b;
        self.set_flag(Flags::Z, b == 0);
        self.set_flag(Flags::N, true);
        b != 0
    }
}
