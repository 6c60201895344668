use crate::error::{Opcode, Prefix};

use super::addressing::{IndexMode, Reg8};
use super::exec::{Exec, Flow};
use super::{Bus, Cpu, Flags, InterruptMode};

impl Cpu {
    /// Handle ED-prefixed instructions.
    ///
    /// Only the documented encodings are accepted; the mirrors of NEG,
    /// RETN and IM, plus `IN (C)`/`OUT (C),0`, are reported as
    /// unimplemented.
    pub(super) fn step_ed<B: Bus>(&mut self, bus: &mut B) -> Exec {
        let opcode = self.fetch_opcode(bus);
        let y = (opcode >> 3) & 0x07;

        match opcode {
            // IN r,(C)
            0x40 | 0x48 | 0x50 | 0x58 | 0x60 | 0x68 | 0x78 => {
                let value = bus.io_read(self.regs.bc());
                if let Some(reg) = Reg8::from_code(y) {
                    self.set_reg8(reg, value);
                }
                self.set_szp(value);
                self.set_flag(Flags::H, false);
                self.set_flag(Flags::N, false);
            }
            // OUT (C),r
            0x41 | 0x49 | 0x51 | 0x59 | 0x61 | 0x69 | 0x79 => {
                if let Some(reg) = Reg8::from_code(y) {
                    bus.io_write(self.regs.bc(), self.reg8(reg));
                }
            }

            // SBC HL,rr / ADC HL,rr
            0x42 | 0x52 | 0x62 | 0x72 => {
                let value = self.read_rp(y >> 1, IndexMode::Hl);
                self.alu_sbc16(value);
            }
            0x4A | 0x5A | 0x6A | 0x7A => {
                let value = self.read_rp(y >> 1, IndexMode::Hl);
                self.alu_adc16(value);
            }

            // LD (nn),rr / LD rr,(nn)
            0x43 | 0x53 | 0x63 | 0x73 => {
                let addr = self.fetch16(bus);
                let value = self.read_rp(y >> 1, IndexMode::Hl);
                self.write16(bus, addr, value);
            }
            0x4B | 0x5B | 0x6B | 0x7B => {
                let addr = self.fetch16(bus);
                let value = self.read16(bus, addr);
                self.write_rp(y >> 1, IndexMode::Hl, value);
            }

            0x44 => self.alu_neg(),

            // RETN restores IFF1 from IFF2; RETI only returns.
            0x45 => {
                self.regs.pc = self.pop16(bus);
                self.regs.iff1 = self.regs.iff2;
            }
            0x4D => self.regs.pc = self.pop16(bus),

            0x46 => self.regs.im = InterruptMode::Mode0,
            0x56 => self.regs.im = InterruptMode::Mode1,
            0x5E => self.regs.im = InterruptMode::Mode2,

            // LD I,A / LD R,A
            0x47 => self.regs.i = self.regs.a,
            0x4F => self.regs.r = self.regs.a,
            // LD A,I / LD A,R
            0x57 => self.ld_a_special(self.regs.i),
            0x5F => self.ld_a_special(self.regs.r),

            0x67 => self.exec_rrd(bus),
            0x6F => self.exec_rld(bus),

            0xA0..=0xA3 | 0xA8..=0xAB | 0xB0..=0xB3 | 0xB8..=0xBB => {
                return self.exec_block(bus, opcode);
            }

            _ => return Err(Opcode::new(Prefix::Ed, opcode)),
        }

        Ok(Flow::Next)
    }

    /// LD A,I and LD A,R copy IFF2 into P/V.
    fn ld_a_special(&mut self, value: u8) {
        self.regs.a = value;
        self.set_sz(value);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::PV, self.regs.iff2);
        self.set_flag(Flags::N, false);
    }

    /// Rotate the BCD digit pair formed by the low nibble of A and (HL) one
    /// nibble to the right.
    fn exec_rrd<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.regs.hl();
        let mem = bus.read8(addr);
        let a = self.regs.a;
        bus.write8(addr, (a << 4) | (mem >> 4));
        self.regs.a = (a & 0xF0) | (mem & 0x0F);
        self.digit_rotate_flags();
    }

    fn exec_rld<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.regs.hl();
        let mem = bus.read8(addr);
        let a = self.regs.a;
        bus.write8(addr, (mem << 4) | (a & 0x0F));
        self.regs.a = (a & 0xF0) | (mem >> 4);
        self.digit_rotate_flags();
    }

    fn digit_rotate_flags(&mut self) {
        let a = self.regs.a;
        self.set_szp(a);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
    }
}
