use super::{Bus, Cpu, Flags};

impl Cpu {
    /// Opcode fetch (M1): read the byte at PC, advance PC and bump the
    /// refresh register.
    #[inline]
    pub(super) fn fetch_opcode<B: Bus>(&mut self, bus: &mut B) -> u8 {
        self.regs.r = self.regs.r.wrapping_add(1);
        self.fetch8(bus)
    }

    /// Operand fetch: read the byte at PC and advance PC.
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn read16<B: Bus>(&mut self, bus: &mut B, addr: u16) -> u16 {
        let lo = bus.read8(addr);
        let hi = bus.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn write16<B: Bus>(&mut self, bus: &mut B, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
    }

    #[inline]
    pub(super) fn push16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        // Stack grows downward; the high byte ends up at the higher address.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }

    /// Evaluate a 3-bit condition code: NZ, Z, NC, C, PO, PE, P, M.
    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc & 0x07 {
            0 => !self.get_flag(Flags::Z),
            1 => self.get_flag(Flags::Z),
            2 => !self.get_flag(Flags::C),
            3 => self.get_flag(Flags::C),
            4 => !self.get_flag(Flags::PV),
            5 => self.get_flag(Flags::PV),
            6 => !self.get_flag(Flags::S),
            _ => self.get_flag(Flags::S),
        }
    }

    /// Relative jump helper used by JR, JR cc and DJNZ.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand. It is always consumed, taken or not.
    pub(super) fn jr<B: Bus>(&mut self, bus: &mut B, cond: bool) {
        let offset = self.fetch8(bus) as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
        }
    }

    pub(super) fn jp_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) {
        let addr = self.fetch16(bus);
        if cond {
            self.regs.pc = addr;
        }
    }

    pub(super) fn call_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) {
        let addr = self.fetch16(bus);
        if cond {
            let ret = self.regs.pc;
            self.push16(bus, ret);
            self.regs.pc = addr;
        }
    }

    pub(super) fn ret_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) {
        if cond {
            self.regs.pc = self.pop16(bus);
        }
    }
}
