use super::{Cpu, Flags};

#[inline]
fn parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}

impl Cpu {
    /// S and Z from an 8-bit result.
    #[inline]
    pub(super) fn set_sz(&mut self, result: u8) {
        self.set_flag(Flags::S, result & 0x80 != 0);
        self.set_flag(Flags::Z, result == 0);
    }

    /// S, Z and even parity into P/V from an 8-bit result.
    #[inline]
    pub(super) fn set_szp(&mut self, result: u8) {
        self.set_sz(result);
        self.set_flag(Flags::PV, parity(result));
    }

    #[inline]
    fn carry_in(&self, use_carry: bool) -> u8 {
        u8::from(use_carry && self.get_flag(Flags::C))
    }

    /// 8-bit add with optional carry. Sets all six flags and returns the
    /// result without storing it.
    fn add8(&mut self, a: u8, value: u8, use_carry: bool) -> u8 {
        let carry = self.carry_in(use_carry);
        let full = a as u16 + value as u16 + carry as u16;
        let result = full as u8;

        self.set_sz(result);
        self.set_flag(Flags::H, (a & 0x0F) + (value & 0x0F) + carry > 0x0F);
        self.set_flag(Flags::PV, (a ^ result) & (value ^ result) & 0x80 != 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, full > 0xFF);
        result
    }

    /// 8-bit subtract with optional borrow. Sets all six flags and returns
    /// the result without storing it.
    fn sub8(&mut self, a: u8, value: u8, use_carry: bool) -> u8 {
        let carry = self.carry_in(use_carry);
        let result = a.wrapping_sub(value).wrapping_sub(carry);

        self.set_sz(result);
        self.set_flag(Flags::H, (a & 0x0F) < (value & 0x0F) + carry);
        self.set_flag(Flags::PV, (a ^ value) & (a ^ result) & 0x80 != 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::C, (a as u16) < value as u16 + carry as u16);
        result
    }

    /// ADD A,v / ADC A,v.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.add8(self.regs.a, value, use_carry);
    }

    /// SUB v / SBC A,v.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.sub8(self.regs.a, value, use_carry);
    }

    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.set_szp(result);
        self.set_flag(Flags::H, true);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, false);
    }

    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.set_szp(result);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, false);
    }

    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.set_szp(result);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, false);
    }

    /// Compare A with `value`, setting flags as if `A - value` was
    /// performed. A itself is not modified.
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub8(self.regs.a, value, false);
    }

    /// Dispatch one of the eight accumulator operations encoded in bits
    /// 3-5 of the 0x80-0xBF and 0xC6-0xFE opcode groups.
    pub(super) fn alu_op(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// 8-bit increment used by INC r / INC (HL) / INC (IX+d).
    ///
    /// C is unaffected.
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_sz(result);
        self.set_flag(Flags::H, value & 0x0F == 0x0F);
        self.set_flag(Flags::PV, value == 0x7F);
        self.set_flag(Flags::N, false);
        result
    }

    /// 8-bit decrement used by DEC r / DEC (HL) / DEC (IX+d).
    ///
    /// C is unaffected.
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_sz(result);
        self.set_flag(Flags::H, value & 0x0F == 0x00);
        self.set_flag(Flags::PV, value == 0x80);
        self.set_flag(Flags::N, true);
        result
    }

    /// Decimal adjust accumulator after a BCD add or subtract.
    ///
    /// N is kept; it selects between the add and subtract corrections.
    pub(super) fn alu_daa(&mut self) {
        let a = self.regs.a;
        let subtract = self.get_flag(Flags::N);
        let mut correction = 0u8;
        let mut carry = self.get_flag(Flags::C);

        if self.get_flag(Flags::H) || a & 0x0F > 0x09 {
            correction |= 0x06;
        }
        if carry || a > 0x99 {
            correction |= 0x60;
            carry = true;
        }

        let (result, half) = if subtract {
            (
                a.wrapping_sub(correction),
                self.get_flag(Flags::H) && a & 0x0F < 0x06,
            )
        } else {
            (a.wrapping_add(correction), a & 0x0F > 0x09)
        };

        self.regs.a = result;
        self.set_szp(result);
        self.set_flag(Flags::H, half);
        self.set_flag(Flags::C, carry);
    }

    /// CPL: invert A. Sets H and N, leaves S/Z/PV/C.
    pub(super) fn alu_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::H, true);
        self.set_flag(Flags::N, true);
    }

    /// NEG: A = 0 - A.
    pub(super) fn alu_neg(&mut self) {
        self.regs.a = self.sub8(0, self.regs.a, false);
    }

    pub(super) fn alu_scf(&mut self) {
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, true);
    }

    /// CCF: H takes the previous carry, then carry is inverted.
    pub(super) fn alu_ccf(&mut self) {
        let carry = self.get_flag(Flags::C);
        self.set_flag(Flags::H, carry);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, !carry);
    }

    /// 16-bit add for `ADD HL/IX/IY,rr`.
    ///
    /// S, Z and P/V are unaffected; N is cleared; H comes from bit 11.
    pub(super) fn alu_add16(&mut self, base: u16, value: u16) -> u16 {
        let full = base as u32 + value as u32;
        self.set_flag(Flags::H, (base & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, full > 0xFFFF);
        full as u16
    }

    /// `ADC HL,rr`. All six flags.
    pub(super) fn alu_adc16(&mut self, value: u16) {
        let hl = self.regs.hl();
        let carry = self.carry_in(true) as u16;
        let full = hl as u32 + value as u32 + carry as u32;
        let result = full as u16;

        self.set_flag(Flags::S, result & 0x8000 != 0);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) + carry > 0x0FFF);
        self.set_flag(Flags::PV, (hl ^ result) & (value ^ result) & 0x8000 != 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, full > 0xFFFF);
        self.regs.set_hl(result);
    }

    /// `SBC HL,rr`. All six flags.
    pub(super) fn alu_sbc16(&mut self, value: u16) {
        let hl = self.regs.hl();
        let carry = self.carry_in(true) as u16;
        let result = hl.wrapping_sub(value).wrapping_sub(carry);

        self.set_flag(Flags::S, result & 0x8000 != 0);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, (hl & 0x0FFF) < (value & 0x0FFF) + carry);
        self.set_flag(Flags::PV, (hl ^ value) & (hl ^ result) & 0x8000 != 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::C, (hl as u32) < value as u32 + carry as u32);
        self.regs.set_hl(result);
    }

    /// Accumulator rotates RLCA/RRCA/RLA/RRA (opcode bits 3-4 select).
    ///
    /// Only H, N and C change; S, Z and P/V are kept.
    pub(super) fn alu_rotate_a(&mut self, kind: u8) {
        let a = self.regs.a;
        let carry_in = self.get_flag(Flags::C);
        let (result, carry_out) = match kind & 0x03 {
            0 => (a.rotate_left(1), a & 0x80 != 0),
            1 => (a.rotate_right(1), a & 0x01 != 0),
            2 => ((a << 1) | u8::from(carry_in), a & 0x80 != 0),
            _ => ((a >> 1) | (u8::from(carry_in) << 7), a & 0x01 != 0),
        };
        self.regs.a = result;
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, carry_out);
    }

    /// CB-table rotates and shifts: RLC, RRC, RL, RR, SLA, SRA, SRL.
    ///
    /// Returns `None` for operation 6, the undocumented SLL.
    pub(super) fn alu_shift(&mut self, operation: u8, value: u8) -> Option<u8> {
        let carry_in = self.get_flag(Flags::C);
        let (result, carry_out) = match operation & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => return None,
            _ => (value >> 1, value & 0x01 != 0),
        };
        self.set_szp(result);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::C, carry_out);
        Some(result)
    }

    /// BIT b,v. Z is the complement of the tested bit; C is kept.
    ///
    /// S mirrors a set bit 7 and P/V mirrors Z, which is what the silicon
    /// does for these officially "unknown" flags.
    pub(super) fn alu_bit(&mut self, bit: u8, value: u8) {
        let set = value & (1 << bit) != 0;
        self.set_flag(Flags::S, bit == 7 && set);
        self.set_flag(Flags::Z, !set);
        self.set_flag(Flags::H, true);
        self.set_flag(Flags::PV, !set);
        self.set_flag(Flags::N, false);
    }
}
