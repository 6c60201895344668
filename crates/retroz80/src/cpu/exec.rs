mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::error::Opcode;

use super::addressing::IndexMode;
use super::{Bus, Cpu};

/// What the engine does after a handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Flow {
    /// Instruction finished; PC points at the next one.
    Next,
    /// HALT was executed.
    Halt,
}

/// Handler result. The error carries the decoded key of an opcode that has
/// no handler.
pub(super) type Exec = Result<Flow, Opcode>;

/// True for the unprefixed opcodes that have a documented `DD`/`FD`
/// variant (everything that names HL, (HL) or the HL-based jumps and
/// stack operations).
fn has_index_form(opcode: u8) -> bool {
    matches!(
        opcode,
        0x09 | 0x19 | 0x29 | 0x39
            | 0x21 | 0x22 | 0x23 | 0x2A | 0x2B
            | 0x34 | 0x35 | 0x36
            | 0x46 | 0x4E | 0x56 | 0x5E | 0x66 | 0x6E | 0x7E
            | 0x70..=0x75 | 0x77
            | 0x86 | 0x8E | 0x96 | 0x9E | 0xA6 | 0xAE | 0xB6 | 0xBE
            | 0xE1 | 0xE3 | 0xE5 | 0xE9 | 0xF9
    )
}

impl Cpu {
    /// Fetch one instruction (including any prefixes) and execute it.
    ///
    /// `DD`/`FD` turn into an [`IndexMode`] that the handlers use in place
    /// of HL; `CB` and `ED` hand over to their own tables.
    ///
    /// An index prefix followed by another index prefix ends the step on
    /// its own with PC left on the next prefix. A run of prefixes therefore
    /// costs one step per byte and the last one decides the index register.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B) -> Exec {
        let mut opcode = self.fetch_opcode(bus);
        let mode = match opcode {
            0xDD => IndexMode::Ix,
            0xFD => IndexMode::Iy,
            _ => IndexMode::Hl,
        };
        if mode != IndexMode::Hl {
            if matches!(bus.read8(self.regs.pc), 0xDD | 0xFD) {
                return Ok(Flow::Next);
            }
            opcode = self.fetch_opcode(bus);
        }

        match (mode, opcode) {
            (_, 0xCB) => self.step_cb(bus, mode),
            (IndexMode::Hl, 0xED) => self.step_ed(bus),
            (IndexMode::Hl, _) => self.exec_opcode(bus, opcode, IndexMode::Hl),
            (_, _) if has_index_form(opcode) => self.exec_opcode(bus, opcode, mode),
            (_, _) => Err(Opcode::new(mode.prefix(), opcode)),
        }
    }

    /// Decode and execute an unprefixed (or index-substituted) opcode.
    fn exec_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8, mode: IndexMode) -> Exec {
        match opcode {
            // 0x00: NOP
            0x00 => Ok(Flow::Next),

            // LD rr, nn
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_nn(bus, opcode, mode),

            // LD (BC),A / LD (DE),A / LD A,(BC) / LD A,(DE)
            0x02 | 0x12 | 0x0A | 0x1A => self.exec_ld_pair_a(bus, opcode),

            // LD (nn),HL / LD HL,(nn)
            0x22 | 0x2A => self.exec_ld_nn_hl(bus, opcode, mode),

            // LD (nn),A / LD A,(nn)
            0x32 | 0x3A => self.exec_ld_nn_a(bus, opcode),

            // INC rr / DEC rr
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16(opcode, mode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16(opcode, mode),

            // INC r / DEC r
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                self.exec_inc8(bus, opcode, mode)
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                self.exec_dec8(bus, opcode, mode)
            }

            // LD r, n
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.exec_ld_r_n(bus, opcode, mode)
            }

            // RLCA / RRCA / RLA / RRA
            0x07 | 0x0F | 0x17 | 0x1F => {
                self.alu_rotate_a(opcode >> 3);
                Ok(Flow::Next)
            }

            // EX AF,AF'
            0x08 => {
                self.regs.ex_af();
                Ok(Flow::Next)
            }

            // ADD HL, rr
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add16(opcode, mode),

            // DJNZ e
            0x10 => self.exec_djnz(bus),

            // JR e / JR cc, e
            0x18 => {
                self.jr(bus, true);
                Ok(Flow::Next)
            }
            0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr_cc(bus, opcode),

            // DAA / CPL / SCF / CCF
            0x27 | 0x2F | 0x37 | 0x3F => self.exec_accumulator_misc(opcode),

            // HALT sits in the middle of the LD r,r' block.
            0x76 => Ok(Flow::Halt),

            // LD r, r'
            0x40..=0x7F => self.exec_ld_r_r(bus, opcode, mode),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP r
            0x80..=0xBF => self.exec_alu_reg_group(bus, opcode, mode),

            // RET cc / JP cc,nn / CALL cc,nn
            0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => self.exec_ret_cc(bus, opcode),
            0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => self.exec_jp_cc(bus, opcode),
            0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
                self.exec_call_cc(bus, opcode)
            }

            // POP rr / PUSH rr
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop(bus, opcode, mode),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push(bus, opcode, mode),

            // ALU A, n
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.exec_alu_imm(bus, opcode),

            // RST p
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(bus, opcode),

            // JP nn / CALL nn / RET
            0xC3 => self.exec_jp_nn(bus),
            0xCD => self.exec_call_nn(bus),
            0xC9 => self.exec_ret(bus),

            // OUT (n),A / IN A,(n)
            0xD3 => self.exec_out_n_a(bus),
            0xDB => self.exec_in_a_n(bus),

            // EXX / EX DE,HL / EX (SP),HL
            0xD9 => {
                self.regs.exx();
                Ok(Flow::Next)
            }
            0xEB => {
                self.regs.ex_de_hl();
                Ok(Flow::Next)
            }
            0xE3 => self.exec_ex_sp(bus, mode),

            // JP (HL) / LD SP,HL
            0xE9 => {
                self.regs.pc = self.index_reg(mode);
                Ok(Flow::Next)
            }
            0xF9 => {
                self.regs.sp = self.index_reg(mode);
                Ok(Flow::Next)
            }

            // DI / EI
            0xF3 => self.exec_di(),
            0xFB => self.exec_ei(),

            // Prefixes are consumed by `execute`; anything that reaches
            // here has no handler.
            _ => Err(Opcode::new(mode.prefix(), opcode)),
        }
    }
}
