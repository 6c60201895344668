use crate::error::{Opcode, Prefix};

use super::addressing::{IndexMode, Operand};
use super::exec::{Exec, Flow};
use super::{Bus, Cpu};

impl Cpu {
    /// Handle CB-prefixed instructions (rotates, shifts, BIT, RES, SET).
    ///
    /// Under an index prefix the layout is `DD CB d op`: the displacement
    /// comes before the final opcode and neither byte is an opcode fetch,
    /// so R is not bumped for them.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B, mode: IndexMode) -> Exec {
        let (operand, cb) = match mode {
            IndexMode::Hl => {
                let cb = self.fetch_opcode(bus);
                (self.resolve_r(bus, cb, IndexMode::Hl), cb)
            }
            IndexMode::Ix | IndexMode::Iy => {
                let operand = self.resolve_memory(bus, mode);
                let cb = self.fetch8(bus);
                // Register forms of DDCB/FDCB are undocumented.
                if cb & 0x07 != 6 {
                    return Err(Opcode::new(indexed_cb_prefix(mode), cb));
                }
                (operand, cb)
            }
        };

        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;

        match x {
            // Rotates and shifts.
            0 => {
                let value = self.read_operand(bus, operand);
                match self.alu_shift(y, value) {
                    Some(result) => self.write_operand(bus, operand, result),
                    None => return Err(Opcode::new(cb_prefix(mode), cb)),
                }
            }
            // BIT y, r
            1 => {
                let value = self.read_operand(bus, operand);
                self.alu_bit(y, value);
            }
            // RES y, r
            2 => self.modify_bit(bus, operand, |value| value & !(1 << y)),
            // SET y, r
            _ => self.modify_bit(bus, operand, |value| value | (1 << y)),
        }

        Ok(Flow::Next)
    }

    #[inline]
    fn modify_bit<B: Bus>(&mut self, bus: &mut B, operand: Operand, f: impl FnOnce(u8) -> u8) {
        let value = self.read_operand(bus, operand);
        self.write_operand(bus, operand, f(value));
    }
}

fn cb_prefix(mode: IndexMode) -> Prefix {
    match mode {
        IndexMode::Hl => Prefix::Cb,
        IndexMode::Ix | IndexMode::Iy => indexed_cb_prefix(mode),
    }
}

fn indexed_cb_prefix(mode: IndexMode) -> Prefix {
    match mode {
        IndexMode::Iy => Prefix::FdCb,
        _ => Prefix::DdCb,
    }
}
