use std::fmt;

use thiserror::Error;

/// Opcode table an instruction was decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    None,
    Cb,
    Ed,
    Dd,
    Fd,
    DdCb,
    FdCb,
}

/// A fully decoded opcode key: the prefix selecting the table plus the
/// final opcode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub prefix: Prefix,
    pub code: u8,
}

impl Opcode {
    pub const fn new(prefix: Prefix, code: u8) -> Self {
        Self { prefix, code }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.prefix {
            Prefix::None => "",
            Prefix::Cb => "CB ",
            Prefix::Ed => "ED ",
            Prefix::Dd => "DD ",
            Prefix::Fd => "FD ",
            Prefix::DdCb => "DD CB ",
            Prefix::FdCb => "FD CB ",
        };
        write!(f, "{prefix}{:02X}", self.code)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CpuError {
    /// The decoder found no handler for this opcode. The CPU state is left
    /// exactly as it was before the step.
    #[error("unimplemented opcode {opcode} at PC=0x{pc:04X}")]
    UnimplementedOpcode { pc: u16, opcode: Opcode },

    /// `run_until_halt` gave up before the program executed HALT.
    #[error("program did not halt within {steps} steps")]
    StepLimit { steps: u64 },
}
