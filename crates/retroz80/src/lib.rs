pub mod cpu;
pub mod error;
pub mod machine;
pub mod memory;

pub use cpu::{Bus, Cpu, Flags, InterruptMode, Registers, Step};
pub use error::{CpuError, Opcode, Prefix};
pub use machine::Z80;
pub use memory::{Memory, MemoryConfig};

/// Size of the Z80 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;
/// Power-on value of the stack pointer.
pub const RESET_SP: u16 = 0xFFFF;
