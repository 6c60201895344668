use std::fmt;
use std::ops::RangeInclusive;

use typed_builder::TypedBuilder;

use crate::cpu::Bus;
use crate::MEMORY_SIZE;

/// Start of the region typically occupied by ROM (16 KiB at the bottom of
/// the address space, as on the ZX Spectrum).
pub const DEFAULT_ROM_START: u16 = 0x0000;
/// Last byte of the default ROM region.
pub const DEFAULT_ROM_END: u16 = 0x3FFF;

/// Construction parameters for [`Memory`].
#[derive(Clone, Debug, TypedBuilder)]
pub struct MemoryConfig {
    /// Inclusive address range that rejects CPU writes while protection
    /// is enabled.
    #[builder(default = DEFAULT_ROM_START..=DEFAULT_ROM_END)]
    pub protected_range: RangeInclusive<u16>,
    /// Whether the protected range is enforced from the start.
    #[builder(default = false)]
    pub protected: bool,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Flat 64 KiB Z80 address space with an optional write-protected window.
///
/// Writes that land inside the protected range while protection is
/// enabled are dropped. Reads are never restricted.
#[derive(Clone)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
    protected_range: RangeInclusive<u16>,
    protected: bool,
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("protected_range", &self.protected_range)
            .field("protected", &self.protected)
            .finish_non_exhaustive()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}

impl Memory {
    pub fn new(config: MemoryConfig) -> Self {
        let MemoryConfig {
            protected_range,
            protected,
        } = config;
        Self {
            data: [0; MEMORY_SIZE],
            protected_range,
            protected,
        }
    }

    /// Memory with the default ROM window, protected or not.
    pub fn with_rom_protection(protected: bool) -> Self {
        Self::new(MemoryConfig::builder().protected(protected).build())
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        if self.is_protected(addr) {
            log::debug!("dropped write of 0x{value:02X} to protected address 0x{addr:04X}");
            return;
        }
        self.data[addr as usize] = value;
    }

    /// Copy `bytes` into memory starting at `addr`, ignoring protection.
    ///
    /// This is the host-side path for placing ROM images and test programs;
    /// the copy wraps around at the top of the address space.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut target = addr;
        for &byte in bytes {
            self.data[target as usize] = byte;
            target = target.wrapping_add(1);
        }
    }

    /// Clear memory to zero.
    ///
    /// With `include_protected` false the bytes inside the protected range
    /// are kept, regardless of whether protection is currently enabled.
    pub fn reset(&mut self, include_protected: bool) {
        if include_protected {
            self.data = [0; MEMORY_SIZE];
            return;
        }
        for (addr, byte) in self.data.iter_mut().enumerate() {
            if !self.protected_range.contains(&(addr as u16)) {
                *byte = 0;
            }
        }
    }

    /// True when a write to `addr` would currently be dropped.
    #[inline]
    pub fn is_protected(&self, addr: u16) -> bool {
        self.protected && self.protected_range.contains(&addr)
    }

    pub fn protection_enabled(&self) -> bool {
        self.protected
    }

    pub fn set_protection(&mut self, enabled: bool) {
        self.protected = enabled;
    }

    pub fn protected_range(&self) -> RangeInclusive<u16> {
        self.protected_range.clone()
    }

    pub fn set_protected_range(&mut self, range: RangeInclusive<u16>) {
        self.protected_range = range;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Bus for Memory {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}
