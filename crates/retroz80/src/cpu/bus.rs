/// Abstraction over the Z80 buses (memory and IO).
///
/// Memory accesses are mandatory. Port IO defaults to an open bus: reads
/// return 0xFF and writes go nowhere, so plain memory-only hosts need not
/// care about `IN`/`OUT`.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Read from an IO port. The full 16-bit address bus is passed; most
    /// devices only decode the low byte.
    fn io_read(&mut self, _port: u16) -> u8 {
        0xFF
    }

    /// Write to an IO port.
    fn io_write(&mut self, _port: u16, _value: u8) {}
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn read8(&mut self, addr: u16) -> u8 {
        (**self).read8(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        (**self).write8(addr, value)
    }

    fn io_read(&mut self, port: u16) -> u8 {
        (**self).io_read(port)
    }

    fn io_write(&mut self, port: u16, value: u8) {
        (**self).io_write(port, value)
    }
}
