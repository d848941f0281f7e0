//! # Processor Status Register
//!
//! Bit layout of `P` (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, always 1)
//! - Bit 4: B (Break, only meaningful in pushed copies)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl StatusFlags {
    /// Power-on pattern: interrupts disabled, reserved bit set.
    pub const POWER_ON: Self = Self::INTERRUPT_DISABLE.union(Self::UNUSED);

    /// Flags restored from a byte pulled off the stack (PLP, RTI).
    ///
    /// B does not exist as a latch in the processor, so it is dropped; the
    /// reserved bit reads back as 1.
    pub fn from_pulled(value: u8) -> Self {
        (Self::from_bits_retain(value) - Self::BREAK) | Self::UNUSED
    }

    /// Byte pushed for PHP/BRK (`brk = true`) or IRQ/NMI (`brk = false`).
    pub fn to_pushed(self, brk: bool) -> u8 {
        let mut pushed = self | Self::UNUSED;
        pushed.set(Self::BREAK, brk);
        pushed.bits()
    }

    /// Updates Z and N from a result byte.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self::POWER_ON
    }
}
