//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! drive's memory map, and `DriveMemory`, the map itself.
//!
//! ## Drive Memory Map
//!
//! | Range | Backing | Access |
//! |---|---|---|
//! | `$0000`-`RAM_SIZE-1` | RAM | read/write |
//! | `RAM_SIZE`-`$BFFF` | none | reads `$FF`, writes dropped |
//! | `$C000`-`$FFFF` | firmware | read-only |
//!
//! The VIA register windows (`$1800-$180F`, `$1C00-$1C0F`) sit inside the
//! unmapped range: no peripherals are attached to this core.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads return the open-bus value
//! - Writes to firmware/unmapped regions are ignored

use crate::devices::{Firmware, Ram, STACK_PAGE, ZERO_PAGE};

/// Value read from an address nothing answers on.
pub const OPEN_BUS: u8 = 0xFF;

/// First firmware address.
pub const FIRMWARE_BASE: u16 = 0xC000;

/// Combines two bytes into a word (`hi:lo`).
#[inline]
pub const fn make_word(hi: u8, lo: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

/// Memory bus trait for CPU to read/write bytes.
///
/// Only `read` and `write` are required. The 16-bit, zero-page and stack
/// accessors have generic defaults built from them; backends with direct RAM
/// access override them as fast paths. Every accessor taking a `u8` offset
/// stays inside its 256-byte page.
///
/// # Examples
///
/// ```
/// use drive6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
///
/// let mut mem = RomRamMemory { ram: [0; 0x8000], rom: [0; 0x8000] };
/// mem.write_stack(0xFF, 0x42);
/// assert_eq!(mem.read(0x01FF), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only and unmapped addresses ignore
    /// the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read of `addr` and `addr + 1` (wrapping at `$FFFF`).
    fn read16(&self, addr: u16) -> u16 {
        make_word(self.read(addr.wrapping_add(1)), self.read(addr))
    }

    /// Reads from the zero page.
    fn read_zero_page(&self, offset: u8) -> u8 {
        self.read(ZERO_PAGE | offset as u16)
    }

    /// Little-endian pointer read from the zero page; `$FF` wraps to `$00`.
    fn read16_zero_page(&self, offset: u8) -> u16 {
        make_word(
            self.read_zero_page(offset.wrapping_add(1)),
            self.read_zero_page(offset),
        )
    }

    /// Writes to the zero page.
    fn write_zero_page(&mut self, offset: u8, value: u8) {
        self.write(ZERO_PAGE | offset as u16, value);
    }

    /// Reads from the stack page at `$0100 + offset`.
    fn read_stack(&self, offset: u8) -> u8 {
        self.read(STACK_PAGE | offset as u16)
    }

    /// Little-endian read from the stack page; `$01FF` wraps to `$0100`.
    fn read16_stack(&self, offset: u8) -> u16 {
        make_word(
            self.read_stack(offset.wrapping_add(1)),
            self.read_stack(offset),
        )
    }

    /// Writes to the stack page at `$0100 + offset`.
    fn write_stack(&mut self, offset: u8, value: u8) {
        self.write(STACK_PAGE | offset as u16, value);
    }

    /// Power-on clear of volatile memory. Called by `CPU::reset`.
    fn reset(&mut self) {}
}

/// Backing store an address resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// RAM, at the given index.
    Ram(u16),
    /// Firmware, at the given (unmasked) address.
    Firmware(u16),
    /// Nothing attached: open-bus reads, dropped writes.
    Unmapped,
}

/// The drive's memory map: `RAM_SIZE` bytes of RAM at `$0000`, the firmware
/// image at `$C000`, open bus everywhere else.
///
/// # Examples
///
/// ```
/// use drive6502::{Drive1541Memory, Firmware, MemoryBus};
///
/// let mut image = vec![0x00; 16384];
/// image[0x0000] = 0x4C;
/// let mut mem = Drive1541Memory::new(Firmware::from_bytes(&image).unwrap());
///
/// mem.write(0x0123, 0x42);
/// assert_eq!(mem.read(0x0123), 0x42);
///
/// // Unmapped: open bus
/// assert_eq!(mem.read(0x1800), 0xFF);
///
/// // Firmware is read-only
/// mem.write(0xC000, 0x00);
/// assert_eq!(mem.read(0xC000), 0x4C);
/// ```
#[derive(Clone, Debug)]
pub struct DriveMemory<const RAM_SIZE: usize = 2048> {
    ram: Ram<RAM_SIZE>,
    firmware: Firmware,
}

/// Memory map of the 2KB production drive.
pub type Drive1541Memory = DriveMemory<2048>;

impl<const RAM_SIZE: usize> DriveMemory<RAM_SIZE> {
    /// Builds the memory map around a loaded firmware image. RAM starts zeroed.
    pub fn new(firmware: Firmware) -> Self {
        Self {
            ram: Ram::new(),
            firmware,
        }
    }

    /// Resolves an address to its backing store.
    #[inline]
    pub fn region(addr: u16) -> Region {
        if (addr as usize) < RAM_SIZE {
            Region::Ram(addr)
        } else if addr >= FIRMWARE_BASE {
            Region::Firmware(addr)
        } else {
            Region::Unmapped
        }
    }

    /// The RAM array.
    pub fn ram(&self) -> &Ram<RAM_SIZE> {
        &self.ram
    }

    /// Mutable access to RAM, for hosts seeding buffers.
    pub fn ram_mut(&mut self) -> &mut Ram<RAM_SIZE> {
        &mut self.ram
    }

    /// The firmware image.
    pub fn firmware(&self) -> &Firmware {
        &self.firmware
    }
}

impl<const RAM_SIZE: usize> MemoryBus for DriveMemory<RAM_SIZE> {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        match Self::region(addr) {
            Region::Ram(index) => self.ram.read(index),
            Region::Firmware(address) => self.firmware.read(address),
            Region::Unmapped => OPEN_BUS,
        }
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        if let Region::Ram(index) = Self::region(addr) {
            self.ram.write(index, value);
        }
    }

    fn read16(&self, addr: u16) -> u16 {
        let lo_addr = addr as usize;
        if lo_addr + 1 < RAM_SIZE {
            make_word(self.ram.read(addr + 1), self.ram.read(addr))
        } else if addr >= FIRMWARE_BASE && addr < 0xFFFF {
            make_word(self.firmware.read(addr + 1), self.firmware.read(addr))
        } else {
            // Straddles a region edge or wraps past $FFFF
            make_word(self.read(addr.wrapping_add(1)), self.read(addr))
        }
    }

    #[inline]
    fn read_zero_page(&self, offset: u8) -> u8 {
        self.ram.read_zero_page(offset)
    }

    #[inline]
    fn read16_zero_page(&self, offset: u8) -> u16 {
        self.ram.read16_zero_page(offset)
    }

    #[inline]
    fn write_zero_page(&mut self, offset: u8, value: u8) {
        self.ram.write_zero_page(offset, value);
    }

    #[inline]
    fn read_stack(&self, offset: u8) -> u8 {
        self.ram.read_stack(offset)
    }

    #[inline]
    fn read16_stack(&self, offset: u8) -> u16 {
        self.ram.read16_stack(offset)
    }

    #[inline]
    fn write_stack(&mut self, offset: u8, value: u8) {
        self.ram.write_stack(offset, value);
    }

    fn reset(&mut self) {
        self.ram.clear();
    }
}
