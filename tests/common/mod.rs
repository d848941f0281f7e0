//! Shared helpers for the integration tests.
//!
//! Firmware is read-only, so programs are baked into the image before the
//! CPU is built. Every image is NOP-filled with the reset vector at `$C000`,
//! the NMI vector at [`NMI_HANDLER`] and the IRQ/BRK vector at [`IRQ_HANDLER`].

#![allow(dead_code)]

use drive6502::{Drive1541Memory, Firmware, CPU, FIRMWARE_BASE, FIRMWARE_SIZE};

/// Where test programs start.
pub const PROGRAM_START: u16 = 0xC000;

/// NMI handler address used by every test image.
pub const NMI_HANDLER: u16 = 0xE000;

/// IRQ/BRK handler address used by every test image.
pub const IRQ_HANDLER: u16 = 0xE100;

/// Builds a firmware image byte by byte.
pub struct FirmwareBuilder {
    image: Vec<u8>,
}

impl FirmwareBuilder {
    pub fn new() -> Self {
        FirmwareBuilder {
            image: vec![0xEA; FIRMWARE_SIZE],
        }
        .vector(0xFFFA, NMI_HANDLER)
        .vector(0xFFFC, PROGRAM_START)
        .vector(0xFFFE, IRQ_HANDLER)
    }

    /// Places `bytes` at CPU address `addr` (must be in `$C000-$FFFF`).
    pub fn at(mut self, addr: u16, bytes: &[u8]) -> Self {
        let offset = (addr - FIRMWARE_BASE) as usize;
        self.image[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    /// Places the main program at `$C000`.
    pub fn program(self, bytes: &[u8]) -> Self {
        self.at(PROGRAM_START, bytes)
    }

    /// Points the vector at `addr` to `target`.
    pub fn vector(self, addr: u16, target: u16) -> Self {
        self.at(addr, &target.to_le_bytes())
    }

    pub fn build(self) -> Firmware {
        Firmware::from_bytes(&self.image).unwrap()
    }

    /// Builds the image into a freshly reset drive CPU.
    pub fn cpu(self) -> CPU<Drive1541Memory> {
        init_logging();
        CPU::new(Drive1541Memory::new(self.build()))
    }
}

/// A drive CPU with `program` at `$C000` and PC on its first byte.
pub fn setup_cpu(program: &[u8]) -> CPU<Drive1541Memory> {
    FirmwareBuilder::new().program(program).cpu()
}

/// Routes `log` output through the test harness. Set `RUST_LOG=trace` to see
/// every executed instruction.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
