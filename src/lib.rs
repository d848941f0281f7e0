//! # Disk-Drive 6502 CPU Core
//!
//! An NMOS 6502/6510 emulator core for running unmodified disk-drive firmware
//! (a 16KB DOS image mapped at `$C000-$FFFF`) on a small host.
//!
//! This crate provides the processor state, a region-routed memory map with
//! page-wrapping zero-page and stack accessors, a table-driven opcode
//! metadata system, and a cycle-budgeted execution loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use drive6502::{Drive1541Memory, Firmware, CPU};
//!
//! // Build a firmware image: LDA #$42 / STA $10 / JMP $C004
//! let mut image = vec![0xEA; 16384];
//! image[..7].copy_from_slice(&[0xA9, 0x42, 0x85, 0x10, 0x4C, 0x04, 0xC0]);
//! image[0x3FFC] = 0x00; // Reset vector low byte
//! image[0x3FFD] = 0xC0; // Reset vector high byte (PC = $C000)
//!
//! let firmware = Firmware::from_bytes(&image).unwrap();
//! let mut cpu = CPU::new(Drive1541Memory::new(firmware));
//!
//! assert_eq!(cpu.pc(), 0xC000);
//! let consumed = cpu.run(20).unwrap();
//! assert!(consumed >= 20);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Memory routing**: RAM at the bottom of the address space, firmware at
//!   the top, everything else open bus (reads `$FF`, writes dropped)
//! - **Table-Driven Design**: all opcode metadata in a single 256-entry table
//! - **Cycle budget**: the host runs the core in bounded slices and paces
//!   itself from the cycles actually consumed
//! - **Explicit faults**: undefined opcodes stop execution with an error
//!   instead of being guessed at
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and the drive memory map
//! - `devices` - RAM and firmware storage
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and effective-address resolution
//! - `status` - Processor status flags
//! - `state` - State snapshots and trace formatting

pub mod addressing;
pub mod cpu;
pub mod devices;
pub mod memory;
pub mod opcodes;
pub mod state;
pub mod status;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use devices::{Firmware, FirmwareError, Ram, FIRMWARE_SIZE, STACK_PAGE, ZERO_PAGE};
pub use memory::{Drive1541Memory, DriveMemory, MemoryBus, Region, FIRMWARE_BASE, OPEN_BUS};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use state::{CpuState, TraceLine, TRACE_LINE_WIDTH};
pub use status::StatusFlags;

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Everything else the 6502 can do (overflow, wraparound, open-bus reads) is
/// defined behavior and never reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The byte at `pc` is not a documented NMOS opcode.
    ///
    /// Execution stops before the opcode runs; `pc` is left pointing at it.
    #[error("illegal opcode ${opcode:02X} at ${pc:04X}")]
    IllegalOpcode {
        /// The offending opcode byte
        opcode: u8,
        /// Address the opcode was fetched from
        pc: u16,
    },
}
