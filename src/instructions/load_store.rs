//! # Load and Store Instructions
//!
//! This module implements the load and store operations:
//! - LDA, LDX, LDY: Load a register from memory, setting Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected
//!
//! Loads in indexed modes take one extra cycle when the index crosses a page.
//! Stores always pay the fixed cost already in their base cycle count.
//! A store to firmware or unmapped space is silently dropped by the bus.

use super::page_penalty;
use crate::opcodes::OpcodeMetadata;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);
    cpu.a = value;
    cpu.p.set_zn(value);
    page_penalty(metadata, page_crossed)
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);
    cpu.x = value;
    cpu.p.set_zn(value);
    page_penalty(metadata, page_crossed)
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);
    cpu.y = value;
    cpu.p.set_zn(value);
    page_penalty(metadata, page_crossed)
}

/// Stores `value` (A, X or Y, captured before operand resolution) at the
/// operand address.
pub(crate) fn execute_store<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
    value: u8,
) -> u8 {
    let (addr, _) = cpu.resolve_address(metadata.addressing_mode);
    cpu.memory.write(addr, value);
    0
}
