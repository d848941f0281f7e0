//! # Increment and Decrement Instructions
//!
//! This module implements:
//! - INC, DEC: Read-modify-write a memory byte
//! - INX, INY, DEX, DEY: Adjust an index register
//!
//! All wrap at 8 bits and set Z and N from the result. C and V are untouched.

use crate::opcodes::OpcodeMetadata;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    modify_memory(cpu, metadata, 1)
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    modify_memory(cpu, metadata, 0xFF)
}

/// Adds `delta` to the operand byte in place.
fn modify_memory<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata, delta: u8) -> u8 {
    let (addr, _) = cpu.resolve_address(metadata.addressing_mode);
    let result = cpu.memory.read(addr).wrapping_add(delta);
    cpu.memory.write(addr, result);
    cpu.p.set_zn(result);
    0
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_zn(cpu.x);
    0
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_zn(cpu.y);
    0
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_zn(cpu.x);
    0
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_zn(cpu.y);
    0
}
