//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (Accumulator mode) or read-modify-writes a
//! memory byte. The bit shifted out lands in C; Z and N follow the result.
//! None of them take a page-crossing penalty.

use crate::addressing::AddressingMode;
use crate::opcodes::OpcodeMetadata;
use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to C, bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    modify(cpu, metadata.addressing_mode, |_, value| {
        (value << 1, value & 0x80 != 0)
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to C, bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    modify(cpu, metadata.addressing_mode, |_, value| {
        (value >> 1, value & 0x01 != 0)
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old C enters bit 0, bit 7 goes to C.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    modify(cpu, metadata.addressing_mode, |carry, value| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old C enters bit 7, bit 0 goes to C.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    modify(cpu, metadata.addressing_mode, |carry, value| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}

/// Applies `op` to A or to the byte at the operand address.
///
/// `op` receives the incoming carry and the value and returns the result and
/// the outgoing carry.
fn modify<M, F>(cpu: &mut CPU<M>, mode: AddressingMode, op: F) -> u8
where
    M: MemoryBus,
    F: FnOnce(bool, u8) -> (u8, bool),
{
    let carry_in = cpu.p.contains(StatusFlags::CARRY);

    let result = if mode == AddressingMode::Accumulator {
        let (result, carry_out) = op(carry_in, cpu.a);
        cpu.a = result;
        cpu.p.set(StatusFlags::CARRY, carry_out);
        result
    } else {
        let (addr, _) = cpu.resolve_address(mode);
        let (result, carry_out) = op(carry_in, cpu.memory.read(addr));
        cpu.memory.write(addr, result);
        cpu.p.set(StatusFlags::CARRY, carry_out);
        result
    };

    cpu.p.set_zn(result);
    0
}
