//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! ADC and SBC honor the Decimal flag with NMOS semantics: the accumulator
//! and Carry receive the BCD-correct result. For ADC, N and V are taken from
//! the sum before the high nibble is decimal-adjusted and Z from the plain
//! binary sum; for SBC every flag comes from the binary subtraction.

use super::page_penalty;
use crate::opcodes::OpcodeMetadata;
use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the ADC (Add with Carry) instruction.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    if cpu.p.contains(StatusFlags::DECIMAL) {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }

    page_penalty(metadata, page_crossed)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Carry set means "no borrow".
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);

    if cpu.p.contains(StatusFlags::DECIMAL) {
        subtract_decimal(cpu, value);
    } else {
        // A - M - !C is A + !M + C
        add_binary(cpu, !value);
    }

    page_penalty(metadata, page_crossed)
}

/// Binary add into A, setting C, Z, V and N.
fn add_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.p.contains(StatusFlags::CARRY) as u16;
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.p.set(StatusFlags::CARRY, sum > 0xFF);
    // Overflow when both operands share a sign the result does not
    cpu.p
        .set(StatusFlags::OVERFLOW, (!(a ^ value) & (a ^ result) & 0x80) != 0);
    cpu.p.set_zn(result);
    cpu.a = result;
}

fn add_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.p.contains(StatusFlags::CARRY) as u16;

    let mut low = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
    if low >= 0x0A {
        low = ((low + 0x06) & 0x0F) + 0x10;
    }
    let mut sum = (a & 0xF0) as u16 + (value & 0xF0) as u16 + low;

    let binary = (a as u16 + value as u16 + carry_in) as u8;
    cpu.p.set(StatusFlags::ZERO, binary == 0);
    cpu.p.set(StatusFlags::NEGATIVE, sum & 0x80 != 0);
    cpu.p.set(
        StatusFlags::OVERFLOW,
        (!(a ^ value) & (a ^ sum as u8) & 0x80) != 0,
    );

    if sum >= 0xA0 {
        sum += 0x60;
    }
    cpu.p.set(StatusFlags::CARRY, sum >= 0x100);
    cpu.a = sum as u8;
}

fn subtract_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let borrow = !cpu.p.contains(StatusFlags::CARRY) as i16;

    let mut low = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    if low < 0 {
        low = ((low - 0x06) & 0x0F) - 0x10;
    }
    let mut result = (a & 0xF0) as i16 - (value & 0xF0) as i16 + low;
    if result < 0 {
        result -= 0x60;
    }

    // Flags as in binary mode
    add_binary(cpu, !value);
    cpu.a = result as u8;
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);
    cpu.a &= value;
    cpu.p.set_zn(cpu.a);
    page_penalty(metadata, page_crossed)
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);
    cpu.a |= value;
    cpu.p.set_zn(cpu.a);
    page_penalty(metadata, page_crossed)
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);
    cpu.a ^= value;
    cpu.p.set_zn(cpu.a);
    page_penalty(metadata, page_crossed)
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from `A & M`; N and V are copied from bits 7 and 6 of `M`.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (value, _) = cpu.read_operand(metadata.addressing_mode);
    cpu.p.set(StatusFlags::ZERO, cpu.a & value == 0);
    cpu.p.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    cpu.p.set(StatusFlags::OVERFLOW, value & 0x40 != 0);
    0
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let register = cpu.a;
    compare(cpu, metadata, register)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let register = cpu.x;
    compare(cpu, metadata, register)
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let register = cpu.y;
    compare(cpu, metadata, register)
}

/// Sets C if `register >= M`, Z and N from `register - M`. Operands are untouched.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata, register: u8) -> u8 {
    let (value, page_crossed) = cpu.read_operand(metadata.addressing_mode);
    cpu.p.set(StatusFlags::CARRY, register >= value);
    cpu.p.set_zn(register.wrapping_sub(value));
    page_penalty(metadata, page_crossed)
}
