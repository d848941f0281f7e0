//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//!
//! NOP has no effect beyond its cycles and is handled by the dispatcher.

use crate::cpu::IRQ_VECTOR;
use crate::opcodes::OpcodeMetadata;
use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Pushing the address of the opcode plus 2 (BRK is 1 byte, but the byte
///    after it is treated as a padding/signature byte)
/// 2. Pushing the processor status with the B bit set
/// 3. Setting the I (interrupt disable) flag
/// 4. Loading the PC from the IRQ vector at $FFFE/$FFFF
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    // PC already points one past the opcode
    let return_address = cpu.pc.wrapping_add(1);
    let status = cpu.p.to_pushed(true);
    cpu.push_word(return_address);
    cpu.push_byte(status);

    cpu.p.insert(StatusFlags::INTERRUPT_DISABLE);
    cpu.pc = cpu.memory.read16(IRQ_VECTOR);
    0
}

/// Executes the JMP (Jump) instruction.
///
/// Absolute (0x4C) jumps to the operand; Indirect (0x6C) jumps through the
/// pointer at the operand, including the NMOS page-wrap bug (see
/// [`crate::AddressingMode::Indirect`]).
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    let (target, _) = cpu.resolve_address(metadata.addressing_mode);
    cpu.pc = target;
    0
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address minus one), high byte first, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let target = cpu.fetch_word();
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = target;
    0
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    0
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Restores the status register first, then the program counter. The pulled
/// B bit is discarded.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let status = cpu.pull_byte();
    cpu.p = StatusFlags::from_pulled(status);
    cpu.pc = cpu.pull_word();
    0
}
