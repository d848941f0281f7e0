//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The stack lives at $0100-$01FF and grows downward; SP wraps within the page.

use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let value = cpu.a;
    cpu.push_byte(value);
    0
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has B and bit 5 set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let status = cpu.p.to_pushed(true);
    cpu.push_byte(status);
    0
}

/// Executes the PLA (Pull Accumulator) instruction. Sets Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.pull_byte();
    cpu.p.set_zn(cpu.a);
    0
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// B is not a real register bit and is dropped; bit 5 stays set.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let status = cpu.pull_byte();
    cpu.p = StatusFlags::from_pulled(status);
    0
}
