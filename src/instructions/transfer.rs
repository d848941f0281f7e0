//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy a register and set Z and N from the
//! copied value. TXS copies X into SP and leaves the flags alone.

use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.a;
    cpu.p.set_zn(cpu.x);
    0
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.a;
    cpu.p.set_zn(cpu.y);
    0
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.x;
    cpu.p.set_zn(cpu.a);
    0
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.y;
    cpu.p.set_zn(cpu.a);
    0
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.sp;
    cpu.p.set_zn(cpu.x);
    0
}

/// Executes TXS. The only transfer that does not touch the flags.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.sp = cpu.x;
    0
}
