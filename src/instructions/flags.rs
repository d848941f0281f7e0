//! # Status Flag Instructions
//!
//! CLC/SEC, CLI/SEI, CLD/SED and CLV each set or clear a single flag.
//! There is no SEV; V is only set by ADC, SBC, BIT and PLP/RTI.
//!
//! A CLI takes effect for the next [`CPU::irq`](crate::CPU::irq) call, since
//! interrupts are only sampled between execution slices.

use crate::{MemoryBus, StatusFlags, CPU};

pub(crate) fn execute_set_flag<M: MemoryBus>(
    cpu: &mut CPU<M>,
    flag: StatusFlags,
    value: bool,
) -> u8 {
    cpu.p.set(flag, value);
    0
}
