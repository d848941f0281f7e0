//! # Branch Instructions
//!
//! This module implements the conditional branch operations
//! (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS).
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! from the address of the next instruction. Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Branches to the relative target when `condition` holds.
///
/// The offset byte is always consumed. Returns the taken/page-cross penalty.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool) -> u8 {
    let (target, page_crossed) = cpu.resolve_address(AddressingMode::Relative);

    if !condition {
        return 0;
    }

    cpu.pc = target;
    1 + page_crossed as u8
}
