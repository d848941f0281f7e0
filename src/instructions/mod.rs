//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Each instruction is a standalone function taking the
//! CPU (with PC just past the opcode byte) and the opcode's metadata. It
//! consumes its own operand bytes and returns the cycles it costs on top of
//! `base_cycles` (page-crossing and branch penalties).
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::opcodes::{Mnemonic, OpcodeMetadata};
use crate::{MemoryBus, StatusFlags, CPU};

/// Extra cycle for an indexed read that crossed a page.
#[inline]
pub(crate) fn page_penalty(metadata: &OpcodeMetadata, page_crossed: bool) -> u8 {
    (metadata.page_penalty && page_crossed) as u8
}

/// Runs the instruction described by `metadata` and returns its penalty cycles.
///
/// Illegal opcodes never reach this point; the CPU faults on them first.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> u8 {
    use Mnemonic::*;

    let (a, x, y, flags) = (cpu.a, cpu.x, cpu.y, cpu.p);

    match metadata.mnemonic {
        Adc => alu::execute_adc(cpu, metadata),
        Sbc => alu::execute_sbc(cpu, metadata),
        And => alu::execute_and(cpu, metadata),
        Ora => alu::execute_ora(cpu, metadata),
        Eor => alu::execute_eor(cpu, metadata),
        Bit => alu::execute_bit(cpu, metadata),
        Cmp => alu::execute_cmp(cpu, metadata),
        Cpx => alu::execute_cpx(cpu, metadata),
        Cpy => alu::execute_cpy(cpu, metadata),

        Bcc => branches::execute_branch(cpu, !flags.contains(StatusFlags::CARRY)),
        Bcs => branches::execute_branch(cpu, flags.contains(StatusFlags::CARRY)),
        Bne => branches::execute_branch(cpu, !flags.contains(StatusFlags::ZERO)),
        Beq => branches::execute_branch(cpu, flags.contains(StatusFlags::ZERO)),
        Bpl => branches::execute_branch(cpu, !flags.contains(StatusFlags::NEGATIVE)),
        Bmi => branches::execute_branch(cpu, flags.contains(StatusFlags::NEGATIVE)),
        Bvc => branches::execute_branch(cpu, !flags.contains(StatusFlags::OVERFLOW)),
        Bvs => branches::execute_branch(cpu, flags.contains(StatusFlags::OVERFLOW)),

        Asl => shifts::execute_asl(cpu, metadata),
        Lsr => shifts::execute_lsr(cpu, metadata),
        Rol => shifts::execute_rol(cpu, metadata),
        Ror => shifts::execute_ror(cpu, metadata),

        Lda => load_store::execute_lda(cpu, metadata),
        Ldx => load_store::execute_ldx(cpu, metadata),
        Ldy => load_store::execute_ldy(cpu, metadata),
        Sta => load_store::execute_store(cpu, metadata, a),
        Stx => load_store::execute_store(cpu, metadata, x),
        Sty => load_store::execute_store(cpu, metadata, y),

        Inc => inc_dec::execute_inc(cpu, metadata),
        Dec => inc_dec::execute_dec(cpu, metadata),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Brk => control::execute_brk(cpu),
        Jmp => control::execute_jmp(cpu, metadata),
        Jsr => control::execute_jsr(cpu),
        Rts => control::execute_rts(cpu),
        Rti => control::execute_rti(cpu),
        Nop => 0,

        Pha => stack::execute_pha(cpu),
        Php => stack::execute_php(cpu),
        Pla => stack::execute_pla(cpu),
        Plp => stack::execute_plp(cpu),

        Clc => flags::execute_set_flag(cpu, StatusFlags::CARRY, false),
        Sec => flags::execute_set_flag(cpu, StatusFlags::CARRY, true),
        Cli => flags::execute_set_flag(cpu, StatusFlags::INTERRUPT_DISABLE, false),
        Sei => flags::execute_set_flag(cpu, StatusFlags::INTERRUPT_DISABLE, true),
        Cld => flags::execute_set_flag(cpu, StatusFlags::DECIMAL, false),
        Sed => flags::execute_set_flag(cpu, StatusFlags::DECIMAL, true),
        Clv => flags::execute_set_flag(cpu, StatusFlags::OVERFLOW, false),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txa => transfer::execute_txa(cpu),
        Txs => transfer::execute_txs(cpu),
        Tya => transfer::execute_tya(cpu),

        // CPU::step faults on these before dispatching
        Illegal => 0,
    }
}
