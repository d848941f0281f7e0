//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns the operand bytes following an opcode into an
//! effective address.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next
    /// instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// Reads cost +1 cycle if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// Reads cost +1 cycle if a page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// Reads cost +1 cycle if a page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// True when `a` and `b` lie in different 256-byte pages.
#[inline]
pub(crate) fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Consumes the operand bytes at `pc` and resolves the effective address.
    ///
    /// Returns the address together with whether indexing crossed a page
    /// boundary. For `Immediate` the address is that of the operand byte
    /// itself; for `Relative` it is the branch target, and the page check is
    /// made against the address of the next instruction. `Implicit` and
    /// `Accumulator` have no memory operand and resolve to `(0, false)`.
    pub(crate) fn resolve_address(&mut self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => (0, false),
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (addr, false)
            }
            AddressingMode::ZeroPage => (self.fetch_byte() as u16, false),
            AddressingMode::ZeroPageX => (self.fetch_byte().wrapping_add(self.x) as u16, false),
            AddressingMode::ZeroPageY => (self.fetch_byte().wrapping_add(self.y) as u16, false),
            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                let target = self.pc.wrapping_add_signed(offset as i16);
                (target, pages_differ(self.pc, target))
            }
            AddressingMode::Absolute => (self.fetch_word(), false),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.x as u16);
                (addr, pages_differ(base, addr))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.y as u16);
                (addr, pages_differ(base, addr))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                // NMOS bug: the high byte is fetched without carrying into the
                // next page, so JMP ($10FF) reads $10FF and $1000.
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let lo = self.memory.read(ptr);
                let hi = self.memory.read(hi_addr);
                (u16::from_le_bytes([lo, hi]), false)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                (self.memory.read16_zero_page(zp), false)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.memory.read16_zero_page(zp);
                let addr = base.wrapping_add(self.y as u16);
                (addr, pages_differ(base, addr))
            }
        }
    }

    /// Resolves the operand and reads its value.
    ///
    /// Returns `(value, page_crossed)`; read instructions charge one extra
    /// cycle when `page_crossed` is set.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> (u8, bool) {
        if mode == AddressingMode::Accumulator {
            return (self.a, false);
        }
        let (addr, page_crossed) = self.resolve_address(mode);
        (self.memory.read(addr), page_crossed)
    }
}
