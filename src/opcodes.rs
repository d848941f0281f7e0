//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 6502 instruction information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked with [`Mnemonic::Illegal`]
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Instruction size in bytes
//! - Whether indexed page crossings cost an extra cycle

use crate::addressing::AddressingMode::{self, *};

/// Instruction names of the documented NMOS 6502 set.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undefined/undocumented opcode.
    Illegal,
}

impl Mnemonic {
    /// Three-letter assembler name, `"???"` for illegal opcodes.
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC", Bcs => "BCS",
            Beq => "BEQ", Bit => "BIT", Bmi => "BMI", Bne => "BNE", Bpl => "BPL",
            Brk => "BRK", Bvc => "BVC", Bvs => "BVS", Clc => "CLC", Cld => "CLD",
            Cli => "CLI", Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR", Inc => "INC",
            Inx => "INX", Iny => "INY", Jmp => "JMP", Jsr => "JSR", Lda => "LDA",
            Ldx => "LDX", Ldy => "LDY", Lsr => "LSR", Nop => "NOP", Ora => "ORA",
            Pha => "PHA", Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC", Sec => "SEC",
            Sed => "SED", Sei => "SEI", Sta => "STA", Stx => "STX", Sty => "STY",
            Tax => "TAX", Tay => "TAY", Tsx => "TSX", Txa => "TXA", Txs => "TXS",
            Tya => "TYA", Illegal => "???",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use drive6502::{OPCODE_TABLE, AddressingMode};
/// use drive6502::opcodes::Mnemonic;
///
/// // Look up LDA absolute,X (opcode 0xBD)
/// let lda = &OPCODE_TABLE[0xBD];
/// assert_eq!(lda.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda.base_cycles, 4);
/// assert_eq!(lda.size_bytes, 3);
/// assert!(lda.page_penalty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction name.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    ///
    /// Documented instructions cost 2-7 cycles. Illegal opcodes are 0.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether a page crossing while indexing costs one extra cycle.
    ///
    /// Set for indexed reads only; stores and read-modify-write forms always
    /// pay the worst case in `base_cycles`.
    pub page_penalty: bool,
}

impl OpcodeMetadata {
    /// Whether this is a documented opcode.
    pub const fn is_legal(&self) -> bool {
        !matches!(self.mnemonic, Mnemonic::Illegal)
    }
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: Mnemonic::Illegal,
    addressing_mode: Implicit,
    base_cycles: 0,
    size_bytes: 1,
    page_penalty: false,
};

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        page_penalty: false,
    }
}

/// Same as `op`, for indexed reads that pay for page crossings.
const fn read(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    let mut metadata = op(mnemonic, addressing_mode, base_cycles);
    metadata.page_penalty = matches!(addressing_mode, AbsoluteX | AbsoluteY | IndirectY);
    metadata
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// Cycle counts follow the NMOS 6502 reference tables.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

const fn build_table() -> [OpcodeMetadata; 256] {
    use Mnemonic::*;
    let mut t = [ILLEGAL; 256];

    // Loads
    t[0xA9] = read(Lda, Immediate, 2);
    t[0xA5] = read(Lda, ZeroPage, 3);
    t[0xB5] = read(Lda, ZeroPageX, 4);
    t[0xAD] = read(Lda, Absolute, 4);
    t[0xBD] = read(Lda, AbsoluteX, 4);
    t[0xB9] = read(Lda, AbsoluteY, 4);
    t[0xA1] = read(Lda, IndirectX, 6);
    t[0xB1] = read(Lda, IndirectY, 5);
    t[0xA2] = read(Ldx, Immediate, 2);
    t[0xA6] = read(Ldx, ZeroPage, 3);
    t[0xB6] = read(Ldx, ZeroPageY, 4);
    t[0xAE] = read(Ldx, Absolute, 4);
    t[0xBE] = read(Ldx, AbsoluteY, 4);
    t[0xA0] = read(Ldy, Immediate, 2);
    t[0xA4] = read(Ldy, ZeroPage, 3);
    t[0xB4] = read(Ldy, ZeroPageX, 4);
    t[0xAC] = read(Ldy, Absolute, 4);
    t[0xBC] = read(Ldy, AbsoluteX, 4);

    // Stores
    t[0x85] = op(Sta, ZeroPage, 3);
    t[0x95] = op(Sta, ZeroPageX, 4);
    t[0x8D] = op(Sta, Absolute, 4);
    t[0x9D] = op(Sta, AbsoluteX, 5);
    t[0x99] = op(Sta, AbsoluteY, 5);
    t[0x81] = op(Sta, IndirectX, 6);
    t[0x91] = op(Sta, IndirectY, 6);
    t[0x86] = op(Stx, ZeroPage, 3);
    t[0x96] = op(Stx, ZeroPageY, 4);
    t[0x8E] = op(Stx, Absolute, 4);
    t[0x84] = op(Sty, ZeroPage, 3);
    t[0x94] = op(Sty, ZeroPageX, 4);
    t[0x8C] = op(Sty, Absolute, 4);

    // Arithmetic and logic
    t[0x69] = read(Adc, Immediate, 2);
    t[0x65] = read(Adc, ZeroPage, 3);
    t[0x75] = read(Adc, ZeroPageX, 4);
    t[0x6D] = read(Adc, Absolute, 4);
    t[0x7D] = read(Adc, AbsoluteX, 4);
    t[0x79] = read(Adc, AbsoluteY, 4);
    t[0x61] = read(Adc, IndirectX, 6);
    t[0x71] = read(Adc, IndirectY, 5);
    t[0xE9] = read(Sbc, Immediate, 2);
    t[0xE5] = read(Sbc, ZeroPage, 3);
    t[0xF5] = read(Sbc, ZeroPageX, 4);
    t[0xED] = read(Sbc, Absolute, 4);
    t[0xFD] = read(Sbc, AbsoluteX, 4);
    t[0xF9] = read(Sbc, AbsoluteY, 4);
    t[0xE1] = read(Sbc, IndirectX, 6);
    t[0xF1] = read(Sbc, IndirectY, 5);
    t[0x29] = read(And, Immediate, 2);
    t[0x25] = read(And, ZeroPage, 3);
    t[0x35] = read(And, ZeroPageX, 4);
    t[0x2D] = read(And, Absolute, 4);
    t[0x3D] = read(And, AbsoluteX, 4);
    t[0x39] = read(And, AbsoluteY, 4);
    t[0x21] = read(And, IndirectX, 6);
    t[0x31] = read(And, IndirectY, 5);
    t[0x09] = read(Ora, Immediate, 2);
    t[0x05] = read(Ora, ZeroPage, 3);
    t[0x15] = read(Ora, ZeroPageX, 4);
    t[0x0D] = read(Ora, Absolute, 4);
    t[0x1D] = read(Ora, AbsoluteX, 4);
    t[0x19] = read(Ora, AbsoluteY, 4);
    t[0x01] = read(Ora, IndirectX, 6);
    t[0x11] = read(Ora, IndirectY, 5);
    t[0x49] = read(Eor, Immediate, 2);
    t[0x45] = read(Eor, ZeroPage, 3);
    t[0x55] = read(Eor, ZeroPageX, 4);
    t[0x4D] = read(Eor, Absolute, 4);
    t[0x5D] = read(Eor, AbsoluteX, 4);
    t[0x59] = read(Eor, AbsoluteY, 4);
    t[0x41] = read(Eor, IndirectX, 6);
    t[0x51] = read(Eor, IndirectY, 5);
    t[0x24] = read(Bit, ZeroPage, 3);
    t[0x2C] = read(Bit, Absolute, 4);

    // Compares
    t[0xC9] = read(Cmp, Immediate, 2);
    t[0xC5] = read(Cmp, ZeroPage, 3);
    t[0xD5] = read(Cmp, ZeroPageX, 4);
    t[0xCD] = read(Cmp, Absolute, 4);
    t[0xDD] = read(Cmp, AbsoluteX, 4);
    t[0xD9] = read(Cmp, AbsoluteY, 4);
    t[0xC1] = read(Cmp, IndirectX, 6);
    t[0xD1] = read(Cmp, IndirectY, 5);
    t[0xE0] = read(Cpx, Immediate, 2);
    t[0xE4] = read(Cpx, ZeroPage, 3);
    t[0xEC] = read(Cpx, Absolute, 4);
    t[0xC0] = read(Cpy, Immediate, 2);
    t[0xC4] = read(Cpy, ZeroPage, 3);
    t[0xCC] = read(Cpy, Absolute, 4);

    // Increments and decrements
    t[0xE6] = op(Inc, ZeroPage, 5);
    t[0xF6] = op(Inc, ZeroPageX, 6);
    t[0xEE] = op(Inc, Absolute, 6);
    t[0xFE] = op(Inc, AbsoluteX, 7);
    t[0xC6] = op(Dec, ZeroPage, 5);
    t[0xD6] = op(Dec, ZeroPageX, 6);
    t[0xCE] = op(Dec, Absolute, 6);
    t[0xDE] = op(Dec, AbsoluteX, 7);
    t[0xE8] = op(Inx, Implicit, 2);
    t[0xC8] = op(Iny, Implicit, 2);
    t[0xCA] = op(Dex, Implicit, 2);
    t[0x88] = op(Dey, Implicit, 2);

    // Shifts and rotates
    t[0x0A] = op(Asl, Accumulator, 2);
    t[0x06] = op(Asl, ZeroPage, 5);
    t[0x16] = op(Asl, ZeroPageX, 6);
    t[0x0E] = op(Asl, Absolute, 6);
    t[0x1E] = op(Asl, AbsoluteX, 7);
    t[0x4A] = op(Lsr, Accumulator, 2);
    t[0x46] = op(Lsr, ZeroPage, 5);
    t[0x56] = op(Lsr, ZeroPageX, 6);
    t[0x4E] = op(Lsr, Absolute, 6);
    t[0x5E] = op(Lsr, AbsoluteX, 7);
    t[0x2A] = op(Rol, Accumulator, 2);
    t[0x26] = op(Rol, ZeroPage, 5);
    t[0x36] = op(Rol, ZeroPageX, 6);
    t[0x2E] = op(Rol, Absolute, 6);
    t[0x3E] = op(Rol, AbsoluteX, 7);
    t[0x6A] = op(Ror, Accumulator, 2);
    t[0x66] = op(Ror, ZeroPage, 5);
    t[0x76] = op(Ror, ZeroPageX, 6);
    t[0x6E] = op(Ror, Absolute, 6);
    t[0x7E] = op(Ror, AbsoluteX, 7);

    // Branches (taken/page penalties are applied by the branch itself)
    t[0x90] = op(Bcc, Relative, 2);
    t[0xB0] = op(Bcs, Relative, 2);
    t[0xF0] = op(Beq, Relative, 2);
    t[0xD0] = op(Bne, Relative, 2);
    t[0x30] = op(Bmi, Relative, 2);
    t[0x10] = op(Bpl, Relative, 2);
    t[0x50] = op(Bvc, Relative, 2);
    t[0x70] = op(Bvs, Relative, 2);

    // Control flow
    t[0x00] = op(Brk, Implicit, 7);
    t[0x4C] = op(Jmp, Absolute, 3);
    t[0x6C] = op(Jmp, Indirect, 5);
    t[0x20] = op(Jsr, Absolute, 6);
    t[0x60] = op(Rts, Implicit, 6);
    t[0x40] = op(Rti, Implicit, 6);
    t[0xEA] = op(Nop, Implicit, 2);

    // Stack
    t[0x48] = op(Pha, Implicit, 3);
    t[0x08] = op(Php, Implicit, 3);
    t[0x68] = op(Pla, Implicit, 4);
    t[0x28] = op(Plp, Implicit, 4);

    // Flags
    t[0x18] = op(Clc, Implicit, 2);
    t[0x38] = op(Sec, Implicit, 2);
    t[0x58] = op(Cli, Implicit, 2);
    t[0x78] = op(Sei, Implicit, 2);
    t[0xB8] = op(Clv, Implicit, 2);
    t[0xD8] = op(Cld, Implicit, 2);
    t[0xF8] = op(Sed, Implicit, 2);

    // Transfers
    t[0xAA] = op(Tax, Implicit, 2);
    t[0xA8] = op(Tay, Implicit, 2);
    t[0xBA] = op(Tsx, Implicit, 2);
    t[0x8A] = op(Txa, Implicit, 2);
    t[0x9A] = op(Txs, Implicit, 2);
    t[0x98] = op(Tya, Implicit, 2);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let legal = OPCODE_TABLE.iter().filter(|m| m.is_legal()).count();
        assert_eq!(legal, 151);
    }

    #[test]
    fn test_illegal_entries() {
        for opcode in [0x02u8, 0x03, 0x1A, 0x80, 0xFF] {
            let metadata = &OPCODE_TABLE[opcode as usize];
            assert!(!metadata.is_legal());
            assert_eq!(metadata.mnemonic.as_str(), "???");
            assert_eq!(metadata.base_cycles, 0);
        }
    }

    #[test]
    fn test_size_matches_addressing_mode() {
        for metadata in OPCODE_TABLE.iter().filter(|m| m.is_legal()) {
            assert_eq!(
                metadata.size_bytes,
                1 + metadata.addressing_mode.operand_bytes()
            );
        }
    }

    #[test]
    fn test_page_penalty_only_on_indexed_reads() {
        assert!(OPCODE_TABLE[0x7D].page_penalty); // ADC abs,X
        assert!(OPCODE_TABLE[0xB1].page_penalty); // LDA (zp),Y
        assert!(OPCODE_TABLE[0xBE].page_penalty); // LDX abs,Y
        assert!(!OPCODE_TABLE[0x9D].page_penalty); // STA abs,X
        assert!(!OPCODE_TABLE[0x91].page_penalty); // STA (zp),Y
        assert!(!OPCODE_TABLE[0x1E].page_penalty); // ASL abs,X
        assert!(!OPCODE_TABLE[0xA1].page_penalty); // LDA (zp,X)
        assert!(!OPCODE_TABLE[0xB5].page_penalty); // LDA zp,X
    }

    #[test]
    fn test_mnemonic_display() {
        assert_eq!(Mnemonic::Lda.to_string(), "LDA");
        assert_eq!(OPCODE_TABLE[0x00].mnemonic.to_string(), "BRK");
    }
}
