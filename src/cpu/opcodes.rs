// Opcode decode table for the 6502 instruction set.
//
// A direct 256-entry lookup replaces a dispatch-by-function-pointer table: each
// byte decodes in one array index instead of walking a chain of handler objects.
// Slots with no documented instruction carry `mnemonic: "UNK"` and are treated as
// fatal by the executor rather than silently behaving as NOP.

use crate::cpu::addressing::AddressingMode;

/// Static description of one opcode: its operand width, base timing, and
/// addressing mode. The semantic action itself is dispatched separately in
/// `execute.rs`, keyed by the same opcode byte.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// Human-readable mnemonic, used by the disassembler and trace logger.
    /// "UNK" marks an undefined opcode.
    pub mnemonic: &'static str,
    /// Total instruction length in bytes (opcode + operand bytes).
    pub bytes: u8,
    /// Base cycle count, excluding page-cross and branch-taken penalties.
    pub cycles: u8,
    /// Whether this opcode pays an extra cycle when its effective address
    /// computation crosses a page boundary.
    pub page_cycle: bool,
    /// Addressing mode used to compute the effective address / operand.
    pub mode: AddressingMode,
}

const fn op(
    mnemonic: &'static str,
    bytes: u8,
    cycles: u8,
    page_cycle: bool,
    mode: AddressingMode,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        bytes,
        cycles,
        page_cycle,
        mode,
    }
}

const UNK: OpcodeInfo = op("UNK", 1, 2, false, AddressingMode::Implied);

use AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Accumulator, Immediate, Implied, IndexedIndirect, Indirect,
    IndirectIndexed, Relative, ZeroPage, ZeroPageX, ZeroPageY,
};

/// The full 256-entry opcode table, indexed directly by opcode byte.
///
/// Only documented 6502 opcodes are populated; all other slots are `UNK` and
/// must be treated by the executor as a fatal runtime error, not a silent NOP.
pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    /* 0x00 */ op("BRK", 1, 7, false, Implied),
    /* 0x01 */ op("ORA", 2, 6, false, IndexedIndirect),
    /* 0x02 */ UNK,
    /* 0x03 */ UNK,
    /* 0x04 */ UNK,
    /* 0x05 */ op("ORA", 2, 3, false, ZeroPage),
    /* 0x06 */ op("ASL", 2, 5, false, ZeroPage),
    /* 0x07 */ UNK,
    /* 0x08 */ op("PHP", 1, 3, false, Implied),
    /* 0x09 */ op("ORA", 2, 2, false, Immediate),
    /* 0x0A */ op("ASL", 1, 2, false, Accumulator),
    /* 0x0B */ UNK,
    /* 0x0C */ UNK,
    /* 0x0D */ op("ORA", 3, 4, false, Absolute),
    /* 0x0E */ op("ASL", 3, 6, false, Absolute),
    /* 0x0F */ UNK,
    /* 0x10 */ op("BPL", 2, 2, false, Relative),
    /* 0x11 */ op("ORA", 2, 5, true, IndirectIndexed),
    /* 0x12 */ UNK,
    /* 0x13 */ UNK,
    /* 0x14 */ UNK,
    /* 0x15 */ op("ORA", 2, 4, false, ZeroPageX),
    /* 0x16 */ op("ASL", 2, 6, false, ZeroPageX),
    /* 0x17 */ UNK,
    /* 0x18 */ op("CLC", 1, 2, false, Implied),
    /* 0x19 */ op("ORA", 3, 4, true, AbsoluteY),
    /* 0x1A */ UNK,
    /* 0x1B */ UNK,
    /* 0x1C */ UNK,
    /* 0x1D */ op("ORA", 3, 4, true, AbsoluteX),
    /* 0x1E */ op("ASL", 3, 7, false, AbsoluteX),
    /* 0x1F */ UNK,
    /* 0x20 */ op("JSR", 3, 6, false, Absolute),
    /* 0x21 */ op("AND", 2, 6, false, IndexedIndirect),
    /* 0x22 */ UNK,
    /* 0x23 */ UNK,
    /* 0x24 */ op("BIT", 2, 3, false, ZeroPage),
    /* 0x25 */ op("AND", 2, 3, false, ZeroPage),
    /* 0x26 */ op("ROL", 2, 5, false, ZeroPage),
    /* 0x27 */ UNK,
    /* 0x28 */ op("PLP", 1, 4, false, Implied),
    /* 0x29 */ op("AND", 2, 2, false, Immediate),
    /* 0x2A */ op("ROL", 1, 2, false, Accumulator),
    /* 0x2B */ UNK,
    /* 0x2C */ op("BIT", 3, 4, false, Absolute),
    /* 0x2D */ op("AND", 3, 4, false, Absolute),
    /* 0x2E */ op("ROL", 3, 6, false, Absolute),
    /* 0x2F */ UNK,
    /* 0x30 */ op("BMI", 2, 2, false, Relative),
    /* 0x31 */ op("AND", 2, 5, true, IndirectIndexed),
    /* 0x32 */ UNK,
    /* 0x33 */ UNK,
    /* 0x34 */ UNK,
    /* 0x35 */ op("AND", 2, 4, false, ZeroPageX),
    /* 0x36 */ op("ROL", 2, 6, false, ZeroPageX),
    /* 0x37 */ UNK,
    /* 0x38 */ op("SEC", 1, 2, false, Implied),
    /* 0x39 */ op("AND", 3, 4, true, AbsoluteY),
    /* 0x3A */ UNK,
    /* 0x3B */ UNK,
    /* 0x3C */ UNK,
    /* 0x3D */ op("AND", 3, 4, true, AbsoluteX),
    /* 0x3E */ op("ROL", 3, 7, false, AbsoluteX),
    /* 0x3F */ UNK,
    /* 0x40 */ op("RTI", 1, 6, false, Implied),
    /* 0x41 */ op("EOR", 2, 6, false, IndexedIndirect),
    /* 0x42 */ UNK,
    /* 0x43 */ UNK,
    /* 0x44 */ UNK,
    /* 0x45 */ op("EOR", 2, 3, false, ZeroPage),
    /* 0x46 */ op("LSR", 2, 5, false, ZeroPage),
    /* 0x47 */ UNK,
    /* 0x48 */ op("PHA", 1, 3, false, Implied),
    /* 0x49 */ op("EOR", 2, 2, false, Immediate),
    /* 0x4A */ op("LSR", 1, 2, false, Accumulator),
    /* 0x4B */ UNK,
    /* 0x4C */ op("JMP", 3, 3, false, Absolute),
    /* 0x4D */ op("EOR", 3, 4, false, Absolute),
    /* 0x4E */ op("LSR", 3, 6, false, Absolute),
    /* 0x4F */ UNK,
    /* 0x50 */ op("BVC", 2, 2, false, Relative),
    /* 0x51 */ op("EOR", 2, 5, true, IndirectIndexed),
    /* 0x52 */ UNK,
    /* 0x53 */ UNK,
    /* 0x54 */ UNK,
    /* 0x55 */ op("EOR", 2, 4, false, ZeroPageX),
    /* 0x56 */ op("LSR", 2, 6, false, ZeroPageX),
    /* 0x57 */ UNK,
    /* 0x58 */ op("CLI", 1, 2, false, Implied),
    /* 0x59 */ op("EOR", 3, 4, true, AbsoluteY),
    /* 0x5A */ UNK,
    /* 0x5B */ UNK,
    /* 0x5C */ UNK,
    /* 0x5D */ op("EOR", 3, 4, true, AbsoluteX),
    /* 0x5E */ op("LSR", 3, 7, false, AbsoluteX),
    /* 0x5F */ UNK,
    /* 0x60 */ op("RTS", 1, 6, false, Implied),
    /* 0x61 */ op("ADC", 2, 6, false, IndexedIndirect),
    /* 0x62 */ UNK,
    /* 0x63 */ UNK,
    /* 0x64 */ UNK,
    /* 0x65 */ op("ADC", 2, 3, false, ZeroPage),
    /* 0x66 */ op("ROR", 2, 5, false, ZeroPage),
    /* 0x67 */ UNK,
    /* 0x68 */ op("PLA", 1, 4, false, Implied),
    /* 0x69 */ op("ADC", 2, 2, false, Immediate),
    /* 0x6A */ op("ROR", 1, 2, false, Accumulator),
    /* 0x6B */ UNK,
    /* 0x6C */ op("JMP", 3, 5, false, Indirect),
    /* 0x6D */ op("ADC", 3, 4, false, Absolute),
    /* 0x6E */ op("ROR", 3, 6, false, Absolute),
    /* 0x6F */ UNK,
    /* 0x70 */ op("BVS", 2, 2, false, Relative),
    /* 0x71 */ op("ADC", 2, 5, true, IndirectIndexed),
    /* 0x72 */ UNK,
    /* 0x73 */ UNK,
    /* 0x74 */ UNK,
    /* 0x75 */ op("ADC", 2, 4, false, ZeroPageX),
    /* 0x76 */ op("ROR", 2, 6, false, ZeroPageX),
    /* 0x77 */ UNK,
    /* 0x78 */ op("SEI", 1, 2, false, Implied),
    /* 0x79 */ op("ADC", 3, 4, true, AbsoluteY),
    /* 0x7A */ UNK,
    /* 0x7B */ UNK,
    /* 0x7C */ UNK,
    /* 0x7D */ op("ADC", 3, 4, true, AbsoluteX),
    /* 0x7E */ op("ROR", 3, 7, false, AbsoluteX),
    /* 0x7F */ UNK,
    /* 0x80 */ UNK,
    /* 0x81 */ op("STA", 2, 6, false, IndexedIndirect),
    /* 0x82 */ UNK,
    /* 0x83 */ UNK,
    /* 0x84 */ op("STY", 2, 3, false, ZeroPage),
    /* 0x85 */ op("STA", 2, 3, false, ZeroPage),
    /* 0x86 */ op("STX", 2, 3, false, ZeroPage),
    /* 0x87 */ UNK,
    /* 0x88 */ op("DEY", 1, 2, false, Implied),
    /* 0x89 */ UNK,
    /* 0x8A */ op("TXA", 1, 2, false, Implied),
    /* 0x8B */ UNK,
    /* 0x8C */ op("STY", 3, 4, false, Absolute),
    /* 0x8D */ op("STA", 3, 4, false, Absolute),
    /* 0x8E */ op("STX", 3, 4, false, Absolute),
    /* 0x8F */ UNK,
    /* 0x90 */ op("BCC", 2, 2, false, Relative),
    /* 0x91 */ op("STA", 2, 6, false, IndirectIndexed),
    /* 0x92 */ UNK,
    /* 0x93 */ UNK,
    /* 0x94 */ op("STY", 2, 4, false, ZeroPageX),
    /* 0x95 */ op("STA", 2, 4, false, ZeroPageX),
    /* 0x96 */ op("STX", 2, 4, false, ZeroPageY),
    /* 0x97 */ UNK,
    /* 0x98 */ op("TYA", 1, 2, false, Implied),
    /* 0x99 */ op("STA", 3, 5, false, AbsoluteY),
    /* 0x9A */ op("TXS", 1, 2, false, Implied),
    /* 0x9B */ UNK,
    /* 0x9C */ UNK,
    /* 0x9D */ op("STA", 3, 5, false, AbsoluteX),
    /* 0x9E */ UNK,
    /* 0x9F */ UNK,
    /* 0xA0 */ op("LDY", 2, 2, false, Immediate),
    /* 0xA1 */ op("LDA", 2, 6, false, IndexedIndirect),
    /* 0xA2 */ op("LDX", 2, 2, false, Immediate),
    /* 0xA3 */ UNK,
    /* 0xA4 */ op("LDY", 2, 3, false, ZeroPage),
    /* 0xA5 */ op("LDA", 2, 3, false, ZeroPage),
    /* 0xA6 */ op("LDX", 2, 3, false, ZeroPage),
    /* 0xA7 */ UNK,
    /* 0xA8 */ op("TAY", 1, 2, false, Implied),
    /* 0xA9 */ op("LDA", 2, 2, false, Immediate),
    /* 0xAA */ op("TAX", 1, 2, false, Implied),
    /* 0xAB */ UNK,
    /* 0xAC */ op("LDY", 3, 4, false, Absolute),
    /* 0xAD */ op("LDA", 3, 4, false, Absolute),
    /* 0xAE */ op("LDX", 3, 4, false, Absolute),
    /* 0xAF */ UNK,
    /* 0xB0 */ op("BCS", 2, 2, false, Relative),
    /* 0xB1 */ op("LDA", 2, 5, true, IndirectIndexed),
    /* 0xB2 */ UNK,
    /* 0xB3 */ UNK,
    /* 0xB4 */ op("LDY", 2, 4, false, ZeroPageX),
    /* 0xB5 */ op("LDA", 2, 4, false, ZeroPageX),
    /* 0xB6 */ op("LDX", 2, 4, false, ZeroPageY),
    /* 0xB7 */ UNK,
    /* 0xB8 */ op("CLV", 1, 2, false, Implied),
    /* 0xB9 */ op("LDA", 3, 4, true, AbsoluteY),
    /* 0xBA */ op("TSX", 1, 2, false, Implied),
    /* 0xBB */ UNK,
    /* 0xBC */ op("LDY", 3, 4, true, AbsoluteX),
    /* 0xBD */ op("LDA", 3, 4, true, AbsoluteX),
    /* 0xBE */ op("LDX", 3, 4, true, AbsoluteY),
    /* 0xBF */ UNK,
    /* 0xC0 */ op("CPY", 2, 2, false, Immediate),
    /* 0xC1 */ op("CMP", 2, 6, false, IndexedIndirect),
    /* 0xC2 */ UNK,
    /* 0xC3 */ UNK,
    /* 0xC4 */ op("CPY", 2, 3, false, ZeroPage),
    /* 0xC5 */ op("CMP", 2, 3, false, ZeroPage),
    /* 0xC6 */ op("DEC", 2, 5, false, ZeroPage),
    /* 0xC7 */ UNK,
    /* 0xC8 */ op("INY", 1, 2, false, Implied),
    /* 0xC9 */ op("CMP", 2, 2, false, Immediate),
    /* 0xCA */ op("DEX", 1, 2, false, Implied),
    /* 0xCB */ UNK,
    /* 0xCC */ op("CPY", 3, 4, false, Absolute),
    /* 0xCD */ op("CMP", 3, 4, false, Absolute),
    /* 0xCE */ op("DEC", 3, 6, false, Absolute),
    /* 0xCF */ UNK,
    /* 0xD0 */ op("BNE", 2, 2, false, Relative),
    /* 0xD1 */ op("CMP", 2, 5, true, IndirectIndexed),
    /* 0xD2 */ UNK,
    /* 0xD3 */ UNK,
    /* 0xD4 */ UNK,
    /* 0xD5 */ op("CMP", 2, 4, false, ZeroPageX),
    /* 0xD6 */ op("DEC", 2, 6, false, ZeroPageX),
    /* 0xD7 */ UNK,
    /* 0xD8 */ op("CLD", 1, 2, false, Implied),
    /* 0xD9 */ op("CMP", 3, 4, true, AbsoluteY),
    /* 0xDA */ UNK,
    /* 0xDB */ UNK,
    /* 0xDC */ UNK,
    /* 0xDD */ op("CMP", 3, 4, true, AbsoluteX),
    /* 0xDE */ op("DEC", 3, 7, false, AbsoluteX),
    /* 0xDF */ UNK,
    /* 0xE0 */ op("CPX", 2, 2, false, Immediate),
    /* 0xE1 */ op("SBC", 2, 6, false, IndexedIndirect),
    /* 0xE2 */ UNK,
    /* 0xE3 */ UNK,
    /* 0xE4 */ op("CPX", 2, 3, false, ZeroPage),
    /* 0xE5 */ op("SBC", 2, 3, false, ZeroPage),
    /* 0xE6 */ op("INC", 2, 5, false, ZeroPage),
    /* 0xE7 */ UNK,
    /* 0xE8 */ op("INX", 1, 2, false, Implied),
    /* 0xE9 */ op("SBC", 2, 2, false, Immediate),
    /* 0xEA */ op("NOP", 1, 2, false, Implied),
    /* 0xEB */ UNK,
    /* 0xEC */ op("CPX", 3, 4, false, Absolute),
    /* 0xED */ op("SBC", 3, 4, false, Absolute),
    /* 0xEE */ op("INC", 3, 6, false, Absolute),
    /* 0xEF */ UNK,
    /* 0xF0 */ op("BEQ", 2, 2, false, Relative),
    /* 0xF1 */ op("SBC", 2, 5, true, IndirectIndexed),
    /* 0xF2 */ UNK,
    /* 0xF3 */ UNK,
    /* 0xF4 */ UNK,
    /* 0xF5 */ op("SBC", 2, 4, false, ZeroPageX),
    /* 0xF6 */ op("INC", 2, 6, false, ZeroPageX),
    /* 0xF7 */ UNK,
    /* 0xF8 */ op("SED", 1, 2, false, Implied),
    /* 0xF9 */ op("SBC", 3, 4, true, AbsoluteY),
    /* 0xFA */ UNK,
    /* 0xFB */ UNK,
    /* 0xFC */ UNK,
    /* 0xFD */ op("SBC", 3, 4, true, AbsoluteX),
    /* 0xFE */ op("INC", 3, 7, false, AbsoluteX),
    /* 0xFF */ UNK,
];
