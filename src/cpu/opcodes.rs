// 6502 opcode table: one descriptor per possible opcode byte.
//
// Building this as a plain array indexed by opcode, filled in once and
// cached behind a `OnceLock`, keeps dispatch a single match over `Mnemonic`
// rather than a table of closures (see the design notes on instruction
// dispatch: a big enum match beats boxed callables here).

use std::sync::OnceLock;

/// The thirteen 6502 addressing modes. `Dummy` is the placeholder used for
/// opcode slots this core does not implement (illegal/undocumented opcodes);
/// it never touches memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Dummy,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Accumulator,
    Immediate,
    Implied,
    IndexedIndirect,
    Indirect,
    IndirectIndexed,
    Relative,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny,
    Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror,
    Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    /// True jam/halt opcode: locks a real 6502 up permanently. This core
    /// treats it as a one-byte no-op instead so emulation can keep running.
    Kil,
    /// Undocumented opcodes with a real addressing mode and cycle cost but
    /// no implemented side effect (SLO, RLA, SRE, RRA, SAX, LAX, DCP, ISC,
    /// ANC, ALR, ARR, AXS, XAA, AHX, TAS, SHX, SHY, LAS below).
    Slo, Rla, Sre, Rra, Sax, Lax, Dcp, Isc, Anc, Alr, Arr, Axs, Xaa, Ahx, Tas, Shx, Shy, Las,
    /// Opcode byte has no official meaning and no known undocumented
    /// behavior; present for timing/length only. Never appears in the
    /// built table (every opcode byte is accounted for above), kept as a
    /// safe default for the table's initial fill.
    Illegal,
}

impl Mnemonic {
    /// Three-letter mnemonic used by the trace log, matching the Nestest
    /// convention (unmapped opcodes, which never occur in the built table,
    /// would log as `???`).
    pub fn as_str(self) -> &'static str {
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
            Tya => "TYA",
            Kil => "KIL", Slo => "SLO", Rla => "RLA", Sre => "SRE", Rra => "RRA",
            Sax => "SAX", Lax => "LAX", Dcp => "DCP", Isc => "ISC", Anc => "ANC",
            Alr => "ALR", Arr => "ARR", Axs => "AXS", Xaa => "XAA", Ahx => "AHX",
            Tas => "TAS", Shx => "SHX", Shy => "SHY", Las => "LAS",
            Illegal => "???",
        }
    }

    /// Whether this mnemonic has no implemented side effect: true jams and
    /// every undocumented-but-timed opcode. `execute::step` routes all of
    /// these through the same diagnostic-only handler.
    pub fn is_unimplemented(self) -> bool {
        use Mnemonic::*;
        matches!(
            self,
            Kil | Slo | Rla | Sre | Rra | Sax | Lax | Dcp | Isc | Anc | Alr | Arr | Axs | Xaa
                | Ahx | Tas | Shx | Shy | Illegal
        )
    }

    /// Whether this is one of the eight conditional branch instructions,
    /// which take an extra cycle when the branch is taken.
    pub fn is_branch(self) -> bool {
        use Mnemonic::*;
        matches!(self, Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs)
    }
}

/// One opcode-table entry: everything dispatch needs to fetch, decode, and
/// cost an instruction without consulting anything else.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Total instruction length in bytes, including the opcode byte.
    /// Zero only for jam opcodes (`Mnemonic::Kil`), which this core treats
    /// as not occupying a real instruction slot at all.
    pub length: u8,
    pub base_cycles: u8,
    /// Whether an extra cycle is charged when an indexed/indirect-indexed
    /// addressing mode crosses a page boundary.
    pub page_penalty: bool,
}

const ILLEGAL: Instruction = Instruction {
    mnemonic: Mnemonic::Illegal,
    mode: AddressingMode::Dummy,
    length: 1,
    base_cycles: 2,
    page_penalty: false,
};

fn set(
    table: &mut [Instruction; 256],
    opcode: u8,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    length: u8,
    base_cycles: u8,
    page_penalty: bool,
) {
    table[opcode as usize] = Instruction {
        mnemonic,
        mode,
        length,
        base_cycles,
        page_penalty,
    };
}

fn build_table() -> [Instruction; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t = [ILLEGAL; 256];

    // ADC
    set(&mut t, 0x69, Adc, Immediate, 2, 2, false);
    set(&mut t, 0x65, Adc, ZeroPage, 2, 3, false);
    set(&mut t, 0x75, Adc, ZeroPageX, 2, 4, false);
    set(&mut t, 0x6D, Adc, Absolute, 3, 4, false);
    set(&mut t, 0x7D, Adc, AbsoluteX, 3, 4, true);
    set(&mut t, 0x79, Adc, AbsoluteY, 3, 4, true);
    set(&mut t, 0x61, Adc, IndexedIndirect, 2, 6, false);
    set(&mut t, 0x71, Adc, IndirectIndexed, 2, 5, true);

    // AND
    set(&mut t, 0x29, And, Immediate, 2, 2, false);
    set(&mut t, 0x25, And, ZeroPage, 2, 3, false);
    set(&mut t, 0x35, And, ZeroPageX, 2, 4, false);
    set(&mut t, 0x2D, And, Absolute, 3, 4, false);
    set(&mut t, 0x3D, And, AbsoluteX, 3, 4, true);
    set(&mut t, 0x39, And, AbsoluteY, 3, 4, true);
    set(&mut t, 0x21, And, IndexedIndirect, 2, 6, false);
    set(&mut t, 0x31, And, IndirectIndexed, 2, 5, true);

    // ASL
    set(&mut t, 0x0A, Asl, Accumulator, 1, 2, false);
    set(&mut t, 0x06, Asl, ZeroPage, 2, 5, false);
    set(&mut t, 0x16, Asl, ZeroPageX, 2, 6, false);
    set(&mut t, 0x0E, Asl, Absolute, 3, 6, false);
    set(&mut t, 0x1E, Asl, AbsoluteX, 3, 7, false);

    // Branches
    set(&mut t, 0x90, Bcc, Relative, 2, 2, false);
    set(&mut t, 0xB0, Bcs, Relative, 2, 2, false);
    set(&mut t, 0xF0, Beq, Relative, 2, 2, false);
    set(&mut t, 0x30, Bmi, Relative, 2, 2, false);
    set(&mut t, 0xD0, Bne, Relative, 2, 2, false);
    set(&mut t, 0x10, Bpl, Relative, 2, 2, false);
    set(&mut t, 0x50, Bvc, Relative, 2, 2, false);
    set(&mut t, 0x70, Bvs, Relative, 2, 2, false);

    // BIT
    set(&mut t, 0x24, Bit, ZeroPage, 2, 3, false);
    set(&mut t, 0x2C, Bit, Absolute, 3, 4, false);

    // BRK
    set(&mut t, 0x00, Brk, Implied, 1, 7, false);

    // Flag clear/set
    set(&mut t, 0x18, Clc, Implied, 1, 2, false);
    set(&mut t, 0xD8, Cld, Implied, 1, 2, false);
    set(&mut t, 0x58, Cli, Implied, 1, 2, false);
    set(&mut t, 0xB8, Clv, Implied, 1, 2, false);
    set(&mut t, 0x38, Sec, Implied, 1, 2, false);
    set(&mut t, 0xF8, Sed, Implied, 1, 2, false);
    set(&mut t, 0x78, Sei, Implied, 1, 2, false);

    // CMP
    set(&mut t, 0xC9, Cmp, Immediate, 2, 2, false);
    set(&mut t, 0xC5, Cmp, ZeroPage, 2, 3, false);
    set(&mut t, 0xD5, Cmp, ZeroPageX, 2, 4, false);
    set(&mut t, 0xCD, Cmp, Absolute, 3, 4, false);
    set(&mut t, 0xDD, Cmp, AbsoluteX, 3, 4, true);
    set(&mut t, 0xD9, Cmp, AbsoluteY, 3, 4, true);
    set(&mut t, 0xC1, Cmp, IndexedIndirect, 2, 6, false);
    set(&mut t, 0xD1, Cmp, IndirectIndexed, 2, 5, true);

    // CPX / CPY
    set(&mut t, 0xE0, Cpx, Immediate, 2, 2, false);
    set(&mut t, 0xE4, Cpx, ZeroPage, 2, 3, false);
    set(&mut t, 0xEC, Cpx, Absolute, 3, 4, false);
    set(&mut t, 0xC0, Cpy, Immediate, 2, 2, false);
    set(&mut t, 0xC4, Cpy, ZeroPage, 2, 3, false);
    set(&mut t, 0xCC, Cpy, Absolute, 3, 4, false);

    // DEC / DEX / DEY
    set(&mut t, 0xC6, Dec, ZeroPage, 2, 5, false);
    set(&mut t, 0xD6, Dec, ZeroPageX, 2, 6, false);
    set(&mut t, 0xCE, Dec, Absolute, 3, 6, false);
    set(&mut t, 0xDE, Dec, AbsoluteX, 3, 7, false);
    set(&mut t, 0xCA, Dex, Implied, 1, 2, false);
    set(&mut t, 0x88, Dey, Implied, 1, 2, false);

    // EOR
    set(&mut t, 0x49, Eor, Immediate, 2, 2, false);
    set(&mut t, 0x45, Eor, ZeroPage, 2, 3, false);
    set(&mut t, 0x55, Eor, ZeroPageX, 2, 4, false);
    set(&mut t, 0x4D, Eor, Absolute, 3, 4, false);
    set(&mut t, 0x5D, Eor, AbsoluteX, 3, 4, true);
    set(&mut t, 0x59, Eor, AbsoluteY, 3, 4, true);
    set(&mut t, 0x41, Eor, IndexedIndirect, 2, 6, false);
    set(&mut t, 0x51, Eor, IndirectIndexed, 2, 5, true);

    // INC / INX / INY
    set(&mut t, 0xE6, Inc, ZeroPage, 2, 5, false);
    set(&mut t, 0xF6, Inc, ZeroPageX, 2, 6, false);
    set(&mut t, 0xEE, Inc, Absolute, 3, 6, false);
    set(&mut t, 0xFE, Inc, AbsoluteX, 3, 7, false);
    set(&mut t, 0xE8, Inx, Implied, 1, 2, false);
    set(&mut t, 0xC8, Iny, Implied, 1, 2, false);

    // JMP / JSR / RTS / RTI
    set(&mut t, 0x4C, Jmp, Absolute, 3, 3, false);
    set(&mut t, 0x6C, Jmp, Indirect, 3, 5, false);
    set(&mut t, 0x20, Jsr, Absolute, 3, 6, false);
    set(&mut t, 0x60, Rts, Implied, 1, 6, false);
    set(&mut t, 0x40, Rti, Implied, 1, 6, false);

    // LDA / LDX / LDY
    set(&mut t, 0xA9, Lda, Immediate, 2, 2, false);
    set(&mut t, 0xA5, Lda, ZeroPage, 2, 3, false);
    set(&mut t, 0xB5, Lda, ZeroPageX, 2, 4, false);
    set(&mut t, 0xAD, Lda, Absolute, 3, 4, false);
    set(&mut t, 0xBD, Lda, AbsoluteX, 3, 4, true);
    set(&mut t, 0xB9, Lda, AbsoluteY, 3, 4, true);
    set(&mut t, 0xA1, Lda, IndexedIndirect, 2, 6, false);
    set(&mut t, 0xB1, Lda, IndirectIndexed, 2, 5, true);

    set(&mut t, 0xA2, Ldx, Immediate, 2, 2, false);
    set(&mut t, 0xA6, Ldx, ZeroPage, 2, 3, false);
    set(&mut t, 0xB6, Ldx, ZeroPageY, 2, 4, false);
    set(&mut t, 0xAE, Ldx, Absolute, 3, 4, false);
    set(&mut t, 0xBE, Ldx, AbsoluteY, 3, 4, true);

    set(&mut t, 0xA0, Ldy, Immediate, 2, 2, false);
    set(&mut t, 0xA4, Ldy, ZeroPage, 2, 3, false);
    set(&mut t, 0xB4, Ldy, ZeroPageX, 2, 4, false);
    set(&mut t, 0xAC, Ldy, Absolute, 3, 4, false);
    set(&mut t, 0xBC, Ldy, AbsoluteX, 3, 4, true);

    // LSR
    set(&mut t, 0x4A, Lsr, Accumulator, 1, 2, false);
    set(&mut t, 0x46, Lsr, ZeroPage, 2, 5, false);
    set(&mut t, 0x56, Lsr, ZeroPageX, 2, 6, false);
    set(&mut t, 0x4E, Lsr, Absolute, 3, 6, false);
    set(&mut t, 0x5E, Lsr, AbsoluteX, 3, 7, false);

    // NOP
    set(&mut t, 0xEA, Nop, Implied, 1, 2, false);

    // ORA
    set(&mut t, 0x09, Ora, Immediate, 2, 2, false);
    set(&mut t, 0x05, Ora, ZeroPage, 2, 3, false);
    set(&mut t, 0x15, Ora, ZeroPageX, 2, 4, false);
    set(&mut t, 0x0D, Ora, Absolute, 3, 4, false);
    set(&mut t, 0x1D, Ora, AbsoluteX, 3, 4, true);
    set(&mut t, 0x19, Ora, AbsoluteY, 3, 4, true);
    set(&mut t, 0x01, Ora, IndexedIndirect, 2, 6, false);
    set(&mut t, 0x11, Ora, IndirectIndexed, 2, 5, true);

    // Stack ops
    set(&mut t, 0x48, Pha, Implied, 1, 3, false);
    set(&mut t, 0x08, Php, Implied, 1, 3, false);
    set(&mut t, 0x68, Pla, Implied, 1, 4, false);
    set(&mut t, 0x28, Plp, Implied, 1, 4, false);

    // ROL / ROR
    set(&mut t, 0x2A, Rol, Accumulator, 1, 2, false);
    set(&mut t, 0x26, Rol, ZeroPage, 2, 5, false);
    set(&mut t, 0x36, Rol, ZeroPageX, 2, 6, false);
    set(&mut t, 0x2E, Rol, Absolute, 3, 6, false);
    set(&mut t, 0x3E, Rol, AbsoluteX, 3, 7, false);

    set(&mut t, 0x6A, Ror, Accumulator, 1, 2, false);
    set(&mut t, 0x66, Ror, ZeroPage, 2, 5, false);
    set(&mut t, 0x76, Ror, ZeroPageX, 2, 6, false);
    set(&mut t, 0x6E, Ror, Absolute, 3, 6, false);
    set(&mut t, 0x7E, Ror, AbsoluteX, 3, 7, false);

    // SBC
    set(&mut t, 0xE9, Sbc, Immediate, 2, 2, false);
    set(&mut t, 0xE5, Sbc, ZeroPage, 2, 3, false);
    set(&mut t, 0xF5, Sbc, ZeroPageX, 2, 4, false);
    set(&mut t, 0xED, Sbc, Absolute, 3, 4, false);
    set(&mut t, 0xFD, Sbc, AbsoluteX, 3, 4, true);
    set(&mut t, 0xF9, Sbc, AbsoluteY, 3, 4, true);
    set(&mut t, 0xE1, Sbc, IndexedIndirect, 2, 6, false);
    set(&mut t, 0xF1, Sbc, IndirectIndexed, 2, 5, true);

    // STA / STX / STY
    set(&mut t, 0x85, Sta, ZeroPage, 2, 3, false);
    set(&mut t, 0x95, Sta, ZeroPageX, 2, 4, false);
    set(&mut t, 0x8D, Sta, Absolute, 3, 4, false);
    set(&mut t, 0x9D, Sta, AbsoluteX, 3, 5, false);
    set(&mut t, 0x99, Sta, AbsoluteY, 3, 5, false);
    set(&mut t, 0x81, Sta, IndexedIndirect, 2, 6, false);
    set(&mut t, 0x91, Sta, IndirectIndexed, 2, 6, false);

    set(&mut t, 0x86, Stx, ZeroPage, 2, 3, false);
    set(&mut t, 0x96, Stx, ZeroPageY, 2, 4, false);
    set(&mut t, 0x8E, Stx, Absolute, 3, 4, false);

    set(&mut t, 0x84, Sty, ZeroPage, 2, 3, false);
    set(&mut t, 0x94, Sty, ZeroPageX, 2, 4, false);
    set(&mut t, 0x8C, Sty, Absolute, 3, 4, false);

    // Transfers
    set(&mut t, 0xAA, Tax, Implied, 1, 2, false);
    set(&mut t, 0xA8, Tay, Implied, 1, 2, false);
    set(&mut t, 0xBA, Tsx, Implied, 1, 2, false);
    set(&mut t, 0x8A, Txa, Implied, 1, 2, false);
    set(&mut t, 0x9A, Txs, Implied, 1, 2, false);
    set(&mut t, 0x98, Tya, Implied, 1, 2, false);

    // --- Unofficial/illegal opcodes ---
    // Every byte below either jams the processor on real hardware (KIL) or
    // runs as an undocumented instruction with a genuine addressing mode
    // and cycle cost. None of them have an implemented side effect here,
    // but a ROM that executes one (deliberately, as some do for padding or
    // timing, or by accident) must still see the real byte length and
    // cycle count or cycle-accurate tests and games desync.

    // KIL: locks up a real 6502; treated as a one-byte no-op here.
    for opcode in [0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2] {
        set(&mut t, opcode, Kil, Dummy, 0, 2, false);
    }

    // Undocumented NOPs: burn cycles and bytes like NOP, touch nothing.
    for opcode in [0x1A, 0x3A, 0x5A, 0x7A, 0xDA, 0xFA] {
        set(&mut t, opcode, Nop, Implied, 1, 2, false);
    }
    for opcode in [0x80, 0x82, 0x89, 0xC2, 0xE2] {
        set(&mut t, opcode, Nop, Immediate, 2, 2, false);
    }
    for opcode in [0x04, 0x44, 0x64] {
        set(&mut t, opcode, Nop, ZeroPage, 2, 3, false);
    }
    for opcode in [0x14, 0x34, 0x54, 0x74, 0xD4, 0xF4] {
        set(&mut t, opcode, Nop, ZeroPageX, 2, 4, false);
    }
    set(&mut t, 0x0C, Nop, Absolute, 3, 4, false);
    for opcode in [0x1C, 0x3C, 0x5C, 0x7C, 0xDC, 0xFC] {
        set(&mut t, opcode, Nop, AbsoluteX, 3, 4, true);
    }

    // 0xEB duplicates 0xE9 (SBC immediate) byte-for-byte.
    set(&mut t, 0xEB, Sbc, Immediate, 2, 2, false);

    // SLO: ASL then ORA into A.
    set(&mut t, 0x03, Slo, IndexedIndirect, 2, 8, false);
    set(&mut t, 0x07, Slo, ZeroPage, 2, 5, false);
    set(&mut t, 0x0F, Slo, Absolute, 3, 6, false);
    set(&mut t, 0x13, Slo, IndirectIndexed, 2, 8, false);
    set(&mut t, 0x17, Slo, ZeroPageX, 2, 6, false);
    set(&mut t, 0x1B, Slo, AbsoluteY, 3, 7, false);
    set(&mut t, 0x1F, Slo, AbsoluteX, 3, 7, false);

    // RLA: ROL then AND into A.
    set(&mut t, 0x23, Rla, IndexedIndirect, 2, 8, false);
    set(&mut t, 0x27, Rla, ZeroPage, 2, 5, false);
    set(&mut t, 0x2F, Rla, Absolute, 3, 6, false);
    set(&mut t, 0x33, Rla, IndirectIndexed, 2, 8, false);
    set(&mut t, 0x37, Rla, ZeroPageX, 2, 6, false);
    set(&mut t, 0x3B, Rla, AbsoluteY, 3, 7, false);
    set(&mut t, 0x3F, Rla, AbsoluteX, 3, 7, false);

    // SRE: LSR then EOR into A.
    set(&mut t, 0x43, Sre, IndexedIndirect, 2, 8, false);
    set(&mut t, 0x47, Sre, ZeroPage, 2, 5, false);
    set(&mut t, 0x4F, Sre, Absolute, 3, 6, false);
    set(&mut t, 0x53, Sre, IndirectIndexed, 2, 8, false);
    set(&mut t, 0x57, Sre, ZeroPageX, 2, 6, false);
    set(&mut t, 0x5B, Sre, AbsoluteY, 3, 7, false);
    set(&mut t, 0x5F, Sre, AbsoluteX, 3, 7, false);

    // RRA: ROR then ADC into A.
    set(&mut t, 0x63, Rra, IndexedIndirect, 2, 8, false);
    set(&mut t, 0x67, Rra, ZeroPage, 2, 5, false);
    set(&mut t, 0x6F, Rra, Absolute, 3, 6, false);
    set(&mut t, 0x73, Rra, IndirectIndexed, 2, 8, false);
    set(&mut t, 0x77, Rra, ZeroPageX, 2, 6, false);
    set(&mut t, 0x7B, Rra, AbsoluteY, 3, 7, false);
    set(&mut t, 0x7F, Rra, AbsoluteX, 3, 7, false);

    // SAX: stores A & X.
    set(&mut t, 0x83, Sax, IndexedIndirect, 2, 6, false);
    set(&mut t, 0x87, Sax, ZeroPage, 2, 3, false);
    set(&mut t, 0x8F, Sax, Absolute, 3, 4, false);
    set(&mut t, 0x97, Sax, ZeroPageY, 2, 4, false);

    // LAX: loads A and X from the same fetch.
    set(&mut t, 0xA3, Lax, IndexedIndirect, 2, 6, false);
    set(&mut t, 0xA7, Lax, ZeroPage, 2, 3, false);
    set(&mut t, 0xAB, Lax, Immediate, 2, 2, false);
    set(&mut t, 0xAF, Lax, Absolute, 3, 4, false);
    set(&mut t, 0xB3, Lax, IndirectIndexed, 2, 5, true);
    set(&mut t, 0xB7, Lax, ZeroPageY, 2, 4, false);
    set(&mut t, 0xBF, Lax, AbsoluteY, 3, 4, true);

    // DCP: DEC then CMP.
    set(&mut t, 0xC3, Dcp, IndexedIndirect, 2, 8, false);
    set(&mut t, 0xC7, Dcp, ZeroPage, 2, 5, false);
    set(&mut t, 0xCF, Dcp, Absolute, 3, 6, false);
    set(&mut t, 0xD3, Dcp, IndirectIndexed, 2, 8, false);
    set(&mut t, 0xD7, Dcp, ZeroPageX, 2, 6, false);
    set(&mut t, 0xDB, Dcp, AbsoluteY, 3, 7, false);
    set(&mut t, 0xDF, Dcp, AbsoluteX, 3, 7, false);

    // ISC: INC then SBC.
    set(&mut t, 0xE3, Isc, IndexedIndirect, 2, 8, false);
    set(&mut t, 0xE7, Isc, ZeroPage, 2, 5, false);
    set(&mut t, 0xEF, Isc, Absolute, 3, 6, false);
    set(&mut t, 0xF3, Isc, IndirectIndexed, 2, 8, false);
    set(&mut t, 0xF7, Isc, ZeroPageX, 2, 6, false);
    set(&mut t, 0xFB, Isc, AbsoluteY, 3, 7, false);
    set(&mut t, 0xFF, Isc, AbsoluteX, 3, 7, false);

    // Single-opcode unofficial instructions.
    set(&mut t, 0x0B, Anc, Immediate, 2, 2, false);
    set(&mut t, 0x2B, Anc, Immediate, 2, 2, false);
    set(&mut t, 0x4B, Alr, Immediate, 2, 2, false);
    set(&mut t, 0x6B, Arr, Immediate, 2, 2, false);
    set(&mut t, 0xCB, Axs, Immediate, 2, 2, false);
    set(&mut t, 0x8B, Xaa, Immediate, 2, 2, false);
    set(&mut t, 0x93, Ahx, IndirectIndexed, 2, 6, false);
    set(&mut t, 0x9F, Ahx, AbsoluteY, 3, 5, false);
    set(&mut t, 0x9B, Tas, AbsoluteY, 3, 5, false);
    set(&mut t, 0x9E, Shx, AbsoluteY, 3, 5, false);
    set(&mut t, 0x9C, Shy, AbsoluteX, 3, 5, false);
    set(&mut t, 0xBB, Las, AbsoluteY, 3, 4, true);

    t
}

static TABLE: OnceLock<[Instruction; 256]> = OnceLock::new();

/// The full 256-entry opcode table, built once and cached.
pub fn table() -> &'static [Instruction; 256] {
    TABLE.get_or_init(build_table)
}
