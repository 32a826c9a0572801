//! Instruction decoding for the 8080.
//!
//! [`decode`] maps every one of the 256 opcode byte values to a tagged
//! instruction. Bytes with no meaning on the 8080 map to
//! [`Op::Undefined`] and defined opcodes outside the supported subset map
//! to [`Op::Unsupported`], so the executor faults instead of guessing.

/// An 8-bit operand location: a register, or memory through H,L.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    /// The memory byte addressed by the HL pair.
    M,
    A,
}

impl Reg {
    /// Decode the 3-bit register field used by MOV, INR/DCR, MVI and the
    /// arithmetic/logic block.
    const fn from_bits(bits: u8) -> Self {
        match bits & 7 {
            0 => Self::B,
            1 => Self::C,
            2 => Self::D,
            3 => Self::E,
            4 => Self::H,
            5 => Self::L,
            6 => Self::M,
            _ => Self::A,
        }
    }
}

/// A 16-bit register pair. The first-named register holds the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    BC,
    DE,
    HL,
    SP,
}

/// One decoded 8080 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Nop,

    // Data transfer
    Mov(Reg, Reg),
    Mvi(Reg),
    Lxi(Pair),
    Stax(Pair),
    Ldax(Pair),
    Sta,
    Lda,
    Shld,
    Lhld,

    // Arithmetic and logic into the accumulator
    Add(Reg),
    Adc(Reg),
    Sub(Reg),
    Sbb(Reg),
    Ana(Reg),
    Xra(Reg),
    Ora(Reg),
    Adi,
    Aci,
    Sui,
    Ani,
    Ori,

    // Increment/decrement and pair arithmetic
    Inr(Reg),
    Dcr(Reg),
    Inx(Pair),
    Dcx(Pair),
    Dad(Pair),

    // Accumulator rotates and flag instructions
    Rlc,
    Rrc,
    Ral,
    Rar,
    Daa,
    Cma,
    Stc,
    Cmc,

    // Control transfer
    Jmp,
    Jnz,
    Jz,

    /// Defined by the architecture but not supported by this core.
    Unsupported,
    /// No defined meaning on the 8080.
    Undefined,
}

/// Decode one opcode byte. Total over all 256 values.
#[must_use]
pub const fn decode(opcode: u8) -> Op {
    match opcode {
        0x00 => Op::Nop,

        0x01 => Op::Lxi(Pair::BC),
        0x11 => Op::Lxi(Pair::DE),
        0x21 => Op::Lxi(Pair::HL),
        0x31 => Op::Lxi(Pair::SP),

        0x02 => Op::Stax(Pair::BC),
        0x12 => Op::Stax(Pair::DE),
        0x0A => Op::Ldax(Pair::BC),
        0x1A => Op::Ldax(Pair::DE),

        0x22 => Op::Shld,
        0x2A => Op::Lhld,
        0x32 => Op::Sta,
        0x3A => Op::Lda,

        0x03 => Op::Inx(Pair::BC),
        0x13 => Op::Inx(Pair::DE),
        0x23 => Op::Inx(Pair::HL),
        0x33 => Op::Inx(Pair::SP),
        0x0B => Op::Dcx(Pair::BC),
        0x1B => Op::Dcx(Pair::DE),
        0x2B => Op::Dcx(Pair::HL),
        0x3B => Op::Dcx(Pair::SP),
        0x09 => Op::Dad(Pair::BC),
        0x19 => Op::Dad(Pair::DE),
        0x29 => Op::Dad(Pair::HL),
        0x39 => Op::Dad(Pair::SP),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            Op::Inr(Reg::from_bits(opcode >> 3))
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            Op::Dcr(Reg::from_bits(opcode >> 3))
        }
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            Op::Mvi(Reg::from_bits(opcode >> 3))
        }

        0x07 => Op::Rlc,
        0x0F => Op::Rrc,
        0x17 => Op::Ral,
        0x1F => Op::Rar,

        0x27 => Op::Daa,
        0x2F => Op::Cma,
        0x37 => Op::Stc,
        0x3F => Op::Cmc,

        // MOV block; 0x76 is the HLT slot, not MOV M,M.
        0x40..=0x75 | 0x77..=0x7F => Op::Mov(Reg::from_bits(opcode >> 3), Reg::from_bits(opcode)),

        0x80..=0x87 => Op::Add(Reg::from_bits(opcode)),
        0x88..=0x8F => Op::Adc(Reg::from_bits(opcode)),
        0x90..=0x97 => Op::Sub(Reg::from_bits(opcode)),
        0x98..=0x9F => Op::Sbb(Reg::from_bits(opcode)),
        0xA0..=0xA7 => Op::Ana(Reg::from_bits(opcode)),
        0xA8..=0xAF => Op::Xra(Reg::from_bits(opcode)),
        0xB0..=0xB7 => Op::Ora(Reg::from_bits(opcode)),

        0xC2 => Op::Jnz,
        0xC3 => Op::Jmp,
        0xCA => Op::Jz,

        0xC6 => Op::Adi,
        0xCE => Op::Aci,
        0xD6 => Op::Sui,
        0xE6 => Op::Ani,
        0xF6 => Op::Ori,

        // Bytes with no defined meaning on the 8080.
        0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 | 0xCB => Op::Undefined,

        // HLT, CMP/CPI, the remaining conditional jumps, the call/return
        // and push/pop families, XCHG/XTHL/SPHL/PCHL, IN/OUT, EI/DI and
        // RST are architecturally defined but outside this core's subset.
        0x76
        | 0xB8..=0xC1
        | 0xC4
        | 0xC5
        | 0xC7..=0xC9
        | 0xCC
        | 0xCD
        | 0xCF
        | 0xD0..=0xD5
        | 0xD7..=0xDF
        | 0xE0..=0xE5
        | 0xE7..=0xEF
        | 0xF0..=0xF5
        | 0xF7..=0xFF => Op::Unsupported,
    }
}
