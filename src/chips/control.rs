//! ALU control word and the canonical operation table.
//!
//! Six control bits steer the ALU, in this order:
//! `zx` (zero x), `nx` (negate x), `zy` (zero y), `ny` (negate y),
//! `f` (1 = add, 0 = and), `no` (negate out).
//!
//! Eighteen of the 64 possible words compute the standard operations
//! listed in [`AluOp`]; the rest are legal but have no conventional name.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::logic::{Bit, Bus, ParseError};

/// The six ALU control bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ControlWord {
    /// Zero the x input
    pub zx: Bit,
    /// Negate the x input
    pub nx: Bit,
    /// Zero the y input
    pub zy: Bit,
    /// Negate the y input
    pub ny: Bit,
    /// Compute x + y (1) or x & y (0)
    pub f: Bit,
    /// Negate the output
    pub no: Bit,
}

impl ControlWord {
    /// Number of control bits.
    pub const WIDTH: usize = 6;

    /// Create from bits in `zx, nx, zy, ny, f, no` order.
    pub const fn from_bits(bits: [Bit; 6]) -> Self {
        let [zx, nx, zy, ny, f, no] = bits;
        Self { zx, nx, zy, ny, f, no }
    }

    /// Bits in `zx, nx, zy, ny, f, no` order.
    pub const fn to_bits(self) -> [Bit; 6] {
        [self.zx, self.nx, self.zy, self.ny, self.f, self.no]
    }

    /// The six bits packed MSB-first (zx is bit 5).
    pub fn to_u8(self) -> u8 {
        Bus::from_bits(self.to_bits()).to_u16() as u8
    }

    /// Create from the low six bits of a packed value (zx is bit 5).
    pub fn from_u8(value: u8) -> Self {
        Self::from_bits(*Bus::<6>::from_u16(u16::from(value)).bits())
    }

    /// The canonical operation this word computes, if it is one of the 18.
    pub fn operation(self) -> Option<AluOp> {
        AluOp::ALL.into_iter().find(|op| op.control() == self)
    }

    /// Parse six `0`/`1` digits in `zx..no` order, e.g. "000010".
    pub fn parse(s: &str) -> Result<Self, ControlError> {
        let bits = Bus::<6>::parse(s)?;
        Ok(Self::from_bits(*bits.bits()))
    }
}

impl fmt::Display for ControlWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.to_bits() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl FromStr for ControlWord {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<AluOp> for ControlWord {
    fn from(op: AluOp) -> Self {
        op.control()
    }
}

/// The 18 canonical ALU operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AluOp {
    // ==================== Constants ====================

    /// 0
    Zero,
    /// 1
    One,
    /// -1
    MinusOne,

    // ==================== Pass / negate ====================

    /// x
    X,
    /// y
    Y,
    /// !x (bitwise)
    NotX,
    /// !y (bitwise)
    NotY,
    /// -x (two's complement)
    NegX,
    /// -y (two's complement)
    NegY,

    // ==================== Arithmetic ====================

    /// x + 1
    IncX,
    /// y + 1
    IncY,
    /// x - 1
    DecX,
    /// y - 1
    DecY,
    /// x + y
    Add,
    /// x - y
    SubXY,
    /// y - x
    SubYX,

    // ==================== Logic ====================

    /// x & y
    And,
    /// x | y
    Or,
}

/// Shorthand for building the table below.
const fn word(bits: [u8; 6]) -> ControlWord {
    let [zx, nx, zy, ny, f, no] = bits;
    ControlWord::from_bits([
        Bit::from_bool(zx != 0), Bit::from_bool(nx != 0),
        Bit::from_bool(zy != 0), Bit::from_bool(ny != 0),
        Bit::from_bool(f != 0), Bit::from_bool(no != 0),
    ])
}

impl AluOp {
    /// All operations, in the conventional table order.
    pub const ALL: [AluOp; 18] = [
        AluOp::Zero, AluOp::One, AluOp::MinusOne,
        AluOp::X, AluOp::Y, AluOp::NotX, AluOp::NotY, AluOp::NegX, AluOp::NegY,
        AluOp::IncX, AluOp::IncY, AluOp::DecX, AluOp::DecY,
        AluOp::Add, AluOp::SubXY, AluOp::SubYX,
        AluOp::And, AluOp::Or,
    ];

    /// The control word that makes the ALU compute this operation.
    pub const fn control(self) -> ControlWord {
        match self {
            //                     zx nx zy ny  f no
            AluOp::Zero     => word([1, 0, 1, 0, 1, 0]),
            AluOp::One      => word([1, 1, 1, 1, 1, 1]),
            AluOp::MinusOne => word([1, 1, 1, 0, 1, 0]),
            AluOp::X        => word([0, 0, 1, 1, 0, 0]),
            AluOp::Y        => word([1, 1, 0, 0, 0, 0]),
            AluOp::NotX     => word([0, 0, 1, 1, 0, 1]),
            AluOp::NotY     => word([1, 1, 0, 0, 0, 1]),
            AluOp::NegX     => word([0, 0, 1, 1, 1, 1]),
            AluOp::NegY     => word([1, 1, 0, 0, 1, 1]),
            AluOp::IncX     => word([0, 1, 1, 1, 1, 1]),
            AluOp::IncY     => word([1, 1, 0, 1, 1, 1]),
            AluOp::DecX     => word([0, 0, 1, 1, 1, 0]),
            AluOp::DecY     => word([1, 1, 0, 0, 1, 0]),
            AluOp::Add      => word([0, 0, 0, 0, 1, 0]),
            AluOp::SubXY    => word([0, 1, 0, 0, 1, 1]),
            AluOp::SubYX    => word([0, 0, 0, 1, 1, 1]),
            AluOp::And      => word([0, 0, 0, 0, 0, 0]),
            AluOp::Or       => word([0, 1, 0, 1, 0, 1]),
        }
    }

    /// Conventional mnemonic, e.g. `x+y` or `!x`.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Zero => "0",
            AluOp::One => "1",
            AluOp::MinusOne => "-1",
            AluOp::X => "x",
            AluOp::Y => "y",
            AluOp::NotX => "!x",
            AluOp::NotY => "!y",
            AluOp::NegX => "-x",
            AluOp::NegY => "-y",
            AluOp::IncX => "x+1",
            AluOp::IncY => "y+1",
            AluOp::DecX => "x-1",
            AluOp::DecY => "y-1",
            AluOp::Add => "x+y",
            AluOp::SubXY => "x-y",
            AluOp::SubYX => "y-x",
            AluOp::And => "x&y",
            AluOp::Or => "x|y",
        }
    }

    /// Host-integer result of the operation, for checking the gate-level ALU.
    pub fn reference(self, x: u16, y: u16) -> u16 {
        match self {
            AluOp::Zero => 0,
            AluOp::One => 1,
            AluOp::MinusOne => u16::MAX,
            AluOp::X => x,
            AluOp::Y => y,
            AluOp::NotX => !x,
            AluOp::NotY => !y,
            AluOp::NegX => x.wrapping_neg(),
            AluOp::NegY => y.wrapping_neg(),
            AluOp::IncX => x.wrapping_add(1),
            AluOp::IncY => y.wrapping_add(1),
            AluOp::DecX => x.wrapping_sub(1),
            AluOp::DecY => y.wrapping_sub(1),
            AluOp::Add => x.wrapping_add(y),
            AluOp::SubXY => x.wrapping_sub(y),
            AluOp::SubYX => y.wrapping_sub(x),
            AluOp::And => x & y,
            AluOp::Or => x | y,
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for AluOp {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let wanted = wanted.to_ascii_lowercase();
        AluOp::ALL
            .into_iter()
            .find(|op| op.mnemonic() == wanted)
            .ok_or_else(|| ControlError::UnknownOperation(s.trim().to_string()))
    }
}

/// Errors that can occur when parsing control words and operation names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("unknown ALU operation '{0}' (expected one of 0, 1, -1, x, y, !x, !y, -x, -y, x+1, y+1, x-1, y-1, x+y, x-y, y-x, x&y, x|y)")]
    UnknownOperation(String),

    #[error("invalid control word: {0}")]
    Bits(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_words_are_distinct() {
        let words: HashSet<ControlWord> = AluOp::ALL.iter().map(|op| op.control()).collect();
        assert_eq!(words.len(), AluOp::ALL.len());
    }

    #[test]
    fn test_operation_lookup() {
        for op in AluOp::ALL {
            assert_eq!(op.control().operation(), Some(op));
        }
        // zx=0 nx=0 zy=0 ny=0 f=0 no=1 is !(x&y): legal, but not canonical
        assert_eq!(ControlWord::parse("000001").unwrap().operation(), None);
    }

    #[test]
    fn test_parse_and_display() {
        let word = ControlWord::parse("001111").unwrap();
        assert_eq!(word, AluOp::NegX.control());
        assert_eq!(word.to_string(), "001111");
        assert!(matches!(
            ControlWord::parse("0011"),
            Err(ControlError::Bits(ParseError::WrongLength { expected: 6, got: 4 }))
        ));
        assert!(matches!(
            ControlWord::parse("00111z"),
            Err(ControlError::Bits(ParseError::InvalidChar('z')))
        ));
    }

    #[test]
    fn test_packed_form() {
        assert_eq!(AluOp::Zero.control().to_u8(), 0b101010);
        assert_eq!(ControlWord::from_u8(0b000010), AluOp::Add.control());
        for value in 0..64u8 {
            assert_eq!(ControlWord::from_u8(value).to_u8(), value);
        }
    }

    #[test]
    fn test_mnemonic_parse() {
        for op in AluOp::ALL {
            assert_eq!(op.mnemonic().parse::<AluOp>(), Ok(op));
        }
        assert_eq!(" X + Y ".parse::<AluOp>(), Ok(AluOp::Add));
        assert!(matches!("x*y".parse::<AluOp>(), Err(ControlError::UnknownOperation(_))));
    }

    #[test]
    fn test_reference_semantics() {
        assert_eq!(AluOp::NegX.reference(1, 0), 0xFFFF);
        assert_eq!(AluOp::SubYX.reference(3, 10), 7);
        assert_eq!(AluOp::DecX.reference(0, 0), 0xFFFF);
        assert_eq!(AluOp::Or.reference(0x0F00, 0x00F0), 0x0FF0);
    }
}
