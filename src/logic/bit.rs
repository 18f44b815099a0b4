//! Single binary signal (bit).
//!
//! A bit is either low (0) or high (1). It carries no identity beyond its
//! value and is never mutated in place: every gate produces a fresh `Bit`.
//!
//! `Bit` intentionally has no `!`, `&` or `|` operators. The only code that
//! looks at the underlying boolean is the designated [`Primitive`] in
//! [`crate::logic::primitive`]; everything else is wired from NAND.
//!
//! [`Primitive`]: crate::logic::Primitive

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single binary signal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    /// Low (0)
    #[default]
    Low = 0,
    /// High (1)
    High = 1,
}

impl Bit {
    /// Both bit values in order: Low, High
    pub const ALL: [Bit; 2] = [Bit::Low, Bit::High];

    /// Create a bit from a boolean.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Bit::High } else { Bit::Low }
    }

    /// Convert to a boolean.
    #[inline]
    pub const fn to_bool(self) -> bool {
        matches!(self, Bit::High)
    }

    /// Create a bit from an integer value.
    ///
    /// # Panics
    /// Panics if value is not 0 or 1.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Bit::Low,
            1 => Bit::High,
            _ => panic!("Invalid bit value: {} (must be 0 or 1)", value),
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns true if this bit is high.
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Bit::High)
    }

    /// Returns true if this bit is low.
    #[inline]
    pub const fn is_low(self) -> bool {
        matches!(self, Bit::Low)
    }

    /// Parse a single `0`/`1` character.
    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Low),
            '1' => Some(Bit::High),
            _ => None,
        }
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Low => write!(f, "L"),
            Bit::High => write!(f, "H"),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Bit::from_bool(value)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.to_bool()
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.to_u8()
    }
}
