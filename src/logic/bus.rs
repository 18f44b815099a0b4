//! Fixed-width buses.
//!
//! A bus is an ordered group of wires carried as one value. The width is
//! part of the type, so a `Bus16` can never be handed to a chip expecting a
//! `Bus8`. The widths used by the chip set are:
//! - `Bus2` / `Bus3`: selector inputs of the 4-way and 8-way selectors
//! - `Bus4` / `Bus8`: demultiplexer outputs and the `Or8Way` input
//! - `Bus16`: the machine word
//!
//! Everything in this module is wiring only: splitting, joining and
//! reading buses never goes through a gate.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use crate::logic::Bit;

/// An N-wire bus.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bus<const N: usize> {
    /// Bits stored from most significant (index 0) to least significant (index N-1)
    bits: [Bit; N],
}

/// 2-wire bus (4-way selector input).
pub type Bus2 = Bus<2>;
/// 3-wire bus (8-way selector input).
pub type Bus3 = Bus<3>;
/// 4-wire bus.
pub type Bus4 = Bus<4>;
/// 8-wire bus.
pub type Bus8 = Bus<8>;
/// 16-wire bus, the machine word.
pub type Bus16 = Bus<16>;

impl<const N: usize> Bus<N> {
    /// Number of wires.
    pub const WIDTH: usize = N;

    /// A bus with every wire tied low.
    #[inline]
    pub const fn zero() -> Self {
        Self { bits: [Bit::Low; N] }
    }

    /// Create a bus from an array of bits (MSB first).
    #[inline]
    pub const fn from_bits(bits: [Bit; N]) -> Self {
        Self { bits }
    }

    /// Create a bus by computing each wire from its index (0 = MSB).
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> Bit>(f: F) -> Self {
        Self { bits: std::array::from_fn(f) }
    }

    /// Get the underlying bit array.
    #[inline]
    pub const fn bits(&self) -> &[Bit; N] {
        &self.bits
    }

    /// Get a single wire by index (0 = MSB).
    #[inline]
    pub const fn get(&self, index: usize) -> Bit {
        self.bits[index]
    }

    /// Iterate over the wires, MSB first.
    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    /// Load the low N bits of an unsigned value.
    ///
    /// Wires above bit 15 of a wider bus are tied low.
    pub fn from_u16(value: u16) -> Self {
        Self::from_fn(|i| {
            let shift = N - 1 - i;
            if shift >= 16 {
                Bit::Low
            } else {
                Bit::from_bool((value >> shift) & 1 == 1)
            }
        })
    }

    /// Read the bus as an unsigned integer (only the low 16 wires count).
    pub fn to_u16(&self) -> u16 {
        self.bits
            .iter()
            .fold(0u16, |acc, bit| (acc << 1) | u16::from(bit.to_u8()))
    }

    /// Parse from a string like "0b0101" or "0101" (exactly N digits, `_` allowed).
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        let s = s.strip_prefix("0b").unwrap_or(s);
        let digits: Vec<char> = s.chars().filter(|c| *c != '_').collect();

        if digits.len() != N {
            return Err(ParseError::WrongLength { expected: N, got: digits.len() });
        }

        let mut bits = [Bit::Low; N];
        for (slot, c) in bits.iter_mut().zip(digits) {
            *slot = Bit::from_char(c).ok_or(ParseError::InvalidChar(c))?;
        }

        Ok(Self { bits })
    }
}

impl Bus16 {
    /// Read the word as a two's-complement integer.
    #[inline]
    pub fn to_i16(&self) -> i16 {
        self.to_u16() as i16
    }

    /// Load a two's-complement integer.
    #[inline]
    pub fn from_i16(value: i16) -> Self {
        Self::from_u16(value as u16)
    }

    /// Split into the high byte (wires 0..8) and low byte (wires 8..16).
    pub fn halves(&self) -> (Bus8, Bus8) {
        (
            Bus8::from_fn(|i| self.bits[i]),
            Bus8::from_fn(|i| self.bits[i + 8]),
        )
    }

    /// Parse a numeric literal: `0x` hex, `0b` binary, or signed decimal.
    ///
    /// Decimal values in -32768..=-1 are stored in two's complement, so
    /// "-1" and "65535" name the same word.
    pub fn parse_literal(s: &str) -> Result<Self, ParseError> {
        let text = s.trim();
        let cleaned: String = text.chars().filter(|c| *c != '_').collect();
        let radix_err = |e: std::num::ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseError::OutOfRange(text.to_string())
            }
            _ => ParseError::InvalidNumber(text.to_string()),
        };

        if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
            return u16::from_str_radix(hex, 16).map(Self::from_u16).map_err(radix_err);
        }
        if let Some(bin) = cleaned.strip_prefix("0b") {
            return u16::from_str_radix(bin, 2).map(Self::from_u16).map_err(radix_err);
        }

        let value: i64 = cleaned.parse().map_err(radix_err)?;
        match value {
            -32768..=-1 => Ok(Self::from_i16(value as i16)),
            0..=65535 => Ok(Self::from_u16(value as u16)),
            _ => Err(ParseError::OutOfRange(text.to_string())),
        }
    }
}

// ============================================================================
// Joining (wiring two narrower buses side by side)
// ============================================================================

macro_rules! impl_join {
    ($half:literal => $full:literal) => {
        impl Bus<$full> {
            /// Place `high` on the upper wires and `low` on the lower wires.
            pub fn join(high: Bus<$half>, low: Bus<$half>) -> Self {
                Self::from_fn(|i| if i < $half { high.get(i) } else { low.get(i - $half) })
            }
        }
    };
}

impl_join!(2 => 4);
impl_join!(4 => 8);
impl_join!(8 => 16);

impl Bus3 {
    /// The two low selector wires, dropping the most significant one.
    #[inline]
    pub fn tail(&self) -> Bus2 {
        Bus2::from_bits([self.bits[1], self.bits[2]])
    }
}

impl<const N: usize> Default for Bus<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> fmt::Debug for Bus<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bus{}(0b", N)?;
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        write!(f, " = 0x{:04X})", self.to_u16())
    }
}

impl<const N: usize> fmt::Display for Bus<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl<const N: usize> FromStr for Bus<N> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<const N: usize> From<[Bit; N]> for Bus<N> {
    fn from(bits: [Bit; N]) -> Self {
        Self::from_bits(bits)
    }
}

// serde only derives for fixed array sizes, so buses travel as their bit string.
impl<const N: usize> Serialize for Bus<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, const N: usize> Deserialize<'de> for Bus<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when parsing bus strings and literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string had the wrong number of digits.
    #[error("expected {expected} bits, got {got}")]
    WrongLength { expected: usize, got: usize },

    /// An invalid character was encountered.
    #[error("invalid bit character: '{0}' (expected 0 or 1)")]
    InvalidChar(char),

    /// The literal does not fit in 16 bits.
    #[error("value {0} does not fit in 16 bits")]
    OutOfRange(String),

    /// The literal is not a number.
    #[error("invalid number: '{0}'")]
    InvalidNumber(String),
}

// ============================================================================
// Tests
// ============================================================================
