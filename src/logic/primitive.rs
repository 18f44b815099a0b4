//! The primitive operator every chip is derived from.
//!
//! Nothing above this module looks inside a [`Bit`]. Chips are written
//! against the [`Primitive`] capability, so a mock primitive (counting,
//! tracing, faulty) can be dropped in to test the gate library in isolation.

use crate::logic::Bit;

/// A two-input NAND: the single building block of the chip set.
pub trait Primitive {
    /// `not (a and b)`
    fn nand(a: Bit, b: Bit) -> Bit;
}

/// The designated NAND implementation.
///
/// This is the boundary to the layer below the chip set. It is the only
/// place that evaluates a bit with host boolean logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nand;

impl Primitive for Nand {
    #[inline]
    fn nand(a: Bit, b: Bit) -> Bit {
        Bit::from_bool(!(a.to_bool() && b.to_bool()))
    }
}
