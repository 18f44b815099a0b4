//! Elementary gate library.
//!
//! NOT, AND, OR and XOR, each wired from the primitive and the gates
//! defined before it:
//!
//! | Gate      | Wiring                        |
//! |-----------|-------------------------------|
//! | NOT(a)    | NAND(a, a)                    |
//! | AND(a, b) | NOT(NAND(a, b))               |
//! | OR(a, b)  | NAND(NOT(a), NOT(b))          |
//! | XOR(a, b) | AND(NAND(a, b), OR(a, b))     |

use crate::logic::{Bit, Primitive};

/// Single-bit gates, available on every [`Primitive`].
pub trait Gates: Primitive {
    /// out = not a
    #[inline]
    fn not(a: Bit) -> Bit {
        Self::nand(a, a)
    }

    /// out = a and b
    #[inline]
    fn and(a: Bit, b: Bit) -> Bit {
        Self::not(Self::nand(a, b))
    }

    /// out = a or b
    #[inline]
    fn or(a: Bit, b: Bit) -> Bit {
        Self::nand(Self::not(a), Self::not(b))
    }

    /// out = a xor b
    #[inline]
    fn xor(a: Bit, b: Bit) -> Bit {
        Self::and(Self::nand(a, b), Self::or(a, b))
    }
}

impl<P: Primitive> Gates for P {}
