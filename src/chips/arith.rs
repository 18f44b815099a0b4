//! Adders.
//!
//! Half adder, full adder, and a ripple-carry adder that works through the
//! word from the least significant wire (highest index) toward the most
//! significant (index 0). The carry out of the top wire is dropped, so
//! addition wraps modulo 2^N: that is two's-complement overflow, not an error.

use crate::chips::Selectors;
use crate::logic::{Bit, Bus, Bus16};

/// Arithmetic chips, available on every primitive.
pub trait Arithmetic: Selectors {
    /// Adds two bits, returning (sum, carry).
    #[inline]
    fn half_adder(a: Bit, b: Bit) -> (Bit, Bit) {
        (Self::xor(a, b), Self::and(a, b))
    }

    /// Adds three bits, returning (sum, carry).
    fn full_adder(a: Bit, b: Bit, c: Bit) -> (Bit, Bit) {
        // First half-adder: a + b
        let (s1, c1) = Self::half_adder(a, b);

        // Second half-adder: s1 + carry_in
        let (sum, c2) = Self::half_adder(s1, c);

        (sum, Self::or(c1, c2))
    }

    /// Ripple-carry addition of two N-bit buses, modulo 2^N.
    fn add<const N: usize>(a: Bus<N>, b: Bus<N>) -> Bus<N> {
        let mut out = [Bit::Low; N];
        let Some(lsb) = N.checked_sub(1) else {
            return Bus::from_bits(out);
        };

        let (sum, mut carry) = Self::half_adder(a.get(lsb), b.get(lsb));
        out[lsb] = sum;

        for i in (0..lsb).rev() {
            let (sum, next) = Self::full_adder(a.get(i), b.get(i), carry);
            out[i] = sum;
            carry = next;
        }

        Bus::from_bits(out)
    }

    /// 16-bit adder.
    #[inline]
    fn add16(a: Bus16, b: Bus16) -> Bus16 {
        Self::add(a, b)
    }

    /// 16-bit incrementer: `add16(a, 1)`.
    #[inline]
    fn inc16(a: Bus16) -> Bus16 {
        Self::add16(a, Bus16::from_u16(1))
    }
}

impl<P: Selectors> Arithmetic for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Bus4, BusGates, Nand};

    #[test]
    fn test_half_adder() {
        assert_eq!(Nand::half_adder(Bit::Low, Bit::Low), (Bit::Low, Bit::Low));
        assert_eq!(Nand::half_adder(Bit::Low, Bit::High), (Bit::High, Bit::Low));
        assert_eq!(Nand::half_adder(Bit::High, Bit::Low), (Bit::High, Bit::Low));
        assert_eq!(Nand::half_adder(Bit::High, Bit::High), (Bit::Low, Bit::High));
    }

    #[test]
    fn test_full_adder() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for c in Bit::ALL {
                    let total = a.to_u8() + b.to_u8() + c.to_u8();
                    let (sum, carry) = Nand::full_adder(a, b, c);
                    assert_eq!(sum.to_u8(), total & 1);
                    assert_eq!(carry.to_u8(), total >> 1);
                }
            }
        }
    }

    #[test]
    fn test_add_basic() {
        let sum = Nand::add16(Bus16::from_u16(100), Bus16::from_u16(50));
        assert_eq!(sum.to_u16(), 150);
    }

    #[test]
    fn test_add_negative() {
        let sum = Nand::add16(Bus16::from_i16(100), Bus16::from_i16(-150));
        assert_eq!(sum.to_i16(), -50);
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(Nand::add16(Bus16::zero(), Bus16::zero()).to_u16(), 0);
        assert_eq!(Nand::add16(Bus16::from_u16(0xFFFF), Bus16::from_u16(1)).to_u16(), 0);
        assert_eq!(Nand::add16(Bus16::from_u16(0xFFFF), Bus16::from_u16(0xFFFF)).to_u16(), 0xFFFE);
        assert_eq!(Nand::add16(Bus16::from_i16(i16::MAX), Bus16::from_u16(1)).to_i16(), i16::MIN);
    }

    #[test]
    fn test_add_4bit_exhaustive() {
        for a in 0..16u16 {
            for b in 0..16u16 {
                let sum = Nand::add(Bus4::from_u16(a), Bus4::from_u16(b));
                assert_eq!(sum.to_u16(), (a + b) % 16, "{} + {}", a, b);
            }
        }
    }

    #[test]
    fn test_inc16() {
        assert_eq!(Nand::inc16(Bus16::from_u16(41)).to_u16(), 42);
        assert_eq!(Nand::inc16(Bus16::from_i16(-1)).to_u16(), 0);
    }

    #[test]
    fn test_additive_inverse() {
        // a + (!a + 1) == 0 in two's complement
        for value in [-32768i16, -100, -1, 0, 1, 100, 32767] {
            let a = Bus16::from_i16(value);
            let neg_a = Nand::inc16(Nand::not16(a));
            assert_eq!(Nand::add16(a, neg_a), Bus16::zero(), "{} + (-{}) != 0", value, value);
        }
    }
}
