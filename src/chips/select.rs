//! Selector network: multiplexers and demultiplexers.
//!
//! Multi-bit selectors are read most-significant wire first: for a selector
//! `s` of width k, the chosen input index is `sum(s[j] << (k - 1 - j))`.
//! A 4-way selector `(s0, s1)` picks `00 -> a, 01 -> b, 10 -> c, 11 -> d`.
//!
//! The wide selectors are trees: an 8-way selector is two 4-way selectors
//! feeding a 2-way one keyed by the top selector wire, and a 4-way selector
//! is two 2-way ones feeding a third.

use crate::logic::{Bit, Bus, Bus16, Bus2, Bus3, Bus4, Bus8, BusGates};

/// Multiplexers and demultiplexers, available on every primitive.
pub trait Selectors: BusGates {
    /// out = a if s == 0, b otherwise
    fn mux(a: Bit, b: Bit, s: Bit) -> Bit {
        Self::or(Self::and(a, Self::not(s)), Self::and(b, s))
    }

    /// (in, 0) if s == 0, (0, in) otherwise.
    ///
    /// The unselected output is driven low.
    fn dmux(i: Bit, s: Bit) -> (Bit, Bit) {
        (Self::and(i, Self::not(s)), Self::and(i, s))
    }

    /// Route a 16-bit word to one of two outputs; the other is all zero.
    fn dmux16(i: Bus16, s: Bit) -> (Bus16, Bus16) {
        let to_a = Self::fan_out::<16>(Self::not(s));
        let to_b = Self::fan_out::<16>(s);
        (Self::and16(i, to_a), Self::and16(i, to_b))
    }

    /// 4-way multiplexer for buses of any width.
    fn mux4way<const N: usize>(a: Bus<N>, b: Bus<N>, c: Bus<N>, d: Bus<N>, s: Bus2) -> Bus<N> {
        let low = s.get(1);
        Self::bus_mux(Self::bus_mux(a, b, low), Self::bus_mux(c, d, low), s.get(0))
    }

    /// 8-way multiplexer for buses of any width.
    #[allow(clippy::too_many_arguments)]
    fn mux8way<const N: usize>(
        a: Bus<N>, b: Bus<N>, c: Bus<N>, d: Bus<N>,
        e: Bus<N>, f: Bus<N>, g: Bus<N>, h: Bus<N>,
        s: Bus3,
    ) -> Bus<N> {
        let rest = s.tail();
        Self::bus_mux(Self::mux4way(a, b, c, d, rest), Self::mux4way(e, f, g, h, rest), s.get(0))
    }

    /// 4-way 16-bit multiplexer.
    #[inline]
    fn mux4way16(a: Bus16, b: Bus16, c: Bus16, d: Bus16, s: Bus2) -> Bus16 {
        Self::mux4way(a, b, c, d, s)
    }

    /// 8-way 16-bit multiplexer.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    fn mux8way16(
        a: Bus16, b: Bus16, c: Bus16, d: Bus16,
        e: Bus16, f: Bus16, g: Bus16, h: Bus16,
        s: Bus3,
    ) -> Bus16 {
        Self::mux8way(a, b, c, d, e, f, g, h, s)
    }

    /// 4-way demultiplexer: output k carries `i` when s == k, every other output is 0.
    fn dmux4way(i: Bit, s: Bus2) -> Bus4 {
        let (upper, lower) = Self::dmux(i, s.get(0));
        let (a, b) = Self::dmux(upper, s.get(1));
        let (c, d) = Self::dmux(lower, s.get(1));
        Bus4::from_bits([a, b, c, d])
    }

    /// 8-way demultiplexer: output k carries `i` when s == k, every other output is 0.
    fn dmux8way(i: Bit, s: Bus3) -> Bus8 {
        let (upper, lower) = Self::dmux(i, s.get(0));
        let rest = s.tail();
        Bus8::join(Self::dmux4way(upper, rest), Self::dmux4way(lower, rest))
    }
}

impl<P: BusGates> Selectors for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Nand;

    fn words<const K: usize>() -> [Bus16; K] {
        std::array::from_fn(|k| Bus16::from_u16(0x1111u16.wrapping_mul(k as u16 + 1) ^ 0x0F0F))
    }

    #[test]
    fn test_mux_truth_table() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for s in Bit::ALL {
                    let expected = if s.is_high() { b } else { a };
                    assert_eq!(Nand::mux(a, b, s), expected);
                }
            }
        }
    }

    #[test]
    fn test_dmux_truth_table() {
        for i in Bit::ALL {
            assert_eq!(Nand::dmux(i, Bit::Low), (i, Bit::Low));
            assert_eq!(Nand::dmux(i, Bit::High), (Bit::Low, i));
        }
    }

    #[test]
    fn test_dmux16() {
        let word = Bus16::from_u16(0xBEEF);
        assert_eq!(Nand::dmux16(word, Bit::Low), (word, Bus16::zero()));
        assert_eq!(Nand::dmux16(word, Bit::High), (Bus16::zero(), word));
    }

    #[test]
    fn test_mux4way16_selector_order() {
        let [a, b, c, d] = words::<4>();
        assert_eq!(Nand::mux4way16(a, b, c, d, Bus2::parse("00").unwrap()), a);
        assert_eq!(Nand::mux4way16(a, b, c, d, Bus2::parse("01").unwrap()), b);
        assert_eq!(Nand::mux4way16(a, b, c, d, Bus2::parse("10").unwrap()), c);
        assert_eq!(Nand::mux4way16(a, b, c, d, Bus2::parse("11").unwrap()), d);
    }

    #[test]
    fn test_mux8way16_every_selector() {
        let inputs = words::<8>();
        let [a, b, c, d, e, f, g, h] = inputs;
        for k in 0..8u16 {
            let out = Nand::mux8way16(a, b, c, d, e, f, g, h, Bus3::from_u16(k));
            assert_eq!(out, inputs[k as usize], "selector {:03b}", k);
        }
    }

    #[test]
    fn test_dmux4way_routes_to_one_output() {
        for k in 0..4u16 {
            let out = Nand::dmux4way(Bit::High, Bus2::from_u16(k));
            assert_eq!(out.to_u16(), 0b1000 >> k, "selector {:02b}", k);
            assert_eq!(Nand::dmux4way(Bit::Low, Bus2::from_u16(k)), Bus4::zero());
        }
    }

    #[test]
    fn test_dmux8way_routes_to_one_output() {
        for k in 0..8u16 {
            let out = Nand::dmux8way(Bit::High, Bus3::from_u16(k));
            for j in 0..8 {
                assert_eq!(out.get(j), Bit::from_bool(j == k as usize), "selector {:03b}, output {}", k, j);
            }
        }
    }

    #[test]
    fn test_narrow_bus_mux4way() {
        let [a, b, c, d] = [0u16, 1, 2, 3].map(Bus2::from_u16);
        for k in 0..4u16 {
            assert_eq!(Nand::mux4way(a, b, c, d, Bus2::from_u16(k)).to_u16(), k);
        }
    }
}
