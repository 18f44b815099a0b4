//! Bus lifting.
//!
//! Applies the single-bit gates wire by wire across buses of any width:
//! `bus_op(a, b)[i] = op(a[i], b[i])`. The 16-wide forms used by the ALU
//! get their own names (`not16`, `and16`, ...).

use crate::logic::{Bit, Bus, Bus16, Bus8, Gates};

/// Bus-wide gates, available on every primitive.
pub trait BusGates: Gates {
    /// Broadcast one bit onto every wire of a bus.
    #[inline]
    fn fan_out<const N: usize>(bit: Bit) -> Bus<N> {
        Bus::from_bits([bit; N])
    }

    /// Wire-by-wire NOT.
    fn bus_not<const N: usize>(a: Bus<N>) -> Bus<N> {
        Bus::from_fn(|i| Self::not(a.get(i)))
    }

    /// Wire-by-wire AND.
    fn bus_and<const N: usize>(a: Bus<N>, b: Bus<N>) -> Bus<N> {
        Bus::from_fn(|i| Self::and(a.get(i), b.get(i)))
    }

    /// Wire-by-wire OR.
    fn bus_or<const N: usize>(a: Bus<N>, b: Bus<N>) -> Bus<N> {
        Bus::from_fn(|i| Self::or(a.get(i), b.get(i)))
    }

    /// Wire-by-wire XOR.
    fn bus_xor<const N: usize>(a: Bus<N>, b: Bus<N>) -> Bus<N> {
        Bus::from_fn(|i| Self::xor(a.get(i), b.get(i)))
    }

    /// Route a whole bus: `a` when `s` is low, `b` when `s` is high.
    ///
    /// Masks each input with the fanned-out selector and ORs the results.
    fn bus_mux<const N: usize>(a: Bus<N>, b: Bus<N>, s: Bit) -> Bus<N> {
        let keep_a = Self::fan_out::<N>(Self::not(s));
        let keep_b = Self::fan_out::<N>(s);
        Self::bus_or(Self::bus_and(a, keep_a), Self::bus_and(b, keep_b))
    }

    /// 16-bit NOT.
    #[inline]
    fn not16(a: Bus16) -> Bus16 {
        Self::bus_not(a)
    }

    /// 16-bit AND.
    #[inline]
    fn and16(a: Bus16, b: Bus16) -> Bus16 {
        Self::bus_and(a, b)
    }

    /// 16-bit OR.
    #[inline]
    fn or16(a: Bus16, b: Bus16) -> Bus16 {
        Self::bus_or(a, b)
    }

    /// 16-bit multiplexer.
    #[inline]
    fn mux16(a: Bus16, b: Bus16, s: Bit) -> Bus16 {
        Self::bus_mux(a, b, s)
    }

    /// OR of all 8 wires, folded left to right.
    fn or8way(a: Bus8) -> Bit {
        a.iter().skip(1).fold(a.get(0), Self::or)
    }
}

impl<P: Gates> BusGates for P {}
