//! The chip set is derived from the injected primitive and nothing else.
//!
//! A counting primitive pins the exact NAND cost of each gate, and a
//! substitute primitive shows that swapping the primitive changes every
//! chip built on it.

use std::cell::Cell;

use nandchip::{
    Alu, AluOp, Arithmetic, Bit, Bus16, Bus2, Bus3, Bus8, BusGates, Gates, Nand, Primitive,
    Selectors,
};

thread_local! {
    static NAND_CALLS: Cell<u64> = const { Cell::new(0) };
}

/// NAND that counts how many times it is evaluated.
struct Counting;

impl Primitive for Counting {
    fn nand(a: Bit, b: Bit) -> Bit {
        NAND_CALLS.with(|calls| calls.set(calls.get() + 1));
        Nand::nand(a, b)
    }
}

/// NOR in place of NAND.
struct Nor;

impl Primitive for Nor {
    fn nand(a: Bit, b: Bit) -> Bit {
        Bit::from_bool(!(a.to_bool() || b.to_bool()))
    }
}

fn nands<T>(f: impl FnOnce() -> T) -> (T, u64) {
    NAND_CALLS.with(|calls| calls.set(0));
    let out = f();
    (out, NAND_CALLS.with(Cell::get))
}

#[test]
fn elementary_gate_costs() {
    assert_eq!(nands(|| Counting::not(Bit::High)).1, 1);
    assert_eq!(nands(|| Counting::and(Bit::High, Bit::Low)).1, 2);
    assert_eq!(nands(|| Counting::or(Bit::High, Bit::Low)).1, 3);
    assert_eq!(nands(|| Counting::xor(Bit::High, Bit::Low)).1, 6);
}

#[test]
fn composite_chip_costs() {
    assert_eq!(nands(|| Counting::mux(Bit::Low, Bit::High, Bit::High)).1, 8);
    assert_eq!(nands(|| Counting::half_adder(Bit::High, Bit::High)).1, 8);
    assert_eq!(nands(|| Counting::full_adder(Bit::High, Bit::High, Bit::Low)).1, 19);
    assert_eq!(nands(|| Counting::or8way(Bus8::from_u16(0x80))).1, 21);

    // One half adder for the lowest wire, full adders for the other fifteen.
    let (sum, cost) = nands(|| Counting::add16(Bus16::from_u16(40), Bus16::from_u16(2)));
    assert_eq!(sum.to_u16(), 42);
    assert_eq!(cost, 8 + 15 * 19);
}

#[test]
fn counting_primitive_agrees_with_nand() {
    let x = Bus16::from_u16(0x1357);
    let y = Bus16::from_u16(0x2468);
    for op in AluOp::ALL {
        let (counted, cost) = nands(|| Counting::compute(x, y, op));
        assert_eq!(counted, Nand::compute(x, y, op), "{}", op);
        assert!(cost > 0);
    }
}

#[test]
fn swapping_the_primitive_changes_every_gate() {
    // With NOR underneath, "not" is still NOT, but "and" becomes OR.
    for a in Bit::ALL {
        assert_eq!(Nor::not(a), Nand::not(a));
        for b in Bit::ALL {
            assert_eq!(Nor::and(a, b), Nand::or(a, b));
            assert_eq!(Nor::or(a, b), Nand::and(a, b));
        }
    }
}

#[test]
fn selector_trees_route_exactly_one_input() {
    let words: [Bus16; 8] = std::array::from_fn(|k| Bus16::from_u16(0xA000 | k as u16));
    let [a, b, c, d, e, f, g, h] = words;

    for k in 0..4u16 {
        let s = Bus2::from_u16(k);
        assert_eq!(Nand::mux4way16(a, b, c, d, s), words[k as usize]);
        let routed = Nand::dmux4way(Bit::High, s);
        for j in 0..4 {
            assert_eq!(routed.get(j), Bit::from_bool(j == k as usize));
        }
    }

    for k in 0..8u16 {
        let s = Bus3::from_u16(k);
        assert_eq!(Nand::mux8way16(a, b, c, d, e, f, g, h, s), words[k as usize]);
        let routed = Nand::dmux8way(Bit::High, s);
        for j in 0..8 {
            assert_eq!(routed.get(j), Bit::from_bool(j == k as usize));
        }
        assert_eq!(Nand::dmux8way(Bit::Low, s), Bus8::zero());
    }
}

#[test]
fn alu_scenarios() {
    let r = Nand::alu(Bus16::from_u16(0x0001), Bus16::from_u16(0x0002), "000010".parse().unwrap());
    assert_eq!((r.out.to_u16(), r.zr, r.ng), (0x0003, Bit::Low, Bit::Low));

    let r = Nand::alu(Bus16::zero(), Bus16::zero(), "101010".parse().unwrap());
    assert_eq!((r.out.to_u16(), r.zr, r.ng), (0x0000, Bit::High, Bit::Low));

    let r = Nand::alu(Bus16::from_u16(0x0001), Bus16::zero(), "001111".parse().unwrap());
    assert_eq!((r.out.to_u16(), r.zr, r.ng), (0xFFFF, Bit::Low, Bit::High));
}
