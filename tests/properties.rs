//! Sampled properties of the 16-bit chips.

use nandchip::{Alu, AluOp, Arithmetic, Bit, Bus16, Bus8, BusGates, Nand, Selectors};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = Bus16> {
    any::<u16>().prop_map(Bus16::from_u16)
}

proptest! {
    #[test]
    fn not16_is_an_involution(a in word()) {
        prop_assert_eq!(Nand::not16(Nand::not16(a)), a);
    }

    #[test]
    fn and16_or16_work_per_position(a in word(), b in word()) {
        let and = Nand::and16(a, b);
        let or = Nand::or16(a, b);
        for k in 0..16 {
            prop_assert_eq!(and.get(k).to_bool(), a.get(k).to_bool() && b.get(k).to_bool());
            prop_assert_eq!(or.get(k).to_bool(), a.get(k).to_bool() || b.get(k).to_bool());
        }
    }

    #[test]
    fn add16_is_addition_mod_2_16(a in any::<u16>(), b in any::<u16>()) {
        let sum = Nand::add16(Bus16::from_u16(a), Bus16::from_u16(b));
        prop_assert_eq!(u32::from(sum.to_u16()), (u32::from(a) + u32::from(b)) % 65536);
    }

    #[test]
    fn inc16_matches_add16_of_one(a in word()) {
        prop_assert_eq!(Nand::inc16(a), Nand::add16(a, Bus16::from_u16(1)));
    }

    #[test]
    fn mux16_routes_whole_words(a in word(), b in word(), s in any::<bool>()) {
        let expected = if s { b } else { a };
        prop_assert_eq!(Nand::mux16(a, b, Bit::from_bool(s)), expected);
    }

    #[test]
    fn dmux16_zeroes_the_unselected_output(i in word(), s in any::<bool>()) {
        let (out_a, out_b) = Nand::dmux16(i, Bit::from_bool(s));
        if s {
            prop_assert_eq!((out_a, out_b), (Bus16::zero(), i));
        } else {
            prop_assert_eq!((out_a, out_b), (i, Bus16::zero()));
        }
    }

    #[test]
    fn alu_matches_reference(x in any::<u16>(), y in any::<u16>(), index in 0..AluOp::ALL.len()) {
        let op = AluOp::ALL[index];
        let result = Nand::compute(Bus16::from_u16(x), Bus16::from_u16(y), op);
        let expected = op.reference(x, y);
        prop_assert_eq!(result.out.to_u16(), expected, "{}", op);
        prop_assert_eq!(result.zr, Bit::from_bool(expected == 0));
        prop_assert_eq!(result.ng, Bit::from_bool((expected as i16) < 0));
    }

    #[test]
    fn alu_flags_for_any_control_word(x in any::<u16>(), y in any::<u16>(), packed in 0u8..64) {
        let control = nandchip::ControlWord::from_u8(packed);
        let result = Nand::alu(Bus16::from_u16(x), Bus16::from_u16(y), control);
        prop_assert_eq!(result.zr.is_high(), result.out.to_u16() == 0);
        prop_assert_eq!(result.ng, result.out.get(0));
    }
}

#[test]
fn bitwise_ops_exhaustive_on_bytes() {
    for a in 0..=255u16 {
        for b in 0..=255u16 {
            let (x, y) = (Bus8::from_u16(a), Bus8::from_u16(b));
            assert_eq!(Nand::bus_and(x, y).to_u16(), a & b);
            assert_eq!(Nand::bus_or(x, y).to_u16(), a | b);
        }
        assert_eq!(Nand::bus_not(Bus8::from_u16(a)).to_u16(), !a & 0xFF);
    }
}

#[test]
fn adder_boundary_cases() {
    let add = |a: u16, b: u16| Nand::add16(Bus16::from_u16(a), Bus16::from_u16(b)).to_u16();
    assert_eq!(add(0, 0), 0);
    assert_eq!(add(0xFFFF, 1), 0);
    assert_eq!(add(0xFFFF, 0xFFFF), 0xFFFE);
    assert_eq!(add(0x7FFF, 1), 0x8000);
}
