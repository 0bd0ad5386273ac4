//! # Register Store Tests
//!
//! Tests for register naming and the four-slot register store.

use claudia_calc_core::command::ArithOp;
use claudia_calc_core::common::{CalcError, NUM_REGISTERS, RegName, RegisterFile};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_register_file_new_initializes_to_zero() {
    let regs = RegisterFile::new();
    assert_eq!(regs.get_all(), [0.0; NUM_REGISTERS]);
    assert_eq!(RegisterFile::default(), regs);
}

#[rstest]
#[case('a', RegName::A)]
#[case('B', RegName::B)]
#[case('c', RegName::C)]
#[case('D', RegName::D)]
fn test_reg_name_from_char_ignores_case(#[case] ch: char, #[case] expected: RegName) {
    assert_eq!(RegName::from_char(ch), Some(expected));
}

#[rstest]
#[case('e')]
#[case('z')]
#[case('1')]
#[case('+')]
fn test_reg_name_from_char_rejects_other_letters(#[case] ch: char) {
    assert_eq!(RegName::from_char(ch), None);
}

#[test]
fn test_reg_name_index_round_trip() {
    for (i, name) in RegName::ALL.into_iter().enumerate() {
        assert_eq!(name.index(), i);
        assert_eq!(RegName::from_index(i), Some(name));
    }
    assert_eq!(RegName::from_index(NUM_REGISTERS), None);
}

#[test]
fn test_reg_name_displays_lowercase() {
    let names: Vec<String> = RegName::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["a", "b", "c", "d"]);
}

#[test]
fn test_get_out_of_range_is_none() {
    let regs = RegisterFile::new();
    assert_eq!(regs.get(3), Some(0.0));
    assert_eq!(regs.get(4), None);
}

#[test]
fn test_register_independence() {
    let mut regs = RegisterFile::new();
    regs.set(RegName::A, 1.5);
    regs.set(RegName::B, -2.0);
    regs.set(RegName::C, 3.25);
    regs.set(RegName::D, 1e10);

    assert_eq!(regs.get_all(), [1.5, -2.0, 3.25, 1e10]);
}

#[test]
fn test_multiple_writes_to_same_register() {
    let mut regs = RegisterFile::new();
    regs.set(RegName::C, 100.0);
    regs.set(RegName::C, 200.0);
    assert_eq!(regs.reg(RegName::C), 200.0);
}

#[test]
fn test_clear_by_index() {
    let mut regs = RegisterFile::new();
    regs.set(RegName::B, 42.0);
    regs.set(RegName::C, 7.0);

    regs.clear(1).unwrap();

    assert_eq!(regs.get_all(), [0.0, 0.0, 7.0, 0.0]);
}

#[test]
fn test_clear_out_of_range_is_rejected() {
    let mut regs = RegisterFile::new();
    regs.set(RegName::D, 9.0);

    let err = regs.clear(4).unwrap_err();

    assert!(matches!(err, CalcError::RegisterOutOfRange(4)));
    assert_eq!(regs.reg(RegName::D), 9.0);
}

#[rstest]
#[case(ArithOp::Add, 6.0, 4.0, 10.0)]
#[case(ArithOp::Sub, 6.0, 4.0, 2.0)]
#[case(ArithOp::Mul, 6.0, 4.0, 24.0)]
#[case(ArithOp::Div, 6.0, 4.0, 1.5)]
fn test_apply_updates_only_a(
    #[case] op: ArithOp,
    #[case] a: f64,
    #[case] b: f64,
    #[case] expected: f64,
) {
    let mut regs = RegisterFile::new();
    regs.set(RegName::A, a);
    regs.set(RegName::B, b);
    regs.set(RegName::C, 11.0);
    regs.set(RegName::D, 12.0);

    assert_eq!(regs.apply(op).unwrap(), expected);
    assert_eq!(regs.get_all(), [expected, b, 11.0, 12.0]);
}

#[test]
fn test_apply_divide_by_zero_keeps_a() {
    let mut regs = RegisterFile::new();
    regs.set(RegName::A, 10.0);

    assert!(matches!(
        regs.apply(ArithOp::Div),
        Err(CalcError::DivisionByZero)
    ));
    assert_eq!(regs.reg(RegName::A), 10.0);
}

#[test]
fn test_apply_divide_by_negative_zero_is_rejected() {
    let mut regs = RegisterFile::new();
    regs.set(RegName::A, 1.0);
    regs.set(RegName::B, -0.0);

    assert!(regs.apply(ArithOp::Div).is_err());
    assert_eq!(regs.reg(RegName::A), 1.0);
}

#[test]
fn test_dump_lists_registers_in_order() {
    let mut regs = RegisterFile::new();
    regs.set(RegName::A, 7.0);
    regs.set(RegName::B, 2.5);
    regs.set(RegName::D, -1.0);

    let mut out = Vec::new();
    regs.dump(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "a = 7\nb = 2.5\nc = 0\nd = -1\n"
    );
}

fn reg_name() -> impl Strategy<Value = RegName> {
    prop::sample::select(RegName::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_set_then_get_returns_value(name in reg_name(), value in any::<f64>()) {
        let mut regs = RegisterFile::new();
        regs.set(name, value);
        prop_assert_eq!(regs.reg(name).to_bits(), value.to_bits());
        prop_assert_eq!(regs.get(name.index()).map(f64::to_bits), Some(value.to_bits()));
    }

    #[test]
    fn prop_clear_always_zeroes(idx in 0usize..NUM_REGISTERS, values in prop::array::uniform4(any::<f64>())) {
        let mut regs = RegisterFile::new();
        for (name, value) in RegName::ALL.into_iter().zip(values) {
            regs.set(name, value);
        }
        regs.clear(idx).unwrap();
        prop_assert_eq!(regs.get(idx), Some(0.0));
    }

    #[test]
    fn prop_add_sub_mul_touch_only_a(
        op in prop::sample::select(vec![ArithOp::Add, ArithOp::Sub, ArithOp::Mul]),
        values in prop::array::uniform4(-1e6f64..1e6),
    ) {
        let mut regs = RegisterFile::new();
        for (name, value) in RegName::ALL.into_iter().zip(values) {
            regs.set(name, value);
        }
        let result = regs.apply(op).unwrap();
        prop_assert_eq!(regs.get_all(), [result, values[1], values[2], values[3]]);
    }

    #[test]
    fn prop_divide_matches_native_division(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        prop_assume!(b != 0.0);
        let mut regs = RegisterFile::new();
        regs.set(RegName::A, a);
        regs.set(RegName::B, b);
        prop_assert_eq!(regs.apply(ArithOp::Div).unwrap(), a / b);
        prop_assert_eq!(regs.reg(RegName::A), a / b);
    }
}
