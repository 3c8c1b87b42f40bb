// Tests for radix conversion, included by radix.rs

mod convert {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal ($from:literal) => $expected:literal ($to:literal)) => {
            paste! {
                #[test]
                fn [< case_ $name _ $from _to_ $to >]() {
                    let n = LinkedNumber::from_str_radix($input, $from).unwrap();
                    let converted = n.convert($to).unwrap();
                    assert_eq!(converted.to_string(), $expected);
                    assert_eq!(converted.base(), $to);
                    assert!(converted.is_valid_number());
                }
            }
        };
    }

    impl_case!(ff: "FF" (16) => "255" (10));
    impl_case!(n255: "255" (10) => "FF" (16));
    impl_case!(zero: "0" (10) => "0" (2));
    impl_case!(zeros: "0000" (10) => "0" (16));
    impl_case!(leading_zeros: "007" (10) => "7" (10));
    impl_case!(n101: "101" (2) => "5" (10));
    impl_case!(n255_bin: "255" (10) => "11111111" (2));
    impl_case!(n35: "35" (10) => "Z" (36));
    impl_case!(n36: "36" (10) => "10" (36));
    impl_case!(zz: "ZZ" (36) => "1295" (10));
    impl_case!(n777: "777" (8) => "1FF" (16));
    impl_case!(same_base: "1A2B" (16) => "1A2B" (16));

    #[test]
    fn u128_max_to_hex() {
        let n = LinkedNumber::from(u128::MAX);
        let hex = n.convert(16).unwrap();
        assert_eq!(hex.to_string(), "F".repeat(32));
    }

    #[test]
    fn beyond_u128_is_exact() {
        // 2^128, one past u128::MAX
        let n = LinkedNumber::from_str_radix("340282366920938463463374607431768211456", 10).unwrap();
        let bin = n.convert(2).unwrap();
        assert_eq!(bin.len(), 129);
        assert_eq!(bin.to_string(), format!("1{}", "0".repeat(128)));

        let back = bin.convert(10).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn ninety_six_bits_of_hex() {
        let n = LinkedNumber::from_str_radix(&"F".repeat(24), 16).unwrap();
        let dec = n.convert(10).unwrap();
        assert_eq!(dec.to_string(), "79228162514264337593543950335");
    }

    #[test]
    fn source_is_unchanged() {
        let n = LinkedNumber::from_str_radix("00FF", 16).unwrap();
        let copy = n.clone();
        let _ = n.convert(2).unwrap();
        assert_eq!(n, copy);
        assert_eq!(n.to_string(), "00FF");
        assert_eq!(n.base(), 16);
    }

    #[test]
    fn result_is_independent() {
        let n = LinkedNumber::from_str_radix("12", 10).unwrap();
        let mut converted = n.convert(10).unwrap();
        converted.add_digit(Digit::new('3'), 0).unwrap();
        assert_eq!(converted.to_string(), "123");
        assert_eq!(n.to_string(), "12");
    }

    #[test]
    fn invalid_digit_for_radix() {
        let n = LinkedNumber::from_str_radix("9", 2).unwrap();
        match n.convert(10) {
            Err(LinkedNumberError::InvalidOperation(reason)) => {
                assert_eq!(reason, "cannot convert invalid number");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn unrecognized_glyph() {
        let n = LinkedNumber::from_str_radix("12x4", 36).unwrap();
        assert!(matches!(n.convert(10), Err(LinkedNumberError::InvalidOperation(_))));
    }

    #[test]
    fn invalid_source_reported_before_radix() {
        let n = LinkedNumber::from_str_radix("G", 16).unwrap();
        assert!(matches!(n.convert(1), Err(LinkedNumberError::InvalidOperation(_))));
    }

    #[test]
    fn invalid_target_radix() {
        let n = LinkedNumber::from_str_radix("10", 10).unwrap();
        assert_eq!(n.convert(0), Err(LinkedNumberError::InvalidRadix(0)));
        assert_eq!(n.convert(1), Err(LinkedNumberError::InvalidRadix(1)));
        assert_eq!(n.convert(37), Err(LinkedNumberError::InvalidRadix(37)));
    }
}

mod to_biguint {
    use super::*;

    #[test]
    fn hex_value() {
        let n = LinkedNumber::from_str_radix("DEADBEEF", 16).unwrap();
        assert_eq!(n.to_biguint(), Some(BigUint::from(0xDEADBEEFu32)));
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        let a = LinkedNumber::from_str_radix("007", 10).unwrap();
        let b = LinkedNumber::from_str_radix("7", 10).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.to_biguint(), b.to_biguint());
    }

    #[test]
    fn digit_too_large_for_radix() {
        let n = LinkedNumber::from_str_radix("1A", 10).unwrap();
        assert_eq!(n.to_biguint(), None);
    }

    #[test]
    fn empty_number_is_zero() {
        let mut n = LinkedNumber::from_str_radix("5", 10).unwrap();
        n.remove_digit(0).unwrap();
        assert_eq!(n.to_biguint(), Some(BigUint::zero()));
        assert_eq!(n.convert(2).unwrap().to_string(), "0");
    }
}

mod place_value {
    use super::*;

    macro_rules! impl_case {
        ($value:literal, $radix:literal, $exp:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $value _ $radix _ $exp >]() {
                    let expected: BigUint = $expected.parse().unwrap();
                    assert_eq!(place_value($value, $radix, $exp), expected);
                }
            }
        };
    }

    impl_case!(3, 10, 0 => "3");
    impl_case!(2, 10, 1 => "20");
    impl_case!(0, 16, 5 => "0");
    impl_case!(1, 2, 64 => "18446744073709551616");
    impl_case!(35, 36, 20 => "467862308859530692374359609180160");
    impl_case!(9, 10, 30 => "9000000000000000000000000000000");
}

#[test]
fn radix_values_of_zero() {
    assert_eq!(radix_values_be(&BigUint::zero(), 2), vec![0]);
}

#[test]
fn radix_values_most_significant_first() {
    assert_eq!(radix_values_be(&BigUint::from(1295u32), 36), vec![35, 35]);
    assert_eq!(radix_values_be(&BigUint::from(6u32), 2), vec![1, 1, 0]);
}
