// Tests for LinkedNumber, included by lib.rs

fn number(s: &str, radix: u32) -> LinkedNumber {
    LinkedNumber::from_str_radix(s, radix).unwrap()
}

mod construction {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal ($radix:literal) => len $len:literal) => {
            paste! {
                #[test]
                fn [< case_ $name _radix_ $radix >]() {
                    let n = number($input, $radix);
                    assert_eq!(n.to_string(), $input);
                    assert_eq!(n.len(), $len);
                    assert_eq!(n.base(), $radix);
                    assert!(!n.is_empty());
                    n.chain.check_links();
                }
            }
        };
    }

    impl_case!(n101: "101" (2) => len 3);
    impl_case!(ff: "FF" (16) => len 2);
    impl_case!(n007: "007" (10) => len 3);
    impl_case!(single: "Z" (36) => len 1);
    impl_case!(invalid: "9" (2) => len 1);
    impl_case!(punctuation: "1-2.3" (10) => len 5);

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(LinkedNumber::from_str_radix("", 10), Err(LinkedNumberError::Empty));
        assert_eq!(LinkedNumber::from_str_radix("", 2), Err(LinkedNumberError::Empty));
    }

    #[test]
    fn radix_out_of_range_is_rejected() {
        assert_eq!(LinkedNumber::from_str_radix("0", 0), Err(LinkedNumberError::InvalidRadix(0)));
        assert_eq!(LinkedNumber::from_str_radix("0", 1), Err(LinkedNumberError::InvalidRadix(1)));
        assert_eq!(LinkedNumber::from_str_radix("0", 37), Err(LinkedNumberError::InvalidRadix(37)));
        assert!(LinkedNumber::from_str_radix("0", MIN_RADIX).is_ok());
        assert!(LinkedNumber::from_str_radix("0", MAX_RADIX).is_ok());
    }

    #[test]
    fn front_and_rear() {
        let n = number("1A9", 16);
        assert_eq!(n.front(), Some(&Digit::new('1')));
        assert_eq!(n.rear(), Some(&Digit::new('9')));
    }

    #[test]
    fn multibyte_glyph_is_one_digit() {
        let n = number("1é2", 10);
        assert_eq!(n.len(), 3);
        assert_eq!(n.to_string(), "1é2");
        assert!(!n.is_valid_number());
    }
}

mod is_valid_number {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal ($radix:literal) => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!(number($input, $radix).is_valid_number(), $expected);
            }
        };
    }

    impl_case!(case_101_radix_2: "101" (2) => true);
    impl_case!(case_9_radix_2: "9" (2) => false);
    impl_case!(case_2_radix_2: "2" (2) => false);
    impl_case!(case_ff_radix_16: "FF" (16) => true);
    impl_case!(case_fg_radix_16: "FG" (16) => false);
    impl_case!(case_lowercase_radix_16: "ff" (16) => false);
    impl_case!(case_z_radix_36: "Z" (36) => true);
    impl_case!(case_z_radix_35: "Z" (35) => false);
    impl_case!(case_unrecognized: "1?0" (10) => false);
    impl_case!(case_digits_radix_10: "0123456789" (10) => true);

    #[test]
    fn emptied_number_is_vacuously_valid() {
        let mut n = number("9", 2);
        assert!(!n.is_valid_number());
        n.remove_digit(0).unwrap();
        assert!(n.is_empty());
        assert!(n.is_valid_number());
    }
}

mod add_digit {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal + $glyph:literal @ $pos:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let mut n = number($input, 10);
                n.add_digit(Digit::new($glyph), $pos).unwrap();
                assert_eq!(n.to_string(), $expected);
                assert_eq!(n.len(), $input.len() + 1);
                n.chain.check_links();
            }
        };
    }

    impl_case!(case_rear: "123" + '9' @ 0 => "1239");
    impl_case!(case_front: "123" + '9' @ 3 => "9123");
    impl_case!(case_pos_1: "123" + '9' @ 1 => "1293");
    impl_case!(case_pos_2: "123" + '9' @ 2 => "1923");
    impl_case!(case_single_rear: "5" + '4' @ 0 => "54");
    impl_case!(case_single_front: "5" + '4' @ 1 => "45");

    #[test]
    fn new_digit_lands_at_requested_position() {
        for pos in 0..=4 {
            let mut n = number("1234", 10);
            n.add_digit(Digit::new('X'), pos).unwrap();
            let id = n.chain.nth_from_rear(pos as usize).unwrap();
            assert_eq!(n.chain.digit(id).glyph(), 'X', "position {}", pos);
        }
    }

    #[test]
    fn front_and_rear_follow_insertion() {
        let mut n = number("12", 10);
        n.add_digit(Digit::new('0'), 2).unwrap();
        assert_eq!(n.front(), Some(&Digit::new('0')));
        n.add_digit(Digit::new('3'), 0).unwrap();
        assert_eq!(n.rear(), Some(&Digit::new('3')));
        assert_eq!(n.to_string(), "0123");
    }

    #[test]
    fn insert_into_emptied_number() {
        let mut n = number("1", 10);
        n.remove_digit(0).unwrap();
        assert!(n.is_empty());

        n.add_digit(Digit::new('7'), 0).unwrap();
        assert_eq!(n.to_string(), "7");
        assert_eq!(n.front(), n.rear());
        n.chain.check_links();
    }

    #[test]
    fn digit_illegal_for_radix_is_accepted() {
        let mut n = number("10", 2);
        n.add_digit(Digit::new('5'), 1).unwrap();
        assert_eq!(n.to_string(), "150");
        assert!(!n.is_valid_number());
    }

    #[test]
    fn out_of_range_positions() {
        let mut n = number("123", 10);
        let d = Digit::new('9');
        assert_eq!(
            n.add_digit(d, -1),
            Err(LinkedNumberError::InvalidPosition { position: -1, len: 3 })
        );
        assert_eq!(
            n.add_digit(d, 4),
            Err(LinkedNumberError::InvalidPosition { position: 4, len: 3 })
        );
        assert!(n.add_digit(d, isize::MIN).is_err());
        assert!(n.add_digit(d, isize::MAX).is_err());

        // nothing changed
        assert_eq!(n.to_string(), "123");
        n.chain.check_links();
    }
}

mod remove_digit {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal ($radix:literal) - $pos:literal => $value:literal, $expected:literal) => {
            #[test]
            fn $name() {
                let mut n = number($input, $radix);
                let value = n.remove_digit($pos).unwrap();
                assert_eq!(value, Some(BigUint::from($value as u64)));
                assert_eq!(n.to_string(), $expected);
                n.chain.check_links();
            }
        };
    }

    impl_case!(case_123_rear: "123" (10) - 0 => 3, "12");
    impl_case!(case_123_middle: "123" (10) - 1 => 20, "13");
    impl_case!(case_123_front: "123" (10) - 2 => 100, "23");
    impl_case!(case_hex_front: "F00" (16) - 2 => 3840, "00");
    impl_case!(case_binary: "1011" (2) - 3 => 8, "011");
    impl_case!(case_zero_digit: "505" (10) - 1 => 0, "55");

    #[test]
    fn digit_too_large_still_has_place_value() {
        let mut n = number("90", 2);
        assert_eq!(n.remove_digit(1).unwrap(), Some(BigUint::from(18u32)));
        assert_eq!(n.to_string(), "0");
    }

    #[test]
    fn unrecognized_glyph_has_no_place_value() {
        let mut n = number("1?3", 10);
        assert_eq!(n.remove_digit(1).unwrap(), None);
        assert_eq!(n.to_string(), "13");
        n.chain.check_links();
    }

    #[test]
    fn place_value_is_exact_for_long_numbers() {
        let mut n = number(&format!("Z{}", "0".repeat(20)), 36);
        let value = n.remove_digit(20).unwrap().unwrap();
        assert_eq!(value.to_string(), "467862308859530692374359609180160");
        assert_eq!(n.len(), 20);
    }

    #[test]
    fn remove_every_digit() {
        let mut n = number("4321", 10);
        let mut total = BigUint::from(0u8);
        while !n.is_empty() {
            let last = n.len() as isize - 1;
            total += n.remove_digit(last).unwrap().unwrap();
            n.chain.check_links();
        }
        assert_eq!(total, BigUint::from(4321u32));
        assert_eq!(n.len(), 0);
        assert_eq!(n.front(), None);
        assert_eq!(n.rear(), None);
    }

    #[test]
    fn out_of_range_positions() {
        let mut n = number("123", 10);
        assert_eq!(
            n.remove_digit(3),
            Err(LinkedNumberError::InvalidPosition { position: 3, len: 3 })
        );
        assert_eq!(
            n.remove_digit(-1),
            Err(LinkedNumberError::InvalidPosition { position: -1, len: 3 })
        );
        assert_eq!(n.to_string(), "123");

        n.remove_digit(0).unwrap();
        n.remove_digit(0).unwrap();
        n.remove_digit(0).unwrap();
        assert_eq!(
            n.remove_digit(0),
            Err(LinkedNumberError::InvalidPosition { position: 0, len: 0 })
        );
    }

    #[test]
    fn take_digit_returns_digit() {
        let mut n = number("1A2", 16);
        assert_eq!(n.take_digit(1), Ok(Digit::new('A')));
        assert_eq!(n.to_string(), "12");
        assert!(n.take_digit(2).is_err());
    }

    #[test]
    fn slots_are_recycled() {
        let mut n = number("12345", 10);
        for _ in 0..10 {
            let d = n.take_digit(2).unwrap();
            n.add_digit(d, 2).unwrap();
        }
        assert_eq!(n.to_string(), "12345");
        assert_eq!(n.chain.count(), 5);
        n.chain.check_links();
    }
}

mod errors {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $err:expr => $expected:literal) => {
            #[test]
            fn $name() {
                assert_eq!($err.to_string(), $expected);
            }
        };
    }

    impl_case!(case_empty: LinkedNumberError::Empty => "no digits given");
    impl_case!(case_radix: LinkedNumberError::InvalidRadix(40) => "radix 40 is outside the range 2..=36");
    impl_case!(case_position: LinkedNumberError::InvalidPosition { position: -2, len: 5 }
                              => "invalid position -2 for number of 5 digits");
    impl_case!(case_operation: LinkedNumberError::InvalidOperation("cannot convert invalid number".into())
                               => "cannot convert invalid number");
}
