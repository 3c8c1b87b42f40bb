//! Code for implementing From<T> for LinkedNumbers
//!
//! Integers are always written in radix 10. Signed integers keep their
//! sign character, which is not a digit, so negative values produce
//! numbers that are not valid.

use crate::*;
use crate::stdlib::string::ToString;


macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for LinkedNumber {
            fn from(n: $t) -> Self {
                LinkedNumber::from_glyphs(&n.to_string(), 10)
            }
        }

        impl From<&$t> for LinkedNumber {
            fn from(n: &$t) -> Self {
                LinkedNumber::from(*n)
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(usize);
impl_from_int_primitive!(i8);
impl_from_int_primitive!(i16);
impl_from_int_primitive!(i32);
impl_from_int_primitive!(i64);
impl_from_int_primitive!(i128);
impl_from_int_primitive!(isize);

impl From<&BigUint> for LinkedNumber {
    fn from(n: &BigUint) -> Self {
        LinkedNumber::from_biguint_radix(n, 10)
    }
}

impl From<BigUint> for LinkedNumber {
    fn from(n: BigUint) -> Self {
        LinkedNumber::from(&n)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($t:ident : $input:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $t _ $input >]() {
                    let n = LinkedNumber::from($input as $t);
                    assert_eq!(n.base(), 10);
                    assert_eq!(n.to_string(), $expected);
                    assert!(n.is_valid_number());
                    assert_eq!(n, LinkedNumber::from_str_radix($expected, 10).unwrap());
                }
            }
        };
    }

    impl_case!(u8: 0 => "0");
    impl_case!(u8: 255 => "255");
    impl_case!(u16: 4096 => "4096");
    impl_case!(u32: 123 => "123");
    impl_case!(u64: 18446744073709551615 => "18446744073709551615");
    impl_case!(usize: 42 => "42");
    impl_case!(i32: 7 => "7");
    impl_case!(i64: 9000000000 => "9000000000");

    #[test]
    fn negative_integer_is_not_valid() {
        let n = LinkedNumber::from(-12i32);
        assert_eq!(n.to_string(), "-12");
        assert_eq!(n.len(), 3);
        assert!(!n.is_valid_number());
        assert_eq!(n.front().and_then(Digit::value), None);
    }

    #[test]
    fn from_reference() {
        let x = 99u64;
        assert_eq!(LinkedNumber::from(&x), LinkedNumber::from(x));
    }

    #[test]
    fn from_biguint() {
        let big: BigUint = "123456789012345678901234567890".parse().unwrap();
        let n = LinkedNumber::from(&big);
        assert_eq!(n.to_string(), "123456789012345678901234567890");
        assert_eq!(n.to_biguint(), Some(big.clone()));
        assert_eq!(LinkedNumber::from(big), n);
    }

    #[test]
    fn from_zero_biguint() {
        let n = LinkedNumber::from(BigUint::from(0u8));
        assert_eq!(n.to_string(), "0");
        assert_eq!(n.len(), 1);
    }
}
