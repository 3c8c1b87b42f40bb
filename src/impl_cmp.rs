//! Implementation of comparison operations
//!
//! Equality is structural: two numbers are equal when they share a radix
//! and the same digits in the same order. Numbers with the same value but
//! different leading zeros are *not* equal; compare
//! [`to_biguint`](LinkedNumber::to_biguint) results for numeric equality.
//!

use crate::*;

use stdlib::hash::{Hash, Hasher};


impl PartialEq for LinkedNumber
{
    fn eq(&self, rhs: &LinkedNumber) -> bool {
        if self.base != rhs.base {
            return false;
        }

        let mut lhs_digits = self.chain.iter();
        let mut rhs_digits = rhs.chain.iter();
        loop {
            match (lhs_digits.next(), rhs_digits.next()) {
                (Some(a), Some(b)) if a == b => continue,
                // both sequences ended together
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl Eq for LinkedNumber {}

impl Hash for LinkedNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        for digit in self.chain.iter() {
            digit.hash(state);
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use stdlib::DefaultHasher;

    fn hash<T: Hash>(obj: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        obj.hash(&mut hasher);
        hasher.finish()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal ($ra:literal) == $b:literal ($rb:literal)) => {
            #[test]
            fn $name() {
                let a = LinkedNumber::from_str_radix($a, $ra).unwrap();
                let b = LinkedNumber::from_str_radix($b, $rb).unwrap();
                assert_eq!(a, b);
                assert_eq!(b, a);
                assert_eq!(hash(&a), hash(&b));
            }
        };
        ($name:ident: $a:literal ($ra:literal) != $b:literal ($rb:literal)) => {
            #[test]
            fn $name() {
                let a = LinkedNumber::from_str_radix($a, $ra).unwrap();
                let b = LinkedNumber::from_str_radix($b, $rb).unwrap();
                assert_ne!(a, b);
                assert_ne!(b, a);
            }
        };
    }

    impl_case!(case_42_eq_42: "42" (10) == "42" (10));
    impl_case!(case_invalid_eq_invalid: "9?" (2) == "9?" (2));
    impl_case!(case_007_ne_7: "007" (10) != "7" (10));
    impl_case!(case_prefix: "12" (10) != "123" (10));
    impl_case!(case_different_radix: "11" (10) != "11" (16));
    impl_case!(case_different_digit: "124" (10) != "123" (10));
    impl_case!(case_same_value_different_radix: "FF" (16) != "255" (10));

    #[test]
    fn equality_after_mutation() {
        let mut a = LinkedNumber::from_str_radix("123", 10).unwrap();
        let b = LinkedNumber::from_str_radix("13", 10).unwrap();
        assert_ne!(a, b);

        a.remove_digit(1).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn emptied_numbers_compare_by_radix() {
        let mut a = LinkedNumber::from_str_radix("1", 10).unwrap();
        let mut b = LinkedNumber::from_str_radix("2", 10).unwrap();
        a.remove_digit(0).unwrap();
        b.remove_digit(0).unwrap();
        assert_eq!(a, b);

        let mut c = LinkedNumber::from_str_radix("1", 2).unwrap();
        c.remove_digit(0).unwrap();
        assert_ne!(a, c);
    }
}
