//! Radix conversion
//!
//! A number is converted by accumulating its exact value in a `BigUint`
//! and then peeling digits off that value in the new radix. Nothing is
//! computed in fixed-width or floating point arithmetic, so conversion of
//! arbitrarily long numbers never overflows or rounds.
//!

use crate::*;
use crate::stdlib::Vec;

use num_integer::Integer;
use num_traits::Zero;


/// Exact place value of digit `value` at `exponent` places from the rear
pub(crate) fn place_value(value: u8, radix: u32, exponent: usize) -> BigUint {
    num_traits::pow(BigUint::from(radix), exponent) * value
}

/// Digit values of `n` in `radix`, most significant first
///
/// Zero is the single digit 0.
fn radix_values_be(n: &BigUint, radix: u32) -> Vec<u8> {
    if n.is_zero() {
        return vec![0];
    }

    let big_radix = BigUint::from(radix);
    let mut values = Vec::new();
    let mut rest = n.clone();
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&big_radix);
        // remainder < radix <= 36, fits in the lowest u32 digit
        let value = remainder.iter_u32_digits().next().unwrap_or(0);
        values.push(value as u8);
        rest = quotient;
    }
    values.reverse();
    values
}


impl LinkedNumber {
    /// Build number with value `n` written in `radix`
    ///
    /// `radix` must already be checked.
    pub(crate) fn from_biguint_radix(n: &BigUint, radix: u32) -> LinkedNumber {
        debug_assert!(check_radix(radix).is_ok());

        LinkedNumber {
            base: radix,
            chain: radix_values_be(n, radix).into_iter().map(Digit::from_radix_value).collect(),
        }
    }

    /// Exact value of the number, None if it is not valid in its radix
    ///
    /// ```
    /// use linked_number::LinkedNumber;
    /// use linked_number::num_bigint::BigUint;
    ///
    /// let n = LinkedNumber::from_str_radix("777", 8).unwrap();
    /// assert_eq!(n.to_biguint(), Some(BigUint::from(511u32)));
    ///
    /// let n = LinkedNumber::from_str_radix("778", 8).unwrap();
    /// assert_eq!(n.to_biguint(), None);
    /// ```
    pub fn to_biguint(&self) -> Option<BigUint> {
        let base = self.base;
        self.chain.iter().try_fold(BigUint::zero(), |total, digit| {
            let value = digit.value().filter(|_| digit.is_valid_in(base))?;
            Some(total * base + value)
        })
    }

    /// Return a new number with the same value written in `new_base`.
    ///
    /// The source number is left unchanged. Leading zeros are not
    /// preserved, and a zero value converts to the single digit `0`.
    ///
    /// Fails with [`LinkedNumberError::InvalidOperation`] if this number is
    /// not valid in its own radix, and with
    /// [`LinkedNumberError::InvalidRadix`] if `new_base` is outside `2..=36`.
    ///
    /// ```
    /// use linked_number::LinkedNumber;
    ///
    /// let n = LinkedNumber::from_str_radix("255", 10).unwrap();
    /// assert_eq!(n.convert(16).unwrap().to_string(), "FF");
    /// assert_eq!(n.convert(2).unwrap().to_string(), "11111111");
    ///
    /// let bad = LinkedNumber::from_str_radix("9", 2).unwrap();
    /// assert!(bad.convert(10).is_err());
    /// ```
    pub fn convert(&self, new_base: u32) -> Result<LinkedNumber, LinkedNumberError> {
        let total = self.to_biguint().ok_or_else(|| {
            debug!("refusing to convert invalid number {} (radix {})", self, self.base);
            LinkedNumberError::InvalidOperation(String::from("cannot convert invalid number"))
        })?;
        check_radix(new_base)?;

        let result = LinkedNumber::from_biguint_radix(&total, new_base);
        debug!("converted {} (radix {}) to {} (radix {})", self, self.base, result, new_base);
        Ok(result)
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;
    use paste::paste;

    include!("radix.tests.rs");
}
