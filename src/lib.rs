// Copyright 2016 Adam Sunderland
//           2016-2023 Andrew Kubera
//           2017 Ruben De Smet
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Linked Number
//!
//! `LinkedNumber` stores a non-negative integer of any length as a
//! doubly-linked chain of digits, most significant digit at the *front*
//! and least significant at the *rear*, written in any radix from 2 to 36.
//!
//! Digits are taken from the alphabet `0-9A-Z`. A number may hold digits
//! that are not legal in its radix (or glyphs outside the alphabet
//! entirely); that is data, not an error, and is reported by
//! [`LinkedNumber::is_valid_number`]. Only conversion refuses to work on
//! such numbers.
//!
//! Single digits are inserted and removed by *position from the rear*:
//! position 0 is the least significant digit.
//!
//! Numeric values are computed exactly with [`num_bigint::BigUint`], so
//! there is no upper bound on the length of a number that can be
//! converted.
//!
//! # Example
//!
//! ```
//! use linked_number::{Digit, LinkedNumber};
//!
//! let mut n = LinkedNumber::from_str_radix("FF", 16).unwrap();
//! assert!(n.is_valid_number());
//! assert_eq!(n.convert(10).unwrap().to_string(), "255");
//!
//! n.add_digit(Digit::new('0'), 0).unwrap();
//! assert_eq!(n.to_string(), "FF0");
//! assert_eq!(n.convert(10).unwrap().to_string(), "4080");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
extern crate num_integer;
extern crate num_traits;

#[macro_use]
extern crate log;

#[cfg(feature = "serde")]
extern crate serde_crate;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::convert::TryFrom;
use self::stdlib::fmt;
use self::stdlib::string::String;

use num_bigint::BigUint;


// pub const DEFAULT_RADIX: u32 = ${RUST_LINKED_NUMBER_DEFAULT_RADIX} or 10;
include!(concat!(env!("OUT_DIR"), "/default_radix.rs"));

#[cfg(test)]
extern crate paste;

pub mod digit;
pub use digit::{Digit, MAX_RADIX, MIN_RADIX};

mod chain;
use chain::DigitChain;
pub use chain::Iter;

// convert, to_biguint
mod radix;

// PartialEq, Hash
mod impl_cmp;

// From<T> impls
mod impl_convert;

// Display, Debug
mod impl_fmt;

mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;


/// Reject radixes the alphabet cannot express
fn check_radix(radix: u32) -> Result<(), LinkedNumberError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(LinkedNumberError::InvalidRadix(radix))
    }
}

/// Offset from the rear named by `position`, which must be below `bound`
fn rear_offset(position: isize, bound: usize, len: usize) -> Result<usize, LinkedNumberError> {
    match usize::try_from(position) {
        Ok(offset) if offset < bound => Ok(offset),
        _ => {
            debug!("rejected position {} for number of {} digits", position, len);
            Err(LinkedNumberError::InvalidPosition { position, len })
        }
    }
}


/// A number stored as a chain of digits.
///
#[derive(Clone)]
pub struct LinkedNumber {
    base: u32,
    chain: DigitChain,
}

impl LinkedNumber {
    /// Build number from a string of digit glyphs, most significant first.
    ///
    /// Every character becomes one digit, including characters that are
    /// not legal in `radix`; check with [`is_valid_number`](Self::is_valid_number).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_number::{LinkedNumber, LinkedNumberError};
    ///
    /// let n = LinkedNumber::from_str_radix("101", 2).unwrap();
    /// assert_eq!(n.len(), 3);
    /// assert!(n.is_valid_number());
    ///
    /// let n = LinkedNumber::from_str_radix("9", 2).unwrap();
    /// assert!(!n.is_valid_number());
    ///
    /// assert_eq!(LinkedNumber::from_str_radix("", 10), Err(LinkedNumberError::Empty));
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<LinkedNumber, LinkedNumberError> {
        check_radix(radix)?;
        if s.is_empty() {
            return Err(LinkedNumberError::Empty);
        }
        Ok(LinkedNumber::from_glyphs(s, radix))
    }

    /// Build number from glyphs without checking radix or emptiness
    pub(crate) fn from_glyphs(s: &str, radix: u32) -> LinkedNumber {
        LinkedNumber {
            base: radix,
            chain: s.chars().map(Digit::new).collect(),
        }
    }

    /// True if every digit is legal in this number's radix
    ///
    /// A number without digits is vacuously valid.
    #[inline]
    pub fn is_valid_number(&self) -> bool {
        self.chain.iter().all(|d| d.is_valid_in(self.base))
    }

    /// The radix this number is written in
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of digits
    ///
    /// Counted by walking the chain, so this is linear in the length.
    pub fn len(&self) -> usize {
        self.chain.count()
    }

    /// True if every digit has been removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Most significant digit
    #[inline]
    pub fn front(&self) -> Option<&Digit> {
        self.chain.front()
    }

    /// Least significant digit
    #[inline]
    pub fn rear(&self) -> Option<&Digit> {
        self.chain.rear()
    }

    /// Iterate over digits from most to least significant
    ///
    /// ```
    /// # use linked_number::LinkedNumber;
    /// let n = LinkedNumber::from_str_radix("1A", 16).unwrap();
    /// let values: Vec<_> = n.digits().rev().map(|d| d.value()).collect();
    /// assert_eq!(values, [Some(10), Some(1)]);
    /// ```
    #[inline]
    pub fn digits(&self) -> Iter<'_> {
        self.chain.iter()
    }

    /// Insert digit so that it ends up `position` places from the rear.
    ///
    /// Position 0 appends a new least significant digit; a position equal
    /// to [`len`](Self::len) prepends a new most significant digit. Any
    /// other position places the digit directly on the rear side of the
    /// digit currently at that position.
    ///
    /// Fails with [`LinkedNumberError::InvalidPosition`] if `position` is
    /// negative or greater than the length, leaving the number untouched.
    ///
    /// ```
    /// use linked_number::{Digit, LinkedNumber};
    ///
    /// let mut n = LinkedNumber::from_str_radix("123", 10).unwrap();
    /// n.add_digit(Digit::new('9'), 0).unwrap();
    /// assert_eq!(n.to_string(), "1239");
    /// n.add_digit(Digit::new('8'), 4).unwrap();
    /// assert_eq!(n.to_string(), "81239");
    /// n.add_digit(Digit::new('7'), 2).unwrap();
    /// assert_eq!(n.to_string(), "812739");
    /// assert!(n.add_digit(Digit::new('0'), -1).is_err());
    /// ```
    pub fn add_digit(&mut self, digit: Digit, position: isize) -> Result<(), LinkedNumberError> {
        let len = self.len();
        let offset = rear_offset(position, len + 1, len)?;

        match self.chain.nth_from_rear(offset) {
            Some(at) => self.chain.insert_after(at, digit),
            None => self.chain.push_front(digit),
        };

        trace!("inserted {:?} at position {} (radix {})", digit, offset, self.base);
        Ok(())
    }

    /// Remove the digit `position` places from the rear and return its
    /// place value, `value * base^position`.
    ///
    /// The place value is `None` when the removed glyph is not in the
    /// alphabet; the digit is removed either way. Digits that are merely
    /// too large for the radix still report a place value.
    ///
    /// Fails with [`LinkedNumberError::InvalidPosition`] if `position` is
    /// negative or not less than the length, leaving the number untouched.
    ///
    /// ```
    /// use linked_number::LinkedNumber;
    /// use linked_number::num_bigint::BigUint;
    ///
    /// let mut n = LinkedNumber::from_str_radix("123", 10).unwrap();
    /// assert_eq!(n.remove_digit(1).unwrap(), Some(BigUint::from(20u32)));
    /// assert_eq!(n.to_string(), "13");
    /// assert!(n.remove_digit(2).is_err());
    /// ```
    pub fn remove_digit(&mut self, position: isize) -> Result<Option<BigUint>, LinkedNumberError> {
        let (offset, digit) = self.unlink_at(position)?;
        Ok(digit.value().map(|value| radix::place_value(value, self.base, offset)))
    }

    /// Remove the digit `position` places from the rear and return it.
    ///
    /// Same positions and failures as [`remove_digit`](Self::remove_digit).
    pub fn take_digit(&mut self, position: isize) -> Result<Digit, LinkedNumberError> {
        self.unlink_at(position).map(|(_, digit)| digit)
    }

    fn unlink_at(&mut self, position: isize) -> Result<(usize, Digit), LinkedNumberError> {
        let len = self.len();
        let offset = rear_offset(position, len, len)?;
        let id = self.chain
                     .nth_from_rear(offset)
                     .ok_or(LinkedNumberError::InvalidPosition { position, len })?;

        let digit = self.chain.unlink(id);
        trace!("removed {:?} at position {} (radix {})", digit, offset, self.base);
        Ok((offset, digit))
    }
}


/// Failure of a [`LinkedNumber`] operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkedNumberError {
    /// Construction from a string without any digits
    Empty,
    /// Radix outside `2..=36`
    InvalidRadix(u32),
    /// Operation not possible on the number in its current state
    InvalidOperation(String),
    /// Position from the rear out of range for a number of `len` digits
    InvalidPosition {
        position: isize,
        len: usize,
    },
}

impl fmt::Display for LinkedNumberError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use LinkedNumberError::*;

        match *self {
            Empty => f.write_str("no digits given"),
            InvalidRadix(radix) => {
                write!(f, "radix {} is outside the range {}..={}", radix, MIN_RADIX, MAX_RADIX)
            }
            InvalidOperation(ref reason) => f.write_str(reason),
            InvalidPosition { position, len } => {
                write!(f, "invalid position {} for number of {} digits", position, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinkedNumberError {}


#[cfg(test)]
#[allow(non_snake_case)]
mod linked_number_tests {
    use super::*;
    use crate::stdlib::string::ToString;
    use paste::paste;

    include!("lib.tests.rs");
}

#[cfg(test)]
extern crate proptest;

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::stdlib::string::ToString;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
