//! Single-glyph digits and the radix-36 alphabet
//!
//! A [`Digit`] pairs a glyph with the value it denotes. Glyphs outside the
//! alphabet are still accepted; they simply carry no value and are never
//! legal in any radix.
//!

use crate::stdlib::fmt;

/// Smallest radix a number may be written in
pub const MIN_RADIX: u32 = 2;

/// Largest radix the alphabet can express
pub const MAX_RADIX: u32 = 36;

/// Glyphs in order of value
const ALPHABET: &[u8; MAX_RADIX as usize] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";


/// Value of glyph `c`, or None if `c` is not in the alphabet
///
/// Only upper-case letters are recognized.
///
/// ```
/// use linked_number::digit::char_to_value;
///
/// assert_eq!(char_to_value('7'), Some(7));
/// assert_eq!(char_to_value('F'), Some(15));
/// assert_eq!(char_to_value('f'), None);
/// ```
#[inline]
pub fn char_to_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Glyph denoting `value`, or None if `value` is 36 or above
#[inline]
pub fn value_to_char(value: u32) -> Option<char> {
    ALPHABET.get(value as usize).map(|&b| b as char)
}


/// A single positional symbol
///
/// Immutable once built. Equality compares glyphs, which for glyphs in the
/// alphabet is the same as comparing values.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit {
    glyph: char,
    value: Option<u8>,
}

impl Digit {
    /// Build digit from glyph
    ///
    /// ```
    /// use linked_number::Digit;
    ///
    /// assert_eq!(Digit::new('B').value(), Some(11));
    /// assert_eq!(Digit::new('-').value(), None);
    /// ```
    #[inline]
    pub fn new(glyph: char) -> Digit {
        Digit {
            glyph: glyph,
            value: char_to_value(glyph),
        }
    }

    /// Build digit from its value, None if no glyph denotes `value`
    #[inline]
    pub fn from_value(value: u32) -> Option<Digit> {
        value_to_char(value).map(Digit::new)
    }

    /// Digit for a value already known to be below [`MAX_RADIX`]
    pub(crate) fn from_radix_value(value: u8) -> Digit {
        debug_assert!((value as u32) < MAX_RADIX);
        Digit {
            glyph: ALPHABET[value as usize] as char,
            value: Some(value),
        }
    }

    /// The glyph this digit was built from
    #[inline]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Value of the digit, None if the glyph is not in the alphabet
    #[inline]
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// True if this digit may appear in a number written in `radix`
    ///
    /// ```
    /// use linked_number::Digit;
    ///
    /// assert!(Digit::new('1').is_valid_in(2));
    /// assert!(!Digit::new('9').is_valid_in(2));
    /// assert!(!Digit::new('?').is_valid_in(36));
    /// ```
    #[inline]
    pub fn is_valid_in(&self, radix: u32) -> bool {
        match self.value {
            Some(v) => (v as u32) < radix,
            None => false,
        }
    }
}

impl From<char> for Digit {
    fn from(glyph: char) -> Self {
        Digit::new(glyph)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.glyph, f)
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Digit({:?})", self.glyph)
    }
}
