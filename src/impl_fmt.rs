//! Implementation of std::fmt traits
//!

use crate::*;
use stdlib::fmt::Write;


impl fmt::Display for LinkedNumber {
    /// Digits from front to rear; width, fill, alignment and precision
    /// behave as they do for `str`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.width().is_none() && f.precision().is_none() {
            for digit in self.chain.iter() {
                f.write_char(digit.glyph())?;
            }
            return Ok(());
        }

        let rendered: String = self.chain.iter().map(Digit::glyph).collect();
        f.pad(&rendered)
    }
}

impl fmt::Debug for LinkedNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered: String = self.chain.iter().map(Digit::glyph).collect();
        write!(f, "LinkedNumber({:?}, radix={})", rendered, self.base)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $input:literal ($radix:literal) => $expected:literal) => {
            #[test]
            fn $name() {
                let n = LinkedNumber::from_str_radix($input, $radix).unwrap();
                assert_eq!(n.to_string(), $expected);
                assert_eq!(format!("{}", n), $expected);
            }
        };
    }

    impl_case!(case_hex: "FF" (16) => "FF");
    impl_case!(case_leading_zeros: "0001" (2) => "0001");
    impl_case!(case_invalid_glyphs: "1?z" (10) => "1?z");
    impl_case!(case_single: "7" (8) => "7");

    #[test]
    fn debug_includes_radix() {
        let n = LinkedNumber::from_str_radix("1A", 16).unwrap();
        assert_eq!(format!("{:?}", n), "LinkedNumber(\"1A\", radix=16)");
    }

    #[test]
    fn width_and_alignment() {
        let n = LinkedNumber::from_str_radix("42", 10).unwrap();
        assert_eq!(format!("{:>5}", n), "   42");
        assert_eq!(format!("{:*<4}", n), "42**");
        assert_eq!(format!("{:^6}", n), "  42  ");
    }

    #[test]
    fn precision_truncates_like_str() {
        let n = LinkedNumber::from_str_radix("4217", 10).unwrap();
        assert_eq!(format!("{:.2}", n), "42");
        assert_eq!(format!("{:.9}", n), "4217");
        assert_eq!(format!("{:>5.1}", n), "    4");
        assert_eq!(format!("{:.0}", n), "");
    }

    #[test]
    fn debug_escapes_glyphs() {
        let n = LinkedNumber::from_str_radix("1\"\\2", 10).unwrap();
        assert_eq!(n.len(), 4);
        assert_eq!(format!("{:?}", n), r#"LinkedNumber("1\"\\2", radix=10)"#);
    }

    #[test]
    fn empty_renders_nothing() {
        let mut n = LinkedNumber::from_str_radix("3", 10).unwrap();
        n.remove_digit(0).unwrap();
        assert_eq!(n.to_string(), "");
        assert_eq!(format!("{:?}", n), "LinkedNumber(\"\", radix=10)");
    }
}
