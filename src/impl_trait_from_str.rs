use crate::*;
use stdlib::str::FromStr;

impl FromStr for LinkedNumber {
    type Err = LinkedNumberError;

    /// Parse in the default radix, see [`DEFAULT_RADIX`]
    #[inline]
    fn from_str(s: &str) -> Result<LinkedNumber, LinkedNumberError> {
        LinkedNumber::from_str_radix(s, DEFAULT_RADIX)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $len:literal) => {
            #[test]
            fn $name() {
                let n = LinkedNumber::from_str($input).unwrap();
                assert_eq!(n.base(), DEFAULT_RADIX);
                assert_eq!(n.to_string(), $input);
                assert_eq!(n.len(), $len);
            }
        };
    }

    impl_case!(case_1: "1" => 1);
    impl_case!(case_101: "101" => 3);
    impl_case!(case_000: "000" => 3);
    impl_case!(case_1331107: "1331107" => 7);

    #[test]
    fn parse_method() {
        let n: LinkedNumber = "10".parse().unwrap();
        assert_eq!(n, LinkedNumber::from_str_radix("10", DEFAULT_RADIX).unwrap());
    }

    #[test]
    fn empty_string() {
        assert_eq!(LinkedNumber::from_str(""), Err(LinkedNumberError::Empty));
        assert_eq!("".parse::<LinkedNumber>().unwrap_err().to_string(), "no digits given");
    }
}
