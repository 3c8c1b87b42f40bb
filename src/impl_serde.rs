//!
//! Support for serde implementations
//!
//! A number serializes as a struct holding its radix and its digits:
//! `{ "radix": 16, "digits": "FF" }`. The struct form may hold no digits,
//! so a number emptied by removal reads back as itself. A bare string is
//! also accepted when deserializing, and is parsed in [`DEFAULT_RADIX`]
//! the way `FromStr` parses it.
//!
use crate::*;
use crate::stdlib::string::ToString;
use serde_crate::{de, ser};

const FIELDS: &[&str] = &["radix", "digits"];

impl ser::Serialize for LinkedNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use ser::SerializeStruct;

        let mut state = serializer.serialize_struct("LinkedNumber", 2)?;
        state.serialize_field("radix", &self.base)?;
        state.serialize_field("digits", &self.to_string())?;
        state.end()
    }
}

/// Used by SerDe to construct a LinkedNumber
struct LinkedNumberVisitor;

impl LinkedNumberVisitor {
    /// Number from the struct fields, empty digits allowed
    fn build<E: de::Error>(digits: &str, radix: u32) -> Result<LinkedNumber, E> {
        check_radix(radix).map_err(E::custom)?;
        Ok(LinkedNumber::from_glyphs(digits, radix))
    }
}

impl<'de> de::Visitor<'de> for LinkedNumberVisitor {
    type Value = LinkedNumber;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string of digits or a struct with radix and digits")
    }

    fn visit_str<E>(self, value: &str) -> Result<LinkedNumber, E>
    where
        E: de::Error,
    {
        LinkedNumber::from_str_radix(value, DEFAULT_RADIX).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<LinkedNumber, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let radix: u32 = seq.next_element()?
                            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let digits: String = seq.next_element()?
                                .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        LinkedNumberVisitor::build(&digits, radix)
    }

    fn visit_map<A>(self, mut map: A) -> Result<LinkedNumber, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut radix: Option<u32> = None;
        let mut digits: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "radix" => {
                    if radix.is_some() {
                        return Err(de::Error::duplicate_field("radix"));
                    }
                    radix = Some(map.next_value()?);
                }
                "digits" => {
                    if digits.is_some() {
                        return Err(de::Error::duplicate_field("digits"));
                    }
                    digits = Some(map.next_value()?);
                }
                other => {
                    return Err(de::Error::unknown_field(other, FIELDS));
                }
            }
        }

        let radix = radix.ok_or_else(|| de::Error::missing_field("radix"))?;
        let digits = digits.ok_or_else(|| de::Error::missing_field("digits"))?;
        LinkedNumberVisitor::build(&digits, radix)
    }
}

impl<'de> de::Deserialize<'de> for LinkedNumber {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_struct("LinkedNumber", FIELDS, LinkedNumberVisitor)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error
    };

    fn struct_tokens(radix: u32, digits: &'static str) -> [Token; 6] {
        [
            Token::Struct { name: "LinkedNumber", len: 2 },
            Token::Str("radix"),
            Token::U32(radix),
            Token::Str("digits"),
            Token::Str(digits),
            Token::StructEnd,
        ]
    }

    macro_rules! impl_case {
        ($name:ident: $input:literal ($radix:literal)) => {
            #[test]
            fn $name() {
                let n = LinkedNumber::from_str_radix($input, $radix).unwrap();
                assert_tokens(&n, &struct_tokens($radix, $input));
            }
        };
    }

    impl_case!(case_ff: "FF" (16));
    impl_case!(case_101: "101" (2));
    impl_case!(case_leading_zeros: "0042" (10));
    impl_case!(case_invalid_digits: "9?" (2));

    #[test]
    fn bare_string_uses_default_radix() {
        let expected = LinkedNumber::from_str_radix("1", DEFAULT_RADIX).unwrap();
        assert_de_tokens(&expected, &[Token::Str("1")]);
    }

    #[test]
    fn sequence_form() {
        let expected = LinkedNumber::from_str_radix("Z", 36).unwrap();
        assert_de_tokens(&expected, &[
            Token::Seq { len: Some(2) },
            Token::U32(36),
            Token::Str("Z"),
            Token::SeqEnd,
        ]);
    }

    #[test]
    fn fields_in_any_order() {
        let expected = LinkedNumber::from_str_radix("777", 8).unwrap();
        assert_de_tokens(&expected, &[
            Token::Struct { name: "LinkedNumber", len: 2 },
            Token::Str("digits"),
            Token::Str("777"),
            Token::Str("radix"),
            Token::U32(8),
            Token::StructEnd,
        ]);
    }

    #[test]
    fn emptied_number() {
        let mut n = LinkedNumber::from_str_radix("7", 10).unwrap();
        n.remove_digit(0).unwrap();
        assert_tokens(&n, &struct_tokens(10, ""));

        let mut n = LinkedNumber::from_str_radix("10", 2).unwrap();
        n.remove_digit(1).unwrap();
        n.remove_digit(0).unwrap();
        assert_tokens(&n, &struct_tokens(2, ""));
    }

    #[test]
    fn empty_bare_string() {
        assert_de_tokens_error::<LinkedNumber>(&[Token::Str("")], "no digits given");
    }

    #[test]
    fn empty_digits_with_bad_radix() {
        assert_de_tokens_error::<LinkedNumber>(
            &struct_tokens(1, ""),
            "radix 1 is outside the range 2..=36",
        );
    }

    #[test]
    fn bad_radix() {
        assert_de_tokens_error::<LinkedNumber>(
            &struct_tokens(40, "1"),
            "radix 40 is outside the range 2..=36",
        );
    }

    #[test]
    fn missing_radix() {
        assert_de_tokens_error::<LinkedNumber>(
            &[
                Token::Struct { name: "LinkedNumber", len: 1 },
                Token::Str("digits"),
                Token::Str("1"),
                Token::StructEnd,
            ],
            "missing field `radix`",
        );
    }

    #[test]
    fn unknown_field() {
        assert_de_tokens_error::<LinkedNumber>(
            &[
                Token::Struct { name: "LinkedNumber", len: 1 },
                Token::Str("scale"),
            ],
            "unknown field `scale`, expected `radix` or `digits`",
        );
    }
}
