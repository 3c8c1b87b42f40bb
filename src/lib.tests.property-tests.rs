// Property tests to be included by lib.rs

/// A radix paired with a non-empty string of digits legal in that radix
fn valid_number() -> impl Strategy<Value = (u32, String)> {
    (MIN_RADIX..=MAX_RADIX).prop_flat_map(|radix| {
        let glyphs = prop::collection::vec(0..radix, 1..48).prop_map(|values| {
            values.into_iter().filter_map(digit::value_to_char).collect::<String>()
        });
        (Just(radix), glyphs)
    })
}

proptest! {
    #[test]
    fn render_round_trip(s in "[0-9A-Za-z?._-]{1,40}", radix in MIN_RADIX..=MAX_RADIX) {
        let n = LinkedNumber::from_str_radix(&s, radix).unwrap();
        prop_assert_eq!(n.len(), s.chars().count());
        prop_assert_eq!(n.to_string(), s);
    }

    #[test]
    fn validity_matches_glyphs(s in "[0-9A-Z]{1,20}", radix in MIN_RADIX..=MAX_RADIX) {
        let n = LinkedNumber::from_str_radix(&s, radix).unwrap();
        let expected = s.chars().all(|c| {
            digit::char_to_value(c).map_or(false, |v| (v as u32) < radix)
        });
        prop_assert_eq!(n.is_valid_number(), expected);
    }

    #[test]
    fn value_matches_biguint((radix, s) in valid_number(), new_radix in MIN_RADIX..=MAX_RADIX) {
        let n = LinkedNumber::from_str_radix(&s, radix).unwrap();
        let expected = BigUint::parse_bytes(s.as_bytes(), radix).unwrap();
        prop_assert_eq!(n.to_biguint(), Some(expected.clone()));

        let converted = n.convert(new_radix).unwrap();
        prop_assert_eq!(converted.to_string(), expected.to_str_radix(new_radix).to_uppercase());

        // source untouched
        prop_assert_eq!(n.to_string(), s);
    }

    #[test]
    fn conversion_round_trip((radix, s) in valid_number(), via in MIN_RADIX..=MAX_RADIX) {
        let n = LinkedNumber::from_str_radix(&s, radix).unwrap();
        let back = n.convert(via).unwrap().convert(radix).unwrap();
        prop_assert_eq!(back.to_biguint(), n.to_biguint());
        prop_assert_eq!(back, n.convert(radix).unwrap());
    }

    #[test]
    fn add_then_take_restores_number(
        s in "[0-9A-Z]{1,24}",
        glyph in prop::char::range('0', 'Z'),
        seed in any::<usize>(),
    ) {
        let mut n = LinkedNumber::from_str_radix(&s, 36).unwrap();
        let original = n.clone();
        let position = (seed % (n.len() + 1)) as isize;
        let digit = Digit::new(glyph);

        n.add_digit(digit, position).unwrap();
        prop_assert_eq!(n.len(), original.len() + 1);
        n.chain.check_links();

        prop_assert_eq!(n.take_digit(position).unwrap(), digit);
        prop_assert_eq!(&n, &original);
        n.chain.check_links();
    }

    #[test]
    fn removed_place_value((radix, s) in valid_number(), seed in any::<usize>()) {
        let mut n = LinkedNumber::from_str_radix(&s, radix).unwrap();
        let total = n.to_biguint().unwrap();
        let position = seed % n.len();
        let value = n.digits().rev().nth(position).and_then(Digit::value).unwrap();

        let removed = n.remove_digit(position as isize).unwrap().unwrap();
        prop_assert_eq!(&removed, &(BigUint::from(radix).pow(position as u32) * value));
        prop_assert!(removed <= total);
        prop_assert_eq!(n.len(), s.len() - 1);
    }
}
