// Tests for DigitChain, included by chain.rs

#[test]
fn empty_chain() {
    let chain = DigitChain::new();
    assert!(chain.is_empty());
    assert_eq!(chain.count(), 0);
    assert_eq!(chain.front(), None);
    assert_eq!(chain.rear(), None);
    assert_eq!(chain.nth_from_rear(0), None);
    assert_eq!(chain.iter().next(), None);
    chain.check_links();
}

#[test]
fn collect_keeps_order() {
    let chain = chain_of("1A2B");
    assert_eq!(render(&chain), "1A2B");
    assert_eq!(render_rev(&chain), "B2A1");
    assert_eq!(chain.count(), 4);
    assert_eq!(chain.front(), Some(&Digit::new('1')));
    assert_eq!(chain.rear(), Some(&Digit::new('B')));
    chain.check_links();
}

#[test]
fn push_front_into_empty() {
    let mut chain = DigitChain::new();
    chain.push_front(Digit::new('7'));
    assert_eq!(chain.front(), chain.rear());
    assert_eq!(render(&chain), "7");
    chain.check_links();
}

#[test]
fn push_both_ends() {
    let mut chain = chain_of("5");
    chain.push_front(Digit::new('4'));
    chain.push_rear(Digit::new('6'));
    chain.push_front(Digit::new('3'));
    assert_eq!(render(&chain), "3456");
    chain.check_links();
}

#[test]
fn insert_after_middle_and_rear() {
    let mut chain = chain_of("13");
    let one = chain.nth_from_front(0).unwrap();
    chain.insert_after(one, Digit::new('2'));
    assert_eq!(render(&chain), "123");

    let rear = chain.nth_from_rear(0).unwrap();
    chain.insert_after(rear, Digit::new('4'));
    assert_eq!(render(&chain), "1234");
    assert_eq!(chain.rear(), Some(&Digit::new('4')));
    chain.check_links();
}

#[test]
fn nth_from_both_ends() {
    let chain = chain_of("ABCD");
    for (n, expected) in "DCBA".chars().enumerate() {
        let id = chain.nth_from_rear(n).unwrap();
        assert_eq!(chain.digit(id).glyph(), expected);
    }
    for (n, expected) in "ABCD".chars().enumerate() {
        let id = chain.nth_from_front(n).unwrap();
        assert_eq!(chain.digit(id).glyph(), expected);
    }
    assert_eq!(chain.nth_from_rear(4), None);
    assert_eq!(chain.nth_from_front(4), None);
}

#[test]
fn unlink_front_middle_rear() {
    let mut chain = chain_of("12345");

    let front = chain.nth_from_front(0).unwrap();
    assert_eq!(chain.unlink(front), Digit::new('1'));
    assert_eq!(render(&chain), "2345");
    chain.check_links();

    let middle = chain.nth_from_rear(1).unwrap();
    assert_eq!(chain.unlink(middle), Digit::new('4'));
    assert_eq!(render(&chain), "235");
    chain.check_links();

    let rear = chain.nth_from_rear(0).unwrap();
    assert_eq!(chain.unlink(rear), Digit::new('5'));
    assert_eq!(render(&chain), "23");
    assert_eq!(chain.rear(), Some(&Digit::new('3')));
    chain.check_links();
}

#[test]
fn unlink_last_node_empties_chain() {
    let mut chain = chain_of("9");
    let only = chain.nth_from_rear(0).unwrap();
    chain.unlink(only);
    assert!(chain.is_empty());
    assert_eq!(chain.front(), None);
    assert_eq!(chain.rear(), None);
    chain.check_links();

    chain.push_rear(Digit::new('8'));
    assert_eq!(render(&chain), "8");
    chain.check_links();
}

#[test]
fn freed_slots_are_reused() {
    let mut chain = chain_of("123");
    let id = chain.nth_from_rear(1).unwrap();
    chain.unlink(id);
    let reused = chain.push_front(Digit::new('0'));
    assert_eq!(reused, id);
    assert_eq!(render(&chain), "013");
    chain.check_links();
}

#[test]
fn clone_is_compact_and_independent() {
    let mut chain = chain_of("4567");
    let id = chain.nth_from_rear(2).unwrap();
    chain.unlink(id);

    let mut copy = chain.clone();
    assert_eq!(copy.free.len(), 0);
    assert_eq!(render(&copy), "467");
    copy.check_links();

    copy.push_rear(Digit::new('8'));
    assert_eq!(render(&copy), "4678");
    assert_eq!(render(&chain), "467");
}

#[test]
fn iterator_meets_in_the_middle() {
    let chain = chain_of("ABCDE");
    let mut iter = chain.iter();
    assert_eq!(iter.next().map(Digit::glyph), Some('A'));
    assert_eq!(iter.next_back().map(Digit::glyph), Some('E'));
    assert_eq!(iter.next().map(Digit::glyph), Some('B'));
    assert_eq!(iter.next_back().map(Digit::glyph), Some('D'));
    assert_eq!(iter.next().map(Digit::glyph), Some('C'));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}
