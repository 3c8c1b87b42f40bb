//! Benchmarks for conversion and positional mutation

extern crate criterion;
extern crate linked_number;
extern crate oorandom;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linked_number::{Digit, LinkedNumber};

criterion_main!(
    conversion,
    positional,
);

criterion_group!(
    name = conversion;
    config = Criterion::default()
                       .sample_size(100);
    targets =
        bench_convert_hex_to_decimal,
        bench_convert_decimal_to_binary,
);

criterion_group!(
    name = positional;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_add_remove_middle,
        bench_add_remove_ends,
);


/// String of `len` random digits legal in `radix`
fn random_digits(len: usize, radix: u32, seed: u64) -> String {
    let mut rng = oorandom::Rand32::new(seed);
    (0..len)
        .map(|_| Digit::from_value(rng.rand_range(0..radix)).unwrap().glyph())
        .collect()
}

fn bench_convert_hex_to_decimal(c: &mut Criterion) {
    let n = LinkedNumber::from_str_radix(&random_digits(256, 16, 0x1f633481), 16).unwrap();
    c.bench_function("convert 256 hex digits to decimal", |b| {
        b.iter(|| black_box(n.convert(10).unwrap()))
    });
}

fn bench_convert_decimal_to_binary(c: &mut Criterion) {
    let n = LinkedNumber::from_str_radix(&random_digits(300, 10, 0x9a08ddaa), 10).unwrap();
    c.bench_function("convert 300 decimal digits to binary", |b| {
        b.iter(|| black_box(n.convert(2).unwrap()))
    });
}

fn bench_add_remove_middle(c: &mut Criterion) {
    let mut n = LinkedNumber::from_str_radix(&random_digits(1000, 10, 0x6ce6693c), 10).unwrap();
    let digit = Digit::new('7');
    c.bench_function("add and remove at middle of 1000 digits", |b| {
        b.iter(|| {
            n.add_digit(digit, 500).unwrap();
            black_box(n.remove_digit(500).unwrap())
        })
    });
}

fn bench_add_remove_ends(c: &mut Criterion) {
    let mut n = LinkedNumber::from_str_radix(&random_digits(1000, 10, 0xb524e088), 10).unwrap();
    let digit = Digit::new('3');
    c.bench_function("add and remove at both ends of 1000 digits", |b| {
        b.iter(|| {
            n.add_digit(digit, 0).unwrap();
            black_box(n.remove_digit(0).unwrap());
            let len = n.len() as isize;
            n.add_digit(digit, len).unwrap();
            black_box(n.remove_digit(len).unwrap())
        })
    });
}
