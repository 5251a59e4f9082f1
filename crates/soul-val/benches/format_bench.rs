use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soul_val::{soul_format, str, Array, SoulStr};

fn bench_format_ints(c: &mut Criterion) {
    let arr: Array<i64> = (0..1000).collect();
    c.bench_function("format_int_array_1000", |b| {
        b.iter(|| soul_format!(black_box(&arr)))
    });
}

fn bench_format_nested_strings(c: &mut Criterion) {
    let rows: Array<Array<SoulStr>> = (0..100)
        .map(|i| (0..10).map(|j| str(&(i * 10 + j))).collect())
        .collect();
    c.bench_function("format_nested_strings_100x10", |b| {
        b.iter(|| soul_format!(black_box(&rows)))
    });
}

fn bench_clone_slice(c: &mut Criterion) {
    let arr: Array<u32> = (0..10_000).collect();
    c.bench_function("clone_slice_5000", |b| {
        b.iter(|| black_box(arr.slice(2500, 7500).to_array()))
    });
}

criterion_group!(benches, bench_format_ints, bench_format_nested_strings, bench_clone_slice);
criterion_main!(benches);
