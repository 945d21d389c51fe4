use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netcoresearch_version::{Comparator, Version};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "6.0.100",
        "v8.0.404",
        "9.0.100-rc.2.24474.11",
        "8.0.0-preview.7.23375.6+abcdef",
        "7.0.20",
        "6.0.1_x",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("6.0.100", "6.0.300"),
        ("8.0.100-rc.1", "8.0.100"),
        ("8.0.100-preview.7", "8.0.100-rc.1"),
        ("6.0.1+abc", "6.0.1+def"),
        ("1.2.3.4", "1.2.3"),
    ];

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (left, right) in cases {
                black_box(Comparator::compare(black_box(left), black_box(right)).ok());
            }
        })
    });

    let parsed: Vec<(Version, Version)> = cases
        .iter()
        .filter_map(|(l, r)| Some((Version::parse(l).ok()?, Version::parse(r).ok()?)))
        .collect();

    c.bench_function("compare_parsed_versions", |b| {
        b.iter(|| {
            for (left, right) in &parsed {
                black_box(left.try_cmp(right).ok());
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_compare);
criterion_main!(benches);
