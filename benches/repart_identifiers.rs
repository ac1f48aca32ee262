use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skycat::repart_identifiers;

/// The M31 row: Messier precedence, NGC recovery, locale names, free-text
/// identifiers: the worst realistic case per row.
fn repart_messier_galaxy(c: &mut Criterion) {
    let identifiers = vec![
        "2MASX J00424433+4116074".to_string(),
        "UGC 454".to_string(),
        "MCG +07-02-016".to_string(),
    ];
    let common_names = vec!["Andromeda Galaxy".to_string()];

    c.bench_function("repart_messier_galaxy", |b| {
        b.iter(|| {
            repart_identifiers(
                black_box("NGC0224"),
                black_box(&[31]),
                black_box(&[]),
                black_box(&[]),
                black_box(&identifiers),
                black_box(&common_names),
            )
        })
    });
}

/// A bare NGC row, the common case across the catalog.
fn repart_plain_ngc(c: &mut Criterion) {
    c.bench_function("repart_plain_ngc", |b| {
        b.iter(|| {
            repart_identifiers(
                black_box("NGC7000"),
                black_box(&[]),
                black_box(&[]),
                black_box(&[]),
                black_box(&[]),
                black_box(&[]),
            )
        })
    });
}

criterion_group!(benches, repart_messier_galaxy, repart_plain_ngc);
criterion_main!(benches);
