use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sigil::{Generator, is_sigil};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for length in [8usize, 16, 24, 32] {
        let generator = Generator::builder()
            .length(length)
            .expect("bench length is valid")
            .build()
            .expect("bench generator setup failed");

        group.bench_with_input(BenchmarkId::from_parameter(length), &generator, |b, g| {
            b.iter(|| black_box(g.generate()));
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let generator = Generator::builder().build().expect("bench generator setup failed");
    let id = generator.generate();

    c.bench_function("is_sigil", |b| b.iter(|| is_sigil(black_box(&id))));
}

criterion_group!(benches, bench_generate, bench_validate);
criterion_main!(benches);
