use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dice_roller::interpreter::DiceRoller;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("roll");
    let expressions = [
        "d20".to_string(),
        "2d4 + 3d5*5 + 5.0 + d4".to_string(),
        "(2d6 + 3)(d4) - 1".to_string(),
        "2^3^2 / (1 + d8) * 100d6".to_string(),
        "((1 + 2) * (3d6 - 4)) / (5 + (6 * d12))^2".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                let mut rng = StdRng::seed_from_u64(0);
                bencher.iter(|| DiceRoller::with_roller(expression, &mut rng));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
