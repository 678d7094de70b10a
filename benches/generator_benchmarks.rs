use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use abacus::generator::multiplication::generate_mult_questions;
use abacus::generator::running_sum::generate_running_sum;
use abacus::generator::tables::expand_tables;
use abacus::question::render_operands;

fn bench_running_sum(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    c.bench_function("generate_running_sum (10 operands, max 100)", |b| {
        b.iter(|| generate_running_sum(black_box(10), black_box(100), &mut rng))
    });

    // Large bounds push the running total close to the cap more often.
    c.bench_function("generate_running_sum (50 operands, max 10000)", |b| {
        b.iter(|| generate_running_sum(black_box(50), black_box(10_000), &mut rng))
    });
}

fn bench_mult(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let bounds = [Some(20), Some(100), None];

    c.bench_function("generate_mult_questions (100 questions, 3 operands)", |b| {
        b.iter(|| generate_mult_questions(black_box(&bounds), 100, 3, &mut rng))
    });
}

fn bench_formatting(c: &mut Criterion) {
    let operands: Vec<i64> = (0..20).map(|i| if i % 3 == 0 { -i } else { i }).collect();
    let tokens = ["2", "4-9", "11-12", "3"];

    c.bench_function("render_operands (20 operands)", |b| {
        b.iter(|| render_operands(black_box(&operands)))
    });
    c.bench_function("expand_tables (4 tokens)", |b| {
        b.iter(|| expand_tables(black_box(&tokens)))
    });
}

criterion_group!(benches, bench_running_sum, bench_mult, bench_formatting);
criterion_main!(benches);
