use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use trivia_core::model::Question;
use trivia_core::quiz::choose_question;

fn make_pool(n: i64) -> Vec<Question> {
    (1..=n)
        .map(|id| Question {
            id,
            question: format!("Question {id}?"),
            answer: "answer".into(),
            category: 1,
            difficulty: 3,
        })
        .collect()
}

fn bench_choose(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_question");
    let pool = make_pool(1_000);
    let mut rng = StdRng::seed_from_u64(42);

    for served_count in [0usize, 500, 999] {
        let served: HashSet<i64> = (1..=served_count as i64).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(served_count),
            &served,
            |b, served| b.iter(|| choose_question(black_box(pool.clone()), served, &mut rng)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_choose);
criterion_main!(benches);
