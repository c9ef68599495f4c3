use criterion::{black_box, criterion_group, criterion_main, Criterion};

use leetcoach_core::model::Problem;
use leetcoach_core::review::review;
use leetcoach_core::CurriculumStore;

fn bench_review(c: &mut Criterion) {
    let mut group = c.benchmark_group("review");

    let problem = Problem {
        time_complexity: "O(n)".into(),
        space_complexity: "O(n)".into(),
        ..Problem::new("Two Sum", "arrays")
    };

    let short = "return sorted(nums)";

    let typical = r#"def two_sum(nums, target):
    seen = {}
    for i, n in enumerate(nums):
        if target - n in seen:
            return [seen[target - n], i]
        seen[n] = i
    return []"#;

    let large = {
        let mut s = String::new();
        for i in 0..500 {
            s.push_str(&format!("    value_{i} = value_{i} + {i}\n"));
        }
        s.push_str("while True:\n    break\n");
        s
    };

    group.bench_function("short", |b| {
        b.iter(|| review(black_box(short), black_box(&problem)))
    });

    group.bench_function("typical", |b| {
        b.iter(|| review(black_box(typical), black_box(&problem)))
    });

    group.bench_function("large", |b| {
        b.iter(|| review(black_box(&large), black_box(&problem)))
    });

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let problems: Vec<Problem> = (0..1000)
        .map(|i| Problem::new(format!("Problem {i}"), format!("topic-{}", i % 18)))
        .collect();

    c.bench_function("group_by_topic_1000", |b| {
        b.iter(|| CurriculumStore::from_problems(black_box(problems.clone())))
    });
}

criterion_group!(benches, bench_review, bench_grouping);
criterion_main!(benches);
