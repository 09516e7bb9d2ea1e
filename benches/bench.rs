// Criterion benchmarks for Founder Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use founder_match::core::{score_grants, score_investors, top_matches};
use founder_match::models::{FounderProfile, Grant, Investor};
use founder_match::services::Catalog;

fn create_profile() -> FounderProfile {
    FounderProfile {
        startup_industry: Some("SaaS".to_string()),
        startup_stage: Some("MVP".to_string()),
        startup_business_model: Some("B2B".to_string()),
        founder_location: Some("Detroit, MI".to_string()),
        funding_plans: Some("Seeking grants".to_string()),
        funding_amount_range: Some("$250K-1M".to_string()),
        primary_goals: vec!["Raise funding".to_string(), "Join accelerator".to_string()],
        team_size: Some("Solo founder".to_string()),
        ..Default::default()
    }
}

/// Repeat the bundled listings with fresh ids until `count` entries exist
fn grow<T: Clone>(items: &[T], count: usize, set_id: impl Fn(&mut T, String)) -> Vec<T> {
    (0..count)
        .map(|i| {
            let mut item = items[i % items.len()].clone();
            set_id(&mut item, format!("bench-{}", i));
            item
        })
        .collect()
}

fn bench_score_grants(c: &mut Criterion) {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let profile = create_profile();

    let mut group = c.benchmark_group("score_grants");

    for count in [20, 100, 1000].iter() {
        let grants: Vec<Grant> = grow(&catalog.grants, *count, |g, id| g.id = id);

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| score_grants(black_box(&profile), black_box(&grants)));
        });
    }

    group.finish();
}

fn bench_score_investors(c: &mut Criterion) {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let profile = create_profile();

    let mut group = c.benchmark_group("score_investors");

    for count in [8, 100, 1000].iter() {
        let investors: Vec<Investor> = grow(&catalog.investors, *count, |i, id| i.id = id);

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| score_investors(black_box(&profile), black_box(&investors)));
        });
    }

    group.finish();
}

fn bench_top_matches(c: &mut Criterion) {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let scored = score_grants(&create_profile(), &catalog.grants);

    c.bench_function("top_matches_bundled_grants", |b| {
        b.iter(|| top_matches(black_box(&scored), black_box(3)));
    });
}

criterion_group!(
    benches,
    bench_score_grants,
    bench_score_investors,
    bench_top_matches
);

criterion_main!(benches);
