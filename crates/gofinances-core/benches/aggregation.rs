use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gofinances_core::{CategorySummarizer, LocaleFormatter, Period, TransactionAggregator};
use gofinances_domain::{Catalog, TransactionRecord, TransactionType};

fn records(len: usize) -> Vec<TransactionRecord> {
    let keys: Vec<String> = Catalog::builtin().iter().map(|c| c.key.clone()).collect();
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    (0..len)
        .map(|index| {
            let kind = if index % 4 == 0 {
                TransactionType::Inflow
            } else {
                TransactionType::Outflow
            };
            TransactionRecord::new(
                index.to_string(),
                "bench",
                kind,
                (index % 977) as f64 + 0.5,
                keys[index % keys.len()].as_str(),
                start + Duration::days((index % 365) as i64),
            )
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let data = records(10_000);
    let formatter = LocaleFormatter::default();
    let period = Period::new(2021, 6).expect("period");

    c.bench_function("aggregate_10k", |b| {
        b.iter(|| TransactionAggregator::aggregate(black_box(&data)))
    });
    c.bench_function("summarize_10k", |b| {
        b.iter(|| {
            CategorySummarizer::summarize(black_box(&data), period, Catalog::builtin(), &formatter)
        })
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
