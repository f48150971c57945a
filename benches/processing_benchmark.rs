use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dataset_merger::models::{CellValue, Row, Table, YearlyTable};
use dataset_merger::utils::{parse_day_first, parse_decimal};
use dataset_merger::{DataMerger, MergerConfig};
use std::path::PathBuf;

// Hourly measurements for one year, with every tenth hour repeated
fn create_yearly_table(year: i32, hours: usize) -> YearlyTable {
    let columns = vec!["Station".to_string(), "Wert".to_string()];
    let mut table = Table::new("Datum von", 0, columns);
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    for hour in 0..hours {
        let key = start + Duration::hours(hour as i64);
        let cells = vec![
            CellValue::Text("DEBW081".to_string()),
            CellValue::float(hour as f64 * 0.25),
        ];
        table.push_row(Row::new(key, cells.clone())).unwrap();
        if hour % 10 == 0 {
            table.push_row(Row::new(key, cells)).unwrap();
        }
    }

    YearlyTable {
        year,
        source: PathBuf::from(format!("df_{}.csv", year)),
        table,
    }
}

fn benchmark_dedup_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup_and_sort");

    for hours in [1_000, 8_760] {
        let yearly = create_yearly_table(2021, hours);
        group.bench_with_input(BenchmarkId::from_parameter(hours), &yearly, |b, yearly| {
            b.iter(|| {
                let mut table = yearly.table.clone();
                black_box(table.dedup_and_sort())
            })
        });
    }

    group.finish();
}

fn benchmark_merge(c: &mut Criterion) {
    let merger = DataMerger::new(MergerConfig::default());
    let tables: Vec<YearlyTable> = (2021..=2024)
        .map(|year| create_yearly_table(year, 8_760))
        .collect();

    c.bench_function("merge_four_years", |b| {
        b.iter(|| black_box(merger.merge(tables.clone()).unwrap()))
    });
}

fn benchmark_field_parsing(c: &mut Criterion) {
    c.bench_function("parse_day_first", |b| {
        b.iter(|| black_box(parse_day_first(black_box("24.12.2023 13:00"))))
    });

    c.bench_function("parse_decimal", |b| {
        b.iter(|| black_box(parse_decimal(black_box("-1234,5678"))))
    });
}

criterion_group!(
    benches,
    benchmark_dedup_and_sort,
    benchmark_merge,
    benchmark_field_parsing
);
criterion_main!(benches);
