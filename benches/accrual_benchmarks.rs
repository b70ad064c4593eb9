//! Performance benchmarks for the Leave Accrual Engine.
//!
//! Targets:
//! - Ledger for a 30-year employee: < 50μs mean
//! - Fifty-year convention comparison: < 2ms mean
//! - Ledger request through the HTTP router: < 200μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use leave_accrual_engine::api::{AppState, create_router};
use leave_accrual_engine::config::ConfigLoader;
use leave_accrual_engine::engine::{FixedClock, LeaveAccrualEngine};
use leave_accrual_engine::models::AccrualConvention;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Creates an engine pinned to a fixed day so runs are comparable.
fn create_engine() -> LeaveAccrualEngine {
    let config = ConfigLoader::load("./config/korea_lsa").expect("Failed to load config");
    LeaveAccrualEngine::with_clock(config.policy().clone(), Arc::new(FixedClock(date("2024-06-01"))))
}

/// Benchmark: yearly ledger for hires of increasing service length.
fn bench_yearly_ledger(c: &mut Criterion) {
    let engine = create_engine();
    let mut group = c.benchmark_group("yearly_ledger");

    for (label, hire) in [("1_year", "2023-07-01"), ("10_years", "2014-03-15"), ("30_years", "1994-11-30")] {
        for convention in AccrualConvention::ALL {
            group.bench_with_input(
                BenchmarkId::new(convention.as_str(), label),
                &date(hire),
                |b, &hire| b.iter(|| black_box(engine.compute_yearly_ledger(hire, None, convention))),
            );
        }
    }

    group.finish();
}

/// Benchmark: dated grant schedule for a 30-year employee.
fn bench_schedule(c: &mut Criterion) {
    let engine = create_engine();
    let hire = date("1994-11-30");
    let mut group = c.benchmark_group("schedule");

    for convention in AccrualConvention::ALL {
        group.bench_function(convention.as_str(), |b| {
            b.iter(|| black_box(engine.compute_schedule(hire, None, convention)))
        });
    }

    group.finish();
}

/// Benchmark: monthly comparison table over the full fifty-year range.
///
/// Target: < 2ms mean
fn bench_comparison_50_years(c: &mut Criterion) {
    let engine = create_engine();
    let hire = date("2023-07-01");

    let mut group = c.benchmark_group("comparison");
    group.throughput(Throughput::Elements(50 * 12));
    group.bench_function("50_years", |b| {
        b.iter(|| black_box(engine.compare_conventions(hire, None, 50)))
    });
    group.finish();
}

/// Benchmark: ledger request through the HTTP router.
///
/// Target: < 200μs mean
fn bench_ledger_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(create_engine()));
    let body = serde_json::json!({ "hire_date": "2014-03-15", "convention": "fiscal" }).to_string();

    c.bench_function("ledger_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/leave/ledger")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_yearly_ledger,
    bench_schedule,
    bench_comparison_50_years,
    bench_ledger_request,
);
criterion_main!(benches);
