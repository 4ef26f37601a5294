//! Performance benchmarks for the GPA engine.
//!
//! - Grading a single mark
//! - SGPA of an 8-subject semester, with and without the audit trail
//! - CGPA over 8 semesters
//! - A batch of 100 `/sgpa` requests through the router
//! - Scaling of `/sgpa` with subject count
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use gpa_engine::api::{AppState, SemesterRequest, create_router};
use gpa_engine::calculation::{GradingPolicy, calculate_sgpa, compute_cgpa, compute_sgpa, grade_of};
use gpa_engine::config::ConfigLoader;
use gpa_engine::models::{SemesterEntry, SubjectRecord};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/vtu").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a semester with `count` subjects spread across the grade bands.
fn create_subjects(count: usize) -> Vec<SubjectRecord> {
    let totals = [84, 76, 92, 63, 57, 95, 88, 41];
    let credits = [4, 4, 3, 3, 3, 1, 1, 1];

    (0..count)
        .map(|i| {
            let mut subject =
                SubjectRecord::new(Decimal::from(totals[i % totals.len()]), credits[i % credits.len()]);
            subject.subject_code = format!("BCS4{:02}", i);
            subject
        })
        .collect()
}

fn create_semesters() -> Vec<SemesterEntry> {
    [812, 790, 845, 868, 801, 877, 910, 925]
        .into_iter()
        .map(|hundredths| SemesterEntry::with_credits(Decimal::new(hundredths, 2), 20))
        .collect()
}

fn sgpa_body(subject_count: usize) -> String {
    let request = SemesterRequest {
        student: None,
        subjects: create_subjects(subject_count),
    };
    serde_json::to_string(&request).expect("request serializes")
}

/// Benchmark: Grading a single mark.
fn bench_grade_single_mark(c: &mut Criterion) {
    let marks = Decimal::new(8450, 2);
    c.bench_function("grade_single_mark", |b| b.iter(|| grade_of(black_box(marks))));
}

/// Benchmark: SGPA of an 8-subject semester.
fn bench_sgpa_8_subjects(c: &mut Criterion) {
    let subjects = create_subjects(8);
    let policy = GradingPolicy::canonical();

    let mut group = c.benchmark_group("sgpa_8_subjects");
    group.bench_function("plain", |b| b.iter(|| compute_sgpa(black_box(&subjects))));
    group.bench_function("audited", |b| {
        b.iter(|| calculate_sgpa(black_box(&subjects), &policy, 1))
    });
    group.finish();
}

/// Benchmark: CGPA over 8 semesters.
fn bench_cgpa_8_semesters(c: &mut Criterion) {
    let semesters = create_semesters();
    c.bench_function("cgpa_8_semesters", |b| {
        b.iter(|| compute_cgpa(black_box(&semesters), false))
    });
}

/// Benchmark: Batch of 100 semester reports through the router.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let body = sgpa_body(8);

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(100));
    group.bench_function("sgpa_batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for _ in 0..100 {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/sgpa")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Various subject counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for subject_count in [1, 4, 8, 16, 32].iter() {
        let router = create_router(state.clone());
        let body = sgpa_body(*subject_count);

        group.throughput(Throughput::Elements(*subject_count as u64));
        group.bench_with_input(
            BenchmarkId::new("subjects", subject_count),
            subject_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/sgpa")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_grade_single_mark,
    bench_sgpa_8_subjects,
    bench_cgpa_8_semesters,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
