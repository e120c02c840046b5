//! Criterion benchmarks for taxkit-core.
//!
//! These benchmarks exercise the pure-Rust internals that do NOT require a
//! Python runtime.  Functions decorated with `#[pyfunction]` are still plain
//! Rust functions at the language level -- PyO3 merely wraps them -- so they
//! can be called directly from Rust benchmark code.
//!
//! ## Benchmark groups
//!
//! 1. **catalog** — Schedule and deduction lookups.
//! 2. **calculator** — Slab walks at several income levels + breakdown.
//! 3. **orchestrator** — Full compute path including explanation assembly.
//! 4. **explain** — Topic lookup, fallback, and result synthesis.
//! 5. **proficiency** — Ledger updates.
//!
//! ## Running
//!
//! ```sh
//! cargo bench --manifest-path crates/taxkit-core/Cargo.toml
//! # Run only the calculator group:
//! cargo bench --manifest-path crates/taxkit-core/Cargo.toml -- calculator
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Re-export crate under a friendlier alias.  The lib target is called
// `_taxkit_core` (matching the Python extension module name).
use _taxkit_core::calculator::{bracket_breakdown_impl, compute_progressive_tax_impl};
use _taxkit_core::catalog::{schedule_for, standard_deduction_for, DEFAULT_TAX_YEAR};
use _taxkit_core::explain::{explain_topic_impl, synthesize_result_explanation};
use _taxkit_core::models::{FilingStatus, ProficiencyLevel, TaxComputationInput};
use _taxkit_core::orchestrator::compute_tax_impl;
use _taxkit_core::proficiency::ProficiencyLedger;

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    group.bench_function("schedule_for", |b| {
        b.iter(|| {
            for status in FilingStatus::ALL {
                black_box(schedule_for(DEFAULT_TAX_YEAR, black_box(status)).unwrap());
            }
        })
    });
    group.bench_function("standard_deduction_for", |b| {
        b.iter(|| {
            for status in FilingStatus::ALL {
                black_box(standard_deduction_for(DEFAULT_TAX_YEAR, black_box(status)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");
    for income in [10_000.0_f64, 100_000.0, 970_800.0] {
        group.bench_with_input(
            BenchmarkId::new("progressive_tax", income as i64),
            &income,
            |b, &income| {
                b.iter(|| {
                    compute_progressive_tax_impl(
                        black_box(income),
                        FilingStatus::MarriedFilingJointly,
                        DEFAULT_TAX_YEAR,
                    )
                    .unwrap()
                })
            },
        );
    }
    group.bench_function("bracket_breakdown", |b| {
        b.iter(|| {
            bracket_breakdown_impl(
                black_box(250_000.0),
                FilingStatus::Single,
                DEFAULT_TAX_YEAR,
            )
            .unwrap()
        })
    });
    group.finish();
}

fn bench_orchestrator(c: &mut Criterion) {
    let input = TaxComputationInput {
        gross_income: 120_000.0,
        filing_status: FilingStatus::HeadOfHousehold,
        dependents: 2,
        additional_deductions: 18_000.0,
    };
    c.bench_function("orchestrator/compute_tax", |b| {
        b.iter(|| compute_tax_impl(black_box(&input)).unwrap())
    });
}

fn bench_explain(c: &mut Criterion) {
    let mut group = c.benchmark_group("explain");
    group.bench_function("topic_hit", |b| {
        b.iter(|| explain_topic_impl(black_box("standard deduction"), ProficiencyLevel::Expert))
    });
    group.bench_function("topic_fallback", |b| {
        b.iter(|| explain_topic_impl(black_box("wash sales"), ProficiencyLevel::Novice))
    });
    group.bench_function("result_synthesis", |b| {
        b.iter(|| {
            synthesize_result_explanation(
                black_box(50_000.0),
                4_016.0,
                8.03,
                12.0,
                ProficiencyLevel::Intermediate,
            )
        })
    });
    group.finish();
}

fn bench_proficiency(c: &mut Criterion) {
    c.bench_function("proficiency/ledger_record", |b| {
        let ledger = ProficiencyLedger::new();
        b.iter(|| ledger.record_interaction(black_box("bench-user"), false))
    });
}

criterion_group!(
    benches,
    bench_catalog,
    bench_calculator,
    bench_orchestrator,
    bench_explain,
    bench_proficiency
);
criterion_main!(benches);
