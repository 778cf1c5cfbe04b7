//! Performance benchmarks for the payroll service.
//!
//! Covers the salary calculation on its own and the salary and role listing
//! endpoints driven through the router against the in-memory store.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use payroll_service::api::{create_router, AppState};
use payroll_service::calculation::calculate_salary;
use payroll_service::config::ErrorPolicy;
use payroll_service::models::NewRole;
use payroll_service::storage::{MemoryStore, PayrollStore};

use axum::{body::Body, http::Request, Router};
use tower::ServiceExt;

/// Creates a router whose store already holds `role_count` roles.
fn create_router_with_roles(runtime: &tokio::runtime::Runtime, role_count: usize) -> Router {
    let store = Arc::new(MemoryStore::new());
    runtime.block_on(async {
        for i in 0..role_count {
            store
                .insert_role(&NewRole {
                    name: format!("Role {}", i),
                    base_salary: Decimal::new(7_500_000 + i as i64, 2),
                    tax_rate: Decimal::new(30, 2),
                    benefits: Decimal::new(1_000_000, 2),
                })
                .await
                .expect("Failed to seed role");
        }
    });
    create_router(AppState::new(store, ErrorPolicy::Uniform))
}

fn bench_calculate_salary(c: &mut Criterion) {
    let base_salary = Decimal::from_str("75000.00").unwrap();
    let tax_rate = Decimal::from_str("0.30").unwrap();
    let benefits = Decimal::from_str("10000.00").unwrap();

    c.bench_function("calculate_salary", |b| {
        b.iter(|| {
            calculate_salary(
                black_box(base_salary),
                black_box(tax_rate),
                black_box(benefits),
            )
        })
    });
}

fn bench_salary_endpoint(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let router = create_router_with_roles(&runtime, 1);

    c.bench_function("salary_endpoint", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("GET")
                            .uri("/v1/employees/salary")
                            .header("Content-Type", "application/json")
                            .body(Body::from(r#"{"role_id":1}"#))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            }
        })
    });
}

fn bench_list_roles(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("list_roles");

    for role_count in [10usize, 100, 1000] {
        let router = create_router_with_roles(&runtime, role_count);
        group.throughput(Throughput::Elements(role_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(role_count),
            &role_count,
            |b, _| {
                b.to_async(&runtime).iter(|| {
                    let router = router.clone();
                    async move {
                        let request = Request::builder()
                            .uri("/v1/roles")
                            .body(Body::empty())
                            .unwrap();
                        let response = router.oneshot(request).await.unwrap();
                        axum::body::to_bytes(response.into_body(), usize::MAX)
                            .await
                            .unwrap()
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calculate_salary,
    bench_salary_endpoint,
    bench_list_roles
);
criterion_main!(benches);
