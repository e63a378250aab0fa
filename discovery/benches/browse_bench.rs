#![allow(clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use showcase_discovery::Contributor;
use showcase_discovery::DiscoveryConfig;
use showcase_discovery::DiscoveryEngine;
use showcase_discovery::ProjectRecord;
use showcase_discovery::QueryState;
use showcase_discovery::SortKey;

const STATUSES: [&str; 4] = ["Ongoing", "Completed", "Archived", "Pending Approval"];
const DEPARTMENTS: [&str; 5] = ["Engineering", "AI/ML", "IoT", "Design", "Web Development"];
const YEARS: [&str; 3] = ["2024-25", "2023-24", "2022-23"];

fn create_records(count: usize) -> Vec<ProjectRecord> {
    (0..count)
        .map(|i| ProjectRecord {
            id: format!("p-{i}"),
            title: Some(format!("Project {} {i}", ["Solar", "Drone", "Chat", "Ledger"][i % 4])),
            description: Some(format!("Prototype number {i} built during the semester")),
            contributors: vec![Contributor::Name(format!("Student {}", i % 37))],
            technologies_used: vec!["Rust".to_string(), "React".to_string()],
            department: Some(DEPARTMENTS[i % DEPARTMENTS.len()].to_string()),
            status: Some(STATUSES[i % STATUSES.len()].to_string()),
            academic_year: Some(YEARS[i % YEARS.len()].to_string()),
            created_at: Some(format!("2024-{:02}-{:02}T08:00:00Z", i % 12 + 1, i % 28 + 1)),
            ..Default::default()
        })
        .collect()
}

fn bench_browse(c: &mut Criterion) {
    let engine = DiscoveryEngine::new(DiscoveryConfig::default()).expect("default config");
    let mut group = c.benchmark_group("browse");

    for record_count in [100, 500, 1000, 5000] {
        group.throughput(Throughput::Elements(record_count as u64));
        let records = create_records(record_count);

        let unfiltered = QueryState::default();
        group.bench_with_input(
            BenchmarkId::new("unfiltered_newest", record_count),
            &records,
            |b, records| b.iter(|| black_box(engine.browse(records, black_box(&unfiltered)))),
        );

        let searched = QueryState::default()
            .with_search("solar")
            .with_status("Ongoing")
            .with_sort(SortKey::TitleAsc);
        group.bench_with_input(
            BenchmarkId::new("search_status_title", record_count),
            &records,
            |b, records| b.iter(|| black_box(engine.browse(records, black_box(&searched)))),
        );
    }

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let engine = DiscoveryEngine::new(DiscoveryConfig::default()).expect("default config");
    let records = create_records(5000);

    c.bench_function("dashboard_5000", |b| {
        b.iter(|| black_box(engine.dashboard(black_box(&records))));
    });
}

criterion_group!(benches, bench_browse, bench_dashboard);
criterion_main!(benches);
