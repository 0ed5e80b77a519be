use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use review_desk::data::records::{DocumentType, Submission, SubmissionStatus};
use review_desk::table::{FilterSelection, TableController};

fn create_test_data(rows: usize) -> Vec<Submission> {
    let students = [
        "Alice Johnson",
        "Bruno Mendes",
        "Chen Wei",
        "Dolores Rivera",
        "Ethan Caldwell",
        "Fatima Noor",
        "Gabriel Ortiz",
        "Hana Kobayashi",
        "Ingrid Larsen",
        "Jamal Turner",
    ];
    let documents = [
        DocumentType::Resume,
        DocumentType::CoverLetter,
        DocumentType::LinkedinProfile,
        DocumentType::InterviewPrep,
    ];
    let statuses = [
        SubmissionStatus::Pending,
        SubmissionStatus::InReview,
        SubmissionStatus::Completed,
    ];
    let base = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();

    (0..rows)
        .map(|i| Submission {
            id: format!("s{}", i),
            student_name: students[i % students.len()].to_string(),
            document_type: documents[i % documents.len()],
            status: statuses[i % statuses.len()],
            submitted_at: base + chrono::Duration::days((i % 365) as i64),
            reviewer: if i % 3 == 0 {
                None
            } else {
                Some(students[(i + 1) % students.len()].to_string())
            },
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_pipeline");

    for &size in &[10_000usize, 50_000, 100_000] {
        let rows = create_test_data(size);

        group.bench_function(format!("filter_search_sort_{}k", size / 1000), |b| {
            let mut controller =
                TableController::new(rows.clone(), Submission::schema()).with_page_size(10);
            controller.set_field_filter("status", FilterSelection::Value("Pending".to_string()));
            controller.set_search_text("alice");
            controller.cycle_sort("submitted_at");

            b.iter(|| black_box(controller.derive()));
        });

        group.bench_function(format!("unconstrained_{}k", size / 1000), |b| {
            let controller =
                TableController::new(rows.clone(), Submission::schema()).with_page_size(10);

            b.iter(|| black_box(controller.derive()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
