//! Built-in sample datasets. These back the demo shell's empty-state flow
//! and give tests a realistic fixture without touching the filesystem.

use chrono::NaiveDate;

use crate::data::records::{
    DocumentType, InterviewListing, ListingStatus, MemberStatus, Submission, SubmissionStatus,
    TeamMember, TeamRole,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All sample dates are valid literals
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

/// Twelve interview listings, ids "1".."12"; "4" and "10" are paused.
pub fn interview_listings() -> Vec<InterviewListing> {
    let rows = [
        ("1", "Software Engineering Interview", ListingStatus::Active, (2024, 11, 1), 34),
        ("2", "Product Management Interview", ListingStatus::Active, (2024, 11, 5), 21),
        ("3", "Data Science Interview", ListingStatus::Active, (2024, 11, 8), 18),
        ("4", "Consulting Case Practice", ListingStatus::Paused, (2024, 11, 12), 9),
        ("5", "Behavioral Interview Basics", ListingStatus::Active, (2024, 11, 15), 40),
        ("6", "Technical Interview Drills", ListingStatus::Active, (2024, 11, 18), 27),
        ("7", "Finance Interview Prep", ListingStatus::Active, (2024, 11, 22), 15),
        ("8", "Marketing Portfolio Review", ListingStatus::Active, (2024, 11, 25), 12),
        ("9", "Mock Interview Marathon", ListingStatus::Active, (2024, 12, 1), 31),
        ("10", "Resume Deep Dive", ListingStatus::Paused, (2024, 12, 4), 7),
        ("11", "Panel Interview Simulation", ListingStatus::Active, (2024, 12, 8), 19),
        ("12", "Phone Screen Interview Warmup", ListingStatus::Active, (2024, 12, 11), 23),
    ];

    rows.into_iter()
        .map(|(id, name, status, (y, m, d), signups)| InterviewListing {
            id: id.to_string(),
            interview_name: name.to_string(),
            status,
            created_at: date(y, m, d),
            signups,
        })
        .collect()
}

/// Review-center submissions across document types and statuses.
pub fn submissions() -> Vec<Submission> {
    let rows = [
        ("s1", "Alice Johnson", DocumentType::Resume, SubmissionStatus::Pending, (2025, 1, 6), None),
        ("s2", "Bruno Mendes", DocumentType::CoverLetter, SubmissionStatus::InReview, (2025, 1, 7), Some("Dana Whitfield")),
        ("s3", "Chen Wei", DocumentType::LinkedinProfile, SubmissionStatus::Completed, (2025, 1, 8), Some("Marcus Reed")),
        ("s4", "Dolores Rivera", DocumentType::Resume, SubmissionStatus::InReview, (2025, 1, 9), Some("Dana Whitfield")),
        ("s5", "Ethan Caldwell", DocumentType::InterviewPrep, SubmissionStatus::Pending, (2025, 1, 10), None),
        ("s6", "Fatima Noor", DocumentType::Resume, SubmissionStatus::Completed, (2025, 1, 12), Some("Marcus Reed")),
        ("s7", "Gabriel Ortiz", DocumentType::CoverLetter, SubmissionStatus::Pending, (2025, 1, 13), None),
        ("s8", "Hana Kobayashi", DocumentType::LinkedinProfile, SubmissionStatus::InReview, (2025, 1, 14), Some("Priya Shah")),
        ("s9", "Ingrid Larsen", DocumentType::Resume, SubmissionStatus::Pending, (2025, 1, 15), None),
        ("s10", "Jamal Turner", DocumentType::InterviewPrep, SubmissionStatus::Completed, (2025, 1, 16), Some("Priya Shah")),
        ("s11", "Katya Morozova", DocumentType::Resume, SubmissionStatus::InReview, (2025, 1, 17), Some("Dana Whitfield")),
        ("s12", "Liam O'Connor", DocumentType::CoverLetter, SubmissionStatus::Pending, (2025, 1, 20), None),
    ];

    rows.into_iter()
        .map(
            |(id, student, document_type, status, (y, m, d), reviewer)| Submission {
                id: id.to_string(),
                student_name: student.to_string(),
                document_type,
                status,
                submitted_at: date(y, m, d),
                reviewer: reviewer.map(str::to_string),
            },
        )
        .collect()
}

/// The staff roster for the manage-team page.
pub fn team_members() -> Vec<TeamMember> {
    let rows = [
        ("t1", "Dana Whitfield", "dana.whitfield@university.edu", TeamRole::Admin, MemberStatus::Active, (2023, 8, 14)),
        ("t2", "Marcus Reed", "marcus.reed@university.edu", TeamRole::Reviewer, MemberStatus::Active, (2023, 9, 2)),
        ("t3", "Priya Shah", "priya.shah@university.edu", TeamRole::Reviewer, MemberStatus::Active, (2024, 1, 22)),
        ("t4", "Tomás Herrera", "tomas.herrera@university.edu", TeamRole::Coordinator, MemberStatus::Active, (2024, 3, 11)),
        ("t5", "June Park", "june.park@university.edu", TeamRole::Reviewer, MemberStatus::Invited, (2025, 1, 5)),
        ("t6", "Oliver Grant", "oliver.grant@university.edu", TeamRole::Coordinator, MemberStatus::Deactivated, (2022, 11, 30)),
    ];

    rows.into_iter()
        .map(|(id, name, email, role, status, (y, m, d))| TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            joined_at: date(y, m, d),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_fixture_shape() {
        let listings = interview_listings();
        assert_eq!(listings.len(), 12);

        let paused: Vec<&str> = listings
            .iter()
            .filter(|l| l.status == ListingStatus::Paused)
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(paused, vec!["4", "10"]);

        // id "1" carries the earliest creation date
        let first = &listings[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.created_at, date(2024, 11, 1));
        assert!(listings.iter().all(|l| l.created_at >= first.created_at));
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let listings = interview_listings();
        let mut ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());

        let subs = submissions();
        let mut ids: Vec<&str> = subs.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), subs.len());
    }
}
