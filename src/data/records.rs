use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::{FieldValue, TableSchema};

/// Status of an interview listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    Active,
    Paused,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingStatus::Active => write!(f, "Active"),
            ListingStatus::Paused => write!(f, "Paused"),
        }
    }
}

/// A bookable interview-practice listing managed by staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewListing {
    pub id: String,
    pub interview_name: String,
    pub status: ListingStatus,
    pub created_at: NaiveDate,
    pub signups: usize,
}

impl InterviewListing {
    /// Field configuration for the manage-interviews table: search on the
    /// listing name, filter on status, sort on name, creation date, or
    /// signup count.
    pub fn schema() -> TableSchema<InterviewListing> {
        TableSchema::new(|r: &InterviewListing| r.id.clone())
            .search_field("interview_name", |r: &InterviewListing| {
                r.interview_name.clone()
            })
            .filter_field("status", |r: &InterviewListing| r.status.to_string())
            .sort_field("interview_name", |r: &InterviewListing| {
                FieldValue::from(r.interview_name.clone())
            })
            .sort_field("created_at", |r: &InterviewListing| {
                FieldValue::from(r.created_at)
            })
            .sort_field("signups", |r: &InterviewListing| FieldValue::from(r.signups))
    }
}

/// What kind of document a student submitted for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Resume,
    CoverLetter,
    LinkedinProfile,
    InterviewPrep,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Resume => write!(f, "Resume"),
            DocumentType::CoverLetter => write!(f, "Cover Letter"),
            DocumentType::LinkedinProfile => write!(f, "LinkedIn Profile"),
            DocumentType::InterviewPrep => write!(f, "Interview Prep"),
        }
    }
}

/// Review progress of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Pending,
    InReview,
    Completed,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "Pending"),
            SubmissionStatus::InReview => write!(f, "In Review"),
            SubmissionStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// One student submission in the review center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub student_name: String,
    pub document_type: DocumentType,
    pub status: SubmissionStatus,
    pub submitted_at: NaiveDate,
    pub reviewer: Option<String>,
}

impl Submission {
    /// Field configuration for the review-center table: search matches the
    /// student OR the assigned reviewer, filters constrain status and
    /// document type.
    pub fn schema() -> TableSchema<Submission> {
        TableSchema::new(|r: &Submission| r.id.clone())
            .search_field("student_name", |r: &Submission| r.student_name.clone())
            .search_field("reviewer", |r: &Submission| {
                r.reviewer.clone().unwrap_or_default()
            })
            .filter_field("status", |r: &Submission| r.status.to_string())
            .filter_field("document_type", |r: &Submission| {
                r.document_type.to_string()
            })
            .sort_field("student_name", |r: &Submission| {
                FieldValue::from(r.student_name.clone())
            })
            .sort_field("submitted_at", |r: &Submission| {
                FieldValue::from(r.submitted_at)
            })
            .sort_field("status", |r: &Submission| {
                FieldValue::from(r.status.to_string())
            })
    }
}

/// Staff role on the team page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    Admin,
    Reviewer,
    Coordinator,
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamRole::Admin => write!(f, "Admin"),
            TeamRole::Reviewer => write!(f, "Reviewer"),
            TeamRole::Coordinator => write!(f, "Coordinator"),
        }
    }
}

/// Account state of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Invited,
    Deactivated,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "Active"),
            MemberStatus::Invited => write!(f, "Invited"),
            MemberStatus::Deactivated => write!(f, "Deactivated"),
        }
    }
}

/// One staff member on the manage-team page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub status: MemberStatus,
    pub joined_at: NaiveDate,
}

impl TeamMember {
    /// Field configuration for the manage-team table: search matches name
    /// OR email.
    pub fn schema() -> TableSchema<TeamMember> {
        TableSchema::new(|r: &TeamMember| r.id.clone())
            .search_field("name", |r: &TeamMember| r.name.clone())
            .search_field("email", |r: &TeamMember| r.email.clone())
            .filter_field("role", |r: &TeamMember| r.role.to_string())
            .filter_field("status", |r: &TeamMember| r.status.to_string())
            .sort_field("name", |r: &TeamMember| FieldValue::from(r.name.clone()))
            .sort_field("joined_at", |r: &TeamMember| FieldValue::from(r.joined_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(ListingStatus::Active.to_string(), "Active");
        assert_eq!(SubmissionStatus::InReview.to_string(), "In Review");
        assert_eq!(DocumentType::CoverLetter.to_string(), "Cover Letter");
    }

    #[test]
    fn test_submission_serde_roundtrip() {
        let submission = Submission {
            id: "s1".to_string(),
            student_name: "Alice Johnson".to_string(),
            document_type: DocumentType::Resume,
            status: SubmissionStatus::Pending,
            submitted_at: NaiveDate::from_ymd_opt(2024, 11, 3).unwrap(),
            reviewer: None,
        };

        let json = serde_json::to_string(&submission).unwrap();
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "s1");
        assert_eq!(back.status, SubmissionStatus::Pending);
        assert_eq!(back.submitted_at, submission.submitted_at);
    }

    #[test]
    fn test_schemas_register_expected_keys() {
        let s = InterviewListing::schema();
        assert!(s.has_filter_field("status"));
        assert!(s.has_sort_field("created_at"));

        let s = Submission::schema();
        assert!(s.has_filter_field("document_type"));
        assert_eq!(s.search_fields().len(), 2);

        let s = TeamMember::schema();
        assert!(s.has_filter_field("role"));
        assert!(s.has_sort_field("joined_at"));
    }
}
