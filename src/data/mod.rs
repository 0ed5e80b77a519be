//! Domain records, file loaders, and sample datasets.

pub mod loaders;
pub mod records;
pub mod sample;

pub use records::{
    DocumentType, InterviewListing, ListingStatus, MemberStatus, Submission, SubmissionStatus,
    TeamMember, TeamRole,
};
