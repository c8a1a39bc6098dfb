// Core data model for one matching session.
// Postings and profiles are immutable snapshots for the duration of a pass.

pub mod posting;
pub mod preferences;
pub mod profile;

pub use posting::{JobKey, JobPosting, SalaryRange};
pub use preferences::Preferences;
pub use profile::{ExtractionQuality, Profile};
