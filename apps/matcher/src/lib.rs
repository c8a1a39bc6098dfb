//! Resume-to-job matching core.
//!
//! Pipeline: resume bytes → `resume::parse_resume` → text →
//! `extraction::ProfileExtractor` → `Profile`; profile + corpus →
//! `matching::similarity` → per-posting scores; scores + preferences →
//! `matching::filter` → eligible subset → `matching::ranking` → ordered
//! `RankedResult`.
//!
//! The UI, HTTP endpoints, scraping, and corpus fetching live outside this
//! crate; the only boundary it defines is `JobMatcher::rank_jobs`.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod matching;
pub mod models;
pub mod pipeline;
pub mod resume;
pub mod text;

pub use config::MatchConfig;
pub use errors::MatchError;
pub use extraction::ProfileExtractor;
pub use llm_client::{LlmClient, LlmError, SkillEnricher};
pub use matching::corpus::JobCorpusStore;
pub use matching::ranking::{RankedJob, RankedResult};
pub use models::{ExtractionQuality, JobKey, JobPosting, Preferences, Profile, SalaryRange};
pub use pipeline::{JobMatcher, ProfileInput};
