//! The matching pipeline — one synchronous pass per search invocation.
//!
//! Order: validate preferences (fail fast, no partial work) → build profile →
//! corpus snapshot → similarity → filter → rank. Only invalid caller input
//! aborts; every other anomaly degrades and is flagged on the output.

use tracing::debug;

use crate::config::MatchConfig;
use crate::errors::MatchError;
use crate::extraction::ProfileExtractor;
use crate::matching::corpus::JobCorpusStore;
use crate::matching::ranking::{rank, RankedResult};
use crate::matching::{filter, similarity};
use crate::models::{JobPosting, Preferences, Profile};
use crate::resume;

/// Input to a search: raw resume bytes, or a profile the caller built
/// earlier (e.g. to reuse one extraction across several searches).
pub enum ProfileInput {
    ResumeBytes(Vec<u8>),
    Profile(Profile),
}

/// Facade over the whole pipeline. Holds the injected extractor and the
/// session config; no shared mutable state crosses invocations.
pub struct JobMatcher {
    extractor: ProfileExtractor,
    config: MatchConfig,
}

impl std::fmt::Debug for JobMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobMatcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JobMatcher {
    /// Rejects an out-of-range `similarity_weight` at construction, before
    /// any search runs.
    pub fn new(extractor: ProfileExtractor, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { extractor, config })
    }

    /// Runs one full search and returns the ranked result.
    ///
    /// Zero surviving postings is a valid, empty result — not an error.
    pub async fn rank_jobs(
        &self,
        input: ProfileInput,
        preferences: &Preferences,
        postings: Vec<JobPosting>,
    ) -> Result<RankedResult, MatchError> {
        preferences.validate()?;

        let profile = match input {
            ProfileInput::Profile(profile) => profile,
            ProfileInput::ResumeBytes(bytes) => {
                let raw_text = resume::parse_resume(&bytes);
                self.extractor.extract(&raw_text).await
            }
        };

        let corpus = JobCorpusStore::new(postings);
        Ok(self.rank_against(&profile, &corpus, preferences))
    }

    /// Scores a profile against an existing corpus snapshot. The snapshot is
    /// never mutated, so repeated calls yield identical output.
    pub fn rank_against(
        &self,
        profile: &Profile,
        corpus: &JobCorpusStore,
        preferences: &Preferences,
    ) -> RankedResult {
        let similarity_scores = similarity::score_corpus(profile, corpus);
        let (eligible, satisfaction) = filter::filter_corpus(corpus, preferences);
        let matches = rank(
            &eligible,
            &similarity_scores,
            &satisfaction,
            &profile.extracted_skills,
            &self.config,
        );

        debug!(
            "Search complete: {} ranked of {} postings ({:?} extraction)",
            matches.len(),
            corpus.len(),
            profile.extraction_quality
        );

        RankedResult {
            matches,
            extraction_quality: profile.extraction_quality,
        }
    }
}
