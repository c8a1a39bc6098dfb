//! Profile Extractor — turns raw resume text into a structured `Profile`.
//!
//! Two-stage strategy:
//! 1. Rule-based dictionary pass (`skills`) — always succeeds, fallback of record.
//! 2. Optional LLM enrichment — bounded by a timeout, purely additive.
//!    Any failure discards the enrichment result entirely and keeps stage 1.
//!
//! Extraction never returns an error; it degrades and flags the quality.

pub mod prompts;
pub mod skills;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::llm_client::SkillEnricher;
use crate::models::{ExtractionQuality, Profile};

/// Character budget for resume text sent to the enrichment collaborator.
const MAX_ENRICHMENT_CHARS: usize = 4000;

/// Cap on derived keywords kept per profile.
const MAX_DERIVED_KEYWORDS: usize = 20;

/// Builds profiles for matching sessions. The enricher is injected at
/// construction so tests substitute a deterministic stub; there is no
/// process-wide client.
pub struct ProfileExtractor {
    enricher: Option<Arc<dyn SkillEnricher>>,
    enrichment_timeout: Duration,
}

impl ProfileExtractor {
    pub fn new(enricher: Option<Arc<dyn SkillEnricher>>, enrichment_timeout: Duration) -> Self {
        Self {
            enricher,
            enrichment_timeout,
        }
    }

    /// Purely rule-based extractor; every profile it builds is `Degraded`.
    pub fn rule_based_only() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub async fn extract(&self, raw_text: &str) -> Profile {
        let mut extracted_skills = skills::rule_based_skills(raw_text);
        let derived_keywords = skills::derive_keywords(raw_text, MAX_DERIVED_KEYWORDS);
        let mut extraction_quality = ExtractionQuality::Degraded;

        if let Some(enricher) = &self.enricher {
            let budgeted = truncate_chars(raw_text, MAX_ENRICHMENT_CHARS);
            let call = enricher.enrich(prompts::SKILL_EXTRACT_INSTRUCTION, budgeted);

            match tokio::time::timeout(self.enrichment_timeout, call).await {
                Ok(Ok(enriched)) => {
                    // Additive union only: enrichment never removes a
                    // rule-based match.
                    let before = extracted_skills.len();
                    for skill in enriched {
                        extracted_skills.insert(skills::canonicalize(&skill));
                    }
                    debug!(
                        "Enrichment added {} skills to {} rule-based matches",
                        extracted_skills.len() - before,
                        before
                    );
                    extraction_quality = ExtractionQuality::Full;
                }
                Ok(Err(e)) => {
                    warn!("Enrichment failed, keeping rule-based skills: {e}");
                }
                Err(_) => {
                    warn!(
                        "Enrichment timed out after {:?}, keeping rule-based skills",
                        self.enrichment_timeout
                    );
                }
            }
        }

        Profile {
            raw_text: raw_text.to_string(),
            extracted_skills,
            derived_keywords,
            extraction_quality,
        }
    }
}

/// Truncates on a character boundary (not bytes) to respect the
/// collaborator's input limit.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
