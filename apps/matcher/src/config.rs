use anyhow::{Context, Result};

use crate::errors::MatchError;

/// Default weight given to tf-idf similarity in the final score.
/// Preference satisfaction receives the complement.
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.8;

/// Tuning knobs for one matching session.
///
/// The only recognized option is `similarity_weight`; the preference weight
/// is always `1.0 - similarity_weight`, so final scores stay in [0, 1].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MatchConfig {
    pub similarity_weight: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            similarity_weight: DEFAULT_SIMILARITY_WEIGHT,
        }
    }
}

impl MatchConfig {
    /// Rejects weights outside [0, 1] (or non-finite ones) up front, before
    /// any scoring work runs.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.similarity_weight.is_finite()
            || !(0.0..=1.0).contains(&self.similarity_weight)
        {
            return Err(MatchError::InvalidConfig(format!(
                "similarity_weight must be in [0, 1], got {}",
                self.similarity_weight
            )));
        }
        Ok(())
    }

    pub fn preference_weight(&self) -> f64 {
        1.0 - self.similarity_weight
    }
}

/// Environment-sourced settings for the optional enrichment collaborator.
/// Callers that never construct an `LlmClient` never need this.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    pub api_key: String,
    pub timeout_secs: u64,
}

impl EnrichmentConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(EnrichmentConfig {
            api_key: require_env("GROQ_API_KEY")?,
            timeout_secs: std::env::var("ENRICHMENT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("ENRICHMENT_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
