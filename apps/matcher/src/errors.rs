use thiserror::Error;

/// Crate-boundary error type.
///
/// Only invalid caller input aborts a matching pass. Every other anomaly
/// (unreadable resume, enrichment timeout, empty corpus) degrades and is
/// reported as a flag on the output instead.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
