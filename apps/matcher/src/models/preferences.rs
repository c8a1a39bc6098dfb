use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Explicit user constraints for one search.
///
/// `locations` has OR semantics; `desired_title` is a soft criterion (scored,
/// never excluding). Validation failures abort the pass before any scoring
/// work — values are never silently clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub desired_title: Option<String>,
    #[serde(default)]
    pub locations: BTreeSet<String>,
    #[serde(default)]
    pub min_salary: i64,
    #[serde(default)]
    pub remote_only: bool,
}

impl Preferences {
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.min_salary < 0 {
            return Err(MatchError::InvalidPreferences(format!(
                "min_salary must be non-negative, got {}",
                self.min_salary
            )));
        }
        if self.locations.iter().any(|l| l.trim().is_empty()) {
            return Err(MatchError::InvalidPreferences(
                "locations must not contain blank entries".to_string(),
            ));
        }
        if let Some(title) = &self.desired_title {
            if title.trim().is_empty() {
                return Err(MatchError::InvalidPreferences(
                    "desired_title must not be blank when provided".to_string(),
                ));
            }
        }
        Ok(())
    }
}
