use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Whether the enrichment pass contributed to a profile.
/// `Degraded` is a quality flag, not an error — a degraded profile still
/// flows through the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionQuality {
    Full,
    #[default]
    Degraded,
}

/// Structured candidate representation derived from a resume.
/// Built once per search and discarded with the session's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub raw_text: String,
    pub extracted_skills: BTreeSet<String>,
    /// Salience order: most frequent first, ties broken lexicographically.
    pub derived_keywords: Vec<String>,
    pub extraction_quality: ExtractionQuality,
}

impl Profile {
    /// A profile with no text and no skills. Every posting scores 0.0
    /// against it; the search still completes.
    pub fn empty() -> Self {
        Self {
            raw_text: String::new(),
            extracted_skills: BTreeSet::new(),
            derived_keywords: Vec::new(),
            extraction_quality: ExtractionQuality::Degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExtractionQuality::Full).unwrap(),
            r#""full""#
        );
        let q: ExtractionQuality = serde_json::from_str(r#""degraded""#).unwrap();
        assert_eq!(q, ExtractionQuality::Degraded);
    }

    #[test]
    fn test_empty_profile_is_degraded() {
        let profile = Profile::empty();
        assert!(profile.raw_text.is_empty());
        assert!(profile.extracted_skills.is_empty());
        assert_eq!(profile.extraction_quality, ExtractionQuality::Degraded);
    }
}
