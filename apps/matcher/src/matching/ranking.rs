//! Ranking Aggregator — merges similarity and preference satisfaction into
//! one deterministically ordered result list.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::models::{ExtractionQuality, JobKey, JobPosting};

/// Two final scores within this distance are treated as tied and ordered by
/// the tie-break chain instead.
const SCORE_EPSILON: f64 = 1e-9;

/// One ranked entry: the posting, its combined score, and the skills shared
/// between the candidate and the posting's requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    pub posting: JobPosting,
    pub final_score: f64,
    pub matched_skills: BTreeSet<String>,
}

/// The session's output. The extraction quality flag rides along so callers
/// can tell a degraded search from a full one without inspecting the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub matches: Vec<RankedJob>,
    pub extraction_quality: ExtractionQuality,
}

/// Aggregates scores for the eligible postings and sorts them.
///
/// `final_score = w * similarity + (1 - w) * satisfaction`; ties within
/// epsilon break by posting_date descending, then title, then company.
pub fn rank(
    eligible: &[&JobPosting],
    similarity: &BTreeMap<JobKey, f64>,
    satisfaction: &BTreeMap<JobKey, f64>,
    extracted_skills: &BTreeSet<String>,
    config: &MatchConfig,
) -> Vec<RankedJob> {
    let lowered_skills: BTreeSet<String> =
        extracted_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut ranked: Vec<RankedJob> = eligible
        .iter()
        .map(|posting| {
            let key = posting.key();
            let sim = similarity.get(&key).copied().unwrap_or(0.0);
            let pref = satisfaction.get(&key).copied().unwrap_or(0.0);
            let final_score = (config.similarity_weight * sim
                + config.preference_weight() * pref)
                .clamp(0.0, 1.0);

            RankedJob {
                final_score,
                matched_skills: matched_skills(posting, &lowered_skills),
                posting: (*posting).clone(),
            }
        })
        .collect();

    ranked.sort_by(compare);
    ranked
}

/// Case-insensitive `extracted_skills ∩ required_skills`, reported in the
/// posting's casing.
fn matched_skills(posting: &JobPosting, lowered_skills: &BTreeSet<String>) -> BTreeSet<String> {
    posting
        .required_skills
        .iter()
        .filter(|required| lowered_skills.contains(&required.to_lowercase()))
        .cloned()
        .collect()
}

fn compare(a: &RankedJob, b: &RankedJob) -> Ordering {
    if (a.final_score - b.final_score).abs() > SCORE_EPSILON {
        return b
            .final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal);
    }
    b.posting
        .posting_date
        .cmp(&a.posting.posting_date)
        .then_with(|| a.posting.title.cmp(&b.posting.title))
        .then_with(|| a.posting.company.cmp(&b.posting.company))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryRange;
    use chrono::NaiveDate;

    fn posting(title: &str, company: &str, date: (i32, u32, u32), skills: &[&str]) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: company.to_string(),
            location: "Remote".to_string(),
            description: String::new(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            salary_range: SalaryRange::Unspecified,
            posting_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn scores(entries: &[(&JobPosting, f64)]) -> BTreeMap<JobKey, f64> {
        entries.iter().map(|(p, s)| (p.key(), *s)).collect()
    }

    #[test]
    fn test_weighted_combination() {
        let p = posting("A", "Acme", (2024, 1, 10), &[]);
        let eligible = vec![&p];
        let similarity = scores(&[(&p, 0.5)]);
        let satisfaction = scores(&[(&p, 1.0)]);

        let ranked = rank(
            &eligible,
            &similarity,
            &satisfaction,
            &BTreeSet::new(),
            &MatchConfig::default(),
        );
        // 0.8 * 0.5 + 0.2 * 1.0 = 0.6
        assert!((ranked[0].final_score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_sorted_descending_by_score() {
        let low = posting("Low", "Acme", (2024, 1, 10), &[]);
        let high = posting("High", "Acme", (2024, 1, 10), &[]);
        let eligible = vec![&low, &high];
        let similarity = scores(&[(&low, 0.2), (&high, 0.9)]);

        let ranked = rank(
            &eligible,
            &similarity,
            &BTreeMap::new(),
            &BTreeSet::new(),
            &MatchConfig::default(),
        );
        assert_eq!(ranked[0].posting.title, "High");
        assert_eq!(ranked[1].posting.title, "Low");
    }

    #[test]
    fn test_tie_break_most_recent_first() {
        let older = posting("Engineer", "Acme", (2024, 1, 10), &[]);
        let newer = posting("Engineer", "Globex", (2024, 3, 1), &[]);
        let eligible = vec![&older, &newer];
        let similarity = scores(&[(&older, 0.5), (&newer, 0.5)]);

        let ranked = rank(
            &eligible,
            &similarity,
            &BTreeMap::new(),
            &BTreeSet::new(),
            &MatchConfig {
                similarity_weight: 1.0,
            },
        );
        assert_eq!(ranked[0].posting.posting_date, newer.posting_date);
    }

    #[test]
    fn test_tie_break_title_then_company() {
        let b = posting("Backend Engineer", "Zeta", (2024, 1, 10), &[]);
        let a2 = posting("Analyst", "Beta", (2024, 1, 10), &[]);
        let a1 = posting("Analyst", "Acme", (2024, 1, 10), &[]);
        let eligible = vec![&b, &a2, &a1];

        let ranked = rank(
            &eligible,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &BTreeSet::new(),
            &MatchConfig::default(),
        );
        let order: Vec<(&str, &str)> = ranked
            .iter()
            .map(|r| (r.posting.title.as_str(), r.posting.company.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Analyst", "Acme"),
                ("Analyst", "Beta"),
                ("Backend Engineer", "Zeta")
            ]
        );
    }

    #[test]
    fn test_matched_skills_case_insensitive_posting_casing() {
        let p = posting("A", "Acme", (2024, 1, 10), &["Python", "ML", "Go"]);
        let eligible = vec![&p];
        let extracted: BTreeSet<String> =
            ["python", "ml"].iter().map(|s| s.to_string()).collect();

        let ranked = rank(
            &eligible,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &extracted,
            &MatchConfig::default(),
        );
        assert_eq!(
            ranked[0].matched_skills,
            BTreeSet::from(["Python".to_string(), "ML".to_string()])
        );
    }

    #[test]
    fn test_missing_score_defaults_to_zero() {
        let p = posting("A", "Acme", (2024, 1, 10), &[]);
        let eligible = vec![&p];
        let ranked = rank(
            &eligible,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &BTreeSet::new(),
            &MatchConfig::default(),
        );
        assert_eq!(ranked[0].final_score, 0.0);
    }

    #[test]
    fn test_final_score_in_unit_interval() {
        let p = posting("A", "Acme", (2024, 1, 10), &[]);
        let eligible = vec![&p];
        let similarity = scores(&[(&p, 1.0)]);
        let satisfaction = scores(&[(&p, 1.0)]);
        let ranked = rank(
            &eligible,
            &similarity,
            &satisfaction,
            &BTreeSet::new(),
            &MatchConfig::default(),
        );
        assert!((0.0..=1.0).contains(&ranked[0].final_score));
    }
}
