//! Similarity Engine — one term-weighted vector space per search.
//!
//! The space covers the profile document plus every posting description.
//! Weighting is term frequency × smoothed inverse document frequency; scores
//! are cosine similarities in [0, 1].
//!
//! Determinism: the vocabulary is a `BTreeSet` over the token union and the
//! score map is keyed by `JobKey`, so identical inputs produce bit-identical
//! output regardless of hash iteration order.

use std::collections::{BTreeMap, BTreeSet};

use crate::matching::corpus::JobCorpusStore;
use crate::models::{JobKey, Profile};
use crate::text::tokenize;

/// Scores every posting in the corpus against the profile.
///
/// Empty corpus → empty map. A profile with no usable text, or a posting
/// whose description tokenizes empty, scores 0.0 — never an error.
pub fn score_corpus(profile: &Profile, corpus: &JobCorpusStore) -> BTreeMap<JobKey, f64> {
    if corpus.is_empty() {
        return BTreeMap::new();
    }

    let profile_tokens = profile_document(profile);
    let posting_tokens: Vec<(JobKey, Vec<String>)> = corpus
        .iter()
        .map(|p| (p.key(), tokenize(&p.description)))
        .collect();

    // Sorted token union over the whole document set.
    let mut vocabulary: BTreeSet<&str> = profile_tokens.iter().map(String::as_str).collect();
    for (_, tokens) in &posting_tokens {
        vocabulary.extend(tokens.iter().map(String::as_str));
    }
    let term_index: BTreeMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, t)| (*t, i))
        .collect();

    // Document frequency per term, over profile + all descriptions.
    let doc_count = posting_tokens.len() + 1;
    let mut df = vec![0usize; term_index.len()];
    let all_docs = std::iter::once(&profile_tokens).chain(posting_tokens.iter().map(|(_, t)| t));
    for tokens in all_docs {
        let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in distinct {
            df[term_index[term]] += 1;
        }
    }

    // Smoothed idf, as in standard tf-idf vectorizers.
    let idf: Vec<f64> = df
        .iter()
        .map(|&d| 1.0 + ((1.0 + doc_count as f64) / (1.0 + d as f64)).ln())
        .collect();

    let profile_vector = weigh(&profile_tokens, &term_index, &idf);

    posting_tokens
        .iter()
        .map(|(key, tokens)| {
            let vector = weigh(tokens, &term_index, &idf);
            let score = cosine(&profile_vector, &vector).clamp(0.0, 1.0);
            (key.clone(), score)
        })
        .collect()
}

/// The profile's document: raw text, or the space-joined skill set when the
/// raw text tokenizes empty.
fn profile_document(profile: &Profile) -> Vec<String> {
    let tokens = tokenize(&profile.raw_text);
    if !tokens.is_empty() {
        return tokens;
    }
    let joined = profile
        .extracted_skills
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    tokenize(&joined)
}

/// Term-count vector scaled by idf.
fn weigh(tokens: &[String], term_index: &BTreeMap<&str, usize>, idf: &[f64]) -> Vec<f64> {
    let mut vector = vec![0.0; idf.len()];
    for token in tokens {
        let i = term_index[token.as_str()];
        vector[i] += idf[i];
    }
    vector
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractionQuality, JobPosting, SalaryRange};
    use chrono::NaiveDate;

    fn posting(title: &str, description: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            required_skills: BTreeSet::new(),
            salary_range: SalaryRange::Unspecified,
            posting_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }

    fn profile(raw_text: &str, skills: &[&str]) -> Profile {
        Profile {
            raw_text: raw_text.to_string(),
            extracted_skills: skills.iter().map(|s| s.to_string()).collect(),
            derived_keywords: vec![],
            extraction_quality: ExtractionQuality::Degraded,
        }
    }

    #[test]
    fn test_empty_corpus_empty_map() {
        let corpus = JobCorpusStore::new(vec![]);
        let scores = score_corpus(&profile("python developer", &[]), &corpus);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_scores_in_unit_interval() {
        let corpus = JobCorpusStore::new(vec![
            posting("A", "python sql backend services"),
            posting("B", "completely unrelated gardening role"),
        ]);
        let scores = score_corpus(&profile("python sql engineer", &[]), &corpus);
        for (key, score) in &scores {
            assert!(
                (0.0..=1.0).contains(score),
                "score for {key:?} out of range: {score}"
            );
        }
    }

    #[test]
    fn test_empty_profile_scores_all_zero() {
        let corpus = JobCorpusStore::new(vec![posting("A", "python developer wanted")]);
        let scores = score_corpus(&profile("", &[]), &corpus);
        assert!(scores.values().all(|&s| s == 0.0));
    }

    #[test]
    fn test_empty_description_scores_zero() {
        let corpus = JobCorpusStore::new(vec![posting("A", "--- !!! ")]);
        let scores = score_corpus(&profile("python developer", &[]), &corpus);
        assert!(scores.values().all(|&s| s == 0.0));
    }

    #[test]
    fn test_skill_fallback_when_raw_text_empty() {
        let corpus = JobCorpusStore::new(vec![
            posting("A", "python machine learning role"),
            posting("B", "forklift operator"),
        ]);
        let scores = score_corpus(&profile("", &["Python", "Machine Learning"]), &corpus);

        let a = scores[&posting("A", "python machine learning role").key()];
        let b = scores[&posting("B", "forklift operator").key()];
        assert!(a > 0.0);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_higher_overlap_ranks_higher() {
        let corpus = JobCorpusStore::new(vec![
            posting("Close", "rust tokio async services"),
            posting("Far", "rust only mentioned once here"),
        ]);
        let scores = score_corpus(&profile("rust tokio async engineer", &[]), &corpus);

        let close = scores[&posting("Close", "rust tokio async services").key()];
        let far = scores[&posting("Far", "rust only mentioned once here").key()];
        assert!(close > far, "close={close} far={far}");
    }

    #[test]
    fn test_monotonic_in_skill_overlap() {
        // Same corpus, two profiles: the superset of shared skills must not
        // score lower against the target posting.
        let make_corpus = || {
            JobCorpusStore::new(vec![
                posting("Target", "python sql developer"),
                posting("Other", "gardening and landscaping"),
            ])
        };
        let key = posting("Target", "python sql developer").key();

        let low = score_corpus(&profile("", &["Python"]), &make_corpus())[&key];
        let high = score_corpus(&profile("", &["Python", "SQL"]), &make_corpus())[&key];
        assert!(high >= low, "high={high} low={low}");
    }

    #[test]
    fn test_identical_documents_score_near_one() {
        let corpus = JobCorpusStore::new(vec![posting("A", "rust systems engineer")]);
        let scores = score_corpus(&profile("rust systems engineer", &[]), &corpus);
        let score = scores.values().next().copied().unwrap();
        assert!(score > 0.99, "score={score}");
    }

    #[test]
    fn test_bit_reproducible_scores() {
        let make = || {
            let corpus = JobCorpusStore::new(vec![
                posting("A", "python data pipelines and sql"),
                posting("B", "frontend react typescript"),
                posting("C", "python machine learning research"),
            ]);
            score_corpus(&profile("python sql machine learning", &[]), &corpus)
        };
        let first = make();
        let second = make();
        // Bit-identical, not approximately equal.
        for (k, v) in &first {
            assert_eq!(v.to_bits(), second[k].to_bits());
        }
    }
}
