//! Rule-based skill extraction — the fallback of record.
//!
//! Pure functions: raw text in, skill set out. No network dependency, so the
//! extractor's first stage is unit-testable in isolation.

use std::collections::{BTreeMap, BTreeSet};

use crate::text::{raw_tokens, tokenize};

/// Canonical skill dictionary. Matching is case-insensitive and
/// token-boundary aware ("Java" never fires inside "JavaScript").
/// Entries carry the casing reported back to callers.
const SKILL_KEYWORDS: &[&str] = &[
    "AWS",
    "Agile",
    "Azure",
    "C++",
    "CI/CD",
    "Communication",
    "Data Analysis",
    "Deep Learning",
    "Docker",
    "Excel",
    "Git",
    "Go",
    "HTML",
    "Java",
    "JavaScript",
    "Kafka",
    "Kubernetes",
    "Leadership",
    "Linux",
    "ML",
    "Machine Learning",
    "MongoDB",
    "NLP",
    "Node.js",
    "Pandas",
    "PostgreSQL",
    "Project Management",
    "PyTorch",
    "Python",
    "React",
    "REST",
    "Ruby",
    "Rust",
    "SQL",
    "Scala",
    "Spark",
    "TensorFlow",
    "Terraform",
    "TypeScript",
];

/// Matches the fixed dictionary against raw text. Always succeeds; an empty
/// result just means no dictionary entry appeared.
pub fn rule_based_skills(raw_text: &str) -> BTreeSet<String> {
    let tokens = raw_tokens(raw_text);
    let mut skills = BTreeSet::new();

    for keyword in SKILL_KEYWORDS {
        let keyword_tokens = raw_tokens(keyword);
        if keyword_tokens.is_empty() {
            continue;
        }
        let found = tokens
            .windows(keyword_tokens.len())
            .any(|window| window == keyword_tokens.as_slice());
        if found {
            skills.insert((*keyword).to_string());
        }
    }

    skills
}

/// Maps an enrichment-supplied skill onto dictionary casing when the
/// dictionary knows it; otherwise keeps the trimmed original.
pub fn canonicalize(skill: &str) -> String {
    let trimmed = skill.trim();
    SKILL_KEYWORDS
        .iter()
        .find(|k| k.eq_ignore_ascii_case(trimmed))
        .map(|k| (*k).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Derives salience-ordered keywords from raw text: frequency descending,
/// ties broken lexicographically, capped at `limit`.
pub fn derive_keywords(raw_text: &str, limit: usize) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for token in tokenize(raw_text) {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    // BTreeMap already yields lexicographic order, so a stable sort on count
    // alone preserves the alphabetical tie-break.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(token, _)| token)
        .collect()
}
