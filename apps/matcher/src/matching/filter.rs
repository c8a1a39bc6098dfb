//! Preference Filter — hard exclusions plus soft satisfaction scoring.
//!
//! Hard constraints (locations, remote-only, salary floor) exclude postings.
//! The satisfaction fraction is a scoring bonus for survivors only — it is
//! never used to exclude further.
//!
//! Callers validate `Preferences` before this runs; invalid input never
//! reaches the filter.

use std::collections::BTreeMap;

use tracing::debug;

use crate::matching::corpus::JobCorpusStore;
use crate::models::{JobKey, JobPosting, Preferences, SalaryRange};

/// Location substrings that mark a posting as remote-friendly.
const REMOTE_TOKENS: &[&str] = &["remote", "anywhere", "work from home", "wfh"];

/// Applies hard exclusions and computes per-survivor preference satisfaction.
pub fn filter_corpus<'a>(
    corpus: &'a JobCorpusStore,
    prefs: &Preferences,
) -> (Vec<&'a JobPosting>, BTreeMap<JobKey, f64>) {
    let mut eligible = Vec::new();
    let mut satisfaction = BTreeMap::new();

    for posting in corpus.iter() {
        if !passes_hard_constraints(posting, prefs) {
            continue;
        }
        satisfaction.insert(posting.key(), satisfaction_fraction(posting, prefs));
        eligible.push(posting);
    }

    debug!(
        "Preference filter kept {} of {} postings",
        eligible.len(),
        corpus.len()
    );
    (eligible, satisfaction)
}

fn passes_hard_constraints(posting: &JobPosting, prefs: &Preferences) -> bool {
    if !prefs.locations.is_empty() && !matches_any_location(posting, prefs) {
        return false;
    }
    if prefs.remote_only && !is_remote(&posting.location) {
        return false;
    }
    if prefs.min_salary > 0 {
        // Unspecified salary is neutral: only a known upper bound below the
        // floor excludes.
        if let Some(upper) = posting.salary_range.upper_bound() {
            if upper < prefs.min_salary as u64 {
                return false;
            }
        }
    }
    true
}

/// OR semantics over the preferred locations, case-insensitive substring.
fn matches_any_location(posting: &JobPosting, prefs: &Preferences) -> bool {
    let location = posting.location.to_lowercase();
    prefs
        .locations
        .iter()
        .any(|preferred| location.contains(&preferred.to_lowercase()))
}

fn is_remote(location: &str) -> bool {
    let location = location.to_lowercase();
    REMOTE_TOKENS.iter().any(|t| location.contains(t))
}

/// Fraction of applicable criteria the posting matches. Hard criteria are
/// matched by every survivor, so only the soft ones (title, salary proven
/// above the floor) differentiate the ranking bonus.
fn satisfaction_fraction(posting: &JobPosting, prefs: &Preferences) -> f64 {
    let mut applicable = 0u32;
    let mut matched = 0u32;

    if let Some(title) = &prefs.desired_title {
        applicable += 1;
        if posting
            .title
            .to_lowercase()
            .contains(&title.to_lowercase())
        {
            matched += 1;
        }
    }
    if !prefs.locations.is_empty() {
        applicable += 1;
        if matches_any_location(posting, prefs) {
            matched += 1;
        }
    }
    if prefs.min_salary > 0 {
        applicable += 1;
        // A posting with unspecified salary survives but does not match.
        if matches!(posting.salary_range, SalaryRange::Range { .. }) {
            matched += 1;
        }
    }
    if prefs.remote_only {
        applicable += 1;
        if is_remote(&posting.location) {
            matched += 1;
        }
    }

    if applicable == 0 {
        return 0.0;
    }
    f64::from(matched) / f64::from(applicable)
}
