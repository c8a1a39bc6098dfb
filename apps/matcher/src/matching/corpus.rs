//! Job Corpus Store — an immutable snapshot of postings for one search.
//!
//! Postings are materialized upstream; this wrapper only deduplicates on the
//! natural key (first occurrence wins) and exposes iteration. No mutation
//! API exists, so a snapshot can back any number of independent searches.

use std::collections::BTreeSet;

use tracing::warn;

use crate::models::{JobKey, JobPosting};

#[derive(Debug, Clone)]
pub struct JobCorpusStore {
    postings: Vec<JobPosting>,
}

impl JobCorpusStore {
    /// Builds a snapshot, dropping any posting whose key collides with an
    /// earlier one.
    pub fn new(postings: Vec<JobPosting>) -> Self {
        let mut seen: BTreeSet<JobKey> = BTreeSet::new();
        let mut deduped = Vec::with_capacity(postings.len());

        for posting in postings {
            let key = posting.key();
            if seen.insert(key) {
                deduped.push(posting);
            } else {
                warn!(
                    "Dropping duplicate posting '{}' at '{}' ({})",
                    posting.title, posting.company, posting.posting_date
                );
            }
        }

        Self { postings: deduped }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JobPosting> {
        self.postings.iter()
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
