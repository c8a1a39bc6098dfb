use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Advertised salary for a posting. Suppliers that publish no figure send
/// `Unspecified`, which is neutral for filtering — never a penalty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SalaryRange {
    #[default]
    Unspecified,
    Range {
        lower: u64,
        upper: u64,
    },
}

impl SalaryRange {
    pub fn upper_bound(&self) -> Option<u64> {
        match self {
            SalaryRange::Unspecified => None,
            SalaryRange::Range { upper, .. } => Some(*upper),
        }
    }
}

/// A single job opening, supplied pre-validated by the corpus supplier.
/// `required_skills` is always populated upstream; the core never derives
/// skills from description text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub required_skills: BTreeSet<String>,
    pub salary_range: SalaryRange,
    pub posting_date: NaiveDate,
}

impl JobPosting {
    pub fn key(&self) -> JobKey {
        JobKey {
            title: self.title.clone(),
            company: self.company.clone(),
            posting_date: self.posting_date,
        }
    }
}

/// Natural key of a posting. Two postings with the same key are duplicates
/// within one corpus snapshot. `Ord` so score maps iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobKey {
    pub title: String,
    pub company: String,
    pub posting_date: NaiveDate,
}
