pub mod api;
pub mod boost;
pub mod config;
mod de;
pub mod document;
pub mod error;
pub mod logging;
pub mod matching;
pub mod skills;
pub mod tfidf;

pub use boost::rank_boosted_jobs;
pub use config::EngineConfig;
pub use error::MatchError;
pub use matching::pipeline::{RankedCandidate, RankedJob, RecommendationEngine};

use serde::{Deserialize, Serialize};

// Raw marketplace records, as handed over by the surrounding store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub categories: Vec<String>,
    pub location: String,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub min_salary: f64,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub max_salary: f64,
    pub currency: String,
    pub experience_level: String,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub required_experience_years: f64,
    pub employment_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub id: Option<i64>,
    pub full_name: String,
    pub skills: Vec<String>,
    pub categories: Vec<String>,
    pub location: String,
    /// Declared job-location preference; may differ from where the candidate
    /// lives. Empty when never set.
    pub job_location: String,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub min_salary: f64,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub max_salary: f64,
    pub currency: String,
    pub experience_level: String,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub experience_years: f64,
    pub employment_type: String,
}

/// Per-candidate preferences driving the boosted-job scorer. Stored
/// locations are lowercase by convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPreference {
    pub job_types: Vec<String>,
    pub job_natures: Vec<String>,
    pub locations: Vec<String>,
    pub experience_levels: Vec<String>,
    #[serde(deserialize_with = "de::lenient_opt_f64")]
    pub min_salary: Option<f64>,
    #[serde(deserialize_with = "de::lenient_opt_f64")]
    pub max_salary: Option<f64>,
}

/// Promoted listing scored only by the rule-based preference scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostedJob {
    pub id: Option<i64>,
    pub title: String,
    pub job_type: String,
    pub job_nature: String,
    pub location: String,
    pub experience_level: String,
    #[serde(deserialize_with = "de::lenient_opt_f64")]
    pub min_salary: Option<f64>,
    #[serde(deserialize_with = "de::lenient_opt_f64")]
    pub max_salary: Option<f64>,
}
