//! Wire-format views of ranking results, for callers that serialize
//! recommendations out to clients or persist them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::boost::ScoredBoostedJob;
use crate::matching::factors::FactorScore;
use crate::matching::pipeline::{RankedCandidate, RankedJob};
use crate::matching::scoring::MatchScore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorDto {
    pub score: f64,
    pub status: String,
    pub details: String,
}

impl From<FactorScore> for FactorDto {
    fn from(value: FactorScore) -> Self {
        Self {
            score: value.score,
            status: value.status.to_string(),
            details: value.details,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdownDto {
    pub total: f64,
    pub similarity: FactorDto,
    pub experience: FactorDto,
    pub years: FactorDto,
    pub location: FactorDto,
    pub salary: FactorDto,
}

impl From<MatchScore> for ScoreBreakdownDto {
    fn from(value: MatchScore) -> Self {
        Self {
            total: value.total,
            similarity: value.similarity.into(),
            experience: value.experience.into(),
            years: value.years.into(),
            location: value.location.into(),
            salary: value.salary.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job_id: i64,
    pub title: String,
    pub location: String,
    pub score: ScoreBreakdownDto,
    pub matched_at: DateTime<Utc>,
}

impl From<RankedJob> for JobRecommendation {
    fn from(value: RankedJob) -> Self {
        Self {
            job_id: value.job.id.unwrap_or(0),
            title: value.job.title,
            location: value.job.location,
            score: value.score.into(),
            matched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecommendation {
    pub candidate_id: i64,
    pub full_name: String,
    pub location: String,
    pub score: ScoreBreakdownDto,
    pub matched_at: DateTime<Utc>,
}

impl From<RankedCandidate> for CandidateRecommendation {
    fn from(value: RankedCandidate) -> Self {
        Self {
            candidate_id: value.candidate.id.unwrap_or(0),
            full_name: value.candidate.full_name,
            location: value.candidate.location,
            score: value.score.into(),
            matched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostedJobMatch {
    pub job_id: i64,
    pub title: String,
    pub location: String,
    pub score: u32,
    pub matched_at: DateTime<Utc>,
}

impl From<ScoredBoostedJob> for BoostedJobMatch {
    fn from(value: ScoredBoostedJob) -> Self {
        Self {
            job_id: value.job.id.unwrap_or(0),
            title: value.job.title,
            location: value.job.location,
            score: value.score,
            matched_at: Utc::now(),
        }
    }
}
