use crate::error::MatchError;
use crate::matching::experience::ExperienceLevel;
use crate::skills;
use crate::{CandidateProfile, JobPosting};

/// Which text blob feeds the vector space for one request variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Skills,
    Categories,
}

/// A job posting or candidate profile reduced to the fields the matching
/// pipeline reads: canonical text blobs plus the categorical scalars.
/// Text is lowercased and trimmed; absent scalars stay at their literal
/// defaults (0 for salaries and years, empty string for text).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: i64,
    pub skill_text: String,
    pub category_text: String,
    pub experience_level: ExperienceLevel,
    pub experience_years: f64,
    pub location: String,
    pub job_location: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub currency: String,
    pub employment_type: String,
}

impl Document {
    pub fn from_job(job: &JobPosting) -> Result<Self, MatchError> {
        let id = job.id.ok_or(MatchError::MissingId { entity: "job" })?;

        Ok(Self {
            id,
            skill_text: join_canonical(&job.skills),
            category_text: join_canonical(&job.categories),
            experience_level: ExperienceLevel::parse_lenient(&job.experience_level),
            experience_years: job.required_experience_years,
            location: clean(&job.location),
            job_location: String::new(),
            min_salary: job.min_salary,
            max_salary: job.max_salary,
            currency: clean(&job.currency),
            employment_type: clean(&job.employment_type),
        })
    }

    pub fn from_candidate(candidate: &CandidateProfile) -> Result<Self, MatchError> {
        let id = candidate.id.ok_or(MatchError::MissingId {
            entity: "candidate",
        })?;

        Ok(Self {
            id,
            skill_text: join_canonical(&candidate.skills),
            category_text: join_canonical(&candidate.categories),
            experience_level: ExperienceLevel::parse_lenient(&candidate.experience_level),
            experience_years: candidate.experience_years,
            location: clean(&candidate.location),
            job_location: clean(&candidate.job_location),
            min_salary: candidate.min_salary,
            max_salary: candidate.max_salary,
            currency: clean(&candidate.currency),
            employment_type: clean(&candidate.employment_type),
        })
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Skills => &self.skill_text,
            TextField::Categories => &self.category_text,
        }
    }

    /// Location the scored variants compare against a posting: the declared
    /// job-location preference when present, where the candidate lives
    /// otherwise.
    pub fn preferred_location(&self) -> &str {
        if self.job_location.is_empty() {
            &self.location
        } else {
            &self.job_location
        }
    }
}

fn clean(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Canonicalize each list entry and join with single spaces. Duplicates are
/// kept: their term frequency belongs to this one document.
fn join_canonical(entries: &[String]) -> String {
    entries
        .iter()
        .filter(|e| !e.trim().is_empty())
        .map(|e| skills::canonicalize(e))
        .collect::<Vec<_>>()
        .join(" ")
}
