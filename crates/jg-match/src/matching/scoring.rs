use super::factors::{self, FactorScore};
use super::weights::WeightProfile;
use crate::document::Document;

/// Weighted multi-factor score for one pool member, with the per-factor
/// breakdown kept for explanations.
#[derive(Debug, Clone)]
pub struct MatchScore {
    pub total: f64,
    pub similarity: FactorScore,
    pub experience: FactorScore,
    pub years: FactorScore,
    pub location: FactorScore,
    pub salary: FactorScore,
}

pub struct MultiFactorScorer {
    profile: WeightProfile,
}

impl MultiFactorScorer {
    pub fn new(profile: WeightProfile) -> Self {
        Self { profile }
    }

    /// Fold one pool member's text similarity into the categorical factors
    /// of the active profile. `query` and `member` keep their pipeline
    /// orientation: the seeker profile scores job members against a
    /// candidate query, the employer profiles score candidate members
    /// against a job query.
    pub fn score(&self, query: &Document, member: &Document, similarity: f64) -> MatchScore {
        let (job, candidate) = match self.profile {
            WeightProfile::JobSeeker => (member, query),
            _ => (query, member),
        };

        let similarity = factors::similarity_factor(similarity);
        let experience = if self.profile.requires_exact_experience() {
            factors::experience_equal(job, candidate)
        } else {
            factors::experience_at_least(job, candidate)
        };
        let years = factors::years_required(job, candidate);
        let location = factors::location_equal(job, candidate);
        let salary = if self.profile.checks_currency() {
            factors::salary_overlap_with_currency(job, candidate)
        } else {
            factors::salary_overlap(job, candidate)
        };

        let weights = self.profile.weights();
        let total = similarity.score * weights.similarity
            + experience.score * weights.experience
            + years.score * weights.years
            + location.score * weights.location
            + salary.score * weights.salary;

        MatchScore {
            total,
            similarity,
            experience,
            years,
            location,
            salary,
        }
    }
}
