use crate::document::Document;

/// Outcome of one scored factor: a [0, 1] score plus a status label and a
/// short human-readable explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub score: f64,
    pub status: &'static str,
    pub details: String,
}

pub fn status_from_score(score: f64) -> &'static str {
    if score >= 0.9 {
        "PERFECT_MATCH"
    } else if score >= 0.7 {
        "MATCH"
    } else if score >= 0.4 {
        "PARTIAL_MATCH"
    } else {
        "MISS"
    }
}

pub fn similarity_factor(score: f64) -> FactorScore {
    FactorScore {
        score,
        status: status_from_score(score),
        details: format!("text similarity {score:.3}"),
    }
}

/// Equality flavor: the candidate matches only postings at exactly their
/// level.
pub fn experience_equal(job: &Document, candidate: &Document) -> FactorScore {
    if job.experience_level == candidate.experience_level {
        FactorScore {
            score: 1.0,
            status: "MATCH",
            details: format!("experience level match: {}", candidate.experience_level),
        }
    } else {
        FactorScore {
            score: 0.0,
            status: "MISS",
            details: format!(
                "experience level mismatch: {} vs {}",
                job.experience_level, candidate.experience_level
            ),
        }
    }
}

/// At-least flavor: a candidate at or above the posting's level qualifies.
pub fn experience_at_least(job: &Document, candidate: &Document) -> FactorScore {
    if candidate.experience_level.rank() >= job.experience_level.rank() {
        FactorScore {
            score: 1.0,
            status: "MATCH",
            details: format!(
                "experience level sufficient: {} >= {}",
                candidate.experience_level, job.experience_level
            ),
        }
    } else {
        FactorScore {
            score: 0.0,
            status: "MISS",
            details: format!(
                "experience level below requirement: {} < {}",
                candidate.experience_level, job.experience_level
            ),
        }
    }
}

pub fn years_required(job: &Document, candidate: &Document) -> FactorScore {
    if candidate.experience_years >= job.experience_years {
        FactorScore {
            score: 1.0,
            status: "MATCH",
            details: format!(
                "{:.1} years >= {:.1} required",
                candidate.experience_years, job.experience_years
            ),
        }
    } else {
        FactorScore {
            score: 0.0,
            status: "MISS",
            details: format!(
                "{:.1} years < {:.1} required",
                candidate.experience_years, job.experience_years
            ),
        }
    }
}

pub fn location_equal(job: &Document, candidate: &Document) -> FactorScore {
    let candidate_location = candidate.preferred_location();
    if job.location.eq_ignore_ascii_case(candidate_location) {
        FactorScore {
            score: 1.0,
            status: "MATCH",
            details: format!("location match: {}", job.location),
        }
    } else {
        FactorScore {
            score: 0.0,
            status: "MISS",
            details: format!(
                "location mismatch: {} vs {}",
                job.location, candidate_location
            ),
        }
    }
}

/// Ranges overlap when each minimum sits at or below the other's maximum.
/// Unset bounds stay at their literal 0 defaults.
pub fn salary_overlap(job: &Document, candidate: &Document) -> FactorScore {
    if job.min_salary <= candidate.max_salary && job.max_salary >= candidate.min_salary {
        FactorScore {
            score: 1.0,
            status: "MATCH",
            details: format!(
                "salary ranges overlap: [{:.0}, {:.0}] and [{:.0}, {:.0}]",
                job.min_salary, job.max_salary, candidate.min_salary, candidate.max_salary
            ),
        }
    } else {
        FactorScore {
            score: 0.0,
            status: "MISS",
            details: format!(
                "salary ranges disjoint: [{:.0}, {:.0}] and [{:.0}, {:.0}]",
                job.min_salary, job.max_salary, candidate.min_salary, candidate.max_salary
            ),
        }
    }
}

/// Employer variants gate the overlap check on currency equality. With no
/// currency declared on either side there is nothing to gate on; the overlap
/// score stands and the status says so.
pub fn salary_overlap_with_currency(job: &Document, candidate: &Document) -> FactorScore {
    if job.currency.is_empty() && candidate.currency.is_empty() {
        let overlap = salary_overlap(job, candidate);
        return FactorScore {
            status: "UNKNOWN",
            ..overlap
        };
    }

    if !job.currency.eq_ignore_ascii_case(&candidate.currency) {
        return FactorScore {
            score: 0.0,
            status: "MISS",
            details: format!(
                "currency mismatch: {} vs {}",
                job.currency, candidate.currency
            ),
        };
    }

    salary_overlap(job, candidate)
}
