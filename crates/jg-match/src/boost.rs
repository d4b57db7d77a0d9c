//! Rule-based scorer for paid job placements. Boosted jobs are matched
//! against a candidate's stored preferences with fixed point awards, not
//! against the TF-IDF pipeline.

use tracing::debug;

use crate::error::MatchError;
use crate::matching::ranking::select_top;
use crate::{BoostedJob, JobPreference};

/// Points for a job type the candidate asked for.
const JOB_TYPE_POINTS: u32 = 25;
/// Points for a matching job nature (remote, onsite, hybrid).
const JOB_NATURE_POINTS: u32 = 20;
/// Points for a location on the candidate's list.
const LOCATION_POINTS: u32 = 25;
/// Points for an experience level the candidate targets.
const EXPERIENCE_POINTS: u32 = 20;
/// Points for a salary range lying entirely inside the candidate's range.
const SALARY_POINTS: u32 = 10;

/// A boosted job that matched at least one preference, with its points.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredBoostedJob {
    pub job: BoostedJob,
    pub score: u32,
}

/// Rank boosted jobs for one candidate. Jobs that match none of the stored
/// preferences are dropped rather than returned with zero points; equal
/// scores keep their input order.
pub fn rank_boosted_jobs(
    preference: Option<&JobPreference>,
    candidate_id: i64,
    jobs: &[BoostedJob],
    limit: usize,
) -> Result<Vec<ScoredBoostedJob>, MatchError> {
    let preference = preference.ok_or(MatchError::PreferenceNotFound { candidate_id })?;

    let scored: Vec<ScoredBoostedJob> = jobs
        .iter()
        .map(|job| ScoredBoostedJob {
            job: job.clone(),
            score: score_boosted_job(preference, job),
        })
        .filter(|entry| entry.score > 0)
        .collect();

    let ranked = select_top(scored, None, limit, |entry| f64::from(entry.score));
    debug!(
        candidate_id,
        pool = jobs.len(),
        returned = ranked.len(),
        "ranked boosted jobs"
    );
    Ok(ranked)
}

/// Award points for every preference the job satisfies. The maximum is 100.
pub fn score_boosted_job(preference: &JobPreference, job: &BoostedJob) -> u32 {
    let mut score = 0;

    if contains_ignore_case(&preference.job_types, &job.job_type) {
        score += JOB_TYPE_POINTS;
    }
    if contains_ignore_case(&preference.job_natures, &job.job_nature) {
        score += JOB_NATURE_POINTS;
    }
    if contains_ignore_case(&preference.locations, &job.location) {
        score += LOCATION_POINTS;
    }
    if contains_ignore_case(&preference.experience_levels, &job.experience_level) {
        score += EXPERIENCE_POINTS;
    }
    if salary_within_preference(preference, job) {
        score += SALARY_POINTS;
    }

    score
}

fn contains_ignore_case(entries: &[String], value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    entries
        .iter()
        .any(|entry| entry.trim().eq_ignore_ascii_case(value))
}

/// True only when both ranges are fully specified and the job's range sits
/// inside the candidate's.
fn salary_within_preference(preference: &JobPreference, job: &BoostedJob) -> bool {
    match (
        preference.min_salary,
        preference.max_salary,
        job.min_salary,
        job.max_salary,
    ) {
        (Some(pref_min), Some(pref_max), Some(job_min), Some(job_max)) => {
            job_min >= pref_min && job_max <= pref_max
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preference() -> JobPreference {
        JobPreference {
            job_types: vec!["full-time".into()],
            job_natures: vec!["remote".into()],
            locations: vec!["Lagos".into(), "Abuja".into()],
            experience_levels: vec!["senior".into()],
            min_salary: Some(50.0),
            max_salary: Some(150.0),
        }
    }

    fn job(id: i64) -> BoostedJob {
        BoostedJob {
            id: Some(id),
            title: "Platform Engineer".into(),
            job_type: "full-time".into(),
            job_nature: "remote".into(),
            location: "Lagos".into(),
            experience_level: "senior".into(),
            min_salary: Some(60.0),
            max_salary: Some(120.0),
        }
    }

    #[test]
    fn full_match_scores_one_hundred() {
        assert_eq!(score_boosted_job(&preference(), &job(1)), 100);
    }

    #[test]
    fn each_preference_awards_its_points() {
        let prefs = preference();
        let mut partial = job(1);
        partial.job_nature = "onsite".into();
        partial.location = "Kano".into();
        partial.experience_level = "entry".into();
        partial.min_salary = None;

        // Only the job type still matches.
        assert_eq!(score_boosted_job(&prefs, &partial), 25);
    }

    #[test]
    fn preference_lists_match_case_insensitively() {
        let prefs = preference();
        let mut shouty = job(1);
        shouty.location = "LAGOS".into();
        shouty.job_type = "Full-Time".into();

        assert_eq!(score_boosted_job(&prefs, &shouty), 100);
    }

    #[test]
    fn empty_job_fields_never_match() {
        let mut prefs = preference();
        prefs.job_types.push(String::new());
        let mut blank = job(1);
        blank.job_type = String::new();

        assert_eq!(score_boosted_job(&prefs, &blank), 75);
    }

    #[test]
    fn salary_outside_the_preferred_range_earns_nothing() {
        let prefs = preference();
        let mut rich = job(1);
        rich.max_salary = Some(200.0);

        assert_eq!(score_boosted_job(&prefs, &rich), 90);
    }

    #[test]
    fn zero_score_jobs_are_dropped() {
        let prefs = preference();
        let mut stranger = job(2);
        stranger.job_type = "contract".into();
        stranger.job_nature = "onsite".into();
        stranger.location = "Berlin".into();
        stranger.experience_level = "entry".into();
        stranger.min_salary = Some(10.0);

        let ranked = rank_boosted_jobs(Some(&prefs), 7, &[job(1), stranger], 20).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].job.id, Some(1));
    }

    #[test]
    fn ranking_is_stable_and_limited() {
        let prefs = preference();
        let mut weaker = job(3);
        weaker.job_nature = "onsite".into();
        let pool = vec![job(1), job(2), weaker];

        let ranked = rank_boosted_jobs(Some(&prefs), 7, &pool, 2).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].job.id, Some(1), "ties keep input order");
        assert_eq!(ranked[1].job.id, Some(2));
    }

    #[test]
    fn missing_preferences_are_an_error() {
        let err = rank_boosted_jobs(None, 7, &[job(1)], 20).unwrap_err();
        assert_eq!(err, MatchError::PreferenceNotFound { candidate_id: 7 });
    }
}
