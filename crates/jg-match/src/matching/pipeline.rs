use tracing::{debug, warn};

use super::ranking::select_top;
use super::scoring::{MatchScore, MultiFactorScorer};
use super::weights::WeightProfile;
use crate::boost::{rank_boosted_jobs, ScoredBoostedJob};
use crate::config::EngineConfig;
use crate::document::Document;
use crate::error::MatchError;
use crate::tfidf::{score_corpus, VectorSpace};
use crate::{BoostedJob, CandidateProfile, JobPosting, JobPreference};

/// One recommended job for a candidate, with the full factor breakdown.
#[derive(Debug, Clone)]
pub struct RankedJob {
    pub job: JobPosting,
    pub score: MatchScore,
}

/// One recommended candidate for a job posting.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub candidate: CandidateProfile,
    pub score: MatchScore,
}

/// Per-request recommendation pipeline: fits a vector space over the pool
/// and folds the categorical factors into one ranked score. Holds no state
/// between calls, so one engine can serve concurrent requests.
#[derive(Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(EngineConfig::from_env())
    }

    /// Rank job postings for one candidate. No threshold: the configured
    /// top count comes back even when every score is zero, as long as the
    /// pool has any usable text.
    pub fn recommend_jobs(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
    ) -> Result<Vec<RankedJob>, MatchError> {
        let query = Document::from_candidate(candidate)?;
        let (kept, documents) = pool_documents(jobs, Document::from_job);
        let scores = score_pool(WeightProfile::JobSeeker, &query, &documents);

        let ranked: Vec<RankedJob> = kept
            .into_iter()
            .zip(scores)
            .map(|(index, score)| RankedJob {
                job: jobs[index].clone(),
                score,
            })
            .collect();

        let ranked = select_top(ranked, None, self.config.seeker_limit, |r| r.score.total);
        debug!(
            pool = jobs.len(),
            returned = ranked.len(),
            "ranked jobs for candidate"
        );
        Ok(ranked)
    }

    /// Rank candidates for a job posting by skill text.
    pub fn recommend_candidates(
        &self,
        job: &JobPosting,
        candidates: &[CandidateProfile],
    ) -> Result<Vec<RankedCandidate>, MatchError> {
        self.rank_candidates(WeightProfile::EmployerBySkill, job, candidates)
    }

    /// Rank candidates for a job posting by category text.
    pub fn recommend_candidates_by_category(
        &self,
        job: &JobPosting,
        candidates: &[CandidateProfile],
    ) -> Result<Vec<RankedCandidate>, MatchError> {
        self.rank_candidates(WeightProfile::EmployerByCategory, job, candidates)
    }

    /// Rank boosted jobs against a candidate's stored preferences, capped at
    /// the configured boost limit.
    pub fn boosted_jobs(
        &self,
        candidate_id: i64,
        preference: Option<&JobPreference>,
        jobs: &[BoostedJob],
    ) -> Result<Vec<ScoredBoostedJob>, MatchError> {
        rank_boosted_jobs(preference, candidate_id, jobs, self.config.boost_limit)
    }

    fn rank_candidates(
        &self,
        profile: WeightProfile,
        job: &JobPosting,
        candidates: &[CandidateProfile],
    ) -> Result<Vec<RankedCandidate>, MatchError> {
        let query = Document::from_job(job)?;
        let (kept, documents) = pool_documents(candidates, Document::from_candidate);
        let scores = score_pool(profile, &query, &documents);

        let ranked: Vec<RankedCandidate> = kept
            .into_iter()
            .zip(scores)
            .map(|(index, score)| RankedCandidate {
                candidate: candidates[index].clone(),
                score,
            })
            .collect();

        let ranked = select_top(
            ranked,
            Some(self.config.score_threshold),
            self.config.employer_limit,
            |r| r.score.total,
        );
        debug!(
            pool = candidates.len(),
            returned = ranked.len(),
            ?profile,
            "ranked candidates for job"
        );
        Ok(ranked)
    }
}

/// Build pool documents, skipping records without ids. Returns the surviving
/// source indices alongside their documents, both in pool order.
fn pool_documents<T>(
    records: &[T],
    build: impl Fn(&T) -> Result<Document, MatchError>,
) -> (Vec<usize>, Vec<Document>) {
    let mut kept = Vec::with_capacity(records.len());
    let mut documents = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        match build(record) {
            Ok(document) => {
                kept.push(index);
                documents.push(document);
            }
            Err(err) => warn!(index, error = %err, "skipping pool record"),
        }
    }

    (kept, documents)
}

/// Score every pool document against the query under one profile. An empty
/// pool, or a pool whose active text field is empty everywhere, short-circuits
/// to no scores before any vectorization.
fn score_pool(profile: WeightProfile, query: &Document, pool: &[Document]) -> Vec<MatchScore> {
    let field = profile.text_field();
    let texts: Vec<String> = pool
        .iter()
        .map(|document| document.text(field).to_string())
        .collect();

    if texts.iter().all(|text| text.trim().is_empty()) {
        if !pool.is_empty() {
            warn!(pool = pool.len(), "pool has no usable text; nothing to score");
        }
        return Vec::new();
    }

    let space = VectorSpace::fit(&texts);
    let query_vector = space.project(query.text(field));
    let similarities = score_corpus(&space, &query_vector);

    let scorer = MultiFactorScorer::new(profile);
    pool.iter()
        .zip(similarities)
        .map(|(member, similarity)| scorer.score(query, member, similarity))
        .collect()
}

/// Rank jobs for a candidate with the default engine configuration.
pub fn recommend_jobs(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
) -> Result<Vec<RankedJob>, MatchError> {
    RecommendationEngine::default().recommend_jobs(candidate, jobs)
}

/// Rank candidates for a job by skill text with the default configuration.
pub fn recommend_candidates(
    job: &JobPosting,
    candidates: &[CandidateProfile],
) -> Result<Vec<RankedCandidate>, MatchError> {
    RecommendationEngine::default().recommend_candidates(job, candidates)
}

/// Rank candidates for a job by category text with the default configuration.
pub fn recommend_candidates_by_category(
    job: &JobPosting,
    candidates: &[CandidateProfile],
) -> Result<Vec<RankedCandidate>, MatchError> {
    RecommendationEngine::default().recommend_candidates_by_category(job, candidates)
}
