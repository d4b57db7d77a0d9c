/// Ranking and truncation tunables. Environment overrides use the `JG_`
/// prefix so embedding services can adjust limits without a rebuild.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum total score an employer-side match must reach.
    pub score_threshold: f64,
    /// Result cap for the employer-seeking variants.
    pub employer_limit: usize,
    /// Result cap for the candidate-seeking variant.
    pub seeker_limit: usize,
    /// Result cap for boosted-job recommendations.
    pub boost_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.4,
            employer_limit: 10,
            seeker_limit: 5,
            boost_limit: 20,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            score_threshold: std::env::var("JG_SCORE_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.4),
            employer_limit: std::env::var("JG_EMPLOYER_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            seeker_limit: std::env::var("JG_SEEKER_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            boost_limit: std::env::var("JG_BOOST_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
        }
    }
}
