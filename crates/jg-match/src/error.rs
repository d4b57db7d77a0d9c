use thiserror::Error;

/// Errors surfaced by the matching core. Empty pools and text-less pools are
/// empty results, not errors; only a query record without an id or a missing
/// preference record abort a call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("{entity} record is missing its id")]
    MissingId { entity: &'static str },

    #[error("no job preferences stored for candidate {candidate_id}")]
    PreferenceNotFound { candidate_id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_missing_id_with_entity() {
        let err = MatchError::MissingId { entity: "job" };
        assert_eq!(err.to_string(), "job record is missing its id");
    }

    #[test]
    fn formats_preference_not_found_with_candidate() {
        let err = MatchError::PreferenceNotFound { candidate_id: 42 };
        assert_eq!(err.to_string(), "no job preferences stored for candidate 42");
    }
}
