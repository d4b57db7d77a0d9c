use crate::document::TextField;
use crate::skills;
use crate::CandidateProfile;

/// Keep candidates whose canonical skill set intersects the required set and
/// whose stored location contains the query location case-insensitively.
/// Coverage only: no scoring, no limit, pool order preserved.
pub fn candidates_with_any_skill(
    required: &[String],
    location: &str,
    pool: &[CandidateProfile],
) -> Vec<CandidateProfile> {
    filter_pool(required, location, pool, TextField::Skills)
}

/// Category counterpart of [`candidates_with_any_skill`].
pub fn candidates_with_any_category(
    required: &[String],
    location: &str,
    pool: &[CandidateProfile],
) -> Vec<CandidateProfile> {
    filter_pool(required, location, pool, TextField::Categories)
}

fn filter_pool(
    required: &[String],
    location: &str,
    pool: &[CandidateProfile],
    field: TextField,
) -> Vec<CandidateProfile> {
    let required = skills::canonical_set(required);
    let needle = location.trim().to_lowercase();

    pool.iter()
        .filter(|candidate| {
            let own = match field {
                TextField::Skills => skills::canonical_set(&candidate.skills),
                TextField::Categories => skills::canonical_set(&candidate.categories),
            };
            !required.is_disjoint(&own) && candidate.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: i64, skills: &[&str], location: &str) -> CandidateProfile {
        CandidateProfile {
            id: Some(id),
            skills: skills.iter().map(|s| (*s).to_string()).collect(),
            categories: vec!["software development".into()],
            location: location.into(),
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn keeps_candidates_covering_any_required_skill() {
        let pool = vec![
            candidate(1, &["python", "django"], "Lagos"),
            candidate(2, &["carpentry"], "Lagos"),
            candidate(3, &["react"], "Lagos"),
        ];

        let kept = candidates_with_any_skill(
            &["Python".to_string(), "React".to_string()],
            "lagos",
            &pool,
        );

        let ids: Vec<_> = kept.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn location_is_a_substring_containment_check() {
        let pool = vec![
            candidate(1, &["python"], "West Lagos"),
            candidate(2, &["python"], "Abuja"),
        ];

        let kept = candidates_with_any_skill(&["python".to_string()], "Lagos", &pool);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, Some(1));
    }

    #[test]
    fn empty_location_matches_everywhere() {
        let pool = vec![
            candidate(1, &["python"], "Lagos"),
            candidate(2, &["python"], "Abuja"),
        ];

        let kept = candidates_with_any_skill(&["python".to_string()], "", &pool);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn alias_spellings_still_intersect() {
        let pool = vec![candidate(1, &["K8s"], "Lagos")];

        let kept = candidates_with_any_skill(&["kubernetes".to_string()], "lagos", &pool);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn category_variant_reads_categories() {
        let pool = vec![candidate(1, &["python"], "Lagos")];

        let by_category = candidates_with_any_category(
            &["Software Development".to_string()],
            "lagos",
            &pool,
        );
        assert_eq!(by_category.len(), 1);

        let wrong_category =
            candidates_with_any_category(&["catering".to_string()], "lagos", &pool);
        assert!(wrong_category.is_empty());
    }

    #[test]
    fn no_required_overlap_means_no_results() {
        let pool = vec![candidate(1, &["python"], "Lagos")];

        let kept = candidates_with_any_skill(&["welding".to_string()], "lagos", &pool);
        assert!(kept.is_empty());
    }
}
