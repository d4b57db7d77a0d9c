use std::fmt;

use serde::de::{Deserializer, Error, Visitor};

/// Accept numbers, numeric strings, or null for salary and years fields.
/// Unparseable values become 0.0 so one malformed record cannot abort a
/// whole scoring pass.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientF64)
}

/// Optional variant for preference and boosted-listing salary bounds: null
/// and unparseable values map to `None`.
pub(crate) fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientOptF64)
}

struct LenientF64;

impl<'de> Visitor<'de> for LenientF64 {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(value as f64)
    }

    fn visit_f64<E: Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(value)
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value.trim().parse().unwrap_or(0.0))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(0.0)
    }
}

struct LenientOptF64;

impl<'de> Visitor<'de> for LenientOptF64 {
    type Value = Option<f64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value as f64))
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value as f64))
    }

    fn visit_f64<E: Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(value.trim().parse().ok())
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoostedJob, JobPosting, JobPreference};

    #[test]
    fn parses_numeric_strings_in_salary_fields() {
        let job: JobPosting = serde_json::from_str(
            r#"{"id": 1, "title": "Clerk", "min_salary": "45000", "max_salary": 60000}"#,
        )
        .unwrap();

        assert_eq!(job.min_salary, 45000.0);
        assert_eq!(job.max_salary, 60000.0);
    }

    #[test]
    fn malformed_and_null_numbers_default_to_zero() {
        let job: JobPosting = serde_json::from_str(
            r#"{"id": 1, "min_salary": "N/A", "max_salary": null, "required_experience_years": "??"}"#,
        )
        .unwrap();

        assert_eq!(job.min_salary, 0.0);
        assert_eq!(job.max_salary, 0.0);
        assert_eq!(job.required_experience_years, 0.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let job: JobPosting = serde_json::from_str(r#"{"id": 7}"#).unwrap();

        assert_eq!(job.id, Some(7));
        assert!(job.skills.is_empty());
        assert_eq!(job.min_salary, 0.0);
        assert_eq!(job.location, "");
    }

    #[test]
    fn optional_salary_bounds_stay_unset_when_malformed() {
        let preference: JobPreference = serde_json::from_str(
            r#"{"locations": ["lagos"], "min_salary": "unknown", "max_salary": null}"#,
        )
        .unwrap();

        assert_eq!(preference.min_salary, None);
        assert_eq!(preference.max_salary, None);
    }

    #[test]
    fn optional_salary_bounds_accept_numeric_strings() {
        let job: BoostedJob = serde_json::from_str(
            r#"{"id": 3, "min_salary": "120000", "max_salary": 150000}"#,
        )
        .unwrap();

        assert_eq!(job.min_salary, Some(120000.0));
        assert_eq!(job.max_salary, Some(150000.0));
    }
}
