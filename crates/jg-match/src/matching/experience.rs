use strum::{Display, EnumString};

/// Seniority ladder behind the ordinal experience comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn rank(self) -> u8 {
        match self {
            ExperienceLevel::Entry => 1,
            ExperienceLevel::Mid => 2,
            ExperienceLevel::Senior => 3,
            ExperienceLevel::Lead => 4,
        }
    }

    /// Unrecognized levels fall back to entry.
    pub fn parse_lenient(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(ExperienceLevel::parse_lenient("Senior"), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::parse_lenient("LEAD"), ExperienceLevel::Lead);
        assert_eq!(ExperienceLevel::parse_lenient(" mid "), ExperienceLevel::Mid);
    }

    #[test]
    fn unknown_levels_default_to_entry() {
        assert_eq!(ExperienceLevel::parse_lenient("principal"), ExperienceLevel::Entry);
        assert_eq!(ExperienceLevel::parse_lenient(""), ExperienceLevel::Entry);
    }

    #[test]
    fn ranks_follow_the_ladder() {
        assert_eq!(ExperienceLevel::Entry.rank(), 1);
        assert_eq!(ExperienceLevel::Mid.rank(), 2);
        assert_eq!(ExperienceLevel::Senior.rank(), 3);
        assert_eq!(ExperienceLevel::Lead.rank(), 4);
    }

    #[test]
    fn displays_lowercase_labels() {
        assert_eq!(ExperienceLevel::Senior.to_string(), "senior");
    }
}
