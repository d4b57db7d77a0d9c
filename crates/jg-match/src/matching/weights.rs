use crate::document::TextField;

/// Candidate seeking jobs: similarity leads, exact seniority fit matters,
/// years are not scored.
pub const JOB_SEEKER_WEIGHTS: Weights = Weights {
    similarity: 0.40,
    experience: 0.30,
    years: 0.0,
    location: 0.20,
    salary: 0.10,
};

/// Employer searching candidates by skill text.
pub const EMPLOYER_SKILL_WEIGHTS: Weights = Weights {
    similarity: 0.50,
    experience: 0.20,
    years: 0.10,
    location: 0.15,
    salary: 0.05,
};

/// Employer searching candidates by category text: similarity weighs
/// heaviest of all profiles.
pub const EMPLOYER_CATEGORY_WEIGHTS: Weights = Weights {
    similarity: 0.60,
    experience: 0.15,
    years: 0.10,
    location: 0.10,
    salary: 0.05,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub similarity: f64,
    pub experience: f64,
    pub years: f64,
    pub location: f64,
    pub salary: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.similarity + self.experience + self.years + self.location + self.salary
    }
}

/// Query variant selector: each profile fixes its weight set, its text field
/// and its experience flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightProfile {
    JobSeeker,
    EmployerBySkill,
    EmployerByCategory,
}

impl WeightProfile {
    pub fn weights(self) -> Weights {
        match self {
            WeightProfile::JobSeeker => JOB_SEEKER_WEIGHTS,
            WeightProfile::EmployerBySkill => EMPLOYER_SKILL_WEIGHTS,
            WeightProfile::EmployerByCategory => EMPLOYER_CATEGORY_WEIGHTS,
        }
    }

    pub fn text_field(self) -> TextField {
        match self {
            WeightProfile::EmployerByCategory => TextField::Categories,
            _ => TextField::Skills,
        }
    }

    /// The seeker profile wants an exact seniority fit; employer profiles
    /// accept candidates at or above the posting's level.
    pub fn requires_exact_experience(self) -> bool {
        matches!(self, WeightProfile::JobSeeker)
    }

    /// Employer profiles gate salary overlap on currency equality.
    pub fn checks_currency(self) -> bool {
        !matches!(self, WeightProfile::JobSeeker)
    }
}
