use serde::Serialize;

/// Which group of inputs a step collects. Rendering is the frontend's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSet {
    BasicInformation,
    SkillsAndInterests,
    StrengthsAndAptitudes,
    SelfAssessment,
    GoalsAndChallenges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDefinition {
    pub title: &'static str,
    pub description: &'static str,
    pub field_set: FieldSet,
}

pub const STEP_COUNT: usize = 5;

pub const STEPS: [StepDefinition; STEP_COUNT] = [
    StepDefinition {
        title: "Basic Information",
        description: "Let's start with some basic information about you.",
        field_set: FieldSet::BasicInformation,
    },
    StepDefinition {
        title: "Skills & Interests",
        description: "Tell us about your skills and what interests you.",
        field_set: FieldSet::SkillsAndInterests,
    },
    StepDefinition {
        title: "Strengths & Aptitudes",
        description: "Help us understand your natural abilities and strengths.",
        field_set: FieldSet::StrengthsAndAptitudes,
    },
    StepDefinition {
        title: "Self-Assessment",
        description: "Rate yourself on the following dimensions",
        field_set: FieldSet::SelfAssessment,
    },
    StepDefinition {
        title: "Goals & Challenges",
        description: "Share your future aspirations and any challenges you're facing in your career journey.",
        field_set: FieldSet::GoalsAndChallenges,
    },
];

/// Checkbox options offered on the skills & interests step.
pub const INTEREST_OPTIONS: &[&str] = &[
    "Technology & Computing",
    "Business & Finance",
    "Healthcare & Medicine",
    "Arts & Design",
    "Education & Teaching",
    "Science & Research",
    "Engineering",
    "Communication & Media",
    "Law & Public Policy",
    "Environment & Nature",
];

/// Checkbox options offered on the strengths step.
pub const STRENGTH_OPTIONS: &[&str] = &[
    "Problem Solving",
    "Communication",
    "Leadership",
    "Creativity",
    "Analytical Thinking",
    "Technical Skills",
    "Teamwork",
    "Adaptability",
    "Attention to Detail",
    "Organization",
];

/// Rounded completion percentage shown while on `index` (0-based).
pub fn progress_percent(index: usize) -> u8 {
    (((index + 1) as f64 / STEP_COUNT as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_per_step() {
        let all: Vec<u8> = (0..STEP_COUNT).map(progress_percent).collect();
        assert_eq!(all, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn test_steps_follow_field_set_order() {
        assert_eq!(STEPS[0].field_set, FieldSet::BasicInformation);
        assert_eq!(STEPS[STEP_COUNT - 1].title, "Goals & Challenges");
    }
}
