use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Slider position a fresh wizard starts every aptitude at.
pub const NEUTRAL_SLIDER: u8 = 50;
/// Upper bound of every aptitude slider (inclusive).
pub const SLIDER_MAX: u8 = 100;

/// The six self-rated aptitude sliders collected by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aptitude {
    Analytical,
    Creative,
    Social,
    Practical,
    Leadership,
    Technology,
}

impl Aptitude {
    /// Profile order: Analytical, Creative, Social, Practical, Leadership, Technical.
    pub const ALL: [Aptitude; 6] = [
        Aptitude::Analytical,
        Aptitude::Creative,
        Aptitude::Social,
        Aptitude::Practical,
        Aptitude::Leadership,
        Aptitude::Technology,
    ];

    /// Display name used in the derived user profile.
    /// The technology slider is reported as "Technical".
    pub fn label(self) -> &'static str {
        match self {
            Aptitude::Analytical => "Analytical",
            Aptitude::Creative => "Creative",
            Aptitude::Social => "Social",
            Aptitude::Practical => "Practical",
            Aptitude::Leadership => "Leadership",
            Aptitude::Technology => "Technical",
        }
    }

    /// Score substituted when the slider was never set.
    pub fn fallback_score(self) -> u8 {
        match self {
            Aptitude::Analytical => 75,
            Aptitude::Creative => 60,
            Aptitude::Social => 65,
            Aptitude::Practical => 70,
            Aptitude::Leadership => 55,
            Aptitude::Technology => 80,
        }
    }
}

/// Free-text fields of the assessment that are overwritten wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Name,
    Age,
    Education,
    Skills,
    Challenges,
    FutureGoals,
}

/// Everything the user has entered so far.
///
/// `interests` and `strengths` keep insertion order but never hold duplicates.
/// Sliders are `None` until set; `Some(0)` is a real answer, not "unset".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    pub name: String,
    pub age: String,
    pub education: String,
    pub skills: String,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub analytical: Option<u8>,
    pub creative: Option<u8>,
    pub social: Option<u8>,
    pub practical: Option<u8>,
    pub leadership: Option<u8>,
    pub technology: Option<u8>,
    pub challenges: String,
    pub future_goals: String,
}

impl AnswerRecord {
    /// Blank record with every slider at the neutral midpoint, as the form first renders.
    pub fn with_neutral_sliders() -> Self {
        let mut record = Self::default();
        for aptitude in Aptitude::ALL {
            *record.slider_mut(aptitude) = Some(NEUTRAL_SLIDER);
        }
        record
    }

    pub fn slider(&self, aptitude: Aptitude) -> Option<u8> {
        match aptitude {
            Aptitude::Analytical => self.analytical,
            Aptitude::Creative => self.creative,
            Aptitude::Social => self.social,
            Aptitude::Practical => self.practical,
            Aptitude::Leadership => self.leadership,
            Aptitude::Technology => self.technology,
        }
    }

    pub fn slider_mut(&mut self, aptitude: Aptitude) -> &mut Option<u8> {
        match aptitude {
            Aptitude::Analytical => &mut self.analytical,
            Aptitude::Creative => &mut self.creative,
            Aptitude::Social => &mut self.social,
            Aptitude::Practical => &mut self.practical,
            Aptitude::Leadership => &mut self.leadership,
            Aptitude::Technology => &mut self.technology,
        }
    }

    /// Drops repeated interests and strengths, keeping each value's first position.
    /// Records built outside the wizard's toggles can carry duplicates.
    pub fn dedupe_selections(&mut self) {
        dedupe_in_order(&mut self.interests);
        dedupe_in_order(&mut self.strengths);
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Age => &mut self.age,
            TextField::Education => &mut self.education,
            TextField::Skills => &mut self.skills,
            TextField::Challenges => &mut self.challenges,
            TextField::FutureGoals => &mut self.future_goals,
        }
    }
}

fn dedupe_in_order(values: &mut Vec<String>) {
    let mut seen = HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
}

/// Removes `value` if present, appends it otherwise.
/// Returns `true` when the value is a member after the call.
pub fn toggle_membership(set: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = set.iter().position(|v| v == value) {
        set.remove(pos);
        false
    } else {
        set.push(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut set = vec!["Engineering".to_string(), "Arts & Design".to_string()];
        let original = set.clone();

        assert!(toggle_membership(&mut set, "Science & Research"));
        assert!(!toggle_membership(&mut set, "Science & Research"));
        assert_eq!(set, original);

        assert!(!toggle_membership(&mut set, "Engineering"));
        assert!(toggle_membership(&mut set, "Engineering"));
        assert_eq!(set.len(), original.len());
        assert!(original.iter().all(|v| set.contains(v)));
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence_order() {
        let mut record = AnswerRecord {
            interests: vec!["Arts".into(), "Science".into(), "Arts".into()],
            strengths: vec!["Writing".into(), "Writing".into()],
            ..AnswerRecord::default()
        };
        record.dedupe_selections();
        assert_eq!(record.interests, vec!["Arts", "Science"]);
        assert_eq!(record.strengths, vec!["Writing"]);
    }

    #[test]
    fn test_toggle_appends_at_end() {
        let mut set = vec!["a".to_string()];
        toggle_membership(&mut set, "b");
        assert_eq!(set, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_neutral_sliders_all_fifty() {
        let record = AnswerRecord::with_neutral_sliders();
        for aptitude in Aptitude::ALL {
            assert_eq!(record.slider(aptitude), Some(NEUTRAL_SLIDER));
        }
    }

    #[test]
    fn test_default_record_has_unset_sliders() {
        let record = AnswerRecord::default();
        assert!(Aptitude::ALL.iter().all(|a| record.slider(*a).is_none()));
    }

    #[test]
    fn test_deserializes_camel_case_and_missing_fields() {
        let record: AnswerRecord = serde_json::from_str(
            r#"{"name":"Ada","futureGoals":"lead a team","analytical":0,"interests":["Engineering"]}"#,
        )
        .unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.future_goals, "lead a team");
        assert_eq!(record.analytical, Some(0));
        assert_eq!(record.creative, None);
        assert!(record.strengths.is_empty());
    }

    #[test]
    fn test_technology_label_is_technical() {
        assert_eq!(Aptitude::Technology.label(), "Technical");
        assert_eq!(Aptitude::Technology.fallback_score(), 80);
    }
}
