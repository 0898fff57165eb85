//! Exercise knowledge base lookups
//!
//! Typed lookups over `(MuscleGroup, Gender)` are total. The string
//! functions below parse the raw form values and fall back to fixed text
//! when a value is not recognised.

use crate::errors::{render, EngineError, Outcome};
use crate::exercise_catalog::{
    compound_rest, isolation_rest, program, set_scheme, unilateral_rest, ExerciseProgram, RestRange,
    SetScheme,
};
use crate::loading::LoadPrescription;
use crate::models::{Gender, TrainingRequest};
use crate::muscles::{FiberBias, MuscleGroup};
use std::collections::HashMap;
use std::fmt;

/// Generic fallback for an unrecognised muscle group or gender
pub const NO_MATCH: &str = "No Match";

/// Fallback for the linked exercise guide
pub const GUIDE_NO_MATCH: &str = "No Match: no exercise guide for this gender and muscle group.";

/// Fallback for the cue list
pub const CUES_NOT_AVAILABLE: &str = "No biomechanical cues available for this muscle group.";

fn parse_selection(muscle_group: &str, gender: &str) -> Option<(MuscleGroup, Gender)> {
    Some((muscle_group.parse().ok()?, gender.parse().ok()?))
}

fn lookup<T>(muscle_group: &str, gender: &str, fallback: &str, f: impl FnOnce(MuscleGroup, Gender) -> T) -> Outcome<T> {
    parse_selection(muscle_group, gender)
        .map(|(muscle, gender)| f(muscle, gender))
        .ok_or_else(|| EngineError::NoMatch(fallback.to_string()))
}

// ============================================================================
// Exercise links
// ============================================================================

/// Reference URLs keyed by lowercase exercise name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseLinks {
    links: HashMap<String, String>,
}

impl ExerciseLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, url)` pairs; names are lowercased
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            links: pairs
                .into_iter()
                .map(|(name, url)| (name.as_ref().trim().to_lowercase(), url.into()))
                .collect(),
        }
    }

    /// URL for an exercise name, matched case-insensitively
    pub fn get(&self, exercise_name: &str) -> Option<&str> {
        self.links
            .get(&exercise_name.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

// ============================================================================
// Exercise plan and guide
// ============================================================================

/// Four-line plan: warm-up, compound, isolation, unilateral
pub struct ExercisePlan(&'static ExerciseProgram);

impl fmt::Display for ExercisePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .0
            .movements()
            .iter()
            .map(|(slot, movement)| format!("{}: {}", slot.label(), movement.name))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Exercise plan for a typed selection
pub fn plan_for(muscle: MuscleGroup, gender: Gender) -> ExercisePlan {
    ExercisePlan(program(muscle, gender))
}

/// Exercise plan text
pub fn exercise_plan(muscle_group: &str, gender: &str) -> String {
    render(lookup(muscle_group, gender, NO_MATCH, plan_for))
}

/// Numbered exercise list with coaching cues and Slack-style links
pub fn guide_for(muscle: MuscleGroup, gender: Gender, links: &ExerciseLinks) -> String {
    program(muscle, gender)
        .movements()
        .iter()
        .enumerate()
        .map(|(index, (_, movement))| {
            let label = match links.get(movement.name) {
                Some(url) => format!("<{url}|{}>", movement.name),
                None => movement.name.to_string(),
            };
            format!("{}. {label} - {}", index + 1, movement.cue)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Exercise guide text with links
pub fn exercise_guide_with_links(gender: &str, muscle_group: &str, links: &ExerciseLinks) -> String {
    render(lookup(muscle_group, gender, GUIDE_NO_MATCH, |muscle, gender| {
        guide_for(muscle, gender, links)
    }))
}

// ============================================================================
// Cues, sets and rest
// ============================================================================

/// Biomechanical cues; an unrecognised selection yields the fallback as a single item
pub fn biomechanical_cues(gender: &str, muscle_group: &str) -> Vec<String> {
    match parse_selection(muscle_group, gender) {
        Some((muscle, gender)) => program(muscle, gender)
            .cues
            .iter()
            .map(|cue| cue.to_string())
            .collect(),
        None => vec![CUES_NOT_AVAILABLE.to_string()],
    }
}

impl fmt::Display for SetScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compound: {} sets | Isolation: {} sets | Unilateral: {} sets",
            self.compound, self.isolation, self.unilateral
        )
    }
}

/// Set prescription text
pub fn set_prescription(muscle_group: &str, gender: &str) -> String {
    render(lookup(muscle_group, gender, NO_MATCH, set_scheme))
}

impl fmt::Display for RestRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}s", self.min_secs, self.max_secs)
    }
}

/// Rest intervals and fiber bias; each rest field degrades on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestProfile {
    pub compound: Option<RestRange>,
    pub isolation: Option<RestRange>,
    pub unilateral: Option<RestRange>,
    pub fiber_bias: FiberBias,
}

impl RestProfile {
    pub fn for_selection(muscle: Option<MuscleGroup>, gender: Option<Gender>) -> Self {
        let pair = muscle.zip(gender);
        Self {
            compound: pair.map(|(m, g)| compound_rest(m, g)),
            isolation: pair.map(|(m, g)| isolation_rest(m, g)),
            unilateral: pair.map(|(m, g)| unilateral_rest(m, g)),
            fiber_bias: muscle.map_or(FiberBias::MixedOrFastTwitch, |m| m.fiber_bias()),
        }
    }
}

impl fmt::Display for RestProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = |range: Option<RestRange>| range.map_or_else(|| NO_MATCH.to_string(), |r| r.to_string());
        write!(
            f,
            "Rest Intervals - Compound: {} | Isolation: {} | Unilateral: {}\nFiber Type Bias: {}",
            field(self.compound),
            field(self.isolation),
            field(self.unilateral),
            self.fiber_bias.label()
        )
    }
}

/// Rest interval and fiber bias text
pub fn rest_and_fiber_bias(gender: &str, muscle_group: &str) -> String {
    RestProfile::for_selection(muscle_group.parse().ok(), gender.parse().ok()).to_string()
}

// ============================================================================
// Reps and load
// ============================================================================

/// Reps and load text; a bad training weight only blanks the 1RM figures
pub fn reps_and_load_percentage(gender: &str, muscle_group: &str, training_weight: &str) -> String {
    render(lookup(muscle_group, gender, NO_MATCH, |muscle, gender| {
        LoadPrescription::for_request(&TrainingRequest::new(gender, muscle, training_weight))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn links() -> ExerciseLinks {
        ExerciseLinks::from_pairs([
            ("barbell bench press", "https://example.com/bench"),
            ("Cable Fly", "https://example.com/fly"),
        ])
    }

    #[test]
    fn test_exercise_plan_lines() {
        assert_eq!(
            exercise_plan("Pectoralis Major", "male"),
            "Warm-up: Push-Ups\n\
             Compound: Barbell Bench Press\n\
             Isolation: Cable Fly\n\
             Unilateral: Single-Arm Dumbbell Press"
        );
    }

    #[test]
    fn test_exercise_plan_differs_by_gender() {
        assert_ne!(exercise_plan("Hamstrings", "male"), exercise_plan("Hamstrings", "female"));
    }

    #[rstest]
    #[case("Forearms", "male")]
    #[case("Hamstrings", "other")]
    fn test_exercise_plan_no_match(#[case] muscle: &str, #[case] gender: &str) {
        assert_eq!(exercise_plan(muscle, gender), NO_MATCH);
        assert_eq!(set_prescription(muscle, gender), NO_MATCH);
        assert_eq!(reps_and_load_percentage(gender, muscle, "50"), NO_MATCH);
    }

    #[test]
    fn test_guide_links_known_exercises() {
        let guide = exercise_guide_with_links("male", "pectoralis major", &links());
        let lines: Vec<&str> = guide.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "1. Push-Ups - Hold a rigid plank from head to heels and touch the chest to the floor."
        );
        assert!(lines[1].starts_with("2. <https://example.com/bench|Barbell Bench Press> - "));
        assert!(lines[2].starts_with("3. <https://example.com/fly|Cable Fly> - "));
        assert!(lines[3].starts_with("4. Single-Arm Dumbbell Press - "));
    }

    #[test]
    fn test_guide_no_match() {
        assert_eq!(exercise_guide_with_links("x", "Soleus", &links()), GUIDE_NO_MATCH);
    }

    #[test]
    fn test_links_are_case_insensitive() {
        let links = links();
        assert_eq!(links.get("CABLE FLY"), Some("https://example.com/fly"));
        assert_eq!(links.get("Barbell Bench Press"), Some("https://example.com/bench"));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_cues_fallback_is_single_item_list() {
        assert_eq!(biomechanical_cues("male", "Neck"), vec![CUES_NOT_AVAILABLE.to_string()]);
    }

    #[test]
    fn test_set_prescription_text() {
        assert_eq!(
            set_prescription("Quadriceps femoris", "male"),
            "Compound: 5 sets | Isolation: 3 sets | Unilateral: 3 sets"
        );
        assert_eq!(
            set_prescription("Obliques", "female"),
            set_prescription("Obliques", "male")
        );
    }

    #[test]
    fn test_rest_and_fiber_bias_soleus() {
        assert_eq!(
            rest_and_fiber_bias("male", "Soleus"),
            "Rest Intervals - Compound: 60-90s | Isolation: 30-45s | Unilateral: 30-45s\n\
             Fiber Type Bias: Slow-twitch dominant"
        );
    }

    #[test]
    fn test_rest_and_fiber_bias_biceps() {
        assert!(rest_and_fiber_bias("male", "Biceps brachii")
            .ends_with("Fiber Type Bias: Mixed or Fast-twitch dominant"));
    }

    #[test]
    fn test_rest_degrades_per_field() {
        assert_eq!(
            rest_and_fiber_bias("robot", "Obliques"),
            "Rest Intervals - Compound: No Match | Isolation: No Match | Unilateral: No Match\n\
             Fiber Type Bias: Slow-twitch dominant"
        );
    }

    #[test]
    fn test_every_lookup_is_total_over_the_domain() {
        let links = ExerciseLinks::new();
        for muscle in MuscleGroup::ALL {
            for gender in Gender::ALL {
                let (m, g) = (muscle.name(), gender.as_str());
                assert_ne!(crate::muscles::breathing_guidance(m), crate::muscles::BREATHING_NOT_AVAILABLE);
                assert_ne!(exercise_plan(m, g), NO_MATCH);
                assert_ne!(exercise_guide_with_links(g, m, &links), GUIDE_NO_MATCH);
                assert_ne!(biomechanical_cues(g, m), vec![CUES_NOT_AVAILABLE.to_string()]);
                assert_ne!(set_prescription(m, g), NO_MATCH);
                assert!(!rest_and_fiber_bias(g, m).contains(NO_MATCH));
                assert!(reps_and_load_percentage(g, m, "40").starts_with("Estimated 1RM: "));
            }
        }
    }
}
