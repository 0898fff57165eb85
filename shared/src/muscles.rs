//! Muscle groups offered by the training form

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback when a muscle name is not one of the twelve groups
pub const BREATHING_NOT_AVAILABLE: &str = "Breathing guidance not available for this muscle group.";

/// Target muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    PectoralisMajor,
    Deltoideus,
    BicepsBrachii,
    TricepsBrachii,
    LatissimusDorsi,
    QuadricepsFemoris,
    Hamstrings,
    RectusAbdominis,
    Obliques,
    Trapezius,
    Soleus,
    GluteusMaximus,
}

/// Dominant muscle fiber type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiberBias {
    SlowTwitch,
    MixedOrFastTwitch,
}

impl FiberBias {
    pub fn label(&self) -> &'static str {
        match self {
            FiberBias::SlowTwitch => "Slow-twitch dominant",
            FiberBias::MixedOrFastTwitch => "Mixed or Fast-twitch dominant",
        }
    }
}

impl MuscleGroup {
    /// All groups in the order the form lists them
    pub const ALL: [MuscleGroup; 12] = [
        MuscleGroup::PectoralisMajor,
        MuscleGroup::Deltoideus,
        MuscleGroup::BicepsBrachii,
        MuscleGroup::TricepsBrachii,
        MuscleGroup::LatissimusDorsi,
        MuscleGroup::QuadricepsFemoris,
        MuscleGroup::Hamstrings,
        MuscleGroup::RectusAbdominis,
        MuscleGroup::Obliques,
        MuscleGroup::Trapezius,
        MuscleGroup::Soleus,
        MuscleGroup::GluteusMaximus,
    ];

    /// Anatomical name, exactly as shown to users
    pub fn name(&self) -> &'static str {
        match self {
            MuscleGroup::PectoralisMajor => "Pectoralis Major",
            MuscleGroup::Deltoideus => "Deltoideus",
            MuscleGroup::BicepsBrachii => "Biceps brachii",
            MuscleGroup::TricepsBrachii => "Triceps brachii",
            MuscleGroup::LatissimusDorsi => "Latissimus dorsi",
            MuscleGroup::QuadricepsFemoris => "Quadriceps femoris",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::RectusAbdominis => "Rectus Abdominis",
            MuscleGroup::Obliques => "Obliques",
            MuscleGroup::Trapezius => "Trapezius",
            MuscleGroup::Soleus => "Soleus",
            MuscleGroup::GluteusMaximus => "Gluteus Maximus",
        }
    }

    /// One-sentence breathing pattern for the group's main lifts
    pub fn breathing_cue(&self) -> &'static str {
        match self {
            MuscleGroup::PectoralisMajor => {
                "Inhale as you lower the weight to your chest, exhale forcefully as you press it away."
            }
            MuscleGroup::Deltoideus => {
                "Inhale at shoulder level, brace your core, and exhale as you press or raise the weight overhead."
            }
            MuscleGroup::BicepsBrachii => {
                "Exhale as you curl the weight up, inhale slowly as you lower it under control."
            }
            MuscleGroup::TricepsBrachii => {
                "Inhale as the elbows bend, exhale as you extend the arms and squeeze the triceps."
            }
            MuscleGroup::LatissimusDorsi => {
                "Exhale as you pull the elbows down or back, inhale as you return to the stretch."
            }
            MuscleGroup::QuadricepsFemoris => {
                "Take a deep belly breath and brace before descending, exhale through the sticking point as you stand."
            }
            MuscleGroup::Hamstrings => {
                "Inhale and brace at the top of the hinge, exhale as you drive the hips forward to lock out."
            }
            MuscleGroup::RectusAbdominis => {
                "Exhale fully as you crunch the ribs toward the pelvis, inhale as you lengthen back out."
            }
            MuscleGroup::Obliques => {
                "Exhale as you rotate or side-bend against resistance, inhale as you return to center."
            }
            MuscleGroup::Trapezius => {
                "Inhale before you shrug, hold briefly at the top, exhale as you lower the shoulders."
            }
            MuscleGroup::Soleus => {
                "Breathe steadily, exhaling as you rise onto the balls of your feet and inhaling on the way down."
            }
            MuscleGroup::GluteusMaximus => {
                "Inhale and brace at the bottom, exhale as you drive through the heels and squeeze the glutes at lockout."
            }
        }
    }

    /// Fiber-type bias used for rep and rest prescriptions
    pub fn fiber_bias(&self) -> FiberBias {
        match self {
            MuscleGroup::Soleus | MuscleGroup::RectusAbdominis | MuscleGroup::Obliques => {
                FiberBias::SlowTwitch
            }
            _ => FiberBias::MixedOrFastTwitch,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MuscleGroup {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MuscleGroup::ALL
            .into_iter()
            .find(|group| group.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::NoMatch(format!("Unknown muscle group: {wanted}")))
    }
}

/// Breathing guidance for a muscle name, with the fixed fallback
pub fn breathing_guidance(muscle_group: &str) -> String {
    muscle_group
        .parse::<MuscleGroup>()
        .map(|group| group.breathing_cue().to_string())
        .unwrap_or_else(|_| BREATHING_NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for group in MuscleGroup::ALL {
            assert_eq!(group.name().parse::<MuscleGroup>().unwrap(), group);
        }
    }

    #[rstest]
    #[case("pectoralis major", MuscleGroup::PectoralisMajor)]
    #[case("BICEPS BRACHII", MuscleGroup::BicepsBrachii)]
    #[case("  Soleus ", MuscleGroup::Soleus)]
    fn test_from_str_is_case_insensitive(#[case] raw: &str, #[case] expected: MuscleGroup) {
        assert_eq!(raw.parse::<MuscleGroup>().unwrap(), expected);
    }

    #[test]
    fn test_breathing_guidance_is_specific_per_group() {
        let cues: HashSet<String> = MuscleGroup::ALL
            .iter()
            .map(|group| breathing_guidance(group.name()))
            .collect();
        assert_eq!(cues.len(), MuscleGroup::ALL.len());
        assert!(!cues.contains(BREATHING_NOT_AVAILABLE));
        assert!(cues.iter().all(|cue| !cue.is_empty()));
    }

    #[rstest]
    #[case("Forearms")]
    #[case("")]
    #[case("Pectoralis")]
    fn test_breathing_guidance_fallback(#[case] raw: &str) {
        assert_eq!(breathing_guidance(raw), BREATHING_NOT_AVAILABLE);
    }

    #[rstest]
    #[case(MuscleGroup::Soleus, FiberBias::SlowTwitch)]
    #[case(MuscleGroup::RectusAbdominis, FiberBias::SlowTwitch)]
    #[case(MuscleGroup::Obliques, FiberBias::SlowTwitch)]
    #[case(MuscleGroup::BicepsBrachii, FiberBias::MixedOrFastTwitch)]
    #[case(MuscleGroup::QuadricepsFemoris, FiberBias::MixedOrFastTwitch)]
    fn test_fiber_bias(#[case] group: MuscleGroup, #[case] expected: FiberBias) {
        assert_eq!(group.fiber_bias(), expected);
    }
}
