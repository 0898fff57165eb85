//! One-rep-max estimation and load prescriptions
//!
//! The training form asks for the weight the user moves for their compound
//! working sets. Assuming that weight sits at a known percentage of their
//! 1RM, the estimate is `weight × 100 / percentage`, and every slot of the
//! session gets a rep range and a 1RM percentage band.
//!
//! The seven large muscle groups share one table per gender. Arms, calves
//! and trunk muscles respond to different loading and have their own.

use crate::health_metrics::round_places;
use crate::models::{Gender, TrainingRequest, MAX_TRAINING_WEIGHT_KG};
use crate::muscles::MuscleGroup;
use serde::Serialize;
use std::fmt;

/// Reps and 1RM percentage band for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepTarget {
    pub reps: &'static str,
    pub low_percent: u8,
    pub high_percent: u8,
}

/// Load table for a muscle group and gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadTable {
    /// Assumed percentage of 1RM lifted in the compound working sets
    pub working_percent: u8,
    pub compound: RepTarget,
    pub isolation: RepTarget,
    pub unilateral: RepTarget,
}

impl LoadTable {
    /// Multiplier from working weight to estimated 1RM
    pub fn coefficient(&self) -> f64 {
        100.0 / f64::from(self.working_percent)
    }
}

const fn target(reps: &'static str, low_percent: u8, high_percent: u8) -> RepTarget {
    RepTarget {
        reps,
        low_percent,
        high_percent,
    }
}

static LARGE_GROUP_MALE: LoadTable = LoadTable {
    working_percent: 75,
    compound: target("6-8", 75, 80),
    isolation: target("10-12", 65, 70),
    unilateral: target("8-10", 70, 75),
};

static LARGE_GROUP_FEMALE: LoadTable = LoadTable {
    working_percent: 70,
    compound: target("8-10", 70, 75),
    isolation: target("12-15", 60, 65),
    unilateral: target("10-12", 65, 70),
};

static BICEPS_MALE: LoadTable = LoadTable {
    working_percent: 70,
    compound: target("8-10", 70, 75),
    isolation: target("10-12", 65, 70),
    unilateral: target("10-12", 60, 65),
};

static BICEPS_FEMALE: LoadTable = LoadTable {
    working_percent: 65,
    compound: target("10-12", 65, 70),
    isolation: target("12-15", 60, 65),
    unilateral: target("12-15", 55, 60),
};

static TRICEPS_MALE: LoadTable = LoadTable {
    working_percent: 72,
    compound: target("8-10", 72, 77),
    isolation: target("10-12", 65, 70),
    unilateral: target("12-15", 60, 65),
};

static TRICEPS_FEMALE: LoadTable = LoadTable {
    working_percent: 68,
    compound: target("10-12", 68, 72),
    isolation: target("12-15", 60, 65),
    unilateral: target("12-15", 55, 60),
};

static SOLEUS_MALE: LoadTable = LoadTable {
    working_percent: 60,
    compound: target("15-20", 60, 65),
    isolation: target("15-20", 55, 60),
    unilateral: target("20-25", 50, 55),
};

static SOLEUS_FEMALE: LoadTable = LoadTable {
    working_percent: 55,
    compound: target("15-20", 55, 60),
    isolation: target("20-25", 50, 55),
    unilateral: target("20-25", 45, 50),
};

static RECTUS_ABDOMINIS_MALE: LoadTable = LoadTable {
    working_percent: 60,
    compound: target("12-15", 60, 65),
    isolation: target("15-20", 50, 60),
    unilateral: target("15-20", 45, 55),
};

static RECTUS_ABDOMINIS_FEMALE: LoadTable = LoadTable {
    working_percent: 55,
    compound: target("15-20", 55, 60),
    isolation: target("15-20", 50, 55),
    unilateral: target("20-25", 40, 50),
};

static OBLIQUES_MALE: LoadTable = LoadTable {
    working_percent: 60,
    compound: target("12-15", 60, 65),
    isolation: target("15-20", 50, 55),
    unilateral: target("15-20", 45, 50),
};

static OBLIQUES_FEMALE: LoadTable = LoadTable {
    working_percent: 55,
    compound: target("15-20", 50, 55),
    isolation: target("20-25", 45, 50),
    unilateral: target("20-25", 40, 45),
};

/// Load table lookup
pub fn load_table(muscle: MuscleGroup, gender: Gender) -> &'static LoadTable {
    use Gender::{Female, Male};
    use MuscleGroup::*;

    match (muscle, gender) {
        (BicepsBrachii, Male) => &BICEPS_MALE,
        (BicepsBrachii, Female) => &BICEPS_FEMALE,
        (TricepsBrachii, Male) => &TRICEPS_MALE,
        (TricepsBrachii, Female) => &TRICEPS_FEMALE,
        (Soleus, Male) => &SOLEUS_MALE,
        (Soleus, Female) => &SOLEUS_FEMALE,
        (RectusAbdominis, Male) => &RECTUS_ABDOMINIS_MALE,
        (RectusAbdominis, Female) => &RECTUS_ABDOMINIS_FEMALE,
        (Obliques, Male) => &OBLIQUES_MALE,
        (Obliques, Female) => &OBLIQUES_FEMALE,
        (
            PectoralisMajor | Deltoideus | LatissimusDorsi | QuadricepsFemoris | Hamstrings
            | Trapezius | GluteusMaximus,
            Male,
        ) => &LARGE_GROUP_MALE,
        (
            PectoralisMajor | Deltoideus | LatissimusDorsi | QuadricepsFemoris | Hamstrings
            | Trapezius | GluteusMaximus,
            Female,
        ) => &LARGE_GROUP_FEMALE,
    }
}

/// Estimate 1RM from a working weight, rounded to the nearest kilogram
///
/// `None` for a weight outside `(0, MAX_TRAINING_WEIGHT_KG]`.
pub fn estimate_one_rep_max(training_weight_kg: f64, table: &LoadTable) -> Option<u32> {
    if !(training_weight_kg > 0.0 && training_weight_kg <= MAX_TRAINING_WEIGHT_KG) {
        return None;
    }
    Some(round_places(training_weight_kg * table.coefficient(), 0) as u32)
}

/// Rep and load prescription for a training request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadPrescription {
    /// `None` when no usable training weight was given
    pub one_rep_max_kg: Option<u32>,
    pub table: &'static LoadTable,
}

impl LoadPrescription {
    pub fn for_request(request: &TrainingRequest) -> Self {
        let table = load_table(request.muscle_group, request.gender);
        Self {
            one_rep_max_kg: request
                .training_weight_kg
                .and_then(|weight| estimate_one_rep_max(weight, table)),
            table,
        }
    }

    /// Kilogram band for a slot, when the 1RM is known
    pub fn load_range_kg(&self, target: &RepTarget) -> Option<(u32, u32)> {
        let one_rm = f64::from(self.one_rep_max_kg?);
        let at = |percent: u8| round_places(one_rm * f64::from(percent) / 100.0, 0) as u32;
        Some((at(target.low_percent), at(target.high_percent)))
    }

    fn write_slot(&self, f: &mut fmt::Formatter<'_>, slot: &str, target: &RepTarget) -> fmt::Result {
        write!(
            f,
            "\n{slot}: {} reps @ {}-{}% 1RM",
            target.reps, target.low_percent, target.high_percent
        )?;
        if let Some((low, high)) = self.load_range_kg(target) {
            write!(f, " (~{low}-{high} kg)")?;
        }
        Ok(())
    }
}

impl fmt::Display for LoadPrescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.one_rep_max_kg {
            Some(one_rm) => write!(f, "Estimated 1RM: {one_rm} kg")?,
            None => f.write_str("Estimated 1RM: N/A")?,
        }
        self.write_slot(f, "Compound", &self.table.compound)?;
        self.write_slot(f, "Isolation", &self.table.isolation)?;
        self.write_slot(f, "Unilateral", &self.table.unilateral)
    }
}
