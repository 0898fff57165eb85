//! Exercise catalog: authored programs per muscle group and gender
//!
//! Every `(MuscleGroup, Gender)` pair has its own hand-written program.
//! The tables are `static` data behind exhaustive matches, so adding a
//! muscle group without a program is a compile error.

use crate::models::Gender;
use crate::muscles::MuscleGroup;
use serde::Serialize;

/// A named exercise with its coaching cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Movement {
    pub name: &'static str,
    pub cue: &'static str,
}

/// Slot an exercise fills in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    WarmUp,
    Compound,
    Isolation,
    Unilateral,
}

impl Slot {
    pub fn label(&self) -> &'static str {
        match self {
            Slot::WarmUp => "Warm-up",
            Slot::Compound => "Compound",
            Slot::Isolation => "Isolation",
            Slot::Unilateral => "Unilateral",
        }
    }
}

/// Session template for one muscle group and gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseProgram {
    pub warm_up: Movement,
    pub compound: Movement,
    pub isolation: Movement,
    pub unilateral: Movement,
    /// Biomechanical cues, three or four per program
    pub cues: &'static [&'static str],
}

impl ExerciseProgram {
    /// Movements in session order
    pub fn movements(&self) -> [(Slot, &Movement); 4] {
        [
            (Slot::WarmUp, &self.warm_up),
            (Slot::Compound, &self.compound),
            (Slot::Isolation, &self.isolation),
            (Slot::Unilateral, &self.unilateral),
        ]
    }
}

/// Working sets per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetScheme {
    pub compound: u8,
    pub isolation: u8,
    pub unilateral: u8,
}

/// Rest between sets, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestRange {
    pub min_secs: u16,
    pub max_secs: u16,
}

const fn secs(min_secs: u16, max_secs: u16) -> RestRange {
    RestRange { min_secs, max_secs }
}

const fn sets(compound: u8, isolation: u8, unilateral: u8) -> SetScheme {
    SetScheme {
        compound,
        isolation,
        unilateral,
    }
}

const fn mv(name: &'static str, cue: &'static str) -> Movement {
    Movement { name, cue }
}

/// Program lookup
pub fn program(muscle: MuscleGroup, gender: Gender) -> &'static ExerciseProgram {
    use Gender::{Female, Male};
    use MuscleGroup::*;

    match (muscle, gender) {
        (PectoralisMajor, Male) => &PECTORALIS_MAJOR_MALE,
        (PectoralisMajor, Female) => &PECTORALIS_MAJOR_FEMALE,
        (Deltoideus, Male) => &DELTOIDEUS_MALE,
        (Deltoideus, Female) => &DELTOIDEUS_FEMALE,
        (BicepsBrachii, Male) => &BICEPS_BRACHII_MALE,
        (BicepsBrachii, Female) => &BICEPS_BRACHII_FEMALE,
        (TricepsBrachii, Male) => &TRICEPS_BRACHII_MALE,
        (TricepsBrachii, Female) => &TRICEPS_BRACHII_FEMALE,
        (LatissimusDorsi, Male) => &LATISSIMUS_DORSI_MALE,
        (LatissimusDorsi, Female) => &LATISSIMUS_DORSI_FEMALE,
        (QuadricepsFemoris, Male) => &QUADRICEPS_FEMORIS_MALE,
        (QuadricepsFemoris, Female) => &QUADRICEPS_FEMORIS_FEMALE,
        (Hamstrings, Male) => &HAMSTRINGS_MALE,
        (Hamstrings, Female) => &HAMSTRINGS_FEMALE,
        (RectusAbdominis, Male) => &RECTUS_ABDOMINIS_MALE,
        (RectusAbdominis, Female) => &RECTUS_ABDOMINIS_FEMALE,
        (Obliques, Male) => &OBLIQUES_MALE,
        (Obliques, Female) => &OBLIQUES_FEMALE,
        (Trapezius, Male) => &TRAPEZIUS_MALE,
        (Trapezius, Female) => &TRAPEZIUS_FEMALE,
        (Soleus, Male) => &SOLEUS_MALE,
        (Soleus, Female) => &SOLEUS_FEMALE,
        (GluteusMaximus, Male) => &GLUTEUS_MAXIMUS_MALE,
        (GluteusMaximus, Female) => &GLUTEUS_MAXIMUS_FEMALE,
    }
}

/// Working sets; trunk muscles get the same volume regardless of gender
pub fn set_scheme(muscle: MuscleGroup, gender: Gender) -> SetScheme {
    use MuscleGroup::*;

    let (male, female) = match muscle {
        PectoralisMajor => (sets(4, 3, 3), sets(3, 3, 2)),
        Deltoideus => (sets(4, 3, 3), sets(3, 3, 2)),
        BicepsBrachii => (sets(3, 3, 2), sets(3, 2, 2)),
        TricepsBrachii => (sets(3, 3, 2), sets(3, 2, 2)),
        LatissimusDorsi => (sets(4, 3, 3), sets(3, 3, 2)),
        QuadricepsFemoris => (sets(5, 3, 3), sets(4, 3, 3)),
        Hamstrings => (sets(4, 3, 3), sets(3, 3, 3)),
        RectusAbdominis | Obliques => return sets(3, 3, 2),
        Trapezius => (sets(4, 3, 2), sets(3, 2, 2)),
        Soleus => (sets(4, 4, 3), sets(4, 3, 3)),
        GluteusMaximus => (sets(4, 3, 3), sets(4, 4, 3)),
    };
    match gender {
        Gender::Male => male,
        Gender::Female => female,
    }
}

fn by_gender(ranges: (RestRange, RestRange), gender: Gender) -> RestRange {
    match gender {
        Gender::Male => ranges.0,
        Gender::Female => ranges.1,
    }
}

/// Rest after compound sets
pub fn compound_rest(muscle: MuscleGroup, gender: Gender) -> RestRange {
    use MuscleGroup::*;

    let ranges = match muscle {
        PectoralisMajor => (secs(120, 180), secs(90, 150)),
        Deltoideus => (secs(120, 150), secs(90, 120)),
        BicepsBrachii => (secs(90, 120), secs(60, 90)),
        TricepsBrachii => (secs(90, 120), secs(60, 90)),
        LatissimusDorsi => (secs(120, 180), secs(90, 150)),
        QuadricepsFemoris => (secs(150, 240), secs(120, 180)),
        Hamstrings => (secs(120, 180), secs(90, 150)),
        RectusAbdominis => (secs(60, 90), secs(60, 90)),
        Obliques => (secs(60, 90), secs(45, 75)),
        Trapezius => (secs(90, 120), secs(75, 105)),
        Soleus => (secs(60, 90), secs(45, 75)),
        GluteusMaximus => (secs(120, 180), secs(90, 150)),
    };
    by_gender(ranges, gender)
}

/// Rest after isolation sets
pub fn isolation_rest(muscle: MuscleGroup, gender: Gender) -> RestRange {
    use MuscleGroup::*;

    let ranges = match muscle {
        PectoralisMajor => (secs(60, 90), secs(60, 75)),
        Deltoideus => (secs(45, 75), secs(45, 60)),
        BicepsBrachii => (secs(60, 90), secs(45, 75)),
        TricepsBrachii => (secs(60, 90), secs(45, 75)),
        LatissimusDorsi => (secs(60, 90), secs(60, 75)),
        QuadricepsFemoris => (secs(60, 90), secs(60, 90)),
        Hamstrings => (secs(60, 90), secs(60, 75)),
        RectusAbdominis => (secs(30, 60), secs(30, 45)),
        Obliques => (secs(30, 60), secs(30, 45)),
        Trapezius => (secs(60, 75), secs(45, 60)),
        Soleus => (secs(30, 45), secs(30, 45)),
        GluteusMaximus => (secs(60, 90), secs(45, 75)),
    };
    by_gender(ranges, gender)
}

/// Rest after unilateral sets (per side)
pub fn unilateral_rest(muscle: MuscleGroup, gender: Gender) -> RestRange {
    use MuscleGroup::*;

    let ranges = match muscle {
        PectoralisMajor => (secs(60, 90), secs(60, 75)),
        Deltoideus => (secs(60, 75), secs(45, 60)),
        BicepsBrachii => (secs(45, 60), secs(45, 60)),
        TricepsBrachii => (secs(45, 60), secs(45, 60)),
        LatissimusDorsi => (secs(60, 90), secs(60, 75)),
        QuadricepsFemoris => (secs(90, 120), secs(75, 105)),
        Hamstrings => (secs(75, 105), secs(60, 90)),
        RectusAbdominis => (secs(30, 45), secs(30, 45)),
        Obliques => (secs(45, 60), secs(30, 45)),
        Trapezius => (secs(45, 60), secs(45, 60)),
        Soleus => (secs(30, 45), secs(30, 45)),
        GluteusMaximus => (secs(75, 105), secs(60, 90)),
    };
    by_gender(ranges, gender)
}

// ============================================================================
// Programs
// ============================================================================

static PECTORALIS_MAJOR_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Push-Ups", "Hold a rigid plank from head to heels and touch the chest to the floor."),
    compound: mv("Barbell Bench Press", "Pin the shoulder blades back and lower the bar to mid-chest."),
    isolation: mv("Cable Fly", "Keep a soft bend in the elbows and hug the handles together at chest height."),
    unilateral: mv("Single-Arm Dumbbell Press", "Brace hard so the torso does not rotate toward the weight."),
    cues: &[
        "Retract and depress the scapulae before unracking.",
        "Keep the elbows at roughly 45 degrees to the torso.",
        "Drive the feet into the floor to create leg drive.",
        "Lower under control with a two-second eccentric.",
    ],
};

static PECTORALIS_MAJOR_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Incline Push-Ups", "Hands on a bench, body in one straight line, chest to the edge."),
    compound: mv("Dumbbell Bench Press", "Lower the dumbbells to the sides of the chest with forearms vertical."),
    isolation: mv("Pec Deck Fly", "Squeeze the pads together and pause for a second at full contraction."),
    unilateral: mv("Single-Arm Cable Press", "Stagger the stance and press across the body without twisting."),
    cues: &[
        "Set the shoulder blades down and back before the first rep.",
        "Keep the wrists stacked over the elbows.",
        "Press up and slightly inward to finish over the chest.",
    ],
};

static DELTOIDEUS_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Band Pull-Aparts", "Pull the band to the chest with straight arms, squeezing the rear delts."),
    compound: mv("Standing Overhead Press", "Squeeze the glutes and press in a straight line, head through at the top."),
    isolation: mv("Dumbbell Lateral Raise", "Lead with the elbows and stop at shoulder height."),
    unilateral: mv("Single-Arm Landmine Press", "Press up and forward along the arc of the bar, ribs down."),
    cues: &[
        "Stack the wrists over the elbows at the bottom.",
        "Keep the ribs down to avoid overarching the lower back.",
        "Finish with the biceps beside the ears.",
    ],
};

static DELTOIDEUS_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Arm Circles", "Small to large circles in both directions to warm the shoulder joint."),
    compound: mv("Seated Dumbbell Shoulder Press", "Back against the pad, press up without clashing the dumbbells."),
    isolation: mv("Cable Lateral Raise", "Keep constant tension and raise to shoulder height with a slight lean."),
    unilateral: mv("Single-Arm Arnold Press", "Rotate the palm outward as you press and control the return."),
    cues: &[
        "Keep the neck long and the shoulders away from the ears.",
        "Raise with the elbows slightly bent and in front of the torso.",
        "Control the lowering phase for two to three seconds.",
    ],
};

static BICEPS_BRACHII_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Light Band Curls", "Easy tempo and full range to get blood into the elbows."),
    compound: mv("Barbell Curl", "Pin the elbows at the sides and curl without swinging the torso."),
    isolation: mv("Incline Dumbbell Curl", "Let the arms hang behind the torso to stretch the long head."),
    unilateral: mv("Single-Arm Preacher Curl", "Keep the armpit snug on the pad and lower to near lockout."),
    cues: &[
        "Keep the elbows fixed slightly in front of the hips.",
        "Supinate the wrist fully at the top.",
        "Lower for three seconds to load the eccentric.",
        "Avoid rocking the hips to start the rep.",
    ],
};

static BICEPS_BRACHII_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Resistance Band Curls", "Light band, slow reps, elbows close to the body."),
    compound: mv("EZ-Bar Curl", "Grip the angled part of the bar and curl to upper chest height."),
    isolation: mv("Hammer Curl", "Neutral grip, thumbs up, curl without shrugging."),
    unilateral: mv("Concentration Curl", "Brace the elbow against the inner thigh and squeeze at the top."),
    cues: &[
        "Keep the shoulders relaxed and down.",
        "Move only at the elbow joint.",
        "Squeeze the biceps for a one-second pause at the top.",
    ],
};

static TRICEPS_BRACHII_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Band Pushdowns", "Light band, elbows tucked, full extension on every rep."),
    compound: mv("Close-Grip Bench Press", "Hands shoulder-width apart, elbows tucked close to the ribs."),
    isolation: mv("Overhead Cable Extension", "Keep the elbows pointed forward and stretch deep behind the head."),
    unilateral: mv("Single-Arm Cable Pushdown", "Lock the upper arm against the side and extend fully."),
    cues: &[
        "Keep the upper arms still throughout the set.",
        "Lock out fully to shorten the triceps completely.",
        "Control the stretch without letting the elbows flare.",
    ],
};

static TRICEPS_BRACHII_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Bench Dips", "Shoulders down, lower only until the upper arms are parallel to the floor."),
    compound: mv("Cable Rope Pushdown", "Split the rope at the bottom and squeeze the triceps."),
    isolation: mv("Dumbbell Skull Crusher", "Lower the dumbbells beside the head with the elbows pointing up."),
    unilateral: mv("Single-Arm Dumbbell Kickback", "Hinge forward, keep the upper arm parallel to the floor, extend back."),
    cues: &[
        "Tuck the elbows and keep them close to the body.",
        "Pause at full lockout for a one-count.",
        "Keep the wrists neutral to protect the elbows.",
        "Use a slow negative on every rep.",
    ],
};

static LATISSIMUS_DORSI_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Scapular Pull-Ups", "Hang and depress the shoulder blades without bending the arms."),
    compound: mv("Weighted Pull-Up", "Drive the elbows down to the back pockets and bring the chest to the bar."),
    isolation: mv("Straight-Arm Cable Pulldown", "Hinge slightly, keep the arms straight and sweep the bar to the thighs."),
    unilateral: mv("Single-Arm Dumbbell Row", "Pull the dumbbell toward the hip, not the chest."),
    cues: &[
        "Start every pull by depressing the scapulae.",
        "Pull with the elbows, not the hands.",
        "Keep the chest up and avoid rounding the upper back.",
        "Allow a full stretch at the top of each rep.",
    ],
};

static LATISSIMUS_DORSI_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Band Lat Pulldowns", "Kneel under an anchored band and pull the elbows to the ribs."),
    compound: mv("Lat Pulldown", "Lean back slightly and pull the bar to the upper chest."),
    isolation: mv("Cable Pullover", "Keep the arms long and arc the rope down to the hips."),
    unilateral: mv("Single-Arm Seated Cable Row", "Sit tall and row the handle to the hip without twisting."),
    cues: &[
        "Lead each rep with the elbows.",
        "Keep the shoulders away from the ears at the bottom.",
        "Pause with the bar at the upper chest before returning.",
    ],
};

static QUADRICEPS_FEMORIS_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Bodyweight Squats", "Sit between the heels with the chest up."),
    compound: mv("Barbell Back Squat", "Brace, break at the hips and knees together, and hit depth."),
    isolation: mv("Leg Extension", "Pause at full knee extension and lower slowly."),
    unilateral: mv("Bulgarian Split Squat", "Keep the front shin near vertical and drop the back knee straight down."),
    cues: &[
        "Keep the knees tracking over the toes.",
        "Hold a neutral spine from setup to lockout.",
        "Push the floor away through the whole foot.",
        "Reach full depth without losing the brace.",
    ],
};

static QUADRICEPS_FEMORIS_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Goblet Squat", "Hold a light bell at the chest and sit deep between the knees."),
    compound: mv("Leg Press", "Feet shoulder-width apart, lower until the knees reach ninety degrees."),
    isolation: mv("Leg Extension", "Point the toes up and squeeze the quads at the top."),
    unilateral: mv("Reverse Lunge", "Step back, lower the back knee softly and drive through the front heel."),
    cues: &[
        "Keep the knees in line with the second toe.",
        "Control the descent for two to three seconds.",
        "Drive up through the midfoot and heel.",
    ],
};

static HAMSTRINGS_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Leg Swings", "Swing front to back, gradually increasing the range."),
    compound: mv("Romanian Deadlift", "Push the hips back with soft knees until you feel a deep stretch."),
    isolation: mv("Lying Leg Curl", "Keep the hips pressed into the pad and curl the heels to the glutes."),
    unilateral: mv("Single-Leg Romanian Deadlift", "Hinge on one leg and keep the hips square to the floor."),
    cues: &[
        "Hinge at the hips, not the lower back.",
        "Keep the bar close to the legs the whole way.",
        "Stop the descent when the hips stop moving back.",
        "Squeeze the glutes to finish the lockout.",
    ],
};

static HAMSTRINGS_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Glute Bridge March", "Hold a bridge and alternate lifting the feet."),
    compound: mv("Dumbbell Romanian Deadlift", "Slide the dumbbells down the thighs with a flat back."),
    isolation: mv("Seated Leg Curl", "Curl under control and pause when the heels are beneath the seat."),
    unilateral: mv("Single-Leg Hip Thrust", "Drive through the planted heel and keep the pelvis level."),
    cues: &[
        "Keep a slight bend in the knees throughout.",
        "Feel the stretch in the back of the thighs, not the back.",
        "Drive the hips forward to stand tall.",
    ],
};

static RECTUS_ABDOMINIS_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Dead Bug", "Press the lower back into the floor as the limbs extend."),
    compound: mv("Hanging Leg Raise", "Curl the pelvis up toward the ribs rather than just lifting the legs."),
    isolation: mv("Cable Crunch", "Kneel and crunch the ribs toward the hips while the hips stay still."),
    unilateral: mv("Single-Leg V-Up", "Reach one leg and both hands up together, then lower with control."),
    cues: &[
        "Tilt the pelvis backward to engage the lower abs.",
        "Exhale fully at peak contraction.",
        "Move slowly and avoid using momentum.",
    ],
};

static RECTUS_ABDOMINIS_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Cat-Cow", "Move slowly through spinal flexion and extension."),
    compound: mv("Ab Wheel Rollout", "Roll out from the knees only as far as you can keep the back flat."),
    isolation: mv("Reverse Crunch", "Roll the hips off the floor by curling the spine."),
    unilateral: mv("Single-Leg Lowering", "Keep one leg vertical and lower the other without arching."),
    cues: &[
        "Keep the ribs pulled down toward the pelvis.",
        "Breathe out as the spine flexes.",
        "Stop the range before the lower back arches.",
        "Control every lowering phase.",
    ],
};

static OBLIQUES_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Standing Torso Twists", "Rotate gently side to side with relaxed arms."),
    compound: mv("Landmine Rotation", "Pivot the back foot and rotate the bar from hip to hip with straight arms."),
    isolation: mv("Cable Woodchopper", "Rotate from the trunk, high to low, keeping the arms long."),
    unilateral: mv("Suitcase Carry", "Hold one heavy weight and walk tall without leaning."),
    cues: &[
        "Rotate through the upper back, not the lower back.",
        "Keep the hips stable during anti-rotation work.",
        "Exhale as you rotate against resistance.",
    ],
};

static OBLIQUES_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Side Plank Hold", "Stack the feet and lift the hips into a straight line."),
    compound: mv("Pallof Press", "Press the handle straight out and resist the pull of the cable."),
    isolation: mv("Russian Twist", "Lean back slightly and rotate the ribs, not just the arms."),
    unilateral: mv("Single-Arm Farmer's Carry", "Walk with the shoulders level and the core braced."),
    cues: &[
        "Keep the torso tall and resist side-bending.",
        "Breathe out through each rotation.",
        "Move with control rather than speed.",
        "Keep the pelvis square to the front.",
    ],
};

static TRAPEZIUS_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Shoulder Rolls", "Roll the shoulders up, back and down in big circles."),
    compound: mv("Barbell Shrug", "Shrug straight up toward the ears and hold for a second."),
    isolation: mv("Face Pull", "Pull the rope toward the eyes with the elbows high, rotating the hands back."),
    unilateral: mv("Single-Arm Dumbbell Shrug", "Lean slightly away from the weight and shrug to full height."),
    cues: &[
        "Elevate straight up rather than rolling the shoulders.",
        "Keep the neck neutral and the chin tucked.",
        "Pause at the top before lowering.",
    ],
};

static TRAPEZIUS_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Wall Slides", "Slide the arms up the wall while keeping the back flat."),
    compound: mv("Dumbbell Shrug", "Let the dumbbells hang and lift the shoulders toward the ears."),
    isolation: mv("Prone Y-Raise", "Lie face down on an incline bench and raise the arms into a Y."),
    unilateral: mv("Single-Arm Cable Shrug", "Stand side-on to the cable and shrug up and slightly back."),
    cues: &[
        "Keep the arms long and relaxed.",
        "Squeeze the shoulder blades together at the top.",
        "Lower slowly to a full stretch.",
        "Avoid pushing the head forward.",
    ],
};

static SOLEUS_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Ankle Circles", "Rotate each ankle through its full range."),
    compound: mv("Seated Calf Raise", "Knees bent at ninety degrees, rise high and stretch deep."),
    isolation: mv("Bent-Knee Calf Press", "On the leg press, keep the knees slightly bent and press through the balls of the feet."),
    unilateral: mv("Single-Leg Bent-Knee Calf Raise", "Hold a support, keep the knee soft and rise as high as possible."),
    cues: &[
        "Keep the knees bent to bias the soleus over the gastrocnemius.",
        "Pause for two seconds in the bottom stretch.",
        "Rise onto the big-toe side of the foot.",
        "Use a slow, controlled tempo for high reps.",
    ],
};

static SOLEUS_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Toe Walks", "Walk on the balls of the feet for thirty seconds."),
    compound: mv("Seated Dumbbell Calf Raise", "Rest the dumbbells on the knees and rise through the full range."),
    isolation: mv("Bent-Knee Wall Calf Raise", "Lean into a wall with the knees soft and raise the heels."),
    unilateral: mv("Single-Leg Seated Calf Raise", "Work one leg at a time with a pause at the top."),
    cues: &[
        "Keep the knees flexed throughout.",
        "Stretch fully at the bottom of each rep.",
        "Keep the ankle from rolling outward.",
    ],
};

static GLUTEUS_MAXIMUS_MALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Glute Bridges", "Drive the hips up and squeeze the glutes for a one-count."),
    compound: mv("Barbell Hip Thrust", "Tuck the chin and ribs, lock out with the shins vertical."),
    isolation: mv("Cable Kickback", "Kick back and slightly out without arching the lower back."),
    unilateral: mv("Step-Up", "Drive through the heel on a knee-height box with no push from the back leg."),
    cues: &[
        "Tuck the pelvis under at lockout.",
        "Keep the shins vertical at the top of the thrust.",
        "Drive through the heels, not the toes.",
        "Hold the peak contraction for one second.",
    ],
};

static GLUTEUS_MAXIMUS_FEMALE: ExerciseProgram = ExerciseProgram {
    warm_up: mv("Clamshells", "Keep the feet together and lift the top knee without rocking the hips."),
    compound: mv("Dumbbell Hip Thrust", "Shoulders on a bench, drive the hips up until the torso is flat."),
    isolation: mv("Glute Kickback Machine", "Push the platform back with the heel and squeeze."),
    unilateral: mv("Curtsy Lunge", "Step back and across, keeping the front knee over the toes."),
    cues: &[
        "Keep the ribs down and the pelvis tucked at the top.",
        "Pause and squeeze at full hip extension.",
        "Push through the whole foot with the weight in the heel.",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_program_has_three_or_four_cues() {
        for muscle in MuscleGroup::ALL {
            for gender in Gender::ALL {
                let cues = program(muscle, gender).cues;
                assert!((3..=4).contains(&cues.len()), "{muscle} / {gender} has {} cues", cues.len());
            }
        }
    }

    #[test]
    fn test_programs_differ_by_gender() {
        for muscle in MuscleGroup::ALL {
            assert_ne!(program(muscle, Gender::Male), program(muscle, Gender::Female), "{muscle}");
        }
    }

    #[test]
    fn test_trunk_sets_ignore_gender() {
        for muscle in [MuscleGroup::RectusAbdominis, MuscleGroup::Obliques] {
            assert_eq!(set_scheme(muscle, Gender::Male), set_scheme(muscle, Gender::Female));
        }
    }

    #[test]
    fn test_female_volume_is_not_higher_in_most_groups() {
        let lower_or_equal = MuscleGroup::ALL
            .iter()
            .filter(|&&muscle| {
                let m = set_scheme(muscle, Gender::Male);
                let f = set_scheme(muscle, Gender::Female);
                f.compound <= m.compound && f.isolation <= m.isolation && f.unilateral <= m.unilateral
            })
            .count();
        assert!(lower_or_equal > MuscleGroup::ALL.len() / 2);
    }

    #[test]
    fn test_rest_ranges_are_ordered() {
        for muscle in MuscleGroup::ALL {
            for gender in Gender::ALL {
                for range in [
                    compound_rest(muscle, gender),
                    isolation_rest(muscle, gender),
                    unilateral_rest(muscle, gender),
                ] {
                    assert!(range.min_secs < range.max_secs, "{muscle} / {gender}");
                }
            }
        }
    }
}
