//! Reply service - chains engine calls into the message posted after a form

use crate::services::forms::Submission;
use vitalbot_shared::exercise_catalog::{program, set_scheme};
use vitalbot_shared::training::{guide_for, plan_for, RestProfile};
use vitalbot_shared::types::{
    LongevitySubmission, ProgressSubmission, TrainingSubmission, VitalViewSubmission,
};
use vitalbot_shared::{
    bmi_status, bmr_status, estimate_life_expectancy, ideal_weight_feedback, render,
    ExerciseLinks, LoadPrescription, LongevityFormula,
};

/// Reply service
pub struct ReplyService;

impl ReplyService {
    /// Full reply for a validated submission
    pub fn compose(user: &str, submission: &Submission, links: &ExerciseLinks) -> String {
        match submission {
            Submission::Longevity(form) => Self::longevity(user, form),
            Submission::VitalView(form) => Self::vital_view(user, form),
            Submission::Training(form) => Self::training(user, form, links),
            Submission::Progress(form) => Self::progress(user, form),
        }
    }

    /// "Here's what you submitted" header with one bullet per field
    fn echo(user: &str, fields: &[(&str, String)]) -> String {
        let mut message = format!("✅ Thanks <@{user}>! Here's what you submitted:");
        for (label, value) in fields {
            message.push_str(&format!("\n• {label}: `{value}`"));
        }
        message
    }

    fn longevity(user: &str, form: &LongevitySubmission) -> String {
        let smokes = if form.tobacco_use { "Yes" } else { "No" };
        let echo = Self::echo(
            user,
            &[
                ("Gender", form.gender.to_string()),
                ("Age", form.age.to_string()),
                ("Smokes", smokes.to_string()),
                ("LDL Cholesterol", form.ldl_cholesterol.to_string()),
            ],
        );
        let estimate = render(estimate_life_expectancy(&form.profile(), LongevityFormula::Banded));
        format!("{echo}\n{estimate}")
    }

    fn vital_view(user: &str, form: &VitalViewSubmission) -> String {
        let echo = Self::echo(
            user,
            &[
                ("Gender", form.gender.to_string()),
                ("Age", form.age.to_string()),
                ("Height in cm", form.height_cm.to_string()),
                ("Weight in kg", form.weight_kg.to_string()),
            ],
        );
        let metrics = form.body_metrics();
        let bmi = render(bmi_status(metrics.height_cm, metrics.weight_kg));
        let ideal = render(ideal_weight_feedback(metrics.gender, metrics.height_cm, metrics.weight_kg));
        let bmr = render(bmr_status(&metrics));
        format!("{echo}\n{bmi}\n{ideal}\n{bmr}")
    }

    fn training(user: &str, form: &TrainingSubmission, links: &ExerciseLinks) -> String {
        let echo = Self::echo(
            user,
            &[
                ("Gender", form.gender.to_string()),
                ("Target muscle", form.muscle_group.to_string()),
                (
                    "Training weight",
                    form.training_weight.clone().unwrap_or_else(|| "Not provided".to_string()),
                ),
            ],
        );

        let (muscle, gender) = (form.muscle_group, form.gender);
        let cues = program(muscle, gender)
            .cues
            .iter()
            .map(|cue| format!("• {cue}"))
            .collect::<Vec<_>>()
            .join("\n");
        let sections = [
            ("🫁 Breathing", muscle.breathing_cue().to_string()),
            ("📋 Exercise Plan", plan_for(muscle, gender).to_string()),
            ("🔗 Exercise Guide", guide_for(muscle, gender, links)),
            ("🎯 Biomechanical Cues", cues),
            ("🔁 Sets", set_scheme(muscle, gender).to_string()),
            ("⏱️ Rest & Fiber Bias", RestProfile::for_selection(Some(muscle), Some(gender)).to_string()),
            ("🏋️ Reps & Load", LoadPrescription::for_request(&form.request()).to_string()),
        ];

        let mut message = echo;
        for (title, body) in sections {
            message.push_str(&format!("\n\n*{title}*\n{body}"));
        }
        message
    }

    fn progress(user: &str, form: &ProgressSubmission) -> String {
        let echo = Self::echo(user, &[("Completion", form.completion.label())]);
        format!("{echo}\n{}", form.completion.message())
    }
}
