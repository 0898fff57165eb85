//! Health metrics calculations module
//!
//! Turns the answers of the "Check Longevity" and "Vital View" forms into
//! the feedback lines the bot posts: estimated life expectancy, BMI status,
//! ideal body weight and basal metabolic rate.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: identical inputs always give identical text
//! 2. **Structured First**: each metric has a typed result with `Display`,
//!    the string functions are thin renderers over it
//! 3. **Soft Failure**: missing input renders as an empty line, a bad gender
//!    as a readable message, never a panic

use crate::errors::{ensure_finite, render, EngineError, Outcome};
use crate::models::{BodyMetrics, Gender, HealthProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Round half-to-even at the given number of decimal places
pub fn round_places(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

// ============================================================================
// Life Expectancy
// ============================================================================

const LONGEVITY_ATTRIBUTION: &str = "— Source: Dr. V. Mohan, MD, FACP, FRCP | Padma Shri (2012) | \
Chairman, Diabetes Research Centre | Member, WHO Expert Panel | Lead, ICMR-INDIAB 2025";

/// Age after which the longevity formulas start deducting years
pub const AGE_PENALTY_THRESHOLD: u32 = 40;

/// Longevity formula variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongevityFormula {
    /// Banded LDL deductions with a multiplicative risk reduction
    #[default]
    Banded,
    /// Earlier model: finer LDL bands, linear age penalty, risk as a divisor
    Actuarial,
}

impl LongevityFormula {
    /// Base life expectancy; `None` is an unspecified gender
    pub fn base_years(&self, gender: Option<Gender>) -> f64 {
        match (self, gender) {
            (LongevityFormula::Banded, Some(Gender::Male)) => 69.0,
            (LongevityFormula::Banded, Some(Gender::Female)) => 72.0,
            (LongevityFormula::Banded, None) => 70.0,
            (LongevityFormula::Actuarial, Some(Gender::Male)) => 70.6,
            (LongevityFormula::Actuarial, Some(Gender::Female)) => 74.4,
            (LongevityFormula::Actuarial, None) => 72.5,
        }
    }

    /// Years deducted for LDL cholesterol (mg/dL)
    pub fn ldl_score(&self, ldl: u32) -> f64 {
        match self {
            LongevityFormula::Banded => match ldl {
                0..=99 => 0.0,
                100..=129 => -1.0,
                130..=159 => -2.0,
                _ => -3.0,
            },
            LongevityFormula::Actuarial => match ldl {
                0..=99 => 0.0,
                100..=129 => -0.5,
                130..=159 => -1.5,
                160..=189 => -2.5,
                _ => -4.0,
            },
        }
    }

    /// Years deducted for tobacco use
    pub fn tobacco_score(&self, tobacco_use: bool) -> f64 {
        match (self, tobacco_use) {
            (_, false) => 0.0,
            (LongevityFormula::Banded, true) => -5.0,
            (LongevityFormula::Actuarial, true) => -6.5,
        }
    }

    /// Years deducted for age past [`AGE_PENALTY_THRESHOLD`]
    pub fn age_penalty(&self, age: u32) -> f64 {
        let excess = f64::from(age.saturating_sub(AGE_PENALTY_THRESHOLD));
        match self {
            LongevityFormula::Banded => -(excess.powf(1.05) * 0.09),
            LongevityFormula::Actuarial => -(excess * 0.12),
        }
    }

    /// Combined risk multiplier, 1.0 means no extra risk
    pub fn risk_multiplier(&self, tobacco_use: bool, ldl: u32) -> f64 {
        match self {
            LongevityFormula::Banded => {
                let tobacco = if tobacco_use { 1.1 } else { 1.0 };
                let ldl = if ldl > 160 { 0.05 } else { 0.0 };
                tobacco + ldl
            }
            LongevityFormula::Actuarial => {
                let tobacco = if tobacco_use { 0.15 } else { 0.0 };
                let ldl = if ldl >= 160 { 0.04 } else { 0.0 };
                1.0 + tobacco + ldl
            }
        }
    }

    /// Apply the risk multiplier to the adjusted expectancy
    fn apply_risk(&self, adjusted: f64, risk: f64) -> f64 {
        match self {
            LongevityFormula::Banded => adjusted * (1.0 - (risk - 1.0)),
            LongevityFormula::Actuarial => adjusted / risk,
        }
    }
}

/// Estimated life expectancy split into years and months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeExpectancy {
    pub years: i64,
    pub months: i64,
}

impl LifeExpectancy {
    /// Split fractional years, carrying a rounded-up 12th month into the years
    pub fn from_years(value: f64) -> Self {
        let years = value.trunc();
        let months = ((value - years) * 12.0).round_ties_even() as i64;
        let years = years as i64;
        if months == 12 {
            Self { years: years + 1, months: 0 }
        } else {
            Self { years, months }
        }
    }
}

impl fmt::Display for LifeExpectancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Estimated Life Expectancy: {} years and {} months — \
             Every healthy choice empowers your future. \
             This isn't just a number—it's a nudge to live fully, love deeply, and thrive daily. \
             Shine on, because your journey matters. {}",
            self.years, self.months, LONGEVITY_ATTRIBUTION
        )
    }
}

/// Estimate life expectancy for a profile
pub fn estimate_life_expectancy(
    profile: &HealthProfile,
    formula: LongevityFormula,
) -> Outcome<LifeExpectancy> {
    estimate_for(
        Some(profile.gender),
        profile.age,
        profile.tobacco_use,
        profile.ldl_cholesterol,
        formula,
    )
}

/// Estimate life expectancy, allowing an unspecified gender
pub fn estimate_for(
    gender: Option<Gender>,
    age: u32,
    tobacco_use: bool,
    ldl: u32,
    formula: LongevityFormula,
) -> Outcome<LifeExpectancy> {
    let adjusted = formula.base_years(gender)
        + formula.ldl_score(ldl)
        + formula.tobacco_score(tobacco_use)
        + formula.age_penalty(age);
    let risk = formula.risk_multiplier(tobacco_use, ldl);
    let value = ensure_finite(formula.apply_risk(adjusted, risk), "life expectancy")?;
    Ok(LifeExpectancy::from_years(value))
}

/// Life expectancy line for the longevity form
///
/// Returns an empty string when any answer is missing. `tobacco_use` is the
/// Yes/No answer; an unrecognised gender falls back to the unspecified base.
pub fn life_expectancy_message(
    gender: Option<&str>,
    age: Option<u32>,
    tobacco_use: Option<&str>,
    ldl: Option<u32>,
) -> String {
    let (Some(gender), Some(age), Some(tobacco_use), Some(ldl)) = (gender, age, tobacco_use, ldl)
    else {
        return render::<LifeExpectancy>(Err(EngineError::MissingInput));
    };
    let gender = gender.parse::<Gender>().ok();
    let tobacco_use = tobacco_use.trim().eq_ignore_ascii_case("yes");
    render(estimate_for(gender, age, tobacco_use, ldl, LongevityFormula::default()))
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI band used for the bot's advisory label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiBand {
    Underweight,
    Optimal,
    Elevated,
    Overweight,
    Obese,
}

impl BmiBand {
    /// Advisory label shown next to the BMI value
    pub fn label(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Underweight (Focus on Lean Mass Gain)",
            BmiBand::Optimal => "Optimal (Maintain & Optimize)",
            BmiBand::Elevated => "Elevated (Monitor Body Composition)",
            BmiBand::Overweight => "Overweight (Prioritize Fat Loss)",
            BmiBand::Obese => "Obese (Metabolic Recalibration Needed)",
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a (rounded) BMI, upper bounds exclusive
pub fn classify_bmi(bmi: f64) -> BmiBand {
    if bmi < 18.5 {
        BmiBand::Underweight
    } else if bmi < 23.0 {
        BmiBand::Optimal
    } else if bmi < 25.0 {
        BmiBand::Elevated
    } else if bmi < 30.0 {
        BmiBand::Overweight
    } else {
        BmiBand::Obese
    }
}

/// BMI rounded to one decimal with its band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiStatus {
    pub value: f64,
    pub band: BmiBand,
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BMI: {:.1} - {}", self.value, self.band.label())
    }
}

/// BMI status; zero height or weight counts as missing
pub fn bmi_status(height_cm: f64, weight_kg: f64) -> Outcome<BmiStatus> {
    if height_cm == 0.0 || weight_kg == 0.0 {
        return Err(EngineError::MissingInput);
    }
    let bmi = ensure_finite(calculate_bmi(weight_kg, height_cm), "BMI")?;
    let value = round_places(bmi, 1);
    Ok(BmiStatus {
        value,
        band: classify_bmi(value),
    })
}

/// BMI line for the vital view reply
pub fn calculate_bmi_status(height_cm: f64, weight_kg: f64) -> String {
    render(bmi_status(height_cm, weight_kg))
}

// ============================================================================
// Ideal Weight Calculations
// ============================================================================

/// Which way the current weight has to move to reach the ideal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightDirection {
    Gain,
    Lose,
    Maintain,
}

impl WeightDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightDirection::Gain => "gain",
            WeightDirection::Lose => "lose",
            WeightDirection::Maintain => "maintain",
        }
    }
}

/// Encouragement tag picked from the ideal weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealWeightTag {
    BrilliantlyLean,
    SmartlyFit,
    StrongGenius,
}

impl IdealWeightTag {
    pub fn for_ideal_weight(ideal_weight_kg: f64) -> Self {
        if ideal_weight_kg < 50.0 {
            IdealWeightTag::BrilliantlyLean
        } else if ideal_weight_kg < 70.0 {
            IdealWeightTag::SmartlyFit
        } else {
            IdealWeightTag::StrongGenius
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IdealWeightTag::BrilliantlyLean => "Brilliantly Lean!",
            IdealWeightTag::SmartlyFit => "Smartly Fit!",
            IdealWeightTag::StrongGenius => "Strong Genius!",
        }
    }
}

/// Ideal body weight: BMI-style coefficient times height(m)²
///
/// Coefficient 22 for men, 21 for women.
pub fn ideal_weight_kg(height_cm: f64, gender: Gender) -> f64 {
    let height_m = height_cm / 100.0;
    let coefficient = match gender {
        Gender::Male => 22.0,
        Gender::Female => 21.0,
    };
    coefficient * height_m * height_m
}

/// Distance from the ideal body weight, split for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightFeedback {
    pub ideal_weight_kg: f64,
    /// Ideal minus current, rounded to grams
    pub difference_kg: f64,
    pub direction: WeightDirection,
    pub tag: IdealWeightTag,
    pub kilograms: u64,
    pub grams: u64,
}

impl fmt::Display for IdealWeightFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag.label();
        if self.direction == WeightDirection::Maintain {
            return write!(
                f,
                "You're exactly at your Ideal Body Weight (IBW): {:.1} kg. {tag}",
                self.ideal_weight_kg
            );
        }

        let mut msg = format!(
            "Ideal Body Weight (IBW): {:.1}kg - {tag}. You need to {} ",
            self.ideal_weight_kg,
            self.direction.as_str()
        );
        if self.kilograms > 0 {
            msg.push_str(&format!("{}kg ", self.kilograms));
        }
        if self.grams > 0 {
            msg.push_str(&format!("{}g. ", self.grams));
        }
        if self.kilograms == 0 && self.grams == 0 {
            msg.push_str("very little.");
        }
        f.write_str(msg.trim())
    }
}

/// Ideal weight feedback for a known gender
pub fn ideal_weight_feedback(
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
) -> Outcome<IdealWeightFeedback> {
    if height_cm == 0.0 || weight_kg == 0.0 {
        return Err(EngineError::MissingInput);
    }
    let ideal = ensure_finite(ideal_weight_kg(height_cm, gender), "ideal body weight")?;
    let difference = ensure_finite(round_places(ideal - weight_kg, 3), "weight difference")?;

    let magnitude = difference.abs();
    let kilograms = magnitude.trunc();
    let grams = ((magnitude - kilograms) * 1000.0).round_ties_even();

    let direction = if difference > 0.0 {
        WeightDirection::Gain
    } else if difference < 0.0 {
        WeightDirection::Lose
    } else {
        WeightDirection::Maintain
    };

    Ok(IdealWeightFeedback {
        ideal_weight_kg: ideal,
        difference_kg: difference,
        direction,
        // Tagged on the value as displayed
        tag: IdealWeightTag::for_ideal_weight(round_places(ideal, 1)),
        kilograms: kilograms as u64,
        grams: grams as u64,
    })
}

/// Ideal body weight line for the vital view reply
pub fn ideal_body_weight_feedback(gender: &str, height_cm: f64, weight_kg: f64) -> String {
    if gender.trim().is_empty() || height_cm == 0.0 || weight_kg == 0.0 {
        return String::new();
    }
    render(
        gender
            .parse::<Gender>()
            .and_then(|gender| ideal_weight_feedback(gender, height_cm, weight_kg)),
    )
}

// ============================================================================
// BMR Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Metabolism band with its status and advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrBand {
    SleepingGiant,
    SweetSpot,
    Unstoppable,
}

impl BmrBand {
    pub fn for_bmr(bmr: i64) -> Self {
        if bmr < 1300 {
            BmrBand::SleepingGiant
        } else if bmr < 1600 {
            BmrBand::SweetSpot
        } else {
            BmrBand::Unstoppable
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            BmrBand::SleepingGiant => {
                "Your BMR is a *sleeping giant* waiting to be awakened. Build that muscle!"
            }
            BmrBand::SweetSpot => {
                "You're in the *sweet spot*. Let’s pump up your training and nutrition for *superhuman* gains!"
            }
            BmrBand::Unstoppable => {
                "Boom! You've got an *unstoppable* metabolism! Use that rocket fuel for max muscle growth!"
            }
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BmrBand::SleepingGiant => {
                "Focus on strength training and increase protein intake to kickstart your metabolism."
            }
            BmrBand::SweetSpot => {
                "Optimize your workout routine and fuel with clean nutrition for explosive muscle gain and fat loss."
            }
            BmrBand::Unstoppable => {
                "Capitalize on your *supercharged* metabolism and unleash your inner beast for maximum muscle growth!"
            }
        }
    }
}

/// Rounded BMR in kcal/day with its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmrStatus {
    pub kcal_per_day: i64,
    pub band: BmrBand,
}

impl fmt::Display for BmrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BMR: {} kcal/day - Status: {} - Advice: {}",
            self.kcal_per_day,
            self.band.status(),
            self.band.advice()
        )
    }
}

/// BMR status for a set of body metrics; zero measurements count as missing
pub fn bmr_status(metrics: &BodyMetrics) -> Outcome<BmrStatus> {
    if metrics.height_cm == 0.0 || metrics.weight_kg == 0.0 || metrics.age == 0 {
        return Err(EngineError::MissingInput);
    }
    let bmr = calculate_bmr_mifflin(metrics.weight_kg, metrics.height_cm, metrics.age, metrics.gender);
    let kcal_per_day = ensure_finite(bmr, "BMR")?.round_ties_even() as i64;
    Ok(BmrStatus {
        kcal_per_day,
        band: BmrBand::for_bmr(kcal_per_day),
    })
}

/// BMR line for the vital view reply
pub fn calculate_bmr_status(gender: &str, height_cm: f64, age: u32, weight_kg: f64) -> String {
    if gender.trim().is_empty() || height_cm == 0.0 || age == 0 || weight_kg == 0.0 {
        return String::new();
    }
    render(gender.parse::<Gender>().and_then(|gender| {
        bmr_status(&BodyMetrics {
            gender,
            height_cm,
            weight_kg,
            age,
        })
    }))
}
