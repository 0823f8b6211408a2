//! Intake Form and Validated Health Profile
//!
//! [`IntakeForm`] is everything the screening questionnaire collects.
//! [`HealthProfile`] is the fixed-shape record the classifier consumes; it
//! can only be obtained through validation, so every profile is in-domain.
//!
//! # Domains
//!
//! - age: 12 to 50 years
//! - height: 120 to 200 cm
//! - weight: 30 to 150 kg

use crate::bmi::body_mass_index;
use crate::{Result, RiskError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted age in years
pub const AGE_RANGE: RangeInclusive<i32> = 12..=50;

/// Accepted height in centimetres
pub const HEIGHT_CM_RANGE: RangeInclusive<i32> = 120..=200;

/// Accepted weight in kilograms
pub const WEIGHT_KG_RANGE: RangeInclusive<i32> = 30..=150;

fn check_domain(field: &'static str, value: i32, range: &RangeInclusive<i32>) -> Result<i32> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(RiskError::InvalidInput {
            field,
            value: value.into(),
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        })
    }
}

/// Menstrual cycle regularity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CycleRegularity {
    /// 28-35 days
    #[default]
    Regular,
    /// Shorter than 28 or longer than 35 days
    Irregular,
}

impl CycleRegularity {
    pub fn description(&self) -> &'static str {
        match self {
            CycleRegularity::Regular => "Regular (28-35 days)",
            CycleRegularity::Irregular => "Irregular (<28 or >35 days)",
        }
    }
}

/// Menstrual flow intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FlowIntensity {
    #[default]
    Light,
    Medium,
    Heavy,
}

/// Menstrual pain level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MenstrualPain {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
}

/// Menstrual history section of the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenstrualHistory {
    pub cycle: CycleRegularity,
    pub flow: FlowIntensity,
    pub pain: MenstrualPain,
}

/// Symptoms checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symptoms {
    /// Acne or oily skin
    pub acne: bool,
    /// Excess facial or body hair
    pub hair_growth: bool,
    /// Hair thinning or loss
    pub hair_loss: bool,
    /// Unexplained weight gain
    pub weight_gain: bool,
    /// Food cravings
    pub cravings: bool,
    /// Chronic fatigue
    pub fatigue: bool,
    /// Mood swings
    pub mood_swings: bool,
    /// Dark skin patches (acanthosis nigricans, a sign of insulin resistance)
    pub dark_skin_patches: bool,
}

impl Symptoms {
    /// Checked symptoms that do not contribute to the risk score
    pub fn unscored(&self) -> Vec<&'static str> {
        [
            (self.hair_loss, "Hair Thinning/Loss"),
            (self.cravings, "Food Cravings"),
            (self.mood_swings, "Mood Swings"),
            (self.dark_skin_patches, "Dark Skin Patches"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }
}

/// Raw screening questionnaire
///
/// Numeric fields are signed so out-of-domain values (including negative
/// ones) reach [`IntakeForm::validate`] instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    /// Used only for the greeting
    pub name: Option<String>,
    pub age: i32,
    pub height_cm: i32,
    pub weight_kg: i32,
    pub menstrual: MenstrualHistory,
    pub symptoms: Symptoms,
}

impl Default for IntakeForm {
    fn default() -> Self {
        IntakeForm {
            name: None,
            age: 25,
            height_cm: 165,
            weight_kg: 60,
            menstrual: MenstrualHistory::default(),
            symptoms: Symptoms::default(),
        }
    }
}

impl IntakeForm {
    /// Check every numeric field against its domain and build the profile
    ///
    /// Fields are checked in order age, height, weight; the first failure
    /// is returned. Values are never clamped.
    pub fn validate(&self) -> Result<HealthProfile> {
        let profile = HealthProfile::new(self.age, self.height_cm, self.weight_kg)?
            .with_irregular_cycle(self.menstrual.cycle == CycleRegularity::Irregular)
            .with_hair_growth(self.symptoms.hair_growth)
            .with_acne(self.symptoms.acne)
            .with_weight_gain(self.symptoms.weight_gain)
            .with_fatigue(self.symptoms.fatigue);
        Ok(profile)
    }

    /// Checked symptoms that are collected but carry no scoring weight
    pub fn unscored_findings(&self) -> Vec<&'static str> {
        self.symptoms.unscored()
    }
}

/// Validated input to a risk classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthProfile {
    age: i32,
    height_cm: i32,
    weight_kg: i32,
    bmi: f64,
    irregular_cycle: bool,
    hair_growth: bool,
    acne: bool,
    weight_gain: bool,
    fatigue: bool,
}

impl HealthProfile {
    /// Validate measurements and compute BMI; all symptom flags start unset
    pub fn new(age: i32, height_cm: i32, weight_kg: i32) -> Result<Self> {
        let age = check_domain("age", age, &AGE_RANGE)?;
        let height_cm = check_domain("height_cm", height_cm, &HEIGHT_CM_RANGE)?;
        let weight_kg = check_domain("weight_kg", weight_kg, &WEIGHT_KG_RANGE)?;
        let bmi = body_mass_index(height_cm, weight_kg)?;

        Ok(HealthProfile {
            age,
            height_cm,
            weight_kg,
            bmi,
            irregular_cycle: false,
            hair_growth: false,
            acne: false,
            weight_gain: false,
            fatigue: false,
        })
    }

    pub fn with_irregular_cycle(mut self, value: bool) -> Self {
        self.irregular_cycle = value;
        self
    }

    pub fn with_hair_growth(mut self, value: bool) -> Self {
        self.hair_growth = value;
        self
    }

    pub fn with_acne(mut self, value: bool) -> Self {
        self.acne = value;
        self
    }

    pub fn with_weight_gain(mut self, value: bool) -> Self {
        self.weight_gain = value;
        self
    }

    pub fn with_fatigue(mut self, value: bool) -> Self {
        self.fatigue = value;
        self
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn height_cm(&self) -> i32 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> i32 {
        self.weight_kg
    }

    /// BMI rounded to one decimal place
    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn irregular_cycle(&self) -> bool {
        self.irregular_cycle
    }

    pub fn hair_growth(&self) -> bool {
        self.hair_growth
    }

    pub fn acne(&self) -> bool {
        self.acne
    }

    pub fn weight_gain(&self) -> bool {
        self.weight_gain
    }

    pub fn fatigue(&self) -> bool {
        self.fatigue
    }
}
