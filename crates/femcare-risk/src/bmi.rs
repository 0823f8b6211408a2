//! Body Mass Index
//!
//! BMI is weight (kg) over height (m) squared, rounded to one decimal place.
//! The display category is a separate lookup and never feeds risk scoring.

use crate::{Result, RiskError};
use serde::{Deserialize, Serialize};

/// Lower bound of the Normal band
pub const NORMAL_BMI_MIN: f64 = 18.5;

/// Upper bound of the Normal band (inclusive)
pub const NORMAL_BMI_MAX: f64 = 24.9;

/// Compute BMI rounded to one decimal place
///
/// Height and weight must be positive; range checks against the intake
/// domain happen in [`crate::IntakeForm::validate`].
pub fn body_mass_index(height_cm: i32, weight_kg: i32) -> Result<f64> {
    if height_cm <= 0 {
        return Err(RiskError::InvalidInput {
            field: "height_cm",
            value: height_cm.into(),
            min: 1,
            max: i32::MAX.into(),
        });
    }
    if weight_kg <= 0 {
        return Err(RiskError::InvalidInput {
            field: "weight_kg",
            value: weight_kg.into(),
            min: 1,
            max: i32::MAX.into(),
        });
    }

    let height_m = f64::from(height_cm) / 100.0;
    let raw = f64::from(weight_kg) / (height_m * height_m);
    Ok(round_to_tenth(raw))
}

// Exact halves go to the even neighbour: 31.25 -> 31.2, 8.75 -> 8.8
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// BMI display band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to 24.9
    Normal,
    /// Above 24.9
    Overweight,
}

impl BmiCategory {
    /// Look up the display band for a (rounded) BMI value
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_BMI_MIN {
            BmiCategory::Underweight
        } else if bmi <= NORMAL_BMI_MAX {
            BmiCategory::Normal
        } else {
            BmiCategory::Overweight
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
