//! Heuristic Weights Configuration
//!
//! Points awarded per risk factor and the score thresholds that separate
//! the three risk levels. Defaults reproduce the reference heuristic; a JSON
//! file may override any subset of fields.
//!
//! ```json
//! { "elevated_bmi": 1.5, "thresholds": { "medium": 2.0, "high": 4.0 } }
//! ```

use crate::{Result, RiskError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Score cut-offs between risk levels (lower bound inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Scores at or above this are at least Medium
    pub medium: f64,
    /// Scores at or above this are High
    pub high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            medium: 2.0,
            high: 4.0,
        }
    }
}

/// Points per factor for the weighted-sum classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Awarded when BMI is strictly above `bmi_threshold`
    pub elevated_bmi: f64,
    pub bmi_threshold: f64,
    /// Awarded when age is strictly below `young_age_below`
    pub young_age: f64,
    pub young_age_below: i32,
    pub irregular_cycle: f64,
    pub hair_growth: f64,
    pub acne: f64,
    pub weight_gain: f64,
    pub fatigue: f64,
    pub thresholds: RiskThresholds,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            elevated_bmi: 1.5,
            bmi_threshold: 25.0,
            young_age: 0.5,
            young_age_below: 25,
            irregular_cycle: 1.5,
            hair_growth: 1.0,
            acne: 1.0,
            weight_gain: 1.0,
            fatigue: 0.5,
            thresholds: RiskThresholds::default(),
        }
    }
}

impl HeuristicWeights {
    /// Parse and validate weights from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let weights: HeuristicWeights = serde_json::from_str(json)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Read, parse and validate a JSON weights file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let weights = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded heuristic weights");
        Ok(weights)
    }

    fn points(&self) -> [(&'static str, f64); 7] {
        [
            ("elevated_bmi", self.elevated_bmi),
            ("young_age", self.young_age),
            ("irregular_cycle", self.irregular_cycle),
            ("hair_growth", self.hair_growth),
            ("acne", self.acne),
            ("weight_gain", self.weight_gain),
            ("fatigue", self.fatigue),
        ]
    }

    /// Highest score a profile can reach
    pub fn max_score(&self) -> f64 {
        self.points().iter().map(|(_, p)| p).sum()
    }

    /// Reject weights that would break ordering or monotonicity
    ///
    /// Points must be finite and non-negative so that setting a symptom can
    /// never lower the score. Thresholds must be finite with
    /// `medium <= high`.
    pub fn validate(&self) -> Result<()> {
        for (name, points) in self.points() {
            if !points.is_finite() || points < 0.0 {
                return Err(RiskError::InvalidConfig(format!(
                    "{} must be a finite, non-negative number of points (got {})",
                    name, points
                )));
            }
        }

        if !self.bmi_threshold.is_finite() {
            return Err(RiskError::InvalidConfig(format!(
                "bmi_threshold must be finite (got {})",
                self.bmi_threshold
            )));
        }

        let RiskThresholds { medium, high } = self.thresholds;
        if !medium.is_finite() || !high.is_finite() {
            return Err(RiskError::InvalidConfig(format!(
                "thresholds must be finite (medium {}, high {})",
                medium, high
            )));
        }
        if medium > high {
            return Err(RiskError::InvalidConfig(format!(
                "medium threshold {} is above high threshold {}",
                medium, high
            )));
        }

        for warning in self.warnings() {
            tracing::warn!(%warning, "questionable heuristic weights");
        }

        Ok(())
    }

    /// Accepted-but-suspicious settings
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let symptom_points = [
            self.irregular_cycle,
            self.hair_growth,
            self.acne,
            self.weight_gain,
            self.fatigue,
        ];
        if symptom_points.iter().all(|p| *p == 0.0) {
            warnings.push(ConfigWarning::NoSymptomPoints);
        }

        let max_score = self.max_score();
        if max_score < self.thresholds.high {
            warnings.push(ConfigWarning::HighUnreachable {
                max_score,
                high: self.thresholds.high,
            });
        }

        warnings
    }
}

/// Weights that validate but make the screen less useful
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigWarning {
    /// Every symptom carries zero points; only BMI and age can score
    NoSymptomPoints,
    /// The highest reachable score is below the High threshold
    HighUnreachable { max_score: f64, high: f64 },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::NoSymptomPoints => {
                write!(f, "all symptom weights are zero")
            }
            ConfigWarning::HighUnreachable { max_score, high } => {
                write!(f, "max score {} never reaches High threshold {}", max_score, high)
            }
        }
    }
}
