//! Risk Classification
//!
//! A [`RiskClassifier`] maps a validated [`HealthProfile`] to a
//! [`RiskLevel`]. The default strategy is [`HeuristicClassifier`], a
//! weighted sum over seven factors:
//!
//! | factor            | points |
//! |-------------------|--------|
//! | BMI above 25      | 1.5    |
//! | age below 25      | 0.5    |
//! | irregular cycle   | 1.5    |
//! | excess hair growth| 1.0    |
//! | acne              | 1.0    |
//! | weight gain       | 1.0    |
//! | fatigue           | 0.5    |
//!
//! Score >= 4 is High, >= 2 is Medium, anything lower is Low.
//!
//! Any `Fn(&HealthProfile) -> RiskLevel` closure is also a classifier.

use crate::weights::{HeuristicWeights, RiskThresholds};
use crate::{HealthProfile, Result};
use serde::{Deserialize, Serialize};

/// Three-level screening outcome, ordered Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a score using inclusive lower thresholds
    pub fn from_score(score: f64, thresholds: &RiskThresholds) -> Self {
        if score >= thresholds.high {
            RiskLevel::High
        } else if score >= thresholds.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Stable numeric code (0 = Low, 1 = Medium, 2 = High)
    pub fn code(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(RiskLevel::Low),
            1 => Some(RiskLevel::Medium),
            2 => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Display colour as a hex string (green, amber, red)
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#4CAF50",
            RiskLevel::Medium => "#FFC107",
            RiskLevel::High => "#F44336",
        }
    }

    /// Medium and above warrant a specialist referral
    pub fn requires_specialist(&self) -> bool {
        *self >= RiskLevel::Medium
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs the heuristic awards points for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    ElevatedBmi,
    YoungAge,
    IrregularCycle,
    HairGrowth,
    Acne,
    WeightGain,
    Fatigue,
}

impl RiskFactor {
    pub fn description(&self) -> &'static str {
        match self {
            RiskFactor::ElevatedBmi => "BMI above the healthy range",
            RiskFactor::YoungAge => "Younger age group",
            RiskFactor::IrregularCycle => "Irregular menstrual cycle",
            RiskFactor::HairGrowth => "Excess facial/body hair",
            RiskFactor::Acne => "Acne/oily skin",
            RiskFactor::WeightGain => "Unexplained weight gain",
            RiskFactor::Fatigue => "Chronic fatigue",
        }
    }
}

/// Points one factor added to a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub factor: RiskFactor,
    pub points: f64,
}

/// Explanation of a score: total plus each factor that fired
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub contributions: Vec<Contribution>,
}

/// Strategy seam for risk classification
///
/// Implementations must be total over validated profiles and free of side
/// effects, so one instance can serve concurrent callers.
pub trait RiskClassifier: Send + Sync {
    /// Short identifier for reports and logs
    fn name(&self) -> &str;

    fn classify(&self, profile: &HealthProfile) -> RiskLevel;

    /// Score explanation, for strategies that have one
    fn breakdown(&self, _profile: &HealthProfile) -> Option<ScoreBreakdown> {
        None
    }
}

impl<F> RiskClassifier for F
where
    F: Fn(&HealthProfile) -> RiskLevel + Send + Sync,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn classify(&self, profile: &HealthProfile) -> RiskLevel {
        self(profile)
    }
}

/// Weighted-sum classifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicClassifier {
    weights: HeuristicWeights,
}

impl HeuristicClassifier {
    /// Build a classifier from validated weights
    pub fn new(weights: HeuristicWeights) -> Result<Self> {
        weights.validate()?;
        Ok(HeuristicClassifier { weights })
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Factors that fired for this profile, in table order
    pub fn contributions(&self, profile: &HealthProfile) -> Vec<Contribution> {
        let w = &self.weights;
        [
            (profile.bmi() > w.bmi_threshold, RiskFactor::ElevatedBmi, w.elevated_bmi),
            (profile.age() < w.young_age_below, RiskFactor::YoungAge, w.young_age),
            (profile.irregular_cycle(), RiskFactor::IrregularCycle, w.irregular_cycle),
            (profile.hair_growth(), RiskFactor::HairGrowth, w.hair_growth),
            (profile.acne(), RiskFactor::Acne, w.acne),
            (profile.weight_gain(), RiskFactor::WeightGain, w.weight_gain),
            (profile.fatigue(), RiskFactor::Fatigue, w.fatigue),
        ]
        .into_iter()
        .filter(|(fired, _, _)| *fired)
        .map(|(_, factor, points)| Contribution { factor, points })
        .collect()
    }

    /// Raw weighted score
    pub fn score(&self, profile: &HealthProfile) -> f64 {
        self.contributions(profile).iter().map(|c| c.points).sum()
    }
}

impl RiskClassifier for HeuristicClassifier {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn classify(&self, profile: &HealthProfile) -> RiskLevel {
        let score = self.score(profile);
        let level = RiskLevel::from_score(score, &self.weights.thresholds);
        tracing::trace!(score, level = %level, "heuristic classification");
        level
    }

    fn breakdown(&self, profile: &HealthProfile) -> Option<ScoreBreakdown> {
        let contributions = self.contributions(profile);
        let score = contributions.iter().map(|c| c.points).sum();
        Some(ScoreBreakdown { score, contributions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RiskError;

    // 150 cm / 72 kg gives BMI 32.0; 200 cm / 100 kg gives exactly 25.0
    fn profile(age: i32, height_cm: i32, weight_kg: i32) -> HealthProfile {
        HealthProfile::new(age, height_cm, weight_kg).unwrap()
    }

    #[test]
    fn test_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(!RiskLevel::Low.requires_specialist());
        assert!(RiskLevel::Medium.requires_specialist());
        assert!(RiskLevel::High.requires_specialist());
    }

    #[test]
    fn test_level_codes() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert_eq!(RiskLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(RiskLevel::from_code(3), None);
    }

    #[test]
    fn test_level_presentation() {
        assert_eq!(RiskLevel::Low.to_string(), "Low");
        assert_eq!(RiskLevel::Medium.color(), "#FFC107");
        assert_eq!(RiskLevel::High.color(), "#F44336");
    }

    #[test]
    fn test_threshold_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(RiskLevel::from_score(0.0, &t), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(1.5, &t), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(2.0, &t), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(3.5, &t), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(4.0, &t), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(7.0, &t), RiskLevel::High);
    }

    #[test]
    fn test_high_risk_example() {
        let p = profile(30, 150, 72)
            .with_irregular_cycle(true)
            .with_hair_growth(true)
            .with_acne(true);
        let classifier = HeuristicClassifier::default();

        assert_eq!(p.bmi(), 32.0);
        assert_eq!(classifier.score(&p), 5.0);
        assert_eq!(classifier.classify(&p), RiskLevel::High);
    }

    #[test]
    fn test_young_age_only_is_low() {
        let p = profile(22, 200, 100);
        let classifier = HeuristicClassifier::default();

        assert_eq!(p.bmi(), 25.0);
        assert_eq!(classifier.score(&p), 0.5);
        assert_eq!(classifier.classify(&p), RiskLevel::Low);
    }

    #[test]
    fn test_zero_score_is_low() {
        let p = profile(25, 165, 60);
        let classifier = HeuristicClassifier::default();
        assert_eq!(classifier.score(&p), 0.0);
        assert_eq!(classifier.classify(&p), RiskLevel::Low);
    }

    #[test]
    fn test_exact_medium_boundary() {
        // irregular cycle 1.5 + young age 0.5 = 2.0
        let p = profile(20, 165, 60).with_irregular_cycle(true);
        let classifier = HeuristicClassifier::default();
        assert_eq!(classifier.score(&p), 2.0);
        assert_eq!(classifier.classify(&p), RiskLevel::Medium);
    }

    #[test]
    fn test_exact_high_boundary() {
        // BMI 1.5 + irregular 1.5 + acne 1.0 = 4.0
        let p = profile(30, 150, 72).with_irregular_cycle(true).with_acne(true);
        let classifier = HeuristicClassifier::default();
        assert_eq!(classifier.score(&p), 4.0);
        assert_eq!(classifier.classify(&p), RiskLevel::High);
    }

    #[test]
    fn test_breakdown_lists_fired_factors() {
        let p = profile(24, 150, 72).with_fatigue(true);
        let breakdown = HeuristicClassifier::default().breakdown(&p).unwrap();

        let factors: Vec<_> = breakdown.contributions.iter().map(|c| c.factor).collect();
        assert_eq!(
            factors,
            vec![RiskFactor::ElevatedBmi, RiskFactor::YoungAge, RiskFactor::Fatigue]
        );
        assert_eq!(breakdown.score, 2.5);
    }

    #[test]
    fn test_custom_weights() {
        let weights = HeuristicWeights {
            acne: 3.0,
            ..HeuristicWeights::default()
        };
        let classifier = HeuristicClassifier::new(weights).unwrap();
        let p = profile(30, 165, 60).with_acne(true);

        assert_eq!(classifier.score(&p), 3.0);
        assert_eq!(classifier.classify(&p), RiskLevel::Medium);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let weights = HeuristicWeights {
            hair_growth: -1.0,
            ..HeuristicWeights::default()
        };
        assert!(matches!(
            HeuristicClassifier::new(weights),
            Err(RiskError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_closure_classifier() {
        let always_high = |_: &HealthProfile| RiskLevel::High;
        let p = profile(30, 165, 60);

        assert_eq!(always_high.name(), "custom");
        assert_eq!(always_high.classify(&p), RiskLevel::High);
        assert!(always_high.breakdown(&p).is_none());
    }

    #[test]
    fn test_trait_object() {
        let strategies: Vec<Box<dyn RiskClassifier>> = vec![
            Box::new(HeuristicClassifier::default()),
            Box::new(|p: &HealthProfile| {
                if p.irregular_cycle() { RiskLevel::Medium } else { RiskLevel::Low }
            }),
        ];
        let p = profile(30, 165, 60).with_irregular_cycle(true);

        let levels: Vec<_> = strategies.iter().map(|s| s.classify(&p)).collect();
        assert_eq!(levels, vec![RiskLevel::Low, RiskLevel::Medium]);
    }
}
