//! FemCare Risk - PCOS/PCOD Screening Core
//!
//! Pure Rust implementation of a self-reported PCOS/PCOD risk screen:
//! validated intake, BMI, and a deterministic weighted-sum classifier that
//! returns Low, Medium or High along with static wellness guidance.
//!
//! # Features
//!
//! - Domain-checked intake ([`IntakeForm`] -> [`HealthProfile`])
//! - BMI with display bands
//! - Pluggable [`RiskClassifier`] strategies, heuristic by default
//! - Per-factor score breakdown
//! - Weights and thresholds loadable from JSON
//! - Batch assessment with per-form errors
//!
//! # Example
//!
//! ```rust
//! use femcare_risk::{assess, HeuristicClassifier, IntakeForm, RiskLevel};
//!
//! let mut form = IntakeForm::default();
//! form.age = 30;
//! form.symptoms.acne = true;
//! form.symptoms.hair_growth = true;
//!
//! let assessment = assess(&form, &HeuristicClassifier::default()).unwrap();
//! assert_eq!(assessment.risk, RiskLevel::Medium);
//! assert!(assessment.consult_specialist);
//! ```

pub mod advice;
pub mod assessment;
pub mod bmi;
pub mod classifier;
pub mod error;
pub mod profile;
pub mod weights;

// Re-export commonly used types for convenience
pub use assessment::{assess, assess_all, parse_forms, Assessment, BatchEntry};
pub use bmi::{body_mass_index, BmiCategory};
pub use classifier::{
    Contribution, HeuristicClassifier, RiskClassifier, RiskFactor, RiskLevel, ScoreBreakdown,
};
pub use error::{Result, RiskError};
pub use profile::{
    CycleRegularity, FlowIntensity, HealthProfile, IntakeForm, MenstrualHistory, MenstrualPain,
    Symptoms,
};
pub use weights::{ConfigWarning, HeuristicWeights, RiskThresholds};
