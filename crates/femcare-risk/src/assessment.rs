//! Assessment
//!
//! Validates an intake form, runs a classifier and bundles the result with
//! the display content a front end needs. Batches assess every form and
//! report invalid ones per entry instead of failing the run.

use crate::advice::{self, AdviceSection};
use crate::bmi::BmiCategory;
use crate::classifier::{RiskClassifier, RiskLevel, ScoreBreakdown};
use crate::profile::{IntakeForm, MenstrualHistory};
use crate::Result;
use serde::Serialize;

/// Everything a front end renders for one completed form
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub greeting: String,
    /// Name of the strategy that produced `risk`
    pub classifier: String,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub risk: RiskLevel,
    pub risk_label: &'static str,
    pub risk_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    pub consult_specialist: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist_message: Option<&'static str>,
    /// Collected for the record; not scored
    pub menstrual: MenstrualHistory,
    /// Checked symptoms that carry no scoring weight
    pub unscored_findings: Vec<&'static str>,
    pub wellness_plan: [AdviceSection; 3],
}

/// Validate `form` and classify it with `classifier`
pub fn assess<C>(form: &IntakeForm, classifier: &C) -> Result<Assessment>
where
    C: RiskClassifier + ?Sized,
{
    let profile = form.validate().map_err(|err| {
        tracing::debug!(error = %err, "intake form rejected");
        err
    })?;

    let risk = classifier.classify(&profile);
    let breakdown = classifier.breakdown(&profile);
    let bmi = profile.bmi();

    tracing::debug!(
        classifier = classifier.name(),
        bmi,
        risk = %risk,
        "assessment complete"
    );

    Ok(Assessment {
        greeting: advice::greeting(form.name.as_deref()),
        classifier: classifier.name().to_string(),
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        risk,
        risk_label: risk.label(),
        risk_color: risk.color(),
        breakdown,
        consult_specialist: risk.requires_specialist(),
        specialist_message: advice::specialist_referral(risk),
        menstrual: form.menstrual,
        unscored_findings: form.unscored_findings(),
        wellness_plan: advice::wellness_plan(),
    })
}

/// One form's outcome in a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// Position of the form in the input
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Intake field that failed validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.assessment.is_some()
    }
}

/// Parse intake forms from JSON: an array of forms or a single object
pub fn parse_forms(json: &str) -> Result<Vec<IntakeForm>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let forms = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(forms)
}

/// Assess every form; invalid forms become error entries
pub fn assess_all<C>(forms: &[IntakeForm], classifier: &C) -> Vec<BatchEntry>
where
    C: RiskClassifier + ?Sized,
{
    forms
        .iter()
        .enumerate()
        .map(|(index, form)| match assess(form, classifier) {
            Ok(assessment) => BatchEntry {
                index,
                assessment: Some(assessment),
                error: None,
                field: None,
            },
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping invalid form");
                BatchEntry {
                    index,
                    assessment: None,
                    field: err.field(),
                    error: Some(err.to_string()),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CycleRegularity, Symptoms};
    use crate::{HealthProfile, HeuristicClassifier};

    #[test]
    fn test_default_form_low_risk() {
        let assessment = assess(&IntakeForm::default(), &HeuristicClassifier::default()).unwrap();

        assert_eq!(assessment.bmi, 22.0);
        assert_eq!(assessment.bmi_category, BmiCategory::Normal);
        assert_eq!(assessment.risk, RiskLevel::Low);
        assert_eq!(assessment.risk_color, "#4CAF50");
        assert!(!assessment.consult_specialist);
        assert!(assessment.specialist_message.is_none());
        assert_eq!(assessment.classifier, "heuristic");
        assert_eq!(assessment.breakdown.unwrap().score, 0.0);
    }

    #[test]
    fn test_medium_risk_gets_referral() {
        let mut form = IntakeForm {
            name: Some("Leah".to_string()),
            age: 30,
            ..IntakeForm::default()
        };
        form.menstrual.cycle = CycleRegularity::Irregular;
        form.symptoms.acne = true;

        let assessment = assess(&form, &HeuristicClassifier::default()).unwrap();

        assert_eq!(assessment.risk, RiskLevel::Medium);
        assert!(assessment.consult_specialist);
        assert_eq!(assessment.specialist_message, Some(advice::SPECIALIST_MESSAGE));
        assert_eq!(assessment.greeting, "Hello Leah! Your assessment is ready.");
    }

    #[test]
    fn test_invalid_form_propagates() {
        let form = IntakeForm {
            height_cm: -170,
            ..IntakeForm::default()
        };
        let err = assess(&form, &HeuristicClassifier::default()).unwrap_err();
        assert_eq!(err.field(), Some("height_cm"));
    }

    #[test]
    fn test_unscored_findings_reported_but_ignored() {
        let form = IntakeForm {
            age: 30,
            symptoms: Symptoms {
                hair_loss: true,
                cravings: true,
                mood_swings: true,
                dark_skin_patches: true,
                ..Symptoms::default()
            },
            ..IntakeForm::default()
        };
        let assessment = assess(&form, &HeuristicClassifier::default()).unwrap();

        assert_eq!(assessment.risk, RiskLevel::Low);
        assert_eq!(assessment.unscored_findings.len(), 4);
    }

    #[test]
    fn test_dyn_classifier() {
        let classifier: &dyn RiskClassifier = &|_: &HealthProfile| RiskLevel::High;
        let assessment = assess(&IntakeForm::default(), classifier).unwrap();

        assert_eq!(assessment.classifier, "custom");
        assert_eq!(assessment.risk, RiskLevel::High);
        assert!(assessment.breakdown.is_none());
    }

    #[test]
    fn test_serializes_to_json() {
        let assessment = assess(&IntakeForm::default(), &HeuristicClassifier::default()).unwrap();
        let json = serde_json::to_value(&assessment).unwrap();

        assert_eq!(json["risk"], "Low");
        assert_eq!(json["bmi_category"], "Normal");
        assert_eq!(json["wellness_plan"][0]["title"], "Dietary Recommendations");
        assert!(json.get("specialist_message").is_none());
    }

    #[test]
    fn test_parse_forms_array_and_single_object() {
        let forms = parse_forms(r#"[{"age": 30}, {"name": "Ana", "weight_kg": 80}]"#).unwrap();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].age, 30);
        assert_eq!(forms[0].height_cm, 165);
        assert_eq!(forms[1].name.as_deref(), Some("Ana"));

        let forms = parse_forms(r#"{"age": 19, "symptoms": {"acne": true}}"#).unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].age, 19);
        assert!(forms[0].symptoms.acne);
    }

    #[test]
    fn test_parse_forms_rejects_malformed_json() {
        assert!(matches!(parse_forms("[{"), Err(crate::RiskError::Json(_))));
        assert!(matches!(parse_forms("42"), Err(crate::RiskError::Json(_))));
    }

    #[test]
    fn test_assess_all_continues_past_invalid_forms() {
        let forms = parse_forms(
            r#"[
                {"age": 30},
                {"age": 9},
                {"age": 22, "menstrual": {"cycle": "irregular"}, "symptoms": {"acne": true}},
                {"height_cm": 250}
            ]"#,
        )
        .unwrap();

        let entries = assess_all(&forms, &HeuristicClassifier::default());

        assert_eq!(entries.len(), 4);
        assert_eq!(entries.iter().map(|e| e.index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        assert!(entries[0].is_ok());
        assert_eq!(entries[0].assessment.as_ref().unwrap().risk, RiskLevel::Low);

        assert!(!entries[1].is_ok());
        assert_eq!(entries[1].field, Some("age"));
        assert!(entries[1].error.as_deref().unwrap().contains("age"));

        // 1.5 + 1.0 + 0.5 = 3.0
        assert_eq!(entries[2].assessment.as_ref().unwrap().risk, RiskLevel::Medium);

        assert_eq!(entries[3].field, Some("height_cm"));
        assert!(entries[3].assessment.is_none());
    }

    #[test]
    fn test_batch_entry_json_omits_empty_fields() {
        let forms = vec![IntakeForm::default(), IntakeForm { weight_kg: 10, ..IntakeForm::default() }];
        let entries = assess_all(&forms, &HeuristicClassifier::default());
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(json[0]["index"], 0);
        assert!(json[0].get("error").is_none());
        assert!(json[0].get("field").is_none());
        assert_eq!(json[0]["assessment"]["risk"], "Low");

        assert!(json[1].get("assessment").is_none());
        assert_eq!(json[1]["field"], "weight_kg");
    }
}
