use serde::Serialize;
use ts_rs::TS;

use clinaudit_core::models::question::QuestionSpec;

const QUALITY_STRUCTURE_WEIGHT: f64 = 0.4;
const QUALITY_VALIDATION_WEIGHT: f64 = 0.3;
const QUALITY_INSTRUMENT_WEIGHT: f64 = 0.2;
const QUALITY_NAMING_WEIGHT: f64 = 0.1;

const ANALYSABILITY_STRUCTURE_WEIGHT: f64 = 0.6;
const ANALYSABILITY_VALIDATION_WEIGHT: f64 = 0.3;
const ANALYSABILITY_NAMING_WEIGHT: f64 = 0.1;

/// Questionnaire-level quality metrics, each 0–100 to two decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct QualityScores {
    /// Share of questions that are not free text.
    pub structure_percentage: f64,
    /// Share of questions with at least one validation rule.
    pub validation_percentage: f64,
    /// Share of questions mapped to a validated instrument.
    pub instrument_percentage: f64,
    /// Share of questions with a data-dictionary variable name.
    pub naming_percentage: f64,
    pub methodological_quality_score: f64,
    pub analysability_score: f64,
}

/// Score a questionnaire's structure. An empty questionnaire scores 0.0
/// everywhere.
pub fn score_questionnaire<Q: AsRef<QuestionSpec>>(questions: &[Q]) -> QualityScores {
    if questions.is_empty() {
        return QualityScores::default();
    }

    let structure = share(questions, |q| !q.question_type.is_free_text());
    let validation = share(questions, QuestionSpec::has_validation);
    let instrument = share(questions, QuestionSpec::has_validated_instrument);
    let naming = share(questions, QuestionSpec::has_variable_name);

    let quality = structure * QUALITY_STRUCTURE_WEIGHT
        + validation * QUALITY_VALIDATION_WEIGHT
        + instrument * QUALITY_INSTRUMENT_WEIGHT
        + naming * QUALITY_NAMING_WEIGHT;

    let analysability = structure * ANALYSABILITY_STRUCTURE_WEIGHT
        + validation * ANALYSABILITY_VALIDATION_WEIGHT
        + naming * ANALYSABILITY_NAMING_WEIGHT;

    QualityScores {
        structure_percentage: round2(structure),
        validation_percentage: round2(validation),
        instrument_percentage: round2(instrument),
        naming_percentage: round2(naming),
        methodological_quality_score: round2(quality),
        analysability_score: round2(analysability),
    }
}

/// Percentage of a non-empty question list satisfying `predicate`.
fn share<Q: AsRef<QuestionSpec>>(questions: &[Q], predicate: impl Fn(&QuestionSpec) -> bool) -> f64 {
    let count = questions.iter().filter(|q| predicate(q.as_ref())).count();
    count as f64 / questions.len() as f64 * 100.0
}

/// Round to two decimal places, halves away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
