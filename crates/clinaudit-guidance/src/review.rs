use serde::Serialize;
use ts_rs::TS;

use clinaudit_core::models::question::QuestionSpec;
use clinaudit_core::models::questionnaire::Questionnaire;

use crate::analyzer::{analyze_question, QuestionAnalysis};
use crate::completeness::{check_completeness, CompletenessReport};
use crate::error::GuidanceError;
use crate::findings::Improvement;
use crate::improvements::suggest_improvements;
use crate::scorer::{score_questionnaire, QualityScores};

/// Guidance for one question, at its position in the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct QuestionReview {
    pub position: usize,
    pub variable_name: String,
    pub analysis: QuestionAnalysis,
    #[ts(as = "Vec<String>")]
    pub improvements: Vec<Improvement>,
}

impl QuestionReview {
    /// Warnings joined for storage on the question record.
    pub fn warning_message(&self) -> Option<String> {
        if self.analysis.warnings.is_empty() {
            return None;
        }
        let messages: Vec<String> = self
            .analysis
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect();
        Some(messages.join("; "))
    }
}

/// Full methodological review of a questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct GuidanceReport {
    pub questions: Vec<QuestionReview>,
    pub scores: QualityScores,
    pub completeness: CompletenessReport,
}

impl GuidanceReport {
    pub fn warning_count(&self) -> usize {
        self.questions
            .iter()
            .map(|q| q.analysis.warnings.len())
            .sum()
    }

    pub fn has_warnings(&self) -> bool {
        self.questions.iter().any(|q| q.analysis.has_warnings)
    }
}

pub fn review_questionnaire<Q: AsRef<QuestionSpec>>(questions: &[Q]) -> GuidanceReport {
    let reviews: Vec<QuestionReview> = questions
        .iter()
        .enumerate()
        .map(|(position, q)| {
            let spec = q.as_ref();
            QuestionReview {
                position,
                variable_name: spec.variable_name.clone(),
                analysis: analyze_question(spec),
                improvements: suggest_improvements(spec),
            }
        })
        .collect();

    let report = GuidanceReport {
        questions: reviews,
        scores: score_questionnaire(questions),
        completeness: check_completeness(questions),
    };

    let missing: Vec<String> = report
        .completeness
        .missing_domains
        .iter()
        .map(ToString::to_string)
        .collect();
    tracing::debug!(
        questions = questions.len(),
        warnings = report.warning_count(),
        quality = report.scores.methodological_quality_score,
        analysability = report.scores.analysability_score,
        completeness = report.completeness.completeness_score,
        missing_domains = %missing.join(","),
        "questionnaire reviewed"
    );

    report
}

/// Review a stored questionnaire and record the results on it: both
/// composite scores on the questionnaire, and the warning flag and message
/// on each question.
pub fn apply_review(questionnaire: &mut Questionnaire) -> Result<GuidanceReport, GuidanceError> {
    questionnaire.check_order()?;

    let report = review_questionnaire(&questionnaire.questions);

    questionnaire.methodological_quality_score = Some(report.scores.methodological_quality_score);
    questionnaire.analysability_score = Some(report.scores.analysability_score);

    for (question, review) in questionnaire.questions.iter_mut().zip(&report.questions) {
        question.has_guidance_warning = review.analysis.has_warnings;
        question.warning_message = review.warning_message();
    }

    tracing::info!(
        questionnaire_id = %questionnaire.id,
        version = questionnaire.version,
        flagged = report.questions.iter().filter(|q| q.analysis.has_warnings).count(),
        "guidance applied"
    );

    Ok(report)
}
