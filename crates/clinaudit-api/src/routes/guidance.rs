use axum::Json;
use serde::{Deserialize, Serialize};

use clinaudit_core::models::question::QuestionSpec;
use clinaudit_core::models::questionnaire::Questionnaire;
use clinaudit_guidance::findings::Improvement;
use clinaudit_guidance::{CompletenessReport, GuidanceReport, QuestionAnalysis};

use crate::error::ApiError;
use crate::extract::ApiJson;

#[derive(Deserialize)]
pub struct QuestionSet {
    questions: Vec<QuestionSpec>,
}

#[derive(Serialize)]
pub struct QuestionGuidance {
    #[serde(flatten)]
    analysis: QuestionAnalysis,
    improvements: Vec<Improvement>,
}

#[derive(Serialize)]
pub struct ReviewedQuestionnaire {
    questionnaire: Questionnaire,
    report: GuidanceReport,
}

pub async fn analyze_question(
    ApiJson(spec): ApiJson<QuestionSpec>,
) -> Json<QuestionGuidance> {
    Json(QuestionGuidance {
        analysis: clinaudit_guidance::analyze_question(&spec),
        improvements: clinaudit_guidance::suggest_improvements(&spec),
    })
}

pub async fn review_questionnaire(
    ApiJson(body): ApiJson<QuestionSet>,
) -> Json<GuidanceReport> {
    Json(clinaudit_guidance::review_questionnaire(&body.questions))
}

pub async fn check_completeness(
    ApiJson(body): ApiJson<QuestionSet>,
) -> Json<CompletenessReport> {
    Json(clinaudit_guidance::check_completeness(&body.questions))
}

/// Score a stored questionnaire version and return it with the guidance
/// fields filled in, ready to persist.
pub async fn apply_guidance(
    ApiJson(mut questionnaire): ApiJson<Questionnaire>,
) -> Result<Json<ReviewedQuestionnaire>, ApiError> {
    let report = clinaudit_guidance::apply_review(&mut questionnaire)?;
    Ok(Json(ReviewedQuestionnaire {
        questionnaire,
        report,
    }))
}
