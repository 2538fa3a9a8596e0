use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::audit::Audit;
use super::questionnaire::{latest_published, Questionnaire};
use super::user::User;
use crate::access::{self, AccessError};

/// One patient encounter submitted against a published questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Episode {
    pub id: Uuid,
    pub audit_id: Uuid,
    pub questionnaire_id: Uuid,
    pub questionnaire_version: u32,
    pub site_id: Uuid,
    pub submitted_by: Uuid,
    pub submitted_at: jiff::Timestamp,
    pub episode_code: Option<String>,
    pub pseudonym: Option<String>,
    pub is_validated: bool,
    /// Answers keyed by question `variable_name`.
    pub responses: serde_json::Value,
    pub consent_obtained: Option<bool>,
    pub consent_date: Option<jiff::Timestamp>,
    pub derived_metrics: Option<serde_json::Value>,
}

/// Request body for submitting an episode.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EpisodeSubmission {
    pub episode_code: Option<String>,
    pub responses: serde_json::Value,
    pub consent_obtained: Option<bool>,
    pub consent_date: Option<jiff::Timestamp>,
}

/// Record a submission against the audit's latest published questionnaire
/// and bump the audit's episode count.
pub fn record_episode(
    audit: &mut Audit,
    questionnaires: &[Questionnaire],
    submitter: &User,
    site_id: Uuid,
    submission: EpisodeSubmission,
    now: jiff::Timestamp,
) -> Result<Episode, AccessError> {
    let questionnaire =
        access::check_submit_episode(submitter, audit, latest_published(questionnaires))?;

    let episode = Episode {
        id: Uuid::new_v4(),
        audit_id: audit.id,
        questionnaire_id: questionnaire.id,
        questionnaire_version: questionnaire.version,
        site_id,
        submitted_by: submitter.id,
        submitted_at: now,
        episode_code: submission.episode_code,
        pseudonym: None,
        is_validated: false,
        responses: submission.responses,
        consent_obtained: submission.consent_obtained,
        consent_date: submission.consent_date,
        derived_metrics: None,
    };

    audit.total_episodes += 1;
    audit.updated_at = now;
    Ok(episode)
}
