use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::question::{Question, QuestionDraft};
use crate::error::CoreError;

/// Request body for a new questionnaire version.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireDraft {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<QuestionDraft>,
}

/// One version of an audit's questionnaire. Questions are held in display
/// order and `order_index` always equals position.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    pub id: Uuid,
    pub audit_id: Uuid,
    pub version: u32,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub published_at: Option<jiff::Timestamp>,
    pub methodological_quality_score: Option<f64>,
    pub analysability_score: Option<f64>,
    pub questions: Vec<Question>,
    pub created_at: jiff::Timestamp,
}

impl Questionnaire {
    pub fn from_draft(
        audit_id: Uuid,
        version: u32,
        draft: QuestionnaireDraft,
        now: jiff::Timestamp,
    ) -> Self {
        let questions = draft
            .questions
            .into_iter()
            .zip(0u32..)
            .map(|(definition, order_index)| Question {
                id: Uuid::new_v4(),
                order_index,
                definition,
                has_guidance_warning: false,
                warning_message: None,
                created_at: now,
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            audit_id,
            version,
            title: draft.title,
            description: draft.description,
            is_published: false,
            published_at: None,
            methodological_quality_score: None,
            analysability_score: None,
            questions,
            created_at: now,
        }
    }

    /// Verify that `order_index` runs 0, 1, 2, ... in sequence order.
    pub fn check_order(&self) -> Result<(), CoreError> {
        for (position, question) in self.questions.iter().enumerate() {
            if question.order_index as usize != position {
                return Err(CoreError::OrderIndex {
                    position,
                    found: question.order_index,
                });
            }
        }
        Ok(())
    }

    /// Publish this version. Re-publishing keeps the first timestamp.
    pub fn publish(&mut self, now: jiff::Timestamp) {
        if self.is_published {
            return;
        }
        self.is_published = true;
        self.published_at = Some(now);
    }
}

/// The version number a new questionnaire for the same audit should take.
pub fn next_version(existing: &[Questionnaire]) -> u32 {
    existing.iter().map(|q| q.version).max().map_or(1, |v| v + 1)
}

/// The highest published version, which is what episodes are recorded against.
pub fn latest_published(existing: &[Questionnaire]) -> Option<&Questionnaire> {
    existing
        .iter()
        .filter(|q| q.is_published)
        .max_by_key(|q| q.version)
}
