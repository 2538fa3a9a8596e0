use thiserror::Error;

use clinaudit_core::error::CoreError;

#[derive(Debug, Error)]
pub enum GuidanceError {
    #[error("questionnaire is malformed: {0}")]
    Questionnaire(#[from] CoreError),
}
