use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// How a question captures its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionType {
    CategoricalSingle,
    CategoricalMultiple,
    Ordinal,
    Numeric,
    Date,
    Time,
    Datetime,
    TextShort,
    TextLong,
    Boolean,
}

impl QuestionType {
    pub fn is_free_text(self) -> bool {
        matches!(self, QuestionType::TextShort | QuestionType::TextLong)
    }

    pub fn is_categorical(self) -> bool {
        matches!(
            self,
            QuestionType::CategoricalSingle | QuestionType::CategoricalMultiple
        )
    }
}

/// The structural description of one question, as the guidance engine sees it.
///
/// `options` and `validation` are caller-defined JSON. Only the keys the
/// engine reads (`choices`, `min`, `max`) are interpreted, through the
/// accessors below; anything of the wrong shape reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionSpec {
    pub question_type: QuestionType,
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_text_justification: Option<String>,
    #[serde(default)]
    pub variable_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_instrument: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_guidance: Option<String>,
}

impl QuestionSpec {
    pub fn new(question_type: QuestionType, question_text: impl Into<String>) -> Self {
        Self {
            question_type,
            question_text: question_text.into(),
            options: None,
            validation: None,
            free_text_justification: None,
            variable_name: String::new(),
            validated_instrument: None,
            help_text: None,
            clinical_guidance: None,
        }
    }

    /// String entries of `options.choices`, in order. Non-string entries are
    /// skipped; a missing or non-array `choices` yields an empty list.
    pub fn choices(&self) -> Vec<&str> {
        self.options
            .as_ref()
            .and_then(|options| options.get("choices"))
            .and_then(serde_json::Value::as_array)
            .map(|choices| {
                choices
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A numeric bound from `validation` (e.g. `"min"`). Zero counts as set.
    pub fn validation_bound(&self, key: &str) -> Option<f64> {
        self.validation
            .as_ref()
            .and_then(|validation| validation.get(key))
            .and_then(serde_json::Value::as_f64)
    }

    /// True when `validation` is an object with at least one rule.
    pub fn has_validation(&self) -> bool {
        self.validation
            .as_ref()
            .and_then(serde_json::Value::as_object)
            .is_some_and(|rules| !rules.is_empty())
    }

    pub fn has_validated_instrument(&self) -> bool {
        is_filled(&self.validated_instrument)
    }

    pub fn has_free_text_justification(&self) -> bool {
        is_filled(&self.free_text_justification)
    }

    pub fn has_variable_name(&self) -> bool {
        !self.variable_name.is_empty()
    }

    pub fn has_help_text(&self) -> bool {
        is_filled(&self.help_text)
    }

    pub fn has_clinical_guidance(&self) -> bool {
        is_filled(&self.clinical_guidance)
    }
}

impl AsRef<QuestionSpec> for QuestionSpec {
    fn as_ref(&self) -> &QuestionSpec {
        self
    }
}

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// A question as submitted by an audit lead when creating a questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionDraft {
    pub question_code: String,
    #[serde(flatten)]
    pub spec: QuestionSpec,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_logic: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_text_max_length: Option<u32>,
    pub variable_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_description: Option<String>,
}

fn default_required() -> bool {
    true
}

impl AsRef<QuestionSpec> for QuestionDraft {
    fn as_ref(&self) -> &QuestionSpec {
        &self.spec
    }
}

/// A stored question within a questionnaire version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    pub order_index: u32,
    #[serde(flatten)]
    pub definition: QuestionDraft,
    pub has_guidance_warning: bool,
    pub warning_message: Option<String>,
    pub created_at: jiff::Timestamp,
}

impl AsRef<QuestionSpec> for Question {
    fn as_ref(&self) -> &QuestionSpec {
        &self.definition.spec
    }
}
