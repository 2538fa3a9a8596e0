use serde::Serialize;
use ts_rs::TS;

use clinaudit_core::models::question::{QuestionSpec, QuestionType};
use clinaudit_instruments::{all_instruments, Instrument};

use crate::findings::{Suggestion, Warning};

/// More choices than this and a categorical question is hard to answer.
pub const MAX_CATEGORICAL_CHOICES: usize = 10;

/// Fewer choices than this and a categorical question is not a choice.
pub const MIN_CATEGORICAL_CHOICES: usize = 2;

/// Methodological feedback on a single question. Findings are in rule order.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct QuestionAnalysis {
    pub has_warnings: bool,
    #[ts(as = "Vec<String>")]
    pub warnings: Vec<Warning>,
    #[ts(as = "Vec<String>")]
    pub suggestions: Vec<Suggestion>,
}

/// Inspect one question's design.
///
/// Rules run in a fixed order: free text, categorical options, numeric
/// bounds, then validated-instrument matching on the question text. Missing
/// optional fields read as empty; this never fails.
pub fn analyze_question(spec: &QuestionSpec) -> QuestionAnalysis {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    if spec.question_type.is_free_text() {
        warnings.push(Warning::FreeText);
        suggestions.push(Suggestion::PreferStructured);

        if !spec.has_free_text_justification() {
            warnings.push(Warning::FreeTextUnjustified);
        }
    }

    if spec.question_type.is_categorical() {
        let choices = spec.choices();

        if choices.len() < MIN_CATEGORICAL_CHOICES {
            warnings.push(Warning::TooFewOptions);
        }

        if choices.len() > MAX_CATEGORICAL_CHOICES {
            warnings.push(Warning::TooManyOptions);
            suggestions.push(Suggestion::GroupOptions);
        }

        if choices.iter().any(|choice| looks_like_range(choice)) {
            suggestions.push(Suggestion::CheckRangeOverlap);
        }
    }

    if spec.question_type == QuestionType::Numeric
        && spec.validation_bound("min").is_none()
        && spec.validation_bound("max").is_none()
    {
        warnings.push(Warning::NumericUnbounded);
        suggestions.push(Suggestion::SetClinicalRange);
    }

    let text = spec.question_text.to_lowercase();
    suggestions.extend(
        matching_instruments(&text).map(|instrument| Suggestion::UseInstrument {
            name: instrument.name(),
            description: instrument.description(),
        }),
    );

    QuestionAnalysis {
        has_warnings: !warnings.is_empty(),
        warnings,
        suggestions,
    }
}

/// "18 to 30", "31-45" and the like.
fn looks_like_range(choice: &str) -> bool {
    choice.to_lowercase().contains("to") || choice.contains('-')
}

/// Catalogue instruments sharing any word of their display name with the
/// (already lower-cased) question text. Substring match, so "index" in the
/// text is enough to suggest the Barthel Index.
pub fn matching_instruments(text: &str) -> impl Iterator<Item = &'static dyn Instrument> {
    all_instruments().iter().copied().filter(move |instrument| {
        instrument
            .name()
            .to_lowercase()
            .split_whitespace()
            .any(|word| text.contains(word))
    })
}
