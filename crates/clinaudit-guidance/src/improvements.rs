use clinaudit_core::models::question::QuestionSpec;

use crate::findings::Improvement;

const MIN_TEXT_CHARS: usize = 10;
const MAX_TEXT_CHARS: usize = 200;

const AMBIGUOUS_FREQUENCY_WORDS: [&str; 4] = ["sometimes", "usually", "often", "rarely"];

/// Wording and documentation suggestions for one question, in check order.
/// Every check is independent. Empty text counts as very short.
pub fn suggest_improvements(spec: &QuestionSpec) -> Vec<Improvement> {
    let mut improvements = Vec::new();
    let text = spec.question_text.to_lowercase();
    let length = spec.question_text.chars().count();

    if length < MIN_TEXT_CHARS {
        improvements.push(Improvement::TextTooShort);
    }

    if length > MAX_TEXT_CHARS {
        improvements.push(Improvement::TextTooLong);
    }

    if AMBIGUOUS_FREQUENCY_WORDS
        .iter()
        .any(|word| text.contains(word))
    {
        improvements.push(Improvement::AmbiguousFrequency);
    }

    if text.contains(" and ") {
        improvements.push(Improvement::DoubleBarreled);
    }

    if !spec.has_help_text() {
        improvements.push(Improvement::MissingHelpText);
    }

    if !spec.has_clinical_guidance() {
        improvements.push(Improvement::MissingClinicalGuidance);
    }

    improvements
}
