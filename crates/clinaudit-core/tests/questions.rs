use clinaudit_core::models::question::{QuestionDraft, QuestionSpec, QuestionType};
use clinaudit_core::models::questionnaire::{
    latest_published, next_version, Questionnaire, QuestionnaireDraft,
};
use serde_json::json;
use uuid::Uuid;

fn draft(code: &str, text: &str) -> QuestionDraft {
    QuestionDraft {
        question_code: code.to_string(),
        spec: QuestionSpec::new(QuestionType::Numeric, text),
        required: true,
        conditional_logic: None,
        free_text_max_length: None,
        variable_type: "integer".to_string(),
        variable_description: None,
    }
}

fn questionnaire(version: u32, published: bool) -> Questionnaire {
    let mut q = Questionnaire::from_draft(
        Uuid::new_v4(),
        version,
        QuestionnaireDraft {
            title: format!("v{version}"),
            description: None,
            questions: vec![draft("Q1", "Patient age")],
        },
        jiff::Timestamp::UNIX_EPOCH,
    );
    if published {
        q.publish(jiff::Timestamp::UNIX_EPOCH);
    }
    q
}

#[test]
fn choices_reads_string_entries_only() {
    let mut spec = QuestionSpec::new(QuestionType::CategoricalSingle, "Smoking status");
    spec.options = Some(json!({ "choices": ["Never", 3, "Current", null, "Former"] }));
    assert_eq!(spec.choices(), vec!["Never", "Current", "Former"]);
}

#[test]
fn choices_of_wrong_shape_are_empty() {
    let mut spec = QuestionSpec::new(QuestionType::CategoricalSingle, "Smoking status");
    assert!(spec.choices().is_empty());

    spec.options = Some(json!({ "choices": "Never, Current" }));
    assert!(spec.choices().is_empty());

    spec.options = Some(json!(["Never", "Current"]));
    assert!(spec.choices().is_empty());
}

#[test]
fn zero_is_a_set_validation_bound() {
    let mut spec = QuestionSpec::new(QuestionType::Numeric, "Pain score");
    spec.validation = Some(json!({ "min": 0, "max": "ten" }));
    assert_eq!(spec.validation_bound("min"), Some(0.0));
    assert_eq!(spec.validation_bound("max"), None);
}

#[test]
fn empty_validation_object_is_not_validation() {
    let mut spec = QuestionSpec::new(QuestionType::Numeric, "Pain score");
    spec.validation = Some(json!({}));
    assert!(!spec.has_validation());
    spec.validation = Some(json!({ "max": 10 }));
    assert!(spec.has_validation());
}

#[test]
fn empty_strings_count_as_missing() {
    let mut spec = QuestionSpec::new(QuestionType::TextShort, "Other comments");
    spec.free_text_justification = Some(String::new());
    spec.help_text = Some("Free text".to_string());
    assert!(!spec.has_free_text_justification());
    assert!(spec.has_help_text());
    assert!(!spec.has_variable_name());
    assert!(!spec.has_clinical_guidance());
}

#[test]
fn draft_deserializes_flattened_spec() {
    let body = json!({
        "question_code": "Q1",
        "question_text": "Age at admission",
        "question_type": "numeric",
        "validation": { "min": 0, "max": 120 },
        "variable_name": "age_admission",
        "variable_type": "integer"
    });
    let draft: QuestionDraft = serde_json::from_value(body).unwrap();
    assert!(draft.required);
    assert_eq!(draft.spec.question_type, QuestionType::Numeric);
    assert_eq!(draft.spec.variable_name, "age_admission");
    assert_eq!(draft.spec.validation_bound("max"), Some(120.0));
}

#[test]
fn from_draft_assigns_dense_order() {
    let q = Questionnaire::from_draft(
        Uuid::new_v4(),
        1,
        QuestionnaireDraft {
            title: "Hip fracture".to_string(),
            description: None,
            questions: vec![draft("Q1", "Age"), draft("Q2", "Time to theatre")],
        },
        jiff::Timestamp::UNIX_EPOCH,
    );
    let order: Vec<u32> = q.questions.iter().map(|q| q.order_index).collect();
    assert_eq!(order, vec![0, 1]);
    assert!(q.check_order().is_ok());
}

#[test]
fn check_order_rejects_gaps() {
    let mut q = questionnaire(1, false);
    q.questions[0].order_index = 2;
    assert!(q.check_order().is_err());
}

#[test]
fn republish_keeps_first_timestamp() {
    let mut q = questionnaire(1, false);
    let first = jiff::Timestamp::from_second(1_700_000_000).unwrap();
    q.publish(first);
    q.publish(jiff::Timestamp::from_second(1_800_000_000).unwrap());
    assert_eq!(q.published_at, Some(first));
}

#[test]
fn versions_increment_from_highest() {
    assert_eq!(next_version(&[]), 1);
    let existing = vec![questionnaire(1, true), questionnaire(3, false), questionnaire(2, true)];
    assert_eq!(next_version(&existing), 4);
    assert_eq!(latest_published(&existing).map(|q| q.version), Some(2));
}
