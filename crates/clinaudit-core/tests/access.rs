use clinaudit_core::access::{self, AccessError};
use clinaudit_core::models::audit::{Audit, AuditDraft, AuditStatus, DataProtectionLevel};
use clinaudit_core::models::episode::{record_episode, EpisodeSubmission};
use clinaudit_core::models::questionnaire::{Questionnaire, QuestionnaireDraft};
use clinaudit_core::models::user::{User, UserRole};
use serde_json::json;
use uuid::Uuid;

fn user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: "someone@example.nhs.uk".to_string(),
        full_name: "Test User".to_string(),
        role,
        is_active: true,
    }
}

fn audit_owned_by(owner: &User) -> Audit {
    AuditDraft {
        title: "Sepsis six compliance".to_string(),
        description: None,
        clinical_domain: "emergency_medicine".to_string(),
        population: "Adults presenting with suspected sepsis".to_string(),
        start_date: jiff::Timestamp::UNIX_EPOCH,
        end_date: None,
        governance_body: None,
        data_protection_level: DataProtectionLevel::NoPii,
        is_public: false,
        require_consent: false,
        retention_days: 3650,
    }
    .into_audit(owner.id, jiff::Timestamp::UNIX_EPOCH)
    .unwrap()
}

fn published(audit: &Audit, version: u32) -> Questionnaire {
    let mut q = Questionnaire::from_draft(
        audit.id,
        version,
        QuestionnaireDraft {
            title: "Sepsis".to_string(),
            description: None,
            questions: Vec::new(),
        },
        jiff::Timestamp::UNIX_EPOCH,
    );
    q.publish(jiff::Timestamp::UNIX_EPOCH);
    q
}

fn submission() -> EpisodeSubmission {
    EpisodeSubmission {
        episode_code: Some("EP-001".to_string()),
        responses: json!({ "age": 71 }),
        consent_obtained: None,
        consent_date: None,
    }
}

#[test]
fn end_date_before_start_is_rejected() {
    let owner = user(UserRole::AuditLead);
    let mut draft = AuditDraft {
        title: "t".to_string(),
        description: None,
        clinical_domain: "d".to_string(),
        population: "p".to_string(),
        start_date: jiff::Timestamp::from_second(1_000).unwrap(),
        end_date: Some(jiff::Timestamp::from_second(10).unwrap()),
        governance_body: None,
        data_protection_level: DataProtectionLevel::default(),
        is_public: false,
        require_consent: false,
        retention_days: 3650,
    };
    assert!(draft.clone().into_audit(owner.id, jiff::Timestamp::UNIX_EPOCH).is_err());
    draft.end_date = None;
    let audit = draft.into_audit(owner.id, jiff::Timestamp::UNIX_EPOCH).unwrap();
    assert_eq!(audit.status, AuditStatus::Draft);
}

#[test]
fn public_users_cannot_create_audits() {
    assert!(access::check_create_audit(&user(UserRole::Public)).is_err());
    assert!(access::check_create_audit(&user(UserRole::Registered)).is_ok());
}

#[test]
fn private_audits_visible_to_owner_and_oversight_only() {
    let owner = user(UserRole::AuditLead);
    let mut audit = audit_owned_by(&owner);

    assert!(access::check_view_audit(&owner, &audit).is_ok());
    assert!(access::check_view_audit(&user(UserRole::Governance), &audit).is_ok());
    assert!(access::check_view_audit(&user(UserRole::Admin), &audit).is_ok());
    assert!(access::check_view_audit(&user(UserRole::Clinician), &audit).is_err());

    audit.is_public = true;
    assert!(access::check_view_audit(&user(UserRole::Public), &audit).is_ok());
}

#[test]
fn only_owner_can_delete_and_only_drafts() {
    let owner = user(UserRole::AuditLead);
    let mut audit = audit_owned_by(&owner);

    assert!(matches!(
        access::check_delete_audit(&user(UserRole::Admin), &audit),
        Err(AccessError::Forbidden(_))
    ));
    assert!(access::check_delete_audit(&owner, &audit).is_ok());

    audit.status = AuditStatus::Active;
    assert!(matches!(
        access::check_delete_audit(&owner, &audit),
        Err(AccessError::InvalidState(_))
    ));
}

#[test]
fn episodes_need_an_active_audit() {
    let owner = user(UserRole::AuditLead);
    let mut audit = audit_owned_by(&owner);
    let versions = vec![published(&audit, 1)];

    let err = record_episode(
        &mut audit,
        &versions,
        &user(UserRole::Clinician),
        Uuid::new_v4(),
        submission(),
        jiff::Timestamp::UNIX_EPOCH,
    )
    .unwrap_err();
    assert!(matches!(err, AccessError::InvalidState(_)));
    assert_eq!(audit.total_episodes, 0);
}

#[test]
fn episodes_need_a_published_questionnaire() {
    let owner = user(UserRole::AuditLead);
    let mut audit = audit_owned_by(&owner);
    audit.status = AuditStatus::Active;

    let err = record_episode(
        &mut audit,
        &[],
        &user(UserRole::Clinician),
        Uuid::new_v4(),
        submission(),
        jiff::Timestamp::UNIX_EPOCH,
    )
    .unwrap_err();
    assert_eq!(
        err,
        AccessError::InvalidState("no published questionnaire available")
    );
}

#[test]
fn public_users_cannot_submit_episodes() {
    let owner = user(UserRole::AuditLead);
    let mut audit = audit_owned_by(&owner);
    audit.status = AuditStatus::Active;
    let versions = vec![published(&audit, 1)];

    let err = record_episode(
        &mut audit,
        &versions,
        &user(UserRole::Public),
        Uuid::new_v4(),
        submission(),
        jiff::Timestamp::UNIX_EPOCH,
    )
    .unwrap_err();
    assert!(matches!(err, AccessError::Forbidden(_)));
}

#[test]
fn episode_records_latest_published_version() {
    let owner = user(UserRole::AuditLead);
    let mut audit = audit_owned_by(&owner);
    audit.status = AuditStatus::Active;

    let mut draft_v3 = published(&audit, 3);
    draft_v3.is_published = false;
    let versions = vec![published(&audit, 1), published(&audit, 2), draft_v3];

    let clinician = user(UserRole::Clinician);
    let episode = record_episode(
        &mut audit,
        &versions,
        &clinician,
        Uuid::new_v4(),
        submission(),
        jiff::Timestamp::UNIX_EPOCH,
    )
    .unwrap();

    assert_eq!(episode.questionnaire_version, 2);
    assert_eq!(episode.submitted_by, clinician.id);
    assert_eq!(episode.responses["age"], 71);
    assert_eq!(audit.total_episodes, 1);
}

#[test]
fn episode_listing_is_owner_or_oversight() {
    let owner = user(UserRole::AuditLead);
    let audit = audit_owned_by(&owner);
    assert!(access::check_view_episodes(&owner, &audit).is_ok());
    assert!(access::check_view_episodes(&user(UserRole::Governance), &audit).is_ok());
    assert!(access::check_view_episodes(&user(UserRole::QiTeam), &audit).is_err());
    assert!(access::check_create_questionnaire(&user(UserRole::Admin), &audit).is_err());
    assert!(access::check_update_audit(&owner, &audit).is_ok());
}

#[test]
fn user_listing_is_oversight_only() {
    assert!(access::check_list_users(&user(UserRole::Admin)).is_ok());
    assert!(access::check_list_users(&user(UserRole::Governance)).is_ok());
    assert_eq!(
        access::check_list_users(&user(UserRole::AuditLead)).unwrap_err(),
        AccessError::Forbidden("not authorized to list users")
    );
}

#[test]
fn profiles_visible_to_self_and_oversight() {
    let clinician = user(UserRole::Clinician);
    let colleague = user(UserRole::Clinician);

    assert!(access::check_view_user(&clinician, clinician.id).is_ok());
    assert!(access::check_view_user(&user(UserRole::Governance), clinician.id).is_ok());
    assert!(access::check_view_user(&colleague, clinician.id).is_err());
}

#[test]
fn profiles_editable_by_self_only() {
    let clinician = user(UserRole::Clinician);

    assert!(access::check_update_user(&clinician, clinician.id).is_ok());
    assert_eq!(
        access::check_update_user(&user(UserRole::Admin), clinician.id).unwrap_err(),
        AccessError::Forbidden("not authorized to update this user")
    );
}
