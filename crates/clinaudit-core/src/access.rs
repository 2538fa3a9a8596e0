//! Ownership and role rules for audits, their data and user profiles.

use thiserror::Error;
use uuid::Uuid;

use crate::models::audit::{Audit, AuditStatus};
use crate::models::questionnaire::Questionnaire;
use crate::models::user::{User, UserRole};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The user's role or ownership does not permit the action.
    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    /// The action is permitted in principle but not in the audit's current state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

fn is_owner(user: &User, audit: &Audit) -> bool {
    audit.owner_id == user.id
}

pub fn check_list_users(user: &User) -> Result<(), AccessError> {
    if !user.role.has_oversight() {
        return Err(AccessError::Forbidden("not authorized to list users"));
    }
    Ok(())
}

/// Users see their own profile; oversight roles see anyone's.
pub fn check_view_user(user: &User, target: Uuid) -> Result<(), AccessError> {
    if user.id == target || user.role.has_oversight() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("not authorized to view this user"))
    }
}

/// Profiles are only ever edited by their owner, whatever the role.
pub fn check_update_user(user: &User, target: Uuid) -> Result<(), AccessError> {
    if user.id != target {
        return Err(AccessError::Forbidden("not authorized to update this user"));
    }
    Ok(())
}

pub fn check_create_audit(user: &User) -> Result<(), AccessError> {
    if user.role == UserRole::Public {
        return Err(AccessError::Forbidden(
            "public users cannot create audits",
        ));
    }
    Ok(())
}

pub fn check_view_audit(user: &User, audit: &Audit) -> Result<(), AccessError> {
    if is_owner(user, audit) || audit.is_public || user.role.has_oversight() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("not authorized to view this audit"))
    }
}

pub fn check_update_audit(user: &User, audit: &Audit) -> Result<(), AccessError> {
    if !is_owner(user, audit) {
        return Err(AccessError::Forbidden("only the audit owner can update"));
    }
    Ok(())
}

pub fn check_delete_audit(user: &User, audit: &Audit) -> Result<(), AccessError> {
    if !is_owner(user, audit) {
        return Err(AccessError::Forbidden("only the audit owner can delete"));
    }
    if audit.status != AuditStatus::Draft {
        return Err(AccessError::InvalidState(
            "only draft audits can be deleted",
        ));
    }
    Ok(())
}

pub fn check_create_questionnaire(user: &User, audit: &Audit) -> Result<(), AccessError> {
    if !is_owner(user, audit) {
        return Err(AccessError::Forbidden(
            "only the audit owner can create questionnaires",
        ));
    }
    Ok(())
}

/// Episodes go to active audits only, from non-public users, against the
/// latest published questionnaire. Returns that questionnaire.
pub fn check_submit_episode<'a>(
    user: &User,
    audit: &Audit,
    published: Option<&'a Questionnaire>,
) -> Result<&'a Questionnaire, AccessError> {
    if audit.status != AuditStatus::Active {
        return Err(AccessError::InvalidState(
            "audit is not active for data collection",
        ));
    }
    if user.role == UserRole::Public {
        return Err(AccessError::Forbidden(
            "clinician role required to submit data",
        ));
    }
    published.ok_or(AccessError::InvalidState(
        "no published questionnaire available",
    ))
}

pub fn check_view_episodes(user: &User, audit: &Audit) -> Result<(), AccessError> {
    if is_owner(user, audit) || user.role.has_oversight() {
        Ok(())
    } else {
        Err(AccessError::Forbidden("not authorized to view episodes"))
    }
}
