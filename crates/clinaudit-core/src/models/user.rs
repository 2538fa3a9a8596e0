use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
}

/// Platform roles, lowest privilege first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    Public,
    Registered,
    Clinician,
    AuditLead,
    QiTeam,
    Governance,
    Admin,
    Dpo,
}

impl UserRole {
    /// Roles with read access to every audit and its episodes.
    pub fn has_oversight(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Governance)
    }
}
