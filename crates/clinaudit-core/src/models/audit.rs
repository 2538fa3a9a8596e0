use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A clinical audit: the container for questionnaire versions and episodes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Audit {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub clinical_domain: String,
    pub population: String,
    pub start_date: jiff::Timestamp,
    pub end_date: Option<jiff::Timestamp>,
    pub status: AuditStatus,
    pub governance_body: Option<String>,
    pub data_protection_level: DataProtectionLevel,
    pub retention_days: u32,
    pub owner_id: Uuid,
    pub is_public: bool,
    pub require_consent: bool,
    pub total_episodes: u64,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AuditStatus {
    Draft,
    UnderReview,
    Approved,
    Active,
    Paused,
    Closed,
    Archived,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DataProtectionLevel {
    #[default]
    NoPii,
    Pseudonymised,
    PiiRequired,
}

/// Request body for registering a new audit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuditDraft {
    pub title: String,
    pub description: Option<String>,
    pub clinical_domain: String,
    pub population: String,
    pub start_date: jiff::Timestamp,
    pub end_date: Option<jiff::Timestamp>,
    pub governance_body: Option<String>,
    #[serde(default)]
    pub data_protection_level: DataProtectionLevel,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub require_consent: bool,
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

fn default_retention_days() -> u32 {
    3650
}

impl AuditDraft {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(end_date) = self.end_date
            && end_date < self.start_date
        {
            return Err(CoreError::InvalidDateRange {
                start: self.start_date,
                end: end_date,
            });
        }
        Ok(())
    }

    /// Build a draft-status audit owned by `owner_id`.
    pub fn into_audit(self, owner_id: Uuid, now: jiff::Timestamp) -> Result<Audit, CoreError> {
        self.validate()?;
        Ok(Audit {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            clinical_domain: self.clinical_domain,
            population: self.population,
            start_date: self.start_date,
            end_date: self.end_date,
            status: AuditStatus::Draft,
            governance_body: self.governance_body,
            data_protection_level: self.data_protection_level,
            retention_days: self.retention_days,
            owner_id,
            is_public: self.is_public,
            require_consent: self.require_consent,
            total_episodes: 0,
            created_at: now,
            updated_at: now,
        })
    }
}
