//! clinaudit-core
//!
//! Pure domain types for the clinical-audit platform: questions and
//! questionnaire versions, audits, episodes, users, and the access rules
//! between them. No I/O; this is the shared vocabulary of the other crates.

pub mod access;
pub mod error;
pub mod models;
