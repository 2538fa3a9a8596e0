//! clinaudit-guidance
//!
//! Methodological guidance for questionnaire design. Deterministic,
//! side-effect-free rules over a questionnaire's structure:
//!
//! - [`analyzer`]: per-question warnings and suggestions
//! - [`scorer`]: methodological quality and analysability scores
//! - [`completeness`]: coverage of the five core audit domains
//! - [`improvements`]: wording and documentation suggestions per question
//! - [`review`]: all of the above combined, and written back onto stored
//!   questionnaires

pub mod analyzer;
pub mod completeness;
pub mod error;
pub mod findings;
pub mod improvements;
pub mod review;
pub mod scorer;

pub use analyzer::{analyze_question, QuestionAnalysis};
pub use completeness::{check_completeness, CompletenessReport, CoverageDomain};
pub use improvements::suggest_improvements;
pub use review::{apply_review, review_questionnaire, GuidanceReport, QuestionReview};
pub use scorer::{score_questionnaire, QualityScores};
