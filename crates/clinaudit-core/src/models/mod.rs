pub mod audit;
pub mod episode;
pub mod question;
pub mod questionnaire;
pub mod user;
