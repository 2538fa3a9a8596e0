pub mod barthel;
pub mod eq5d;
pub mod gad7;
pub mod phq9;
