//! clinaudit-instruments
//!
//! The catalogue of validated clinical instruments a questionnaire question
//! can be mapped to. Pure data: each instrument carries its catalogue code,
//! display name, description, domain, and the range and interpretation bands
//! of its total score.

pub mod error;
pub mod instruments;
pub mod scoring;

use error::InstrumentError;
use scoring::{InstrumentDomain, ScoreBand, ScoreRange};

/// Trait implemented by each catalogued instrument.
pub trait Instrument: Send + Sync {
    /// Catalogue key (e.g., "phq9", "eq5d").
    fn code(&self) -> &str;

    /// Display name (e.g., "PHQ-9", "EQ-5D-5L").
    fn name(&self) -> &str;

    /// Short statement of what the instrument measures.
    fn description(&self) -> &str;

    fn domain(&self) -> InstrumentDomain;

    /// Valid range of the instrument's total score.
    fn score_range(&self) -> ScoreRange;

    /// Interpretation bands over the total, lowest first. Empty when the
    /// instrument has no published cut-offs.
    fn bands(&self) -> &[ScoreBand] {
        &[]
    }

    /// Check a recorded total against the instrument's range.
    fn validate_total(&self, value: f64) -> Result<(), InstrumentError> {
        let range = self.score_range();
        if range.contains(value) {
            Ok(())
        } else {
            Err(InstrumentError::OutOfRange {
                instrument: self.name().to_string(),
                value,
                min: range.min,
                max: range.max,
            })
        }
    }

    /// The band a valid total falls in, if the instrument defines bands.
    fn interpret(&self, value: f64) -> Result<Option<&ScoreBand>, InstrumentError> {
        self.validate_total(value)?;
        Ok(self.bands().iter().find(|band| band.contains(value)))
    }
}

static CATALOGUE: &[&dyn Instrument] = &[
    &instruments::eq5d::Eq5d5l,
    &instruments::barthel::BarthelIndex,
    &instruments::phq9::Phq9,
    &instruments::gad7::Gad7,
];

/// Return all catalogued instruments, in catalogue order.
pub fn all_instruments() -> &'static [&'static dyn Instrument] {
    CATALOGUE
}

/// Look up an instrument by catalogue code.
pub fn get_instrument(code: &str) -> Option<&'static dyn Instrument> {
    CATALOGUE.iter().copied().find(|i| i.code() == code)
}
