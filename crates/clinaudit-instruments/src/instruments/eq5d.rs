use crate::scoring::{InstrumentDomain, ScoreRange};
use crate::Instrument;

/// EQ-5D-5L: EuroQol five-dimension, five-level health questionnaire.
/// The recorded total is the EQ VAS, 0 (worst imaginable health) to 100 (best).
/// The descriptive-system index is country-tariff dependent and has no
/// universal bands.
pub struct Eq5d5l;

impl Instrument for Eq5d5l {
    fn code(&self) -> &str {
        "eq5d"
    }

    fn name(&self) -> &str {
        "EQ-5D-5L"
    }

    fn description(&self) -> &str {
        "Quality of life measure"
    }

    fn domain(&self) -> InstrumentDomain {
        InstrumentDomain::PatientReportedOutcomes
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: 100.0,
            step: Some(1.0),
        }
    }
}
