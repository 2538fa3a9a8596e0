use crate::scoring::{InstrumentDomain, ScoreBand, ScoreRange};
use crate::Instrument;

/// Barthel Index of activities of daily living.
/// 10 items, total 0–100 in steps of 5. Higher = more independent.
pub struct BarthelIndex;

const BANDS: &[ScoreBand] = &[
    ScoreBand {
        min: 0.0,
        max: 20.0,
        label: "Total dependency",
    },
    ScoreBand {
        min: 21.0,
        max: 60.0,
        label: "Severe dependency",
    },
    ScoreBand {
        min: 61.0,
        max: 90.0,
        label: "Moderate dependency",
    },
    ScoreBand {
        min: 91.0,
        max: 99.0,
        label: "Slight dependency",
    },
    ScoreBand {
        min: 100.0,
        max: 100.0,
        label: "Independent",
    },
];

impl Instrument for BarthelIndex {
    fn code(&self) -> &str {
        "barthel"
    }

    fn name(&self) -> &str {
        "Barthel Index"
    }

    fn description(&self) -> &str {
        "Activities of daily living"
    }

    fn domain(&self) -> InstrumentDomain {
        InstrumentDomain::FunctionalAssessment
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: 100.0,
            step: Some(5.0),
        }
    }

    fn bands(&self) -> &[ScoreBand] {
        BANDS
    }
}
