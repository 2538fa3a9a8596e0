use crate::scoring::{InstrumentDomain, ScoreBand, ScoreRange};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire depression module.
/// 9 items rated 0–3, total 0–27.
pub struct Phq9;

const BANDS: &[ScoreBand] = &[
    ScoreBand {
        min: 0.0,
        max: 4.0,
        label: "Minimal depression",
    },
    ScoreBand {
        min: 5.0,
        max: 9.0,
        label: "Mild depression",
    },
    ScoreBand {
        min: 10.0,
        max: 14.0,
        label: "Moderate depression",
    },
    ScoreBand {
        min: 15.0,
        max: 19.0,
        label: "Moderately severe depression",
    },
    ScoreBand {
        min: 20.0,
        max: 27.0,
        label: "Severe depression",
    },
];

impl Instrument for Phq9 {
    fn code(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn description(&self) -> &str {
        "Depression screening"
    }

    fn domain(&self) -> InstrumentDomain {
        InstrumentDomain::MentalHealth
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: 27.0,
            step: Some(1.0),
        }
    }

    fn bands(&self) -> &[ScoreBand] {
        BANDS
    }
}
