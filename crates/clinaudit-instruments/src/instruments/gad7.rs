use crate::scoring::{InstrumentDomain, ScoreBand, ScoreRange};
use crate::Instrument;

/// GAD-7: Generalised Anxiety Disorder assessment.
/// 7 items rated 0–3, total 0–21.
pub struct Gad7;

const BANDS: &[ScoreBand] = &[
    ScoreBand {
        min: 0.0,
        max: 4.0,
        label: "Minimal anxiety",
    },
    ScoreBand {
        min: 5.0,
        max: 9.0,
        label: "Mild anxiety",
    },
    ScoreBand {
        min: 10.0,
        max: 14.0,
        label: "Moderate anxiety",
    },
    ScoreBand {
        min: 15.0,
        max: 21.0,
        label: "Severe anxiety",
    },
];

impl Instrument for Gad7 {
    fn code(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn description(&self) -> &str {
        "Anxiety screening"
    }

    fn domain(&self) -> InstrumentDomain {
        InstrumentDomain::MentalHealth
    }

    fn score_range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: 21.0,
            step: Some(1.0),
        }
    }

    fn bands(&self) -> &[ScoreBand] {
        BANDS
    }
}
