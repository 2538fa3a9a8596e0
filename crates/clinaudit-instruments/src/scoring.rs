use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The clinical area a validated instrument measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentDomain {
    PatientReportedOutcomes,
    FunctionalAssessment,
    MentalHealth,
}

impl InstrumentDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentDomain::PatientReportedOutcomes => "patient_reported_outcomes",
            InstrumentDomain::FunctionalAssessment => "functional_assessment",
            InstrumentDomain::MentalHealth => "mental_health",
        }
    }
}

impl fmt::Display for InstrumentDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines the valid range for an instrument total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// An interpretation band over a closed interval of totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBand {
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
}

impl ScoreBand {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
