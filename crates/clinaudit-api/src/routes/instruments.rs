use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

use clinaudit_instruments::error::InstrumentError;
use clinaudit_instruments::scoring::{InstrumentDomain, ScoreBand, ScoreRange};
use clinaudit_instruments::{all_instruments, get_instrument, Instrument};

use crate::error::ApiError;
use crate::extract::ApiJson;

#[derive(Serialize)]
pub struct InstrumentSummary {
    code: String,
    name: String,
    description: String,
    domain: InstrumentDomain,
}

impl InstrumentSummary {
    fn from_instrument(instrument: &dyn Instrument) -> Self {
        Self {
            code: instrument.code().to_string(),
            name: instrument.name().to_string(),
            description: instrument.description().to_string(),
            domain: instrument.domain(),
        }
    }
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    #[serde(flatten)]
    summary: InstrumentSummary,
    score_range: ScoreRange,
    bands: Vec<ScoreBand>,
}

#[derive(Deserialize)]
pub struct TotalScore {
    total: f64,
}

#[derive(Serialize)]
pub struct Interpretation {
    code: String,
    total: f64,
    band: Option<String>,
}

fn lookup(code: &str) -> Result<&'static dyn Instrument, ApiError> {
    get_instrument(code)
        .ok_or_else(|| InstrumentError::UnknownInstrument(code.to_string()).into())
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary::from_instrument(*i))
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(code): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = lookup(&code)?;

    Ok(Json(InstrumentDetail {
        summary: InstrumentSummary::from_instrument(instrument),
        score_range: instrument.score_range(),
        bands: instrument.bands().to_vec(),
    }))
}

pub async fn interpret_total(
    Path(code): Path<String>,
    ApiJson(score): ApiJson<TotalScore>,
) -> Result<Json<Interpretation>, ApiError> {
    let instrument = lookup(&code)?;
    let band = instrument.interpret(score.total)?;

    Ok(Json(Interpretation {
        code: instrument.code().to_string(),
        total: score.total,
        band: band.map(|b| b.label.to_string()),
    }))
}
