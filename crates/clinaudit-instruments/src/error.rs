use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument}: total {value} is outside range [{min}, {max}]")]
    OutOfRange {
        instrument: String,
        value: f64,
        min: f64,
        max: f64,
    },
}
