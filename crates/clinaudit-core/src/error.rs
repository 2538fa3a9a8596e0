use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange {
        start: jiff::Timestamp,
        end: jiff::Timestamp,
    },

    #[error("question at position {position} has order_index {found}")]
    OrderIndex { position: usize, found: u32 },
}
