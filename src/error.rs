use thiserror::Error;

use crate::models::SeatPosition;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditoriumError {
    // Запрошено больше мест, чем есть в ряду, или окно выходит за конец ряда
    #[error("row {row} has {row_len} seats, cannot cover {amount} seats from column {column}")]
    OutOfBounds {
        row: usize,
        column: usize,
        amount: usize,
        row_len: usize,
    },

    #[error("row {row} does not exist, auditorium has {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("seat {0} does not belong to this auditorium")]
    UnknownSeat(SeatPosition),

    #[error("row {row} must have at least one seat")]
    EmptyRow { row: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid seat count {value:?} in AUDITORIUM_ROWS")]
    InvalidRow { value: String },

    #[error("AUDITORIUM_ROWS must list at least one row")]
    EmptyLayout,
}
