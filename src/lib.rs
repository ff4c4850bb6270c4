pub mod config;
pub mod error;
pub mod models;

pub use error::{AuditoriumError, ConfigError};
pub use models::{Auditorium, Seat, SeatPosition};
