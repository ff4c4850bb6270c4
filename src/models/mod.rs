pub mod auditorium;
pub mod seat;

pub use auditorium::Auditorium;
pub use seat::{Seat, SeatPosition};
