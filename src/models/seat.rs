use serde::Serialize;
use std::fmt;

/// Позиция места в зале: ряд и номер в ряду, оба с нуля.
/// Используется как идентификатор места при бронировании.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SeatPosition {
    pub row: usize,
    pub column: usize,
}

impl SeatPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    row: usize,
    column: usize,
    occupied: bool,
}

impl Seat {
    // Места создаются только залом
    pub(crate) fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            occupied: false,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.occupied
    }

    pub(crate) fn take_seat(&mut self) {
        self.occupied = true;
    }

    pub(crate) fn release_seat(&mut self) {
        self.occupied = false;
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> SeatPosition {
        SeatPosition::new(self.row, self.column)
    }
}

impl From<&Seat> for SeatPosition {
    fn from(seat: &Seat) -> Self {
        seat.position()
    }
}
