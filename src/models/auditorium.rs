use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::config::AuditoriumConfig;
use crate::error::AuditoriumError;
use crate::models::seat::{Seat, SeatPosition};

/// Зал кинотеатра: ряды мест, длина каждого ряда задается при создании
/// и может отличаться от соседних.
#[derive(Debug, Clone, Serialize)]
pub struct Auditorium {
    rows: Vec<Vec<Seat>>,
}

impl Auditorium {
    /// Создает зал по списку вместимостей рядов. Все места свободны.
    pub fn new(rows: &[usize]) -> Result<Self, AuditoriumError> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, &len)| {
                if len == 0 {
                    return Err(AuditoriumError::EmptyRow { row });
                }
                Ok((0..len).map(|column| Seat::new(row, column)).collect())
            })
            .collect::<Result<Vec<Vec<Seat>>, _>>()?;

        Ok(Self { rows })
    }

    pub fn from_config(config: &AuditoriumConfig) -> Result<Self, AuditoriumError> {
        Self::new(&config.rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    pub fn total_seats(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn seat(&self, position: SeatPosition) -> Option<&Seat> {
        self.rows.get(position.row)?.get(position.column)
    }

    pub fn seats_in_row(&self, row: usize) -> Option<&[Seat]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    // Все места по рядам, слева направо
    fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flatten()
    }

    pub fn count_available_seats(&self) -> usize {
        self.seats().filter(|seat| seat.is_available()).count()
    }

    /// Первое свободное место в зале: ряды по возрастанию, затем места по возрастанию.
    pub fn find_first_available_seat(&self) -> Option<&Seat> {
        self.seats().find(|seat| seat.is_available())
    }

    /// Первое свободное место в ряду. `None`, если ряд занят целиком или его нет.
    pub fn find_first_available_seat_in_row(&self, row: usize) -> Option<&Seat> {
        self.rows.get(row)?.iter().find(|seat| seat.is_available())
    }

    /// Ищет в ряду `amount` свободных мест подряд и возвращает первое из них.
    ///
    /// Возвращает самую левую подходящую серию. Несуществующий ряд считается
    /// ошибкой вызывающего кода.
    pub fn get_available_seats_in_row(
        &self,
        row: usize,
        amount: usize,
    ) -> Result<Option<&Seat>, AuditoriumError> {
        let seats = self.rows.get(row).ok_or(AuditoriumError::RowOutOfBounds {
            row,
            rows: self.rows.len(),
        })?;

        Ok(find_run(seats, amount))
    }

    /// Ищет `amount` свободных мест подряд во всем зале, ряд за рядом.
    pub fn get_available_seats(&self, amount: usize) -> Option<&Seat> {
        self.rows.iter().find_map(|seats| find_run(seats, amount))
    }

    /// Занимает `amount` мест подряд начиная с `seat`.
    ///
    /// Серия обрезается концом ряда. Уже занятые места внутри окна пропускаются
    /// без ошибки, так что вызывающий код должен сначала найти свободную серию.
    /// Проверка размера выполняется до изменения мест.
    pub fn take_seats(&mut self, seat: SeatPosition, amount: usize) -> Result<(), AuditoriumError> {
        let row = self.locate_row_mut(seat)?;
        let row_len = row.len();

        if amount > row_len {
            let err = AuditoriumError::OutOfBounds {
                row: seat.row,
                column: seat.column,
                amount,
                row_len,
            };
            warn!("take_seats rejected: {}", err);
            return Err(err);
        }

        let end = (seat.column + amount).min(row_len);
        let mut taken = 0;
        for s in &mut row[seat.column..end] {
            if s.is_available() {
                s.take_seat();
                taken += 1;
            }
        }

        debug!("Took {} of {} seats starting at {}", taken, amount, seat);
        Ok(())
    }

    /// Освобождает занятые места в окне из `amount` мест начиная с `seat`.
    ///
    /// Свободные места в окне не трогаются, частичное освобождение не
    /// считается ошибкой.
    pub fn release_seats(
        &mut self,
        seat: SeatPosition,
        amount: usize,
    ) -> Result<(), AuditoriumError> {
        let row = self.locate_row_mut(seat)?;
        let row_len = row.len();

        let end = match seat.column.checked_add(amount).filter(|&end| end <= row_len) {
            Some(end) => end,
            None => {
                let err = AuditoriumError::OutOfBounds {
                    row: seat.row,
                    column: seat.column,
                    amount,
                    row_len,
                };
                warn!("release_seats rejected: {}", err);
                return Err(err);
            }
        };

        let mut released = 0;
        for s in &mut row[seat.column..end] {
            if !s.is_available() {
                s.release_seat();
                released += 1;
            }
        }

        debug!("Released {} of {} seats starting at {}", released, amount, seat);
        Ok(())
    }

    // Находит ряд, которому принадлежит место
    fn locate_row_mut(&mut self, seat: SeatPosition) -> Result<&mut [Seat], AuditoriumError> {
        match self.rows.get_mut(seat.row) {
            Some(row) if seat.column < row.len() => Ok(row.as_mut_slice()),
            _ => {
                warn!("Seat {} not found in auditorium", seat);
                Err(AuditoriumError::UnknownSeat(seat))
            }
        }
    }
}

// Самая левая серия из `amount` свободных мест в ряду
fn find_run(seats: &[Seat], amount: usize) -> Option<&Seat> {
    if amount == 0 {
        return None;
    }

    let mut run = 0;
    for (column, seat) in seats.iter().enumerate() {
        if seat.is_available() {
            run += 1;
        } else {
            run = 0;
        }
        if run == amount {
            return Some(&seats[column + 1 - amount]);
        }
    }

    None
}

// Схема зала: '.' свободно, 'X' занято
impl fmt::Display for Auditorium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{:>3} ", i)?;
            for seat in row {
                f.write_str(if seat.is_available() { "." } else { "X" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_know_their_position() {
        let hall = Auditorium::new(&[2, 4, 1]).unwrap();

        for row in 0..hall.row_count() {
            for (column, seat) in hall.seats_in_row(row).unwrap().iter().enumerate() {
                assert_eq!(seat.position(), SeatPosition::new(row, column));
            }
        }
        assert_eq!(hall.total_seats(), 7);
        assert_eq!(hall.row_len(1), Some(4));
        assert_eq!(hall.row_len(3), None);
    }

    #[test]
    fn zero_capacity_row_is_rejected() {
        let err = Auditorium::new(&[3, 0, 2]).unwrap_err();
        assert_eq!(err, AuditoriumError::EmptyRow { row: 1 });
    }

    #[test]
    fn display_marks_occupied_seats() {
        let mut hall = Auditorium::new(&[3, 2]).unwrap();
        hall.take_seats(SeatPosition::new(0, 1), 1).unwrap();

        assert_eq!(hall.to_string(), "  0 .X.\n  1 ..\n");
    }

    #[test]
    fn take_seats_is_truncated_at_row_end() {
        let mut hall = Auditorium::new(&[4]).unwrap();
        hall.take_seats(SeatPosition::new(0, 2), 4).unwrap();

        assert_eq!(hall.count_available_seats(), 2);
        assert!(!hall.seat(SeatPosition::new(0, 3)).unwrap().is_available());
    }

    #[test]
    fn find_run_picks_leftmost_run() {
        let mut hall = Auditorium::new(&[6]).unwrap();
        hall.take_seats(SeatPosition::new(0, 2), 1).unwrap();
        let seats = hall.seats_in_row(0).unwrap();

        assert_eq!(find_run(seats, 2).map(Seat::position), Some(SeatPosition::new(0, 0)));
        assert_eq!(find_run(seats, 3).map(Seat::position), Some(SeatPosition::new(0, 3)));
        assert_eq!(find_run(seats, 4), None);
        assert_eq!(find_run(seats, 0), None);
    }
}
