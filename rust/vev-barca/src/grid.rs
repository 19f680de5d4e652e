//! Row-major seat occupancy with a running occupied count.

use vev_core::{checked_seats, ConfigError, DEFAULT_ROWS, DEFAULT_SEATS_PER_ROW};

use crate::seat::{SeatCode, SeatCodeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rows: usize,
    seats_per_row: usize,
    cells: Vec<bool>,
    occupied: usize,
}

impl OccupancyGrid {
    /// An empty grid. Seats only ever go from free to occupied.
    pub fn new(rows: usize, seats_per_row: usize) -> Result<Self, ConfigError> {
        if rows == 0 || seats_per_row == 0 {
            return Err(ConfigError::Invalid(
                "barca.rows and barca.seats_per_row must be positive",
            ));
        }
        let seats = checked_seats(rows, seats_per_row).ok_or(ConfigError::Invalid(
            "barca.rows * barca.seats_per_row is too large",
        ))?;
        Ok(Self::empty(rows, seats_per_row, seats))
    }

    /// The empty 60x20 ferry.
    pub fn standard() -> Self {
        Self::empty(
            DEFAULT_ROWS,
            DEFAULT_SEATS_PER_ROW,
            DEFAULT_ROWS * DEFAULT_SEATS_PER_ROW,
        )
    }

    fn empty(rows: usize, seats_per_row: usize, seats: usize) -> Self {
        Self {
            rows,
            seats_per_row,
            cells: vec![false; seats],
            occupied: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn free(&self) -> usize {
        self.cells.len() - self.occupied
    }

    /// Validate `code` against this grid's dimensions.
    pub fn locate(&self, code: SeatCode) -> Result<SeatCode, SeatCodeError> {
        code.check_bounds(self.rows, self.seats_per_row)
    }

    /// Out-of-bounds seats read as unoccupied.
    pub fn is_occupied(&self, row: usize, seat: usize) -> bool {
        self.index(row, seat)
            .map(|i| self.cells[i])
            .unwrap_or(false)
    }

    /// Mark a seat occupied. Returns `true` if it was free before.
    pub fn occupy(&mut self, row: usize, seat: usize) -> Result<bool, SeatCodeError> {
        let i = self
            .index(row, seat)
            .ok_or(SeatCodeError::OutOfBounds {
                row,
                seat,
                rows: self.rows,
                seats_per_row: self.seats_per_row,
            })?;
        if self.cells[i] {
            return Ok(false);
        }
        self.cells[i] = true;
        self.occupied += 1;
        Ok(true)
    }

    /// Occupied seats in `row`; zero for rows past the end.
    pub fn occupied_in_row(&self, row: usize) -> usize {
        if row >= self.rows {
            return 0;
        }
        let start = row * self.seats_per_row;
        self.cells[start..start + self.seats_per_row]
            .iter()
            .filter(|&&c| c)
            .count()
    }

    fn index(&self, row: usize, seat: usize) -> Option<usize> {
        (row < self.rows && seat < self.seats_per_row).then(|| row * self.seats_per_row + seat)
    }
}
