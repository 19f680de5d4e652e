//! vev-barca: ferry seat allocation.
//!
//! A [`Barca`] owns a 60x20 [`OccupancyGrid`] (by default) and answers seat
//! requests such as `"F05A01"` with a [`SeatStatus`], applying a
//! load-dependent [`WeightRule`] to keep the ferry balanced.

pub mod barca;
pub mod grid;
pub mod seat;

pub use barca::{Barca, SeatStatus, WeightRule, ROWS, SEATS_PER_ROW};
pub use grid::OccupancyGrid;
pub use seat::{SeatCode, SeatCodeError, SEAT_CODE_PATTERN};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
