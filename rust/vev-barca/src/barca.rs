//! Seat assignment rules for the ferry.
//!
//! `evaluate` checks, in order:
//! 1. the code matches the seat pattern and names a seat on the ferry (else `Invalid`)
//! 2. the seat is free (else `BlockedFull`)
//! 3. the weight-distribution rule for the current load:
//!    - light load: rows past the front section are `BlockedFull`
//!    - medium load: rows before the rear section are `BlockedWeight`
//!    - heavy load: no restriction
//!
//! and only then marks the seat occupied (`Assigned`).

use std::fmt;

use vev_core::{BarcaConfig, ConfigError};
use vev_logging::{debug_log, emit_to, EventSink, SeatEventV1, EVENT_SCHEMA_VERSION};

use crate::grid::OccupancyGrid;
use crate::seat::{SeatCode, SeatCodeError};

/// Default ferry rows.
pub const ROWS: usize = vev_core::DEFAULT_ROWS;

/// Default seats per row.
pub const SEATS_PER_ROW: usize = vev_core::DEFAULT_SEATS_PER_ROW;

/// Outcome of a seat request. Discriminants are the classic exercise codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SeatStatus {
    /// Malformed code or a seat that does not exist.
    Invalid = 0,
    /// Seat already taken, or row closed while the ferry is lightly loaded.
    BlockedFull = 1,
    /// Row closed to balance a medium load.
    BlockedWeight = 2,
    /// Seat was free and is now occupied.
    Assigned = 3,
}

impl SeatStatus {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Invalid),
            1 => Some(Self::BlockedFull),
            2 => Some(Self::BlockedWeight),
            3 => Some(Self::Assigned),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::BlockedFull => "blocked_full",
            Self::BlockedWeight => "blocked_weight",
            Self::Assigned => "assigned",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load-dependent row restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightRule {
    pub light_load_max: usize,
    pub medium_load_max: usize,
    pub front_rows_max: usize,
    pub rear_rows_min: usize,
}

impl WeightRule {
    pub fn from_config(cfg: &BarcaConfig) -> Self {
        Self {
            light_load_max: cfg.light_load_max,
            medium_load_max: cfg.medium_load_max,
            front_rows_max: cfg.front_rows_max,
            rear_rows_min: cfg.rear_rows_min,
        }
    }

    /// Why `row` is closed with `occupied` seats already taken, if it is.
    pub fn restriction(&self, row: usize, occupied: usize) -> Option<SeatStatus> {
        if occupied <= self.light_load_max {
            (row > self.front_rows_max).then_some(SeatStatus::BlockedFull)
        } else if occupied <= self.medium_load_max {
            (row < self.rear_rows_min).then_some(SeatStatus::BlockedWeight)
        } else {
            None
        }
    }
}

impl Default for WeightRule {
    fn default() -> Self {
        Self::from_config(&BarcaConfig::default())
    }
}

pub struct Barca {
    grid: OccupancyGrid,
    rule: WeightRule,
    sink: Option<Box<dyn EventSink>>,
}

impl Barca {
    /// An empty 60x20 ferry with the default weight rule.
    pub fn new() -> Self {
        Self {
            grid: OccupancyGrid::standard(),
            rule: WeightRule::default(),
            sink: None,
        }
    }

    /// An empty ferry with the layout and thresholds of `cfg`.
    pub fn from_config(cfg: &BarcaConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            grid: OccupancyGrid::new(cfg.rows, cfg.seats_per_row)?,
            rule: WeightRule::from_config(cfg),
            sink: None,
        })
    }

    /// Attach a sink that receives one event per `evaluate` call.
    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Try to seat a passenger at `code`. Never fails; see [`SeatStatus`].
    pub fn evaluate(&mut self, code: &str) -> SeatStatus {
        let status = match SeatCode::parse(code).and_then(|c| self.grid.locate(c)) {
            Ok(seat) => self.assign(seat),
            Err(e) => {
                debug_log(
                    "vev_barca::Barca::evaluate",
                    "rejected seat code",
                    serde_json::json!({ "code": code, "error": e.to_string() }),
                );
                SeatStatus::Invalid
            }
        };
        self.emit(code, status);
        status
    }

    /// Occupy a seat directly, bypassing the weight rule.
    ///
    /// Used to stage a loaded ferry. Returns `true` if the seat was free.
    pub fn occupy(&mut self, row: usize, seat: usize) -> Result<bool, SeatCodeError> {
        self.grid.occupy(row, seat)
    }

    pub fn occupied(&self) -> usize {
        self.grid.occupied()
    }

    pub fn is_occupied(&self, row: usize, seat: usize) -> bool {
        self.grid.is_occupied(row, seat)
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn rule(&self) -> &WeightRule {
        &self.rule
    }

    fn assign(&mut self, seat: SeatCode) -> SeatStatus {
        if self.grid.is_occupied(seat.row, seat.seat) {
            return SeatStatus::BlockedFull;
        }
        if let Some(blocked) = self.rule.restriction(seat.row, self.grid.occupied()) {
            return blocked;
        }
        match self.grid.occupy(seat.row, seat.seat) {
            Ok(_) => SeatStatus::Assigned,
            // `seat` was located on this grid already.
            Err(_) => SeatStatus::Invalid,
        }
    }

    fn emit(&mut self, code: &str, status: SeatStatus) {
        if self.sink.is_none() {
            return;
        }
        let event = SeatEventV1 {
            event: SeatEventV1::EVENT,
            v: EVENT_SCHEMA_VERSION,
            ts_ms: vev_logging::now_ms(),
            code: code.to_owned(),
            status: status.as_str(),
            status_code: status.code(),
            occupied: self.grid.occupied(),
        };
        emit_to(&mut self.sink, event);
    }
}

impl Default for Barca {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Barca {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Barca")
            .field("rows", &self.grid.rows())
            .field("seats_per_row", &self.grid.seats_per_row())
            .field("occupied", &self.grid.occupied())
            .field("rule", &self.rule)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
