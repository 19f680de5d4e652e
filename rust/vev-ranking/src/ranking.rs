//! Capacity-bounded leaderboard.
//!
//! Records are kept sorted by score, highest first. Inserting into a full
//! ranking evicts the current worst entry, provided the newcomer scores at
//! least as much; otherwise the insert is rejected and nothing changes.
//!
//! Ties: an earlier insertion ranks ahead of a later one with the same score.
//! On a full ranking the worst entry is evicted before the newcomer is placed,
//! so a newcomer tying the worst score takes that entry's slot.

use std::fmt;

use thiserror::Error;
use vev_core::RankingConfig;
use vev_logging::{emit_to, EventSink, RankingInsertEventV1, EVENT_SCHEMA_VERSION};

use crate::record::Record;

/// Default ranking capacity.
pub const MAX_RECORDS: usize = vev_core::DEFAULT_RANKING_CAPACITY;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    #[error("no record given")]
    MissingRecord,
    #[error("ranking is empty")]
    Empty,
    #[error("ranking capacity must be positive")]
    ZeroCapacity,
}

pub struct Ranking {
    records: Vec<Record>,
    capacity: usize,
    sink: Option<Box<dyn EventSink>>,
}

impl Ranking {
    /// An empty ranking holding up to [`MAX_RECORDS`] records.
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(MAX_RECORDS),
            capacity: MAX_RECORDS,
            sink: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, RankingError> {
        if capacity == 0 {
            return Err(RankingError::ZeroCapacity);
        }
        Ok(Self {
            records: Vec::with_capacity(capacity),
            capacity,
            sink: None,
        })
    }

    pub fn from_config(cfg: &RankingConfig) -> Result<Self, RankingError> {
        Self::with_capacity(cfg.capacity)
    }

    /// Attach a sink that receives one event per insert attempt.
    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Insert `record` keeping descending score order.
    ///
    /// Returns `false` only when the ranking is full and `record` scores
    /// strictly below the current worst entry.
    pub fn insert(&mut self, record: Record) -> bool {
        let mut evicted = None;
        if self.is_full() {
            let worst = self.records.last().map(Record::score);
            if worst.is_some_and(|w| record.score() < w) {
                self.emit(&record, None, None);
                return false;
            }
            evicted = self.records.pop();
        }

        let rank = self
            .records
            .partition_point(|r| r.score() >= record.score());
        self.emit(&record, Some(rank), evicted.as_ref().map(Record::score));
        self.records.insert(rank, record);
        debug_assert!(self.records.len() <= self.capacity);
        true
    }

    /// Like [`Ranking::insert`], but an absent record is an error rather than
    /// something the type system rules out.
    pub fn try_insert(&mut self, record: Option<Record>) -> Result<bool, RankingError> {
        let record = record.ok_or(RankingError::MissingRecord)?;
        Ok(self.insert(record))
    }

    /// Record at zero-based `rank`, or `None` past the end.
    pub fn get(&self, rank: usize) -> Option<&Record> {
        self.records.get(rank)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Highest-scoring record; `None` when empty.
    pub fn best(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Lowest-ranked record.
    ///
    /// Unlike [`Ranking::best`], an empty ranking is an error here.
    pub fn worst(&self) -> Result<&Record, RankingError> {
        self.records.last().ok_or(RankingError::Empty)
    }

    /// Records from best to worst.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    fn emit(&mut self, record: &Record, rank: Option<usize>, evicted_score: Option<i64>) {
        if self.sink.is_none() {
            return;
        }
        // The record is not stored yet when accepted, so count it here.
        let count = self.records.len() + usize::from(rank.is_some());
        let event = RankingInsertEventV1 {
            event: RankingInsertEventV1::EVENT,
            v: EVENT_SCHEMA_VERSION,
            ts_ms: vev_logging::now_ms(),
            name: record.name().map(str::to_owned),
            score: record.score(),
            accepted: rank.is_some(),
            rank,
            evicted_score,
            count,
        };
        emit_to(&mut self.sink, event);
    }
}

impl Default for Ranking {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranking")
            .field("records", &self.records)
            .field("capacity", &self.capacity)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, record) in self.records.iter().enumerate() {
            writeln!(f, "{}. {}", rank + 1, record)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
