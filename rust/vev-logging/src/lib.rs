//! vev-logging: NDJSON events + debug logging switch.
//!
//! Components emit one versioned event per operation into an [`EventSink`].
//! [`NdjsonWriter`] appends them to a file, [`MemorySink`] keeps them for tests.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event schema version stamped into every record.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

/// Environment switch for [`debug_log`].
pub const DEBUG_LOG_ENV: &str = "VEV_DEBUG_LOG";

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true" | "yes"))
}

/// Whether `VEV_DEBUG_LOG` was set when first asked. Read once per process.
pub fn debug_enabled() -> bool {
    static ON: OnceLock<bool> = OnceLock::new();
    *ON.get_or_init(|| flag_enabled(std::env::var(DEBUG_LOG_ENV).ok().as_deref()))
}

/// The JSON line [`debug_log`] writes, without the newline.
pub fn debug_line(location: &str, message: &str, data: serde_json::Value) -> Option<String> {
    let payload = serde_json::json!({
        "ts_ms": now_ms(),
        "location": location,
        "message": message,
        "data": data,
    });
    serde_json::to_string(&payload).ok()
}

/// Write one JSON line to stderr when `VEV_DEBUG_LOG` is set.
pub fn debug_log(location: &str, message: &str, data: serde_json::Value) {
    if !debug_enabled() {
        return;
    }
    if let Some(line) = debug_line(location, message, data) {
        eprintln!("{line}");
    }
}

/// One ranking insertion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingInsertEventV1 {
    pub event: &'static str,
    pub v: u32,
    pub ts_ms: u64,

    pub name: Option<String>,
    pub score: i64,
    pub accepted: bool,
    /// Rank the record landed on, if accepted.
    pub rank: Option<usize>,
    /// Score that fell off the end to make room, if any.
    pub evicted_score: Option<i64>,
    pub count: usize,
}

impl RankingInsertEventV1 {
    pub const EVENT: &'static str = "ranking_insert";
}

/// One seat evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatEventV1 {
    pub event: &'static str,
    pub v: u32,
    pub ts_ms: u64,

    pub code: String,
    pub status: &'static str,
    pub status_code: u8,
    /// Occupied seats after the evaluation.
    pub occupied: usize,
}

impl SeatEventV1 {
    pub const EVENT: &'static str = "seat_evaluate";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Event {
    RankingInsert(RankingInsertEventV1),
    Seat(SeatEventV1),
}

impl From<RankingInsertEventV1> for Event {
    fn from(e: RankingInsertEventV1) -> Self {
        Self::RankingInsert(e)
    }
}

impl From<SeatEventV1> for Event {
    fn from(e: SeatEventV1) -> Self {
        Self::Seat(e)
    }
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Destination for component events.
///
/// `Send` so that components holding a sink can move between threads.
pub trait EventSink: Send {
    fn emit(&mut self, event: &Event) -> Result<(), NdjsonError>;
}

/// Emit into an optional sink; failures go to the debug log and are otherwise dropped.
pub fn emit_to(sink: &mut Option<Box<dyn EventSink>>, event: impl Into<Event>) {
    let Some(sink) = sink.as_mut() else {
        return;
    };
    let event = event.into();
    if let Err(e) = sink.emit(&event) {
        debug_log(
            "vev_logging::emit_to",
            "event sink failed",
            serde_json::json!({ "error": e.to_string() }),
        );
    }
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

impl EventSink for NdjsonWriter {
    fn emit(&mut self, event: &Event) -> Result<(), NdjsonError> {
        self.write_event(event)
    }
}

/// In-memory sink. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<Event>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while pushing cannot leave the Vec half-written, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: &Event) -> Result<(), NdjsonError> {
        self.lock().push(event.clone());
        Ok(())
    }
}
