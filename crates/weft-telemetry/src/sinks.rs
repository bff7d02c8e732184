//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them (collect in
//! memory, log through `tracing`, write JSON lines).

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::events::{EventKind, SimulationEvent};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the simulation ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// Clones share storage, so a test can keep one clone while the bus owns
/// the other.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects into existing storage shared with the caller.
    pub fn with_storage(events: Arc<Mutex<Vec<SimulationEvent>>>) -> Self {
        Self { events }
    }

    /// Snapshot of everything collected so far.
    pub fn events(&self) -> Vec<SimulationEvent> {
        self.storage().clone()
    }

    /// Number of collected events.
    pub fn len(&self) -> usize {
        self.storage().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A push never leaves the vec half-written, so a lock poisoned by a
    // panicking clone holder still guards consistent data.
    fn storage(&self) -> MutexGuard<'_, Vec<SimulationEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.storage().push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
///
/// Routine per-step events go out at the configured level; clamped
/// frames and degenerate faces are always logged as warnings.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if matches!(
            event.kind,
            EventKind::FrameClamped { .. } | EventKind::DegenerateFaces { .. }
        ) {
            tracing::warn!(timestep = event.timestep, event = ?event.kind, "simulation_event");
            return;
        }

        let level = self.level;
        if level == tracing::Level::ERROR {
            tracing::error!(timestep = event.timestep, event = ?event.kind, "simulation_event");
        } else if level == tracing::Level::WARN {
            tracing::warn!(timestep = event.timestep, event = ?event.kind, "simulation_event");
        } else if level == tracing::Level::INFO {
            tracing::info!(timestep = event.timestep, event = ?event.kind, "simulation_event");
        } else if level == tracing::Level::DEBUG {
            tracing::debug!(timestep = event.timestep, event = ?event.kind, "simulation_event");
        } else {
            tracing::trace!(timestep = event.timestep, event = ?event.kind, "simulation_event");
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

/// Writes one JSON object per event, newline-separated.
///
/// Write errors are logged once and the sink goes quiet afterwards.
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
    failed: bool,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn handle(&mut self, event: &SimulationEvent) {
        if self.failed {
            return;
        }
        let written = serde_json::to_writer(&mut self.writer, event)
            .map_err(std::io::Error::from)
            .and_then(|_| self.writer.write_all(b"\n"));
        if let Err(e) = written {
            tracing::warn!(error = %e, "JSON lines sink failed, dropping further events");
            self.failed = true;
        }
    }

    fn finalize(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!(error = %e, "Failed to flush JSON lines sink");
        }
    }

    fn name(&self) -> &str {
        "json_lines_sink"
    }
}
