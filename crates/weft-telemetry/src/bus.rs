//! Step-stamped event queue.
//!
//! The engine opens a step with [`EventBus::begin_step`] and records bare
//! [`EventKind`] payloads; the bus stamps each one with the open step.
//! Events for muted cloths are dropped when recorded. [`EventBus::flush`]
//! hands the queue to every sink in recording order.

use std::collections::BTreeSet;

use crate::events::{EventKind, SimulationEvent};
use crate::sinks::EventSink;

/// Telemetry queue between the physics loop and the sinks.
#[derive(Default)]
pub struct EventBus {
    step: u64,
    queue: Vec<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    muted: BTreeSet<u32>,
    paused: bool,
    delivered: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Names of the registered sinks, in registration order.
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    // ─── Recording ────────────────────────────────────────────

    /// Stamps every following event with `step`.
    pub fn begin_step(&mut self, step: u64) {
        self.step = step;
    }

    /// Step index events are currently stamped with.
    pub fn current_step(&self) -> u64 {
        self.step
    }

    /// Queues `kind` under the open step.
    ///
    /// Dropped while paused or when it belongs to a muted cloth.
    pub fn record(&mut self, kind: EventKind) {
        if self.paused || kind.cloth().is_some_and(|c| self.muted.contains(&c)) {
            return;
        }
        self.queue.push(SimulationEvent::new(self.step, kind));
    }

    /// True when recorded events would reach at least one sink.
    ///
    /// Lets producers skip payloads that are costly to compute.
    pub fn is_listening(&self) -> bool {
        !self.paused && !self.sinks.is_empty()
    }

    /// Same as [`is_listening`](Self::is_listening), restricted to `cloth`.
    pub fn is_listening_to(&self, cloth: u32) -> bool {
        self.is_listening() && !self.muted.contains(&cloth)
    }

    /// Stops or resumes recording. Already queued events are kept.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drops per-cloth events for `cloth` from now on.
    pub fn mute_cloth(&mut self, cloth: u32) {
        self.muted.insert(cloth);
    }

    pub fn unmute_cloth(&mut self, cloth: u32) {
        self.muted.remove(&cloth);
    }

    /// Events recorded but not yet flushed.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    // ─── Delivery ─────────────────────────────────────────────

    /// Delivers the queue to every sink. Returns the number of events.
    pub fn flush(&mut self) -> usize {
        let count = self.queue.len();
        for event in self.queue.drain(..) {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
        self.delivered += count as u64;
        count
    }

    /// Total events delivered since construction.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Flushes the queue, then lets every sink finalize.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }
}
