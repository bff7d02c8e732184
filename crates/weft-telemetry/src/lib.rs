//! # weft-telemetry
//!
//! Event bus for simulation telemetry. The engine emits structured events
//! (step timing, contacts, energy, clamped frames) that pluggable sinks
//! consume: in-memory collection, `tracing` output, or JSON lines.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, JsonLinesSink, TracingSink, VecSink};
