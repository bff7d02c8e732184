//! # weft-debug
//!
//! Binary state snapshots for debugging simulation issues. A snapshot
//! captures one cloth's dynamic state; a bundle holds a whole scene and
//! round-trips through `bincode` for replay and `weft inspect`.

pub mod snapshot;

pub use snapshot::{SnapshotBundle, SnapshotSummary, StateSnapshot};
