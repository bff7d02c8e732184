//! Error types for the weft simulator.
//!
//! Only setup can fail. A physics step never returns an error: numerical
//! trouble is defaulted locally and reported through step diagnostics.

use thiserror::Error;

/// Unified error type for weft.
#[derive(Debug, Error)]
pub enum WeftError {
    /// Initial geometry is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A point was given a zero, negative, or non-finite mass.
    #[error("Invalid mass {mass} for point {point}")]
    InvalidMass {
        point: u32,
        mass: f32,
    },

    /// An identifier does not refer to a registered entity.
    #[error("Unknown {kind} id {id}")]
    UnknownEntity {
        kind: &'static str,
        id: u32,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
