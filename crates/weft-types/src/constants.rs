//! Physical constants and simulation defaults.

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f32 = 9.8;

/// Default frame timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default cap on fixed substeps taken within a single frame.
pub const DEFAULT_MAX_SUBSTEPS: u32 = 8;

/// Default mass of a single cloth point (kg).
pub const DEFAULT_POINT_MASS: f32 = 0.1;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Squared-length threshold below which a cross product is treated
/// as degenerate (zero-area triangle).
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1.0e-12;

/// Separation below which two spring endpoints have no usable direction.
pub const MIN_SPRING_LENGTH: f32 = 1.0e-6;
