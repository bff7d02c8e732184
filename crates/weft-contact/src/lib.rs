//! # weft-contact
//!
//! Rigid collision geometry and point contact response.
//!
//! The cloth treats every rigid shape as opaque, read-only geometry
//! behind the [`RigidShape`] capability: a containment test and a
//! contact query that yields the surface point and outward normal.
//! Shapes never see cloth state, and the cloth never mutates shapes.

pub mod box_shape;
pub mod config;
pub mod ground_plane;
pub mod response;
pub mod shape;
pub mod sphere;

pub use box_shape::BoxShape;
pub use config::ShapeConfig;
pub use ground_plane::GroundPlane;
pub use response::{respond, ContactParams, ContactResult};
pub use shape::{Contact, RigidShape};
pub use sphere::SphereShape;
