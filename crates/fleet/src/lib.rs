//! Fleet domain module.
//!
//! Vehicles are modeled as independent implementations of a rendering
//! capability rather than a class hierarchy: [`Plane`] embeds a [`Vehicle`]
//! for its shared attributes and supplies its own rendering wholesale.

pub mod vehicle;

pub use vehicle::{Plane, RenderableVehicle, Vehicle};
