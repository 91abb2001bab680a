//! Ember Core - Foundational types for the Ember particle engine
//!
//! This crate provides the types that all other Ember crates depend on:
//! - `Vec2`, `Bounds` - Spatial types
//! - Packed color helpers and `GradientBuilder` / `ColorRamp`
//! - Error types and Result alias

pub mod color;
mod error;
mod gradient;
mod types;

pub use error::{EmberError, Result};
pub use gradient::{fireworks_gradient, ColorRamp, GradientBuilder, GradientEntry};
pub use types::{Bounds, Vec2};
