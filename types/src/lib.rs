//! Core domain types for Stencil.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod component;
mod render;
mod text;

pub use component::{Component, ComponentInfo, ConfigMap};
pub use render::{Displayed, Render};
pub use text::{Case, normalize_case};
