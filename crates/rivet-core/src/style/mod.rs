//! Style model for UI elements
//!
//! This module provides the partially specified style record and the rules
//! that turn it into a fully resolved style:
//! - [`record`] - The attribute bag with per-attribute set bits
//! - [`inherit`] - Resolution of unset attributes from a parent style
//! - [`registry`] - The catalog of built-in presets
//! - [`colors`] - Named RGB565 colors and color mixing

pub mod colors;
pub mod inherit;
pub mod record;
pub mod registry;

pub use inherit::{inherit, inherit_into};
pub use record::{
    FontId, OPA_10, OPA_20, OPA_30, OPA_40, OPA_50, OPA_60, OPA_70, OPA_80, OPA_90, OPA_COVER,
    OPA_TRANSP, RADIUS_CIRCLE, Style, StyleFlags, TextAlign,
};
pub use registry::{StyleName, StyleRegistry};
