//! Hardware-independent core library for the rivet GUI toolkit
//!
//! This crate contains the parts of the toolkit that decide how widgets look
//! and where they go: the partially specified style record and its
//! inheritance rules, the built-in style presets, the container layout
//! engine with auto-fit, and the widget tree those algorithms run against.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod draw;
pub mod geometry;
pub mod layout;
pub mod style;
pub mod tree;
pub mod widgets;

pub use config::{ConfigError, DisplayConfig};
pub use geometry::{Align, Area};
pub use layout::{LayoutConfig, LayoutHost, LayoutMode};
pub use style::{FontId, Style, StyleFlags, StyleName, StyleRegistry, TextAlign, inherit};
pub use tree::{NodeId, Signal, TreeError, WidgetKind, WidgetTree};
