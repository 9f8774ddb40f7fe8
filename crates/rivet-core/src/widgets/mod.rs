//! Widgets built on the widget tree
//!
//! Each widget is a [`WidgetKind`](crate::tree::WidgetKind) plus a set of
//! `WidgetTree` methods that create and drive it:
//! - [`label`] - Single line text sized by its font
//! - [`led`] - Round light with brightness
//! - [`list`] - Framed, scrollable column of elements
//! - [`button`] - Button states and the presets they map to

pub mod button;
pub mod label;
pub mod led;
pub mod list;

pub use button::{ButtonState, ButtonStyleSet};
pub use led::{LED_BRIGHTNESS_DEFAULT, LED_BRIGHTNESS_OFF, LED_BRIGHTNESS_ON, led_draw_style};
