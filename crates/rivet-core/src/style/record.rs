//! The style record: a flat attribute bag with per-attribute "set" bits
//!
//! A [`Style`] only defines the attributes whose bit is present in its
//! [`StyleFlags`]. Everything else is resolved from the parent style by
//! [`inherit`](super::inherit). Attributes are changed through the
//! generated `set_*` / `clear_*` pairs; there is no generic setter.

use alloc::vec::Vec;
use bitflags::bitflags;
use embedded_graphics::mono_font::{MonoFont, ascii};
use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

use super::colors::{COLOR_BLACK, COLOR_GRAY, COLOR_SILVER, rgb, serde_rgb565};
use crate::config::DisplayConfig;

// ============================================================================
// Constants
// ============================================================================

pub const OPA_TRANSP: u8 = 0;
pub const OPA_10: u8 = 25;
pub const OPA_20: u8 = 51;
pub const OPA_30: u8 = 76;
pub const OPA_40: u8 = 102;
pub const OPA_50: u8 = 127;
pub const OPA_60: u8 = 153;
pub const OPA_70: u8 = 178;
pub const OPA_80: u8 = 204;
pub const OPA_90: u8 = 229;
pub const OPA_COVER: u8 = 255;

/// Radius value that rounds the shorter side into a half circle
pub const RADIUS_CIRCLE: u32 = u32::MAX;

// ============================================================================
// Style Flags
// ============================================================================

bitflags! {
    /// One bit per style attribute, set when the style defines it explicitly
    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[serde(transparent)]
    pub struct StyleFlags: u32 {
        const CONTENT_COLOR = 1 << 0;
        const OPACITY = 1 << 1;
        const OPACITY_PROPORTIONAL = 1 << 2;
        const MAIN_COLOR = 1 << 3;
        const GRADIENT_COLOR = 1 << 4;
        const BORDER_COLOR = 1 << 5;
        const SHADOW_COLOR = 1 << 6;
        const RADIUS = 1 << 7;
        const BORDER_WIDTH = 1 << 8;
        const SHADOW_WIDTH = 1 << 9;
        const VPAD = 1 << 10;
        const HPAD = 1 << 11;
        const OPAD = 1 << 12;
        const BORDER_OPACITY = 1 << 13;
        const EMPTY = 1 << 14;
        const FONT = 1 << 15;
        const LETTER_SPACE = 1 << 16;
        const LINE_SPACE = 1 << 17;
        const TEXT_ALIGN = 1 << 18;
        const IMAGE_RECOLOR = 1 << 19;
        const LINE_WIDTH = 1 << 20;
    }
}

impl StyleFlags {
    /// Number of attributes tracked by the flags
    pub const COUNT: usize = 21;
}

// ============================================================================
// Font and Text Alignment
// ============================================================================

/// Built-in monospace fonts a style can reference
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontId {
    #[default]
    Mono6x10,
    Mono8x13,
    Mono10x20,
}

impl FontId {
    /// The embedded-graphics font behind this id
    pub fn mono_font(&self) -> &'static MonoFont<'static> {
        match self {
            FontId::Mono6x10 => &ascii::FONT_6X10,
            FontId::Mono8x13 => &ascii::FONT_8X13,
            FontId::Mono10x20 => &ascii::FONT_10X20,
        }
    }
}

/// Horizontal alignment of text lines inside their label
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// ============================================================================
// Style
// ============================================================================

/// Visual attributes of a widget, each of them optionally defined
///
/// Style records are plain values. Presets live in the
/// [`StyleRegistry`](super::StyleRegistry) and widgets share them by
/// reference; only resolved copies are stored per widget.
///
/// # Examples
///
/// ```ignore
/// let mut style = registry.get(StyleName::Weak).clone();
/// style.set_main_color(COLOR_WHITE);
/// style.set_hpad(4);
///
/// // Everything but main color and hpad now comes from the parent
/// let resolved = inherit(&style, parent_style);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    #[serde(with = "serde_rgb565")]
    content_color: Rgb565,
    opacity: u8,
    opacity_proportional: bool,

    #[serde(with = "serde_rgb565")]
    main_color: Rgb565,
    #[serde(with = "serde_rgb565")]
    gradient_color: Rgb565,
    #[serde(with = "serde_rgb565")]
    border_color: Rgb565,
    #[serde(with = "serde_rgb565")]
    shadow_color: Rgb565,
    radius: u32,
    border_width: u32,
    shadow_width: u32,
    vpad: u32,
    hpad: u32,
    opad: u32,
    border_opacity: u8,
    empty: bool,

    font: FontId,
    letter_space: i32,
    line_space: i32,
    text_align: TextAlign,

    image_recolor: u8,

    line_width: u32,

    set: StyleFlags,
}

impl Default for Style {
    /// The root style for the default display configuration
    fn default() -> Self {
        Self::root(&DisplayConfig::default())
    }
}

impl Style {
    /// The root of every inheritance chain: every attribute is set
    pub fn root(config: &DisplayConfig) -> Self {
        let dpi = config.dpi;
        let downscale = config.downscale() as i32;

        Self {
            content_color: rgb(0x30, 0xF0, 0x30),
            opacity: OPA_COVER,
            opacity_proportional: true,
            main_color: COLOR_SILVER,
            gradient_color: COLOR_SILVER,
            border_color: COLOR_BLACK,
            shadow_color: COLOR_GRAY,
            radius: 0,
            border_width: 2,
            shadow_width: 0,
            vpad: dpi / 4,
            hpad: dpi / 4,
            opad: dpi / 4,
            border_opacity: OPA_COVER,
            empty: false,
            font: FontId::default(),
            letter_space: 10 * downscale,
            line_space: downscale,
            text_align: TextAlign::Left,
            image_recolor: OPA_TRANSP,
            line_width: downscale as u32,
            set: StyleFlags::all(),
        }
    }

    /// Copy of this style with every set bit cleared
    ///
    /// The values stay in place but are ignored by inheritance.
    pub fn cleared(mut self) -> Self {
        self.set = StyleFlags::empty();
        self
    }

    /// Attributes this style defines explicitly
    pub fn flags(&self) -> StyleFlags {
        self.set
    }

    /// Whether every attribute in `flags` is explicitly defined
    pub fn is_set(&self, flags: StyleFlags) -> bool {
        self.set.contains(flags)
    }

    /// Overwrite the set bits without touching any value
    pub(crate) fn restore_flags(&mut self, flags: StyleFlags) {
        self.set = flags;
    }

    /// Canonical postcard encoding of the record, set bits included
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }
}

/// Generates the getter, setter and clearer of each attribute
macro_rules! style_attributes {
    ($(
        $(#[$doc:meta])*
        $field:ident: $ty:ty => $flag:ident, $set:ident, $clear:ident;
    )*) => {
        impl Style {
            $(
                $(#[$doc])*
                pub fn $field(&self) -> $ty {
                    self.$field
                }

                #[doc = concat!("Define `", stringify!($field), "` explicitly")]
                pub fn $set(&mut self, value: $ty) {
                    self.$field = value;
                    self.set.insert(StyleFlags::$flag);
                }

                #[doc = concat!("Inherit `", stringify!($field), "` from the parent style again")]
                pub fn $clear(&mut self) {
                    self.set.remove(StyleFlags::$flag);
                }
            )*
        }
    };
}

style_attributes! {
    /// Color of content drawn on the widget (text, lines, recolored images)
    content_color: Rgb565 => CONTENT_COLOR, set_content_color, clear_content_color;
    /// Overall opacity
    opacity: u8 => OPACITY, set_opacity, clear_opacity;
    /// Whether the opacity is relative to the parent's opacity
    opacity_proportional: bool => OPACITY_PROPORTIONAL, set_opacity_proportional, clear_opacity_proportional;
    /// Top color of the background
    main_color: Rgb565 => MAIN_COLOR, set_main_color, clear_main_color;
    /// Bottom color of the background gradient
    gradient_color: Rgb565 => GRADIENT_COLOR, set_gradient_color, clear_gradient_color;
    border_color: Rgb565 => BORDER_COLOR, set_border_color, clear_border_color;
    /// Color of the shadow ring drawn around the widget
    shadow_color: Rgb565 => SHADOW_COLOR, set_shadow_color, clear_shadow_color;
    /// Corner radius, or [`RADIUS_CIRCLE`]
    radius: u32 => RADIUS, set_radius, clear_radius;
    /// Border width, 0 means no border
    border_width: u32 => BORDER_WIDTH, set_border_width, clear_border_width;
    /// Shadow width, 0 means no shadow
    shadow_width: u32 => SHADOW_WIDTH, set_shadow_width, clear_shadow_width;
    /// Vertical padding between the container edge and its children
    vpad: u32 => VPAD, set_vpad, clear_vpad;
    /// Horizontal padding between the container edge and its children
    hpad: u32 => HPAD, set_hpad, clear_hpad;
    /// Padding between neighbouring children
    opad: u32 => OPAD, set_opad, clear_opad;
    /// Border opacity relative to the widget opacity
    border_opacity: u8 => BORDER_OPACITY, set_border_opacity, clear_border_opacity;
    /// Transparent background with the border still drawn
    empty: bool => EMPTY, set_empty, clear_empty;
    font: FontId => FONT, set_font, clear_font;
    letter_space: i32 => LETTER_SPACE, set_letter_space, clear_letter_space;
    line_space: i32 => LINE_SPACE, set_line_space, clear_line_space;
    text_align: TextAlign => TEXT_ALIGN, set_text_align, clear_text_align;
    /// Image re-color intensity (`OPA_TRANSP` leaves images untouched)
    image_recolor: u8 => IMAGE_RECOLOR, set_image_recolor, clear_image_recolor;
    line_width: u32 => LINE_WIDTH, set_line_width, clear_line_width;
}
