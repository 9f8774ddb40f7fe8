//! Named colors and color helpers
//!
//! All colors are RGB565. Constants are written from their 8-bit RGB
//! values and reduced to 5/6/5 bits: R>>3, G>>2, B>>3.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Build an RGB565 color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub const COLOR_BLACK: Rgb565 = rgb(0x00, 0x00, 0x00);
pub const COLOR_WHITE: Rgb565 = rgb(0xFF, 0xFF, 0xFF);
pub const COLOR_SILVER: Rgb565 = rgb(0xC0, 0xC0, 0xC0);
pub const COLOR_GRAY: Rgb565 = rgb(0x80, 0x80, 0x80);
pub const COLOR_RED: Rgb565 = rgb(0xFF, 0x00, 0x00);
pub const COLOR_MAROON: Rgb565 = rgb(0x80, 0x00, 0x00);
pub const COLOR_LIME: Rgb565 = rgb(0x00, 0xFF, 0x00);
pub const COLOR_GREEN: Rgb565 = rgb(0x00, 0x80, 0x00);
pub const COLOR_YELLOW: Rgb565 = rgb(0xFF, 0xFF, 0x00);
pub const COLOR_BLUE: Rgb565 = rgb(0x00, 0x00, 0xFF);

/// Mix two colors channel by channel
///
/// `mix` is the weight of `c1`: 255 gives (almost exactly) `c1`, 0 gives `c2`.
pub fn color_mix(c1: Rgb565, c2: Rgb565, mix: u8) -> Rgb565 {
    let mix = u16::from(mix);
    let blend = |a: u8, b: u8| ((u16::from(a) * mix + u16::from(b) * (255 - mix)) >> 8) as u8;

    Rgb565::new(
        blend(c1.r(), c2.r()),
        blend(c1.g(), c2.g()),
        blend(c1.b(), c2.b()),
    )
}

/// Serde adapter storing an `Rgb565` as its raw 16-bit value
pub(crate) mod serde_rgb565 {
    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Rgb565, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(RawU16::from(*color).into_inner())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb565, D::Error> {
        u16::deserialize(deserializer).map(|raw| Rgb565::from(RawU16::new(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_reduces_channels() {
        let color = rgb(0xFF, 0x80, 0x08);
        assert_eq!(color.r(), 31);
        assert_eq!(color.g(), 32);
        assert_eq!(color.b(), 1);
    }

    #[test]
    fn test_color_mix_extremes() {
        assert_eq!(color_mix(COLOR_RED, COLOR_BLACK, 0), COLOR_BLACK);
        // Full weight loses one step to the >> 8 division
        let mixed = color_mix(COLOR_WHITE, COLOR_BLACK, 255);
        assert_eq!(mixed.r(), 30);
        assert_eq!(mixed.g(), 62);
    }

    #[test]
    fn test_color_mix_half() {
        let mixed = color_mix(COLOR_WHITE, COLOR_BLACK, 128);
        assert_eq!(mixed.r(), 15);
        assert_eq!(mixed.g(), 31);
        assert_eq!(mixed.b(), 15);
    }
}
