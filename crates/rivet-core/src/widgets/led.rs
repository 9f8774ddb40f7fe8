//! LED widget: a round light whose colors and glow follow its brightness

use alloc::rc::Rc;

use crate::style::colors::{COLOR_BLACK, color_mix};
use crate::style::Style;
use crate::tree::{NodeId, TreeError, WidgetKind, WidgetTree};

/// Brightness of a newly created LED
pub const LED_BRIGHTNESS_DEFAULT: u8 = 128;
/// Brightness set by [`WidgetTree::led_off`]
pub const LED_BRIGHTNESS_OFF: u8 = 60;
/// Brightness set by [`WidgetTree::led_on`]
pub const LED_BRIGHTNESS_ON: u8 = 255;

/// Default LED edge length before downscaling
const LED_SIZE: i32 = 30;

/// The style an LED is drawn with at `brightness`
///
/// Main and gradient colors are mixed toward black and the shadow shrinks
/// from its full width when on to nothing at the off level.
pub fn led_draw_style(style: &Style, brightness: u8) -> Style {
    let mut tmp = *style;
    tmp.set_main_color(color_mix(style.main_color(), COLOR_BLACK, brightness));
    tmp.set_gradient_color(color_mix(style.gradient_color(), COLOR_BLACK, brightness));

    let level = u32::from(brightness.saturating_sub(LED_BRIGHTNESS_OFF));
    let span = u32::from(LED_BRIGHTNESS_ON - LED_BRIGHTNESS_OFF);
    tmp.set_shadow_width(style.shadow_width().saturating_mul(level) / span);

    tmp
}

impl WidgetTree {
    /// Create an LED at the default brightness
    pub fn create_led(&mut self, parent: NodeId, style: Rc<Style>) -> Result<NodeId, TreeError> {
        let id = self.create(
            parent,
            WidgetKind::Led {
                brightness: LED_BRIGHTNESS_DEFAULT,
            },
            style,
        )?;

        let size = LED_SIZE * self.config().downscale() as i32;
        self.set_size(id, size, size);
        Ok(id)
    }

    pub fn brightness(&self, id: NodeId) -> Option<u8> {
        match self.kind(id) {
            WidgetKind::Led { brightness } => Some(*brightness),
            _ => None,
        }
    }

    pub fn set_brightness(&mut self, id: NodeId, value: u8) -> Result<(), TreeError> {
        match self.kind_mut(id) {
            WidgetKind::Led { brightness } => *brightness = value,
            _ => return Err(TreeError::NotALed { id }),
        }
        self.invalidate(id);
        Ok(())
    }

    pub fn led_on(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.set_brightness(id, LED_BRIGHTNESS_ON)
    }

    pub fn led_off(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.set_brightness(id, LED_BRIGHTNESS_OFF)
    }

    /// Switch off an LED brighter than halfway between off and on, else switch it on
    pub fn led_toggle(&mut self, id: NodeId) -> Result<(), TreeError> {
        let brightness = self.brightness(id).ok_or(TreeError::NotALed { id })?;
        let threshold = ((u16::from(LED_BRIGHTNESS_OFF) + u16::from(LED_BRIGHTNESS_ON)) >> 1) as u8;

        if brightness > threshold {
            self.led_off(id)
        } else {
            self.led_on(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::style::{RADIUS_CIRCLE, StyleName, StyleRegistry};
    use embedded_graphics::prelude::RgbColor;

    fn setup() -> (StyleRegistry, WidgetTree) {
        let config = DisplayConfig::default();
        let registry = StyleRegistry::new(&config);
        let tree = WidgetTree::new(&registry, config);
        (registry, tree)
    }

    #[test]
    fn test_led_defaults() {
        let (registry, mut tree) = setup();
        let root = tree.root();
        let led = tree
            .create_led(root, registry.shared(StyleName::LedRed))
            .unwrap();

        assert_eq!(tree.brightness(led), Some(LED_BRIGHTNESS_DEFAULT));
        assert_eq!((tree.width(led), tree.height(led)), (30, 30));
        assert_eq!(tree.style(led).radius(), RADIUS_CIRCLE);
    }

    #[test]
    fn test_toggle_switches_between_on_and_off() {
        let (registry, mut tree) = setup();
        let root = tree.root();
        let led = tree
            .create_led(root, registry.shared(StyleName::LedGreen))
            .unwrap();

        // 128 is below the midpoint of 60 and 255
        tree.led_toggle(led).unwrap();
        assert_eq!(tree.brightness(led), Some(LED_BRIGHTNESS_ON));
        tree.led_toggle(led).unwrap();
        assert_eq!(tree.brightness(led), Some(LED_BRIGHTNESS_OFF));
        tree.led_toggle(led).unwrap();
        assert_eq!(tree.brightness(led), Some(LED_BRIGHTNESS_ON));
    }

    #[test]
    fn test_brightness_requires_led() {
        let (registry, mut tree) = setup();
        let root = tree.root();
        let base = tree
            .create(root, WidgetKind::Base, registry.shared(StyleName::Weak))
            .unwrap();

        assert_eq!(tree.led_on(base), Err(TreeError::NotALed { id: base }));
        assert_eq!(tree.led_toggle(base), Err(TreeError::NotALed { id: base }));
        assert_eq!(tree.brightness(base), None);
    }

    #[test]
    fn test_draw_style_follows_brightness() {
        let (registry, _) = setup();
        let style = *registry.get(StyleName::LedRed);

        let on = led_draw_style(&style, LED_BRIGHTNESS_ON);
        assert_eq!(on.shadow_width(), style.shadow_width());

        let off = led_draw_style(&style, LED_BRIGHTNESS_OFF);
        assert_eq!(off.shadow_width(), 0);
        assert_eq!(led_draw_style(&style, 10).shadow_width(), 0);

        let dim = led_draw_style(&style, 100);
        assert!(dim.main_color().r() < style.main_color().r());
        assert_eq!(style.main_color(), registry.get(StyleName::LedRed).main_color());
    }
}
