//! Built-in style presets
//!
//! Presets are composed statically: a base preset is copied and a subset of
//! its attributes is overridden with the explicit setters. Runtime
//! inheritance only happens later, when a widget's style is resolved
//! against its parents.

use alloc::rc::Rc;
use log::{info, warn};

use super::colors::*;
use super::record::{OPA_50, OPA_COVER, OPA_TRANSP, RADIUS_CIRCLE, Style};
use crate::config::DisplayConfig;

/// Names of the built-in presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    /// Root style, every attribute set
    Default,
    /// Root values with every attribute unset (inherit everything)
    Weak,
    Screen,
    /// Light colored container
    Light,
    /// Dark colored container
    Dark,
    /// White, paper-like container
    Paper,
    ButtonReleased,
    ButtonPressed,
    ButtonToggledReleased,
    ButtonToggledPressed,
    ButtonInactive,
    LedRed,
    LedGreen,
    ListBackground,
    ListScrollable,
    ListTransparent,
    ListElementReleased,
    ListElementPressed,
    ListElementToggledReleased,
    ListElementToggledPressed,
    ListElementInactive,
}

impl StyleName {
    pub const COUNT: usize = 21;

    /// Every preset name, in registry order
    pub const ALL: [StyleName; Self::COUNT] = [
        StyleName::Default,
        StyleName::Weak,
        StyleName::Screen,
        StyleName::Light,
        StyleName::Dark,
        StyleName::Paper,
        StyleName::ButtonReleased,
        StyleName::ButtonPressed,
        StyleName::ButtonToggledReleased,
        StyleName::ButtonToggledPressed,
        StyleName::ButtonInactive,
        StyleName::LedRed,
        StyleName::LedGreen,
        StyleName::ListBackground,
        StyleName::ListScrollable,
        StyleName::ListTransparent,
        StyleName::ListElementReleased,
        StyleName::ListElementPressed,
        StyleName::ListElementToggledReleased,
        StyleName::ListElementToggledPressed,
        StyleName::ListElementInactive,
    ];

    /// Stable textual key of the preset
    pub fn key(&self) -> &'static str {
        match self {
            StyleName::Default => "default",
            StyleName::Weak => "weak",
            StyleName::Screen => "screen",
            StyleName::Light => "light",
            StyleName::Dark => "dark",
            StyleName::Paper => "paper",
            StyleName::ButtonReleased => "button.released",
            StyleName::ButtonPressed => "button.pressed",
            StyleName::ButtonToggledReleased => "button.toggled_released",
            StyleName::ButtonToggledPressed => "button.toggled_pressed",
            StyleName::ButtonInactive => "button.inactive",
            StyleName::LedRed => "led.red",
            StyleName::LedGreen => "led.green",
            StyleName::ListBackground => "list.background",
            StyleName::ListScrollable => "list.scrollable",
            StyleName::ListTransparent => "list.transparent",
            StyleName::ListElementReleased => "list.element.released",
            StyleName::ListElementPressed => "list.element.pressed",
            StyleName::ListElementToggledReleased => "list.element.toggled_released",
            StyleName::ListElementToggledPressed => "list.element.toggled_pressed",
            StyleName::ListElementInactive => "list.element.inactive",
        }
    }

    /// Look a preset up by its key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|name| name.key() == key)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Catalog of the built-in presets, built once at startup
///
/// Construct one registry per application and hand out references to it.
/// Presets are stored behind `Rc` so widgets can share them without
/// copying the record.
pub struct StyleRegistry {
    presets: [Rc<Style>; StyleName::COUNT],
}

impl StyleRegistry {
    /// Build every preset for the given display
    ///
    /// This is a pure function of the configuration: two registries built
    /// from the same configuration hold identical records.
    pub fn new(config: &DisplayConfig) -> Self {
        let presets = build_presets(config);
        info!(
            "Style registry ready: {} presets (dpi {}, downscale {})",
            presets.len(),
            config.dpi,
            config.downscale()
        );

        Self {
            presets: presets.map(Rc::new),
        }
    }

    /// Get a preset
    pub fn get(&self, name: StyleName) -> &Style {
        &self.presets[name.index()]
    }

    /// Get a shared handle to a preset
    pub fn shared(&self, name: StyleName) -> Rc<Style> {
        Rc::clone(&self.presets[name.index()])
    }

    /// Get a preset by key, falling back to the default preset
    pub fn get_by_key(&self, key: &str) -> &Style {
        match StyleName::from_key(key) {
            Some(name) => self.get(name),
            None => {
                warn!("Unknown style preset '{}', using default", key);
                self.get(StyleName::Default)
            }
        }
    }
}

fn build_presets(config: &DisplayConfig) -> [Style; StyleName::COUNT] {
    let dpi = config.dpi;
    let ds = config.downscale();
    let thin = (dpi / 30).max(1);

    let default = Style::root(config);
    let weak = default.cleared();
    let screen = default;

    let mut light = weak;
    light.set_content_color(rgb(0x30, 0x30, 0x30));
    light.set_opacity(OPA_COVER);
    light.set_opacity_proportional(true);
    light.set_main_color(COLOR_SILVER);
    light.set_gradient_color(COLOR_GRAY);
    light.set_border_color(COLOR_WHITE);
    light.set_shadow_color(COLOR_BLACK);
    light.set_radius(dpi / 10);
    light.set_border_width(thin);
    light.set_shadow_width(dpi / 4);
    light.set_vpad(dpi / 4);
    light.set_hpad(dpi / 4);
    light.set_opad(dpi / 4);
    light.set_border_opacity(OPA_50);
    light.set_empty(false);
    light.set_image_recolor(OPA_TRANSP);
    light.set_line_width(thin);

    let mut dark = light;
    dark.set_content_color(rgb(0xD0, 0xD0, 0xD0));
    dark.set_main_color(COLOR_GRAY);
    dark.set_gradient_color(COLOR_BLACK);
    dark.set_border_color(COLOR_WHITE);
    dark.set_shadow_width(10);

    let mut paper = light;
    paper.set_content_color(rgb(0x30, 0x30, 0x30));
    paper.set_main_color(COLOR_WHITE);
    paper.set_gradient_color(COLOR_WHITE);
    paper.set_border_color(COLOR_GRAY);
    paper.set_shadow_width(0);

    let mut button_released = weak;
    button_released.set_main_color(COLOR_WHITE);
    button_released.set_gradient_color(COLOR_GRAY);

    let mut button_pressed = button_released;
    button_pressed.set_main_color(COLOR_BLACK);
    button_pressed.set_content_color(COLOR_SILVER);
    button_pressed.set_shadow_color(COLOR_GRAY);
    button_pressed.set_shadow_width(10);

    let mut button_toggled_released = button_released;
    button_toggled_released.set_main_color(COLOR_LIME);

    let mut button_toggled_pressed = button_released;
    button_toggled_pressed.set_main_color(COLOR_GREEN);

    let mut button_inactive = button_released;
    button_inactive.set_main_color(COLOR_YELLOW);

    let mut led_red = default;
    led_red.set_main_color(COLOR_RED);
    led_red.set_gradient_color(COLOR_MAROON);
    led_red.set_border_color(rgb(0x40, 0x00, 0x00));
    led_red.set_shadow_color(COLOR_RED);
    led_red.set_border_width(4 * ds);
    led_red.set_border_opacity(50);
    led_red.set_shadow_width(15 * ds);
    led_red.set_radius(RADIUS_CIRCLE);
    led_red.set_hpad(0);
    led_red.set_vpad(0);
    led_red.set_opad(0);

    let mut led_green = led_red;
    led_green.set_main_color(COLOR_LIME);
    led_green.set_gradient_color(COLOR_GREEN);
    led_green.set_border_color(rgb(0x00, 0x40, 0x00));
    led_green.set_shadow_color(COLOR_LIME);

    let mut list_background = light;
    list_background.set_vpad(0);
    list_background.set_hpad(0);
    list_background.set_opad(0);

    let mut list_scrollable = light;
    list_scrollable.set_vpad(0);
    list_scrollable.set_hpad(0);
    list_scrollable.set_opad(5 * ds);

    let mut list_transparent = weak;
    list_transparent.set_empty(true);
    list_transparent.set_border_width(0);
    list_transparent.set_shadow_width(0);
    list_transparent.set_vpad(0);
    list_transparent.set_hpad(0);
    list_transparent.set_opad(5 * ds);

    let mut list_element_released = button_released;
    list_element_released.set_main_color(rgb(0x90, 0xA8, 0xC0));
    list_element_released.set_gradient_color(rgb(0x90, 0xA8, 0xC0));
    list_element_released.set_border_color(COLOR_BLACK);
    list_element_released.set_shadow_color(rgb(0x30, 0x40, 0x50));
    list_element_released.set_shadow_width(0);
    list_element_released.set_border_width(0);
    list_element_released.set_border_opacity(70);
    list_element_released.set_empty(false);
    list_element_released.set_radius(0);

    let mut list_element_pressed = list_element_released;
    list_element_pressed.set_main_color(rgb(0x40, 0x60, 0x80));
    list_element_pressed.set_gradient_color(rgb(0x40, 0x60, 0x80));
    list_element_pressed.set_border_color(rgb(0x20, 0x30, 0x40));

    let mut list_element_toggled_released = list_element_released;
    list_element_toggled_released.set_main_color(rgb(0x20, 0x30, 0x40));
    list_element_toggled_released.set_gradient_color(rgb(0x20, 0x30, 0x40));
    list_element_toggled_released.set_border_color(rgb(0x20, 0x30, 0x40));

    let list_element_toggled_pressed = list_element_pressed;

    let mut list_element_inactive = list_element_released;
    list_element_inactive.set_main_color(COLOR_SILVER);
    list_element_inactive.set_gradient_color(COLOR_GRAY);
    list_element_inactive.set_border_color(COLOR_WHITE);

    [
        default,
        weak,
        screen,
        light,
        dark,
        paper,
        button_released,
        button_pressed,
        button_toggled_released,
        button_toggled_pressed,
        button_inactive,
        led_red,
        led_green,
        list_background,
        list_scrollable,
        list_transparent,
        list_element_released,
        list_element_pressed,
        list_element_toggled_released,
        list_element_toggled_pressed,
        list_element_inactive,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::record::StyleFlags;

    #[test]
    fn test_default_preset_is_total() {
        let registry = StyleRegistry::new(&DisplayConfig::default());
        assert_eq!(registry.get(StyleName::Default).flags(), StyleFlags::all());
    }

    #[test]
    fn test_weak_preset_sets_nothing() {
        let registry = StyleRegistry::new(&DisplayConfig::default());
        let weak = registry.get(StyleName::Weak);
        let default = registry.get(StyleName::Default);
        assert_eq!(weak.flags(), StyleFlags::empty());
        assert_eq!(weak.hpad(), default.hpad());
    }

    #[test]
    fn test_presets_are_deterministic() {
        let config = DisplayConfig::default();
        let first = StyleRegistry::new(&config);
        let second = StyleRegistry::new(&config);

        for name in StyleName::ALL {
            assert_eq!(
                first.get(name).to_bytes().unwrap(),
                second.get(name).to_bytes().unwrap(),
                "preset {} differs between registries",
                name.key()
            );
        }
    }

    #[test]
    fn test_registry_order_matches_names() {
        for (i, name) in StyleName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        let registry = StyleRegistry::new(&DisplayConfig::default());
        assert_eq!(
            registry.get_by_key("no.such.style"),
            registry.get(StyleName::Default)
        );
        assert_eq!(registry.get_by_key("dark"), registry.get(StyleName::Dark));
        assert_eq!(StyleName::from_key("led.green"), Some(StyleName::LedGreen));
    }

    #[test]
    fn test_light_overrides_only_its_subset() {
        let registry = StyleRegistry::new(&DisplayConfig::default());
        let light = registry.get(StyleName::Light);
        assert!(light.is_set(StyleFlags::MAIN_COLOR));
        assert!(light.is_set(StyleFlags::HPAD));
        assert!(!light.is_set(StyleFlags::FONT));
        assert!(!light.is_set(StyleFlags::TEXT_ALIGN));
        assert_eq!(light.radius(), 10);
        assert_eq!(light.border_width(), 3);
    }

    #[test]
    fn test_button_presets_derive_from_released() {
        let registry = StyleRegistry::new(&DisplayConfig::default());
        let released = registry.get(StyleName::ButtonReleased);
        let toggled = registry.get(StyleName::ButtonToggledReleased);
        assert_eq!(toggled.gradient_color(), released.gradient_color());
        assert_eq!(toggled.main_color(), COLOR_LIME);
        assert!(!toggled.is_set(StyleFlags::HPAD));
    }

    #[test]
    fn test_shared_handles_alias_one_record() {
        let registry = StyleRegistry::new(&DisplayConfig::default());
        let a = registry.shared(StyleName::Paper);
        let b = registry.shared(StyleName::Paper);
        assert!(Rc::ptr_eq(&a, &b));
    }
}
