//! Desktop simulator for the rivet GUI toolkit.
//!
//! Builds one demo screen per layout mode plus a widget gallery, renders
//! each into an off-screen `SimulatorDisplay` and saves it as a PNG.
//!
//! ```text
//! rivet-simulator [OUTPUT_DIR] [CONFIG_FILE]
//! ```
//!
//! The output directory defaults to `rivet-demos`. `CONFIG_FILE` holds a
//! postcard-encoded `DisplayConfig`; without it the default 320×240 display
//! is used. Set `RUST_LOG=debug` to
//! follow layout refreshes and auto-fit as the screens are built.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::{error, info};

use rivet_core::style::colors::{COLOR_BLUE, COLOR_GREEN, COLOR_RED, COLOR_YELLOW};
use rivet_core::widgets::{ButtonState, ButtonStyleSet};
use rivet_core::{
    DisplayConfig, LayoutMode, NodeId, StyleName, StyleRegistry, TreeError, WidgetKind, WidgetTree,
};

/// Pixel scale factor of the saved images.
const IMAGE_SCALE: u32 = 2;

/// Layout modes that get a demo screen each.
const LAYOUT_DEMOS: [LayoutMode; 9] = [
    LayoutMode::ColumnLeft,
    LayoutMode::ColumnMid,
    LayoutMode::ColumnRight,
    LayoutMode::RowTop,
    LayoutMode::RowMid,
    LayoutMode::RowBottom,
    LayoutMode::Center,
    LayoutMode::Pretty,
    LayoutMode::Grid,
];

/// Child sizes used by the layout demos, oldest first.
const DEMO_CHILDREN: [(i32, i32); 7] = [
    (60, 30),
    (40, 40),
    (80, 20),
    (50, 35),
    (30, 30),
    (70, 25),
    (45, 45),
];

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

/// A container filling the screen with the given layout and demo children.
fn layout_screen(
    registry: &StyleRegistry,
    config: DisplayConfig,
    mode: LayoutMode,
) -> Result<WidgetTree, TreeError> {
    let mut tree = WidgetTree::new(registry, config);
    let root = tree.root();

    let container = tree.create(root, WidgetKind::Container, registry.shared(StyleName::Paper))?;
    tree.set_pos(container, 10, 10);
    tree.set_size(container, config.hor_res as i32 - 20, config.ver_res as i32 - 20);

    let colors = [COLOR_RED, COLOR_GREEN, COLOR_BLUE, COLOR_YELLOW];
    for (i, &(width, height)) in DEMO_CHILDREN.iter().enumerate() {
        let mut style = *registry.get(StyleName::ButtonReleased);
        style.set_main_color(colors[i % colors.len()]);

        let child = tree.create(container, WidgetKind::Base, Rc::new(style))?;
        tree.set_size(child, width, height);
    }

    tree.set_layout(container, mode);
    log_children(&tree, container);

    Ok(tree)
}

/// A row that shrinks around its content, with a pinned badge.
fn autofit_screen(registry: &StyleRegistry, config: DisplayConfig) -> Result<WidgetTree, TreeError> {
    let mut tree = WidgetTree::new(registry, config);
    let root = tree.root();

    let row = tree.create(root, WidgetKind::Container, registry.shared(StyleName::Light))?;
    tree.set_pos(row, 20, 20);
    tree.set_layout(row, LayoutMode::RowMid);
    tree.set_fit(row, true, true);

    for text in ["Auto", "fit", "row"] {
        let button = tree.create(row, WidgetKind::Container, registry.shared(StyleName::ButtonReleased))?;
        tree.set_layout(button, LayoutMode::Center);
        tree.set_fit(button, true, true);
        tree.create_label(button, text, registry.shared(StyleName::Weak))?;
    }

    let badge = tree.create(row, WidgetKind::Base, registry.shared(StyleName::ButtonToggledReleased))?;
    tree.set_protect_pos(badge, true);
    tree.set_size(badge, 12, 12);
    tree.set_pos(badge, 0, 0);

    info!("Auto-fit row: {:?}", tree.coords(row));
    Ok(tree)
}

/// LEDs at three brightness levels next to a scrolled list.
fn widget_screen(registry: &StyleRegistry, config: DisplayConfig) -> Result<WidgetTree, TreeError> {
    let mut tree = WidgetTree::new(registry, config);
    let root = tree.root();

    let leds = tree.create(root, WidgetKind::Container, registry.shared(StyleName::Dark))?;
    tree.set_pos(leds, 10, 10);
    tree.set_layout(leds, LayoutMode::ColumnMid);
    tree.set_fit(leds, true, true);

    for (name, step) in [
        (StyleName::LedRed, 0),
        (StyleName::LedGreen, 1),
        (StyleName::LedRed, 2),
    ] {
        let led = tree.create_led(leds, registry.shared(name))?;
        match step {
            0 => tree.led_off(led)?,
            1 => tree.led_on(led)?,
            _ => tree.led_toggle(led)?,
        }
    }

    let list = tree.create_list(root, registry)?;
    tree.set_pos(list, 120, 10);
    for i in 0..12 {
        let element = tree.add_list_element(list, registry, Some(&format!("Element {}", i)))?;
        if i == 2 {
            tree.apply_button_state(
                element,
                registry,
                ButtonStyleSet::ListElement,
                ButtonState::Released.toggle(),
            );
        }
    }
    tree.list_scroll_up(list)?;

    info!(
        "List {:?} holds {} elements",
        tree.coords(list),
        tree.list_elements(list)?.len()
    );
    Ok(tree)
}

fn log_children(tree: &WidgetTree, container: NodeId) {
    for &child in tree.children(container) {
        let (x, y) = tree.pos(child);
        info!("  {:?} at ({}, {}) {}x{}", child, x, y, tree.width(child), tree.height(child));
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw `tree` into a fresh display and save it as `<name>.png` in `dir`.
fn render(tree: &mut WidgetTree, dir: &Path, name: &str) {
    let config = tree.config();
    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(config.hor_res as u32, config.ver_res as u32));

    // Everything is redrawn below, queued areas are obsolete
    tree.take_invalidated();
    if let Err(e) = display.clear(Rgb565::BLACK) {
        error!("Clear error in {}: {:?}", name, e);
    }
    if let Err(e) = tree.draw(&mut display) {
        error!("Draw error in {}: {:?}", name, e);
        return;
    }

    let output_settings = OutputSettingsBuilder::new().scale(IMAGE_SCALE).build();
    let path = dir.join(format!("{}.png", name));
    match display.to_rgb_output_image(&output_settings).save_png(&path) {
        Ok(()) => info!("Saved {}", path.display()),
        Err(e) => error!("Failed to save {}: {}", path.display(), e),
    }
}

/// Read a stored display configuration, logging why it could not be used.
fn load_config(path: &Path) -> Option<DisplayConfig> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    match DisplayConfig::from_bytes(&bytes) {
        Ok(config) => Some(config),
        Err(e) => {
            error!("Invalid display configuration in {}: {}", path.display(), e);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("rivet-demos"));
    if let Err(e) = std::fs::create_dir_all(&out_dir) {
        error!("Cannot create {}: {}", out_dir.display(), e);
        return;
    }

    let config = match std::env::args().nth(2) {
        Some(path) => match load_config(Path::new(&path)) {
            Some(config) => config,
            None => return,
        },
        None => DisplayConfig::default(),
    };
    info!("Starting rivet simulator");
    info!(
        "Display: {}×{} @ {} dpi (scale {}×)",
        config.hor_res, config.ver_res, config.dpi, IMAGE_SCALE
    );

    let registry = StyleRegistry::new(&config);

    for mode in LAYOUT_DEMOS {
        info!("Layout {:?}", mode);
        match layout_screen(&registry, config, mode) {
            Ok(mut tree) => render(&mut tree, &out_dir, &format!("layout-{:?}", mode).to_lowercase()),
            Err(e) => error!("Building {:?} demo failed: {}", mode, e),
        }
    }

    match autofit_screen(&registry, config) {
        Ok(mut tree) => render(&mut tree, &out_dir, "autofit"),
        Err(e) => error!("Building auto-fit demo failed: {}", e),
    }

    match widget_screen(&registry, config) {
        Ok(mut tree) => render(&mut tree, &out_dir, "widgets"),
        Err(e) => error!("Building widget demo failed: {}", e),
    }

    info!("Simulator exiting");
}
