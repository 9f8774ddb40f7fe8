//! Rendering of resolved styles onto an embedded-graphics target
//!
//! Every function takes the absolute area of the object and a mask;
//! nothing outside the mask is touched. Opacity and gradients are not
//! blended: backgrounds use the main color and borders are opaque.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, RoundedRectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::geometry::Area;
use crate::style::colors::color_mix;
use crate::style::{FontId, OPA_TRANSP, RADIUS_CIRCLE, Style, TextAlign};

/// Corner radius of `area`, limited to half of its shorter side
fn corner_radius(area: &Area, style: &Style) -> u32 {
    let max = (area.width().min(area.height()).max(0) / 2) as u32;
    if style.radius() == RADIUS_CIRCLE {
        max
    } else {
        style.radius().min(max)
    }
}

fn primitive_style(style: &Style) -> PrimitiveStyle<Rgb565> {
    let mut builder = PrimitiveStyleBuilder::new();

    if !style.empty() {
        builder = builder.fill_color(style.main_color());
    }

    if style.border_width() > 0 && style.border_opacity() > OPA_TRANSP {
        builder = builder
            .stroke_color(style.border_color())
            .stroke_width(style.border_width())
            .stroke_alignment(StrokeAlignment::Inside);
    }

    builder.build()
}

/// Draw a rounded rectangle: background unless `empty`, then the border
pub fn draw_rect<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    area: &Area,
    mask: &Area,
    style: &Style,
) -> Result<(), D::Error> {
    if area.intersect(mask).is_none() {
        return Ok(());
    }

    let radius = corner_radius(area, style);
    let mut clipped = target.clipped(&mask.to_rectangle());

    RoundedRectangle::with_equal_corners(area.to_rectangle(), Size::new(radius, radius))
        .into_styled(primitive_style(style))
        .draw(&mut clipped)
}

/// Draw the shadow ring around `area`
///
/// The ring is `shadow_width` pixels wide and drawn as one-pixel borders
/// of a temporary empty style, fading from the shadow color next to the
/// object toward the main color at the outer edge.
pub fn draw_shadow<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    area: &Area,
    mask: &Area,
    style: &Style,
) -> Result<(), D::Error> {
    let width = style.shadow_width().min(i32::MAX as u32) as i32;
    if width == 0 || area.expanded(width).intersect(mask).is_none() {
        return Ok(());
    }

    let radius = corner_radius(area, style);

    let mut ring = *style;
    ring.set_empty(true);
    ring.set_border_width(1);
    ring.set_border_opacity(u8::MAX);

    for dist in 1..=width {
        let mix = (255 * (width - dist + 1) / (width + 1)) as u8;
        ring.set_border_color(color_mix(style.shadow_color(), style.main_color(), mix));
        ring.set_radius(radius + dist as u32);
        draw_rect(target, &area.expanded(dist), mask, &ring)?;
    }

    Ok(())
}

/// Whether drawing `style` on `area` paints every pixel of `mask`
///
/// Rounded corners are excluded by checking the two cross-shaped bands
/// that are free of them.
pub fn rect_covers(area: &Area, style: &Style, mask: &Area) -> bool {
    if style.empty() || style.radius() == RADIUS_CIRCLE {
        return false;
    }

    let r = style.radius().min(i32::MAX as u32) as i32;

    let horizontal = Area::new(area.x1 + r, area.y1, area.x2 - r, area.y2);
    let vertical = Area::new(area.x1, area.y1 + r, area.x2, area.y2 - r);

    horizontal.contains_area(mask) || vertical.contains_area(mask)
}

/// Pixel size of a single line of `text` in `font`
pub fn text_size(font: FontId, text: &str) -> (i32, i32) {
    let font = font.mono_font();
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return (0, font.character_size.height as i32);
    }

    let width = chars * font.character_size.width as i32
        + (chars - 1) * font.character_spacing as i32;
    (width, font.character_size.height as i32)
}

/// Draw `text` inside `area` using the content color, font and alignment
pub fn draw_label<D: DrawTarget<Color = Rgb565>>(
    target: &mut D,
    area: &Area,
    mask: &Area,
    style: &Style,
    text: &str,
) -> Result<(), D::Error> {
    let Some(visible) = area.intersect(mask) else {
        return Ok(());
    };

    let (x, alignment) = match style.text_align() {
        TextAlign::Left => (area.x1, Alignment::Left),
        TextAlign::Center => (area.x1 + area.width() / 2, Alignment::Center),
        TextAlign::Right => (area.x2 + 1, Alignment::Right),
    };

    let character_style = MonoTextStyle::new(style.font().mono_font(), style.content_color());
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();

    let mut clipped = target.clipped(&visible.to_rectangle());
    Text::with_text_style(text, Point::new(x, area.y1), character_style, text_style)
        .draw(&mut clipped)?;

    Ok(())
}
