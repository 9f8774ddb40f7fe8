//! Style inheritance: resolve the unset attributes of a child from its parent

use super::record::{Style, StyleFlags};

/// Resolve `child` against `parent` into a new style
///
/// See [`inherit_into`] for the rules.
pub fn inherit(child: &Style, parent: &Style) -> Style {
    let mut result = *child;
    inherit_into(&mut result, child, parent);
    result
}

/// Resolve `child` against `parent`, writing the result into `result`
///
/// The child is copied first. Every attribute the child does not define is
/// then taken from the parent. The set bits of `result` are the child's:
/// only the values are resolved, not where they came from. For a fully
/// resolved value the chain must end in a style with every bit set (the
/// root style).
///
/// Neither input is modified, and borrowing rules keep `result` from
/// aliasing either of them.
pub fn inherit_into(result: &mut Style, child: &Style, parent: &Style) {
    *result = *child;

    if core::ptr::eq(child, parent) {
        return;
    }

    let set = child.flags();
    let unset = |flag: StyleFlags| !set.contains(flag);

    if unset(StyleFlags::CONTENT_COLOR) {
        result.set_content_color(parent.content_color());
    }
    if unset(StyleFlags::OPACITY) {
        result.set_opacity(parent.opacity());
    }
    if unset(StyleFlags::OPACITY_PROPORTIONAL) {
        result.set_opacity_proportional(parent.opacity_proportional());
    }

    if unset(StyleFlags::MAIN_COLOR) {
        result.set_main_color(parent.main_color());
    }
    if unset(StyleFlags::GRADIENT_COLOR) {
        result.set_gradient_color(parent.gradient_color());
    }
    if unset(StyleFlags::BORDER_COLOR) {
        result.set_border_color(parent.border_color());
    }
    if unset(StyleFlags::SHADOW_COLOR) {
        result.set_shadow_color(parent.shadow_color());
    }
    if unset(StyleFlags::RADIUS) {
        result.set_radius(parent.radius());
    }
    if unset(StyleFlags::BORDER_WIDTH) {
        result.set_border_width(parent.border_width());
    }
    if unset(StyleFlags::SHADOW_WIDTH) {
        result.set_shadow_width(parent.shadow_width());
    }
    if unset(StyleFlags::VPAD) {
        result.set_vpad(parent.vpad());
    }
    if unset(StyleFlags::HPAD) {
        result.set_hpad(parent.hpad());
    }
    if unset(StyleFlags::OPAD) {
        result.set_opad(parent.opad());
    }
    if unset(StyleFlags::BORDER_OPACITY) {
        result.set_border_opacity(parent.border_opacity());
    }
    if unset(StyleFlags::EMPTY) {
        result.set_empty(parent.empty());
    }

    if unset(StyleFlags::FONT) {
        result.set_font(parent.font());
    }
    if unset(StyleFlags::LETTER_SPACE) {
        result.set_letter_space(parent.letter_space());
    }
    if unset(StyleFlags::LINE_SPACE) {
        result.set_line_space(parent.line_space());
    }
    if unset(StyleFlags::TEXT_ALIGN) {
        result.set_text_align(parent.text_align());
    }

    if unset(StyleFlags::IMAGE_RECOLOR) {
        result.set_image_recolor(parent.image_recolor());
    }

    if unset(StyleFlags::LINE_WIDTH) {
        result.set_line_width(parent.line_width());
    }

    // The setters above mark the copied attributes; provenance stays the child's
    result.restore_flags(set);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::colors::{COLOR_BLUE, COLOR_RED, COLOR_WHITE, COLOR_YELLOW, rgb};
    use crate::style::record::{FontId, TextAlign};

    /// A fully set style whose every attribute differs from the root style
    fn distinct_style() -> Style {
        let mut style = Style::default();
        style.set_content_color(COLOR_RED);
        style.set_opacity(10);
        style.set_opacity_proportional(false);
        style.set_main_color(COLOR_BLUE);
        style.set_gradient_color(COLOR_YELLOW);
        style.set_border_color(COLOR_WHITE);
        style.set_shadow_color(rgb(1, 2, 3));
        style.set_radius(7);
        style.set_border_width(9);
        style.set_shadow_width(11);
        style.set_vpad(13);
        style.set_hpad(15);
        style.set_opad(17);
        style.set_border_opacity(19);
        style.set_empty(true);
        style.set_font(FontId::Mono10x20);
        style.set_letter_space(-1);
        style.set_line_space(21);
        style.set_text_align(TextAlign::Right);
        style.set_image_recolor(23);
        style.set_line_width(25);
        style
    }

    /// Values of each attribute, in flag order, as comparable integers
    fn values(style: &Style) -> [i64; StyleFlags::COUNT] {
        use embedded_graphics::pixelcolor::raw::{RawData, RawU16};
        let color = |c| i64::from(RawU16::from(c).into_inner());

        [
            color(style.content_color()),
            i64::from(style.opacity()),
            i64::from(style.opacity_proportional()),
            color(style.main_color()),
            color(style.gradient_color()),
            color(style.border_color()),
            color(style.shadow_color()),
            i64::from(style.radius()),
            i64::from(style.border_width()),
            i64::from(style.shadow_width()),
            i64::from(style.vpad()),
            i64::from(style.hpad()),
            i64::from(style.opad()),
            i64::from(style.border_opacity()),
            i64::from(style.empty()),
            style.font() as i64,
            i64::from(style.letter_space()),
            i64::from(style.line_space()),
            style.text_align() as i64,
            i64::from(style.image_recolor()),
            i64::from(style.line_width()),
        ]
    }

    #[test]
    fn test_distinct_style_differs_everywhere() {
        let root = values(&Style::default());
        let other = values(&distinct_style());
        for i in 0..StyleFlags::COUNT {
            assert_ne!(root[i], other[i], "attribute {} is not distinct", i);
        }
    }

    #[test]
    fn test_inheritance_is_total_for_any_set_mask() {
        let parent = Style::default();
        let template = distinct_style();

        // Walk a spread of masks, including all single bits and both extremes
        let mut masks: heapless::Vec<u32, 128> = heapless::Vec::new();
        masks.push(0).unwrap();
        masks.push(StyleFlags::all().bits()).unwrap();
        for bit in 0..StyleFlags::COUNT {
            masks.push(1 << bit).unwrap();
            masks.push(StyleFlags::all().bits() & !(1 << bit)).unwrap();
        }
        let mut seed: u32 = 0x9E37_79B9;
        while !masks.is_full() {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            masks.push(seed).unwrap();
        }

        for &bits in &masks {
            let mask = StyleFlags::from_bits_truncate(bits);
            let mut child = template.cleared();
            child.restore_flags(mask);

            let result = inherit(&child, &parent);
            let (r, c, p) = (values(&result), values(&child), values(&parent));
            for (i, flag) in StyleFlags::all().iter().enumerate() {
                let expected = if mask.contains(flag) { c[i] } else { p[i] };
                assert_eq!(r[i], expected, "attribute {} with mask {:#x}", i, bits);
            }
            assert_eq!(result.flags(), child.flags(), "set bits must be the child's");
        }
    }

    #[test]
    fn test_self_merge_is_a_plain_copy() {
        let mut style = distinct_style();
        style.clear_hpad();
        style.clear_main_color();

        let result = inherit(&style, &style);
        assert_eq!(result, style);
    }

    #[test]
    fn test_inputs_are_untouched() {
        let child = Style::default().cleared();
        let parent = distinct_style();
        let (child_before, parent_before) = (child, parent);

        let mut result = Style::default();
        inherit_into(&mut result, &child, &parent);

        assert_eq!(child, child_before);
        assert_eq!(parent, parent_before);
        assert_eq!(values(&result), values(&parent));
    }

    #[test]
    fn test_chain_resolves_through_weak_styles() {
        let root = distinct_style();
        let mut middle = Style::default().cleared();
        middle.set_hpad(2);
        let mut leaf = Style::default().cleared();
        leaf.set_vpad(3);

        let middle_resolved = inherit(&middle, &root);
        let leaf_resolved = inherit(&leaf, &middle_resolved);

        assert_eq!(leaf_resolved.vpad(), 3);
        assert_eq!(leaf_resolved.hpad(), 2);
        assert_eq!(leaf_resolved.opad(), root.opad());
        assert_eq!(leaf_resolved.font(), FontId::Mono10x20);
    }
}
