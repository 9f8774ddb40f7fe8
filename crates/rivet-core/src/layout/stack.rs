//! Column, row and center layouts

use super::{LayoutHost, LayoutMode, Padding, align_child, placeable_children};
use crate::geometry::Align;
use crate::tree::NodeId;

/// Stack children vertically, starting below the vertical padding
///
/// The anchor comes from the mode: left edge (+hpad), middle, or right
/// edge (-hpad).
pub(crate) fn layout_column<H: LayoutHost + ?Sized>(host: &mut H, container: NodeId, mode: LayoutMode) {
    let pad = Padding::of(host.resolved_style(container));

    let (align, hpad_corr) = match mode {
        LayoutMode::ColumnMid => (Align::InTopMid, 0),
        LayoutMode::ColumnRight => (Align::InTopRight, -pad.hpad),
        _ => (Align::InTopLeft, pad.hpad),
    };

    host.set_child_change_protect(container, true);

    let mut last_y = pad.vpad;
    for child in placeable_children(host, container) {
        align_child(host, container, child, align, hpad_corr, last_y);
        last_y += host.coords(child).height() + pad.opad;
    }

    host.set_child_change_protect(container, false);
}

/// Stack children horizontally, starting after the horizontal padding
///
/// The anchor comes from the mode: top edge (+vpad), middle, or bottom
/// edge (-vpad).
pub(crate) fn layout_row<H: LayoutHost + ?Sized>(host: &mut H, container: NodeId, mode: LayoutMode) {
    let pad = Padding::of(host.resolved_style(container));

    let (align, vpad_corr) = match mode {
        LayoutMode::RowMid => (Align::InLeftMid, 0),
        LayoutMode::RowBottom => (Align::InBottomLeft, -pad.vpad),
        _ => (Align::InTopLeft, pad.vpad),
    };

    host.set_child_change_protect(container, true);

    let mut last_x = pad.hpad;
    for child in placeable_children(host, container) {
        align_child(host, container, child, align, last_x, vpad_corr);
        last_x += host.coords(child).width() + pad.opad;
    }

    host.set_child_change_protect(container, false);
}

/// Stack children vertically as one block centered in the container
///
/// The block height counts every child (hidden ones included) plus the
/// inner padding between them.
pub(crate) fn layout_center<H: LayoutHost + ?Sized>(host: &mut H, container: NodeId) {
    let pad = Padding::of(host.resolved_style(container));

    let children = host.children(container);
    if children.is_empty() {
        return;
    }

    let total_height: i32 = children
        .iter()
        .map(|&child| host.coords(child).height() + pad.opad)
        .sum::<i32>()
        - pad.opad;

    // Top of the block, computed once so the result does not depend on
    // the parity of the individual child heights
    let top = (host.coords(container).height() - total_height) / 2;

    host.set_child_change_protect(container, true);

    let mut last_y = top;
    for child in placeable_children(host, container) {
        align_child(host, container, child, Align::InTopMid, 0, last_y);
        last_y += host.coords(child).height() + pad.opad;
    }

    host.set_child_change_protect(container, false);
}

#[cfg(test)]
mod tests {
    use crate::geometry::Area;
    use crate::layout::test_support::{Event, Recorder, fixture};
    use crate::layout::{LayoutMode, refresh_autofit, refresh_layout};

    #[test]
    fn test_column_left_stacks_oldest_first() {
        let mut f = fixture(100, 200, 4, 5, 2);
        let first = f.child(30, 10);
        let second = f.child(30, 20);
        let third = f.child(30, 30);
        f.tree.set_layout(f.container, LayoutMode::ColumnLeft);

        assert_eq!(f.rel(first).y1, 5);
        assert_eq!(f.rel(second).y1, 17);
        assert_eq!(f.rel(third).y1, 39);
        for child in [first, second, third] {
            assert_eq!(f.rel(child).x1, 4, "column-left adds hpad");
        }
    }

    #[test]
    fn test_column_mid_and_right_anchors() {
        let mut f = fixture(100, 200, 4, 0, 0);
        let child = f.child(30, 10);

        f.tree.set_layout(f.container, LayoutMode::ColumnMid);
        assert_eq!(f.rel(child).x1, 35);

        f.tree.set_layout(f.container, LayoutMode::ColumnRight);
        assert_eq!(f.rel(child), Area::new(66, 0, 95, 9));
    }

    #[test]
    fn test_column_skips_hidden_and_protected() {
        let mut f = fixture(100, 200, 0, 5, 2);
        let first = f.child(30, 10);
        let hidden = f.child(30, 50);
        let pinned = f.child(30, 50);
        let last = f.child(30, 10);
        f.tree.set_hidden(hidden, true);
        f.tree.set_protect_pos(pinned, true);
        f.tree.set_pos(pinned, 60, 150);

        f.tree.set_layout(f.container, LayoutMode::ColumnLeft);

        assert_eq!(f.rel(first).y1, 5);
        assert_eq!(f.rel(last).y1, 17);
        assert_eq!(f.rel(pinned).x1, 60);
        assert_eq!(f.rel(pinned).y1, 150);
    }

    #[test]
    fn test_row_anchors() {
        let mut f = fixture(200, 100, 3, 6, 4);
        let a = f.child(20, 10);
        let b = f.child(30, 20);

        f.tree.set_layout(f.container, LayoutMode::RowTop);
        assert_eq!((f.rel(a).x1, f.rel(a).y1), (3, 6));
        assert_eq!((f.rel(b).x1, f.rel(b).y1), (27, 6));

        f.tree.set_layout(f.container, LayoutMode::RowMid);
        assert_eq!(f.rel(a).y1, 45);
        assert_eq!(f.rel(b).y1, 40);

        f.tree.set_layout(f.container, LayoutMode::RowBottom);
        assert_eq!(f.rel(a).y2, 93);
        assert_eq!(f.rel(b).y2, 93);
    }

    #[test]
    fn test_center_places_block_around_middle() {
        let mut f = fixture(100, 100, 0, 0, 10);
        let a = f.child(20, 20);
        let b = f.child(40, 20);

        f.tree.set_layout(f.container, LayoutMode::Center);

        // Block is 20 + 10 + 20 = 50 high, centered in 100
        assert_eq!(f.rel(a), Area::new(40, 25, 59, 44));
        assert_eq!(f.rel(b), Area::new(30, 55, 69, 74));
    }

    #[test]
    fn test_center_counts_hidden_children_without_moving_them() {
        let mut f = fixture(100, 100, 0, 0, 10);
        let a = f.child(20, 20);
        let hidden = f.child(20, 30);
        let b = f.child(40, 20);
        f.tree.set_pos(hidden, 70, 3);
        f.tree.set_hidden(hidden, true);

        f.tree.set_layout(f.container, LayoutMode::Center);

        // Block is 20 + 10 + 30 + 10 + 20 = 90 high, but the hidden child
        // takes no room when the others are placed
        assert_eq!(f.rel(a).y1, 5);
        assert_eq!(f.rel(b).y1, 35);
        assert_eq!((f.rel(hidden).x1, f.rel(hidden).y1), (70, 3));
    }

    #[test]
    fn test_center_with_vertical_fit_settles() {
        let mut f = fixture(200, 200, 3, 5, 1);
        let a = f.child(10, 7);
        let b = f.child(10, 8);
        f.tree.set_layout(f.container, LayoutMode::Center);
        f.tree.set_fit(f.container, false, true);

        // 7 + 1 + 8 plus vpad on both sides
        let area = f.tree.coords(f.container);
        assert_eq!(area.height(), 26);
        assert_eq!(f.rel(a).y1, 5);
        assert_eq!(f.rel(b).y2, 20);

        // Another pass finds nothing to change
        refresh_layout(&mut f.tree, f.container);
        refresh_autofit(&mut f.tree, f.container);
        assert_eq!(f.tree.coords(f.container), area);
        assert_eq!(f.rel(a).y1, 5);
    }

    #[test]
    fn test_moves_happen_inside_child_change_protection() {
        for mode in [
            LayoutMode::ColumnLeft,
            LayoutMode::RowMid,
            LayoutMode::Center,
            LayoutMode::Pretty,
            LayoutMode::Grid,
        ] {
            let mut f = fixture(100, 200, 2, 2, 2);
            f.child(10, 10);
            f.child(10, 10);
            f.child(10, 10);
            f.tree.set_layout(f.container, mode);

            let container = f.container;
            let mut host = Recorder::new(&mut f.tree);
            refresh_layout(&mut host, container);

            assert_eq!(host.moves(), 3, "{:?}", mode);
            assert_eq!(host.events.first(), Some(&Event::Protect(container, true)), "{:?}", mode);
            assert_eq!(host.events.last(), Some(&Event::Protect(container, false)), "{:?}", mode);
            let protects = host
                .events
                .iter()
                .filter(|event| matches!(event, Event::Protect(..)))
                .count();
            assert_eq!(protects, 2, "one protected span per layout");
            assert!(
                !host.events.iter().any(|event| matches!(event, Event::NotifyParent(_))),
                "layouts never notify per child"
            );
        }
    }

    #[test]
    fn test_layout_leaves_protection_cleared() {
        let mut f = fixture(100, 200, 0, 0, 0);
        let root = f.tree.root();
        f.child(10, 10);
        f.child(10, 10);
        f.tree.set_layout(f.container, LayoutMode::ColumnLeft);
        assert!(!f.tree.is_child_change_protected(f.container));
        assert!(!f.tree.is_child_change_protected(root));
    }
}
