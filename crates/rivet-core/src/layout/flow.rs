//! Pretty (justified row packing) and grid layouts

use log::warn;

use super::{LayoutHost, Padding, align_child, placeable_children};
use crate::geometry::Align;
use crate::tree::NodeId;

/// Pack children into rows and justify every row
///
/// Children are added to the current row while the row (both horizontal
/// paddings, the children and one inner padding after each of them) stays
/// within the container width. A row of one child is centered; a child
/// wider than the container on its own is centered on a row of its own.
/// Longer rows start at the horizontal padding and spread the remaining
/// space evenly between their children, so the last child ends at the
/// right padding.
pub(crate) fn layout_pretty<H: LayoutHost + ?Sized>(host: &mut H, container: NodeId) {
    let pad = Padding::of(host.resolved_style(container));
    let container_width = host.coords(container).width();

    let children = placeable_children(host, container);
    if children.is_empty() {
        return;
    }

    host.set_child_change_protect(container, true);

    let mut act_y = pad.vpad;
    let mut next = 0;
    while next < children.len() {
        let row_start = next;
        let mut row_width = 2 * pad.hpad;
        let mut row_height = 0;

        while let Some(&child) = children.get(next) {
            let area = host.coords(child);
            if row_width + area.width() > container_width {
                break;
            }
            row_width += area.width() + pad.opad;
            row_height = row_height.max(area.height());
            next += 1;
        }

        let row = &children[row_start..next];
        match row.len() {
            0 => {
                // Too wide even alone
                let child = children[next];
                row_height = host.coords(child).height();
                align_child(host, container, child, Align::InTopMid, 0, act_y);
                next += 1;
            }
            1 => align_child(host, container, row[0], Align::InTopMid, 0, act_y),
            count => {
                let count = count as i32;
                let used = row_width - pad.opad * count;
                let gap = (container_width - used) / (count - 1);

                let mut act_x = pad.hpad;
                for &child in row {
                    align_child(host, container, child, Align::InTopLeft, act_x, act_y);
                    act_x += host.coords(child).width() + gap;
                }
            }
        }

        act_y += row_height + pad.opad;
    }

    host.set_child_change_protect(container, false);
}

/// Place children in a grid of equally sized cells
///
/// The cell size is taken from the newest child, whether it is placed or
/// not. With room for at least two cells per row the free width is spread
/// between the columns; otherwise every child is centered in a single
/// column.
pub(crate) fn layout_grid<H: LayoutHost + ?Sized>(host: &mut H, container: NodeId) {
    let pad = Padding::of(host.resolved_style(container));
    let container_area = host.coords(container);
    let container_width = container_area.width();

    let children = placeable_children(host, container);
    let Some(&newest) = host.children(container).last() else {
        return;
    };
    if children.is_empty() {
        return;
    }

    let cell = host.coords(newest);
    let (mut cell_width, mut cell_height) = (cell.width(), cell.height());
    if cell_width < 1 || cell_height < 1 {
        warn!(
            "Grid of {:?} has a degenerate {}x{} cell, clamping to 1",
            container, cell_width, cell_height
        );
        cell_width = cell_width.max(1);
        cell_height = cell_height.max(1);
    }

    let inner_width = container_width - 2 * pad.hpad;
    let per_row = (inner_width / (cell_width + pad.opad)).max(0);

    let (x_step, single_x) = if per_row > 1 {
        let step = cell_width + (inner_width - per_row * cell_width) / (per_row - 1);
        (step, 0)
    } else {
        (0, container_width / 2 - cell_width / 2)
    };
    let y_step = cell_height + pad.opad;

    host.set_child_change_protect(container, true);

    let mut act_x = pad.hpad;
    let mut act_y = pad.vpad;
    let mut in_row = 0;
    for child in children {
        if per_row > 1 {
            host.set_pos(child, act_x, act_y);
            act_x += x_step;
        } else {
            host.set_pos(child, single_x, act_y);
        }

        in_row += 1;
        if in_row >= per_row {
            in_row = 0;
            act_x = pad.hpad;
            act_y += y_step;
        }
    }

    host.set_child_change_protect(container, false);
}
