//! Container layout engine
//!
//! A container with a [`LayoutMode`] other than `Off` positions its
//! children whenever they, its style or its size change:
//! - [`stack`] - Column, row and center layouts
//! - [`flow`] - Pretty (justified row packing) and grid layouts
//! - [`autofit`] - Resizing the container around its visible children
//!
//! Every algorithm reads the container's padding from its resolved style,
//! skips hidden and position-protected children, and walks the children
//! from the oldest to the newest (the tail-to-head order of the child
//! list). The algorithms only talk to the widget tree through
//! [`LayoutHost`].

pub mod autofit;
pub mod flow;
pub mod stack;

use embedded_graphics::prelude::Point;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::{Align, Area};
use crate::style::Style;
use crate::tree::{ChildList, NodeId};

pub use autofit::refresh_autofit;

/// How a container arranges its children
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Children keep the positions they are given
    #[default]
    Off,
    /// Stack vertically, aligned to the left edge
    ColumnLeft,
    /// Stack vertically, horizontally centered
    ColumnMid,
    /// Stack vertically, aligned to the right edge
    ColumnRight,
    /// Stack horizontally, aligned to the top edge
    RowTop,
    /// Stack horizontally, vertically centered
    RowMid,
    /// Stack horizontally, aligned to the bottom edge
    RowBottom,
    /// Stack vertically as one block centered in the container
    Center,
    /// Fill rows greedily and justify each row to the container width
    Pretty,
    /// Place equally sized children in a grid
    Grid,
}

/// Per-container layout settings
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    /// Resize horizontally to the children
    pub hfit: bool,
    /// Resize vertically to the children
    pub vfit: bool,
}

/// What the layout engine needs from the widget tree
///
/// Children are reported oldest first. Positions passed to
/// [`LayoutHost::set_pos`] are relative to the parent's top-left corner.
pub trait LayoutHost {
    fn layout_config(&self, id: NodeId) -> LayoutConfig;

    fn children(&self, id: NodeId) -> ChildList;

    /// Absolute coordinates
    fn coords(&self, id: NodeId) -> Area;

    fn is_hidden(&self, id: NodeId) -> bool;

    /// Whether the object must not be moved by layouts
    fn is_pos_protected(&self, id: NodeId) -> bool;

    /// The fully inherited style of the object
    fn resolved_style(&self, id: NodeId) -> &Style;

    /// Whether committed auto-fit bounds are snapped for anti-aliasing
    fn antialias(&self) -> bool;

    /// Move an object relative to its parent
    fn set_pos(&mut self, id: NodeId, x: i32, y: i32);

    /// Suppress (or re-enable) the container's reaction to child changes
    fn set_child_change_protect(&mut self, id: NodeId, protect: bool);

    /// Replace the coordinates of an object, invalidating old and new area
    fn commit_coords(&mut self, id: NodeId, area: Area);

    /// Tell the object its coordinates changed from `old`
    fn notify_coords_changed(&mut self, id: NodeId, old: Area);

    /// Tell the parent of `id` that one of its children changed
    fn notify_parent(&mut self, id: NodeId);
}

/// Padding values of a container, as signed coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Padding {
    pub hpad: i32,
    pub vpad: i32,
    pub opad: i32,
}

impl Padding {
    pub fn of(style: &Style) -> Self {
        Self {
            hpad: style.hpad() as i32,
            vpad: style.vpad() as i32,
            opad: style.opad() as i32,
        }
    }
}

/// Re-arrange the children of `container` according to its layout mode
///
/// Does nothing when the layout is off or the container has no children.
pub fn refresh_layout<H: LayoutHost + ?Sized>(host: &mut H, container: NodeId) {
    let mode = host.layout_config(container).mode;
    if mode == LayoutMode::Off || host.children(container).is_empty() {
        return;
    }

    debug!("Refreshing {:?} layout of {:?}", mode, container);

    match mode {
        LayoutMode::Off => {}
        LayoutMode::ColumnLeft | LayoutMode::ColumnMid | LayoutMode::ColumnRight => {
            stack::layout_column(host, container, mode)
        }
        LayoutMode::RowTop | LayoutMode::RowMid | LayoutMode::RowBottom => {
            stack::layout_row(host, container, mode)
        }
        LayoutMode::Center => stack::layout_center(host, container),
        LayoutMode::Pretty => flow::layout_pretty(host, container),
        LayoutMode::Grid => flow::layout_grid(host, container),
    }
}

/// Children a layout may move, oldest first
pub(crate) fn placeable_children<H: LayoutHost + ?Sized>(host: &H, container: NodeId) -> ChildList {
    host.children(container)
        .into_iter()
        .filter(|&child| !host.is_hidden(child) && !host.is_pos_protected(child))
        .collect()
}

/// Align `child` inside `container` and move it there
pub(crate) fn align_child<H: LayoutHost + ?Sized>(
    host: &mut H,
    container: NodeId,
    child: NodeId,
    align: Align,
    x_ofs: i32,
    y_ofs: i32,
) {
    let base = host.coords(container);
    let area = host.coords(child);
    let Point { x, y } = align.position(&base, area.width(), area.height(), x_ofs, y_ofs);
    host.set_pos(child, x, y);
}
