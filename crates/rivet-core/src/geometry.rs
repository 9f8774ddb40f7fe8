//! Inclusive screen areas and parent-relative alignment

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Inclusive rectangle in absolute screen coordinates
///
/// Both corners belong to the area, so a single pixel is `x1 == x2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Area {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create an area from its top-left corner and size
    pub fn with_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width - 1, y + height - 1)
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    /// Whether both areas have the same width and height
    pub fn same_size(&self, other: &Area) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Move the area by the given offset
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
    }

    /// Grow the area by `amount` on every side
    pub fn expanded(&self, amount: i32) -> Self {
        Self::new(
            self.x1 - amount,
            self.y1 - amount,
            self.x2 + amount,
            self.y2 + amount,
        )
    }

    /// Smallest area containing both areas
    pub fn join(&self, other: &Area) -> Self {
        Self::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    /// Overlapping part of two areas, if any
    pub fn intersect(&self, other: &Area) -> Option<Self> {
        let area = Self::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        );
        (area.x1 <= area.x2 && area.y1 <= area.y2).then_some(area)
    }

    /// Whether `other` lies completely inside this area
    pub fn contains_area(&self, other: &Area) -> bool {
        other.x1 >= self.x1 && other.y1 >= self.y1 && other.x2 <= self.x2 && other.y2 <= self.y2
    }

    /// Convert to an embedded-graphics rectangle (empty for inverted areas)
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.x1, self.y1),
            Size::new(self.width().max(0) as u32, self.height().max(0) as u32),
        )
    }
}

impl From<Rectangle> for Area {
    fn from(rect: Rectangle) -> Self {
        Self::with_size(
            rect.top_left.x,
            rect.top_left.y,
            rect.size.width as i32,
            rect.size.height as i32,
        )
    }
}

/// Anchor used to place an object inside its parent
///
/// Offsets passed alongside the anchor are added after the anchor position
/// has been computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    InTopLeft,
    InTopMid,
    InTopRight,
    InBottomLeft,
    InBottomMid,
    InBottomRight,
    InLeftMid,
    InRightMid,
}

impl Align {
    /// Parent-relative position of a `width` x `height` object aligned inside `base`
    ///
    /// Centered anchors split the free space evenly, rounding toward zero.
    pub fn position(&self, base: &Area, width: i32, height: i32, x_ofs: i32, y_ofs: i32) -> Point {
        let base_w = base.width();
        let base_h = base.height();

        let mid_x = (base_w - width) / 2;
        let mid_y = (base_h - height) / 2;

        let (x, y) = match self {
            Align::Center => (mid_x, mid_y),
            Align::InTopLeft => (0, 0),
            Align::InTopMid => (mid_x, 0),
            Align::InTopRight => (base_w - width, 0),
            Align::InBottomLeft => (0, base_h - height),
            Align::InBottomMid => (mid_x, base_h - height),
            Align::InBottomRight => (base_w - width, base_h - height),
            Align::InLeftMid => (0, mid_y),
            Align::InRightMid => (base_w - width, mid_y),
        };

        Point::new(x + x_ofs, y + y_ofs)
    }
}
