//! Drawing the tree onto a display

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;

use super::{NodeId, WidgetKind, WidgetTree};
use crate::draw::{draw_label, draw_rect, draw_shadow, rect_covers};
use crate::geometry::Area;
use crate::widgets::led_draw_style;

impl WidgetTree {
    /// Draw the whole screen
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D) -> Result<(), D::Error> {
        let screen = self.coords(self.root());
        self.draw_area(target, &screen)
    }

    /// Redraw every queued invalid area, returning how many were drawn
    pub fn refresh<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        target: &mut D,
    ) -> Result<usize, D::Error> {
        let areas = self.take_invalidated();
        for area in &areas {
            self.draw_area(target, area)?;
        }
        Ok(areas.len())
    }

    /// Draw the objects visible in `mask`
    ///
    /// Drawing starts at the newest object that fully covers the mask, so
    /// anything underneath it is skipped. Objects created after it (and
    /// after each of its ancestors) are drawn on top.
    pub fn draw_area<D: DrawTarget<Color = Rgb565>>(
        &self,
        target: &mut D,
        mask: &Area,
    ) -> Result<(), D::Error> {
        let top = self.top_covering(self.root(), mask).unwrap_or(self.root());
        self.draw_subtree(target, top, mask)?;

        let mut current = top;
        while let Some(parent) = self.parent(current) {
            let siblings = self.children(parent);
            if let Some(pos) = siblings.iter().position(|&child| child == current) {
                for &sibling in &siblings[pos + 1..] {
                    self.draw_subtree(target, sibling, mask)?;
                }
            }
            current = parent;
        }

        Ok(())
    }

    /// The newest object of the subtree that paints every pixel of `mask`
    pub(crate) fn top_covering(&self, id: NodeId, mask: &Area) -> Option<NodeId> {
        let node = self.node(id);
        if node.hidden || !node.coords.contains_area(mask) {
            return None;
        }

        node.children
            .iter()
            .rev()
            .find_map(|&child| self.top_covering(child, mask))
            .or_else(|| self.covers(id, mask).then_some(id))
    }

    fn covers(&self, id: NodeId, mask: &Area) -> bool {
        let node = self.node(id);
        match node.kind {
            WidgetKind::Label { .. } | WidgetKind::Led { .. } => false,
            _ => rect_covers(&node.coords, &node.resolved, mask),
        }
    }

    fn draw_subtree<D: DrawTarget<Color = Rgb565>>(
        &self,
        target: &mut D,
        id: NodeId,
        mask: &Area,
    ) -> Result<(), D::Error> {
        let node = self.node(id);
        if node.hidden {
            return Ok(());
        }

        let Some(own_mask) = node.coords.expanded(node.ext_size).intersect(mask) else {
            return Ok(());
        };
        self.draw_node(target, id, &own_mask)?;

        // Children are clipped to their parent
        let Some(child_mask) = node.coords.intersect(mask) else {
            return Ok(());
        };
        for &child in &node.children {
            self.draw_subtree(target, child, &child_mask)?;
        }

        Ok(())
    }

    fn draw_node<D: DrawTarget<Color = Rgb565>>(
        &self,
        target: &mut D,
        id: NodeId,
        mask: &Area,
    ) -> Result<(), D::Error> {
        let node = self.node(id);
        match &node.kind {
            WidgetKind::Label { text } => draw_label(target, &node.coords, mask, &node.resolved, text),
            WidgetKind::Led { brightness } => {
                let style = led_draw_style(&node.resolved, *brightness);
                draw_shadow(target, &node.coords, mask, &style)?;
                draw_rect(target, &node.coords, mask, &style)
            }
            _ => {
                draw_shadow(target, &node.coords, mask, &node.resolved)?;
                draw_rect(target, &node.coords, mask, &node.resolved)
            }
        }
    }
}
