//! Signal dispatch and the layout engine's view of the tree

use log::{trace, warn};

use super::{ChildList, NodeId, WidgetKind, WidgetTree};
use crate::geometry::Area;
use crate::layout::{self, LayoutConfig, LayoutHost};
use crate::style::Style;

/// Layout and auto-fit passes one container may run per request
pub const MAX_LAYOUT_PASSES: u8 = 8;

/// Notification delivered to an object after something about it changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The resolved style of the object was refreshed
    StyleChanged,
    /// A child was added, removed, moved, resized or hidden
    ChildChanged(Option<NodeId>),
    /// The object's coordinates changed; carries the previous area
    CoordsChanged(Area),
}

impl WidgetTree {
    pub(crate) fn signal(&mut self, id: NodeId, signal: Signal) {
        trace!("{:?} <- {:?}", id, signal);

        match signal {
            Signal::StyleChanged => self.on_style_changed(id),
            Signal::ChildChanged(_) => self.on_child_changed(id),
            Signal::CoordsChanged(ori) => self.on_coords_changed(id, ori),
        }
    }

    fn on_style_changed(&mut self, id: NodeId) {
        let shadow = self.node(id).resolved.shadow_width() as i32;
        self.node_mut(id).ext_size = shadow;

        let kind = &self.node(id).kind;
        if matches!(kind, WidgetKind::Label { .. }) {
            self.refresh_label_size(id);
        } else if kind.is_container() {
            self.rearrange(id);
        }
    }

    fn on_child_changed(&mut self, id: NodeId) {
        let node = self.node(id);
        if node.kind.is_container() && !node.protect_child_change {
            self.rearrange(id);
        }
    }

    fn on_coords_changed(&mut self, id: NodeId, ori: Area) {
        if ori.same_size(&self.node(id).coords) {
            return;
        }

        let kind = &self.node(id).kind;
        if let WidgetKind::List {
            scrollable: Some(scrollable),
        } = *kind
        {
            self.rearrange(id);
            self.fit_list_elements(id, scrollable);
        } else if kind.is_container() {
            self.rearrange(id);
        }
    }

    /// Run the layout and then auto-fit of a container
    ///
    /// A request for the same container while its pass runs (auto-fit
    /// resizing it, or a fitted child reporting back) does not recurse. It
    /// marks the pass as pending and the running call repeats it, at most
    /// [`MAX_LAYOUT_PASSES`] times.
    fn rearrange(&mut self, id: NodeId) {
        if self.node(id).rearranging {
            self.node_mut(id).rearrange_pending = true;
            return;
        }

        self.node_mut(id).rearranging = true;
        let mut passes = 0;
        loop {
            self.node_mut(id).rearrange_pending = false;
            layout::refresh_layout(self, id);
            layout::refresh_autofit(self, id);
            passes += 1;

            if !self.node(id).rearrange_pending {
                break;
            }
            if passes >= MAX_LAYOUT_PASSES {
                warn!("Layout of {:?} did not settle after {} passes", id, passes);
                break;
            }
        }
        let node = self.node_mut(id);
        node.rearranging = false;
        node.rearrange_pending = false;
    }
}

impl LayoutHost for WidgetTree {
    fn layout_config(&self, id: NodeId) -> LayoutConfig {
        self.node(id).layout
    }

    fn children(&self, id: NodeId) -> ChildList {
        self.node(id).children.clone()
    }

    fn coords(&self, id: NodeId) -> Area {
        self.node(id).coords
    }

    fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).hidden
    }

    fn is_pos_protected(&self, id: NodeId) -> bool {
        self.node(id).protect_pos
    }

    fn resolved_style(&self, id: NodeId) -> &Style {
        &self.node(id).resolved
    }

    fn antialias(&self) -> bool {
        self.config().antialias
    }

    fn set_pos(&mut self, id: NodeId, x: i32, y: i32) {
        WidgetTree::set_pos(self, id, x, y);
    }

    fn set_child_change_protect(&mut self, id: NodeId, protect: bool) {
        self.node_mut(id).protect_child_change = protect;
    }

    fn commit_coords(&mut self, id: NodeId, area: Area) {
        self.invalidate(id);
        self.node_mut(id).coords = area;
        self.invalidate(id);
    }

    fn notify_coords_changed(&mut self, id: NodeId, old: Area) {
        self.signal(id, Signal::CoordsChanged(old));
    }

    fn notify_parent(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent {
            self.signal(parent, Signal::ChildChanged(Some(id)));
        }
    }
}
