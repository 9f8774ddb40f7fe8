//! Widget tree: the object hierarchy the style and layout engines run on
//!
//! Nodes live in an arena owned by [`WidgetTree`] and are addressed by
//! [`NodeId`]. Children are kept oldest first. Coordinates are absolute;
//! moving an object moves its whole subtree.
//!
//! Structural and geometric changes are reported to the affected objects
//! as [`Signal`]s, which containers answer by refreshing their layout and
//! auto-fit. Passing a `NodeId` that does not belong to the tree panics.

mod render;
mod signal;

use alloc::rc::Rc;
use alloc::vec::Vec;
use log::{debug, warn};
use thiserror_no_std::Error;

use crate::config::DisplayConfig;
use crate::geometry::Area;
use crate::layout::{LayoutConfig, LayoutMode};
use crate::style::{Style, StyleName, StyleRegistry, inherit};

pub use signal::{MAX_LAYOUT_PASSES, Signal};

/// Maximum number of children of a single object
pub const MAX_CHILDREN: usize = 32;

/// Pending invalidated areas before they are merged into one
pub const MAX_INVALID_AREAS: usize = 16;

/// Maximum number of live objects, the screen included
pub const MAX_OBJECTS: usize = u16::MAX as usize + 1;

/// Maximum label length in bytes
pub const MAX_LABEL_LEN: usize = 32;

/// Children of an object, oldest first
pub type ChildList = heapless::Vec<NodeId, MAX_CHILDREN>;

/// Areas waiting to be redrawn
pub type InvalidAreas = heapless::Vec<Area, MAX_INVALID_AREAS>;

/// Error types for widget tree operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The parent already holds the maximum number of children
    #[error("Child capacity exceeded (max: {max})")]
    ChildCapacityExceeded {
        /// Maximum allowed children per object
        max: usize,
    },

    /// Every object handle is in use
    #[error("Object arena is full (max: {max})")]
    ArenaFull {
        /// Maximum number of live objects
        max: usize,
    },

    /// The screen object has no parent and cannot be removed
    #[error("The root object cannot be deleted")]
    RootHasNoParent,

    /// Label text does not fit the label buffer
    #[error("Text too long (max: {max} bytes)")]
    TextTooLong {
        /// Maximum label length
        max: usize,
    },

    /// A label operation was given an object that is not a label
    #[error("Object {id:?} is not a label")]
    NotALabel {
        /// The offending object
        id: NodeId,
    },

    /// An LED operation was given an object that is not an LED
    #[error("Object {id:?} is not an LED")]
    NotALed {
        /// The offending object
        id: NodeId,
    },

    /// A list operation was given an object that is not a list
    #[error("Object {id:?} is not a list")]
    NotAList {
        /// The offending object
        id: NodeId,
    },
}

/// Handle of an object in a [`WidgetTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u16);

impl NodeId {
    /// Handle for an arena slot, `None` past the last addressable slot
    fn from_slot(slot: usize) -> Option<Self> {
        u16::try_from(slot).ok().map(NodeId)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// What an object is, and the state specific to that kind
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    /// Plain object: drawn as a rectangle, never arranges children
    Base,
    /// Rectangle that can lay out and fit its children
    Container,
    /// Single line of text sized by its font
    Label { text: heapless::String<MAX_LABEL_LEN> },
    /// Round light with adjustable brightness
    Led { brightness: u8 },
    /// Framed list whose elements live in a scrollable container
    List { scrollable: Option<NodeId> },
}

impl WidgetKind {
    /// Whether objects of this kind run layouts and auto-fit
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            WidgetKind::Container | WidgetKind::Led { .. } | WidgetKind::List { .. }
        )
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub kind: WidgetKind,
    pub parent: Option<NodeId>,
    pub children: ChildList,
    pub coords: Area,
    /// The style the object was given, possibly partial
    pub style: Rc<Style>,
    /// `style` resolved against the parent chain
    pub resolved: Style,
    pub layout: LayoutConfig,
    pub hidden: bool,
    pub protect_pos: bool,
    pub protect_child_change: bool,
    /// A layout pass of this container is running
    pub rearranging: bool,
    /// The running layout pass must be repeated
    pub rearrange_pending: bool,
    /// How far drawing reaches beyond the coordinates (shadows)
    pub ext_size: i32,
}

/// Arena of widget objects rooted at a screen object
pub struct WidgetTree {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    default_style: Rc<Style>,
    config: DisplayConfig,
    invalid: InvalidAreas,
}

impl WidgetTree {
    /// Create a tree holding only the screen object
    ///
    /// The screen covers the display resolution and uses the screen
    /// preset. Objects without a parent resolve against the default preset.
    pub fn new(registry: &StyleRegistry, config: DisplayConfig) -> Self {
        let default_style = registry.shared(StyleName::Default);
        let screen_style = registry.shared(StyleName::Screen);
        let resolved = inherit(&screen_style, &default_style);

        let screen = Node {
            kind: WidgetKind::Container,
            parent: None,
            children: ChildList::new(),
            coords: Area::with_size(0, 0, config.hor_res as i32, config.ver_res as i32),
            style: screen_style,
            resolved,
            layout: LayoutConfig::default(),
            hidden: false,
            protect_pos: false,
            protect_child_change: false,
            rearranging: false,
            rearrange_pending: false,
            ext_size: 0,
        };

        let mut nodes = Vec::new();
        nodes.push(Some(screen));

        Self {
            nodes,
            root: NodeId(0),
            default_style,
            config,
            invalid: InvalidAreas::new(),
        }
    }

    /// The screen object
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Create an object as the newest child of `parent`
    ///
    /// The object starts at the parent's top-left corner with a default
    /// size derived from the display dpi.
    pub fn create(
        &mut self,
        parent: NodeId,
        kind: WidgetKind,
        style: Rc<Style>,
    ) -> Result<NodeId, TreeError> {
        if self.node(parent).children.is_full() {
            return Err(TreeError::ChildCapacityExceeded { max: MAX_CHILDREN });
        }

        let slot = self
            .nodes
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.nodes.len());
        let id = NodeId::from_slot(slot).ok_or(TreeError::ArenaFull { max: MAX_OBJECTS })?;
        if slot == self.nodes.len() {
            self.nodes.push(None);
        }

        let parent_area = self.node(parent).coords;
        let dpi = self.config.dpi as i32;
        let resolved = inherit(&style, &self.node(parent).resolved);

        self.nodes[slot] = Some(Node {
            kind,
            parent: Some(parent),
            children: ChildList::new(),
            coords: Area::with_size(parent_area.x1, parent_area.y1, dpi, dpi * 2 / 3),
            style,
            resolved,
            layout: LayoutConfig::default(),
            hidden: false,
            protect_pos: false,
            protect_child_change: false,
            rearranging: false,
            rearrange_pending: false,
            ext_size: 0,
        });

        // Capacity was checked above
        let pushed = self.node_mut(parent).children.push(id);
        debug_assert!(pushed.is_ok());
        debug!("Created {:?} under {:?}", id, parent);

        self.refresh_style(id);
        self.signal(parent, Signal::ChildChanged(Some(id)));

        Ok(id)
    }

    /// Delete an object together with all of its descendants
    pub fn delete(&mut self, id: NodeId) -> Result<(), TreeError> {
        let parent = self.node(id).parent.ok_or(TreeError::RootHasNoParent)?;

        self.invalidate(id);
        self.node_mut(parent).children.retain(|&child| child != id);
        self.free_subtree(id);
        debug!("Deleted {:?} from {:?}", id, parent);

        self.signal(parent, Signal::ChildChanged(None));
        Ok(())
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = self.node(id).children.clone();
        for child in children {
            self.free_subtree(child);
        }
        self.nodes[id.index()] = None;
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Children of an object, oldest first
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn kind(&self, id: NodeId) -> &WidgetKind {
        &self.node(id).kind
    }

    pub(crate) fn kind_mut(&mut self, id: NodeId) -> &mut WidgetKind {
        &mut self.node_mut(id).kind
    }

    /// Whether `id` refers to a live object
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.index()), Some(Some(_)))
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Absolute coordinates of an object
    pub fn coords(&self, id: NodeId) -> Area {
        self.node(id).coords
    }

    pub fn width(&self, id: NodeId) -> i32 {
        self.node(id).coords.width()
    }

    pub fn height(&self, id: NodeId) -> i32 {
        self.node(id).coords.height()
    }

    /// Position relative to the parent's top-left corner
    pub fn pos(&self, id: NodeId) -> (i32, i32) {
        let area = self.node(id).coords;
        match self.node(id).parent {
            Some(parent) => {
                let base = self.node(parent).coords;
                (area.x1 - base.x1, area.y1 - base.y1)
            }
            None => (area.x1, area.y1),
        }
    }

    /// Move an object relative to its parent
    pub fn set_pos(&mut self, id: NodeId, x: i32, y: i32) {
        let (old_x, old_y) = self.pos(id);
        let (dx, dy) = (x - old_x, y - old_y);
        if dx == 0 && dy == 0 {
            return;
        }

        let ori = self.node(id).coords;
        self.invalidate(id);
        self.translate_subtree(id, dx, dy);
        self.invalidate(id);

        self.signal(id, Signal::CoordsChanged(ori));
        if let Some(parent) = self.node(id).parent {
            self.signal(parent, Signal::ChildChanged(Some(id)));
        }
    }

    pub fn set_x(&mut self, id: NodeId, x: i32) {
        let (_, y) = self.pos(id);
        self.set_pos(id, x, y);
    }

    pub fn set_y(&mut self, id: NodeId, y: i32) {
        let (x, _) = self.pos(id);
        self.set_pos(id, x, y);
    }

    fn translate_subtree(&mut self, id: NodeId, dx: i32, dy: i32) {
        self.node_mut(id).coords.translate(dx, dy);
        let children = self.node(id).children.clone();
        for child in children {
            self.translate_subtree(child, dx, dy);
        }
    }

    /// Resize an object, keeping its top-left corner
    ///
    /// Negative sizes are treated as zero.
    pub fn set_size(&mut self, id: NodeId, width: i32, height: i32) {
        let ori = self.node(id).coords;
        let (width, height) = (width.max(0), height.max(0));
        if ori.width() == width && ori.height() == height {
            return;
        }

        self.invalidate(id);
        self.node_mut(id).coords = Area::with_size(ori.x1, ori.y1, width, height);
        self.invalidate(id);

        self.signal(id, Signal::CoordsChanged(ori));
        if let Some(parent) = self.node(id).parent {
            self.signal(parent, Signal::ChildChanged(Some(id)));
        }
    }

    pub fn set_width(&mut self, id: NodeId, width: i32) {
        let height = self.height(id);
        self.set_size(id, width, height);
    }

    pub fn set_height(&mut self, id: NodeId, height: i32) {
        let width = self.width(id);
        self.set_size(id, width, height);
    }

    // ------------------------------------------------------------------
    // Flags
    // ------------------------------------------------------------------

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).hidden
    }

    /// Hide or show an object; hidden objects are neither drawn nor laid out
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if self.node(id).hidden == hidden {
            return;
        }

        if hidden {
            self.invalidate(id);
            self.node_mut(id).hidden = true;
        } else {
            self.node_mut(id).hidden = false;
            self.invalidate(id);
        }

        if let Some(parent) = self.node(id).parent {
            self.signal(parent, Signal::ChildChanged(Some(id)));
        }
    }

    pub fn is_pos_protected(&self, id: NodeId) -> bool {
        self.node(id).protect_pos
    }

    /// Keep layouts from moving this object
    pub fn set_protect_pos(&mut self, id: NodeId, protect: bool) {
        self.node_mut(id).protect_pos = protect;
    }

    /// Whether the object currently ignores child change signals
    pub fn is_child_change_protected(&self, id: NodeId) -> bool {
        self.node(id).protect_child_change
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    /// The resolved style of an object
    pub fn style(&self, id: NodeId) -> &Style {
        &self.node(id).resolved
    }

    /// The style the object was given, before inheritance
    pub fn own_style(&self, id: NodeId) -> &Rc<Style> {
        &self.node(id).style
    }

    /// Give an object a new (shared) style and re-resolve its subtree
    pub fn set_style(&mut self, id: NodeId, style: Rc<Style>) {
        self.node_mut(id).style = style;
        self.refresh_style(id);
    }

    /// Resolve the style of an object and its descendants again
    pub fn refresh_style(&mut self, id: NodeId) {
        let resolved = {
            let node = self.node(id);
            let parent_style = match node.parent {
                Some(parent) => &self.node(parent).resolved,
                None => &*self.default_style,
            };
            inherit(&node.style, parent_style)
        };

        self.invalidate(id);
        self.node_mut(id).resolved = resolved;
        self.signal(id, Signal::StyleChanged);
        self.invalidate(id);

        let children = self.node(id).children.clone();
        for child in children {
            self.refresh_style(child);
        }
    }

    // ------------------------------------------------------------------
    // Layout configuration
    // ------------------------------------------------------------------

    /// Set the layout of a container and arrange its children
    pub fn set_layout(&mut self, id: NodeId, mode: LayoutMode) {
        self.node_mut(id).layout.mode = mode;
        self.signal(id, Signal::ChildChanged(None));
    }

    /// Enable auto-fit per axis and resize the container accordingly
    pub fn set_fit(&mut self, id: NodeId, hfit: bool, vfit: bool) {
        let layout = &mut self.node_mut(id).layout;
        layout.hfit = hfit;
        layout.vfit = vfit;
        self.signal(id, Signal::ChildChanged(None));
    }

    pub fn layout(&self, id: NodeId) -> LayoutMode {
        self.node(id).layout.mode
    }

    pub fn hfit(&self, id: NodeId) -> bool {
        self.node(id).layout.hfit
    }

    pub fn vfit(&self, id: NodeId) -> bool {
        self.node(id).layout.vfit
    }

    // ------------------------------------------------------------------
    // Invalidation
    // ------------------------------------------------------------------

    /// Queue the visible area of an object (shadow included) for redraw
    pub fn invalidate(&mut self, id: NodeId) {
        let node = self.node(id);
        if node.hidden {
            return;
        }

        let screen = self.node(self.root).coords;
        let Some(area) = node.coords.expanded(node.ext_size).intersect(&screen) else {
            return;
        };

        if self.invalid.iter().any(|queued| queued.contains_area(&area)) {
            return;
        }

        if let Err(area) = self.invalid.push(area) {
            warn!("Invalid area buffer full, merging {} areas", MAX_INVALID_AREAS);
            let merged = self.invalid.iter().fold(area, |acc, queued| acc.join(queued));
            self.invalid.clear();
            let pushed = self.invalid.push(merged);
            debug_assert!(pushed.is_ok());
        }
    }

    /// Take the areas queued for redraw since the last call
    pub fn take_invalidated(&mut self) -> InvalidAreas {
        core::mem::take(&mut self.invalid)
    }

    // ------------------------------------------------------------------
    // Arena access
    // ------------------------------------------------------------------

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.index()]
            .as_ref()
            .unwrap_or_else(|| panic!("{:?} is not a live object", id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.index()]
            .as_mut()
            .unwrap_or_else(|| panic!("{:?} is not a live object", id))
    }
}
