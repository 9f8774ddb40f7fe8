//! List widget
//!
//! A list is a framed background holding one scrollable container. The
//! scrollable stacks the elements in a centered column and grows
//! vertically with them; scrolling moves it inside the list.

use log::debug;

use crate::layout::LayoutMode;
use crate::style::{StyleName, StyleRegistry};
use crate::tree::{NodeId, TreeError, WidgetKind, WidgetTree};

/// Default list size before downscaling
const LIST_WIDTH: i32 = 120;
const LIST_HEIGHT: i32 = 150;

impl WidgetTree {
    /// Create an empty list with its scrollable container
    pub fn create_list(
        &mut self,
        parent: NodeId,
        registry: &StyleRegistry,
    ) -> Result<NodeId, TreeError> {
        let list = self.create(
            parent,
            WidgetKind::List { scrollable: None },
            registry.shared(StyleName::ListBackground),
        )?;

        let scrollable = self.create(
            list,
            WidgetKind::Container,
            registry.shared(StyleName::ListScrollable),
        )?;
        if let WidgetKind::List { scrollable: slot } = self.kind_mut(list) {
            *slot = Some(scrollable);
        }
        self.set_layout(scrollable, LayoutMode::ColumnMid);
        self.set_fit(scrollable, false, true);

        let ds = self.config().downscale() as i32;
        self.set_size(list, LIST_WIDTH * ds, LIST_HEIGHT * ds);

        Ok(list)
    }

    /// The container the elements of `list` live in
    pub fn list_scrollable(&self, list: NodeId) -> Result<NodeId, TreeError> {
        match self.kind(list) {
            WidgetKind::List {
                scrollable: Some(scrollable),
            } => Ok(*scrollable),
            _ => Err(TreeError::NotAList { id: list }),
        }
    }

    /// Elements of a list, oldest (topmost) first
    pub fn list_elements(&self, list: NodeId) -> Result<&[NodeId], TreeError> {
        let scrollable = self.list_scrollable(list)?;
        Ok(self.children(scrollable))
    }

    /// Append an element, optionally with a text label
    ///
    /// The element lays its content out in a vertically centered row, fits
    /// its height to it and spans the list minus the horizontal padding of
    /// both the list and its scrollable.
    pub fn add_list_element(
        &mut self,
        list: NodeId,
        registry: &StyleRegistry,
        text: Option<&str>,
    ) -> Result<NodeId, TreeError> {
        let scrollable = self.list_scrollable(list)?;

        let element = self.create(
            scrollable,
            WidgetKind::Container,
            registry.shared(StyleName::ListElementReleased),
        )?;
        self.set_layout(element, LayoutMode::RowMid);
        self.set_fit(element, false, true);

        if let Some(text) = text {
            self.create_label(element, text, registry.shared(StyleName::Weak))?;
        }

        let width = self.list_element_width(list, scrollable);
        self.set_width(element, width);
        debug!("List {:?}: added element {:?}", list, element);

        Ok(element)
    }

    /// Text of the label of a list element
    pub fn list_element_text(&self, element: NodeId) -> Option<&str> {
        self.children(element)
            .iter()
            .find_map(|&child| self.text(child))
    }

    /// Scroll so the element below the last fully visible one ends at the bottom
    pub fn list_scroll_up(&mut self, list: NodeId) -> Result<(), TreeError> {
        let scrollable = self.list_scrollable(list)?;
        let bottom = self.coords(list).y2;
        let view_height = self.height(list);

        let mut below = None;
        let mut target = None;
        for &element in self.children(scrollable).iter().rev() {
            if self.coords(element).y2 <= bottom {
                target = below.map(|next| {
                    let (_, y) = self.pos(next);
                    view_height - (y + self.height(next))
                });
                break;
            }
            below = Some(element);
        }

        if let Some(y) = target {
            self.set_y(scrollable, y);
        }
        Ok(())
    }

    /// Scroll so the element above the top edge becomes the first visible one
    pub fn list_scroll_down(&mut self, list: NodeId) -> Result<(), TreeError> {
        let scrollable = self.list_scrollable(list)?;
        let top = self.coords(list).y1;

        let above = self
            .children(scrollable)
            .iter()
            .rev()
            .copied()
            .find(|&element| self.coords(element).y1 < top);

        if let Some(element) = above {
            let (_, y) = self.pos(element);
            self.set_y(scrollable, -y);
        }

        Ok(())
    }

    fn list_element_width(&self, list: NodeId, scrollable: NodeId) -> i32 {
        let hpad = self.style(list).hpad() + self.style(scrollable).hpad();
        self.width(list) - 2 * hpad as i32
    }

    /// Resize the scrollable and its elements after the list was resized
    pub(crate) fn fit_list_elements(&mut self, list: NodeId, scrollable: NodeId) {
        let hpad = self.style(list).hpad() as i32;
        let width = self.width(list) - 2 * hpad;
        self.set_width(scrollable, width);

        let element_width = self.list_element_width(list, scrollable);
        let elements = self.children(scrollable).to_vec();
        for element in elements {
            self.set_width(element, element_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::config::DisplayConfig;
    use crate::style::{StyleName, StyleRegistry};
    use crate::tree::{NodeId, TreeError, WidgetKind, WidgetTree};

    fn setup() -> (StyleRegistry, WidgetTree, NodeId) {
        let config = DisplayConfig::default();
        let registry = StyleRegistry::new(&config);
        let mut tree = WidgetTree::new(&registry, config);
        let root = tree.root();
        let list = tree.create_list(root, &registry).unwrap();
        tree.set_pos(list, 20, 20);
        (registry, tree, list)
    }

    #[test]
    fn test_new_list_geometry() {
        let (_, tree, list) = setup();
        let scrollable = tree.list_scrollable(list).unwrap();

        assert_eq!((tree.width(list), tree.height(list)), (120, 150));
        assert_eq!(tree.width(scrollable), 120);
        assert_eq!(tree.layout(scrollable), crate::layout::LayoutMode::ColumnMid);
        assert!(tree.vfit(scrollable) && !tree.hfit(scrollable));
    }

    #[test]
    fn test_elements_stack_in_a_column() {
        let (registry, mut tree, list) = setup();
        let first = tree.add_list_element(list, &registry, Some("One")).unwrap();
        let second = tree.add_list_element(list, &registry, Some("Two")).unwrap();

        assert_eq!(tree.list_elements(list).unwrap(), &[first, second]);
        assert_eq!(tree.list_element_text(second), Some("Two"));
        assert_eq!(tree.width(first), 120);
        // Label height, no vertical padding, 5 pixels between elements
        assert_eq!(tree.height(first), 10);
        assert_eq!(tree.pos(first).1, 0);
        assert_eq!(tree.pos(second).1, 15);

        let scrollable = tree.list_scrollable(list).unwrap();
        assert_eq!(tree.height(scrollable), 25);
    }

    #[test]
    fn test_resizing_list_resizes_elements() {
        let (registry, mut tree, list) = setup();
        let element = tree.add_list_element(list, &registry, None).unwrap();

        tree.set_width(list, 90);

        assert_eq!(tree.width(tree.list_scrollable(list).unwrap()), 90);
        assert_eq!(tree.width(element), 90);
    }

    #[test]
    fn test_scrolling_pages_through_elements() {
        let (registry, mut tree, list) = setup();
        for i in 0..20 {
            tree.add_list_element(list, &registry, Some(&format!("Item {}", i)))
                .unwrap();
        }
        let scrollable = tree.list_scrollable(list).unwrap();
        assert_eq!(tree.pos(scrollable).1, 0);

        // Element 10 starts at 150 and is 10 high
        tree.list_scroll_up(list).unwrap();
        assert_eq!(tree.pos(scrollable).1, -10);

        tree.list_scroll_down(list).unwrap();
        assert_eq!(tree.pos(scrollable).1, 0);

        // Nothing above the top edge
        tree.list_scroll_down(list).unwrap();
        assert_eq!(tree.pos(scrollable).1, 0);
    }

    #[test]
    fn test_list_operations_require_a_list() {
        let (registry, mut tree, _) = setup();
        let root = tree.root();
        let base = tree
            .create(root, WidgetKind::Base, registry.shared(StyleName::Weak))
            .unwrap();

        assert_eq!(
            tree.add_list_element(base, &registry, None),
            Err(TreeError::NotAList { id: base })
        );
        assert_eq!(tree.list_scroll_up(base), Err(TreeError::NotAList { id: base }));
    }
}
