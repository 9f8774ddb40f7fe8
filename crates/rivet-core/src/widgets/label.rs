//! Label widget

use alloc::rc::Rc;

use crate::draw::text_size;
use crate::style::Style;
use crate::tree::{MAX_LABEL_LEN, NodeId, TreeError, WidgetKind, WidgetTree};

fn label_text(text: &str) -> Result<heapless::String<MAX_LABEL_LEN>, TreeError> {
    let mut buf = heapless::String::new();
    buf.push_str(text)
        .map_err(|_| TreeError::TextTooLong { max: MAX_LABEL_LEN })?;
    Ok(buf)
}

impl WidgetTree {
    /// Create a label showing `text`, sized to fit it
    pub fn create_label(
        &mut self,
        parent: NodeId,
        text: &str,
        style: Rc<Style>,
    ) -> Result<NodeId, TreeError> {
        let text = label_text(text)?;
        self.create(parent, WidgetKind::Label { text }, style)
    }

    /// Replace the text of a label and resize it
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), TreeError> {
        let new_text = label_text(text)?;
        match self.kind_mut(id) {
            WidgetKind::Label { text } => *text = new_text,
            _ => return Err(TreeError::NotALabel { id }),
        }

        self.invalidate(id);
        self.refresh_label_size(id);
        Ok(())
    }

    /// The text of a label, `None` for other objects
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            WidgetKind::Label { text } => Some(text.as_str()),
            _ => None,
        }
    }

    pub(crate) fn refresh_label_size(&mut self, id: NodeId) {
        let Some(text) = self.text(id) else {
            return;
        };
        let (width, height) = text_size(self.style(id).font(), text);
        self.set_size(id, width, height);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DisplayConfig;
    use crate::style::{FontId, StyleName, StyleRegistry};
    use crate::tree::{MAX_LABEL_LEN, TreeError, WidgetKind, WidgetTree};
    use alloc::rc::Rc;

    #[test]
    fn test_label_is_sized_by_font() {
        let config = DisplayConfig::default();
        let registry = StyleRegistry::new(&config);
        let mut tree = WidgetTree::new(&registry, config);
        let root = tree.root();

        let label = tree
            .create_label(root, "Hello", registry.shared(StyleName::Weak))
            .unwrap();
        assert_eq!(tree.text(label), Some("Hello"));
        assert_eq!((tree.width(label), tree.height(label)), (30, 10));

        tree.set_text(label, "Hi").unwrap();
        assert_eq!(tree.width(label), 12);

        let mut large = *registry.get(StyleName::Weak);
        large.set_font(FontId::Mono10x20);
        tree.set_style(label, Rc::new(large));
        assert_eq!((tree.width(label), tree.height(label)), (20, 20));
    }

    #[test]
    fn test_label_errors() {
        let config = DisplayConfig::default();
        let registry = StyleRegistry::new(&config);
        let mut tree = WidgetTree::new(&registry, config);
        let root = tree.root();

        let long = "x".repeat(MAX_LABEL_LEN + 1);
        assert_eq!(
            tree.create_label(root, &long, registry.shared(StyleName::Weak)),
            Err(TreeError::TextTooLong { max: MAX_LABEL_LEN })
        );

        let base = tree
            .create(root, WidgetKind::Base, registry.shared(StyleName::Weak))
            .unwrap();
        assert_eq!(tree.set_text(base, "x"), Err(TreeError::NotALabel { id: base }));
        assert_eq!(tree.text(base), None);
    }
}
