use crate::{Color, NodeRef};

#[derive(Clone, Default)]
pub struct Modifier {
    /// Inset of the children, in terminal columns.
    pub padding: Option<f32>,
    pub background: Option<Color>,
    /// Stable identity among siblings (list rows).
    pub key: Option<u64>,
    pub node_ref: Option<NodeRef>,
    pub test_tag: Option<String>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("padding", &self.padding)
            .field("background", &self.background)
            .field("key", &self.key)
            .field("node_ref", &self.node_ref.as_ref().and_then(NodeRef::id))
            .field("test_tag", &self.test_tag)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn key(mut self, key: u64) -> Self {
        self.key = Some(key);
        self
    }
    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_tag = Some(tag.into());
        self
    }
}
