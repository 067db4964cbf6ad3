use crate::node::Node;

/// The variant of a stored node, without its payload.
///
/// Handy for logging and for assertions where the payload type `I` would
/// otherwise have to be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Empty,
    Image,
    Text,
    Above,
    Beside,
    Overlay,
    MovePinhole,
    ResetPinhole,
}

impl NodeKind {
    pub fn of<I>(node: &Node<I>) -> Self {
        match node {
            Node::Empty => NodeKind::Empty,
            Node::Image { .. } => NodeKind::Image,
            Node::Text { .. } => NodeKind::Text,
            Node::Above { .. } => NodeKind::Above,
            Node::Beside { .. } => NodeKind::Beside,
            Node::Overlay { .. } => NodeKind::Overlay,
            Node::MovePinhole { .. } => NodeKind::MovePinhole,
            Node::ResetPinhole { .. } => NodeKind::ResetPinhole,
        }
    }

    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Empty => "Empty",
            NodeKind::Image => "Image",
            NodeKind::Text => "Text",
            NodeKind::Above => "Above",
            NodeKind::Beside => "Beside",
            NodeKind::Overlay => "Overlay",
            NodeKind::MovePinhole => "MovePinhole",
            NodeKind::ResetPinhole => "ResetPinhole",
        }
    }
}
