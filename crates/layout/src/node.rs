//! Node variants and the per-combinator configuration they carry.

use crate::arena::Region;
use crate::store::NodeHandle;
use looseleaf_types::{HorizAlign, Size, Vec2, VertAlign};
use serde::{Deserialize, Serialize};

/// Configuration for a `text` leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Additional spacing between letters (can be negative).
    pub letter_spacing: i16,
}

/// Configuration for `above`: how the narrower child sits horizontally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AboveConfig {
    pub align_h: HorizAlign,
    /// Added to the narrower child's position after alignment.
    pub offset: Vec2,
}

/// Configuration for `beside`: how the shorter child sits vertically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BesideConfig {
    pub align_v: VertAlign,
    /// Added to the shorter child's position after alignment.
    pub offset: Vec2,
}

/// Configuration for `overlay`: where the upper child sits over the lower one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub align_h: HorizAlign,
    pub align_v: VertAlign,
    /// Added to the upper child's position after alignment.
    pub offset: Vec2,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MovePinholeConfig {
    pub offset: Vec2,
}

/// A node in the layout tree.
///
/// Nodes are immutable once stored. Combinators refer to their children by
/// handle, and every child was created before its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<I> {
    /// Zero-size leaf that renders nothing.
    Empty,
    Image {
        image: I,
        size: Size,
    },
    /// `text` points into the context's arena; `size` was measured once at
    /// creation.
    Text {
        text: Region,
        config: TextConfig,
        size: Size,
    },
    Above {
        config: AboveConfig,
        top: NodeHandle,
        bottom: NodeHandle,
    },
    Beside {
        config: BesideConfig,
        left: NodeHandle,
        right: NodeHandle,
    },
    Overlay {
        config: OverlayConfig,
        over: NodeHandle,
        under: NodeHandle,
    },
    MovePinhole {
        config: MovePinholeConfig,
        child: NodeHandle,
    },
    ResetPinhole {
        child: NodeHandle,
    },
}

impl<I> Node<I> {
    /// Child handles in traversal order.
    pub fn children(&self) -> (Option<NodeHandle>, Option<NodeHandle>) {
        match self {
            Node::Empty | Node::Image { .. } | Node::Text { .. } => (None, None),
            Node::Above { top, bottom, .. } => (Some(*top), Some(*bottom)),
            Node::Beside { left, right, .. } => (Some(*left), Some(*right)),
            Node::Overlay { over, under, .. } => (Some(*over), Some(*under)),
            Node::MovePinhole { child, .. } | Node::ResetPinhole { child } => (Some(*child), None),
        }
    }
}
