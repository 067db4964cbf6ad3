//! Alignment of a child along one axis of its parent.
//!
//! Both axes share the same rule: the leading edge puts the child at offset 0,
//! the trailing edge puts it flush against the far side, and centering uses
//! floor division so odd remainders favour the leading edge.

use serde::{Deserialize, Serialize};

/// Horizontal alignment used by `above` and `overlay`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment used by `beside` and `overlay`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

fn axis_offset(leading: bool, trailing: bool, container: u32, child: u32) -> u32 {
    let slack = container.saturating_sub(child);
    if leading {
        0
    } else if trailing {
        slack
    } else {
        slack / 2
    }
}

impl HorizAlign {
    /// Offset of a `child`-wide box inside a `container`-wide one.
    pub fn offset(self, container: u32, child: u32) -> u32 {
        axis_offset(
            self == HorizAlign::Left,
            self == HorizAlign::Right,
            container,
            child,
        )
    }
}

impl VertAlign {
    /// Offset of a `child`-tall box inside a `container`-tall one.
    pub fn offset(self, container: u32, child: u32) -> u32 {
        axis_offset(
            self == VertAlign::Top,
            self == VertAlign::Bottom,
            container,
            child,
        )
    }
}
