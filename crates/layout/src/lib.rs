use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Arena out of memory: requested {requested} bytes, {available} of {capacity} remaining.")]
    OutOfMemory {
        requested: usize,
        available: usize,
        capacity: usize,
    },
    #[error("Node store exhausted: all {0} node slots are in use this generation.")]
    StoreExhausted(usize),
    #[error("Stale handle: issued in generation {handle}, context is at generation {current}.")]
    StaleHandle { handle: u64, current: u64 },
    #[error("Handle index {index} is out of range for {count} live nodes.")]
    OutOfRange { index: usize, count: usize },
    #[error("Render command buffer exhausted: capacity is {0} commands.")]
    CommandBufferExhausted(usize),
    #[error("Invalid alignment {0}: must be a power of two.")]
    InvalidAlignment(usize),
    #[error("Arena of {provided} bytes is below the required minimum of {required} bytes.")]
    ArenaTooSmall { required: usize, provided: usize },
    #[error("No {0} measurer configured.")]
    MissingMeasurer(&'static str),
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

pub mod arena;
pub mod config;
pub(crate) mod context;
pub(crate) mod engine;
pub mod node;
pub mod node_kind;
pub mod output;
pub mod store;

pub use self::arena::{Arena, Region};
pub use self::config::LayoutConfig;
pub use self::context::{Context, ContextBuilder};
pub use self::node::{
    AboveConfig, BesideConfig, MovePinholeConfig, Node, OverlayConfig, TextConfig,
};
pub use self::node_kind::NodeKind;
pub use self::output::{Iter, RenderCommand, RenderCommands, RenderData, RenderTag};
pub use self::store::{NodeHandle, min_arena_size};

// Re-export the geometry and measurement types that appear in this crate's API
pub use looseleaf_traits::{ImageMeasure, MonospaceMeasure, TextMeasure};
pub use looseleaf_types::{Bounds, HorizAlign, Size, Vec2, VertAlign};

#[cfg(test)]
mod test_utils;
