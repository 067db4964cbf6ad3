use crate::LayoutError;
use crate::store;
use serde::{Deserialize, Serialize};

/// Capacities fixed when a [`crate::Context`] is built.
///
/// Both limits are hard: nothing grows after construction, so exceeding one
/// surfaces as an error telling the caller which capacity to raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// The maximum number of nodes that can be "in flight" within one
    /// generation, i.e. between two calls to `begin`.
    ///
    /// Defaults to `4096`.
    pub max_nodes: usize,

    /// The maximum number of render commands a single layout pass may emit.
    /// Every non-empty leaf reachable from the root emits one command, and a
    /// leaf shared by several parents emits one per use.
    ///
    /// Defaults to `4096`.
    pub max_render_commands: usize,

    /// Text bytes the arena reserves room for on top of the nodes. Text
    /// beyond this budget still fits while the buffer has spare room.
    ///
    /// Defaults to `65536`.
    pub max_text_bytes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_nodes: 4096,
            max_render_commands: 4096,
            max_text_bytes: 64 * 1024,
        }
    }
}

impl LayoutConfig {
    /// A config with the given capacities and the default text budget.
    pub fn new(max_nodes: usize, max_render_commands: usize) -> Self {
        Self {
            max_nodes,
            max_render_commands,
            ..Self::default()
        }
    }

    pub fn with_max_text_bytes(mut self, max_text_bytes: usize) -> Self {
        self.max_text_bytes = max_text_bytes;
        self
    }

    /// Smallest arena that can hold `max_nodes` nodes whose image payload is
    /// of type `I` together with `max_text_bytes` of text.
    pub fn min_arena_size<I>(&self) -> usize {
        store::min_arena_size::<I>(self.max_nodes).saturating_add(self.max_text_bytes)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.max_nodes == 0 {
            return Err(LayoutError::InvalidConfig(
                "max_nodes must be at least 1".to_string(),
            ));
        }
        // Index `u32::MAX` is reserved for the empty handle.
        if self.max_nodes >= u32::MAX as usize {
            return Err(LayoutError::InvalidConfig(format!(
                "max_nodes must be below {}, got {}",
                u32::MAX,
                self.max_nodes
            )));
        }
        if self.max_render_commands == 0 {
            return Err(LayoutError::InvalidConfig(
                "max_render_commands must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
