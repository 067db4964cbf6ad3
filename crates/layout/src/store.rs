//! Generation-stamped node storage.
//!
//! Every node occupies a slot in a vector reserved once at construction, and
//! its bytes are also charged to the arena so one buffer size bounds a frame.
//! `begin` bumps the generation and drops the previous frame's nodes, keeping
//! the reservation.

use crate::LayoutError;
use crate::arena::Arena;
use crate::node::Node;
use std::fmt;
use std::mem::{align_of, size_of};

/// A checked reference to a node.
///
/// Handles carry no ownership. They only resolve while the context is still
/// in the generation that issued them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    index: u32,
    generation: u64,
}

impl NodeHandle {
    /// The zero-size, render-nothing leaf. Resolves in every generation.
    pub const EMPTY: NodeHandle = NodeHandle {
        index: u32::MAX,
        generation: u64::MAX,
    };

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "NodeHandle(EMPTY)")
        } else {
            write!(f, "NodeHandle({}@{})", self.index, self.generation)
        }
    }
}

/// Bytes of arena needed to hold `max_nodes` nodes with image payload `I`,
/// including worst-case alignment padding in front of the first one.
///
/// Text content is copied into the same arena without padding, so adding the
/// expected text bytes on top is enough. See
/// [`crate::LayoutConfig::min_arena_size`].
pub fn min_arena_size<I>(max_nodes: usize) -> usize {
    max_nodes
        .saturating_mul(size_of::<Node<I>>())
        .saturating_add(align_of::<Node<I>>() - 1)
}

pub(crate) struct NodeStore<I> {
    slots: Vec<Node<I>>,
    max_nodes: usize,
    generation: u64,
    empty: Node<I>,
}

impl<I> NodeStore<I> {
    pub(crate) fn new(max_nodes: usize) -> Self {
        Self {
            slots: Vec::with_capacity(max_nodes),
            max_nodes,
            generation: 0,
            empty: Node::Empty,
        }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() >= self.max_nodes
    }

    /// Stores `node` and returns a handle stamped with the current generation.
    pub(crate) fn create(
        &mut self,
        arena: &mut Arena<'_>,
        node: Node<I>,
    ) -> Result<NodeHandle, LayoutError> {
        if self.is_full() {
            log::warn!("Node store exhausted at {} nodes", self.max_nodes);
            return Err(LayoutError::StoreExhausted(self.max_nodes));
        }
        arena.allocate(size_of::<Node<I>>(), align_of::<Node<I>>())?;

        let index = self.slots.len();
        self.slots.push(node);

        Ok(NodeHandle {
            // `max_nodes` is validated to stay below `u32::MAX`.
            index: u32::try_from(index).map_err(|_| LayoutError::StoreExhausted(self.max_nodes))?,
            generation: self.generation,
        })
    }

    pub(crate) fn resolve(&self, handle: NodeHandle) -> Result<&Node<I>, LayoutError> {
        if handle.is_empty() {
            return Ok(&self.empty);
        }
        if handle.generation != self.generation {
            return Err(LayoutError::StaleHandle {
                handle: handle.generation,
                current: self.generation,
            });
        }
        let index = handle.index as usize;
        self.slots.get(index).ok_or(LayoutError::OutOfRange {
            index,
            count: self.slots.len(),
        })
    }

    /// Node at a slot already proven live by [`NodeStore::resolve`].
    pub(crate) fn slot(&self, index: usize) -> Option<&Node<I>> {
        self.slots.get(index)
    }

    pub(crate) fn begin(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        // `EMPTY` owns the top generation value.
        if self.generation == NodeHandle::EMPTY.generation {
            self.generation = 0;
        }
        self.slots.clear();
    }

    #[cfg(test)]
    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }
}
