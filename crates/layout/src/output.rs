//! Output types from the layout engine.
//!
//! A layout pass fills a [`CommandBuffer`] with one entry per rendered leaf.
//! Callers read it back through [`RenderCommands`], which resolves text
//! payloads against the arena they were copied into.

use crate::LayoutError;
use crate::arena::{Arena, Region};
use looseleaf_types::Bounds;
use std::slice;

/// What kind of leaf produced a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTag {
    Image,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Payload<I> {
    Image(I),
    Text(Region),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StoredCommand<I> {
    pub bounds: Bounds,
    pub payload: Payload<I>,
}

/// Fixed-capacity storage for the commands of one layout pass.
#[derive(Debug)]
pub(crate) struct CommandBuffer<I> {
    commands: Vec<StoredCommand<I>>,
    capacity: usize,
}

impl<I> CommandBuffer<I> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn append(&mut self, command: StoredCommand<I>) -> Result<(), LayoutError> {
        if self.commands.len() >= self.capacity {
            log::warn!("Render command buffer full at {} commands", self.capacity);
            return Err(LayoutError::CommandBufferExhausted(self.capacity));
        }
        log::trace!("Command {} at {:?}", self.commands.len(), command.bounds);
        self.commands.push(command);
        Ok(())
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn len(&self) -> usize {
        self.commands.len()
    }

    pub(crate) fn clear(&mut self) {
        self.commands.clear();
    }

    pub(crate) fn as_slice(&self) -> &[StoredCommand<I>] {
        &self.commands
    }
}

/// The content a backend should draw inside a command's bounds.
#[derive(Debug, PartialEq)]
pub enum RenderData<'r, I> {
    Image(&'r I),
    Text(&'r str),
}

impl<I> Clone for RenderData<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for RenderData<'_, I> {}

/// A leaf resolved to absolute bounds.
#[derive(Debug, PartialEq)]
pub struct RenderCommand<'r, I> {
    pub bounds: Bounds,
    pub data: RenderData<'r, I>,
}

impl<I> Clone for RenderCommand<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for RenderCommand<'_, I> {}

impl<'r, I> RenderCommand<'r, I> {
    pub fn tag(&self) -> RenderTag {
        match self.data {
            RenderData::Image(_) => RenderTag::Image,
            RenderData::Text(_) => RenderTag::Text,
        }
    }

    pub fn text(&self) -> Option<&'r str> {
        match self.data {
            RenderData::Text(text) => Some(text),
            RenderData::Image(_) => None,
        }
    }

    pub fn image(&self) -> Option<&'r I> {
        match self.data {
            RenderData::Image(image) => Some(image),
            RenderData::Text(_) => None,
        }
    }
}

/// Read-only view over the commands of the last layout pass, in traversal
/// order.
pub struct RenderCommands<'r, I> {
    commands: &'r [StoredCommand<I>],
    arena: &'r Arena<'r>,
}

impl<I> Clone for RenderCommands<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for RenderCommands<'_, I> {}

impl<'r, I> RenderCommands<'r, I> {
    pub(crate) fn new(commands: &'r [StoredCommand<I>], arena: &'r Arena<'r>) -> Self {
        Self { commands, arena }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<RenderCommand<'r, I>> {
        self.commands
            .get(index)
            .map(|command| resolve(command, self.arena))
    }

    pub fn iter(&self) -> Iter<'r, I> {
        Iter {
            inner: self.commands.iter(),
            arena: self.arena,
        }
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for RenderCommands<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'r, I> IntoIterator for RenderCommands<'r, I> {
    type Item = RenderCommand<'r, I>;
    type IntoIter = Iter<'r, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'r, I> {
    inner: slice::Iter<'r, StoredCommand<I>>,
    arena: &'r Arena<'r>,
}

impl<'r, I> Iterator for Iter<'r, I> {
    type Item = RenderCommand<'r, I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|command| resolve(command, self.arena))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for Iter<'_, I> {}

fn resolve<'r, I>(command: &'r StoredCommand<I>, arena: &'r Arena<'r>) -> RenderCommand<'r, I> {
    let data = match &command.payload {
        Payload::Image(image) => RenderData::Image(image),
        Payload::Text(region) => RenderData::Text(arena.str(*region)),
    };
    RenderCommand {
        bounds: command.bounds,
        data,
    }
}
