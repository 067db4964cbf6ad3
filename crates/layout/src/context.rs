//! The recording context and the combinator API.
//!
//! A [`Context`] owns everything one frame needs, starting with the arena
//! carved out of the caller's buffer. Each frame starts with
//! [`Context::begin`], records a tree through the combinator methods and ends
//! with a layout pass (see `engine`).

use crate::LayoutError;
use crate::arena::{Arena, Region};
use crate::config::LayoutConfig;
use crate::node::{
    AboveConfig, BesideConfig, MovePinholeConfig, Node, OverlayConfig, TextConfig,
};
use crate::node_kind::NodeKind;
use crate::output::{CommandBuffer, RenderCommands};
use crate::store::{NodeHandle, NodeStore};
use bumpalo::Bump;
use looseleaf_traits::{ImageMeasure, TextMeasure};
use looseleaf_types::Size;

/// Builder for [`Context`].
///
/// A text measurer is required; an image measurer is only needed by
/// [`Context::image_measured`].
pub struct ContextBuilder<'a, I> {
    buffer: &'a mut [u8],
    config: LayoutConfig,
    text_measure: Option<Box<dyn TextMeasure + 'a>>,
    image_measure: Option<Box<dyn ImageMeasure<I> + 'a>>,
}

impl<'a, I> ContextBuilder<'a, I> {
    pub fn config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.config.max_nodes = max_nodes;
        self
    }

    pub fn max_render_commands(mut self, max_render_commands: usize) -> Self {
        self.config.max_render_commands = max_render_commands;
        self
    }

    pub fn max_text_bytes(mut self, max_text_bytes: usize) -> Self {
        self.config.max_text_bytes = max_text_bytes;
        self
    }

    pub fn text_measure(mut self, measure: impl TextMeasure + 'a) -> Self {
        self.text_measure = Some(Box::new(measure));
        self
    }

    pub fn image_measure(mut self, measure: impl ImageMeasure<I> + 'a) -> Self {
        self.image_measure = Some(Box::new(measure));
        self
    }

    pub fn build(self) -> Result<Context<'a, I>, LayoutError> {
        self.config.validate()?;

        let required = self.config.min_arena_size::<I>();
        if self.buffer.len() < required {
            return Err(LayoutError::ArenaTooSmall {
                required,
                provided: self.buffer.len(),
            });
        }
        let text_measure = self
            .text_measure
            .ok_or(LayoutError::MissingMeasurer("text"))?;

        log::debug!(
            "Creating layout context: {} arena bytes, {} nodes, {} text bytes, {} render commands",
            self.buffer.len(),
            self.config.max_nodes,
            self.config.max_text_bytes,
            self.config.max_render_commands
        );

        Ok(Context {
            config: self.config,
            arena: Arena::new(self.buffer),
            store: NodeStore::new(self.config.max_nodes),
            commands: CommandBuffer::with_capacity(self.config.max_render_commands),
            scratch: Bump::new(),
            text_measure,
            image_measure: self.image_measure,
        })
    }
}

/// A layout recording session over a caller-supplied buffer.
///
/// `I` is the caller's image reference type: a texture id, a shared pointer,
/// or anything else the renderer understands.
pub struct Context<'a, I = ()> {
    pub(crate) config: LayoutConfig,
    pub(crate) arena: Arena<'a>,
    pub(crate) store: NodeStore<I>,
    pub(crate) commands: CommandBuffer<I>,
    /// Working memory for layout passes, reset at the start of each.
    pub(crate) scratch: Bump,
    text_measure: Box<dyn TextMeasure + 'a>,
    image_measure: Option<Box<dyn ImageMeasure<I> + 'a>>,
}

impl<'a, I> Context<'a, I> {
    pub fn builder(buffer: &'a mut [u8]) -> ContextBuilder<'a, I> {
        ContextBuilder {
            buffer,
            config: LayoutConfig::default(),
            text_measure: None,
            image_measure: None,
        }
    }

    /// Shorthand for a context without an image measurer.
    pub fn new(
        buffer: &'a mut [u8],
        config: LayoutConfig,
        text_measure: impl TextMeasure + 'a,
    ) -> Result<Self, LayoutError> {
        Self::builder(buffer)
            .config(config)
            .text_measure(text_measure)
            .build()
    }

    /// Clears the context for recording a new frame.
    ///
    /// Every handle issued before this call becomes stale and the previous
    /// frame's nodes, text and commands are dropped. Image payloads held by
    /// those nodes are released here, not when their slots are reused.
    pub fn begin(&mut self) {
        self.store.begin();
        self.arena.reset();
        self.commands.clear();
        log::debug!("Begin generation {}", self.store.generation());
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.store.generation()
    }

    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    pub fn arena_used(&self) -> usize {
        self.arena.used()
    }

    pub fn arena_capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Looks up a node, failing if the handle is stale or out of range.
    pub fn resolve(&self, handle: NodeHandle) -> Result<&Node<I>, LayoutError> {
        self.store.resolve(handle)
    }

    pub fn kind(&self, handle: NodeHandle) -> Result<NodeKind, LayoutError> {
        self.resolve(handle).map(NodeKind::of)
    }

    /// The text behind a `Node::Text` region.
    pub fn region_str(&self, region: Region) -> &str {
        self.arena.str(region)
    }

    /// Commands produced by the most recent successful layout pass.
    pub fn commands(&self) -> RenderCommands<'_, I> {
        RenderCommands::new(self.commands.as_slice(), &self.arena)
    }

    fn create(&mut self, node: Node<I>) -> Result<NodeHandle, LayoutError> {
        let kind = NodeKind::of(&node);
        let handle = self.store.create(&mut self.arena, node)?;
        log::trace!("Created {} node {:?}", kind.as_str(), handle);
        Ok(handle)
    }

    fn check_child(&self, handle: NodeHandle) -> Result<(), LayoutError> {
        self.store.resolve(handle).map(|_| ())
    }

    /// The render-nothing identity leaf. Same as [`NodeHandle::EMPTY`].
    pub fn empty(&self) -> NodeHandle {
        NodeHandle::EMPTY
    }

    /// An image leaf of a caller-supplied size.
    pub fn image(&mut self, image: I, size: Size) -> Result<NodeHandle, LayoutError> {
        self.create(Node::Image { image, size })
    }

    /// An image leaf sized by the configured image measurer.
    pub fn image_measured(&mut self, image: I) -> Result<NodeHandle, LayoutError> {
        let size = self
            .image_measure
            .as_ref()
            .ok_or(LayoutError::MissingMeasurer("image"))?
            .measure_image(&image);
        self.image(image, size)
    }

    /// A single-line text leaf. The text is copied into the arena and
    /// measured once, here.
    pub fn text(&mut self, config: TextConfig, text: &str) -> Result<NodeHandle, LayoutError> {
        if self.store.is_full() {
            log::warn!("Node store exhausted at {} nodes", self.store.max_nodes());
            return Err(LayoutError::StoreExhausted(self.store.max_nodes()));
        }

        let size = self.text_measure.measure_text(text, config.letter_spacing);
        let checkpoint = self.arena.checkpoint();
        let region = self.arena.alloc_str(text)?;
        self.create(Node::Text {
            text: region,
            config,
            size,
        })
        .inspect_err(|_| self.arena.rollback(checkpoint))
    }

    /// Stacks `top` directly above `bottom`.
    pub fn above(
        &mut self,
        config: AboveConfig,
        top: NodeHandle,
        bottom: NodeHandle,
    ) -> Result<NodeHandle, LayoutError> {
        self.check_child(top)?;
        self.check_child(bottom)?;
        self.create(Node::Above {
            config,
            top,
            bottom,
        })
    }

    /// Places `left` directly to the left of `right`.
    pub fn beside(
        &mut self,
        config: BesideConfig,
        left: NodeHandle,
        right: NodeHandle,
    ) -> Result<NodeHandle, LayoutError> {
        self.check_child(left)?;
        self.check_child(right)?;
        self.create(Node::Beside {
            config,
            left,
            right,
        })
    }

    /// Draws `over` on top of `under`.
    pub fn overlay(
        &mut self,
        config: OverlayConfig,
        over: NodeHandle,
        under: NodeHandle,
    ) -> Result<NodeHandle, LayoutError> {
        self.check_child(over)?;
        self.check_child(under)?;
        self.create(Node::Overlay {
            config,
            over,
            under,
        })
    }

    /// Moves the anchor a parent aligns `node` by. Bounds are unchanged.
    pub fn move_pinhole(
        &mut self,
        config: MovePinholeConfig,
        node: NodeHandle,
    ) -> Result<NodeHandle, LayoutError> {
        self.check_child(node)?;
        self.create(Node::MovePinhole {
            config,
            child: node,
        })
    }

    /// Puts `node`'s anchor back on its top-left corner.
    pub fn reset_pinhole(&mut self, node: NodeHandle) -> Result<NodeHandle, LayoutError> {
        self.check_child(node)?;
        self.create(Node::ResetPinhole { child: node })
    }
}

impl<I> std::fmt::Debug for Context<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("generation", &self.store.generation())
            .field("nodes", &self.store.len())
            .field("arena_used", &self.arena.used())
            .field("arena_capacity", &self.arena.capacity())
            .field("commands", &self.commands.len())
            .finish()
    }
}
