//! The two-pass layout algorithm.
//!
//! 1. Sizing walks the nodes reachable from the root and computes their
//!    `Metrics`. Every node is measured once, however many parents share it.
//! 2. Placement walks the tree top-down in pre-order (first child before
//!    second) and appends one command per leaf.
//!
//! Both passes are iterative: children always have lower indices than their
//! parents, so a single ascending sweep sizes everything and an explicit
//! stack handles placement. Working sets live in the context's bump scratch.

use crate::LayoutError;
use crate::context::Context;
use crate::node::{AboveConfig, BesideConfig, Node, OverlayConfig};
use crate::output::{CommandBuffer, Payload, RenderCommands, StoredCommand};
use crate::store::{NodeHandle, NodeStore};
use bumpalo::Bump;
use bumpalo::collections::Vec as BumpVec;
use looseleaf_types::{Bounds, Size, Vec2};

/// What a parent needs to know about a child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Metrics {
    size: Size,
    /// Anchor relative to the node's top-left corner.
    pinhole: Vec2,
    /// Commands this subtree emits, counting shared subtrees once per use.
    leaves: usize,
}

impl<'a, I: Clone> Context<'a, I> {
    /// Lays out the tree under `root` with its top-left corner at the origin.
    pub fn layout(&mut self, root: NodeHandle) -> Result<RenderCommands<'_, I>, LayoutError> {
        self.layout_at(root, Vec2::ZERO)
    }

    /// Lays out the tree under `root` with its top-left corner at `origin`.
    ///
    /// On error the command buffer is left empty; no partial output is ever
    /// visible.
    pub fn layout_at(
        &mut self,
        root: NodeHandle,
        origin: Vec2,
    ) -> Result<RenderCommands<'_, I>, LayoutError> {
        self.commands.clear();
        self.scratch.reset();

        let result = run_pass(
            &self.store,
            &self.scratch,
            &mut self.commands,
            root,
            origin,
        );
        if let Err(err) = &result {
            log::warn!("Layout of {:?} failed: {}", root, err);
            self.commands.clear();
        }
        result?;

        log::debug!(
            "Laid out {:?} at ({}, {}): {} commands",
            root,
            origin.x,
            origin.y,
            self.commands.len()
        );
        Ok(RenderCommands::new(self.commands.as_slice(), &self.arena))
    }

    /// Natural size of the tree under `root`, without placing anything.
    pub fn natural_size(&mut self, root: NodeHandle) -> Result<Size, LayoutError> {
        self.scratch.reset();
        let table = measure(&self.store, &self.scratch, root)?;
        Ok(table.get(root).size)
    }
}

fn run_pass<I: Clone>(
    store: &NodeStore<I>,
    scratch: &Bump,
    commands: &mut CommandBuffer<I>,
    root: NodeHandle,
    origin: Vec2,
) -> Result<(), LayoutError> {
    let table = measure(store, scratch, root)?;

    let leaves = table.get(root).leaves;
    if leaves > commands.capacity() {
        log::warn!(
            "Tree under {:?} has {} leaves but only {} render commands fit",
            root,
            leaves,
            commands.capacity()
        );
        return Err(LayoutError::CommandBufferExhausted(commands.capacity()));
    }

    place(store, scratch, &table, commands, root, origin)
}

/// Memoized metrics for every node reachable from one root.
struct SizeTable<'s> {
    metrics: BumpVec<'s, Option<Metrics>>,
}

impl SizeTable<'_> {
    fn get(&self, handle: NodeHandle) -> Metrics {
        self.lookup(handle).unwrap_or_default()
    }

    fn lookup(&self, handle: NodeHandle) -> Option<Metrics> {
        if handle.is_empty() {
            return Some(Metrics::default());
        }
        self.metrics.get(handle.index() as usize).copied().flatten()
    }

    fn require(&self, handle: NodeHandle) -> Result<Metrics, LayoutError> {
        self.lookup(handle).ok_or(LayoutError::OutOfRange {
            index: handle.index() as usize,
            count: self.metrics.len(),
        })
    }
}

fn measure<'s, I>(
    store: &NodeStore<I>,
    scratch: &'s Bump,
    root: NodeHandle,
) -> Result<SizeTable<'s>, LayoutError> {
    store.resolve(root)?;
    let span = if root.is_empty() {
        0
    } else {
        root.index() as usize + 1
    };

    // Top-down: find and validate everything reachable.
    let mut reachable = BumpVec::with_capacity_in(span, scratch);
    reachable.resize(span, false);
    let mut stack = BumpVec::new_in(scratch);
    stack.push(root);
    while let Some(handle) = stack.pop() {
        let node = store.resolve(handle)?;
        if handle.is_empty() {
            continue;
        }
        let seen = reachable
            .get_mut(handle.index() as usize)
            .ok_or(LayoutError::OutOfRange {
                index: handle.index() as usize,
                count: span,
            })?;
        if *seen {
            continue;
        }
        *seen = true;
        let (first, second) = node.children();
        stack.extend(first);
        stack.extend(second);
    }

    // Bottom-up: children sit at lower indices, so one ascending sweep works.
    let mut table = SizeTable {
        metrics: BumpVec::with_capacity_in(span, scratch),
    };
    table.metrics.resize(span, None);
    for index in 0..span {
        if !reachable[index] {
            continue;
        }
        let node = store.slot(index).ok_or(LayoutError::OutOfRange {
            index,
            count: store.len(),
        })?;
        let metrics = node_metrics(node, &table)?;
        table.metrics[index] = Some(metrics);
    }
    Ok(table)
}

fn node_metrics<I>(node: &Node<I>, table: &SizeTable<'_>) -> Result<Metrics, LayoutError> {
    let leaf = |size: Size| Metrics {
        size,
        pinhole: Vec2::ZERO,
        leaves: 1,
    };
    let pair = |a: Metrics, b: Metrics, size: Size| Metrics {
        size,
        pinhole: Vec2::ZERO,
        leaves: a.leaves.saturating_add(b.leaves),
    };

    let metrics = match node {
        Node::Empty => Metrics {
            size: Size::zero(),
            pinhole: Vec2::ZERO,
            leaves: 0,
        },
        Node::Image { size, .. } | Node::Text { size, .. } => leaf(*size),
        Node::Above { top, bottom, .. } => {
            let (a, b) = (table.require(*top)?, table.require(*bottom)?);
            pair(a, b, above_size(a.size, b.size))
        }
        Node::Beside { left, right, .. } => {
            let (a, b) = (table.require(*left)?, table.require(*right)?);
            pair(a, b, beside_size(a.size, b.size))
        }
        Node::Overlay { over, under, .. } => {
            let (a, b) = (table.require(*over)?, table.require(*under)?);
            pair(a, b, a.size.union(b.size))
        }
        Node::MovePinhole { config, child } => {
            let inner = table.require(*child)?;
            Metrics {
                pinhole: inner.pinhole + config.offset,
                ..inner
            }
        }
        Node::ResetPinhole { child } => Metrics {
            pinhole: Vec2::ZERO,
            ..table.require(*child)?
        },
    };
    Ok(metrics)
}

fn above_size(top: Size, bottom: Size) -> Size {
    Size::new(
        top.width.max(bottom.width),
        top.height.saturating_add(bottom.height),
    )
}

fn beside_size(left: Size, right: Size) -> Size {
    Size::new(
        left.width.saturating_add(right.width),
        left.height.max(right.height),
    )
}

/// Offsets of `top` and `bottom` relative to the parent's top-left corner.
///
/// The narrower child gets the configured offset; on a tie it goes to `bottom`.
fn arrange_above(config: &AboveConfig, top: Size, bottom: Size) -> (Vec2, Vec2) {
    let width = top.width.max(bottom.width);
    let mut top_at = Vec2::from_extents(config.align_h.offset(width, top.width), 0);
    let mut bottom_at =
        Vec2::from_extents(config.align_h.offset(width, bottom.width), top.height);
    if top.width < bottom.width {
        top_at = top_at + config.offset;
    } else {
        bottom_at = bottom_at + config.offset;
    }
    (top_at, bottom_at)
}

/// Offsets of `left` and `right`. The shorter child gets the configured
/// offset; on a tie it goes to `right`.
fn arrange_beside(config: &BesideConfig, left: Size, right: Size) -> (Vec2, Vec2) {
    let height = left.height.max(right.height);
    let mut left_at = Vec2::from_extents(0, config.align_v.offset(height, left.height));
    let mut right_at =
        Vec2::from_extents(left.width, config.align_v.offset(height, right.height));
    if left.height < right.height {
        left_at = left_at + config.offset;
    } else {
        right_at = right_at + config.offset;
    }
    (left_at, right_at)
}

/// Offsets of `over` and `under`. `under` stays at the origin.
fn arrange_overlay(config: &OverlayConfig, over: Size, under: Size) -> (Vec2, Vec2) {
    let combined = over.union(under);
    let over_at = Vec2::from_extents(
        config.align_h.offset(combined.width, over.width),
        config.align_v.offset(combined.height, over.height),
    ) + config.offset;
    (over_at, Vec2::ZERO)
}

fn place<I: Clone>(
    store: &NodeStore<I>,
    scratch: &Bump,
    table: &SizeTable<'_>,
    commands: &mut CommandBuffer<I>,
    root: NodeHandle,
    origin: Vec2,
) -> Result<(), LayoutError> {
    let mut stack = BumpVec::new_in(scratch);
    stack.push((root, origin));

    while let Some((handle, position)) = stack.pop() {
        let node = store.resolve(handle)?;
        let emit = |payload: Payload<I>, size: Size| StoredCommand {
            bounds: Bounds::from_parts(position, size),
            payload,
        };

        let children = match node {
            Node::Empty => None,
            Node::Image { image, size } => {
                commands.append(emit(Payload::Image(image.clone()), *size))?;
                None
            }
            Node::Text { text, size, .. } => {
                commands.append(emit(Payload::Text(*text), *size))?;
                None
            }
            Node::Above {
                config,
                top,
                bottom,
            } => {
                let (a, b) = (table.require(*top)?, table.require(*bottom)?);
                let (a_at, b_at) = arrange_above(config, a.size, b.size);
                Some(((*top, a, a_at), (*bottom, b, b_at)))
            }
            Node::Beside {
                config,
                left,
                right,
            } => {
                let (a, b) = (table.require(*left)?, table.require(*right)?);
                let (a_at, b_at) = arrange_beside(config, a.size, b.size);
                Some(((*left, a, a_at), (*right, b, b_at)))
            }
            Node::Overlay {
                config,
                over,
                under,
            } => {
                let (a, b) = (table.require(*over)?, table.require(*under)?);
                let (a_at, b_at) = arrange_overlay(config, a.size, b.size);
                Some(((*over, a, a_at), (*under, b, b_at)))
            }
            // Pinhole nodes occupy exactly their child's bounds.
            Node::MovePinhole { child, .. } | Node::ResetPinhole { child } => {
                stack.push((*child, position));
                None
            }
        };

        if let Some(((first, a, a_at), (second, b, b_at))) = children {
            // Pushed in reverse so the first child is placed first.
            stack.push((second, position + b_at - b.pinhole));
            stack.push((first, position + a_at - a.pinhole));
        }
    }
    Ok(())
}
