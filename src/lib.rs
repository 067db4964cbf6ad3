//! Looseleaf: an immediate-mode, arena-backed layout library.
//!
//! Each frame the caller rebuilds a tree of layout nodes inside a
//! [`Context`] from leaves (images, text) and combinators (above, beside,
//! overlay, pinhole adjustments), then asks the context to lay a root out
//! into a flat list of [`RenderCommand`]s.
//!
//! ```
//! use looseleaf::{BesideConfig, Context, LayoutConfig, MonospaceMeasure, Size, TextConfig};
//!
//! let config = LayoutConfig::new(16, 16);
//! let mut buffer = vec![0u8; config.min_arena_size::<u32>() + 64];
//! let mut ctx: Context<'_, u32> =
//!     Context::new(&mut buffer, config, MonospaceMeasure::new(5, 8)).unwrap();
//!
//! ctx.begin();
//! let icon = ctx.image(7, Size::new(8, 8)).unwrap();
//! let label = ctx.text(TextConfig::default(), "Save").unwrap();
//! let row = ctx.beside(BesideConfig::default(), icon, label).unwrap();
//!
//! let commands = ctx.layout(row).unwrap();
//! assert_eq!(commands.len(), 2);
//! assert_eq!(commands.get(1).unwrap().text(), Some("Save"));
//! ```

pub use looseleaf_layout::{
    AboveConfig, Arena, BesideConfig, Context, ContextBuilder, Iter, LayoutConfig, LayoutError,
    MovePinholeConfig, Node, NodeHandle, NodeKind, OverlayConfig, Region, RenderCommand,
    RenderCommands, RenderData, RenderTag, TextConfig, min_arena_size,
};
pub use looseleaf_traits::{ImageMeasure, MonospaceMeasure, TextMeasure};
pub use looseleaf_types::{Bounds, HorizAlign, Size, Vec2, VertAlign};

pub use looseleaf_layout as layout;
pub use looseleaf_traits as traits;
pub use looseleaf_types as types;
