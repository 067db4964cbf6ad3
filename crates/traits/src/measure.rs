//! Measurement capabilities injected into a layout context.
//!
//! The layout core never touches fonts or image decoders. Instead a host hands
//! it one text measurer (required) and optionally one image measurer, and the
//! core calls them synchronously while nodes are being created.

use looseleaf_types::Size;

/// Measures a single line of text.
///
/// Implementations must be deterministic for a fixed font/backend state and
/// must not call back into the layout context.
///
/// # Example
///
/// ```ignore
/// let measurer = |text: &str, _spacing: i16| Size::new(8 * text.len() as u32, 16);
/// let ctx = Context::<()>::builder(&mut buffer).text_measure(measurer).build()?;
/// ```
pub trait TextMeasure {
    /// Returns the pixel extent of `text` rendered on one line.
    ///
    /// # Arguments
    ///
    /// * `text` - The line to measure. Newlines are not interpreted.
    /// * `letter_spacing` - Extra pixels between adjacent glyphs; may be negative.
    fn measure_text(&self, text: &str, letter_spacing: i16) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, i16) -> Size,
{
    fn measure_text(&self, text: &str, letter_spacing: i16) -> Size {
        self(text, letter_spacing)
    }
}

/// Measures an image reference of type `I`.
///
/// Only consulted by `image_measured`; callers that already know an image's
/// size pass it straight to `image` and never need one of these.
pub trait ImageMeasure<I> {
    fn measure_image(&self, image: &I) -> Size;
}

impl<I, F> ImageMeasure<I> for F
where
    F: Fn(&I) -> Size,
{
    fn measure_image(&self, image: &I) -> Size {
        self(image)
    }
}

/// A fixed-advance text measurer.
///
/// Every character is `advance` pixels wide and every line `line_height` tall,
/// with `letter_spacing` added between each pair of characters. Useful for
/// terminal-like backends, demos and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasure {
    pub advance: u32,
    pub line_height: u32,
}

impl MonospaceMeasure {
    pub const fn new(advance: u32, line_height: u32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_text(&self, text: &str, letter_spacing: i16) -> Size {
        let chars = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
        let gaps = (chars - 1).max(0);
        let width = chars
            .saturating_mul(i64::from(self.advance))
            .saturating_add(gaps.saturating_mul(i64::from(letter_spacing)))
            .max(0);
        Size::new(u32::try_from(width).unwrap_or(u32::MAX), self.line_height)
    }
}
