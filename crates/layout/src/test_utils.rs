use crate::{Bounds, Context, LayoutConfig, RenderCommands, RenderTag, Size, TextConfig};

/// Image references used throughout the tests.
pub type TestImage = &'static str;

/// Measures every character as 5x8 regardless of spacing.
pub fn five_by_eight(text: &str, _letter_spacing: i16) -> Size {
    Size::new(5 * text.chars().count() as u32, 8)
}

/// A buffer sized for `config` plus some room for text bytes.
pub fn arena_for(config: LayoutConfig) -> Vec<u8> {
    vec![0u8; config.min_arena_size::<TestImage>() + 256]
}

/// Creates a context over `buffer` with the 5x8 text measurer, ready to record.
pub fn create_test_context(buffer: &mut [u8], config: LayoutConfig) -> Context<'_, TestImage> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ctx = Context::builder(buffer)
        .config(config)
        .text_measure(five_by_eight)
        .image_measure(|image: &TestImage| Size::new(image.len() as u32, 1))
        .build()
        .expect("test context should build");
    ctx.begin();
    ctx
}

pub fn default_text() -> TextConfig {
    TextConfig::default()
}

pub fn collect_bounds<I>(commands: RenderCommands<'_, I>) -> Vec<Bounds> {
    commands.iter().map(|c| c.bounds).collect()
}

/// `(tag, bounds, label)` triples where label is the text or image reference.
pub fn describe(commands: RenderCommands<'_, TestImage>) -> Vec<(RenderTag, Bounds, String)> {
    commands
        .iter()
        .map(|c| {
            let label = match (c.text(), c.image()) {
                (Some(text), _) => text.to_string(),
                (_, Some(image)) => image.to_string(),
                _ => String::new(),
            };
            (c.tag(), c.bounds, label)
        })
        .collect()
}
