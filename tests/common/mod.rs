use looseleaf::{Bounds, Context, LayoutConfig, RenderCommands, Size};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Images in the integration tests are referenced by name.
pub type Sprite = &'static str;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Allocates a buffer large enough for `config` plus `text_bytes` of text.
pub fn buffer_for(config: &LayoutConfig, text_bytes: usize) -> Vec<u8> {
    vec![0u8; config.min_arena_size::<Sprite>() + text_bytes]
}

/// Builds a context with 5x8 glyphs and sprites measured as `len x len`.
pub fn sprite_context<'a>(
    buffer: &'a mut [u8],
    config: LayoutConfig,
) -> Result<Context<'a, Sprite>, looseleaf::LayoutError> {
    init_logger();
    let mut ctx = Context::builder(buffer)
        .config(config)
        .text_measure(|text: &str, _spacing: i16| Size::new(5 * text.chars().count() as u32, 8))
        .image_measure(|sprite: &Sprite| {
            let side = sprite.len() as u32;
            Size::new(side, side)
        })
        .build()?;
    ctx.begin();
    Ok(ctx)
}

/// `(label, bounds)` pairs, where the label is the text or the sprite name.
pub fn labelled(commands: RenderCommands<'_, Sprite>) -> Vec<(String, Bounds)> {
    commands
        .iter()
        .map(|c| {
            let label = c
                .text()
                .map(str::to_string)
                .or_else(|| c.image().map(|s| s.to_string()))
                .unwrap_or_default();
            (label, c.bounds)
        })
        .collect()
}
