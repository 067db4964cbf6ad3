use looseleaf::{
    BesideConfig, Context, HorizAlign, LayoutConfig, LayoutError, MonospaceMeasure,
    OverlayConfig, RenderData, Size, TextConfig, VertAlign,
};
use std::env;

/// Stand-in for a renderer's texture handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Texture(u32);

fn main() -> Result<(), LayoutError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "looseleaf=info");
        }
    }
    env_logger::init();

    let config = LayoutConfig::default();
    let mut buffer = vec![0u8; config.min_arena_size::<Texture>() + 4096];
    let mut ctx: Context<'_, Texture> = Context::builder(&mut buffer)
        .config(config)
        .text_measure(MonospaceMeasure::new(5, 8))
        .image_measure(|_: &Texture| Size::new(1, 1))
        .build()?;

    ctx.begin();
    let im = ctx.image_measured(Texture(0))?;
    let label = ctx.text(TextConfig { letter_spacing: 3 }, "hello world")?;
    let icons = ctx.beside(
        BesideConfig {
            align_v: VertAlign::Center,
            ..Default::default()
        },
        im,
        im,
    )?;
    let root = ctx.overlay(
        OverlayConfig {
            align_h: HorizAlign::Left,
            ..Default::default()
        },
        label,
        icons,
    )?;

    let size = ctx.natural_size(root)?;
    println!("Root size: {}x{}", size.width, size.height);

    let commands = ctx.layout(root)?;
    log::info!("Laid out {} render commands", commands.len());
    for (i, command) in commands.iter().enumerate() {
        let b = command.bounds;
        match command.data {
            RenderData::Text(text) => println!(
                "{i}: text  at ({}, {}) {}x{} {:?}",
                b.x(),
                b.y(),
                b.width(),
                b.height(),
                text
            ),
            RenderData::Image(texture) => println!(
                "{i}: image at ({}, {}) {}x{} {:?}",
                b.x(),
                b.y(),
                b.width(),
                b.height(),
                texture
            ),
        }
    }
    Ok(())
}
