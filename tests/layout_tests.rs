mod common;

use common::*;
use looseleaf::{
    AboveConfig, BesideConfig, Bounds, HorizAlign, LayoutConfig, LayoutError, MovePinholeConfig,
    NodeHandle, OverlayConfig, RenderTag, Size, TextConfig, Vec2, VertAlign,
};

#[test]
fn test_confirmation_dialog() -> TestResult {
    let config = LayoutConfig::new(16, 16);
    let mut buffer = buffer_for(&config, 64);
    let mut ctx = sprite_context(&mut buffer, config)?;

    let title = ctx.text(TextConfig::default(), "Save?")?;
    let ok = ctx.image_measured("ok")?;
    let cancel = ctx.image_measured("cancel")?;
    let buttons = ctx.beside(
        BesideConfig {
            align_v: VertAlign::Center,
            ..Default::default()
        },
        ok,
        cancel,
    )?;
    let dialog = ctx.above(
        AboveConfig {
            align_h: HorizAlign::Center,
            ..Default::default()
        },
        title,
        buttons,
    )?;

    assert_eq!(ctx.natural_size(buttons)?, Size::new(8, 6));
    assert_eq!(ctx.natural_size(dialog)?, Size::new(25, 14));
    assert_eq!(
        labelled(ctx.layout_at(dialog, Vec2::new(10, 10))?),
        vec![
            ("Save?".to_string(), Bounds::new(10, 10, 25, 8)),
            ("ok".to_string(), Bounds::new(18, 20, 2, 2)),
            ("cancel".to_string(), Bounds::new(20, 18, 6, 6)),
        ]
    );
    Ok(())
}

#[test]
fn test_pinhole_nudges_a_badge_out_of_its_corner() -> TestResult {
    let config = LayoutConfig::new(16, 16);
    let mut buffer = buffer_for(&config, 0);
    let mut ctx = sprite_context(&mut buffer, config)?;

    let card = ctx.image("card", Size::new(10, 10))?;
    let dot = ctx.image_measured("dot")?;
    let nudged = ctx.move_pinhole(
        MovePinholeConfig {
            offset: Vec2::new(1, 1),
        },
        dot,
    )?;
    let root = ctx.overlay(
        OverlayConfig {
            align_h: HorizAlign::Right,
            ..Default::default()
        },
        nudged,
        card,
    )?;

    // The pinhole shifts the badge without growing the combined box.
    assert_eq!(ctx.natural_size(root)?, Size::new(10, 10));
    let commands = ctx.layout(root)?;
    assert_eq!(commands.len(), 2);
    assert_eq!(commands.get(0).map(|c| c.bounds), Some(Bounds::new(6, -1, 3, 3)));
    assert_eq!(commands.get(1).map(|c| c.tag()), Some(RenderTag::Image));
    Ok(())
}

#[test]
fn test_handles_do_not_survive_begin() -> TestResult {
    let config = LayoutConfig::new(4, 4);
    let mut buffer = buffer_for(&config, 32);
    let mut ctx = sprite_context(&mut buffer, config)?;

    let old = ctx.text(TextConfig::default(), "old")?;
    ctx.begin();
    let fresh = ctx.text(TextConfig::default(), "new")?;
    assert_eq!(old.index(), fresh.index());

    assert!(matches!(
        ctx.above(AboveConfig::default(), fresh, old),
        Err(LayoutError::StaleHandle { .. })
    ));
    assert!(matches!(
        ctx.layout(old),
        Err(LayoutError::StaleHandle { .. })
    ));
    assert_eq!(labelled(ctx.layout(fresh)?), vec![(
        "new".to_string(),
        Bounds::new(0, 0, 15, 8)
    )]);
    Ok(())
}

#[test]
fn test_empty_handle_is_valid_in_every_frame() -> TestResult {
    let config = LayoutConfig::new(4, 4);
    let mut buffer = buffer_for(&config, 0);
    let mut ctx = sprite_context(&mut buffer, config)?;

    for _ in 0..3 {
        ctx.begin();
        assert_eq!(ctx.empty(), NodeHandle::EMPTY);
        let only = ctx.image("x", Size::new(2, 3))?;
        let root = ctx.beside(BesideConfig::default(), NodeHandle::EMPTY, only)?;
        assert_eq!(ctx.natural_size(root)?, Size::new(2, 3));
        assert!(ctx.layout(NodeHandle::EMPTY)?.is_empty());
    }
    Ok(())
}

#[test]
fn test_capacity_errors_name_the_limit() -> TestResult {
    let config = LayoutConfig::new(8, 2);
    let mut buffer = buffer_for(&config, 0);
    let mut ctx = sprite_context(&mut buffer, config)?;

    let a = ctx.image("a", Size::new(1, 1))?;
    let row = ctx.beside(BesideConfig::default(), a, a)?;
    let rows = ctx.above(AboveConfig::default(), row, a)?;

    let err = ctx.layout(rows).unwrap_err();
    assert_eq!(err, LayoutError::CommandBufferExhausted(2));
    assert_eq!(
        err.to_string(),
        "Render command buffer exhausted: capacity is 2 commands."
    );
    assert!(ctx.commands().is_empty());

    assert_eq!(ctx.layout(row)?.len(), 2);
    Ok(())
}
