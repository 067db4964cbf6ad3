//! Layout engine micro-benchmarks
//!
//! Measures tree construction plus layout for wide, deep and shared trees.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use looseleaf::{
    AboveConfig, BesideConfig, Context, HorizAlign, LayoutConfig, MonospaceMeasure, NodeHandle,
    Size, TextConfig, VertAlign,
};
use std::hint::black_box;

fn context_for(buffer: &mut [u8], config: LayoutConfig) -> Context<'_, u32> {
    Context::new(buffer, config, MonospaceMeasure::new(7, 12)).expect("Failed to build context")
}

/// A grid of `rows` rows, each an icon beside a label.
fn build_list(ctx: &mut Context<'_, u32>, rows: u32) -> NodeHandle {
    let mut list = NodeHandle::EMPTY;
    for i in 0..rows {
        let icon = ctx.image(i, Size::new(16, 16)).expect("Failed to add icon");
        let label = ctx
            .text(TextConfig::default(), "list entry")
            .expect("Failed to add label");
        let row = ctx
            .beside(
                BesideConfig {
                    align_v: VertAlign::Center,
                    ..Default::default()
                },
                icon,
                label,
            )
            .expect("Failed to add row");
        list = ctx
            .above(
                AboveConfig {
                    align_h: HorizAlign::Left,
                    ..Default::default()
                },
                list,
                row,
            )
            .expect("Failed to add row to list");
    }
    list
}

fn benchmark_layout_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_list");

    for rows in [10u32, 100, 1000] {
        let config = LayoutConfig::new(rows as usize * 4, rows as usize * 2);
        let mut buffer = vec![0u8; config.min_arena_size::<u32>() + rows as usize * 32];
        let mut ctx = context_for(&mut buffer, config);

        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, &rows| {
            b.iter(|| {
                ctx.begin();
                let root = build_list(&mut ctx, rows);
                let commands = ctx.layout(root).expect("Failed to lay out list");
                black_box(commands.len())
            });
        });
    }

    group.finish();
}

fn benchmark_layout_shared_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_shared_tree");

    // Each level doubles the leaf count while adding a single node.
    for depth in [4u32, 8, 12] {
        let config = LayoutConfig::new(depth as usize + 1, 1 << depth);
        let mut buffer = vec![0u8; config.min_arena_size::<u32>()];
        let mut ctx = context_for(&mut buffer, config);

        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            b.iter(|| {
                ctx.begin();
                let mut node = ctx.image(0, Size::new(1, 1)).expect("Failed to add leaf");
                for level in 0..depth {
                    node = if level % 2 == 0 {
                        ctx.beside(BesideConfig::default(), node, node)
                    } else {
                        ctx.above(AboveConfig::default(), node, node)
                    }
                    .expect("Failed to add level");
                }
                let commands = ctx.layout(node).expect("Failed to lay out tree");
                black_box(commands.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_layout_list,
    benchmark_layout_shared_tree
);
criterion_main!(benches);
