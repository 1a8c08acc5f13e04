use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tether::{BatchLayout, BoxTree, distribute_horizontally, equal_widths};

fn builder_chain(c: &mut Criterion) {
    c.bench_function("builder_chain_activate", |b| {
        b.iter(|| {
            let tree = BoxTree::new();
            let root = tree.create_box("root");
            let panel = tree.create_box("panel");
            let layout = panel
                .layout_in(&root)
                .top(8)
                .leading(8)
                .trailing(8)
                .height(120)
                .activate();
            black_box(layout.connections().len())
        });
    });
}

fn distribute_row(c: &mut Criterion) {
    c.bench_function("distribute_horizontally_16", |b| {
        b.iter(|| {
            let tree = BoxTree::new();
            let container = tree.create_box("container");
            let items: Vec<_> = (0..16)
                .map(|i| tree.create_box(format!("item{i}")))
                .collect();
            let layouts = distribute_horizontally(&container, &items, 8.0, 4.0).activate_all();
            black_box(layouts.len())
        });
    });
}

fn equal_width_group(c: &mut Criterion) {
    c.bench_function("equal_widths_12", |b| {
        b.iter(|| {
            let tree = BoxTree::new();
            let items: Vec<_> = (0..12)
                .map(|i| tree.create_box(format!("col{i}")))
                .collect();
            let layouts = equal_widths(&items).activate_all();
            black_box(layouts.len())
        });
    });
}

criterion_group!(benches, builder_chain, distribute_row, equal_width_group);
criterion_main!(benches);
