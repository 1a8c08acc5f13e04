use crate::builder::LayoutBuilder;
use crate::geometry::Insets;
use crate::tree::BoxRef;

/// Stacks `items` top-to-bottom inside `container`.
///
/// Each item is inserted as a child of `container` and gets one builder:
/// leading/trailing pinned to the container plus margin, the first item
/// pinned to the top, each next item `spacing` below its predecessor, and
/// the last item pinned to the bottom. Builders come back unactivated so
/// the caller applies the whole batch at once.
///
/// An empty sequence or a released container yields an empty result.
pub fn distribute_vertically(
    container: &BoxRef,
    items: &[BoxRef],
    spacing: f32,
    margins: impl Into<Insets>,
) -> Vec<LayoutBuilder> {
    let margins = margins.into();
    if items.is_empty() || !container.is_alive() {
        return Vec::new();
    }

    let last = items.len() - 1;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut builder = item
                .layout_in(container)
                .leading(margins.left)
                .trailing(margins.right);
            builder = if index == 0 {
                builder.top(margins.top)
            } else {
                builder.below(spacing, &items[index - 1])
            };
            if index == last {
                builder = builder.bottom(margins.bottom);
            }
            builder
        })
        .collect()
}

/// Stacks `items` leading-to-trailing inside `container`.
///
/// The horizontal counterpart of [`distribute_vertically`]: top/bottom are
/// the cross-axis pins, the main axis runs leading → trailing.
pub fn distribute_horizontally(
    container: &BoxRef,
    items: &[BoxRef],
    spacing: f32,
    margins: impl Into<Insets>,
) -> Vec<LayoutBuilder> {
    let margins = margins.into();
    if items.is_empty() || !container.is_alive() {
        return Vec::new();
    }

    let last = items.len() - 1;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut builder = item
                .layout_in(container)
                .top(margins.top)
                .bottom(margins.bottom);
            builder = if index == 0 {
                builder.leading(margins.left)
            } else {
                builder.after(spacing, &items[index - 1])
            };
            if index == last {
                builder = builder.trailing(margins.right);
            }
            builder
        })
        .collect()
}

/// Constrains the widths of all given boxes to be equal.
///
/// Produces one builder per ordered pair of distinct boxes — n·(n−1) for n
/// boxes. Deliberately quadratic instead of chaining everything to a
/// single reference box: no box is privileged, so any subset can be
/// deactivated symmetrically. Large groups pay for that in host
/// constraint count.
pub fn equal_widths(items: &[BoxRef]) -> Vec<LayoutBuilder> {
    ordered_pairs(items)
        .map(|(subject, target)| subject.layout().width_to(target))
        .collect()
}

/// Constrains the heights of all given boxes to be equal.
///
/// Same all-pairs shape as [`equal_widths`].
pub fn equal_heights(items: &[BoxRef]) -> Vec<LayoutBuilder> {
    ordered_pairs(items)
        .map(|(subject, target)| subject.layout().height_to(target))
        .collect()
}

fn ordered_pairs(items: &[BoxRef]) -> impl Iterator<Item = (&BoxRef, &BoxRef)> {
    items.iter().flat_map(move |subject| {
        items
            .iter()
            .filter(move |target| *target != subject)
            .map(move |target| (subject, target))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{AnchorKind, AnchorProviding};
    use crate::builder::BatchLayout;
    use crate::tree::BoxTree;

    fn three_items(tree: &BoxTree) -> (BoxRef, Vec<BoxRef>) {
        let container = tree.create_box("container");
        let items = vec![
            tree.create_box("a"),
            tree.create_box("b"),
            tree.create_box("c"),
        ];
        (container, items)
    }

    #[test]
    fn horizontal_distribution_chains_leading_to_trailing() {
        let tree = BoxTree::new();
        let (container, items) = three_items(&tree);

        let layouts = distribute_horizontally(&container, &items, 8.0, 0.0);
        assert_eq!(layouts.len(), 3);

        // First item: pinned to the container's leading edge.
        let first_leading = &layouts[0].find_all(AnchorKind::Leading)[0];
        assert_eq!(
            first_leading.target(),
            Some(container.leading_anchor().anchor())
        );
        assert_eq!(first_leading.constant(), 0.0);

        // Middle items: spaced after their predecessor.
        let second_leading = &layouts[1].find_all(AnchorKind::Leading)[0];
        assert_eq!(
            second_leading.target(),
            Some(items[0].trailing_anchor().anchor())
        );
        assert_eq!(second_leading.constant(), 8.0);

        let third_leading = &layouts[2].find_all(AnchorKind::Leading)[0];
        assert_eq!(
            third_leading.target(),
            Some(items[1].trailing_anchor().anchor())
        );

        // Last item additionally pinned to the container's trailing edge.
        let third_trailing = &layouts[2].find_all(AnchorKind::Trailing)[0];
        assert_eq!(
            third_trailing.target(),
            Some(container.trailing_anchor().anchor())
        );
        assert!(layouts[0].find_all(AnchorKind::Trailing).is_empty());
        assert!(layouts[1].find_all(AnchorKind::Trailing).is_empty());

        // Every item shares the cross-axis pins.
        for layout in &layouts {
            assert_eq!(layout.find_all(AnchorKind::Top)[0].constant(), 0.0);
            assert_eq!(layout.find_all(AnchorKind::Bottom)[0].constant(), 0.0);
        }

        let _ = layouts.activate_all();
    }

    #[test]
    fn vertical_distribution_uses_leading_trailing_as_cross_axis() {
        let tree = BoxTree::new();
        let (container, items) = three_items(&tree);

        let layouts = distribute_vertically(&container, &items, 4.0, 2.0);
        assert_eq!(layouts.len(), 3);

        let first_top = &layouts[0].find_all(AnchorKind::Top)[0];
        assert_eq!(first_top.target(), Some(container.top_anchor().anchor()));
        assert_eq!(first_top.constant(), 2.0);

        let second_top = &layouts[1].find_all(AnchorKind::Top)[0];
        assert_eq!(second_top.target(), Some(items[0].bottom_anchor().anchor()));
        assert_eq!(second_top.constant(), 4.0);

        let last_bottom = &layouts[2].find_all(AnchorKind::Bottom)[0];
        assert_eq!(
            last_bottom.target(),
            Some(container.bottom_anchor().anchor())
        );

        for layout in &layouts {
            assert_eq!(layout.find_all(AnchorKind::Leading).len(), 1);
            assert_eq!(layout.find_all(AnchorKind::Trailing).len(), 1);
        }

        let _ = layouts.activate_all();
    }

    #[test]
    fn distribution_returns_builders_unactivated() {
        let tree = BoxTree::new();
        let (container, items) = three_items(&tree);

        let layouts = distribute_horizontally(&container, &items, 8.0, 0.0);
        assert!(
            layouts
                .iter()
                .flat_map(|l| l.connections())
                .all(|c| !c.is_active())
        );
        let _ = layouts.activate_all();
    }

    #[test]
    fn empty_input_or_dead_container_yields_nothing() {
        let tree = BoxTree::new();
        let (container, items) = three_items(&tree);

        assert!(distribute_horizontally(&container, &[], 8.0, 0.0).is_empty());

        tree.remove(container.id()).unwrap();
        assert!(distribute_vertically(&container, &items, 8.0, 0.0).is_empty());
    }

    #[test]
    fn equal_widths_covers_all_ordered_pairs() {
        let tree = BoxTree::new();
        let items = vec![
            tree.create_box("a"),
            tree.create_box("b"),
            tree.create_box("c"),
        ];

        let layouts = equal_widths(&items);
        assert_eq!(layouts.len(), 6);

        let mut pairs: Vec<(u32, u32)> = layouts
            .iter()
            .map(|layout| {
                let widths = layout.find_all(AnchorKind::Width);
                assert_eq!(widths.len(), 1);
                let target = widths[0].target().unwrap();
                assert_eq!(target.kind, AnchorKind::Width);
                (layout.subject().value(), target.box_id.value())
            })
            .collect();
        pairs.sort_unstable();

        let mut expected: Vec<(u32, u32)> = Vec::new();
        for a in &items {
            for b in &items {
                if a != b {
                    expected.push((a.id().value(), b.id().value()));
                }
            }
        }
        expected.sort_unstable();
        assert_eq!(pairs, expected);

        let _ = layouts.activate_all();
    }

    #[test]
    fn equal_heights_constrains_heights() {
        let tree = BoxTree::new();
        let items = vec![tree.create_box("a"), tree.create_box("b")];

        let layouts = equal_heights(&items);
        assert_eq!(layouts.len(), 2);
        for layout in &layouts {
            assert_eq!(layout.find_all(AnchorKind::Height).len(), 1);
        }
        let _ = layouts.activate_all();
    }
}
