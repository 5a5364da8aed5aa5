//! Property-based tests for the masonry layout engine.
//!
//! Properties under test:
//! - every valid item lands in exactly one column in [0, column_count)
//! - items sharing a column never overlap vertically
//! - total height is exactly the tallest accumulated column
//! - the same input always yields the same layout
//! - column widths and gaps fill the container

use masonry_wasm::compute_layout;
use masonry_wasm::models::{column_count_for_width, GridConfig, LayoutConfig, MasonryItem};
use proptest::prelude::*;

// ===== Arbitrary Strategies =====

/// Strategy for a plausible photo aspect ratio (tall portrait to panorama).
fn arb_aspect_ratio() -> impl Strategy<Value = f64> {
    0.2f64..5.0
}

/// Strategy for an aspect ratio that is sometimes unusable.
fn arb_maybe_bad_ratio() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => arb_aspect_ratio(),
        1 => Just(0.0),
        1 => Just(-1.0),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::MIN_POSITIVE),
        1 => (1u64..(1u64 << 52)).prop_map(f64::from_bits),
    ]
}

/// Strategy for items, some measured badly and some not measured at all.
fn arb_items() -> impl Strategy<Value = Vec<MasonryItem>> {
    let item = prop_oneof![
        12 => arb_maybe_bad_ratio().prop_map(MasonryItem::new),
        1 => Just(MasonryItem::unmeasured(None)),
    ];
    prop::collection::vec(item, 0..60)
}

/// Container widths wide enough for every default breakpoint.
fn arb_container_width() -> impl Strategy<Value = f64> {
    200.0f64..2560.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn every_valid_item_has_one_column(items in arb_items(), width in arb_container_width()) {
        let pass = LayoutConfig::for_container(width, &GridConfig::default()).unwrap();
        let layout = compute_layout(&items, &pass);

        prop_assert_eq!(layout.placements.len() + layout.skipped.len(), items.len());
        for placement in &layout.placements {
            prop_assert!(placement.column < pass.column_count);
            prop_assert!(items[placement.index].aspect_ratio.is_some_and(f64::is_finite));
            prop_assert!(placement.height.is_finite());
        }

        let mut seen: Vec<usize> = layout
            .placements
            .iter()
            .map(|p| p.index)
            .chain(layout.skipped.iter().map(|s| s.index))
            .collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..items.len()).collect::<Vec<_>>());
    }

    #[test]
    fn same_column_items_do_not_overlap(items in arb_items(), width in arb_container_width()) {
        let pass = LayoutConfig::for_container(width, &GridConfig::default()).unwrap();
        let layout = compute_layout(&items, &pass);

        for column in 0..pass.column_count {
            let mut ranges: Vec<(f64, f64)> =
                layout.column(column).map(|p| (p.y, p.bottom())).collect();
            ranges.sort_by(|a, b| a.0.total_cmp(&b.0));
            for pair in ranges.windows(2) {
                prop_assert!(pair[0].1 <= pair[1].0);
            }
        }
    }

    #[test]
    fn total_height_is_tallest_column(items in arb_items(), width in arb_container_width()) {
        let pass = LayoutConfig::for_container(width, &GridConfig::default()).unwrap();
        let layout = compute_layout(&items, &pass);

        let tallest = layout.column_heights.iter().copied().fold(0.0, f64::max);
        prop_assert_eq!(layout.total_height, tallest);
        prop_assert!(layout.total_height.is_finite());
        prop_assert_eq!(layout.column_heights.len(), pass.column_count);
    }

    #[test]
    fn layout_is_deterministic(items in arb_items(), width in arb_container_width()) {
        let pass = LayoutConfig::for_container(width, &GridConfig::default()).unwrap();

        let first = compute_layout(&items, &pass);
        let second = compute_layout(&items, &pass);

        // NaN ratios end up in `skipped` only, so placements compare cleanly
        prop_assert_eq!(first.placements, second.placements);
        prop_assert_eq!(first.column_heights, second.column_heights);
        prop_assert_eq!(first.total_height, second.total_height);
    }

    #[test]
    fn columns_fill_container(width in arb_container_width()) {
        let pass = LayoutConfig::for_container(width, &GridConfig::default()).unwrap();

        let filled = pass.column_width * pass.column_count as f64
            + pass.gap * (pass.column_count - 1) as f64;
        prop_assert!((filled - width).abs() < 1e-6);
        prop_assert_eq!(pass.column_count, column_count_for_width(width, &GridConfig::default()));
    }

    #[test]
    fn placed_items_start_on_column_tops(items in prop::collection::vec(arb_aspect_ratio(), 1..40)) {
        let items: Vec<MasonryItem> = items.into_iter().map(MasonryItem::new).collect();
        let pass = LayoutConfig::for_container(1024.0, &GridConfig::default()).unwrap();
        let layout = compute_layout(&items, &pass);

        // Each item sits directly below the previous item of its column
        for column in 0..pass.column_count {
            let mut expected_y = 0.0;
            for placement in layout.column(column) {
                prop_assert!((placement.y - expected_y).abs() < 1e-9);
                prop_assert_eq!(placement.x, pass.column_x(column));
                expected_y = placement.bottom() + pass.gap;
            }
        }
    }
}
