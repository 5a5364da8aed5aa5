// Scenario tests for the masonry layout engine

use masonry_wasm::models::{column_count_for_width, GridConfig, LayoutConfig, MasonryItem};
use masonry_wasm::{compute_layout, LayoutError};

fn squares(count: usize) -> Vec<MasonryItem> {
    (0..count).map(|i| MasonryItem::with_id(format!("photo-{}", i), 1.0)).collect()
}

#[test]
fn test_breakpoint_edges() {
    let config = GridConfig::default();

    assert_eq!(column_count_for_width(1023.0, &config), 3);
    assert_eq!(column_count_for_width(1024.0, &config), 4);
    assert_eq!(column_count_for_width(639.0, &config), 2);
    assert_eq!(column_count_for_width(640.0, &config), 3);
}

#[test]
fn test_five_squares_wrap_to_first_column() {
    let pass = LayoutConfig::for_container(1024.0, &GridConfig::default())
        .expect("1024px should fit four columns");
    let layout = compute_layout(&squares(5), &pass);

    assert_eq!(layout.column_count, 4);
    assert_eq!(layout.column_width, 244.0);

    let positions: Vec<(usize, f64, f64)> = layout
        .placements
        .iter()
        .map(|p| (p.column, p.x, p.y))
        .collect();
    assert_eq!(
        positions,
        vec![
            (0, 0.0, 0.0),
            (1, 260.0, 0.0),
            (2, 520.0, 0.0),
            (3, 780.0, 0.0),
            (0, 0.0, 260.0),
        ]
    );

    assert_eq!(layout.placements[4].id.as_deref(), Some("photo-4"));
    assert_eq!(layout.total_height, 520.0);
}

#[test]
fn test_tablet_width_uses_three_columns() {
    let pass = LayoutConfig::for_container(800.0, &GridConfig::default()).unwrap();
    let layout = compute_layout(&squares(4), &pass);

    // (800 - 2 * 16) / 3
    assert_eq!(layout.column_count, 3);
    assert_eq!(layout.column_width, 256.0);
    assert_eq!(layout.placements[3].column, 0);
    assert_eq!(layout.placements[3].y, 256.0 + 16.0);
}

#[test]
fn test_mixed_orientations() {
    let pass = LayoutConfig::for_container(500.0, &GridConfig::default()).unwrap();
    // Two columns of (500 - 16) / 2 = 242
    assert_eq!(pass.column_count, 2);

    let items = vec![
        MasonryItem::new(0.5), // portrait, 484 tall
        MasonryItem::new(2.0), // landscape, 121 tall
        MasonryItem::new(2.0),
        MasonryItem::new(1.0),
    ];
    let layout = compute_layout(&items, &pass);

    let columns: Vec<usize> = layout.placements.iter().map(|p| p.column).collect();
    assert_eq!(columns, vec![0, 1, 1, 1]);
    assert_eq!(layout.placements[2].y, 137.0);
    assert_eq!(layout.placements[3].y, 274.0);
    assert_eq!(layout.column_heights, vec![500.0, 532.0]);
    assert_eq!(layout.total_height, 532.0);
}

#[test]
fn test_resize_within_breakpoint_changes_positions_not_columns() {
    let config = GridConfig::default();
    let items = vec![
        MasonryItem::new(1.5),
        MasonryItem::new(0.8),
        MasonryItem::new(1.0),
        MasonryItem::new(1.2),
        MasonryItem::new(0.6),
    ];

    let narrow = compute_layout(&items, &LayoutConfig::for_container(700.0, &config).unwrap());
    let wide = compute_layout(&items, &LayoutConfig::for_container(1000.0, &config).unwrap());

    assert_eq!(narrow.column_count, wide.column_count);
    let narrow_columns: Vec<usize> = narrow.placements.iter().map(|p| p.column).collect();
    let wide_columns: Vec<usize> = wide.placements.iter().map(|p| p.column).collect();
    assert_eq!(narrow_columns, wide_columns);
    assert_ne!(narrow.placements[1].x, wide.placements[1].x);
    assert!(wide.total_height > narrow.total_height);
}

#[test]
fn test_crossing_breakpoint_reassigns_columns() {
    let config = GridConfig::default();
    let items = squares(6);

    let three = compute_layout(&items, &LayoutConfig::for_container(1023.0, &config).unwrap());
    let four = compute_layout(&items, &LayoutConfig::for_container(1024.0, &config).unwrap());

    assert_eq!(three.placements[3].column, 0);
    assert_eq!(four.placements[3].column, 3);
}

#[test]
fn test_bad_measurements_do_not_poison_height() {
    let pass = LayoutConfig::for_container(1024.0, &GridConfig::default()).unwrap();
    let items = vec![
        MasonryItem::new(1.0),
        MasonryItem::new(f64::INFINITY),
        MasonryItem::new(-2.0),
        MasonryItem::new(f64::NAN),
        MasonryItem::new(1.0),
    ];
    let layout = compute_layout(&items, &pass);

    assert_eq!(layout.placements.len(), 2);
    let skipped: Vec<usize> = layout.skipped.iter().map(|s| s.index).collect();
    assert_eq!(skipped, vec![1, 2, 3]);
    assert!(layout.total_height.is_finite());
    assert_eq!(layout.total_height, 260.0);
}

#[test]
fn test_narrow_container_is_an_error() {
    let result = LayoutConfig::for_container(12.0, &GridConfig::default());
    assert!(matches!(result, Err(LayoutError::ContainerTooNarrow { column_count: 2, .. })));
}

#[test]
fn test_custom_gap_and_breakpoints_from_json() {
    let config: GridConfig = serde_json::from_str(
        r#"{
            "gap": 10,
            "breakpoints": [{ "minWidth": 300, "columns": 3 }],
            "minColumns": 1
        }"#,
    )
    .unwrap();

    assert_eq!(column_count_for_width(299.0, &config), 1);

    let pass = LayoutConfig::for_container(320.0, &config).unwrap();
    assert_eq!(pass.column_count, 3);
    assert_eq!(pass.column_width, 100.0);

    let layout = compute_layout(&squares(4), &pass);
    assert_eq!(layout.placements[1].x, 110.0);
    assert_eq!(layout.placements[3].y, 110.0);
}

#[test]
fn test_layout_serializes_for_javascript() {
    let pass = LayoutConfig::for_container(1024.0, &GridConfig::default()).unwrap();
    let layout = compute_layout(&squares(1), &pass);
    let json = serde_json::to_value(&layout).unwrap();

    assert_eq!(json["columnCount"], 4);
    assert_eq!(json["totalHeight"], 260.0);
    assert_eq!(json["placements"][0]["id"], "photo-0");
    assert_eq!(json["placements"][0]["width"], 244.0);
}
