use shelf_charts::core::{ESTIMATED_LABEL_WIDTH_PX, annotation_step, select_visible_indices};

#[test]
fn everything_visible_when_labels_fit() {
    let visible = select_visible_indices(6, 600.0, ESTIMATED_LABEL_WIDTH_PX);
    assert_eq!(visible, (0..6).collect::<Vec<_>>());
}

#[test]
fn moderate_counts_stride_to_the_available_slots() {
    // 10 labels into 5 slots: stride 2 plus the pinned tail.
    let visible = select_visible_indices(10, 300.0, ESTIMATED_LABEL_WIDTH_PX);
    assert_eq!(visible, vec![0, 2, 4, 6, 8, 9]);
}

#[test]
fn dense_mid_range_uses_every_third_index() {
    let visible = select_visible_indices(25, 300.0, ESTIMATED_LABEL_WIDTH_PX);

    assert!(visible.contains(&0));
    assert!(visible.contains(&24));
    assert!(visible.contains(&3));
    assert!(visible.contains(&21));
    assert!(!visible.contains(&1));
    assert!(!visible.contains(&23));
}

#[test]
fn very_dense_axes_use_every_fifth_index() {
    let visible = select_visible_indices(40, 300.0, ESTIMATED_LABEL_WIDTH_PX);

    assert!(visible.contains(&0));
    assert!(visible.contains(&39));
    assert!(visible.contains(&35));
    assert!(!visible.contains(&3));
    assert!(!visible.contains(&38));
}

#[test]
fn boundary_indices_survive_any_dense_count() {
    for total in 21..120 {
        let visible = select_visible_indices(total, 240.0, ESTIMATED_LABEL_WIDTH_PX);
        assert!(visible.contains(&0), "missing head at {total}");
        assert!(visible.contains(&(total - 1)), "missing tail at {total}");
    }
}

#[test]
fn zero_width_still_pins_the_boundaries() {
    let visible = select_visible_indices(8, 0.0, ESTIMATED_LABEL_WIDTH_PX);
    assert_eq!(visible, vec![0, 7]);
}

#[test]
fn annotation_stride_is_one_in_five() {
    assert_eq!(annotation_step(3), 1);
    assert_eq!(annotation_step(5), 1);
    assert_eq!(annotation_step(10), 2);
    assert_eq!(annotation_step(31), 6);
}
