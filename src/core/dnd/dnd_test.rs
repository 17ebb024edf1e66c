use super::*;

// =============================================================
// array_move
// =============================================================

#[test]
fn array_move_forward() {
    let mut items = vec!["a", "b", "c", "d"];
    assert!(array_move(&mut items, 0, 2));
    assert_eq!(items, vec!["b", "c", "a", "d"]);
}

#[test]
fn array_move_backward() {
    let mut items = vec!["a", "b", "c", "d"];
    assert!(array_move(&mut items, 3, 1));
    assert_eq!(items, vec!["a", "d", "b", "c"]);
}

#[test]
fn array_move_to_last_slot() {
    let mut items = vec![1, 2, 3];
    assert!(array_move(&mut items, 0, 2));
    assert_eq!(items, vec![2, 3, 1]);
}

#[test]
fn array_move_same_index_is_noop() {
    let mut items = vec![1, 2, 3];
    assert!(!array_move(&mut items, 1, 1));
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn array_move_out_of_range_is_noop() {
    let mut items = vec![1, 2, 3];
    assert!(!array_move(&mut items, 5, 0));
    assert!(!array_move(&mut items, 0, 3));
    assert_eq!(items, vec![1, 2, 3]);
}

// =============================================================
// DragKind / DragItem
// =============================================================

#[test]
fn drag_kind_attr_round_trips() {
    for kind in [DragKind::Column, DragKind::Task] {
        assert_eq!(DragKind::from_attr(kind.as_attr()), Some(kind));
    }
    assert_eq!(DragKind::from_attr("card"), None);
}

#[test]
fn drag_item_constructors_set_kind() {
    assert!(DragItem::column("c1").is_column());
    assert!(DragItem::task("t1").is_task());
    assert!(!DragItem::task("t1").is_column());
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    assert_eq!(a.distance_to(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn point_offset_subtracts() {
    let p = Point::new(120.0, 80.0).offset_by(Point::new(20.0, 30.0));
    assert_eq!(p, Point::new(100.0, 50.0));
}
