use alloc::vec::Vec;

use super::*;

#[test]
fn positions_are_row_major() {
	let rect = Rect::new(1, 1, 3, 4);
	let points: Vec<_> = rect.positions().collect();
	assert_eq!(
		points,
		[
			Point::new(1, 1),
			Point::new(2, 1),
			Point::new(1, 2),
			Point::new(2, 2),
			Point::new(1, 3),
			Point::new(2, 3),
		],
	);
}

#[test]
fn positions_of_empty_rect() {
	assert_eq!(Rect::new(5, 5, 5, 9).positions().next(), None);
	assert_eq!(Rect::<i32>::zero().positions().next(), None);
}

#[test]
fn positions_can_stop_early() {
	let rect = Rect::new(0, 0, 100, 100);
	let taken: Vec<_> = rect.positions().take(3).collect();
	assert_eq!(taken, [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
}

#[test]
fn positions_restart_from_min() {
	let rect = Rect::new(0, 0, 2, 1);
	let first: Vec<_> = rect.positions().collect();
	let second: Vec<_> = rect.positions().collect();
	assert_eq!(first, second);
}

#[test]
fn positions_step_by_one_for_floats() {
	let rect = Rect::new(0.0, 0.0, 2.5, 1.0);
	let points: Vec<_> = rect.positions().collect();
	assert_eq!(points, [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)]);
}
