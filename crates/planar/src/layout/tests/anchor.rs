use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::point::Point;
use crate::rect::Rect;

#[rstest]
#[case::min(0.0, 0.0, Point::new(10, 20))]
#[case::center(0.5, 0.5, Point::new(60, 70))]
#[case::max(1.0, 1.0, Point::new(110, 120))]
#[case::mixed(0.25, 0.75, Point::new(35, 95))]
#[case::extrapolated(2.0, -1.0, Point::new(210, -80))]
fn anchor_is_fractional_position(#[case] rx: f64, #[case] ry: f64, #[case] expected: Point<i32>) {
	let r = Rect::new(10, 20, 110, 120);
	assert_eq!(r.anchor(rx, ry), expected);
}

#[test]
fn center_of_uneven_rect() {
	assert_eq!(Rect::new(10, 20, 110, 220).center(), Point::new(60, 120));
}

#[test]
fn align_positions_size_around_point() {
	let screen = Rect::new(0, 0, 800, 600);
	let frame = Rect::new(0, 0, 100, 100);
	assert_eq!(screen.anchor(0.0, 0.0).align(frame, 0.0, 0.0), Rect::new(0, 0, 100, 100));
	assert_eq!(screen.anchor(1.0, 0.0).align(frame, 1.0, 0.0), Rect::new(700, 0, 800, 100));
	assert_eq!(screen.anchor(0.0, 1.0).align(frame, 0.0, 1.0), Rect::new(0, 500, 100, 600));
	assert_eq!(screen.anchor(1.0, 1.0).align(frame, 1.0, 1.0), Rect::new(700, 500, 800, 600));
}

#[test]
fn align_center_centers_modal() {
	let screen = Rect::new(0, 0, 800, 600);
	let modal = Rect::new(0, 0, 400, 300);
	let placed = screen.center().align_center(modal);
	assert_eq!(placed, Rect::new(200, 150, 600, 450));
	assert_eq!(placed.size(), modal.size());
}

#[test]
fn align_accepts_size_from_point() {
	let size = Point::new(40, 20).as_size();
	let placed = Point::new(100, 100).align(size, 0.5, 0.5);
	assert_eq!(placed, Rect::new(80, 90, 120, 110));
}

#[rstest]
#[case::origin(Point::new(0, 0))]
#[case::interior(Point::new(33, 77))]
#[case::negative(Point::new(-40, -7))]
fn align_center_round_trips_through_center(#[case] p: Point<i32>) {
	let size = Rect::new(0, 0, 100, 50);
	assert_eq!(p.align_center(size).center(), p);
}

#[test]
fn anchor_align_round_trip_floats() {
	let r = Rect::new(1.0, 2.0, 9.0, 6.0);
	let p = r.anchor(0.25, 0.75);
	let rebuilt = p.align(r.size().as_size(), 0.25, 0.75);
	assert_eq!(rebuilt.size(), r.size());
	assert_eq!(rebuilt.anchor(0.25, 0.75), p);
}
