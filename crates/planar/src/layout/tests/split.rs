use alloc::vec;
use alloc::vec::Vec;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::rect::Rect;

#[test]
fn split_x_zero_parts() {
	let r = Rect::new(0, 0, 100, 50);
	assert_eq!(r.split_x(0, 0), Vec::<Rect<i32>>::new());
}

#[test]
fn split_x_one_part_ignores_gap() {
	let r = Rect::new(0, 0, 100, 50);
	assert_eq!(r.split_x(1, 9999), vec![r]);
}

#[test]
fn split_x_even() {
	let r = Rect::new(0, 0, 100, 50);
	let parts = r.split_x(4, 0);
	assert_eq!(
		parts,
		[
			Rect::new(0, 0, 25, 50),
			Rect::new(25, 0, 50, 50),
			Rect::new(50, 0, 75, 50),
			Rect::new(75, 0, 100, 50),
		],
	);
}

#[test]
fn split_x_last_absorbs_remainder() {
	let r = Rect::new(0, 0, 100, 50);
	let parts = r.split_x(3, 0);
	assert_eq!(
		parts,
		[
			Rect::new(0, 0, 33, 50),
			Rect::new(33, 0, 66, 50),
			Rect::new(66, 0, 100, 50),
		],
	);
}

#[test]
fn split_x_with_gap() {
	let r = Rect::new(0, 0, 100, 50);
	let parts = r.split_x(3, 5);
	assert_eq!(
		parts,
		[
			Rect::new(0, 0, 30, 50),
			Rect::new(35, 0, 65, 50),
			Rect::new(70, 0, 100, 50),
		],
	);
}

#[test]
fn split_x_gap_exceeds_width() {
	// 100 - 2 * 60 floors at zero width; positions still advance by the
	// gap.
	let r = Rect::new(0, 0, 100, 50);
	let parts = r.split_x(3, 60);
	assert_eq!(
		parts,
		[
			Rect::new(0, 0, 0, 50),
			Rect::new(60, 0, 60, 50),
			Rect::new(120, 0, 120, 50),
		],
	);
	assert!(parts.iter().all(|p| p.is_empty()));
}

#[test]
fn split_x_negative_gap_is_neutralized() {
	let r = Rect::new(0, 0, 100, 50);
	assert_eq!(r.split_x(2, -10), r.split_x(2, 0));
}

#[test]
fn split_y_basics() {
	let r = Rect::new(0, 0, 50, 100);
	assert_eq!(r.split_y(0, 0), Vec::<Rect<i32>>::new());
	assert_eq!(r.split_y(1, 0), vec![r]);
	let parts = r.split_y(3, 5);
	assert_eq!(
		parts,
		[
			Rect::new(0, 0, 50, 30),
			Rect::new(0, 35, 50, 65),
			Rect::new(0, 70, 50, 100),
		],
	);
}

#[test]
fn split_y_gap_exceeds_height() {
	let r = Rect::new(0, 0, 50, 100);
	let parts = r.split_y(3, 60);
	assert_eq!(
		parts,
		[
			Rect::new(0, 0, 50, 0),
			Rect::new(0, 60, 50, 60),
			Rect::new(0, 120, 50, 120),
		],
	);
}

#[rstest]
#[case::even(4, 0)]
#[case::remainder(3, 0)]
#[case::gapped(3, 5)]
#[case::seven(7, 2)]
fn split_x_reconstructs_extent(#[case] n: usize, #[case] gap: i32) {
	let r = Rect::new(0, 0, 100, 50);
	let parts = r.split_x(n, gap);
	assert_eq!(parts.len(), n);
	assert_eq!(parts.first().unwrap().min.x, r.min.x);
	assert_eq!(parts.last().unwrap().max.x, r.max.x);
	for pair in parts.windows(2) {
		assert_eq!(pair[1].min.x - pair[0].max.x, gap);
		assert_eq!(pair[0].height(), r.height());
	}
}

#[test]
fn split_x_floating_scalars() {
	let r = Rect::new(0.0, 0.0, 9.0, 1.0);
	let parts = r.split_x(3, 0.0);
	assert_eq!(
		parts,
		[
			Rect::new(0.0, 0.0, 3.0, 1.0),
			Rect::new(3.0, 0.0, 6.0, 1.0),
			Rect::new(6.0, 0.0, 9.0, 1.0),
		],
	);
}

#[test]
fn split_x_unsigned_scalars_do_not_underflow() {
	let r = Rect::new(0_u16, 0, 100, 50);
	let parts = r.split_x(3, 60);
	assert_eq!(
		parts,
		[
			Rect::new(0, 0, 0, 50),
			Rect::new(60, 0, 60, 50),
			Rect::new(120, 0, 120, 50),
		],
	);
}
