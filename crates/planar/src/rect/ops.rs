use core::ops::{Add, Sub};

use crate::point::Point;
use crate::rect::Rect;
use crate::scalar::Scalar;

/// Translates the rectangle by the vector `p`.
impl<S: Scalar> Add<Point<S>> for Rect<S> {
	type Output = Self;

	fn add(self, p: Point<S>) -> Self {
		Self::from_points(self.min + p, self.max + p)
	}
}

/// Translates the rectangle by the vector `-p`.
impl<S: Scalar> Sub<Point<S>> for Rect<S> {
	type Output = Self;

	fn sub(self, p: Point<S>) -> Self {
		Self::from_points(self.min - p, self.max - p)
	}
}

impl<S: Scalar> From<Point<S>> for Rect<S> {
	/// Converts a size into the rectangle spanning from the origin to it.
	fn from(size: Point<S>) -> Self {
		size.as_size()
	}
}
