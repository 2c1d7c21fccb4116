//! Lazy enumeration of the lattice points inside a [`Rect`].

use crate::point::Point;
use crate::rect::Rect;
use crate::scalar::Scalar;

/// A row-major iterator over the points of a [`Rect`], created by
/// [`Rect::positions`].
///
/// Points are produced left-to-right, top-to-bottom, one [`Scalar::one`]
/// step at a time. The iterator is finite; an empty rectangle yields
/// nothing.
#[derive(Debug, Clone)]
pub struct Positions<S> {
	rect: Rect<S>,
	current: Point<S>,
}

impl<S: Scalar> Positions<S> {
	/// Creates an iterator over the points of `rect`.
	pub fn new(rect: Rect<S>) -> Self {
		Self {
			rect,
			current: rect.min,
		}
	}
}

impl<S: Scalar> Iterator for Positions<S> {
	type Item = Point<S>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.rect.is_empty() || self.current.y >= self.rect.max.y {
			return None;
		}
		let p = self.current;
		self.current.x = self.current.x + S::one();
		if self.current.x >= self.rect.max.x {
			self.current.x = self.rect.min.x;
			self.current.y = self.current.y + S::one();
		}
		Some(p)
	}
}

#[cfg(test)]
mod tests;
