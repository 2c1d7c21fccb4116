//! The [`Rect`] value type and its geometry algebra.

use core::fmt;
use core::mem;

pub use self::iter::Positions;
use crate::point::Point;
use crate::scalar::Scalar;

mod iter;
mod ops;

/// An axis-aligned rectangle, stored as its two corners.
///
/// A `Rect` contains the points with `min.x <= x < max.x` and
/// `min.y <= y < max.y`: the `min` corner is inclusive, the `max` corner
/// exclusive. It is *well-formed* if `min.x <= max.x` and likewise for y;
/// methods assume well-formed inputs and return well-formed outputs unless
/// documented otherwise ([`canonical`](Self::canonical) restores the
/// invariant).
///
/// A rectangle is *empty* when it contains no points, that is when either
/// axis has non-positive extent. All empty rectangles describe the same
/// (absent) region, so [`same_region`](Self::same_region) treats them as
/// equal regardless of their coordinates; the derived `PartialEq` stays
/// structural.
///
/// # Example
///
/// ```
/// use planar::Rect;
///
/// let r = Rect::new(0, 0, 100, 50);
/// assert_eq!(r.width(), 100);
/// assert_eq!(r.height(), 50);
/// assert_eq!(r.to_string(), "(0,0)-(100,50)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<S> {
	/// The inclusive top-left corner.
	pub min: Point<S>,
	/// The exclusive bottom-right corner.
	pub max: Point<S>,
}

impl<S> Rect<S> {
	/// Creates a rectangle from the corner coordinates `(x0, y0)` and
	/// `(x1, y1)`.
	pub const fn new(x0: S, y0: S, x1: S, y1: S) -> Self {
		Self {
			min: Point::new(x0, y0),
			max: Point::new(x1, y1),
		}
	}

	/// Creates a rectangle from its two corner points.
	pub const fn from_points(min: Point<S>, max: Point<S>) -> Self {
		Self { min, max }
	}
}

impl<S: Scalar> Rect<S> {
	/// The canonical empty rectangle: both corners at the origin.
	///
	/// Operators that run out of space return this value so that empty
	/// results from different code paths compare equal structurally, not
	/// just under [`same_region`](Self::same_region).
	pub fn zero() -> Self {
		Self::from_points(Point::zero(), Point::zero())
	}

	/// Creates a rectangle from a position and a size.
	pub fn from_xywh(x: S, y: S, w: S, h: S) -> Self {
		Self::new(x, y, x + w, y + h)
	}

	/// Returns the rectangle's width.
	pub fn width(self) -> S {
		self.max.x - self.min.x
	}

	/// Returns the rectangle's height.
	pub fn height(self) -> S {
		self.max.y - self.min.y
	}

	/// Returns the width and height as a point.
	pub fn size(self) -> Point<S> {
		self.max - self.min
	}

	/// Returns the rectangle shrunk by `n` on every edge.
	///
	/// See [`inset_each`](Self::inset_each) for the behavior when the inset
	/// exceeds an axis's extent.
	pub fn inset(self, n: S) -> Self {
		self.inset_each(n, n, n, n)
	}

	/// Returns the rectangle shrunk by `x` on the left and right edges and
	/// by `y` on the top and bottom edges.
	pub fn inset_xy(self, x: S, y: S) -> Self {
		self.inset_each(x, y, x, y)
	}

	/// Returns the rectangle shrunk by the given amount on each edge.
	///
	/// If the requested inset on an axis meets or exceeds that axis's
	/// extent, the axis collapses to a single degenerate coordinate at its
	/// midpoint rather than producing a negative extent.
	///
	/// # Example
	///
	/// ```
	/// use planar::Rect;
	///
	/// let r = Rect::new(0, 0, 100, 50);
	/// assert_eq!(r.inset(10), Rect::new(10, 10, 90, 40));
	/// // A 60-cell inset exceeds the 50-cell height: y collapses to 25.
	/// assert_eq!(r.inset(30), Rect::new(30, 25, 70, 25));
	/// ```
	pub fn inset_each(self, left: S, top: S, right: S, bottom: S) -> Self {
		let two = S::one() + S::one();
		let mut r = self;
		if r.width() < left + right {
			r.min.x = (r.min.x + r.max.x) / two;
			r.max.x = r.min.x;
		} else {
			r.min.x = r.min.x + left;
			r.max.x = r.max.x - right;
		}
		if r.height() < top + bottom {
			r.min.y = (r.min.y + r.max.y) / two;
			r.max.y = r.min.y;
		} else {
			r.min.y = r.min.y + top;
			r.max.y = r.max.y - bottom;
		}
		r
	}

	/// Returns the largest rectangle contained by both `self` and `other`.
	///
	/// If the two rectangles do not overlap, the canonical
	/// [`zero`](Self::zero) rectangle is returned rather than the raw
	/// inverted corner pair.
	pub fn intersection(self, other: Self) -> Self {
		let mut r = self;
		if r.min.x < other.min.x {
			r.min.x = other.min.x;
		}
		if r.min.y < other.min.y {
			r.min.y = other.min.y;
		}
		if r.max.x > other.max.x {
			r.max.x = other.max.x;
		}
		if r.max.y > other.max.y {
			r.max.y = other.max.y;
		}
		if r.is_empty() {
			return Self::zero();
		}
		r
	}

	/// Returns the smallest rectangle containing both `self` and `other`.
	///
	/// An empty operand contributes nothing: the other rectangle is
	/// returned unchanged.
	pub fn union(self, other: Self) -> Self {
		if self.is_empty() {
			return other;
		}
		if other.is_empty() {
			return self;
		}
		let mut r = self;
		if r.min.x > other.min.x {
			r.min.x = other.min.x;
		}
		if r.min.y > other.min.y {
			r.min.y = other.min.y;
		}
		if r.max.x < other.max.x {
			r.max.x = other.max.x;
		}
		if r.max.y < other.max.y {
			r.max.y = other.max.y;
		}
		r
	}

	/// Returns true if the rectangle contains no points.
	pub fn is_empty(self) -> bool {
		self.min.x >= self.max.x || self.min.y >= self.max.y
	}

	/// Returns true if `self` and `other` contain the same set of points.
	///
	/// All empty rectangles are considered equal to each other, whatever
	/// their coordinates. Use `==` for structural comparison.
	///
	/// # Example
	///
	/// ```
	/// use planar::Rect;
	///
	/// let a = Rect::new(5, 5, 5, 9);
	/// let b = Rect::new(70, 0, 70, 50);
	/// assert!(a.same_region(b));
	/// assert_ne!(a, b);
	/// ```
	pub fn same_region(self, other: Self) -> bool {
		self == other || (self.is_empty() && other.is_empty())
	}

	/// Returns true if `self` and `other` have a non-empty intersection.
	pub fn intersects(self, other: Self) -> bool {
		!self.is_empty()
			&& !other.is_empty()
			&& self.min.x < other.max.x
			&& other.min.x < self.max.x
			&& self.min.y < other.max.y
			&& other.min.y < self.max.y
	}

	/// Returns true if every point of `self` lies in `other`.
	///
	/// An empty rectangle is vacuously contained in any rectangle. Note
	/// that `max` is an exclusive bound, so containment does not require
	/// `other.contains(self.max)`.
	pub fn contained_in(self, other: Self) -> bool {
		if self.is_empty() {
			return true;
		}
		other.min.x <= self.min.x
			&& self.max.x <= other.max.x
			&& other.min.y <= self.min.y
			&& self.max.y <= other.max.y
	}

	/// Returns true if the point lies inside the rectangle.
	///
	/// The `min` edges are inclusive, the `max` edges exclusive.
	pub fn contains(self, p: Point<S>) -> bool {
		self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
	}

	/// Returns the canonical version of the rectangle, with `min` and `max`
	/// swapped on any axis where they are inverted.
	pub fn canonical(self) -> Self {
		let mut r = self;
		if r.max.x < r.min.x {
			mem::swap(&mut r.min.x, &mut r.max.x);
		}
		if r.max.y < r.min.y {
			mem::swap(&mut r.min.y, &mut r.max.y);
		}
		r
	}

	/// Returns a lazy, row-major iterator over the lattice points inside
	/// the rectangle, stepping by one per axis.
	///
	/// The iterator is finite and freshly constructed per call, so it can
	/// be restarted by calling `positions` again and abandoned early at no
	/// cost.
	///
	/// # Example
	///
	/// ```
	/// use planar::{Point, Rect};
	///
	/// let points: Vec<_> = Rect::new(0, 0, 2, 2).positions().collect();
	/// assert_eq!(
	/// 	points,
	/// 	[Point::new(0, 0), Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)],
	/// );
	/// ```
	pub fn positions(self) -> Positions<S> {
		Positions::new(self)
	}
}

impl<S: fmt::Display> fmt::Display for Rect<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.min, self.max)
	}
}
