//! The [`Point`] value type.

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

use crate::rect::Rect;
use crate::scalar::Scalar;

/// An x, y coordinate pair. The axes increase right and down.
///
/// A `Point` doubles as a vector; there is no separate vector type. Values are
/// freely copyable and every operation returns a new value.
///
/// # Example
///
/// ```
/// use planar::Point;
///
/// let p = Point::new(3, 4) + Point::new(1, 1);
/// assert_eq!(p, Point::new(4, 5));
/// assert_eq!(p.to_string(), "(4,5)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<S> {
	/// The horizontal coordinate.
	pub x: S,
	/// The vertical coordinate.
	pub y: S,
}

impl<S> Point<S> {
	/// Creates a new point from its coordinates.
	pub const fn new(x: S, y: S) -> Self {
		Self { x, y }
	}
}

impl<S: Scalar> Point<S> {
	/// The origin point.
	pub fn zero() -> Self {
		Self::new(S::zero(), S::zero())
	}

	/// Reinterprets the coordinates as a width and height: the rectangle
	/// spanning from the origin to `self`.
	///
	/// This is the usual way to hand a bare size to the alignment operators.
	///
	/// # Example
	///
	/// ```
	/// use planar::{Point, Rect};
	///
	/// assert_eq!(Point::new(20, 30).as_size(), Rect::new(0, 0, 20, 30));
	/// ```
	pub fn as_size(self) -> Rect<S> {
		Rect::from_points(Self::zero(), self)
	}

	/// Multiplies both coordinates componentwise by `other`.
	pub fn component_mul(self, other: Self) -> Self {
		Self::new(self.x * other.x, self.y * other.y)
	}

	/// Divides both coordinates componentwise by `other`.
	pub fn component_div(self, other: Self) -> Self {
		Self::new(self.x / other.x, self.y / other.y)
	}

	/// Converts the coordinates to another scalar type.
	///
	/// Returns `None` if either coordinate has no representation in `T`,
	/// for example a negative coordinate cast to an unsigned scalar.
	pub fn try_cast<T: Scalar>(self) -> Option<Point<T>> {
		Some(Point::new(T::from(self.x)?, T::from(self.y)?))
	}
}

impl<S: Scalar> Add for Point<S> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl<S: Scalar> Sub for Point<S> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// Uniform scale.
impl<S: Scalar> Mul<S> for Point<S> {
	type Output = Self;

	fn mul(self, k: S) -> Self {
		Self::new(self.x * k, self.y * k)
	}
}

/// Uniform inverse scale.
impl<S: Scalar> Div<S> for Point<S> {
	type Output = Self;

	fn div(self, k: S) -> Self {
		Self::new(self.x / k, self.y / k)
	}
}

impl<S> From<(S, S)> for Point<S> {
	fn from((x, y): (S, S)) -> Self {
		Self::new(x, y)
	}
}

impl<S: fmt::Display> fmt::Display for Point<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({},{})", self.x, self.y)
	}
}
