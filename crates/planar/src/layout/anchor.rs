use crate::point::Point;
use crate::rect::Rect;
use crate::scalar::Scalar;

impl<S: Scalar> Rect<S> {
	/// Returns the point at the fractional position `(rx, ry)` inside the
	/// rectangle: `(0, 0)` is `min`, `(1, 1)` is `max`.
	///
	/// Rates outside `[0, 1]` extrapolate beyond the rectangle; they are
	/// deliberately not clamped.
	///
	/// # Example
	///
	/// ```
	/// use planar::{Point, Rect};
	///
	/// let r = Rect::new(10, 20, 110, 120);
	/// assert_eq!(r.anchor(0.0, 0.0), Point::new(10, 20));
	/// assert_eq!(r.anchor(1.0, 1.0), Point::new(110, 120));
	/// assert_eq!(r.anchor(0.25, 0.75), Point::new(35, 95));
	/// ```
	pub fn anchor(self, rx: f64, ry: f64) -> Point<S> {
		Point::new(
			self.min.x + self.width().of_rate(rx),
			self.min.y + self.height().of_rate(ry),
		)
	}

	/// Returns the center point of the rectangle.
	pub fn center(self) -> Point<S> {
		self.anchor(0.5, 0.5)
	}
}

impl<S: Scalar> Point<S> {
	/// Returns a rectangle of `size`'s dimensions, positioned so that
	/// `self` sits at the fractional position `(rx, ry)` within it.
	///
	/// This is the inverse of [`Rect::anchor`]: anchoring the result at the
	/// same rates yields `self` back.
	///
	/// # Example
	///
	/// ```
	/// use planar::{Point, Rect};
	///
	/// let screen = Rect::new(0, 0, 800, 600);
	/// let frame = Rect::new(0, 0, 100, 100);
	/// // Pin the frame's bottom-right corner to the screen's bottom-right.
	/// let placed = screen.anchor(1.0, 1.0).align(frame, 1.0, 1.0);
	/// assert_eq!(placed, Rect::new(700, 500, 800, 600));
	/// ```
	pub fn align(self, size: Rect<S>, rx: f64, ry: f64) -> Rect<S> {
		Rect::from_points(
			Point::new(
				self.x - size.width().of_rate(rx),
				self.y - size.height().of_rate(ry),
			),
			Point::new(
				self.x + size.width().of_rate(1.0 - rx),
				self.y + size.height().of_rate(1.0 - ry),
			),
		)
	}

	/// Returns a rectangle of `size`'s dimensions centered on `self`.
	///
	/// # Example
	///
	/// ```
	/// use planar::Rect;
	///
	/// let screen = Rect::new(0, 0, 800, 600);
	/// let modal = Rect::new(0, 0, 400, 300);
	/// assert_eq!(screen.center().align_center(modal), Rect::new(200, 150, 600, 450));
	/// ```
	pub fn align_center(self, size: Rect<S>) -> Rect<S> {
		self.align(size, 0.5, 0.5)
	}
}
