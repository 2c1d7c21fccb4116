use crate::point::Point;
use crate::rect::Rect;
use crate::scalar::Scalar;

impl<S: Scalar> Rect<S> {
	/// Cuts the rectangle in two at `x = min.x + w`, returning the left
	/// part and the rest.
	///
	/// The offset is clamped to `[0, width()]` first, so the function is
	/// total: a negative `w` yields an empty left part at `min.x` and the
	/// whole rectangle as the rest; an oversized `w` yields the whole
	/// rectangle and an empty rest at `max.x`. The two parts always rejoin
	/// to the original rectangle.
	///
	/// # Example
	///
	/// ```
	/// use planar::Rect;
	///
	/// let r = Rect::new(0, 0, 100, 50);
	/// let (got, rest) = r.cut_x(30);
	/// assert_eq!(got, Rect::new(0, 0, 30, 50));
	/// assert_eq!(rest, Rect::new(30, 0, 100, 50));
	/// ```
	pub fn cut_x(self, w: S) -> (Self, Self) {
		let w = clamp_extent(w, self.width());
		let seam = self.min.x + w;
		(
			Self::from_points(self.min, Point::new(seam, self.max.y)),
			Self::from_points(Point::new(seam, self.min.y), self.max),
		)
	}

	/// Cuts the rectangle in two at `y = min.y + h`, returning the top
	/// part and the rest.
	///
	/// The offset is clamped to `[0, height()]`; see [`cut_x`](Self::cut_x)
	/// for the clamping policy.
	pub fn cut_y(self, h: S) -> (Self, Self) {
		let h = clamp_extent(h, self.height());
		let seam = self.min.y + h;
		(
			Self::from_points(self.min, Point::new(self.max.x, seam)),
			Self::from_points(Point::new(self.min.x, seam), self.max),
		)
	}

	/// Cuts the rectangle at a fraction of its width.
	///
	/// The rate is converted to an offset with
	/// [`Scalar::of_rate`] and passed to [`cut_x`](Self::cut_x), so a rate
	/// below 0 behaves like 0 and a rate above 1 like 1.
	///
	/// # Example
	///
	/// ```
	/// use planar::Rect;
	///
	/// let r = Rect::new(0, 0, 100, 50);
	/// let (got, rest) = r.cut_x_rate(0.3);
	/// assert_eq!(got, Rect::new(0, 0, 30, 50));
	/// assert_eq!(rest, Rect::new(30, 0, 100, 50));
	/// ```
	pub fn cut_x_rate(self, rate: f64) -> (Self, Self) {
		self.cut_x(self.width().of_rate(rate))
	}

	/// Cuts the rectangle at a fraction of its height.
	///
	/// See [`cut_x_rate`](Self::cut_x_rate).
	pub fn cut_y_rate(self, rate: f64) -> (Self, Self) {
		self.cut_y(self.height().of_rate(rate))
	}
}

fn clamp_extent<S: Scalar>(v: S, extent: S) -> S {
	if v < S::zero() {
		S::zero()
	} else if v > extent {
		extent
	} else {
		v
	}
}
