use alloc::vec;
use alloc::vec::Vec;

use crate::rect::Rect;
use crate::scalar::Scalar;

impl<S: Scalar> Rect<S> {
	/// Divides the rectangle into `n` adjacent parts along x, separated by
	/// `gap`, in ascending order.
	///
	/// `n == 0` returns an empty vector and `n == 1` returns the whole
	/// rectangle, ignoring the gap. A negative gap is treated as zero; it
	/// is not an overlap request (unlike [`repeat_x`](Self::repeat_x)).
	///
	/// The first `n - 1` parts share the available width
	/// `width() - (n - 1) * gap` equally (integral scalars truncate the
	/// per-part width; if the gaps alone exceed the width, the parts have
	/// zero width but their positions still advance by `gap`). The last
	/// part extends to exactly `max.x`, absorbing the division remainder,
	/// so the parts plus the internal gaps always reconstruct the original
	/// extent with no drift. Every part keeps the full height.
	///
	/// # Example
	///
	/// ```
	/// use planar::Rect;
	///
	/// let r = Rect::new(0, 0, 100, 50);
	/// let parts = r.split_x(3, 5);
	/// assert_eq!(parts[0], Rect::new(0, 0, 30, 50));
	/// assert_eq!(parts[1], Rect::new(35, 0, 65, 50));
	/// assert_eq!(parts[2], Rect::new(70, 0, 100, 50));
	/// ```
	pub fn split_x(self, n: usize, gap: S) -> Vec<Self> {
		if n == 0 {
			return Vec::new();
		}
		if n == 1 {
			return vec![self];
		}
		let gap = if gap < S::zero() { S::zero() } else { gap };
		let width = self.width();
		// More gaps than space leaves zero width for the parts themselves.
		let gaps = match S::from(n - 1) {
			Some(count) => count * gap,
			None => width,
		};
		let available = if gaps < width { width - gaps } else { S::zero() };
		let part = S::from(n).map_or_else(S::zero, |count| available / count);

		let mut parts = Vec::with_capacity(n);
		let mut x = self.min.x;
		for _ in 0..n - 1 {
			parts.push(Self::from_xywh(x, self.min.y, part, self.height()));
			x = x + part + gap;
		}
		let last = if self.max.x > x { self.max.x - x } else { S::zero() };
		parts.push(Self::from_xywh(x, self.min.y, last, self.height()));
		parts
	}

	/// Divides the rectangle into `n` adjacent parts along y, separated by
	/// `gap`, in ascending order.
	///
	/// The y-axis analogue of [`split_x`](Self::split_x): the last part
	/// extends to exactly `max.y` and every part keeps the full width.
	pub fn split_y(self, n: usize, gap: S) -> Vec<Self> {
		if n == 0 {
			return Vec::new();
		}
		if n == 1 {
			return vec![self];
		}
		let gap = if gap < S::zero() { S::zero() } else { gap };
		let height = self.height();
		let gaps = match S::from(n - 1) {
			Some(count) => count * gap,
			None => height,
		};
		let available = if gaps < height { height - gaps } else { S::zero() };
		let part = S::from(n).map_or_else(S::zero, |count| available / count);

		let mut parts = Vec::with_capacity(n);
		let mut y = self.min.y;
		for _ in 0..n - 1 {
			parts.push(Self::from_xywh(self.min.x, y, self.width(), part));
			y = y + part + gap;
		}
		let last = if self.max.y > y { self.max.y - y } else { S::zero() };
		parts.push(Self::from_xywh(self.min.x, y, self.width(), last));
		parts
	}
}
