use alloc::vec::Vec;

use crate::rect::Rect;
use crate::scalar::Scalar;

impl<S: Scalar> Rect<S> {
	/// Places `n` copies of the rectangle consecutively along x, with `gap`
	/// between consecutive copies.
	///
	/// Unlike [`split_x`](Self::split_x) the copy size is fixed at the
	/// input's own size, and the overall extent grows with `n`. Returns
	/// the placed copies in ascending order together with their bounding
	/// rectangle. `n == 0` returns an empty vector and the canonical
	/// [`zero`](Self::zero) rectangle.
	///
	/// The gap is not clamped: a negative gap produces deliberately
	/// overlapping tiles. This asymmetry with `split_x`'s
	/// neutralized-negative-gap policy is intentional.
	///
	/// # Example
	///
	/// ```
	/// use planar::Rect;
	///
	/// let tile = Rect::new(0, 0, 20, 30);
	/// let (tiles, bounds) = tile.repeat_x(3, 5);
	/// assert_eq!(tiles[1], Rect::new(25, 0, 45, 30));
	/// assert_eq!(bounds, Rect::new(0, 0, 70, 30));
	/// ```
	pub fn repeat_x(self, n: usize, gap: S) -> (Vec<Self>, Self) {
		if n == 0 {
			return (Vec::new(), Self::zero());
		}
		let dx = self.width();
		let mut tiles = Vec::with_capacity(n);
		let mut x = self.min.x;
		for _ in 0..n {
			tiles.push(Self::from_xywh(x, self.min.y, dx, self.height()));
			x = x + dx + gap;
		}
		// After the loop the cursor sits one gap past the last tile.
		let bounds = Self::new(self.min.x, self.min.y, x - gap, self.max.y);
		(tiles, bounds)
	}

	/// Places `n` copies of the rectangle consecutively along y, with `gap`
	/// between consecutive copies.
	///
	/// The y-axis analogue of [`repeat_x`](Self::repeat_x), including the
	/// unclamped gap.
	pub fn repeat_y(self, n: usize, gap: S) -> (Vec<Self>, Self) {
		if n == 0 {
			return (Vec::new(), Self::zero());
		}
		let dy = self.height();
		let mut tiles = Vec::with_capacity(n);
		let mut y = self.min.y;
		for _ in 0..n {
			tiles.push(Self::from_xywh(self.min.x, y, self.width(), dy));
			y = y + dy + gap;
		}
		let bounds = Self::new(self.min.x, self.min.y, self.max.x, y - gap);
		(tiles, bounds)
	}
}
