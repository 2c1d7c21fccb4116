//! The numeric domain shared by every geometry and layout operation.

use num_traits::{Num, NumCast, ToPrimitive};

/// An ordered numeric coordinate representation.
///
/// `Scalar` is the single capability set the whole crate is written against:
/// ordered arithmetic plus ratio-based construction. It is blanket-implemented
/// for every type that satisfies the bounds, so `i32`, `u16`, `i64`, `f32`,
/// `f64` and friends all qualify without any per-type code.
///
/// # Example
///
/// ```
/// use planar::Scalar;
///
/// assert_eq!(100_i32.of_rate(0.3), 30);
/// assert_eq!(100.0_f64.of_rate(0.25), 25.0);
/// ```
pub trait Scalar: Num + NumCast + ToPrimitive + PartialOrd + Copy {
	/// Returns the given fraction of `self`.
	///
	/// The product is computed in `f64` and converted back to `Self`.
	/// Integral scalars truncate toward zero; floating scalars keep the
	/// ordinary product. A product that cannot be represented in `Self`
	/// (for example a negative result for an unsigned scalar) collapses
	/// to zero.
	fn of_rate(self, rate: f64) -> Self {
		let scaled = rate * self.to_f64().unwrap_or(0.0);
		NumCast::from(scaled).unwrap_or_else(Self::zero)
	}
}

impl<T: Num + NumCast + ToPrimitive + PartialOrd + Copy> Scalar for T {}

#[cfg(test)]
mod tests;
