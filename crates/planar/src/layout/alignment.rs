use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::point::Point;
use crate::rect::Rect;
use crate::scalar::Scalar;

/// Horizontal edge or center of a rectangle, as a named anchor rate.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
	/// The left edge, rate 0.
	#[default]
	Left,
	/// The horizontal center, rate 0.5.
	Center,
	/// The right edge, rate 1.
	Right,
}

/// Vertical edge or center of a rectangle, as a named anchor rate.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
	/// The top edge, rate 0.
	#[default]
	Top,
	/// The vertical center, rate 0.5.
	Center,
	/// The bottom edge, rate 1.
	Bottom,
}

/// Error returned when an alignment name fails to parse.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown alignment: {0}")]
pub struct ParseAlignmentError(pub String);

impl HorizontalAlignment {
	/// The fractional anchor rate this alignment names.
	pub const fn rate(self) -> f64 {
		match self {
			Self::Left => 0.0,
			Self::Center => 0.5,
			Self::Right => 1.0,
		}
	}
}

impl VerticalAlignment {
	/// The fractional anchor rate this alignment names.
	pub const fn rate(self) -> f64 {
		match self {
			Self::Top => 0.0,
			Self::Center => 0.5,
			Self::Bottom => 1.0,
		}
	}
}

impl fmt::Display for HorizontalAlignment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Left => write!(f, "Left"),
			Self::Center => write!(f, "Center"),
			Self::Right => write!(f, "Right"),
		}
	}
}

impl FromStr for HorizontalAlignment {
	type Err = ParseAlignmentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Left" => Ok(Self::Left),
			"Center" => Ok(Self::Center),
			"Right" => Ok(Self::Right),
			_ => Err(ParseAlignmentError(s.into())),
		}
	}
}

impl fmt::Display for VerticalAlignment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Top => write!(f, "Top"),
			Self::Center => write!(f, "Center"),
			Self::Bottom => write!(f, "Bottom"),
		}
	}
}

impl FromStr for VerticalAlignment {
	type Err = ParseAlignmentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Top" => Ok(Self::Top),
			"Center" => Ok(Self::Center),
			"Bottom" => Ok(Self::Bottom),
			_ => Err(ParseAlignmentError(s.into())),
		}
	}
}

impl<S: Scalar> Rect<S> {
	/// Returns the point at the named anchor position.
	///
	/// Shorthand for [`anchor`](Self::anchor) with the alignments' rates.
	///
	/// # Example
	///
	/// ```
	/// use planar::{HorizontalAlignment, Point, Rect, VerticalAlignment};
	///
	/// let r = Rect::new(0, 0, 100, 50);
	/// let p = r.anchor_aligned(HorizontalAlignment::Right, VerticalAlignment::Bottom);
	/// assert_eq!(p, Point::new(100, 50));
	/// ```
	pub fn anchor_aligned(
		self,
		horizontal: HorizontalAlignment,
		vertical: VerticalAlignment,
	) -> Point<S> {
		self.anchor(horizontal.rate(), vertical.rate())
	}
}

impl<S: Scalar> Point<S> {
	/// Returns a rectangle of `size`'s dimensions with `self` at the named
	/// anchor position.
	///
	/// Shorthand for [`align`](Self::align) with the alignments' rates.
	pub fn align_to(
		self,
		size: Rect<S>,
		horizontal: HorizontalAlignment,
		vertical: VerticalAlignment,
	) -> Rect<S> {
		self.align(size, horizontal.rate(), vertical.rate())
	}
}
