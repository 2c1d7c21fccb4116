//! Deterministic layout operators over [`Rect`](crate::Rect).
//!
//! Each operator is a pure function from a rectangle (plus a scalar offset,
//! a fractional rate, or a count) to one or more sub-rectangles. A caller
//! holds a rectangle describing available space, applies an operator, and
//! receives sub-regions; no operator retains state.
//!
//! - [`anchor`](crate::Rect::anchor) / [`align`](crate::Point::align):
//!   fractional positioning of points within rectangles and rectangles
//!   around points.
//! - [`cut_x`](crate::Rect::cut_x) / [`cut_y`](crate::Rect::cut_y) and the
//!   [`cut_x_rate`](crate::Rect::cut_x_rate) /
//!   [`cut_y_rate`](crate::Rect::cut_y_rate) variants: split into exactly
//!   two parts at a clamped offset.
//! - [`split_x`](crate::Rect::split_x) / [`split_y`](crate::Rect::split_y):
//!   divide into `n` near-equal parts with uniform gaps; the last part
//!   absorbs the remainder so the parts plus gaps reconstruct the input
//!   exactly.
//! - [`repeat_x`](crate::Rect::repeat_x) / [`repeat_y`](crate::Rect::repeat_y):
//!   tile the rectangle's own size `n` times with a gap.
//!
//! Every operator is total: negative offsets, oversized rates, and zero
//! counts resolve to empty rectangles or empty sequences by policy, never
//! to a panic. One asymmetry is intentional and preserved: `split_*`
//! neutralizes a negative gap to zero, while `repeat_*` accepts a negative
//! gap and produces overlapping tiles.

pub use self::alignment::{HorizontalAlignment, ParseAlignmentError, VerticalAlignment};

mod alignment;
mod anchor;
mod cut;
mod repeat;
mod split;

#[cfg(test)]
mod tests;
