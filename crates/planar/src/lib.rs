//! Generic 2D layout arithmetic.
//!
//! `planar` is a small toolkit for carving a bounding region into sub-regions:
//! a [`Point`]/[`Rect`] value model plus a family of deterministic layout
//! operators (anchoring, alignment, cutting, proportional cutting, equal
//! splitting, and repeating). Everything is generic over the [`Scalar`]
//! coordinate representation, so the same algorithms serve both integer cell
//! grids and floating-point canvases.
//!
//! All operators are pure, total functions over `Copy` values: out-of-range
//! inputs are resolved by documented clamping rules, never by panicking, and
//! "no space left" surfaces as an empty rectangle or an empty sequence rather
//! than an error. See the [`layout`] module for the operator contracts.
//!
//! # Example
//!
//! ```
//! use planar::Rect;
//!
//! let screen = Rect::new(0, 0, 800, 600);
//! let (sidebar, content) = screen.cut_x(200);
//! assert_eq!(sidebar, Rect::new(0, 0, 200, 600));
//! assert_eq!(content, Rect::new(200, 0, 800, 600));
//!
//! let rows = content.split_y(3, 10);
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[0], Rect::new(200, 0, 800, 193));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod layout;
pub mod point;
pub mod rect;
pub mod scalar;

pub use self::layout::{HorizontalAlignment, ParseAlignmentError, VerticalAlignment};
pub use self::point::Point;
pub use self::rect::{Positions, Rect};
pub use self::scalar::Scalar;
