//! Box constraint resolution and margin-aware content placement.
//!
//! Computes where a fixed-size piece of content lands inside a container
//! box whose width, height, or aspect ratio may be only partially known.
//! Pure arithmetic — no rendering, no text metrics, no I/O.
//!
//! A [`BoxConstraints`] starts with any subset of {width, height, aspect
//! ratio}; once two are known the third is derived exactly. A
//! [`LayoutRule`] combines per-axis alignment, [`Margins`], and a
//! [`ScalingPolicy`]; its [`fit`](LayoutRule::fit) picks scale factors and
//! offsets, auto-sizing open container dimensions along the way. The
//! resulting [`Positioning`] serializes to the PDF `cm` operator consumed
//! by a content-stream writer.
//!
//! # Example
//!
//! ```
//! use boxfit::{AxisAlignment, BoxConstraints, LayoutRule};
//!
//! let mut container = BoxConstraints::from_extents(200, 100)?;
//! let rule = LayoutRule::new(AxisAlignment::Mid, AxisAlignment::Mid);
//! let pos = rule.fit(&mut container, 100, 100)?;
//!
//! assert_eq!((pos.x_pos, pos.y_pos), (50, 0));
//! assert_eq!(pos.to_transform_op(), "1 0 0 1 50 0 cm");
//! # Ok::<(), boxfit::LayoutError>(())
//! ```
//!
//! # Modules
//!
//! - [`constraint`] — partially-specified boxes with one-shot resolution
//! - [`align`] — margins and per-axis alignment
//! - [`rule`] — scaling policies, layout rules, and the `fit` algorithm
//! - [`diag`] — non-fatal diagnostics and the sinks that receive them

#![forbid(unsafe_code)]

pub mod align;
pub mod constraint;
pub mod diag;
pub mod rule;

pub use align::{AxisAlignment, LayoutError, Margins};
pub use constraint::{AspectRatio, BoxConstraints, BoxField, BoxSpecificationError, ratio};
pub use diag::{DiagnosticSink, LayoutDiagnostic, LogSink};
pub use rule::{LayoutRule, Positioning, ScalingPolicy};
