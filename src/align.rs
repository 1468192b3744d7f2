//! Margin arithmetic and per-axis alignment.
//!
//! [`Margins`] turns a container length into the usable interior span;
//! [`AxisAlignment`] picks where scaled content anchors within that span.
//! Both are pure, axis-agnostic computations — the width/height pairing
//! (left/right vs. bottom/top) happens in the thin specializations on
//! `Margins` and in the `fit` algorithm.

use thiserror::Error;

use crate::constraint::BoxSpecificationError;
use crate::diag::{DiagnosticSink, LayoutDiagnostic};

/// Layout computation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The margins along an axis exceed the container length.
    #[error("margins ({pre}, {post}) too wide for container {axis} {container_len}")]
    MarginsTooWide {
        /// Name of the axis the interior went negative on.
        axis: &'static str,
        container_len: i64,
        pre: i64,
        post: i64,
    },
    /// A box constraint violation surfaced during layout.
    #[error(transparent)]
    BoxSpec(#[from] BoxSpecificationError),
}

/// Margins around the inner content of a container box.
///
/// All four insets default to zero. `left`/`right` are the pre/post margins
/// of the width axis; `bottom`/`top` those of the height axis — the origin
/// sits at the bottom-left corner, PDF user space convention.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Margins {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
}

impl Margins {
    /// Margins of `n` on all four sides.
    pub const fn uniform(n: i64) -> Self {
        Self {
            left: n,
            right: n,
            top: n,
            bottom: n,
        }
    }

    /// Usable interior span along one axis: `container_len - pre - post`.
    ///
    /// `axis` only labels the error.
    pub fn effective_length(
        axis: &'static str,
        container_len: i64,
        pre: i64,
        post: i64,
    ) -> Result<i64, LayoutError> {
        let eff = container_len - pre - post;
        if eff < 0 {
            Err(LayoutError::MarginsTooWide {
                axis,
                container_len,
                pre,
                post,
            })
        } else {
            Ok(eff)
        }
    }

    /// Interior width after the left and right margins.
    pub fn effective_width(&self, width: i64) -> Result<i64, LayoutError> {
        Self::effective_length("width", width, self.left, self.right)
    }

    /// Interior height after the bottom and top margins.
    pub fn effective_height(&self, height: i64) -> Result<i64, LayoutError> {
        Self::effective_length("height", height, self.bottom, self.top)
    }
}

/// Where content anchors along one axis.
///
/// This is box alignment, not text alignment: `Min` is the low end of the
/// axis (left for width, bottom for height in PDF user space).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AxisAlignment {
    /// Anchor maximally towards the negative end of the axis.
    Min,
    /// Center content along the axis.
    Mid,
    /// Anchor maximally towards the positive end of the axis.
    Max,
}

impl AxisAlignment {
    /// The opposite alignment: `Min` ↔ `Max`, `Mid` maps to itself.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Mid => Self::Mid,
            Self::Max => Self::Min,
        }
    }

    /// Offset of content of length `inner_len` inside a container of length
    /// `container_len`, honoring the pre/post margins.
    ///
    /// `Min` anchors at `pre_margin`. `Max` leaves exactly `post_margin` of
    /// room behind the content. `Mid` centers within the margined interior;
    /// content too long to center there reports a
    /// [`LayoutDiagnostic::CenteringOverflow`] through `sink` and degrades
    /// to the `Min` position instead of failing — placing content
    /// sub-optimally beats not placing it at all.
    ///
    /// Fractional intermediates floor, matching the integer division used
    /// for centering.
    pub fn align(
        self,
        container_len: i64,
        inner_len: f64,
        pre_margin: i64,
        post_margin: i64,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<i64, LayoutError> {
        match self {
            Self::Min => Ok(pre_margin),
            Self::Max => Ok(((container_len - post_margin) as f64 - inner_len).floor() as i64),
            Self::Mid => {
                let effective_max =
                    Margins::effective_length("length", container_len, pre_margin, post_margin)?;
                if inner_len > effective_max as f64 {
                    sink.report(LayoutDiagnostic::CenteringOverflow {
                        container_len,
                        inner_len,
                        pre_margin,
                        post_margin,
                    });
                    return Ok(pre_margin);
                }
                Ok(pre_margin + ((effective_max as f64 - inner_len) / 2.0).floor() as i64)
            }
        }
    }
}
