//! Partially-specified box constraints with one-shot resolution.
//!
//! A [`BoxConstraints`] starts out with any subset of {width, height,
//! aspect ratio}. Whenever two of the three become known, the third is
//! derived; each dimension is write-once after that. Aspect ratios are
//! exact arbitrary-precision rationals, so repeated width → height → width
//! derivations never drift.
//!
//! # Example
//!
//! ```
//! use boxfit::{BoxConstraints, ratio};
//!
//! let mut container = BoxConstraints::from_aspect_ratio(ratio(2, 1))?;
//! container.set_height(100)?;
//!
//! assert_eq!(container.width()?, 200);
//! assert!(container.fully_specified());
//! # Ok::<(), boxfit::BoxSpecificationError>(())
//! ```

use core::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};
use thiserror::Error;

/// Exact aspect ratio, stored as width over height.
pub type AspectRatio = BigRational;

/// Shorthand for an exact aspect ratio from integer parts.
///
/// # Panics
///
/// Panics if `height` is zero.
pub fn ratio(width: i64, height: i64) -> AspectRatio {
    AspectRatio::new(BigInt::from(width), BigInt::from(height))
}

/// The three fields a box constraint can resolve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoxField {
    Width,
    Height,
    AspectRatio,
}

impl fmt::Display for BoxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::AspectRatio => "aspect ratio",
        })
    }
}

/// A box constraint was over- or under-specified, written twice, or given
/// an unusable value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoxSpecificationError {
    /// Width, height and aspect ratio were all given at construction.
    /// Rejected even when the three values are mutually consistent.
    #[error("box width, height and aspect ratio cannot all be specified")]
    OverSpecified,
    /// A field was read before it was resolved.
    #[error("box {0} is not resolved")]
    Unresolved(BoxField),
    /// A dimension was assigned after it had already been resolved.
    #[error("box {0} is already resolved")]
    AlreadyResolved(BoxField),
    /// A dimension was given as zero or negative.
    #[error("box {0} must be positive (got {1})")]
    NonPositive(BoxField, i64),
    /// The aspect ratio was given as zero or negative.
    #[error("box aspect ratio must be positive")]
    NonPositiveRatio,
    /// A derived dimension does not fit in an integer dimension.
    #[error("derived box {0} is out of range")]
    OutOfRange(BoxField),
}

/// A box of potentially variable width and height.
///
/// Among other uses, this can produce a variably sized box with a fixed
/// aspect ratio: leave both dimensions open, fix the ratio, and let a
/// layout pass fill in one dimension — the other follows.
///
/// Dimensions still open can be resolved exactly once through
/// [`set_width`](Self::set_width) / [`set_height`](Self::set_height).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxConstraints {
    width: Option<i64>,
    height: Option<i64>,
    aspect_ratio: Option<AspectRatio>,
    fully_specified: bool,
}

impl BoxConstraints {
    /// A fully unresolved box.
    pub fn new() -> Self {
        Self::default()
    }

    /// A box with both dimensions known. The aspect ratio is derived
    /// exactly, and the box is fully specified.
    pub fn from_extents(width: i64, height: i64) -> Result<Self, BoxSpecificationError> {
        Self::from_parts(Some(width), Some(height), None)
    }

    /// A box constrained only by its aspect ratio.
    pub fn from_aspect_ratio(aspect_ratio: AspectRatio) -> Result<Self, BoxSpecificationError> {
        Self::from_parts(None, None, Some(aspect_ratio))
    }

    /// General constructor over any subset of the three fields.
    ///
    /// Giving all three is an error regardless of numeric consistency. A
    /// ratio plus one dimension derives the other dimension immediately but
    /// leaves [`fully_specified`](Self::fully_specified) unset; only the
    /// two-dimension path and post-construction writes flip it.
    pub fn from_parts(
        width: Option<i64>,
        height: Option<i64>,
        aspect_ratio: Option<AspectRatio>,
    ) -> Result<Self, BoxSpecificationError> {
        if let Some(w) = width
            && w <= 0
        {
            return Err(BoxSpecificationError::NonPositive(BoxField::Width, w));
        }
        if let Some(h) = height
            && h <= 0
        {
            return Err(BoxSpecificationError::NonPositive(BoxField::Height, h));
        }
        if let Some(ar) = &aspect_ratio
            && !ar.is_positive()
        {
            return Err(BoxSpecificationError::NonPositiveRatio);
        }

        let mut this = Self {
            width,
            height,
            aspect_ratio: None,
            fully_specified: false,
        };
        match (width, height, aspect_ratio) {
            (None, None, None) => {}
            (Some(_), Some(_), Some(_)) => return Err(BoxSpecificationError::OverSpecified),
            (Some(w), Some(h), None) => {
                this.aspect_ratio = Some(ratio(w, h));
                this.fully_specified = true;
            }
            (_, _, Some(ar)) => {
                // Derive the missing dimension right away. This path does
                // not mark the box fully specified.
                if let Some(h) = height {
                    this.width = Some(mul_trunc(h, &ar)?);
                } else if let Some(w) = width {
                    this.height = Some(div_trunc(w, &ar)?);
                }
                this.aspect_ratio = Some(ar);
            }
            (_, _, None) => {}
        }
        Ok(this)
    }

    /// The resolved width.
    pub fn width(&self) -> Result<i64, BoxSpecificationError> {
        self.width
            .ok_or(BoxSpecificationError::Unresolved(BoxField::Width))
    }

    /// The resolved height.
    pub fn height(&self) -> Result<i64, BoxSpecificationError> {
        self.height
            .ok_or(BoxSpecificationError::Unresolved(BoxField::Height))
    }

    /// The resolved aspect ratio (width over height).
    pub fn aspect_ratio(&self) -> Result<&AspectRatio, BoxSpecificationError> {
        self.aspect_ratio
            .as_ref()
            .ok_or(BoxSpecificationError::Unresolved(BoxField::AspectRatio))
    }

    /// Whether the box currently has a well-defined width.
    pub fn width_defined(&self) -> bool {
        self.width.is_some()
    }

    /// Whether the box currently has a well-defined height.
    pub fn height_defined(&self) -> bool {
        self.height.is_some()
    }

    /// Whether the box currently has a well-defined aspect ratio.
    pub fn aspect_ratio_defined(&self) -> bool {
        self.aspect_ratio.is_some()
    }

    /// Whether width, height and aspect ratio are all numerically known.
    pub fn fully_specified(&self) -> bool {
        self.fully_specified
    }

    /// Resolve the width. Fails if it was already resolved.
    pub fn set_width(&mut self, width: i64) -> Result<(), BoxSpecificationError> {
        if self.width.is_some() {
            return Err(BoxSpecificationError::AlreadyResolved(BoxField::Width));
        }
        if width <= 0 {
            return Err(BoxSpecificationError::NonPositive(BoxField::Width, width));
        }
        self.width = Some(width);
        self.recalculate()
    }

    /// Resolve the height. Fails if it was already resolved.
    pub fn set_height(&mut self, height: i64) -> Result<(), BoxSpecificationError> {
        if self.height.is_some() {
            return Err(BoxSpecificationError::AlreadyResolved(BoxField::Height));
        }
        if height <= 0 {
            return Err(BoxSpecificationError::NonPositive(BoxField::Height, height));
        }
        self.height = Some(height);
        self.recalculate()
    }

    /// Derive whatever the last write made derivable. Invoked after every
    /// successful write.
    fn recalculate(&mut self) -> Result<(), BoxSpecificationError> {
        if let (Some(w), Some(h)) = (self.width, self.height) {
            self.aspect_ratio = Some(ratio(w, h));
            self.fully_specified = true;
        } else if let Some(ar) = self.aspect_ratio.clone() {
            if let Some(h) = self.height {
                self.width = Some(mul_trunc(h, &ar)?);
                self.fully_specified = true;
            } else if let Some(w) = self.width {
                self.height = Some(div_trunc(w, &ar)?);
                self.fully_specified = true;
            }
        }
        Ok(())
    }
}

/// `len * ratio`, truncated toward zero. Derives a width from a height.
fn mul_trunc(len: i64, ratio: &AspectRatio) -> Result<i64, BoxSpecificationError> {
    let exact = AspectRatio::from_integer(BigInt::from(len)) * ratio;
    exact
        .to_integer()
        .to_i64()
        .ok_or(BoxSpecificationError::OutOfRange(BoxField::Width))
}

/// `len / ratio`, truncated toward zero. Derives a height from a width.
fn div_trunc(len: i64, ratio: &AspectRatio) -> Result<i64, BoxSpecificationError> {
    let exact = AspectRatio::from_integer(BigInt::from(len)) / ratio;
    exact
        .to_integer()
        .to_i64()
        .ok_or(BoxSpecificationError::OutOfRange(BoxField::Height))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn unconstrained_box_resolves_nothing() {
        let bc = BoxConstraints::new();
        assert_eq!(
            bc.width(),
            Err(BoxSpecificationError::Unresolved(BoxField::Width))
        );
        assert_eq!(
            bc.height(),
            Err(BoxSpecificationError::Unresolved(BoxField::Height))
        );
        assert_eq!(
            bc.aspect_ratio().unwrap_err(),
            BoxSpecificationError::Unresolved(BoxField::AspectRatio)
        );
        assert!(!bc.fully_specified());
    }

    #[test]
    fn extents_derive_exact_ratio() {
        let bc = BoxConstraints::from_extents(1920, 1080).unwrap();
        assert_eq!(bc.aspect_ratio().unwrap(), &ratio(16, 9));
        assert!(bc.fully_specified());
    }

    #[test]
    fn overspecified_fails_even_when_consistent() {
        let err = BoxConstraints::from_parts(Some(10), Some(5), Some(ratio(2, 1))).unwrap_err();
        assert_eq!(err, BoxSpecificationError::OverSpecified);
    }

    #[test]
    fn ratio_plus_height_derives_width() {
        let bc = BoxConstraints::from_parts(None, Some(100), Some(ratio(2, 1))).unwrap();
        assert_eq!(bc.width().unwrap(), 200);
        assert_eq!(bc.height().unwrap(), 100);
        // Deliberate asymmetry: both dimensions are known, but the box does
        // not count as fully specified on this construction path.
        assert!(!bc.fully_specified());
    }

    #[test]
    fn ratio_plus_width_derives_height() {
        let bc = BoxConstraints::from_parts(Some(200), None, Some(ratio(2, 1))).unwrap();
        assert_eq!(bc.height().unwrap(), 100);
        assert!(!bc.fully_specified());
    }

    #[test]
    fn ratio_derivation_truncates_toward_zero() {
        // 10 * 2/3 = 6.67 → 6
        let bc = BoxConstraints::from_parts(None, Some(10), Some(ratio(2, 3))).unwrap();
        assert_eq!(bc.width().unwrap(), 6);
        // 10 / (3/2) = 6.67 → 6
        let bc = BoxConstraints::from_parts(Some(10), None, Some(ratio(3, 2))).unwrap();
        assert_eq!(bc.height().unwrap(), 6);
    }

    #[test]
    fn ratio_alone_resolves_no_dimension() {
        let bc = BoxConstraints::from_aspect_ratio(ratio(4, 3)).unwrap();
        assert!(!bc.width_defined());
        assert!(!bc.height_defined());
        assert!(bc.aspect_ratio_defined());
    }

    // ── write-once dimensions ───────────────────────────────────────────

    #[test]
    fn set_width_resolves_then_locks() {
        let mut bc = BoxConstraints::new();
        bc.set_width(10).unwrap();
        assert_eq!(bc.width().unwrap(), 10);
        assert_eq!(
            bc.set_width(20),
            Err(BoxSpecificationError::AlreadyResolved(BoxField::Width))
        );
    }

    #[test]
    fn second_write_completes_the_box() {
        let mut bc = BoxConstraints::new();
        bc.set_width(200).unwrap();
        assert!(!bc.fully_specified());
        bc.set_height(100).unwrap();
        assert_eq!(bc.aspect_ratio().unwrap(), &ratio(2, 1));
        assert!(bc.fully_specified());
    }

    #[test]
    fn write_with_known_ratio_derives_other_dimension() {
        let mut bc = BoxConstraints::from_aspect_ratio(ratio(2, 1)).unwrap();
        bc.set_height(100).unwrap();
        assert_eq!(bc.width().unwrap(), 200);
        assert!(bc.fully_specified());

        let mut bc = BoxConstraints::from_aspect_ratio(ratio(2, 1)).unwrap();
        bc.set_width(100).unwrap();
        assert_eq!(bc.height().unwrap(), 50);
        assert!(bc.fully_specified());
    }

    #[test]
    fn derived_dimension_is_locked_too() {
        let mut bc = BoxConstraints::from_parts(None, Some(100), Some(ratio(2, 1))).unwrap();
        assert_eq!(
            bc.set_width(200),
            Err(BoxSpecificationError::AlreadyResolved(BoxField::Width))
        );
    }

    // ── exactness ───────────────────────────────────────────────────────

    #[test]
    fn repeated_derivation_does_not_drift() {
        // 1/3 is inexact in binary floating point; the rational path must
        // reproduce it bit-for-bit across a chain of derivations.
        let ar = ratio(1, 3);
        let mut bc = BoxConstraints::from_aspect_ratio(ar.clone()).unwrap();
        bc.set_height(3000).unwrap();
        assert_eq!(bc.width().unwrap(), 1000);
        assert_eq!(bc.aspect_ratio().unwrap(), &ar);

        let derived = BoxConstraints::from_extents(bc.width().unwrap(), bc.height().unwrap())
            .unwrap()
            .aspect_ratio()
            .unwrap()
            .clone();
        assert_eq!(derived, ar);
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn zero_and_negative_extents_rejected() {
        assert_eq!(
            BoxConstraints::from_extents(0, 5),
            Err(BoxSpecificationError::NonPositive(BoxField::Width, 0))
        );
        assert_eq!(
            BoxConstraints::from_extents(5, -1),
            Err(BoxSpecificationError::NonPositive(BoxField::Height, -1))
        );
        let mut bc = BoxConstraints::new();
        assert_eq!(
            bc.set_height(0),
            Err(BoxSpecificationError::NonPositive(BoxField::Height, 0))
        );
    }

    #[test]
    fn non_positive_ratio_rejected() {
        assert_eq!(
            BoxConstraints::from_aspect_ratio(ratio(-1, 2)),
            Err(BoxSpecificationError::NonPositiveRatio)
        );
        assert_eq!(
            BoxConstraints::from_aspect_ratio(ratio(0, 2)),
            Err(BoxSpecificationError::NonPositiveRatio)
        );
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            BoxSpecificationError::Unresolved(BoxField::AspectRatio).to_string(),
            "box aspect ratio is not resolved"
        );
        assert_eq!(
            BoxSpecificationError::NonPositive(BoxField::Width, -3).to_string(),
            "box width must be positive (got -3)"
        );
    }
}
