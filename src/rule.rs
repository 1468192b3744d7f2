//! Scaling policies, layout rules, and the composed `fit` algorithm.
//!
//! A [`LayoutRule`] bundles two [`AxisAlignment`]s, [`Margins`] and a
//! [`ScalingPolicy`]; [`fit`](LayoutRule::fit) turns a (possibly
//! incomplete) [`BoxConstraints`] plus the content's natural size into a
//! [`Positioning`], auto-sizing any container dimension that is still open.

use crate::align::{AxisAlignment, LayoutError, Margins};
use crate::constraint::BoxConstraints;
use crate::diag::{DiagnosticSink, LogSink};

/// How natural content size maps to the final scale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ScalingPolicy {
    /// Never scale content.
    NoScaling,
    /// Scale each axis independently to exactly fill the margined interior.
    /// Aspect ratio is not preserved.
    StretchFill,
    /// Uniform scale until the tighter axis touches the interior edge,
    /// preserving aspect ratio. May enlarge or shrink.
    StretchToFit,
    /// Like [`StretchToFit`](Self::StretchToFit), but never enlarges past
    /// natural size.
    #[default]
    ShrinkToFit,
}

/// Alignment, margins, and scaling policy for placing fixed-size content
/// inside a container box.
///
/// Immutable value; use the `with_*` methods for modified copies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct LayoutRule {
    /// Horizontal alignment.
    pub x_align: AxisAlignment,
    /// Vertical alignment.
    pub y_align: AxisAlignment,
    /// Container (inner) margins. Defaults to all zeroes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub margins: Margins,
    /// Inner content scaling. Defaults to [`ScalingPolicy::ShrinkToFit`].
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "inner_content_scaling")
    )]
    pub scaling: ScalingPolicy,
}

impl LayoutRule {
    /// Rule with the given alignments, zero margins, and shrink-to-fit
    /// scaling.
    pub const fn new(x_align: AxisAlignment, y_align: AxisAlignment) -> Self {
        Self {
            x_align,
            y_align,
            margins: Margins::uniform(0),
            scaling: ScalingPolicy::ShrinkToFit,
        }
    }

    /// Copy of this rule with different margins.
    pub const fn with_margins(self, margins: Margins) -> Self {
        Self {
            x_align: self.x_align,
            y_align: self.y_align,
            margins,
            scaling: self.scaling,
        }
    }

    /// Copy of this rule with a different scaling policy.
    pub const fn with_scaling(self, scaling: ScalingPolicy) -> Self {
        Self {
            x_align: self.x_align,
            y_align: self.y_align,
            margins: self.margins,
            scaling,
        }
    }

    /// Place content with natural size `inner_nat_width` ×
    /// `inner_nat_height` inside `container`.
    ///
    /// Scale factors are chosen first: when the policy allows scaling and
    /// both container dimensions are resolved, the content scales relative
    /// to the margined interior. Each axis then aligns independently; a
    /// still-open container dimension is instead resolved to content plus
    /// margins (writing back into `container`) with the content anchored at
    /// the pre margin. `fit` both consumes and can complete a partially
    /// specified container.
    ///
    /// Diagnostics go to the `log` crate; use
    /// [`fit_with`](Self::fit_with) to capture them instead.
    pub fn fit(
        &self,
        container: &mut BoxConstraints,
        inner_nat_width: i64,
        inner_nat_height: i64,
    ) -> Result<Positioning, LayoutError> {
        self.fit_with(container, inner_nat_width, inner_nat_height, &mut LogSink)
    }

    /// Like [`fit`](Self::fit), with an explicit diagnostic sink.
    pub fn fit_with(
        &self,
        container: &mut BoxConstraints,
        inner_nat_width: i64,
        inner_nat_height: i64,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Positioning, LayoutError> {
        let margins = self.margins;

        let mut x_scale = 1.0;
        let mut y_scale = 1.0;
        if self.scaling != ScalingPolicy::NoScaling
            && container.width_defined()
            && container.height_defined()
        {
            let eff_width = margins.effective_width(container.width()?)?;
            let eff_height = margins.effective_height(container.height()?)?;

            x_scale = eff_width as f64 / inner_nat_width as f64;
            y_scale = eff_height as f64 / inner_nat_height as f64;
            match self.scaling {
                ScalingPolicy::StretchToFit => {
                    let uniform = x_scale.min(y_scale);
                    x_scale = uniform;
                    y_scale = uniform;
                }
                ScalingPolicy::ShrinkToFit => {
                    // Stretch-to-fit that can only scale down, never up.
                    let uniform = x_scale.min(y_scale).min(1.0);
                    x_scale = uniform;
                    y_scale = uniform;
                }
                // Everything else keeps the per-axis scales (stretch-fill).
                _ => {}
            }
        }

        let x_pos = align_width(
            self.x_align,
            container,
            inner_nat_width,
            x_scale,
            margins.left,
            margins.right,
            sink,
        )?;
        let y_pos = align_height(
            self.y_align,
            container,
            inner_nat_height,
            y_scale,
            margins.bottom,
            margins.top,
            sink,
        )?;
        Ok(Positioning {
            x_pos,
            y_pos,
            x_scale,
            y_scale,
        })
    }
}

/// Align along the width axis, resolving the container width if it is
/// still open.
///
/// When the width is open, scale selection was skipped (it needs both
/// dimensions), so `scale` is 1 and the natural width is exact.
fn align_width(
    alignment: AxisAlignment,
    container: &mut BoxConstraints,
    inner_nat: i64,
    scale: f64,
    pre_margin: i64,
    post_margin: i64,
    sink: &mut dyn DiagnosticSink,
) -> Result<i64, LayoutError> {
    if container.width_defined() {
        alignment.align(
            container.width()?,
            inner_nat as f64 * scale,
            pre_margin,
            post_margin,
            sink,
        )
    } else {
        container.set_width(inner_nat + pre_margin + post_margin)?;
        Ok(pre_margin)
    }
}

/// Height-axis counterpart of [`align_width`]; pre is the bottom margin,
/// post the top.
fn align_height(
    alignment: AxisAlignment,
    container: &mut BoxConstraints,
    inner_nat: i64,
    scale: f64,
    pre_margin: i64,
    post_margin: i64,
    sink: &mut dyn DiagnosticSink,
) -> Result<i64, LayoutError> {
    if container.height_defined() {
        alignment.align(
            container.height()?,
            inner_nat as f64 * scale,
            pre_margin,
            post_margin,
            sink,
        )
    } else {
        container.set_height(inner_nat + pre_margin + post_margin)?;
        Ok(pre_margin)
    }
}

/// Final placement of content inside its container: a translation plus
/// per-axis scale factors.
///
/// Produced by [`LayoutRule::fit`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Positioning {
    /// Horizontal offset of the content's lower-left corner.
    pub x_pos: i64,
    /// Vertical offset of the content's lower-left corner.
    pub y_pos: i64,
    /// Horizontal scale factor.
    pub x_scale: f64,
    /// Vertical scale factor.
    pub y_scale: f64,
}

impl Positioning {
    /// The placement as a PDF `cm` (concatenate matrix) operator:
    /// `"<x_scale> 0 0 <y_scale> <x_pos> <y_pos> cm"`.
    ///
    /// Numbers use C `printf` `%g` formatting. The output is ASCII and is
    /// written verbatim into a content stream by the consumer.
    pub fn to_transform_op(&self) -> String {
        format!(
            "{} 0 0 {} {} {} cm",
            fmt_general(self.x_scale),
            fmt_general(self.y_scale),
            fmt_general(self.x_pos as f64),
            fmt_general(self.y_pos as f64),
        )
    }
}

/// Format a number the way C `printf("%g", v)` does: six significant
/// digits; fixed notation with trailing zeros and a dangling decimal point
/// trimmed while the decimal exponent lies in `[-4, 6)`, scientific
/// notation with a signed two-digit exponent otherwise.
fn fmt_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    // `{:.5e}` rounds to six significant digits and exposes the decimal
    // exponent, including any bump the rounding itself caused.
    let sci = format!("{value:.5e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..6).contains(&exponent) {
        let precision = (5 - exponent).max(0) as usize;
        trim_fraction(format!("{value:.precision$}"))
    } else {
        let digits = trim_fraction(mantissa.to_owned());
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{digits}e{sign}{:02}", exponent.abs())
    }
}

/// Drop trailing fractional zeros and a dangling decimal point.
fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
