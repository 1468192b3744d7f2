//! Non-fatal layout diagnostics and the sink they are delivered through.
//!
//! The engine never logs on its own: every diagnostic goes through an
//! injected [`DiagnosticSink`], so callers decide where events end up and
//! tests can capture them deterministically. [`LogSink`] forwards to the
//! `log` crate and is what the convenience entry points use.

use core::fmt;

/// A non-fatal condition encountered while computing a layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutDiagnostic {
    /// Centered content did not fit between the margins. The post margin
    /// was ignored and the content was anchored at the pre margin instead.
    CenteringOverflow {
        /// Container length along the affected axis.
        container_len: i64,
        /// Scaled content length that failed to fit.
        inner_len: f64,
        /// Margin at the low end of the axis.
        pre_margin: i64,
        /// Margin at the high end of the axis.
        post_margin: i64,
    },
}

impl fmt::Display for LayoutDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CenteringOverflow {
                container_len,
                inner_len,
                pre_margin,
                post_margin,
            } => write!(
                f,
                "content box width/height {inner_len} is too wide for container \
                 size {container_len} with margins ({pre_margin}, {post_margin}); \
                 post margin will be ignored"
            ),
        }
    }
}

/// Receiver for non-fatal diagnostics.
pub trait DiagnosticSink {
    /// Deliver one diagnostic event.
    fn report(&mut self, diagnostic: LayoutDiagnostic);
}

/// Sink that forwards every diagnostic to the `log` crate at warn level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: LayoutDiagnostic) {
        log::warn!("{diagnostic}");
    }
}

impl DiagnosticSink for Vec<LayoutDiagnostic> {
    fn report(&mut self, diagnostic: LayoutDiagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let first = LayoutDiagnostic::CenteringOverflow {
            container_len: 100,
            inner_len: 95.0,
            pre_margin: 5,
            post_margin: 5,
        };
        let second = LayoutDiagnostic::CenteringOverflow {
            container_len: 50,
            inner_len: 60.0,
            pre_margin: 0,
            post_margin: 0,
        };
        let mut sink: Vec<LayoutDiagnostic> = Vec::new();
        sink.report(first);
        sink.report(second);
        assert_eq!(sink, vec![first, second]);
    }

    #[test]
    fn centering_overflow_message() {
        let diag = LayoutDiagnostic::CenteringOverflow {
            container_len: 100,
            inner_len: 95.0,
            pre_margin: 5,
            post_margin: 5,
        };
        assert_eq!(
            diag.to_string(),
            "content box width/height 95 is too wide for container size 100 \
             with margins (5, 5); post margin will be ignored"
        );
    }
}
