//! Footnote-aware pagination.
//!
//! Page breaks and footnote blocks are mutually dependent: a footnote
//! anchored on a page costs vertical space at the page bottom, which moves
//! the break earlier, which can move the footnote to another page. This
//! crate resolves the cycle with a bounded fixed-point iteration and emits
//! per-page geometry (character range, footnote set, reserved height).
//!
//! The computation is pure and synchronous over immutable snapshots. Call
//! it off the UI thread, discard the result if the document changed
//! underneath, and debounce rapid edits before calling; the engine holds
//! no state between invocations.

mod engine;
mod error;
mod measure;
mod model;

pub use error::Error;
pub use measure::TextMeasurer;
pub use model::{
    DocumentSpan, FootnoteOverflow, FootnoteRecord, Layout, LayoutConfig, PageBox, PageDescriptor,
    SeparatorSpacing,
};

use std::time::Instant;

/// Paginate `span` with `footnotes`, reserving space for each page's
/// footnote block. See [`LayoutConfig`] for page geometry, separator and
/// iteration-cap knobs.
///
/// Non-convergence within the iteration cap is not an error: the last
/// layout is returned with [`Layout::converged`] false and the caller
/// decides whether to flag it.
pub fn compute_layout(
    span: &dyn DocumentSpan,
    footnotes: &[FootnoteRecord],
    measurer: &dyn TextMeasurer,
    config: &LayoutConfig,
) -> Result<Layout, Error> {
    let t0 = Instant::now();

    let layout = engine::compute_layout(span, footnotes, measurer, config)?;

    log::info!(
        "Layout: {} page(s), {} footnote(s), {} pass(es){} in {:.2}ms",
        layout.pages.len(),
        footnotes.len(),
        layout.iterations,
        if layout.converged { "" } else { " (cap hit)" },
        t0.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(layout)
}
