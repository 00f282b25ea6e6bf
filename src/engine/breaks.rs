use std::ops::Range;

use crate::error::Error;
use crate::model::DocumentSpan;

/// Walk the span from offset 0 and emit one half-open character range per
/// page, covering `[0, len)` contiguously. `height_for_page` is the usable
/// vertical room for a given page index, already net of any footnote
/// reservation the caller wants applied.
///
/// Pure and deterministic: identical inputs give identical ranges, which
/// the convergence loop depends on to terminate.
pub(crate) fn compute_page_ranges(
    span: &dyn DocumentSpan,
    width: f32,
    height_for_page: impl Fn(usize) -> f32,
) -> Result<Vec<Range<usize>>, Error> {
    let len = span.len();
    // An empty document still occupies one (empty) page.
    if len == 0 {
        return Ok(vec![0..0]);
    }

    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut start = 0usize;
    while start < len {
        let max_height = height_for_page(ranges.len()).max(0.0);
        let end = span.break_location(start, max_height, width).min(len);
        if end <= start {
            // Oversized-unit policy requires the span to place at least
            // one unit per page; anything else would loop forever.
            return Err(Error::Span(format!(
                "break_location({start}, {max_height}, {width}) returned {end}"
            )));
        }
        ranges.push(start..end);
        start = end;
    }
    Ok(ranges)
}
