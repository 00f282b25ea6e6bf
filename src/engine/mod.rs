mod breaks;
mod footnotes;

use crate::error::Error;
use crate::measure::TextMeasurer;
use crate::model::{DocumentSpan, FootnoteRecord, Layout, LayoutConfig, PageDescriptor};

/// Fixed-point pagination: reserving space for footnotes shrinks a page,
/// which moves its break earlier, which can change which footnotes fall on
/// it, which changes the reservation. The loop below resolves that cycle
/// by re-running break calculation under the reservations the previous
/// pass induced, until the layout stops moving or the iteration cap hits.
pub(crate) fn compute_layout(
    span: &dyn DocumentSpan,
    footnotes: &[FootnoteRecord],
    measurer: &dyn TextMeasurer,
    config: &LayoutConfig,
) -> Result<Layout, Error> {
    config.validate()?;

    let len = span.len();
    for fnote in footnotes {
        if fnote.anchor >= len {
            return Err(Error::Anchor {
                id: fnote.id,
                anchor: fnote.anchor,
                len,
            });
        }
    }

    let full_height = config.page.height;

    // Reservations used to produce the current candidate ranges. Pages
    // beyond the vector (the page count can grow as space shrinks) are
    // treated as unreserved. Iteration 1 runs with zero reservation
    // everywhere, so a document without footnotes converges immediately.
    let mut reservations: Vec<f32> = Vec::new();
    let mut ranges = Vec::new();
    let mut iterations = 0usize;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;
        ranges = breaks::compute_page_ranges(span, config.page.width, |page| {
            full_height - reservations.get(page).copied().unwrap_or(0.0)
        })?;

        let induced: Vec<f32> = ranges
            .iter()
            .map(|range| footnotes::reserve(footnotes, range, measurer, config).map(|r| r.height))
            .collect::<Result<_, _>>()?;

        log::debug!(
            "layout pass {iterations}: {} page(s), reservations {induced:?}",
            ranges.len()
        );

        // The ranges are a fixed point when the reservations they induce
        // are the ones they were computed under.
        if reservations_match(&reservations, &induced) {
            converged = true;
            break;
        }
        reservations = induced;
    }

    if !converged {
        log::warn!(
            "pagination did not converge within {} passes; using the last layout",
            config.max_iterations
        );
    }

    // Finalization: membership and reserved height are re-derived from the
    // final ranges rather than reused from loop state, so every page's
    // reservation exactly matches its character range.
    let mut pages = Vec::with_capacity(ranges.len());
    for (page_index, range) in ranges.iter().enumerate() {
        let r = footnotes::reserve(footnotes, range, measurer, config)?;
        pages.push(PageDescriptor {
            page_index,
            character_range: range.clone(),
            footnote_ids: r.ids,
            reserved_footnote_height: r.height,
            overflow: r.overflow,
        });
    }

    Ok(Layout {
        pages,
        iterations,
        converged,
    })
}

/// Exact comparison, zero-padded to the longer side: a page index past
/// either vector carries an implicit zero reservation. Exact f32 equality
/// is safe here because the measurer is required to be deterministic and
/// identical ranges re-measure to identical sums.
fn reservations_match(used: &[f32], induced: &[f32]) -> bool {
    let n = used.len().max(induced.len());
    (0..n).all(|i| {
        used.get(i).copied().unwrap_or(0.0) == induced.get(i).copied().unwrap_or(0.0)
    })
}
