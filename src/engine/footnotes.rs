use std::ops::Range;

use crate::error::Error;
use crate::measure::{TextMeasurer, measured_height};
use crate::model::{FootnoteOverflow, FootnoteRecord, LayoutConfig, SeparatorSpacing};

/// Reservation derived for one candidate page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PageReservation {
    /// Footnote ids anchored on the page, anchor-ascending.
    pub(crate) ids: Vec<u32>,
    /// Total vertical space to reserve, separator included.
    pub(crate) height: f32,
    /// True when a footnote was clamped to the page height.
    pub(crate) overflow: bool,
}

impl PageReservation {
    pub(crate) fn empty() -> Self {
        Self {
            ids: Vec::new(),
            height: 0.0,
            overflow: false,
        }
    }
}

/// Footnotes whose anchor falls inside `range`, anchor-ascending (ties
/// broken by id so the output is deterministic regardless of input order).
///
/// Half-open convention: an anchor exactly at `range.end` belongs to the
/// NEXT page; one at `range.start` belongs to this page. A boundary anchor
/// is therefore attributed to exactly one page, never both.
pub(crate) fn footnotes_in_range<'a>(
    footnotes: &'a [FootnoteRecord],
    range: &Range<usize>,
) -> Vec<&'a FootnoteRecord> {
    let mut on_page: Vec<&FootnoteRecord> = footnotes
        .iter()
        .filter(|fnote| range.contains(&fnote.anchor))
        .collect();
    on_page.sort_by_key(|fnote| (fnote.anchor, fnote.id));
    on_page
}

/// Measure the footnotes anchored in `range` and total the space their
/// block needs at the bottom of the page.
///
/// A page with no footnotes reserves exactly 0: no separator, full page
/// height for text. Heights sum linearly; the separator constant is added
/// once per page or once per footnote per [`SeparatorSpacing`].
pub(crate) fn reserve(
    footnotes: &[FootnoteRecord],
    range: &Range<usize>,
    measurer: &dyn TextMeasurer,
    config: &LayoutConfig,
) -> Result<PageReservation, Error> {
    let on_page = footnotes_in_range(footnotes, range);
    if on_page.is_empty() {
        return Ok(PageReservation::empty());
    }

    let mut total = 0.0f32;
    let mut overflow = false;
    for fnote in &on_page {
        let mut h = measured_height(measurer, fnote.id, &fnote.body, config.page.width)?;
        if h > config.page.height {
            match config.overflow {
                FootnoteOverflow::Clamp => {
                    log::warn!(
                        "footnote {} measured {h:.1}pt, taller than the {:.1}pt page; clamping",
                        fnote.id,
                        config.page.height
                    );
                    h = config.page.height;
                    overflow = true;
                }
                FootnoteOverflow::Allow => {}
            }
        }
        total += h;
    }

    total += match config.separator_spacing {
        SeparatorSpacing::PerPage => config.separator_height,
        SeparatorSpacing::PerFootnote => config.separator_height * on_page.len() as f32,
    };

    Ok(PageReservation {
        ids: on_page.iter().map(|fnote| fnote.id).collect(),
        height: total,
        overflow,
    })
}
