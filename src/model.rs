use std::ops::Range;

/// A footnote as seen by the layout engine: an opaque id, the character
/// offset its reference mark occupies in the document span, and the body
/// text handed to the measurement collaborator. Supplied fresh per layout
/// call and never mutated by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct FootnoteRecord {
    pub id: u32,
    pub anchor: usize,
    pub body: String,
}

impl FootnoteRecord {
    pub fn new(id: u32, anchor: usize, body: impl Into<String>) -> Self {
        Self {
            id,
            anchor,
            body: body.into(),
        }
    }
}

/// Content box of a page, in points. Margins, headers and footers are the
/// host's concern; the engine only sees the space text may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageBox {
    pub width: f32,
    pub height: f32,
}

impl PageBox {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Whether the footnote separator height is charged once per page or once
/// per footnote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeparatorSpacing {
    PerPage,
    PerFootnote,
}

/// Policy for a single footnote measured taller than the page itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FootnoteOverflow {
    /// Cap the footnote's reserved contribution at the page height and
    /// mark the page via [`PageDescriptor::overflow`].
    Clamp,
    /// Reserve the raw measured height; the page's text area may collapse
    /// to nothing and the renderer must cope.
    Allow,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub page: PageBox,
    /// Fixed separator/margin height above the footnote block, in points.
    pub separator_height: f32,
    pub separator_spacing: SeparatorSpacing,
    pub overflow: FootnoteOverflow,
    /// Hard cap on break-calculation passes. Hitting it is not an error;
    /// the last result is returned with `converged == false`.
    pub max_iterations: usize,
}

impl LayoutConfig {
    pub fn new(page: PageBox) -> Self {
        Self {
            page,
            separator_height: 0.0,
            separator_spacing: SeparatorSpacing::PerPage,
            overflow: FootnoteOverflow::Clamp,
            max_iterations: 5,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), crate::Error> {
        if !(self.page.width.is_finite() && self.page.width > 0.0) {
            return Err(crate::Error::Config(format!(
                "page width must be positive, got {}",
                self.page.width
            )));
        }
        if !(self.page.height.is_finite() && self.page.height > 0.0) {
            return Err(crate::Error::Config(format!(
                "page height must be positive, got {}",
                self.page.height
            )));
        }
        if !(self.separator_height.is_finite() && self.separator_height >= 0.0) {
            return Err(crate::Error::Config(format!(
                "separator height must be non-negative, got {}",
                self.separator_height
            )));
        }
        if self.max_iterations == 0 {
            return Err(crate::Error::Config(
                "iteration cap must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// One laid-out page: which slice of the document it carries, which
/// footnotes are anchored on it (anchor-ascending), and how much vertical
/// space is reserved for their block.
#[derive(Clone, Debug, PartialEq)]
pub struct PageDescriptor {
    pub page_index: usize,
    pub character_range: Range<usize>,
    pub footnote_ids: Vec<u32>,
    pub reserved_footnote_height: f32,
    /// True when a footnote on this page measured taller than the page
    /// and was clamped (see [`FootnoteOverflow::Clamp`]).
    pub overflow: bool,
}

/// Result of one layout call: the page sequence plus convergence
/// diagnostics. `iterations` counts break-calculation passes; callers may
/// log or flag `!converged` as a quality signal but should still render
/// the pages.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub pages: Vec<PageDescriptor>,
    pub iterations: usize,
    pub converged: bool,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page carrying the given character offset, if any.
    pub fn page_of_offset(&self, offset: usize) -> Option<&PageDescriptor> {
        self.pages
            .iter()
            .find(|p| p.character_range.contains(&offset))
    }
}

/// Read-only view of the document's linear text, backed in the host by
/// its text framework's layout machinery. The engine never sees fonts,
/// styles or glyphs, only offsets and the break positions the span
/// reports for a given amount of vertical room.
pub trait DocumentSpan {
    /// Total character length of the document.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// End offset (exclusive) of the content that fits when laying out
    /// from `from` with `max_height` points of vertical room at the given
    /// content width.
    ///
    /// Contract: when `from < len()` the result must be greater than
    /// `from`, even if the first measurable unit alone is taller than
    /// `max_height`: an oversized unit is never split mid-unit; it is
    /// placed whole and overflows the page. Must be deterministic for
    /// identical arguments.
    fn break_location(&self, from: usize, max_height: f32, width: f32) -> usize;
}
