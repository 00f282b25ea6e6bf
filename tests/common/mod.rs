#![allow(dead_code)]

use std::collections::HashMap;

use folio::{DocumentSpan, Error, Layout, TextMeasurer};

/// Deterministic reference span: a fixed number of characters per line and
/// a fixed line height, so expected break positions can be computed by
/// hand. The content width is ignored (the grid is pre-wrapped).
pub struct GridSpan {
    pub len: usize,
    pub chars_per_line: usize,
    pub line_height: f32,
}

impl GridSpan {
    pub fn new(len: usize, chars_per_line: usize, line_height: f32) -> Self {
        Self {
            len,
            chars_per_line,
            line_height,
        }
    }

    /// Characters that fit on a full page of the given height.
    pub fn page_capacity(&self, page_height: f32) -> usize {
        let lines = (page_height / self.line_height).floor() as usize;
        lines.max(1) * self.chars_per_line
    }
}

impl DocumentSpan for GridSpan {
    fn len(&self) -> usize {
        self.len
    }

    fn break_location(&self, from: usize, max_height: f32, _width: f32) -> usize {
        // A line is the measurable unit: at least one is always placed,
        // even when it does not fit (accepted overflow).
        let lines = (max_height / self.line_height).floor() as usize;
        (from + lines.max(1) * self.chars_per_line).min(self.len)
    }
}

/// Measurer returning scripted heights keyed by footnote body text.
pub struct TableMeasurer {
    heights: HashMap<String, f32>,
    pub default_height: f32,
}

impl TableMeasurer {
    pub fn new(entries: &[(&str, f32)]) -> Self {
        Self {
            heights: entries
                .iter()
                .map(|(body, h)| (body.to_string(), *h))
                .collect(),
            default_height: 20.0,
        }
    }
}

impl TextMeasurer for TableMeasurer {
    fn measure_height(&self, text: &str, _width: f32) -> Result<f32, Error> {
        Ok(self
            .heights
            .get(text)
            .copied()
            .unwrap_or(self.default_height))
    }
}

/// Measurer that always fails, for error-propagation tests.
pub struct FailingMeasurer;

impl TextMeasurer for FailingMeasurer {
    fn measure_height(&self, _text: &str, _width: f32) -> Result<f32, Error> {
        Err(Error::Measurement("text system unavailable".into()))
    }
}

/// Assert the coverage invariant: contiguous, non-overlapping ranges whose
/// union is exactly `[0, len)`, with sequential page indices.
pub fn assert_coverage(layout: &Layout, len: usize) {
    assert!(!layout.pages.is_empty(), "layout has no pages");
    let mut expected_start = 0usize;
    for (i, page) in layout.pages.iter().enumerate() {
        assert_eq!(page.page_index, i, "page index out of sequence");
        assert_eq!(
            page.character_range.start, expected_start,
            "page {} does not start where page {} ended",
            page.page_index,
            page.page_index.wrapping_sub(1)
        );
        assert!(
            page.character_range.end >= page.character_range.start,
            "page {} has an inverted range",
            page.page_index
        );
        expected_start = page.character_range.end;
    }
    assert_eq!(
        expected_start, len,
        "pages do not cover the full document span"
    );
}

/// Assert every footnote id appears on exactly one page.
pub fn assert_exclusive(layout: &Layout, footnote_ids: &[u32]) {
    for id in footnote_ids {
        let owners: Vec<usize> = layout
            .pages
            .iter()
            .filter(|p| p.footnote_ids.contains(id))
            .map(|p| p.page_index)
            .collect();
        assert_eq!(
            owners.len(),
            1,
            "footnote {id} appears on pages {owners:?}, expected exactly one"
        );
    }
}
