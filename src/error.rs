use std::fmt;

/// Errors surfaced by a single layout call. None of these persist across
/// calls; the engine holds no state between invocations.
///
/// Non-convergence is deliberately NOT represented here: a layout that
/// hits the iteration cap is still a usable result and is reported through
/// [`crate::Layout::converged`] instead.
#[derive(Debug)]
pub enum Error {
    /// Invalid configuration (zero/negative page box, negative separator,
    /// iteration cap of zero).
    Config(String),
    /// A footnote is anchored outside `[0, len)` of the document span.
    /// This indicates an upstream data-integrity bug (e.g. a footnote
    /// anchored to deleted text), so it fails fast rather than clamping.
    Anchor { id: u32, anchor: usize, len: usize },
    /// The text-measurement collaborator failed or returned a non-finite
    /// or negative height. No fallback height is substituted; that would
    /// corrupt the convergence invariant.
    Measurement(String),
    /// The document span violated its contract (a break location that
    /// made no forward progress).
    Span(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "invalid layout configuration: {msg}"),
            Error::Anchor { id, anchor, len } => write!(
                f,
                "footnote {id} anchored at {anchor}, outside document span [0, {len})"
            ),
            Error::Measurement(msg) => write!(f, "footnote measurement failed: {msg}"),
            Error::Span(msg) => write!(f, "document span contract violation: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
