use crate::error::Error;

/// Text-measurement collaborator supplied by the host.
///
/// `measure_height` must be deterministic for fixed inputs: the
/// convergence loop relies on re-measuring the same footnote at the same
/// width producing the same scalar. The engine knows nothing about fonts
/// or styles; it only uses the returned height.
pub trait TextMeasurer {
    /// Rendered height in points of `text` laid out at `width`.
    fn measure_height(&self, text: &str, width: f32) -> Result<f32, Error>;
}

/// Infallible measurers can be plain closures; the engine still rejects
/// non-finite or negative results.
impl<F> TextMeasurer for F
where
    F: Fn(&str, f32) -> f32,
{
    fn measure_height(&self, text: &str, width: f32) -> Result<f32, Error> {
        Ok(self(text, width))
    }
}

/// Measure one footnote body and validate the scalar before it enters any
/// reservation arithmetic.
pub(crate) fn measured_height(
    measurer: &dyn TextMeasurer,
    footnote_id: u32,
    body: &str,
    width: f32,
) -> Result<f32, Error> {
    let h = measurer.measure_height(body, width)?;
    if !h.is_finite() || h < 0.0 {
        return Err(Error::Measurement(format!(
            "measurer returned {h} for footnote {footnote_id}"
        )));
    }
    Ok(h)
}
