use crate::record::Dataset;

pub const INCHES_TO_METERS: f64 = 0.0254;
pub const POUNDS_TO_KILOGRAMS: f64 = 0.45359237;

#[derive(Debug, Default)]
pub struct Transformer;

impl Transformer {
    pub fn new() -> Self {
        Self
    }

    /// Rewrites every row in place: height inches→meters, weight
    /// pounds→kilograms, both rounded to 2 decimals. Names are untouched.
    /// Not idempotent — a second invocation double-converts, so the pipeline
    /// calls this exactly once per run.
    pub fn convert_units(&self, dataset: &mut Dataset) {
        for record in dataset.iter_mut() {
            record.height = round2(record.height * INCHES_TO_METERS);
            record.weight = round2(record.weight * POUNDS_TO_KILOGRAMS);
        }
    }
}

/// Rounds to 2 decimal places, half away from zero (`f64::round` semantics).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
