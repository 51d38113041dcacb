/// Numeric bounds, authored either as `[min, max]` or as a bare minimum.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum RangeSpec {
    MinMax(f64, f64),
    Min(f64),
}

impl RangeSpec {
    pub(crate) fn bounds(self) -> (f64, Option<f64>) {
        match self {
            RangeSpec::MinMax(min, max) => (min, Some(max)),
            RangeSpec::Min(min) => (min, None),
        }
    }
}
