//! Feature values.

/// A single feature value.
///
/// `Placeholder` marks signals that would need a page fetch or an external
/// lookup and are never computed. The model sees the carried number either
/// way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureValue {
    Measured(i64),
    Placeholder(i64),
}

impl FeatureValue {
    pub fn flag(condition: bool) -> Self {
        FeatureValue::Measured(i64::from(condition))
    }

    /// Numeric value fed to the model.
    pub fn get(self) -> i64 {
        match self {
            FeatureValue::Measured(v) | FeatureValue::Placeholder(v) => v,
        }
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self, FeatureValue::Placeholder(_))
    }
}

impl From<FeatureValue> for f64 {
    fn from(value: FeatureValue) -> Self {
        value.get() as f64
    }
}
