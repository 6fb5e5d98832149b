//! Classifier adapter.
//!
//! The extractor's canonical order is not the model's column order. The
//! adapter selects values by name in the order of the model's own schema, so
//! any model whose columns are a subset of the extractor's keys can be used.
//! A schema naming a column the extractor does not produce means the model
//! and extractor are out of sync; that is reported, never papered over.

mod label;

pub use label::{Label, Verdict, SAFE_CODE};

use crate::features::{self, FeatureVector};

/// An opaque fitted model.
pub trait Predictor {
    /// Ordered column names the model expects.
    fn feature_names(&self) -> &[String];

    /// Predicts the class code for one row laid out per [`Predictor::feature_names`].
    ///
    /// `row` must hold exactly one value per schema name, in schema order, as
    /// [`assemble`] builds it. Implementations may panic otherwise.
    fn predict(&self, row: &[f64]) -> i64;
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn feature_names(&self) -> &[String] {
        (**self).feature_names()
    }

    fn predict(&self, row: &[f64]) -> i64 {
        (**self).predict(row)
    }
}

/// The model schema and the extractor disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("model expects feature {name:?}, which the extractor does not produce")]
    MissingFeature { name: String },
}

/// Lays out `vector` in `schema` order.
pub fn assemble<S: AsRef<str>>(
    vector: &FeatureVector,
    schema: &[S],
) -> Result<Vec<f64>, SchemaError> {
    schema
        .iter()
        .map(|name| {
            let name = name.as_ref();
            vector
                .get(name)
                .map(f64::from)
                .ok_or_else(|| SchemaError::MissingFeature {
                    name: name.to_string(),
                })
        })
        .collect()
}

/// Schema names the extractor cannot fill.
pub fn unknown_features<S: AsRef<str>>(schema: &[S]) -> Vec<String> {
    schema
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.parse::<features::FeatureKey>().is_err())
        .map(str::to_string)
        .collect()
}

/// Wraps a loaded model. Built once per process and passed where needed.
#[derive(Debug)]
pub struct Classifier<P> {
    model: P,
}

impl<P: Predictor> Classifier<P> {
    pub fn new(model: P) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &P {
        &self.model
    }

    /// Fails up front when the model's schema cannot be satisfied.
    pub fn check_schema(&self) -> Result<(), SchemaError> {
        match unknown_features(self.model.feature_names()).into_iter().next() {
            Some(name) => Err(SchemaError::MissingFeature { name }),
            None => Ok(()),
        }
    }

    pub fn predict_code(&self, vector: &FeatureVector) -> Result<i64, SchemaError> {
        let row = assemble(vector, self.model.feature_names()).map_err(|e| {
            tracing::warn!(error = %e, "feature vector does not match model schema");
            e
        })?;
        Ok(self.model.predict(&row))
    }

    pub fn classify(&self, vector: &FeatureVector) -> Result<Label, SchemaError> {
        self.predict_code(vector).map(Label::from_code)
    }

    /// Extracts, predicts and labels one URL.
    pub fn verdict(&self, url: &str) -> Result<Verdict, SchemaError> {
        let code = self.predict_code(&features::extract(url))?;
        let label = Label::from_code(code);
        tracing::debug!(url, code, %label, "classified url");
        Ok(Verdict {
            url: url.to_string(),
            label,
            code,
        })
    }
}
