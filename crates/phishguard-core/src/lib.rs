pub mod config;
pub mod logging;

pub mod checksum;
pub mod classifier;
pub mod features;
pub mod model;
pub mod url_model;

pub use classifier::{Classifier, Label, Predictor, SchemaError, Verdict};
pub use features::{extract, FeatureKey, FeatureValue, FeatureVector};
pub use model::{ForestModel, ModelError};
