//! Lexical URL features for the phishing classifier.
//!
//! [`extract`] turns any string into a [`FeatureVector`] holding every
//! [`FeatureKey`]. Content and reputation signals (favicon, anchors, page
//! rank, domain age, ...) cannot be derived from the URL alone; they are
//! [`FeatureValue::Placeholder`]s with the fixed values the classifier was
//! trained with.

mod extract;
mod key;
mod value;
mod vector;

pub use extract::{extract, ABNORMAL_LENGTH, SHORTENING_SERVICES};
pub use key::{FeatureKey, UnknownFeature};
pub use value::FeatureValue;
pub use vector::FeatureVector;
