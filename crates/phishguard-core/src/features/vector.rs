//! The extracted feature vector.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::key::FeatureKey;
use super::value::FeatureValue;

/// Every feature key mapped to a value, in canonical order.
///
/// Built only by [`super::extract`]; every key is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    values: [FeatureValue; FeatureKey::COUNT],
}

impl FeatureVector {
    pub(super) fn from_values(values: [FeatureValue; FeatureKey::COUNT]) -> Self {
        Self { values }
    }

    pub fn value(&self, key: FeatureKey) -> FeatureValue {
        self.values[key.index()]
    }

    /// Looks up a feature by its model column name.
    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        name.parse::<FeatureKey>().ok().map(|key| self.value(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, FeatureValue)> + '_ {
        FeatureKey::ALL.into_iter().zip(self.values.iter().copied())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        FeatureKey::ALL.into_iter().map(FeatureKey::name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FeatureVector {
    /// A JSON object keyed by column name, in canonical order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.name(), &value.get())?;
        }
        map.end()
    }
}
