//! Model artifact fixtures for integration tests.

use phishguard_core::model::{ForestModel, Node, Tree};
use std::path::{Path, PathBuf};

/// A forest trained on a handful of lexical signals:
///
/// - tree 0: an IP host is phishing, otherwise safe;
/// - tree 1: an `@` is phishing, otherwise safe;
/// - tree 2: a URL longer than 75 characters is phishing, otherwise safe.
///
/// Each tree votes with full confidence, so the forest calls a URL phishing
/// once at least two of the three signals fire.
pub fn lexical_forest() -> ForestModel {
    fn stump(feature: usize, threshold: f64) -> Tree {
        Tree {
            nodes: vec![
                Node::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                Node::Leaf {
                    value: vec![0.0, 40.0],
                },
                Node::Leaf {
                    value: vec![40.0, 0.0],
                },
            ],
        }
    }

    ForestModel {
        // Deliberately not the extractor's canonical order.
        feature_names: vec![
            "having_At_Symbol".into(),
            "URL_Length".into(),
            "having_IP_Address".into(),
            "DNSRecord".into(),
        ],
        classes: vec![-1, 1],
        trees: vec![stump(2, 0.5), stump(0, 0.5), stump(1, 75.5)],
    }
}

pub fn write_model(dir: &Path, model: &ForestModel) -> PathBuf {
    let path = dir.join("phishing_forest.json");
    std::fs::write(&path, serde_json::to_vec_pretty(model).unwrap()).unwrap();
    path
}
