//! Prediction labels.

use serde::Serialize;
use std::fmt;

/// Class code the model uses for legitimate sites.
pub const SAFE_CODE: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    Safe,
    Phishing,
}

impl Label {
    /// `1` is safe; every other code, including unexpected ones, is phishing.
    pub fn from_code(code: i64) -> Self {
        if code == SAFE_CODE {
            Label::Safe
        } else {
            Label::Phishing
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Safe => f.write_str("Safe"),
            Label::Phishing => f.write_str("Phishing"),
        }
    }
}

/// Outcome for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub url: String,
    pub label: Label,
    /// Raw class code returned by the model.
    pub code: i64,
}
