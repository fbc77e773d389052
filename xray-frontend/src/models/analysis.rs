use crate::error::BackendError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body returned by `POST /analyze-xray`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub prediction: String,
    pub confidence: f64,
    pub probabilities: HashMap<String, f64>,
    pub medical_report: String,
}

impl AnalysisResult {
    /// Probability for one row of the score table.
    pub fn probability(&self, class: ScoreClass) -> Result<f64, BackendError> {
        self.probabilities
            .get(class.response_key())
            .copied()
            .ok_or(BackendError::MissingScore(class.response_key()))
    }
}

/// Score table: the classes shown on the page and the keys the inference
/// backend uses for them in `probabilities`. Response keys are
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreClass {
    Pneumonia,
    Covid,
    Normal,
}

impl ScoreClass {
    pub const ALL: [ScoreClass; 3] = [ScoreClass::Pneumonia, ScoreClass::Covid, ScoreClass::Normal];

    /// Local key, also the prefix of the score element (`<key>-confidence`).
    pub fn key(self) -> &'static str {
        match self {
            ScoreClass::Pneumonia => "pneumonia",
            ScoreClass::Covid => "covid",
            ScoreClass::Normal => "normal",
        }
    }

    pub fn response_key(self) -> &'static str {
        match self {
            ScoreClass::Pneumonia => "Pneumonia",
            ScoreClass::Covid => "Covid",
            ScoreClass::Normal => "Normal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreClass::Pneumonia => "Pneumonia",
            ScoreClass::Covid => "COVID-19",
            ScoreClass::Normal => "Normal",
        }
    }
}

/// `0.8` -> `"80.00%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
