use super::classifier::ResultRules;
use super::loader::ConfigLoadError;
use super::ordered::OrderedEntries;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Signed per-dimension adjustments carried by an answer option.
pub type ScoreDelta = BTreeMap<String, i64>;

/// Complete quiz definition: dimensions, questions and result rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDocument {
    /// Dimension key to display label, in declaration order.
    pub dimensions: OrderedEntries<String>,
    pub questions: Vec<Question>,
    pub results: ResultRules,
}

impl QuizDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigLoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn has_dimension(&self, key: &str) -> bool {
        self.dimensions.get(key).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scores: Option<ScoreDelta>,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, scores: ScoreDelta) -> Self {
        Self {
            text: text.into(),
            scores: Some(scores),
        }
    }

    /// The option's delta; an omitted or null `scores` is an empty delta.
    pub fn delta(&self) -> ScoreDelta {
        self.scores.clone().unwrap_or_default()
    }
}
