use super::super::ordered::OrderedEntries;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_PREFIX_THRESHOLD: i64 = 5;
pub(crate) const DEFAULT_DESCRIPTION_TEMPLATE: &str = "Your dominant traits are {top} and {second}.";
pub(crate) const DEFAULT_MISSING_DIMENSION_LABEL: &str = "nothing in particular";

/// Ordered rule tables consumed by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rivalry: Option<Rivalry>,
    #[serde(default)]
    pub combos: Vec<ComboRule>,
    #[serde(default)]
    pub nouns: Vec<NounRule>,
    #[serde(default)]
    pub prefixes: Vec<PrefixRule>,
    pub fallback: FallbackRule,
    #[serde(default = "default_prefix_threshold")]
    pub prefix_threshold: i64,
    #[serde(default = "default_prefix_separator")]
    pub prefix_separator: String,
    #[serde(default = "default_description_template")]
    pub description_template: String,
    #[serde(default = "default_missing_dimension_label")]
    pub missing_dimension_label: String,
}

impl ResultRules {
    /// Rules with only a fallback; every classification yields it.
    pub fn with_fallback(fallback: FallbackRule) -> Self {
        Self {
            rivalry: None,
            combos: Vec::new(),
            nouns: Vec::new(),
            prefixes: Vec::new(),
            fallback,
            prefix_threshold: DEFAULT_PREFIX_THRESHOLD,
            prefix_separator: default_prefix_separator(),
            description_template: default_description_template(),
            missing_dimension_label: default_missing_dimension_label(),
        }
    }
}

fn default_prefix_threshold() -> i64 {
    DEFAULT_PREFIX_THRESHOLD
}

fn default_prefix_separator() -> String {
    " ".to_string()
}

fn default_description_template() -> String {
    DEFAULT_DESCRIPTION_TEMPLATE.to_string()
}

fn default_missing_dimension_label() -> String {
    DEFAULT_MISSING_DIMENSION_LABEL.to_string()
}

/// The opposing pair behind the hater and love/hate predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rivalry {
    pub affinity: String,
    pub hostility: String,
    pub twisted_threshold: i64,
}

/// Compound rule; every condition must hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboRule {
    #[serde(default)]
    pub conditions: OrderedEntries<i64>,
    #[serde(default)]
    pub exclude_hater: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_score_below: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NounRule {
    pub condition: NounCondition,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Condition variants understood by the generic noun matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NounCondition {
    Custom {
        custom: String,
    },
    Threshold {
        dimension: String,
        min: i64,
        #[serde(default)]
        exclude_hater: bool,
        #[serde(default)]
        require_hater: bool,
    },
    All {
        all: OrderedEntries<i64>,
        #[serde(default)]
        exclude_hater: bool,
        #[serde(default)]
        require_hater: bool,
    },
}

impl NounCondition {
    pub fn threshold(dimension: impl Into<String>, min: i64) -> Self {
        Self::Threshold {
            dimension: dimension.into(),
            min,
            exclude_hater: false,
            require_hater: false,
        }
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom {
            custom: name.into(),
        }
    }
}

/// Named predicates a noun rule may reference through `custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomPredicate {
    HighLoveHate,
    Hater,
}

impl CustomPredicate {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "high_love_hate" | "love_hate" | "twisted" => Some(Self::HighLoveHate),
            "hater" => Some(Self::Hater),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    pub dim: String,
    pub text: String,
    #[serde(default)]
    pub exclude_hater: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackRule {
    pub noun: String,
    pub emoji: String,
    pub desc: String,
}
