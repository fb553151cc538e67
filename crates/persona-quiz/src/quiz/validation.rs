use super::classifier::{CustomPredicate, NounCondition};
use super::document::QuizDocument;
use serde::Serialize;
use std::fmt;

/// Non-fatal configuration finding. The referenced key is ignored at use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigWarning {
    UnknownDimension { context: String, key: String },
    UnknownPredicate { context: String, name: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownDimension { context, key } => {
                write!(f, "{context} references undeclared dimension '{key}'")
            }
            ConfigWarning::UnknownPredicate { context, name } => {
                write!(f, "{context} references unknown predicate '{name}'")
            }
        }
    }
}

/// Document defects that make a quiz unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigViolation {
    #[error("dimension '{0}' is declared more than once")]
    DuplicateDimension(String),
    #[error("question {question} has no options")]
    QuestionWithoutOptions { question: usize },
    #[error("combo {combo} lists dimension '{key}' more than once")]
    DuplicateComboCondition { combo: usize, key: String },
}

/// Check a parsed document; fatal defects fail the whole load.
pub fn validate(document: &QuizDocument) -> Result<Vec<ConfigWarning>, ConfigViolation> {
    if let Some(key) = document.dimensions.duplicate_key() {
        return Err(ConfigViolation::DuplicateDimension(key.to_string()));
    }
    if let Some(question) = document.questions.iter().position(|q| q.options.is_empty()) {
        return Err(ConfigViolation::QuestionWithoutOptions { question });
    }
    for (combo, rule) in document.results.combos.iter().enumerate() {
        if let Some(key) = rule.conditions.duplicate_key() {
            return Err(ConfigViolation::DuplicateComboCondition {
                combo,
                key: key.to_string(),
            });
        }
    }

    let mut warnings = Vec::new();
    let mut check = |context: String, key: &str| {
        if !document.has_dimension(key) {
            warnings.push(ConfigWarning::UnknownDimension {
                context,
                key: key.to_string(),
            });
        }
    };

    for (q, question) in document.questions.iter().enumerate() {
        for (o, option) in question.options.iter().enumerate() {
            for key in option.delta().keys() {
                check(format!("question {q} option {o}"), key);
            }
        }
    }

    let results = &document.results;
    if let Some(rivalry) = &results.rivalry {
        check("rivalry".to_string(), &rivalry.affinity);
        check("rivalry".to_string(), &rivalry.hostility);
    }
    for (index, combo) in results.combos.iter().enumerate() {
        for key in combo.conditions.keys() {
            check(format!("combo {index} ({})", combo.name), key);
        }
    }
    for (index, noun) in results.nouns.iter().enumerate() {
        let context = format!("noun {index} ({})", noun.name);
        match &noun.condition {
            NounCondition::Threshold { dimension, .. } => check(context, dimension),
            NounCondition::All { all, .. } => {
                for key in all.keys() {
                    check(context.clone(), key);
                }
            }
            NounCondition::Custom { .. } => {}
        }
    }
    for (index, prefix) in results.prefixes.iter().enumerate() {
        check(format!("prefix {index} ({})", prefix.text), &prefix.dim);
    }

    for (index, noun) in results.nouns.iter().enumerate() {
        if let NounCondition::Custom { custom } = &noun.condition {
            if CustomPredicate::from_name(custom).is_none() {
                warnings.push(ConfigWarning::UnknownPredicate {
                    context: format!("noun {index} ({})", noun.name),
                    name: custom.clone(),
                });
            }
        }
    }

    Ok(warnings)
}
