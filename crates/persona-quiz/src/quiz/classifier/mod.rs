mod policy;
mod rules;
mod signals;

pub use rules::{
    ComboRule, CustomPredicate, FallbackRule, NounCondition, NounRule, PrefixRule, ResultRules,
    Rivalry,
};

use super::accumulator::{DimensionScore, ScoreSheet};
use serde::Serialize;
use signals::{read_signals, ScoreSignals};

/// Which rule table produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultSource {
    Combo { index: usize },
    Noun { index: usize },
    Fallback,
}

/// Labelled outcome handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub prefix: String,
    pub noun: String,
    pub emoji: String,
    pub description: String,
    pub title: String,
    pub source: ResultSource,
}

/// Classifier bound to one set of result rules.
#[derive(Debug, Clone)]
pub struct ResultClassifier {
    rules: ResultRules,
}

impl ResultClassifier {
    pub fn new(rules: ResultRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ResultRules {
        &self.rules
    }

    pub fn classify(&self, scores: &ScoreSheet) -> ClassificationResult {
        classify(scores, &self.rules)
    }
}

/// Pure classification of a score sheet.
///
/// Combos win over nouns, nouns over the fallback. The prefix is only derived
/// for noun results; combos carry a complete name and the fallback is used
/// verbatim.
pub fn classify(scores: &ScoreSheet, rules: &ResultRules) -> ClassificationResult {
    let signals = read_signals(scores, rules);

    if let Some((index, combo)) = policy::first_combo(rules, scores, &signals) {
        let description = if combo.desc.trim().is_empty() {
            synthesize_description(rules, &signals)
        } else {
            combo.desc.clone()
        };
        return assemble(
            rules,
            String::new(),
            &combo.name,
            &combo.emoji,
            description,
            ResultSource::Combo { index },
        );
    }

    match policy::first_noun(rules, scores, &signals) {
        Some((index, noun)) => {
            let prefix = policy::select_prefix(rules, scores, &signals)
                .map(|prefix| prefix.text.clone())
                .unwrap_or_default();
            let description = match &noun.desc {
                Some(desc) if !desc.trim().is_empty() => desc.clone(),
                _ => synthesize_description(rules, &signals),
            };
            assemble(
                rules,
                prefix,
                &noun.name,
                &noun.emoji,
                description,
                ResultSource::Noun { index },
            )
        }
        None => assemble(
            rules,
            String::new(),
            &rules.fallback.noun,
            &rules.fallback.emoji,
            rules.fallback.desc.clone(),
            ResultSource::Fallback,
        ),
    }
}

fn assemble(
    rules: &ResultRules,
    prefix: String,
    noun: &str,
    emoji: &str,
    description: String,
    source: ResultSource,
) -> ClassificationResult {
    let emoji = if emoji.trim().is_empty() {
        rules.fallback.emoji.clone()
    } else {
        emoji.to_string()
    };
    let title = if prefix.is_empty() {
        noun.to_string()
    } else {
        format!("{prefix}{}{noun}", rules.prefix_separator)
    };

    ClassificationResult {
        prefix,
        noun: noun.to_string(),
        emoji,
        description,
        title,
        source,
    }
}

fn synthesize_description(rules: &ResultRules, signals: &ScoreSignals<'_>) -> String {
    let label = |dimension: Option<&DimensionScore>| {
        dimension
            .map(|dimension| dimension.label.clone())
            .unwrap_or_else(|| rules.missing_dimension_label.clone())
    };

    rules
        .description_template
        .replace("{top}", &label(signals.top))
        .replace("{second}", &label(signals.second))
}
