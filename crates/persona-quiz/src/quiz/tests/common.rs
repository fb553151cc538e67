use crate::quiz::classifier::{
    ComboRule, FallbackRule, NounCondition, NounRule, PrefixRule, ResultRules, Rivalry,
};
use crate::quiz::document::{AnswerOption, Question, QuizDocument, ScoreDelta};
use crate::quiz::ordered::OrderedEntries;
use crate::quiz::ScoreSheet;

pub(super) const SAMPLE_QUIZ: &str = include_str!("../../../data/sample_quiz.json");

pub(super) fn sample_document() -> QuizDocument {
    crate::quiz::parse_document(SAMPLE_QUIZ).expect("sample quiz parses")
}

pub(super) fn labels(keys: &[&str]) -> OrderedEntries<String> {
    keys.iter()
        .map(|key| (*key, format!("{} label", key)))
        .collect()
}

pub(super) fn sheet(keys: &[&str], values: &[(&str, i64)]) -> ScoreSheet {
    let mut sheet = ScoreSheet::from_labels(&labels(keys));
    for (key, value) in values {
        assert!(sheet.set(key, *value), "{key} is declared");
    }
    sheet
}

pub(super) fn delta(entries: &[(&str, i64)]) -> ScoreDelta {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

pub(super) fn fallback() -> FallbackRule {
    FallbackRule {
        noun: "N".to_string(),
        emoji: "❓".to_string(),
        desc: "d".to_string(),
    }
}

pub(super) fn fan_rivalry(threshold: i64) -> Rivalry {
    Rivalry {
        affinity: "fan".to_string(),
        hostility: "hater".to_string(),
        twisted_threshold: threshold,
    }
}

pub(super) fn noun(condition: NounCondition, name: &str) -> NounRule {
    NounRule {
        condition,
        name: name.to_string(),
        emoji: format!("{name}-emoji"),
        desc: None,
    }
}

pub(super) fn combo(conditions: &[(&str, i64)], name: &str) -> ComboRule {
    ComboRule {
        conditions: conditions
            .iter()
            .map(|(key, min)| (*key, *min))
            .collect(),
        exclude_hater: false,
        top_score_below: None,
        name: name.to_string(),
        emoji: format!("{name}-emoji"),
        desc: format!("{name} description"),
    }
}

pub(super) fn prefix(dim: &str, text: &str) -> PrefixRule {
    PrefixRule {
        dim: dim.to_string(),
        text: text.to_string(),
        exclude_hater: false,
    }
}

/// Fan/hater/otaku rules used by the classifier tests.
pub(super) fn rivalry_rules() -> ResultRules {
    let mut rules = ResultRules::with_fallback(fallback());
    rules.rivalry = Some(fan_rivalry(8));
    rules.nouns = vec![
        noun(NounCondition::custom("high_love_hate"), "Twisted"),
        noun(
            NounCondition::Threshold {
                dimension: "fan".to_string(),
                min: 10,
                exclude_hater: true,
                require_hater: false,
            },
            "Superfan",
        ),
        noun(NounCondition::threshold("hater", 10), "Hater"),
    ];
    rules.prefixes = vec![prefix("fan", "Devoted"), prefix("otaku", "Shut-In")];
    rules
}

pub(super) fn question(text: &str, options: Vec<ScoreDelta>) -> Question {
    Question {
        text: text.to_string(),
        options: options
            .into_iter()
            .enumerate()
            .map(|(n, scores)| AnswerOption::new(format!("option {n}"), scores))
            .collect(),
    }
}

/// Two-question quiz over dimensions A and B with the single noun rule A >= 10.
pub(super) fn small_document() -> QuizDocument {
    let mut results = ResultRules::with_fallback(fallback());
    results.nouns = vec![noun(NounCondition::threshold("A", 10), "X")];

    QuizDocument {
        dimensions: labels(&["A", "B"]),
        questions: vec![
            question(
                "first",
                vec![delta(&[("A", 10)]), delta(&[("A", 9)]), delta(&[("B", 3)])],
            ),
            question("second", vec![delta(&[("B", 1)]), delta(&[("A", -4), ("B", 2)])]),
        ],
        results,
    }
}
