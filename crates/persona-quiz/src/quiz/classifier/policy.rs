use super::super::accumulator::ScoreSheet;
use super::rules::{ComboRule, CustomPredicate, NounCondition, NounRule, PrefixRule, ResultRules};
use super::signals::ScoreSignals;

pub(crate) fn first_combo<'r>(
    rules: &'r ResultRules,
    scores: &ScoreSheet,
    signals: &ScoreSignals<'_>,
) -> Option<(usize, &'r ComboRule)> {
    rules
        .combos
        .iter()
        .enumerate()
        .find(|(_, combo)| combo_matches(combo, scores, signals))
}

pub(crate) fn first_noun<'r>(
    rules: &'r ResultRules,
    scores: &ScoreSheet,
    signals: &ScoreSignals<'_>,
) -> Option<(usize, &'r NounRule)> {
    rules
        .nouns
        .iter()
        .enumerate()
        .find(|(_, noun)| noun_matches(&noun.condition, scores, signals))
}

/// Highest-scoring eligible prefix; on equal scores the earlier rule stays.
pub(crate) fn select_prefix<'r>(
    rules: &'r ResultRules,
    scores: &ScoreSheet,
    signals: &ScoreSignals<'_>,
) -> Option<&'r PrefixRule> {
    let mut best: Option<(&PrefixRule, i64)> = None;

    for prefix in &rules.prefixes {
        let Some(score) = scores.get(&prefix.dim) else {
            continue;
        };
        if score <= rules.prefix_threshold || prefix_blocked(prefix, rules, signals) {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((prefix, score)),
        }
    }

    best.map(|(prefix, _)| prefix)
}

fn prefix_blocked(prefix: &PrefixRule, rules: &ResultRules, signals: &ScoreSignals<'_>) -> bool {
    if !signals.is_hater {
        return false;
    }
    prefix.exclude_hater
        || rules
            .rivalry
            .as_ref()
            .map(|rivalry| rivalry.affinity == prefix.dim)
            .unwrap_or(false)
}

fn combo_matches(combo: &ComboRule, scores: &ScoreSheet, signals: &ScoreSignals<'_>) -> bool {
    if combo.exclude_hater && signals.is_hater {
        return false;
    }
    if let Some(limit) = combo.top_score_below {
        if signals.top_score() >= limit {
            return false;
        }
    }
    combo
        .conditions
        .iter()
        .all(|(dimension, min)| meets(scores, dimension, *min))
}

fn noun_matches(condition: &NounCondition, scores: &ScoreSheet, signals: &ScoreSignals<'_>) -> bool {
    match condition {
        NounCondition::Custom { custom } => CustomPredicate::from_name(custom)
            .map(|predicate| signals.holds(predicate))
            .unwrap_or(false),
        NounCondition::Threshold {
            dimension,
            min,
            exclude_hater,
            require_hater,
        } => {
            hater_gate(*exclude_hater, *require_hater, signals) && meets(scores, dimension, *min)
        }
        NounCondition::All {
            all,
            exclude_hater,
            require_hater,
        } => {
            hater_gate(*exclude_hater, *require_hater, signals)
                && all
                    .iter()
                    .all(|(dimension, min)| meets(scores, dimension, *min))
        }
    }
}

fn hater_gate(exclude_hater: bool, require_hater: bool, signals: &ScoreSignals<'_>) -> bool {
    !(exclude_hater && signals.is_hater) && !(require_hater && !signals.is_hater)
}

/// `score >= min`; undeclared dimensions never satisfy a condition.
fn meets(scores: &ScoreSheet, dimension: &str, min: i64) -> bool {
    scores
        .get(dimension)
        .map(|score| score >= min)
        .unwrap_or(false)
}
