use super::super::accumulator::{DimensionScore, ScoreSheet};
use super::rules::{CustomPredicate, ResultRules};

/// Derived booleans and rankings computed once per classification.
pub(crate) struct ScoreSignals<'a> {
    pub is_hater: bool,
    pub is_twisted: bool,
    pub top: Option<&'a DimensionScore>,
    pub second: Option<&'a DimensionScore>,
}

impl ScoreSignals<'_> {
    pub fn holds(&self, predicate: CustomPredicate) -> bool {
        match predicate {
            CustomPredicate::HighLoveHate => self.is_twisted,
            CustomPredicate::Hater => self.is_hater,
        }
    }

    /// Highest score on the sheet; an empty sheet reads as zero.
    pub fn top_score(&self) -> i64 {
        self.top.map(|dimension| dimension.value).unwrap_or(0)
    }
}

pub(crate) fn read_signals<'a>(scores: &'a ScoreSheet, rules: &ResultRules) -> ScoreSignals<'a> {
    let (is_hater, is_twisted) = match &rules.rivalry {
        Some(rivalry) => match (scores.get(&rivalry.affinity), scores.get(&rivalry.hostility)) {
            (Some(affinity), Some(hostility)) => (
                hostility > affinity,
                hostility >= rivalry.twisted_threshold && affinity >= rivalry.twisted_threshold,
            ),
            _ => (false, false),
        },
        None => (false, false),
    };

    // stable: equal scores keep declaration order
    let mut ranking: Vec<&DimensionScore> = scores.dimensions().iter().collect();
    ranking.sort_by(|a, b| b.value.cmp(&a.value));

    ScoreSignals {
        is_hater,
        is_twisted,
        top: ranking.first().copied(),
        second: ranking.get(1).copied(),
    }
}
