use super::document::ScoreDelta;
use super::ordered::OrderedEntries;
use serde::Serialize;
use tracing::debug;

/// Running total for one declared dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub key: String,
    pub label: String,
    pub value: i64,
}

/// Score per dimension, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScoreSheet {
    dimensions: Vec<DimensionScore>,
}

impl ScoreSheet {
    /// Zeroed sheet for the given key/label pairs. Repeated keys keep the first entry.
    pub fn from_labels(labels: &OrderedEntries<String>) -> Self {
        let mut dimensions: Vec<DimensionScore> = Vec::with_capacity(labels.len());
        for (key, label) in labels.iter() {
            if dimensions.iter().any(|existing| existing.key == key) {
                continue;
            }
            dimensions.push(DimensionScore {
                key: key.to_string(),
                label: label.clone(),
                value: 0,
            });
        }
        Self { dimensions }
    }

    pub fn dimensions(&self) -> &[DimensionScore] {
        &self.dimensions
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.entry(key).map(|dimension| dimension.value)
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.entry(key).map(|dimension| dimension.label.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Overwrite a known dimension; returns false for undeclared keys.
    pub fn set(&mut self, key: &str, value: i64) -> bool {
        match self.entry_mut(key) {
            Some(dimension) => {
                dimension.value = value;
                true
            }
            None => false,
        }
    }

    fn entry(&self, key: &str) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|dimension| dimension.key == key)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut DimensionScore> {
        self.dimensions
            .iter_mut()
            .find(|dimension| dimension.key == key)
    }

    fn adjust(&mut self, delta: &ScoreDelta, sign: Sign) {
        for (key, amount) in delta {
            match self.entry_mut(key) {
                Some(dimension) => {
                    dimension.value = match sign {
                        Sign::Add => dimension.value.wrapping_add(*amount),
                        Sign::Subtract => dimension.value.wrapping_sub(*amount),
                    };
                }
                None => debug!(dimension = %key, "ignoring delta for undeclared dimension"),
            }
        }
    }

    fn zero(&mut self) {
        for dimension in &mut self.dimensions {
            dimension.value = 0;
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Sign {
    Add,
    Subtract,
}

/// Result of an undo request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    Reverted(ScoreDelta),
    NothingToUndo,
}

/// Owns the score sheet and the LIFO history of applied deltas.
#[derive(Debug, Clone)]
pub struct ScoreAccumulator {
    sheet: ScoreSheet,
    history: Vec<ScoreDelta>,
}

impl ScoreAccumulator {
    pub fn new(labels: &OrderedEntries<String>) -> Self {
        Self {
            sheet: ScoreSheet::from_labels(labels),
            history: Vec::new(),
        }
    }

    /// Add the delta to the running totals and remember it for undo.
    pub fn apply_delta(&mut self, delta: ScoreDelta) {
        self.sheet.adjust(&delta, Sign::Add);
        self.history.push(delta);
    }

    /// Subtract the delta. History is left untouched.
    pub fn reverse_delta(&mut self, delta: &ScoreDelta) {
        self.sheet.adjust(delta, Sign::Subtract);
    }

    pub fn undo_last(&mut self) -> UndoOutcome {
        match self.history.pop() {
            Some(delta) => {
                self.sheet.adjust(&delta, Sign::Subtract);
                UndoOutcome::Reverted(delta)
            }
            None => UndoOutcome::NothingToUndo,
        }
    }

    pub fn reset(&mut self) {
        self.sheet.zero();
        self.history.clear();
    }

    pub fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn labels() -> OrderedEntries<String> {
        [("fan", "Fan"), ("hater", "Hater"), ("otaku", "Otaku")]
            .into_iter()
            .map(|(key, label)| (key, label.to_string()))
            .collect()
    }

    fn delta(entries: &[(&str, i64)]) -> ScoreDelta {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    #[test]
    fn apply_adds_known_dimensions_and_ignores_unknown_keys() {
        let mut accumulator = ScoreAccumulator::new(&labels());
        accumulator.apply_delta(delta(&[("fan", 3), ("ghost", 9), ("hater", -2)]));

        let sheet = accumulator.sheet();
        assert_eq!(sheet.get("fan"), Some(3));
        assert_eq!(sheet.get("hater"), Some(-2));
        assert_eq!(sheet.get("otaku"), Some(0));
        assert_eq!(sheet.get("ghost"), None);
        assert_eq!(sheet.dimensions().len(), 3);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut accumulator = ScoreAccumulator::new(&labels());
        assert_eq!(accumulator.undo_last(), UndoOutcome::NothingToUndo);
        assert!(accumulator.sheet().dimensions().iter().all(|d| d.value == 0));
    }

    #[test]
    fn undo_reverts_most_recent_delta_first() {
        let mut accumulator = ScoreAccumulator::new(&labels());
        accumulator.apply_delta(delta(&[("fan", 4)]));
        accumulator.apply_delta(delta(&[("otaku", 2), ("fan", 1)]));

        assert_eq!(
            accumulator.undo_last(),
            UndoOutcome::Reverted(delta(&[("otaku", 2), ("fan", 1)]))
        );
        assert_eq!(accumulator.sheet().get("fan"), Some(4));
        assert_eq!(accumulator.sheet().get("otaku"), Some(0));
        assert_eq!(accumulator.history_len(), 1);
    }

    #[test]
    fn reset_zeroes_scores_and_clears_history() {
        let mut accumulator = ScoreAccumulator::new(&labels());
        accumulator.apply_delta(delta(&[("fan", 4), ("hater", 7)]));
        accumulator.reset();

        assert!(accumulator.sheet().dimensions().iter().all(|d| d.value == 0));
        assert_eq!(accumulator.undo_last(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn sheet_keeps_declaration_order() {
        let accumulator = ScoreAccumulator::new(&labels());
        let keys: Vec<&str> = accumulator
            .sheet()
            .dimensions()
            .iter()
            .map(|d| d.key.as_str())
            .collect();
        assert_eq!(keys, vec!["fan", "hater", "otaku"]);
    }

    fn arbitrary_delta() -> impl Strategy<Value = ScoreDelta> {
        prop::collection::btree_map(
            prop::sample::select(vec!["fan", "hater", "otaku", "unknown"]).prop_map(String::from),
            any::<i64>(),
            0..4,
        )
    }

    proptest! {
        #[test]
        fn apply_then_reverse_restores_every_dimension(
            history in prop::collection::vec(arbitrary_delta(), 0..8),
            probe in arbitrary_delta(),
        ) {
            let mut accumulator = ScoreAccumulator::new(&labels());
            for step in history {
                accumulator.apply_delta(step);
            }
            let before = accumulator.sheet().clone();

            accumulator.apply_delta(probe.clone());
            accumulator.reverse_delta(&probe);
            prop_assert_eq!(accumulator.sheet(), &before);
        }

        #[test]
        fn undo_restores_prior_totals(
            history in prop::collection::vec(arbitrary_delta(), 0..8),
            probe in arbitrary_delta(),
        ) {
            let mut accumulator = ScoreAccumulator::new(&labels());
            for step in history {
                accumulator.apply_delta(step);
            }
            let before = accumulator.sheet().clone();
            let depth = accumulator.history_len();

            accumulator.apply_delta(probe.clone());
            prop_assert_eq!(accumulator.undo_last(), UndoOutcome::Reverted(probe));
            prop_assert_eq!(accumulator.sheet(), &before);
            prop_assert_eq!(accumulator.history_len(), depth);
        }
    }
}
