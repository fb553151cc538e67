//! Quiz documents, the per-session scoring state, and result classification.

pub mod accumulator;
pub mod classifier;
pub mod document;
pub mod loader;
mod ordered;
pub mod sequencer;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use accumulator::{DimensionScore, ScoreAccumulator, ScoreSheet, UndoOutcome};
pub use classifier::{classify, ClassificationResult, ResultClassifier, ResultRules, ResultSource};
pub use document::{AnswerOption, Question, QuizDocument, ScoreDelta};
pub use loader::{load_document, parse_document, ConfigLoadError};
pub use ordered::OrderedEntries;
pub use sequencer::QuizSequencer;
pub use session::{QuizSession, SessionError, SessionState, TurnOutcome};
pub use validation::{ConfigViolation, ConfigWarning};
