use super::accumulator::{ScoreAccumulator, ScoreSheet, UndoOutcome};
use super::classifier::{ClassificationResult, ResultClassifier};
use super::document::{Question, QuizDocument};
use super::loader::{load_document, ConfigLoadError};
use super::sequencer::QuizSequencer;
use super::validation::{validate, ConfigWarning};
use std::path::Path;
use tracing::{debug, info, warn};

/// Lifecycle of a session with respect to its quiz document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NotReady,
    LoadFailed { reason: String },
    Ready,
}

/// What a recorded answer led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Advanced { answered: usize, remaining: usize },
    Completed(ClassificationResult),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no quiz document has been loaded")]
    NotReady,
    #[error("option {index} does not exist; the question has {available} option(s)")]
    InvalidOption { index: usize, available: usize },
    #[error("quiz still in progress ({answered} of {total} answered)")]
    InProgress { answered: usize, total: usize },
}

#[derive(Debug)]
struct LoadedQuiz {
    accumulator: ScoreAccumulator,
    sequencer: QuizSequencer,
    classifier: ResultClassifier,
    warnings: Vec<ConfigWarning>,
}

/// Owns all mutable quiz state.
///
/// Each answer applies its delta and advances the cursor in one step, and each
/// undo reverses both, so the undo history always has one entry per answered
/// question.
#[derive(Debug)]
pub struct QuizSession {
    state: SessionState,
    quiz: Option<LoadedQuiz>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::NotReady,
            quiz: None,
        }
    }

    /// Install a document, replacing any previous quiz.
    pub fn load_config(
        &mut self,
        document: QuizDocument,
    ) -> Result<&[ConfigWarning], ConfigLoadError> {
        let warnings = match validate(&document) {
            Ok(warnings) => warnings,
            Err(violation) => {
                let err = ConfigLoadError::from(violation);
                self.mark_failed(&err);
                return Err(err);
            }
        };

        for warning in &warnings {
            warn!(%warning, "quiz configuration warning");
        }

        let QuizDocument {
            dimensions,
            questions,
            results,
        } = document;

        info!(
            questions = questions.len(),
            dimensions = dimensions.len(),
            warnings = warnings.len(),
            "quiz session ready"
        );

        self.state = SessionState::Ready;
        let quiz = self.quiz.insert(LoadedQuiz {
            accumulator: ScoreAccumulator::new(&dimensions),
            sequencer: QuizSequencer::new(questions),
            classifier: ResultClassifier::new(results),
            warnings,
        });
        Ok(&quiz.warnings)
    }

    /// Fetch, parse and install a document. On failure the session stays unusable.
    pub async fn load_from_path(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&[ConfigWarning], ConfigLoadError> {
        match load_document(path).await {
            Ok(document) => self.load_config(document),
            Err(err) => {
                self.mark_failed(&err);
                Err(err)
            }
        }
    }

    fn mark_failed(&mut self, err: &ConfigLoadError) {
        warn!(error = %err, "quiz document load failed");
        self.quiz = None;
        self.state = SessionState::LoadFailed {
            reason: err.to_string(),
        };
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        self.quiz
            .as_ref()
            .map(|quiz| quiz.warnings.as_slice())
            .unwrap_or(&[])
    }

    /// `Ok(None)` once every question has been answered.
    pub fn current_question(&self) -> Result<Option<&Question>, SessionError> {
        Ok(self.loaded()?.sequencer.current())
    }

    /// Record the chosen option of the current question and move on.
    pub fn select_option(&mut self, option_index: usize) -> Result<TurnOutcome, SessionError> {
        let quiz = self.loaded_mut()?;

        let delta = match quiz.sequencer.current() {
            Some(question) => question
                .options
                .get(option_index)
                .map(|option| option.delta())
                .ok_or(SessionError::InvalidOption {
                    index: option_index,
                    available: question.options.len(),
                })?,
            None => {
                debug!("answer received after the last question; classifying");
                return Ok(TurnOutcome::Completed(
                    quiz.classifier.classify(quiz.accumulator.sheet()),
                ));
            }
        };

        debug!(
            question = quiz.sequencer.index(),
            option = option_index,
            "answer recorded"
        );
        quiz.accumulator.apply_delta(delta);
        quiz.sequencer.advance();

        if quiz.sequencer.is_complete() {
            let result = quiz.classifier.classify(quiz.accumulator.sheet());
            info!(title = %result.title, "quiz complete");
            return Ok(TurnOutcome::Completed(result));
        }

        Ok(TurnOutcome::Advanced {
            answered: quiz.sequencer.index(),
            remaining: quiz.sequencer.len() - quiz.sequencer.index(),
        })
    }

    /// Take back the most recent answer.
    pub fn undo(&mut self) -> Result<UndoOutcome, SessionError> {
        let quiz = self.loaded_mut()?;
        let outcome = quiz.accumulator.undo_last();
        match &outcome {
            UndoOutcome::Reverted(_) => {
                quiz.sequencer.retreat();
                debug!(question = quiz.sequencer.index(), "answer undone");
            }
            UndoOutcome::NothingToUndo => debug!("nothing to undo"),
        }
        Ok(outcome)
    }

    pub fn is_complete(&self) -> bool {
        self.quiz
            .as_ref()
            .map(|quiz| quiz.sequencer.is_complete())
            .unwrap_or(false)
    }

    /// Answered fraction in `[0, 1]`; zero before a quiz is loaded.
    pub fn progress(&self) -> f64 {
        self.quiz
            .as_ref()
            .map(|quiz| quiz.sequencer.progress())
            .unwrap_or(0.0)
    }

    pub fn result(&self) -> Result<ClassificationResult, SessionError> {
        let quiz = self.loaded()?;
        if !quiz.sequencer.is_complete() {
            return Err(SessionError::InProgress {
                answered: quiz.sequencer.index(),
                total: quiz.sequencer.len(),
            });
        }
        Ok(quiz.classifier.classify(quiz.accumulator.sheet()))
    }

    /// Zero every score and return to the first question.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let quiz = self.loaded_mut()?;
        quiz.accumulator.reset();
        quiz.sequencer.rewind();
        debug!("quiz restarted");
        Ok(())
    }

    pub fn scores(&self) -> Option<&ScoreSheet> {
        self.quiz.as_ref().map(|quiz| quiz.accumulator.sheet())
    }

    pub fn answered(&self) -> usize {
        self.quiz
            .as_ref()
            .map(|quiz| quiz.sequencer.index())
            .unwrap_or(0)
    }

    pub fn total_questions(&self) -> usize {
        self.quiz
            .as_ref()
            .map(|quiz| quiz.sequencer.len())
            .unwrap_or(0)
    }

    pub fn classifier(&self) -> Option<&ResultClassifier> {
        self.quiz.as_ref().map(|quiz| &quiz.classifier)
    }

    fn loaded(&self) -> Result<&LoadedQuiz, SessionError> {
        self.quiz.as_ref().ok_or(SessionError::NotReady)
    }

    fn loaded_mut(&mut self) -> Result<&mut LoadedQuiz, SessionError> {
        self.quiz.as_mut().ok_or(SessionError::NotReady)
    }
}
