//! Scoring engine for multiple-choice persona quizzes.
//!
//! A [`quiz::QuizSession`] owns the running score sheet, the undo history and
//! the question cursor; the [`quiz::classifier`] turns a finished score sheet
//! into a labelled result using the ordered rule tables of the quiz document.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
