use super::document::Question;

/// Cursor over the ordered question list.
#[derive(Debug, Clone)]
pub struct QuizSequencer {
    questions: Vec<Question>,
    index: usize,
}

impl QuizSequencer {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            index: 0,
        }
    }

    /// The question under the cursor, or `None` once every question is answered.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Move past the current question. Returns false when already complete.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Step back one question. Returns false at the first question.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn rewind(&mut self) {
        self.index = 0;
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Answered fraction in `[0, 1]`; an empty quiz counts as finished.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        (self.index as f64 / self.questions.len() as f64).clamp(0.0, 1.0)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
