// ABOUTME: State for the questionnaire wizard - step navigation, the answer
// record, and transient cursor/scroll positions for the active screen.

use crate::models::{question_bank, question_count, AnswerState, Question};

/// Full questionnaire state.
///
/// `current_step` always stays within the question bank's index range;
/// `show_results` flips only when the user advances past the last question
/// and flips back only through `restart`.
#[derive(Debug, Clone)]
pub struct QuestionnaireState {
    /// Index into the question bank
    pub current_step: usize,
    /// True once the user advanced past the last question
    pub show_results: bool,
    /// Focused option row on the current question screen
    pub cursor: usize,
    /// Scroll offset on the results screen
    pub results_scroll: u16,
    /// Largest useful scroll offset for the current results viewport,
    /// refreshed by the results renderer on every frame
    pub results_max_scroll: u16,
    /// Selected triggers
    pub answers: AnswerState,
}

impl QuestionnaireState {
    pub fn new() -> Self {
        Self {
            current_step: 0,
            show_results: false,
            cursor: 0,
            results_scroll: 0,
            results_max_scroll: 0,
            answers: AnswerState::new(),
        }
    }

    /// The question for the current step
    pub fn current_question(&self) -> Question {
        question_bank()[self.current_step]
    }

    /// Step number for display (1-indexed)
    pub fn step_number(&self) -> usize {
        self.current_step + 1
    }

    /// Total number of steps
    pub fn total_steps() -> usize {
        question_count()
    }

    /// Progress through the questionnaire as a percentage
    pub fn progress_percent(&self) -> u16 {
        let total = Self::total_steps();
        (self.step_number() * 100 / total) as u16
    }

    /// Whether the current step is the last question
    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == Self::total_steps()
    }

    /// Whether retreating is possible from the current state
    pub fn can_go_back(&self) -> bool {
        !self.show_results && self.current_step > 0
    }

    /// Move forward: to the next question, or to the results screen from the
    /// last question. Returns whether the state changed.
    ///
    /// On the results screen this is a no-op; the step index never leaves the
    /// bank's range.
    pub fn advance(&mut self) -> bool {
        if self.show_results {
            return false;
        }
        if self.is_last_step() {
            self.show_results = true;
        } else {
            self.current_step += 1;
        }
        self.cursor = 0;
        true
    }

    /// Move back one question. Returns whether the state changed.
    ///
    /// A no-op on the first question and on the results screen; results are
    /// left only through `restart`.
    pub fn retreat(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.current_step -= 1;
        self.cursor = 0;
        true
    }

    /// Reset to a fresh questionnaire: first step, no results, empty answers,
    /// cursor and scroll back at the top.
    pub fn restart(&mut self) {
        self.current_step = 0;
        self.show_results = false;
        self.cursor = 0;
        self.results_scroll = 0;
        self.results_max_scroll = 0;
        self.answers.clear();
    }

    /// Toggle the option under the cursor on the current question.
    ///
    /// The label is resolved from the question bank, so only rendered options
    /// ever reach the answer record.
    pub fn toggle_current(&mut self) {
        if self.show_results {
            return;
        }
        let question = self.current_question();
        if let Some(option) = question.options().get(self.cursor) {
            self.answers.toggle(question.category(), option);
        }
    }

    /// Move the option cursor up
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the option cursor down
    pub fn cursor_down(&mut self) {
        let option_count = self.current_question().options().len();
        if self.cursor + 1 < option_count {
            self.cursor += 1;
        }
    }

    /// Scroll the results text up
    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    /// Scroll the results text down, stopping at the last rendered line
    pub fn scroll_results_down(&mut self) {
        if self.results_scroll < self.results_max_scroll {
            self.results_scroll += 1;
        }
    }
}

impl Default for QuestionnaireState {
    fn default() -> Self {
        Self::new()
    }
}
