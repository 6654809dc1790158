// ABOUTME: Domain models - question bank, answer record, and feedback text

pub mod answers;
pub mod feedback;
pub mod questions;

pub use answers::AnswerState;
pub use feedback::{generate_feedback, NO_TRIGGERS_MESSAGE};
pub use questions::{question_bank, question_count, Question, TriggerCategory};
