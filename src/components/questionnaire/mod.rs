// ABOUTME: Questionnaire wizard module - step navigation state and the
// checkbox screen renderer

pub mod component;
pub mod state;

pub use component::QuestionnaireComponent;
pub use state::QuestionnaireState;
