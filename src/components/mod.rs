// ABOUTME: UI components for the TUI interface including the questionnaire, results, and help

pub mod confirmation_dialog;
pub mod help;
pub mod layout;
pub mod questionnaire;
pub mod results;

pub use confirmation_dialog::ConfirmationDialogComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use questionnaire::{QuestionnaireComponent, QuestionnaireState};
pub use results::ResultsComponent;
