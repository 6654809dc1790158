// ABOUTME: Event handling system for keyboard input and questionnaire actions

#![allow(dead_code)]

use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Questionnaire navigation
    AdvanceStep, // Next question, or the results screen from the last one
    RetreatStep, // Previous question
    CursorUp,    // Focus previous option
    CursorDown,  // Focus next option
    ToggleOption, // Check/uncheck the focused option
    // Results screen
    ScrollResultsUp,
    ScrollResultsDown,
    RequestRestart, // Restart the questionnaire, possibly behind a confirmation
    // Confirmation dialog events
    ConfirmationToggle,  // Switch between Yes/No
    ConfirmationConfirm, // Confirm action
    ConfirmationCancel,  // Cancel dialog
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        // Handle confirmation dialog first (highest priority)
        if state.confirmation_dialog.is_some() {
            match key_event.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    return Some(AppEvent::ConfirmationToggle);
                }
                KeyCode::Enter => {
                    return Some(AppEvent::ConfirmationConfirm);
                }
                KeyCode::Esc => {
                    return Some(AppEvent::ConfirmationCancel);
                }
                _ => return None,
            }
        }

        if state.help_visible {
            match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => {
                    return Some(AppEvent::ToggleHelp);
                }
                _ => {
                    return None;
                }
            }
        }

        // Handle global help toggle first (should work from any screen)
        if let KeyCode::Char('?') = key_event.code {
            return Some(AppEvent::ToggleHelp);
        }

        if state.questionnaire.show_results {
            return Self::handle_results_keys(key_event);
        }

        Self::handle_question_keys(key_event)
    }

    /// Keys on a question screen
    fn handle_question_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::CursorDown),
            KeyCode::Char(' ') => Some(AppEvent::ToggleOption),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::AdvanceStep),
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::RetreatStep),
            _ => None,
        }
    }

    /// Keys on the results screen. There is no backward navigation here;
    /// the only way out is restart or quit.
    fn handle_results_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ScrollResultsUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ScrollResultsDown),
            KeyCode::Enter | KeyCode::Char('r') => Some(AppEvent::RequestRestart),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.quit();
            }
            AppEvent::ToggleHelp => {
                state.toggle_help();
            }
            AppEvent::AdvanceStep => {
                state.advance_questionnaire();
            }
            AppEvent::RetreatStep => {
                state.retreat_questionnaire();
            }
            AppEvent::CursorUp => {
                state.questionnaire.cursor_up();
            }
            AppEvent::CursorDown => {
                state.questionnaire.cursor_down();
            }
            AppEvent::ToggleOption => {
                state.toggle_current_option();
            }
            AppEvent::ScrollResultsUp => {
                state.questionnaire.scroll_results_up();
            }
            AppEvent::ScrollResultsDown => {
                state.questionnaire.scroll_results_down();
            }
            AppEvent::RequestRestart => {
                debug!("Restart requested from results screen");
                state.request_restart();
            }
            AppEvent::ConfirmationToggle => {
                state.toggle_confirmation_selection();
            }
            AppEvent::ConfirmationConfirm => {
                state.confirm_dialog();
            }
            AppEvent::ConfirmationCancel => {
                state.cancel_dialog();
            }
        }
    }
}
