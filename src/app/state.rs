// ABOUTME: Application state - questionnaire progress, overlay flags,
// notifications, and the App lifecycle wrapper driven by the event loop

#![allow(dead_code)]

use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::components::questionnaire::QuestionnaireState;
use crate::config::AppConfig;
use crate::models::question_count;

/// Notification message to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    Info,
}

impl Notification {
    pub fn success(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Success,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Error,
            created_at: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Warning,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    pub fn info(message: String) -> Self {
        Self {
            message,
            notification_type: NotificationType::Info,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Action to perform when a confirmation dialog is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    RestartQuestionnaire,
}

/// Yes/no dialog state
#[derive(Debug, Clone)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub confirm_action: ConfirmAction,
    /// true = yes selected, false = no selected
    pub selected_option: bool,
}

/// Central application state shared by the event handler and the renderer
pub struct AppState {
    pub config: AppConfig,
    pub questionnaire: QuestionnaireState,
    pub should_quit: bool,
    pub help_visible: bool,
    pub confirmation_dialog: Option<ConfirmationDialog>,
    // Flag to force a redraw after tick-driven changes
    pub ui_needs_refresh: bool,
    pub notifications: Vec<Notification>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        Self {
            config,
            questionnaire: QuestionnaireState::new(),
            should_quit: false,
            help_visible: false,
            confirmation_dialog: None,
            ui_needs_refresh: false,
            notifications: Vec::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Move to the next question, or onto the results screen from the last one
    pub fn advance_questionnaire(&mut self) {
        if self.questionnaire.advance() {
            if self.questionnaire.show_results {
                info!(
                    selected = self.questionnaire.answers.total_selected(),
                    "Questionnaire completed, showing results"
                );
            } else {
                debug!(step = self.questionnaire.current_step, "Advanced to step");
            }
        }
    }

    /// Move back one question; no-op on the first question and on results
    pub fn retreat_questionnaire(&mut self) {
        if self.questionnaire.retreat() {
            debug!(step = self.questionnaire.current_step, "Went back to step");
        }
    }

    /// Toggle the focused option on the current question
    pub fn toggle_current_option(&mut self) {
        self.questionnaire.toggle_current();
        debug!(
            step = self.questionnaire.current_step,
            cursor = self.questionnaire.cursor,
            total = self.questionnaire.answers.total_selected(),
            "Toggled option"
        );
    }

    /// Restart request from the results screen. Opens the confirmation dialog
    /// when the preference asks for it, otherwise restarts immediately.
    pub fn request_restart(&mut self) {
        if self.config.ui_preferences.confirm_restart {
            self.confirmation_dialog = Some(ConfirmationDialog {
                title: "Începe din nou".to_string(),
                message: "Renunți la răspunsurile curente și reiei chestionarul de la primul pas?"
                    .to_string(),
                confirm_action: ConfirmAction::RestartQuestionnaire,
                selected_option: false,
            });
        } else {
            self.restart_questionnaire();
        }
    }

    /// Reset the questionnaire to a fresh run
    pub fn restart_questionnaire(&mut self) {
        self.questionnaire.restart();
        info!("Questionnaire restarted");
        self.add_success_notification("Chestionar reluat de la început".to_string());
    }

    /// Flip the yes/no selection in the open confirmation dialog
    pub fn toggle_confirmation_selection(&mut self) {
        if let Some(dialog) = &mut self.confirmation_dialog {
            dialog.selected_option = !dialog.selected_option;
        }
    }

    /// Execute the selected dialog option and close the dialog
    pub fn confirm_dialog(&mut self) {
        if let Some(dialog) = self.confirmation_dialog.take() {
            if dialog.selected_option {
                match dialog.confirm_action {
                    ConfirmAction::RestartQuestionnaire => self.restart_questionnaire(),
                }
            }
        }
    }

    /// Close the confirmation dialog without acting
    pub fn cancel_dialog(&mut self) {
        self.confirmation_dialog = None;
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn add_success_notification(&mut self, message: String) {
        self.add_notification(Notification::success(message));
    }

    pub fn add_error_notification(&mut self, message: String) {
        self.add_notification(Notification::error(message));
    }

    pub fn add_warning_notification(&mut self, message: String) {
        self.add_notification(Notification::warning(message));
    }

    pub fn add_info_notification(&mut self, message: String) {
        self.add_notification(Notification::info(message));
    }

    /// Drop expired notifications; flags a redraw when any were removed
    pub fn cleanup_expired_notifications(&mut self) {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired());
        if self.notifications.len() != before {
            self.ui_needs_refresh = true;
        }
    }

    /// Notifications still within their display window
    pub fn get_current_notifications(&self) -> Vec<&Notification> {
        self.notifications.iter().filter(|n| !n.is_expired()).collect()
    }
}

/// Application wrapper owning the state and its lifecycle
pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// One-time startup work before the first frame
    pub async fn init(&mut self) -> Result<()> {
        info!(
            questions = question_count(),
            show_trigger_count = self.state.config.ui_preferences.show_trigger_count,
            confirm_restart = self.state.config.ui_preferences.confirm_restart,
            "Questionnaire initialized"
        );
        Ok(())
    }

    /// Periodic work driven by the event loop tick
    pub async fn tick(&mut self) -> Result<()> {
        self.state.cleanup_expired_notifications();
        Ok(())
    }

    /// Check and clear the redraw flag
    pub fn needs_ui_refresh(&mut self) -> bool {
        if self.state.ui_needs_refresh {
            self.state.ui_needs_refresh = false;
            true
        } else {
            false
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
