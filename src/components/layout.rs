// ABOUTME: Main layout component dispatching to the active screen and stacking overlays

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Wrap},
};

// Premium color palette (TUI Style Guide)
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);

use super::{
    ConfirmationDialogComponent, HelpComponent, QuestionnaireComponent, ResultsComponent,
};
use crate::app::AppState;

pub struct LayoutComponent {
    questionnaire: QuestionnaireComponent,
    results: ResultsComponent,
    help: HelpComponent,
    confirmation_dialog: ConfirmationDialogComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            questionnaire: QuestionnaireComponent::new(),
            results: ResultsComponent::new(),
            help: HelpComponent::new(),
            confirmation_dialog: ConfirmationDialogComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        // The questionnaire and the results screen each take the full frame
        if state.questionnaire.show_results {
            tracing::debug!("Rendering results view");
            let show_trigger_count = state.config.ui_preferences.show_trigger_count;
            self.results.render(
                frame,
                frame.size(),
                &mut state.questionnaire,
                show_trigger_count,
            );
        } else {
            tracing::debug!(
                "Rendering questionnaire view, step {}",
                state.questionnaire.step_number()
            );
            self.questionnaire.render(frame, frame.size(), &state.questionnaire);
        }

        // Render help overlay if visible
        if state.help_visible {
            self.help.render(frame, frame.size());
        }

        // Render confirmation dialog if visible (highest priority overlay)
        if state.confirmation_dialog.is_some() {
            self.confirmation_dialog.render(frame, frame.size(), state);
        }

        // Render notifications (top-right corner)
        self.render_notifications(frame, frame.size(), state);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.get_current_notifications();
        if notifications.is_empty() {
            return;
        }

        // Position notifications in the top-right corner
        let notification_width = 50;
        let notification_height = notifications.len() as u16 * 3; // 3 lines per notification

        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: notification_height.min(area.height.saturating_sub(2)),
        };

        // Render each notification
        for (i, notification) in notifications.iter().enumerate() {
            let y_offset = i as u16 * 3;
            if y_offset >= notification_area.height {
                break; // Don't render notifications that won't fit
            }

            let single_notification_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 3.min(notification_area.height - y_offset),
            };

            let (icon, text_color, border_color) = match notification.notification_type {
                crate::app::state::NotificationType::Success => {
                    ("✓ ", SELECTION_GREEN, SELECTION_GREEN)
                }
                crate::app::state::NotificationType::Error => {
                    ("✗ ", Color::Rgb(230, 100, 100), Color::Rgb(230, 100, 100))
                }
                crate::app::state::NotificationType::Warning => {
                    ("⚠ ", WARNING_ORANGE, WARNING_ORANGE)
                }
                crate::app::state::NotificationType::Info => {
                    ("ℹ ", CORNFLOWER_BLUE, CORNFLOWER_BLUE)
                }
            };

            let notification_line = Line::from(vec![
                Span::styled(icon, Style::default().fg(text_color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.message.as_str(), Style::default().fg(text_color)),
            ]);

            let notification_widget = Paragraph::new(notification_line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(border_color))
                        .style(Style::default().bg(PANEL_BG)),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(notification_widget, single_notification_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{question_count, TriggerCategory};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_layout(state: &mut AppState, width: u16, height: u16) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let mut layout = LayoutComponent::new();
                layout.render(frame, state);
            })
            .unwrap();
        // Should render without panic
    }

    fn create_test_state() -> AppState {
        let mut state = AppState::default();
        // Pin the preferences so ambient config files cannot change test behavior
        state.config.ui_preferences.confirm_restart = true;
        state.config.ui_preferences.show_trigger_count = true;
        state
    }

    fn state_on_results() -> AppState {
        let mut state = create_test_state();
        state
            .questionnaire
            .answers
            .toggle(TriggerCategory::Situational, "Vorbitul în public");
        for _ in 0..question_count() {
            state.questionnaire.advance();
        }
        state
    }

    #[test]
    fn test_renders_questionnaire_with_notification() {
        let mut state = create_test_state();
        state.add_success_notification("Chestionar reluat de la început".to_string());
        render_layout(&mut state, 80, 24);
    }

    #[test]
    fn test_renders_results_with_notification() {
        let mut state = state_on_results();
        state.add_success_notification("Chestionar reluat de la început".to_string());
        render_layout(&mut state, 80, 24);
    }

    #[test]
    fn test_renders_both_screens_on_narrow_terminal() {
        let mut state = create_test_state();
        state.add_success_notification("Chestionar reluat de la început".to_string());
        render_layout(&mut state, 40, 12);

        let mut state = state_on_results();
        state.add_success_notification("Chestionar reluat de la început".to_string());
        render_layout(&mut state, 40, 12);
    }

    #[test]
    fn test_renders_help_overlay_with_stacked_notifications() {
        let mut state = create_test_state();
        state.help_visible = true;
        state.add_warning_notification("Prima notificare".to_string());
        state.add_info_notification("A doua notificare".to_string());
        render_layout(&mut state, 100, 30);
    }

    #[test]
    fn test_renders_confirmation_dialog_over_results() {
        let mut state = state_on_results();
        state.request_restart();
        assert!(state.confirmation_dialog.is_some());
        render_layout(&mut state, 80, 24);
    }

    #[test]
    fn test_renders_more_notifications_than_fit() {
        let mut state = create_test_state();
        for i in 0..6 {
            state.add_info_notification(format!("Notificare {i}"));
        }
        render_layout(&mut state, 80, 10);
    }
}
