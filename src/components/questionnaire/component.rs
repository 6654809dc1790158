// ABOUTME: Questionnaire screen renderer - step header with progress, the
// checkbox option list, and the wizard navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
    Frame,
};

use super::state::QuestionnaireState;
use crate::models::TriggerCategory;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ROW_HIGHLIGHT: Color = Color::Rgb(40, 40, 60);

/// The questionnaire wizard screen
pub struct QuestionnaireComponent;

impl QuestionnaireComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &QuestionnaireState) {
        // Clear background
        frame.render_widget(Clear, area);

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        // Main layout: header, content, footer
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress dots
                Constraint::Min(12),   // Question card
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        self.render_question_card(frame, layout[1], state);
        self.render_navigation(frame, layout[2], state);
    }

    /// Render the header with title and step progress
    fn render_header(&self, frame: &mut Frame, area: Rect, state: &QuestionnaireState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Progress indicator
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🧭 ", Style::default()),
            Span::styled(
                "Evaluarea declanșatorilor de anxietate",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], state);
    }

    /// Render step progress dots
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &QuestionnaireState) {
        let categories = TriggerCategory::all();
        let current_idx = state.current_step;

        let mut spans = vec![Span::styled("  ", Style::default())];

        for (idx, category) in categories.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                category.short_label(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < categories.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    /// Render the active question with its checkbox options
    fn render_question_card(&self, frame: &mut Frame, area: Rect, state: &QuestionnaireState) {
        let question = state.current_question();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", question.title()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Step label
                Constraint::Length(1), // Progress bar
                Constraint::Length(1), // Spacer
                Constraint::Min(4),    // Option list
                Constraint::Length(2), // Key hint
            ])
            .split(inner);

        let step_label = Paragraph::new(Span::styled(
            format!(
                "Pasul {} din {}",
                state.step_number(),
                QuestionnaireState::total_steps()
            ),
            Style::default().fg(MUTED_GRAY),
        ));
        frame.render_widget(step_label, content_layout[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(SUBDUED_BORDER))
            .percent(state.progress_percent())
            .label("");
        frame.render_widget(gauge, content_layout[1]);

        // Checkbox option rows
        let mut items: Vec<ListItem> = Vec::new();
        for (idx, option) in question.options().iter().enumerate() {
            let is_focused = idx == state.cursor;
            let is_checked = state.answers.is_selected(question.category(), option);

            let cursor = if is_focused { "> " } else { "  " };
            let marker = if is_checked { "[x]" } else { "[ ]" };

            let marker_style = if is_checked {
                Style::default().fg(SELECTION_GREEN)
            } else {
                Style::default().fg(MUTED_GRAY)
            };

            let label_style = if is_focused {
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
            } else if is_checked {
                Style::default().fg(SOFT_WHITE)
            } else {
                Style::default().fg(MUTED_GRAY)
            };

            let row_style = if is_focused {
                Style::default().bg(ROW_HIGHLIGHT)
            } else {
                Style::default()
            };

            items.push(
                ListItem::new(Line::from(vec![
                    Span::styled("  ", Style::default()),
                    Span::styled(cursor, Style::default().fg(GOLD)),
                    Span::styled(marker, marker_style),
                    Span::styled(" ", Style::default()),
                    Span::styled(*option, label_style),
                ]))
                .style(row_style),
            );
        }

        let list = List::new(items).style(Style::default().bg(PANEL_BG));
        frame.render_widget(list, content_layout[3]);

        let hint = Paragraph::new(Span::styled(
            "↑↓ navighează   spațiu bifează   enter continuă",
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, content_layout[4]);
    }

    /// Render navigation footer
    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &QuestionnaireState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled("  ", Style::default())];

        if state.can_go_back() {
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled("←", Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(" Înapoi", Style::default().fg(MUTED_GRAY)));
            spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        }

        let button_text = if state.is_last_step() {
            "Vezi rezultatele"
        } else {
            "Următoarea întrebare"
        };

        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Enter", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(
            format!(" {button_text}"),
            Style::default().fg(SOFT_WHITE),
        ));

        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("?", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Ajutor", Style::default().fg(MUTED_GRAY)));

        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("q", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Ieșire", Style::default().fg(MUTED_GRAY)));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for QuestionnaireComponent {
    fn default() -> Self {
        Self::new()
    }
}
