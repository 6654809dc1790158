// ABOUTME: Results screen renderer - analysis heading, per-category feedback
// paragraphs, optional trigger count, and the restart affordance

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::questionnaire::QuestionnaireState;
use crate::models::generate_feedback;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

/// The results screen shown after the last question
pub struct ResultsComponent;

impl ResultsComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &mut QuestionnaireState,
        show_trigger_count: bool,
    ) {
        // Clear background
        frame.render_widget(Clear, area);

        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Feedback card
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0]);
        self.render_feedback_card(frame, layout[1], state, show_trigger_count);
        self.render_navigation(frame, layout[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🧭 ", Style::default()),
            Span::styled(
                "Evaluarea declanșatorilor de anxietate",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, inner);
    }

    /// Render the feedback text with heading and optional trigger count
    fn render_feedback_card(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &mut QuestionnaireState,
        show_trigger_count: bool,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(1), // Spacer
                Constraint::Min(5),    // Feedback paragraphs
                Constraint::Length(1), // Trigger count
            ])
            .split(inner);

        let heading = Paragraph::new(Span::styled(
            "Rezultatul analizei tale:",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(heading, content_layout[0]);

        // One row per wrapped line with blank rows between paragraphs;
        // wrapping by hand keeps the row count and the scroll bound in step.
        let feedback = generate_feedback(&state.answers);
        let text_area = content_layout[2];
        let mut lines: Vec<Line> = Vec::new();
        for (idx, paragraph) in feedback.split("\n\n").enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
            }
            for row in wrap_paragraph(paragraph, text_area.width as usize) {
                lines.push(Line::from(Span::styled(
                    row,
                    Style::default().fg(SOFT_WHITE),
                )));
            }
        }

        state.results_max_scroll = (lines.len() as u16).saturating_sub(text_area.height);
        state.results_scroll = state.results_scroll.min(state.results_max_scroll);

        let text = Paragraph::new(lines).scroll((state.results_scroll, 0));
        frame.render_widget(text, text_area);

        let count_label = if show_trigger_count {
            trigger_count_label(state.answers.total_selected())
        } else {
            String::new()
        };
        let count = Paragraph::new(Span::styled(
            count_label,
            Style::default().fg(SELECTION_GREEN),
        ));
        frame.render_widget(count, content_layout[3]);
    }

    /// Render navigation footer
    fn render_navigation(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::styled("  ", Style::default())];

        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Enter/r", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(
            " Începe din nou",
            Style::default().fg(SOFT_WHITE),
        ));

        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("↑/↓", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Derulează", Style::default().fg(MUTED_GRAY)));

        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("q", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Ieșire", Style::default().fg(MUTED_GRAY)));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for ResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Romanian count label for the selected triggers
fn trigger_count_label(count: usize) -> String {
    if count == 1 {
        "1 declanșator selectat".to_string()
    } else {
        format!("{count} declanșatori selectați")
    }
}

/// Greedy word wrap into rows of at most `width` characters. A word longer
/// than the width gets a row of its own.
fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if current_width == 0 {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            rows.push(current.clone());
            current.clear();
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
