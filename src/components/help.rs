// ABOUTME: Help overlay component displaying keyboard shortcuts

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let help_items = vec![
            ListItem::new("Navigare:")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  j/↓        Opțiunea următoare"),
            ListItem::new("  k/↑        Opțiunea anterioară"),
            ListItem::new("  Enter/l/→  Întrebarea următoare / rezultatele"),
            ListItem::new("  Backspace/h/←  Întrebarea anterioară"),
            ListItem::new(""),
            ListItem::new("Răspunsuri:")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  Spațiu     Bifează / debifează opțiunea"),
            ListItem::new(""),
            ListItem::new("Rezultate:")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  j/k/↑/↓    Derulează textul"),
            ListItem::new("  Enter/r    Începe din nou"),
            ListItem::new(""),
            ListItem::new("General:")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  ?          Afișează / ascunde acest ajutor"),
            ListItem::new("  q/Esc      Închide aplicația"),
            ListItem::new("  Ctrl+C     Închidere forțată"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Ajutor - apasă ? sau Esc pentru a închide")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
