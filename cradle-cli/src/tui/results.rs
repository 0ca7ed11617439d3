use cradle_core::namer::NameSuggestion;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// The session-scoped results slot. Each completed request overwrites it
/// wholesale: a success replaces the list, a failure empties it and shows
/// the diagnostic instead.
pub struct ResultsArea {
    suggestions: Vec<NameSuggestion>,
    error: Option<String>,
}

impl ResultsArea {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            error: None,
        }
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<NameSuggestion>) {
        self.error = None;
        self.suggestions = suggestions;
    }

    pub fn set_error(&mut self, message: String) {
        self.suggestions.clear();
        self.error = Some(message);
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Suggestions ")
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .padding(Padding { left: 1, right: 1, top: 0, bottom: 0 })
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        if let Some(ref message) = self.error {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "No suggestions for this attempt, adjust the form and try again.",
                Style::default().fg(Color::DarkGray),
            )));
        } else if self.suggestions.is_empty() {
            lines.push(Line::from(Span::styled(
                "Fill in the form and press Enter to get five name suggestions.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                lines.push(Line::from(Span::styled(
                    format!("Recommended name {}: {}", i + 1, suggestion.name),
                    Style::default().fg(Color::Cyan).bold(),
                )));
                lines.push(Line::from(vec![
                    Span::styled("  Meaning: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(suggestion.meaning.clone()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("  Characteristics: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(suggestion.characteristics.clone()),
                ]));
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(
                "Names are AI suggestions. For personalized naming, consult a naming expert.",
                Style::default().fg(Color::DarkGray).dim(),
            )));
        }

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
