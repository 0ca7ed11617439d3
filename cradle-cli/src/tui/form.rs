use std::time::Instant;

use cradle_core::request::{Gender, Length, NamingRequest, Style as NameStyle};
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use tui_textarea::{Input, TextArea};

const SPINNER_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Surname,
    Gender,
    NameStyle,
    NameLength,
    Syllable,
}

const FIELD_ORDER: [Field; 5] = [
    Field::Surname,
    Field::Gender,
    Field::NameStyle,
    Field::NameLength,
    Field::Syllable,
];

pub enum FormAction {
    Nope,
    Submit(NamingRequest),
    Quit,
}

/// The input form: two free-text fields and three choice fields, one of them
/// focused at a time. Owns the status line that shows validation errors, the
/// in-flight spinner, and the last success note.
pub struct FormArea<'a> {
    surname: TextArea<'a>,
    syllable: TextArea<'a>,
    gender: Gender,
    style: NameStyle,
    length: Length,
    focus: usize,

    busy: bool,
    animation_start: Option<Instant>,
    error: Option<String>,
    status: Option<String>,
}

impl FormArea<'_> {
    pub fn new() -> Self {
        let mut surname = TextArea::default();
        surname.set_placeholder_text("enter the last name");
        let mut syllable = TextArea::default();
        syllable.set_placeholder_text("optional");

        Self {
            surname,
            syllable,
            gender: Gender::Male,
            style: NameStyle::Popular,
            length: Length::TwoSyllables,
            focus: 0,
            busy: false,
            animation_start: None,
            error: None,
            status: None,
        }
    }
}

/// status line: error, spinner or success note
impl FormArea<'_> {
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.animation_start = busy.then(Instant::now);
        if busy {
            self.status = None;
        }
    }

    pub fn set_error(&mut self, text: &str) {
        self.error = Some(text.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_status(&mut self, text: &str) {
        self.status = Some(text.to_string());
    }

    fn status_line(&self) -> Span<'static> {
        if let Some(ref msg) = self.error {
            Span::styled(format!(" {}", msg), Style::default().fg(Color::Red))
        } else if let Some(start) = self.animation_start {
            let elapsed = start.elapsed().as_millis();
            let index = (elapsed / 100) as usize % SPINNER_CHARS.len();
            Span::styled(
                format!(" {} Generating names...", SPINNER_CHARS[index]),
                Style::default().fg(Color::Yellow),
            )
        } else if let Some(ref msg) = self.status {
            Span::styled(format!(" {}", msg), Style::default().fg(Color::Green))
        } else {
            Span::raw("")
        }
    }
}

/// event related
impl FormArea<'_> {
    pub fn handle_event(&mut self, key_event: KeyEvent) -> FormAction {
        match key_event.code {
            KeyCode::Esc => return FormAction::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FIELD_ORDER.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FIELD_ORDER.len() - 1) % FIELD_ORDER.len();
            }
            KeyCode::Enter => {
                // one request at a time, re-submits wait for the result
                if self.busy {
                    return FormAction::Nope;
                }
                self.status = None;
                return FormAction::Submit(self.request());
            }
            _ => return self.handle_field_event(key_event),
        }
        FormAction::Nope
    }

    fn handle_field_event(&mut self, key_event: KeyEvent) -> FormAction {
        match FIELD_ORDER[self.focus] {
            Field::Surname => {
                let input: Input = Event::Key(key_event).into();
                self.surname.input(input);
            }
            Field::Syllable => {
                let input: Input = Event::Key(key_event).into();
                self.syllable.input(input);
            }
            Field::Gender => {
                if is_cycle_key(&key_event) {
                    self.gender = match self.gender {
                        Gender::Male => Gender::Female,
                        Gender::Female => Gender::Male,
                    };
                }
            }
            Field::NameStyle => {
                if is_cycle_key(&key_event) {
                    self.style = match self.style {
                        NameStyle::Popular => NameStyle::Unique,
                        NameStyle::Unique => NameStyle::Popular,
                    };
                }
            }
            Field::NameLength => match key_event.code {
                KeyCode::Left => self.length = prev_length(self.length),
                KeyCode::Right | KeyCode::Char(' ') => self.length = next_length(self.length),
                _ => {}
            },
        }
        FormAction::Nope
    }

    fn request(&self) -> NamingRequest {
        NamingRequest::new(
            self.surname.lines().join(" "),
            self.gender,
            self.style,
            self.length,
            Some(self.syllable.lines().join(" ")),
        )
    }
}

/// drawing logic
impl FormArea<'_> {
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Naming preferences ")
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .padding(Padding { left: 1, right: 1, top: 0, bottom: 0 })
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [surname_label, surname_input, _, gender_row, style_row, length_row, _, syllable_label, syllable_input, _, help_row, status_row] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        self.draw_label(f, surname_label, "Last name", Field::Surname);
        self.draw_text_input(f, surname_input, Field::Surname);
        self.draw_choice(f, gender_row, "Gender", gender_label(self.gender), Field::Gender);
        self.draw_choice(f, style_row, "Name style", style_label(self.style), Field::NameStyle);
        self.draw_choice(f, length_row, "Name length", length_label(self.length), Field::NameLength);
        self.draw_label(f, syllable_label, "Repeated syllable", Field::Syllable);
        self.draw_text_input(f, syllable_input, Field::Syllable);

        f.render_widget(
            Span::styled(
                "Enter suggest · Tab move · ←/→ change · Esc quit",
                Style::default().fg(Color::DarkGray).dim(),
            ),
            help_row,
        );
        f.render_widget(self.status_line(), status_row);
    }

    fn draw_label(&self, f: &mut Frame, area: Rect, text: &str, field: Field) {
        let focused = FIELD_ORDER[self.focus] == field;
        let style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        f.render_widget(Span::styled(text.to_string(), style), area);
    }

    fn draw_text_input(&mut self, f: &mut Frame, area: Rect, field: Field) {
        let focused = FIELD_ORDER[self.focus] == field;
        let textarea = match field {
            Field::Surname => &mut self.surname,
            _ => &mut self.syllable,
        };

        let [pad, input] = Layout::horizontal([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
        f.render_widget(
            Span::styled(">", Style::default().fg(if focused { Color::White } else { Color::DarkGray })),
            pad,
        );

        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
        textarea.set_style(Style::default().fg(Color::White));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default()
            .fg(Color::White)
            .bg(if focused { Color::White } else { Color::Reset }));
        f.render_widget(&*textarea, input);
    }

    fn draw_choice(&self, f: &mut Frame, area: Rect, label: &str, value: &str, field: Field) {
        let focused = FIELD_ORDER[self.focus] == field;
        let value_text = if focused {
            format!("◂ {} ▸", value)
        } else {
            format!("  {}", value)
        };
        let value_style = if focused {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::Gray)
        };

        let line = Line::from(vec![
            Span::styled(format!("  {:<16}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value_text, value_style),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}

fn is_cycle_key(key_event: &KeyEvent) -> bool {
    matches!(key_event.code, KeyCode::Left | KeyCode::Right | KeyCode::Char(' '))
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    }
}

fn style_label(style: NameStyle) -> &'static str {
    match style {
        NameStyle::Popular => "Popular names",
        NameStyle::Unique => "Unique names",
    }
}

fn length_label(length: Length) -> &'static str {
    match length {
        Length::OneSyllable => "1 syllable",
        Length::TwoSyllables => "2 syllables",
        Length::NoPreference => "No preference",
    }
}

fn next_length(length: Length) -> Length {
    match length {
        Length::OneSyllable => Length::TwoSyllables,
        Length::TwoSyllables => Length::NoPreference,
        Length::NoPreference => Length::OneSyllable,
    }
}

fn prev_length(length: Length) -> Length {
    match length {
        Length::OneSyllable => Length::NoPreference,
        Length::TwoSyllables => Length::OneSyllable,
        Length::NoPreference => Length::TwoSyllables,
    }
}
