use cradle_core::config::CradleConfig;
use cradle_core::namer::{namer, NameSuggestion, NamerError};
use cradle_core::request::NamingRequest;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    layout::{Constraint, Layout},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use super::form::{FormArea, FormAction};
use super::results::ResultsArea;

type SuggestionOutcome = Result<Vec<NameSuggestion>, NamerError>;

/// The interactive session: form on the left, the results slot on the right,
/// one suggestion request per submission.
pub struct App<'a> {
    form: FormArea<'a>,
    results: ResultsArea,

    outcome_tx: mpsc::UnboundedSender<SuggestionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SuggestionOutcome>,
    in_flight: bool,
    exit: bool,
}

impl App<'_> {
    pub fn new() -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            form: FormArea::new(),
            results: ResultsArea::new(),
            outcome_tx,
            outcome_rx,
            in_flight: false,
            exit: false,
        }
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut terminal = ratatui::init();
        let result = self.try_run(&mut terminal).await;
        ratatui::restore();
        result
    }

    async fn try_run(&mut self, terminal: &mut DefaultTerminal) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = EventStream::new();
        // spinner redraw cadence
        let mut animation_timer = interval(Duration::from_millis(100));

        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                crossterm_event = reader.next() => {
                    if let Some(Ok(event)) = crossterm_event {
                        self.handle_crossterm_event(event);
                    }
                }

                outcome = self.outcome_rx.recv() => {
                    if let Some(outcome) = outcome {
                        self.handle_outcome(outcome);
                    }
                }

                _ = animation_timer.tick() => {
                    // Timer ticked, UI will be redrawn in the next iteration
                }
            }
        }
        Ok(())
    }

    fn handle_crossterm_event(&mut self, event: Event) {
        if let Event::Key(key_event) = event {
            if key_event.kind == KeyEventKind::Press {
                self.handle_key_event(key_event);
            }
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if matches!(key_event.code, KeyCode::Char('c'))
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.exit = true;
            return;
        }

        match self.form.handle_event(key_event) {
            FormAction::Quit => self.exit = true,
            FormAction::Submit(request) => self.submit(request),
            FormAction::Nope => {}
        }
    }

    /// Validation happens before any network call: an invalid surname never
    /// leaves the form. A valid request runs on its own task so the form
    /// stays responsive, and its outcome comes back over the channel.
    fn submit(&mut self, request: NamingRequest) {
        if self.in_flight {
            return;
        }
        if let Err(e) = request.validate() {
            self.form.set_error(&e.to_string());
            return;
        }

        self.form.clear_error();
        self.form.set_busy(true);
        self.in_flight = true;

        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = match CradleConfig::get_llm().await {
                Ok((llm, model)) => namer(llm, model, request).await,
                Err(e) => Err(NamerError::Service(e.to_string())),
            };
            // receiver gone means the app already exited
            let _ = tx.send(outcome);
        });
    }

    /// Last completed request wins the results slot. Errors surface in the
    /// results pane and control always returns to the form.
    fn handle_outcome(&mut self, outcome: SuggestionOutcome) {
        self.in_flight = false;
        self.form.set_busy(false);

        match outcome {
            Ok(suggestions) => {
                self.results.set_suggestions(suggestions);
                self.form.set_status("Name suggestions generated");
            }
            Err(e) => {
                self.results.set_error(e.to_string());
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [form_area, results_area] = Layout::horizontal([
            Constraint::Length(46),
            Constraint::Fill(1),
        ])
        .areas(frame.area());

        self.form.draw(frame, form_area);
        self.results.draw(frame, results_area);
    }
}
