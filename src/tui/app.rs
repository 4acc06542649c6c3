//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Service integration

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::application::PredictionService;
use crate::config::AppConfig;
use crate::domain::{NavAction, NavigationState, Screen};

use super::ui::{
    detect::{render_detect, DetectFormState},
    form::Form,
    home::{render_home, HomeState},
    render_disclaimer,
    risk::{render_risk, RiskFormState},
};

/// Main application state
pub struct App {
    navigation: NavigationState,

    /// Whether the app should quit
    should_quit: bool,

    /// Shared, read-only classifiers
    service: PredictionService,

    home_state: HomeState,
    detect_form: DetectFormState,
    risk_form: RiskFormState,
}

impl App {
    /// Create the application, loading both models named by `config`.
    ///
    /// # Errors
    /// Returns error if either model cannot be loaded; the app does not start
    /// without both.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let service =
            PredictionService::from_config(config).context("Failed to load prediction models")?;
        Ok(Self::with_service(service))
    }

    /// Create the application around an already-built service.
    #[must_use]
    pub fn with_service(service: PredictionService) -> Self {
        let home_state = HomeState {
            detection_model: service.detection_model().to_string(),
            risk_model: service.risk_model().to_string(),
        };
        Self {
            navigation: NavigationState::new(),
            should_quit: false,
            service,
            home_state,
            detect_form: DetectFormState::default(),
            risk_form: RiskFormState::default(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.navigation.current_screen()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(f.area());

                match self.screen() {
                    Screen::Home => render_home(f, chunks[0], &self.home_state),
                    Screen::Detect => render_detect(f, chunks[0], &self.detect_form),
                    Screen::Risk => render_risk(f, chunks[0], &self.risk_form),
                }

                render_disclaimer(f, chunks[1]);
            })?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases too
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen() {
            Screen::Home => self.handle_home_key(key),
            Screen::Detect | Screen::Risk => self.handle_form_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('d' | 'D') => self.navigate(NavAction::ChooseDetect),
            KeyCode::Char('r' | 'R') => self.navigate(NavAction::ChooseRisk),
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.navigate(NavAction::Back),
            KeyCode::Enter => self.submit(),
            KeyCode::Char('s' | 'S') => match self.screen() {
                Screen::Detect => self.detect_form.load_sample_data(),
                Screen::Risk => self.risk_form.load_sample_data(),
                Screen::Home => {}
            },
            key => {
                let edited = self.active_form().is_some_and(|form| edit_form(form, key));
                if edited {
                    self.clear_result();
                }
            }
        }
    }

    fn active_form(&mut self) -> Option<&mut Form> {
        match self.screen() {
            Screen::Detect => Some(&mut self.detect_form.form),
            Screen::Risk => Some(&mut self.risk_form.form),
            Screen::Home => None,
        }
    }

    /// Drop a shown result once the answers it was computed from change.
    fn clear_result(&mut self) {
        let (outcome, error_message) = match self.screen() {
            Screen::Detect => (
                &mut self.detect_form.outcome,
                &mut self.detect_form.error_message,
            ),
            Screen::Risk => (&mut self.risk_form.outcome, &mut self.risk_form.error_message),
            Screen::Home => return,
        };
        *outcome = None;
        *error_message = None;
    }

    fn navigate(&mut self, action: NavAction) {
        let transition = self.navigation.apply(action);
        // Every visit starts from a fresh form
        match transition.entered() {
            Some(Screen::Detect) => self.detect_form = DetectFormState::default(),
            Some(Screen::Risk) => self.risk_form = RiskFormState::default(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.screen() {
            Screen::Detect => self.submit_detection(),
            Screen::Risk => self.submit_risk(),
            Screen::Home => {}
        }
    }

    fn submit_detection(&mut self) {
        let state = &mut self.detect_form;
        state.form.commit_all();
        match self.service.assess_detection(&state.to_input()) {
            Ok(outcome) => {
                state.outcome = Some(outcome);
                state.error_message = None;
            }
            Err(e) => {
                tracing::error!("Detection prediction failed: {}", e);
                state.outcome = None;
                state.error_message = Some(e.to_string());
            }
        }
    }

    fn submit_risk(&mut self) {
        let state = &mut self.risk_form;
        state.form.commit_all();
        match self.service.assess_risk(&state.to_input()) {
            Ok(outcome) => {
                state.outcome = Some(outcome);
                state.error_message = None;
            }
            Err(e) => {
                tracing::error!("Risk prediction failed: {}", e);
                state.outcome = None;
                state.error_message = Some(e.to_string());
            }
        }
    }
}

/// Apply an editing key. Returns whether a field's answer changed.
fn edit_form(form: &mut Form, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::BackTab => {
            form.prev_field();
            false
        }
        KeyCode::Down | KeyCode::Tab => {
            form.next_field();
            false
        }
        KeyCode::Left => {
            form.decrement();
            true
        }
        KeyCode::Right => {
            form.increment();
            true
        }
        KeyCode::Backspace => form.delete_char(),
        KeyCode::Char(c) => form.input_char(c),
        _ => false,
    }
}
