//! Form widgets shared by the assessment screens.
//!
//! Every widget keeps its value inside the declared range: spinners and
//! sliders clamp, selectors wrap. A form therefore always describes a valid
//! input and conversion to domain types cannot fail.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{Choice, FieldRange, Outcome};
use crate::tui::styles::HeartTheme;

use super::outcome::render_outcome;

const SLIDER_WIDTH: usize = 14;

/// Input widget backing a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Numeric input: step with arrows or type a value.
    Spinner { range: FieldRange, value: i64 },
    /// Small whole-number range adjusted with arrows.
    Slider { range: FieldRange, value: i64 },
    /// Single choice among fixed options.
    Select {
        options: &'static [&'static str],
        selected: usize,
    },
}

/// A labeled form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub widget: Widget,
    /// Text typed into a spinner, applied when the field is committed.
    pub entry: Option<String>,
}

impl FormField {
    #[must_use]
    pub fn spinner(label: &'static str, range: FieldRange) -> Self {
        Self {
            label,
            widget: Widget::Spinner {
                range,
                value: range.default,
            },
            entry: None,
        }
    }

    #[must_use]
    pub fn slider(label: &'static str, range: FieldRange) -> Self {
        Self {
            label,
            widget: Widget::Slider {
                range,
                value: range.default,
            },
            entry: None,
        }
    }

    /// Selector over fixed options; the first option is the default.
    #[must_use]
    pub fn select(label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            label,
            widget: Widget::Select {
                options,
                selected: 0,
            },
            entry: None,
        }
    }

    /// Selector over a [`Choice`] enum in its display order.
    #[must_use]
    pub fn choice<T: Choice>(label: &'static str) -> Self {
        Self::select(label, T::LABELS)
    }

    /// Committed numeric value (0 for selectors).
    #[must_use]
    pub fn value(&self) -> i64 {
        match &self.widget {
            Widget::Spinner { value, .. } | Widget::Slider { value, .. } => *value,
            Widget::Select { .. } => 0,
        }
    }

    /// Selected option index (0 for numeric widgets).
    #[must_use]
    pub fn selected(&self) -> usize {
        match &self.widget {
            Widget::Select { selected, .. } => *selected,
            _ => 0,
        }
    }

    #[must_use]
    pub fn selected_label(&self) -> Option<&'static str> {
        match &self.widget {
            Widget::Select { options, selected } => options.get(*selected).copied(),
            _ => None,
        }
    }

    /// Selected option of a [`Choice`] selector.
    #[must_use]
    pub fn choice_value<T: Choice>(&self) -> T {
        T::from_index(self.selected())
    }

    /// Whether a Yes/No selector is on "Yes".
    #[must_use]
    pub fn is_yes(&self) -> bool {
        self.selected_label() == Some("Yes")
    }

    /// Set a numeric value (clamped) or a selector index (wrapped).
    pub fn set(&mut self, raw: i64) {
        self.entry = None;
        match &mut self.widget {
            Widget::Spinner { range, value } | Widget::Slider { range, value } => {
                *value = range.clamp(raw);
            }
            Widget::Select { options, selected } => {
                *selected = raw.rem_euclid(options.len() as i64) as usize;
            }
        }
    }

    /// Step up one unit, or to the next option.
    pub fn increment(&mut self) {
        self.step(1);
    }

    /// Step down one unit, or to the previous option.
    pub fn decrement(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: i64) {
        self.commit();
        let next = match &self.widget {
            Widget::Spinner { value, .. } | Widget::Slider { value, .. } => *value + delta,
            Widget::Select { selected, .. } => *selected as i64 + delta,
        };
        self.set(next);
    }

    /// Type a character into a spinner. Returns whether it was accepted.
    pub fn input_char(&mut self, c: char) -> bool {
        let Widget::Spinner { range, .. } = &self.widget else {
            return false;
        };
        let accepted = c.is_ascii_digit() || (c == '.' && range.decimals > 0);
        if !accepted {
            return false;
        }

        let entry = self.entry.get_or_insert_with(String::new);
        if c == '.' && entry.contains('.') {
            return false;
        }
        entry.push(c);
        true
    }

    /// Remove the last typed character. Returns whether one was removed.
    pub fn delete_char(&mut self) -> bool {
        self.entry.as_mut().and_then(String::pop).is_some()
    }

    /// Apply typed text. Unparseable text is discarded.
    pub fn commit(&mut self) {
        let Some(entry) = self.entry.take() else {
            return;
        };
        if let Widget::Spinner { range, value } = &mut self.widget {
            if let Some(raw) = range.parse(&entry) {
                *value = range.clamp(raw);
            }
        }
    }

    /// Current display text.
    #[must_use]
    pub fn display(&self) -> String {
        if let Some(entry) = &self.entry {
            return entry.clone();
        }
        match &self.widget {
            Widget::Spinner { range, value } => format!("◀ {} ▶", range.format(*value)),
            Widget::Slider { range, value } => {
                let span = (range.max - range.min).max(1) as usize;
                let filled = ((*value - range.min) as usize * SLIDER_WIDTH) / span;
                format!(
                    "{}{} {}",
                    "█".repeat(filled),
                    "░".repeat(SLIDER_WIDTH - filled),
                    range.format(*value)
                )
            }
            Widget::Select { options, selected } => {
                format!("◀ {} ▶", options.get(*selected).copied().unwrap_or(""))
            }
        }
    }

    #[must_use]
    pub fn hint(&self) -> String {
        match &self.widget {
            Widget::Spinner { range, .. } | Widget::Slider { range, .. } => {
                format!("{}-{}", range.format(range.min), range.format(range.max))
            }
            Widget::Select { options, .. } => format!("{} options", options.len()),
        }
    }
}

/// Ordered fields with a focus cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
}

impl Form {
    #[must_use]
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            selected_field: 0,
        }
    }

    #[must_use]
    pub fn field(&self, index: usize) -> &FormField {
        &self.fields[index]
    }

    pub fn field_mut(&mut self, index: usize) -> &mut FormField {
        &mut self.fields[index]
    }

    fn current(&mut self) -> &mut FormField {
        &mut self.fields[self.selected_field]
    }

    pub fn next_field(&mut self) {
        self.current().commit();
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.current().commit();
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    pub fn increment(&mut self) {
        self.current().increment();
    }

    pub fn decrement(&mut self) {
        self.current().decrement();
    }

    pub fn input_char(&mut self, c: char) -> bool {
        self.current().input_char(c)
    }

    pub fn delete_char(&mut self) -> bool {
        self.current().delete_char()
    }

    /// Apply any typed text in every field.
    pub fn commit_all(&mut self) {
        for field in &mut self.fields {
            field.commit();
        }
    }
}

/// Everything needed to draw an assessment screen.
pub struct FormView<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub form: &'a Form,
    pub outcome: Option<&'a Outcome>,
    pub error_message: Option<&'a str>,
    pub submit_label: &'a str,
}

/// Render an assessment screen: header, fields, outcome and footer.
pub fn render_form_screen(f: &mut Frame, area: Rect, view: &FormView<'_>) {
    let outcome_height = view.outcome.map_or(0, |o| o.tips.len() as u16 + 6);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Min(0),                 // Fields
            Constraint::Length(outcome_height), // Outcome
            Constraint::Length(3),              // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0], view.title, view.subtitle);
    render_form_fields(f, chunks[1], view.form);
    if let Some(outcome) = view.outcome {
        render_outcome(f, chunks[2], outcome);
    }
    render_form_footer(f, chunks[3], view.error_message, view.submit_label);
}

fn render_form_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", HeartTheme::text()),
        Span::styled(title.to_string(), HeartTheme::title()),
        Span::styled(format!(" │ {subtitle}"), HeartTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(HeartTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, form: &Form) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (form.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &form.fields[..mid], 0, form.selected_field);
    render_field_column(
        f,
        columns[1],
        &form.fields[mid..],
        mid,
        form.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            HeartTheme::border_focused()
        } else {
            HeartTheme::border()
        };
        let title_style = if is_selected {
            HeartTheme::focused()
        } else {
            HeartTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let editing = is_selected && field.entry.is_some();
        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(field.display(), HeartTheme::text()),
            if editing {
                Span::styled("▌", HeartTheme::cursor())
            } else {
                Span::raw("")
            },
            Span::styled(format!("  ({})", field.hint()), HeartTheme::text_muted()),
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, error: Option<&str>, submit_label: &str) {
    let content = if let Some(err) = error {
        Line::from(vec![
            Span::styled("! ", HeartTheme::danger()),
            Span::styled(err.to_string(), HeartTheme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", HeartTheme::key_hint()),
            Span::styled("Field ", HeartTheme::key_desc()),
            Span::styled("[←→] ", HeartTheme::key_hint()),
            Span::styled("Change ", HeartTheme::key_desc()),
            Span::styled("[0-9] ", HeartTheme::key_hint()),
            Span::styled("Type ", HeartTheme::key_desc()),
            Span::styled("[Enter] ", HeartTheme::key_hint()),
            Span::styled(format!("{submit_label} "), HeartTheme::key_desc()),
            Span::styled("[S] ", HeartTheme::key_hint()),
            Span::styled("Sample ", HeartTheme::key_desc()),
            Span::styled("[Esc] ", HeartTheme::key_hint()),
            Span::styled("Back to Home", HeartTheme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(HeartTheme::border()),
    );

    f.render_widget(footer, area);
}
