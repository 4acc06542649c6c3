//! Home view: choose an assessment.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::styles::HeartTheme;

/// Home screen state for rendering.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub detection_model: String,
    pub risk_model: String,
}

/// Render the home screen.
pub fn render_home(f: &mut Frame, area: Rect, state: &HomeState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .margin(1)
        .split(chunks[1]);

    render_choices(f, columns[0]);
    render_model_status(f, columns[1], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", HeartTheme::text()),
        Span::styled("HeartWise", HeartTheme::title()),
        Span::styled(" │ ", HeartTheme::text_muted()),
        Span::styled("Your Heart Health Predictor", HeartTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(HeartTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_choices(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  [D] ", HeartTheme::key_hint()),
            Span::styled("Check if you HAVE Heart Disease", HeartTheme::text()),
        ]),
        Line::from(Span::styled(
            "      Uses clinical measurements such as blood pressure and ECG results.",
            HeartTheme::text_muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [R] ", HeartTheme::key_hint()),
            Span::styled("Check if you are AT RISK of Heart Disease", HeartTheme::text()),
        ]),
        Line::from(Span::styled(
            "      Uses lifestyle answers such as smoking, diet and sleep.",
            HeartTheme::text_muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [Q] ", HeartTheme::key_hint()),
            Span::styled("Quit", HeartTheme::key_desc()),
        ]),
    ];

    let block = Block::default()
        .title(Span::styled(
            " What would you like to do? ",
            HeartTheme::subtitle(),
        ))
        .borders(Borders::ALL)
        .border_style(HeartTheme::border_focused());

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_model_status(f: &mut Frame, area: Rect, state: &HomeState) {
    let mut lines = vec![
        model_line("Detection", &state.detection_model),
        model_line("Risk", &state.risk_model),
        Line::from(""),
    ];
    if is_demo_model(&state.detection_model) || is_demo_model(&state.risk_model) {
        lines.push(Line::from(Span::styled(
            "Demo models: results are examples, not a screening.",
            HeartTheme::danger(),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Answers stay on this machine and are not saved.",
        HeartTheme::text_muted(),
    )));

    let block = Block::default()
        .title(Span::styled(" Models ", HeartTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(HeartTheme::border());

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Suffix carried by the bundled models, which are not clinically trained.
const DEMO_SUFFIX: &str = "_demo";

fn is_demo_model(name: &str) -> bool {
    name.ends_with(DEMO_SUFFIX)
}

fn model_line(label: &str, name: &str) -> Line<'static> {
    let (tag, style) = if is_demo_model(name) {
        ("  DEMO ", HeartTheme::danger())
    } else {
        ("  OK ", HeartTheme::success())
    };
    Line::from(vec![
        Span::styled(tag, style),
        Span::styled(format!("{label}: "), HeartTheme::text_secondary()),
        Span::styled(name.to_string(), HeartTheme::text()),
    ])
}
