//! Prediction outcome panel.

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::Outcome;
use crate::tui::styles::HeartTheme;

/// Render the headline and recommendation list selected by a prediction.
pub fn render_outcome(f: &mut Frame, area: Rect, outcome: &Outcome) {
    let style = HeartTheme::outcome(outcome.label);
    let icon = if outcome.is_positive() { "!" } else { "OK" };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{icon} {}", outcome.headline),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(outcome.heading, HeartTheme::subtitle())),
    ];
    lines.extend(outcome.tips.iter().map(|tip| {
        Line::from(vec![
            Span::styled("  • ", style),
            Span::styled(*tip, HeartTheme::text()),
        ])
    }));

    let block = Block::default()
        .title(Span::styled(" Result ", HeartTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(style);

    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}
