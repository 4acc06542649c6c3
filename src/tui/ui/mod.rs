//! UI module: View components for the TUI.

pub mod detect;
pub mod form;
pub mod home;
pub mod outcome;
pub mod risk;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::HeartTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: Predictions are indicative only and do not replace a doctor's advice.",
            HeartTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Models named *_demo (the bundled defaults) are not clinically trained.",
            HeartTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(HeartTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
