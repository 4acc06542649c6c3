//! Color palette and preset styles.
//!
//! Warm pastel accent on a dark background, with semantic colors reserved for
//! the two prediction outcomes.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::PredictionLabel;

/// HeartWise color palette.
pub struct HeartTheme;

impl HeartTheme {
    // === Accent ===

    /// Heart red, primary accent
    pub const PRIMARY: Color = Color::Rgb(225, 29, 72); // #E11D48

    /// Soft pink for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(251, 113, 133); // #FB7185

    /// Pale yellow, used for headings
    pub const HIGHLIGHT: Color = Color::Rgb(255, 249, 196); // #FFF9C4

    // === Semantic Colors ===

    /// Emerald, low risk / no signs
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129); // #10B981

    /// Rose, at risk / signs present
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    // === Neutrals ===

    pub const BORDER: Color = Color::Rgb(148, 163, 184); // #94A3B8

    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Focused field title
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Text cursor in a field being edited
    #[must_use]
    pub fn cursor() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for a prediction outcome
    #[must_use]
    pub fn outcome(label: PredictionLabel) -> Style {
        match label {
            PredictionLabel::Negative => Self::success(),
            PredictionLabel::Positive => Self::danger(),
        }
    }
}
