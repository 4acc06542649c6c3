//! TUI module: Terminal User Interface using Ratatui.
//!
//! Three screens:
//! - Home with the assessment choices
//! - Heart disease detection form
//! - Lifestyle risk estimator form

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::HeartTheme;
