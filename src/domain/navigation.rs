//! Screen navigation state machine.
//!
//! Home is the hub; Detect and Risk only lead back to Home. Predictions never
//! change the active screen.

/// Screen shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Detect,
    Risk,
}

/// Navigation action triggered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ChooseDetect,
    ChooseRisk,
    Back,
}

/// Outcome of applying a [`NavAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

impl Transition {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// Screen that was just entered, if the screen changed.
    #[must_use]
    pub fn entered(&self) -> Option<Screen> {
        self.changed().then_some(self.to)
    }
}

/// Session navigation state. Starts on [`Screen::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    current_screen: Screen,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Apply an action. Pairs without a defined transition leave the state as is.
    pub fn apply(&mut self, action: NavAction) -> Transition {
        let from = self.current_screen;
        let to = match (from, action) {
            (Screen::Home, NavAction::ChooseDetect) => Screen::Detect,
            (Screen::Home, NavAction::ChooseRisk) => Screen::Risk,
            (Screen::Detect | Screen::Risk, NavAction::Back) => Screen::Home,
            (current, _) => current,
        };
        self.current_screen = to;
        Transition { from, to }
    }
}
