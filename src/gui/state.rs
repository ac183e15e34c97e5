use iced::Theme;

use crate::core::{ActiveScreen, Frame, Session, ViewNavigator};
use crate::gui::screens::Request;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

/// Owns the navigator. Screens only ever see `session()`; every mutation goes
/// through [`AppState::apply`].
#[derive(Debug, Default)]
pub struct AppState {
    navigator: ViewNavigator,
    pub theme: ThemeChoice,
}

impl AppState {
    pub fn new(theme: ThemeChoice) -> Self {
        Self {
            navigator: ViewNavigator::new(),
            theme,
        }
    }

    pub fn session(&self) -> &Session {
        self.navigator.session()
    }

    pub fn frame(&self) -> Frame {
        self.navigator.frame()
    }

    pub fn apply(&mut self, request: Request) -> ActiveScreen {
        match request {
            Request::Navigate(view, selection) => self.navigator.navigate(view, selection),
            Request::Login => self.navigator.login(),
            Request::Logout => self.navigator.logout(),
        }
        self.navigator.screen()
    }
}
