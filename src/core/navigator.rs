use tracing::{debug, info};

use crate::core::{
    model::{AssignmentId, ClassId},
    session::{SelectionUpdate, Session},
    view::View,
};

/// Screen chosen for the current session, with the slice of state it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveScreen {
    Login,
    Dashboard,
    Classroom { class_id: Option<ClassId> },
    AssignmentCreate { class_id: Option<ClassId> },
    Submissions { assignment_id: Option<AssignmentId> },
    Analytics,
    Settings,
}

/// Discriminant of [`ActiveScreen`]; a change of kind unmounts the old screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Login,
    Dashboard,
    Classroom,
    AssignmentCreate,
    Submissions,
    Analytics,
    Settings,
}

impl ActiveScreen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            ActiveScreen::Login => ScreenKind::Login,
            ActiveScreen::Dashboard => ScreenKind::Dashboard,
            ActiveScreen::Classroom { .. } => ScreenKind::Classroom,
            ActiveScreen::AssignmentCreate { .. } => ScreenKind::AssignmentCreate,
            ActiveScreen::Submissions { .. } => ScreenKind::Submissions,
            ActiveScreen::Analytics => ScreenKind::Analytics,
            ActiveScreen::Settings => ScreenKind::Settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub screen: ActiveScreen,
    pub offline_banner: bool,
}

#[derive(Debug, Default)]
pub struct ViewNavigator {
    session: Session,
}

impl ViewNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    pub fn navigate(&mut self, view: View, selection: SelectionUpdate) {
        self.session.current_view = view;
        self.session.merge_selection(selection);
        debug!(
            view = %view,
            class_id = ?self.session.selected_class_id,
            assignment_id = ?self.session.selected_assignment_id,
            "navigated"
        );
    }

    /// Shorthand for a navigation that supplies no selection.
    pub fn go(&mut self, view: View) {
        self.navigate(view, SelectionUpdate::default());
    }

    pub fn login(&mut self) {
        self.session.is_logged_in = true;
        self.session.current_view = View::Dashboard;
        info!("teacher logged in");
    }

    pub fn logout(&mut self) {
        self.session = Session::default();
        info!("teacher logged out, session reset");
    }

    pub fn screen(&self) -> ActiveScreen {
        if !self.session.is_logged_in {
            return ActiveScreen::Login;
        }
        match self.session.current_view {
            View::Dashboard => ActiveScreen::Dashboard,
            View::Classroom => ActiveScreen::Classroom {
                class_id: self.session.selected_class_id.clone(),
            },
            View::AssignmentCreate => ActiveScreen::AssignmentCreate {
                class_id: self.session.selected_class_id.clone(),
            },
            View::Submissions => ActiveScreen::Submissions {
                assignment_id: self.session.selected_assignment_id.clone(),
            },
            View::Analytics => ActiveScreen::Analytics,
            View::Settings => ActiveScreen::Settings,
            View::Login => ActiveScreen::Dashboard,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            screen: self.screen(),
            offline_banner: self.session.is_logged_in && self.session.offline_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_always_renders_login() {
        let mut nav = ViewNavigator::new();
        nav.go(View::Analytics);
        assert_eq!(nav.session().current_view, View::Analytics);
        assert_eq!(nav.screen(), ActiveScreen::Login);
    }

    #[test]
    fn login_view_while_logged_in_falls_back_to_dashboard() {
        let mut nav = ViewNavigator::new();
        nav.login();
        nav.go(View::Login);
        assert_eq!(nav.screen(), ActiveScreen::Dashboard);
    }

    #[test]
    fn banner_follows_offline_mode() {
        let mut nav = ViewNavigator::new();
        nav.go(View::Analytics);
        let frame = nav.frame();
        assert_eq!(frame.screen, ActiveScreen::Login);
        assert!(!frame.offline_banner);

        nav.login();
        assert!(nav.frame().offline_banner);

        nav.logout();
        assert!(!nav.frame().offline_banner);
    }
}
