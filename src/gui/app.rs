use iced::{Element, Length, Task, Theme, widget::column};
use tracing::debug;

use super::{
    AppState, Message,
    screens::ScreenData,
    state::ThemeChoice,
    widgets::offline_banner,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct GuiOptions {
    pub theme: ThemeChoice,
}

pub struct ClassroomApp {
    state: AppState,
    screen: ScreenData,
}

impl ClassroomApp {
    pub fn new(options: GuiOptions) -> (Self, Task<Message>) {
        let state = AppState::new(options.theme);
        let screen = ScreenData::mount(&state.frame().screen);
        (Self { state, screen }, Task::none())
    }

    pub fn title(&self) -> String {
        "ClassroomOffline - Teacher Class Management".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Request(request) => {
                let active = self.state.apply(request);
                if active.kind() != self.screen.kind() {
                    debug!(from = ?self.screen.kind(), to = ?active.kind(), "mounting screen");
                    self.screen = ScreenData::mount(&active);
                }
                Task::none()
            }
            message => self.screen.update(message, self.state.session()),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let frame = self.state.frame();
        let content = self.screen.view(self.state.session());
        if frame.offline_banner {
            column![offline_banner(), content]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            content
        }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme.theme()
    }
}

pub fn run(options: GuiOptions) -> iced::Result {
    iced::application(
        move || ClassroomApp::new(options),
        ClassroomApp::update,
        ClassroomApp::view,
    )
    .title(ClassroomApp::title)
    .theme(ClassroomApp::theme)
    .window_size((1280.0, 820.0))
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{ClassId, SelectionUpdate, View},
        gui::screens::{
            Request, assignment_create::AssignmentCreateMessage,
            classroom::{ClassroomMessage, Tab},
        },
    };

    fn logged_in_app() -> ClassroomApp {
        let (mut app, _) = ClassroomApp::new(GuiOptions::default());
        let _ = app.update(Message::Request(Request::Login));
        app
    }

    fn go(app: &mut ClassroomApp, view: View) {
        let _ = app.update(Message::Request(Request::go(view)));
    }

    fn classroom_tab(app: &ClassroomApp) -> Option<Tab> {
        match &app.screen {
            ScreenData::Classroom(screen) => Some(screen.tab),
            _ => None,
        }
    }

    fn draft_title(app: &ClassroomApp) -> Option<&str> {
        match &app.screen {
            ScreenData::AssignmentCreate(screen) => Some(screen.draft.title.as_str()),
            _ => None,
        }
    }

    #[test]
    fn leaving_classroom_resets_selected_tab() {
        let mut app = logged_in_app();
        let _ = app.update(Message::Request(Request::Navigate(
            View::Classroom,
            SelectionUpdate::class("1"),
        )));
        let _ = app.update(Message::Classroom(ClassroomMessage::SelectTab(Tab::Students)));
        assert_eq!(classroom_tab(&app), Some(Tab::Students));

        go(&mut app, View::Dashboard);
        assert_eq!(classroom_tab(&app), None);
        go(&mut app, View::Classroom);

        assert_eq!(classroom_tab(&app), Some(Tab::Stream));
        assert_eq!(app.state.session().selected_class_id, Some(ClassId::new("1")));
    }

    #[test]
    fn same_screen_kind_keeps_local_state() {
        let mut app = logged_in_app();
        go(&mut app, View::Classroom);
        let _ = app.update(Message::Classroom(ClassroomMessage::SelectTab(Tab::Resources)));

        let _ = app.update(Message::Request(Request::Navigate(
            View::Classroom,
            SelectionUpdate::class("2"),
        )));
        assert_eq!(classroom_tab(&app), Some(Tab::Resources));
    }

    #[test]
    fn leaving_assignment_form_discards_draft() {
        let mut app = logged_in_app();
        go(&mut app, View::AssignmentCreate);
        let _ = app.update(Message::AssignmentCreate(AssignmentCreateMessage::TitleChanged(
            "Fractions".to_string(),
        )));
        assert_eq!(draft_title(&app), Some("Fractions"));

        go(&mut app, View::Classroom);
        go(&mut app, View::AssignmentCreate);
        assert_eq!(draft_title(&app), Some(""));
    }

    #[test]
    fn logout_remounts_login_screen() {
        let mut app = logged_in_app();
        go(&mut app, View::Settings);
        let _ = app.update(Message::Request(Request::Logout));
        assert!(matches!(app.screen, ScreenData::Login(_)));
        assert!(!app.state.frame().offline_banner);
    }

    #[test]
    fn messages_for_unmounted_screens_are_dropped() {
        let mut app = logged_in_app();
        go(&mut app, View::Analytics);
        let _ = app.update(Message::Classroom(ClassroomMessage::SelectTab(Tab::Students)));
        assert!(matches!(app.screen, ScreenData::Analytics(_)));
    }
}
