pub mod analytics;
pub mod assignment_create;
pub mod classroom;
pub mod dashboard;
pub mod login;
pub mod settings;
pub mod submissions;

use iced::{Element, Task};

use crate::{
    core::{ActiveScreen, ScreenKind, SelectionUpdate, Session, View},
    gui::Message,
};

/// What a screen may ask of the navigator. Screens never touch the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Navigate(View, SelectionUpdate),
    Login,
    Logout,
}

impl Request {
    pub fn go(view: View) -> Self {
        Request::Navigate(view, SelectionUpdate::default())
    }
}

#[derive(Debug)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

// Derive would demand `S: Clone`, which screens holding editor content are not.
impl<S: Screen> Clone for ScreenMessage<S>
where
    S::Message: Clone,
    S::ParentMessage: Clone,
{
    fn clone(&self) -> Self {
        match self {
            ScreenMessage::ScreenMessage(msg) => ScreenMessage::ScreenMessage(msg.clone()),
            ScreenMessage::ParentMessage(msg) => ScreenMessage::ParentMessage(msg.clone()),
        }
    }
}

impl<S: Screen<ParentMessage = Request>> ScreenMessage<S> {
    pub fn request(request: Request) -> Self {
        ScreenMessage::ParentMessage(request)
    }

    pub fn go(view: View) -> Self {
        ScreenMessage::ParentMessage(Request::go(view))
    }
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, session: &'a Session) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, session: &Session)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug)]
pub enum ScreenData {
    Login(login::LoginScreen),
    Dashboard(dashboard::DashboardScreen),
    Classroom(classroom::ClassroomScreen),
    AssignmentCreate(assignment_create::AssignmentCreateScreen),
    Submissions(submissions::SubmissionsScreen),
    Analytics(analytics::AnalyticsScreen),
    Settings(settings::SettingsScreen),
}

fn lift<S>(
    wrap: fn(S::Message) -> Message,
) -> impl Fn(ScreenMessage<S>) -> Message
where
    S: Screen<ParentMessage = Request>,
{
    move |message| match message {
        ScreenMessage::ScreenMessage(msg) => wrap(msg),
        ScreenMessage::ParentMessage(request) => Message::Request(request),
    }
}

impl ScreenData {
    /// Fresh screen with empty local state for what the navigator picked.
    pub fn mount(active: &ActiveScreen) -> Self {
        match active {
            ActiveScreen::Login => ScreenData::Login(login::LoginScreen::default()),
            ActiveScreen::Dashboard => ScreenData::Dashboard(dashboard::DashboardScreen),
            ActiveScreen::Classroom { .. } => {
                ScreenData::Classroom(classroom::ClassroomScreen::default())
            }
            ActiveScreen::AssignmentCreate { .. } => {
                ScreenData::AssignmentCreate(assignment_create::AssignmentCreateScreen::default())
            }
            ActiveScreen::Submissions { assignment_id } => ScreenData::Submissions(
                submissions::SubmissionsScreen::new(assignment_id.as_ref()),
            ),
            ActiveScreen::Analytics => ScreenData::Analytics(analytics::AnalyticsScreen),
            ActiveScreen::Settings => ScreenData::Settings(settings::SettingsScreen::default()),
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            ScreenData::Login(_) => ScreenKind::Login,
            ScreenData::Dashboard(_) => ScreenKind::Dashboard,
            ScreenData::Classroom(_) => ScreenKind::Classroom,
            ScreenData::AssignmentCreate(_) => ScreenKind::AssignmentCreate,
            ScreenData::Submissions(_) => ScreenKind::Submissions,
            ScreenData::Analytics(_) => ScreenKind::Analytics,
            ScreenData::Settings(_) => ScreenKind::Settings,
        }
    }

    pub fn view<'a>(&'a self, session: &'a Session) -> Element<'a, Message> {
        match self {
            ScreenData::Login(screen) => screen.view(session).map(lift(Message::Login)),
            ScreenData::Dashboard(screen) => screen.view(session).map(lift(Message::Dashboard)),
            ScreenData::Classroom(screen) => screen.view(session).map(lift(Message::Classroom)),
            ScreenData::AssignmentCreate(screen) => {
                screen.view(session).map(lift(Message::AssignmentCreate))
            }
            ScreenData::Submissions(screen) => {
                screen.view(session).map(lift(Message::Submissions))
            }
            ScreenData::Analytics(screen) => screen.view(session).map(lift(Message::Analytics)),
            ScreenData::Settings(screen) => screen.view(session).map(lift(Message::Settings)),
        }
    }

    /// Routes a screen message to the mounted screen. Messages addressed to a
    /// screen that has since been unmounted are dropped.
    pub fn update(&mut self, message: Message, session: &Session) -> Task<Message> {
        match (self, message) {
            (ScreenData::Login(page), Message::Login(msg)) => {
                page.update(msg, session).map(lift(Message::Login))
            }
            (ScreenData::Dashboard(page), Message::Dashboard(msg)) => {
                page.update(msg, session).map(lift(Message::Dashboard))
            }
            (ScreenData::Classroom(page), Message::Classroom(msg)) => {
                page.update(msg, session).map(lift(Message::Classroom))
            }
            (ScreenData::AssignmentCreate(page), Message::AssignmentCreate(msg)) => {
                page.update(msg, session).map(lift(Message::AssignmentCreate))
            }
            (ScreenData::Submissions(page), Message::Submissions(msg)) => {
                page.update(msg, session).map(lift(Message::Submissions))
            }
            (ScreenData::Analytics(page), Message::Analytics(msg)) => {
                page.update(msg, session).map(lift(Message::Analytics))
            }
            (ScreenData::Settings(page), Message::Settings(msg)) => {
                page.update(msg, session).map(lift(Message::Settings))
            }
            (screen, msg) => {
                tracing::debug!(screen = ?screen.kind(), ?msg, "dropping message for unmounted screen");
                Task::none()
            }
        }
    }
}
