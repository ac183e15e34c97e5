use crate::gui::screens::{
    Request, analytics::AnalyticsMessage, assignment_create::AssignmentCreateMessage,
    classroom::ClassroomMessage, dashboard::DashboardMessage, login::LoginMessage,
    settings::SettingsMessage, submissions::SubmissionsMessage,
};

#[derive(Debug, Clone)]
pub enum Message {
    Login(LoginMessage),
    Dashboard(DashboardMessage),
    Classroom(ClassroomMessage),
    AssignmentCreate(AssignmentCreateMessage),
    Submissions(SubmissionsMessage),
    Analytics(AnalyticsMessage),
    Settings(SettingsMessage),
    Request(Request),
}
