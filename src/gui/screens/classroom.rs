use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, Row, button, column, row, text},
};

use crate::{
    core::{SelectionUpdate, Session, View},
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::{badge, card, header, shell},
    },
    sample::{self, Accent, AssignmentStatus},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Stream,
    Assignments,
    Resources,
    Students,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Stream, Tab::Assignments, Tab::Resources, Tab::Students];

    fn label(self) -> &'static str {
        match self {
            Tab::Stream => "Stream",
            Tab::Assignments => "Assignments",
            Tab::Resources => "Resources",
            Tab::Students => "Students",
        }
    }
}

#[derive(Debug, Default)]
pub struct ClassroomScreen {
    pub(crate) tab: Tab,
}

#[derive(Debug, Clone)]
pub enum ClassroomMessage {
    SelectTab(Tab),
}

type Msg = ScreenMessage<ClassroomScreen>;

impl ClassroomScreen {
    fn stream<'a>() -> Element<'a, Msg> {
        column![
            card(
                "New assignment posted",
                column![
                    text("Algebra Basics - Due January 15th").size(14),
                    text("Posted 2 hours ago").size(12),
                ]
                .spacing(4),
            ),
            card(
                "Student submissions",
                column![
                    text("18 students have submitted Word Problems assignment").size(14),
                    text("Updated 1 hour ago").size(12),
                ]
                .spacing(4),
            ),
        ]
        .spacing(12)
        .into()
    }

    fn assignments<'a>(session: &'a Session) -> Element<'a, Msg> {
        let class_id = session.selected_class_id.clone();
        let create = ScreenMessage::request(Request::Navigate(
            View::AssignmentCreate,
            SelectionUpdate::default().with_class(class_id.clone()),
        ));

        let list = Column::with_children(sample::class_assignments().into_iter().map(|a| {
            let status = match a.status {
                AssignmentStatus::Published => Accent::Blue,
                AssignmentStatus::Draft => Accent::Purple,
            };
            let view_submissions = ScreenMessage::request(Request::Navigate(
                View::Submissions,
                SelectionUpdate::assignment(a.id.clone()).with_class(class_id.clone()),
            ));
            card(
                a.title.clone(),
                row![
                    badge(a.status.label(), status),
                    text(format!("Due {}", a.due_date)).size(14),
                    text(format!("{}/{} submitted", a.submissions, a.total))
                        .size(14)
                        .width(Length::Fill),
                    button(text("View Submissions"))
                        .style(button::secondary)
                        .on_press(view_submissions),
                ]
                .spacing(16)
                .align_y(Center),
            )
        }))
        .spacing(12);

        column![
            row![
                text("Assignments").size(22).width(Length::Fill),
                button(text("Create Assignment")).on_press(create),
            ]
            .align_y(Center),
            list,
        ]
        .spacing(16)
        .into()
    }

    fn resources<'a>() -> Element<'a, Msg> {
        let list = Row::with_children(sample::resources().into_iter().map(|r| {
            card(r.name, text(format!("{} • {}", r.kind, r.size)).size(12))
        }))
        .spacing(12);

        column![
            row![
                text("Resources").size(22).width(Length::Fill),
                button(text("Upload Resource")).style(button::secondary),
            ]
            .align_y(Center),
            list,
        ]
        .spacing(16)
        .into()
    }

    fn students<'a>() -> Element<'a, Msg> {
        let students = sample::students();
        let title = format!("Students ({})", students.len());
        let list = Row::with_children(students.into_iter().map(|s| {
            card(
                s.name,
                column![
                    text(format!("Grade: {}", s.grade)).size(14),
                    text(format!("Completion: {}%", s.completion)).size(14),
                    text(format!("Last Active: {}", s.last_active)).size(12),
                ]
                .spacing(4),
            )
        }))
        .spacing(12);

        column![
            row![
                text(title).size(22).width(Length::Fill),
                button(text("Add Student")).style(button::secondary),
            ]
            .align_y(Center),
            list,
        ]
        .spacing(16)
        .into()
    }
}

impl Screen for ClassroomScreen {
    type Message = ClassroomMessage;
    type ParentMessage = Request;

    fn view<'a>(&'a self, session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let class = sample::class_by_id(session.selected_class_id.as_ref());

        let tabs = Row::with_children(Tab::ALL.into_iter().map(|tab| {
            let entry = button(text(tab.label()))
                .width(Length::Fill)
                .on_press(ScreenMessage::ScreenMessage(ClassroomMessage::SelectTab(tab)));
            let entry: Element<'a, Msg> = if tab == self.tab {
                entry.style(button::primary).into()
            } else {
                entry.style(button::secondary).into()
            };
            entry
        }))
        .spacing(4);

        let body = match self.tab {
            Tab::Stream => Self::stream(),
            Tab::Assignments => Self::assignments(session),
            Tab::Resources => Self::resources(),
            Tab::Students => Self::students(),
        };

        let content = column![
            button(text("< Back to Dashboard"))
                .style(button::text)
                .on_press(ScreenMessage::go(View::Dashboard)),
            header(
                &class.name,
                format!("{} students • {}", class.students, class.description),
            ),
            tabs,
            body,
        ]
        .spacing(20);

        shell(None, ScreenMessage::<Self>::go, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _session: &Session,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ClassroomMessage::SelectTab(tab) => {
                self.tab = tab;
                Task::none()
            }
        }
    }
}
