use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, Row, button, column, row, text},
};

use crate::{
    core::{SelectionUpdate, Session, View},
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::{NavItem, card, dot, header, shell},
    },
    sample,
};

#[derive(Debug, Clone)]
pub struct DashboardScreen;

pub type DashboardMessage = Infallible;

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = Request;

    fn view<'a>(&'a self, _session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let stats = Row::with_children(sample::quick_stats().into_iter().map(|stat| {
            card(
                stat.value,
                column![text(stat.label).size(14), text(stat.trend).size(12)].spacing(4),
            )
        }))
        .spacing(16);

        let classes = Row::with_children(sample::classes().into_iter().map(|class| {
            let open = ScreenMessage::request(Request::Navigate(
                View::Classroom,
                SelectionUpdate::class(class.id.clone()),
            ));
            card(
                class.name,
                column![
                    row![dot(class.accent), text(format!("{} students", class.students))]
                        .spacing(8)
                        .align_y(Center),
                    text(format!("Next: {}", class.next_assignment)).size(14),
                    button(text("Open Class"))
                        .width(Length::Fill)
                        .style(button::secondary)
                        .on_press(open),
                ]
                .spacing(8),
            )
        }))
        .spacing(16);

        let activity = Column::with_children(sample::recent_activity().into_iter().map(|item| {
            row![
                dot(item.accent),
                text(item.text).size(14).width(Length::Fill),
                text(item.when).size(12),
            ]
            .spacing(12)
            .align_y(Center)
            .into()
        }))
        .spacing(10);

        let content = column![
            header(
                "Dashboard",
                "Welcome back! Here's what's happening in your classes."
            ),
            stats,
            row![
                text("Your Classes").size(22).width(Length::Fill),
                button(text("Add Class")).style(button::secondary),
            ]
            .align_y(Center),
            classes,
            card("Recent Activity", activity),
        ]
        .spacing(24);

        shell(Some(NavItem::Home), ScreenMessage::<Self>::go, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _session: &Session,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
