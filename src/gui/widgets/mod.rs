use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{Column, button, column, container, container::bordered_box, row, scrollable, text},
};

use crate::{core::View, sample::Accent};

/// Entries of the shared sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Classes,
    Assignments,
    Resources,
    Analytics,
    Settings,
}

impl NavItem {
    pub const ALL: [NavItem; 6] = [
        NavItem::Home,
        NavItem::Classes,
        NavItem::Assignments,
        NavItem::Resources,
        NavItem::Analytics,
        NavItem::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Classes => "Classes",
            NavItem::Assignments => "Assignments",
            NavItem::Resources => "Resources",
            NavItem::Analytics => "Analytics",
            NavItem::Settings => "Settings",
        }
    }

    // Classes, Assignments and Resources have no screen of their own yet.
    pub fn target(self) -> View {
        match self {
            NavItem::Home | NavItem::Classes | NavItem::Assignments | NavItem::Resources => {
                View::Dashboard
            }
            NavItem::Analytics => View::Analytics,
            NavItem::Settings => View::Settings,
        }
    }
}

pub fn accent_color(accent: Accent) -> Color {
    let (r, g, b) = accent.rgb8();
    Color::from_rgb8(r, g, b)
}

/// Sidebar plus scrollable main area, shared by every post-login screen.
pub fn shell<'a, Message>(
    active: Option<NavItem>,
    navigate: impl Fn(View) -> Message,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let menu = Column::with_children(NavItem::ALL.into_iter().map(|item| {
        let entry = button(text(item.label()))
            .width(Length::Fill)
            .on_press(navigate(item.target()));
        let entry: Element<'a, Message> = if Some(item) == active {
            entry.style(button::primary).into()
        } else {
            entry.style(button::text).into()
        };
        entry
    }))
    .spacing(4);

    let sidebar = column![
        row![brand_mark(), text(crate::sample::APP_NAME).size(18)]
            .spacing(8)
            .align_y(Center),
        menu,
    ]
    .spacing(20)
    .padding(16);

    row![
        container(sidebar)
            .width(Length::Fixed(220.0))
            .height(Length::Fill)
            .style(bordered_box),
        scrollable(container(main_content.into()).padding(24).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .into()
}

fn brand_mark<'a, Message: 'a>() -> Element<'a, Message> {
    container(text("CO").size(14).color(Color::WHITE))
        .padding(8)
        .style(|theme: &Theme| {
            bordered_box(theme)
                .background(accent_color(Accent::Blue))
                .border(border::rounded(8))
        })
        .into()
}

pub fn header<'a, Message: 'a>(title: impl ToString, subtitle: impl ToString) -> Element<'a, Message> {
    column![text(title.to_string()).size(30), text(subtitle.to_string()).size(14)]
        .spacing(6)
        .into()
}

pub fn card<'a, Message: 'a>(
    title: impl ToString,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(
        column![text(title.to_string()).size(18), content.into()]
            .spacing(12)
            .width(Length::Fill),
    )
    .padding(16)
    .width(Length::Fill)
    .style(|theme: &Theme| bordered_box(theme).border(border::rounded(8).width(1.0)))
    .into()
}

pub fn badge<'a, Message: 'a>(label: impl ToString, accent: Accent) -> Element<'a, Message> {
    container(text(label.to_string()).size(12).color(Color::WHITE))
        .padding([2, 8])
        .style(move |theme: &Theme| {
            bordered_box(theme)
                .background(accent_color(accent))
                .border(border::rounded(10))
        })
        .into()
}

pub fn dot<'a, Message: 'a>(accent: Accent) -> Element<'a, Message> {
    container(text(""))
        .width(Length::Fixed(10.0))
        .height(Length::Fixed(10.0))
        .style(move |theme: &Theme| {
            bordered_box(theme)
                .background(accent_color(accent))
                .border(border::rounded(5))
        })
        .into()
}

/// Horizontal bar filling `fraction` of the available width.
pub fn bar<'a, Message: 'a>(fraction: f32, accent: Accent) -> Element<'a, Message> {
    let filled = ((fraction.clamp(0.0, 1.0) * 1000.0).round() as u16).max(1);
    let rest = 1000u16.saturating_sub(filled).max(1);
    row![
        container(text(""))
            .width(Length::FillPortion(filled))
            .height(Length::Fixed(12.0))
            .style(move |theme: &Theme| bordered_box(theme).background(accent_color(accent))),
        container(text("")).width(Length::FillPortion(rest)),
    ]
    .width(Length::Fill)
    .into()
}

pub fn offline_banner<'a, Message: 'a>() -> Element<'a, Message> {
    container(
        text("Offline Mode Active - Changes will sync when connected")
            .size(14)
            .color(Color::WHITE),
    )
    .padding([8, 16])
    .center_x(Length::Fill)
    .style(|theme: &Theme| bordered_box(theme).background(accent_color(Accent::Orange)))
    .into()
}
