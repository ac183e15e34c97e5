use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, Row, column, container, row, text},
};

use crate::{
    analytics::{GradeBand, Series, StudentStatus, normalized},
    core::Session,
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::{NavItem, badge, bar, card, dot, header, shell},
    },
    sample::{self, Accent},
};

#[derive(Debug, Clone)]
pub struct AnalyticsScreen;

pub type AnalyticsMessage = Infallible;

type Msg = ScreenMessage<AnalyticsScreen>;

const SERIES_ACCENTS: [Accent; 2] = [Accent::Blue, Accent::Green];

/// Grouped bar chart, one group per label, one bar per series.
fn bar_chart<'a>(series: &[Series]) -> Element<'a, Msg> {
    let scaled = normalized(series);
    let labels: Vec<&'static str> = series
        .first()
        .map(|s| s.points.iter().map(|(label, _)| *label).collect())
        .unwrap_or_default();

    let legend = Row::with_children(series.iter().zip(SERIES_ACCENTS).map(|(s, accent)| {
        row![dot(accent), text(s.name).size(12)]
            .spacing(6)
            .align_y(Center)
            .into()
    }))
    .spacing(16);

    let groups = Column::with_children(labels.into_iter().enumerate().map(|(i, label)| {
        let bars = Column::with_children(series.iter().zip(SERIES_ACCENTS).enumerate().filter_map(
            |(s, (values, accent))| {
                let (_, value) = values.points.get(i)?;
                let fraction = scaled.get(s).and_then(|row| row.get(i)).copied()?;
                Some(
                    row![
                        container(bar(fraction, accent)).width(Length::Fill),
                        text(format!("{value:.0}")).size(12),
                    ]
                    .spacing(8)
                    .align_y(Center)
                    .into(),
                )
            },
        ))
        .spacing(2);
        row![text(label).size(12).width(Length::Fixed(110.0)), bars]
            .spacing(8)
            .align_y(Center)
            .into()
    }))
    .spacing(10);

    column![legend, groups].spacing(12).into()
}

fn grade_badge<'a>(grade: &'static str) -> Element<'a, Msg> {
    let accent = match GradeBand::of(grade) {
        GradeBand::A => Accent::Green,
        GradeBand::B => Accent::Blue,
        GradeBand::Other => Accent::Orange,
    };
    badge(grade, accent)
}

fn status_badge<'a>(completion: u8) -> Element<'a, Msg> {
    let status = StudentStatus::of(completion);
    let accent = match status {
        StudentStatus::NeedsSupport => Accent::Orange,
        StudentStatus::Good => Accent::Purple,
        StudentStatus::Excellent => Accent::Green,
    };
    badge(status.label(), accent)
}

impl Screen for AnalyticsScreen {
    type Message = AnalyticsMessage;
    type ParentMessage = Request;

    fn view<'a>(&'a self, _session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let insights = Row::with_children(sample::insights().into_iter().map(|insight| {
            card(
                insight.kind.label(),
                row![dot(insight.kind.accent()), text(insight.text).size(14)]
                    .spacing(8)
                    .align_y(Center),
            )
        }))
        .spacing(12);

        let months = sample::monthly_performance();
        let trends = [
            Series::new("Average Grade", months.iter().map(|m| (m.month, f32::from(m.average)))),
            Series::new(
                "Submission Rate",
                months.iter().map(|m| (m.month, f32::from(m.submissions))),
            ),
        ];
        let classes = sample::class_performance();
        let by_class = [
            Series::new("Average Grade", classes.iter().map(|c| (c.class, f32::from(c.average)))),
            Series::new(
                "Completion Rate",
                classes.iter().map(|c| (c.class, f32::from(c.completion))),
            ),
        ];

        let heading: Element<'a, Msg> = row![
            text("Student Name").width(Length::FillPortion(3)),
            text("Current Grade").width(Length::FillPortion(2)),
            text("Completion Rate").width(Length::FillPortion(2)),
            text("Trend").width(Length::FillPortion(2)),
            text("Status").width(Length::FillPortion(2)),
        ]
        .spacing(8)
        .into();
        let students = sample::student_performance().into_iter().map(|s| {
            row![
                text(s.name).width(Length::FillPortion(3)),
                container(grade_badge(s.grade)).width(Length::FillPortion(2)),
                text(format!("{}%", s.completion)).width(Length::FillPortion(2)),
                text(s.trend.to_string()).width(Length::FillPortion(2)),
                container(status_badge(s.completion)).width(Length::FillPortion(2)),
            ]
            .spacing(8)
            .align_y(Center)
            .into()
        });
        let table = Column::with_children(std::iter::once(heading).chain(students)).spacing(10);

        let content = column![
            header(
                "Analytics",
                "Track student performance and identify areas for improvement"
            ),
            card("AI Insights", insights),
            row![
                card("Performance Trends", bar_chart(&trends)),
                card("Class Performance", bar_chart(&by_class)),
            ]
            .spacing(16),
            card("Student Performance Overview", table),
        ]
        .spacing(24);

        shell(Some(NavItem::Analytics), ScreenMessage::<Self>::go, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _session: &Session,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_tolerates_uneven_series() {
        let series = [
            Series::new("Average Grade", [("Sep", 78.0), ("Oct", 82.0), ("Nov", 79.0)]),
            Series::new("Submission Rate", [("Sep", 85.0)]),
        ];
        let _chart = bar_chart(&series);
        let _empty = bar_chart(&[]);
    }
}
