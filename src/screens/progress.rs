use iced::{widget::{column, container, horizontal_space, progress_bar, row, text, vertical_space, Column, Container, Row, Scrollable}, Alignment, Length};
use iced::widget::container::{self as style, bordered_box};
use crate::app::{App, Message};
use crate::listing::{bar_ratios, total_lessons_completed, Tone};
use crate::model::progress::AchievementState;
use crate::screens::{icon, page_header, stat_card};

const CHART_HEIGHT: f32 = 160.0;

fn study_chart(app: &App) -> Row<'_, Message> {
    let hours: Vec<f32> = app.study_week.iter().map(|d| d.hours).collect();
    let ratios = bar_ratios(&hours);
    let bar_color = Tone::Blue.color();

    let mut chart = Row::new().spacing(12).align_y(Alignment::End);
    for (day, ratio) in app.study_week.iter().zip(ratios) {
        let bar = container(vertical_space())
            .width(Length::Fixed(28.0))
            .height(Length::Fixed((CHART_HEIGHT * ratio).max(2.0)))
            .style(move |_| style::background(bar_color));
        chart = chart.push(
            column![
                text(format!("{:.1}h", day.hours)).size(12),
                bar,
                text(day.day).size(13),
            ]
            .spacing(4)
            .align_x(Alignment::Center),
        );
    }
    chart
}

pub fn progress_screen(app: &App) -> Container<Message> {
    let course_progress: Vec<_> = app
        .enrollments
        .iter()
        .filter_map(|(id, progress)| app.courses.get(*id).map(|course| (course, *progress)))
        .collect();
    let overall = if course_progress.is_empty() {
        0
    } else {
        course_progress.iter().map(|(_, p)| u32::from(*p)).sum::<u32>() / course_progress.len() as u32
    };
    let lessons_done = total_lessons_completed(course_progress.iter().copied());
    let hours: f32 = app.study_week.iter().map(|d| d.hours).sum();
    let earned = app.achievements.iter().filter(|a| a.is_earned()).count();

    let stats = row![
        stat_card(app, "chart-line", "Overall Progress", format!("{overall}%")),
        stat_card(app, "circle-check", "Lessons Completed", lessons_done.to_string()),
        stat_card(app, "clock", "Hours This Week", format!("{hours:.1}")),
        stat_card(app, "trophy", "Achievements", format!("{earned}/{}", app.achievements.len())),
    ]
    .spacing(15);

    let mut courses = Column::new().spacing(10).push(text("Course Progress").size(22));
    for &(course, progress) in &course_progress {
        courses = courses.push(
            column![
                row![text(&course.title).size(15), horizontal_space(), text(format!("{progress}%")).size(14)],
                progress_bar(0.0..=100.0, f32::from(progress)).height(Length::Fixed(8.0)),
            ]
            .spacing(4),
        );
    }

    let mut achievements = Column::new().spacing(10).push(text("Achievements").size(22));
    for achievement in &app.achievements {
        let status = match &achievement.state {
            AchievementState::Earned { when } => column![text(format!("Earned {when}")).size(12).color(Tone::Green.color())],
            AchievementState::Locked { progress } => column![
                progress_bar(0.0..=100.0, f32::from(*progress)).height(Length::Fixed(6.0)),
                text(format!("{progress}% complete")).size(12),
            ]
            .spacing(3),
        };
        let icon_name = if achievement.is_earned() { "trophy" } else { "lock" };
        achievements = achievements.push(
            container(
                row![
                    icon(app, icon_name),
                    column![text(&achievement.title).size(15), text(&achievement.description).size(13), status]
                        .spacing(3)
                        .width(Length::Fill),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            )
            .padding(10)
            .style(move |_| bordered_box(&app.theme)),
        );
    }

    let content = column![
        page_header("Learning Progress", "Track your study habits and achievements", None),
        stats,
        row![
            container(column![text("Weekly Study Time").size(22), study_chart(app)].spacing(15))
                .padding(15)
                .width(Length::FillPortion(1))
                .style(move |_| bordered_box(&app.theme)),
            container(courses)
                .padding(15)
                .width(Length::FillPortion(1))
                .style(move |_| bordered_box(&app.theme)),
        ]
        .spacing(15),
        achievements,
    ]
    .spacing(20)
    .padding(20);

    Container::new(Scrollable::new(content))
        .width(Length::Fill)
        .height(Length::Fill)
}
