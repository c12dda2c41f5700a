use iced::{widget::{button, column, container, horizontal_space, progress_bar, row, text, Column, Container, Scrollable}, Alignment, Length};
use iced::widget::container::bordered_box;
use crate::app::state::Screen;
use crate::app::{App, Message};
use crate::listing::{lessons_completed, total_lessons_completed, Badge};
use crate::screens::{badge, page_header, stat_card};

pub fn student_dashboard_screen(app: &App) -> Container<Message> {
    let name = app.session.as_ref().map_or("", |s| s.name.as_str());
    let enrolled: Vec<_> = app
        .enrollments
        .iter()
        .filter_map(|(id, progress)| app.courses.get(*id).map(|course| (course, *progress)))
        .collect();
    let lessons_done = total_lessons_completed(enrolled.iter().copied());
    let hours: f32 = app.study_week.iter().map(|d| d.hours).sum();
    let earned = app.achievements.iter().filter(|a| a.is_earned()).count();

    let stats = row![
        stat_card(app, "book-open", "Enrolled Courses", enrolled.len().to_string()),
        stat_card(app, "circle-check", "Lessons Completed", lessons_done.to_string()),
        stat_card(app, "clock", "Study Hours This Week", format!("{hours:.1}")),
        stat_card(app, "trophy", "Achievements", earned.to_string()),
    ]
    .spacing(15);

    let mut recent = Column::new().spacing(12).push(
        row![
            text("Continue Learning").size(22),
            horizontal_space(),
            button("View All").style(button::text).on_press(Message::GoTo(Screen::MyCourses)),
        ]
        .align_y(Alignment::Center),
    );
    for &(course, progress) in enrolled.iter().take(3) {
        recent = recent.push(
            column![
                row![text(&course.title).size(17), horizontal_space(), text(format!("{progress}%")).size(14)],
                progress_bar(0.0..=100.0, f32::from(progress)).height(Length::Fixed(8.0)),
                text(format!(
                    "{} of {} lessons · {}",
                    lessons_completed(progress, course.lessons),
                    course.lessons,
                    course.instructor
                ))
                .size(13),
            ]
            .spacing(4),
        );
    }

    let mut upcoming = Column::new().spacing(10).push(text("Upcoming Lessons").size(22));
    for lesson in &app.upcoming {
        upcoming = upcoming.push(
            container(
                column![
                    row![text(&lesson.title).size(15), horizontal_space(), badge(lesson.kind, lesson.kind.tone())]
                        .align_y(Alignment::Center),
                    text(&lesson.course).size(13),
                    text(format!("{} · {}", lesson.time, lesson.duration)).size(13),
                ]
                .spacing(3),
            )
            .padding(10)
            .width(Length::Fill)
            .style(move |_| bordered_box(&app.theme)),
        );
    }

    let content = column![
        page_header("Dashboard", "Ready to continue your English learning journey?", None),
        text(format!("Welcome back, {name}!")).size(20),
        stats,
        row![
            container(recent).padding(15).width(Length::FillPortion(2)).style(move |_| bordered_box(&app.theme)),
            container(upcoming).padding(15).width(Length::FillPortion(1)).style(move |_| bordered_box(&app.theme)),
        ]
        .spacing(15),
    ]
    .spacing(20)
    .padding(20);

    Container::new(Scrollable::new(content))
        .width(Length::Fill)
        .height(Length::Fill)
}
