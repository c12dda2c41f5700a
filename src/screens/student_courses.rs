use iced::{widget::{button, column, horizontal_space, progress_bar, row, text, Column, Container, Row, Scrollable}, Alignment, Element, Length};
use iced::widget::container::bordered_box;
use crate::app::state::Screen;
use crate::app::{App, Message};
use crate::listing::{filled_stars, format_currency, Badge};
use crate::model::{Course, CourseStatus};
use crate::screens::{badge, page_header};

const CARDS_PER_ROW: usize = 3;

fn course_card<'a>(app: &'a App, course: &'a Course) -> Element<'a, Message> {
    let progress = app.enrollments.get(&course.id).copied();

    let mut card = column![
        row![badge(course.level, course.level.tone()), horizontal_space(), text(course.category.to_string()).size(13)],
        text(&course.title).size(19),
        text(&course.description).size(14),
        text(format!("{} · {} lessons · {}", course.duration, course.lessons, course.instructor)).size(13),
        text(format!("{} {:.1} ({} students)", "★".repeat(filled_stars(course.rating)), course.rating, course.students)).size(13),
    ]
    .spacing(6);

    card = match progress {
        Some(progress) => card
            .push(row![text("Progress").size(13), horizontal_space(), text(format!("{progress}%")).size(13)])
            .push(progress_bar(0.0..=100.0, f32::from(progress)).height(Length::Fixed(8.0)))
            .push(
                button("Continue")
                    .on_press(Message::GoTo(Screen::Progress))
                    .width(Length::Fill),
            ),
        None => card.push(
            row![
                text(format_currency(course.price)).size(20),
                horizontal_space(),
                button("Enroll Now").on_press(Message::EnrollInCourse(course.id)),
            ]
            .align_y(Alignment::Center),
        ),
    };

    Container::new(card)
        .padding(15)
        .width(Length::FillPortion(1))
        .style(move |_| bordered_box(&app.theme))
        .into()
}

fn grid<'a>(app: &'a App, courses: &[&'a Course]) -> Column<'a, Message> {
    let mut rows = Column::new().spacing(15);
    for chunk in courses.chunks(CARDS_PER_ROW) {
        let mut cards = Row::new().spacing(15);
        for &course in chunk {
            cards = cards.push(course_card(app, course));
        }
        for _ in chunk.len()..CARDS_PER_ROW {
            cards = cards.push(horizontal_space().width(Length::FillPortion(1)));
        }
        rows = rows.push(cards);
    }
    rows
}

pub fn student_courses_screen(app: &App) -> Container<Message> {
    let catalogue: Vec<&Course> = app
        .courses
        .records()
        .iter()
        .filter(|c| c.status == CourseStatus::Active)
        .collect();
    let (enrolled, available): (Vec<&Course>, Vec<&Course>) =
        catalogue.into_iter().partition(|c| app.enrollments.contains_key(&c.id));

    let mut content = column![page_header("My Courses", "Continue learning or discover something new", None)]
        .spacing(20)
        .padding(20);

    content = content.push(text(format!("Enrolled Courses ({})", enrolled.len())).size(22));
    content = if enrolled.is_empty() {
        content.push(text("You are not enrolled in any course yet.").size(15))
    } else {
        content.push(grid(app, &enrolled))
    };

    content = content.push(text(format!("Available Courses ({})", available.len())).size(22));
    content = if available.is_empty() {
        content.push(text("You are enrolled in every available course.").size(15))
    } else {
        content.push(grid(app, &available))
    };

    Container::new(Scrollable::new(content))
        .width(Length::Fill)
        .height(Length::Fill)
}
