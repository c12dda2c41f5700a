pub mod login;
pub mod nav_menu;
pub mod settings;
pub mod dashboard;
pub mod students;
pub mod courses;
pub mod payments;
pub mod student_dashboard;
pub mod student_courses;
pub mod progress;

pub use login::login_screen;
pub use nav_menu::nav_menu;
pub use settings::settings_screen;
pub use dashboard::dashboard_screen;
pub use students::students_screen;
pub use courses::courses_screen;
pub use payments::payments_screen;
pub use student_dashboard::student_dashboard_screen;
pub use student_courses::student_courses_screen;
pub use progress::progress_screen;

use iced::{Alignment, Border, Color, Element, Length, Renderer, Theme};
use iced::widget::container::{self, background, bordered_box};
use iced::widget::{button, column, horizontal_space, opaque, row, text, Column, Container, Row, Space, Stack};
use iced_font_awesome::fa_icon_solid;
use crate::app::state::{DeleteTarget, NoticeKind};
use crate::app::{App, Message};
use crate::listing::Tone;

pub fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: &'a str,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(icon_element)
        .push(text(label))
}

pub fn icon<'a>(app: &'a App, name: &'a str) -> Element<'a, Message> {
    fa_icon_solid(name).style(move |_| text::base(&app.theme)).into()
}

pub fn icon_button<'a>(app: &'a App, name: &'a str, label: &'a str) -> iced::widget::Button<'a, Message> {
    button(icon_button_content(icon(app, name), label))
}

pub fn badge<'a>(label: impl ToString, tone: Tone) -> Element<'a, Message> {
    let color = tone.color();
    Container::new(text(label.to_string()).size(12).color(color))
        .padding([2, 8])
        .style(move |_| container::Style {
            border: Border { color, width: 1.0, radius: 10.0.into() },
            ..container::Style::default()
        })
        .into()
}

pub fn stat_card<'a>(app: &'a App, icon_name: &'a str, title: &'a str, value: String) -> Element<'a, Message> {
    Container::new(
        row![
            column![text(title).size(14), text(value).size(26)].spacing(4),
            horizontal_space(),
            icon(app, icon_name),
        ]
        .align_y(Alignment::Center),
    )
    .padding(15)
    .width(Length::Fill)
    .style(move |_| bordered_box(&app.theme))
    .into()
}

pub fn field_error<'a>(error: Option<&'a str>) -> Element<'a, Message> {
    match error {
        Some(message) => text(message).size(13).color(Tone::Red.color()).into(),
        None => Space::with_height(0).into(),
    }
}

/// Label, input and the field's error message stacked together.
pub fn labeled<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
    error: Option<&'a str>,
) -> Column<'a, Message> {
    column![text(label).size(14), input.into(), field_error(error)].spacing(4)
}

/// Lays `content` in a dialog over a dimmed `base`.
pub fn modal<'a>(
    app: &'a App,
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    width: f32,
) -> Element<'a, Message> {
    let dialog = Container::new(content)
        .style(move |_| bordered_box(&app.theme))
        .padding(20)
        .width(Length::Fixed(width));

    let overlay = Container::new(opaque(dialog))
        .center(Length::Fill)
        .style(move |_| background(Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 }));

    Stack::new().push(base).push(opaque(overlay)).into()
}

pub fn delete_prompt(app: &App, target: DeleteTarget) -> String {
    match target {
        DeleteTarget::Student(id) => {
            let name = app.students.get(id).map_or("this student", |s| s.name.as_str());
            format!("Are you sure you want to delete {name}? This action cannot be undone.")
        }
        DeleteTarget::Course(id) => match app.courses.get(id) {
            Some(course) => format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone and will affect {} enrolled students.",
                course.title, course.students
            ),
            None => "Are you sure you want to delete this course? This action cannot be undone.".to_string(),
        },
        DeleteTarget::Payment(id) => {
            let name = app.payments.get(id).map_or("this student", |p| p.student_name.as_str());
            format!("Are you sure you want to delete the payment record for {name}? This action cannot be undone.")
        }
    }
}

pub fn confirm_dialog<'a>(app: &'a App, base: Element<'a, Message>, target: DeleteTarget) -> Element<'a, Message> {
    let content = column![
        text("Confirm deletion").size(22),
        text(delete_prompt(app, target)).size(16),
        row![
            horizontal_space(),
            button("Cancel").style(button::secondary).on_press(Message::CancelDelete),
            button("Delete").style(button::danger).on_press(Message::ConfirmDelete),
        ]
        .spacing(10),
    ]
    .spacing(15);
    modal(app, base, content, 450.0)
}

pub fn notice_banner(app: &App) -> Option<Element<'_, Message>> {
    let notice = app.notice.as_ref()?;
    let (tone, icon_name) = match notice.kind {
        NoticeKind::Success => (Tone::Green, "circle-check"),
        NoticeKind::Error => (Tone::Red, "circle-exclamation"),
    };
    let color = tone.color();
    let banner = Container::new(
        row![
            icon(app, icon_name),
            text(&notice.text).color(color),
            horizontal_space(),
            button(icon(app, "xmark")).style(button::text).on_press(Message::DismissNotice),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding([6, 12])
    .width(Length::Fill)
    .style(move |_| container::Style {
        border: Border { color, width: 1.0, radius: 6.0.into() },
        ..container::Style::default()
    });
    Some(banner.into())
}

/// Page title with a subtitle and optional trailing action.
pub fn page_header<'a>(
    title: &'a str,
    subtitle: &'a str,
    action: Option<Element<'a, Message>>,
) -> Row<'a, Message> {
    let mut header = Row::new()
        .align_y(Alignment::Center)
        .push(column![text(title).size(30), text(subtitle).size(16)].spacing(4))
        .push(horizontal_space());
    if let Some(action) = action {
        header = header.push(action);
    }
    header
}
