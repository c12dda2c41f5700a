use iced::{widget::{button, column, text, vertical_space, Column, Container}, Length};
use crate::app::state::Screen;
use crate::app::{App, Message};
use crate::auth::Role;
use crate::screens::icon_button;

const ADMIN_ITEMS: &[(&str, &str, Screen)] = &[
    ("gauge", "Dashboard", Screen::AdminDashboard),
    ("users", "Students", Screen::Students),
    ("book", "Courses", Screen::Courses),
    ("credit-card", "Payments", Screen::Payments),
];

const STUDENT_ITEMS: &[(&str, &str, Screen)] = &[
    ("house", "Dashboard", Screen::StudentDashboard),
    ("book-open", "My Courses", Screen::MyCourses),
    ("chart-line", "Progress", Screen::Progress),
];

pub fn nav_menu(app: &App) -> Container<Message> {
    let items = match app.role() {
        Some(Role::Admin) => ADMIN_ITEMS,
        Some(Role::Student) => STUDENT_ITEMS,
        None => &[],
    };

    let entry = |icon_name: &'static str, label: &'static str, screen: Screen| {
        icon_button(app, icon_name, label)
            .style(if app.current_screen == screen { button::primary } else { button::text })
            .on_press(Message::GoTo(screen))
            .width(Length::Fill)
    };

    let mut content = Column::new().spacing(10);
    if let Some(session) = &app.session {
        content = content.push(
            column![text(&session.name).size(18), text(session.role.to_string()).size(13)].spacing(2),
        );
    }
    for &(icon_name, label, screen) in items {
        content = content.push(entry(icon_name, label, screen));
    }
    content = content
        .push(vertical_space())
        .push(entry("gear", "Settings", Screen::Settings))
        .push(
            icon_button(app, "arrow-right-from-bracket", "Logout")
                .style(button::text)
                .on_press(Message::Logout)
                .width(Length::Fill),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
}
