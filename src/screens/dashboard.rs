use iced::{widget::{button, column, container, horizontal_space, row, text, Column, Container, Scrollable}, Alignment, Length};
use iced::widget::container::bordered_box;
use crate::app::state::Screen;
use crate::app::{App, Message};
use crate::listing::{format_currency, format_date, initials, AdminOverview, Badge};
use crate::screens::{badge, icon_button, page_header, stat_card};

pub fn dashboard_screen(app: &App) -> Container<Message> {
    let overview = AdminOverview::of(app.students.records(), app.courses.records(), app.payments.records());

    let stats = row![
        stat_card(app, "users", "Total Students", overview.total_students.to_string()),
        stat_card(app, "book", "Active Courses", overview.active_courses.to_string()),
        stat_card(app, "sack-dollar", "Revenue", format_currency(overview.revenue)),
        stat_card(app, "chart-simple", "Average Progress", format!("{}%", overview.average_progress)),
    ]
    .spacing(15);

    let mut recent = Column::new().spacing(10).push(
        row![
            text("Recent Students").size(22),
            horizontal_space(),
            button("View All").style(button::text).on_press(Message::GoTo(Screen::Students)),
        ]
        .align_y(Alignment::Center),
    );
    for student in overview.recent_students.iter().copied() {
        recent = recent.push(
            row![
                container(text(initials(&student.name)).size(16)).padding(8).style(move |_| bordered_box(&app.theme)),
                column![text(&student.name).size(17), text(&student.course).size(14)].spacing(2),
                horizontal_space(),
                column![
                    badge(student.status, student.status.tone()),
                    text(format_date(Some(student.join_date))).size(13),
                ]
                .spacing(4)
                .align_x(Alignment::End),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        );
    }

    let quick_actions = column![
        text("Quick Actions").size(22),
        icon_button(app, "users", "Manage Students")
            .on_press(Message::GoTo(Screen::Students))
            .width(Length::Fill),
        icon_button(app, "book", "Manage Courses")
            .on_press(Message::GoTo(Screen::Courses))
            .width(Length::Fill),
        icon_button(app, "credit-card", "Manage Payments")
            .on_press(Message::GoTo(Screen::Payments))
            .width(Length::Fill),
    ]
    .spacing(10);

    let content = column![
        page_header("Admin Dashboard", "Manage your English learning platform", None),
        stats,
        row![
            container(recent)
                .padding(15)
                .width(Length::FillPortion(2))
                .style(move |_| bordered_box(&app.theme)),
            container(quick_actions)
                .padding(15)
                .width(Length::FillPortion(1))
                .style(move |_| bordered_box(&app.theme)),
        ]
        .spacing(15),
    ]
    .spacing(20)
    .padding(20);

    Container::new(Scrollable::new(content))
        .width(Length::Fill)
        .height(Length::Fill)
}
