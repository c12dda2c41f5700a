use iced::{widget::{button, column, container, text, text_input, Container, Row}, Alignment, Length};
use iced::widget::container::bordered_box;
use crate::app::{App, Message};
use crate::auth::Role;
use crate::listing::Tone;

/// Credentials of the demo account for the selected role.
fn demo_hint(app: &App) -> String {
    let role = app.login.role;
    let password = match role {
        Role::Student => "student123",
        Role::Admin => "admin123",
    };
    match app.directory.demo_email(role) {
        Some(email) => format!("Demo {}: {email} / {password}", role.to_string().to_lowercase()),
        None => String::new(),
    }
}

pub fn login_screen(app: &App) -> Container<Message> {
    let role_button = |role: Role| {
        let selected = app.login.role == role;
        button(text(role.to_string()).align_x(Alignment::Center).width(Length::Fill))
            .style(if selected { button::primary } else { button::secondary })
            .width(Length::Fill)
            .on_press(Message::LoginRoleSelected(role))
    };

    let submit_label = if app.login.pending { "Signing in..." } else { "Sign In" };
    let hint = demo_hint(app);

    let mut form = column![
        Row::with_children(Role::ALL.iter().map(|&role| role_button(role).into())).spacing(5),
        text("Email Address").size(14),
        text_input("Enter your email", &app.login.email)
            .on_input(Message::LoginEmailChanged)
            .on_submit(Message::LoginPressed)
            .padding(10)
            .size(18),
        text("Password").size(14),
        text_input("Enter your password", &app.login.password)
            .on_input(Message::LoginPasswordChanged)
            .on_submit(Message::LoginPressed)
            .secure(true)
            .padding(10)
            .size(18),
        button(text(submit_label).align_x(Alignment::Center).width(Length::Fill))
            .on_press_maybe((!app.login.pending).then_some(Message::LoginPressed))
            .width(Length::Fill)
            .padding(10),
    ]
    .spacing(12)
    .width(Length::Fixed(380.0));

    if let Some(error) = &app.login.error {
        form = form.push(text(error).size(15).color(Tone::Red.color()));
    }
    form = form.push(text(hint).size(13));

    let content = column![
        text("Success House").size(34),
        text("of English").size(18),
        container(form)
            .padding(25)
            .style(move |_| bordered_box(&app.theme)),
    ]
    .spacing(15)
    .align_x(Alignment::Center);

    Container::new(content)
        .center(Length::Fill)
        .padding(40)
}
