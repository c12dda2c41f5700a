use iced::{widget::{column, pick_list, text, vertical_space, Container}, Center, Length};
use crate::app::{App, Message};
use crate::config::{theme_names, theme_to_str};

pub fn settings_screen(app: &App) -> Container<Message> {
    let current_name = theme_to_str(&app.theme);
    let content = column![
        text("Settings").size(30),
        vertical_space().height(20),
        text("Theme").size(16),
        pick_list(theme_names(), Some(current_name), Message::ThemeSelected)
            .placeholder("Choose a theme"),
        text(format!("Simulated response time: {} ms", app.config.submit_delay_ms)).size(14),
    ]
    .spacing(15)
    .align_x(Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
