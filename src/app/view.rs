use iced::{Element, Length};
use iced::widget::{Column, Container, Row};
use crate::app::state::Screen;
use crate::screens::{
    confirm_dialog, courses_screen, dashboard_screen, login_screen, nav_menu, notice_banner, payments_screen,
    progress_screen, settings_screen, student_courses_screen, student_dashboard_screen, students_screen,
};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<Message> {
        let screen = match self.current_screen {
            Screen::Login => login_screen(self),
            Screen::AdminDashboard => dashboard_screen(self),
            Screen::Students => students_screen(self),
            Screen::Courses => courses_screen(self),
            Screen::Payments => payments_screen(self),
            Screen::StudentDashboard => student_dashboard_screen(self),
            Screen::MyCourses => student_courses_screen(self),
            Screen::Progress => progress_screen(self),
            Screen::Settings => settings_screen(self),
        }
        .width(Length::Fill);

        let mut main = Column::new().spacing(10).width(Length::Fill);
        if let Some(banner) = notice_banner(self) {
            main = main.push(Container::new(banner).padding([10, 20]));
        }
        main = main.push(screen);

        let mut layout = Row::new().spacing(20);
        // sidebar only once signed in
        if self.current_screen != Screen::Login {
            layout = layout.push(
                Container::new(nav_menu(self))
                    .width(Length::Fixed(220.0))
                    .height(Length::Fill)
                    .padding(10),
            );
        }
        let layout: Element<Message> = layout.push(main).into();

        match self.pending_delete {
            Some(target) => confirm_dialog(self, layout, target),
            None => layout,
        }
    }
}
