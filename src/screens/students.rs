use iced::{widget::{button, column, horizontal_rule, pick_list, progress_bar, row, text, text_input, Column, Container, Row, Scrollable}, Alignment, Element, Length};
use iced::widget::container::bordered_box;
use crate::app::state::{ActiveForm, DeleteTarget};
use crate::app::{App, Message};
use crate::filter::{visible, Choice};
use crate::form::{FormController, StudentDraft, StudentField};
use crate::listing::{format_date, initials, Badge};
use crate::model::{Level, Student, StudentStatus};
use crate::screens::{badge, icon, icon_button, labeled, modal, page_header};

fn header_row<'a>() -> Row<'a, Message> {
    row![
        text("Student").width(Length::FillPortion(3)),
        text("Course").width(Length::FillPortion(2)),
        text("Level").width(Length::FillPortion(1)),
        text("Status").width(Length::FillPortion(1)),
        text("Progress").width(Length::FillPortion(2)),
        text("Joined").width(Length::FillPortion(1)),
        text("Actions").width(Length::FillPortion(1)),
    ]
    .spacing(10)
    .padding([0, 10])
}

fn student_row<'a>(app: &'a App, student: &'a Student) -> Element<'a, Message> {
    let who = row![
        Container::new(text(initials(&student.name)).size(14)).padding(8).style(move |_| bordered_box(&app.theme)),
        column![text(&student.name).size(16), text(&student.email).size(13), text(&student.phone).size(13)].spacing(2),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let progress = column![
        progress_bar(0.0..=100.0, f32::from(student.progress)).height(Length::Fixed(8.0)),
        text(format!("{}% · {}", student.progress, student.last_activity)).size(12),
    ]
    .spacing(4);

    Container::new(
        row![
            Container::new(who).width(Length::FillPortion(3)),
            text(&student.course).width(Length::FillPortion(2)),
            Container::new(badge(student.level, student.level.tone())).width(Length::FillPortion(1)),
            Container::new(badge(student.status, student.status.tone())).width(Length::FillPortion(1)),
            Container::new(progress).width(Length::FillPortion(2)),
            text(format_date(Some(student.join_date))).size(14).width(Length::FillPortion(1)),
            row![
                button(icon(app, "pen")).style(button::text).on_press(Message::OpenStudentForm(Some(student.id))),
                button(icon(app, "trash")).style(button::text).on_press(Message::RequestDelete(DeleteTarget::Student(student.id))),
            ]
            .width(Length::FillPortion(1)),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(10)
    .style(move |_| bordered_box(&app.theme))
    .into()
}

fn student_form<'a>(app: &'a App, form: &'a FormController<StudentDraft>) -> Element<'a, Message> {
    let draft = form.draft();
    let title = if form.is_editing() { "Edit Student" } else { "Add New Student" };
    let submit_label = match (form.is_submitting(), form.is_editing()) {
        (true, _) => "Saving...",
        (false, true) => "Update Student",
        (false, false) => "Add Student",
    };

    let text_field = move |label: &'a str, placeholder: &'a str, field: StudentField, value: &'a str| {
        labeled(
            label,
            text_input(placeholder, value)
                .on_input(move |v| Message::StudentFieldChanged(field, v))
                .padding(8),
            form.error(field.key()),
        )
    };

    column![
        text(title).size(24),
        text_field("Full Name", "Enter full name", StudentField::Name, &draft.name),
        text_field("Email Address", "Enter email address", StudentField::Email, &draft.email),
        text_field("Phone Number", "Enter phone number", StudentField::Phone, &draft.phone),
        labeled(
            "Course",
            pick_list(app.course_titles(), draft.course.clone(), Message::StudentCourseSelected)
                .placeholder("Select a course")
                .width(Length::Fill),
            form.error("course"),
        ),
        row![
            labeled(
                "Level",
                pick_list(Level::ALL, Some(draft.level), Message::StudentLevelSelected).width(Length::Fill),
                None,
            )
            .width(Length::Fill),
            labeled(
                "Status",
                pick_list(StudentStatus::ALL, Some(draft.status), Message::StudentStatusSelected).width(Length::Fill),
                None,
            )
            .width(Length::Fill),
        ]
        .spacing(10),
        horizontal_rule(1),
        row![
            iced::widget::horizontal_space(),
            button("Cancel").style(button::secondary).on_press(Message::CloseForm),
            button(submit_label).on_press_maybe((!form.is_submitting()).then_some(Message::SubmitStudentForm)),
        ]
        .spacing(10),
    ]
    .spacing(12)
    .into()
}

pub fn students_screen(app: &App) -> Container<Message> {
    let shown = visible(app.students.records(), &app.student_query, &app.student_filter);

    let toolbar = row![
        text_input("Search students by name, email or course...", &app.student_query)
            .on_input(Message::StudentSearchChanged)
            .padding(10)
            .width(Length::Fill),
        pick_list(
            Choice::options(StudentStatus::ALL),
            Some(app.student_filter.status),
            Message::StudentStatusFilterChanged,
        ),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut list = Column::new().spacing(8).push(header_row());
    if shown.is_empty() {
        list = list.push(text("No students found matching your criteria.").size(16));
    }
    for student in shown.iter().copied() {
        list = list.push(student_row(app, student));
    }

    let content = column![
        page_header(
            "Student Management",
            "Manage student enrollments and track their progress",
            Some(icon_button(app, "plus", "Add Student").on_press(Message::OpenStudentForm(None)).into()),
        ),
        toolbar,
        text(format!("Showing {} of {} students", shown.len(), app.students.len())).size(14),
        Scrollable::new(list).height(Length::Fill),
    ]
    .spacing(15)
    .padding(20);

    let page: Element<Message> = match &app.form {
        Some(ActiveForm::Student(form)) => modal(app, content, student_form(app, form), 520.0),
        _ => content.into(),
    };

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
}
