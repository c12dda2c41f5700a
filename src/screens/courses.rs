use iced::{widget::{button, column, horizontal_rule, horizontal_space, pick_list, row, text, text_input, Column, Container, Row, Scrollable}, Alignment, Element, Length};
use iced::widget::container::bordered_box;
use crate::app::state::{ActiveForm, CourseTab, DeleteTarget};
use crate::app::{App, Message};
use crate::filter::{visible, Choice};
use crate::form::{CourseDraft, CourseField, FormController, NoteField, VideoField};
use crate::listing::{filled_stars, format_currency, format_date, Badge};
use crate::model::{Category, Course, CourseStatus, Level};
use crate::screens::{badge, icon, icon_button, labeled, modal, page_header};

fn stars(rating: f32) -> String {
    let filled = filled_stars(rating);
    format!("{}{} {:.1}", "★".repeat(filled), "☆".repeat(5 - filled), rating)
}

fn header_bar<'a>(app: &'a App, course: &'a Course) -> Row<'a, Message> {
    let expanded = app.expanded_course == Some(course.id);
    row![
        text(&course.title).size(22),
        badge(course.status, course.status.tone()),
        badge(course.level, course.level.tone()),
        horizontal_space(),
        button(icon(app, if expanded { "chevron-up" } else { "chevron-down" }))
            .style(button::text)
            .on_press(Message::ToggleCourseExpanded(course.id)),
        button(icon(app, "pen")).style(button::text).on_press(Message::OpenCourseForm(Some(course.id))),
        button(icon(app, "copy")).style(button::text).on_press(Message::DuplicateCourse(course.id)),
        button(icon(app, "trash"))
            .style(button::text)
            .on_press(Message::RequestDelete(DeleteTarget::Course(course.id))),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .width(Length::Fill)
}

fn materials<'a>(app: &'a App, course: &'a Course) -> Column<'a, Message> {
    let mut videos = Column::new().spacing(6).push(text(format!("Videos ({})", course.videos.len())).size(17));
    for video in &course.videos {
        videos = videos.push(
            row![
                icon(app, "circle-play"),
                text(&video.title),
                horizontal_space(),
                text(&video.duration).size(13),
                button("Watch").style(button::secondary).on_press(Message::OpenVideo(video.url.clone())),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }

    let mut notes = Column::new().spacing(6).push(text(format!("Notes ({})", course.notes.len())).size(17));
    for note in &course.notes {
        notes = notes.push(column![text(&note.title).size(15), text(&note.content).size(13)].spacing(2));
    }

    column![horizontal_rule(1), row![videos.width(Length::Fill), notes.width(Length::Fill)].spacing(20)].spacing(10)
}

fn content<'a>(app: &'a App, course: &'a Course) -> Column<'a, Message> {
    let mut col = Column::new()
        .spacing(6)
        .push(text(&course.description).size(16))
        .push(
            row![
                text(format!("Instructor: {}", course.instructor)).size(14),
                text(format!("Category: {}", course.category)).size(14),
                text(format!("{} lessons · {}", course.lessons, course.duration)).size(14),
            ]
            .spacing(20),
        )
        .push(
            row![
                text(format_currency(course.price)).size(20),
                text(format!("{} students", course.students)).size(14),
                text(stars(course.rating)).size(14),
                horizontal_space(),
                text(format!("Created {}", format_date(Some(course.created_date)))).size(13),
            ]
            .spacing(20)
            .align_y(Alignment::Center),
        );
    if app.expanded_course == Some(course.id) {
        col = col.push(materials(app, course));
    }
    col
}

fn tab_button<'a>(label: &'a str, tab: CourseTab, current: CourseTab) -> iced::widget::Button<'a, Message> {
    button(label)
        .style(if tab == current { button::primary } else { button::secondary })
        .on_press(Message::CourseFormTab(tab))
}

fn details_tab<'a>(form: &'a FormController<CourseDraft>) -> Column<'a, Message> {
    let draft = form.draft();
    let input = move |label: &'a str, field: CourseField, value: &'a str| {
        labeled(
            label,
            text_input(label, value)
                .on_input(move |v| Message::CourseFieldChanged(field, v))
                .padding(8),
            form.error(field.key()),
        )
        .width(Length::Fill)
    };

    column![
        input("Course Title", CourseField::Title, &draft.title),
        input("Description", CourseField::Description, &draft.description),
        row![
            labeled(
                "Level",
                pick_list(Level::ALL, Some(draft.level), Message::CourseLevelSelected).width(Length::Fill),
                None,
            )
            .width(Length::Fill),
            labeled(
                "Category",
                pick_list(Category::ALL, draft.category, Message::CourseCategorySelected)
                    .placeholder("Select category")
                    .width(Length::Fill),
                form.error("category"),
            )
            .width(Length::Fill),
            labeled(
                "Status",
                pick_list(CourseStatus::ALL, Some(draft.status), Message::CourseStatusSelected).width(Length::Fill),
                None,
            )
            .width(Length::Fill),
        ]
        .spacing(10),
        row![
            input("Duration", CourseField::Duration, &draft.duration),
            input("Lessons", CourseField::Lessons, &draft.lessons),
            input("Price ($)", CourseField::Price, &draft.price),
        ]
        .spacing(10),
        input("Instructor", CourseField::Instructor, &draft.instructor),
        input("Image URL", CourseField::Image, &draft.image),
    ]
    .spacing(10)
}

fn videos_tab<'a>(app: &'a App, draft: &'a CourseDraft) -> Column<'a, Message> {
    let mut col = Column::new().spacing(10).push(
        row![
            text("Course Videos").size(18),
            horizontal_space(),
            icon_button(app, "plus", "Add Video").on_press(Message::AddVideo),
        ]
        .align_y(Alignment::Center),
    );
    if draft.videos.is_empty() {
        col = col.push(text("No videos added yet.").size(14));
    }
    for (index, video) in draft.videos.iter().enumerate() {
        col = col.push(
            Container::new(
                row![
                    text_input("Video title", &video.title)
                        .on_input(move |v| Message::VideoFieldChanged(index, VideoField::Title, v))
                        .width(Length::FillPortion(3)),
                    text_input("Video URL", &video.url)
                        .on_input(move |v| Message::VideoFieldChanged(index, VideoField::Url, v))
                        .width(Length::FillPortion(3)),
                    text_input("mm:ss", &video.duration)
                        .on_input(move |v| Message::VideoFieldChanged(index, VideoField::Duration, v))
                        .width(Length::FillPortion(1)),
                    button(icon(app, "trash")).style(button::text).on_press(Message::RemoveVideo(index)),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            )
            .padding(8)
            .style(move |_| bordered_box(&app.theme)),
        );
    }
    col
}

fn notes_tab<'a>(app: &'a App, draft: &'a CourseDraft) -> Column<'a, Message> {
    let mut col = Column::new().spacing(10).push(
        row![
            text("Course Notes").size(18),
            horizontal_space(),
            icon_button(app, "plus", "Add Note").on_press(Message::AddNote),
        ]
        .align_y(Alignment::Center),
    );
    if draft.notes.is_empty() {
        col = col.push(text("No notes added yet.").size(14));
    }
    for (index, note) in draft.notes.iter().enumerate() {
        col = col.push(
            Container::new(
                column![
                    row![
                        text_input("Note title", &note.title)
                            .on_input(move |v| Message::NoteFieldChanged(index, NoteField::Title, v)),
                        button(icon(app, "trash")).style(button::text).on_press(Message::RemoveNote(index)),
                    ]
                    .spacing(8)
                    .align_y(Alignment::Center),
                    text_input("Note content", &note.content)
                        .on_input(move |v| Message::NoteFieldChanged(index, NoteField::Content, v)),
                ]
                .spacing(6),
            )
            .padding(8)
            .style(move |_| bordered_box(&app.theme)),
        );
    }
    col
}

fn course_form<'a>(app: &'a App, form: &'a FormController<CourseDraft>) -> Element<'a, Message> {
    let title = if form.is_editing() { "Edit Course" } else { "Create New Course" };
    let submit_label = match (form.is_submitting(), form.is_editing()) {
        (true, _) => "Saving...",
        (false, true) => "Update Course",
        (false, false) => "Create Course",
    };

    let body = match app.course_tab {
        CourseTab::Details => details_tab(form),
        CourseTab::Videos => videos_tab(app, form.draft()),
        CourseTab::Notes => notes_tab(app, form.draft()),
    };

    column![
        text(title).size(24),
        row![
            tab_button("Details", CourseTab::Details, app.course_tab),
            tab_button("Videos", CourseTab::Videos, app.course_tab),
            tab_button("Notes", CourseTab::Notes, app.course_tab),
        ]
        .spacing(5),
        Scrollable::new(body).height(Length::Fixed(420.0)),
        horizontal_rule(1),
        row![
            horizontal_space(),
            button("Cancel").style(button::secondary).on_press(Message::CloseForm),
            button(submit_label).on_press_maybe((!form.is_submitting()).then_some(Message::SubmitCourseForm)),
        ]
        .spacing(10),
    ]
    .spacing(12)
    .into()
}

pub fn courses_screen(app: &App) -> Container<Message> {
    let shown = visible(app.courses.records(), &app.course_query, &app.course_filter);

    let toolbar = row![
        text_input("Search courses...", &app.course_query)
            .on_input(Message::CourseSearchChanged)
            .padding(10)
            .width(Length::Fill),
        pick_list(
            Choice::options(CourseStatus::ALL),
            Some(app.course_filter.status),
            Message::CourseStatusFilterChanged,
        ),
        pick_list(Choice::options(Level::ALL), Some(app.course_filter.level), Message::CourseLevelFilterChanged),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut courses_column = Column::new().spacing(15);
    if shown.is_empty() {
        courses_column = courses_column.push(text("No courses found. Try adjusting your filters.").size(16));
    }
    for course in shown.iter().copied() {
        courses_column = courses_column.push(
            Container::new(
                Column::new()
                    .push(Container::new(header_bar(app, course)).padding(10))
                    .push(Container::new(content(app, course)).padding(10)),
            )
            .style(move |_| bordered_box(&app.theme))
            .width(Length::Fill),
        );
    }

    let base_ui = column![
        page_header(
            "Course Management",
            "Create, edit and organise your English courses",
            Some(icon_button(app, "plus", "Create Course").on_press(Message::OpenCourseForm(None)).into()),
        ),
        toolbar,
        Scrollable::new(courses_column).height(Length::Fill),
    ]
    .spacing(15)
    .padding(20);

    let page: Element<Message> = match &app.form {
        Some(ActiveForm::Course(form)) => modal(app, base_ui, course_form(app, form), 760.0),
        _ => base_ui.into(),
    };

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
}
