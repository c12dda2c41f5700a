use iced::Task;
use iced_aw::date_picker::Date;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};
use crate::app::state::{ActiveForm, CourseTab, DatePickerOpen, DeleteTarget, LoginForm, Notice, Screen};
use crate::auth::{require_fields, sign_in};
use crate::config::{save_config, theme_from_str};
use crate::form::{Completed, CourseDraft, FormController, FormMode, PaymentDraft, StudentDraft};
use crate::model::payment::transaction_id_now;
use crate::model::{Course, CourseInput, Payment, PaymentInput, Student, StudentInput};
use super::{App, Message};

pub fn date_from_picker(date: Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year, date.month, date.day)
}

pub fn date_for_picker(date: Option<NaiveDate>, today: NaiveDate) -> Date {
    let date = date.unwrap_or(today);
    Date::from_ymd(date.year(), date.month(), date.day())
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LoginRoleSelected(role) => {
                self.login.role = role;
                self.login.error = None;
                Task::none()
            }
            Message::LoginEmailChanged(email) => {
                self.login.email = email;
                Task::none()
            }
            Message::LoginPasswordChanged(password) => {
                self.login.password = password;
                Task::none()
            }
            Message::LoginPressed => {
                if self.login.pending {
                    return Task::none();
                }
                if let Err(e) = require_fields(&self.login.email, &self.login.password) {
                    self.login.error = Some(e.to_string());
                    return Task::none();
                }
                self.login.pending = true;
                self.login.error = None;
                Task::perform(
                    sign_in(
                        self.directory.clone(),
                        self.login.role,
                        self.login.email.clone(),
                        self.login.password.clone(),
                        self.config.latency(),
                    ),
                    Message::LoginFinished,
                )
            }
            Message::LoginFinished(result) => {
                self.login.pending = false;
                match result {
                    Ok(session) => {
                        info!(email = %session.email, role = %session.role, "signed in");
                        self.login = LoginForm { role: session.role, ..LoginForm::default() };
                        self.notice = Some(Notice::success(format!("Welcome back, {}!", session.name)));
                        self.current_screen = Screen::home(session.role);
                        self.session = Some(session);
                    }
                    Err(e) => {
                        warn!(error = %e, "sign-in rejected");
                        self.login.error = Some(e.to_string());
                    }
                }
                Task::none()
            }
            Message::Logout => {
                if let Some(session) = self.session.take() {
                    info!(email = %session.email, "signed out");
                }
                self.leave_screen();
                self.login = LoginForm::default();
                self.notice = None;
                self.current_screen = Screen::Login;
                Task::none()
            }
            Message::GoTo(screen) => {
                self.navigate(screen);
                Task::none()
            }
            Message::ThemeSelected(name) => {
                if let Some(theme) = theme_from_str(name) {
                    self.theme = theme;
                    self.config.theme_name = name.to_string();
                    if let Err(e) = save_config(&self.config) {
                        warn!(error = %e, "could not save config");
                    }
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::RequestDelete(target) => {
                self.pending_delete = Some(target);
                Task::none()
            }
            Message::CancelDelete => {
                self.pending_delete = None;
                Task::none()
            }
            Message::ConfirmDelete => {
                if let Some(target) = self.pending_delete.take() {
                    self.delete(target);
                }
                Task::none()
            }
            Message::CloseForm => {
                self.close_form();
                Task::none()
            }

            // Students
            Message::StudentSearchChanged(query) => {
                self.student_query = query;
                Task::none()
            }
            Message::StudentStatusFilterChanged(choice) => {
                debug!(%choice, "student status filter");
                self.student_filter.status = choice;
                Task::none()
            }
            Message::OpenStudentForm(id) => {
                let form = match id {
                    None => Some(FormController::create(StudentDraft::default())),
                    Some(id) => self
                        .students
                        .get(id)
                        .map(|student| FormController::edit(id, StudentDraft::from(student))),
                };
                match form {
                    Some(form) => self.open_form(ActiveForm::Student(form)),
                    None => warn!(?id, "student to edit not found"),
                }
                Task::none()
            }
            Message::StudentFieldChanged(field, value) => {
                if let Some(ActiveForm::Student(form)) = &mut self.form {
                    form.change(field.key(), |d| d.set(field, value));
                }
                Task::none()
            }
            Message::StudentCourseSelected(course) => {
                if let Some(ActiveForm::Student(form)) = &mut self.form {
                    form.change("course", |d| d.course = Some(course));
                }
                Task::none()
            }
            Message::StudentLevelSelected(level) => {
                if let Some(ActiveForm::Student(form)) = &mut self.form {
                    form.change("level", |d| d.level = level);
                }
                Task::none()
            }
            Message::StudentStatusSelected(status) => {
                if let Some(ActiveForm::Student(form)) = &mut self.form {
                    form.change("status", |d| d.status = status);
                }
                Task::none()
            }
            Message::SubmitStudentForm => {
                let latency = self.config.latency();
                let Some(ActiveForm::Student(form)) = &mut self.form else {
                    return Task::none();
                };
                match form.begin_submit(latency) {
                    Ok(submission) => Task::perform(submission.resolve(), Message::StudentFormSubmitted),
                    Err(e) => {
                        debug!(error = %e, "student form not submitted");
                        Task::none()
                    }
                }
            }
            Message::StudentFormSubmitted(completed) => {
                let accepted = matches!(&self.form, Some(ActiveForm::Student(form)) if form.accepts(&completed));
                if !accepted {
                    debug!(serial = completed.serial, "dropping stale student submission");
                    return Task::none();
                }
                self.apply_student(completed);
                self.close_form();
                Task::none()
            }

            // Courses
            Message::CourseSearchChanged(query) => {
                self.course_query = query;
                Task::none()
            }
            Message::CourseStatusFilterChanged(choice) => {
                debug!(%choice, "course status filter");
                self.course_filter.status = choice;
                Task::none()
            }
            Message::CourseLevelFilterChanged(choice) => {
                debug!(%choice, "course level filter");
                self.course_filter.level = choice;
                Task::none()
            }
            Message::OpenCourseForm(id) => {
                let form = match id {
                    None => Some(FormController::create(CourseDraft::default())),
                    Some(id) => self
                        .courses
                        .get(id)
                        .map(|course| FormController::edit(id, CourseDraft::from(course))),
                };
                match form {
                    Some(form) => self.open_form(ActiveForm::Course(form)),
                    None => warn!(?id, "course to edit not found"),
                }
                Task::none()
            }
            Message::CourseFormTab(tab) => {
                self.course_tab = tab;
                Task::none()
            }
            Message::CourseFieldChanged(field, value) => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.change(field.key(), |d| d.set(field, value));
                }
                Task::none()
            }
            Message::CourseLevelSelected(level) => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.change("level", |d| d.level = level);
                }
                Task::none()
            }
            Message::CourseStatusSelected(status) => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.change("status", |d| d.status = status);
                }
                Task::none()
            }
            Message::CourseCategorySelected(category) => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.change("category", |d| d.category = Some(category));
                }
                Task::none()
            }
            Message::AddVideo => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.draft_mut().add_video();
                }
                Task::none()
            }
            Message::VideoFieldChanged(index, field, value) => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.draft_mut().update_video(index, field, value);
                }
                Task::none()
            }
            Message::RemoveVideo(index) => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.draft_mut().remove_video(index);
                }
                Task::none()
            }
            Message::AddNote => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.draft_mut().add_note();
                }
                Task::none()
            }
            Message::NoteFieldChanged(index, field, value) => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.draft_mut().update_note(index, field, value);
                }
                Task::none()
            }
            Message::RemoveNote(index) => {
                if let Some(ActiveForm::Course(form)) = &mut self.form {
                    form.draft_mut().remove_note(index);
                }
                Task::none()
            }
            Message::SubmitCourseForm => {
                let latency = self.config.latency();
                let Some(ActiveForm::Course(form)) = &mut self.form else {
                    return Task::none();
                };
                match form.begin_submit(latency) {
                    Ok(submission) => Task::perform(submission.resolve(), Message::CourseFormSubmitted),
                    Err(e) => {
                        // errors may sit on another tab
                        self.course_tab = CourseTab::Details;
                        debug!(error = %e, "course form not submitted");
                        Task::none()
                    }
                }
            }
            Message::CourseFormSubmitted(completed) => {
                let accepted = matches!(&self.form, Some(ActiveForm::Course(form)) if form.accepts(&completed));
                if !accepted {
                    debug!(serial = completed.serial, "dropping stale course submission");
                    return Task::none();
                }
                self.apply_course(completed);
                self.close_form();
                Task::none()
            }
            Message::DuplicateCourse(id) => {
                let today = self.today();
                match self.courses.duplicate(id, today) {
                    Ok(copy) => {
                        info!(from = id, to = copy.id, "course duplicated");
                        let title = copy.title.trim_end_matches(" (Copy)").to_string();
                        self.notice = Some(Notice::success(format!("Course \"{title}\" has been duplicated successfully!")));
                    }
                    Err(e) => warn!(error = %e, "duplicate ignored"),
                }
                Task::none()
            }
            Message::ToggleCourseExpanded(id) => {
                self.expanded_course = if self.expanded_course == Some(id) { None } else { Some(id) };
                Task::none()
            }
            Message::OpenVideo(url) => {
                if let Err(e) = open::that(&url) {
                    warn!(error = %e, %url, "could not open video");
                    self.notice = Some(Notice::error(format!("Could not open {url}")));
                }
                Task::none()
            }

            // Payments
            Message::PaymentSearchChanged(query) => {
                self.payment_query = query;
                Task::none()
            }
            Message::PaymentStatusFilterChanged(choice) => {
                debug!(%choice, "payment status filter");
                self.payment_filter.status = choice;
                Task::none()
            }
            Message::OpenPaymentForm(id) => {
                let form = match id {
                    None => Some(FormController::create(PaymentDraft::default())),
                    Some(id) => self
                        .payments
                        .get(id)
                        .map(|payment| FormController::edit(id, PaymentDraft::from(payment))),
                };
                match form {
                    Some(form) => self.open_form(ActiveForm::Payment(form)),
                    None => warn!(?id, "payment to edit not found"),
                }
                Task::none()
            }
            Message::PaymentFieldChanged(field, value) => {
                if let Some(ActiveForm::Payment(form)) = &mut self.form {
                    form.change(field.key(), |d| d.set(field, value));
                }
                Task::none()
            }
            Message::PaymentCourseSelected(course) => {
                if let Some(ActiveForm::Payment(form)) = &mut self.form {
                    form.change("course", |d| d.course = Some(course));
                }
                Task::none()
            }
            Message::PaymentStatusSelected(status) => {
                if let Some(ActiveForm::Payment(form)) = &mut self.form {
                    form.change("status", |d| d.status = status);
                }
                Task::none()
            }
            Message::PaymentMethodSelected(method) => {
                if let Some(ActiveForm::Payment(form)) = &mut self.form {
                    form.change("payment_method", |d| d.payment_method = Some(method));
                }
                Task::none()
            }
            Message::ChooseDueDate => {
                self.date_picker = DatePickerOpen::Due;
                Task::none()
            }
            Message::ChoosePaidDate => {
                self.date_picker = DatePickerOpen::Paid;
                Task::none()
            }
            Message::CancelDatePicker => {
                self.date_picker = DatePickerOpen::None;
                Task::none()
            }
            Message::SubmitDueDate(date) => {
                self.date_picker = DatePickerOpen::None;
                if let Some(ActiveForm::Payment(form)) = &mut self.form {
                    form.change("due_date", |d| d.due_date = date_from_picker(date));
                }
                Task::none()
            }
            Message::SubmitPaidDate(date) => {
                self.date_picker = DatePickerOpen::None;
                if let Some(ActiveForm::Payment(form)) = &mut self.form {
                    form.change("paid_date", |d| d.paid_date = date_from_picker(date));
                }
                Task::none()
            }
            Message::SubmitPaymentForm => {
                let latency = self.config.latency();
                let Some(ActiveForm::Payment(form)) = &mut self.form else {
                    return Task::none();
                };
                match form.begin_submit(latency) {
                    Ok(submission) => Task::perform(submission.resolve(), Message::PaymentFormSubmitted),
                    Err(e) => {
                        debug!(error = %e, "payment form not submitted");
                        Task::none()
                    }
                }
            }
            Message::PaymentFormSubmitted(completed) => {
                let accepted = matches!(&self.form, Some(ActiveForm::Payment(form)) if form.accepts(&completed));
                if !accepted {
                    debug!(serial = completed.serial, "dropping stale payment submission");
                    return Task::none();
                }
                self.apply_payment(completed);
                self.close_form();
                Task::none()
            }
            Message::MarkAsPaid(id) => {
                let today = self.today();
                match self.payments.mark_paid(id, today, transaction_id_now()) {
                    Ok(payment) => {
                        info!(id, "payment marked as paid");
                        self.notice = Some(Notice::success(format!(
                            "Payment for {} has been marked as paid!",
                            payment.student_name
                        )));
                    }
                    Err(e) => warn!(error = %e, "mark as paid ignored"),
                }
                Task::none()
            }

            Message::EnrollInCourse(id) => {
                if self.enrollments.contains_key(&id) {
                    return Task::none();
                }
                match self.courses.get(id) {
                    Some(course) => {
                        info!(course = id, "enrolled");
                        self.notice = Some(Notice::success(format!("Successfully enrolled in {}!", course.title)));
                        self.enrollments.insert(id, 0);
                    }
                    None => warn!(course = id, "enrol ignored: no such course"),
                }
                Task::none()
            }
        }
    }

    /// Moves to `screen`, or to the role's home when the role may not see it.
    fn navigate(&mut self, screen: Screen) {
        let role = self.role();
        let target = if screen.is_open_to(role) {
            screen
        } else {
            let home = role.map_or(Screen::Login, Screen::home);
            debug!(?screen, ?home, "redirecting");
            home
        };
        if target != self.current_screen {
            self.leave_screen();
        }
        self.current_screen = target;
    }

    fn leave_screen(&mut self) {
        self.close_form();
        self.pending_delete = None;
        self.expanded_course = None;
    }

    fn open_form(&mut self, form: ActiveForm) {
        if self.form.as_ref().is_some_and(ActiveForm::is_submitting) {
            debug!("form busy, not replacing it");
            return;
        }
        self.form = Some(form);
        self.course_tab = CourseTab::Details;
        self.date_picker = DatePickerOpen::None;
    }

    fn close_form(&mut self) {
        self.form = None;
        self.course_tab = CourseTab::Details;
        self.date_picker = DatePickerOpen::None;
    }

    fn delete(&mut self, target: DeleteTarget) {
        match target {
            DeleteTarget::Student(id) => match self.students.remove(id) {
                Ok(student) => {
                    info!(id, "student deleted");
                    self.notice = Some(Notice::success(format!("Student {} has been deleted successfully!", student.name)));
                }
                Err(e) => warn!(error = %e, "delete ignored"),
            },
            DeleteTarget::Course(id) => match self.courses.remove(id) {
                Ok(course) => {
                    info!(id, "course deleted");
                    self.enrollments.remove(&id);
                    if self.expanded_course == Some(id) {
                        self.expanded_course = None;
                    }
                    self.notice = Some(Notice::success(format!("Course \"{}\" has been deleted successfully!", course.title)));
                }
                Err(e) => warn!(error = %e, "delete ignored"),
            },
            DeleteTarget::Payment(id) => match self.payments.remove(id) {
                Ok(payment) => {
                    info!(id, "payment deleted");
                    self.notice = Some(Notice::success(format!(
                        "Payment record for {} has been deleted successfully!",
                        payment.student_name
                    )));
                }
                Err(e) => warn!(error = %e, "delete ignored"),
            },
        }
    }

    fn apply_student(&mut self, completed: Completed<StudentInput>) {
        let name = completed.payload.name.clone();
        match completed.mode {
            FormMode::Create => {
                let today = self.today();
                let id = self.students.add(Student::enrol(completed.payload, today)).id;
                info!(id, "student added");
                self.notice = Some(Notice::success(format!("Student {name} has been added successfully!")));
            }
            FormMode::Edit(id) => match self.students.update(id, completed.payload.into()) {
                Ok(_) => {
                    info!(id, "student updated");
                    self.notice = Some(Notice::success(format!("Student {name} has been updated successfully!")));
                }
                Err(e) => warn!(error = %e, "student update ignored"),
            },
        }
    }

    fn apply_course(&mut self, completed: Completed<CourseInput>) {
        let title = completed.payload.title.clone();
        match completed.mode {
            FormMode::Create => {
                let today = self.today();
                let id = self.courses.add(Course::publish(completed.payload, today)).id;
                info!(id, "course created");
                self.notice = Some(Notice::success(format!("Course \"{title}\" has been created successfully!")));
            }
            FormMode::Edit(id) => match self.courses.update(id, completed.payload.into()) {
                Ok(_) => {
                    info!(id, "course updated");
                    self.notice = Some(Notice::success(format!("Course \"{title}\" has been updated successfully!")));
                }
                Err(e) => warn!(error = %e, "course update ignored"),
            },
        }
    }

    fn apply_payment(&mut self, completed: Completed<PaymentInput>) {
        let name = completed.payload.student_name.clone();
        match completed.mode {
            FormMode::Create => {
                let mut input = completed.payload;
                if input.transaction_id.is_none() {
                    input.transaction_id = Some(transaction_id_now());
                }
                let id = self.payments.add(Payment::record(input)).id;
                info!(id, "payment recorded");
                self.notice = Some(Notice::success(format!("Payment record for {name} has been added successfully!")));
            }
            FormMode::Edit(id) => match self.payments.update(id, completed.payload.into()) {
                Ok(_) => {
                    info!(id, "payment updated");
                    self.notice = Some(Notice::success(format!("Payment record for {name} has been updated successfully!")));
                }
                Err(e) => warn!(error = %e, "payment update ignored"),
            },
        }
    }
}
