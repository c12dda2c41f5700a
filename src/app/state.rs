use chrono::NaiveDate;
use iced::Theme;
use crate::auth::{DemoDirectory, Role, Session};
use crate::config::{load_config, Config};
use crate::filter::{CourseFilter, PaymentFilter, StudentFilter};
use crate::form::{CourseDraft, FormController, PaymentDraft, StudentDraft};
use crate::model::progress::{self, Achievement, Enrollments, StudyDay, UpcomingLesson};
use crate::model::{seed, Course, Payment, Student};
use crate::store::{RecordId, RecordStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    AdminDashboard,
    Students,
    Courses,
    Payments,
    StudentDashboard,
    MyCourses,
    Progress,
    Settings,
}

impl Screen {
    pub fn home(role: Role) -> Screen {
        match role {
            Role::Admin => Screen::AdminDashboard,
            Role::Student => Screen::StudentDashboard,
        }
    }

    /// Whether a session with `role` may open this screen.
    pub fn is_open_to(self, role: Option<Role>) -> bool {
        match (self, role) {
            (Screen::Login, _) => true,
            (_, None) => false,
            (Screen::Settings, Some(_)) => true,
            (Screen::AdminDashboard | Screen::Students | Screen::Courses | Screen::Payments, Some(role)) => {
                role == Role::Admin
            }
            (Screen::StudentDashboard | Screen::MyCourses | Screen::Progress, Some(role)) => {
                role == Role::Student
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum ActiveForm {
    Student(FormController<StudentDraft>),
    Course(FormController<CourseDraft>),
    Payment(FormController<PaymentDraft>),
}

impl ActiveForm {
    pub fn is_submitting(&self) -> bool {
        match self {
            ActiveForm::Student(form) => form.is_submitting(),
            ActiveForm::Course(form) => form.is_submitting(),
            ActiveForm::Payment(form) => form.is_submitting(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Student(RecordId),
    Course(RecordId),
    Payment(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseTab {
    #[default]
    Details,
    Videos,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePickerOpen {
    #[default]
    None,
    Due,
    Paid,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub role: Role,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

pub struct App {
    pub theme: Theme,
    pub config: Config,
    //
    pub current_screen: Screen,
    pub session: Option<Session>,
    pub login: LoginForm,
    pub directory: DemoDirectory,
    pub notice: Option<Notice>,
    pub pending_delete: Option<DeleteTarget>,
    //
    pub students: RecordStore<Student>,
    pub courses: RecordStore<Course>,
    pub payments: RecordStore<Payment>,
    //
    pub student_query: String,
    pub student_filter: StudentFilter,
    pub course_query: String,
    pub course_filter: CourseFilter,
    pub payment_query: String,
    pub payment_filter: PaymentFilter,
    pub expanded_course: Option<RecordId>,
    // modal editors
    pub form: Option<ActiveForm>,
    pub course_tab: CourseTab,
    pub date_picker: DatePickerOpen,
    // student portal
    pub enrollments: Enrollments,
    pub study_week: Vec<StudyDay>,
    pub achievements: Vec<Achievement>,
    pub upcoming: Vec<UpcomingLesson>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(load_config())
    }
}

impl App {
    pub fn with_config(config: Config) -> Self {
        Self {
            theme: config.theme(),
            config,
            current_screen: Screen::Login,
            session: None,
            login: LoginForm::default(),
            directory: DemoDirectory::default(),
            notice: None,
            pending_delete: None,
            students: RecordStore::new(seed::students()),
            courses: RecordStore::new(seed::courses()),
            payments: RecordStore::new(seed::payments()),
            student_query: String::new(),
            student_filter: StudentFilter::default(),
            course_query: String::new(),
            course_filter: CourseFilter::default(),
            payment_query: String::new(),
            payment_filter: PaymentFilter::default(),
            expanded_course: None,
            form: None,
            course_tab: CourseTab::default(),
            date_picker: DatePickerOpen::default(),
            enrollments: progress::enrollments(),
            study_week: progress::study_week(),
            achievements: progress::achievements(),
            upcoming: progress::upcoming_lessons(),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// Course titles offered by the student and payment pick lists: the
    /// catalogue plus the legacy titles used by seeded records.
    pub fn course_titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = seed::COURSE_TITLES.iter().map(|t| t.to_string()).collect();
        for course in self.courses.records() {
            if !titles.contains(&course.title) {
                titles.push(course.title.clone());
            }
        }
        titles
    }
}
