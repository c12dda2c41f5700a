use iced_aw::date_picker::Date;
use crate::app::state::{CourseTab, DeleteTarget, Screen};
use crate::auth::{Role, Session};
use crate::error::AuthError;
use crate::filter::Choice;
use crate::form::{Completed, CourseField, NoteField, PaymentField, StudentField, VideoField};
use crate::model::{
    Category, CourseInput, CourseStatus, Level, PaymentInput, PaymentMethod, PaymentStatus,
    StudentInput, StudentStatus,
};
use crate::store::RecordId;

#[derive(Debug, Clone)]
pub enum Message {
    LoginRoleSelected(Role),
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    LoginPressed,
    LoginFinished(Result<Session, AuthError>),
    Logout,
    //
    GoTo(Screen),
    ThemeSelected(&'static str),
    DismissNotice,
    //
    RequestDelete(DeleteTarget),
    ConfirmDelete,
    CancelDelete,
    CloseForm,
    // Students
    StudentSearchChanged(String),
    StudentStatusFilterChanged(Choice<StudentStatus>),
    OpenStudentForm(Option<RecordId>),
    StudentFieldChanged(StudentField, String),
    StudentCourseSelected(String),
    StudentLevelSelected(Level),
    StudentStatusSelected(StudentStatus),
    SubmitStudentForm,
    StudentFormSubmitted(Completed<StudentInput>),
    // Courses
    CourseSearchChanged(String),
    CourseStatusFilterChanged(Choice<CourseStatus>),
    CourseLevelFilterChanged(Choice<Level>),
    OpenCourseForm(Option<RecordId>),
    CourseFormTab(CourseTab),
    CourseFieldChanged(CourseField, String),
    CourseLevelSelected(Level),
    CourseStatusSelected(CourseStatus),
    CourseCategorySelected(Category),
    AddVideo,
    VideoFieldChanged(usize, VideoField, String),
    RemoveVideo(usize),
    AddNote,
    NoteFieldChanged(usize, NoteField, String),
    RemoveNote(usize),
    SubmitCourseForm,
    CourseFormSubmitted(Completed<CourseInput>),
    DuplicateCourse(RecordId),
    ToggleCourseExpanded(RecordId),
    OpenVideo(String),
    // Payments
    PaymentSearchChanged(String),
    PaymentStatusFilterChanged(Choice<PaymentStatus>),
    OpenPaymentForm(Option<RecordId>),
    PaymentFieldChanged(PaymentField, String),
    PaymentCourseSelected(String),
    PaymentStatusSelected(PaymentStatus),
    PaymentMethodSelected(PaymentMethod),
    ChooseDueDate,
    SubmitDueDate(Date),
    ChoosePaidDate,
    SubmitPaidDate(Date),
    CancelDatePicker,
    SubmitPaymentForm,
    PaymentFormSubmitted(Completed<PaymentInput>),
    MarkAsPaid(RecordId),
    // Student portal
    EnrollInCourse(RecordId),
}
