use crate::form::{rules, Draft, FieldErrors};
use crate::model::{Level, Student, StudentInput, StudentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Name,
    Email,
    Phone,
}

impl StudentField {
    pub fn key(self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Email => "email",
            StudentField::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: Option<String>,
    pub level: Level,
    pub status: StudentStatus,
}

impl StudentDraft {
    pub fn set(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::Name => self.name = value,
            StudentField::Email => self.email = value,
            StudentField::Phone => self.phone = value,
        }
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            course: Some(student.course.clone()).filter(|c| !c.is_empty()),
            level: student.level,
            status: student.status,
        }
    }
}

impl Draft for StudentDraft {
    type Output = StudentInput;

    fn validate(&self) -> Result<StudentInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = rules::required(&mut errors, "name", &self.name, "Name is required");
        let email = rules::email(&mut errors, "email", &self.email, "Email is required");
        let phone = rules::required(&mut errors, "phone", &self.phone, "Phone number is required");
        let course = rules::selected(&mut errors, "course", &self.course, "Course selection is required");

        match (name, email, phone, course) {
            (Some(name), Some(email), Some(phone), Some(course)) => Ok(StudentInput {
                name,
                email,
                phone,
                course,
                level: self.level,
                status: self.status,
            }),
            _ => Err(errors),
        }
    }
}
