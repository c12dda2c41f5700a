use std::fmt;
use chrono::NaiveDate;
use crate::model::Level;
use crate::store::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StudentStatus {
    #[default]
    Active,
    Pending,
    Inactive,
}

impl StudentStatus {
    pub const ALL: &'static [StudentStatus] = &[
        StudentStatus::Active,
        StudentStatus::Pending,
        StudentStatus::Inactive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::Pending => "Pending",
            StudentStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Course title as free text; not kept in sync with the course catalogue.
    pub course: String,
    pub level: Level,
    pub status: StudentStatus,
    pub join_date: NaiveDate,
    /// Percent, 0..=100 by convention.
    pub progress: u8,
    pub last_activity: String,
}

impl Student {
    /// Builds a freshly enrolled student. The id is assigned by the store.
    pub fn enrol(input: StudentInput, today: NaiveDate) -> Self {
        Self {
            id: 0,
            name: input.name,
            email: input.email,
            phone: input.phone,
            course: input.course,
            level: input.level,
            status: input.status,
            join_date: today,
            progress: 0,
            last_activity: "Never".to_string(),
        }
    }
}

/// Validated output of the student form.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub level: Level,
    pub status: StudentStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub level: Option<Level>,
    pub status: Option<StudentStatus>,
    pub progress: Option<u8>,
    pub last_activity: Option<String>,
}

impl From<StudentInput> for StudentPatch {
    fn from(input: StudentInput) -> Self {
        Self {
            name: Some(input.name),
            email: Some(input.email),
            phone: Some(input.phone),
            course: Some(input.course),
            level: Some(input.level),
            status: Some(input.status),
            ..Self::default()
        }
    }
}

impl Record for Student {
    type Patch = StudentPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(course) = patch.course {
            self.course = course;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(last_activity) = patch.last_activity {
            self.last_activity = last_activity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> StudentInput {
        StudentInput {
            name: "Lena Park".to_string(),
            email: "lena.park@email.com".to_string(),
            phone: "+1 (555) 000-1111".to_string(),
            course: "IELTS Preparation".to_string(),
            level: Level::Intermediate,
            status: StudentStatus::Pending,
        }
    }

    #[test]
    fn enrol_sets_creation_defaults() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let student = Student::enrol(input(), today);
        assert_eq!(student.join_date, today);
        assert_eq!(student.progress, 0);
        assert_eq!(student.last_activity, "Never");
        assert_eq!(student.status, StudentStatus::Pending);
    }

    #[test]
    fn patch_from_input_leaves_progress_untouched() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        let mut student = Student::enrol(input(), today);
        student.progress = 40;
        student.last_activity = "2 hours ago".to_string();

        let mut edited = input();
        edited.name = "Lena Park-Kim".to_string();
        student.apply(edited.into());

        assert_eq!(student.name, "Lena Park-Kim");
        assert_eq!(student.progress, 40);
        assert_eq!(student.last_activity, "2 hours ago");
        assert_eq!(student.join_date, today);
    }

    #[test]
    fn new_students_default_to_active() {
        assert_eq!(StudentStatus::default(), StudentStatus::Active);
        assert_eq!(StudentStatus::Inactive.to_string(), "Inactive");
    }
}
