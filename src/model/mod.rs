pub mod course;
pub mod payment;
pub mod progress;
pub mod seed;
pub mod student;

use std::fmt;

pub use course::{Category, Course, CourseInput, CourseStatus, Note, Video};
pub use payment::{Payment, PaymentInput, PaymentMethod, PaymentPatch, PaymentStatus};
pub use student::{Student, StudentInput, StudentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: &'static [Level] = &[Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_listed_in_difficulty_order() {
        let labels: Vec<String> = Level::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["Beginner", "Intermediate", "Advanced"]);
        assert_eq!(Level::default(), Level::Beginner);
    }
}
