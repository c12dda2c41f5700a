use std::fmt;
use chrono::NaiveDate;
use crate::model::Level;
use crate::store::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CourseStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

impl CourseStatus {
    pub const ALL: &'static [CourseStatus] =
        &[CourseStatus::Active, CourseStatus::Draft, CourseStatus::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseStatus::Active => "Active",
            CourseStatus::Draft => "Draft",
            CourseStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Business,
    TestPreparation,
    Speaking,
    Grammar,
    Writing,
    Pronunciation,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Business,
        Category::TestPreparation,
        Category::Speaking,
        Category::Grammar,
        Category::Writing,
        Category::Pronunciation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::TestPreparation => "Test Preparation",
            Category::Speaking => "Speaking",
            Category::Grammar => "Grammar",
            Category::Writing => "Writing",
            Category::Pronunciation => "Pronunciation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub url: String,
    /// Display string such as "15:30".
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub level: Level,
    /// Free text, e.g. "8 weeks".
    pub duration: String,
    pub lessons: u32,
    pub students: u32,
    pub rating: f32,
    pub price: f64,
    pub image: String,
    pub status: CourseStatus,
    pub category: Category,
    pub instructor: String,
    pub created_date: NaiveDate,
    pub videos: Vec<Video>,
    pub notes: Vec<Note>,
}

impl Course {
    /// A newly published course starts with no enrolments and no rating.
    pub fn publish(input: CourseInput, today: NaiveDate) -> Self {
        Self {
            id: 0,
            title: input.title,
            description: input.description,
            level: input.level,
            duration: input.duration,
            lessons: input.lessons,
            students: 0,
            rating: 0.0,
            price: input.price,
            image: input.image,
            status: input.status,
            category: input.category,
            instructor: input.instructor,
            created_date: today,
            videos: input.videos,
            notes: input.notes,
        }
    }

    /// Clone used by "duplicate": enrolment-derived fields are reset and the
    /// title is marked as a copy. The id is assigned by the store.
    pub fn copy_of(&self, today: NaiveDate) -> Self {
        Self {
            id: 0,
            title: format!("{} (Copy)", self.title),
            students: 0,
            rating: 0.0,
            created_date: today,
            ..self.clone()
        }
    }
}

/// Validated output of the course form.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInput {
    pub title: String,
    pub description: String,
    pub level: Level,
    pub duration: String,
    pub lessons: u32,
    pub price: f64,
    pub image: String,
    pub status: CourseStatus,
    pub category: Category,
    pub instructor: String,
    pub videos: Vec<Video>,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<Level>,
    pub duration: Option<String>,
    pub lessons: Option<u32>,
    pub students: Option<u32>,
    pub rating: Option<f32>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub status: Option<CourseStatus>,
    pub category: Option<Category>,
    pub instructor: Option<String>,
    pub videos: Option<Vec<Video>>,
    pub notes: Option<Vec<Note>>,
}

impl From<CourseInput> for CoursePatch {
    fn from(input: CourseInput) -> Self {
        Self {
            title: Some(input.title),
            description: Some(input.description),
            level: Some(input.level),
            duration: Some(input.duration),
            lessons: Some(input.lessons),
            price: Some(input.price),
            image: Some(input.image),
            status: Some(input.status),
            category: Some(input.category),
            instructor: Some(input.instructor),
            videos: Some(input.videos),
            notes: Some(input.notes),
            ..Self::default()
        }
    }
}

impl Record for Course {
    type Patch = CoursePatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: CoursePatch) {
        let CoursePatch {
            title,
            description,
            level,
            duration,
            lessons,
            students,
            rating,
            price,
            image,
            status,
            category,
            instructor,
            videos,
            notes,
        } = patch;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = level {
            self.level = v;
        }
        if let Some(v) = duration {
            self.duration = v;
        }
        if let Some(v) = lessons {
            self.lessons = v;
        }
        if let Some(v) = students {
            self.students = v;
        }
        if let Some(v) = rating {
            self.rating = v;
        }
        if let Some(v) = price {
            self.price = v;
        }
        if let Some(v) = image {
            self.image = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = instructor {
            self.instructor = v;
        }
        if let Some(v) = videos {
            self.videos = v;
        }
        if let Some(v) = notes {
            self.notes = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    #[test]
    fn copy_resets_enrolment_fields() {
        let original = seed::courses().remove(0);
        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let copy = original.copy_of(today);

        assert_eq!(copy.title, "Business English Mastery (Copy)");
        assert_eq!(copy.students, 0);
        assert_eq!(copy.rating, 0.0);
        assert_eq!(copy.created_date, today);
        assert_eq!(copy.videos, original.videos);
        assert_eq!(copy.price, original.price);
    }

    #[test]
    fn category_labels_are_human_readable() {
        assert_eq!(Category::TestPreparation.to_string(), "Test Preparation");
        assert_eq!(Category::ALL.len(), 6);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut course = seed::courses().remove(1);
        let before = course.clone();
        course.apply(CoursePatch::default());
        assert_eq!(course, before);
    }
}
