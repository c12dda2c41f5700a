use crate::form::{rules, Draft, FieldErrors};
use crate::model::{Category, Course, CourseInput, CourseStatus, Level, Note, Video};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Title,
    Description,
    Duration,
    Lessons,
    Price,
    Image,
    Instructor,
}

impl CourseField {
    pub fn key(self) -> &'static str {
        match self {
            CourseField::Title => "title",
            CourseField::Description => "description",
            CourseField::Duration => "duration",
            CourseField::Lessons => "lessons",
            CourseField::Price => "price",
            CourseField::Image => "image",
            CourseField::Instructor => "instructor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoField {
    Title,
    Url,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteField {
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub level: Level,
    pub duration: String,
    pub lessons: String,
    pub price: String,
    pub image: String,
    pub status: CourseStatus,
    pub category: Option<Category>,
    pub instructor: String,
    pub videos: Vec<Video>,
    pub notes: Vec<Note>,
    next_item_id: u32,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            level: Level::default(),
            duration: String::new(),
            lessons: String::new(),
            price: String::new(),
            image: String::new(),
            status: CourseStatus::default(),
            category: None,
            instructor: String::new(),
            videos: Vec::new(),
            notes: Vec::new(),
            next_item_id: 1,
        }
    }
}

impl CourseDraft {
    pub fn set(&mut self, field: CourseField, value: String) {
        match field {
            CourseField::Title => self.title = value,
            CourseField::Description => self.description = value,
            CourseField::Duration => self.duration = value,
            CourseField::Lessons => self.lessons = value,
            CourseField::Price => self.price = value,
            CourseField::Image => self.image = value,
            CourseField::Instructor => self.instructor = value,
        }
    }

    /// Ids are unique across this course's videos and notes.
    fn next_id(&mut self) -> u32 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    pub fn add_video(&mut self) -> u32 {
        let id = self.next_id();
        self.videos.push(Video { id, title: String::new(), url: String::new(), duration: String::new() });
        id
    }

    pub fn update_video(&mut self, index: usize, field: VideoField, value: String) {
        if let Some(video) = self.videos.get_mut(index) {
            match field {
                VideoField::Title => video.title = value,
                VideoField::Url => video.url = value,
                VideoField::Duration => video.duration = value,
            }
        }
    }

    pub fn remove_video(&mut self, index: usize) {
        if index < self.videos.len() {
            self.videos.remove(index);
        }
    }

    pub fn add_note(&mut self) -> u32 {
        let id = self.next_id();
        self.notes.push(Note { id, title: String::new(), content: String::new() });
        id
    }

    pub fn update_note(&mut self, index: usize, field: NoteField, value: String) {
        if let Some(note) = self.notes.get_mut(index) {
            match field {
                NoteField::Title => note.title = value,
                NoteField::Content => note.content = value,
            }
        }
    }

    pub fn remove_note(&mut self, index: usize) {
        if index < self.notes.len() {
            self.notes.remove(index);
        }
    }
}

impl From<&Course> for CourseDraft {
    fn from(course: &Course) -> Self {
        let highest = course
            .videos
            .iter()
            .map(|v| v.id)
            .chain(course.notes.iter().map(|n| n.id))
            .max()
            .unwrap_or(0);
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
            level: course.level,
            duration: course.duration.clone(),
            lessons: course.lessons.to_string(),
            price: course.price.to_string(),
            image: course.image.clone(),
            status: course.status,
            category: Some(course.category),
            instructor: course.instructor.clone(),
            videos: course.videos.clone(),
            notes: course.notes.clone(),
            next_item_id: highest + 1,
        }
    }
}

impl Draft for CourseDraft {
    type Output = CourseInput;

    fn validate(&self) -> Result<CourseInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = rules::required(&mut errors, "title", &self.title, "Course title is required");
        let description =
            rules::required(&mut errors, "description", &self.description, "Course description is required");
        let duration = rules::required(&mut errors, "duration", &self.duration, "Duration is required");
        let lessons = rules::count(&mut errors, "lessons", &self.lessons, "Number of lessons must be at least 1");
        let price = rules::money(
            &mut errors,
            "price",
            &self.price,
            "Price is required",
            "Price must be a non-negative number",
        );
        let instructor =
            rules::required(&mut errors, "instructor", &self.instructor, "Instructor name is required");
        let category =
            rules::selected(&mut errors, "category", &self.category, "Category selection is required");

        match (title, description, duration, lessons, price, instructor, category) {
            (
                Some(title),
                Some(description),
                Some(duration),
                Some(lessons),
                Some(price),
                Some(instructor),
                Some(category),
            ) => Ok(CourseInput {
                title,
                description,
                level: self.level,
                duration,
                lessons,
                price,
                image: self.image.trim().to_string(),
                status: self.status,
                category,
                instructor,
                videos: self.videos.clone(),
                notes: self.notes.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    fn valid() -> CourseDraft {
        CourseDraft {
            title: "Travel English".to_string(),
            description: "Phrases for airports and hotels".to_string(),
            duration: "4 weeks".to_string(),
            lessons: "12".to_string(),
            price: "99.5".to_string(),
            instructor: "Ken Ito".to_string(),
            category: Some(Category::Speaking),
            ..CourseDraft::default()
        }
    }

    #[test]
    fn new_course_defaults_to_active_status() {
        let input = valid().validate().unwrap();
        assert_eq!(input.status, CourseStatus::Active);
        assert_eq!(input.lessons, 12);
        assert_eq!(input.price, 99.5);
    }

    #[test]
    fn blank_draft_errors() {
        let errors = CourseDraft::default().validate().unwrap_err();
        assert_eq!(
            errors.keys().collect::<Vec<_>>(),
            vec!["category", "description", "duration", "instructor", "lessons", "price", "title"]
        );
        assert_eq!(errors.get("title"), Some("Course title is required"));
        assert_eq!(errors.get("lessons"), Some("Number of lessons must be at least 1"));
    }

    #[test]
    fn zero_lessons_and_negative_price_fail() {
        let draft = CourseDraft { lessons: "0".to_string(), price: "-10".to_string(), ..valid() };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("lessons").is_some());
        assert_eq!(errors.get("price"), Some("Price must be a non-negative number"));
    }

    #[test]
    fn free_course_is_allowed() {
        let draft = CourseDraft { price: "0".to_string(), ..valid() };
        assert_eq!(draft.validate().unwrap().price, 0.0);
    }

    #[test]
    fn sub_record_ids_stay_unique_after_removal() {
        let mut draft = CourseDraft::from(&seed::courses()[0]);
        let first = draft.add_video();
        draft.remove_video(draft.videos.len() - 1);
        let second = draft.add_video();
        let note = draft.add_note();

        assert_eq!(first, 3);
        assert_ne!(first, second);
        assert_ne!(second, note);
    }

    #[test]
    fn video_and_note_edits_by_index() {
        let mut draft = valid();
        draft.add_video();
        draft.update_video(0, VideoField::Url, "https://example.com/v".to_string());
        draft.update_video(5, VideoField::Title, "ignored".to_string());
        draft.add_note();
        draft.update_note(0, NoteField::Content, "Check-in phrases".to_string());
        draft.remove_note(3);

        let input = draft.validate().unwrap();
        assert_eq!(input.videos[0].url, "https://example.com/v");
        assert_eq!(input.notes[0].content, "Check-in phrases");
        assert_eq!(input.videos.len(), 1);
    }
}
