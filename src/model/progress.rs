use std::collections::BTreeMap;
use std::fmt;
use crate::store::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct StudyDay {
    pub day: &'static str,
    pub hours: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AchievementState {
    Earned { when: String },
    Locked { progress: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub state: AchievementState,
}

impl Achievement {
    pub fn is_earned(&self) -> bool {
        matches!(self.state, AchievementState::Earned { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonKind {
    LiveSession,
    Workshop,
    SelfPaced,
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LessonKind::LiveSession => "Live Session",
            LessonKind::Workshop => "Workshop",
            LessonKind::SelfPaced => "Self-paced",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingLesson {
    pub title: String,
    pub course: String,
    pub time: String,
    pub duration: String,
    pub kind: LessonKind,
}

/// Course id -> progress percent for the signed-in student.
pub type Enrollments = BTreeMap<RecordId, u8>;

pub fn enrollments() -> Enrollments {
    BTreeMap::from([(1, 75), (2, 45), (3, 90)])
}

pub fn study_week() -> Vec<StudyDay> {
    [("Mon", 2.5), ("Tue", 1.8), ("Wed", 3.2), ("Thu", 2.1), ("Fri", 4.0), ("Sat", 1.5), ("Sun", 2.8)]
        .into_iter()
        .map(|(day, hours)| StudyDay { day, hours })
        .collect()
}

pub fn achievements() -> Vec<Achievement> {
    let earned = |title: &str, description: &str, when: &str| Achievement {
        title: title.to_string(),
        description: description.to_string(),
        state: AchievementState::Earned { when: when.to_string() },
    };
    let locked = |title: &str, description: &str, progress: u8| Achievement {
        title: title.to_string(),
        description: description.to_string(),
        state: AchievementState::Locked { progress },
    };
    vec![
        earned("First Course Completed", "Completed your first English course", "2 weeks ago"),
        earned("Grammar Master", "Scored 95% or higher on 5 grammar tests", "1 week ago"),
        earned("Speaking Champion", "Completed 10 speaking exercises with excellent scores", "3 days ago"),
        locked("Consistency Star", "Study for 7 consecutive days", 85),
        locked("Vocabulary Virtuoso", "Learn 500 new vocabulary words", 60),
        locked("IELTS Ready", "Complete IELTS preparation course with 90% score", 45),
    ]
}

pub fn upcoming_lessons() -> Vec<UpcomingLesson> {
    let lesson = |title: &str, course: &str, time: &str, duration: &str, kind| UpcomingLesson {
        title: title.to_string(),
        course: course.to_string(),
        time: time.to_string(),
        duration: duration.to_string(),
        kind,
    };
    vec![
        lesson("Grammar: Present Perfect Tense", "Business English Mastery", "2:00 PM Today", "45 min", LessonKind::LiveSession),
        lesson("Speaking Practice: Job Interviews", "IELTS Preparation", "10:00 AM Tomorrow", "60 min", LessonKind::Workshop),
        lesson("Writing: Formal Emails", "Business English Mastery", "3:00 PM Tomorrow", "30 min", LessonKind::SelfPaced),
        lesson("Vocabulary: Academic Words", "IELTS Preparation", "Thu, 2:00 PM", "40 min", LessonKind::LiveSession),
    ]
}
