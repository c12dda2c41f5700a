//! Demo data loaded once at start-up.

use chrono::NaiveDate;
use crate::model::{
    Category, Course, CourseStatus, Level, Note, Payment, PaymentMethod, PaymentStatus, Student,
    StudentStatus, Video,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn student(
    id: u32,
    name: &str,
    phone: &str,
    course: &str,
    level: Level,
    join_date: NaiveDate,
    status: StudentStatus,
    progress: u8,
    last_activity: &str,
) -> Student {
    Student {
        id,
        name: name.to_string(),
        email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
        phone: phone.to_string(),
        course: course.to_string(),
        level,
        status,
        join_date,
        progress,
        last_activity: last_activity.to_string(),
    }
}

pub fn students() -> Vec<Student> {
    vec![
        student(1, "Alice Johnson", "+1 (555) 123-4567", "Business English Mastery",
            Level::Intermediate, date(2024, 1, 15), StudentStatus::Active, 75, "2 hours ago"),
        student(2, "Mike Chen", "+1 (555) 234-5678", "IELTS Preparation",
            Level::Advanced, date(2024, 1, 10), StudentStatus::Active, 45, "1 day ago"),
        student(3, "Sarah Williams", "+1 (555) 345-6789", "Conversational English",
            Level::Beginner, date(2024, 1, 20), StudentStatus::Pending, 0, "Never"),
        student(4, "David Brown", "+1 (555) 456-7890", "Grammar Fundamentals",
            Level::Beginner, date(2024, 1, 12), StudentStatus::Active, 30, "3 hours ago"),
        student(5, "Emma Davis", "+1 (555) 567-8901", "Academic Writing",
            Level::Advanced, date(2024, 1, 18), StudentStatus::Inactive, 60, "1 week ago"),
    ]
}

fn video(id: u32, title: &str, url: &str, duration: &str) -> Video {
    Video { id, title: title.to_string(), url: url.to_string(), duration: duration.to_string() }
}

fn note(id: u32, title: &str, content: &str) -> Note {
    Note { id, title: title.to_string(), content: content.to_string() }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Business English Mastery".to_string(),
            description: "Master professional English communication for the corporate world".to_string(),
            level: Level::Intermediate,
            duration: "8 weeks".to_string(),
            lessons: 24,
            students: 1250,
            rating: 4.8,
            price: 199.0,
            image: "https://images.pexels.com/photos/3184360/pexels-photo-3184360.jpeg".to_string(),
            status: CourseStatus::Active,
            category: Category::Business,
            instructor: "Dr. Sarah Johnson".to_string(),
            created_date: date(2024, 1, 15),
            videos: vec![
                video(1, "Introduction to Business English", "https://example.com/video1", "15:30"),
                video(2, "Email Communication", "https://example.com/video2", "22:45"),
            ],
            notes: vec![
                note(1, "Business Vocabulary List", "Essential business terms and phrases for professional communication..."),
                note(2, "Email Templates", "Professional email templates for various business scenarios..."),
            ],
        },
        Course {
            id: 2,
            title: "IELTS Preparation Course".to_string(),
            description: "Comprehensive preparation for all IELTS test sections".to_string(),
            level: Level::Advanced,
            duration: "12 weeks".to_string(),
            lessons: 36,
            students: 890,
            rating: 4.9,
            price: 299.0,
            image: "https://images.pexels.com/photos/4145153/pexels-photo-4145153.jpeg".to_string(),
            status: CourseStatus::Active,
            category: Category::TestPreparation,
            instructor: "Prof. Michael Brown".to_string(),
            created_date: date(2024, 1, 10),
            videos: vec![
                video(1, "IELTS Overview", "https://example.com/video3", "18:20"),
                video(2, "Reading Strategies", "https://example.com/video4", "25:15"),
            ],
            notes: vec![
                note(1, "IELTS Band Descriptors", "Understanding the IELTS scoring system and band requirements..."),
                note(2, "Writing Task 1 Guide", "Complete guide to IELTS Academic Writing Task 1..."),
            ],
        },
        Course {
            id: 3,
            title: "Conversational English".to_string(),
            description: "Improve fluency and confidence in everyday conversations".to_string(),
            level: Level::Beginner,
            duration: "6 weeks".to_string(),
            lessons: 18,
            students: 2100,
            rating: 4.7,
            price: 149.0,
            image: "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg".to_string(),
            status: CourseStatus::Active,
            category: Category::Speaking,
            instructor: "Emma Wilson".to_string(),
            created_date: date(2024, 1, 20),
            videos: vec![
                video(1, "Basic Greetings", "https://example.com/video5", "12:30"),
                video(2, "Daily Conversations", "https://example.com/video6", "20:45"),
            ],
            notes: vec![
                note(1, "Common Phrases", "Essential phrases for daily English conversations..."),
                note(2, "Pronunciation Tips", "Key pronunciation rules for clear communication..."),
            ],
        },
        Course {
            id: 4,
            title: "English Grammar Fundamentals".to_string(),
            description: "Build a strong foundation in English grammar rules and usage".to_string(),
            level: Level::Beginner,
            duration: "10 weeks".to_string(),
            lessons: 30,
            students: 1650,
            rating: 4.6,
            price: 179.0,
            image: "https://images.pexels.com/photos/4144923/pexels-photo-4144923.jpeg".to_string(),
            status: CourseStatus::Active,
            category: Category::Grammar,
            instructor: "James Carter".to_string(),
            created_date: date(2024, 1, 22),
            videos: Vec::new(),
            notes: Vec::new(),
        },
        Course {
            id: 5,
            title: "Academic Writing Skills".to_string(),
            description: "Develop advanced writing skills for academic and professional success".to_string(),
            level: Level::Advanced,
            duration: "8 weeks".to_string(),
            lessons: 24,
            students: 720,
            rating: 4.8,
            price: 249.0,
            image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg".to_string(),
            status: CourseStatus::Active,
            category: Category::Writing,
            instructor: "Dr. Olivia Reed".to_string(),
            created_date: date(2024, 1, 25),
            videos: Vec::new(),
            notes: Vec::new(),
        },
        Course {
            id: 6,
            title: "English Pronunciation Mastery".to_string(),
            description: "Perfect your English pronunciation and accent reduction".to_string(),
            level: Level::Intermediate,
            duration: "6 weeks".to_string(),
            lessons: 18,
            students: 950,
            rating: 4.7,
            price: 189.0,
            image: "https://images.pexels.com/photos/3184339/pexels-photo-3184339.jpeg".to_string(),
            status: CourseStatus::Draft,
            category: Category::Pronunciation,
            instructor: "Emma Wilson".to_string(),
            created_date: date(2024, 2, 1),
            videos: Vec::new(),
            notes: Vec::new(),
        },
    ]
}

fn payment(
    id: u32,
    student_name: &str,
    course: &str,
    amount: f64,
    due_date: NaiveDate,
    paid_date: Option<NaiveDate>,
    status: PaymentStatus,
    payment_method: Option<PaymentMethod>,
    transaction_id: Option<&str>,
) -> Payment {
    Payment {
        id,
        student_name: student_name.to_string(),
        student_email: format!("{}@email.com", student_name.to_lowercase().replace(' ', ".")),
        course: course.to_string(),
        amount,
        due_date,
        paid_date,
        status,
        payment_method,
        transaction_id: transaction_id.map(str::to_string),
    }
}

pub fn payments() -> Vec<Payment> {
    vec![
        payment(1, "Alice Johnson", "Business English Mastery", 199.0, date(2025, 1, 15),
            Some(date(2025, 1, 10)), PaymentStatus::Paid, Some(PaymentMethod::CreditCard), Some("TXN001234567")),
        payment(2, "Mike Chen", "IELTS Preparation", 299.0, date(2025, 1, 20),
            None, PaymentStatus::Due, None, None),
        payment(3, "Sarah Williams", "Conversational English", 149.0, date(2025, 1, 25),
            Some(date(2025, 1, 22)), PaymentStatus::Paid, Some(PaymentMethod::PayPal), Some("TXN001234568")),
        payment(4, "David Brown", "Grammar Fundamentals", 179.0, date(2025, 1, 18),
            None, PaymentStatus::Overdue, None, None),
        payment(5, "Emma Davis", "Academic Writing", 249.0, date(2025, 2, 1),
            None, PaymentStatus::Due, None, None),
        payment(6, "John Smith", "Business English Mastery", 199.0, date(2025, 1, 12),
            Some(date(2025, 1, 14)), PaymentStatus::LatePayment, Some(PaymentMethod::BankTransfer), Some("TXN001234569")),
    ]
}

/// Course titles offered in the student and payment forms.
pub const COURSE_TITLES: &[&str] = &[
    "Business English Mastery",
    "IELTS Preparation",
    "Conversational English",
    "Grammar Fundamentals",
    "Academic Writing Skills",
    "English Pronunciation Mastery",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let ids: HashSet<_> = students().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<_> = courses().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 6);
        let ids: HashSet<_> = payments().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn seeded_emails_follow_the_name() {
        assert_eq!(students()[1].email, "mike.chen@email.com");
        assert_eq!(payments()[3].student_email, "david.brown@email.com");
    }

    #[test]
    fn paid_seed_payments_carry_details() {
        for payment in payments().iter().filter(|p| p.status == PaymentStatus::Paid) {
            assert!(payment.paid_date.is_some());
            assert!(payment.payment_method.is_some());
        }
    }
}
