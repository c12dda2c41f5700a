//! Derives the visible subset of a collection from a search query and the
//! categorical selectors shown above each list.

use std::fmt;
use crate::model::{Course, CourseStatus, Level, Payment, PaymentStatus, Student, StudentStatus};

/// Records that take part in free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// A categorical filter over records of type `T`.
pub trait Criterion<T> {
    fn admits(&self, record: &T) -> bool;
}

impl<T> Criterion<T> for () {
    fn admits(&self, _record: &T) -> bool {
        true
    }
}

/// Selector value: everything, or one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn allows(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Copy> Choice<T> {
    /// `All` followed by every variant, in pick list order.
    pub fn options(variants: &[T]) -> Vec<Choice<T>> {
        std::iter::once(Choice::All)
            .chain(variants.iter().copied().map(Choice::Only))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("All"),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

pub fn matches_query<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching both the query and the criterion, in collection order.
pub fn visible<'a, T, C>(records: &'a [T], query: &str, criterion: &C) -> Vec<&'a T>
where
    T: Searchable,
    C: Criterion<T>,
{
    records
        .iter()
        .filter(|record| matches_query(*record, query) && criterion.admits(*record))
        .collect()
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.course.as_str()]
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.instructor.as_str()]
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.student_name.as_str(), self.student_email.as_str(), self.course.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub status: Choice<StudentStatus>,
}

impl Criterion<Student> for StudentFilter {
    fn admits(&self, student: &Student) -> bool {
        self.status.allows(&student.status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub status: Choice<CourseStatus>,
    pub level: Choice<Level>,
}

impl Criterion<Course> for CourseFilter {
    fn admits(&self, course: &Course) -> bool {
        self.status.allows(&course.status) && self.level.allows(&course.level)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    pub status: Choice<PaymentStatus>,
}

impl Criterion<Payment> for PaymentFilter {
    fn admits(&self, payment: &Payment) -> bool {
        self.status.allows(&payment.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    fn names(students: &[&Student]) -> Vec<String> {
        students.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn search_mike_finds_one_student() {
        let students = seed::students();
        let found = visible(&students, "mike", &StudentFilter::default());
        assert_eq!(names(&found), vec!["Mike Chen"]);
    }

    #[test]
    fn empty_query_and_all_filters_keep_everything() {
        let students = seed::students();
        assert_eq!(visible(&students, "", &()).len(), students.len());
        let payments = seed::payments();
        assert_eq!(visible(&payments, "", &PaymentFilter::default()).len(), 6);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let students = seed::students();
        // matches the course field only
        let found = visible(&students, "IELTS", &());
        assert_eq!(names(&found), vec!["Mike Chen"]);
        let found = visible(&students, "EMAIL.COM", &());
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn status_filter_combines_with_query() {
        let students = seed::students();
        let active = StudentFilter { status: Choice::Only(StudentStatus::Active) };
        let found = visible(&students, "", &active);
        assert_eq!(names(&found), vec!["Alice Johnson", "Mike Chen", "David Brown"]);

        let found = visible(&students, "emma", &active);
        assert!(found.is_empty());
    }

    #[test]
    fn course_filter_requires_both_dimensions() {
        let courses = seed::courses();
        let filter = CourseFilter {
            status: Choice::Only(CourseStatus::Active),
            level: Choice::Only(Level::Beginner),
        };
        let titles: Vec<_> = visible(&courses, "", &filter).into_iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Conversational English", "English Grammar Fundamentals"]);

        let found = visible(&courses, "wilson", &filter);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn payment_filter_by_late_payment() {
        let payments = seed::payments();
        let filter = PaymentFilter { status: Choice::Only(PaymentStatus::LatePayment) };
        let found = visible(&payments, "", &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].student_name, "John Smith");
    }

    #[test]
    fn result_partitions_the_collection() {
        let payments = seed::payments();
        let filter = PaymentFilter { status: Choice::Only(PaymentStatus::Due) };
        for query in ["", "a", "business", "zzz", "@"] {
            let shown = visible(&payments, query, &filter);
            for payment in &payments {
                let passes = matches_query(payment, query) && filter.admits(payment);
                assert_eq!(shown.iter().any(|p| p.id == payment.id), passes, "query {query:?}");
            }
        }
    }

    #[test]
    fn choice_options_start_with_all() {
        let options = Choice::options(StudentStatus::ALL);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], Choice::All);
        assert_eq!(options[3].to_string(), "Inactive");
    }
}
