//! Read-only projections used by the list and dashboard screens.

use chrono::NaiveDate;
use iced::Color;
use crate::model::progress::LessonKind;
use crate::model::{Course, CourseStatus, Level, Payment, PaymentStatus, Student, StudentStatus};

/// Badge color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Orange,
    Blue,
    Purple,
    Gray,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Green => Color::from_rgb8(0x15, 0x80, 0x3d),
            Tone::Yellow => Color::from_rgb8(0xa1, 0x62, 0x07),
            Tone::Red => Color::from_rgb8(0xb9, 0x1c, 0x1c),
            Tone::Orange => Color::from_rgb8(0xc2, 0x41, 0x0c),
            Tone::Blue => Color::from_rgb8(0x1d, 0x4e, 0xd8),
            Tone::Purple => Color::from_rgb8(0x7e, 0x22, 0xce),
            Tone::Gray => Color::from_rgb8(0x37, 0x41, 0x51),
        }
    }
}

pub trait Badge {
    fn tone(&self) -> Tone;
}

impl Badge for StudentStatus {
    fn tone(&self) -> Tone {
        match self {
            StudentStatus::Active => Tone::Green,
            StudentStatus::Pending => Tone::Yellow,
            StudentStatus::Inactive => Tone::Red,
        }
    }
}

impl Badge for Level {
    fn tone(&self) -> Tone {
        match self {
            Level::Beginner => Tone::Blue,
            Level::Intermediate => Tone::Orange,
            Level::Advanced => Tone::Purple,
        }
    }
}

impl Badge for CourseStatus {
    fn tone(&self) -> Tone {
        match self {
            CourseStatus::Active => Tone::Green,
            CourseStatus::Draft => Tone::Yellow,
            CourseStatus::Archived => Tone::Gray,
        }
    }
}

impl Badge for PaymentStatus {
    fn tone(&self) -> Tone {
        match self {
            PaymentStatus::Paid => Tone::Green,
            PaymentStatus::Due => Tone::Yellow,
            PaymentStatus::Overdue => Tone::Red,
            PaymentStatus::LatePayment => Tone::Orange,
        }
    }
}

impl Badge for LessonKind {
    fn tone(&self) -> Tone {
        match self {
            LessonKind::LiveSession => Tone::Red,
            LessonKind::Workshop => Tone::Blue,
            LessonKind::SelfPaced => Tone::Green,
        }
    }
}

/// "Jan 15, 2025", or "N/A" when there is no date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Due strictly before `today` and no money received yet.
pub fn is_overdue(payment: &Payment, today: NaiveDate) -> bool {
    payment.due_date < today && !payment.status.is_settled()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaymentSummary {
    pub total_revenue: f64,
    pub pending_amount: f64,
    pub paid_count: usize,
    pub overdue_count: usize,
}

impl PaymentSummary {
    pub fn of(payments: &[Payment]) -> Self {
        payments.iter().fold(Self::default(), |mut summary, p| {
            if p.status.is_settled() {
                summary.total_revenue += p.amount;
                summary.paid_count += 1;
            } else {
                summary.pending_amount += p.amount;
            }
            if p.status == PaymentStatus::Overdue {
                summary.overdue_count += 1;
            }
            summary
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminOverview<'a> {
    pub total_students: usize,
    pub active_courses: usize,
    pub revenue: f64,
    pub average_progress: u8,
    pub recent_students: Vec<&'a Student>,
}

impl<'a> AdminOverview<'a> {
    pub const RECENT: usize = 4;

    pub fn of(students: &'a [Student], courses: &[Course], payments: &[Payment]) -> Self {
        let average_progress = if students.is_empty() {
            0
        } else {
            let total: u32 = students.iter().map(|s| u32::from(s.progress)).sum();
            (total as f64 / students.len() as f64).round() as u8
        };

        let mut recent: Vec<&Student> = students.iter().collect();
        recent.sort_by(|a, b| b.join_date.cmp(&a.join_date));
        recent.truncate(Self::RECENT);

        Self {
            total_students: students.len(),
            active_courses: courses.iter().filter(|c| c.status == CourseStatus::Active).count(),
            revenue: PaymentSummary::of(payments).total_revenue,
            average_progress,
            recent_students: recent,
        }
    }
}

/// First letter of every word, "Alice Johnson" -> "AJ".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// "$1,247" for whole amounts, "$99.50" otherwise.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction:02}")
    }
}

/// Whole stars out of five.
pub fn filled_stars(rating: f32) -> usize {
    rating.clamp(0.0, 5.0).floor() as usize
}

/// Each value relative to the largest, for bar heights.
pub fn bar_ratios(hours: &[f32]) -> Vec<f32> {
    let max = hours.iter().copied().fold(0.0_f32, f32::max);
    hours
        .iter()
        .map(|h| if max > 0.0 { h / max } else { 0.0 })
        .collect()
}

/// Lessons finished, from a progress percent and the course length.
pub fn lessons_completed(progress: u8, lessons: u32) -> u32 {
    let done = u64::from(progress.min(100)) * u64::from(lessons) / 100;
    // never more than `lessons`
    done as u32
}

/// Lessons finished across every enrolled course.
pub fn total_lessons_completed<'a>(enrolled: impl IntoIterator<Item = (&'a Course, u8)>) -> u64 {
    enrolled
        .into_iter()
        .map(|(course, progress)| u64::from(lessons_completed(progress, course.lessons)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn overdue_payment_until_it_is_paid() {
        let mut payment = seed::payments().remove(3);
        assert_eq!(payment.due_date, date(2025, 1, 18));
        assert!(is_overdue(&payment, date(2025, 2, 1)));

        payment.status = PaymentStatus::Paid;
        assert!(!is_overdue(&payment, date(2025, 2, 1)));
    }

    #[test]
    fn due_today_is_not_overdue() {
        let payment = seed::payments().remove(3);
        assert!(!is_overdue(&payment, date(2025, 1, 18)));
    }

    #[test]
    fn late_payment_is_settled() {
        let payment = seed::payments().remove(5);
        assert!(!is_overdue(&payment, date(2026, 1, 1)));
    }

    #[test]
    fn dates_render_short_month() {
        assert_eq!(format_date(Some(date(2025, 1, 15))), "Jan 15, 2025");
        assert_eq!(format_date(Some(date(2025, 2, 1))), "Feb 1, 2025");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn payment_summary_of_seed() {
        let summary = PaymentSummary::of(&seed::payments());
        assert_eq!(summary.total_revenue, 199.0 + 149.0 + 199.0);
        assert_eq!(summary.pending_amount, 299.0 + 179.0 + 249.0);
        assert_eq!(summary.paid_count, 3);
        assert_eq!(summary.overdue_count, 1);
    }

    #[test]
    fn admin_overview_of_seed() {
        let students = seed::students();
        let courses = seed::courses();
        let overview = AdminOverview::of(&students, &courses, &seed::payments());
        assert_eq!(overview.total_students, 5);
        assert_eq!(overview.active_courses, 5);
        assert_eq!(overview.average_progress, 42);
        let recent: Vec<_> = overview.recent_students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(recent, vec!["Sarah Williams", "Emma Davis", "Alice Johnson", "David Brown"]);
    }

    #[test]
    fn overview_of_nothing() {
        let overview = AdminOverview::of(&[], &[], &[]);
        assert_eq!(overview.average_progress, 0);
        assert!(overview.recent_students.is_empty());
    }

    #[test]
    fn initials_and_currency() {
        assert_eq!(initials("Alice Johnson"), "AJ");
        assert_eq!(initials("  dr. sarah  johnson "), "DSJ");
        assert_eq!(initials(""), "");
        assert_eq!(format_currency(547.0), "$547");
        assert_eq!(format_currency(24580.0), "$24,580");
        assert_eq!(format_currency(1234567.5), "$1,234,567.50");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn stars_and_bars() {
        assert_eq!(filled_stars(4.8), 4);
        assert_eq!(filled_stars(7.0), 5);
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(bar_ratios(&[2.0, 4.0, 1.0]), vec![0.5, 1.0, 0.25]);
        assert_eq!(bar_ratios(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn completed_lessons_round_down() {
        assert_eq!(lessons_completed(75, 24), 18);
        assert_eq!(lessons_completed(45, 36), 16);
        assert_eq!(lessons_completed(0, 10), 0);
    }

    #[test]
    fn lessons_completed_handles_huge_courses() {
        assert_eq!(lessons_completed(75, 100_000_000), 75_000_000);
        assert_eq!(lessons_completed(100, u32::MAX), u32::MAX);
        assert_eq!(lessons_completed(250, 10), 10);
    }

    #[test]
    fn totals_add_up_without_wrapping() {
        let mut courses = seed::courses();
        courses[0].lessons = u32::MAX;
        courses[1].lessons = u32::MAX;
        let enrolled = [(&courses[0], 100), (&courses[1], 100), (&courses[2], 50)];
        let expected = 2 * u64::from(u32::MAX) + u64::from(courses[2].lessons / 2);
        assert_eq!(total_lessons_completed(enrolled), expected);
    }

    #[test]
    fn every_payment_status_has_a_distinct_tone() {
        let tones: Vec<_> = PaymentStatus::ALL.iter().map(Badge::tone).collect();
        for (i, tone) in tones.iter().enumerate() {
            assert!(!tones[i + 1..].contains(tone));
        }
    }
}
