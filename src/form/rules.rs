use std::sync::LazyLock;
use regex::Regex;
use crate::form::FieldErrors;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Trimmed value, or an error when nothing is left after trimming.
pub fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, message);
        None
    } else {
        Some(value.to_string())
    }
}

pub fn selected<T: Clone>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &Option<T>,
    message: &str,
) -> Option<T> {
    if value.is_none() {
        errors.insert(field, message);
    }
    value.clone()
}

pub fn email(errors: &mut FieldErrors, field: &'static str, value: &str, missing: &str) -> Option<String> {
    let value = required(errors, field, value, missing)?;
    if is_email(&value) {
        Some(value)
    } else {
        errors.insert(field, "Email is invalid");
        None
    }
}

/// Whole number of at least one.
pub fn count(errors: &mut FieldErrors, field: &'static str, raw: &str, message: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Some(n),
        _ => {
            errors.insert(field, message);
            None
        }
    }
}

/// Finite, non-negative amount of money.
pub fn money(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    missing: &str,
    invalid: &str,
) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.insert(field, missing);
        return None;
    }
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Some(amount),
        _ => {
            errors.insert(field, invalid);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_email("alice.johnson@email.com"));
        assert!(is_email("a@b.co"));
        assert!(!is_email("alice@email"));
        assert!(!is_email("alice.email.com"));
        assert!(!is_email("ali ce@email.com"));
        assert!(!is_email("a@@b.com"));
    }

    #[test]
    fn required_trims_before_checking() {
        let mut errors = FieldErrors::new();
        assert_eq!(required(&mut errors, "name", "   ", "Name is required"), None);
        assert_eq!(errors.get("name"), Some("Name is required"));

        let mut errors = FieldErrors::new();
        assert_eq!(required(&mut errors, "name", "  Ann ", "x").as_deref(), Some("Ann"));
        assert!(errors.is_empty());
    }

    #[test]
    fn email_reports_missing_before_invalid() {
        let mut errors = FieldErrors::new();
        email(&mut errors, "email", "", "Email is required");
        assert_eq!(errors.get("email"), Some("Email is required"));

        let mut errors = FieldErrors::new();
        email(&mut errors, "email", "nope", "Email is required");
        assert_eq!(errors.get("email"), Some("Email is invalid"));
    }

    #[test]
    fn count_needs_a_positive_integer() {
        let mut errors = FieldErrors::new();
        assert_eq!(count(&mut errors, "lessons", " 12 ", "bad"), Some(12));
        assert_eq!(count(&mut errors, "lessons", "0", "bad"), None);
        assert_eq!(count(&mut errors, "lessons", "2.5", "bad"), None);
        assert_eq!(count(&mut errors, "lessons", "", "bad"), None);
    }

    #[test]
    fn money_accepts_zero_and_rejects_negative() {
        let mut errors = FieldErrors::new();
        assert_eq!(money(&mut errors, "price", "0", "missing", "bad"), Some(0.0));
        assert_eq!(money(&mut errors, "price", "199.99", "missing", "bad"), Some(199.99));
        assert!(errors.is_empty());

        assert_eq!(money(&mut errors, "price", "-1", "missing", "bad"), None);
        assert_eq!(errors.get("price"), Some("bad"));
        assert_eq!(money(&mut errors, "amount", "NaN", "missing", "bad"), None);
        assert_eq!(money(&mut errors, "total", " ", "missing", "bad"), None);
        assert_eq!(errors.get("total"), Some("missing"));
    }
}
