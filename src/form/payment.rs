use chrono::NaiveDate;
use crate::form::{rules, Draft, FieldErrors};
use crate::model::{Payment, PaymentInput, PaymentMethod, PaymentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    StudentName,
    StudentEmail,
    Amount,
    TransactionId,
}

impl PaymentField {
    pub fn key(self) -> &'static str {
        match self {
            PaymentField::StudentName => "student_name",
            PaymentField::StudentEmail => "student_email",
            PaymentField::Amount => "amount",
            PaymentField::TransactionId => "transaction_id",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentDraft {
    pub student_name: String,
    pub student_email: String,
    pub course: Option<String>,
    pub amount: String,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    pub transaction_id: String,
}

impl PaymentDraft {
    pub fn set(&mut self, field: PaymentField, value: String) {
        match field {
            PaymentField::StudentName => self.student_name = value,
            PaymentField::StudentEmail => self.student_email = value,
            PaymentField::Amount => self.amount = value,
            PaymentField::TransactionId => self.transaction_id = value,
        }
    }
}

impl From<&Payment> for PaymentDraft {
    fn from(payment: &Payment) -> Self {
        Self {
            student_name: payment.student_name.clone(),
            student_email: payment.student_email.clone(),
            course: Some(payment.course.clone()).filter(|c| !c.is_empty()),
            amount: payment.amount.to_string(),
            due_date: Some(payment.due_date),
            paid_date: payment.paid_date,
            status: payment.status,
            payment_method: payment.payment_method,
            transaction_id: payment.transaction_id.clone().unwrap_or_default(),
        }
    }
}

impl Draft for PaymentDraft {
    type Output = PaymentInput;

    fn validate(&self) -> Result<PaymentInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let student_name =
            rules::required(&mut errors, "student_name", &self.student_name, "Student name is required");
        let student_email =
            rules::email(&mut errors, "student_email", &self.student_email, "Student email is required");
        let course = rules::selected(&mut errors, "course", &self.course, "Course selection is required");
        let amount = rules::money(
            &mut errors,
            "amount",
            &self.amount,
            "Amount is required",
            "Amount must be a non-negative number",
        );
        let due_date = rules::selected(&mut errors, "due_date", &self.due_date, "Due date is required");

        if self.status == PaymentStatus::Paid {
            rules::selected(&mut errors, "paid_date", &self.paid_date, "Paid date is required when status is Paid");
            rules::selected(
                &mut errors,
                "payment_method",
                &self.payment_method,
                "Payment method is required when status is Paid",
            );
        }

        let transaction_id = Some(self.transaction_id.trim().to_string()).filter(|t| !t.is_empty());

        match (student_name, student_email, course, amount, due_date) {
            (Some(student_name), Some(student_email), Some(course), Some(amount), Some(due_date))
                if errors.is_empty() =>
            {
                Ok(PaymentInput {
                    student_name,
                    student_email,
                    course,
                    amount,
                    due_date,
                    paid_date: self.paid_date,
                    status: self.status,
                    payment_method: self.payment_method,
                    transaction_id,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormController;
    use crate::model::seed;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid() -> PaymentDraft {
        PaymentDraft {
            student_name: "Rita Gomez".to_string(),
            student_email: "rita.gomez@email.com".to_string(),
            course: Some("Conversational English".to_string()),
            amount: "149".to_string(),
            due_date: Some(date(2025, 3, 1)),
            ..PaymentDraft::default()
        }
    }

    #[test]
    fn due_payment_needs_no_paid_fields() {
        let input = valid().validate().unwrap();
        assert_eq!(input.status, PaymentStatus::Due);
        assert_eq!(input.amount, 149.0);
        assert_eq!(input.transaction_id, None);
    }

    #[test]
    fn paid_without_paid_date_fails_and_never_submits() {
        let draft = PaymentDraft {
            status: PaymentStatus::Paid,
            payment_method: Some(PaymentMethod::Cash),
            ..valid()
        };
        let mut form = FormController::create(draft);
        let mut submitted = false;
        if let Ok(_submission) = form.begin_submit(Duration::ZERO) {
            submitted = true;
        }

        assert!(!submitted);
        assert!(!form.is_submitting());
        assert_eq!(form.error("paid_date"), Some("Paid date is required when status is Paid"));
        assert_eq!(form.error("payment_method"), None);
        assert_eq!(form.error("amount"), None);
    }

    #[test]
    fn paid_requires_a_method_too() {
        let draft = PaymentDraft { status: PaymentStatus::Paid, ..valid() };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["paid_date", "payment_method"]);
    }

    #[test]
    fn late_payment_does_not_require_paid_fields() {
        let draft = PaymentDraft { status: PaymentStatus::LatePayment, ..valid() };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn amount_and_due_date_rules() {
        let draft = PaymentDraft { amount: "-5".to_string(), due_date: None, ..valid() };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("amount"), Some("Amount must be a non-negative number"));
        assert_eq!(errors.get("due_date"), Some("Due date is required"));
    }

    #[test]
    fn transaction_id_is_kept_when_given() {
        let draft = PaymentDraft { transaction_id: " TXN42 ".to_string(), ..valid() };
        assert_eq!(draft.validate().unwrap().transaction_id.as_deref(), Some("TXN42"));
    }

    #[test]
    fn existing_payment_round_trips_through_the_draft() {
        let payment = seed::payments().remove(0);
        let input = PaymentDraft::from(&payment).validate().unwrap();
        assert_eq!(input.amount, payment.amount);
        assert_eq!(input.paid_date, payment.paid_date);
        assert_eq!(input.transaction_id, payment.transaction_id);
    }
}
