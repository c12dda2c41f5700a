use std::fmt;
use chrono::NaiveDate;
use crate::store::{Record, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    Paid,
    #[default]
    Due,
    Overdue,
    LatePayment,
}

impl PaymentStatus {
    pub const ALL: &'static [PaymentStatus] = &[
        PaymentStatus::Paid,
        PaymentStatus::Due,
        PaymentStatus::Overdue,
        PaymentStatus::LatePayment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Due => "Due",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::LatePayment => "Late Payment",
        }
    }

    /// Money for this payment has been received.
    pub fn is_settled(self) -> bool {
        matches!(self, PaymentStatus::Paid | PaymentStatus::LatePayment)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    BankTransfer,
    Cash,
    ManualEntry,
}

impl PaymentMethod {
    pub const ALL: &'static [PaymentMethod] = &[
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::BankTransfer,
        PaymentMethod::Cash,
        PaymentMethod::ManualEntry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::ManualEntry => "Manual Entry",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: RecordId,
    pub student_name: String,
    pub student_email: String,
    /// Course title copied at creation time.
    pub course: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    pub transaction_id: Option<String>,
}

impl Payment {
    pub fn record(input: PaymentInput) -> Self {
        Self {
            id: 0,
            student_name: input.student_name,
            student_email: input.student_email,
            course: input.course,
            amount: input.amount,
            due_date: input.due_date,
            paid_date: input.paid_date,
            status: input.status,
            payment_method: input.payment_method,
            transaction_id: input.transaction_id,
        }
    }
}

/// `TXN` followed by the current unix time in milliseconds.
pub fn transaction_id_now() -> String {
    format!("TXN{}", chrono::Utc::now().timestamp_millis())
}

/// Validated output of the payment form.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentInput {
    pub student_name: String,
    pub student_email: String,
    pub course: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    pub transaction_id: Option<String>,
}

/// Nullable fields use `Option<Option<_>>`: the outer level says whether the
/// patch touches the field, the inner one is the new (possibly empty) value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentPatch {
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub course: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub paid_date: Option<Option<NaiveDate>>,
    pub status: Option<PaymentStatus>,
    pub payment_method: Option<Option<PaymentMethod>>,
    pub transaction_id: Option<Option<String>>,
}

impl PaymentPatch {
    pub fn settle(paid_on: NaiveDate, transaction_id: String) -> Self {
        Self {
            status: Some(PaymentStatus::Paid),
            paid_date: Some(Some(paid_on)),
            payment_method: Some(Some(PaymentMethod::ManualEntry)),
            transaction_id: Some(Some(transaction_id)),
            ..Self::default()
        }
    }
}

impl From<PaymentInput> for PaymentPatch {
    fn from(input: PaymentInput) -> Self {
        Self {
            student_name: Some(input.student_name),
            student_email: Some(input.student_email),
            course: Some(input.course),
            amount: Some(input.amount),
            due_date: Some(input.due_date),
            paid_date: Some(input.paid_date),
            status: Some(input.status),
            payment_method: Some(input.payment_method),
            transaction_id: Some(input.transaction_id),
        }
    }
}

impl Record for Payment {
    type Patch = PaymentPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: PaymentPatch) {
        if let Some(v) = patch.student_name {
            self.student_name = v;
        }
        if let Some(v) = patch.student_email {
            self.student_email = v;
        }
        if let Some(v) = patch.course {
            self.course = v;
        }
        if let Some(v) = patch.amount {
            self.amount = v;
        }
        if let Some(v) = patch.due_date {
            self.due_date = v;
        }
        if let Some(v) = patch.paid_date {
            self.paid_date = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.payment_method {
            self.payment_method = v;
        }
        if let Some(v) = patch.transaction_id {
            self.transaction_id = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    #[test]
    fn only_paid_and_late_payments_are_settled() {
        assert_eq!(PaymentStatus::LatePayment.to_string(), "Late Payment");
        let settled: Vec<_> = PaymentStatus::ALL.iter().filter(|s| s.is_settled()).collect();
        assert_eq!(settled, vec![&PaymentStatus::Paid, &PaymentStatus::LatePayment]);
    }

    #[test]
    fn settle_patch_fills_payment_details() {
        let mut payment = seed::payments().remove(1);
        let paid_on = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap();
        payment.apply(PaymentPatch::settle(paid_on, "TXN42".to_string()));

        assert_eq!(payment.status, PaymentStatus::Paid);
        assert_eq!(payment.paid_date, Some(paid_on));
        assert_eq!(payment.payment_method, Some(PaymentMethod::ManualEntry));
        assert_eq!(payment.transaction_id.as_deref(), Some("TXN42"));
        assert_eq!(payment.student_name, "Mike Chen");
    }

    #[test]
    fn patch_can_clear_nullable_fields() {
        let mut payment = seed::payments().remove(0);
        payment.apply(PaymentPatch {
            paid_date: Some(None),
            payment_method: Some(None),
            status: Some(PaymentStatus::Due),
            ..PaymentPatch::default()
        });
        assert_eq!(payment.paid_date, None);
        assert_eq!(payment.payment_method, None);
        assert_eq!(payment.transaction_id.as_deref(), Some("TXN001234567"));
    }

    #[test]
    fn transaction_ids_are_prefixed() {
        assert!(transaction_id_now().starts_with("TXN"));
    }
}
