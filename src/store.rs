//! In-memory record collections with a narrow mutation API.

use chrono::NaiveDate;
use tracing::debug;
use crate::error::StoreError;
use crate::model::{Course, Payment, PaymentPatch};

pub type RecordId = u32;

/// A flat record owned by a [`RecordStore`].
pub trait Record: Clone {
    /// Partial update; fields left as `None` are not touched.
    type Patch;

    fn id(&self) -> RecordId;
    fn assign_id(&mut self, id: RecordId);
    fn apply(&mut self, patch: Self::Patch);
}

/// Hands out identifiers that are never reused, even after the record that
/// held the highest id is removed.
#[derive(Debug, Clone)]
struct IdSequence {
    next: RecordId,
}

impl IdSequence {
    fn after<'a>(ids: impl Iterator<Item = &'a RecordId>) -> Self {
        Self { next: ids.max().map_or(1, |max| max + 1) }
    }

    fn allocate(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    ids: IdSequence,
}

impl<T: Record> RecordStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        let ids = seed.iter().map(Record::id).collect::<Vec<_>>();
        Self {
            ids: IdSequence::after(ids.iter()),
            records: seed,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Assigns a fresh id to `draft`, appends it and returns the stored record.
    pub fn add(&mut self, mut draft: T) -> &T {
        let id = self.ids.allocate();
        draft.assign_id(id);
        debug!(id, "record added");
        self.records.push(draft);
        &self.records[self.records.len() - 1]
    }

    pub fn update(&mut self, id: RecordId, patch: T::Patch) -> Result<&T, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply(patch);
        debug!(id, "record updated");
        Ok(&*record)
    }

    /// Removes the record. Confirmation is the caller's job.
    pub fn remove(&mut self, id: RecordId) -> Result<T, StoreError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        debug!(id, "record removed");
        Ok(self.records.remove(index))
    }
}

impl RecordStore<Course> {
    pub fn duplicate(&mut self, id: RecordId, today: NaiveDate) -> Result<&Course, StoreError> {
        let copy = self.get(id).ok_or(StoreError::NotFound(id))?.copy_of(today);
        Ok(self.add(copy))
    }
}

impl RecordStore<Payment> {
    pub fn mark_paid(
        &mut self,
        id: RecordId,
        paid_on: NaiveDate,
        transaction_id: String,
    ) -> Result<&Payment, StoreError> {
        self.update(id, PaymentPatch::settle(paid_on, transaction_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::student::StudentPatch;
    use crate::model::{seed, PaymentStatus, Student, StudentStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    fn blank_student() -> Student {
        let mut student = seed::students().remove(0);
        student.name = "New Student".to_string();
        student.id = 0;
        student
    }

    #[test]
    fn add_allocates_id_above_every_existing_one() {
        let mut store = RecordStore::new(seed::students());
        let max_before = store.records().iter().map(|s| s.id).max().unwrap();
        let added = store.add(blank_student());
        assert!(added.id > max_before);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store: RecordStore<Student> = RecordStore::new(Vec::new());
        assert_eq!(store.len(), 0);
        assert_eq!(store.add(blank_student()).id, 1);
        assert_eq!(store.add(blank_student()).id, 2);
    }

    #[test]
    fn ids_are_not_reused_after_removing_the_highest() {
        let mut store = RecordStore::new(seed::students());
        store.remove(5).unwrap();
        let added = store.add(blank_student());
        assert_eq!(added.id, 6);
    }

    #[test]
    fn update_touches_only_patched_fields() {
        let mut store = RecordStore::new(seed::students());
        let before = store.get(2).cloned().unwrap();
        let patch = StudentPatch {
            status: Some(StudentStatus::Inactive),
            progress: Some(50),
            ..StudentPatch::default()
        };
        let after = store.update(2, patch).unwrap().clone();

        assert_eq!(after.status, StudentStatus::Inactive);
        assert_eq!(after.progress, 50);
        assert_eq!(
            Student { status: before.status, progress: before.progress, ..after },
            before
        );
    }

    #[test]
    fn missing_ids_are_reported_not_panicking() {
        let mut store = RecordStore::new(seed::students());
        assert_eq!(store.update(99, StudentPatch::default()).unwrap_err(), StoreError::NotFound(99));
        assert_eq!(store.remove(99).unwrap_err(), StoreError::NotFound(99));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn remove_returns_the_record() {
        let mut store = RecordStore::new(seed::students());
        let removed = store.remove(3).unwrap();
        assert_eq!(removed.name, "Sarah Williams");
        assert!(store.get(3).is_none());
    }

    #[test]
    fn duplicate_course_gets_new_id_and_reset_counters() {
        let mut store = RecordStore::new(seed::courses());
        let original_ids: Vec<_> = store.records().iter().map(|c| c.id).collect();
        let copy = store.duplicate(1, today()).unwrap().clone();

        assert!(!original_ids.contains(&copy.id));
        assert_eq!(copy.title, "Business English Mastery (Copy)");
        assert_eq!(copy.students, 0);
        assert_eq!(copy.rating, 0.0);
        assert_eq!(store.get(1).unwrap().students, 1250);
    }

    #[test]
    fn duplicate_of_missing_course_is_not_found() {
        let mut store = RecordStore::new(seed::courses());
        assert!(store.duplicate(42, today()).is_err());
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn mark_paid_settles_the_payment() {
        let mut store = RecordStore::new(seed::payments());
        let paid = store.mark_paid(4, today(), "TXN1".to_string()).unwrap();
        assert_eq!(paid.status, PaymentStatus::Paid);
        assert_eq!(paid.paid_date, Some(today()));
        assert_eq!(paid.amount, 179.0);
    }
}
