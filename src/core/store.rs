//! In-memory record collections and id generation.
//!
//! Each view owns one [`Collection`] per record type. Mutations go through
//! the collection so id uniqueness and insertion order are enforced in one
//! place; views re-filter from `items()` after any change.

use uuid::Uuid;

use crate::core::attendance::AttendanceRecord;
use crate::core::document::Document;
use crate::core::employee::Employee;
use crate::core::leave::LeaveRequest;
use crate::core::notification::Notification;

/// A record with a stable string id, unique within its collection.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for AttendanceRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Document {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Generate a fresh record id.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Suggest the next employee badge: the highest numeric suffix over
/// existing `EMP`-prefixed badges, plus one, zero-padded to three digits.
pub fn next_badge(employees: &[Employee]) -> String {
    let highest = employees
        .iter()
        .filter_map(|e| e.badge.strip_prefix("EMP"))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("EMP{:03}", highest + 1)
}

/// An ordered, id-unique record list.
///
/// Insertion order is the display order; nothing here sorts. All
/// mutations preserve the relative order of untouched records.
#[derive(Debug, Clone, Default)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: HasId> Collection<T> {
    /// Build a collection from seed records. Logs and drops any record
    /// whose id repeats an earlier one.
    pub fn new(items: Vec<T>) -> Self {
        let mut collection = Collection { items: Vec::new() };
        for item in items {
            collection.insert_back(item);
        }
        collection
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Insert a new record at the front (newest-first display order).
    /// Returns `false` and leaves the collection untouched when the id is
    /// already present.
    pub fn insert_front(&mut self, item: T) -> bool {
        if self.contains(item.id()) {
            tracing::warn!("refusing duplicate record id {}", item.id());
            return false;
        }
        self.items.insert(0, item);
        true
    }

    /// Insert a new record at the back. Same duplicate-id rule as
    /// [`insert_front`](Collection::insert_front).
    pub fn insert_back(&mut self, item: T) -> bool {
        if self.contains(item.id()) {
            tracing::warn!("refusing duplicate record id {}", item.id());
            return false;
        }
        self.items.push(item);
        true
    }

    /// Apply `f` to the record with the given id. Returns `false` when the
    /// id is not present; every other record is left untouched.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => {
                tracing::debug!("update on unknown record id {id}");
                false
            }
        }
    }

    /// Remove the record with the given id, preserving the order of the
    /// rest. Returns the removed record, or `None` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let idx = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(idx))
    }

    /// Replace the entire contents (the reseed action).
    pub fn replace_all(&mut self, items: Vec<T>) {
        *self = Collection::new(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_employee(id: &str, badge: &str, first: &str) -> Employee {
        Employee {
            id: id.into(),
            badge: badge.into(),
            first_name: first.into(),
            last_name: "Test".into(),
            email: format!("{first}@staffscope.io").to_lowercase(),
            phone: "+1 555 0100".into(),
            department: "Engineering".into(),
            position: "Developer".into(),
            status: crate::core::employee::EmployeeStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_insert_front_newest_first() {
        let mut c = Collection::new(vec![make_employee("a", "EMP001", "Ann")]);
        c.insert_front(make_employee("b", "EMP002", "Bob"));
        let ids: Vec<&str> = c.items().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_refused() {
        let mut c = Collection::new(vec![make_employee("a", "EMP001", "Ann")]);
        assert!(!c.insert_front(make_employee("a", "EMP002", "Bob")));
        assert_eq!(c.len(), 1);
        assert_eq!(c.get("a").unwrap().first_name, "Ann");
    }

    #[test]
    fn test_update_touches_only_target() {
        let mut c = Collection::new(vec![
            make_employee("a", "EMP001", "Ann"),
            make_employee("b", "EMP002", "Bob"),
        ]);
        assert!(c.update("b", |e| e.first_name = "Robert".into()));
        assert_eq!(c.get("a").unwrap().first_name, "Ann");
        assert_eq!(c.get("b").unwrap().first_name, "Robert");
        assert!(!c.update("zzz", |e| e.first_name = "X".into()));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut c = Collection::new(vec![
            make_employee("a", "EMP001", "Ann"),
            make_employee("b", "EMP002", "Bob"),
            make_employee("c", "EMP003", "Cat"),
        ]);
        let removed = c.remove("b");
        assert_eq!(removed.map(|e| e.id).as_deref(), Some("b"));
        let ids: Vec<&str> = c.items().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(c.remove("b").is_none());
    }

    #[test]
    fn test_next_badge_scans_numeric_suffix() {
        let list = vec![
            make_employee("a", "EMP001", "Ann"),
            make_employee("b", "EMP007", "Bob"),
            make_employee("c", "not-a-badge", "Cat"),
        ];
        assert_eq!(next_badge(&list), "EMP008");
        assert_eq!(next_badge(&[]), "EMP001");
    }

    #[test]
    fn test_new_record_ids_are_unique() {
        let a = new_record_id();
        let b = new_record_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }
}
