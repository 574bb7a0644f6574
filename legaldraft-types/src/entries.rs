use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EntryError;

/// The user-extensible lists a form can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListName {
    Children,
    Parents,
    Caretakers,
}

impl ListName {
    pub const ALL: [ListName; 3] = [Self::Children, Self::Parents, Self::Caretakers];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Parents => "parents",
            Self::Caretakers => "caretakers",
        }
    }

    /// The fields each record of this list carries.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Children => &["full_name", "date_of_birth"],
            Self::Parents => &["full_name", "address", "phone"],
            Self::Caretakers => &["full_name", "relationship", "address", "phone"],
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record in a repeated entry list, e.g. a single child.
///
/// Missing fields read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepeatedEntry {
    fields: BTreeMap<String, String>,
}

impl RepeatedEntry {
    /// Create an entry with no fields filled in.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Get a field value, empty if unset.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Set a field value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Check that every named field holds a non-blank value.
    pub fn is_complete(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| !self.get(f).trim().is_empty())
    }

    /// Iterate over the filled-in fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An ordered list of entries that never drops below one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    name: ListName,
    entries: Vec<RepeatedEntry>,
}

impl EntryList {
    /// Create a list holding a single blank entry.
    pub fn new(name: ListName) -> Self {
        Self {
            name,
            entries: vec![RepeatedEntry::blank()],
        }
    }

    pub fn name(&self) -> ListName {
        self.name
    }

    /// Append a blank entry and return its index.
    pub fn add(&mut self) -> usize {
        self.entries.push(RepeatedEntry::blank());
        self.entries.len() - 1
    }

    /// Remove the entry at `index`.
    ///
    /// Returns `Ok(false)` without touching the list when it holds only one entry.
    pub fn remove(&mut self, index: usize) -> Result<bool, EntryError> {
        self.check_index(index)?;
        if self.entries.len() == 1 {
            return Ok(false);
        }
        self.entries.remove(index);
        Ok(true)
    }

    /// Overwrite one field of the entry at `index`.
    pub fn update(
        &mut self,
        index: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), EntryError> {
        self.check_index(index)?;
        self.entries[index].set(field, value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&RepeatedEntry> {
        self.entries.get(index)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepeatedEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[RepeatedEntry] {
        &self.entries
    }

    /// Check if at least one entry has all the named fields filled in.
    pub fn any_complete(&self, fields: &[&str]) -> bool {
        self.entries.iter().any(|e| e.is_complete(fields))
    }

    fn check_index(&self, index: usize) -> Result<(), EntryError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(EntryError::OutOfRange {
                list: self.name,
                index,
                len: self.entries.len(),
            })
        }
    }
}

/// All repeated entry lists of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLists {
    children: EntryList,
    parents: EntryList,
    caretakers: EntryList,
}

impl EntryLists {
    /// Create every list with one blank entry.
    pub fn new() -> Self {
        Self {
            children: EntryList::new(ListName::Children),
            parents: EntryList::new(ListName::Parents),
            caretakers: EntryList::new(ListName::Caretakers),
        }
    }

    pub fn get(&self, name: ListName) -> &EntryList {
        match name {
            ListName::Children => &self.children,
            ListName::Parents => &self.parents,
            ListName::Caretakers => &self.caretakers,
        }
    }

    pub fn get_mut(&mut self, name: ListName) -> &mut EntryList {
        match name {
            ListName::Children => &mut self.children,
            ListName::Parents => &mut self.parents,
            ListName::Caretakers => &mut self.caretakers,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntryList> {
        [&self.children, &self.parents, &self.caretakers].into_iter()
    }
}

impl Default for EntryLists {
    fn default() -> Self {
        Self::new()
    }
}

/// Which of the two emergency contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSlot {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

/// A fixed-shape contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl EmergencyContact {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
        }
    }

    pub fn is_complete(&self, fields: &[ContactField]) -> bool {
        fields.iter().all(|f| !self.get(*f).trim().is_empty())
    }
}

/// The primary and secondary emergency contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContacts {
    pub primary: EmergencyContact,
    pub secondary: EmergencyContact,
}

impl EmergencyContacts {
    pub fn get(&self, slot: ContactSlot) -> &EmergencyContact {
        match slot {
            ContactSlot::Primary => &self.primary,
            ContactSlot::Secondary => &self.secondary,
        }
    }

    pub fn get_mut(&mut self, slot: ContactSlot) -> &mut EmergencyContact {
        match slot {
            ContactSlot::Primary => &mut self.primary,
            ContactSlot::Secondary => &mut self.secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_has_one_blank_entry() {
        let list = EntryList::new(ListName::Children);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(&RepeatedEntry::blank()));
    }

    #[test]
    fn removing_last_entry_is_a_no_op() {
        let mut list = EntryList::new(ListName::Children);
        assert!(!list.remove(0).unwrap());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_update_remove() {
        let mut list = EntryList::new(ListName::Caretakers);
        let idx = list.add();
        assert_eq!(idx, 1);
        list.update(1, "full_name", "Grandma").unwrap();
        assert!(list.remove(0).unwrap());
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().get("full_name"), "Grandma");
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut list = EntryList::new(ListName::Parents);
        let err = list.update(3, "full_name", "x").unwrap_err();
        assert_eq!(
            err,
            EntryError::OutOfRange {
                list: ListName::Parents,
                index: 3,
                len: 1
            }
        );
        assert!(list.remove(1).is_err());
    }

    #[test]
    fn completeness_ignores_whitespace() {
        let entry = RepeatedEntry::blank()
            .with("full_name", "Sam")
            .with("date_of_birth", "  ");
        assert!(!entry.is_complete(ListName::Children.fields()));
        assert!(entry.is_complete(&["full_name"]));
    }

    #[test]
    fn contact_fields() {
        let mut contacts = EmergencyContacts::default();
        contacts
            .get_mut(ContactSlot::Secondary)
            .set(ContactField::Phone, "555-0100");
        assert_eq!(contacts.secondary.phone, "555-0100");
        assert!(
            contacts
                .get(ContactSlot::Secondary)
                .is_complete(&[ContactField::Phone])
        );
        assert!(!contacts.primary.is_complete(&[ContactField::Name]));
    }
}
