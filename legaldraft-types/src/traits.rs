use serde::{Deserialize, Serialize};

/// An id/name pair from a reference data lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefItem {
    pub id: String,
    pub name: String,
}

impl RefItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Country and state lookup used to populate derived select options.
///
/// Implementations must be side-effect free and stable for the lifetime of a
/// session: the same id always maps to the same name. Callers may query
/// repeatedly and do not cache results.
pub trait ReferenceData {
    /// All countries, in display order.
    fn list_countries(&self) -> Vec<RefItem>;

    /// The states of a country, in display order. Unknown ids yield an empty list.
    fn list_states(&self, country_id: &str) -> Vec<RefItem>;
}

impl<T: ReferenceData + ?Sized> ReferenceData for &T {
    fn list_countries(&self) -> Vec<RefItem> {
        (**self).list_countries()
    }

    fn list_states(&self, country_id: &str) -> Vec<RefItem> {
        (**self).list_states(country_id)
    }
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Fire-and-forget sink for user-facing notifications (toasts, status lines).
pub trait Notifier {
    fn notify_success(&self, message: &str);

    fn notify_error(&self, message: &str);

    /// Dispatch a [`Notice`] to the matching method.
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(message) => self.notify_success(&message),
            Notice::Error(message) => self.notify_error(&message),
        }
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify_success(&self, message: &str) {
        (**self).notify_success(message);
    }

    fn notify_error(&self, message: &str) {
        (**self).notify_error(message);
    }
}
