use crate::plugin::AttributeError;
use std::sync::{Mutex, PoisonError};

/// An ordered set of named, mutable text attributes.
///
/// Attribute names are fixed when the set is constructed; values default to
/// the empty string and are replaced wholesale by `set`. Lookup is by exact,
/// case-sensitive name match and enumeration order is the declaration order.
///
/// The host mutates values through shared references, so the values sit
/// behind a `Mutex`. The host contract serializes attribute access against
/// record processing; the lock only keeps a concurrent misuse from being
/// undefined rather than merely stale.
pub struct AttributeSet {
    names: Vec<String>,
    values: Mutex<Vec<String>>,
}

impl AttributeSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let values = Mutex::new(vec![String::new(); names.len()]);
        Self { names, values }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the attribute at `index`, in declaration order.
    pub fn name(&self, index: usize) -> Result<&str, AttributeError> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(AttributeError::Unknown)
    }

    /// Current value of the named attribute.
    pub fn get(&self, name: &str) -> Result<String, AttributeError> {
        let index = self.position(name)?;
        let values = self.lock_values();
        values.get(index).cloned().ok_or(AttributeError::Unknown)
    }

    /// Replace the value of the named attribute. Any text is accepted,
    /// including empty; an unknown name leaves every stored value unchanged.
    pub fn set(&self, name: &str, value: &str) -> Result<(), AttributeError> {
        let index = self.position(name)?;
        let mut values = self.lock_values();
        match values.get_mut(index) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None => Err(AttributeError::Unknown),
        }
    }

    fn position(&self, name: &str) -> Result<usize, AttributeError> {
        self.names
            .iter()
            .position(|known| known == name)
            .ok_or(AttributeError::Unknown)
    }

    fn lock_values(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned lock only means another caller panicked mid-update;
        // attribute values are plain strings and stay usable.
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_properties() -> AttributeSet {
        AttributeSet::new(["property1", "property2"])
    }

    #[test]
    fn test_names_enumerate_in_declaration_order() {
        let attributes = two_properties();
        assert_eq!(attributes.name(0), Ok("property1"));
        assert_eq!(attributes.name(1), Ok("property2"));
    }

    #[test]
    fn test_out_of_range_index_is_unknown() {
        let attributes = two_properties();
        assert_eq!(attributes.name(2), Err(AttributeError::Unknown));
        assert_eq!(attributes.name(usize::MAX), Err(AttributeError::Unknown));
    }

    #[test]
    fn test_values_default_to_empty() {
        let attributes = two_properties();
        assert_eq!(attributes.get("property1").ok().as_deref(), Some(""));
        assert_eq!(attributes.get("property2").ok().as_deref(), Some(""));
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let attributes = two_properties();
        assert!(attributes.set("property1", "value1").is_ok());
        assert_eq!(attributes.get("property1").ok().as_deref(), Some("value1"));

        // Repeating the same set leaves the read result unchanged.
        assert!(attributes.set("property1", "value1").is_ok());
        assert_eq!(attributes.get("property1").ok().as_deref(), Some("value1"));
    }

    #[test]
    fn test_set_accepts_empty_value() {
        let attributes = two_properties();
        assert!(attributes.set("property2", "something").is_ok());
        assert!(attributes.set("property2", "").is_ok());
        assert_eq!(attributes.get("property2").ok().as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_name_rejected_on_get_and_set() {
        let attributes = two_properties();
        assert_eq!(attributes.get("property3"), Err(AttributeError::Unknown));
        assert_eq!(
            attributes.set("property3", "x"),
            Err(AttributeError::Unknown)
        );
    }

    #[test]
    fn test_failed_set_leaves_stored_values_unchanged() {
        let attributes = two_properties();
        assert!(attributes.set("property1", "kept1").is_ok());
        assert!(attributes.set("property2", "kept2").is_ok());

        assert!(attributes.set("nosuch", "clobber").is_err());

        assert_eq!(attributes.get("property1").ok().as_deref(), Some("kept1"));
        assert_eq!(attributes.get("property2").ok().as_deref(), Some("kept2"));
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let attributes = two_properties();
        assert_eq!(attributes.get("Property1"), Err(AttributeError::Unknown));
        assert_eq!(
            attributes.set("PROPERTY2", "x"),
            Err(AttributeError::Unknown)
        );
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(two_properties().len(), 2);
        assert!(!two_properties().is_empty());
        assert!(AttributeSet::new(Vec::<String>::new()).is_empty());
    }
}
