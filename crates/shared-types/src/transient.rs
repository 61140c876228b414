//! # Transient Payload
//!
//! Request-scoped data passed alongside a proposal but outside its arguments.
//! It is consumed while the transaction executes and is never written to the
//! ledger, so it is the only channel allowed to carry private values.

use std::collections::BTreeMap;
use std::fmt;

/// Field name to raw bytes, valid for one invocation.
///
/// `Debug` prints field names and sizes only. Values are sensitive by
/// definition and must not end up in logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TransientPayload {
    fields: BTreeMap<String, Vec<u8>>,
}

impl TransientPayload {
    /// Empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to add a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw bytes of a field.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// Field names, in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for TransientPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.fields {
            map.entry(name, &format_args!("<{} bytes>", value.len()));
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_names() {
        let payload = TransientPayload::new()
            .with_field("privateValue", b"1500".to_vec())
            .with_field("prVal", b"125".to_vec());

        assert_eq!(payload.get("privateValue"), Some(&b"1500"[..]));
        assert_eq!(payload.get("missing"), None);
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.field_names().collect::<Vec<_>>(), vec!["prVal", "privateValue"]);
    }

    #[test]
    fn test_debug_redacts_values() {
        let payload = TransientPayload::new().with_field("privateValue", b"secret-1500".to_vec());
        let rendered = format!("{:?}", payload);

        assert!(rendered.contains("privateValue"));
        assert!(rendered.contains("11 bytes"));
        assert!(!rendered.contains("secret"));
    }
}
