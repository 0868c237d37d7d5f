use std::collections::HashSet;
use std::iter::FromIterator;

use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};

use super::value::Value;

/// A record assembled at the call site from an explicit, ordered list of
/// fields.
///
/// Fields are emitted in the order they were added. `field()` projects the
/// declared name to its lowercase key, `field_as()` takes the key verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<V: Into<Value>>(self, name: &str, value: V) -> Self {
        self.field_as(&name.to_lowercase(), value)
    }

    pub fn field_as<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.fields.push((key.to_owned(), value.into()));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<N: AsRef<str>, V: Into<Value>> FromIterator<(N, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Record::new(), |rec, (name, value)| {
                rec.field(name.as_ref(), value)
            })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Two fields projecting to the same key would make the mapping
        // ambiguous to read back.
        let mut seen = HashSet::with_capacity(self.fields.len());
        for (key, _) in &self.fields {
            if !seen.insert(key.as_str()) {
                return Err(S::Error::custom(format!("duplicate field key `{}`", key)));
            }
        }

        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lowercases_name() {
        let rec = Record::new().field("Name", "John").field("FirstName", "J");
        let keys: Vec<&str> = rec.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "firstname"]);
    }

    #[test]
    fn test_field_as_keeps_key() {
        let rec = Record::new().field_as("Full-Name", "John Doe");
        assert_eq!(rec.get("Full-Name"), Some(&Value::from("John Doe")));
        assert_eq!(rec.get("full-name"), None);
    }

    #[test]
    fn test_from_iter_preserves_order() {
        let rec: Record = vec![("Zeta", 1), ("Alpha", 2), ("Mid", 3)]
            .into_iter()
            .collect();
        let keys: Vec<&str> = rec.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(rec.len(), 3);
        assert!(!rec.is_empty());
    }
}
