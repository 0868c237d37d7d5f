use serde::Serialize;

/// A named record type. Keys are the declared field names, lowercased,
/// emitted in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub struct Person {
    pub name: String,
    pub age: i64,
}

impl Person {
    pub fn new(name: &str, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
