use serde::Serialize;

use super::encoder::Encoder;
use crate::error::{Error, Result};

/// Compact JSON, keys in the same order the YAML encoder emits them.
#[derive(Debug, Default)]
pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for JsonEncoder {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| Error::encoding("JSON serialization failed", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, Record};

    #[test]
    fn test_encode_person() {
        let bytes = JsonEncoder::new().encode(&Person::new("John", 30)).unwrap();
        assert_eq!(br#"{"name":"John","age":30}"#.to_vec(), bytes);
    }

    #[test]
    fn test_encode_record_order() {
        let rec = Record::new().field("Zeta", 1).field("Alpha", "x");
        let bytes = JsonEncoder::new().encode(&rec).unwrap();
        assert_eq!(br#"{"zeta":1,"alpha":"x"}"#.to_vec(), bytes);
    }
}
