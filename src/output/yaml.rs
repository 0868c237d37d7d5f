use serde::Serialize;

use super::encoder::Encoder;
use crate::error::{Error, Result};

/// Block-style YAML, one `key: value` line per field, in field
/// declaration order. The last line is newline-terminated.
#[derive(Debug, Default)]
pub struct YamlEncoder {}

impl YamlEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

impl Encoder for YamlEncoder {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        serde_yaml::to_string(value)
            .map(String::into_bytes)
            .map_err(|e| Error::encoding("YAML serialization failed", e))
    }
}
