use std::io::Write;

use serde::Serialize;

use super::encoder::Encoder;
use super::writer::Writer;
use crate::error::{Error, Result};

/// Encodes a value and prints it under a `<format>:` banner:
///
/// ```text
///
/// yaml:
///
/// name: John
/// age: 30
///
/// ```
pub struct Output<W, E> {
    writer: Box<dyn Writer<W>>,
    encoder: E,
}

impl<W: Write, E: Encoder> Output<W, E> {
    pub fn new(writer: Box<dyn Writer<W>>, encoder: E) -> Self {
        Self { writer, encoder }
    }

    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let encoded = self.encoder.encode(value)?;
        tracing::debug!(
            format = self.encoder.name(),
            bytes = encoded.len(),
            "value encoded"
        );

        let mut buf = format!("\n{}:\n\n", self.encoder.name()).into_bytes();
        buf.extend_from_slice(&encoded);

        self.writer
            .write(&buf)
            .map_err(|e| Error::io("writer failed", e))?;

        Ok(())
    }

    pub fn into_inner(self) -> Box<dyn Writer<W>> {
        self.writer
    }
}
