use serde::Serialize;

use crate::error::Result;

pub trait Encoder {
    /// Format label printed above the encoded value.
    fn name(&self) -> &'static str;

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>>;
}
