mod encoder;
mod json;
mod output;
mod writer;
mod yaml;

pub use encoder::Encoder;
pub use json::JsonEncoder;
pub use output::Output;
pub use writer::{LineWriter, Writer};
pub use yaml::YamlEncoder;
