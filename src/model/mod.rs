mod person;
mod record;
mod value;

pub use person::Person;
pub use record::Record;
pub use value::Value;
