pub mod cliopt;
pub mod error;
pub mod model;
pub mod output;
