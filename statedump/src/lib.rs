pub mod emit;
pub mod error;
pub mod output;

pub use emit::{render, DumpSummary, TableError};
pub use error::DumpError;
pub use output::Output;
