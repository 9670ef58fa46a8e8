pub mod reader;
pub mod types;
#[cfg(test)]
pub(crate) mod writer;

pub use reader::ByteCursor;
pub use types::*;
#[cfg(test)]
pub(crate) use writer::BinaryWriter;
