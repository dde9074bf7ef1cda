//! Parsing application layer

mod parse_file;
mod registry;

pub use parse_file::ParseFileUseCase;
pub use registry::ParserRegistry;
