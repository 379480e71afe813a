//! Game repository implementations.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryGameRepository;
pub use json_file::JsonFileGameRepository;
