//! Fixture tree generation: `<base>/folder_<i>/file_<j>.bin`, each file a
//! fixed number of random bytes.

pub mod generate;
pub mod naming;
pub mod progress;

pub use generate::{generate, generate_with, GenerationReport};
pub use progress::progress_bar;
