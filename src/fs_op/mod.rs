//! Filesystem primitives the fixture generator is built from.

pub mod create;
pub mod error;

pub use create::{ensure_dir, write_random_file, CHUNK_SIZE};
pub use error::FixtureError;
