//! Generate directory trees of fixed-size random binary files for use as
//! synthetic test fixtures.
//!
//! ```no_run
//! use foldergen::{fixtures, GenerationConfig};
//!
//! let report = fixtures::generate(&GenerationConfig::new("test_data", 5, 10, 200))?;
//! assert_eq!(report.files_created, 50);
//! # Ok::<(), foldergen::FixtureError>(())
//! ```

pub mod cli;
pub mod fixtures;
pub mod fs_op;
pub mod logging;
pub mod settings;

pub use crate::fixtures::{generate, generate_with, GenerationReport};
pub use crate::fs_op::FixtureError;
pub use crate::settings::GenerationConfig;
