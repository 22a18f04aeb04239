pub mod generation;
pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use generation::GenerationConfig;
pub use read_settings::load_settings;
