// Deterministic names for generated entries. Indices are zero-based and
// unpadded so `folder_10` follows `folder_9`.

/// Prefix of every generated subdirectory.
pub const FOLDER_PREFIX: &str = "folder_";

/// Prefix of every generated file.
pub const FILE_PREFIX: &str = "file_";

/// Extension of every generated file.
pub const FILE_EXTENSION: &str = "bin";

pub fn folder_name(i: usize) -> String {
    format!("{}{}", FOLDER_PREFIX, i)
}

pub fn file_name(i: usize) -> String {
    format!("{}{}.{}", FILE_PREFIX, i, FILE_EXTENSION)
}
