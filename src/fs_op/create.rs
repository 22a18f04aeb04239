use std::fs;
use std::io::Write;
use std::path::Path;

use rand::TryRngCore;

use crate::fs_op::error::FixtureError;

/// Size of the buffer random content is streamed through.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Ensure `path` exists as a directory, creating missing parents.
///
/// Returns `true` when the directory did not exist before the call. An
/// existing directory is not an error; an existing non-directory entry is.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<bool, FixtureError> {
    let p = path.as_ref();
    let existed = p.is_dir();
    fs::create_dir_all(p).map_err(|source| FixtureError::CreateDir {
        path: p.to_path_buf(),
        source,
    })?;
    Ok(!existed)
}

/// Create or truncate `path` and fill it with exactly `len` bytes drawn from
/// `rng`, then check the on-disk length.
pub fn write_random_file<P, R>(path: P, len: u64, rng: &mut R) -> Result<u64, FixtureError>
where
    P: AsRef<Path>,
    R: TryRngCore,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let p = path.as_ref();
    let write_err = |source| FixtureError::WriteFile {
        path: p.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(p).map_err(write_err)?;
    let mut buf = vec![0u8; (CHUNK_SIZE as u64).min(len) as usize];
    let mut remaining = len;
    while remaining > 0 {
        let n = (buf.len() as u64).min(remaining) as usize;
        rng.try_fill_bytes(&mut buf[..n])
            .map_err(|e| FixtureError::Random {
                path: p.to_path_buf(),
                source: Box::new(e),
            })?;
        file.write_all(&buf[..n]).map_err(write_err)?;
        remaining -= n as u64;
    }
    file.flush().map_err(write_err)?;

    let actual = file.metadata().map_err(write_err)?.len();
    if actual != len {
        return Err(FixtureError::SizeMismatch {
            path: p.to_path_buf(),
            expected: len,
            actual,
        });
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    /// Byte source that serves `ok_fills` fills and then fails.
    struct FailingSource {
        ok_fills: usize,
    }

    impl TryRngCore for FailingSource {
        type Error = std::io::Error;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            let mut b = [0u8; 4];
            self.try_fill_bytes(&mut b)?;
            Ok(u32::from_le_bytes(b))
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            let mut b = [0u8; 8];
            self.try_fill_bytes(&mut b)?;
            Ok(u64::from_le_bytes(b))
        }

        fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
            if self.ok_fills == 0 {
                return Err(std::io::Error::other("entropy unavailable"));
            }
            self.ok_fills -= 1;
            dst.fill(0xa5);
            Ok(())
        }
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b");
        assert!(ensure_dir(&dir).unwrap());
        assert!(dir.is_dir());
        assert!(!ensure_dir(&dir).unwrap());
    }

    #[test]
    fn ensure_dir_rejects_regular_file() {
        let td = tempdir().unwrap();
        let file = td.path().join("plain");
        fs::write(&file, b"x").unwrap();
        let err = ensure_dir(&file).unwrap_err();
        assert!(matches!(err, FixtureError::CreateDir { .. }));
    }

    #[test]
    fn writes_exact_length_across_chunks() {
        let td = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let path = td.path().join("f.bin");
        let len = (CHUNK_SIZE as u64) * 2 + 17;
        assert_eq!(write_random_file(&path, len, &mut rng).unwrap(), len);
        assert_eq!(fs::metadata(&path).unwrap().len(), len);
    }

    #[test]
    fn zero_length_creates_empty_file() {
        let td = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let path = td.path().join("empty.bin");
        write_random_file(&path, 0, &mut rng).unwrap();
        assert!(path.is_file());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn truncates_longer_existing_file() {
        let td = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let path = td.path().join("f.bin");
        fs::write(&path, vec![0u8; 4096]).unwrap();
        write_random_file(&path, 1024, &mut rng).unwrap();
        let data = fs::read(&path).unwrap();
        assert_eq!(data.len(), 1024);
        assert!(data.iter().any(|b| *b != 0));
    }

    #[test]
    fn failing_source_keeps_partial_file() {
        let td = tempdir().unwrap();
        let path = td.path().join("f.bin");
        let mut rng = FailingSource { ok_fills: 1 };
        let err = write_random_file(&path, (CHUNK_SIZE as u64) * 3, &mut rng).unwrap_err();
        assert!(matches!(err, FixtureError::Random { path: ref p, .. } if p == &path));
        assert!(!err.is_io());
        assert!(err.to_string().contains("entropy unavailable"), "{}", err);
        // The first chunk was written before the failure and is not removed.
        assert_eq!(fs::metadata(&path).unwrap().len(), CHUNK_SIZE as u64);
    }

    #[test]
    fn missing_parent_is_a_write_error() {
        let td = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let path = td.path().join("no/such/dir/f.bin");
        let err = write_random_file(&path, 10, &mut rng).unwrap_err();
        assert!(matches!(err, FixtureError::WriteFile { .. }));
        assert!(err.is_io());
    }
}
