// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PlotError, PlotResult, generate_friendly_random_id, inline_string};
use std::{fmt::{Display, Formatter},
          ops::Deref,
          path::{Path, PathBuf}};

/// Prefix of every directory created by [`try_create_temp_dir`].
pub const TEMP_DIR_PREFIX: &str = "r3bl_gnuplot";

/// A directory under [`std::env::temp_dir`] that is deleted (with everything inside it)
/// when this struct is dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    /// Join a path to the temporary directory.
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a uniquely named temporary directory. The directory is automatically deleted
/// when the [`TempDir`] struct is dropped.
///
/// # Errors
///
/// Returns [`PlotError::TempFile`] if:
/// - The temp directory cannot be created due to insufficient permissions
/// - The file system is full
/// - I/O errors occur during directory creation
pub fn try_create_temp_dir() -> PlotResult<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(
        inline_string!("{TEMP_DIR_PREFIX}-{}", generate_friendly_random_id()).as_str(),
    );
    std::fs::create_dir(&new_temp_dir).map_err(|source| PlotError::TempFile {
        path: new_temp_dir.clone(),
        source,
    })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📁 Created temp dir for data files",
        path = %new_temp_dir.display()
    );

    Ok(TempDir {
        inner: new_temp_dir,
    })
}

// XMARK: Clever Rust, use of Drop to perform transaction close / end.

/// Automatically delete the temporary directory when the [`TempDir`] struct is dropped.
impl Drop for TempDir {
    fn drop(&mut self) {
        if let Err(error) = std::fs::remove_dir_all(&self.inner) {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Could not remove temp dir",
                path = %self.inner.display(),
                error = %error
            );
        }
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl Display for TempDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.display())
    }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

#[cfg(test)]
mod tests_temp_dir {
    use super::*;

    #[test]
    fn test_temp_dir() {
        let temp_dir = try_create_temp_dir().unwrap();
        println!("Temp dir: {temp_dir}");

        assert!(temp_dir.inner.exists());
        assert!(
            temp_dir
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(TEMP_DIR_PREFIX)
        );
    }

    #[test]
    fn test_temp_dir_drop_removes_contents() {
        let temp_dir = try_create_temp_dir().unwrap();
        let data_file = temp_dir.join("series-0.dat");
        std::fs::write(&data_file, "1 2\n").unwrap();
        assert!(data_file.exists());

        let copy_of_path = temp_dir.inner.clone();
        drop(temp_dir);

        assert!(!copy_of_path.exists());
        assert!(!data_file.exists());
    }
}
