// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

/// A temporary directory holding a calendar file.
///
/// The directory is removed when dropped.
#[derive(Debug)]
pub struct TempDir {
    dir: tempfile::TempDir,
}

impl TempDir {
    /// Creates a new temporary directory.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        Ok(Self { dir })
    }

    /// Path of the calendar file, which does not exist yet.
    pub fn calendar_path(&self) -> PathBuf {
        self.dir.path().join("data").join("calendar.json")
    }

    /// Writes `content` to the calendar file and returns its path.
    #[allow(dead_code)]
    pub fn write_calendar(&self, content: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.calendar_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// Sets up a temporary directory for integration tests.
pub fn setup_temp_dir() -> Result<TempDir, Box<dyn std::error::Error>> {
    TempDir::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_path_is_inside_the_directory() {
        let dir = TempDir::new().unwrap();
        assert!(dir.calendar_path().starts_with(dir.dir.path()));
        assert!(!dir.calendar_path().exists());
    }

    #[test]
    fn write_calendar_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.write_calendar("{}").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn cleanup_on_drop() {
        let base = {
            let dir = TempDir::new().unwrap();
            dir.dir.path().to_path_buf()
        };
        assert!(!base.exists());
    }
}
