//! Write-once backups of files about to be rewritten.
//!
//! A backup is created from the file's content the first time it is about to
//! be rewritten. An existing backup is never touched, so the backup directory
//! always holds the oldest copy seen.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("failed to create backup directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to back up {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot derive a backup name for {path}")]
    NoFileName { path: PathBuf },
}

/// Stands in for `..` inside the backup tree.
const PARENT_MARKER: &str = "__parent__";
/// Stands in for the filesystem root inside the backup tree.
const ROOT_MARKER: &str = "__root__";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    /// A new backup was written.
    Created,
    /// A backup already existed and was kept.
    Kept,
}

/// Directory holding pre-conversion copies.
#[derive(Debug, Clone)]
pub struct BackupStore {
    root: PathBuf,
}

impl BackupStore {
    /// Open (creating if needed) the backup directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, BackupError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| BackupError::CreateDir {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the backup of `file` lives.
    ///
    /// The location of `file` is mirrored under the root. Components that
    /// would escape the root are kept as distinct markers, so `a.cxx`,
    /// `../a.cxx` and `/a.cxx` get different backups.
    pub fn backup_path(&self, file: &Path) -> Result<PathBuf, BackupError> {
        let mut relative = PathBuf::new();
        for component in file.components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir => relative.push(PARENT_MARKER),
                Component::RootDir => relative.push(ROOT_MARKER),
                Component::Prefix(prefix) => {
                    let drive: String = prefix
                        .as_os_str()
                        .to_string_lossy()
                        .chars()
                        .filter(|c| c.is_alphanumeric())
                        .collect();
                    relative.push(format!("__drive_{drive}__"));
                }
            }
        }
        if file.file_name().is_none() || relative.as_os_str().is_empty() {
            return Err(BackupError::NoFileName {
                path: file.to_path_buf(),
            });
        }
        Ok(self.root.join(relative))
    }

    /// Copy `file` into the store unless a backup already exists.
    pub fn ensure(&self, file: &Path) -> Result<BackupStatus, BackupError> {
        let target = self.backup_path(file)?;
        if target.exists() {
            return Ok(BackupStatus::Kept);
        }

        let copy_error = |source| BackupError::Copy {
            from: file.to_path_buf(),
            to: target.clone(),
            source,
        };
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(copy_error)?;
        }
        fs::copy(file, &target).map_err(copy_error)?;
        Ok(BackupStatus::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_path_mirrors_relative_location() {
        let store = BackupStore {
            root: PathBuf::from("v1src.bak"),
        };
        assert_eq!(
            store.backup_path(Path::new("./a.cxx")).unwrap(),
            PathBuf::from("v1src.bak/a.cxx")
        );
        assert_eq!(
            store.backup_path(Path::new("src/ui/a.H")).unwrap(),
            PathBuf::from("v1src.bak/src/ui/a.H")
        );
        assert_eq!(
            store.backup_path(Path::new("../up/a.h")).unwrap(),
            PathBuf::from("v1src.bak/__parent__/up/a.h")
        );
        assert!(store.backup_path(Path::new("..")).is_err());
        assert!(store.backup_path(Path::new(".")).is_err());
    }

    #[test]
    fn test_backup_path_keeps_escaping_paths_apart() {
        let store = BackupStore {
            root: PathBuf::from("bak"),
        };
        let inner = store.backup_path(Path::new("a.cxx")).unwrap();
        let outer = store.backup_path(Path::new("../a.cxx")).unwrap();
        let absolute = store.backup_path(Path::new("/a.cxx")).unwrap();
        assert_ne!(inner, outer);
        assert_ne!(inner, absolute);
        assert_ne!(outer, absolute);
        assert!(outer.starts_with("bak"));
        assert!(absolute.starts_with("bak"));
    }

    #[test]
    fn test_parent_file_gets_its_own_backup() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("work");
        fs::create_dir(&work).unwrap();
        fs::write(work.join("a.cxx"), "inner original\n").unwrap();
        fs::write(dir.path().join("a.cxx"), "outer original\n").unwrap();

        let store = BackupStore::open(work.join("bak")).unwrap();
        let inner = work.join("a.cxx");
        let outer = work.join("../a.cxx");
        assert_eq!(store.ensure(&inner).unwrap(), BackupStatus::Created);
        assert_eq!(store.ensure(&outer).unwrap(), BackupStatus::Created);

        let inner_backup = store.backup_path(&inner).unwrap();
        let outer_backup = store.backup_path(&outer).unwrap();
        assert_eq!(fs::read_to_string(inner_backup).unwrap(), "inner original\n");
        assert_eq!(fs::read_to_string(outer_backup).unwrap(), "outer original\n");
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested/backups");
        let store = BackupStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root);
    }

    #[test]
    fn test_first_backup_wins() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("main.cxx");
        let store = BackupStore::open(dir.path().join("bak")).unwrap();

        fs::write(&file, "original").unwrap();
        assert_eq!(store.ensure(&file).unwrap(), BackupStatus::Created);

        fs::write(&file, "edited").unwrap();
        assert_eq!(store.ensure(&file).unwrap(), BackupStatus::Kept);

        let backup = store.backup_path(&file).unwrap();
        assert_eq!(fs::read_to_string(backup).unwrap(), "original");
    }

    #[test]
    fn test_missing_source_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = BackupStore::open(dir.path().join("bak")).unwrap();
        let err = store.ensure(&dir.path().join("gone.cxx")).unwrap_err();
        assert!(matches!(err, BackupError::Copy { .. }));
    }
}
