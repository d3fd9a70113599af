//! Find convertible sources in a directory.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List regular files directly inside `dir` whose extension is in `extensions`.
///
/// Results are grouped in the order the extensions are given and sorted by
/// name within each group. Extensions compare case-sensitively, so `h` and
/// `H` are separate groups. Paths are relative to `dir`.
pub fn discover(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut groups: Vec<Vec<PathBuf>> = vec![Vec::new(); extensions.len()];

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(ext) = entry.path().extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(group) = extensions.iter().position(|e| e == ext) else {
            continue;
        };
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        groups[group].push(relative.to_path_buf());
    }

    let mut files = Vec::new();
    for mut group in groups {
        group.sort();
        group.dedup();
        for path in group {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }
    Ok(files)
}
