//! Per-file conversion pipeline.
//!
//! A file moves through these stages:
//!
//! - already marked: stop, nothing is backed up or written
//! - backed up (only when writing)
//! - every pass of the [`RuleSet`] applied in order
//! - header files only: `using namespace fltk;` injected
//! - completion marker appended
//! - persisted atomically (only when writing)

use crate::backup::{BackupError, BackupStore};
use crate::edit::{atomic_write, Splice};
use crate::rewrite::ArgumentScan;
use crate::rules::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Trailing line that marks a file as converted.
pub const COMPLETION_MARKER: &str = concat!(
    "// Converted to FLTK~2 using fl2fltk version ",
    env!("CARGO_PKG_VERSION"),
    "\n"
);

/// Inserted after the last `#include` of a header.
pub const NAMESPACE_IMPORT: &str = "\n\nusing namespace fltk;";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: PathBuf },

    #[error(transparent)]
    Backup(#[from] BackupError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whether a file gets the header-only namespace import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Source,
    Header,
}

impl FileKind {
    /// Classify by extension, compared case-sensitively.
    pub fn of(path: &Path, header_extensions: &[String]) -> Self {
        let is_header = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| header_extensions.iter().any(|h| h == ext));
        if is_header {
            FileKind::Header
        } else {
            FileKind::Source
        }
    }
}

/// True if `text` ends with the completion marker.
pub fn is_converted(text: &str) -> bool {
    text.ends_with(COMPLETION_MARKER)
}

/// Insert [`NAMESPACE_IMPORT`] at the end of the line holding the last `#include`.
///
/// Text without any `#include` is returned unchanged.
pub fn insert_namespace_import(text: &str) -> String {
    let mut out = text.to_string();
    if let Some(include) = text.rfind("#include") {
        let line_end = text[include..].find('\n').map_or(text.len(), |i| include + i);
        let _ = Splice::insert(line_end, NAMESPACE_IMPORT).apply(&mut out);
    }
    out
}

/// Append the completion marker on its own line.
pub fn mark(mut text: String) -> String {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(COMPLETION_MARKER);
    text
}

/// Result of converting a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// The rewritten text, marker included.
    Converted(String),
    /// The text already carried the marker.
    AlreadyConverted,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "FileOutcome should be reported"]
pub enum FileOutcome {
    Converted {
        file: PathBuf,
        original: String,
        converted: String,
        written: bool,
    },
    AlreadyConverted {
        file: PathBuf,
    },
}

/// How [`Converter::convert_file`] treats the filesystem.
#[derive(Debug, Clone, Copy)]
pub enum Mode<'a> {
    /// Back up once, then overwrite the file.
    Write(&'a BackupStore),
    /// Compute the conversion only.
    DryRun,
}

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub scan: ArgumentScan,
    pub header_extensions: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            scan: ArgumentScan::Flat,
            header_extensions: vec!["h".to_string(), "H".to_string()],
        }
    }
}

/// Runs the rule pipeline over buffers and files.
#[derive(Debug, Clone)]
pub struct Converter<'r> {
    rules: &'r RuleSet,
    options: ConvertOptions,
}

impl<'r> Converter<'r> {
    pub fn new(rules: &'r RuleSet, options: ConvertOptions) -> Self {
        Self { rules, options }
    }

    /// Convert one buffer. Pure: no filesystem access.
    pub fn convert_text(&self, text: &str, kind: FileKind) -> Conversion {
        if is_converted(text) {
            return Conversion::AlreadyConverted;
        }

        let mut rewritten = self.rules.apply(text, self.options.scan);
        if kind == FileKind::Header {
            rewritten = insert_namespace_import(&rewritten);
        }
        Conversion::Converted(mark(rewritten))
    }

    /// Convert one file on disk.
    pub fn convert_file(&self, path: &Path, mode: Mode<'_>) -> Result<FileOutcome, ConvertError> {
        let bytes = fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let original = String::from_utf8(bytes).map_err(|_| ConvertError::NotUtf8 {
            path: path.to_path_buf(),
        })?;

        if is_converted(&original) {
            debug!(file = %path.display(), "already converted, skipping");
            return Ok(FileOutcome::AlreadyConverted {
                file: path.to_path_buf(),
            });
        }

        let written = match mode {
            Mode::Write(backups) => {
                let status = backups.ensure(path)?;
                debug!(file = %path.display(), ?status, "backup checked");
                true
            }
            Mode::DryRun => false,
        };

        let kind = FileKind::of(path, &self.options.header_extensions);
        let converted = match self.convert_text(&original, kind) {
            Conversion::Converted(text) => text,
            Conversion::AlreadyConverted => {
                return Ok(FileOutcome::AlreadyConverted {
                    file: path.to_path_buf(),
                })
            }
        };

        if written {
            atomic_write(path, converted.as_bytes()).map_err(|source| ConvertError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(file = %path.display(), bytes = converted.len(), "persisted");
        }

        Ok(FileOutcome::Converted {
            file: path.to_path_buf(),
            original,
            converted,
            written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleOptions;

    fn rules() -> RuleSet {
        RuleSet::builtin(&RuleOptions::default()).unwrap()
    }

    #[test]
    fn test_marker_carries_version() {
        assert!(COMPLETION_MARKER.starts_with("// Converted to FLTK~2"));
        assert!(COMPLETION_MARKER.contains(env!("CARGO_PKG_VERSION")));
        assert!(COMPLETION_MARKER.ends_with('\n'));
    }

    #[test]
    fn test_file_kind_by_extension() {
        let headers = ConvertOptions::default().header_extensions;
        assert_eq!(FileKind::of(Path::new("a/Widget.H"), &headers), FileKind::Header);
        assert_eq!(FileKind::of(Path::new("widget.h"), &headers), FileKind::Header);
        assert_eq!(FileKind::of(Path::new("widget.cxx"), &headers), FileKind::Source);
        assert_eq!(FileKind::of(Path::new("Makefile"), &headers), FileKind::Source);
    }

    #[test]
    fn test_namespace_import_after_last_include() {
        let text = "#include <a.h>\n#include <b.h>\nclass X;\n";
        assert_eq!(
            insert_namespace_import(text),
            "#include <a.h>\n#include <b.h>\n\nusing namespace fltk;\nclass X;\n"
        );
    }

    #[test]
    fn test_namespace_import_at_end_without_newline() {
        assert_eq!(
            insert_namespace_import("#include <a.h>"),
            "#include <a.h>\n\nusing namespace fltk;"
        );
        assert_eq!(insert_namespace_import("int x;\n"), "int x;\n");
    }

    #[test]
    fn test_mark_puts_marker_on_own_line() {
        assert_eq!(mark("x;".to_string()), format!("x;\n{COMPLETION_MARKER}"));
        assert_eq!(mark("x;\n".to_string()), format!("x;\n{COMPLETION_MARKER}"));
        assert_eq!(mark(String::new()), COMPLETION_MARKER);
    }

    #[test]
    fn test_convert_text_skips_marked_input() {
        let rules = rules();
        let converter = Converter::new(&rules, ConvertOptions::default());
        let text = format!("fl_alert(\"x\");\n{COMPLETION_MARKER}");
        assert_eq!(
            converter.convert_text(&text, FileKind::Source),
            Conversion::AlreadyConverted
        );
    }

    #[test]
    fn test_convert_text_twice_is_stable() {
        let rules = rules();
        let converter = Converter::new(&rules, ConvertOptions::default());
        let Conversion::Converted(first) =
            converter.convert_text("Fl::run();\n", FileKind::Source)
        else {
            panic!("expected conversion");
        };
        assert_eq!(first, format!("fltk::run();\n{COMPLETION_MARKER}"));
        assert_eq!(
            converter.convert_text(&first, FileKind::Source),
            Conversion::AlreadyConverted
        );
    }

    #[test]
    fn test_header_gets_namespace_import() {
        let rules = rules();
        let converter = Converter::new(&rules, ConvertOptions::default());
        let Conversion::Converted(out) =
            converter.convert_text("#include <FL/Fl_Box.H>\nBox *b;\n", FileKind::Header)
        else {
            panic!("expected conversion");
        };
        assert_eq!(
            out,
            format!("#include <fltk/Box.h>\n\nusing namespace fltk;\nBox *b;\n{COMPLETION_MARKER}")
        );
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("main.cxx");
        fs::write(&file, "Fl::run();\n").unwrap();

        let rules = rules();
        let converter = Converter::new(&rules, ConvertOptions::default());
        let outcome = converter.convert_file(&file, Mode::DryRun).unwrap();

        assert!(matches!(outcome, FileOutcome::Converted { written: false, .. }));
        assert_eq!(fs::read_to_string(&file).unwrap(), "Fl::run();\n");
    }

    #[test]
    fn test_non_utf8_is_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("latin1.cxx");
        fs::write(&file, [0x63, 0xe9, 0x0a]).unwrap();

        let rules = rules();
        let converter = Converter::new(&rules, ConvertOptions::default());
        let err = converter.convert_file(&file, Mode::DryRun).unwrap_err();
        assert!(matches!(err, ConvertError::NotUtf8 { .. }));
    }
}
