//! fl2fltk: rule-based porting of FLTK 1.x C++ sources to the FLTK 2 API
//!
//! The tool is a pipeline of textual rewrite passes. It does not parse C++;
//! every rule works on the raw file text, and each rule sees the output of
//! the rule before it.
//!
//! # Architecture
//!
//! All buffer mutations go through one primitive, [`Splice`], a byte-span
//! replacement that reports where scanning should resume. On top of it:
//!
//! - [`rewrite`]: the primitives (call-site refactor and erase, literal
//!   substitution, regex rules)
//! - [`rules`]: the ordered translation tables grouped into passes
//! - [`pipeline`]: per-file conversion with the completion marker
//! - [`backup`]: write-once backups of converted files
//!
//! # Safety
//!
//! - Files carrying the completion marker are never touched again
//! - A backup is taken before the first rewrite and never overwritten
//! - Atomic file writes (tempfile + fsync + rename)
//!
//! # Example
//!
//! ```no_run
//! use fl2fltk::{Conversion, ConvertOptions, Converter, FileKind, RuleOptions, RuleSet};
//!
//! let rules = RuleSet::builtin(&RuleOptions::default()).unwrap();
//! let converter = Converter::new(&rules, ConvertOptions::default());
//!
//! match converter.convert_text("Fl::run();\n", FileKind::Source) {
//!     Conversion::Converted(text) => print!("{text}"),
//!     Conversion::AlreadyConverted => println!("nothing to do"),
//! }
//! ```

pub mod backup;
pub mod config;
pub mod discover;
pub mod edit;
pub mod pipeline;
pub mod rewrite;
pub mod rules;

// Re-exports
pub use backup::{BackupError, BackupStatus, BackupStore};
pub use config::{load_from_path, load_from_str, load_or_default, ConfigError, ToolConfig};
pub use discover::discover;
pub use edit::{atomic_write, Splice};
pub use pipeline::{
    insert_namespace_import, is_converted, Conversion, ConvertError, ConvertOptions, Converter,
    FileKind, FileOutcome, Mode, COMPLETION_MARKER,
};
pub use rewrite::{noop, refactor, split_arguments, substitute, ArgumentScan, ScanError};
pub use rules::{Pass, Rule, RuleError, RuleOptions, RuleSet};
