use thiserror::Error;

/// Why a call-site scan did not yield a rewritable call.
///
/// These never escape [`refactor`](super::refactor) or [`noop`](super::noop):
/// they decide whether the scan gives up on a function name or skips one site.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("no '{delimiter}' after `{name}` at byte {offset}")]
    MissingDelimiter {
        name: String,
        delimiter: char,
        offset: usize,
    },

    #[error("`{name}` at byte {offset} has {found} arguments, expected {expected}")]
    ArityMismatch {
        name: String,
        offset: usize,
        expected: usize,
        found: usize,
    },

    #[error("`{name}` is separated from its '(' by the line break at byte {line_break}")]
    LineBreak { name: String, line_break: usize },
}
