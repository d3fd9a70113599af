//! Text-rewrite primitives.
//!
//! Nothing here parses C++: calls are found by plain substring search, and
//! literal and pattern rules run over comments and string literals as well.

pub mod args;
pub mod callsite;
pub mod errors;
pub mod literal;
pub mod pattern;

pub use args::{split_arguments, ArgumentScan};
pub use callsite::{instantiate, locate, noop, refactor, CallSite};
pub use errors::ScanError;
pub use literal::substitute;
pub use pattern::{PatternAction, PatternRule};
