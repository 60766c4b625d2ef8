//! Enumeration introspection metadata from enumerator list text.
//!
//! Splits the argument list of an enum declaration into members,
//! resolves each member's integer value, and collects names, raw text,
//! values and indices into one read-only [`EnumMetadata`].
//!
//! # Quick start
//!
//! ## Process a list in one step
//!
//! ```
//! let meta = enum_meta::parse_str("Hi, Ho = 1, Hu = 4, He").unwrap();
//! let values: Vec<_> = meta.values().collect();
//! assert_eq!(values, vec![0, 1, 4, 5]);
//! assert_eq!(meta.members()[1].raw, " Ho = 1");
//! ```
//!
//! ## Supply values the literal evaluator cannot compute
//!
//! ```
//! use enum_meta::{Declaration, NoEvaluator, Options, Strip, register};
//!
//! let decl = Declaration::new("Flags", "A, B = f(1, 2), C").value(1, 8);
//! let options = Options::new().strip_names(Strip::Initializer);
//! let meta = register(&decl, &options, &NoEvaluator).unwrap();
//! assert_eq!(meta.by_name("C").map(|m| m.value), Some(9));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod declaration;
pub mod eval;
pub mod formatter;
pub mod meta;
pub mod name;
pub mod options;
pub mod registry;
pub mod scanner;
pub mod span;
pub mod splitter;
pub mod value;

pub use declaration::{Declaration, register};
pub use eval::{EvalError, Evaluator, LiteralEvaluator, NoEvaluator};
pub use formatter::format;
pub use meta::{EnumMetadata, MemberRecord};
pub use name::{NameRule, Strip};
pub use options::Options;
pub use registry::Registry;
pub use scanner::{
    AngleBrackets, ScanError, ScanErrorKind, ScanOptions, count_members, next_boundary,
};
pub use span::MemberSpan;
pub use splitter::{SplitError, SplitErrorKind, split, split_all};
pub use value::{Repr, ValueError, resolve};

/// Unified error type for processing a declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The list is malformed or has the wrong member count.
    #[error("{0}")]
    Split(#[from] SplitError),
    /// A resolved value does not fit the underlying type.
    #[error("{0}")]
    Value(#[from] ValueError),
    /// The evaluator rejected a member's initializer.
    #[error("enumerator {index}: {source}")]
    Eval { index: usize, source: EvalError },
    /// The number of explicit values differs from the member count.
    #[error("expected {expected} explicit value slot(s), got {found}")]
    ValueCount { expected: usize, found: usize },
    /// A member holds nothing but whitespace, as after a trailing comma.
    #[error("enumerator {index} at offset {offset} is empty")]
    EmptyMember { index: usize, offset: usize },
    /// The name rule found no identifier in a member.
    #[error("enumerator {index} has no identifier: '{raw}'")]
    InvalidName { index: usize, raw: String },
    /// A different declaration was already registered under this name.
    #[error("enumeration '{0}' is already registered")]
    DuplicateEnum(String),
}

/// Process an enumerator list with default options, evaluating
/// integer-literal initializers.
pub fn parse_str(text: &str) -> Result<EnumMetadata, Error> {
    register(
        &Declaration::new("", text),
        &Options::default(),
        &LiteralEvaluator,
    )
}
