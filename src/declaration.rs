use indexmap::IndexMap;

use crate::Error;
use crate::eval::Evaluator;
use crate::meta::EnumMetadata;
use crate::name;
use crate::options::Options;
use crate::splitter;
use crate::value::Repr;

/// Description of one enumeration to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub repr: Repr,
    /// Enumerator list as authored, without the surrounding braces.
    pub body: String,
    /// Expected member count; derived from `body` when `None`.
    pub member_count: Option<usize>,
    /// Pre-evaluated values keyed by member index. A value here wins
    /// over evaluating the member's initializer.
    pub values: IndexMap<usize, i128>,
}

impl Declaration {
    /// Create a declaration with the default `i32` representation.
    #[must_use]
    pub fn new(name: &str, body: &str) -> Self {
        Self {
            name: name.to_string(),
            repr: Repr::default(),
            body: body.to_string(),
            member_count: None,
            values: IndexMap::new(),
        }
    }

    /// Set the underlying type.
    #[must_use]
    pub const fn repr(mut self, repr: Repr) -> Self {
        self.repr = repr;
        self
    }

    /// Require exactly `count` members.
    #[must_use]
    pub const fn member_count(mut self, count: usize) -> Self {
        self.member_count = Some(count);
        self
    }

    /// Supply the value of the member at `index`.
    #[must_use]
    pub fn value(mut self, index: usize, value: i128) -> Self {
        self.values.insert(index, value);
        self
    }
}

/// Process a declaration into metadata.
///
/// Each member's explicit value comes from `decl.values` when present,
/// otherwise from evaluating its initializer with `evaluator`; members
/// without either get implicit values.
///
/// # Errors
///
/// Returns `Error` on malformed text, a member count mismatch, an
/// initializer the evaluator rejects, a value outside `decl.repr`, or
/// an empty member. No metadata is produced in any of these cases.
pub fn register(
    decl: &Declaration,
    options: &Options,
    evaluator: &dyn Evaluator,
) -> Result<EnumMetadata, Error> {
    let _span = tracing::debug_span!("register", name = %decl.name).entered();

    let spans = match decl.member_count {
        Some(count) => splitter::split(&decl.body, count, &options.scan)?,
        None => splitter::split_all(&decl.body, &options.scan)?,
    };
    let count = spans.len();
    if let Some(&last) = decl.values.keys().filter(|&&index| index >= count).max() {
        return Err(Error::ValueCount {
            expected: count,
            found: last.saturating_add(1),
        });
    }

    let mut explicit = Vec::with_capacity(count);
    for (index, span) in spans.iter().enumerate() {
        let preset = decl.values.get(&index).copied();
        let value = match (preset, name::initializer(span.slice(&decl.body))) {
            (Some(value), _) => Some(value),
            (None, Some(expr)) => {
                let value = evaluator
                    .evaluate(expr)
                    .map_err(|source| Error::Eval { index, source })?;
                tracing::trace!(index, expr, value = %value, "evaluated initializer");
                Some(value)
            }
            (None, None) => None,
        };
        explicit.push(value);
    }

    let meta = EnumMetadata::from_spans(&decl.body, &spans, &explicit, decl.repr, options)?;
    tracing::debug!(members = meta.len(), "registered enumeration");
    Ok(meta)
}
