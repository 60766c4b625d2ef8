use std::fmt;

use serde::Serialize;

use crate::Error;
use crate::options::Options;
use crate::span::MemberSpan;
use crate::splitter;
use crate::value::{self, Repr};

/// One enumerator of a processed declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    /// Full member text as authored, initializer included.
    pub raw: String,
    /// Name derived from `raw` by the active name rule.
    pub name: String,
    pub value: i128,
    pub index: usize,
}

/// Metadata of one enumeration: its declaration text and members in
/// declaration order.
///
/// Built once and read-only afterwards; the member count is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMetadata {
    text: String,
    members: Vec<MemberRecord>,
}

impl EnumMetadata {
    /// Build metadata from the enumerator list `text`, its member
    /// `count` and one optional explicit value per member.
    ///
    /// This is a pure function of its inputs: the same arguments always
    /// produce equal metadata.
    pub fn assemble(
        text: &str,
        count: usize,
        explicit: &[Option<i128>],
        repr: Repr,
        options: &Options,
    ) -> Result<Self, Error> {
        if explicit.len() != count {
            return Err(Error::ValueCount {
                expected: count,
                found: explicit.len(),
            });
        }

        let spans = splitter::split(text, count, &options.scan)?;
        Self::from_spans(text, &spans, explicit, repr, options)
    }

    /// Build metadata from spans already split out of `text`.
    ///
    /// `explicit` must hold one slot per span.
    pub(crate) fn from_spans(
        text: &str,
        spans: &[MemberSpan],
        explicit: &[Option<i128>],
        repr: Repr,
        options: &Options,
    ) -> Result<Self, Error> {
        let values = value::resolve(explicit, repr)?;

        let mut members = Vec::with_capacity(spans.len());
        for (index, (span, value)) in spans.iter().zip(values).enumerate() {
            let raw = span.slice(text);
            if raw.trim().is_empty() {
                return Err(Error::EmptyMember {
                    index,
                    offset: span.offset,
                });
            }
            let name = options.names.apply(raw);
            if name.is_empty() {
                return Err(Error::InvalidName {
                    index,
                    raw: raw.to_string(),
                });
            }
            members.push(MemberRecord {
                raw: raw.to_string(),
                name: name.to_string(),
                value,
                index,
            });
        }

        Ok(Self {
            text: text.to_string(),
            members,
        })
    }

    /// The enumerator list as authored.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MemberRecord> {
        self.members.get(index)
    }

    /// Look up a member by its derived name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&MemberRecord> {
        self.members.iter().find(|m| m.name == name)
    }

    /// First member holding `value`. Several members may share a value.
    #[must_use]
    pub fn by_value(&self, value: i128) -> Option<&MemberRecord> {
        self.members.iter().find(|m| m.value == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberRecord> {
        self.members.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = i128> + '_ {
        self.members.iter().map(|m| m.value)
    }
}

impl<'a> IntoIterator for &'a EnumMetadata {
    type Item = &'a MemberRecord;
    type IntoIter = std::slice::Iter<'a, MemberRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for EnumMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formatter::format(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Strip;

    const TEXT: &str = "Red, Green = 4, Blue";

    fn colors(options: &Options) -> EnumMetadata {
        EnumMetadata::assemble(TEXT, 3, &[None, Some(4), None], Repr::I32, options)
            .expect("assemble failed")
    }

    #[test]
    fn raw_names_by_default() {
        let meta = colors(&Options::default());
        assert_eq!(meta.text(), TEXT);
        assert_eq!(meta.len(), 3);
        let names: Vec<_> = meta.names().collect();
        assert_eq!(names, vec!["Red", " Green = 4", " Blue"]);
        let values: Vec<_> = meta.values().collect();
        assert_eq!(values, vec![0, 4, 5]);
    }

    #[test]
    fn lookups() {
        let meta = colors(&Options::new().strip_names(Strip::Initializer));
        assert_eq!(meta.by_name("Green").map(|m| m.value), Some(4));
        assert_eq!(meta.by_value(5).map(|m| m.name.as_str()), Some("Blue"));
        assert_eq!(meta.get(2).map(|m| m.index), Some(2));
        assert!(meta.by_name("Purple").is_none());
        assert!(meta.get(3).is_none());
    }

    #[test]
    fn value_count_must_match() {
        let err = EnumMetadata::assemble(TEXT, 3, &[None], Repr::I32, &Options::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ValueCount {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn trailing_comma_is_an_empty_member() {
        let err = EnumMetadata::assemble("A, B,", 3, &[None; 3], Repr::I32, &Options::default())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyMember {
                index: 2,
                offset: 5
            }
        ));
    }

    #[test]
    fn identifier_rule_needs_an_identifier() {
        let options = Options::new().strip_names(Strip::Initializer);
        let err = EnumMetadata::assemble("A, = 3", 2, &[None, Some(3)], Repr::I32, &options)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidName { index: 1, .. }));
    }
}
