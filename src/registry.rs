use indexmap::IndexMap;

use crate::Error;
use crate::declaration::{self, Declaration};
use crate::eval::Evaluator;
use crate::meta::EnumMetadata;
use crate::options::Options;

#[derive(Debug, Clone)]
struct Entry {
    decl: Declaration,
    meta: EnumMetadata,
}

/// Caller-owned set of processed enumerations, keyed by name in
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    options: Options,
    entries: IndexMap<String, Entry>,
}

impl Registry {
    /// Create an empty registry processing with `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            entries: IndexMap::new(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Process `decl` and keep its metadata.
    ///
    /// Registering an identical declaration again returns the stored
    /// metadata without reprocessing. `evaluator` is not consulted on
    /// that path: values stay the ones computed at first registration.
    /// Pin values with [`Declaration::value`] when they must not depend
    /// on which evaluator registered first.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateEnum` when another declaration already
    /// uses the name, or any error from [`declaration::register`].
    pub fn register(
        &mut self,
        decl: &Declaration,
        evaluator: &dyn Evaluator,
    ) -> Result<&EnumMetadata, Error> {
        if let Some(index) = self.entries.get_index_of(&decl.name) {
            let entry = &self.entries[index];
            if entry.decl != *decl {
                return Err(Error::DuplicateEnum(decl.name.clone()));
            }
            tracing::debug!(name = %decl.name, "already registered");
            return Ok(&entry.meta);
        }

        let meta = declaration::register(decl, &self.options, evaluator)?;
        let (index, _) = self.entries.insert_full(
            decl.name.clone(),
            Entry {
                decl: decl.clone(),
                meta,
            },
        );
        Ok(&self.entries[index].meta)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnumMetadata> {
        self.entries.get(name).map(|entry| &entry.meta)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered enumerations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnumMetadata)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), &entry.meta))
    }
}
