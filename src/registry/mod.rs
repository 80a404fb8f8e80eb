// SPDX-License-Identifier: PMPL-1.0-or-later

//! The language registry: an ordered, immutable record set with
//! case-insensitive exact-match lookups.
//!
//! Lookup is a linear scan over the record sequence, which is fine for
//! the 184 entries of the shipped dataset; this answers CLI queries and
//! config validation, not a hot loop. Matching uses ASCII case folding
//! only: "DE" matches "de", "māori" matches "Māori", but stripping the
//! macron does not. First match in sequence order wins.

pub mod dataset;

use crate::error::RegistryError;
use crate::types::{FieldKey, Language};
use std::borrow::Cow;

/// Ordered collection of [`Language`] records, fixed at construction.
///
/// The default registry borrows the compiled-in table (no allocation, no
/// startup cost); [`Registry::from_languages`] wraps a caller-supplied
/// sequence instead, useful for tests or for restricting the dataset.
/// Either way the record set never changes afterwards, so a shared
/// reference is safe to hand to any number of threads.
///
/// ```
/// use iso639::Registry;
///
/// let registry = Registry::new();
/// let german = registry.by_alpha2("de")?;
/// assert_eq!(german.name, "German");
/// assert_eq!(german.bibliographic, "ger");
/// # Ok::<(), iso639::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    languages: Cow<'static, [Language]>,
}

impl Registry {
    /// Registry over the compiled-in ISO 639 table.
    pub fn new() -> Self {
        Self {
            languages: Cow::Borrowed(dataset::LANGUAGES),
        }
    }

    /// Registry over a caller-supplied record sequence.
    ///
    /// The sequence is taken as-is: order is preserved and duplicate
    /// codes are not rejected (a lookup against a duplicated code
    /// returns the earliest match).
    pub fn from_languages(languages: Vec<Language>) -> Self {
        Self {
            languages: Cow::Owned(languages),
        }
    }

    /// Look up a language by its English display name.
    pub fn by_name(&self, name: &str) -> Result<&Language, RegistryError> {
        self.lookup(FieldKey::Name, name)
    }

    /// Look up a language by its ISO 639-1 two-letter code.
    pub fn by_alpha2(&self, code: &str) -> Result<&Language, RegistryError> {
        self.lookup(FieldKey::Alpha2, code)
    }

    /// Look up a language by its ISO 639-2/T terminology code.
    pub fn by_terminology(&self, code: &str) -> Result<&Language, RegistryError> {
        self.lookup(FieldKey::Terminology, code)
    }

    /// Look up a language by its ISO 639-2/B bibliographic code.
    pub fn by_bibliographic(&self, code: &str) -> Result<&Language, RegistryError> {
        self.lookup(FieldKey::Bibliographic, code)
    }

    /// The full record set, in registry order.
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Iterate the records in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.languages.iter()
    }

    /// Iterate `(key, record)` pairs with the key drawn from `field`.
    ///
    /// One pair per record, in registry order, keys exactly as stored
    /// (lowercase codes, display-cased names). The iterator is lazy and
    /// finite; call again for a fresh pass.
    pub fn keyed(&self, field: FieldKey) -> KeyedIter<'_> {
        KeyedIter {
            field,
            inner: self.languages.iter(),
        }
    }

    /// Stringly-keyed variant of [`Registry::keyed`].
    ///
    /// `index_by` must be one of the four field identifiers
    /// ([`FieldKey::codes`]); anything else is an
    /// [`RegistryError::InvalidKey`].
    pub fn iter_by(&self, index_by: &str) -> Result<KeyedIter<'_>, RegistryError> {
        let field =
            FieldKey::from_code(index_by).ok_or_else(|| RegistryError::invalid_key(index_by))?;
        Ok(self.keyed(field))
    }

    fn lookup(&self, field: FieldKey, value: &str) -> Result<&Language, RegistryError> {
        self.languages
            .iter()
            .find(|language| language.field(field).eq_ignore_ascii_case(value))
            .ok_or_else(|| RegistryError::not_found(field, value))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy `(key, record)` iterator produced by [`Registry::keyed`].
#[derive(Debug, Clone)]
pub struct KeyedIter<'a> {
    field: FieldKey,
    inner: std::slice::Iter<'a, Language>,
}

impl<'a> Iterator for KeyedIter<'a> {
    type Item = (&'static str, &'a Language);

    fn next(&mut self) -> Option<Self::Item> {
        let language = self.inner.next()?;
        Some((language.field(self.field), language))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for KeyedIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_registry() -> Registry {
        Registry::from_languages(vec![
            Language::new("German", "de", "deu", "ger"),
            Language::new("Māori", "mi", "mri", "mao"),
        ])
    }

    #[test]
    fn lookups_are_ascii_case_insensitive() {
        let registry = small_registry();
        assert_eq!(registry.by_alpha2("DE").unwrap().name, "German");
        assert_eq!(
            registry.by_alpha2("DE").unwrap(),
            registry.by_alpha2("de").unwrap()
        );
        assert_eq!(registry.by_name("gERMAN").unwrap().alpha2, "de");
    }

    #[test]
    fn diacritics_are_not_folded() {
        let registry = small_registry();
        // ASCII portion folds, the macron must match exactly.
        assert_eq!(registry.by_name("māORI").unwrap().alpha2, "mi");
        assert!(registry.by_name("Maori").is_err());
    }

    #[test]
    fn lookup_miss_reports_field_and_query() {
        let registry = small_registry();
        let err = registry.by_terminology("xyz").unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                field: FieldKey::Terminology,
                query: "xyz".to_string(),
            }
        );
    }

    #[test]
    fn first_match_wins_on_duplicate_codes() {
        // Duplicates violate the dataset invariant but must still
        // resolve deterministically.
        let registry = Registry::from_languages(vec![
            Language::new("First", "zz", "zza", "zza"),
            Language::new("Second", "zz", "zzb", "zzb"),
        ]);
        assert_eq!(registry.by_alpha2("zz").unwrap().name, "First");
    }

    #[test]
    fn keyed_iteration_preserves_order_and_stored_case() {
        let registry = small_registry();
        let pairs: Vec<_> = registry.keyed(FieldKey::Name).collect();
        assert_eq!(pairs.len(), registry.len());
        assert_eq!(pairs[0].0, "German");
        assert_eq!(pairs[1].0, "Māori");
    }

    #[test]
    fn iter_by_rejects_unknown_identifiers() {
        let registry = small_registry();
        let err = registry.iter_by("bogus-key").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidKey { .. }));
    }

    #[test]
    fn iter_by_is_restartable() {
        let registry = small_registry();
        let first: Vec<_> = registry.iter_by("639-1").unwrap().map(|(k, _)| k).collect();
        let second: Vec<_> = registry.iter_by("639-1").unwrap().map(|(k, _)| k).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["de", "mi"]);
    }

    #[test]
    fn empty_registry_has_no_matches() {
        let registry = Registry::from_languages(Vec::new());
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
        assert!(registry.by_alpha2("de").is_err());
        assert!(registry.by_name("German").is_err());
    }

    #[test]
    fn default_iteration_matches_all() {
        let registry = small_registry();
        let via_iter: Vec<_> = (&registry).into_iter().collect();
        let via_all: Vec<_> = registry.all().iter().collect();
        assert_eq!(via_iter, via_all);
    }
}
