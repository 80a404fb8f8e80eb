// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for the ISO 639 registry.
//!
//! A [`Language`] bundles the four identifying fields of one language:
//! the English display name, the two-letter ISO 639-1 code, and the
//! three-letter ISO 639-2 terminology (/T) and bibliographic (/B) codes.
//! [`FieldKey`] enumerates those four fields so callers can address them
//! without stringly-typed dispatch.

use serde::{Deserialize, Serialize};

/// Identifier string for the ISO 639-1 field (`"639-1"`).
pub const KEY_639_1: &str = "639-1";
/// Identifier string for the ISO 639-2 bibliographic field (`"639-2/B"`).
pub const KEY_639_2B: &str = "639-2/B";
/// Identifier string for the ISO 639-2 terminology field (`"639-2/T"`).
pub const KEY_639_2T: &str = "639-2/T";
/// Identifier string for the display-name field (`"name"`).
pub const KEY_NAME: &str = "name";

/// The four addressable fields of a [`Language`] record.
///
/// Each variant maps to one of the historical identifier strings via
/// [`FieldKey::code`] and parses back via [`FieldKey::from_code`]. The
/// identifiers double as the map keys of serialized records, so existing
/// consumers of the dataset see the shape they expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "639-1")]
    Alpha2,
    #[serde(rename = "639-2/B")]
    Bibliographic,
    #[serde(rename = "639-2/T")]
    Terminology,
    #[serde(rename = "name")]
    Name,
}

impl FieldKey {
    /// Identifier string for this field.
    pub fn code(&self) -> &'static str {
        match self {
            FieldKey::Alpha2 => KEY_639_1,
            FieldKey::Bibliographic => KEY_639_2B,
            FieldKey::Terminology => KEY_639_2T,
            FieldKey::Name => KEY_NAME,
        }
    }

    /// Parse an identifier string into a field key.
    ///
    /// Returns `None` for unrecognised identifiers. Exact match only:
    /// the identifier set is fixed and the casing is part of it, so
    /// `"639-2/b"` is rejected.
    pub fn from_code(code: &str) -> Option<FieldKey> {
        match code {
            KEY_639_1 => Some(FieldKey::Alpha2),
            KEY_639_2B => Some(FieldKey::Bibliographic),
            KEY_639_2T => Some(FieldKey::Terminology),
            KEY_NAME => Some(FieldKey::Name),
            _ => None,
        }
    }

    /// All addressable fields, in identifier order.
    pub fn all() -> &'static [FieldKey] {
        &[
            FieldKey::Alpha2,
            FieldKey::Bibliographic,
            FieldKey::Terminology,
            FieldKey::Name,
        ]
    }

    /// The accepted identifier strings, in the same order as [`FieldKey::all`].
    pub fn codes() -> &'static [&'static str] {
        &[KEY_639_1, KEY_639_2B, KEY_639_2T, KEY_NAME]
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One language's full set of identifying fields.
///
/// Records are immutable values over `'static` string data: the shipped
/// dataset is a compile-time constant table, and custom registries are
/// built from literals. Serialization uses the identifier strings as map
/// keys, e.g. the German record becomes
/// `{"name": "German", "639-1": "de", "639-2/T": "deu", "639-2/B": "ger"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    /// English display name. Synonyms share one field ("Catalan, Valencian").
    pub name: &'static str,
    /// ISO 639-1 two-letter code, lowercase.
    #[serde(rename = "639-1")]
    pub alpha2: &'static str,
    /// ISO 639-2/T three-letter terminology code, lowercase.
    #[serde(rename = "639-2/T")]
    pub terminology: &'static str,
    /// ISO 639-2/B three-letter bibliographic code, lowercase.
    /// Usually equal to the terminology code; differs for 20 languages
    /// ("ger" vs "deu", "fre" vs "fra", ...).
    #[serde(rename = "639-2/B")]
    pub bibliographic: &'static str,
}

impl Language {
    pub const fn new(
        name: &'static str,
        alpha2: &'static str,
        terminology: &'static str,
        bibliographic: &'static str,
    ) -> Self {
        Self {
            name,
            alpha2,
            terminology,
            bibliographic,
        }
    }

    /// The value of the field named by `key`.
    pub fn field(&self, key: FieldKey) -> &'static str {
        match key {
            FieldKey::Alpha2 => self.alpha2,
            FieldKey::Bibliographic => self.bibliographic,
            FieldKey::Terminology => self.terminology,
            FieldKey::Name => self.name,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.alpha2)
    }
}
