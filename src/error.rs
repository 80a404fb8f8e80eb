// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for registry lookups.

use crate::types::FieldKey;
use thiserror::Error;

/// Failures surfaced by [`Registry`](crate::Registry) operations.
///
/// Lookups are deterministic pure reads, so nothing here is transient:
/// a `NotFound` for a given query stays `NotFound` until the caller
/// changes the query or the registry it is asked against.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No record matched the queried value in the given field.
    #[error("no {field} found matching {query:?}")]
    NotFound {
        /// Field the lookup ran against.
        field: FieldKey,
        /// The value as supplied by the caller, case preserved.
        query: String,
    },

    /// The keyed-iteration identifier is not one of the four field keys.
    #[error("invalid index key {given:?}, expected one of: {}", .expected.join(", "))]
    InvalidKey {
        given: String,
        expected: &'static [&'static str],
    },
}

impl RegistryError {
    pub(crate) fn not_found(field: FieldKey, query: &str) -> Self {
        RegistryError::NotFound {
            field,
            query: query.to_string(),
        }
    }

    pub(crate) fn invalid_key(given: &str) -> Self {
        RegistryError::InvalidKey {
            given: given.to_string(),
            expected: FieldKey::codes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_field_and_query() {
        let err = RegistryError::not_found(FieldKey::Alpha2, "xy");
        assert_eq!(err.to_string(), "no 639-1 found matching \"xy\"");
    }

    #[test]
    fn invalid_key_lists_accepted_identifiers() {
        let err = RegistryError::invalid_key("bogus-key");
        let message = err.to_string();
        assert!(message.contains("\"bogus-key\""));
        for code in FieldKey::codes() {
            assert!(message.contains(code), "message should list {code}");
        }
    }
}
