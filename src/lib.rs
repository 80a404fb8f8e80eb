// SPDX-License-Identifier: PMPL-1.0-or-later

//! iso639: ISO 639 language code registry.
//!
//! A static reference dataset of 184 languages, each carrying its English
//! name, ISO 639-1 two-letter code, and ISO 639-2 terminology (/T) and
//! bibliographic (/B) three-letter codes, behind case-insensitive
//! exact-match lookups and ordered iteration.
//!
//! ```
//! use iso639::Registry;
//!
//! let registry = Registry::new();
//! assert_eq!(registry.by_alpha2("de")?.name, "German");
//! assert_eq!(registry.by_bibliographic("GER")?.terminology, "deu");
//! assert_eq!(registry.len(), 184);
//! # Ok::<(), iso639::RegistryError>(())
//! ```
//!
//! The registry is immutable after construction and performs no I/O, so a
//! shared instance can be read from any number of threads without locking.

pub mod error;
pub mod registry;
pub mod report;
pub mod types;

pub use error::RegistryError;
pub use registry::{KeyedIter, Registry};
pub use types::{FieldKey, Language, KEY_639_1, KEY_639_2B, KEY_639_2T, KEY_NAME};
