// SPDX-License-Identifier: PMPL-1.0-or-later

//! Quality checks for the compiled-in ISO 639 table.

use iso639::Registry;
use std::collections::HashSet;

#[test]
fn test_dataset_size() {
    let registry = Registry::new();
    assert_eq!(registry.len(), 184);
}

#[test]
fn test_code_shapes() {
    for language in Registry::new().all() {
        assert!(!language.name.is_empty(), "empty name in dataset");
        assert!(
            language.alpha2.len() == 2
                && language.alpha2.bytes().all(|b| b.is_ascii_lowercase()),
            "bad alpha2 {:?} for {}",
            language.alpha2,
            language.name
        );
        for code in [language.terminology, language.bibliographic] {
            assert!(
                code.len() == 3 && code.bytes().all(|b| b.is_ascii_lowercase()),
                "bad three-letter code {:?} for {}",
                code,
                language.name
            );
        }
    }
}

#[test]
fn test_codes_are_unique() {
    let registry = Registry::new();
    let mut alpha2 = HashSet::new();
    let mut terminology = HashSet::new();
    let mut bibliographic = HashSet::new();
    for language in registry.all() {
        assert!(
            alpha2.insert(language.alpha2),
            "duplicate alpha2 {:?}",
            language.alpha2
        );
        assert!(
            terminology.insert(language.terminology),
            "duplicate terminology {:?}",
            language.terminology
        );
        assert!(
            bibliographic.insert(language.bibliographic),
            "duplicate bibliographic {:?}",
            language.bibliographic
        );
    }
}

#[test]
fn test_every_record_round_trips_through_all_lookups() {
    let registry = Registry::new();
    for language in registry.all() {
        assert_eq!(registry.by_name(language.name).unwrap(), language);
        assert_eq!(registry.by_alpha2(language.alpha2).unwrap(), language);
        assert_eq!(
            registry.by_terminology(language.terminology).unwrap(),
            language
        );
        assert_eq!(
            registry.by_bibliographic(language.bibliographic).unwrap(),
            language
        );
    }
}

#[test]
fn test_bibliographic_variants_present() {
    let registry = Registry::new();
    // The legacy /B column diverges from /T for a fixed set of languages.
    for (bibliographic, terminology) in [
        ("ger", "deu"),
        ("fre", "fra"),
        ("dut", "nld"),
        ("gre", "ell"),
        ("chi", "zho"),
        ("mao", "mri"),
    ] {
        let language = registry.by_bibliographic(bibliographic).unwrap();
        assert_eq!(language.terminology, terminology);
        assert_eq!(registry.by_terminology(terminology).unwrap(), language);
    }
}

#[test]
fn test_non_ascii_names_are_preserved() {
    let registry = Registry::new();
    assert_eq!(registry.by_alpha2("mi").unwrap().name, "Māori");
    assert_eq!(registry.by_alpha2("vo").unwrap().name, "Volapük");
    assert_eq!(
        registry.by_alpha2("el").unwrap().name,
        "Greek, Modern (1453\u{2013})"
    );
}

#[test]
fn test_diacritic_names_match_with_ascii_case_folding_only() {
    let registry = Registry::new();
    // ASCII letters fold, the macron must be supplied as-is (and in its
    // stored lowercase form: ASCII folding does not map Ā to ā).
    assert_eq!(registry.by_name("māORI").unwrap().alpha2, "mi");
    assert!(registry.by_name("Maori").is_err());
    assert!(registry.by_name("mĀori").is_err());
}

#[test]
fn test_grouped_synonym_names_match_whole_field_only() {
    let registry = Registry::new();
    assert_eq!(registry.by_name("Catalan, Valencian").unwrap().alpha2, "ca");
    // No partial matching against one synonym.
    assert!(registry.by_name("Catalan").is_err());
    assert!(registry.by_name("Valencian").is_err());
}

#[test]
fn test_dataset_order_is_name_alphabetical() {
    // The table ships alphabetically by English name; spot-check the ends
    // rather than asserting a collation the dataset never promises for
    // its handful of non-ASCII and punctuated names.
    let registry = Registry::new();
    let all = registry.all();
    assert_eq!(all.first().unwrap().name, "Abkhazian");
    assert_eq!(all.last().unwrap().name, "Zulu");
}
