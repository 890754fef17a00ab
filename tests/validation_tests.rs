//! End-to-end validation tests against the embedded catalog and small
//! hand-built systems.

use tag_solver::{
    validate, validate_one, Convention, ConventionCatalog, Definition, MatchSource, System,
    SystemId, ValidationEngine,
};

fn embedded(id: &str) -> System {
    let catalog = ConventionCatalog::load_embedded().expect("embedded catalog should load");
    catalog
        .get(&SystemId::new(id))
        .unwrap_or_else(|| panic!("embedded catalog should contain '{id}'"))
        .clone()
}

/// Single field, `[0,10]` with minimum width 1
fn single_range() -> System {
    System::new("single", "Single range").with_convention(
        Convention::new("value", "Value", "V", 0, 2)
            .with_definition(Definition::range("value_range", 0, 10, 1)),
    )
}

/// Three numeric fields separated by hyphens: `10-10-10`
fn hyphenated() -> System {
    let field = |id: &str, start: usize| {
        Convention::new(id, id, "NN", start, start + 2)
            .with_definition(Definition::range(format!("{id}_range"), 0, 10, 1))
    };
    System::new("hyphenated", "Hyphenated")
        .with_separators(['-'])
        .with_convention(field("first", 0))
        .with_convention(field("second", 3))
        .with_convention(field("third", 6))
}

#[test]
fn test_reference_system_accepts_known_tags() {
    let system = embedded("reference");
    let engine = ValidationEngine::new(&system).unwrap();

    for tag in [
        "ZZZZZZ 10-10-10 NNN",
        "ZZZZZZ 10-10-01 NNN",
        "ZZZZZZ 10-AB-05 NNN",
        "ZZZZZZ 10-10-AV NNN",
    ] {
        assert!(engine.is_valid(tag).unwrap(), "'{tag}' should be valid");
    }
}

#[test]
fn test_reference_system_rejects_missing_separators() {
    let system = embedded("reference");
    assert!(!validate_one(&system, "ZZZZZZ 101010 NNN").unwrap());
    assert!(!validate_one(&system, "ZZZZZZ-10-10-10 NNN").unwrap());
    assert!(!validate_one(&system, "ZZZZZZ 10-10-10").unwrap());
}

#[test]
fn test_compact_system_examples() {
    let system = embedded("compact");

    for tag in ["10ABC2", "10ABC", "10"] {
        assert!(validate_one(&system, tag).unwrap(), "'{tag}' should be valid");
    }
    // Missing the mandatory leading field
    assert!(!validate_one(&system, "ABC2").unwrap());
    // Wrong abbreviation literal
    assert!(!validate_one(&system, "10AB2").unwrap());
}

#[test]
fn test_optional_field_may_be_omitted_but_mandatory_may_not() {
    let system = embedded("compact");
    // "code" is optional
    assert!(validate_one(&system, "102").unwrap());
    // "number" is mandatory
    assert!(!validate_one(&system, "ABC").unwrap());
}

#[test]
fn test_variable_width_range() {
    let system = single_range();
    assert!(validate_one(&system, "1").unwrap());
    assert!(validate_one(&system, "10").unwrap());
    assert!(validate_one(&system, "0").unwrap());
    assert!(!validate_one(&system, "11").unwrap());
    assert!(!validate_one(&system, "100").unwrap());
}

#[test]
fn test_concatenated_digits_rejected_when_layout_needs_separators() {
    let system = hyphenated();
    assert!(validate_one(&system, "10-10-10").unwrap());
    assert!(validate_one(&system, "1-0-10").unwrap());
    assert!(!validate_one(&system, "101010").unwrap());
    assert!(!validate_one(&system, "10 10 10").unwrap());
}

#[test]
fn test_validation_is_idempotent() {
    let system = embedded("reference");
    let engine = ValidationEngine::new(&system).unwrap();

    for tag in ["ZZZZZZ 10-10-10 NNN", "ZZZZZZ 101010 NNN"] {
        let first = engine.explain(tag).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.explain(tag).unwrap(), first);
        }
    }
}

#[test]
fn test_candidate_order_does_not_affect_results() {
    let system = embedded("compact");
    let a = "10ABC";
    let b = "10AB2";

    let forward = validate(&system, &[a, b]).unwrap();
    let backward = validate(&system, &[b, a]).unwrap();
    assert_eq!(forward, vec![a]);
    assert_eq!(backward, vec![a]);
}

#[test]
fn test_explain_reports_matching_rules() {
    let system = embedded("reference");
    let engine = ValidationEngine::new(&system).unwrap();

    let matches = engine.explain("ZZZZZZ 10-AB-05 NNN").unwrap().unwrap();
    let pieces: Vec<(&str, &str)> = matches
        .iter()
        .filter_map(|m| match &m.source {
            MatchSource::Definition { definition, .. } => {
                Some((m.text.as_str(), definition.0.as_str()))
            }
            MatchSource::Separator { .. } => None,
        })
        .collect();

    assert_eq!(
        pieces,
        vec![
            ("ZZZZZZ", "site_zzzzzz"),
            ("10", "area_number"),
            ("AB", "unit_ab"),
            ("05", "sequence_number"),
            ("NNN", "suffix_nnn"),
        ]
    );

    let rebuilt: String = matches.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(rebuilt, "ZZZZZZ 10-AB-05 NNN");
}

#[test]
fn test_sibling_branches_do_not_leak_matches() {
    // The first field tries "1" before "10"; the failed branch's records must
    // not appear in the final trail
    let system = System::new("s", "S")
        .with_convention(
            Convention::new("a", "A", "A", 0, 2)
                .with_definition(Definition::range("a_range", 0, 10, 1)),
        )
        .with_convention(
            Convention::new("b", "B", "B", 2, 5).with_definition(Definition::abbreviation("b_x", "X")),
        );
    let engine = ValidationEngine::new(&system).unwrap();

    let matches = engine.explain("10X").unwrap().unwrap();
    let texts: Vec<&str> = matches.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["10", "X"]);
}

#[test]
fn test_absent_optional_field_keeps_mandatory_separator() {
    // NN-[AB]CD: the hyphen separates the two mandatory fields when AB is absent
    let system = System::new("gap", "Gap")
        .with_convention(
            Convention::new("a", "A", "NN", 0, 2)
                .with_definition(Definition::range("a_range", 0, 99, 2)),
        )
        .with_convention(
            Convention::new("b", "B", "AB", 3, 5)
                .optional()
                .with_definition(Definition::abbreviation("b_ab", "AB")),
        )
        .with_convention(
            Convention::new("c", "C", "CD", 5, 7)
                .with_definition(Definition::abbreviation("c_cd", "CD")),
        );

    let valid = validate(&system, &["10-ABCD", "10-CD", "10CD", "10ABCD"]).unwrap();
    assert_eq!(valid, vec!["10-ABCD", "10-CD"]);
}
