use mapchecker_rules::{ConditionalEntry, RuleDocument, RuleError, RuleTable};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn custom_rules_load_from_json() {
    init_logging();
    let table = RuleTable::from_json(
        r#"{
            "illegal_matches": ["Spawner"],
            "legal_overrides": ["SpawnerDecor"],
            "conditionally_illegal_matches": [
                { "category": "Syndicate", "matchers": ["WallPlastitanium"] }
            ]
        }"#,
    )
    .unwrap();
    assert!(table.is_absolutely_banned("Spawner"));
    assert!(table.is_legal_override("SpawnerDecor"));
    assert!(!table.is_absolutely_banned("SpawnerDecor"));
    assert!(
        table
            .conditional_matchers_for("Syndicate")
            .unwrap()
            .contains("WallPlastitanium")
    );
    assert!(table.conditional_matchers_for("PointOfInterest").is_err());
}

#[test]
fn malformed_json_is_a_parse_error() {
    init_logging();
    let err = RuleTable::from_json(r#"{ "illegal_matches": "DEBUG" }"#).unwrap_err();
    assert!(matches!(err, RuleError::Parse(_)));
    let err = RuleTable::from_json("not json").unwrap_err();
    assert!(matches!(err, RuleError::Parse(_)));
    assert!(!err.is_lookup());
}

#[test]
fn blank_entries_are_rejected() {
    init_logging();
    let err = RuleTable::from_json(r#"{ "legal_overrides": ["ShowcaseRobot", ""] }"#).unwrap_err();
    assert!(matches!(err, RuleError::BlankEntry { list } if list == "legal_overrides"));

    let err = RuleTable::from_json(
        r#"{ "conditionally_illegal_matches": [{ "category": "Scrap", "matchers": ["  "] }] }"#,
    )
    .unwrap_err();
    assert!(
        matches!(err, RuleError::BlankEntry { list } if list == "conditionally_illegal_matches.Scrap")
    );
}

#[test]
fn repeated_entries_are_rejected() {
    init_logging();
    let err = RuleTable::from_json(r#"{ "illegal_matches": ["DEBUG", "PDA", "DEBUG"] }"#)
        .unwrap_err();
    match err {
        RuleError::DuplicateEntry { list, entry } => {
            assert_eq!(list, "illegal_matches");
            assert_eq!(entry, "DEBUG");
        }
        other => panic!("expected DuplicateEntry, got {other:?}"),
    }
}

#[test]
fn category_keys_must_be_present_and_unique() {
    init_logging();
    let blank = RuleDocument {
        conditionally_illegal_matches: vec![ConditionalEntry {
            category: String::new(),
            note: None,
            matchers: Vec::new(),
        }],
        ..RuleDocument::default()
    };
    assert!(matches!(
        RuleTable::from_document(blank),
        Err(RuleError::BlankCategory)
    ));

    let err = RuleTable::from_json(r#"{ "conditionally_illegal_matches": [{ "category": "   " }] }"#)
        .unwrap_err();
    assert!(matches!(err, RuleError::BlankCategory));

    let err = RuleTable::from_json(
        r#"{ "conditionally_illegal_matches": [
            { "category": "Medical" },
            { "category": "Ussp" },
            { "category": "Medical", "matchers": ["Defib"] }
        ] }"#,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "category `Medical` is declared more than once");
}

#[test]
fn padded_category_keys_are_rejected() {
    init_logging();
    let err = RuleTable::from_json(
        r#"{ "conditionally_illegal_matches": [
            { "category": "Shipyard" },
            { "category": " Shipyard" }
        ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, RuleError::PaddedCategory { category } if category == " Shipyard"));

    let err = RuleTable::from_json(
        r#"{ "conditionally_illegal_matches": [{ "category": "Medical\t" }] }"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "category `Medical\t` has leading or trailing whitespace"
    );
}

#[test]
fn same_name_may_be_banned_and_overridden() {
    init_logging();
    let table = RuleTable::from_json(
        r#"{ "illegal_matches": ["PDA"], "legal_overrides": ["PDA"] }"#,
    )
    .unwrap();
    assert!(table.is_legal_override("PDA"));
    assert!(table.is_absolutely_banned("PDA"));
    assert_eq!(table.overridden_bans().collect::<Vec<_>>(), vec!["PDA"]);
}

#[test]
fn a_matcher_may_appear_under_several_categories() {
    init_logging();
    let table = RuleTable::from_json(
        r#"{ "conditionally_illegal_matches": [
            { "category": "Security", "matchers": ["WallPlastitanium"] },
            { "category": "Syndicate", "matchers": ["WallPlastitanium"] }
        ] }"#,
    )
    .unwrap();
    for category in ["Security", "Syndicate"] {
        assert!(
            table
                .conditional_matchers_for(category)
                .unwrap()
                .contains("WallPlastitanium")
        );
    }
}
