//! Tests for the Artist model
//!
//! These tests verify:
//! - Payload validation (required name, awards minimum, genre set)
//! - JSON and form payload parsing
//! - Identifier parsing and ordering
//! - Update application
//! - Search filter parsing and matching
//! - Find options (sort and limit)

use artist_api::model::{
    Artist, ArtistFilter, ArtistId, ArtistInput, ArtistUpdate, FindOptions, Genre, IdGenerator,
    NewArtist, SortOrder,
};
use artist_api::ArtistError;

// =============================================================================
// Helper Functions
// =============================================================================

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn artist(ids: &IdGenerator, fields: NewArtist) -> Artist {
    Artist::new(ids.next_id().unwrap(), fields)
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_full_input() {
    let input: ArtistInput = serde_json::from_str(
        r#"{"name":"DJ X","awardsWon":5,"isTouring":true,"genre":["techno","house"]}"#,
    )
    .unwrap();

    let fields = input.validate().unwrap();

    assert_eq!(fields.name, "DJ X");
    assert_eq!(fields.awards_won, 5);
    assert_eq!(fields.is_touring, Some(true));
    assert_eq!(fields.genre, vec![Genre::Techno, Genre::House]);
}

#[test]
fn test_validate_defaults_awards_to_zero() {
    let input: ArtistInput = serde_json::from_str(r#"{"name":"Quiet"}"#).unwrap();

    let fields = input.validate().unwrap();

    assert_eq!(fields.awards_won, 0);
    assert_eq!(fields.is_touring, None);
    assert!(fields.genre.is_empty());
}

#[test]
fn test_validate_null_awards_defaults_to_zero() {
    let input: ArtistInput = serde_json::from_str(r#"{"name":"Quiet","awardsWon":null}"#).unwrap();

    assert_eq!(input.validate().unwrap().awards_won, 0);
}

#[test]
fn test_validate_rejects_missing_name() {
    let input: ArtistInput = serde_json::from_str(r#"{"awardsWon":1}"#).unwrap();

    let err = input.validate().unwrap_err();

    assert!(matches!(err, ArtistError::Validation(ref msg) if msg.contains("name")));
}

#[test]
fn test_validate_rejects_blank_name() {
    let input = ArtistInput {
        name: Some("   ".to_string()),
        ..Default::default()
    };

    assert!(matches!(input.validate(), Err(ArtistError::Validation(_))));
}

#[test]
fn test_validate_rejects_negative_awards() {
    let input: ArtistInput = serde_json::from_str(r#"{"name":"Neg","awardsWon":-1}"#).unwrap();

    let err = input.validate().unwrap_err();

    assert!(matches!(err, ArtistError::Validation(ref msg) if msg.contains("awardsWon")));
}

#[test]
fn test_validate_rejects_unknown_genre() {
    let input: ArtistInput =
        serde_json::from_str(r#"{"name":"Rock","genre":["techno","rock"]}"#).unwrap();

    let err = input.validate().unwrap_err();

    assert!(matches!(err, ArtistError::Validation(ref msg) if msg.contains("rock")));
}

#[test]
fn test_single_genre_string_is_accepted() {
    let input: ArtistInput = serde_json::from_str(r#"{"name":"Solo","genre":"tech-house"}"#).unwrap();

    assert_eq!(input.validate().unwrap().genre, vec![Genre::TechHouse]);
}

#[test]
fn test_fractional_awards_fail_to_parse() {
    let result = serde_json::from_str::<ArtistInput>(r#"{"name":"Half","awardsWon":2.5}"#);

    assert!(result.is_err());
}

// =============================================================================
// Form Payload Tests
// =============================================================================

#[test]
fn test_form_pairs_build_input() {
    let input = ArtistInput::from_form_pairs(pairs(&[
        ("name", "Form DJ"),
        ("awardsWon", "7"),
        ("isTouring", "false"),
        ("genre", "house"),
        ("genre[]", "techno"),
        ("ignored", "whatever"),
    ]))
    .unwrap();

    let fields = input.validate().unwrap();

    assert_eq!(fields.name, "Form DJ");
    assert_eq!(fields.awards_won, 7);
    assert_eq!(fields.is_touring, Some(false));
    assert_eq!(fields.genre, vec![Genre::House, Genre::Techno]);
}

#[test]
fn test_form_pairs_reject_non_numeric_awards() {
    let result = ArtistInput::from_form_pairs(pairs(&[("name", "X"), ("awardsWon", "many")]));

    assert!(matches!(result, Err(ArtistError::Validation(_))));
}

#[test]
fn test_form_pairs_reject_non_boolean_touring() {
    let result = ArtistInput::from_form_pairs(pairs(&[("name", "X"), ("isTouring", "yes")]));

    assert!(matches!(result, Err(ArtistError::Validation(_))));
}

#[test]
fn test_form_pairs_empty_values_count_as_omitted() {
    let input =
        ArtistInput::from_form_pairs(pairs(&[("name", "X"), ("awardsWon", ""), ("isTouring", "")]))
            .unwrap();

    let fields = input.validate().unwrap();

    assert_eq!(fields.awards_won, 0);
    assert_eq!(fields.is_touring, None);
}

// =============================================================================
// Identifier Tests
// =============================================================================

#[test]
fn test_id_display_parse_roundtrip() {
    let id = IdGenerator::new().next_id().unwrap();

    let parsed: ArtistId = id.to_string().parse().unwrap();

    assert_eq!(parsed, id);
    assert_eq!(id.to_string().len(), 26);
}

#[test]
fn test_id_rejects_malformed_strings() {
    for raw in ["", "123", "not-an-id", "64f1c2a9b3e4d5f6a7b8c9d0"] {
        let result = raw.parse::<ArtistId>();
        assert!(
            matches!(result, Err(ArtistError::InvalidId(_))),
            "expected InvalidId for {:?}",
            raw
        );
    }
}

#[test]
fn test_generated_ids_are_strictly_increasing() {
    let ids = IdGenerator::new();

    let generated: Vec<ArtistId> = (0..100).map(|_| ids.next_id().unwrap()).collect();

    assert!(generated.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(generated
        .windows(2)
        .all(|pair| pair[0].to_bytes() < pair[1].to_bytes()));
}

#[test]
fn test_id_from_key_rejects_wrong_length() {
    assert!(matches!(
        ArtistId::from_key(&[1, 2, 3]),
        Err(ArtistError::Storage(_))
    ));

    let id = IdGenerator::new().next_id().unwrap();
    assert_eq!(ArtistId::from_key(&id.to_bytes()).unwrap(), id);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_artist_json_field_names() {
    let ids = IdGenerator::new();
    let stored = artist(&ids, NewArtist::new("DJ X").awards_won(5).touring(true).genre(Genre::TechHouse));

    let value = serde_json::to_value(&stored).unwrap();

    assert_eq!(value["_id"], stored.id.to_string());
    assert_eq!(value["name"], "DJ X");
    assert_eq!(value["awardsWon"], 5);
    assert_eq!(value["isTouring"], true);
    assert_eq!(value["genre"], serde_json::json!(["tech-house"]));
}

#[test]
fn test_summary_has_only_name_and_awards() {
    let ids = IdGenerator::new();
    let stored = artist(&ids, NewArtist::new("DJ X").awards_won(5).touring(true));

    let value = serde_json::to_value(stored.summary()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 2);
    assert_eq!(object["name"], "DJ X");
    assert_eq!(object["awardsWon"], 5);
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_set_touring_leaves_other_fields() {
    let ids = IdGenerator::new();
    let current = artist(&ids, NewArtist::new("DJ X").awards_won(5).touring(true).genre(Genre::Techno));

    let next = ArtistUpdate::SetTouring(false).apply(&current);

    assert_eq!(next.is_touring, Some(false));
    assert_eq!(next.id, current.id);
    assert_eq!(next.name, current.name);
    assert_eq!(next.awards_won, current.awards_won);
    assert_eq!(next.genre, current.genre);
}

#[test]
fn test_replace_overwrites_all_fields_and_keeps_id() {
    let ids = IdGenerator::new();
    let current = artist(&ids, NewArtist::new("Old").awards_won(9).touring(true).genre(Genre::House));

    let next = ArtistUpdate::Replace(NewArtist::new("New")).apply(&current);

    assert_eq!(next.id, current.id);
    assert_eq!(next.name, "New");
    assert_eq!(next.awards_won, 0);
    assert_eq!(next.is_touring, None);
    assert!(next.genre.is_empty());
}

// =============================================================================
// Filter Tests
// =============================================================================

#[test]
fn test_filter_parses_allowed_fields() {
    let filter = ArtistFilter::from_query_pairs(pairs(&[
        ("name", "DJ X"),
        ("awardsWon", "5"),
        ("isTouring", "true"),
        ("genre", "tech-house"),
    ]))
    .unwrap();

    assert_eq!(
        filter,
        ArtistFilter::all()
            .name("DJ X")
            .awards_won(5)
            .touring(true)
            .genre(Genre::TechHouse)
    );
}

#[test]
fn test_filter_empty_matches_everything() {
    let ids = IdGenerator::new();
    let filter = ArtistFilter::from_query_pairs(Vec::new()).unwrap();

    assert!(filter.is_empty());
    assert!(filter.matches(&artist(&ids, NewArtist::new("Anyone"))));
}

#[test]
fn test_filter_rejects_unknown_field() {
    let result = ArtistFilter::from_query_pairs(pairs(&[("$where", "1")]));

    assert!(matches!(result, Err(ArtistError::InvalidFilter(ref msg)) if msg.contains("$where")));
}

#[test]
fn test_filter_rejects_mistyped_values() {
    for raw in [
        ("awardsWon", "-1"),
        ("awardsWon", "five"),
        ("isTouring", "maybe"),
        ("genre", "rock"),
    ] {
        let result = ArtistFilter::from_query_pairs(pairs(&[raw]));
        assert!(
            matches!(result, Err(ArtistError::InvalidFilter(_))),
            "expected InvalidFilter for {:?}",
            raw
        );
    }
}

#[test]
fn test_filter_rejects_repeated_scalar_field() {
    let result = ArtistFilter::from_query_pairs(pairs(&[("name", "a"), ("name", "b")]));

    assert!(matches!(result, Err(ArtistError::InvalidFilter(_))));
}

#[test]
fn test_filter_genre_requires_containment_of_all() {
    let ids = IdGenerator::new();
    let both = artist(&ids, NewArtist::new("Both").genre(Genre::House).genre(Genre::Techno));
    let house = artist(&ids, NewArtist::new("House").genre(Genre::House));

    let filter = ArtistFilter::all().genre(Genre::House).genre(Genre::Techno);

    assert!(filter.matches(&both));
    assert!(!filter.matches(&house));
    assert!(ArtistFilter::all().genre(Genre::House).matches(&house));
}

#[test]
fn test_filter_touring_does_not_match_unset_flag() {
    let ids = IdGenerator::new();
    let unknown = artist(&ids, NewArtist::new("Unknown"));

    assert!(!ArtistFilter::all().touring(false).matches(&unknown));
    assert!(!ArtistFilter::all().touring(true).matches(&unknown));
}

// =============================================================================
// Find Options Tests
// =============================================================================

#[test]
fn test_find_options_sort_and_limit() {
    let ids = IdGenerator::new();
    let artists = vec![
        artist(&ids, NewArtist::new("a").awards_won(1)),
        artist(&ids, NewArtist::new("b").awards_won(10)),
        artist(&ids, NewArtist::new("c").awards_won(5)),
        artist(&ids, NewArtist::new("d").awards_won(7)),
    ];

    let top = FindOptions::default()
        .sort(SortOrder::AwardsDesc)
        .limit(3)
        .apply(artists);

    let names: Vec<&str> = top.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["b", "d", "c"]);
}

#[test]
fn test_find_options_default_keeps_order() {
    let ids = IdGenerator::new();
    let artists = vec![
        artist(&ids, NewArtist::new("a").awards_won(1)),
        artist(&ids, NewArtist::new("b").awards_won(10)),
    ];

    let result = FindOptions::default().apply(artists.clone());

    assert_eq!(result, artists);
}
