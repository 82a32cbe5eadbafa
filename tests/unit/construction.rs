//! The three ways in: generator, validating adopt, literal pairs.

use super::common::{assert_total, card_names, color_indices, mapping_without, Card, Color};
use std::collections::HashMap;
use totalmap::{total_map, IncompleteDomain, KeyDomain, TotalMap};

// ============================================================================
// FROM GENERATOR
// ============================================================================

#[test]
fn from_fn_covers_the_domain() {
    assert_total(&color_indices());
    assert_total(&card_names());
}

#[test]
fn from_fn_calls_generator_once_per_key() {
    let mut calls = 0;
    let map = TotalMap::from_fn(|_: &Card| {
        calls += 1;
        calls
    });

    assert_eq!(calls, 52);
    assert_eq!(map.len(), 52);
}

#[test]
fn default_fills_every_key() {
    let map: TotalMap<Color, Vec<u8>> = TotalMap::default();
    assert_total(&map);
    assert!(map.values().all(Vec::is_empty));
}

// ============================================================================
// FROM PARTIAL MAP
// ============================================================================

#[test]
fn try_from_map_accepts_complete_mapping() {
    let raw: HashMap<Color, &str> = [
        (Color::Red, "r"),
        (Color::Green, "g"),
        (Color::Blue, "b"),
    ]
    .into_iter()
    .collect();

    let map = TotalMap::try_from_map(raw.clone()).unwrap();
    assert_eq!(map.as_map(), &raw);
}

#[test]
fn try_from_map_rejects_each_single_missing_key() {
    for skip in Color::all() {
        let raw = mapping_without(&skip, Color::index);
        let err = TotalMap::try_from_map(raw).unwrap_err();
        assert_eq!(err.missing(), &[skip]);
        assert_eq!(err.domain_len(), 3);
    }
}

#[test]
fn try_from_map_rejects_empty_mapping() {
    let err: IncompleteDomain<Color> = TotalMap::<Color, u8>::try_from_map(HashMap::new())
        .unwrap_err();
    assert_eq!(err.into_missing(), Color::all());
}

#[test]
fn try_from_is_the_validating_constructor() {
    let raw = mapping_without(&Color::Green, Color::index);
    let result: Result<TotalMap<Color, u8>, _> = raw.try_into();
    assert!(result.is_err());
}

#[test]
fn from_partial_with_fills_only_gaps() {
    let raw = mapping_without(&Color::Blue, |_| 7u8);
    let map = TotalMap::from_partial_with(raw, |_| 0);

    assert_total(&map);
    assert_eq!(map[&Color::Red], 7);
    assert_eq!(map[&Color::Green], 7);
    assert_eq!(map[&Color::Blue], 0);
}

// ============================================================================
// FROM LITERAL PAIRS
// ============================================================================

#[test]
fn literal_macro_builds_complete_map() {
    let map: TotalMap<Color, &str> = total_map! {
        Color::Red => "stop",
        Color::Green => "go",
        Color::Blue => "?",
    };
    assert_total(&map);
    assert_eq!(map[&Color::Green], "go");
}

#[test]
fn literal_macro_order_does_not_matter() {
    let forward = total_map! { Color::Red => 0, Color::Green => 1, Color::Blue => 2 };
    let backward = total_map! { Color::Blue => 2, Color::Green => 1, Color::Red => 0 };
    assert_eq!(forward, backward);
}

#[test]
#[should_panic(expected = "total map literal is missing 1 of 3 domain keys")]
fn literal_macro_panics_when_incomplete() {
    let _map: TotalMap<Color, u8> = total_map! {
        Color::Red => 0,
        Color::Green => 1,
    };
}

#[test]
#[should_panic(expected = "missing 3 of 3")]
fn empty_literal_panics() {
    let _map: TotalMap<Color, u8> = total_map! {};
}

#[test]
fn empty_literal_is_fine_for_empty_domain() {
    let map: TotalMap<std::convert::Infallible, u8> = total_map! {};
    assert!(map.is_empty());
}
