//! Wire shape and decoding policy.

use super::common::{color_indices, Color};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use totalmap::serialization::unchecked::Unchecked;
use totalmap::TotalMap;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Palette {
    name: String,
    weights: TotalMap<Color, u8>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LegacyPalette {
    #[serde(with = "totalmap::serialization::unchecked")]
    weights: TotalMap<Color, u8>,
}

#[test]
fn encoding_matches_raw_hashmap_encoding() {
    let map = color_indices();
    let raw: HashMap<Color, u8> = map.clone().into_inner();

    assert_eq!(
        serde_json::to_value(&map).unwrap(),
        serde_json::to_value(&raw).unwrap()
    );
}

#[test]
fn decode_roundtrip_preserves_the_map() {
    let palette = Palette {
        name: "primary".to_string(),
        weights: color_indices(),
    };

    let json = serde_json::to_string(&palette).unwrap();
    let decoded: Palette = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, palette);
}

#[test]
fn checked_decode_fails_on_schema_drift() {
    // Written before Blue existed
    let json = r#"{"name":"old","weights":{"Red":1,"Green":2}}"#;
    let err = serde_json::from_str::<Palette>(json).unwrap_err();
    assert!(err.to_string().contains("missing 1 of 3 domain keys"));
}

#[test]
fn unchecked_decode_keeps_the_gap() {
    let json = r#"{"weights":{"Red":1,"Green":2}}"#;
    let legacy: LegacyPalette = serde_json::from_str(json).unwrap();

    assert!(!legacy.weights.is_complete());
    assert_eq!(legacy.weights.missing_keys(), vec![Color::Blue]);
    assert_eq!(legacy.weights.keys().count(), 2);
    assert_eq!(legacy.weights[&Color::Red], 1);
}

#[test]
fn unchecked_map_can_be_repaired() {
    let Unchecked(mut map) =
        serde_json::from_str::<Unchecked<Color, u8>>(r#"{"Green":5}"#).unwrap();
    for color in map.missing_keys() {
        map.set(color, 0);
    }

    assert!(map.is_complete());
    assert_eq!(TotalMap::try_from_map(map.into_inner()).unwrap()[&Color::Green], 5);
}

#[test]
fn unchecked_encoding_is_the_same_wire_shape() {
    let map = color_indices();
    let checked = serde_json::to_value(&map).unwrap();
    let lax = serde_json::to_value(Unchecked(map)).unwrap();
    assert_eq!(checked, lax);
}
