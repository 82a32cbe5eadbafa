//! Lookups and value-only mutation.

use super::common::{assert_total, color_indices, Color};
use totalmap::{KeyDomain, TotalMap};

#[test]
fn get_returns_generated_values() {
    let map = color_indices();
    for color in Color::all() {
        assert_eq!(*map.get(&color), color.index());
        assert_eq!(map[&color], color.index());
    }
}

#[test]
fn set_changes_one_value_only() {
    let mut map = color_indices();
    map.set(Color::Red, 10);

    assert_eq!(map[&Color::Red], 10);
    assert_eq!(map[&Color::Green], 1);
    assert_eq!(map[&Color::Blue], 2);
    assert_total(&map);
}

#[test]
fn index_mut_updates_in_place() {
    let mut map = TotalMap::from_fn(|_: &Color| Vec::new());
    map[&Color::Green].push("leaf");
    map.get_mut(&Color::Green).push("lime");

    assert_eq!(map[&Color::Green], vec!["leaf", "lime"]);
    assert!(map[&Color::Red].is_empty());
}

#[test]
fn replace_hands_back_old_value() {
    let mut map = color_indices();
    let old = map.replace(&Color::Blue, 200);
    assert_eq!(old, 2);
    assert_eq!(map[&Color::Blue], 200);
}

#[test]
fn values_mut_never_changes_keys() {
    let mut map = color_indices();
    for value in map.values_mut() {
        *value += 100;
    }
    for (_, value) in &mut map {
        *value += 1;
    }

    assert_total(&map);
    assert_eq!(map[&Color::Red], 101);
}

#[test]
fn iter_domain_order_follows_all() {
    let map = color_indices();
    let keys: Vec<Color> = map.iter_domain_order().map(|(k, _)| *k).collect();
    assert_eq!(keys, Color::all());
}

#[test]
fn into_inner_gives_back_the_mapping() {
    let map = color_indices();
    let raw: std::collections::HashMap<Color, u8> = map.clone().into();
    assert_eq!(raw, map.into_inner());
}
