use std::collections::HashMap;

use proptest::prelude::*;
use proptest::proptest;

use raykin_physics::V2;

use crate::*;

#[derive(Eq, PartialEq, Hash, Debug)]
struct TestTile(u16);

impl TileTrait for TestTile {}

/// Checks the tilemap against a dense hashmap, which is obviously correct.
fn fuzz_tilemap_impl(tiles: Vec<(u16, u16, u16)>) -> proptest::test_runner::TestCaseResult {
    let mut authoritative = HashMap::new();
    let mut testing = Tilemap::new(TestTile(0));

    for (x, y, t) in tiles.iter().cloned() {
        authoritative.insert(V2::new(x, y), t);
        testing.set(V2::new(x, y), TestTile(t));
        prop_assert_eq!(testing.get(V2::new(x, y)).0, t);
    }

    for (coord, t) in authoritative.iter() {
        prop_assert_eq!(testing.get(*coord).0, *t);
    }

    let non_default = authoritative.values().filter(|t| **t != 0).count();
    prop_assert_eq!(testing.iter().count(), non_default);

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..Default::default()
    })]
    #[test]
    fn fuzz_tilemap_small(
        tiles in proptest::collection::vec((0..100u16, 0..100u16, 0..100u16), 0..1000usize),
    ) {
        fuzz_tilemap_impl(tiles)?;
    }

    // Tiles taking on two values, one of them the default, so that tiles get removed as well as set.
    #[test]
    fn fuzz_tilemap_binary(
        tiles in proptest::collection::vec((0..50u16, 0..50u16, 0..=1u16), 0..1000usize),
    ) {
        fuzz_tilemap_impl(tiles)?;
    }
}

#[test]
fn test_from_ascii() {
    let map = Tilemap::from_ascii(concat!(
        "..3.\n", //
        "==..\n", //
        "####\n",
    ))
    .unwrap();
    assert_eq!(*map.get(V2::new(0, 0)), BasicTile::Solid);
    assert_eq!(*map.get(V2::new(3, 0)), BasicTile::Solid);
    assert_eq!(*map.get(V2::new(1, 1)), BasicTile::OneWayPlatform);
    assert_eq!(*map.get(V2::new(2, 1)), BasicTile::Empty);
    assert_eq!(*map.get(V2::new(2, 2)), BasicTile::Trigger { layer: 3 });
    assert_eq!(*map.get(V2::new(40, 40)), BasicTile::Empty);
    assert_eq!(map.iter().count(), 7);
}

#[test]
fn test_from_ascii_rejects_unknown() {
    let err = Tilemap::from_ascii("..\n.x").err().unwrap();
    assert!(matches!(
        err,
        TilemapError::UnknownTile {
            ch: 'x',
            line: 1,
            column: 1
        }
    ));
}
