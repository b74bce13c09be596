//! Run with: `cargo test --test end_to_end`

use hexgrid::{Cell, Grid, Map, Occupant, Vector};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

fn cell(row: i32, col: i32) -> Cell {
    Cell::new(row, col)
}

#[test]
fn test_small_map_scenario() {
    let map = Map::new(5, 5).unwrap();
    assert!(map.valid_cell(cell(0, 0)));
    assert!(!map.valid_cell(cell(-1, 0)));
    assert_eq!(cell(5, 3).distance(cell(9, 5)), 4);

    let map = Map::new(8, 8).unwrap();
    let neighbors: HashSet<_> = map.neighbors(cell(1, 1)).collect();
    let expect: HashSet<_> = vec![cell(0, 0), cell(1, 0), cell(2, 1), cell(2, 2), cell(1, 2)]
        .into_iter()
        .collect();
    assert_eq!(neighbors, expect);
}

#[test]
fn test_direction_ties_reach_both_outcomes() {
    let mut rng = StdRng::seed_from_u64(42);
    let origin = cell(0, 0);
    assert_eq!(origin.direction_to_with(cell(2, 0), &mut rng), Vector::new(1, 0));

    let candidates = [Vector::new(1, 0), Vector::new(0, -1)];
    let seen: HashSet<_> = (0..100)
        .map(|_| origin.direction_to_with(cell(1, -1), &mut rng))
        .collect();
    assert!(seen.iter().all(|outcome| candidates.contains(outcome)));
    assert_eq!(seen.len(), 2);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Visibility {
    Obscured,
    Seen,
    Visible,
}

/// Fog of war: everything starts obscured, a wide ring is seen and a close ring visible.
#[test]
fn test_fog_layering() {
    let map = Map::new(5, 5).unwrap();
    let mut fog = Grid::new(Visibility::Obscured);
    let scout = cell(3, 2);

    for cell in map.spread(scout, 2) {
        fog.set(cell, Visibility::Seen);
    }
    for cell in map.spread(scout, 1) {
        fog.set(cell, Visibility::Visible);
    }

    let visible = map.cells().filter(|&c| fog[c] == Visibility::Visible).count();
    let seen = map.cells().filter(|&c| fog[c] == Visibility::Seen).count();
    let obscured = map.cells().filter(|&c| fog[c] == Visibility::Obscured).count();

    assert_eq!(visible, 7);
    assert_eq!(visible + seen, map.spread(scout, 2).len());
    assert_eq!(visible + seen + obscured, 25);
    assert_eq!(fog[cell(2, 4)], Visibility::Obscured);
}

#[derive(Debug, Clone, PartialEq)]
struct Unit {
    name: &'static str,
}

#[test]
fn test_targets_in_cone() {
    let map = Map::new(8, 8).unwrap();
    let mut units = Grid::new(None);
    let archer = Some(Unit { name: "archer" });
    let orc = Some(Unit { name: "orc" });
    let goblin = Some(Unit { name: "goblin" });
    let troll = Some(Unit { name: "troll" });

    units.set(cell(3, 2), archer.clone());
    units.set(cell(3, 3), orc.clone());
    units.set(cell(5, 4), goblin.clone());
    units.set(cell(1, 2), troll.clone());

    let origin = archer.position(&units).unwrap();
    let targets = units.items_for(map.cone(origin, 0, 2).into_iter().filter(|&c| c != origin));

    let names: HashSet<_> = targets
        .values()
        .filter_map(|unit| unit.as_ref().map(|unit| unit.name))
        .collect();
    let expect: HashSet<_> = vec!["orc", "goblin"].into_iter().collect();
    assert_eq!(names, expect);

    assert_eq!(troll.position(&units), Some(cell(1, 2)));
    units.remove(cell(1, 2));
    assert_eq!(troll.position(&units), None);
    assert!(units[cell(1, 2)].is_none());
}

#[test]
fn test_charge_along_line() {
    let map = Map::new(8, 8).unwrap();
    let mut units = Grid::new(None);
    units.set(cell(6, 3), Some(Unit { name: "wall" }));

    let knight = cell(3, 3);
    let path = map.line(knight, 2, 5);
    // the knight stops in front of the first occupied cell
    let stop_at = path
        .iter()
        .skip(1)
        .position(|&c| units.get(c).is_some())
        .map(|blocked| path[blocked]);
    assert_eq!(stop_at, Some(cell(5, 3)));
}
