//! Known generations and their successors.

use sparse_life::patterns::Pattern;
use sparse_life::{Generation, evolve};

fn cells(list: &[(i64, i64)]) -> Generation {
    list.iter().collect()
}

fn preset(name: &str) -> Generation {
    Pattern::by_name(name).expect("preset").generation()
}

fn steps(start: &Generation, n: usize) -> Generation {
    (0..n).fold(start.clone(), |g, _| g.step())
}

#[test]
fn empty_generation_is_a_fixed_point() {
    assert_eq!(evolve(&Generation::new()), Generation::new());
}

#[test]
fn block_is_a_still_life() {
    let block = cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(evolve(&block), block);
}

#[test]
fn lone_cell_dies() {
    assert!(evolve(&cells(&[(5, 5)])).is_empty());
}

#[test]
fn full_three_by_three_loses_center_and_edges() {
    let square: Vec<(i64, i64)> = (-1..=1).flat_map(|x| (-1..=1).map(move |y| (x, y))).collect();
    let next = evolve(square);
    // corners keep 3 neighbors, the middle of each outer side gains 3,
    // edges see 5 and the center sees 8
    let expected = cells(&[
        (-1, -1), (1, -1), (-1, 1), (1, 1),
        (0, -2), (0, 2), (-2, 0), (2, 0),
    ]);
    assert_eq!(next, expected);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = cells(&[(-1, 0), (0, 0), (1, 0)]);
    let vertical = cells(&[(0, -1), (0, 0), (0, 1)]);
    assert_eq!(evolve(&horizontal), vertical);
    assert_eq!(evolve(&vertical), horizontal);
}

#[test]
fn oscillators_return_to_start() {
    for (name, period) in [("toad", 2), ("beacon", 2), ("pulsar", 3)] {
        let start = preset(name);
        assert_ne!(steps(&start, 1), start, "{name} should change");
        assert_eq!(steps(&start, period), start, "{name} period {period}");
    }
}

#[test]
fn glider_moves_one_diagonal_every_four_steps() {
    let glider = preset("glider");
    assert_eq!(steps(&glider, 4), glider.translate(1, 1));
    assert_eq!(steps(&glider, 40), glider.translate(10, 10));
}

#[test]
fn spaceship_moves_two_cells_every_four_steps() {
    let ship = preset("lightweight spaceship");
    let later = steps(&ship, 4);
    assert!(later == ship.translate(-2, 0) || later == ship.translate(2, 0));
}

#[test]
fn works_far_from_the_origin() {
    let far = cells(&[(-1, 0), (0, 0), (1, 0)]).translate(-9_000_000_000_000, 4_000_000_000_000);
    assert_eq!(steps(&far, 2), far);
}

#[test]
fn duplicate_heavy_input_is_deduplicated() {
    let mut raw: Vec<(i64, i64)> = Vec::new();
    for _ in 0..5 {
        raw.extend([(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
    assert_eq!(evolve(raw), cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
}

#[test]
fn r_pentomino_settles_at_116_cells() {
    let settled = steps(&preset("r-pentomino"), 1103);
    assert_eq!(settled.len(), 116);
    assert_eq!(settled.step().len(), 116);
}

#[test]
fn gosper_gun_emits_a_glider_every_30_steps() {
    let gun = preset("gosper glider gun");
    let in_gun_box = |g: &Generation| -> Generation {
        g.iter().filter(|c| (0..=35).contains(&c.x) && (0..=8).contains(&c.y)).collect()
    };
    let mut current = gun.clone();
    for period in 1..=4 {
        current = steps(&current, 30);
        assert_eq!(in_gun_box(&current), gun, "period {period}");
        assert_eq!(current.len(), gun.len() + 5 * period, "period {period}");
    }
}
