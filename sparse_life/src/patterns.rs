// patterns.rs - Preset shapes and random soups

use crate::{Cell, Generation};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

// (x, y) with y growing downwards, anchored at the top-left of each shape
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Lightweight Spaceship",
        cells: &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Pattern {
    /// Look a preset up by name, ignoring case, spaces, `-` and `_`.
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        let wanted = normalize_name(name);
        PATTERNS.iter().find(|p| normalize_name(p.name) == wanted)
    }

    pub fn generation(&self) -> Generation {
        self.cells.iter().collect()
    }

    /// The shape shifted so its anchor sits at `(dx, dy)`.
    pub fn placed(&self, dx: i64, dy: i64) -> Generation {
        self.cells.iter().map(|&(x, y)| Cell::new(x, y).offset(dx, dy)).collect()
    }
}

/// splitmix64 finalizer: spreads nearby seeds over the whole state space.
fn mix_seed(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Pseudo-random field over `[0, width) x [0, height)`, roughly a third live.
/// The same seed gives the same soup on every platform and toolchain.
pub fn random_soup(seed_value: u64, width: u32, height: u32) -> Generation {
    // Simple pseudo-random generator
    let mut seed = mix_seed(seed_value);

    let mut soup = Generation::new();
    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if (seed >> 16) % 3 == 0 {
                soup.insert(Cell::new(x, y));
            }
        }
    }
    soup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_separators() {
        assert_eq!(Pattern::by_name("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(Pattern::by_name("lightweight-spaceship").map(|p| p.name), Some("Lightweight Spaceship"));
        assert_eq!(Pattern::by_name("GOSPER_GLIDER_GUN").map(|p| p.name), Some("Gosper Glider Gun"));
        assert!(Pattern::by_name("nope").is_none());
    }

    #[test]
    fn presets_have_no_duplicate_cells() {
        for pattern in PATTERNS {
            assert_eq!(pattern.generation().len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn placed_shifts_every_cell() {
        let glider = Pattern::by_name("glider").expect("preset");
        assert_eq!(glider.placed(-10, 4), glider.generation().translate(-10, 4));
    }

    #[test]
    fn soup_is_deterministic_and_bounded() {
        let a = random_soup(7, 20, 10);
        assert_eq!(a, random_soup(7, 20, 10));
        assert!(!a.is_empty());
        assert!(a.iter().all(|c| (0..20).contains(&c.x) && (0..10).contains(&c.y)));
        assert_ne!(a, random_soup(8, 20, 10));
    }

    #[test]
    fn soup_for_a_seed_is_pinned() {
        let expected: Generation = [
            (0, 0), (1, 0), (3, 0),
            (0, 1), (2, 1),
            (0, 2), (3, 2), (4, 2), (5, 2),
        ]
        .iter()
        .collect();
        assert_eq!(random_soup(1, 6, 3), expected);
    }
}
