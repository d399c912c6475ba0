// rule.rs - The evolution step: birth on 3, survival on 2 or 3

use crate::{Cell, CountToCellsMap, Generation, NeighborCountMap};

/// Next generation from any finite collection of cells.
///
/// Duplicates in `cells` are dropped before the rule is applied, so the
/// result never depends on the order or multiplicity of the input.
pub fn evolve<I, C>(cells: I) -> Generation
where
    I: IntoIterator<Item = C>,
    C: Into<Cell>,
{
    let generation: Generation = cells.into_iter().collect();
    next_generation(&generation)
}

/// Next generation of an already deduplicated set.
pub fn next_generation(generation: &Generation) -> Generation {
    let stats = CountToCellsMap::from_counts(NeighborCountMap::from_generation(generation));
    apply_rule(generation, &stats)
}

/// Cells with 3 live neighbors, plus live cells with 2.
pub fn apply_rule(generation: &Generation, stats: &CountToCellsMap) -> Generation {
    let born_or_surviving_with_3 = stats.cells(3);
    let surviving_with_2 = stats.cells(2).intersection(generation.as_set());
    born_or_surviving_with_3
        .iter()
        .chain(surviving_with_2)
        .copied()
        .collect()
}
