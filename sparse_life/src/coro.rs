// coro.rs - Neighbor counting split across tokio tasks
//
// Each chunk of live cells is counted by its own task, which yields back to
// the scheduler after every cell. Partial maps are summed afterwards; the
// sum is order independent, so the result matches the sequential count.

use std::panic;

use thiserror::Error;
use tokio::task::JoinSet;

use crate::{Cell, CountToCellsMap, Generation, NeighborCountMap, apply_rule};

#[derive(Debug, Error)]
pub enum CoroError {
    #[error("counting task was cancelled before it finished")]
    Cancelled,
}

/// Chunk coroutine: count the neighbors credited by one slice of live cells.
async fn count_chunk(chunk: Vec<Cell>) -> NeighborCountMap {
    let mut partial = NeighborCountMap::new();
    for cell in chunk {
        partial.add_cells([cell]);
        tokio::task::yield_now().await; // Cooperative yielding
    }
    partial
}

/// Neighbor counts computed by one task per `chunk_size` live cells.
///
/// Must be called from inside a tokio runtime. A `chunk_size` of 0 is
/// treated as 1.
pub async fn neighbor_counts_concurrent(
    generation: &Generation,
    chunk_size: usize,
) -> Result<NeighborCountMap, CoroError> {
    let chunk_size = chunk_size.max(1);
    let live = generation.sorted();

    let mut tasks = JoinSet::new();
    for chunk in live.chunks(chunk_size) {
        tasks.spawn(count_chunk(chunk.to_vec()));
    }

    let mut counts = NeighborCountMap::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(partial) => counts.merge(partial),
            Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
            Err(_) => return Err(CoroError::Cancelled),
        }
    }
    Ok(counts)
}

/// Same result as [`crate::next_generation`], counted concurrently.
pub async fn evolve_concurrent(
    generation: &Generation,
    chunk_size: usize,
) -> Result<Generation, CoroError> {
    let counts = neighbor_counts_concurrent(generation, chunk_size).await?;
    Ok(apply_rule(generation, &CountToCellsMap::from_counts(counts)))
}
