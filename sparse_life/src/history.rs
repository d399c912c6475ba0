// history.rs - Cycle detection over recent generations

use crate::Generation;

const HISTORY_LEN: usize = 10;

/// Remembers the fingerprints of the last 10 generations it has seen.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize, // total observations, ring index is count % HISTORY_LEN
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation. Returns true if it repeats one of the last 10,
    /// i.e. the pattern is a still life or an oscillator of period <= 10.
    pub fn observe(&mut self, generation: &Generation) -> bool {
        let hash = generation.fingerprint();
        let seen = self.history.len().min(self.count);
        if self.history[..seen].contains(&hash) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = hash; // Circular buffer
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.count = 0;
    }
}
