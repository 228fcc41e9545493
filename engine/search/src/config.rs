//! Search budget parameters.

/// Configuration for the minimax engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimaxConfig {
    /// Search horizon in placements. Piece hand-offs are free.
    pub depth: u32,

    /// Tighten alpha/beta bounds while searching. When off, every node is
    /// searched with the full `[-1, 1]` window and no cutoff is taken; the
    /// root decision is identical, only the node count differs.
    pub pruning: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            pruning: true,
        }
    }
}

impl MinimaxConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            depth: 1,
            pruning: true,
        }
    }

    /// Builder pattern: set search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Builder pattern: enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}

/// Configuration for the flat Monte Carlo engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Random playouts run for each candidate decision.
    pub num_matches: u32,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self { num_matches: 20 }
    }
}

impl MonteCarloConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self { num_matches: 4 }
    }

    /// Builder pattern: set playouts per candidate.
    pub fn with_num_matches(mut self, n: u32) -> Self {
        self.num_matches = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinimaxConfig::default();
        assert_eq!(config.depth, 2);
        assert!(config.pruning);
        assert_eq!(MonteCarloConfig::default().num_matches, 20);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MinimaxConfig::default().with_depth(4).with_pruning(false);
        assert_eq!(config.depth, 4);
        assert!(!config.pruning);

        let config = MonteCarloConfig::for_testing().with_num_matches(100);
        assert_eq!(config.num_matches, 100);
    }
}
