pub mod bfs;

pub use bfs::solve;

/// Search bounds for the shortest-sequence solver.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Longest move sequence considered.
    pub max_depth: u8,
    /// Cap on expanded states before giving up.
    pub max_nodes: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            // Any pair over <= 8 animals is reachable well within this when
            // the full vocabulary is allowed.
            max_depth: 32,
            max_nodes: 1_000_000,
        }
    }
}
