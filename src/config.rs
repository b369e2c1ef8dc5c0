//! Engine configuration

use std::time::Duration;

use crate::{Player, WIDTH};

/// Returns an array ordering the columns from the middle outwards, left
/// before right, as the middle columns are often better moves
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    move_order
}

/// The order in which columns are explored at every search node
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchOrder {
    /// center column first, then alternating outwards
    CenterOut,
    LeftToRight,
}

impl SearchOrder {
    pub fn columns(self) -> [usize; WIDTH] {
        match self {
            SearchOrder::CenterOut => move_order(),
            SearchOrder::LeftToRight => {
                let mut columns = [0; WIDTH];
                for (i, column) in columns.iter_mut().enumerate() {
                    *column = i;
                }
                columns
            }
        }
    }
}

impl Default for SearchOrder {
    fn default() -> Self {
        SearchOrder::CenterOut
    }
}

/// Settings for a [`Searcher`](crate::Searcher)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// How many plies below the root the search may go
    pub max_depth: usize,
    pub search_order: SearchOrder,
    /// The player the engine chooses moves for
    pub ai_role: Player,
    /// Stop expanding new columns after this many nodes
    pub node_limit: Option<u64>,
    /// Stop expanding new columns once this much time has passed
    pub time_limit: Option<Duration>,
}

impl EngineConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_search_order(mut self, search_order: SearchOrder) -> Self {
        self.search_order = search_order;
        self
    }

    pub fn with_ai_role(mut self, ai_role: Player) -> Self {
        self.ai_role = ai_role;
        self
    }

    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.node_limit = Some(node_limit);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            search_order: SearchOrder::CenterOut,
            ai_role: Player::Two,
            node_limit: None,
            time_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_out_order() {
        assert_eq!(move_order(), [3, 2, 4, 1, 5, 0, 6]);
        assert_eq!(SearchOrder::LeftToRight.columns(), [0, 1, 2, 3, 4, 5, 6]);
    }
}
