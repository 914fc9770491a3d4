//! Win detection
//!
//! Two rules are available:
//! - `Connectivity`: breadth-first reachability from the starting edge to the
//!   far edge through the player's stones. This is the rule games use.
//! - `Frontier`: the legacy two-phase search. A stack advances one row (Red)
//!   or column (Blue) at a time, then a greedy pass chains the visited stones
//!   by adjacency. It only sees chains whose visiting order follows the axis,
//!   so it can miss real connections. It never reports a false win.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Player};
use crate::topology::AdjacencyMap;

/// Which algorithm decides a win
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinRule {
    #[default]
    Connectivity,
    Frontier,
}

impl fmt::Display for WinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinRule::Connectivity => f.write_str("connectivity"),
            WinRule::Frontier => f.write_str("frontier"),
        }
    }
}

impl FromStr for WinRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "connectivity" | "bfs" => Ok(WinRule::Connectivity),
            "frontier" | "legacy" => Ok(WinRule::Frontier),
            other => Err(format!(
                "Unknown win rule: {} (expected connectivity or frontier)",
                other
            )),
        }
    }
}

/// Check whether `player` connects their two edges
pub fn has_won(board: &Board, adjacency: &AdjacencyMap, player: Player) -> bool {
    has_won_with(board, adjacency, player, WinRule::default())
}

/// Check for a win under an explicit rule
pub fn has_won_with(
    board: &Board,
    adjacency: &AdjacencyMap,
    player: Player,
    rule: WinRule,
) -> bool {
    debug_assert_eq!(board.size(), adjacency.size());

    match rule {
        WinRule::Connectivity => winning_path(board, adjacency, player).is_some(),
        WinRule::Frontier => frontier_has_won(board, adjacency, player),
    }
}

// ============================================================================
// CONNECTIVITY
// ============================================================================

/// Chain of the player's stones from the starting edge to the far edge
///
/// Returns the path found by a breadth-first search, starting edge first, or
/// None if the edges are not connected.
pub fn winning_path(board: &Board, adjacency: &AdjacencyMap, player: Player) -> Option<Vec<Coord>> {
    let size = board.size();
    let mut queue = VecDeque::new();
    // Start cells have no parent
    let mut parents: FxHashMap<Coord, Option<Coord>> = FxHashMap::default();

    for coord in board.stones(player).filter(|&c| player.on_start_edge(c)) {
        if player.on_end_edge(coord, size) {
            return Some(vec![coord]);
        }
        parents.insert(coord, None);
        queue.push_back(coord);
    }

    while let Some(current) = queue.pop_front() {
        for &next in adjacency.neighbors(current) {
            if parents.contains_key(&next) || !board.is_owned_by(next, player) {
                continue;
            }
            parents.insert(next, Some(current));

            if player.on_end_edge(next, size) {
                return Some(reconstruct_path(next, &parents));
            }
            queue.push_back(next);
        }
    }

    None
}

fn reconstruct_path(end: Coord, parents: &FxHashMap<Coord, Option<Coord>>) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut current = Some(end);

    while let Some(coord) = current {
        path.push(coord);
        current = parents.get(&coord).copied().flatten();
    }

    path.reverse();
    path
}

// ============================================================================
// FRONTIER (legacy)
// ============================================================================

fn frontier_has_won(board: &Board, adjacency: &AdjacencyMap, player: Player) -> bool {
    let size = board.size() as usize;
    let lines = group_lines(board, player);
    if lines.iter().all(Vec::is_empty) {
        return false;
    }

    let mut stack = lines[0].clone();
    let mut chain: Option<ChainState> = None;
    let mut visited = 0usize;

    while let Some(current) = stack.pop() {
        visited += 1;
        let state = chain.get_or_insert_with(|| ChainState::new(current));
        state.extend(adjacency, player, current);

        // Size gate: a spanning chain needs at least one stone per line
        if visited >= size && state.reached.len() == size {
            tracing::trace!(%player, visited, "frontier chain spans board");
            return true;
        }

        // Next line is pushed whole, adjacency is checked by the chain
        if let Some(next) = lines.get(player.axis(current) as usize + 1) {
            stack.extend_from_slice(next);
        }
    }

    tracing::trace!(%player, visited, "frontier search exhausted");
    false
}

/// Player's stones per row (Red) or column (Blue)
///
/// Each line is ordered by the other axis descending, so the lowest one is
/// popped first.
fn group_lines(board: &Board, player: Player) -> Vec<Vec<Coord>> {
    let mut lines = vec![Vec::new(); board.size() as usize];
    for coord in board.stones(player) {
        lines[player.axis(coord) as usize].push(coord);
    }
    for line in &mut lines {
        line.sort_by(|a, b| player.cross_axis(*b).cmp(&player.cross_axis(*a)));
    }
    lines
}

/// Greedy chain over the visit order, collecting axis indices reached
///
/// The chain starts at the first popped stone and moves to each later
/// stone adjacent to its current head. Visits only ever append, so the
/// state is updated once per pop.
struct ChainState {
    head: Coord,
    reached: BTreeSet<u8>,
}

impl ChainState {
    fn new(first: Coord) -> Self {
        Self {
            head: first,
            reached: BTreeSet::from([0u8]),
        }
    }

    fn extend(&mut self, adjacency: &AdjacencyMap, player: Player, node: Coord) {
        if node != self.head && adjacency.are_adjacent(self.head, node) {
            self.reached.insert(player.axis(node));
            self.head = node;
        }
    }
}
