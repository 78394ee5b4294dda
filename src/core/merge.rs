//! Merge module - cluster detection and cascade resolution
//!
//! A cluster is a maximal 4-connected region of equal-valued dice. Clusters of
//! size >= 3 merge: every cell clears and the first-discovered cell receives a
//! die one level higher (level-5 clusters vanish instead). Rounds repeat until
//! a full scan finds nothing, because promoted dice can form new clusters.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::{
    Coord, Counters, BOARD_CELLS, BOARD_SIZE, MAX_LEVEL, MIN_CLUSTER, TOP_MERGE_LEVEL,
};

/// Scratch buffer for one cluster; bounded by the board size
pub type Cluster = ArrayVec<Coord, BOARD_CELLS>;

/// Visited grid shared across one resolution pass
pub type VisitedGrid = [[bool; BOARD_SIZE]; BOARD_SIZE];

const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Outcome of one `resolve_merges` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Individual merges applied across all rounds
    pub merges: u32,
    /// Completed scan-and-merge rounds (the chain length)
    pub rounds: u32,
}

/// Flood-fill the maximal 4-connected region of cells equal to `value`
/// reachable from `start`, marking cells in `visited` as they are taken.
/// The start cell is always the cluster's first element. Does not mutate
/// the board.
pub fn find_cluster(
    board: &Board,
    start: Coord,
    value: u8,
    visited: &mut VisitedGrid,
) -> Cluster {
    let mut stack: ArrayVec<Coord, BOARD_CELLS> = ArrayVec::new();
    let mut cluster = Cluster::new();
    visited[start.0][start.1] = true;
    stack.push(start);

    while let Some((row, col)) = stack.pop() {
        cluster.push((row, col));
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || r >= BOARD_SIZE as isize || c < 0 || c >= BOARD_SIZE as isize {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            if visited[r][c] || board.get(r, c) != Some(value) {
                continue;
            }
            visited[r][c] = true;
            stack.push((r, c));
        }
    }
    cluster
}

/// Resolve all merges on the board, cascading until a fixed point.
///
/// Each round scans row-major, collects every qualifying cluster, then
/// applies them all at once - a promoted die can only join a new cluster in
/// the next round, never the one that created it. Updates the removal,
/// merge, and chain counters; the caller applies the score (+1 per merge).
pub fn resolve_merges(board: &mut Board, counters: &mut Counters) -> MergeReport {
    let mut report = MergeReport::default();

    loop {
        let mut visited: VisitedGrid = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut merges: ArrayVec<(u8, Cluster), { BOARD_CELLS / MIN_CLUSTER }> = ArrayVec::new();

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if visited[row][col] {
                    continue;
                }
                let value = match board.get(row, col) {
                    Some(v) if v != 0 => v,
                    _ => continue,
                };
                let cluster = find_cluster(board, (row, col), value, &mut visited);
                if cluster.len() >= MIN_CLUSTER {
                    merges.push((value, cluster));
                }
            }
        }

        if merges.is_empty() {
            break;
        }
        report.rounds += 1;

        for (value, cluster) in &merges {
            let survivor = cluster[0];
            for &(row, col) in cluster {
                board.set(row, col, 0);
            }
            counters.removed += cluster.len() as u32;

            if *value < TOP_MERGE_LEVEL {
                let promoted = value + 1;
                board.set(survivor.0, survivor.1, promoted);
                if promoted == 3 {
                    counters.merged_to3 += 1;
                }
                if promoted == MAX_LEVEL {
                    counters.level6_created += 1;
                }
            } else {
                counters.level5_cleared += 1;
            }

            counters.merged_any += 1;
            report.merges += 1;
        }
    }

    if report.rounds >= 2 {
        counters.chain2 += 1;
    }
    report
}

/// True when no qualifying cluster remains (the `resolve_merges` fixed point)
pub fn is_merge_free(board: &Board) -> bool {
    let mut visited: VisitedGrid = [[false; BOARD_SIZE]; BOARD_SIZE];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if visited[row][col] {
                continue;
            }
            let value = match board.get(row, col) {
                Some(v) if v != 0 => v,
                _ => continue,
            };
            if find_cluster(board, (row, col), value, &mut visited).len() >= MIN_CLUSTER {
                return false;
            }
        }
    }
    true
}
