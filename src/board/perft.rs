//! perft, or Performance Test, Move Path Enumeration, tests the correctness of move-generation.
//!
//! Use these functions on a [`Board`] to test that the correct amount of leaf nodes are created.
//!
//! A [`PerftTable`] can optionally be supplied to memoize leaf counts keyed on the position's
//! Zobrist hash and the remaining depth, trading memory for time on repeated or transposing
//! positions.
//!
//! [`Board`]: ../struct.Board.html
//! [`PerftTable`]: struct.PerftTable.html

use super::{Board, MoveList};
use std::mem;

/// Default size (in bytes) of a [`PerftTable`] created via [`PerftTable::new`].
///
/// [`PerftTable`]: struct.PerftTable.html
/// [`PerftTable::new`]: struct.PerftTable.html#method.new
pub const DEFAULT_PERFT_TABLE_BYTES: usize = 256 * 1024 * 1024;

#[derive(Clone, Copy)]
struct PerftEntry {
    key: u64,
    count: u64,
    depth: u8,
    valid: bool,
}

impl Default for PerftEntry {
    fn default() -> Self {
        PerftEntry {
            key: 0,
            count: 0,
            depth: 0,
            valid: false,
        }
    }
}

/// A direct-mapped, always-replace cache of leaf-node counts for [`perft`], keyed on
/// `(zobrist key, remaining depth)`.
///
/// Each slot is picked by `key % capacity`; a colliding insert simply overwrites whatever
/// was there. Not thread safe -- intended for single-threaded perft runs.
///
/// [`perft`]: fn.perft.html
pub struct PerftTable {
    table: Vec<PerftEntry>,
    capacity: usize,
}

impl PerftTable {
    /// Creates a table sized to [`DEFAULT_PERFT_TABLE_BYTES`] (256 MiB).
    ///
    /// [`DEFAULT_PERFT_TABLE_BYTES`]: constant.DEFAULT_PERFT_TABLE_BYTES.html
    pub fn new() -> Self {
        PerftTable::with_capacity_bytes(DEFAULT_PERFT_TABLE_BYTES)
    }

    /// Creates a table sized to hold roughly `bytes` worth of entries.
    pub fn with_capacity_bytes(bytes: usize) -> Self {
        let capacity = (bytes / mem::size_of::<PerftEntry>()).max(1);
        PerftTable {
            table: vec![PerftEntry::default(); capacity],
            capacity,
        }
    }

    #[inline(always)]
    fn slot(&self, key: u64) -> usize {
        (key as usize) % self.capacity
    }

    /// Looks up a previously stored leaf count for `key` at exactly `depth`.
    pub fn probe(&self, key: u64, depth: u16) -> Option<u64> {
        let entry = unsafe { self.table.get_unchecked(self.slot(key)) };
        if entry.valid && entry.key == key && entry.depth == depth as u8 {
            Some(entry.count)
        } else {
            None
        }
    }

    /// Stores (or overwrites) the leaf count for `key` at `depth`.
    pub fn insert(&mut self, key: u64, depth: u16, count: u64) {
        let idx = self.slot(key);
        let entry = unsafe { self.table.get_unchecked_mut(idx) };
        *entry = PerftEntry {
            key,
            count,
            depth: depth as u8,
            valid: true,
        };
    }
}

impl Default for PerftTable {
    fn default() -> Self {
        PerftTable::new()
    }
}

/// Holds all information about the number of nodes counted.
pub struct PerftNodes {
    /// Total number of nodes counted.
    pub nodes: u64,
    /// Number of capturing moves, including en-passant moves.
    pub captures: u64,
    /// Number of En-Passant moves.
    pub en_passant: u64,
    /// Number of Castles.
    pub castles: u64,
    /// The number of promotions
    pub promotions: u64,
    /// The number of checking moves.
    pub checks: u64,
    /// The number of moves resulting in a checkmate.
    pub checkmates: u64,
}

impl Default for PerftNodes {
    fn default() -> Self {
        PerftNodes {
            nodes: 0,
            captures: 0,
            en_passant: 0,
            castles: 0,
            promotions: 0,
            checks: 0,
            checkmates: 0,
        }
    }
}

impl PerftNodes {
    /// Checks for the correct number of nodes in each category. If the results don't
    /// match, panics with an error-message containing the failed checks.
    pub fn check(
        &self,
        nodes: u64,
        captures: u64,
        en_passant: u64,
        castles: u64,
        promotions: u64,
        checks: u64,
        checkmates: u64,
    ) {
        if self.captures != captures
            || self.en_passant != en_passant
            || self.promotions != promotions
            || self.checks != checks
            || self.checkmates != checkmates
            || self.castles != castles
            || self.nodes != nodes
        {
            panic!(
                "\n Perft did not return the correct results!\
            \n total nodes {}, expected: {}, difference: {}\
            \n captures {}, expected: {}, difference: {}\
            \n en_passant {}, expected: {}, difference: {}\
            \n promotions {}, expected: {}, difference: {}\
            \n checks {}, expected: {}, difference: {}\
            \n checkmates {}, expected: {}, difference: {}\
            \n castles {}, expected: {}, difference: {}\n",
                self.nodes,
                nodes,
                nodes - self.nodes,
                self.captures,
                captures,
                captures as i64 - self.captures as i64,
                self.en_passant,
                en_passant,
                en_passant as i64 - self.en_passant as i64,
                self.promotions,
                promotions,
                promotions as i64 - self.promotions as i64,
                self.checks,
                checks,
                checks as i64 - self.checks as i64,
                self.checkmates,
                checkmates as i64,
                checkmates as i64 - self.checkmates as i64,
                self.castles,
                castles,
                castles as i64 - self.castles as i64
            );
        }
    }
}

/// Returns the number of leaf nodes from generating moves to a certain depth.
pub fn perft(board: &Board, depth: u16) -> u64 {
    if depth == 0 {
        1
    } else {
        let mut pos = board.shallow_clone();
        inner_perft(&mut pos, depth)
    }
}

/// Returns the number of leaf nodes from generating moves to a certain depth, memoizing
/// leaf counts for each `(zobrist key, depth)` pair into `table`.
pub fn perft_with_table(board: &Board, depth: u16, table: &mut PerftTable) -> u64 {
    if depth == 0 {
        1
    } else {
        let mut pos = board.shallow_clone();
        inner_perft_memo(&mut pos, depth, table)
    }
}

fn inner_perft_memo(board: &mut Board, depth: u16, table: &mut PerftTable) -> u64 {
    if let Some(count) = table.probe(board.zobrist(), depth) {
        return count;
    }

    let moves: MoveList = board.generate_moves();
    let count = if depth == 1 {
        moves.len() as u64
    } else {
        let mut count: u64 = 0;
        for mov in moves {
            board.apply_move(mov);
            count += inner_perft_memo(board, depth - 1, table);
            board.undo_move();
        }
        count
    };

    table.insert(board.zobrist(), depth, count);
    count
}

/// Returns the count of all move types for the leaf nodes up to a certain depth.
pub fn perft_all(board: &Board, depth: u16) -> PerftNodes {
    let mut b = board.shallow_clone();
    let mut perft = PerftNodes::default();
    inner_perft_all(&mut b, depth, &mut perft);
    perft
}

fn inner_perft(board: &mut Board, depth: u16) -> u64 {
    let moves: MoveList = board.generate_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut count: u64 = 0;

    for mov in moves {
        board.apply_move(mov);
        count += inner_perft(board, depth - 1);
        board.undo_move();
    }

    count
}

fn inner_perft_all(board: &mut Board, depth: u16, perft: &mut PerftNodes) {
    let moves: MoveList = board.generate_moves();

    if depth == 0 {
        perft.nodes += 1;
        if board.in_check() {
            perft.checks += 1;
            if moves.is_empty() {
                perft.checkmates += 1;
            }
        }
    } else {
        for mov in moves {
            if depth == 1 {
                if mov.is_capture() {
                    perft.captures += 1
                }
                if mov.is_en_passant() {
                    perft.en_passant += 1
                }
                if mov.is_castle() {
                    perft.castles += 1
                }
                if mov.is_promo() {
                    perft.promotions += 1
                }
            }
            board.apply_move(mov);
            inner_perft_all(board, depth - 1, perft);
            board.undo_move();
        }
    }
}
