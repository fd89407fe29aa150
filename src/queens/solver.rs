#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Defines the core N-Queens backtracking solver.
//!
//! The solver enumerates every placement of N queens on an N×N board such
//! that no two queens share a row, column, or diagonal. It performs a
//! classical row-by-row depth-first search: each recursive call owns one row,
//! tries every column in ascending order, and descends only when the
//! candidate square does not conflict with the queens already placed above
//! it. Complete assignments are snapshotted into [`Solution`] values in the
//! order the search discovers them, which makes the output order fully
//! deterministic.
//!
//! The search threads a single mutable column buffer down the call stack by
//! exclusive borrow. The buffer always holds exactly the assigned prefix of
//! the board (its length is the current recursion depth), so there is no
//! "unset" sentinel to maintain and no per-call allocation.

use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::Display;

/// Marker character for a square occupied by a queen.
pub const QUEEN: char = 'Q';

/// Marker character for an empty square.
pub const EMPTY: char = '.';

/// The per-row column assignments of the in-progress search.
///
/// Entry `r` is the column of the queen in row `r`. Boards up to 8×8 stay
/// inline on the stack.
type Columns = SmallVec<[usize; 8]>;

/// One complete non-attacking placement, rendered as board rows.
///
/// Row `r` is a string of length N with [`QUEEN`] at the queen's column and
/// [`EMPTY`] everywhere else. A `Solution` is an immutable snapshot taken
/// when the search reaches a full assignment; it is never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution(Vec<String>);

impl Solution {
    /// Renders a fully assigned column buffer into board rows.
    fn from_columns(columns: &[usize]) -> Self {
        let n = columns.len();
        let rows = columns
            .iter()
            .map(|&queen_col| {
                (0..n)
                    .map(|col| if col == queen_col { QUEEN } else { EMPTY })
                    .collect()
            })
            .collect();

        Self(rows)
    }

    /// The board rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.0
    }

    /// The board dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Column index of the queen in each row, top to bottom.
    ///
    /// Rows without a queen marker are skipped, so a well-formed solution
    /// yields exactly [`size`](Self::size) entries.
    #[must_use]
    pub fn queen_columns(&self) -> Vec<usize> {
        self.0
            .iter()
            .filter_map(|row| row.chars().position(|c| c == QUEEN))
            .collect()
    }

    /// Checks that this board really is a valid N-Queens placement: exactly
    /// one queen per row, and no two queens sharing a column or diagonal.
    #[must_use]
    pub fn is_non_attacking(&self) -> bool {
        let n = self.size();

        let one_queen_per_row = self
            .0
            .iter()
            .all(|row| row.chars().filter(|&c| c == QUEEN).count() == 1 && row.chars().count() == n);

        if !one_queen_per_row {
            return false;
        }

        self.queen_columns()
            .iter()
            .enumerate()
            .tuple_combinations()
            .all(|((row_a, &col_a), (row_b, &col_b))| {
                col_a != col_b && row_a.abs_diff(row_b) != col_a.abs_diff(col_b)
            })
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}

impl From<Solution> for Vec<String> {
    fn from(solution: Solution) -> Self {
        solution.0
    }
}

impl From<&Solution> for Vec<String> {
    fn from(solution: &Solution) -> Self {
        solution.0.clone()
    }
}

/// Enumerates every valid N-Queens placement for an `n`×`n` board.
///
/// Returns the complete solution set in discovery order: rows are filled top
/// to bottom and columns tried in ascending order, depth first. Repeated
/// calls with the same `n` return the identical sequence. No symmetry
/// reduction is applied; rotations and reflections of the same physical
/// arrangement count as separate solutions, as in standard N-Queens
/// enumeration.
///
/// A non-positive `n` yields an empty set after a diagnostic on stderr. This
/// deliberately includes `n == 0`: the guard is uniform, so the "trivial
/// empty board" solution some conventions report for N=0 is not produced.
///
/// No upper bound on `n` is enforced; search cost grows super-exponentially,
/// so feasibility is the caller's concern.
#[must_use]
pub fn solve(n: i32) -> Vec<Solution> {
    let mut solutions = Vec::new();

    if n <= 0 {
        eprintln!("N must be a positive integer");
        return solutions;
    }

    #[allow(clippy::cast_sign_loss)]
    let n = n as usize;

    let mut columns = Columns::new();
    place(&mut columns, n, &mut solutions);

    solutions
}

/// Recursive step: assigns the row at the current depth.
///
/// The buffer length is the recursion depth; a full buffer is a complete,
/// valid assignment by construction and is snapshotted. Each accepted column
/// is pushed for the descent and popped afterwards, so a row's assignment
/// never leaks across sibling branches.
fn place(columns: &mut Columns, n: usize, solutions: &mut Vec<Solution>) {
    let row = columns.len();

    if row == n {
        solutions.push(Solution::from_columns(columns));
        return;
    }

    for col in 0..n {
        if is_safe(row, col, columns) {
            columns.push(col);
            place(columns, n, solutions);
            columns.pop();
        }
    }
}

/// Checks a candidate square against every queen already placed.
///
/// Row conflicts are impossible by construction, so only the column and the
/// two diagonals are tested.
fn is_safe(row: usize, col: usize, columns: &[usize]) -> bool {
    columns.iter().enumerate().all(|(prev_row, &prev_col)| {
        prev_col != col && row - prev_row != prev_col.abs_diff(col)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    /// Known solution counts for n = 1..=8.
    const KNOWN_COUNTS: [usize; 8] = [1, 0, 0, 2, 10, 4, 40, 92];

    #[test]
    fn test_non_positive_sizes_yield_empty() {
        assert!(solve(0).is_empty());
        assert!(solve(-1).is_empty());
        assert!(solve(-42).is_empty());
    }

    #[test]
    fn test_one_by_one_board() {
        let solutions = solve(1);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].rows(), ["Q"]);
    }

    #[test]
    fn test_two_and_three_have_no_solutions() {
        assert!(solve(2).is_empty());
        assert!(solve(3).is_empty());
    }

    #[test]
    fn test_four_by_four_boards_in_discovery_order() {
        let solutions = solve(4);

        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].rows(), [".Q..", "...Q", "Q...", "..Q."]);
        assert_eq!(solutions[1].rows(), ["..Q.", "Q...", "...Q", ".Q.."]);
    }

    #[test]
    fn test_eight_by_eight_has_ninety_two_solutions() {
        assert_eq!(solve(8).len(), 92);
    }

    #[test]
    fn test_known_counts_up_to_eight() {
        for (i, &expected) in KNOWN_COUNTS.iter().enumerate() {
            let n = i32::try_from(i).unwrap() + 1;
            assert_eq!(solve(n).len(), expected, "wrong count for n = {n}");
        }
    }

    #[test]
    fn test_all_returned_boards_are_non_attacking() {
        for n in 1..=8 {
            for solution in solve(n) {
                assert!(
                    solution.is_non_attacking(),
                    "attacking board for n = {n}:\n{solution}"
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_boards() {
        for n in 1..=8 {
            let solutions = solve(n);
            let distinct: FxHashSet<_> = solutions.iter().collect();
            assert_eq!(distinct.len(), solutions.len(), "duplicates for n = {n}");
        }
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        for n in [4, 6, 8] {
            assert_eq!(solve(n), solve(n));
        }
    }

    #[test]
    fn test_rows_have_board_dimensions() {
        for solution in solve(6) {
            assert_eq!(solution.size(), 6);
            for row in solution.rows() {
                assert_eq!(row.chars().count(), 6);
            }
        }
    }

    #[test]
    fn test_queen_columns_round_trip() {
        for solution in solve(5) {
            let columns = solution.queen_columns();
            assert_eq!(columns.len(), 5);
            for (row, &col) in columns.iter().enumerate() {
                assert_eq!(solution.rows()[row].chars().nth(col), Some(QUEEN));
            }
        }
    }

    #[test]
    fn test_display_joins_rows_with_newlines() {
        let solutions = solve(4);
        assert_eq!(solutions[0].to_string(), ".Q..\n...Q\nQ...\n..Q.");
    }

    #[test]
    fn test_is_non_attacking_rejects_bad_boards() {
        let same_column = Solution(vec!["Q...".into(), "Q...".into(), "..Q.".into(), "...Q".into()]);
        assert!(!same_column.is_non_attacking());

        let same_diagonal = Solution(vec!["Q.".into(), ".Q".into()]);
        assert!(!same_diagonal.is_non_attacking());

        let missing_queen = Solution(vec!["..".into(), ".Q".into()]);
        assert!(!missing_queen.is_non_attacking());
    }

    #[test]
    fn test_is_safe_detects_column_and_diagonal_conflicts() {
        let columns = [1_usize];

        assert!(!is_safe(1, 1, &columns)); // same column
        assert!(!is_safe(1, 0, &columns)); // falling diagonal
        assert!(!is_safe(1, 2, &columns)); // rising diagonal
        assert!(is_safe(1, 3, &columns));
    }
}
