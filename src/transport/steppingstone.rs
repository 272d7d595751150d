// Copyright (c) 2026 The orlib developers
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! The stepping-stone method.
//!
//! Starting from any feasible allocation, each round searches every empty
//! cell for a closed rook's-move cycle through occupied cells. Shifting
//! quantity around such a cycle keeps all row and column sums intact;
//! alternating cells receive and give. The round applies the cycle with
//! the largest strict cost reduction; the method stops when no such cycle
//! remains. Since every applied cycle strictly decreases the total cost,
//! the method always terminates.
//!
//! Degenerate allocations (fewer than `m + n - 1` occupied cells) are
//! handled gracefully: empty cells without a cycle are simply skipped.

use log::debug;

use crate::num::traits::NumAssign;

use crate::error::{Error, Result};

use super::{Allocation, Problem};

/// Improve a feasible allocation to a cost optimum.
///
/// Returns the improved allocation together with its total cost. The
/// result is a fixpoint: optimizing it again changes nothing.
///
/// Fails with [`Error::InvalidInput`] if `alloc` is not a feasible
/// allocation for `problem`.
///
/// # Example
///
/// ```
/// use orlib::transport::{northwest, optimize, Matrix, Problem};
///
/// let costs = Matrix::from_rows(vec![
///     vec![2, 3, 1],
///     vec![5, 4, 8],
///     vec![5, 6, 8],
/// ]).unwrap();
/// let p = Problem::new(vec![20, 30, 25], vec![10, 25, 40], costs).unwrap();
///
/// let (best, cost) = optimize(&p, northwest(&p)).unwrap();
/// assert_eq!(cost, 330);
/// assert!(best.is_feasible_for(&p));
/// ```
pub fn optimize<W>(problem: &Problem<W>, alloc: Allocation<W>) -> Result<(Allocation<W>, W)>
where
    W: NumAssign + Ord + Copy,
{
    run(problem, alloc, None)
}

/// Improve a feasible allocation, giving up after `limit` rounds.
///
/// Fails with [`Error::ResourceExhausted`] if an improving cycle still
/// exists after `limit` shifts have been applied.
pub fn optimize_with_limit<W>(
    problem: &Problem<W>,
    alloc: Allocation<W>,
    limit: usize,
) -> Result<(Allocation<W>, W)>
where
    W: NumAssign + Ord + Copy,
{
    run(problem, alloc, Some(limit))
}

fn run<W>(problem: &Problem<W>, mut alloc: Allocation<W>, limit: Option<usize>) -> Result<(Allocation<W>, W)>
where
    W: NumAssign + Ord + Copy,
{
    if !alloc.is_feasible_for(problem) {
        return Err(Error::InvalidInput(
            "allocation is not feasible for the problem".into(),
        ));
    }

    let (m, n) = (problem.num_sources(), problem.num_destinations());
    let costs = problem.costs();
    let mut rounds = 0;

    loop {
        // the cycle with the largest strict cost reduction over all empty
        // cells, ties broken by row-major order of the empty cell
        let mut best: Option<(W, Vec<(usize, usize)>)> = None;
        for i in 0..m {
            for j in 0..n {
                if !alloc[(i, j)].is_zero() {
                    continue;
                }
                let cycle = match find_cycle(&alloc, i, j) {
                    Some(cycle) => cycle,
                    None => continue,
                };
                let mut receiving = W::zero();
                let mut giving = W::zero();
                for (k, &(r, c)) in cycle.iter().enumerate() {
                    if k % 2 == 0 {
                        receiving += costs[(r, c)];
                    } else {
                        giving += costs[(r, c)];
                    }
                }
                // improving iff the giving cells cost strictly more
                if giving > receiving {
                    let gain = giving - receiving;
                    if best.as_ref().map_or(true, |&(bg, _)| gain > bg) {
                        best = Some((gain, cycle));
                    }
                }
            }
        }

        let cycle = match best {
            Some((_, cycle)) => cycle,
            None => break,
        };
        if let Some(l) = limit {
            if rounds >= l {
                return Err(Error::ResourceExhausted { limit: l });
            }
        }

        // shift the bottleneck of the giving cells around the cycle
        let theta = match cycle.iter().skip(1).step_by(2).map(|&at| alloc[at]).min() {
            Some(theta) => theta,
            None => break,
        };
        for (k, &at) in cycle.iter().enumerate() {
            if k % 2 == 0 {
                alloc[at] += theta;
            } else {
                alloc[at] -= theta;
            }
        }
        rounds += 1;
        debug!("stepping-stone round {}: shifted along {} cells", rounds, cycle.len());
    }

    let cost = alloc.total_cost(problem.costs());
    Ok((alloc, cost))
}

/// Search a closed cycle for the empty cell `(si, sj)`.
///
/// The cycle alternates row and column moves through occupied cells and
/// returns to the start with a final column move. A row or column already
/// on the path may not be revisited, except for the start column which is
/// re-entered by the closing pair. The search is a depth-first search with
/// an explicit stack; `next[d]` remembers the candidate index where the
/// frame at depth `d` resumes.
fn find_cycle<W>(alloc: &Allocation<W>, si: usize, sj: usize) -> Option<Vec<(usize, usize)>>
where
    W: NumAssign + Ord + Copy,
{
    let (m, n) = (alloc.nrows(), alloc.ncols());
    let mut path = vec![(si, sj)];
    let mut next = vec![0];
    let mut used_rows = vec![false; m];
    let mut used_cols = vec![false; n];
    used_rows[si] = true;

    while let Some(&(r, c)) = path.last() {
        let depth = path.len() - 1;
        // row moves from cells at even depth, column moves from odd depth
        let along_row = depth % 2 == 0;
        let end = if along_row { n } else { m };
        let mut k = next[depth];
        let mut pushed = false;

        while k < end {
            let cand = k;
            k += 1;
            if along_row {
                if cand != c && !used_cols[cand] && !alloc[(r, cand)].is_zero() {
                    next[depth] = k;
                    used_cols[cand] = true;
                    path.push((r, cand));
                    next.push(0);
                    pushed = true;
                    break;
                }
            } else if cand == si && c == sj {
                if path.len() >= 4 {
                    return Some(path);
                }
            } else if cand != r && !used_rows[cand] && !alloc[(cand, c)].is_zero() {
                next[depth] = k;
                used_rows[cand] = true;
                path.push((cand, c));
                next.push(0);
                pushed = true;
                break;
            }
        }

        if pushed {
            continue;
        }
        next.pop();
        path.pop();
        if depth % 2 == 1 {
            used_cols[c] = false;
        } else if depth > 0 {
            used_rows[r] = false;
        }
    }

    None
}
