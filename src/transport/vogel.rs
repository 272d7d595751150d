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

use std::cmp::min;

use either::Either;

use crate::num::traits::NumAssign;

use super::{Allocation, Problem};

/// Compute an initial allocation with Vogel's Approximation method.
///
/// Each round assigns a *penalty* to every source row and destination
/// column with remaining capacity: the difference between its two cheapest
/// still-available costs (zero if only one candidate cell remains). The
/// line with the highest penalty is served first — a large penalty means a
/// large extra cost if its cheapest cell is lost. Ties prefer rows over
/// columns, then the lowest index. Within the chosen line the cheapest
/// available cell (lowest index on ties) receives the bottleneck quantity.
///
/// The result exactly satisfies all supplies and demands.
///
/// # Example
///
/// ```
/// use orlib::transport::{vogel, Matrix, Problem};
///
/// let costs = Matrix::from_rows(vec![
///     vec![2, 3, 1],
///     vec![5, 4, 8],
///     vec![5, 6, 8],
/// ]).unwrap();
/// let p = Problem::new(vec![20, 30, 25], vec![10, 25, 40], costs).unwrap();
///
/// let a = vogel(&p);
/// assert_eq!(a[(0, 2)], 20);
/// assert_eq!(a[(1, 1)], 25);
/// assert_eq!(a.total_cost(p.costs()), 330);
/// ```
pub fn vogel<W>(problem: &Problem<W>) -> Allocation<W>
where
    W: NumAssign + Ord + Copy,
{
    let (m, n) = (problem.num_sources(), problem.num_destinations());
    let costs = problem.costs();
    let mut supply = problem.supply().to_vec();
    let mut demand = problem.demand().to_vec();
    let mut alloc = Allocation::zeros(m, n);

    loop {
        // the line (row or column) with the highest penalty
        let mut best: Option<(W, Either<usize, usize>)> = None;
        for i in 0..m {
            if supply[i].is_zero() {
                continue;
            }
            let row = (0..n).filter(|&j| !demand[j].is_zero()).map(|j| costs[(i, j)]);
            if let Some(pen) = penalty(row) {
                if best.as_ref().map_or(true, |&(bp, _)| pen > bp) {
                    best = Some((pen, Either::Left(i)));
                }
            }
        }
        for j in 0..n {
            if demand[j].is_zero() {
                continue;
            }
            let col = (0..m).filter(|&i| !supply[i].is_zero()).map(|i| costs[(i, j)]);
            if let Some(pen) = penalty(col) {
                if best.as_ref().map_or(true, |&(bp, _)| pen > bp) {
                    best = Some((pen, Either::Right(j)));
                }
            }
        }
        let line = match best {
            Some((_, line)) => line,
            None => break,
        };

        // the cheapest available cell of that line
        let cell = match line {
            Either::Left(i) => (0..n)
                .filter(|&j| !demand[j].is_zero())
                .min_by_key(|&j| costs[(i, j)])
                .map(|j| (i, j)),
            Either::Right(j) => (0..m)
                .filter(|&i| !supply[i].is_zero())
                .min_by_key(|&i| costs[(i, j)])
                .map(|i| (i, j)),
        };
        let (i, j) = match cell {
            Some(cell) => cell,
            None => break,
        };

        let quantity = min(supply[i], demand[j]);
        alloc[(i, j)] = quantity;
        supply[i] -= quantity;
        demand[j] -= quantity;
    }

    alloc
}

/// The difference between the two smallest costs, zero for a single
/// candidate, `None` for an empty line.
fn penalty<W>(costs: impl Iterator<Item = W>) -> Option<W>
where
    W: NumAssign + Ord + Copy,
{
    let mut lowest: Option<(W, Option<W>)> = None;
    for c in costs {
        lowest = Some(match lowest {
            None => (c, None),
            Some((first, _)) if c < first => (c, Some(first)),
            Some((first, second)) => (first, Some(second.map_or(c, |s| min(s, c)))),
        });
    }
    lowest.map(|(first, second)| second.map_or(W::zero(), |s| s - first))
}
