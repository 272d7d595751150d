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

use crate::num::traits::NumAssign;

use super::{Allocation, Problem};

/// Compute an initial allocation with the Least-Cost rule.
///
/// Each step scans all cells whose source still has supply and whose
/// destination still has demand, picks the cheapest one (ties broken by
/// row-major order) and allocates the bottleneck quantity there. The
/// result exactly satisfies all supplies and demands and is usually closer
/// to the optimum than the North-West Corner solution.
///
/// # Example
///
/// ```
/// use orlib::transport::{leastcost, Matrix, Problem};
///
/// let costs = Matrix::from_rows(vec![
///     vec![2, 3, 1],
///     vec![5, 4, 8],
///     vec![5, 6, 8],
/// ]).unwrap();
/// let p = Problem::new(vec![20, 30, 25], vec![10, 25, 40], costs).unwrap();
///
/// let a = leastcost(&p);
/// assert_eq!(a[(0, 2)], 20);
/// assert_eq!(a.total_cost(p.costs()), 330);
/// ```
pub fn leastcost<W>(problem: &Problem<W>) -> Allocation<W>
where
    W: NumAssign + Ord + Copy,
{
    let (m, n) = (problem.num_sources(), problem.num_destinations());
    let costs = problem.costs();
    let mut supply = problem.supply().to_vec();
    let mut demand = problem.demand().to_vec();
    let mut alloc = Allocation::zeros(m, n);

    loop {
        let mut best: Option<(W, usize, usize)> = None;
        for i in 0..m {
            if supply[i].is_zero() {
                continue;
            }
            for j in 0..n {
                if demand[j].is_zero() {
                    continue;
                }
                let c = costs[(i, j)];
                if best.map_or(true, |(bc, _, _)| c < bc) {
                    best = Some((c, i, j));
                }
            }
        }
        let (_, i, j) = match best {
            Some(b) => b,
            None => break,
        };
        let quantity = min(supply[i], demand[j]);
        alloc[(i, j)] = quantity;
        supply[i] -= quantity;
        demand[j] -= quantity;
    }

    alloc
}
