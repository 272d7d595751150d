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

/// Compute an initial allocation with the North-West Corner rule.
///
/// Starting at the top-left cell, each step allocates the minimum of the
/// remaining supply of the current source and the remaining demand of the
/// current destination, then advances past every exhausted source row and
/// destination column (both at once if the step zeroed both). Costs are
/// ignored entirely.
///
/// The result exactly satisfies all supplies and demands.
///
/// # Example
///
/// ```
/// use orlib::transport::{northwest, Matrix, Problem};
///
/// let costs = Matrix::filled(3, 3, 1);
/// let p = Problem::new(vec![20, 30, 25], vec![10, 25, 40], costs).unwrap();
/// let a = northwest(&p);
///
/// assert_eq!(a[(0, 0)], 10);
/// assert_eq!(a[(0, 1)], 10);
/// assert_eq!(a[(1, 1)], 15);
/// assert_eq!(a[(1, 2)], 15);
/// assert_eq!(a[(2, 2)], 25);
/// ```
pub fn northwest<W>(problem: &Problem<W>) -> Allocation<W>
where
    W: NumAssign + Ord + Copy,
{
    let (m, n) = (problem.num_sources(), problem.num_destinations());
    let mut supply = problem.supply().to_vec();
    let mut demand = problem.demand().to_vec();
    let mut alloc = Allocation::zeros(m, n);

    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        let quantity = min(supply[i], demand[j]);
        alloc[(i, j)] = quantity;
        supply[i] -= quantity;
        demand[j] -= quantity;
        if supply[i].is_zero() {
            i += 1;
        }
        if demand[j].is_zero() {
            j += 1;
        }
    }

    alloc
}

#[cfg(test)]
mod tests {
    use super::northwest;
    use crate::transport::{Matrix, Problem};

    #[test]
    fn sums_match_supply_and_demand() {
        let costs = Matrix::filled(3, 4, 7);
        let p = Problem::new(vec![15, 25, 10], vec![5, 15, 15, 15], costs).unwrap();
        let a = northwest(&p);
        assert!(a.is_feasible_for(&p));
    }

    #[test]
    fn cell_zeroing_both_advances_diagonally() {
        let costs = Matrix::filled(2, 2, 1);
        let p = Problem::new(vec![10, 10], vec![10, 10], costs).unwrap();
        let a = northwest(&p);
        assert_eq!(a[(0, 0)], 10);
        assert_eq!(a[(0, 1)], 0);
        assert_eq!(a[(1, 0)], 0);
        assert_eq!(a[(1, 1)], 10);
        assert_eq!(a.occupied().count(), 2);
    }
}
