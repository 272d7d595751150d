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

//! Solvers for the classical transportation problem.
//!
//! A [`Problem`] consists of a supply per source, a demand per destination
//! and a cost matrix. The [`northwest`], [`leastcost`] and [`vogel`]
//! heuristics each produce a feasible initial [`Allocation`]; the
//! stepping-stone method ([`optimize`]) improves any feasible allocation
//! until no cost-reducing exchange cycle remains.
//!
//! Only balanced problems (total supply equal to total demand) are
//! accepted; [`Problem::balanced`] pads an unbalanced instance with an
//! explicit zero-cost dummy source or destination.
//!
//! # Example
//!
//! ```
//! use orlib::transport::{self, Matrix, Problem};
//!
//! let costs = Matrix::from_rows(vec![
//!     vec![2, 3, 1],
//!     vec![5, 4, 8],
//!     vec![5, 6, 8],
//! ]).unwrap();
//! let p = Problem::new(vec![20, 30, 25], vec![10, 25, 40], costs).unwrap();
//!
//! let initial = transport::northwest(&p);
//! assert_eq!(initial.total_cost(p.costs()), 430);
//!
//! let (best, cost) = transport::optimize(&p, initial).unwrap();
//! assert_eq!(cost, 330);
//! assert!(best.is_feasible_for(&p));
//! ```

use std::ops::{Index, IndexMut};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use crate::num::traits::NumAssign;

use crate::error::{Error, Result};

mod leastcost;
mod northwest;
mod steppingstone;
mod vogel;

pub use self::leastcost::leastcost;
pub use self::northwest::northwest;
pub use self::steppingstone::{optimize, optimize_with_limit};
pub use self::vogel::vogel;

/// A dense row-major matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix<W> {
    nrows: usize,
    ncols: usize,
    data: Vec<W>,
}

impl<W: Copy> Matrix<W> {
    /// Create an `nrows` by `ncols` matrix with every entry set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: W) -> Self {
        Matrix {
            nrows,
            ncols,
            data: vec![value; nrows * ncols],
        }
    }

    /// Create a matrix from a list of equally long rows.
    ///
    /// Fails with [`Error::InvalidInput`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(Error::InvalidInput("matrix rows differ in length".into()));
        }
        Ok(Matrix {
            nrows,
            ncols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    fn push_row(&mut self, value: W) {
        self.data.extend(std::iter::repeat(value).take(self.ncols));
        self.nrows += 1;
    }

    fn push_col(&mut self, value: W) {
        let mut data = Vec::with_capacity(self.nrows * (self.ncols + 1));
        for row in self.data.chunks(self.ncols) {
            data.extend_from_slice(row);
            data.push(value);
        }
        self.ncols += 1;
        self.data = data;
    }
}

impl<W> Matrix<W> {
    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<W> Index<(usize, usize)> for Matrix<W> {
    type Output = W;

    fn index(&self, (i, j): (usize, usize)) -> &W {
        &self.data[i * self.ncols + j]
    }
}

impl<W> IndexMut<(usize, usize)> for Matrix<W> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut W {
        &mut self.data[i * self.ncols + j]
    }
}

/// A balanced transportation problem.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Problem<W> {
    supply: Vec<W>,
    demand: Vec<W>,
    costs: Matrix<W>,
}

impl<W> Problem<W>
where
    W: NumAssign + Ord + Copy,
{
    /// Create a balanced transportation problem.
    ///
    /// `costs` must have one row per supply entry and one column per demand
    /// entry; all quantities and costs must be non-negative. Fails with
    /// [`Error::Unbalanced`] if the supply and demand totals differ (see
    /// [`Problem::balanced`] for explicit dummy padding).
    pub fn new(supply: Vec<W>, demand: Vec<W>, costs: Matrix<W>) -> Result<Self> {
        validate(&supply, &demand, &costs)?;
        if total(&supply) != total(&demand) {
            return Err(Error::Unbalanced);
        }
        Ok(Problem { supply, demand, costs })
    }

    /// Create a problem, balancing it with a zero-cost dummy if necessary.
    ///
    /// A supply surplus is absorbed by an additional destination, a demand
    /// surplus by an additional source; the padding is visible in the shape
    /// of the returned problem.
    pub fn balanced(mut supply: Vec<W>, mut demand: Vec<W>, mut costs: Matrix<W>) -> Result<Self> {
        validate(&supply, &demand, &costs)?;
        let (ts, td) = (total(&supply), total(&demand));
        if ts > td {
            demand.push(ts - td);
            costs.push_col(W::zero());
        } else if td > ts {
            supply.push(td - ts);
            costs.push_row(W::zero());
        }
        Ok(Problem { supply, demand, costs })
    }

    /// Return the number of sources.
    pub fn num_sources(&self) -> usize {
        self.supply.len()
    }

    /// Return the number of destinations.
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Return the supply per source.
    pub fn supply(&self) -> &[W] {
        &self.supply
    }

    /// Return the demand per destination.
    pub fn demand(&self) -> &[W] {
        &self.demand
    }

    /// Return the cost matrix.
    pub fn costs(&self) -> &Matrix<W> {
        &self.costs
    }
}

fn validate<W>(supply: &[W], demand: &[W], costs: &Matrix<W>) -> Result<()>
where
    W: NumAssign + Ord + Copy,
{
    if supply.is_empty() || demand.is_empty() {
        return Err(Error::InvalidInput(
            "a problem needs at least one source and one destination".into(),
        ));
    }
    if costs.nrows() != supply.len() || costs.ncols() != demand.len() {
        return Err(Error::InvalidInput(format!(
            "cost matrix is {}x{}, expected {}x{}",
            costs.nrows(),
            costs.ncols(),
            supply.len(),
            demand.len()
        )));
    }
    if supply.iter().chain(demand.iter()).any(|&q| q < W::zero())
        || costs.data.iter().any(|&c| c < W::zero())
    {
        return Err(Error::InvalidInput(
            "supplies, demands and costs must be non-negative".into(),
        ));
    }
    Ok(())
}

fn total<W: NumAssign + Copy>(quantities: &[W]) -> W {
    quantities.iter().fold(W::zero(), |acc, &q| acc + q)
}

/// An allocation matrix: the quantity shipped from each source to each
/// destination.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Allocation<W> {
    cells: Matrix<W>,
}

impl<W> Allocation<W>
where
    W: NumAssign + Ord + Copy,
{
    pub(crate) fn zeros(nrows: usize, ncols: usize) -> Self {
        Allocation {
            cells: Matrix::filled(nrows, ncols, W::zero()),
        }
    }

    /// Wrap an externally produced allocation matrix.
    pub fn from_matrix(cells: Matrix<W>) -> Self {
        Allocation { cells }
    }

    /// Return the number of sources.
    pub fn nrows(&self) -> usize {
        self.cells.nrows()
    }

    /// Return the number of destinations.
    pub fn ncols(&self) -> usize {
        self.cells.ncols()
    }

    /// Return the quantity shipped per source.
    pub fn row_sums(&self) -> Vec<W> {
        (0..self.nrows())
            .map(|i| (0..self.ncols()).fold(W::zero(), |acc, j| acc + self[(i, j)]))
            .collect()
    }

    /// Return the quantity received per destination.
    pub fn col_sums(&self) -> Vec<W> {
        (0..self.ncols())
            .map(|j| (0..self.nrows()).fold(W::zero(), |acc, i| acc + self[(i, j)]))
            .collect()
    }

    /// Return the total shipping cost under the given cost matrix.
    pub fn total_cost(&self, costs: &Matrix<W>) -> W {
        let mut cost = W::zero();
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                cost += self[(i, j)] * costs[(i, j)];
            }
        }
        cost
    }

    /// Return an iterator over the coordinates of all non-zero cells.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.nrows())
            .flat_map(move |i| (0..self.ncols()).map(move |j| (i, j)))
            .filter(move |&(i, j)| !self[(i, j)].is_zero())
    }

    /// Check whether this allocation exactly satisfies the supply and
    /// demand of `problem` with non-negative quantities.
    pub fn is_feasible_for(&self, problem: &Problem<W>) -> bool {
        self.nrows() == problem.num_sources()
            && self.ncols() == problem.num_destinations()
            && self.cells.data.iter().all(|&q| q >= W::zero())
            && self.row_sums() == problem.supply
            && self.col_sums() == problem.demand
    }
}

impl<W> Index<(usize, usize)> for Allocation<W> {
    type Output = W;

    fn index(&self, at: (usize, usize)) -> &W {
        &self.cells[at]
    }
}

impl<W> IndexMut<(usize, usize)> for Allocation<W> {
    fn index_mut(&mut self, at: (usize, usize)) -> &mut W {
        &mut self.cells[at]
    }
}

#[cfg(test)]
mod tests {
    use super::{Matrix, Problem};
    use crate::error::Error;

    #[test]
    fn ragged_matrix_is_rejected() {
        assert!(matches!(
            Matrix::from_rows(vec![vec![1, 2], vec![3]]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn unbalanced_problem_is_rejected() {
        let costs = Matrix::filled(2, 2, 1);
        assert_eq!(
            Problem::new(vec![10, 10], vec![10, 5], costs).err(),
            Some(Error::Unbalanced)
        );
    }

    #[test]
    fn balanced_pads_a_dummy_destination() {
        let costs = Matrix::from_rows(vec![vec![3, 1], vec![2, 4]]).unwrap();
        let p = Problem::balanced(vec![20, 30], vec![10, 25], costs).unwrap();
        assert_eq!(p.num_destinations(), 3);
        assert_eq!(p.demand(), &[10, 25, 15]);
        assert_eq!(p.costs()[(0, 2)], 0);
        assert_eq!(p.costs()[(1, 0)], 2);
    }

    #[test]
    fn balanced_pads_a_dummy_source() {
        let costs = Matrix::filled(2, 2, 1);
        let p = Problem::balanced(vec![5, 5], vec![10, 10], costs).unwrap();
        assert_eq!(p.num_sources(), 3);
        assert_eq!(p.supply(), &[5, 5, 10]);
        assert_eq!(p.costs()[(2, 1)], 0);
    }

    #[test]
    fn negative_cost_is_rejected() {
        let costs = Matrix::from_rows(vec![vec![1, -1], vec![2, 2]]).unwrap();
        assert!(matches!(
            Problem::new(vec![5, 5], vec![5, 5], costs),
            Err(Error::InvalidInput(_))
        ));
    }
}
