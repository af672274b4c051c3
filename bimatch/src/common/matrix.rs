// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::ops::{Index, IndexMut};
use num_traits::{NumCast, PrimInt};
use thiserror::Error;

use crate::DefDim;

// **************************************************************
//    ADJACENCY QUERY CONTRACT
// **************************************************************

/// Read-only view of a bipartite graph as a `rows x columns` relation.
pub trait Adjacency {
    /// Returns `(rows, columns)`.
    fn shape(&self) -> (usize, usize);

    /// Whether `row` and `column` are connected; `false` for coordinates
    /// outside `[0, rows) x [0, columns)`.
    fn has_edge(&self, row: usize, column: usize) -> bool;
}

impl<T: Adjacency + ?Sized> Adjacency for &T {
    #[inline(always)]
    fn shape(&self) -> (usize, usize) { (**self).shape() }

    #[inline(always)]
    fn has_edge(&self, row: usize, column: usize) -> bool
    { (**self).has_edge(row, column) }
}

// **************************************************************
//    ERRORS OF THE CHECKED ACCESSORS
// **************************************************************

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("row {index} is out of range for a matrix with {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("column {index} is out of range for a matrix with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error("expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("the matrix has no cells")]
    Empty,

    #[error("dimension {requested} exceeds the capacity of {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("a {rows}x{columns} matrix has more cells than can be addressed")]
    TooManyCells { rows: usize, columns: usize },
}

// **************************************************************
//    DENSE ADJACENCY MATRIX
// **************************************************************

/// A fixed-size dense boolean matrix of candidate edges between row
/// vertices and column vertices.
///
/// `I` is the dimension type; `I::max_value()` is the largest number of
/// rows (and of columns) a matrix can hold. If either dimension is zero
/// the matrix is degenerate: it reports a `(0, 0)` size, every read is
/// `false` and every write is discarded.
///
/// Out-of-range coordinates never fault. Reads yield `false`, writes go
/// to a dummy cell that is cleared each time it is handed out.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<I: PrimInt = DefDim> {
    n_rows: I,
    n_cols: I,
    cells: Vec<bool>,
    dummy: bool,
}

impl<I: PrimInt> AdjacencyMatrix<I> {
    /// Creates a `rows x columns` matrix with no edges.
    ///
    /// If `rows * columns` overflows `usize` the result is the degenerate
    /// empty matrix; [`Self::try_new`] reports that case instead.
    pub fn new(rows: I, columns: I) -> Self {
        Self::with_dims(rows, columns).unwrap_or_else(|_| Self::degenerate())
    }

    /// Like [`Self::new`] for `usize` dimensions, failing if either one
    /// does not fit into `I` or the cell count overflows.
    pub fn try_new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
        let capacity = Self::capacity();
        let dim = |requested: usize| <I as NumCast>::from(requested)
            .ok_or(MatrixError::CapacityExceeded { requested, capacity });
        Self::with_dims(dim(rows)?, dim(columns)?)
    }

    fn with_dims(rows: I, columns: I) -> Result<Self, MatrixError> {
        let (r, c) = (to_dim(rows), to_dim(columns));
        if r == 0 || c == 0 { return Ok(Self::degenerate()); }
        let n = r
            .checked_mul(c)
            .ok_or(MatrixError::TooManyCells { rows: r, columns: c })?;
        Ok(Self {
            n_rows: rows,
            n_cols: columns,
            cells: vec![false; n],
            dummy: false,
        })
    }

    fn degenerate() -> Self {
        Self {
            n_rows: I::zero(),
            n_cols: I::zero(),
            cells: vec![],
            dummy: false,
        }
    }

    /// Creates a matrix and sets every listed `(row, column)` edge.
    /// Edges outside the matrix are dropped.
    pub fn from_edges<E>(rows: I, columns: I, edges: E) -> Self
    where
        E: IntoIterator<Item = (usize, usize)>,
    {
        let mut m = Self::new(rows, columns);
        for (r, c) in edges { *m.cell_mut(r, c) = true; }
        m
    }

    /// The largest number of rows or columns this dimension type allows.
    pub fn capacity() -> usize {
        I::max_value().to_usize().unwrap_or(usize::MAX)
    }

    /// Returns the number of rows and columns.
    pub fn size(&self) -> (I, I) { (self.n_rows, self.n_cols) }

    pub fn num_rows(&self) -> usize { to_dim(self.n_rows) }

    pub fn num_columns(&self) -> usize { to_dim(self.n_cols) }

    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    #[inline(always)]
    fn offset(&self, row: usize, column: usize) -> Option<usize> {
        let (r, c) = (self.num_rows(), self.num_columns());
        if row >= r || column >= c { None }
        else { Some(row * c + column) }
    }

    /// Returns the value at `[row, column]`, or `false` when out of range.
    #[inline(always)]
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.try_get(row, column).unwrap_or(false)
    }

    pub fn try_get(&self, row: usize, column: usize) -> Option<bool> {
        self.offset(row, column).map(|o| self.cells[o])
    }

    /// Returns a writable handle to `[row, column]`.
    ///
    /// Out of range, the handle refers to a scratch cell whose value is
    /// never observed by the matrix.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> &mut bool {
        match self.offset(row, column) {
            Some(o) => &mut self.cells[o],
            None => {
                self.dummy = false;
                &mut self.dummy
            }
        }
    }

    pub fn try_cell_mut(&mut self, row: usize, column: usize) -> Option<&mut bool> {
        let o = self.offset(row, column)?;
        Some(&mut self.cells[o])
    }

    /// Replaces row `index` with `values`. Does nothing unless
    /// `values.len()` equals the number of columns and `index` is a
    /// valid row.
    pub fn set_row(&mut self, index: usize, values: &[bool]) {
        let _ = self.try_set_row(index, values);
    }

    pub fn try_set_row(&mut self, index: usize, values: &[bool]) -> Result<(), MatrixError> {
        let (r, c) = (self.num_rows(), self.num_columns());
        if c == 0 { return Err(MatrixError::Empty); }
        if values.len() != c {
            return Err(MatrixError::LengthMismatch { expected: c, found: values.len() });
        }
        if index >= r {
            return Err(MatrixError::RowOutOfRange { index, rows: r });
        }
        self.cells[index * c..(index + 1) * c].copy_from_slice(values);
        Ok(())
    }

    /// Replaces column `index` with `values`. Does nothing unless
    /// `values.len()` equals the number of rows and `index` is a valid
    /// column.
    pub fn set_column(&mut self, index: usize, values: &[bool]) {
        let _ = self.try_set_column(index, values);
    }

    pub fn try_set_column(&mut self, index: usize, values: &[bool]) -> Result<(), MatrixError> {
        let (r, c) = (self.num_rows(), self.num_columns());
        if r == 0 { return Err(MatrixError::Empty); }
        if values.len() != r {
            return Err(MatrixError::LengthMismatch { expected: r, found: values.len() });
        }
        if index >= c {
            return Err(MatrixError::ColumnOutOfRange { index, columns: c });
        }
        self.cells
            .chunks_exact_mut(c)
            .zip(values)
            .for_each(|(row, &v)| row[index] = v);
        Ok(())
    }

    /// Returns row `index` as a slice of length `num_columns()`.
    pub fn row(&self, index: usize) -> Option<&[bool]> {
        let c = self.num_columns();
        if index >= self.num_rows() { return None; }
        Some(&self.cells[index * c..(index + 1) * c])
    }

    /// Iterates over all edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let c = self.num_columns().max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e)
            .map(move |(o, _)| (o / c, o % c))
    }

    pub fn num_edges(&self) -> usize {
        self.cells.iter().filter(|&&e| e).count()
    }
}

#[inline(always)]
fn to_dim<I: PrimInt>(d: I) -> usize { d.to_usize().unwrap_or(0) }

impl<I: PrimInt> Default for AdjacencyMatrix<I> {
    fn default() -> Self { Self::new(I::zero(), I::zero()) }
}

// the scratch cell is not part of the value
impl<I: PrimInt> PartialEq for AdjacencyMatrix<I> {
    fn eq(&self, other: &Self) -> bool {
        self.n_rows == other.n_rows
            && self.n_cols == other.n_cols
            && self.cells == other.cells
    }
}

impl<I: PrimInt> Eq for AdjacencyMatrix<I> {}

impl<I: PrimInt> Adjacency for AdjacencyMatrix<I> {
    #[inline(always)]
    fn shape(&self) -> (usize, usize) { (self.num_rows(), self.num_columns()) }

    #[inline(always)]
    fn has_edge(&self, row: usize, column: usize) -> bool { self.get(row, column) }
}

impl<I: PrimInt> Index<(usize, usize)> for AdjacencyMatrix<I> {
    type Output = bool;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.offset(row, column) {
            Some(o) => &self.cells[o],
            None => &false,
        }
    }
}

impl<I: PrimInt> IndexMut<(usize, usize)> for AdjacencyMatrix<I> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        self.cell_mut(row, column)
    }
}
