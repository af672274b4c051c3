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

use thiserror::Error;

use crate::common::matrix::Adjacency;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("assignment has {found} entries, the matrix has {expected} columns")]
    LengthMismatch { expected: usize, found: usize },

    #[error("column {column} is assigned to row {row}, which does not exist")]
    RowOutOfRange { column: usize, row: usize },

    #[error("column {column} is assigned to row {row}, but there is no such edge")]
    NotAnEdge { column: usize, row: usize },

    #[error("edges share vertex: row {row} is assigned to columns {first} and {second}")]
    RowReused { row: usize, first: usize, second: usize },

    #[error("matching is not maximum: augmenting path from row {row} to column {column}")]
    NotMaximum { row: usize, column: usize },
}

/// Verifies that `assignment` is a maximum matching of `nodes` and
/// returns its size.
pub fn check_matching<A: Adjacency + ?Sized>(
    nodes: &A,
    assignment: &[Option<usize>],
) -> Result<usize, CheckError> {
    let (n_rows, n_cols) = nodes.shape();
    if assignment.len() != n_cols {
        return Err(CheckError::LengthMismatch {
            expected: n_cols,
            found: assignment.len(),
        });
    }

    let mut row_match: Vec<Option<usize>> = vec![None; n_rows];
    let mut matched = 0;
    for (column, &a) in assignment.iter().enumerate() {
        let Some(row) = a else { continue };
        if row >= n_rows {
            return Err(CheckError::RowOutOfRange { column, row });
        }
        if !nodes.has_edge(row, column) {
            return Err(CheckError::NotAnEdge { column, row });
        }
        if let Some(first) = row_match[row] {
            return Err(CheckError::RowReused { row, first, second: column });
        }
        row_match[row] = Some(column);
        matched += 1;
    }

    // Alternating search from every free row. A column reached once
    // needs no second visit: everything behind it was already explored.
    let mut visited = vec![false; n_cols];
    let mut stack = vec![];
    for start in (0..n_rows).filter(|&r| row_match[r].is_none()) {
        stack.push(start);
        while let Some(r) = stack.pop() {
            for c in 0..n_cols {
                if visited[c] || !nodes.has_edge(r, c) { continue; }
                visited[c] = true;
                match assignment[c] {
                    None => return Err(CheckError::NotMaximum { row: start, column: c }),
                    Some(holder) => stack.push(holder),
                }
            }
        }
    }
    Ok(matched)
}
