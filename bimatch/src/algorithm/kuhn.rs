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

//! Kuhn's augmenting-path algorithm on a dense adjacency relation.
//!
//! Rows are processed in ascending order. Each row gets a fresh set of
//! visited columns and greedily claims the first column that is either
//! free or whose current holder can move to another column. Ties are
//! broken by the lowest column index, so results are deterministic.

use log::{debug, trace};

use crate::common::matrix::Adjacency;
use super::Matching;

pub fn maximum_matching<A: Adjacency + ?Sized>(nodes: &A) -> Matching {
    let (n_rows, n_cols) = nodes.shape();
    debug!("kuhn: matching {n_rows} rows against {n_cols} columns...");

    let mut assignment: Vec<Option<usize>> = vec![None; n_cols];
    let mut used = vec![false; n_cols];
    let mut edges = 0;

    for row in 0..n_rows {
        used.fill(false);
        if try_assign(nodes, row, &mut used, &mut assignment) {
            edges += 1;
            trace!("kuhn: row {row} augmented, {edges} matched so far");
        } else {
            trace!("kuhn: no augmenting path from row {row}");
        }
    }

    debug!("kuhn: {edges} edges matched.");
    Matching::new(assignment, edges)
}

// Every call marks a new column as used, so the depth is bounded by the
// number of columns.
fn try_assign<A: Adjacency + ?Sized>(
    nodes: &A,
    row: usize,
    used: &mut [bool],
    assignment: &mut [Option<usize>],
) -> bool {
    for column in 0..used.len() {
        if used[column] || !nodes.has_edge(row, column) { continue; }
        used[column] = true;

        let free = match assignment[column] {
            None => true,
            Some(holder) => try_assign(nodes, holder, used, assignment),
        };
        if free {
            assignment[column] = Some(row);
            return true;
        }
    }
    false
}
