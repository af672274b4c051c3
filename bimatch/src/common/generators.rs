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

use num_traits::PrimInt;

use crate::DefDim;
use super::matrix::AdjacencyMatrix;
use super::random::Random;

/// Each cell is an edge with probability `density_pct` percent.
pub fn random_matrix<I: PrimInt>(
    rows: I,
    columns: I,
    density_pct: u32,
    seed: u64,
) -> AdjacencyMatrix<I> {
    let mut m = AdjacencyMatrix::new(rows, columns);
    let (r, c) = (m.num_rows(), m.num_columns());
    let rng = Random::new(seed);
    for i in 0..r {
        let row_rng = rng.fork(i as u64);
        let values: Vec<bool> = (0..c)
            .map(|j| row_rng.ith_chance(j as u64, density_pct))
            .collect();
        m.set_row(i, &values);
    }
    m
}

/// The complete bipartite graph.
pub fn full_matrix<I: PrimInt>(rows: I, columns: I) -> AdjacencyMatrix<I> {
    let mut m = AdjacencyMatrix::new(rows, columns);
    let all = vec![true; m.num_columns()];
    for i in 0..m.num_rows() { m.set_row(i, &all); }
    m
}

/// Overdetermined 5 x 4 matrix: row 0 fits every column, rows 1-4 only
/// columns 0-2. The maximum matching has 4 edges and must give
/// column 3 to row 0.
pub fn demo_matrix() -> AdjacencyMatrix<DefDim> {
    let mut m = AdjacencyMatrix::new(5, 4);
    m.set_row(0, &[true, true, true, true]);
    for i in 1..5 {
        m.set_row(i, &[true, true, true, false]);
    }
    m
}
