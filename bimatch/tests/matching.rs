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

use bimatch::{check_matching, maximum_matching, maximum_matching_batch, Adjacency, AdjacencyMatrix};
use bimatch::algorithm::hopcroft_karp;
use bimatch::common::generators::{demo_matrix, full_matrix, random_matrix};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_consistent<A: Adjacency>(nodes: &A, assignment: &[Option<usize>], matched: usize) {
    let (n_rows, n_cols) = nodes.shape();
    assert_eq!(assignment.len(), n_cols);
    assert_eq!(matched, assignment.iter().filter(|a| a.is_some()).count());
    assert!(matched <= n_rows.min(n_cols));

    let mut used = vec![false; n_rows];
    for (c, a) in assignment.iter().enumerate() {
        if let Some(r) = *a {
            assert!(nodes.has_edge(r, c), "({r}, {c}) is not an edge");
            assert!(!used[r], "row {r} matched twice");
            used[r] = true;
        }
    }
}


#[test]
fn overdetermined_scenario() {
    init();
    let nodes = demo_matrix();
    let (assignment, matched) = maximum_matching(&nodes).into_parts();
    assert_eq!(matched, 4);
    assert_eq!(assignment[3], Some(0));
    assert_consistent(&nodes, &assignment, matched);
    // ascending search order pushes row 0 to the last column
    assert_eq!(assignment, vec![Some(3), Some(2), Some(1), Some(0)]);
}

#[test]
fn empty_matrices() {
    for (r, c) in [(0u8, 0u8), (0, 5), (5, 0)] {
        let m = maximum_matching(&AdjacencyMatrix::new(r, c));
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
        assert!(m.assignment().iter().all(Option::is_none));
    }
}

#[test]
fn no_edges() {
    let nodes: AdjacencyMatrix = AdjacencyMatrix::new(4, 6);
    let m = maximum_matching(&nodes);
    assert_eq!(m.len(), 0);
    assert_eq!(m.assignment(), &[None; 6][..]);
}

#[test]
fn full_matrices() {
    for (r, c) in [(1u8, 1u8), (3, 7), (7, 3), (12, 12)] {
        let nodes = full_matrix(r, c);
        let m = maximum_matching(&nodes);
        assert_eq!(m.len(), r.min(c) as usize);
        assert_consistent(&nodes, m.assignment(), m.len());
    }
}

#[test]
fn needs_augmenting_path() {
    // greedy would give column 0 to row 0 and strand row 1
    let nodes: AdjacencyMatrix = AdjacencyMatrix::from_edges(2, 2, [(0, 0), (0, 1), (1, 0)]);
    let m = maximum_matching(&nodes);
    assert_eq!(m.len(), 2);
    assert_eq!(m.row_of(0), Some(1));
    assert_eq!(m.row_of(1), Some(0));
    assert_eq!(m.column_of(0), Some(1));
    assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(1, 0), (0, 1)]);
}

#[test]
fn deterministic() {
    let nodes = random_matrix(40u8, 30u8, 15, 7);
    assert_eq!(maximum_matching(&nodes), maximum_matching(&nodes));
}

#[test]
fn random_matrices_are_maximum() {
    init();
    for seed in 0..24u64 {
        let rows = 1 + (seed * 7 % 40) as u8;
        let cols = 1 + (seed * 11 % 40) as u8;
        let density = [2, 5, 10, 30, 70][seed as usize % 5];
        let nodes = random_matrix(rows, cols, density, seed);

        let m = maximum_matching(&nodes);
        assert_consistent(&nodes, m.assignment(), m.len());
        assert_eq!(check_matching(&nodes, m.assignment()), Ok(m.len()));

        let hk = hopcroft_karp::maximum_matching(&nodes);
        assert_consistent(&nodes, hk.assignment(), hk.len());
        assert_eq!(hk.len(), m.len(), "seed {seed}");
    }
}

#[test]
fn hopcroft_karp_scenario() {
    let nodes = demo_matrix();
    let m = hopcroft_karp::maximum_matching(&nodes);
    assert_eq!(m.len(), 4);
    assert_eq!(m.row_of(3), Some(0));
}

#[test]
fn batch_matches_sequential() {
    init();
    let matrices: Vec<AdjacencyMatrix> = (0..32u64)
        .map(|s| random_matrix(20, 25, 12, s))
        .collect();
    let batch = maximum_matching_batch(&matrices);
    assert_eq!(batch.len(), matrices.len());
    for (nodes, m) in matrices.iter().zip(&batch) {
        assert_eq!(*m, maximum_matching(nodes));
    }
}
