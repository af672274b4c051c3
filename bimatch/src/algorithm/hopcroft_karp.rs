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

//! Hopcroft-Karp: phases of a BFS layering from all free rows followed
//! by vertex-disjoint augmentations along strictly increasing layers.
//!
//! Produces a matching of the same size as [`super::kuhn`], but not
//! necessarily the same assignment.

use std::collections::VecDeque;
use log::debug;

use crate::common::matrix::Adjacency;
use super::Matching;

const INF: usize = usize::MAX;

pub fn maximum_matching<A: Adjacency + ?Sized>(nodes: &A) -> Matching {
    let (n_rows, n_cols) = nodes.shape();
    debug!("hopcroft-karp: matching {n_rows} rows against {n_cols} columns...");

    let mut row_match: Vec<Option<usize>> = vec![None; n_rows];
    let mut col_match: Vec<Option<usize>> = vec![None; n_cols];
    let mut level = vec![INF; n_rows];
    let mut queue = VecDeque::with_capacity(n_rows);
    let mut edges = 0;
    let mut phase = 0;

    loop {
        level.fill(INF);
        queue.clear();
        for r in 0..n_rows {
            if row_match[r].is_none() {
                level[r] = 0;
                queue.push_back(r);
            }
        }

        let mut found_free = false;
        while let Some(r) = queue.pop_front() {
            for c in 0..n_cols {
                if !nodes.has_edge(r, c) { continue; }
                match col_match[c] {
                    None => found_free = true,
                    Some(w) if level[w] == INF => {
                        level[w] = level[r] + 1;
                        queue.push_back(w);
                    }
                    Some(_) => {}
                }
            }
        }
        if !found_free { break; }

        let mut grown = 0;
        for r in 0..n_rows {
            if row_match[r].is_none()
                && augment(nodes, r, &mut level, &mut row_match, &mut col_match)
            {
                grown += 1;
            }
        }
        phase += 1;
        edges += grown;
        debug!("hopcroft-karp: phase {phase} added {grown} edges ({edges} total)");
        if grown == 0 { break; }
    }

    debug!("hopcroft-karp: {edges} edges matched.");
    Matching::new(col_match, edges)
}

fn augment<A: Adjacency + ?Sized>(
    nodes: &A,
    row: usize,
    level: &mut [usize],
    row_match: &mut [Option<usize>],
    col_match: &mut [Option<usize>],
) -> bool {
    debug_assert_ne!(level[row], INF);
    for c in 0..col_match.len() {
        if !nodes.has_edge(row, c) { continue; }
        let ok = match col_match[c] {
            None => true,
            Some(w) => level[w] == level[row] + 1
                && augment(nodes, w, level, row_match, col_match),
        };
        if ok {
            row_match[row] = Some(c);
            col_match[c] = Some(row);
            return true;
        }
    }
    // dead end for the rest of this phase
    level[row] = INF;
    false
}
