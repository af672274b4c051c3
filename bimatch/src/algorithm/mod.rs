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

pub mod kuhn;
pub mod hopcroft_karp;
pub mod batch;
pub mod check;

/// Result of a maximum matching run.
///
/// `assignment[column]` holds the row matched to `column`, or `None`
/// when the column is left unmatched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matching {
    assignment: Vec<Option<usize>>,
    matched: usize,
}

impl Matching {
    pub(crate) fn new(assignment: Vec<Option<usize>>, matched: usize) -> Self {
        debug_assert_eq!(
            matched,
            assignment.iter().filter(|a| a.is_some()).count()
        );
        Self { assignment, matched }
    }

    /// Wraps an assignment produced elsewhere, e.g. read back from a file.
    /// No validation happens here; see [`check::check_matching`].
    pub fn from_assignment(assignment: Vec<Option<usize>>) -> Self {
        let matched = assignment.iter().filter(|a| a.is_some()).count();
        Self { assignment, matched }
    }

    pub fn assignment(&self) -> &[Option<usize>] { &self.assignment }

    /// Number of matched edges.
    pub fn len(&self) -> usize { self.matched }

    pub fn is_empty(&self) -> bool { self.matched == 0 }

    pub fn row_of(&self, column: usize) -> Option<usize> {
        self.assignment.get(column).copied().flatten()
    }

    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.assignment.iter().position(|&a| a == Some(row))
    }

    /// Matched `(row, column)` pairs in ascending column order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(c, a)| a.map(|r| (r, c)))
    }

    /// The assignment with `-1` standing for unmatched columns.
    pub fn to_signed(&self) -> Vec<i64> {
        self.assignment
            .iter()
            .map(|a| a.map_or(-1, |r| r as i64))
            .collect()
    }

    pub fn into_parts(self) -> (Vec<Option<usize>>, usize) {
        (self.assignment, self.matched)
    }
}
