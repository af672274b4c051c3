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

use bimatch::{Adjacency, AdjacencyMatrix, MatrixError};


#[test]
fn starts_without_edges() {
    let m: AdjacencyMatrix = AdjacencyMatrix::new(3, 4);
    assert_eq!(m.size(), (3, 4));
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.num_edges(), 0);
    assert!((0..3).all(|r| (0..4).all(|c| !m.get(r, c))));
}

#[test]
fn zero_dimension_is_degenerate() {
    for (r, c) in [(0u8, 4u8), (4, 0), (0, 0)] {
        let mut m = AdjacencyMatrix::new(r, c);
        assert!(m.is_empty());
        assert_eq!(m.size(), (0, 0));
        *m.cell_mut(0, 0) = true;
        assert!(!m.get(0, 0));
        m.set_row(0, &[true; 4]);
        m.set_column(0, &[true; 4]);
        assert_eq!(m.num_edges(), 0);
    }
}

#[test]
fn cells_persist() {
    let mut m: AdjacencyMatrix = AdjacencyMatrix::new(2, 3);
    *m.cell_mut(1, 2) = true;
    m[(0, 1)] = true;
    assert!(m.get(1, 2));
    assert!(m[(0, 1)]);
    assert_eq!(m.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
}

#[test]
fn out_of_range_reads_are_false() {
    let m: AdjacencyMatrix = AdjacencyMatrix::from_edges(2, 2, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert!(!m.get(2, 0));
    assert!(!m.get(0, 2));
    assert!(!m[(usize::MAX, 1)]);
    assert_eq!(m.try_get(5, 5), None);
    assert_eq!(m.try_get(1, 1), Some(true));
}

#[test]
fn out_of_range_writes_are_discarded() {
    let mut m: AdjacencyMatrix = AdjacencyMatrix::new(2, 2);
    *m.cell_mut(2, 0) = true;
    m[(0, 7)] = true;
    assert_eq!(m.num_edges(), 0);
    // the scratch cell never leaks a previous write
    assert!(!*m.cell_mut(9, 9));
    assert!(m.try_cell_mut(2, 2).is_none());
}

#[test]
fn out_of_range_writes_never_reach_neighbours() {
    // (0, 2) would land on (1, 0) if only the flat offset were checked
    let mut m: AdjacencyMatrix = AdjacencyMatrix::new(2, 2);
    m.set_row(1, &[true, true]);
    *m.cell_mut(0, 2) = false;
    m[(0, 2)] = false;
    assert!(m.get(1, 0));
    assert!(m.get(1, 1));
    assert_eq!(m.num_edges(), 2);

    // through a column: (1, 2) would land on (2, 0)
    let mut m: AdjacencyMatrix = AdjacencyMatrix::new(3, 2);
    m.set_column(0, &[true, true, true]);
    *m.cell_mut(1, 2) = false;
    m[(2, 2)] = true;
    assert!(m.get(2, 0));
    assert!(!m.get(1, 1));
    assert_eq!(m.edges().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (2, 0)]);
}

#[test]
fn set_row_and_column() {
    let mut m: AdjacencyMatrix = AdjacencyMatrix::new(3, 2);
    m.set_row(1, &[true, false]);
    m.set_column(1, &[true, false, true]);
    assert_eq!(m.row(0), Some(&[false, true][..]));
    assert_eq!(m.row(1), Some(&[true, false][..]));
    assert_eq!(m.row(2), Some(&[false, true][..]));
    assert_eq!(m.row(3), None);
}

#[test]
fn bulk_set_mismatch_is_a_no_op() {
    let mut m: AdjacencyMatrix = AdjacencyMatrix::new(3, 2);
    let before = m.clone();
    m.set_row(0, &[true, true, true]);
    m.set_row(0, &[]);
    m.set_column(0, &[true, true]);
    // out of range index
    m.set_row(3, &[true, true]);
    m.set_column(2, &[true, true, true]);
    assert_eq!(m, before);
}

#[test]
fn checked_bulk_set_reports() {
    let mut m: AdjacencyMatrix = AdjacencyMatrix::new(3, 2);
    assert_eq!(
        m.try_set_row(0, &[true]),
        Err(MatrixError::LengthMismatch { expected: 2, found: 1 })
    );
    assert_eq!(
        m.try_set_row(3, &[true, true]),
        Err(MatrixError::RowOutOfRange { index: 3, rows: 3 })
    );
    assert_eq!(
        m.try_set_column(2, &[true, true, true]),
        Err(MatrixError::ColumnOutOfRange { index: 2, columns: 2 })
    );
    assert_eq!(m.try_set_column(1, &[true, true, true]), Ok(()));
    assert_eq!(m.num_edges(), 3);

    let mut e: AdjacencyMatrix = AdjacencyMatrix::new(0, 0);
    assert_eq!(e.try_set_row(0, &[]), Err(MatrixError::Empty));
}

#[test]
fn capacity_follows_dimension_type() {
    assert_eq!(AdjacencyMatrix::<u8>::capacity(), 255);
    assert_eq!(
        AdjacencyMatrix::<u8>::try_new(256, 1),
        Err(MatrixError::CapacityExceeded { requested: 256, capacity: 255 })
    );
    let m = AdjacencyMatrix::<u16>::try_new(256, 3).unwrap();
    assert_eq!(m.size(), (256, 3));
    assert!(!m.get(255, 2));
}

#[test]
fn cell_count_overflow() {
    assert_eq!(
        AdjacencyMatrix::<u64>::try_new(usize::MAX, 2),
        Err(MatrixError::TooManyCells { rows: usize::MAX, columns: 2 })
    );
    let m = AdjacencyMatrix::<u64>::new(u64::MAX, 2);
    assert!(m.is_empty());
    assert_eq!(m.size(), (0, 0));
}
