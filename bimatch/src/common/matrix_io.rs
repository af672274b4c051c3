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

use std::{fs, io, path::Path, str::FromStr};

use log::debug;
use num_traits::PrimInt;
use thiserror::Error;

use crate::algorithm::Matching;
use super::io::{numbered_lines, read_numbered_lines, write_slice_to_file_seq};
use super::matrix::{AdjacencyMatrix, MatrixError};

const MATRIX_HEADER: &str = "BipartiteMatrix";

// **************************************************************
//    EDGE LINES
// **************************************************************

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub row: usize,
    pub column: usize,
}

impl Edge {
    pub fn new(row: usize, column: usize) -> Self { Self { row, column } }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("can not parse as edge")]
pub struct ParseEdgeError;

impl FromStr for Edge {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut w = s.split_whitespace();
        let (Some(a), Some(b), None) = (w.next(), w.next(), w.next()) else {
            return Err(ParseEdgeError);
        };
        match (a.parse(), b.parse()) {
            (Ok(row), Ok(column)) => Ok(Self::new(row, column)),
            _ => Err(ParseEdgeError),
        }
    }
}

#[derive(Debug, Error)]
pub enum MatrixIoError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("expected header `BipartiteMatrix`, found `{0}`")]
    BadHeader(String),

    #[error("unexpected end of input while reading the {0}")]
    UnexpectedEof(&'static str),

    #[error("line {line}: can not parse `{text}`")]
    Parse { line: usize, text: String },

    #[error("line {line}: edge ({row}, {column}) lies outside the matrix")]
    EdgeOutOfRange { line: usize, row: usize, column: usize },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

// **************************************************************
//    MATRIX FILES
// **************************************************************

pub fn parse_matrix<I: PrimInt>(s: &str) -> Result<AdjacencyMatrix<I>, MatrixIoError> {
    let mut lines = numbered_lines(s);

    debug!("reading file header...");
    let (_, header) = lines.next().ok_or(MatrixIoError::UnexpectedEof("header"))?;
    if header != MATRIX_HEADER {
        return Err(MatrixIoError::BadHeader(header.to_owned()));
    }
    let mut dim = |what: &'static str| -> Result<usize, MatrixIoError> {
        let (line, text) = lines.next().ok_or(MatrixIoError::UnexpectedEof(what))?;
        text.parse().map_err(|_| MatrixIoError::Parse { line, text: text.to_owned() })
    };
    let rows = dim("row count")?;
    let columns = dim("column count")?;

    debug!("making the matrix (rows={rows}, columns={columns})...");
    let mut m = AdjacencyMatrix::<I>::try_new(rows, columns)?;

    debug!("reading edges...");
    for (line, text) in lines {
        let e: Edge = text
            .parse()
            .map_err(|_| MatrixIoError::Parse { line, text: text.to_owned() })?;
        if e.row >= rows || e.column >= columns {
            return Err(MatrixIoError::EdgeOutOfRange { line, row: e.row, column: e.column });
        }
        *m.cell_mut(e.row, e.column) = true;
    }

    debug!("matrix read ({} edges).", m.num_edges());
    Ok(m)
}

pub fn read_matrix_from_file<I, P>(fname: P) -> Result<AdjacencyMatrix<I>, MatrixIoError>
where
    I: PrimInt,
    P: AsRef<Path>,
{
    let s = fs::read_to_string(fname)?;
    parse_matrix(&s)
}

pub fn matrix_to_string<I: PrimInt>(m: &AdjacencyMatrix<I>) -> String {
    let mut s = format!("{MATRIX_HEADER}\n{}\n{}\n", m.num_rows(), m.num_columns());
    for (r, c) in m.edges() {
        s.push_str(&format!("{r} {c}\n"));
    }
    s
}

pub fn write_matrix_to_file<I, P>(m: &AdjacencyMatrix<I>, of: P) -> io::Result<()>
where
    I: PrimInt,
    P: AsRef<Path>,
{
    fs::write(of, matrix_to_string(m))
}

// **************************************************************
//    RESULT FILES
// **************************************************************

/// Writes the assignment, one column per line, `-1` for unmatched.
pub fn write_matching_to_file<P: AsRef<Path>>(m: &Matching, of: P) -> io::Result<()> {
    write_slice_to_file_seq(&m.to_signed(), of)
}

/// Reads a file written by [`write_matching_to_file`]. Negative entries
/// are unmatched columns.
pub fn read_matching_from_file<P: AsRef<Path>>(fname: P) -> Result<Matching, MatrixIoError> {
    let assignment = read_numbered_lines(fname)?
        .into_iter()
        .map(|(line, text)| {
            let parsed = text.parse::<i64>();
            match parsed {
                Ok(r) if r < 0 => Ok(None),
                Ok(r) => Ok(Some(r as usize)),
                Err(_) => Err(MatrixIoError::Parse { line, text }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Matching::from_assignment(assignment))
}
