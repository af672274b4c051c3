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

//! Maximum cardinality matching on dense bipartite graphs.
//!
//! Row vertices and column vertices are connected through an
//! [`AdjacencyMatrix`]; [`maximum_matching`] pairs as many of them as
//! possible using Kuhn's augmenting-path search.

pub mod common;
pub mod algorithm;

/// Default dimension type of an [`AdjacencyMatrix`]. Its maximum value
/// caps the number of rows and the number of columns.
pub type DefDim = u8;

pub use common::matrix::{Adjacency, AdjacencyMatrix, MatrixError};
pub use algorithm::Matching;
pub use algorithm::kuhn::maximum_matching;
pub use algorithm::batch::maximum_matching_batch;
pub use algorithm::check::{check_matching, CheckError};
