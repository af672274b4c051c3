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

use std::error::Error;
use std::fmt;

use clap::{Parser, ValueEnum};
use log::info;

#[path ="../macros.rs"] mod macros;

use bimatch::DefDim;
use bimatch::common::generators::{demo_matrix, full_matrix, random_matrix};
use bimatch::common::matrix_io::write_matrix_to_file;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Kind { Random, Full, Demo }

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Kind::Random => write!(f, "random"),
            Kind::Full => write!(f, "full"),
            Kind::Demo => write!(f, "demo"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the kind of matrix to generate
    #[clap(short, long, value_parser, default_value_t = Kind::Random)]
    kind: Kind,

    /// the number of row vertices
    #[clap(long, value_parser, default_value_t = 100)]
    rows: DefDim,

    /// the number of column vertices
    #[clap(long, value_parser, default_value_t = 100)]
    columns: DefDim,

    /// the chance of each edge, in percent
    #[clap(long, value_parser = clap::value_parser!(u32).range(0..=100), default_value_t = 10)]
    density: u32,

    /// the random seed
    #[clap(long, value_parser, default_value_t = 0)]
    seed: u64,

    /// the output filename
    #[clap(value_parser, required=true)]
    ofname: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    init!();

    let args = Args::parse();
    let m = match args.kind {
        Kind::Random => random_matrix(args.rows, args.columns, args.density, args.seed),
        Kind::Full   => full_matrix(args.rows, args.columns),
        Kind::Demo   => demo_matrix(),
    };
    info!("generated {} matrix {}x{} with {} edges",
        args.kind, m.num_rows(), m.num_columns(), m.num_edges());
    write_matrix_to_file(&m, &args.ofname)?;
    Ok(())
}
