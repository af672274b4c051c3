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

use clap::Parser;
use log::info;

#[path ="../macros.rs"] mod macros;

use bimatch::{check_matching, AdjacencyMatrix};
use bimatch::common::matrix_io::{read_matching_from_file, read_matrix_from_file};

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// bm results filename
    #[clap(value_parser, required=true)]
    rfname: String,

    /// the input matrix's filename
    #[clap(value_parser, required=true)]
    ifname: String,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    println!("bm_check: {msg}");
    println!("ERR");
    std::process::exit(1);
}

fn main() {
    init!();

    let args = Args::parse();
    let nodes: AdjacencyMatrix = read_matrix_from_file(&args.ifname)
        .unwrap_or_else(|e| fail(e));
    let r = read_matching_from_file(&args.rfname)
        .unwrap_or_else(|e| fail(e));

    match check_matching(&nodes, r.assignment()) {
        Ok(edges) => {
            info!("bm_check: {edges} edges, maximum");
            println!("OK");
        }
        Err(e) => fail(e),
    }
}
