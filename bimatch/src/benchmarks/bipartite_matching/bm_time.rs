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
use std::time::Duration;

#[path ="../macros.rs"] mod macros;

use bimatch::{AdjacencyMatrix, Matching};
use bimatch::algorithm::{hopcroft_karp, kuhn};
use bimatch::common::time_loop::time_loop;
use bimatch::common::matrix_io::{read_matrix_from_file, write_matching_to_file};

define_args!(Algs::KUHN);

define_algs!(
    (KUHN, "kuhn"),
    (HOPCROFT_KARP, "hopcroft-karp")
);

pub fn run(alg: Algs, rounds: usize, nodes: &AdjacencyMatrix) -> (Matching, Duration) {
    let bm: fn(&AdjacencyMatrix) -> Matching = match alg {
        Algs::KUHN          =>  kuhn::maximum_matching,
        Algs::HOPCROFT_KARP =>  hopcroft_karp::maximum_matching,
    };

    let mut r = Matching::default();

    let mean = time_loop(
        "bm",
        rounds,
        Duration::new(1, 0),
        || {},
        || { r = bm(nodes); },
        || {}
    );
    (r, mean)
}

fn main() -> Result<(), Box<dyn Error>> {
    init!();

    let args = Args::parse();
    let nodes: AdjacencyMatrix = read_matrix_from_file(&args.ifname)?;
    let (r, d) = run(args.algorithm, args.rounds, &nodes);
    let assignment = r.to_signed();

    finalize!(
        args,
        assignment,
        d,
        write_matching_to_file(&r, &args.ofname)?
    );
    println!("edges:  {}", r.len());
    Ok(())
}
