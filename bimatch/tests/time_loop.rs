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

use std::time::Duration;
use bimatch::common::time_loop::{time_loop, Timer};


#[test]
fn runs_every_round() {
    let (mut inits, mut runs, mut ends) = (0, 0, 0);
    time_loop(
        "count",
        5,
        Duration::ZERO,
        || inits += 1,
        || runs += 1,
        || ends += 1,
    );
    // one warmup round plus five timed ones
    assert_eq!((inits, runs, ends), (6, 6, 6));
}

#[test]
fn zero_rounds() {
    assert_eq!(time_loop("none", 0, Duration::ZERO, || {}, || {}, || {}), Duration::ZERO);
}

#[test]
fn mean_is_per_round() {
    let mean = time_loop(
        "sleep",
        3,
        Duration::ZERO,
        || {},
        || std::thread::sleep(Duration::from_millis(1)),
        || {},
    );
    assert!(mean >= Duration::from_micros(900));
    assert!(mean < Duration::from_secs(1));
}

#[test]
fn timer_accumulates() {
    let mut t = Timer::new("t");
    assert_eq!(t.stop(), Duration::ZERO);
    t.start();
    std::thread::sleep(Duration::from_millis(2));
    let d = t.stop();
    assert!(d >= Duration::from_millis(2));
    assert_eq!(t.total_time(), d);
    t.reset();
    assert_eq!(t.total_time(), Duration::ZERO);
}
