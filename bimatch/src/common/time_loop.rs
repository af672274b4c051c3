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

use std::time::{Duration, Instant};
use log::info;

/// A timer that accumulates the time spent between `start` and `stop`.
pub struct Timer<'a> {
    total_so_far: Duration,
    last: Instant,
    on: bool,
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Self {
        Timer {
            total_so_far: Duration::ZERO,
            last: Instant::now(),
            on: false,
            name,
        }
    }

    pub fn start(&mut self) {
        self.on = true;
        self.last = Instant::now();
    }

    /// Stops the timer and returns the time since the last `start`.
    pub fn stop(&mut self) -> Duration {
        if !self.on { return Duration::ZERO; }
        self.on = false;
        let d = self.last.elapsed();
        self.total_so_far += d;
        d
    }

    pub fn reset(&mut self) {
        self.total_so_far = Duration::ZERO;
        self.on = false;
    }

    pub fn total_time(&self) -> Duration {
        if self.on { self.total_so_far + self.last.elapsed() }
        else { self.total_so_far }
    }

    pub fn name(&self) -> &str { self.name }
}

/// Repeats `init; run; end` until `warmup` has elapsed (at least once),
/// then times `run` for `rounds` rounds and returns the mean round time.
pub fn time_loop<I, R, E>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    mut init: I,
    mut run: R,
    mut end: E,
) -> Duration
where
    I: FnMut(),
    R: FnMut(),
    E: FnMut(),
{
    let w = Instant::now();
    loop {
        init(); run(); end();
        if w.elapsed() >= warmup { break; }
    }

    let mut t = Timer::new(name);
    for i in 0..rounds {
        init();
        t.start();
        run();
        let d = t.stop();
        end();
        info!("{}: round {i}:\t{:.6}", t.name(), d.as_secs_f64());
    }
    if rounds == 0 { return Duration::ZERO; }
    t.total_time().div_f64(rounds as f64)
}
