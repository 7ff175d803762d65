//! Numbered comparisons for regression tests
//!
//! Every `compare_*`/`check` call gets the next index. A mismatch is
//! printed immediately and remembered, and the test keeps going so one run
//! reports every broken check rather than only the first.

use rotopix_core::{CHANNELS, PixelBuffer};

/// State of one regression test run
pub struct RegParams {
    /// Short test name, printed as `<name>_reg`
    pub test_name: String,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a regression test named `test_name` (e.g. "ppmio").
    pub fn new(test_name: &str) -> Self {
        eprintln!("---- {test_name}_reg ----");
        Self {
            test_name: test_name.to_string(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Index of the most recent check (0 before the first).
    pub fn index(&self) -> usize {
        self.index
    }

    fn record(&mut self, ok: bool, detail: impl FnOnce() -> String) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!("{}_reg #{}: {}", self.test_name, self.index, detail());
            eprintln!("{msg}");
            self.failures.push(msg);
        }
        ok
    }

    /// Check a condition, describing it as `what` on failure.
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.record(ok, || format!("check failed: {what}"))
    }

    /// Compare two values within `delta`. NaN on either side never matches.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.record(diff <= delta, || {
            format!("expected {expected}, got {actual} (|diff| {diff} > {delta})")
        })
    }

    /// Compare two buffers for identical size and pixels.
    ///
    /// On a pixel mismatch the first differing pixel is reported as
    /// `(x, y)` with both RGBA values.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        if !expected.sizes_equal(actual) {
            return self.record(false, || {
                format!(
                    "buffer size {}x{} != {}x{}",
                    expected.width(),
                    expected.height(),
                    actual.width(),
                    actual.height()
                )
            });
        }

        let first_diff = expected
            .data()
            .chunks_exact(CHANNELS)
            .zip(actual.data().chunks_exact(CHANNELS))
            .position(|(a, b)| a != b);
        let width = expected.width() as usize;
        self.record(first_diff.is_none(), || match first_diff {
            Some(p) => format!(
                "pixel ({}, {}) differs: {:?} != {:?}",
                p % width,
                p / width,
                expected.pixel(p),
                actual.pixel(p)
            ),
            None => String::new(),
        })
    }

    /// Compare two byte strings.
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.record(expected == actual, || {
            format!(
                "bytes differ ({} vs {} long)\n  expected {:?}\n  actual   {:?}",
                expected.len(),
                actual.len(),
                String::from_utf8_lossy(expected),
                String::from_utf8_lossy(actual)
            )
        })
    }

    /// Print the summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("{}_reg: {} checks passed", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "{}_reg: {} of {} checks failed",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {failure}");
        }
        false
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
