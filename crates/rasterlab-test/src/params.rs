//! Regression test parameters and operations

use rasterlab_core::Raster;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results against expectations (default)
    #[default]
    Compare,
    /// Display mode - run and report without failing the test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, a running
/// comparison index, the mode, and the recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode.
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values.
    ///
    /// Returns `true` if the values match within `delta`; otherwise
    /// records a failure and returns `false`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality of shape and samples.
    pub fn compare_rasters(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.index += 1;

        let shape_ok = expected.sizes_equal(actual);
        let data_ok = shape_ok && expected.data() == actual.data();
        if !data_ok {
            let msg = if shape_ok {
                format!(
                    "Failure in {}_reg: raster data mismatch for index {}",
                    self.test_name, self.index
                )
            } else {
                format!(
                    "Failure in {}_reg: raster shape mismatch for index {}: \
                     expected {}x{}x{}, got {}x{}x{}",
                    self.test_name,
                    self.index,
                    expected.width(),
                    expected.height(),
                    expected.channels().count(),
                    actual.width(),
                    actual.height(),
                    actual.channels().count()
                )
            };
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Finish the test and report the outcome.
    ///
    /// Returns the overall success status; in display mode failures are
    /// reported but do not fail the run.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} comparisons)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} comparisons failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success || self.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::{Channels, Raster};

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params_selftest");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert_eq!(rp.index(), 3);
        assert!(!rp.cleanup() || rp.display());
    }

    #[test]
    fn test_compare_rasters() {
        let mut rp = RegParams::new("params_selftest");
        let a = Raster::from_vec(2, 1, Channels::Gray, vec![1, 2]).unwrap();
        let b = a.deep_clone();
        let c = Raster::from_vec(2, 1, Channels::Gray, vec![1, 3]).unwrap();
        let d = Raster::new(1, 2, Channels::Gray).unwrap();

        assert!(rp.compare_rasters(&a, &b));
        assert!(!rp.compare_rasters(&a, &c));
        assert!(!rp.compare_rasters(&a, &d));
    }
}
