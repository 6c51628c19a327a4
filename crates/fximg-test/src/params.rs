//! Regression test parameters and operations

use crate::render_fximg;
use fximg_core::FxImage;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results with expected values (default)
    #[default]
    Compare,
    /// Compare, and also print every compared image
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognized means compare
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current check, the mode, and every failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "header")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Initializes logging (filtered by `RUST_LOG`) and reads the mode from
    /// `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
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

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two numeric values
    ///
    /// Returns `true` if they differ by at most `delta`.
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
            return self.fail(msg);
        }
        true
    }

    /// Compare two images frame by frame, pixel by pixel
    ///
    /// Images that fail validation never match. In display mode both images
    /// are printed.
    pub fn compare_fximg(&mut self, expected: &FxImage, actual: &FxImage) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("[{}] expected:\n{}", self.index, render_fximg(expected));
            eprintln!("[{}] actual:\n{}", self.index, render_fximg(actual));
        }

        let (e, a) = match (expected.geometry(), actual.geometry()) {
            (Ok(e), Ok(a)) => (e, a),
            (e, a) => {
                let msg = format!(
                    "Failure in {}_reg: fximg comparison for index {} - invalid image \
                     (expected: {:?}, actual: {:?})",
                    self.test_name,
                    self.index,
                    e.err(),
                    a.err()
                );
                return self.fail(msg);
            }
        };

        if e.width != a.width || e.height != a.height || e.frame_count != a.frame_count {
            let msg = format!(
                "Failure in {}_reg: fximg comparison for index {} - dimension mismatch \
                 {}x{}x{} vs {}x{}x{}",
                self.test_name,
                self.index,
                e.width,
                e.height,
                e.frame_count,
                a.width,
                a.height,
                a.frame_count
            );
            return self.fail(msg);
        }

        let mut want = vec![0u8; e.height as usize];
        let mut got = vec![0u8; a.height as usize];
        for column in 0..e.width * e.frame_count {
            if expected.get_column(column, &mut want).is_err()
                || actual.get_column(column, &mut got).is_err()
            {
                break;
            }
            if let Some(y) = want.iter().zip(&got).position(|(w, g)| w != g) {
                let msg = format!(
                    "Failure in {}_reg: fximg comparison for index {} - pixel mismatch at \
                     frame {} ({}, {}): expected {}, actual {}",
                    self.test_name,
                    self.index,
                    column / e.width,
                    column % e.width,
                    y,
                    want[y],
                    got[y]
                );
                return self.fail(msg);
            }
        }
        true
    }

    /// Compare two byte strings
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            return self.fail(msg);
        }
        true
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
