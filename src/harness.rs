use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};

use crate::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Classical,
    Strassen,
}

impl Algorithm {
    pub fn default_output(&self) -> &'static str {
        match self {
            Algorithm::Classical => "StandardTimes.csv",
            Algorithm::Strassen => "StrassenTimes.csv",
        }
    }
}

/// One benchmark run: which multiplier, which sizes, where the timings go.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub output: PathBuf,
    pub algorithm: Algorithm,
}

impl BenchConfig {
    /// Sizes 2^0 through 2^max_exp inclusive, appended to the algorithm's
    /// default CSV file.
    pub fn powers_of_two(algorithm: Algorithm, max_exp: u32) -> Self {
        BenchConfig {
            sizes: (0..=max_exp).map(|e| 1usize << e).collect(),
            output: PathBuf::from(algorithm.default_output()),
            algorithm,
        }
    }

    /// Times one multiplication per size and appends `<n>, <millis>` lines to
    /// the CSV. Failures are logged and skipped; the run never aborts.
    pub fn run(&self) {
        for &n in &self.sizes {
            let a = Matrix::random(n, n, 0, 10);
            let b = Matrix::random(n, n, 0, 10);

            let start = Instant::now();
            let result = match self.algorithm {
                Algorithm::Classical => a.multiply(&b),
                Algorithm::Strassen => a.strassen_multiply(&b),
            };
            let elapsed = start.elapsed();

            if let Err(err) = result {
                warn!("skipping n = {n}: {err}");
                continue;
            }
            info!(
                "{:?} n = {} took {} ms",
                self.algorithm,
                n,
                elapsed.as_millis()
            );
            if let Err(err) = self.record(n, elapsed.as_millis()) {
                warn!("failed to record timing for n = {n}: {err}");
            }
        }
    }

    fn record(&self, n: usize, millis: u128) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output)?;
        writeln!(file, "{}, {}", n, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_two_covers_full_range() {
        let config = BenchConfig::powers_of_two(Algorithm::Classical, 11);
        assert_eq!(config.sizes.first(), Some(&1));
        assert_eq!(config.sizes.last(), Some(&2048));
        assert_eq!(config.sizes.len(), 12);
        assert_eq!(config.output, PathBuf::from("StandardTimes.csv"));
    }

    #[test]
    fn record_appends_csv_lines() {
        let dir = std::env::temp_dir().join("matmult-harness-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("times.csv");
        let _ = std::fs::remove_file(&path);

        let config = BenchConfig {
            sizes: vec![],
            output: path.clone(),
            algorithm: Algorithm::Strassen,
        };
        config.record(4, 12).unwrap();
        config.record(8, 90).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "4, 12\n8, 90\n");
        let _ = std::fs::remove_file(&path);
    }
}
