//! Timing and compression-ratio experiments.
//!
//! Mirrors the measurements used to tune the coder: per-input encode and
//! decode times with the resulting ratio, an unstructured baseline of the same
//! length, and ratio sweeps over the lookahead and history windows.

use std::io::Write;
use std::time::{Duration, Instant};

use lzwin_core::{CompressionRatio, CompressionStats, Metrics, WindowConfig};
use lzwin_lz77::{decode, encode, CodedMessage};
use rand::Rng;
use tracing::{debug, warn};

use crate::error::CliResult;

/// Lookahead sizes swept at a fixed window: 2^3 ..= 2^11.
pub const LOOKAHEAD_SWEEP_EXPONENTS: std::ops::RangeInclusive<u32> = 3..=11;

/// Window sizes swept at a fixed lookahead: 2^18 ..= 2^25.
pub const WINDOW_SWEEP_EXPONENTS: std::ops::RangeInclusive<u32> = 18..=25;

/// Run `f` and measure how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// `size` symbols drawn uniformly from 0..128.
pub fn random_symbols<R: Rng>(rng: &mut R, size: usize) -> Vec<u8> {
    (0..size).map(|_| rng.gen_range(0..128u8)).collect()
}

/// One row of the timing report.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub label: String,
    pub encode_time: Duration,
    pub decode_time: Duration,
    pub ratio: CompressionRatio,
    pub triples: usize,
}

impl Measurement {
    /// Stats for the encode half of the measurement.
    pub fn encode_stats(&self) -> CompressionStats {
        CompressionStats::from_operation(
            self.ratio.original_size,
            self.ratio.compressed_size,
            self.encode_time.as_micros() as u64,
        )
        .with_triples(self.triples)
    }
}

/// Encode and decode `data`, checking the round trip.
pub fn measure(
    label: impl Into<String>,
    data: &[u8],
    window: &WindowConfig,
) -> CliResult<Measurement> {
    let label = label.into();

    let (triples, encode_time) = timed(|| encode(data, window));
    let message = CodedMessage::new(triples?);

    let (decoded, decode_time) = timed(|| decode(message.triples()));
    if decoded? != data {
        warn!(label = %label, "round trip mismatch");
        return Err(crate::error::CliError::Usage(format!(
            "{}: decoded output differs from input",
            label
        )));
    }

    debug!(label = %label, triples = message.triple_count(), "measured");
    Ok(Measurement {
        label,
        encode_time,
        decode_time,
        ratio: CompressionRatio::new(data.len(), message.encoded_size()),
        triples: message.triple_count(),
    })
}

/// Ratio at each lookahead `2^L` for `L` in [`LOOKAHEAD_SWEEP_EXPONENTS`].
pub fn lookahead_sweep(
    data: &[u8],
    window_size: usize,
) -> CliResult<Vec<(usize, CompressionRatio)>> {
    LOOKAHEAD_SWEEP_EXPONENTS
        .map(|exp| {
            let lookahead = 1usize << exp;
            let window = WindowConfig::new(window_size, lookahead);
            let message = CodedMessage::new(encode(data, &window)?);
            Ok((lookahead, CompressionRatio::new(data.len(), message.encoded_size())))
        })
        .collect()
}

/// Ratio at each window `2^W` for `W` in [`WINDOW_SWEEP_EXPONENTS`].
pub fn window_sweep(data: &[u8], lookahead: usize) -> CliResult<Vec<(usize, CompressionRatio)>> {
    WINDOW_SWEEP_EXPONENTS
        .map(|exp| {
            let window_size = 1usize << exp;
            let window = WindowConfig::new(window_size, lookahead);
            let message = CodedMessage::new(encode(data, &window)?);
            Ok((window_size, CompressionRatio::new(data.len(), message.encoded_size())))
        })
        .collect()
}

/// Write one timing row.
pub fn write_measurement(out: &mut dyn Write, m: &Measurement) -> std::io::Result<()> {
    writeln!(out, "------------ For {}", m.label)?;
    writeln!(out, "Encoded in {:.3} seconds", m.encode_time.as_secs_f64())?;
    writeln!(out, "Decoded in {:.6} seconds", m.decode_time.as_secs_f64())?;
    writeln!(
        out,
        "Before compression {} bytes, after compression {} bytes. Compression ratio {:.3}",
        m.ratio.original_size,
        m.ratio.compressed_size,
        m.ratio.percent()
    )?;
    writeln!(out, "Saved {} bytes ({:.1}%)", m.ratio.bytes_saved(), m.ratio.savings_percent())
}

/// Write a sweep table.
pub fn write_sweep(
    out: &mut dyn Write,
    parameter: &str,
    rows: &[(usize, CompressionRatio)],
) -> std::io::Result<()> {
    for (value, ratio) in rows {
        writeln!(out, "{}: {} Compression: {:.3}", parameter, value, ratio.percent())?;
    }
    Ok(())
}

/// Options for [`run`].
#[derive(Debug, Clone, Default)]
pub struct ExperimentOptions {
    pub window: WindowConfig,
    pub random_baseline: bool,
    pub sweep: bool,
}

/// Measure every input, print a report, and return the aggregate metrics.
pub fn run<R: Rng>(
    inputs: &[(String, Vec<u8>)],
    options: &ExperimentOptions,
    rng: &mut R,
    out: &mut dyn Write,
) -> CliResult<Metrics> {
    let mut metrics = Metrics::new();

    for (label, data) in inputs {
        let mut record = |result: CliResult<Measurement>| -> CliResult<()> {
            match result {
                Ok(m) => {
                    metrics.record(&m.encode_stats());
                    write_measurement(out, &m)?;
                }
                Err(e) => {
                    metrics.record_error();
                    warn!(error = %e, "experiment failed");
                }
            }
            Ok(())
        };

        record(measure(label.as_str(), data, &options.window))?;

        if options.random_baseline {
            let unstructured = random_symbols(rng, data.len());
            record(measure(
                format!("{} - unstructured", data.len()),
                &unstructured,
                &options.window,
            ))?;
        }

        if options.sweep {
            writeln!(out, "-------- {} (fixed W: {})", label, options.window.window_size)?;
            let rows = lookahead_sweep(data, options.window.window_size)?;
            write_sweep(out, "L", &rows)?;

            writeln!(
                out,
                "-------- {} (fixed L: {})",
                label, options.window.lookahead_window_size
            )?;
            let rows = window_sweep(data, options.window.lookahead_window_size)?;
            write_sweep(out, "W", &rows)?;
        }
    }

    writeln!(out, "{}", metrics.summary())?;
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_symbols_are_seven_bit() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = random_symbols(&mut rng, 1000);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&b| b < 128));
    }

    #[test]
    fn test_measure_reports_container_size() {
        let data: Vec<u8> = b"abcd".iter().cycle().take(400).copied().collect();
        let m = measure("abcd", &data, &WindowConfig::default()).unwrap();
        assert_eq!(m.ratio.original_size, 400);
        assert_eq!(m.ratio.compressed_size, 24 + 7 * m.triples);
        assert!(m.ratio.percent() > 100.0);
        assert!(m.ratio.bytes_saved() > 0);

        let mut out: Vec<u8> = Vec::new();
        write_measurement(&mut out, &m).unwrap();
        let row = String::from_utf8(out).unwrap();
        assert!(row.contains(&format!("Saved {} bytes", m.ratio.bytes_saved())));
    }

    #[test]
    fn test_lookahead_sweep_covers_range() {
        let data = vec![b'z'; 64];
        let rows = lookahead_sweep(&data, 65535).unwrap();
        let lookaheads: Vec<usize> = rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(lookaheads, vec![8, 16, 32, 64, 128, 256, 512, 1024, 2048]);
    }

    #[test]
    fn test_window_sweep_covers_range() {
        let rows = window_sweep(b"short input", 255).unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].0, 1 << 18);
        assert_eq!(rows[7].0, 1 << 25);
    }

    #[test]
    fn test_run_report() {
        let inputs = vec![("sample".to_string(), b"to be or not to be".to_vec())];
        let options = ExperimentOptions {
            random_baseline: true,
            sweep: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut out: Vec<u8> = Vec::new();

        let metrics = run(&inputs, &options, &mut rng, &mut out).unwrap();
        assert_eq!(metrics.total_operations, 2);
        assert_eq!(metrics.error_count, 0);

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("------------ For sample"));
        assert!(report.contains("------------ For 18 - unstructured"));
        assert!(report.contains("Saved -"));
        assert!(report.contains("L: 2048 Compression:"));
        assert!(report.contains("W: 33554432 Compression:"));
        assert!(report.ends_with(&format!("{}\n", metrics.summary())));
    }
}
