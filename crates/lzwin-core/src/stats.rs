//! Statistics and metrics for coding operations.

use crate::types::CompressionRatio;

/// Statistics from a compression/decompression operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressionStats {
    /// Original (uncompressed) size in bytes.
    pub original_size: usize,

    /// Compressed size in bytes.
    pub compressed_size: usize,

    /// Time taken in microseconds.
    pub time_us: u64,

    /// Number of triples emitted or consumed, when known.
    pub triples: Option<usize>,
}

impl CompressionStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create stats from a completed operation.
    pub fn from_operation(original_size: usize, compressed_size: usize, time_us: u64) -> Self {
        CompressionStats {
            original_size,
            compressed_size,
            time_us,
            ..Default::default()
        }
    }

    /// Attach the triple count.
    pub fn with_triples(mut self, triples: usize) -> Self {
        self.triples = Some(triples);
        self
    }

    /// Get compression ratio.
    pub fn ratio(&self) -> CompressionRatio {
        CompressionRatio::new(self.original_size, self.compressed_size)
    }

    /// Get throughput in bytes per second.
    pub fn throughput_bps(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.original_size as f64 * 1_000_000.0 / self.time_us as f64
    }

    /// Get throughput in MB/s.
    pub fn throughput_mbs(&self) -> f64 {
        self.throughput_bps() / 1_000_000.0
    }

    /// Get elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.time_us as f64 / 1_000_000.0
    }
}

/// Metrics collector for aggregate statistics.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Total operations performed.
    pub total_operations: u64,

    /// Total bytes compressed.
    pub total_bytes_in: u64,

    /// Total bytes produced.
    pub total_bytes_out: u64,

    /// Total time spent in microseconds.
    pub total_time_us: u64,

    /// Number of errors encountered.
    pub error_count: u64,
}

impl Metrics {
    /// Create new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed operation.
    pub fn record(&mut self, stats: &CompressionStats) {
        self.total_operations += 1;
        self.total_bytes_in += stats.original_size as u64;
        self.total_bytes_out += stats.compressed_size as u64;
        self.total_time_us += stats.time_us;
    }

    /// Record an error.
    pub fn record_error(&mut self) {
        self.total_operations += 1;
        self.error_count += 1;
    }

    /// Get average compression ratio.
    pub fn average_ratio(&self) -> f64 {
        if self.total_bytes_out == 0 {
            return 1.0;
        }
        self.total_bytes_in as f64 / self.total_bytes_out as f64
    }

    /// Get average throughput in MB/s.
    pub fn average_throughput_mbs(&self) -> f64 {
        if self.total_time_us == 0 {
            return 0.0;
        }
        self.total_bytes_in as f64 / self.total_time_us as f64
    }

    /// Get error rate (0.0 to 1.0).
    pub fn error_rate(&self) -> f64 {
        if self.total_operations == 0 {
            return 0.0;
        }
        self.error_count as f64 / self.total_operations as f64
    }

    /// Get metrics summary as string.
    pub fn summary(&self) -> String {
        format!(
            "Operations: {}, Bytes: {} -> {} (ratio: {:.2}x), Throughput: {:.1} MB/s, Errors: {}",
            self.total_operations,
            self.total_bytes_in,
            self.total_bytes_out,
            self.average_ratio(),
            self.average_throughput_mbs(),
            self.error_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput() {
        let stats = CompressionStats::from_operation(2_000_000, 500_000, 1_000_000);
        assert_eq!(stats.throughput_mbs(), 2.0);
        assert_eq!(stats.seconds(), 1.0);
        assert_eq!(stats.ratio().ratio(), 4.0);
    }

    #[test]
    fn test_metrics_summary() {
        let mut metrics = Metrics::new();
        metrics.record(&CompressionStats::from_operation(100, 50, 10));
        metrics.record_error();

        assert_eq!(metrics.total_operations, 2);
        assert_eq!(metrics.average_ratio(), 2.0);
        assert_eq!(metrics.error_rate(), 0.5);
        assert!(metrics.summary().starts_with("Operations: 2, Bytes: 100 -> 50"));
    }
}
