//! `encode` and `decode` file commands.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use lzwin_core::{CompressionStats, Decompressor, WindowConfig};
use lzwin_lz77::{Lz77Codec, Lz77Decompressor};
use tracing::{debug, info};

use crate::error::CliResult;

/// Suffix appended to encoded files.
pub const ENCODED_SUFFIX: &str = ".encoded";

/// Suffix appended to decoded files whose name lacks [`ENCODED_SUFFIX`].
pub const DECODED_SUFFIX: &str = ".decoded";

/// Path an encoded copy of `path` is written to.
pub fn encoded_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(ENCODED_SUFFIX);
    PathBuf::from(name)
}

/// Path the decoded copy of `path` is written to.
///
/// `photo.jpg.encoded` becomes `photo.jpg`; anything else gains `.decoded`.
pub fn decoded_path_for(path: &Path) -> PathBuf {
    match path.to_str().and_then(|s| s.strip_suffix(ENCODED_SUFFIX)) {
        Some(stripped) if !stripped.is_empty() => PathBuf::from(stripped),
        _ => {
            let mut name = path.as_os_str().to_owned();
            name.push(DECODED_SUFFIX);
            PathBuf::from(name)
        }
    }
}

/// Encode `input` into `<input>.encoded`.
///
/// When `triples_out` is given every triple is written to it, one per line.
pub fn encode_file(
    input: &Path,
    window: WindowConfig,
    triples_out: Option<&mut dyn Write>,
) -> CliResult<(PathBuf, CompressionStats)> {
    let data = std::fs::read(input)?;
    let codec = Lz77Codec::with_window(window)?;

    let start = Instant::now();
    let message = codec.encode_message(&data)?;
    let elapsed = start.elapsed();

    if let Some(out) = triples_out {
        for triple in message.triples() {
            writeln!(out, "{}", triple)?;
        }
    }

    let output = encoded_path_for(input);
    let mut writer = BufWriter::new(File::create(&output)?);
    let written = message.write_to(&mut writer)?;
    writer.flush()?;

    let stats = CompressionStats::from_operation(data.len(), written, elapsed.as_micros() as u64)
        .with_triples(message.triple_count());
    info!(
        input = %input.display(),
        output = %output.display(),
        original = stats.original_size,
        encoded = stats.compressed_size,
        triples = message.triple_count(),
        "encoded file"
    );

    Ok((output, stats))
}

/// Decode an encoded file next to it (see [`decoded_path_for`]).
pub fn decode_file(input: &Path) -> CliResult<(PathBuf, CompressionStats)> {
    let bytes = std::fs::read(input)?;

    let start = Instant::now();
    let data = Lz77Decompressor::new().decompress(&bytes)?;
    let elapsed = start.elapsed();

    let output = decoded_path_for(input);
    debug!(output = %output.display(), "writing decoded file");
    std::fs::write(&output, &data)?;

    let stats =
        CompressionStats::from_operation(data.len(), bytes.len(), elapsed.as_micros() as u64);
    info!(
        input = %input.display(),
        output = %output.display(),
        decoded = stats.original_size,
        "decoded file"
    );

    Ok((output, stats))
}
