//! lzwin: sliding-window LZ77 file coder
//!
//! ## Usage
//!
//! ```bash
//! # Encode a file into photo.jpg.encoded
//! lzwin encode photo.jpg
//!
//! # Smaller windows, printing every triple
//! lzwin --window 4096 --lookahead 15 encode notes.txt --print-triples
//!
//! # Restore photo.jpg from the encoded copy
//! lzwin decode photo.jpg.encoded
//!
//! # Timing report with a random baseline and window sweeps
//! lzwin experiment a.txt b.bin --random-baseline --sweep
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lzwin_cli::experiment::{self, ExperimentOptions};
use lzwin_cli::{commands, CliConfig};

#[derive(Parser, Debug)]
#[command(name = "lzwin")]
#[command(version)]
#[command(about = "Sliding-window LZ77 file coder", long_about = None)]
struct Args {
    /// History window size in symbols
    #[arg(long, global = true)]
    window: Option<usize>,

    /// Lookahead window size in symbols
    #[arg(long, global = true)]
    lookahead: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a file into `<file>.encoded`
    Encode {
        file: PathBuf,

        /// Print every emitted triple
        #[arg(long)]
        print_triples: bool,
    },

    /// Decode a `.encoded` file
    Decode { file: PathBuf },

    /// Time encoding and decoding of each file and report ratios
    Experiment {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also measure random 7-bit data of the same length
        #[arg(long)]
        random_baseline: bool,

        /// Sweep lookahead and window sizes
        #[arg(long)]
        sweep: bool,

        /// Seed for the random baseline
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    }
    .with_overrides(args.window, args.lookahead, args.log_level.clone())?;

    // Initialize logging
    let level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(
        window = config.window.window_size,
        lookahead = config.window.lookahead_window_size,
        "lzwin starting"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Encode {
            file,
            print_triples,
        } => {
            let listing: Option<&mut dyn Write> = if print_triples {
                Some(&mut out)
            } else {
                None
            };
            let (output, stats) = commands::encode_file(&file, config.window, listing)?;
            writeln!(
                out,
                "{} -> {} ({} -> {} bytes, {:.3}%)",
                file.display(),
                output.display(),
                stats.original_size,
                stats.compressed_size,
                stats.ratio().percent()
            )?;
        }
        Command::Decode { file } => {
            let (output, stats) = commands::decode_file(&file)?;
            writeln!(
                out,
                "{} -> {} ({} bytes)",
                file.display(),
                output.display(),
                stats.original_size
            )?;
        }
        Command::Experiment {
            files,
            random_baseline,
            sweep,
            seed,
        } => {
            let inputs = files
                .iter()
                .map(|path| Ok((path.display().to_string(), std::fs::read(path)?)))
                .collect::<std::io::Result<Vec<_>>>()?;
            let options = ExperimentOptions {
                window: config.window,
                random_baseline,
                sweep,
            };
            let mut rng = StdRng::seed_from_u64(seed);
            experiment::run(&inputs, &options, &mut rng, &mut out)?;
        }
    }

    Ok(())
}
