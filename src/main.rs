//! Command-line interface for freeformgen
//!
//! # Usage Examples
//!
//! ## Single values
//! ```bash
//! # One float in [0.5, 1.5)
//! freeformgen scalar float 0.5 1.5
//!
//! # Three to six ints in [-3, 0]
//! freeformgen vector int 3 6 -3 0
//!
//! # Two rows of one to four primitives
//! freeformgen matrix primitive 2 2 1 4
//! ```
//!
//! ## Trees
//! ```bash
//! # Array of exactly 5 slots
//! freeformgen array --length 5
//!
//! # Object with a random number of keys
//! freeformgen object
//! ```
//!
//! ## Fixtures
//! ```bash
//! freeformgen --seed 42 generate --schema fixtures.yaml --count 1000
//! ```
//!
//! Output is JSON on stdout, one document per line. Logs go to stderr and
//! are controlled with `RUST_LOG`.

use clap::{Parser, Subcommand};
use freeformgen::{
    make_rng, run_array, run_generate, run_matrix, run_object, run_scalar, run_value, run_vector,
    GenerateOpts, MatrixOpts, VectorOpts,
};
use std::io::Write;

#[derive(Parser)]
#[command(name = "freeformgen")]
#[command(about = "Generate constrained random values and fixture records as JSON")]
#[command(long_about = None)]
struct Cli {
    /// Seed for reproducible output (random when omitted)
    #[arg(long, global = true, env = "FREEFORMGEN_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one scalar of a kind
    #[command(allow_negative_numbers = true)]
    Scalar {
        /// Element kind (null, bool, primitive, int, float, string)
        kind: String,

        /// Kind arguments, as for `vector`
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Generate a vector of a kind
    #[command(allow_negative_numbers = true)]
    Vector(VectorOpts),

    /// Generate a matrix of a kind
    #[command(allow_negative_numbers = true)]
    Matrix(MatrixOpts),

    /// Generate an array of nested values
    #[command(allow_negative_numbers = true)]
    Array {
        /// Number of slots (negative for random)
        #[arg(long, default_value_t = -1)]
        length: i64,
    },

    /// Generate an object with unique keys
    #[command(allow_negative_numbers = true)]
    Object {
        /// Number of entries (negative for random)
        #[arg(long, default_value_t = -1)]
        length: i64,
    },

    /// Generate an array, object or primitive
    Value,

    /// Generate fixture records from a YAML schema
    Generate(GenerateOpts),
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays JSON
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut rng = make_rng(cli.seed);

    match cli.command {
        Commands::Scalar { kind, args } => run_scalar(&mut rng, &kind, &args, &mut out)?,
        Commands::Vector(opts) => run_vector(&mut rng, &opts, &mut out)?,
        Commands::Matrix(opts) => run_matrix(&mut rng, &opts, &mut out)?,
        Commands::Array { length } => run_array(&mut rng, length, &mut out)?,
        Commands::Object { length } => run_object(&mut rng, length, &mut out)?,
        Commands::Value => run_value(&mut rng, &mut out)?,
        // Seeds its own RNG, preferring the schema seed when --seed is absent
        Commands::Generate(opts) => run_generate(&opts, cli.seed, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
