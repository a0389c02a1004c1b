//! CSD command line interface.
//!
//! Converts values between decimal and CSD form, finds repeated digit
//! patterns, and emits Verilog constant-multiplier modules.

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use csd::{
    decode, encode, encode_int, encode_nnz, encode_nnz_int, generate_multiplier,
    longest_repeated_substring,
};

#[derive(Parser)]
#[command(name = "csd")]
#[command(about = "Canonical Signed Digit conversion", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a decimal value with a fixed number of fractional places
    Encode {
        /// Decimal value to encode
        value: f64,

        /// Number of fractional places
        #[arg(short, long, default_value = "4")]
        places: u32,
    },

    /// Encode an integer
    EncodeInt {
        /// Integer to encode
        value: i32,
    },

    /// Encode a decimal value using at most `nnz` non-zero digits
    EncodeNnz {
        /// Decimal value to encode
        value: f64,

        /// Maximum number of non-zero digits
        #[arg(short, long, default_value = "4")]
        nnz: u32,
    },

    /// Encode an integer using at most `nnz` non-zero digits
    EncodeNnzInt {
        /// Integer to encode
        value: i32,

        /// Maximum number of non-zero digits
        #[arg(short, long, default_value = "4")]
        nnz: u32,
    },

    /// Decode a CSD string back to a decimal value
    Decode {
        /// CSD string over +, -, 0 and at most one '.'
        csd: String,
    },

    /// Find the longest repeated non-overlapping digit pattern
    Pattern {
        /// String to scan (typically a CSD string)
        text: String,
    },

    /// Generate a Verilog constant-multiplier module
    Verilog {
        /// Separator-free CSD string over +, -, 0
        csd: String,

        /// Input bit width
        #[arg(short, long, default_value = "8")]
        width: usize,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode { value, places } => {
            debug!(value, places, "fixed-place encode");
            let csd = encode(value, places).context("cannot encode value")?;
            println!("{csd}");
        }
        Commands::EncodeInt { value } => {
            debug!(value, "integer encode");
            println!("{}", encode_int(value));
        }
        Commands::EncodeNnz { value, nnz } => {
            debug!(value, nnz, "budgeted encode");
            let csd = encode_nnz(value, nnz).context("cannot encode value")?;
            println!("{csd}");
        }
        Commands::EncodeNnzInt { value, nnz } => {
            debug!(value, nnz, "budgeted integer encode");
            println!("{}", encode_nnz_int(value, nnz));
        }
        Commands::Decode { csd } => {
            let value = decode(&csd).context("cannot decode CSD string")?;
            println!("{value}");
        }
        Commands::Pattern { text } => {
            println!("{}", longest_repeated_substring(&text));
        }
        Commands::Verilog { csd, width } => {
            ensure!(width > 0, "input width must be at least 1");
            let highest_power = csd.chars().count().saturating_sub(1);
            debug!(%csd, width, highest_power, "verilog generation");
            let module = generate_multiplier(&csd, width, highest_power)
                .context("cannot generate multiplier")?;
            print!("{module}");
        }
    }

    Ok(())
}
