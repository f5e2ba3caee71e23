mod config;
mod records;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use config::Config;
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info};
use scramble_core::{Axis, Face, ROTATION_TABLES, reduce, verify_rotation_tables};

/// Rewrites cube scrambles with wide moves into single-layer moves only
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to `unwide/config.toml` in the user config directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a single scramble and print it.
    Reduce {
        /// The scramble to reduce, e.g. "Rw U2 Fw'".
        scramble: String,
    },
    /// Reduce every record of a file, one record per line.
    File {
        /// Lines of `id<delimiter>scramble` or bare scrambles
        input: PathBuf,
        /// Where to write the reduced records; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the rotation tables and print them.
    Check,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    verify_rotation_tables().wrap_err("Refusing to run with broken rotation tables")?;

    match cli.command {
        Commands::Reduce { scramble } => {
            println!("{}", reduce(&scramble));
        }
        Commands::File { input, output } => {
            let config = Config::load(cli.config.as_deref())?;
            run_file(&config, &input, output)?;
        }
        Commands::Check => {
            for axis in Axis::ALL {
                let table = ROTATION_TABLES.quarter_turn(axis);
                println!(
                    "{axis}: {}",
                    table.iter().map(|&position| Face::from_index(position)).join(" ")
                );
            }
            println!("Rotation tables OK");
        }
    }

    Ok(())
}

fn run_file(config: &Config, input: &Path, output: Option<PathBuf>) -> color_eyre::Result<()> {
    let start = Instant::now();

    let text = fs::read_to_string(input)
        .wrap_err_with(|| format!("Failed to read records from {}", input.display()))?;

    let reduced = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .wrap_err("Failed to build the worker pool")?
            .install(|| records::reduce_records(&text, config)),
        None => records::reduce_records(&text, config),
    };

    info!(
        "Reduced {} records from {} in {:.4}s",
        reduced.len(),
        input.display(),
        start.elapsed().as_secs_f64()
    );

    let reduced = reduced.join("\n");

    match output {
        Some(path) => fs::write(&path, reduced)
            .wrap_err_with(|| format!("Failed to write records to {}", path.display()))?,
        None => io::stdout().lock().write_all(reduced.as_bytes())?,
    }

    Ok(())
}
