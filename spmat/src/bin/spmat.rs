use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use spmat::{load_matrix_with, render, write_matrix, LoadOptions, SparseMatrix};

#[derive(Parser)]
#[command(author, version)]
#[command(about = "Sparse matrix operations over a line-oriented text format")]
struct Cli {
    /// Refuse to load matrices with more than this many non-zero entries
    #[arg(long, global = true)]
    max_entries: Option<usize>,

    /// Reject entries outside the declared dimensions
    #[arg(long, global = true)]
    strict_bounds: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a matrix and print it
    Show {
        /// Matrix file
        file: PathBuf,

        /// Print as JSON instead of the text format
        #[arg(long)]
        json: bool,
    },
    /// Add two matrices
    Add {
        lhs: PathBuf,
        rhs: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Subtract the second matrix from the first
    Subtract {
        lhs: PathBuf,
        rhs: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Multiply two matrices
    Multiply {
        lhs: PathBuf,
        rhs: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> spmat::Result<()> {
    let cli = Cli::parse();
    let mut options = LoadOptions::default().with_strict_bounds(cli.strict_bounds);
    if let Some(max_entries) = cli.max_entries {
        options = options.with_max_entries(max_entries);
    }

    match &cli.command {
        Commands::Show { file, json } => {
            let matrix = load_matrix_with(file, &options)?;
            if *json {
                println!("{}", spmat::to_json(&matrix)?);
            } else {
                print!("{}", render(&matrix));
            }
        }
        Commands::Add { lhs, rhs, output } => {
            let (a, b) = load_pair(lhs, rhs, &options)?;
            emit(&a.add(&b)?, output.as_deref())?;
        }
        Commands::Subtract { lhs, rhs, output } => {
            let (a, b) = load_pair(lhs, rhs, &options)?;
            emit(&a.subtract(&b)?, output.as_deref())?;
        }
        Commands::Multiply { lhs, rhs, output } => {
            let (a, b) = load_pair(lhs, rhs, &options)?;
            emit(&a.multiply(&b)?, output.as_deref())?;
        }
    }

    Ok(())
}

fn load_pair(
    lhs: &Path,
    rhs: &Path,
    options: &LoadOptions,
) -> spmat::Result<(SparseMatrix, SparseMatrix)> {
    Ok((
        load_matrix_with(lhs, options)?,
        load_matrix_with(rhs, options)?,
    ))
}

fn emit(matrix: &SparseMatrix, output: Option<&Path>) -> spmat::Result<()> {
    match output {
        Some(path) => write_matrix(path, matrix),
        None => {
            print!("{}", render(matrix));
            Ok(())
        }
    }
}
