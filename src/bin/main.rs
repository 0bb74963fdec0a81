use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sparse_rows::data::linear_algebra::matrix::SparseMatrix;
use sparse_rows::data::linear_algebra::vector::SparseVector;
use sparse_rows::io::{write_dense, write_dense_matrix, write_stored, write_stored_matrix};

/// Demonstration of sparse vectors and matrices: builds a few, adds them and prints the results.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Which part of the demonstration to run
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    Vector,
    Matrix,
    All,
}

/// Writes of the first matrix, as `(value, row, column)`.
const MATRIX_WRITES: [(i32, usize, usize); 10] = [
    (5, 3, 6), (5, 3, 9), (-1, 3, 6), (3, 3, 6),
    (3, 1, 2), (3, 2, 2), (3, 3, 2), (3, 4, 2), (3, 5, 2),
    (7, 8, 2),
];

fn main() -> Result<()> {
    // Logging goes to stderr, stdout is reserved for the printed values (respects RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();
    info!(section = ?opts.section, "sparse-rows v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out, opts.section)?;
    out.flush().context("Failed to flush stdout")
}

fn run<W: Write>(out: &mut W, section: Section) -> Result<()> {
    if section != Section::Matrix {
        vectors(out).context("Failed to write the vector demonstration")?;
    }
    if section != Section::Vector {
        matrices(out).context("Failed to write the matrix demonstration")?;
    }

    Ok(())
}

fn vector(extra: &[(usize, i32)]) -> Result<SparseVector<i32>> {
    let mut vector = SparseVector::new(10);
    for &(index, value) in [(3, 5), (2, 2), (5, 7), (4, -1), (3, -2), (6, -2), (0, -2)].iter().chain(extra) {
        vector.set(index, value)?;
    }

    Ok(vector)
}

fn vectors<W: Write>(out: &mut W) -> Result<()> {
    let mut first = vector(&[])?;
    write_stored(out, &first)?;
    write_dense(out, &first)?;

    let second = vector(&[(9, -9)])?;
    write_stored(out, &second)?;
    write_dense(out, &second)?;

    first.add_into(&second)?;
    debug!(sum = %first, "added vectors");
    write_stored(out, &first)?;
    write_dense(out, &first)?;

    writeln!(out)?;

    Ok(())
}

fn matrices<W: Write>(out: &mut W) -> Result<()> {
    let mut first = SparseMatrix::new(10, 10);
    for (value, row, column) in MATRIX_WRITES {
        first.set(row, column, value)?;
    }
    write_dense_matrix(out, &first)?;
    write_stored_matrix(out, &first)?;
    writeln!(out, "slist2: ")?;

    let mut second = SparseMatrix::new(10, 10);
    second.set(0, 6, 33)?;
    for (value, row, column) in MATRIX_WRITES {
        second.set(row, column, value)?;
    }
    second.set(9, 2, 19)?;

    first.add_into(&second)?;
    debug!(sum = %first, "added matrices");
    write_dense_matrix(out, &first)?;
    write_stored_matrix(out, &first)?;

    Ok(())
}
