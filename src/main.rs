use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ellconv::{GraphDocument, MatrixMarketIO};

/// Converter from matrix-market format files to graph JSON files
#[derive(Parser)]
#[command(name = "ellconv", version)]
struct Cli {
    /// Input matrix file
    #[arg(short = 'm', long = "matrixfile")]
    matrixfile: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    log::info!("reading matrix file: {}", cli.matrixfile.display());
    let matrix = MatrixMarketIO::read_path(&cli.matrixfile)
        .with_context(|| format!("failed to load {}", cli.matrixfile.display()))?;

    log::info!("found {} edges", matrix.nonzero_count());
    // the number of vertices is the max of the height/width
    let vertices = matrix.n_rows().max(matrix.n_cols());
    log::info!("found {} vertices", vertices);

    log::info!("writing json...");
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    GraphDocument::from_store(&matrix).write_json(&mut out)?;
    writeln!(out)?;
    out.flush()?;

    log::info!("finished");
    Ok(())
}
