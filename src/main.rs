//! Write a color file for every frame of an xyz trajectory.
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use xyzclr::{convert, ColorFiles, Config, Summary, XYZReader};

/// Write a color file for every frame of an xyz trajectory.
///
/// The fifth field of each atom line is read as a category: category 0 is colored pale yellow,
/// categories 1 and 3 red. Frame `n` of `traj.xyz` is written to `traj<n>.clr`, with `n` padded
/// to five digits, next to the trajectory.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input path (xyz).
    input: PathBuf,
}

fn main() {
    let args = Args::parse();

    // Progress goes to standard output. RUST_LOG may override the level.
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    match run(&args) {
        Ok(summary) => log::info!(
            "processed {} frames ({} atoms)",
            summary.frames,
            summary.atoms
        ),
        Err(err) => {
            // Errors go to stderr whatever RUST_LOG says.
            eprintln!("error: {}: {err}", args.input.display());
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> xyzclr::Result<Summary> {
    let mut reader = XYZReader::open(&args.input)?;
    let mut sink = ColorFiles::for_trajectory(&args.input);
    log::debug!("first color file: {}", sink.path(0).display());
    convert(&mut reader, &Config::default(), &mut sink)
}
