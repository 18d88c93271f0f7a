// src/main.rs

mod config;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use config::{parse_centroid, Config, OutputFormat};
use polar_grid::{GridResult, PolarGridGenerator, Point2};

#[derive(Parser, Debug)]
#[command(name = "polar-grid")]
#[command(version, about = "Print the sector polygons of a polar grid")]
pub struct Args {
    /// TOML config file with [grid] and [output] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Radius of the grid
    #[arg(short, long)]
    radius: Option<f64>,

    /// Origin of the grid as X,Y
    #[arg(long, value_parser = parse_centroid, allow_hyphen_values = true)]
    centroid: Option<Point2>,

    /// Number of equal angular sectors
    #[arg(short, long)]
    sectors: Option<u32>,

    /// Number of perimeter samples over the full circle
    #[arg(short, long)]
    tau: Option<u32>,

    /// Concentric rings (reserved, no effect)
    #[arg(long)]
    rings: Option<u32>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

fn write_xy(out: &mut impl Write, grid: &GridResult) -> io::Result<()> {
    for (i, sector) in grid.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for p in sector.vertices() {
            writeln!(out, "{} {}", p.x, p.y)?;
        }
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, grid: &GridResult) -> io::Result<()> {
    for sector in grid {
        writeln!(
            out,
            "{}\t{}\t{:.6}",
            sector.id(),
            sector.vertices().len(),
            sector.area()
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .apply_args(&args);

    let grid = PolarGridGenerator::generate(&config.grid).context("generating polar grid")?;
    info!(
        "{} sectors, {} vertices each, area {:.6}",
        grid.len(),
        grid.vertex_count(),
        grid.total_area()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match config.output.format {
        OutputFormat::Xy => write_xy(&mut out, &grid)?,
        OutputFormat::Summary => write_summary(&mut out, &grid)?,
    }
    out.flush()?;

    Ok(())
}
