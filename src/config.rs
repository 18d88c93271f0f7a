// src/config.rs

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use polar_grid::{GridSpec, Point2};

use crate::Args;

/// What the binary prints for a generated grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, ValueEnum, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xy,      // One "x y" line per vertex, blank line between sectors
    Summary, // One line per sector
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub grid: GridSpec,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Command-line values win over whatever the file set.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(radius) = args.radius {
            self.grid.radius = radius;
        }
        if let Some(centroid) = args.centroid {
            self.grid.centroid = centroid;
        }
        if let Some(sectors) = args.sectors {
            self.grid.sector_count = sectors;
        }
        if let Some(tau) = args.tau {
            self.grid.sample_frequency = tau;
        }
        if let Some(rings) = args.rings {
            self.grid.rings = rings;
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        self
    }
}

/// Parses `X,Y` into a point.
pub fn parse_centroid(s: &str) -> Result<Point2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("not a valid number: {}", x.trim()))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("not a valid number: {}", y.trim()))?;
    Ok(Point2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid.sector_count, 4);
        assert_eq!(config.grid.sample_frequency, 4000);
        assert_eq!(config.output.format, OutputFormat::Xy);
    }

    #[test]
    fn partial_grid_table() {
        let config = Config::parse(
            r#"
            [grid]
            radius = 3.0
            sector_count = 8
            centroid = { x = -2.0, y = 1.0 }

            [output]
            format = "summary"
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.radius, 3.0);
        assert_eq!(config.grid.sector_count, 8);
        assert_eq!(config.grid.centroid, Point2::new(-2.0, 1.0));
        assert_eq!(config.grid.sample_frequency, 4000);
        assert_eq!(config.output.format, OutputFormat::Summary);
    }

    #[test]
    fn missing_file_reports_reading_context() {
        let path = std::env::temp_dir().join("polar-grid-no-such-dir/config.toml");
        let err = Config::load(&path).unwrap_err();
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert!(chain[0].starts_with("reading config"));
        assert!(chain[0].contains("config.toml"));
        assert!(chain.len() > 1);
    }

    #[test]
    fn malformed_file_reports_parsing_context() {
        let path = std::env::temp_dir().join(format!("polar-grid-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[grid]\nradius = \"wide\"").unwrap();
        let err = Config::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().starts_with("parsing config"));
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(Config::parse("[output]\nformat = \"svg\"").is_err());
    }

    #[test]
    fn args_override_file_values() {
        let args = Args {
            config: None,
            radius: Some(2.5),
            centroid: None,
            sectors: Some(6),
            tau: None,
            rings: None,
            format: Some(OutputFormat::Summary),
        };
        let config = Config::parse("[grid]\nradius = 9.0\nsample_frequency = 600")
            .unwrap()
            .apply_args(&args);
        assert_eq!(config.grid.radius, 2.5);
        assert_eq!(config.grid.sector_count, 6);
        assert_eq!(config.grid.sample_frequency, 600);
        assert_eq!(config.output.format, OutputFormat::Summary);
    }

    #[test]
    fn centroid_parsing() {
        assert_eq!(parse_centroid("-2, 1.5"), Ok(Point2::new(-2.0, 1.5)));
        assert!(parse_centroid("3").is_err());
        assert!(parse_centroid("a,1").is_err());
    }
}
