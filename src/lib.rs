// src/lib.rs

pub mod error;
pub mod generator;
pub mod geometry;

pub use error::GridError;
pub use generator::{polar_grid, GridSpec, PolarGridGenerator, SamplePlan};
pub use geometry::{GridResult, Point2, SectorRecord};
